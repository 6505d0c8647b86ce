// ============================================================================
// File: tests/listener.rs
// ----------------------------------------------------------------------------
// Listener contract driven through the public API
// ============================================================================

use std::sync::Arc;

use cache_locator::{AsyncOutcome, ChannelListener, FetchError, ResponseListener, spawn_request};

#[tokio::test]
async fn one_listener_multiplexes_requests_by_code() -> anyhow::Result<()> {
    let (listener, mut rx) = ChannelListener::<FetchError>::new();
    let listener: Arc<dyn ResponseListener> = Arc::new(listener);

    let feed = spawn_request(
        listener.clone(),
        100,
        async { Ok("[1,2,3]".to_string()) },
        |body| Ok(body.trim().to_string()),
    );
    let profile = spawn_request(
        listener.clone(),
        200,
        async { Err(FetchError::Server { status: 404 }) },
        |body| Ok(body),
    );

    feed.await?;
    profile.await?;

    let mut outcomes = vec![
        rx.recv().await.expect("Missing first outcome"),
        rx.recv().await.expect("Missing second outcome"),
    ];
    outcomes.sort_by_key(AsyncOutcome::request_code);

    assert_eq!(
        outcomes,
        vec![
            AsyncOutcome::Success {
                payload: "[1,2,3]".to_string(),
                request_code: 100,
            },
            AsyncOutcome::Error {
                cause: FetchError::Server { status: 404 },
                request_code: 200,
            },
        ]
    );
    assert!(rx.try_recv().is_err());

    Ok(())
}
