// ============================================================================
// File: tests/resolution.rs
// ----------------------------------------------------------------------------
// End-to-end cache directory resolution through the public API
// ============================================================================

use assert_fs::prelude::*;
use cache_locator::storage::api;
use cache_locator::{
    CacheLocator, FallbackReason, HostEnvironment, LocatorConfig, Placement, StaticEnvironment,
    StorageEnvironment,
};
use predicates::prelude::*;

fn write_env(temp: &assert_fs::TempDir, mount_state: &str) -> anyhow::Result<StaticEnvironment> {
    let sdcard = temp.child("sdcard");
    sdcard.create_dir_all()?;
    let internal = temp.child("data/com.example.app/cache");
    internal.create_dir_all()?;

    let env_file = temp.child("env.json");
    env_file.write_str(
        &serde_json::json!({
            "mount_state": mount_state,
            "removable_root": sdcard.path(),
            "package_id": "com.example.app",
            "internal_cache_root": internal.path(),
        })
        .to_string(),
    )?;

    Ok(StaticEnvironment::from_json_file(env_file.path())?)
}

#[test]
fn mounted_environment_from_file_uses_external_layout() -> anyhow::Result<()> {
    let temp = assert_fs::TempDir::new()?;
    let env = write_env(&temp, "mounted")?;

    let dir = api::cache_directory(&env);

    let cache = temp.child("sdcard/Android/data/com.example.app/cache");
    assert_eq!(dir.path(), cache.path());
    assert_eq!(dir.placement(), Placement::External);
    cache.assert(predicate::path::is_dir());
    cache.child(".nomedia").assert(predicate::path::is_file());

    let images = api::default_individual_cache_directory(&env);
    assert_eq!(images.path(), cache.child("uil-images").path());
    cache.child("uil-images").assert(predicate::path::is_dir());

    Ok(())
}

#[test]
fn unmounted_environment_from_file_uses_internal_root() -> anyhow::Result<()> {
    let temp = assert_fs::TempDir::new()?;
    let env = write_env(&temp, "unmounted")?;

    let dir = api::cache_directory(&env);
    let own = api::own_cache_directory(&env, "AppDir/cache/images");

    assert_eq!(dir.path(), env.internal_cache_root());
    assert_eq!(own.path(), env.internal_cache_root());
    assert_eq!(own.fallback(), Some(FallbackReason::MountUnavailable));
    temp.child("sdcard/Android").assert(predicate::path::missing());
    temp.child("sdcard/AppDir").assert(predicate::path::missing());

    Ok(())
}

#[test]
fn own_cache_directory_on_mounted_storage() -> anyhow::Result<()> {
    let temp = assert_fs::TempDir::new()?;
    let env = write_env(&temp, "mounted")?;

    let own = api::own_cache_directory(&env, "AppDir/cache/images");

    let expected = temp.child("sdcard/AppDir/cache/images");
    assert_eq!(own.path(), expected.path());
    expected.assert(predicate::path::is_dir());
    expected.child(".nomedia").assert(predicate::path::missing());

    Ok(())
}

#[test]
fn host_environment_with_custom_layout() -> anyhow::Result<()> {
    let temp = assert_fs::TempDir::new()?;
    let usb = temp.child("usb");
    usb.create_dir_all()?;
    let internal = temp.child("internal");

    let env = HostEnvironment::new("org.example.viewer")
        .with_removable_root(usb.path())
        .with_internal_cache_root(internal.path());
    let locator = CacheLocator::new(
        LocatorConfig::new()
            .with_external_data_segments(["apps"])
            .with_marker_file_name(None),
    );

    let dir = locator.cache_directory(&env);

    let expected = usb.child("apps/org.example.viewer/cache");
    assert_eq!(dir.path(), expected.path());
    expected.child(".nomedia").assert(predicate::path::missing());

    // storage pulled out from under the environment
    let gone = HostEnvironment::new("org.example.viewer")
        .with_removable_root(temp.child("ejected").path())
        .with_internal_cache_root(internal.path());
    let fallback = locator.cache_directory(&gone);
    assert_eq!(fallback.path(), internal.path());
    assert_eq!(fallback.fallback(), Some(FallbackReason::MountUnavailable));

    Ok(())
}
