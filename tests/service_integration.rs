//! Integration tests for the lookup service against a stub flatpak binary.
//!
//! These exercise the full stack, from process spawning and output capture
//! through the listing cache and parsers up to the orchestration policy,
//! with the external tool replaced by a deterministic shell script.

#![cfg(unix)]

mod common;

use std::time::Duration;

use flatpak_remote::flatpak::FlatpakCli;
use flatpak_remote::{Pacing, RemoteInfoService};

fn service_for(stub: &std::path::Path) -> RemoteInfoService {
    let cli = FlatpakCli::with_command(stub.to_string_lossy().into_owned())
        .with_timeout(Duration::from_secs(10));
    RemoteInfoService::with_commands(Box::new(cli)).with_pacing(Pacing {
        metadata_delay: Duration::ZERO,
        retry_delay: Duration::ZERO,
    })
}

#[test]
fn test_list_quick_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let stub = common::write_flatpak_stub(dir.path());

    let refs = service_for(&stub).list_quick("flathub");

    assert_eq!(refs.len(), 3);
    assert_eq!(refs[0].identity.id, "org.gnome.Recipes");
    assert_eq!(refs[0].short_commit.as_deref(), Some("abc123"));
    assert!(refs[1].end_of_life);
    assert_eq!(refs[1].end_of_life_message.as_deref(), Some("Deprecated"));
    assert_eq!(refs[2].identity.arch, "aarch64");
}

#[test]
fn test_find_full_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let stub = common::write_flatpak_stub(dir.path());

    let info = service_for(&stub)
        .find_full("flathub", "x86_64", "org.gnome.Recipes")
        .expect("listed ref must resolve");

    assert_eq!(info.identity.r#ref, "app/org.gnome.Recipes/x86_64/stable");
    assert_eq!(info.commit.as_deref(), Some(common::STUB_COMMIT));
    assert_eq!(info.collection_id.as_deref(), Some("org.flathub.Stable"));

    // Two history entries, linked and carrying the owner's identity.
    assert_eq!(info.history.len(), 2);
    assert_eq!(
        info.history[0].parent_commit.as_deref(),
        info.history[1].commit.as_deref()
    );
    assert!(info.history[1].parent_commit.is_none());
    assert_eq!(info.history[0].identity.id, "org.gnome.Recipes");
    assert_eq!(
        info.history[0].collection_id.as_deref(),
        Some("org.flathub.Stable")
    );

    // Metadata is attached verbatim.
    let metadata = info.metadata.as_deref().unwrap();
    assert!(metadata.starts_with("[Application]\n"));
    assert!(metadata.contains("name=org.gnome.Recipes"));
}

#[test]
fn test_find_full_absent_for_unlisted_ref() {
    let dir = tempfile::tempdir().unwrap();
    let stub = common::write_flatpak_stub(dir.path());

    let found = service_for(&stub).find_full("flathub", "x86_64", "org.not.Listed");
    assert!(found.is_none());
}

#[test]
fn test_arch_must_match_the_listing() {
    let dir = tempfile::tempdir().unwrap();
    let stub = common::write_flatpak_stub(dir.path());

    // org.gnome.Platform is only listed for aarch64.
    let service = service_for(&stub);
    assert!(service
        .find_quick("flathub", "x86_64", "org.gnome.Platform")
        .is_none());
    assert!(service
        .find_quick("flathub", "aarch64", "org.gnome.Platform")
        .is_some());
}

#[test]
fn test_broken_tool_collapses_to_empty_results() {
    let dir = tempfile::tempdir().unwrap();
    let stub = common::write_failing_stub(dir.path());

    let service = service_for(&stub);
    assert!(service.list_quick("flathub").is_empty());
    assert!(service
        .find_full("flathub", "x86_64", "org.gnome.Recipes")
        .is_none());
    assert!(service
        .fetch_metadata("flathub", "x86_64", "org.gnome.Recipes")
        .is_none());
}

#[test]
fn test_fetch_metadata_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let stub = common::write_flatpak_stub(dir.path());

    let metadata = service_for(&stub)
        .fetch_metadata("flathub", "x86_64", "org.gnome.Recipes")
        .unwrap();
    assert!(metadata.contains("runtime=org.gnome.Platform/x86_64/3.26"));
}
