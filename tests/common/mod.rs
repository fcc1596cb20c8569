//! Shared test utilities for integration and E2E tests.
//!
//! The integration and CLI tests never talk to a real flatpak binary.
//! Instead they point the adapter at a small shell script that answers the
//! three wire commands with canned output, so the whole stack from process
//! spawning through parsing is exercised deterministically.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then:
//!
//! ```rust,ignore
//! mod common;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let stub = common::write_flatpak_stub(dir.path());
//! ```

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Commit hash the stub's detail report advertises as current.
#[allow(dead_code)]
pub const STUB_COMMIT: &str = "7a2ef406b9bbea1e76d71b1a8c5ef27be72fa962a6569b746a6b2e0d31e2eb09";

/// The stub's flatpak stand-in script.
///
/// Dispatches on the subcommand the adapter passes after `--system`:
/// `remote-ls` prints a three-ref listing (one of them end-of-life),
/// `remote-info --show-metadata` prints a keyfile blob, and any other
/// `remote-info` form prints the verbose report with a two-entry history.
const STUB_SCRIPT: &str = r#"#!/bin/sh
case "$2" in
remote-ls)
    printf 'app/org.gnome.Recipes/x86_64/stable\tabc123\t10.5 MB\t4.2 MB\t\n'
    printf 'app/org.Old.App/x86_64/stable\tdef456\t2 MB\t1 MB\teol=Deprecated\n'
    printf 'runtime/org.gnome.Platform/aarch64/3.26\tfee789\t200 MB\t80 MB\t\n'
    ;;
remote-info)
    if [ "$3" = "--show-metadata" ]; then
        printf '[Application]\nname=org.gnome.Recipes\nruntime=org.gnome.Platform/x86_64/3.26\n'
    else
        cat <<'EOF'
Ref: app/org.gnome.Recipes/x86_64/stable
ID: org.gnome.Recipes
Arch: x86_64
Branch: stable
Collection ID: org.flathub.Stable
Date: 2018-01-23 10:23:30 +0000
Subject: Update to 1.2 (f00dfeed)
Commit: 7a2ef406b9bbea1e76d71b1a8c5ef27be72fa962a6569b746a6b2e0d31e2eb09
Download size: 4.2 MB
Installed size: 10.5 MB
Runtime: org.gnome.Platform/x86_64/3.26
Sdk: org.gnome.Sdk/x86_64/3.26
History:

 Commit: c2fd9340ea6b546e9dc5c355e09d72303b1a65a9cbf0b0f4629fd5e9ed11efeb
 Subject: Update to 1.1 (9f00dead)
 Date: 2018-01-20 08:00:00 +0000

 Commit: a71c9340ea6b546e9dc5c355e09d72303b1a65a9cbf0b0f4629fd5e9ed11efeb
 Subject: Initial build (c0ffee00)
 Date: 2018-01-10 08:00:00 +0000
EOF
    fi
    ;;
*)
    echo "unexpected invocation: $*" 1>&2
    exit 2
    ;;
esac
"#;

/// Write the canned flatpak stand-in into `dir` and make it executable.
pub fn write_flatpak_stub(dir: &Path) -> PathBuf {
    write_stub(dir, "flatpak-stub", STUB_SCRIPT)
}

/// Write a stand-in that fails every invocation with exit code 2.
#[allow(dead_code)]
pub fn write_failing_stub(dir: &Path) -> PathBuf {
    write_stub(
        dir,
        "flatpak-broken",
        "#!/bin/sh\necho 'error: remote unreachable' 1>&2\nexit 2\n",
    )
}

fn write_stub(dir: &Path, name: &str, script: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, script).expect("write stub script");

    let mut perms = fs::metadata(&path).expect("stat stub script").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("chmod stub script");

    path
}
