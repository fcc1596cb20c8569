//! # Flatpak Remote Library
//!
//! This library turns the free-form text output of the `flatpak`
//! command-line tool into structured records describing the refs a remote
//! publishes: identity, commit, sizes, end-of-life state, metadata, and the
//! commit history chain. It is designed to back services that must answer
//! ref queries without exposing callers to the latency and instability of
//! invoking the external tool on every request.
//!
//! ## Quick Example
//!
//! ```
//! use flatpak_remote::parse;
//!
//! // One line of `remote-ls` output becomes a typed record.
//! let info = parse::parse_listing_line(
//!     "app/org.gnome.Recipes/x86_64/stable\tabc123\t10.5 MB\t4.2 MB",
//! )
//! .unwrap();
//!
//! assert_eq!(info.identity.id, "org.gnome.Recipes");
//! assert_eq!(info.identity.arch, "x86_64");
//! assert_eq!(info.short_commit.as_deref(), Some("abc123"));
//! ```
//!
//! Full lookups go through the service, which shells out to flatpak:
//!
//! ```no_run
//! use flatpak_remote::RemoteInfoService;
//!
//! let service = RemoteInfoService::new();
//! if let Some(info) = service.find_full("flathub", "x86_64", "org.gnome.Recipes") {
//!     println!("{} is at {:?}", info.identity.r#ref, info.commit);
//! }
//! ```
//!
//! ## Core Concepts
//!
//! - **Records (`model`)**: `RefIdentity` and `RefRemoteInfo`, the typed
//!   result of every lookup. History entries are `Arc`-shared snapshots of
//!   the same record type.
//! - **Execution (`exec`, `flatpak`)**: every external invocation runs in
//!   its own process under a 20-second watchdog; the `RemoteCommands` trait
//!   keeps the tool swappable for tests.
//! - **Caching (`cache`)**: the bulk listing is cached per remote for five
//!   minutes, so existence checks stay cheap.
//! - **Parsing (`parse`)**: the tool's tabular listing, verbose report, and
//!   embedded history block each have a dedicated parser.
//! - **Lookups (`remote`)**: `RemoteInfoService` composes the pieces and
//!   owns the pacing/retry policy. Its operations never raise; failures
//!   are logged and collapsed to absent or empty results.

pub mod cache;
pub mod error;
pub mod exec;
pub mod flatpak;
pub mod model;
pub mod parse;
pub mod remote;

pub use error::{Error, Result};
pub use model::{RefIdentity, RefRemoteInfo};
pub use remote::{Pacing, RemoteInfoService};
