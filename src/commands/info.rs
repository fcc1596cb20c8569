//! Info command implementation
//!
//! Looks up the full record for one ref: the verbose report, the commit
//! history chain, and the raw metadata blob. Exits non-zero when the ref is
//! not found so scripts can branch on the result.

use anyhow::Result;
use clap::Args;

use flatpak_remote::RefRemoteInfo;

/// Arguments for the info command
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Remote to query
    pub remote: String,

    /// Architecture of the ref (e.g. x86_64)
    pub arch: String,

    /// Application or runtime id (e.g. org.gnome.Recipes)
    pub id: String,

    /// Retry once after a pause when the first lookup comes back empty
    #[arg(long)]
    pub retry: bool,

    /// Print the record as JSON
    #[arg(long)]
    pub json: bool,

    /// Print only the raw metadata blob
    #[arg(long)]
    pub metadata: bool,
}

/// Execute the info command
pub fn execute(args: InfoArgs, flatpak_command: &str) -> Result<()> {
    let service = super::service(flatpak_command);

    if args.metadata {
        return match service.fetch_metadata(&args.remote, &args.arch, &args.id) {
            Some(text) => {
                print!("{}", text);
                Ok(())
            }
            None => anyhow::bail!(
                "no metadata for {} ({}) in remote {}",
                args.id,
                args.arch,
                args.remote
            ),
        };
    }

    let info = service.find_full_with_retry(&args.remote, &args.arch, &args.id, args.retry);

    match info {
        Some(info) if args.json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
            Ok(())
        }
        Some(info) => {
            print_record(&info);
            Ok(())
        }
        None => anyhow::bail!(
            "ref {} ({}) not found in remote {}",
            args.id,
            args.arch,
            args.remote
        ),
    }
}

fn print_record(info: &RefRemoteInfo) {
    println!("Ref: {}", info.identity.r#ref);
    println!("ID: {}", info.identity.id);
    println!("Arch: {}", info.identity.arch);
    println!("Branch: {}", info.identity.branch);
    print_optional("Collection ID", &info.collection_id);
    print_optional("Commit", &info.commit);
    print_optional("Parent", &info.parent_commit);
    print_optional("Subject", &info.subject);
    if let Some(date) = &info.date {
        println!("Date: {}", date.format("%Y-%m-%d %H:%M:%S %z"));
    }
    print_optional("Installed size", &info.installed_size);
    print_optional("Download size", &info.download_size);
    print_optional("Runtime", &info.runtime);
    print_optional("Sdk", &info.sdk);
    if info.end_of_life {
        println!(
            "End-of-life: {}",
            info.end_of_life_message.as_deref().unwrap_or("")
        );
    }
    print_optional("End-of-life-rebase", &info.end_of_life_rebase);

    if !info.history.is_empty() {
        println!("History ({} entries):", info.history.len());
        for entry in &info.history {
            println!(
                "  {}  {}",
                entry.commit.as_deref().unwrap_or("-"),
                entry.subject.as_deref().unwrap_or("")
            );
        }
    }
}

fn print_optional(label: &str, value: &Option<String>) {
    if let Some(value) = value {
        println!("{}: {}", label, value);
    }
}
