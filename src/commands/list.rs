//! List command implementation
//!
//! Prints the quick listing of a remote, one ref per line, either as a
//! tab-separated table (the same shape the tool emits, minus padding) or as
//! JSON.

use anyhow::Result;
use clap::Args;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Remote to enumerate
    pub remote: String,

    /// Print records as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Only show refs marked end-of-life
    #[arg(long)]
    pub eol_only: bool,
}

/// Execute the list command
pub fn execute(args: ListArgs, flatpak_command: &str) -> Result<()> {
    let service = super::service(flatpak_command);

    let mut refs = service.list_quick(&args.remote);
    if args.eol_only {
        refs.retain(|info| info.end_of_life);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&refs)?);
        return Ok(());
    }

    for info in &refs {
        let eol = match (info.end_of_life, &info.end_of_life_message) {
            (true, Some(message)) if !message.is_empty() => format!("\teol={}", message),
            (true, _) => "\teol".to_string(),
            (false, _) => String::new(),
        };
        println!(
            "{}\t{}\t{}\t{}{}",
            info.identity.r#ref,
            info.short_commit.as_deref().unwrap_or("-"),
            info.installed_size.as_deref().unwrap_or("-"),
            info.download_size.as_deref().unwrap_or("-"),
            eol
        );
    }

    Ok(())
}
