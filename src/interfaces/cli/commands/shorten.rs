//! Shorten command

use colored::Colorize;

use crate::interfaces::cli::{CliContext, CliError};

pub async fn shorten_url(ctx: &mut CliContext, input: &str) -> Result<(), CliError> {
    let Some(record) = ctx.shortener.shorten(&mut ctx.store, input).await? else {
        // Blank input: nothing to do
        return Ok(());
    };

    println!(
        "{} Shortened: {} -> {}",
        "✓".bold().green(),
        record.short_url.cyan(),
        record.original_url.blue().underline()
    );
    println!("  {} {}", "ID:".dimmed(), record.id.magenta());

    Ok(())
}
