//! Delete command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::store::RecordStore;

pub fn delete_url(store: &mut RecordStore, id: &str) -> Result<(), CliError> {
    if store.delete(id) {
        println!("{} Deleted shortened URL: {}", "✓".bold().green(), id.cyan());
    } else {
        println!("{} No shortened URL with id: {}", "ℹ".bold().blue(), id.cyan());
    }
    Ok(())
}
