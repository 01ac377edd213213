//! Clear command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::store::RecordStore;

pub fn clear_urls(store: &mut RecordStore) -> Result<(), CliError> {
    let count = store.len();
    store.clear();
    println!(
        "{} Cleared {} shortened URLs",
        "✓".bold().green(),
        count.to_string().green()
    );
    Ok(())
}
