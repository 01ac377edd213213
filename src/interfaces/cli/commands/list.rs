//! List command

use std::fmt;

use chrono::Local;
use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::storage::{SerializableShortenedUrl, ShortenedUrl};
use crate::store::RecordStore;
use crate::utils::truncate_url;

const ORIGINAL_URL_DISPLAY_CHARS: usize = 50;

pub fn list_urls(store: &RecordStore, json: bool) -> Result<(), CliError> {
    if json {
        let stored: Vec<SerializableShortenedUrl> = store.urls().iter().map(Into::into).collect();
        let out = serde_json::to_string_pretty(&stored)
            .map_err(|e| CliError::CommandError(format!("Failed to render JSON: {}", e)))?;
        println!("{}", out);
    } else {
        print!("{}", render_list(store.urls()));
    }
    Ok(())
}

/// Render the list the way `list` prints it
pub fn render_list(urls: &[ShortenedUrl]) -> String {
    UrlListView(urls).to_string()
}

struct UrlListView<'a>(&'a [ShortenedUrl]);

impl fmt::Display for UrlListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let urls = self.0;

        if urls.is_empty() {
            writeln!(f, "{}", "No Shortened URLs".bold())?;
            writeln!(
                f,
                "  You haven't shortened any URLs yet. Start by shortening your first URL above!"
            )?;
            return writeln!(f, "  {}", "localshort shorten <URL>".dimmed());
        }

        writeln!(
            f,
            "{}",
            format!("Shortened URLs ({})", urls.len()).bold().green()
        )?;
        writeln!(f)?;

        for url in urls {
            let created = url
                .created_at
                .with_timezone(&Local)
                .format("%d %b %Y %H:%M");
            writeln!(
                f,
                "  {} {}  {}",
                "ID:".dimmed(),
                url.id.magenta(),
                created.to_string().dimmed()
            )?;
            writeln!(
                f,
                "    {} {}",
                "Original:".dimmed(),
                truncate_url(&url.original_url, ORIGINAL_URL_DISPLAY_CHARS)
                    .blue()
                    .underline()
            )?;
            writeln!(f, "    {} {}", "Short:".dimmed(), url.short_url.cyan())?;
        }

        Ok(())
    }
}
