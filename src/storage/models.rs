use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::Result;

/// One shortened-URL mapping as held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedUrl {
    pub id: String,
    pub original_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
}

/// Stored form of [`ShortenedUrl`]
///
/// `createdAt` stays a string here. It is turned back into a timestamp by
/// [`parse_created_at`] during hydration, never by serde.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SerializableShortenedUrl {
    pub id: String,
    pub original_url: String,
    pub short_url: String,
    pub created_at: String,
}

impl From<&ShortenedUrl> for SerializableShortenedUrl {
    fn from(url: &ShortenedUrl) -> Self {
        Self {
            id: url.id.clone(),
            original_url: url.original_url.clone(),
            short_url: url.short_url.clone(),
            created_at: url.created_at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}

/// Offset-less forms, read as UTC
const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a stored `createdAt`
///
/// RFC 3339 first, then a date-time without offset, then a bare date
/// (both taken as UTC).
pub fn parse_created_at(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

impl From<SerializableShortenedUrl> for ShortenedUrl {
    /// An unreadable `createdAt` keeps the record and stamps it with the
    /// current time.
    fn from(stored: SerializableShortenedUrl) -> Self {
        let created_at = parse_created_at(&stored.created_at).unwrap_or_else(|e| {
            warn!(
                "Invalid createdAt '{}' for {}, using current time: {}",
                stored.created_at, stored.id, e
            );
            Utc::now()
        });

        Self {
            id: stored.id,
            original_url: stored.original_url,
            short_url: stored.short_url,
            created_at,
        }
    }
}

/// Serialize the whole list into the stored JSON array
pub fn serialize_urls(urls: &[ShortenedUrl]) -> Result<String> {
    let stored: Vec<SerializableShortenedUrl> = urls.iter().map(Into::into).collect();
    Ok(serde_json::to_string(&stored)?)
}

/// Parse a stored JSON array and hydrate every `createdAt`
///
/// Only a malformed array fails; each record's date is hydrated on its own.
pub fn deserialize_urls(raw: &str) -> Result<Vec<ShortenedUrl>> {
    let stored: Vec<SerializableShortenedUrl> = serde_json::from_str(raw)?;
    Ok(stored.into_iter().map(ShortenedUrl::from).collect())
}
