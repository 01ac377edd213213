pub mod url_validator;

/// Characters a short id is drawn from (base-36 digits)
pub const SHORT_ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a short id of `length` base-36 characters
///
/// Uniform over the alphabet; not cryptographically secure and not checked
/// against existing ids.
pub fn generate_short_id(length: usize) -> String {
    use std::iter;

    iter::repeat_with(|| {
        SHORT_ID_ALPHABET[rand::random_range(0..SHORT_ID_ALPHABET.len())] as char
    })
    .take(length)
    .collect()
}

/// Whether `id` looks like something `generate_short_id(length)` produces
pub fn is_valid_short_id(id: &str, length: usize) -> bool {
    id.len() == length && id.bytes().all(|b| SHORT_ID_ALPHABET.contains(&b))
}

/// Shorten long URLs for display, keeping the first `max_chars` characters
pub fn truncate_url(url: &str, max_chars: usize) -> String {
    match url.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &url[..idx]),
        None => url.to_string(),
    }
}
