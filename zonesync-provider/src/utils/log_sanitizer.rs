//! Log sanitization utilities
//!
//! Zone payloads can carry DKIM keys and verification tokens, and request
//! headers carry the registrar access token. Nothing from either should reach
//! the logs in full.

/// Maximum number of bytes of a body kept in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a secret that stay visible.
const SECRET_VISIBLE_PREFIX: usize = 4;

/// Truncate a response/request body for logging.
///
/// Cuts on a char boundary at or below `TRUNCATE_LIMIT` bytes and appends the
/// total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}

/// Mask a secret, keeping only a short prefix for correlation.
pub fn mask_secret(secret: &str) -> String {
    let prefix: String = secret.chars().take(SECRET_VISIBLE_PREFIX).collect();
    if secret.chars().count() <= SECRET_VISIBLE_PREFIX {
        "****".to_string()
    } else {
        format!("{prefix}****")
    }
}
