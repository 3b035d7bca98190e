use std::{collections::BTreeSet, error::Error};

use rand::{Rng, distr::Alphanumeric};

const CORRELATION_ID_LEN: usize = 32;

/// Random id sent as the OAuth `state` parameter of one login attempt.
pub fn generate_correlation_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CORRELATION_ID_LEN)
        .map(char::from)
        .collect()
}

/// Splits a space or comma separated scope string into a set.
pub fn parse_scopes(scope: &str) -> BTreeSet<String> {
    scope
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Formats an error together with its whole source chain.
///
/// reqwest keeps the interesting part (e.g. "Connection refused") in the
/// sources, not in the top-level message.
pub fn describe_error(err: &(dyn Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
