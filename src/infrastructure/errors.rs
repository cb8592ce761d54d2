use std::error::Error as StdError;

/// Flattens an error and its sources into one `a: b: c` line. reqwest's
/// top-level message alone never names the DNS, TLS or socket cause.
pub fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}
