//! Bounded retry for fallible async operations.

use std::fmt::Display;
use std::future::Future;

/// Run `op` once, then up to `max_retries` more times while it fails.
///
/// `op` receives the zero-based attempt number. There is no backoff: the next
/// attempt starts as soon as the previous one fails. Returns the first success
/// or the error from the final attempt.
pub async fn attempt<T, E, F, Fut>(mut op: F, max_retries: u32) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut attempt_no = 0;
    loop {
        match op(attempt_no).await {
            Ok(value) => return Ok(value),
            Err(err) if attempt_no < max_retries => {
                tracing::debug!(attempt = attempt_no + 1, error = %err, "Attempt failed, retrying");
                attempt_no += 1;
            }
            Err(err) => {
                tracing::debug!(attempts = attempt_no + 1, error = %err, "Giving up");
                return Err(err);
            }
        }
    }
}
