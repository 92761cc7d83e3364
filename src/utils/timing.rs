use std::time::Duration;

use crate::error::{GameError, Result};

/// Resolve after at least `milliseconds` have elapsed on the tokio timer.
/// Negative durations are rejected instead of clamped.
pub async fn wait(milliseconds: i64) -> Result<()> {
    let millis = u64::try_from(milliseconds).map_err(|_| {
        tracing::warn!("Rejected negative wait of {}ms", milliseconds);
        GameError::NegativeDuration(milliseconds)
    })?;

    tokio::time::sleep(Duration::from_millis(millis)).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_wait_zero_resolves() {
        assert_ok!(wait(0).await);
    }

    #[tokio::test]
    async fn test_wait_lasts_at_least_requested_duration() {
        let start = Instant::now();
        assert_ok!(wait(50).await);
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_wait_negative_fails_fast() {
        let start = Instant::now();
        let err = assert_err!(wait(-5).await);
        assert!(matches!(err, GameError::NegativeDuration(-5)));
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_concurrent_waits_are_independent() {
        let start = Instant::now();
        let (short, long) = tokio::join!(wait(20), wait(60));
        assert_ok!(short);
        assert_ok!(long);
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(60));
        // Run side by side rather than back to back
        assert!(elapsed < Duration::from_millis(500));
    }
}
