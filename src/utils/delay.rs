use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use crate::constants::MICROSECONDS_PER_SECOND;

/// Inclusive bounds for a random pre-request delay, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    pub min: u64,
    pub max: u64,
}

/// Parse a `MIN:MAX` delay range. Invalid input is warned about and ignored.
pub fn parse_delay_range(random_delay_str: &Option<String>) -> Option<DelayRange> {
    let delay_str = random_delay_str.as_deref()?;
    let Some((min, max)) = delay_str.split_once(':') else {
        tracing::warn!(
            "Invalid --random-delay format. Expected MIN:MAX. Got: {}",
            delay_str
        );
        return None;
    };
    match (min.trim().parse::<u64>(), max.trim().parse::<u64>()) {
        (Ok(min), Ok(max)) if max >= min => Some(DelayRange { min, max }),
        (Ok(_), Ok(_)) => {
            tracing::warn!(
                "Invalid --random-delay format: MAX must be greater than or equal to MIN. Got: {}",
                delay_str
            );
            None
        }
        _ => {
            tracing::warn!(
                "Invalid --random-delay format: Could not parse min/max values. Got: {}",
                delay_str
            );
            None
        }
    }
}

/// Apply random delay before a request if configured
pub async fn apply_random_delay(range: Option<DelayRange>) {
    if let Some(range) = range {
        let delay = rand::thread_rng().gen_range(range.min..=range.max);
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }
}

/// Apply rate limiting to control request frequency
pub async fn apply_rate_limit(rate_limit: Option<u64>, last_request_time: &Arc<Mutex<Instant>>) {
    if let Some(rate_limit) = rate_limit.filter(|limit| *limit > 0) {
        let mut last_req_guard = last_request_time.lock().await;
        let elapsed = last_req_guard.elapsed();
        let min_delay_micros = MICROSECONDS_PER_SECOND / rate_limit;
        if elapsed.as_micros() < min_delay_micros as u128 {
            let sleep_duration =
                Duration::from_micros(min_delay_micros - elapsed.as_micros() as u64);
            tokio::time::sleep(sleep_duration).await;
        }
        *last_req_guard = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delay_range() {
        assert_eq!(
            parse_delay_range(&Some("100:500".to_string())),
            Some(DelayRange { min: 100, max: 500 })
        );
        assert_eq!(parse_delay_range(&None), None);
    }

    #[test]
    fn test_parse_delay_range_invalid() {
        assert_eq!(parse_delay_range(&Some("500:100".to_string())), None);
        assert_eq!(parse_delay_range(&Some("abc:100".to_string())), None);
        assert_eq!(parse_delay_range(&Some("100".to_string())), None);
    }

    #[tokio::test]
    async fn test_rate_limit_spaces_requests() {
        let last = Arc::new(Mutex::new(Instant::now()));
        let start = Instant::now();
        apply_rate_limit(Some(20), &last).await;
        apply_rate_limit(Some(20), &last).await;
        assert!(start.elapsed() >= Duration::from_millis(90));
    }
}
