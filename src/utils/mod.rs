pub mod delay;
pub mod url;

pub use delay::{DelayRange, apply_random_delay, apply_rate_limit, parse_delay_range};
pub use url::{ParsedUrl, decompose_url};
