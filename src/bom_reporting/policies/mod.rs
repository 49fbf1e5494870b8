pub mod match_policy;
pub mod packaging_policy;
pub mod price_break_policy;
pub mod retry_policy;

pub use match_policy::{MatchPolicy, DEFAULT_CONFIDENCE_THRESHOLD};
pub use packaging_policy::PackagingPolicy;
pub use price_break_policy::PriceBreakPolicy;
pub use retry_policy::RetryPolicy;
