/// Type alias for Result with anyhow::Error as the error type.
/// Typed errors from `shared::error` travel inside it and are recovered
/// with `downcast_ref` where the exit code depends on them.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
