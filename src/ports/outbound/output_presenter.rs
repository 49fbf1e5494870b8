use crate::shared::Result;

/// OutputPresenter port for delivering the rendered report
///
/// This port abstracts the output destination where the report lands.
pub trait OutputPresenter {
    /// Writes the rendered report, replacing anything already there
    ///
    /// # Errors
    /// Returns an error if:
    /// - The destination's parent directory does not exist
    /// - The destination is a symbolic link
    /// - Writing fails (permissions, disk space)
    fn present(&self, content: &str) -> Result<()>;
}
