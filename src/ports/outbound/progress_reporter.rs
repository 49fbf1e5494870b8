/// ProgressReporter port for keeping the pipeline log readable
///
/// Progress goes to the CI log (stderr), never into the report artifact.
pub trait ProgressReporter {
    /// Reports a step of the run (e.g. "Reading BOM")
    fn report(&self, message: &str);

    /// Reports per-part progress while the BOM is being resolved
    ///
    /// # Arguments
    /// * `current` - Number of parts processed so far
    /// * `total` - Total number of parts, when known
    /// * `message` - Part currently being processed
    fn report_progress(&self, current: usize, total: Option<usize>, message: Option<&str>);

    /// Reports a non-fatal problem (skipped row, unresolved part)
    fn report_warning(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
