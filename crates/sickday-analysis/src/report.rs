use std::io;

use crate::result::AnalysisReport;

/// Presents a finished analysis to a consumer.
///
/// Reporters only format what the engine produced; they never rerun a test.
pub trait ResultReporter {
    fn report(&mut self, report: &AnalysisReport) -> io::Result<()>;
}
