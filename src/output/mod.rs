pub mod json;
pub mod text;

use std::io;

use crate::accumulator::Summary;
use crate::config::OutputFormat;

/// Trait for reporting the result of a run. Implementations write nothing
/// when no values were accepted.
pub trait Reporter {
    fn report(&self, summary: &Summary, writer: &mut dyn io::Write) -> io::Result<()>;
}

pub fn reporter_for(format: OutputFormat) -> Box<dyn Reporter> {
    match format {
        OutputFormat::Text => Box::new(text::TextReporter),
        OutputFormat::Json => Box::new(json::JsonReporter),
    }
}
