use std::io;

use crate::accumulator::Summary;
use crate::output::Reporter;

/// Render a mean the way floats print by default: integral values keep a
/// trailing `.0`.
fn format_mean(mean: f64) -> String {
    format!("{mean:?}")
}

pub struct TextReporter;

impl Reporter for TextReporter {
    fn report(&self, summary: &Summary, writer: &mut dyn io::Write) -> io::Result<()> {
        if let Some(mean) = summary.mean() {
            writeln!(writer, "The average is {}.", format_mean(mean))?;
        }
        Ok(())
    }
}
