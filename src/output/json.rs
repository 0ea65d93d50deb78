use std::io;

use crate::accumulator::Summary;
use crate::output::Reporter;

pub struct JsonReporter;

#[derive(serde::Serialize)]
struct JsonSummary {
    count: u64,
    sum: i64,
    mean: f64,
}

impl Reporter for JsonReporter {
    fn report(&self, summary: &Summary, writer: &mut dyn io::Write) -> io::Result<()> {
        let Some(mean) = summary.mean() else {
            return Ok(());
        };
        let json = JsonSummary {
            count: summary.count,
            sum: summary.sum,
            mean,
        };
        serde_json::to_writer(&mut *writer, &json)?;
        writeln!(writer)
    }
}
