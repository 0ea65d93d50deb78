pub mod accumulator;
pub mod config;
pub mod error;
pub mod output;
pub mod reader;

use std::io::BufRead;

use accumulator::{Accumulator, Step, Summary};
use config::EofPolicy;
use reader::IntegerReader;

/// Read integers from `input` until a negative sentinel and total the
/// non-negative ones. Nothing after the sentinel is read.
pub fn average<R: BufRead>(input: R, on_eof: EofPolicy) -> error::Result<Summary> {
    let mut reader = IntegerReader::new(input);
    let mut acc = Accumulator::new();

    loop {
        let Some(value) = reader.next_int()? else {
            let summary = acc.finish();
            return match on_eof {
                EofPolicy::Sentinel => {
                    log::debug!("end of input treated as sentinel");
                    Ok(summary)
                }
                EofPolicy::Error => Err(error::Error::UnexpectedEof {
                    count: summary.count,
                }),
            };
        };

        match acc.accept(value)? {
            Step::Continue => log::debug!("accepted {value}"),
            Step::Stop => {
                log::debug!("sentinel {value} on line {}", reader.line());
                return Ok(acc.finish());
            }
        }
    }
}
