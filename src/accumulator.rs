use crate::error::{Error, Result};

/// What the input loop should do after a value has been offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Stop,
}

/// Running sum and count of accepted (non-negative) values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Accumulator {
    sum: i64,
    count: u64,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer one input value. Negative values are the sentinel and are not
    /// counted.
    pub fn accept(&mut self, value: i32) -> Result<Step> {
        if value < 0 {
            return Ok(Step::Stop);
        }
        self.sum = self
            .sum
            .checked_add(i64::from(value))
            .ok_or(Error::Overflow)?;
        self.count += 1;
        Ok(Step::Continue)
    }

    pub fn finish(self) -> Summary {
        Summary {
            sum: self.sum,
            count: self.count,
        }
    }
}

/// Final totals of one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub sum: i64,
    pub count: u64,
}

impl Summary {
    /// Arithmetic mean, or `None` when nothing was accepted.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum as f64 / self.count as f64)
        }
    }
}
