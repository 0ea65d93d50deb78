use std::io::BufRead;

use crate::error::{Error, Result};

/// Pulls whitespace-separated integers out of a buffered source.
///
/// Input is consumed one line at a time as raw bytes, so a reader on an
/// interactive terminal never blocks past the line holding the token it
/// returns, and bytes after the returned token are never decoded.
pub struct IntegerReader<R> {
    inner: R,
    buf: Vec<u8>,
    pos: usize,
    line: usize,
}

impl<R: BufRead> IntegerReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            pos: 0,
            line: 0,
        }
    }

    /// Read the next integer, or `None` once the source is exhausted.
    pub fn next_int(&mut self) -> Result<Option<i32>> {
        loop {
            let rest = &self.buf[self.pos..];
            let Some(skip) = rest.iter().position(|b| !b.is_ascii_whitespace()) else {
                self.buf.clear();
                self.pos = 0;
                if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
                    return Ok(None);
                }
                self.line += 1;
                continue;
            };

            let start = self.pos + skip;
            let len = self.buf[start..]
                .iter()
                .position(u8::is_ascii_whitespace)
                .unwrap_or(self.buf.len() - start);
            let token = &self.buf[start..start + len];
            self.pos = start + len;

            return std::str::from_utf8(token)
                .ok()
                .and_then(|s| s.parse::<i32>().ok())
                .map(Some)
                .ok_or_else(|| Error::InvalidInteger {
                    token: String::from_utf8_lossy(token).into_owned(),
                    line: self.line,
                });
        }
    }

    /// 1-based number of the line most recently read.
    pub fn line(&self) -> usize {
        self.line
    }
}
