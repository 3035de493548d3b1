use std::io::Write;

use log::trace;

use crate::error::Result;
use crate::io::InputStream;

pub trait Interactor {
    /// Asks the judge about the range `[l, r]`.
    fn query(&mut self, l: i64, r: i64) -> Result<i64>;
}

pub struct StdioInteractor<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: InputStream, W: Write> StdioInteractor<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }
}

impl<R: InputStream, W: Write> Interactor for StdioInteractor<'_, R, W> {
    fn query(&mut self, l: i64, r: i64) -> Result<i64> {
        writeln!(self.output, "? {l} {r}")?;
        self.output.flush()?;

        let res = self.input.value()?;
        trace!("? {} {} -> {}", l, r, res);
        Ok(res)
    }
}
