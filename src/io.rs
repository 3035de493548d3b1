use std::io::{self, BufRead, BufReader, BufWriter, Stdin, Stdout};
use std::str::FromStr;

use crate::error::{Error, Result};

pub trait InputStream {
    /// Next whitespace-separated token, or `None` at end of input.
    fn token(&mut self) -> Result<Option<&[u8]>>;
    fn line(&mut self) -> Result<&[u8]>;

    fn skip_line(&mut self) -> Result<()> {
        self.line().map(|_| ())
    }

    fn value<T: FromStr>(&mut self) -> Result<T> {
        let token = self.token()?.ok_or(Error::UnexpectedEof)?;
        let token = String::from_utf8_lossy(token);
        token.parse::<T>().map_err(|_| Error::Parse {
            token: token.into_owned(),
        })
    }

    fn vec<T: FromStr>(&mut self, n: usize) -> Result<Vec<T>> {
        (0..n).map(|_| self.value()).collect()
    }
}

// cheap whitespace check, treats every control byte as a separator
fn is_whitespace(c: u8) -> bool {
    c <= b' '
}

fn trim_newline(s: &[u8]) -> &[u8] {
    let mut s = s;
    while matches!(s.last(), Some(b'\n' | b'\r' | 0)) {
        s = &s[..s.len() - 1];
    }
    s
}

impl InputStream for &[u8] {
    fn token(&mut self) -> Result<Option<&[u8]>> {
        let Some(idx) = self.iter().position(|&c| !is_whitespace(c)) else {
            return Ok(None);
        };
        *self = &self[idx..];
        let idx = self
            .iter()
            .position(|&c| is_whitespace(c))
            .unwrap_or(self.len());
        let (token, buf_new) = self.split_at(idx);
        *self = buf_new;
        Ok(Some(token))
    }

    fn line(&mut self) -> Result<&[u8]> {
        let idx = self
            .iter()
            .position(|&c| c == b'\n')
            .map(|idx| idx + 1)
            .unwrap_or(self.len());
        let (line, buf_new) = self.split_at(idx);
        *self = buf_new;
        Ok(trim_newline(line))
    }
}

/// Reads one line at a time, so it never blocks on input the peer has not sent yet.
pub struct LineSyncedInput<R: BufRead> {
    line_buf: Vec<u8>,
    line_cursor: usize,
    inner: R,
}

impl<R: BufRead> LineSyncedInput<R> {
    pub fn new(r: R) -> Self {
        Self {
            line_buf: Vec::new(),
            line_cursor: 0,
            inner: r,
        }
    }

    fn take(&mut self, n: usize) -> &[u8] {
        let n = n.min(self.line_buf.len() - self.line_cursor);
        let slice = &self.line_buf[self.line_cursor..self.line_cursor + n];
        self.line_cursor += n;
        slice
    }

    fn eol(&self) -> bool {
        self.line_cursor == self.line_buf.len()
    }

    /// `Ok(false)` on EOF.
    fn refill_line_buf(&mut self) -> io::Result<bool> {
        self.line_buf.clear();
        self.line_cursor = 0;
        Ok(self.inner.read_until(b'\n', &mut self.line_buf)? > 0)
    }
}

impl<R: BufRead> InputStream for LineSyncedInput<R> {
    fn token(&mut self) -> Result<Option<&[u8]>> {
        loop {
            if self.eol() && !self.refill_line_buf()? {
                return Ok(None);
            }
            let rest = &self.line_buf[self.line_cursor..];
            let skip = rest
                .iter()
                .position(|&c| !is_whitespace(c))
                .unwrap_or(rest.len());
            self.line_cursor += skip;

            let rest = &self.line_buf[self.line_cursor..];
            let idx = rest
                .iter()
                .position(|&c| is_whitespace(c))
                .unwrap_or(rest.len());
            if idx > 0 {
                return Ok(Some(self.take(idx)));
            }
        }
    }

    fn line(&mut self) -> Result<&[u8]> {
        if self.eol() {
            self.refill_line_buf()?;
        }

        let start = self.line_cursor;
        self.line_cursor = self.line_buf.len();
        Ok(trim_newline(&self.line_buf[start..]))
    }
}

pub fn stdin() -> LineSyncedInput<BufReader<Stdin>> {
    LineSyncedInput::new(BufReader::new(std::io::stdin()))
}

pub fn stdout() -> BufWriter<Stdout> {
    BufWriter::new(std::io::stdout())
}
