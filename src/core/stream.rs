//! Rewindable line sources the detector reads from.
//!
//! A stream hands out one line at a time without its terminator and can be
//! reset to the first line. Reading past the end yields `Ok(None)`.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Read, Seek, SeekFrom},
    path::Path,
};

use crate::core::{constants::MAX_LINE_BYTES, error::SniffError};

/// Sequential, rewindable access to the lines of a bounded text source.
pub trait LineStream {
    /// Next line without its `\n` / `\r\n`, or `None` at end of stream.
    ///
    /// # Errors
    ///
    /// Propagates read failures from the underlying source.
    fn next_line(&mut self) -> io::Result<Option<&str>>;

    /// Reset the read cursor to the first line.
    ///
    /// # Errors
    ///
    /// Propagates seek failures from the underlying source.
    fn rewind(&mut self) -> io::Result<()>;
}

impl<S: LineStream + ?Sized> LineStream for &mut S {
    #[inline]
    fn next_line(&mut self) -> io::Result<Option<&str>> {
        (**self).next_line()
    }
    #[inline]
    fn rewind(&mut self) -> io::Result<()> {
        (**self).rewind()
    }
}

// --- Helpers ---

/// Rewrite U+2212 MINUS SIGN to an ASCII `-` in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

#[inline]
fn strip_terminator(buf: &mut Vec<u8>) {
    if buf.ends_with(b"\n") {
        buf.pop();
    }
    if buf.ends_with(b"\r") {
        buf.pop();
    }
}

// --- Reader-backed stream ---
const BUF_CAP: usize = 1 << 16; // 64 KiB, detection only reads a prefix

/// Stream over any seekable buffered reader (usually a file).
///
/// Lines longer than the line cap are cut at the cap; the remainder up to the
/// next newline is skipped without being buffered.
pub struct ReaderStream<R> {
    rdr: R,
    raw: Vec<u8>,
    line: String,
    line_cap: u64,
}

impl<R: BufRead + Seek> ReaderStream<R> {
    #[must_use]
    pub fn new(rdr: R) -> Self {
        Self::with_line_cap(rdr, MAX_LINE_BYTES)
    }

    /// As [`ReaderStream::new`] with a custom per-line byte cap (at least 1).
    #[must_use]
    pub fn with_line_cap(rdr: R, line_cap: u64) -> Self {
        Self {
            rdr,
            raw: Vec::with_capacity(256),
            line: String::with_capacity(256),
            line_cap: line_cap.max(1),
        }
    }

    pub fn into_inner(self) -> R {
        self.rdr
    }
}

impl<R: BufRead + Seek> LineStream for ReaderStream<R> {
    fn next_line(&mut self) -> io::Result<Option<&str>> {
        self.raw.clear();
        let n = self.rdr.by_ref().take(self.line_cap).read_until(b'\n', &mut self.raw)?;
        if n == 0 {
            return Ok(None);
        }
        if n as u64 == self.line_cap && !self.raw.ends_with(b"\n") {
            self.rdr.skip_until(b'\n')?;
        }
        strip_terminator(&mut self.raw);
        normalize_unicode_minus(&mut self.raw);

        self.line.clear();
        self.line.push_str(&String::from_utf8_lossy(&self.raw));
        Ok(Some(self.line.as_str()))
    }

    fn rewind(&mut self) -> io::Result<()> {
        self.rdr.seek(SeekFrom::Start(0))?;
        Ok(())
    }
}

/// Open `path` as a rewindable stream.
///
/// # Errors
///
/// Returns [`SniffError::Open`] when the file cannot be opened.
pub fn open_path(path: impl AsRef<Path>) -> Result<ReaderStream<BufReader<File>>, SniffError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SniffError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ReaderStream::new(BufReader::with_capacity(BUF_CAP, file)))
}

// --- In-memory stream ---

/// Stream over lines already held in memory.
///
/// Used for text built in code and for non-seekable sources such as stdin.
#[derive(Debug, Clone, Default)]
pub struct MemoryStream {
    lines: Vec<String>,
    pos: usize,
}

impl MemoryStream {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_owned).collect(),
            pos: 0,
        }
    }

    /// Slurp a whole reader, applying the same normalisation as [`ReaderStream`].
    ///
    /// # Errors
    ///
    /// Propagates read failures from `src`.
    pub fn from_reader<R: Read>(mut src: R) -> io::Result<Self> {
        let mut buf = Vec::new();
        src.read_to_end(&mut buf)?;
        normalize_unicode_minus(&mut buf);
        Ok(Self::new(&String::from_utf8_lossy(&buf)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Index of the next line to be read.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl From<&str> for MemoryStream {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl LineStream for MemoryStream {
    fn next_line(&mut self) -> io::Result<Option<&str>> {
        let Some(line) = self.lines.get(self.pos) else {
            return Ok(None);
        };
        self.pos += 1;
        Ok(Some(line.as_str()))
    }

    fn rewind(&mut self) -> io::Result<()> {
        self.pos = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn drain(s: &mut impl LineStream) -> Vec<String> {
        let mut out = Vec::new();
        while let Some(line) = s.next_line().unwrap() {
            out.push(line.to_owned());
        }
        out
    }

    #[test]
    fn reader_strips_terminators_and_rewinds() {
        let mut s = ReaderStream::new(Cursor::new(b"a\r\nb\n\nc".to_vec()));
        assert_eq!(drain(&mut s), ["a", "b", "", "c"]);
        assert!(s.next_line().unwrap().is_none());
        s.rewind().unwrap();
        assert_eq!(s.next_line().unwrap(), Some("a"));
    }

    #[test]
    fn unicode_minus_becomes_ascii() {
        let mut s = ReaderStream::new(Cursor::new("\u{2212}1.5 2\n".as_bytes().to_vec()));
        assert_eq!(s.next_line().unwrap(), Some("-1.5 2"));
    }

    #[test]
    fn over_long_line_is_cut_and_skipped() {
        let mut text = "1 2\n".to_owned();
        text.push_str(&"9".repeat(100));
        text.push_str("\n3 4\n");
        let mut s = ReaderStream::with_line_cap(Cursor::new(text.into_bytes()), 8);
        assert_eq!(drain(&mut s), ["1 2", "99999999", "3 4"]);
    }

    #[test]
    fn line_exactly_at_cap_keeps_the_next() {
        let mut s = ReaderStream::with_line_cap(Cursor::new(b"abcd\nef\n".to_vec()), 4);
        assert_eq!(drain(&mut s), ["abcd", "ef"]);
    }

    #[test]
    fn memory_stream_rewinds_to_first_line() {
        let mut s = MemoryStream::new("x\ny\n");
        assert_eq!(s.len(), 2);
        assert_eq!(drain(&mut s), ["x", "y"]);
        assert_eq!(s.position(), 2);
        s.rewind().unwrap();
        assert_eq!(s.position(), 0);
        assert_eq!(s.next_line().unwrap(), Some("x"));
    }

    #[test]
    fn open_missing_file_is_open_error() {
        let err = open_path("/definitely/not/here.dat").err().unwrap();
        assert!(matches!(err, SniffError::Open { .. }));
    }
}
