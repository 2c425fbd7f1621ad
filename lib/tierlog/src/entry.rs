/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe, Location};

use smol_str::SmolStr;

use crate::{LogError, LogRouter, Priority, format};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
}

impl SourceLocation {
    pub const fn new(file: &'static str, line: u32) -> Self {
        SourceLocation { file, line }
    }

    #[track_caller]
    pub fn caller() -> Self {
        Location::caller().into()
    }
}

impl From<&'static Location<'static>> for SourceLocation {
    fn from(l: &'static Location<'static>) -> Self {
        SourceLocation::new(l.file(), l.line())
    }
}

/// The buffer of one in-flight log statement.
///
/// When the router has extended info enabled at construction time, the buffer
/// starts with `"<tag>: <local time> <file>:<line> "` and
/// [`regular_offset`](Self::regular_offset) points right past it. The entry
/// flushes itself to the router when dropped, errors on that path are
/// discarded. Call [`finalize`](Self::finalize) to observe them.
pub struct LogEntry<'a> {
    router: &'a LogRouter,
    location: SourceLocation,
    tag: SmolStr,
    priority: Priority,
    buf: Vec<u8>,
    regular_offset: usize,
}

impl<'a> LogEntry<'a> {
    pub(crate) fn new(
        router: &'a LogRouter,
        location: SourceLocation,
        tag: &str,
        priority: Priority,
    ) -> Self {
        let mut entry = LogEntry {
            router,
            location,
            tag: SmolStr::new(tag),
            priority,
            buf: Vec::with_capacity(128),
            regular_offset: 0,
        };
        if router.extended_info() {
            entry.write_decoration();
        }
        entry
    }

    fn write_decoration(&mut self) {
        self.buf.extend_from_slice(self.tag.as_bytes());
        self.buf.extend_from_slice(b": ");
        format::write_local_time(&mut self.buf);
        self.buf.push(b' ');
        self.buf
            .extend_from_slice(format::strip_file_name(self.location.file).as_bytes());
        self.buf.push(b':');
        format::write_line_number(&mut self.buf, self.location.line);
        self.buf.push(b' ');
        self.regular_offset = self.buf.len();
    }

    #[inline]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[inline]
    pub fn location(&self) -> SourceLocation {
        self.location
    }

    /// All buffered bytes, decoration included.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.buf
    }

    #[inline]
    pub fn regular_offset(&self) -> usize {
        self.regular_offset
    }

    /// The buffered bytes without the decoration.
    #[inline]
    pub fn message(&self) -> &[u8] {
        &self.buf[self.regular_offset..]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn append<T: AsRef<[u8]>>(&mut self, data: T) -> &mut Self {
        self.buf.extend_from_slice(data.as_ref());
        self
    }

    pub fn append_display<T: fmt::Display>(&mut self, value: T) -> &mut Self {
        // writing into a Vec never fails
        let _ = write!(self.buf, "{value}");
        self
    }

    /// Hand the buffer to the router and reset the entry.
    ///
    /// The buffer is cleared even if a channel write failed.
    pub fn finalize(&mut self) -> Result<(), LogError> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let r = self.router.output(self);
        self.buf.clear();
        self.regular_offset = 0;
        r
    }

    /// Like [`finalize`](Self::finalize), but write errors and panics raised
    /// by the backend are dropped.
    pub fn finalize_or_discard(&mut self) {
        if panic::catch_unwind(AssertUnwindSafe(|| self.finalize())).is_err() {
            self.buf.clear();
            self.regular_offset = 0;
        }
    }
}

impl Drop for LogEntry<'_> {
    fn drop(&mut self) {
        self.finalize_or_discard();
    }
}

impl fmt::Write for LogEntry<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buf.extend_from_slice(s.as_bytes());
        Ok(())
    }
}

/// `flush` only flushes the entry's own buffer, which has nothing pending.
/// Use [`LogEntry::finalize`] to send it to the router.
impl io::Write for LogEntry<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Debug for LogEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogEntry")
            .field("location", &self.location)
            .field("tag", &self.tag)
            .field("priority", &self.priority)
            .field("len", &self.buf.len())
            .field("regular_offset", &self.regular_offset)
            .finish()
    }
}
