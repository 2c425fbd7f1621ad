/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::borrow::Cow;
use std::io;
use std::path::PathBuf;

use crate::LogError;

mod console;
pub use console::{ConsoleBackend, ConsoleTarget};

mod file;
pub use file::FileBackend;

mod func;
pub use func::FuncBackend;

mod null;
pub use null::NullBackend;

/// A sink for raw log bytes.
///
/// `write_data` receives the bytes of exactly one log entry, without any
/// framing added. Implementations are owned by a single channel of the
/// router, which serializes all calls.
pub trait LogBackend: Send {
    fn write_data(&mut self, data: &[u8]) -> io::Result<()>;

    /// Re-acquire the underlying resource, e.g. after the file was rotated.
    fn reopen(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub type BoxLogBackend = Box<dyn LogBackend>;

impl<T: LogBackend + ?Sized> LogBackend for Box<T> {
    fn write_data(&mut self, data: &[u8]) -> io::Result<()> {
        (**self).write_data(data)
    }

    fn reopen(&mut self) -> io::Result<()> {
        (**self).reopen()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogBackendBuilder {
    Stdout,
    Stderr,
    Null,
    /// append to the file with this path
    File(PathBuf),
}

impl LogBackendBuilder {
    /// Resolve a backend designator, `None` is returned for an empty name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "" => None,
            "cout" | "stdout" | "console" => Some(LogBackendBuilder::Stdout),
            "cerr" | "stderr" => Some(LogBackendBuilder::Stderr),
            "null" | "/dev/null" => Some(LogBackendBuilder::Null),
            path => Some(LogBackendBuilder::File(PathBuf::from(path))),
        }
    }

    pub fn name(&self) -> Cow<'_, str> {
        match self {
            LogBackendBuilder::Stdout => Cow::Borrowed("stdout"),
            LogBackendBuilder::Stderr => Cow::Borrowed("stderr"),
            LogBackendBuilder::Null => Cow::Borrowed("null"),
            LogBackendBuilder::File(path) => path.to_string_lossy(),
        }
    }

    pub fn build(&self) -> Result<BoxLogBackend, LogError> {
        match self {
            LogBackendBuilder::Stdout => Ok(Box::new(ConsoleBackend::new(ConsoleTarget::Stdout))),
            LogBackendBuilder::Stderr => Ok(Box::new(ConsoleBackend::new(ConsoleTarget::Stderr))),
            LogBackendBuilder::Null => Ok(Box::new(NullBackend)),
            LogBackendBuilder::File(path) => {
                let backend = FileBackend::open(path).map_err(|e| LogError::BackendOpen {
                    name: path.display().to_string(),
                    source: e,
                })?;
                Ok(Box::new(backend))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name() {
        assert_eq!(LogBackendBuilder::from_name(""), None);
        assert_eq!(
            LogBackendBuilder::from_name("cout"),
            Some(LogBackendBuilder::Stdout)
        );
        assert_eq!(
            LogBackendBuilder::from_name("stderr"),
            Some(LogBackendBuilder::Stderr)
        );
        assert_eq!(
            LogBackendBuilder::from_name("null"),
            Some(LogBackendBuilder::Null)
        );
        assert_eq!(
            LogBackendBuilder::from_name("/var/log/trace.log"),
            Some(LogBackendBuilder::File(PathBuf::from("/var/log/trace.log")))
        );
    }

    #[test]
    fn name() {
        assert_eq!(LogBackendBuilder::Stdout.name(), "stdout");
        assert_eq!(
            LogBackendBuilder::File(PathBuf::from("a/b.log")).name(),
            "a/b.log"
        );
    }

    #[test]
    fn build_invalid_file() {
        let dir = std::env::temp_dir().join(format!("tierlog-missing-{}", fastrand::u64(..)));
        let builder = LogBackendBuilder::File(dir.join("sub").join("trace.log"));
        match builder.build() {
            Err(LogError::BackendOpen { name, .. }) => assert!(name.ends_with("trace.log")),
            _ => panic!("open of a file in a missing directory should fail"),
        }
    }
}
