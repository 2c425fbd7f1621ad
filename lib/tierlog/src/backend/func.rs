/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::io;

use super::LogBackend;

/// Adapter that hands every entry to a caller supplied function.
pub struct FuncBackend<F> {
    func: F,
}

impl<F> FuncBackend<F>
where
    F: FnMut(&[u8]) + Send,
{
    pub fn new(func: F) -> Self {
        FuncBackend { func }
    }
}

impl<F> LogBackend for FuncBackend<F>
where
    F: FnMut(&[u8]) + Send,
{
    fn write_data(&mut self, data: &[u8]) -> io::Result<()> {
        (self.func)(data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn forward() {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&captured);
        let mut backend = FuncBackend::new(move |data: &[u8]| {
            sink.lock().unwrap().extend_from_slice(data);
        });
        backend.write_data(b"abc").unwrap();
        backend.write_data(b"def").unwrap();
        backend.reopen().unwrap();
        assert_eq!(captured.lock().unwrap().as_slice(), b"abcdef");
    }

    #[test]
    fn stateful() {
        let mut count = 0usize;
        {
            let mut backend = FuncBackend::new(|data: &[u8]| count += data.len());
            backend.write_data(b"12345").unwrap();
        }
        assert_eq!(count, 5);
    }
}
