/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::io::{self, Write};

use super::LogBackend;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleTarget {
    Stdout,
    Stderr,
}

pub struct ConsoleBackend {
    target: ConsoleTarget,
}

impl ConsoleBackend {
    pub fn new(target: ConsoleTarget) -> Self {
        ConsoleBackend { target }
    }

    pub fn target(&self) -> ConsoleTarget {
        self.target
    }
}

impl LogBackend for ConsoleBackend {
    fn write_data(&mut self, data: &[u8]) -> io::Result<()> {
        match self.target {
            ConsoleTarget::Stdout => {
                let mut io = io::stdout().lock();
                io.write_all(data)?;
                io.flush()
            }
            ConsoleTarget::Stderr => io::stderr().lock().write_all(data),
        }
    }
}
