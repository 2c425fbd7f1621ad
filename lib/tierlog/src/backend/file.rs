/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::LogBackend;

pub struct FileBackend {
    path: PathBuf,
    file: File,
}

impl FileBackend {
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = open_append(path)?;
        Ok(FileBackend {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

impl LogBackend for FileBackend {
    fn write_data(&mut self, data: &[u8]) -> io::Result<()> {
        self.file.write_all(data)
    }

    fn reopen(&mut self) -> io::Result<()> {
        // keep the old handle if the path can not be opened again
        self.file = open_append(&self.path)?;
        Ok(())
    }
}
