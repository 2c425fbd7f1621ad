/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::io::Write;

use chrono::format::Numeric::*;
use chrono::format::{Fixed, Item, Pad};
use chrono::{DateTime, Local, TimeZone};

pub const LOCAL_TIME: &[Item<'static>] = &[
    Item::Numeric(Year, Pad::Zero),
    Item::Literal("-"),
    Item::Numeric(Month, Pad::Zero),
    Item::Literal("-"),
    Item::Numeric(Day, Pad::Zero),
    Item::Literal(" "),
    Item::Numeric(Hour, Pad::Zero),
    Item::Literal(":"),
    Item::Numeric(Minute, Pad::Zero),
    Item::Literal(":"),
    Item::Numeric(Second, Pad::Zero),
    Item::Fixed(Fixed::Nanosecond6),
];

/// Drop everything up to and including the last path separator.
pub fn strip_file_name(path: &str) -> &str {
    #[cfg(windows)]
    let sep = memchr::memrchr2(b'/', b'\\', path.as_bytes());
    #[cfg(not(windows))]
    let sep = memchr::memrchr(b'/', path.as_bytes());

    match sep {
        Some(p) => &path[p + 1..],
        None => path,
    }
}

pub(crate) fn write_time<Tz>(buf: &mut Vec<u8>, datetime: &DateTime<Tz>)
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let fmt = datetime.format_with_items(LOCAL_TIME.iter());
    // writing into a Vec never fails
    let _ = write!(buf, "{fmt}");
}

pub(crate) fn write_local_time(buf: &mut Vec<u8>) {
    write_time(buf, &Local::now());
}

pub(crate) fn write_line_number(buf: &mut Vec<u8>, line: u32) {
    let mut b = itoa::Buffer::new();
    buf.extend_from_slice(b.format(line).as_bytes());
}
