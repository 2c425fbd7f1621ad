/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tierlog::{
    LogBackendBuilder, LogConfig, LogError, LogSettings, LoggingLevel, NullBackend, Priority,
    settings,
};

// the settings are process wide, tests must not overlap
static SERIAL: Mutex<()> = Mutex::new(());

fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(PoisonError::into_inner)
}

type Captured = Arc<Mutex<Vec<u8>>>;

fn install_capture() -> (Captured, Captured) {
    let low: Captured = Arc::default();
    let high: Captured = Arc::default();
    let (l, h) = (Arc::clone(&low), Arc::clone(&high));
    tierlog::install_custom_logging_functions(
        move |data: &[u8]| l.lock().unwrap().extend_from_slice(data),
        move |data: &[u8]| h.lock().unwrap().extend_from_slice(data),
    )
    .unwrap();
    (low, high)
}

#[test]
fn not_initialized() {
    let _serial = serial();
    settings::teardown();

    assert!(settings::current().is_none());
    assert!(matches!(
        tierlog::restore_default_logging(),
        Err(LogError::NotInitialized)
    ));
    assert!(matches!(
        tierlog::install_trace_backend("null"),
        Err(LogError::NotInitialized)
    ));
    assert!(matches!(
        tierlog::install_custom_logging_functions(|_: &[u8]| {}, |_: &[u8]| {}),
        Err(LogError::NotInitialized)
    ));
    // statements are dropped silently
    tierlog::error_log!("nobody listens");
}

#[test]
fn custom_functions() {
    let _serial = serial();
    settings::init();
    tierlog::set_logging_level(LoggingLevel::Info).unwrap();
    let (low, high) = install_capture();

    tierlog::info_log!("iteration {}", 10);
    tierlog::warning_log!("overfitting detected");

    assert_eq!(low.lock().unwrap().as_slice(), b"iteration 10\n");
    assert_eq!(high.lock().unwrap().as_slice(), b"overfitting detected\n");
    settings::teardown();
}

#[test]
fn restore_defaults_drops_functions() {
    let _serial = serial();
    let s = settings::init();
    s.router()
        .reset_backends(Box::new(NullBackend), Box::new(NullBackend));
    let (low, high) = install_capture();

    let mut entry = s.router().entry("Test", Priority::Resources);
    entry.append("created before restore");
    tierlog::restore_default_logging().unwrap();
    assert_eq!(Arc::strong_count(&low), 1);
    assert_eq!(Arc::strong_count(&high), 1);
    drop(entry);

    assert!(low.lock().unwrap().is_empty());
    assert!(high.lock().unwrap().is_empty());
    settings::teardown();
}

#[test]
fn extended_info_and_trace() {
    let _serial = serial();
    settings::init();
    let (low, _high) = install_capture();
    tierlog::set_logging_level(LoggingLevel::Verbose).unwrap();
    tierlog::set_extended_info(true).unwrap();

    let path = std::env::temp_dir().join(format!(
        "tierlog-trace-{}-{}.log",
        std::process::id(),
        fastrand::u64(..)
    ));
    tierlog::install_trace_backend(path.to_str().unwrap()).unwrap();

    tierlog::notice_log!("visible");
    tierlog::debug_log!("trace only");
    tierlog::install_trace_backend("").unwrap();
    tierlog::debug_log!("nowhere");

    let low = String::from_utf8(low.lock().unwrap().clone()).unwrap();
    assert!(low.starts_with("Notice: "));
    assert!(low.contains(" global.rs:"));
    assert!(low.ends_with(" visible\n"));

    let trace = String::from_utf8(std::fs::read(&path).unwrap()).unwrap();
    let lines: Vec<&str> = trace.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Notice: "));
    assert!(lines[1].starts_with("Debug: "));
    assert!(lines[1].ends_with(" trace only"));

    let _ = std::fs::remove_file(&path);
    settings::teardown();
}

#[test]
fn install_from_config() {
    let _serial = serial();
    let mut config = LogConfig::with_level(LoggingLevel::Debug);
    config.set_low_priority_backend(LogBackendBuilder::Null);
    config.set_high_priority_backend(LogBackendBuilder::Null);
    let fresh = Arc::new(LogSettings::with_config(&config).unwrap());

    settings::install(Arc::clone(&fresh));
    let current = settings::current().unwrap();
    assert!(Arc::ptr_eq(&current, &fresh));
    assert_eq!(current.router().threshold(), Priority::Debug);

    let removed = settings::teardown().unwrap();
    assert!(Arc::ptr_eq(&removed, &fresh));
    assert!(settings::current().is_none());
}
