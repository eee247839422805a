#![allow(dead_code)]

use std::{
    collections::VecDeque,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use bookkeeper::{config::ConfigManager, ledger::Clock, AccountingSystem};
use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated home directory and a config manager rooted in it.
pub fn setup_test_env() -> (PathBuf, ConfigManager) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let config_manager =
        ConfigManager::with_base_dir(base.clone()).expect("create config manager for temp dir");
    (base, config_manager)
}

/// Hands out pre-arranged timestamps, then repeats the last one.
pub struct ScriptedClock {
    queue: Mutex<VecDeque<DateTime<Utc>>>,
    last: Mutex<DateTime<Utc>>,
}

impl ScriptedClock {
    pub fn new(times: impl IntoIterator<Item = DateTime<Utc>>) -> Self {
        Self {
            queue: Mutex::new(times.into_iter().collect()),
            last: Mutex::new(at(0, 0, 0)),
        }
    }
}

impl Clock for ScriptedClock {
    fn now(&self) -> DateTime<Utc> {
        let mut last = self.last.lock().expect("clock lock");
        if let Some(next) = self.queue.lock().expect("clock lock").pop_front() {
            *last = next;
        }
        *last
    }
}

/// 2024-06-01 at the given wall time, UTC.
pub fn at(hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, hour, minute, second)
        .single()
        .expect("valid timestamp")
}

pub fn books_with_clock(times: impl IntoIterator<Item = DateTime<Utc>>) -> AccountingSystem {
    AccountingSystem::with_clock(Arc::new(ScriptedClock::new(times)))
}
