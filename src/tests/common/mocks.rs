use std::cell::Cell;

use crate::error::{ NavigationError, StorageError };
use crate::utils::{ MemoryStore, PageNavigator, PreferenceStore };

/// Records every path it is asked to open.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub visited: Vec<String>,
}

impl PageNavigator for RecordingNavigator {
    fn navigate(&mut self, path: &str) -> Result<(), NavigationError> {
        self.visited.push(path.to_string());
        Ok(())
    }
}

pub struct RejectingNavigator;

impl PageNavigator for RejectingNavigator {
    fn navigate(&mut self, path: &str) -> Result<(), NavigationError> {
        Err(NavigationError::Rejected(path.to_string()))
    }
}

/// Storage that can be switched off for reads or writes, backed by memory.
#[derive(Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub fail_reads: Cell<bool>,
    pub fail_writes: Cell<bool>,
}

impl PreferenceStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.get() {
            return Err(StorageError::Unavailable("reads disabled".to_string()));
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Access("quota exceeded".to_string()));
        }
        self.inner.set(key, value)
    }
}
