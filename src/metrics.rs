//! Lightweight global metrics for RosterDB.
//!
//! Атомарные счётчики процесса:
//! - snapshot load / write
//! - операции реестра (add/update/remove и отказы)

use std::sync::atomic::{AtomicU64, Ordering};

// ----- Snapshot -----
static SNAPSHOT_LOADS: AtomicU64 = AtomicU64::new(0);
static SNAPSHOT_LOAD_FAILURES: AtomicU64 = AtomicU64::new(0);
static SNAPSHOT_WRITES: AtomicU64 = AtomicU64::new(0);
static SNAPSHOT_WRITE_FAILURES: AtomicU64 = AtomicU64::new(0);
static SNAPSHOT_BYTES_WRITTEN: AtomicU64 = AtomicU64::new(0);

// ----- Registry ops -----
static STUDENTS_ADDED: AtomicU64 = AtomicU64::new(0);
static STUDENTS_UPDATED: AtomicU64 = AtomicU64::new(0);
static STUDENTS_REMOVED: AtomicU64 = AtomicU64::new(0);
static OPS_REJECTED: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    // Snapshot
    pub snapshot_loads: u64,
    pub snapshot_load_failures: u64,
    pub snapshot_writes: u64,
    pub snapshot_write_failures: u64,
    pub snapshot_bytes_written: u64,

    // Registry ops
    pub students_added: u64,
    pub students_updated: u64,
    pub students_removed: u64,
    pub ops_rejected: u64,
}

impl MetricsSnapshot {
    pub fn avg_snapshot_bytes(&self) -> f64 {
        if self.snapshot_writes == 0 {
            0.0
        } else {
            self.snapshot_bytes_written as f64 / self.snapshot_writes as f64
        }
    }
}

// ----- Recorders (Snapshot) -----
pub fn record_snapshot_load() {
    SNAPSHOT_LOADS.fetch_add(1, Ordering::Relaxed);
}

pub fn record_snapshot_load_failure() {
    SNAPSHOT_LOAD_FAILURES.fetch_add(1, Ordering::Relaxed);
}

pub fn record_snapshot_write(bytes: usize) {
    SNAPSHOT_WRITES.fetch_add(1, Ordering::Relaxed);
    SNAPSHOT_BYTES_WRITTEN.fetch_add(bytes as u64, Ordering::Relaxed);
}

pub fn record_snapshot_write_failure() {
    SNAPSHOT_WRITE_FAILURES.fetch_add(1, Ordering::Relaxed);
}

// ----- Recorders (Registry ops) -----
pub fn record_added() {
    STUDENTS_ADDED.fetch_add(1, Ordering::Relaxed);
}

pub fn record_updated() {
    STUDENTS_UPDATED.fetch_add(1, Ordering::Relaxed);
}

pub fn record_removed() {
    STUDENTS_REMOVED.fetch_add(1, Ordering::Relaxed);
}

pub fn record_rejected() {
    OPS_REJECTED.fetch_add(1, Ordering::Relaxed);
}

// ----- Snapshot / Reset -----
pub fn snapshot() -> MetricsSnapshot {
    MetricsSnapshot {
        snapshot_loads: SNAPSHOT_LOADS.load(Ordering::Relaxed),
        snapshot_load_failures: SNAPSHOT_LOAD_FAILURES.load(Ordering::Relaxed),
        snapshot_writes: SNAPSHOT_WRITES.load(Ordering::Relaxed),
        snapshot_write_failures: SNAPSHOT_WRITE_FAILURES.load(Ordering::Relaxed),
        snapshot_bytes_written: SNAPSHOT_BYTES_WRITTEN.load(Ordering::Relaxed),

        students_added: STUDENTS_ADDED.load(Ordering::Relaxed),
        students_updated: STUDENTS_UPDATED.load(Ordering::Relaxed),
        students_removed: STUDENTS_REMOVED.load(Ordering::Relaxed),
        ops_rejected: OPS_REJECTED.load(Ordering::Relaxed),
    }
}

pub fn reset() {
    SNAPSHOT_LOADS.store(0, Ordering::Relaxed);
    SNAPSHOT_LOAD_FAILURES.store(0, Ordering::Relaxed);
    SNAPSHOT_WRITES.store(0, Ordering::Relaxed);
    SNAPSHOT_WRITE_FAILURES.store(0, Ordering::Relaxed);
    SNAPSHOT_BYTES_WRITTEN.store(0, Ordering::Relaxed);

    STUDENTS_ADDED.store(0, Ordering::Relaxed);
    STUDENTS_UPDATED.store(0, Ordering::Relaxed);
    STUDENTS_REMOVED.store(0, Ordering::Relaxed);
    OPS_REJECTED.store(0, Ordering::Relaxed);
}
