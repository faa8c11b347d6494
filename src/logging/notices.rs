//! User-facing notices emitted by the catalog
//!
//! The catalog reports load progress through a [`NoticeSink`]: short messages
//! with a severity, plus small tables sampling the fetched data. Sinks are
//! observers only; nothing they do feeds back into catalog behavior.
//!
//! Two sinks ship with the crate:
//! - [`TracingNoticeSink`] forwards everything to `tracing` (the default)
//! - [`MemoryNoticeSink`] buffers notices for a presentation layer to drain

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// Observer for catalog notices
pub trait NoticeSink: Send + Sync {
    /// Record a message with a severity
    fn notice(&self, level: NoticeLevel, message: &str);

    /// Record a titled table of rows
    fn table(&self, title: &str, rows: &[Value]);

    fn info(&self, message: &str) {
        self.notice(NoticeLevel::Info, message);
    }

    fn success(&self, message: &str) {
        self.notice(NoticeLevel::Success, message);
    }

    fn error(&self, message: &str) {
        self.notice(NoticeLevel::Error, message);
    }
}

/// Forwards notices to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNoticeSink;

impl NoticeSink for TracingNoticeSink {
    fn notice(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Info => tracing::info!(notice = "info", "{message}"),
            NoticeLevel::Success => tracing::info!(notice = "success", "{message}"),
            NoticeLevel::Error => tracing::error!(notice = "error", "{message}"),
        }
    }

    fn table(&self, title: &str, rows: &[Value]) {
        tracing::info!(notice = "table", rows = rows.len(), "{title}");
        for row in rows {
            tracing::debug!(table = %title, row = %row, "Table row");
        }
    }
}

/// What kind of entry a buffered notice is
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum NoticeKind {
    Message(NoticeLevel),
    Table(Vec<Value>),
}

/// One buffered notice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub kind: NoticeKind,
    pub timestamp: DateTime<Utc>,
}

/// Notices kept by [`MemoryNoticeSink::new`] before the oldest are dropped
pub const DEFAULT_NOTICE_CAPACITY: usize = 100;

/// Bounded in-memory notice buffer
///
/// Once `capacity` notices are buffered, each new notice evicts the oldest.
/// Ids increase monotonically for the lifetime of the sink, including across
/// evictions and [`MemoryNoticeSink::clear`].
#[derive(Debug)]
pub struct MemoryNoticeSink {
    entries: Mutex<VecDeque<Notice>>,
    next_id: AtomicU64,
    capacity: usize,
}

impl Default for MemoryNoticeSink {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_NOTICE_CAPACITY)
    }
}

impl MemoryNoticeSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer at most `capacity` notices (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            next_id: AtomicU64::new(0),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of the buffered notices, oldest first
    pub fn entries(&self) -> Vec<Notice> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .cloned()
            .collect()
    }

    /// Drop every buffered notice
    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }

    fn push(&self, message: &str, kind: NoticeKind) {
        let notice = Notice {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            message: message.to_string(),
            kind,
            timestamp: Utc::now(),
        };
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        while entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(notice);
    }
}

impl NoticeSink for MemoryNoticeSink {
    fn notice(&self, level: NoticeLevel, message: &str) {
        self.push(message, NoticeKind::Message(level));
    }

    fn table(&self, title: &str, rows: &[Value]) {
        self.push(title, NoticeKind::Table(rows.to_vec()));
    }
}
