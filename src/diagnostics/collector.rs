// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector and the cloneable handle used to feed it.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use super::{
    AppStateEvent, BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind,
    DiagnosticReport, ReportMetadata, SerializableEvent, UserAction,
};
use crate::error::Result;

const LOG_TARGET: &str = "iced_folio::diagnostics";

/// Sending half of the diagnostics channel.
///
/// Cheap to clone and `Send`, so async tasks can report without touching
/// UI state. Every send is non-blocking: when the channel is full the event
/// is dropped. Warnings and errors are also written to the `log` facade.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_action(&self, action: UserAction) {
        self.send(DiagnosticEventKind::UserAction {
            action,
            details: None,
        });
    }

    pub fn log_state(&self, state: AppStateEvent) {
        log::debug!(target: LOG_TARGET, "state: {:?}", state);
        self.send(DiagnosticEventKind::AppState { state });
    }

    pub fn log_warning(&self, message: impl Into<String>) {
        let message = message.into();
        log::warn!(target: LOG_TARGET, "{}", message);
        self.send(DiagnosticEventKind::Warning { message });
    }

    pub fn log_error(&self, message: impl Into<String>) {
        let message = message.into();
        log::error!(target: LOG_TARGET, "{}", message);
        self.send(DiagnosticEventKind::Error { message });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Receives events from [`DiagnosticsHandle`]s and keeps the most recent
/// ones in a [`CircularBuffer`].
///
/// The UI thread owns the collector and drains the channel with
/// [`process_pending`](Self::process_pending) on every tick.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    collection_started_at: Instant,
    collection_started_at_utc: DateTime<Utc>,
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish()
    }
}

const DEFAULT_CHANNEL_CAPACITY: usize = 100;

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every queued event into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Records an action directly, bypassing the channel.
    pub fn log_action(&mut self, action: UserAction) {
        self.buffer.push(DiagnosticEvent::new(DiagnosticEventKind::UserAction {
            action,
            details: None,
        }));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Serializes the buffered events as a pretty-printed JSON report.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.build_report())?)
    }

    /// Writes the JSON report to `path`. The content goes to a `.json.tmp`
    /// sibling first and is renamed into place.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        let json = self.export_json()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, json)?;
        if let Err(err) = fs::rename(&temp_path, path) {
            let _ = fs::remove_file(&temp_path);
            return Err(err.into());
        }

        Ok(path.to_path_buf())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn build_report(&self) -> DiagnosticReport {
        let duration_ms = self.collection_started_at.elapsed().as_millis() as u64;
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| {
                SerializableEvent::new(
                    event.timestamp,
                    self.collection_started_at,
                    event.kind.clone(),
                )
            })
            .collect();
        let metadata =
            ReportMetadata::new(self.collection_started_at_utc, duration_ms, events.len());

        DiagnosticReport::new(metadata, events)
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn handle_events_arrive_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_warning("banner request failed");
        assert!(collector.is_empty(), "events wait in the channel");

        collector.process_pending();
        assert_eq!(collector.len(), 1);
        let event = collector.iter().next().expect("one event");
        assert_eq!(
            event.kind,
            DiagnosticEventKind::Warning {
                message: "banner request failed".to_string()
            }
        );
    }

    #[test]
    fn handle_is_usable_from_another_thread() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        std::thread::spawn(move || handle.log_state(AppStateEvent::BannerGenerated))
            .join()
            .expect("thread should finish");

        collector.process_pending();
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn full_channel_drops_events_without_blocking() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(1000));
        let handle = collector.handle();

        for i in 0..(DEFAULT_CHANNEL_CAPACITY + 25) {
            handle.log_error(format!("error {i}"));
        }
        collector.process_pending();

        assert_eq!(collector.len(), DEFAULT_CHANNEL_CAPACITY);
    }

    #[test]
    fn buffer_keeps_most_recent_events() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(100));
        for _ in 0..150 {
            collector.log_action(UserAction::ToggleMenu);
        }
        assert_eq!(collector.len(), 100);
        assert_eq!(collector.capacity(), 100);
    }

    #[test]
    fn export_json_contains_metadata_and_events() {
        let mut collector = DiagnosticsCollector::default();
        collector.log_action(UserAction::NavigateTo {
            section: "contact".to_string(),
        });

        let json = collector.export_json().expect("export should succeed");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["metadata"]["event_count"], 1);
        assert_eq!(value["events"][0]["type"], "user_action");
        assert_eq!(value["events"][0]["action"]["section"], "contact");
        assert_eq!(value["event_counts"]["user_action"], 1);
    }

    #[test]
    fn export_to_file_writes_report_and_removes_temp_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("diagnostics.json");
        let collector = DiagnosticsCollector::default();

        let written = collector.export_to_file(&path).expect("export should succeed");

        assert_eq!(written, path);
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }
}
