// SPDX-License-Identifier: MPL-2.0
//! Serializable diagnostics report.

use super::DiagnosticEventKind;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Instant;

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    /// RFC 3339 time the report was built.
    pub generated_at: String,
    pub iced_folio_version: String,
    pub collection_started_at: String,
    pub collection_duration_ms: u64,
    pub event_count: usize,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(started_at: DateTime<Utc>, duration_ms: u64, event_count: usize) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            iced_folio_version: env!("CARGO_PKG_VERSION").to_string(),
            collection_started_at: started_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            collection_duration_ms: duration_ms,
            event_count,
        }
    }
}

/// An event with its time expressed relative to collection start.
#[derive(Debug, Clone, Serialize)]
pub struct SerializableEvent {
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn new(timestamp: Instant, started_at: Instant, kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp_ms: timestamp.saturating_duration_since(started_at).as_millis() as u64,
            kind,
        }
    }

    fn type_name(&self) -> &'static str {
        match self.kind {
            DiagnosticEventKind::UserAction { .. } => "user_action",
            DiagnosticEventKind::AppState { .. } => "app_state",
            DiagnosticEventKind::Warning { .. } => "warning",
            DiagnosticEventKind::Error { .. } => "error",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub events: Vec<SerializableEvent>,
    /// Event count per type, sorted by type name.
    pub event_counts: BTreeMap<&'static str, usize>,
}

impl DiagnosticReport {
    #[must_use]
    pub fn new(metadata: ReportMetadata, events: Vec<SerializableEvent>) -> Self {
        let mut event_counts = BTreeMap::new();
        for event in &events {
            *event_counts.entry(event.type_name()).or_insert(0) += 1;
        }
        Self {
            metadata,
            events,
            event_counts,
        }
    }
}
