// SPDX-License-Identifier: MPL-2.0
//! Diagnostics: an in-memory record of what happened during a session.
//!
//! - [`DiagnosticsHandle`]: cloneable sender handed to async tasks
//! - [`DiagnosticsCollector`]: owns the [`CircularBuffer`] and exports JSON
//! - [`DiagnosticEventKind`]: actions, state changes, warnings, errors
//!
//! Warnings and errors are mirrored to the `log` facade so they show up in
//! the terminal when `RUST_LOG` enables them.

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{AppStateEvent, DiagnosticEvent, DiagnosticEventKind, UserAction};
pub use report::{DiagnosticReport, ReportMetadata, SerializableEvent};
