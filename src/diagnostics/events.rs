// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// User interactions worth correlating with later warnings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// A nav link was chosen.
    NavigateTo {
        /// Section identifier (`home`, `projects`, ...).
        section: String,
    },
    /// The narrow-layout menu was opened or closed with the hamburger button.
    ToggleMenu,
    /// The window close button was pressed.
    CloseWindow,
}

/// Application state transitions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AppStateEvent {
    /// The page was mounted and the banner request issued.
    PageMounted,
    /// The banner resolved to a generated image.
    BannerGenerated,
    /// The banner resolved to the bundled fallback asset.
    BannerFallback {
        /// Short reason (`transport`, `service`, `malformed`).
        reason: String,
    },
    /// An animated section started its reveal.
    SectionRevealed {
        section: String,
    },
}

/// A diagnostic event with its capture time.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
    AppState {
        state: AppStateEvent,
    },
    /// Something degraded but the page kept working.
    Warning {
        message: String,
    },
    Error {
        message: String,
    },
}
