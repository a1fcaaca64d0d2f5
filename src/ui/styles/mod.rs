// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for page components.

pub mod button;
pub mod container;
pub mod icon;
pub mod tooltip;
