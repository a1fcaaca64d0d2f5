// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window events are always listened to. The animation tick only runs while
//! something on the page is moving.

use super::Message;
use crate::config::FRAME_INTERVAL_MS;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Routes window close requests and resizes.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Whether any animation needs frames.
#[must_use]
pub fn needs_ticks(banner_loading: bool, scrolling: bool, revealing: bool) -> bool {
    banner_loading || scrolling || revealing
}

/// Creates the animation frame subscription for the spinner, smooth
/// scrolling and section reveals.
pub fn create_tick_subscription(
    banner_loading: bool,
    scrolling: bool,
    revealing: bool,
) -> Subscription<Message> {
    if needs_ticks(banner_loading, scrolling, revealing) {
        time::every(Duration::from_millis(FRAME_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_page_needs_no_ticks() {
        assert!(!needs_ticks(false, false, false));
    }

    #[test]
    fn any_animation_needs_ticks() {
        assert!(needs_ticks(true, false, false));
        assert!(needs_ticks(false, true, false));
        assert!(needs_ticks(false, false, true));
    }
}
