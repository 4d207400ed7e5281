// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard navigation is only routed while the detail view is shown; the
//! periodic tick only runs while something animates.

use super::Message;
use crate::config::SPIN_TICK_INTERVAL_MS;
use crate::gallery::{Direction, ViewMode};
use iced::keyboard::{self, key, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Creates the keyboard subscription for the given view mode.
///
/// Arrow keys step through the gallery and Escape returns to the grid.
/// Events already captured by a widget are ignored.
pub fn create_event_subscription(mode: ViewMode) -> Subscription<Message> {
    match mode {
        ViewMode::Grid => Subscription::none(),
        ViewMode::Detail => event::listen_with(|event, status, _window_id| {
            if status == event::Status::Captured {
                return None;
            }
            match event {
                event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                    map_key(&key)
                }
                _ => None,
            }
        }),
    }
}

fn map_key(key: &Key) -> Option<Message> {
    match key {
        Key::Named(key::Named::ArrowLeft) => Some(Message::KeyboardStep(Direction::Previous)),
        Key::Named(key::Named::ArrowRight) => Some(Message::KeyboardStep(Direction::Next)),
        Key::Named(key::Named::Escape) => Some(Message::KeyboardBack),
        _ => None,
    }
}

/// Creates the periodic tick subscription, active while loading or spinning.
pub fn create_tick_subscription(is_loading: bool, is_spinning: bool) -> Subscription<Message> {
    if is_loading || is_spinning {
        time::every(Duration::from_millis(SPIN_TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_map_to_steps() {
        assert!(matches!(
            map_key(&Key::Named(key::Named::ArrowLeft)),
            Some(Message::KeyboardStep(Direction::Previous))
        ));
        assert!(matches!(
            map_key(&Key::Named(key::Named::ArrowRight)),
            Some(Message::KeyboardStep(Direction::Next))
        ));
    }

    #[test]
    fn escape_maps_to_back() {
        assert!(matches!(
            map_key(&Key::Named(key::Named::Escape)),
            Some(Message::KeyboardBack)
        ));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert!(map_key(&Key::Named(key::Named::Space)).is_none());
        assert!(map_key(&Key::Character("n".into())).is_none());
    }
}
