// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Subscriptions are only returned while they have work to do. Iced drops a
//! subscription as soon as it is no longer returned, so closing a popover or
//! committing an edit also removes the window-wide pointer listener.

use super::Message;
use iced::{event, keyboard, mouse, time, Subscription};
use std::time::Duration;

/// Pointer and Escape listener, active while a popover is open or a field is
/// being edited.
pub fn create_dismiss_subscription(active: bool) -> Subscription<Message> {
    if !active {
        return Subscription::none();
    }
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Mouse(mouse::Event::ButtonPressed(_)) => Some(Message::PointerPressed),
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    })
}

/// Periodic tick driving the loading spinner and toast auto-dismiss.
pub fn create_tick_subscription(
    is_loading: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if is_loading || has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
