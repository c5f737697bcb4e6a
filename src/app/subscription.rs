// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Pointer motion, release and window size are tracked globally, whether or
//! not a widget captured the event. A gesture started on the launcher or the
//! panel must keep following the pointer across the whole window and end on a
//! release anywhere.

use super::Message;
use iced::{event, mouse, window, Event, Subscription};

/// Maps a native event to the message the widget cares about, if any.
#[must_use]
pub fn route_event(event: &Event) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(*position))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        Event::Window(window::Event::Opened { size, .. } | window::Event::Resized(size)) => {
            Some(Message::ViewportResized(*size))
        }
        _ => None,
    }
}

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| route_event(&event))
}
