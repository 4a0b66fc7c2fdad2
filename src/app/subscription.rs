// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window close requests are always observed so the viewer can be torn down.
//! Keyboard, mouse and touch input is only routed while the viewer accepts
//! it; once the catalog failed or the viewer was torn down the input
//! listeners are dropped.

use super::Message;
use crate::ui::viewer::component;
use iced::{event, mouse, window, Subscription};

pub fn create_event_subscription(accepts_input: bool) -> Subscription<Message> {
    if accepts_input {
        event::listen_with(route_input)
    } else {
        event::listen_with(route_close_only)
    }
}

fn route_close_only(
    event: event::Event,
    _status: event::Status,
    window_id: window::Id,
) -> Option<Message> {
    match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        _ => None,
    }
}

fn route_input(
    event: event::Event,
    status: event::Status,
    window_id: window::Id,
) -> Option<Message> {
    if let event::Event::Window(window_event) = &event {
        return matches!(window_event, window::Event::CloseRequested)
            .then_some(Message::WindowCloseRequested(window_id));
    }

    // Pointer position is tracked even over widgets so a swipe can end on
    // top of a caption.
    let tracks_pointer = matches!(
        event,
        event::Event::Mouse(mouse::Event::CursorMoved { .. } | mouse::Event::CursorLeft)
    );

    if tracks_pointer || status == event::Status::Ignored {
        Some(raw(window_id, event))
    } else {
        None
    }
}

fn raw(window: window::Id, event: event::Event) -> Message {
    Message::Viewer(component::Message::RawEvent { window, event })
}
