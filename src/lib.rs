// SPDX-License-Identifier: MPL-2.0
//! `float_chat` is a floating chat support widget built with the Iced GUI framework.
//!
//! A circular launcher sits over the window and opens a draggable, resizable
//! chat panel anchored to it. Messages go to an HTTP chat backend, and the
//! backend session survives restarts.
//!
//! The pointer gestures and geometry live in [`ui::state`], independent of any
//! window, so they can be driven directly in tests.

pub mod app;
pub mod chat;
pub mod config;
pub mod error;
pub mod i18n;
pub mod speech;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
