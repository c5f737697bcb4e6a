// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the launcher and chat panel.

pub mod button;
pub mod container;
pub mod tooltip;
