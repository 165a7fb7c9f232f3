// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`editor`] - Toolbar, day sections and editable news rows
//! - [`preview`] - Scaled card next to the editor and the full-size export screen
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Inline edit fields, popovers and the loading spinner
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Embedded SVG icons
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod editor;
pub mod icons;
pub mod notifications;
pub mod preview;
pub mod styles;
pub mod theming;
pub mod widgets;
