// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! UI strings are Fluent messages compiled into the binary for English,
//! Thai and Lao. Calendar content is never translated: it is what the user
//! typed or imported.

pub mod fluent;
