// SPDX-License-Identifier: MPL-2.0
//! Custom widgets and the interaction state behind them.

pub mod inline_edit;
pub mod popover;
pub mod spinner;

pub use inline_edit::InlineEdit;
pub use popover::Popovers;
pub use spinner::Spinner;
