// SPDX-License-Identifier: MPL-2.0
//! Editor message types re-exported by the facade.

use crate::domain::calendar::{Importance, ItemId, Weekday};
use crate::ui::widgets::{inline_edit, popover};

/// Toolbar controls acting on the calendar settings.
#[derive(Debug, Clone)]
pub enum ToolbarMessage {
    DateRangeChanged(String),
    Import,
    ToggleBackground,
    PaddingChanged(f32),
    MarginChanged(f32),
    ShowPreview,
}

/// Actions on one row.
#[derive(Debug, Clone)]
pub enum RowMessage {
    SetImportance(Importance),
    ToggleFlag(&'static str),
    Duplicate,
    Remove,
}

/// Messages emitted by the editor widgets.
#[derive(Debug, Clone)]
pub enum Message {
    Toolbar(ToolbarMessage),
    Row(ItemId, RowMessage),
    AddItem(Weekday),
    Edit(inline_edit::Message),
    Popover(popover::Message),
}

impl From<ToolbarMessage> for Message {
    fn from(message: ToolbarMessage) -> Self {
        Message::Toolbar(message)
    }
}

impl From<inline_edit::Message> for Message {
    fn from(message: inline_edit::Message) -> Self {
        Message::Edit(message)
    }
}

impl From<popover::Message> for Message {
    fn from(message: popover::Message) -> Self {
        Message::Popover(message)
    }
}
