// SPDX-License-Identifier: MPL-2.0
//! Double-click-to-edit text fields.
//!
//! A field shows its committed value until it is double-clicked. While
//! editing, the text lives in a draft owned by [`InlineEdit`]; the owner of
//! the committed value only sees the draft once it is committed.
//!
//! - Enter commits single-line fields. Multi-line fields keep Enter for
//!   line breaks.
//! - A pointer press outside the field commits.
//! - Escape discards the draft.
//!
//! Only one field is edited at a time: starting a new edit commits the
//! previous one.

use crate::domain::calendar::{FieldUpdate, ItemId, NewsItem};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{container, mouse_area, text, text_editor, text_input, Id};
use iced::{Element, Length};

/// Id of the single-line input, used to focus it when editing starts.
pub const INPUT_ID: &str = "inline-edit-input";

/// Editable text fields of a news item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditField {
    Time,
    Description,
    Value,
}

impl EditField {
    /// Whether Enter inserts a line break instead of committing.
    #[must_use]
    pub fn is_multiline(self) -> bool {
        matches!(self, EditField::Description)
    }

    /// The committed value of this field on `item`.
    #[must_use]
    pub fn value_of(self, item: &NewsItem) -> &str {
        match self {
            EditField::Time => &item.time,
            EditField::Description => &item.description,
            EditField::Value => &item.value,
        }
    }

    #[must_use]
    pub fn update(self, text: String) -> FieldUpdate {
        match self {
            EditField::Time => FieldUpdate::Time(text),
            EditField::Description => FieldUpdate::Description(text),
            EditField::Value => FieldUpdate::Value(text),
        }
    }
}

/// One field of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditTarget {
    pub item: ItemId,
    pub field: EditField,
}

impl EditTarget {
    #[must_use]
    pub fn new(item: ItemId, field: EditField) -> Self {
        Self { item, field }
    }
}

/// Text being edited.
#[derive(Debug)]
pub enum Draft {
    Line(String),
    Text {
        content: text_editor::Content,
        /// The buffer reports one more line break than the text it was
        /// created from.
        appends_break: bool,
    },
}

impl Draft {
    fn new(field: EditField, committed: &str) -> Self {
        if field.is_multiline() {
            let content = text_editor::Content::with_text(committed);
            let appends_break = content
                .text()
                .strip_prefix(committed)
                .is_some_and(|rest| rest == "\n");
            Draft::Text {
                content,
                appends_break,
            }
        } else {
            Draft::Line(committed.to_string())
        }
    }

    fn into_text(self) -> String {
        match self {
            Draft::Line(line) => line,
            Draft::Text {
                content,
                appends_break,
            } => {
                let mut text = content.text();
                if appends_break && text.ends_with('\n') {
                    text.pop();
                }
                text
            }
        }
    }
}

/// Viewing or editing.
#[derive(Debug, Default)]
pub enum EditState {
    #[default]
    Viewing,
    Editing { target: EditTarget, draft: Draft },
}

/// A draft leaving the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub target: EditTarget,
    pub text: String,
}

impl Commit {
    #[must_use]
    pub fn into_update(self) -> (ItemId, FieldUpdate) {
        (self.target.item, self.target.field.update(self.text))
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Begin(EditTarget),
    Input(String),
    Action(text_editor::Action),
    Commit,
    PointerEntered(EditTarget),
    PointerLeft(EditTarget),
}

/// Application-wide inline edit state.
#[derive(Debug, Default)]
pub struct InlineEdit {
    state: EditState,
    hovered: Option<EditTarget>,
}

impl InlineEdit {
    #[must_use]
    pub fn active(&self) -> Option<EditTarget> {
        match &self.state {
            EditState::Viewing => None,
            EditState::Editing { target, .. } => Some(*target),
        }
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.active().is_some()
    }

    /// Starts editing `target` with `committed` as draft.
    ///
    /// Returns the commit of the edit that was active before, if any.
    pub fn begin(&mut self, target: EditTarget, committed: &str) -> Option<Commit> {
        if self.active() == Some(target) {
            return None;
        }
        let previous = self.commit();
        self.state = EditState::Editing {
            target,
            draft: Draft::new(target.field, committed),
        };
        // The double click that started the edit happened on the field.
        self.hovered = Some(target);
        previous
    }

    pub fn set_line(&mut self, value: String) {
        if let EditState::Editing {
            draft: Draft::Line(line),
            ..
        } = &mut self.state
        {
            *line = value;
        }
    }

    pub fn perform(&mut self, action: text_editor::Action) {
        if let EditState::Editing {
            draft: Draft::Text { content, .. },
            ..
        } = &mut self.state
        {
            content.perform(action);
        }
    }

    /// Ends editing and hands out the draft.
    pub fn commit(&mut self) -> Option<Commit> {
        match std::mem::take(&mut self.state) {
            EditState::Viewing => None,
            EditState::Editing { target, draft } => Some(Commit {
                target,
                text: draft.into_text(),
            }),
        }
    }

    /// Ends editing and drops the draft.
    pub fn discard(&mut self) -> Option<EditTarget> {
        match std::mem::take(&mut self.state) {
            EditState::Viewing => None,
            EditState::Editing { target, .. } => Some(target),
        }
    }

    /// Ends editing of an item that no longer exists.
    pub fn forget_item(&mut self, item: ItemId) {
        if self.active().is_some_and(|target| target.item == item) {
            self.state = EditState::Viewing;
        }
        if self.hovered.is_some_and(|target| target.item == item) {
            self.hovered = None;
        }
    }

    pub fn pointer_entered(&mut self, target: EditTarget) {
        self.hovered = Some(target);
    }

    pub fn pointer_left(&mut self, target: EditTarget) {
        if self.hovered == Some(target) {
            self.hovered = None;
        }
    }

    /// Handles a pointer press anywhere in the window: a press outside the
    /// active field commits it.
    pub fn pointer_pressed(&mut self) -> Option<Commit> {
        match self.active() {
            Some(active) if self.hovered != Some(active) => self.commit(),
            _ => None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &EditState {
        &self.state
    }
}

/// Presentation of one field.
#[derive(Debug, Clone)]
pub struct FieldStyle {
    pub width: Length,
    /// Shown while the field is empty.
    pub placeholder: String,
}

/// Renders `target` either as its committed value or as an input.
pub fn view<'a>(
    edit: &'a InlineEdit,
    target: EditTarget,
    committed: &'a str,
    style: FieldStyle,
) -> Element<'a, Message> {
    let field: Element<'a, Message> = match edit.state() {
        EditState::Editing {
            target: active,
            draft,
        } if *active == target => {
            let input: Element<'a, Message> = match draft {
                Draft::Line(line) => text_input(&style.placeholder, line)
                    .id(Id::new(INPUT_ID))
                    .on_input(Message::Input)
                    .on_submit(Message::Commit)
                    .size(typography::BODY)
                    .padding(spacing::XXS)
                    .into(),
                Draft::Text { content, .. } => text_editor(content)
                    .on_action(Message::Action)
                    .size(typography::BODY)
                    .padding(spacing::XXS)
                    .into(),
            };
            container(input)
                .width(style.width)
                .style(styles::container::editing_field)
                .into()
        }
        _ => {
            let shown = if committed.is_empty() {
                text(style.placeholder).style(text::secondary)
            } else {
                text(committed)
            };
            container(shown.size(typography::BODY))
                .width(style.width)
                .padding(spacing::XXS)
                .into()
        }
    };

    mouse_area(field)
        .on_double_click(Message::Begin(target))
        .on_enter(Message::PointerEntered(target))
        .on_exit(Message::PointerLeft(target))
        .into()
}
