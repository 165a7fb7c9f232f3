// SPDX-License-Identifier: MPL-2.0
//! Anchored picker panels (importance marker, flag grid).
//!
//! At most one popover is open. It closes when its anchor is clicked again,
//! when a pointer press lands outside both the anchor and the panel, and on
//! Escape.

use crate::domain::calendar::ItemId;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::widget::{column, container, mouse_area};
use iced::Element;

/// Which picker of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PopoverKind {
    Importance,
    Flags,
}

/// One picker of one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PopoverKey {
    pub item: ItemId,
    pub kind: PopoverKind,
}

impl PopoverKey {
    #[must_use]
    pub fn new(item: ItemId, kind: PopoverKind) -> Self {
        Self { item, kind }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    Toggle(PopoverKey),
    Close,
    PointerEntered(PopoverKey),
    PointerLeft(PopoverKey),
}

/// Application-wide popover state.
#[derive(Debug, Default, Clone)]
pub struct Popovers {
    open: Option<PopoverKey>,
    hovered: Option<PopoverKey>,
}

impl Popovers {
    #[must_use]
    pub fn open(&self) -> Option<PopoverKey> {
        self.open
    }

    #[must_use]
    pub fn is_open(&self, key: PopoverKey) -> bool {
        self.open == Some(key)
    }

    #[must_use]
    pub fn any_open(&self) -> bool {
        self.open.is_some()
    }

    /// Opens `key`, or closes it if it is already open.
    pub fn toggle(&mut self, key: PopoverKey) {
        if self.is_open(key) {
            self.open = None;
        } else {
            self.open = Some(key);
            // Toggling happens through a click on the anchor.
            self.hovered = Some(key);
        }
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    /// Closes the popover of an item that no longer exists.
    pub fn forget_item(&mut self, item: ItemId) {
        if self.open.is_some_and(|key| key.item == item) {
            self.open = None;
        }
        if self.hovered.is_some_and(|key| key.item == item) {
            self.hovered = None;
        }
    }

    pub fn pointer_entered(&mut self, key: PopoverKey) {
        self.hovered = Some(key);
    }

    pub fn pointer_left(&mut self, key: PopoverKey) {
        if self.hovered == Some(key) {
            self.hovered = None;
        }
    }

    /// Handles a pointer press anywhere in the window. Returns whether the
    /// open popover was closed.
    pub fn pointer_pressed(&mut self) -> bool {
        match self.open {
            Some(open) if self.hovered != Some(open) => {
                self.open = None;
                true
            }
            _ => false,
        }
    }
}

/// Stacks `panel` below `anchor` when the popover is open.
///
/// Anchor and panel share one hover region so that clicks inside the panel
/// do not count as clicks outside.
pub fn view<'a, M, F>(
    key: PopoverKey,
    popovers: &Popovers,
    anchor: Element<'a, M>,
    panel: impl FnOnce() -> Element<'a, M>,
    on_message: F,
) -> Element<'a, M>
where
    M: Clone + 'a,
    F: Fn(Message) -> M,
{
    let content: Element<'a, M> = if popovers.is_open(key) {
        column![
            anchor,
            container(panel())
                .padding(spacing::XS)
                .style(styles::container::popover),
        ]
        .spacing(spacing::XXS)
        .into()
    } else {
        anchor
    };

    mouse_area(content)
        .on_enter(on_message(Message::PointerEntered(key)))
        .on_exit(on_message(Message::PointerLeft(key)))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(raw: u64, kind: PopoverKind) -> PopoverKey {
        PopoverKey::new(ItemId::new(raw), kind)
    }

    #[test]
    fn toggle_opens_and_closes() {
        let mut popovers = Popovers::default();
        let flags = key(1, PopoverKind::Flags);

        popovers.toggle(flags);
        assert!(popovers.is_open(flags));
        popovers.toggle(flags);
        assert!(!popovers.any_open());
    }

    #[test]
    fn only_one_popover_is_open() {
        let mut popovers = Popovers::default();
        popovers.toggle(key(1, PopoverKind::Flags));
        popovers.toggle(key(2, PopoverKind::Importance));

        assert_eq!(popovers.open(), Some(key(2, PopoverKind::Importance)));
    }

    #[test]
    fn press_inside_keeps_popover_open() {
        let mut popovers = Popovers::default();
        let flags = key(1, PopoverKind::Flags);
        popovers.toggle(flags);

        assert!(!popovers.pointer_pressed());
        assert!(popovers.is_open(flags));
    }

    #[test]
    fn press_outside_closes_popover() {
        let mut popovers = Popovers::default();
        let flags = key(1, PopoverKind::Flags);
        popovers.toggle(flags);
        popovers.pointer_left(flags);

        assert!(popovers.pointer_pressed());
        assert!(!popovers.any_open());
    }

    #[test]
    fn press_with_nothing_open_is_ignored() {
        let mut popovers = Popovers::default();
        assert!(!popovers.pointer_pressed());
    }

    #[test]
    fn removing_the_item_closes_its_popover() {
        let mut popovers = Popovers::default();
        popovers.toggle(key(4, PopoverKind::Importance));
        popovers.forget_item(ItemId::new(4));
        assert!(!popovers.any_open());
    }
}
