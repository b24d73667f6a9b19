//! Checklist state for one interactive selection session.
//!
//! A [`Selection`] is created from the catalog with the tier preselection
//! applied, is driven by [`Action`]s while the session runs, and is consumed
//! by [`Selection::into_selected`] once the user confirms.

use crate::catalog::Descriptor;

/// What the checklist shows in front of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Required entry, always downloaded.
    Forced,
    Selected,
    Unselected,
}

impl Mark {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mark::Forced => "[*]",
            Mark::Selected => "[x]",
            Mark::Unselected => "[ ]",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Toggle,
    Confirm,
}

/// Whether the session keeps running after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Confirmed,
}

#[derive(Debug, Clone)]
pub struct Entry {
    pub descriptor: Descriptor,
    selected: bool,
}

impl Entry {
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn mark(&self) -> Mark {
        if self.descriptor.tier.is_forced() {
            Mark::Forced
        } else if self.selected {
            Mark::Selected
        } else {
            Mark::Unselected
        }
    }
}

#[derive(Debug, Clone)]
pub struct Selection {
    entries: Vec<Entry>,
    cursor: usize,
}

impl Selection {
    pub fn new(catalog: &[Descriptor]) -> Self {
        let entries = catalog
            .iter()
            .map(|descriptor| Entry {
                descriptor: *descriptor,
                selected: descriptor.tier.preselected(),
            })
            .collect();

        Self { entries, cursor: 0 }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
        }
    }

    /// Flip the entry under the cursor. Required entries stay selected.
    pub fn toggle(&mut self) {
        if let Some(entry) = self.entries.get_mut(self.cursor) {
            if !entry.descriptor.tier.is_forced() {
                entry.selected = !entry.selected;
            }
        }
    }

    pub fn apply(&mut self, action: Action) -> Flow {
        match action {
            Action::Up => self.move_up(),
            Action::Down => self.move_down(),
            Action::Toggle => self.toggle(),
            Action::Confirm => return Flow::Confirmed,
        }
        Flow::Continue
    }

    /// Selected descriptors in catalog order.
    pub fn into_selected(self) -> Vec<Descriptor> {
        self.entries
            .into_iter()
            .filter(|entry| entry.selected)
            .map(|entry| entry.descriptor)
            .collect()
    }
}

/// Horizontal padding added to the widest instruction line.
const COLUMN_PADDING: usize = 5;

/// Smallest terminal that can show the instructions, a separator and every
/// entry of a checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub rows: usize,
    pub cols: usize,
}

impl Viewport {
    pub fn required(instructions: &[&str], entries: usize) -> Self {
        let widest = instructions
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        Self {
            rows: instructions.len() + entries + 1,
            cols: widest + COLUMN_PADDING,
        }
    }

    pub fn fits(&self, rows: usize, cols: usize) -> bool {
        rows >= self.rows && cols >= self.cols
    }
}
