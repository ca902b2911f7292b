//! Sidebar category model
//!
//! The sidebar is a fixed set of category buttons. Selection state lives here
//! rather than in process-wide widget handles: exactly one category is
//! selected at all times, and the focus index inside the active panel is
//! clamped to that panel's button count.

use serde::{Deserialize, Serialize};
use strum::Display;

/// One of the fixed sidebar category buttons.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Category {
    Store,
    Games,
    Forms,
    Contact,
}

impl Category {
    /// Sidebar order, top to bottom.
    pub const ALL: [Category; 4] = [
        Category::Store,
        Category::Games,
        Category::Forms,
        Category::Contact,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Category::Store => "Store",
            Category::Games => "Games",
            Category::Forms => "Forms",
            Category::Contact => "Contact",
        }
    }

    /// The category below this one in the sidebar, wrapping at the bottom.
    pub fn next(&self) -> Category {
        match self {
            Category::Store => Category::Games,
            Category::Games => Category::Forms,
            Category::Forms => Category::Contact,
            Category::Contact => Category::Store,
        }
    }

    /// The category above this one in the sidebar, wrapping at the top.
    pub fn previous(&self) -> Category {
        match self {
            Category::Store => Category::Contact,
            Category::Games => Category::Store,
            Category::Forms => Category::Games,
            Category::Contact => Category::Forms,
        }
    }
}

/// Category selector state: which sidebar button is selected and which button
/// inside the active panel has focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    selected: Category,
    focus: usize,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            selected: Category::Store,
            focus: 0,
        }
    }
}

impl Selection {
    pub fn selected(&self) -> Category {
        self.selected
    }

    pub fn is_selected(&self, category: Category) -> bool {
        self.selected == category
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Select a category. Focus is reset so it can never point past the new
    /// panel's buttons.
    pub fn select(&mut self, category: Category) {
        self.selected = category;
        self.focus = 0;
    }

    pub fn select_next(&mut self) {
        self.select(self.selected.next());
    }

    pub fn select_previous(&mut self) {
        self.select(self.selected.previous());
    }

    /// Move focus to the next button of the active panel, wrapping.
    /// Does nothing for panels without buttons.
    pub fn focus_next(&mut self, buttons: usize) {
        if buttons > 0 {
            self.focus = (self.focus + 1) % buttons;
        }
    }

    /// Move focus to the previous button of the active panel, wrapping.
    pub fn focus_previous(&mut self, buttons: usize) {
        if buttons > 0 {
            self.focus = (self.focus + buttons - 1) % buttons;
        }
    }
}
