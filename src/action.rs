use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::category::Category;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Error(String),
    Key(KeyEvent),
    SelectCategory(Category),
    NextCategory,
    PreviousCategory,
    FocusNext,
    FocusPrevious,
    Activate,
    CloseDialog,
    SystemMessage(String),
}
