use std::collections::HashMap;

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{prelude::*, widgets::*};

use super::Component;
use crate::action::Action;
use crate::config::{key_event_to_string, Config};
use crate::mode::Mode;
use crate::tui::Frame;

#[derive(Default)]
pub struct StatusBar {
    hint: String,
    message: Option<String>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Shortest configured key sequence bound to `action`, ties broken
    /// alphabetically so the hint is stable across runs.
    fn key_for(keymap: &HashMap<Vec<KeyEvent>, Action>, action: &Action) -> Option<String> {
        let mut candidates: Vec<String> = keymap
            .iter()
            .filter(|(_, bound)| *bound == action)
            .map(|(keys, _)| {
                keys.iter()
                    .map(key_event_to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        candidates.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        candidates.into_iter().next()
    }

    fn hint_line(keymap: &HashMap<Vec<KeyEvent>, Action>) -> String {
        let key =
            |action: Action| Self::key_for(keymap, &action).unwrap_or_else(|| "?".to_string());
        format!(
            "{}/{}: category | {}/{}: focus | {}: launch | {}: quit",
            key(Action::PreviousCategory),
            key(Action::NextCategory),
            key(Action::FocusPrevious),
            key(Action::FocusNext),
            key(Action::Activate),
            key(Action::Quit),
        )
    }
}

impl Component for StatusBar {
    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        if let Some(keymap) = config.keybindings.get(&Mode::Home) {
            self.hint = Self::hint_line(keymap);
        }

        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if let Action::SystemMessage(message) = action {
            self.message = Some(message);
        }

        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ],
        )
        .split(area);
        f.render_widget(Clear, layout[1]);
        f.render_widget(Clear, layout[2]);

        let hint = Span::styled(self.hint.clone(), Style::default().fg(Color::Gray).italic());
        let hint_line = Paragraph::new(hint);
        f.render_widget(hint_line, layout[1]);

        let message_line = Paragraph::new(self.message.clone().unwrap_or_default());
        f.render_widget(message_line, layout[2]);

        Ok(())
    }
}
