//! Modal error dialog
//!
//! The terminal counterpart of the original launcher's blocking message box:
//! while a message is shown, `Mode::ErrorDialog` routes every key to this
//! dialog until it is dismissed.

use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

use super::Component;
use crate::action::Action;
use crate::config::Config;
use crate::mode::Mode;
use crate::tui::Frame;

#[derive(Default)]
pub struct ErrorDialog {
    config: Config,
    message: Option<String>,
}

impl ErrorDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.message.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn style(&self, key: &str) -> Style {
        self.config
            .styles
            .get(&Mode::ErrorDialog)
            .and_then(|styles| styles.get(key))
            .copied()
            .unwrap_or_default()
    }

    /// Centered popup area, clamped to the frame.
    fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);
        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        Rect::new(x, y, width, height)
    }
}

impl Component for ErrorDialog {
    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.config = config;
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Error(message) => self.message = Some(message),
            Action::CloseDialog => self.message = None,
            _ => {}
        }

        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let Some(message) = self.message.clone() else {
            return Ok(());
        };

        // Wide enough for the message, at least 30 columns, never wider
        // than the frame itself. The length cast saturates so an oversized
        // message cannot wrap the width around.
        let width = u16::try_from(message.len())
            .unwrap_or(u16::MAX)
            .saturating_add(6)
            .max(30)
            .min(area.width);
        let popup = Self::popup_area(area, width, 7);

        f.render_widget(Clear, popup);
        let block = Block::bordered()
            .title("Error")
            .title_alignment(Alignment::Center)
            .border_style(self.style("dialog_border"));
        let text = Paragraph::new(vec![
            Line::raw(""),
            Line::raw(message),
            Line::raw(""),
            Line::from("press enter or esc to dismiss").centered(),
        ])
        .wrap(Wrap { trim: true })
        .style(self.style("dialog_text"))
        .block(block);
        f.render_widget(text, popup);

        Ok(())
    }
}
