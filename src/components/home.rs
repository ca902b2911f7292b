//! The launcher window: sidebar of category buttons plus the content panel
//! of the selected category.

use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

use super::Component;
use crate::{
    action::Action,
    category::{Category, Selection},
    config::Config,
    launcher,
    library::Library,
    mode::Mode,
    tui::Frame,
};

const SIDEBAR_WIDTH: u16 = 16;
const BUTTON_HEIGHT: u16 = 3;
const BUTTON_WIDTH: u16 = 20;

#[derive(Default)]
pub struct Home {
    config: Config,
    library: Library,
    selection: Selection,
}

impl Home {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Titles of the interactive buttons currently shown in the content
    /// panel. Forms and Contact show none.
    pub fn visible_buttons(&self) -> Vec<String> {
        match self.selection.selected() {
            Category::Store => self.library.store.iter().map(|i| i.title.clone()).collect(),
            Category::Games => self.library.games.iter().map(|g| g.title.clone()).collect(),
            Category::Forms | Category::Contact => vec![],
        }
    }

    fn panel_button_count(&self) -> usize {
        match self.selection.selected() {
            Category::Store => self.library.store.len(),
            Category::Games => self.library.games.len(),
            Category::Forms | Category::Contact => 0,
        }
    }

    fn style(&self, key: &str) -> Style {
        self.config
            .styles
            .get(&Mode::Home)
            .and_then(|styles| styles.get(key))
            .copied()
            .unwrap_or_default()
    }

    fn activate(&mut self) -> Option<Action> {
        match self.selection.selected() {
            Category::Games => {
                let entry = self.library.game(self.selection.focus())?;
                let path = self.library.resolved_path(entry);
                match launcher::launch(&path, &entry.launch) {
                    Ok(()) => Some(Action::SystemMessage(format!("[Launched] {}", entry.title))),
                    Err(e) => {
                        log::warn!("Launch failed: {e}");
                        Some(Action::Error(e.to_string()))
                    }
                }
            }
            Category::Store => {
                let item = self.library.store_item(self.selection.focus())?;
                Some(Action::SystemMessage(format!(
                    "Purchases are not available yet: {}",
                    item.title
                )))
            }
            Category::Forms | Category::Contact => None,
        }
    }

    fn draw_sidebar(&self, f: &mut Frame<'_>, area: Rect) {
        let mut constraints: Vec<Constraint> = Category::ALL
            .iter()
            .map(|_| Constraint::Length(BUTTON_HEIGHT))
            .collect();
        constraints.push(Constraint::Min(0));
        let rows = Layout::new(Direction::Vertical, constraints).split(area);

        for (i, category) in Category::ALL.into_iter().enumerate() {
            let style = if self.selection.is_selected(category) {
                self.style("button_selected")
            } else {
                self.style("button")
            };
            let button = Paragraph::new(category.title())
                .centered()
                .style(style)
                .block(Block::bordered());
            f.render_widget(button, rows[i]);
        }
    }

    fn draw_button_row(&self, f: &mut Frame<'_>, area: Rect, titles: &[String]) {
        let mut constraints: Vec<Constraint> = titles
            .iter()
            .map(|_| Constraint::Length(BUTTON_WIDTH))
            .collect();
        constraints.push(Constraint::Min(0));
        let columns = Layout::new(Direction::Horizontal, constraints).split(area);

        for (i, title) in titles.iter().enumerate() {
            let style = if self.selection.focus() == i {
                self.style("button_selected")
            } else {
                self.style("button")
            };
            let button = Paragraph::new(title.as_str())
                .centered()
                .style(style)
                .block(Block::bordered());
            f.render_widget(button, columns[i]);
        }
    }

    fn draw_panel(&self, f: &mut Frame<'_>, area: Rect) {
        let layout = Layout::new(
            Direction::Vertical,
            [Constraint::Length(1), Constraint::Length(BUTTON_HEIGHT), Constraint::Min(0)],
        )
        .split(area);

        let title = Paragraph::new(self.selection.selected().title()).style(self.style("title"));
        f.render_widget(title, layout[0]);

        match self.selection.selected() {
            Category::Store | Category::Games => {
                let titles = self.visible_buttons();
                self.draw_button_row(f, layout[1], &titles);
            }
            Category::Forms => {
                let text = Paragraph::new("There are no forms to fill out yet.")
                    .style(self.style("hint"));
                f.render_widget(text, layout[1]);
            }
            Category::Contact => {
                let text = Paragraph::new(vec![
                    Line::from("Thera Duty"),
                    Line::from("support@theraduty.example"),
                ])
                .style(self.style("hint"));
                f.render_widget(text, layout[1]);
            }
        }
    }
}

impl Component for Home {
    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.library = config.library.clone();
        self.config = config;
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let followup = match action {
            Action::SelectCategory(category) => {
                self.selection.select(category);
                None
            }
            Action::NextCategory => {
                self.selection.select_next();
                None
            }
            Action::PreviousCategory => {
                self.selection.select_previous();
                None
            }
            Action::FocusNext => {
                self.selection.focus_next(self.panel_button_count());
                None
            }
            Action::FocusPrevious => {
                self.selection.focus_previous(self.panel_button_count());
                None
            }
            Action::Activate => self.activate(),
            _ => None,
        };

        Ok(followup)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let layout = Layout::new(
            Direction::Horizontal,
            [Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)],
        )
        .split(area);

        self.draw_sidebar(f, layout[0]);
        self.draw_panel(f, layout[1]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::library::{GameEntry, StoreItem};

    use super::*;

    fn home_with_demo_library() -> Home {
        let config = Config {
            library: Library {
                games_dir: None,
                games: vec![
                    GameEntry::new("Memo", "/nonexistent/thera/games/memo"),
                    GameEntry::new("Game 2", "/nonexistent/thera/games/game2"),
                ],
                store: vec![
                    StoreItem {
                        title: "Buy Game 3".into(),
                    },
                    StoreItem {
                        title: "Buy Game 4".into(),
                    },
                ],
            },
            ..Config::default()
        };
        let mut home = Home::new();
        home.register_config_handler(config).expect("config");
        home
    }

    #[test]
    fn test_games_panel_shows_game_buttons() {
        let mut home = home_with_demo_library();

        home.update(Action::SelectCategory(Category::Games)).expect("update");
        assert_eq!(home.visible_buttons(), vec!["Memo", "Game 2"]);
        assert!(home.selection().is_selected(Category::Games));
    }

    #[test]
    fn test_forms_after_games_hides_all_buttons() {
        let mut home = home_with_demo_library();

        home.update(Action::SelectCategory(Category::Games)).expect("update");
        home.update(Action::SelectCategory(Category::Forms)).expect("update");

        // Both game buttons and both purchase buttons are gone; Forms adds
        // no widgets of its own.
        assert_eq!(home.visible_buttons(), Vec::<String>::new());
        assert!(home.selection().is_selected(Category::Forms));
    }

    #[test]
    fn test_store_panel_shows_purchase_buttons() {
        let mut home = home_with_demo_library();

        home.update(Action::SelectCategory(Category::Store)).expect("update");
        assert_eq!(home.visible_buttons(), vec!["Buy Game 3", "Buy Game 4"]);
    }

    #[test]
    fn test_activate_missing_game_reports_error() {
        let mut home = home_with_demo_library();

        home.update(Action::SelectCategory(Category::Games)).expect("update");
        let followup = home.update(Action::Activate).expect("update");

        match followup {
            Some(Action::Error(message)) => {
                assert_eq!(
                    message,
                    "Application not found at: /nonexistent/thera/games/memo"
                );
            }
            other => panic!("expected Error action, got {other:?}"),
        }
    }

    #[test]
    fn test_activate_store_item_reports_placeholder() {
        let mut home = home_with_demo_library();

        home.update(Action::SelectCategory(Category::Store)).expect("update");
        home.update(Action::FocusNext).expect("update");
        let followup = home.update(Action::Activate).expect("update");

        assert_eq!(
            followup,
            Some(Action::SystemMessage(
                "Purchases are not available yet: Buy Game 4".into()
            ))
        );
    }

    #[test]
    fn test_activate_on_forms_is_a_noop() {
        let mut home = home_with_demo_library();

        home.update(Action::SelectCategory(Category::Forms)).expect("update");
        let followup = home.update(Action::Activate).expect("update");
        assert_eq!(followup, None);
    }

    #[test]
    fn test_focus_clamped_to_panel() {
        let mut home = home_with_demo_library();

        home.update(Action::SelectCategory(Category::Games)).expect("update");
        home.update(Action::FocusNext).expect("update");
        assert_eq!(home.selection().focus(), 1);

        // Wraps within the two game buttons
        home.update(Action::FocusNext).expect("update");
        assert_eq!(home.selection().focus(), 0);

        // No buttons on Contact; focus stays put
        home.update(Action::SelectCategory(Category::Contact)).expect("update");
        home.update(Action::FocusNext).expect("update");
        assert_eq!(home.selection().focus(), 0);
    }
}
