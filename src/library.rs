//! Config-driven game and store entries
//!
//! The original launcher hardcoded one executable path per developer
//! machine; here every panel button comes from the `library` section of the
//! config file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::launcher::LaunchStrategy;

/// One button on the Games panel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameEntry {
    pub title: String,
    pub path: PathBuf,
    /// How to spawn this entry; omitted entries exec the path directly.
    #[serde(default)]
    pub launch: LaunchStrategy,
}

/// One button on the Store panel. Purchases are a placeholder, as in the
/// original launcher.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreItem {
    pub title: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Library {
    /// Base directory for relative game paths.
    #[serde(default)]
    pub games_dir: Option<PathBuf>,
    #[serde(default)]
    pub games: Vec<GameEntry>,
    #[serde(default)]
    pub store: Vec<StoreItem>,
}

impl Library {
    /// Resolve a game entry's path against `games_dir` when it is relative.
    pub fn resolved_path(&self, entry: &GameEntry) -> PathBuf {
        match &self.games_dir {
            Some(base) if entry.path.is_relative() => base.join(&entry.path),
            _ => entry.path.clone(),
        }
    }

    pub fn game(&self, index: usize) -> Option<&GameEntry> {
        self.games.get(index)
    }

    pub fn store_item(&self, index: usize) -> Option<&StoreItem> {
        self.store.get(index)
    }
}

impl GameEntry {
    pub fn new(title: impl Into<String>, path: impl AsRef<Path>) -> Self {
        Self {
            title: title.into(),
            path: path.as_ref().to_path_buf(),
            launch: LaunchStrategy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_relative_paths_resolve_against_games_dir() {
        let library = Library {
            games_dir: Some(PathBuf::from("/opt/thera/games")),
            games: vec![GameEntry::new("Memo", "memo")],
            store: vec![],
        };

        assert_eq!(
            library.resolved_path(&library.games[0]),
            PathBuf::from("/opt/thera/games/memo")
        );
    }

    #[test]
    fn test_absolute_paths_ignore_games_dir() {
        let library = Library {
            games_dir: Some(PathBuf::from("/opt/thera/games")),
            games: vec![GameEntry::new("Memo", "/usr/local/bin/memo")],
            store: vec![],
        };

        assert_eq!(
            library.resolved_path(&library.games[0]),
            PathBuf::from("/usr/local/bin/memo")
        );
    }

    #[test]
    fn test_entry_deserialization_defaults_to_direct() {
        let entry: GameEntry =
            serde_json::from_str(r#"{ "title": "Memo", "path": "games/memo" }"#)
                .expect("deserialize");
        assert_eq!(entry.launch, LaunchStrategy::Direct);
    }

    #[test]
    fn test_entry_deserialization_with_strategy() {
        let entry: GameEntry = serde_json::from_str(
            r#"{ "title": "Memo", "path": "games/memo.sh", "launch": { "platform": "shell" } }"#,
        )
        .expect("deserialize");
        assert_eq!(entry.launch, LaunchStrategy::Shell);
    }
}
