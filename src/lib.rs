//! # Theraduty - Thera Duty game launcher
//!
//! A terminal launcher shell for the Thera Duty game library, built with Rust
//! and Ratatui. A sidebar of category buttons (Store, Games, Forms, Contact)
//! toggles content panels; the Games panel spawns the configured game
//! executables as detached child processes.
//!
//! ## Architecture Overview
//!
//! The crate follows a component architecture:
//!
//! - **Actions** ([`action`]): events that flow between the event loop and
//!   the UI components
//! - **Components** ([`components`]): the sidebar-plus-panels home view, the
//!   status bar, and the modal error dialog
//! - **Launcher** ([`launcher`]): preflight and detached process spawning
//! - **Config** ([`config`]): keybindings, styles, and the game library
//!
//! ## Example Usage
//!
//! ```rust
//! use theraduty::category::{Category, Selection};
//!
//! let mut selection = Selection::default();
//! selection.select(Category::Games);
//!
//! assert!(selection.is_selected(Category::Games));
//! assert!(!selection.is_selected(Category::Store));
//! ```
//!
//! ## Modules
//!
//! - [`category`] - Category enum and selector state
//! - [`library`] - Config-driven game and store entries
//! - [`launcher`] - Detached process launching
//! - [`components`] - UI components
//! - [`config`] - Configuration management

#![deny(warnings)]
#![allow(dead_code)]

pub mod action;
pub mod app;
pub mod category;
pub mod cli;
pub mod components;
pub mod config;
pub mod launcher;
pub mod library;
pub mod mode;
pub mod tui;
pub mod utils;

// Re-exports for convenience
pub use action::Action;
pub use category::{Category, Selection};
pub use launcher::{LaunchCommand, LaunchError, LaunchStrategy};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
