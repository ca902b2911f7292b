//! Detached game launching
//!
//! Mirrors the two-step contract of the desktop launcher: a preflight that
//! checks the target exists, then a single spawn of a detached child the
//! launcher never waits on or supervises. The spawn command form is decided
//! by a closed [`LaunchStrategy`] enum, one handler per platform.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde::{Deserialize, Serialize};

/// How a game entry is turned into a spawn command.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "platform", rename_all = "kebab-case")]
pub enum LaunchStrategy {
    /// Execute the target path directly.
    #[default]
    Direct,
    /// Run through the macOS `open` wrapper for a packaged application:
    /// `open -a <app> <path>`.
    MacosOpen { app: String },
    /// Hand the path to the system shell.
    Shell,
}

/// The exact program and arguments a launch will spawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl LaunchCommand {
    fn direct(path: &Path) -> Self {
        Self {
            program: path.into(),
            args: vec![],
        }
    }

    fn macos_open(app: &str, path: &Path) -> Self {
        Self {
            program: "open".into(),
            args: vec!["-a".into(), app.into(), path.into()],
        }
    }

    #[cfg(not(windows))]
    fn shell(path: &Path) -> Self {
        Self {
            program: "/bin/sh".into(),
            args: vec!["-c".into(), path.into()],
        }
    }

    #[cfg(windows)]
    fn shell(path: &Path) -> Self {
        Self {
            program: "cmd".into(),
            args: vec!["/C".into(), path.into()],
        }
    }
}

/// The two launch failure kinds. Both surface as a modal error dialog,
/// neither is retried, and neither is fatal to the launcher itself.
#[derive(Debug)]
pub enum LaunchError {
    /// The target executable does not exist. No command is built and no
    /// process creation is attempted.
    Missing(PathBuf),
    /// Process creation failed.
    Spawn(PathBuf, std::io::Error),
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchError::Missing(path) => {
                write!(f, "Application not found at: {}", path.display())
            }
            LaunchError::Spawn(path, err) => {
                write!(f, "Failed to launch application {}: {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for LaunchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LaunchError::Missing(_) => None,
            LaunchError::Spawn(_, err) => Some(err),
        }
    }
}

/// Preflight a launch: verify the target exists and resolve the spawn
/// command for the given strategy. Missing targets fail before any command
/// is constructed.
pub fn plan(path: &Path, strategy: &LaunchStrategy) -> Result<LaunchCommand, LaunchError> {
    if !path.exists() {
        return Err(LaunchError::Missing(path.to_path_buf()));
    }

    Ok(match strategy {
        LaunchStrategy::Direct => LaunchCommand::direct(path),
        LaunchStrategy::MacosOpen { app } => LaunchCommand::macos_open(app, path),
        LaunchStrategy::Shell => LaunchCommand::shell(path),
    })
}

/// Preflight and spawn, disowning the child immediately. Exactly one spawn
/// attempt per call; the child keeps running after the launcher exits.
pub fn launch(path: &Path, strategy: &LaunchStrategy) -> Result<(), LaunchError> {
    let command = plan(path, strategy)?;
    tracing::info!("Launching {:?} as {:?}", path, command);
    spawn_detached(&command).map_err(|err| LaunchError::Spawn(path.to_path_buf(), err))
}

fn spawn_detached(launch: &LaunchCommand) -> std::io::Result<()> {
    let mut command = Command::new(&launch.program);
    command
        .args(&launch.args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        // Own process group so terminal signals never reach the child.
        command.process_group(0);
    }

    let child = command.spawn()?;
    // Detached: dropping the handle disowns the child.
    drop(child);
    Ok(())
}
