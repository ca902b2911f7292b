//! Spawn tests against real scratch executables.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::time::Duration;

use theraduty::launcher::{launch, LaunchError, LaunchStrategy};

/// A scratch directory with an executable script that touches a marker file
/// when it runs.
struct ScratchGame {
    dir: PathBuf,
    script: PathBuf,
    marker: PathBuf,
}

impl ScratchGame {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!(
            "theraduty-test-{}-{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("create scratch dir");

        let marker = dir.join("launched");
        let script = dir.join("game.sh");
        fs::write(
            &script,
            format!("#!/bin/sh\ntouch '{}'\n", marker.display()),
        )
        .expect("write script");
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).expect("chmod");

        Self { dir, script, marker }
    }

    fn wait_for_marker(&self) -> bool {
        for _ in 0..250 {
            if self.marker.exists() {
                return true;
            }
            std::thread::sleep(Duration::from_millis(20));
        }
        false
    }
}

impl Drop for ScratchGame {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

#[test]
fn test_launch_direct_spawns_detached_child() {
    let game = ScratchGame::new("direct");

    launch(&game.script, &LaunchStrategy::Direct).expect("launch");

    // The launcher never waits on the child; the marker appearing is the
    // only evidence it ran.
    assert!(game.wait_for_marker(), "child never ran");
}

#[test]
fn test_launch_shell_spawns_detached_child() {
    let game = ScratchGame::new("shell");

    launch(&game.script, &LaunchStrategy::Shell).expect("launch");

    assert!(game.wait_for_marker(), "child never ran");
}

#[test]
fn test_launch_missing_target_fails_without_spawning() {
    let missing = PathBuf::from("/nonexistent/thera/games/memo");

    let result = launch(&missing, &LaunchStrategy::Direct);

    match result {
        Err(LaunchError::Missing(path)) => assert_eq!(path, missing),
        other => panic!("expected Missing, got {other:?}"),
    }
}

#[test]
fn test_spawn_failure_is_reported() {
    let game = ScratchGame::new("noexec");
    // Strip the execute bit so the spawn itself fails.
    fs::set_permissions(&game.script, fs::Permissions::from_mode(0o644)).expect("chmod");

    let result = launch(&game.script, &LaunchStrategy::Direct);

    assert!(matches!(result, Err(LaunchError::Spawn(_, _))));
}
