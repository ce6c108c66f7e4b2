// Skiff - platform/launch.rs
//
// Opening another browser window. Each window is its own process: the
// running executable is started again with the same configuration
// directory, detached from this one.

use crate::util::error::LaunchError;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Arguments passed to the child process.
pub fn window_args(config_dir: Option<&Path>, private: bool) -> Vec<String> {
    let mut args = Vec::new();
    if let Some(dir) = config_dir {
        args.push("--config-dir".to_string());
        args.push(dir.display().to_string());
    }
    if private {
        args.push("--private".to_string());
    }
    args
}

/// Start a new Skiff window. Returns the child's process id.
pub fn spawn_window(config_dir: Option<&Path>, private: bool) -> Result<u32, LaunchError> {
    let exe: PathBuf =
        std::env::current_exe().map_err(|source| LaunchError::CurrentExe { source })?;
    let child = Command::new(&exe)
        .args(window_args(config_dir, private))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| LaunchError::Spawn {
            program: exe.clone(),
            source,
        })?;
    tracing::info!(pid = child.id(), private, "Opened new window");
    Ok(child.id())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_args() {
        assert!(window_args(None, false).is_empty());
        assert_eq!(
            window_args(Some(Path::new("/tmp/skiff")), true),
            vec!["--config-dir", "/tmp/skiff", "--private"]
        );
    }
}
