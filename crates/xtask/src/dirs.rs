//! Platform-specific directory utilities
//!
//! Mirrors the client's log location so xtask commands find the same files.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Get the platform-specific log directory for the crossword client
///
/// Follows platform conventions:
/// - macOS: `~/Library/Caches/crossword/logs`
/// - Linux: `~/.cache/crossword/logs` (or `$XDG_CACHE_HOME/crossword/logs`)
/// - Windows: `%LOCALAPPDATA%\crossword\cache\logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "crossword")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("crossword").join("logs"))
}

/// Session directories in `log_dir`, newest first.
pub fn list_sessions(log_dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    if !log_dir.exists() {
        return Ok(Vec::new());
    }

    let mut sessions = Vec::new();
    for entry in std::fs::read_dir(log_dir)
        .with_context(|| format!("Failed to read log directory: {}", log_dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir()
            && let Some(session_id) = path.file_name().and_then(|n| n.to_str())
        {
            let modified = entry.metadata()?.modified()?;
            sessions.push((session_id.to_string(), path.clone(), modified));
        }
    }

    sessions.sort_by(|a, b| b.2.cmp(&a.2));

    Ok(sessions
        .into_iter()
        .map(|(id, path, _)| (id, path))
        .collect())
}

/// Log file of a specific session.
pub fn find_session_log(log_dir: &Path, session_id: &str) -> Result<PathBuf> {
    let log_path = log_dir.join(session_id).join("client.log");

    if !log_path.exists() {
        anyhow::bail!("Log file not found: {}", log_path.display());
    }

    Ok(log_path)
}

/// Log file of the most recent session.
pub fn find_latest_log(log_dir: &Path) -> Result<(String, PathBuf)> {
    let Some((session_id, _)) = list_sessions(log_dir)?.into_iter().next() else {
        anyhow::bail!("No sessions found in log directory");
    };

    let log_path = find_session_log(log_dir, &session_id)?;
    Ok((session_id, log_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_log_dir_has_no_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let sessions = list_sessions(&dir.path().join("absent")).unwrap();
        assert!(sessions.is_empty());
        assert!(find_latest_log(&dir.path().join("absent")).is_err());
    }

    #[test]
    fn finds_session_log() {
        let dir = tempfile::tempdir().unwrap();
        let session = dir.path().join("session_1");
        std::fs::create_dir_all(&session).unwrap();
        std::fs::write(session.join("client.log"), "hello\n").unwrap();

        let (id, path) = find_latest_log(dir.path()).unwrap();
        assert_eq!(id, "session_1");
        assert_eq!(path, session.join("client.log"));
        assert!(find_session_log(dir.path(), "session_2").is_err());
    }
}
