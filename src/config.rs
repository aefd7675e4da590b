//! Database path resolution for the snip CLI.
//!
//! Supports an explicit `--db`/`SNIP_DB` override with "~" home directory
//! expansion, falling back to a per-user data directory default.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{Result, SnipError};

/// Default database location: `<data dir>/snip/snippets.db`.
///
/// The data dir is platform-specific (e.g. `~/.local/share` on Linux,
/// `~/Library/Application Support` on macOS).
pub fn default_db_path() -> Result<PathBuf> {
    let base = dirs::data_local_dir().ok_or(SnipError::DataDirUnavailable)?;
    Ok(base.join("snip").join("snippets.db"))
}

/// Expand a leading `~` or `~/` to the user's home directory.
///
/// Paths without a leading tilde are returned unchanged.
pub fn expand_home(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();

    if path_str == "~" || path_str.starts_with("~/") {
        let home = home_dir()?;
        let rest = path_str.strip_prefix("~/").unwrap_or("");
        let expanded = if rest.is_empty() {
            home
        } else {
            home.join(rest)
        };
        debug!(
            original = %path.display(),
            expanded = %expanded.display(),
            "Expanded home directory path"
        );
        return Ok(expanded);
    }

    Ok(path.to_path_buf())
}

/// Resolve the database path from an optional CLI override.
///
/// An explicit path (from `--db` or `SNIP_DB`) wins, with home expansion
/// applied; otherwise the platform default is used.
pub fn resolve_db_path(override_path: Option<&Path>) -> Result<PathBuf> {
    trace!(override_path = ?override_path, "Resolving database path");

    match override_path {
        Some(path) => expand_home(path),
        None => default_db_path(),
    }
}

/// Resolve the user's home directory (cross-platform).
fn home_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| SnipError::Other("Could not determine home directory".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_ends_with_db_file() {
        let path = default_db_path().unwrap();
        assert!(path.ends_with("snip/snippets.db"));
    }

    #[test]
    fn test_expand_home_prefix() {
        let expanded = expand_home(Path::new("~/notes/snippets.db")).unwrap();
        let home = dirs::home_dir().unwrap();
        assert!(expanded.starts_with(&home));
        assert!(expanded.ends_with("notes/snippets.db"));
    }

    #[test]
    fn test_expand_home_only() {
        let expanded = expand_home(Path::new("~")).unwrap();
        assert_eq!(expanded, dirs::home_dir().unwrap());
    }

    #[test]
    fn test_absolute_path_unchanged() {
        let path = Path::new("/var/lib/snip/snippets.db");
        assert_eq!(expand_home(path).unwrap(), path.to_path_buf());
    }

    #[test]
    fn test_tilde_without_slash_is_literal() {
        // "~foo" is a valid (odd) filename, not a home reference
        let path = Path::new("~backup.db");
        assert_eq!(expand_home(path).unwrap(), path.to_path_buf());
    }

    #[test]
    fn test_resolve_prefers_override() {
        let resolved = resolve_db_path(Some(Path::new("/tmp/custom.db"))).unwrap();
        assert_eq!(resolved, PathBuf::from("/tmp/custom.db"));
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let resolved = resolve_db_path(None).unwrap();
        assert!(resolved.ends_with("snip/snippets.db"));
    }
}
