//! Runtime configuration resolved from flags and the environment.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};

/// Environment variable consulted when `--data` is not given.
pub const DATA_ENV_VAR: &str = "LONGCARE_DATA";

/// Resolves the dataset path: `--data` wins, then [`DATA_ENV_VAR`].
///
/// # Errors
///
/// Returns an error when neither source provides a path.
pub fn resolve_data_path(explicit: Option<&Path>) -> Result<PathBuf> {
    data_path_from(explicit, std::env::var_os(DATA_ENV_VAR)).ok_or_else(|| {
        anyhow!("no dataset given: pass --data <PATH> or set {DATA_ENV_VAR}")
    })
}

fn data_path_from(explicit: Option<&Path>, env_value: Option<OsString>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    env_value
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_takes_precedence_over_env() {
        let resolved = data_path_from(
            Some(Path::new("flag.json")),
            Some(OsString::from("env.json")),
        );
        assert_eq!(resolved, Some(PathBuf::from("flag.json")));
    }

    #[test]
    fn env_is_used_when_flag_missing() {
        let resolved = data_path_from(None, Some(OsString::from("env.json")));
        assert_eq!(resolved, Some(PathBuf::from("env.json")));
    }

    #[test]
    fn blank_env_counts_as_missing() {
        assert_eq!(data_path_from(None, Some(OsString::new())), None);
        assert_eq!(data_path_from(None, None), None);
    }
}
