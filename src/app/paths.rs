// SPDX-License-Identifier: MPL-2.0
//! Path and location resolution for the application.
//!
//! # Config directory
//!
//! Resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI argument** `--config-dir` - set via [`init_cli_overrides`]
//! 3. **Environment variable** `ICED_STORIES_CONFIG_DIR`
//! 4. **Platform default** - via `dirs` crate
//!
//! # Stories source
//!
//! The story list location follows the same idea: CLI `--source`, then
//! `ICED_STORIES_SOURCE`, then the `[source]` section of the config file,
//! then [`DEFAULT_STORIES_SOURCE`](crate::config::DEFAULT_STORIES_SOURCE).

use crate::config::{Config, DEFAULT_STORIES_SOURCE};
use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedStories";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_STORIES_CONFIG_DIR";

/// Environment variable to override the stories source.
pub const ENV_STORIES_SOURCE: &str = "ICED_STORIES_SOURCE";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes the CLI override for the config directory.
///
/// Later calls are ignored; the first value wins.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        log::warn!("config directory override already initialized, ignoring");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path.
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Picks the story list location from CLI, environment, config or default.
pub fn resolve_stories_source(cli_source: Option<String>, config: &Config) -> String {
    if let Some(source) = cli_source.filter(|s| !s.trim().is_empty()) {
        return source;
    }

    if let Ok(env_source) = std::env::var(ENV_STORIES_SOURCE) {
        if !env_source.trim().is_empty() {
            return env_source;
        }
    }

    config
        .source
        .stories
        .clone()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_STORIES_SOURCE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourceConfig;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App config dir should contain app name"
            );
        }
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/config/dir";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = get_app_config_dir();
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn cli_source_wins_over_everything() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_STORIES_SOURCE, "/env/stories.json");
        let config = Config {
            source: SourceConfig {
                stories: Some("/config/stories.json".to_string()),
            },
            ..Config::default()
        };

        let source = resolve_stories_source(Some("https://cdn.example/stories.json".into()), &config);
        assert_eq!(source, "https://cdn.example/stories.json");

        std::env::remove_var(ENV_STORIES_SOURCE);
    }

    #[test]
    fn env_source_wins_over_config() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_STORIES_SOURCE, "/env/stories.json");
        let config = Config {
            source: SourceConfig {
                stories: Some("/config/stories.json".to_string()),
            },
            ..Config::default()
        };

        assert_eq!(resolve_stories_source(None, &config), "/env/stories.json");

        std::env::remove_var(ENV_STORIES_SOURCE);
    }

    #[test]
    fn blank_values_fall_back_to_default_source() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_STORIES_SOURCE);
        let config = Config {
            source: SourceConfig {
                stories: Some("   ".to_string()),
            },
            ..Config::default()
        };

        assert_eq!(
            resolve_stories_source(Some(String::new()), &config),
            DEFAULT_STORIES_SOURCE
        );
    }
}
