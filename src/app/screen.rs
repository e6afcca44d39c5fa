// SPDX-License-Identifier: MPL-2.0
//! Routes of the application and their layout chrome.
//!
//! | Path       | Page       | Header | Footer |
//! |------------|------------|--------|--------|
//! | `/`        | Stories    | no     | no     |
//! | `/minimal` | Minimal    | no     | no     |
//! | `/home`    | Home       | yes    | yes    |
//! | `/demo`    | Demo       | yes    | yes    |
//! | other      | Not found  | yes    | yes    |

/// Page the user is on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Stories,
    Minimal,
    Home,
    Demo,
    /// Unknown path, kept for display.
    NotFound(String),
}

impl Screen {
    /// Links offered in the page header, in display order.
    pub const NAVIGATION: [Screen; 3] = [Screen::Stories, Screen::Home, Screen::Demo];

    /// Maps a path to a route. Trailing slashes and surrounding whitespace
    /// are ignored; a missing leading slash is tolerated.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');
        let normalized = normalized.strip_prefix('/').unwrap_or(normalized);

        match normalized {
            "" => Screen::Stories,
            "minimal" => Screen::Minimal,
            "home" => Screen::Home,
            "demo" => Screen::Demo,
            _ => Screen::NotFound(trimmed.to_string()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Screen::Stories => "/",
            Screen::Minimal => "/minimal",
            Screen::Home => "/home",
            Screen::Demo => "/demo",
            Screen::NotFound(path) => path,
        }
    }

    #[must_use]
    pub fn shows_header(&self) -> bool {
        !matches!(self, Screen::Stories | Screen::Minimal)
    }

    #[must_use]
    pub fn shows_footer(&self) -> bool {
        self.shows_header()
    }

    /// i18n key of the page name, used in the header and window title.
    #[must_use]
    pub fn title_key(&self) -> &'static str {
        match self {
            Screen::Stories => "route-stories",
            Screen::Minimal => "route-minimal",
            Screen::Home => "route-home",
            Screen::Demo => "route-demo",
            Screen::NotFound(_) => "route-not-found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_map_to_pages() {
        assert_eq!(Screen::from_path("/"), Screen::Stories);
        assert_eq!(Screen::from_path(""), Screen::Stories);
        assert_eq!(Screen::from_path("/minimal"), Screen::Minimal);
        assert_eq!(Screen::from_path("/home/"), Screen::Home);
        assert_eq!(Screen::from_path("demo"), Screen::Demo);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(
            Screen::from_path("/nowhere"),
            Screen::NotFound("/nowhere".to_string())
        );
        assert_eq!(Screen::from_path("/home/extra").title_key(), "route-not-found");
    }

    #[test]
    fn stories_and_minimal_hide_chrome() {
        for screen in [Screen::Stories, Screen::Minimal] {
            assert!(!screen.shows_header());
            assert!(!screen.shows_footer());
        }
        for screen in [Screen::Home, Screen::Demo, Screen::NotFound("/x".into())] {
            assert!(screen.shows_header());
            assert!(screen.shows_footer());
        }
    }

    #[test]
    fn path_round_trips_for_known_routes() {
        for screen in Screen::NAVIGATION {
            assert_eq!(Screen::from_path(screen.path()), screen);
        }
    }
}
