//! Route state for page navigation.
//!
//! This module defines the route enum that determines which page to display,
//! and the navigation capability used to move between routes.

/// Represents the current page/route of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    /// Login page - shown when user is not authenticated
    #[default]
    Login,
    /// Chat page - the landing page after a successful login
    Chat,
}

impl Route {
    pub const LOGIN_PATH: &'static str = "/login";
    pub const CHAT_PATH: &'static str = "/chat";

    pub fn path(self) -> &'static str {
        match self {
            Self::Login => Self::LOGIN_PATH,
            Self::Chat => Self::CHAT_PATH,
        }
    }

    /// Resolves a path to a route. Unknown paths land on the login page.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            Self::CHAT_PATH => Self::Chat,
            _ => Self::Login,
        }
    }
}

/// Imperative redirect.
pub trait Navigator: Send + Sync {
    fn go_to(&self, path: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_default_is_login() {
        let route = Route::default();
        assert_eq!(route, Route::Login);
    }

    #[test]
    fn test_route_paths_round_trip() {
        assert_eq!(Route::from_path(Route::Chat.path()), Route::Chat);
        assert_eq!(Route::from_path(Route::Login.path()), Route::Login);
    }

    #[test]
    fn test_route_from_path_tolerates_trailing_slash() {
        assert_eq!(Route::from_path("/chat/"), Route::Chat);
    }

    #[test]
    fn test_unknown_path_falls_back_to_login() {
        assert_eq!(Route::from_path("/settings"), Route::Login);
        assert_eq!(Route::from_path(""), Route::Login);
    }
}
