/// Screens of the portal, keyed by URL path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Students,
    Drives,
    Reports,
    NotFound,
}

impl Route {
    /// Screens listed in the header navigation, in display order.
    pub const NAVIGATION: [Route; 4] = [
        Route::Dashboard,
        Route::Students,
        Route::Drives,
        Route::Reports,
    ];

    pub fn from_path(path: &str) -> Route {
        match path.trim_end_matches('/') {
            "" => Route::Dashboard,
            "/login" => Route::Login,
            "/dashboard" => Route::Dashboard,
            "/students" => Route::Students,
            "/vaccination-drive" => Route::Drives,
            "/reports" => Route::Reports,
            _ => Route::NotFound,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Students => "/students",
            Route::Drives => "/vaccination-drive",
            Route::Reports => "/reports",
            Route::NotFound => "/404",
        }
    }

    /// Path to write into the address bar when showing this screen. `None`
    /// for the not-found screen, which leaves whatever the user typed.
    pub fn address(self) -> Option<&'static str> {
        match self {
            Route::NotFound => None,
            route => Some(route.path()),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Dashboard => "Dashboard",
            Route::Students => "Student Management",
            Route::Drives => "Drive Management",
            Route::Reports => "Reports",
            Route::NotFound => "Not found",
        }
    }

    pub fn is_protected(self) -> bool {
        !matches!(self, Route::Login | Route::NotFound)
    }

    /// Screen to show for `self` given whether a session token is stored.
    pub fn guard(self, has_session: bool) -> Route {
        if self.is_protected() && !has_session {
            Route::Login
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in Route::NAVIGATION.into_iter().chain([Route::Login]) {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn root_and_trailing_slash_resolve() {
        assert_eq!(Route::from_path("/"), Route::Dashboard);
        assert_eq!(Route::from_path("/students/"), Route::Students);
        assert_eq!(Route::from_path("/nope"), Route::NotFound);
    }

    #[test]
    fn unknown_paths_keep_their_address() {
        let route = Route::from_path("/students/42/history");
        assert_eq!(route, Route::NotFound);
        assert_eq!(route.address(), None);
        assert_eq!(Route::Drives.address(), Some("/vaccination-drive"));
    }

    #[test]
    fn protected_screens_need_a_session() {
        assert_eq!(Route::Reports.guard(false), Route::Login);
        assert_eq!(Route::Reports.guard(true), Route::Reports);
        assert_eq!(Route::Login.guard(false), Route::Login);
        assert_eq!(Route::NotFound.guard(false), Route::NotFound);
    }
}
