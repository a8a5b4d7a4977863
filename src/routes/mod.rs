// SPDX-License-Identifier: MPL-2.0
//! Route table and access guard.
//!
//! Public routes are for signed-out visitors, private routes for signed-in
//! users. Visiting a route from the wrong side redirects: private routes to
//! sign in, public routes to the dashboard.

/// Every screen the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    SignIn,
    SignUp,
    ForgotPassword,
    ResetPassword,
    Dashboard,
    Profile,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::SignIn,
        Route::SignUp,
        Route::ForgotPassword,
        Route::ResetPassword,
        Route::Dashboard,
        Route::Profile,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::SignIn => "/",
            Route::SignUp => "/signup",
            Route::ForgotPassword => "/forgot-password",
            Route::ResetPassword => "/reset-password",
            Route::Dashboard => "/dashboard",
            Route::Profile => "/profile",
        }
    }

    /// Matches a location against the table, ignoring any query string.
    pub fn from_path(location: &str) -> Option<Route> {
        let path = location.split(['?', '#']).next().unwrap_or_default();
        Route::ALL.into_iter().find(|route| route.path() == path)
    }

    pub fn is_private(self) -> bool {
        matches!(self, Route::Dashboard | Route::Profile)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of checking a route against the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render(Route),
    Redirect { to: Route, from: Route },
}

impl RouteDecision {
    /// The route that ends up on screen.
    pub fn target(self) -> Route {
        match self {
            RouteDecision::Render(route) => route,
            RouteDecision::Redirect { to, .. } => to,
        }
    }
}

/// Decides whether `route` may be shown given the session state.
pub fn guard(route: Route, signed_in: bool) -> RouteDecision {
    if route.is_private() == signed_in {
        RouteDecision::Render(route)
    } else {
        let to = if route.is_private() {
            Route::SignIn
        } else {
            Route::Dashboard
        };
        RouteDecision::Redirect { to, from: route }
    }
}

/// Extracts the `token` parameter of a password reset link.
///
/// Accepts a bare query (`?token=abc`) or a full location
/// (`/reset-password?token=abc`). Empty tokens count as missing.
pub fn reset_token_from_query(query: &str) -> Option<String> {
    let query = match query.split_once('?') {
        Some((_, rest)) => rest,
        None => query,
    };
    let query = query.split('#').next().unwrap_or_default();

    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == "token")
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip_through_the_table() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/unknown"), None);
    }

    #[test]
    fn from_path_ignores_query() {
        assert_eq!(
            Route::from_path("/reset-password?token=valid-token"),
            Some(Route::ResetPassword)
        );
    }

    #[test]
    fn only_dashboard_and_profile_are_private() {
        let private: Vec<Route> = Route::ALL.into_iter().filter(|r| r.is_private()).collect();
        assert_eq!(private, vec![Route::Dashboard, Route::Profile]);
    }

    #[test]
    fn guard_renders_matching_side() {
        assert_eq!(guard(Route::SignIn, false), RouteDecision::Render(Route::SignIn));
        assert_eq!(guard(Route::Dashboard, true), RouteDecision::Render(Route::Dashboard));
    }

    #[test]
    fn guard_redirects_signed_out_visitor_to_sign_in() {
        assert_eq!(
            guard(Route::Profile, false),
            RouteDecision::Redirect {
                to: Route::SignIn,
                from: Route::Profile
            }
        );
    }

    #[test]
    fn guard_redirects_signed_in_user_to_dashboard() {
        let decision = guard(Route::SignUp, true);
        assert_eq!(
            decision,
            RouteDecision::Redirect {
                to: Route::Dashboard,
                from: Route::SignUp
            }
        );
        assert_eq!(decision.target(), Route::Dashboard);
    }

    #[test]
    fn reset_token_is_read_from_query() {
        assert_eq!(reset_token_from_query("?token=valid-token").as_deref(), Some("valid-token"));
        assert_eq!(
            reset_token_from_query("/reset-password?foo=1&token=abc").as_deref(),
            Some("abc")
        );
        assert_eq!(reset_token_from_query(""), None);
        assert_eq!(reset_token_from_query("?token="), None);
        assert_eq!(reset_token_from_query("?other=1"), None);
    }
}
