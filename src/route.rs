use yew_router::Routable;

/// Fragment-addressed routes. `Home` covers the empty fragment and
/// `NotFound` every unrecognized one; both render the login page.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/dashboard")]
    Dashboard,
    #[at("/add")]
    Add,
    #[at("/expenses")]
    Expenses,
    #[at("/analytics")]
    Analytics,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn canonical(self) -> Route {
        match self {
            Route::Home | Route::NotFound => Route::Login,
            other => other,
        }
    }

    pub fn is_public(self) -> bool {
        matches!(self.canonical(), Route::Login | Route::Signup)
    }
}

/// Outcome of a navigation attempt. The caller performs the redirect; this
/// function only decides.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RouteDecision {
    Render(Route),
    Redirect(Route),
}

pub fn resolve(route: Route, token_present: bool) -> RouteDecision {
    let route = route.canonical();
    if !token_present && !route.is_public() {
        return RouteDecision::Redirect(Route::Login);
    }
    if token_present && route.is_public() {
        return RouteDecision::Redirect(Route::Dashboard);
    }
    RouteDecision::Render(route)
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUTHED: [Route; 4] = [Route::Dashboard, Route::Add, Route::Expenses, Route::Analytics];

    #[test]
    fn protected_routes_bounce_to_login_without_a_token() {
        for route in AUTHED {
            assert_eq!(resolve(route, false), RouteDecision::Redirect(Route::Login));
        }
    }

    #[test]
    fn public_routes_bounce_to_dashboard_with_a_token() {
        for route in [Route::Login, Route::Signup, Route::Home, Route::NotFound] {
            assert_eq!(
                resolve(route, true),
                RouteDecision::Redirect(Route::Dashboard)
            );
        }
    }

    #[test]
    fn everything_else_commits_as_requested() {
        for route in AUTHED {
            assert_eq!(resolve(route, true), RouteDecision::Render(route));
        }
        for route in [Route::Login, Route::Signup] {
            assert_eq!(resolve(route, false), RouteDecision::Render(route));
        }
    }

    #[test]
    fn empty_and_unknown_fragments_render_login() {
        assert_eq!(resolve(Route::Home, false), RouteDecision::Render(Route::Login));
        assert_eq!(
            resolve(Route::NotFound, false),
            RouteDecision::Render(Route::Login)
        );
    }

    #[test]
    fn fragments_parse_to_routes() {
        assert_eq!(Route::recognize("/expenses"), Some(Route::Expenses));
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/nope"), Some(Route::NotFound));
    }
}
