//! Routes and the session guard.

use turnstile_core::models::User;

/// The routed views of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Login/signup container. The only unprotected route.
    Auth,
    /// Event collection with filtering (and admin CRUD).
    Events,
    /// A single event, by id.
    EventDetail(i64),
    /// The user's tickets (customer) or created events (admin).
    Profile,
}

impl Route {
    pub fn is_protected(self) -> bool {
        !matches!(self, Route::Auth)
    }
}

/// Resolves a requested route against session presence.
///
/// Pure: protected routes fall back to `Auth` without a session, and `Auth`
/// redirects to `Events` once a session exists.
pub fn guard(requested: Route, session: Option<&User>) -> Route {
    match (requested, session) {
        (Route::Auth, Some(_)) => Route::Events,
        (route, None) if route.is_protected() => Route::Auth,
        (route, _) => route,
    }
}

#[cfg(test)]
mod tests {
    use turnstile_core::models::Role;

    use super::*;

    fn user() -> User {
        User {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::Customer,
        }
    }

    #[test]
    fn test_protected_routes_require_session() {
        for route in [Route::Events, Route::EventDetail(3), Route::Profile] {
            assert_eq!(guard(route, None), Route::Auth);
        }
    }

    #[test]
    fn test_protected_routes_pass_with_session() {
        let user = user();
        for route in [Route::Events, Route::EventDetail(3), Route::Profile] {
            assert_eq!(guard(route, Some(&user)), route);
        }
    }

    #[test]
    fn test_auth_redirects_when_signed_in() {
        assert_eq!(guard(Route::Auth, Some(&user())), Route::Events);
        assert_eq!(guard(Route::Auth, None), Route::Auth);
    }
}
