//! Route gating rules: who may see which route, where each role lands, and
//! where a fresh login goes.
//!
//! Everything here is synchronous and side-effect free. The middleware in
//! `auth::middleware` turns a [`GateDecision`] into an HTTP response.

use axum::http::uri::PathAndQuery;

use super::models::{Role, SessionRecord};

pub const LOGIN_ROUTE: &str = "/login";
pub const SIGNUP_ROUTE: &str = "/signup";

const TALENT: &[Role] = &[Role::Talent];
const BRAND: &[Role] = &[Role::Brand];
const ADMIN: &[Role] = &[Role::Admin];
const TALENT_BRAND: &[Role] = &[Role::Talent, Role::Brand];
const EVERYONE: &[Role] = &[Role::Talent, Role::Brand, Role::Admin];

/// Route pattern (as matched by the router) and the roles allowed on it.
/// Patterns not listed are open to any signed-in role.
pub const ROUTE_ACCESS: &[(&str, &[Role])] = &[
    ("/dashboard", TALENT),
    ("/discover", BRAND),
    ("/talent/:id", TALENT_BRAND),
    ("/deals", TALENT_BRAND),
    ("/deals/:id", TALENT_BRAND),
    ("/deals/:id/accept", TALENT_BRAND),
    ("/deals/:id/reject", TALENT_BRAND),
    ("/deals/:id/uploads", TALENT_BRAND),
    ("/deals/:id/uploads/:index", TALENT_BRAND),
    ("/campaigns", TALENT_BRAND),
    ("/earnings", TALENT_BRAND),
    ("/earnings/payment-method", TALENT_BRAND),
    ("/roster", TALENT_BRAND),
    ("/analytics", TALENT_BRAND),
    ("/profile", EVERYONE),
    ("/admin", ADMIN),
];

/// Landing route for each role, used after login and when a signed-in user
/// opens a public-only page
pub fn default_route(role: Role) -> &'static str {
    match role {
        Role::Talent => "/dashboard",
        Role::Brand => "/discover",
        Role::Admin => "/admin",
    }
}

/// Allowed roles for a route pattern, `None` when the route declares none
pub fn allowed_roles(pattern: &str) -> Option<&'static [Role]> {
    ROUTE_ACCESS
        .iter()
        .find(|(p, _)| *p == pattern)
        .map(|(_, roles)| *roles)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Hand the request to the route unchanged
    Render,
    /// No session: send to login, remembering the requested path
    RedirectToLogin { from: String },
    /// Signed in on a public-only page: send to the role's home
    RedirectHome { to: &'static str },
    /// Signed in with a role outside the allowed set
    Deny { role: Role },
}

/// Decision for a route that requires a session, optionally restricted to
/// `allowed` roles
pub fn protect(
    session: Option<&SessionRecord>,
    requested: &str,
    allowed: Option<&[Role]>,
) -> GateDecision {
    let Some(record) = session else {
        return GateDecision::RedirectToLogin {
            from: requested.to_string(),
        };
    };

    match allowed {
        Some(roles) if !roles.contains(&record.role) => GateDecision::Deny { role: record.role },
        _ => GateDecision::Render,
    }
}

/// Decision for login/signup: only anonymous users get to see them
pub fn public_only(session: Option<&SessionRecord>) -> GateDecision {
    match session {
        Some(record) => GateDecision::RedirectHome {
            to: default_route(record.role),
        },
        None => GateDecision::Render,
    }
}

/// Login URL carrying the originally requested path
pub fn login_redirect_target(from: &str) -> String {
    format!("{}?from={}", LOGIN_ROUTE, urlencoding::encode(from))
}

/// Where to go after a successful login: back to `from`, unless it is
/// missing, points off-site, or is itself an auth page
pub fn resolve_post_login(role: Role, from: Option<&str>) -> String {
    match from.map(str::trim) {
        Some(path) if is_return_path(path) => path.to_string(),
        _ => default_route(role).to_string(),
    }
}

fn is_return_path(path: &str) -> bool {
    if !is_local_path(path) {
        return false;
    }

    let route = path.split(['?', '#']).next().unwrap_or(path);
    !matches!(route, "/" | LOGIN_ROUTE | SIGNUP_ROUTE)
}

/// Same-site path that is safe to put in a `Location` header. Browsers drop
/// tabs and newlines and read `\` as `/`, so any of those could turn the
/// path into `//host`.
fn is_local_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.starts_with("//")
        && !path.contains('\\')
        && !path.chars().any(char::is_control)
        && path.parse::<PathAndQuery>().is_ok()
}

/// Path component of a `Referer` header value, if it names a local one
pub fn referer_path(referer: &str) -> Option<&str> {
    let path = if referer.starts_with('/') {
        referer
    } else {
        let after_scheme = referer.split_once("://")?.1;
        &after_scheme[after_scheme.find('/')?..]
    };

    is_local_path(path).then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Role) -> SessionRecord {
        SessionRecord {
            email: format!("{}@example.com", role),
            role,
        }
    }

    #[test]
    fn test_no_session_always_redirects_to_login() {
        let role_sets: [Option<&[Role]>; 4] = [None, Some(TALENT), Some(BRAND), Some(EVERYONE)];
        for allowed in role_sets {
            assert_eq!(
                protect(None, "/deals", allowed),
                GateDecision::RedirectToLogin {
                    from: "/deals".to_string()
                }
            );
        }
    }

    #[test]
    fn test_talent_session_role_sets() {
        let talent = session(Role::Talent);
        assert_eq!(protect(Some(&talent), "/dashboard", Some(TALENT)), GateDecision::Render);
        assert_eq!(
            protect(Some(&talent), "/discover", Some(BRAND)),
            GateDecision::Deny { role: Role::Talent }
        );
        assert_eq!(protect(Some(&talent), "/api/me", None), GateDecision::Render);
    }

    #[test]
    fn test_public_only_sends_each_role_home() {
        assert_eq!(
            public_only(Some(&session(Role::Admin))),
            GateDecision::RedirectHome { to: "/admin" }
        );
        assert_eq!(
            public_only(Some(&session(Role::Brand))),
            GateDecision::RedirectHome { to: "/discover" }
        );
        assert_eq!(public_only(None), GateDecision::Render);
    }

    #[test]
    fn test_post_login_never_returns_to_auth_pages() {
        for role in Role::ALL {
            assert_eq!(resolve_post_login(role, Some("/login")), default_route(role));
            assert_eq!(resolve_post_login(role, Some("/signup")), default_route(role));
            assert_eq!(resolve_post_login(role, Some("/login?from=%2Fdeals")), default_route(role));
            assert_eq!(resolve_post_login(role, None), default_route(role));
            assert_eq!(resolve_post_login(role, Some("/")), default_route(role));
        }
    }

    #[test]
    fn test_post_login_returns_to_origin() {
        assert_eq!(resolve_post_login(Role::Talent, Some("/deals")), "/deals");
        assert_eq!(resolve_post_login(Role::Brand, Some("/talent/2")), "/talent/2");
    }

    #[test]
    fn test_post_login_rejects_offsite_origins() {
        assert_eq!(resolve_post_login(Role::Talent, Some("//evil.example")), "/dashboard");
        assert_eq!(resolve_post_login(Role::Talent, Some("https://evil.example/")), "/dashboard");
        assert_eq!(resolve_post_login(Role::Talent, Some("/\\evil.example")), "/dashboard");
        assert_eq!(resolve_post_login(Role::Talent, Some("/\t/evil.example")), "/dashboard");
    }

    #[test]
    fn test_post_login_rejects_control_characters() {
        assert_eq!(resolve_post_login(Role::Talent, Some("/deals\nx")), "/dashboard");
        assert_eq!(resolve_post_login(Role::Talent, Some("/deals\r\nSet-Cookie: x=1")), "/dashboard");
        assert_eq!(resolve_post_login(Role::Brand, Some("/deals\u{7f}")), "/discover");
    }

    #[test]
    fn test_login_redirect_target_encodes_origin() {
        assert_eq!(login_redirect_target("/deals"), "/login?from=%2Fdeals");
        assert_eq!(
            login_redirect_target("/discover?q=duke"),
            "/login?from=%2Fdiscover%3Fq%3Dduke"
        );
    }

    #[test]
    fn test_route_access_table() {
        assert_eq!(allowed_roles("/admin"), Some(ADMIN));
        assert_eq!(allowed_roles("/talent/:id"), Some(TALENT_BRAND));
        assert_eq!(allowed_roles("/api/me"), None);
        for (pattern, roles) in ROUTE_ACCESS {
            assert!(!roles.is_empty(), "{} must allow at least one role", pattern);
        }
    }

    #[test]
    fn test_referer_path() {
        assert_eq!(referer_path("http://localhost:8080/deals"), Some("/deals"));
        assert_eq!(referer_path("/campaigns?q=nike"), Some("/campaigns?q=nike"));
        assert_eq!(referer_path("http://localhost:8080"), None);
        assert_eq!(referer_path("garbage"), None);
        assert_eq!(referer_path("http://localhost:8080//evil.example"), None);
        assert_eq!(referer_path("http://localhost:8080/\\evil.example"), None);
        assert_eq!(referer_path("/deals\tx"), None);
    }
}
