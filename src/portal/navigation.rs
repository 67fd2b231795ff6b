// src/portal/navigation.rs
//! Role-scoped navigation chrome, derived entirely from the session record

use super::models::{NavItem, NavView};
use crate::auth::gate::default_route;
use crate::auth::{Role, SessionRecord};
use crate::common::helpers::{capitalize, display_name};

fn item(path: &'static str, label: &'static str, icon: &'static str) -> NavItem {
    NavItem {
        path,
        label,
        icon,
        active: false,
    }
}

/// Links shown to a role, in display order. Only routes the role may open.
pub fn nav_items(role: Role) -> Vec<NavItem> {
    match role {
        Role::Talent => vec![
            item("/dashboard", "Dashboard", "trending-up"),
            item("/deals", "My Deals", "file-text"),
            item("/earnings", "Earnings", "dollar-sign"),
        ],
        Role::Brand => vec![
            item("/discover", "Discover Talent", "users"),
            item("/campaigns", "Campaigns", "file-text"),
            item("/deals", "Deals", "dollar-sign"),
        ],
        Role::Admin => vec![
            item("/admin", "Admin Dashboard", "trending-up"),
            item("/profile", "Profile", "user"),
        ],
    }
}

/// Full navigation view; `current_path` marks the matching item active
pub fn nav_view(record: &SessionRecord, current_path: Option<&str>) -> NavView {
    let items = nav_items(record.role)
        .into_iter()
        .map(|mut nav| {
            nav.active = current_path == Some(nav.path);
            nav
        })
        .collect();

    NavView {
        home: default_route(record.role),
        display_name: display_name(&record.email),
        role_label: capitalize(record.role.as_str()),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_per_role() {
        let labels = |role| nav_items(role).iter().map(|i| i.label).collect::<Vec<_>>();
        assert_eq!(labels(Role::Talent), vec!["Dashboard", "My Deals", "Earnings"]);
        assert_eq!(labels(Role::Brand), vec!["Discover Talent", "Campaigns", "Deals"]);
        assert_eq!(labels(Role::Admin), vec!["Admin Dashboard", "Profile"]);
    }

    #[test]
    fn test_nav_view_marks_active_and_home() {
        let record = SessionRecord {
            email: "brand@example.com".to_string(),
            role: Role::Brand,
        };
        let view = nav_view(&record, Some("/campaigns"));

        assert_eq!(view.home, "/discover");
        assert_eq!(view.display_name, "brand");
        assert_eq!(view.role_label, "Brand");
        let active: Vec<_> = view.items.iter().filter(|i| i.active).map(|i| i.path).collect();
        assert_eq!(active, vec!["/campaigns"]);
    }
}
