//! Entries of the profile dropdown and where each of them navigates.

use serde::Serialize;

use crate::domain::{CurrentUser, Role};

pub mod routes {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const PROFILE: &str = "/profile";
    pub const VIEW_PROFILE: &str = "/profile/view";
    pub const EDIT_PROFILE: &str = "/profile/edit";
    pub const CHANGE_PASSWORD: &str = "/password";
    pub const LOGOUT: &str = "/logout";
    pub const CREATE_COMPANY: &str = "/company/new";
    pub const COMPANY_PAGE: &str = "/company";
    pub const COMPANY_PAGE_HOME: &str = "/company/page/home";
    pub const CANDIDATE_PROFILE: &str = "/candidate/profile";
    pub const CANDIDATE_PROFILE_VIEW: &str = "/candidate/profile/view";
    pub const CANDIDATE_CONNECTIONS: &str = "/candidate/connections";
    pub const CONNECTION_NOTIFICATIONS: &str = "/connection-notifications";

    pub fn company_public_page(slug: &str) -> String {
        format!("/company/{}", slug)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub label: &'static str,
    pub href: String,
    pub method: Method,
}

impl MenuEntry {
    fn link(label: &'static str, href: impl Into<String>) -> Self {
        Self {
            label,
            href: href.into(),
            method: Method::Get,
        }
    }

    fn action(label: &'static str, href: impl Into<String>) -> Self {
        Self {
            label,
            href: href.into(),
            method: Method::Post,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuHeader {
    pub display_name: String,
    pub avatar: Option<String>,
    /// Public company page opened from the avatar.
    pub preview: Option<String>,
    pub edit_profile: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileMenu {
    pub signed_in: bool,
    pub header: Option<MenuHeader>,
    pub entries: Vec<MenuEntry>,
}

impl ProfileMenu {
    pub fn signed_out() -> Self {
        Self {
            signed_in: false,
            header: None,
            entries: vec![MenuEntry::link("Login", routes::LOGIN)],
        }
    }

    pub fn for_user(user: &CurrentUser, show_profile: bool) -> Self {
        let mut entries = Vec::new();
        if show_profile {
            entries.push(MenuEntry::link("View Profile", routes::VIEW_PROFILE));
            entries.push(MenuEntry::link("Create a company", routes::CREATE_COMPANY));
        }
        if user.role == Role::Candidate {
            entries.push(MenuEntry::link(
                "Connection Notifications",
                routes::CONNECTION_NOTIFICATIONS,
            ));
            entries.push(MenuEntry::link("Connections", routes::CANDIDATE_CONNECTIONS));
        }
        if !user.role.is_empty() {
            entries.push(MenuEntry::link("Change Password", routes::CHANGE_PASSWORD));
        }
        entries.push(MenuEntry::action("Logout", routes::LOGOUT));

        Self {
            signed_in: true,
            header: Some(MenuHeader {
                display_name: user.display_name(),
                avatar: user.avatar().map(str::to_string),
                preview: user.company_slug().map(routes::company_public_page),
                edit_profile: routes::EDIT_PROFILE,
            }),
            entries,
        }
    }
}

/// Destination of "View Profile".
pub fn view_profile_target(role: &Role) -> &'static str {
    match role {
        Role::Company => routes::COMPANY_PAGE,
        Role::Candidate => routes::CANDIDATE_PROFILE_VIEW,
        _ => routes::HOME,
    }
}

/// Destination of "EDIT PROFILE"; other roles have no editable profile.
pub fn edit_profile_target(role: &Role) -> Option<&'static str> {
    match role {
        Role::Company => Some(routes::COMPANY_PAGE_HOME),
        Role::Candidate => Some(routes::CANDIDATE_PROFILE),
        _ => None,
    }
}
