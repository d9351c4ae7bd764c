//! Navigation Sidebar Model
//!
//! The sidebar is static apart from the signed-in user: the profile link and
//! the account card at the bottom both depend on who is logged in. The
//! server builds the model and the client only renders it.

use serde::{Deserialize, Serialize};

use crate::shared::user::UserSummary;

/// Avatar shown when a user has not uploaded a profile image
pub const AVATAR_PLACEHOLDER: &str = "/avatar-placeholder.png";

/// Endpoint the logout control posts to
pub const LOGOUT_PATH: &str = "/api/auth/logout";

/// One entry of the link list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub path: String,
}

impl NavLink {
    fn new(label: &str, path: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            path: path.into(),
        }
    }
}

/// Account card for the signed-in user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavAccount {
    pub username: String,
    pub full_name: String,
    pub profile_img: String,
    /// Where the card links to
    pub path: String,
}

/// An HTTP action the client can trigger from the sidebar
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavAction {
    pub method: String,
    pub path: String,
}

/// Complete sidebar model served by `GET /api/nav`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sidebar {
    pub links: Vec<NavLink>,
    pub account: Option<NavAccount>,
    pub logout: Option<NavAction>,
}

impl Sidebar {
    /// Build the sidebar for an optional signed-in user
    pub fn for_user(user: Option<&UserSummary>) -> Self {
        let username = user.map(|u| u.username.as_str()).unwrap_or_default();
        let profile_path = format!("/profile/{}", username);

        let links = vec![
            NavLink::new("Home", "/"),
            NavLink::new("Notifications", "/notifications"),
            NavLink::new("Chats", "/chats"),
            NavLink::new("Profile", profile_path.clone()),
        ];

        let account = user.map(|u| NavAccount {
            username: u.username.clone(),
            full_name: u.full_name.clone(),
            profile_img: u
                .profile_img
                .clone()
                .unwrap_or_else(|| AVATAR_PLACEHOLDER.to_string()),
            path: profile_path,
        });

        let logout = user.map(|_| NavAction {
            method: "POST".to_string(),
            path: LOGOUT_PATH.to_string(),
        });

        Self {
            links,
            account,
            logout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    fn alice() -> UserSummary {
        UserSummary {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            full_name: "Alice Liddell".to_string(),
            profile_img: None,
        }
    }

    #[test]
    fn test_anonymous_sidebar() {
        let sidebar = Sidebar::for_user(None);
        let labels: Vec<_> = sidebar.links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["Home", "Notifications", "Chats", "Profile"]);
        assert_eq!(sidebar.links[3].path, "/profile/");
        assert!(sidebar.account.is_none());
        assert!(sidebar.logout.is_none());
    }

    #[test]
    fn test_signed_in_sidebar() {
        let user = alice();
        let sidebar = Sidebar::for_user(Some(&user));
        assert_eq!(sidebar.links[3].path, "/profile/alice");

        let account = sidebar.account.unwrap();
        assert_eq!(account.full_name, "Alice Liddell");
        assert_eq!(account.profile_img, AVATAR_PLACEHOLDER);
        assert_eq!(account.path, "/profile/alice");
        assert_eq!(sidebar.logout.unwrap().path, LOGOUT_PATH);
    }

    #[test]
    fn test_profile_image_used_when_present() {
        let mut user = alice();
        user.profile_img = Some("https://img.example/a.png".to_string());
        let sidebar = Sidebar::for_user(Some(&user));
        assert_eq!(sidebar.account.unwrap().profile_img, "https://img.example/a.png");
    }
}
