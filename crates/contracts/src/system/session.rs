//! Application session: who is signed in, which page is shown, whether the
//! mobile sidebar is open. All transitions go through these methods so the
//! shell never writes the fields piecemeal.

use serde::{Deserialize, Serialize};

use crate::system::pages::Page;
use crate::system::users::User;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub user: Option<User>,
    pub page: Page,
    pub sidebar_open: bool,
}

impl SessionState {
    pub fn restored(user: Option<User>, page: Page) -> Self {
        Self {
            user,
            page,
            sidebar_open: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn login(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.page = Page::Dashboard;
        self.sidebar_open = false;
    }

    /// Switches page and closes the mobile sidebar.
    pub fn navigate(&mut self, page: Page) {
        self.page = page;
        self.sidebar_open = false;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "u-1".into(),
            name: "Priya".into(),
            email: "priya@pharma.in".into(),
        }
    }

    #[test]
    fn test_login_then_logout_resets_page() {
        let mut session = SessionState::default();
        assert!(!session.is_authenticated());

        session.login(user());
        session.navigate(Page::Reports);
        assert!(session.is_authenticated());
        assert_eq!(session.page, Page::Reports);

        session.logout();
        assert!(session.user.is_none());
        assert_eq!(session.page, Page::Dashboard);
    }

    #[test]
    fn test_navigate_closes_sidebar() {
        let mut session = SessionState::restored(Some(user()), Page::LowStock);
        session.toggle_sidebar();
        assert!(session.sidebar_open);
        session.navigate(Page::AiChat);
        assert!(!session.sidebar_open);
        assert_eq!(session.page, Page::AiChat);
    }
}
