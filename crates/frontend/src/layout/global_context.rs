use std::collections::BTreeMap;

use contracts::system::pages::Page;
use contracts::system::session::SessionState;
use contracts::system::users::User;
use leptos::prelude::*;
use web_sys::window;

use crate::system::auth::storage;

const PAGE_PARAM: &str = "page";

/// Application-wide session store: signed-in user, current page, sidebar.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub session: RwSignal<SessionState>,
}

impl AppGlobalContext {
    /// Restores the user saved earlier in this browser tab.
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(SessionState::restored(storage::load_user(), Page::Dashboard)),
        }
    }

    /// Opens the page named in `?page=` and keeps the query string in sync
    /// with navigation from then on.
    pub fn init_router_integration(&self) {
        let search = current_search();
        if let Some(page) = page_from_query(&search) {
            self.navigate(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.session.with(|s| s.page);
            let current_search = current_search();
            let new_url = with_page_param(&current_search, page);

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_authenticated())
    }

    pub fn user(&self) -> Option<User> {
        self.session.with(|s| s.user.clone())
    }

    pub fn page(&self) -> Page {
        self.session.with(|s| s.page)
    }

    pub fn login(&self, user: User) {
        log::info!("Signed in as {}", user.email);
        storage::save_user(&user);
        self.session.update(|s| s.login(user));
    }

    pub fn logout(&self) {
        log::info!("Signed out");
        storage::clear_user();
        self.session.update(|s| s.logout());
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("Navigate to {}", page.key());
        self.session.update(|s| s.navigate(page));
    }

    pub fn toggle_sidebar(&self) {
        self.session.update(|s| s.toggle_sidebar());
    }

    pub fn close_sidebar(&self) {
        self.session.update(|s| s.close_sidebar());
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

fn parse_query(search: &str) -> BTreeMap<String, String> {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

fn page_from_query(search: &str) -> Option<Page> {
    parse_query(search).get(PAGE_PARAM).map(|key| Page::from_key(key))
}

/// Query string with `page` set and every other parameter kept.
fn with_page_param(search: &str, page: Page) -> String {
    let mut params = parse_query(search);
    params.insert(PAGE_PARAM.to_string(), page.key().to_string());
    format!("?{}", serde_qs::to_string(&params).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_query() {
        assert_eq!(page_from_query("?page=low-stock"), Some(Page::LowStock));
        assert_eq!(page_from_query("?page=nowhere"), Some(Page::Dashboard));
        assert_eq!(page_from_query(""), None);
    }

    #[test]
    fn test_with_page_param_keeps_other_params() {
        assert_eq!(with_page_param("", Page::Reports), "?page=reports");
        assert_eq!(
            with_page_param("?provider=http&page=dashboard", Page::LowStock),
            "?page=low-stock&provider=http"
        );
    }
}
