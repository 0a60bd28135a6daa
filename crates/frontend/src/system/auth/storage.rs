use contracts::system::users::User;
use web_sys::window;

/// Session-storage key holding the signed-in user as JSON.
const USER_KEY: &str = "user";

fn get_session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

fn encode_user(user: &User) -> Option<String> {
    serde_json::to_string(user).ok()
}

/// Unreadable entries count as signed out.
fn decode_user(raw: &str) -> Option<User> {
    match serde_json::from_str(raw) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("Ignoring stored user: {}", e);
            None
        }
    }
}

/// Save the user for the rest of the browser session
pub fn save_user(user: &User) {
    if let (Some(storage), Some(raw)) = (get_session_storage(), encode_user(user)) {
        let _ = storage.set_item(USER_KEY, &raw);
    }
}

/// User from an earlier sign-in in this tab, if any. A corrupt entry is
/// removed so it is not decoded again on the next start.
pub fn load_user() -> Option<User> {
    let raw = get_session_storage()?.get_item(USER_KEY).ok()??;
    read_stored_user(&raw, clear_user)
}

fn read_stored_user(raw: &str, discard: impl FnOnce()) -> Option<User> {
    let user = decode_user(raw);
    if user.is_none() {
        discard();
    }
    user
}

pub fn clear_user() {
    if let Some(storage) = get_session_storage() {
        let _ = storage.remove_item(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_user_round_trip_and_corruption() {
        let user = User {
            id: "u-1".into(),
            name: "Priya".into(),
            email: "priya@pharma.in".into(),
        };
        let raw = encode_user(&user).unwrap();
        assert_eq!(decode_user(&raw), Some(user));
        assert_eq!(decode_user("{not json"), None);
    }

    #[test]
    fn test_corrupt_entry_is_discarded() {
        let user = User {
            id: "u-2".into(),
            name: "Ravi".into(),
            email: "ravi@pharma.in".into(),
        };
        let raw = encode_user(&user).unwrap();

        let mut discarded = false;
        assert_eq!(read_stored_user(&raw, || discarded = true), Some(user));
        assert!(!discarded);

        assert_eq!(read_stored_user("{not json", || discarded = true), None);
        assert!(discarded);
    }
}
