use crate::services::session_store::SessionStore;
use crate::traits::navigator::Navigator;

/// Terminal equivalent of redirecting to the login page: forget the stored session and
/// tell the user to log in again.
pub struct SessionInvalidator {
    store: SessionStore,
}

impl SessionInvalidator {
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }
}

impl Navigator for SessionInvalidator {
    fn invalidate_session(&self) {
        if let Err(e) = self.store.clear() {
            log::error!("❌ Failed to clear session: {}", e);
        }
        eprintln!("🔒 Phiên đăng nhập không hợp lệ. Run 'hrdesk login' to sign in again.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::session::{CurrentUser, Session};
    use tempfile::TempDir;

    #[test]
    fn invalidation_clears_the_store() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path().join("session.toml"));
        store
            .save(&Session::new(
                "t".to_string(),
                CurrentUser { id: None, username: "u".to_string(), role: None, role_id: None },
            ))
            .unwrap();

        SessionInvalidator::new(store.clone()).invalidate_session();

        assert!(!store.is_authenticated());
    }
}
