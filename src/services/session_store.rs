use std::fs;
use std::path::{Path, PathBuf};
use crate::errors::{HrError, HrResult};
use crate::structs::session::Session;

/// File-backed session context. The only writer is login; logout and session
/// invalidation are the only clearers.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> HrResult<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.file_error(&e.to_string()))?;
        let session = toml::from_str(&content).map_err(|e| self.file_error(e.message()))?;
        Ok(Some(session))
    }

    /// Like [`SessionStore::load`] but a missing session is an error.
    pub fn require(&self) -> HrResult<Session> {
        self.load()?.ok_or(HrError::NotLoggedIn)
    }

    pub fn save(&self, session: &Session) -> HrResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.file_error(&e.to_string()))?;
        }

        let content = toml::to_string_pretty(session)?;
        fs::write(&self.path, content).map_err(|e| self.file_error(&e.to_string()))?;
        self.restrict_permissions()?;
        log::debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    pub fn clear(&self) -> HrResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| self.file_error(&e.to_string()))?;
            log::debug!("Session cleared at {}", self.path.display());
        }
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.load(), Ok(Some(_)))
    }

    /// The file holds a bearer token; keep it readable by the owner only.
    #[cfg(unix)]
    fn restrict_permissions(&self) -> HrResult<()> {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| self.file_error(&e.to_string()))
    }

    #[cfg(not(unix))]
    fn restrict_permissions(&self) -> HrResult<()> {
        Ok(())
    }

    fn file_error(&self, reason: &str) -> HrError {
        HrError::SessionFileError {
            path: self.path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::session::CurrentUser;
    use tempfile::TempDir;

    fn sample_session() -> Session {
        Session::new(
            "jwt-token".to_string(),
            CurrentUser {
                id: Some(12),
                username: "an.nguyen".to_string(),
                role: Some("Admin".to_string()),
                role_id: Some(1),
            },
        )
    }

    #[test]
    fn save_load_clear_lifecycle() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path().join("nested/session.toml"));

        assert_eq!(store.load().unwrap(), None);
        assert!(!store.is_authenticated());

        store.save(&sample_session()).unwrap();
        assert_eq!(store.require().unwrap(), sample_session());

        store.clear().unwrap();
        assert!(matches!(store.require(), Err(HrError::NotLoggedIn)));
        store.clear().unwrap();
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.toml");
        fs::write(&path, "token = ").unwrap();

        let store = SessionStore::new(path);
        assert!(matches!(store.load(), Err(HrError::SessionFileError { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn saved_session_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path().join("session.toml"));
        store.save(&sample_session()).unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
