use serde::{Deserialize, Serialize};
use crate::config::constants::ADMIN_ROLES;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: Option<i64>,
    pub username: String,
    pub role: Option<String>,
    pub role_id: Option<i64>,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref().is_some_and(|role| ADMIN_ROLES.contains(&role))
    }
}

/// Login session: created by `login`, removed by `logout` or when the backend rejects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: CurrentUser,
}

impl Session {
    pub fn new(token: String, user: CurrentUser) -> Self {
        Self { token, user }
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    pub fn display_role(&self) -> &str {
        self.user.role.as_deref().unwrap_or("Employee")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Option<&str>) -> CurrentUser {
        CurrentUser {
            id: Some(1),
            username: "an".to_string(),
            role: role.map(str::to_string),
            role_id: None,
        }
    }

    #[test]
    fn admin_roles() {
        assert!(user(Some("Admin")).is_admin());
        assert!(user(Some("QuanTri")).is_admin());
        assert!(!user(Some("NhanVien")).is_admin());
        assert!(!user(Some("admin")).is_admin());
        assert!(!user(None).is_admin());
    }
}
