use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Staff record. Unknown backend fields are kept so the record can be posted back whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Option<i64>,
    pub ho_ten: Option<String>,
    pub email: Option<String>,
    pub so_dien_thoai: Option<String>,
    pub dia_chi: Option<String>,
    pub ngay_sinh: Option<String>,
    pub chuc_vu: Option<String>,
    pub ten_phong_ban: Option<String>,
    pub id_phong_ban: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Self-service fields an employee may change on their own profile.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileUpdate {
    pub email: Option<String>,
    pub so_dien_thoai: Option<String>,
    pub dia_chi: Option<String>,
    pub ngay_sinh: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.so_dien_thoai.is_none() && self.dia_chi.is_none() && self.ngay_sinh.is_none()
    }
}

impl Employee {
    /// Overlay the self-service fields, leaving everything else as fetched.
    pub fn apply_profile(mut self, update: ProfileUpdate) -> Self {
        if let Some(email) = update.email {
            self.email = Some(email);
        }
        if let Some(phone) = update.so_dien_thoai {
            self.so_dien_thoai = Some(phone);
        }
        if let Some(address) = update.dia_chi {
            self.dia_chi = Some(address);
        }
        if let Some(dob) = update.ngay_sinh {
            self.ngay_sinh = Some(dob);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extra_fields_survive_a_round_trip() {
        let raw = json!({"id": 4, "hoTen": "Trần Bình", "gioiTinh": "Nam", "luongCoBan": 12000000.0});
        let employee: Employee = serde_json::from_value(raw).unwrap();
        assert_eq!(employee.ho_ten.as_deref(), Some("Trần Bình"));

        let posted = serde_json::to_value(employee.apply_profile(ProfileUpdate {
            email: Some("binh@example.com".to_string()),
            ..ProfileUpdate::default()
        }))
        .unwrap();
        assert_eq!(posted["gioiTinh"], "Nam");
        assert_eq!(posted["luongCoBan"], 12000000.0);
        assert_eq!(posted["email"], "binh@example.com");
    }
}
