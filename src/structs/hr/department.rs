use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: Option<i64>,
    pub ten_phong_ban: Option<String>,
    pub mo_ta: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
