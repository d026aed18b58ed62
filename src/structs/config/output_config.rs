use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "ConfigHelper::default_color")]
    pub color: bool,

    #[serde(default = "ConfigHelper::default_download_dir")]
    pub download_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ConfigHelper::default_color(),
            download_dir: ConfigHelper::default_download_dir(),
        }
    }
}
