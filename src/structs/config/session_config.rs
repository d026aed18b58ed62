use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SessionConfig {
    /// Where the login session is kept. Defaults to `~/.hrdesk/session.toml`.
    #[serde(default)]
    pub file: Option<String>,
}
