use serde::{Deserialize, Serialize};

/// Versão do bot publicada para auto-update
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct VersaoBot {
    #[serde(default)]
    pub id: i64,
    pub versao: String,
    pub download_url: String,
    #[serde(default)]
    pub changelog: Option<String>,
    #[serde(default)]
    pub obrigatoria: bool,
    #[serde(default)]
    pub ativa: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Corpo de POST /api/v1/bot/versao
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct VersaoCreateRequest {
    pub versao: String,
    pub download_url: String,
    #[serde(default)]
    pub changelog: Option<String>,
    pub obrigatoria: bool,
}
