use serde::{Deserialize, Serialize};

/// Perfil de usuário retornado pela API (login, /auth/me)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Usuario {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub last_login: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Usuario {
    /// Nome para exibição (cai no e-mail quando o cadastro não tem nome)
    pub fn nome_exibicao(&self) -> &str {
        match self.nome.as_deref() {
            Some(nome) if !nome.is_empty() => nome,
            _ => &self.email,
        }
    }
}

/// Corpo de POST /api/v1/auth/login
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Resposta do login: token JWT + perfil
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: Usuario,
}
