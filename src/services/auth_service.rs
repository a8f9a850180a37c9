// ============================================================================
// AUTH SERVICE - Sessão do usuário no navegador
// ============================================================================
// A sessão vive em exatamente duas chaves do localStorage: "token" (string
// opaca do bearer) e "user" (perfil serializado). Limpas no logout ou ao
// receber 401 de qualquer endpoint autenticado.
// ============================================================================

use crate::models::{LoginRequest, Usuario};
use crate::router::{navegar, Rota};
use crate::services::ApiClient;
use crate::utils::storage::{
    carregar_do_storage, carregar_texto, remover_do_storage, salvar_no_storage, salvar_texto,
    CHAVE_TOKEN, CHAVE_USUARIO,
};

/// Faz login e persiste a sessão. Devolve o perfil para o chamador decidir
/// o destino (painel ou admin).
pub async fn login(email: String, senha: String) -> Result<Usuario, String> {
    log::info!("🔐 Login de {}", email);

    let api = ApiClient::new();
    let resposta = api
        .login(&LoginRequest {
            email,
            password: senha,
        })
        .await?;

    salvar_texto(CHAVE_TOKEN, &resposta.access_token)?;
    salvar_no_storage(CHAVE_USUARIO, &resposta.user)?;

    log::info!("✅ Sessão persistida para {}", resposta.user.email);
    Ok(resposta.user)
}

pub fn token_atual() -> Option<String> {
    carregar_texto(CHAVE_TOKEN)
}

pub fn usuario_atual() -> Option<Usuario> {
    carregar_do_storage(CHAVE_USUARIO)
}

pub fn esta_logado() -> bool {
    token_atual().is_some()
}

pub fn is_admin() -> bool {
    usuario_atual().map(|u| u.is_admin).unwrap_or(false)
}

fn limpar_sessao() {
    let _ = remover_do_storage(CHAVE_TOKEN);
    let _ = remover_do_storage(CHAVE_USUARIO);
}

/// Logout voluntário
pub fn logout() {
    log::info!("👋 Logout");
    limpar_sessao();
    navegar(&Rota::Login);
}

/// Teardown após 401: mesma limpeza, destino login
pub fn sessao_expirada() {
    limpar_sessao();
    navegar(&Rota::Login);
}
