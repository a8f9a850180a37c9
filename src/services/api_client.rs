// ============================================================================
// API CLIENT - SOMENTE comunicação HTTP (stateless)
// ============================================================================
// Não tem lógica de negócio, só faz requests contra a API de licenças.
// Erros viram Result<T, String> com a mensagem pronta para a UI; um 401 em
// endpoint autenticado derruba a sessão local e manda o usuário pro login.
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::Deserialize;

use crate::config::{API_URL, LIMITE_LISTAGEM};
use crate::models::{
    CriarLicencaRequest, CriarPagamentoRequest, CriarPagamentoResponse, EstatisticasLicenca,
    Licenca, LicencaComTelemetria, LogBot, LoginRequest, LoginResponse, SucessoResponse,
    VersaoBot, VersaoCreateRequest,
};
use crate::models::telemetria::TelemetriaDashboard;
use crate::services::auth_service;

/// Campo de erro padrão da API (FastAPI manda {"detail": "..."})
#[derive(Deserialize)]
struct DetalheErro {
    detail: String,
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: API_URL.to_string(),
        }
    }

    // ------------------------------------------------------------------
    // Endpoints públicos
    // ------------------------------------------------------------------

    /// Cria a preferência de pagamento e devolve a URL do checkout hospedado
    pub async fn criar_pagamento(
        &self,
        dados: &CriarPagamentoRequest,
    ) -> Result<CriarPagamentoResponse, String> {
        let url = format!("{}/api/v1/pagamento/criar", self.base_url);

        log::info!("💳 Criando pagamento: plano {} para {}", dados.plano, dados.email);

        let response = Request::post(&url)
            .json(dados)
            .map_err(|e| format!("Erro montando request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Erro de rede: {}", e))?;

        if !response.ok() {
            return Err(erro_da_resposta(response).await);
        }

        response
            .json::<CriarPagamentoResponse>()
            .await
            .map_err(|e| format!("Erro lendo resposta: {}", e))
    }

    /// Login: devolve token + perfil (a persistência fica no auth_service)
    pub async fn login(&self, dados: &LoginRequest) -> Result<LoginResponse, String> {
        let url = format!("{}/api/v1/auth/login", self.base_url);

        let response = Request::post(&url)
            .json(dados)
            .map_err(|e| format!("Erro montando request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Erro de rede: {}", e))?;

        if !response.ok() {
            // 401 aqui é credencial errada, não sessão expirada
            return Err(erro_da_resposta(response).await);
        }

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| format!("Erro lendo resposta: {}", e))
    }

    /// Versão mais recente do bot (badge na loja)
    pub async fn versao_atual(&self) -> Result<VersaoBot, String> {
        let url = format!("{}/api/v1/bot/versao", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Erro de rede: {}", e))?;

        if !response.ok() {
            return Err(erro_da_resposta(response).await);
        }

        response
            .json::<VersaoBot>()
            .await
            .map_err(|e| format!("Erro lendo resposta: {}", e))
    }

    // ------------------------------------------------------------------
    // Conta do cliente
    // ------------------------------------------------------------------

    /// Altera a senha do usuário logado. A API recebe as senhas como
    /// query parameters neste endpoint.
    pub async fn alterar_senha(
        &self,
        senha_atual: &str,
        nova_senha: &str,
    ) -> Result<SucessoResponse, String> {
        let url = format!(
            "{}/api/v1/auth/change-password?senha_atual={}&nova_senha={}",
            self.base_url,
            urlencode(senha_atual),
            urlencode(nova_senha)
        );

        let response = Request::put(&url)
            .header("Authorization", &self.bearer()?)
            .send()
            .await
            .map_err(|e| format!("Erro de rede: {}", e))?;

        self.tratar_autorizado(response).await
    }

    /// Licenças do usuário logado
    pub async fn minhas_licencas(&self) -> Result<Vec<Licenca>, String> {
        self.get_autorizado("/api/v1/minhas-licencas").await
    }

    // ------------------------------------------------------------------
    // Licenças (admin)
    // ------------------------------------------------------------------

    pub async fn listar_licencas(&self) -> Result<Vec<Licenca>, String> {
        let caminho = format!("/api/v1/licencas?skip=0&limit={}", LIMITE_LISTAGEM);
        self.get_autorizado(&caminho).await
    }

    pub async fn criar_licenca(&self, dados: &CriarLicencaRequest) -> Result<Licenca, String> {
        let url = format!("{}/api/v1/licencas", self.base_url);

        log::info!("🔑 Criando licença manual para {}", dados.email_cliente);

        let response = Request::post(&url)
            .header("Authorization", &self.bearer()?)
            .json(dados)
            .map_err(|e| format!("Erro montando request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Erro de rede: {}", e))?;

        self.tratar_autorizado(response).await
    }

    pub async fn toggle_licenca(&self, id: i64) -> Result<SucessoResponse, String> {
        self.patch_autorizado(&format!("/api/v1/licencas/{}/toggle", id))
            .await
    }

    pub async fn reset_hwid(&self, id: i64) -> Result<SucessoResponse, String> {
        self.patch_autorizado(&format!("/api/v1/licencas/{}/reset-hwid", id))
            .await
    }

    // ------------------------------------------------------------------
    // Versões do bot (admin)
    // ------------------------------------------------------------------

    pub async fn listar_versoes(&self) -> Result<Vec<VersaoBot>, String> {
        self.get_autorizado("/api/v1/bot/versoes").await
    }

    pub async fn criar_versao(&self, dados: &VersaoCreateRequest) -> Result<VersaoBot, String> {
        let url = format!("{}/api/v1/bot/versao", self.base_url);

        log::info!("🚀 Publicando versão {}", dados.versao);

        let response = Request::post(&url)
            .header("Authorization", &self.bearer()?)
            .json(dados)
            .map_err(|e| format!("Erro montando request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Erro de rede: {}", e))?;

        self.tratar_autorizado(response).await
    }

    pub async fn toggle_versao(&self, id: i64) -> Result<SucessoResponse, String> {
        self.patch_autorizado(&format!("/api/v1/bot/versao/{}/toggle", id))
            .await
    }

    // ------------------------------------------------------------------
    // Telemetria (admin)
    // ------------------------------------------------------------------

    pub async fn listar_logs(&self) -> Result<Vec<LogBot>, String> {
        let caminho = format!("/api/v1/telemetria/logs?skip=0&limit={}", LIMITE_LISTAGEM);
        self.get_autorizado(&caminho).await
    }

    pub async fn dashboard_telemetria(
        &self,
        periodo: &str,
    ) -> Result<TelemetriaDashboard, String> {
        let caminho = format!("/api/v1/telemetria/dashboard?periodo={}", periodo);
        self.get_autorizado(&caminho).await
    }

    pub async fn licencas_com_stats(&self) -> Result<Vec<LicencaComTelemetria>, String> {
        self.get_autorizado("/api/v1/telemetria/licencas-stats").await
    }

    pub async fn estatisticas_licenca(
        &self,
        id: i64,
        periodo: &str,
    ) -> Result<EstatisticasLicenca, String> {
        let caminho = format!("/api/v1/telemetria/licenca/{}?periodo={}", id, periodo);
        self.get_autorizado(&caminho).await
    }

    // ------------------------------------------------------------------
    // Helpers internos
    // ------------------------------------------------------------------

    fn bearer(&self) -> Result<String, String> {
        match auth_service::token_atual() {
            Some(token) => Ok(format!("Bearer {}", token)),
            None => Err("Sessão não encontrada. Faça login novamente.".to_string()),
        }
    }

    async fn get_autorizado<T: serde::de::DeserializeOwned>(
        &self,
        caminho: &str,
    ) -> Result<T, String> {
        let url = format!("{}{}", self.base_url, caminho);
        let response = Request::get(&url)
            .header("Authorization", &self.bearer()?)
            .send()
            .await
            .map_err(|e| format!("Erro de rede: {}", e))?;

        self.tratar_autorizado(response).await
    }

    async fn patch_autorizado<T: serde::de::DeserializeOwned>(
        &self,
        caminho: &str,
    ) -> Result<T, String> {
        let url = format!("{}{}", self.base_url, caminho);
        let response = Request::patch(&url)
            .header("Authorization", &self.bearer()?)
            .send()
            .await
            .map_err(|e| format!("Erro de rede: {}", e))?;

        self.tratar_autorizado(response).await
    }

    /// Resposta de endpoint autenticado: 401 derruba a sessão local
    async fn tratar_autorizado<T: serde::de::DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, String> {
        if response.status() == 401 {
            log::warn!("🔒 Sessão expirada (401), limpando credenciais");
            auth_service::sessao_expirada();
            return Err("Sessão expirada. Faça login novamente.".to_string());
        }

        if !response.ok() {
            return Err(erro_da_resposta(response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| format!("Erro lendo resposta: {}", e))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Extrai a mensagem de erro da resposta: usa o campo "detail" quando a API
/// mandou um, senão cai numa mensagem genérica com o status.
async fn erro_da_resposta(response: Response) -> String {
    let status = response.status();
    let texto = response.text().await.unwrap_or_default();

    match serde_json::from_str::<DetalheErro>(&texto) {
        Ok(detalhe) if !detalhe.detail.is_empty() => detalhe.detail,
        _ => format!("Erro no servidor (HTTP {})", status),
    }
}

/// Percent-encoding mínimo para valores em query string
fn urlencode(valor: &str) -> String {
    let mut saida = String::with_capacity(valor.len());
    for byte in valor.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                saida.push(byte as char)
            }
            _ => saida.push_str(&format!("%{:02X}", byte)),
        }
    }
    saida
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urlencode_escapa_reservados() {
        assert_eq!(urlencode("abc123"), "abc123");
        assert_eq!(urlencode("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(urlencode("senha#nova"), "senha%23nova");
    }
}
