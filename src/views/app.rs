// ============================================================================
// APP VIEW - Despacho de rota para a view da página
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::router::{rota_atual, Rota};
use crate::services::auth_service;
use crate::state::AppState;
use crate::views;

/// Renderiza a página da rota atual. Rotas autenticadas caem no login quando
/// não há sessão; o admin exige a flag is_admin do perfil salvo.
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let rota = rota_atual();

    match rota {
        Rota::Loja => views::loja::render_loja(state),
        Rota::Checkout { plano } => views::checkout::render_checkout(state, plano.as_deref()),
        Rota::Pagamento {
            status,
            collection_id,
            external_reference,
        } => views::pagamento::render_resultado(
            status,
            collection_id.as_deref(),
            external_reference.as_deref(),
        ),
        Rota::Login => views::login::render_login(state),
        Rota::Painel => {
            if !auth_service::esta_logado() {
                log::info!("🔒 Painel sem sessão, redirecionando para login");
                return views::login::render_login(state);
            }
            views::painel::render_painel(state)
        }
        Rota::Admin(pagina) => {
            if !auth_service::esta_logado() {
                return views::login::render_login(state);
            }
            if !state.auth.is_admin() {
                // Cliente comum não enxerga o admin
                log::warn!("⛔ Acesso admin negado para usuário comum");
                return views::painel::render_painel(state);
            }
            views::admin::render_admin(state, &pagina)
        }
    }
}
