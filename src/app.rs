// ============================================================================
// APP - Aplicação principal (render + carga de dados por rota)
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::router::{PaginaAdmin, Rota};
use crate::services::{auth_service, ApiClient};
use crate::state::AppState;
use crate::views::render_app;

pub struct App {
    state: AppState,
    root: Option<Element>,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("Elemento #app não encontrado"))?;

        let state = AppState::new();

        // Re-render automático quando o estado muda. O Timeout de 0ms agrupa
        // várias escritas feitas no mesmo tick.
        state.subscrever(move || {
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self {
            state,
            root: Some(root),
        })
    }

    pub fn render(&mut self) -> Result<(), JsValue> {
        if let Some(root) = &self.root {
            set_inner_html(root, "");
            let pagina = render_app(&self.state)?;
            append_child(root, &pagina)?;
        }
        Ok(())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Dispara os fetches da rota recém-ativada. As views renderizam o que está
/// no estado; quem escreve no estado notifica e o re-render acontece sozinho.
pub fn carregar_rota(state: &AppState, rota: &Rota) {
    // Polling da telemetria só vive na própria página
    if !matches!(rota, Rota::Admin(PaginaAdmin::Telemetria)) {
        state.parar_auto_refresh();
    }

    match rota {
        Rota::Painel => carregar_painel(state),
        Rota::Admin(pagina) => {
            if !auth_service::esta_logado() || !state.auth.is_admin() {
                return;
            }
            match pagina {
                PaginaAdmin::Dashboard => carregar_dashboard(state),
                PaginaAdmin::Licencas | PaginaAdmin::Clientes => carregar_licencas(state),
                PaginaAdmin::Versoes => carregar_versoes(state),
                PaginaAdmin::Telemetria => carregar_logs(state),
            }
        }
        // Páginas públicas não dependem de fetch prévio
        _ => {}
    }
}

fn carregar_painel(state: &AppState) {
    if !auth_service::esta_logado() {
        return;
    }

    *state.painel_carregando.borrow_mut() = true;
    *state.painel_erro.borrow_mut() = None;
    state.notificar();

    let state = state.clone();
    spawn_local(async move {
        let api = ApiClient::new();
        match api.minhas_licencas().await {
            Ok(licencas) => {
                log::info!("📋 {} licença(s) do cliente carregadas", licencas.len());
                *state.minhas_licencas.borrow_mut() = licencas;
            }
            Err(mensagem) => {
                *state.painel_erro.borrow_mut() = Some(mensagem);
            }
        }
        *state.painel_carregando.borrow_mut() = false;
        state.notificar();
    });
}

fn carregar_dashboard(state: &AppState) {
    iniciar_carga_admin(state);

    let state = state.clone();
    spawn_local(async move {
        let api = ApiClient::new();
        let periodo = state.periodo_dashboard.borrow().clone();

        match api.dashboard_telemetria(&periodo).await {
            Ok(dados) => *state.dashboard.borrow_mut() = Some(dados),
            Err(mensagem) => {
                *state.dashboard.borrow_mut() = None;
                state.set_erro_admin(Some(mensagem));
            }
        }

        // Contagens de licenças + status dos bots completam o dashboard
        if let Ok(licencas) = api.listar_licencas().await {
            *state.licencas.borrow_mut() = licencas;
        }
        if let Ok(stats) = api.licencas_com_stats().await {
            *state.licencas_stats.borrow_mut() = stats;
        }

        concluir_carga_admin(&state);
    });
}

fn carregar_licencas(state: &AppState) {
    iniciar_carga_admin(state);

    let state = state.clone();
    spawn_local(async move {
        let api = ApiClient::new();
        match api.listar_licencas().await {
            Ok(licencas) => {
                log::info!("🔑 {} licença(s) carregadas", licencas.len());
                *state.licencas.borrow_mut() = licencas;
            }
            Err(mensagem) => state.set_erro_admin(Some(mensagem)),
        }
        concluir_carga_admin(&state);
    });
}

fn carregar_versoes(state: &AppState) {
    iniciar_carga_admin(state);

    let state = state.clone();
    spawn_local(async move {
        let api = ApiClient::new();
        match api.listar_versoes().await {
            Ok(versoes) => *state.versoes.borrow_mut() = versoes,
            Err(mensagem) => state.set_erro_admin(Some(mensagem)),
        }
        concluir_carga_admin(&state);
    });
}

fn carregar_logs(state: &AppState) {
    iniciar_carga_admin(state);

    let state = state.clone();
    spawn_local(async move {
        let api = ApiClient::new();
        match api.listar_logs().await {
            Ok(logs) => {
                log::info!("📡 {} log(s) de telemetria carregados", logs.len());
                *state.logs.borrow_mut() = logs;
            }
            Err(mensagem) => state.set_erro_admin(Some(mensagem)),
        }
        concluir_carga_admin(&state);
    });
}

fn iniciar_carga_admin(state: &AppState) {
    *state.admin_carregando.borrow_mut() = true;
    state.set_erro_admin(None);
    state.notificar();
}

fn concluir_carga_admin(state: &AppState) {
    *state.admin_carregando.borrow_mut() = false;
    state.notificar();
}
