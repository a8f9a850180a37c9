// ============================================================================
// CRASHBOT WEB - Loja + painel em MVVM estrito (Rust puro)
// ============================================================================
// - Views: funções que renderizam DOM (sem lógica de negócio)
// - ViewModels: agregações e validações puras
// - Services: SOMENTE comunicação com a API + storage
// - State: Rc<RefCell> com subscribers de re-render
// - Router: navegação por hash
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::App;

// Instância global da aplicação
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 CrashBot Web iniciando…");

    let mut app = App::new()?;

    // Carga inicial dos dados da rota aberta
    app::carregar_rota(app.state(), &router::rota_atual());
    app.render()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    // Listener global de hashchange: registrado UMA única vez aqui.
    if let Some(win) = web_sys::window() {
        let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            ao_mudar_rota();
        }) as Box<dyn FnMut(web_sys::Event)>);

        win.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Troca de rota: recarrega os dados da página e re-renderiza
fn ao_mudar_rota() {
    APP.with(|cell| {
        if let Some(ref mut app) = *cell.borrow_mut() {
            let rota = router::rota_atual();
            log::info!("🧭 Navegando para {:?}", rota);
            app::carregar_rota(app.state(), &rota);
            if let Err(e) = app.render() {
                log::error!("❌ Erro renderizando rota: {:?}", e);
            }
        }
    });
}

/// Re-render completo da aplicação (chamado pelos subscribers de estado)
pub fn rerender_app() {
    APP.with(|cell| {
        if let Some(ref mut app) = *cell.borrow_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ Erro re-renderizando: {:?}", e);
            }
        }
    });
}
