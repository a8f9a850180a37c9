// ============================================================================
// LOGIN - Autenticação do cliente/admin
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    append_child, form_group, get_element_by_id, on_click, set_desabilitado, set_text_content,
    valor_input, ElementBuilder,
};
use crate::dom::events::on_submit;
use crate::router::{navegar, navegar_para, Rota};
use crate::services::auth_service;
use crate::state::AppState;
use crate::viewmodels::validacao::validar_login;
use crate::views::{esconder, mostrar_em};

pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    let pagina = ElementBuilder::new("div")?.class("login-screen").build();
    let container = ElementBuilder::new("div")?.class("login-container").build();

    // Header
    let header = ElementBuilder::new("div")?.class("login-header").build();
    let logo = ElementBuilder::new("div")?
        .class("login-logo")
        .text("🤖")
        .build();
    let titulo = ElementBuilder::new("h1")?.text("CrashBot").build();
    let subtitulo = ElementBuilder::new("p")?
        .text("Acesse seu painel de licenças")
        .build();
    append_child(&header, &logo)?;
    append_child(&header, &titulo)?;
    append_child(&header, &subtitulo)?;
    append_child(&container, &header)?;

    // Formulário
    let form = ElementBuilder::new("form")?.class("login-form").build();
    append_child(&form, &form_group("login-email", "E-mail", "email", "voce@exemplo.com")?)?;
    append_child(&form, &form_group("login-senha", "Senha", "password", "Sua senha")?)?;

    let erro = ElementBuilder::new("div")?
        .id("login-erro")?
        .class("banner-erro oculto")
        .build();
    append_child(&form, &erro)?;

    let btn = ElementBuilder::new("button")?
        .id("login-btn")?
        .attr("type", "submit")?
        .class("btn btn-primario btn-grande")
        .text("Entrar")
        .build();
    append_child(&form, &btn)?;

    {
        let state = state.clone();
        on_submit(&form, move |_| submeter_login(&state))?;
    }

    append_child(&container, &form)?;

    let voltar = ElementBuilder::new("button")?
        .class("btn btn-link")
        .text("← Voltar para a loja")
        .build();
    on_click(&voltar, move |_| navegar_para("#/"))?;
    append_child(&container, &voltar)?;

    append_child(&pagina, &container)?;
    Ok(pagina)
}

/// Envia as credenciais. Em caso de erro mostra a mensagem do servidor e
/// NÃO navega; em caso de sucesso persiste a sessão e vai para o destino.
fn submeter_login(state: &AppState) {
    esconder("login-erro");

    let email = valor_input("login-email").unwrap_or_default();
    let senha = valor_input("login-senha").unwrap_or_default();

    if let Err(mensagem) = validar_login(&email, &senha) {
        mostrar_em("login-erro", &mensagem);
        return;
    }

    if let Some(btn) = get_element_by_id("login-btn") {
        set_desabilitado(&btn, true);
        set_text_content(&btn, "Entrando…");
    }

    let state = state.clone();
    spawn_local(async move {
        match auth_service::login(email.trim().to_string(), senha).await {
            Ok(usuario) => {
                let destino = if usuario.is_admin {
                    Rota::Admin(crate::router::PaginaAdmin::Dashboard)
                } else {
                    Rota::Painel
                };
                state.auth.set_usuario(Some(usuario));
                navegar(&destino);
            }
            Err(mensagem) => {
                log::error!("❌ Login falhou: {}", mensagem);
                mostrar_em("login-erro", &mensagem);
                if let Some(btn) = get_element_by_id("login-btn") {
                    set_desabilitado(&btn, false);
                    set_text_content(&btn, "Entrar");
                }
            }
        }
    });
}
