// ============================================================================
// ADMIN - Shell com sidebar e despacho das sub-páginas
// ============================================================================

pub mod clientes;
pub mod dashboard;
pub mod licencas;
pub mod telemetria;
pub mod versoes;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::router::{navegar, PaginaAdmin, Rota};
use crate::services::auth_service;
use crate::state::AppState;
use crate::views::{render_carregando, render_erro};

pub fn render_admin(state: &AppState, pagina: &PaginaAdmin) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("admin-container").build();

    append_child(&container, &render_sidebar(state, pagina)?)?;

    let conteudo = ElementBuilder::new("main")?.class("admin-conteudo").build();
    append_child(&conteudo, &render_header(state, pagina)?)?;

    if let Some(aviso) = state.admin_aviso.borrow().as_ref() {
        let banner = ElementBuilder::new("div")?
            .class("banner-sucesso")
            .text(aviso)
            .build();
        append_child(&conteudo, &banner)?;
    }

    if let Some(erro) = state.admin_erro.borrow().as_ref() {
        append_child(&conteudo, &render_erro(erro)?)?;
    }

    if *state.admin_carregando.borrow() {
        append_child(&conteudo, &render_carregando("Carregando…")?)?;
    } else {
        let corpo = match pagina {
            PaginaAdmin::Dashboard => dashboard::render_dashboard(state)?,
            PaginaAdmin::Licencas => licencas::render_licencas(state)?,
            PaginaAdmin::Clientes => clientes::render_clientes(state)?,
            PaginaAdmin::Versoes => versoes::render_versoes(state)?,
            PaginaAdmin::Telemetria => telemetria::render_telemetria(state)?,
        };
        append_child(&conteudo, &corpo)?;
    }

    append_child(&container, &conteudo)?;
    Ok(container)
}

fn titulo_pagina(pagina: &PaginaAdmin) -> &'static str {
    match pagina {
        PaginaAdmin::Dashboard => "📊 Dashboard",
        PaginaAdmin::Licencas => "🔑 Licenças",
        PaginaAdmin::Clientes => "👥 Clientes",
        PaginaAdmin::Versoes => "🚀 Versões do bot",
        PaginaAdmin::Telemetria => "📡 Telemetria",
    }
}

fn render_sidebar(state: &AppState, ativa: &PaginaAdmin) -> Result<Element, JsValue> {
    let sidebar = ElementBuilder::new("aside")?.class("admin-sidebar").build();

    let logo = ElementBuilder::new("div")?
        .class("admin-logo")
        .text("🤖 CrashBot Admin")
        .build();
    append_child(&sidebar, &logo)?;

    let nav = ElementBuilder::new("nav")?.class("admin-nav").build();
    let itens = [
        (PaginaAdmin::Dashboard, "📊 Dashboard"),
        (PaginaAdmin::Licencas, "🔑 Licenças"),
        (PaginaAdmin::Clientes, "👥 Clientes"),
        (PaginaAdmin::Versoes, "🚀 Versões"),
        (PaginaAdmin::Telemetria, "📡 Telemetria"),
    ];

    for (pagina, rotulo) in itens {
        let classe = if pagina == *ativa {
            "admin-nav-item ativo"
        } else {
            "admin-nav-item"
        };
        let item = ElementBuilder::new("button")?.class(classe).text(rotulo).build();
        {
            let destino = pagina.clone();
            on_click(&item, move |_| {
                navegar(&Rota::Admin(destino.clone()));
            })?;
        }
        append_child(&nav, &item)?;
    }
    append_child(&sidebar, &nav)?;

    // Rodapé: voltar ao painel + logout
    let rodape = ElementBuilder::new("div")?.class("admin-sidebar-rodape").build();

    let btn_painel = ElementBuilder::new("button")?
        .class("admin-nav-item")
        .text("🏠 Meu painel")
        .build();
    on_click(&btn_painel, move |_| navegar(&Rota::Painel))?;
    append_child(&rodape, &btn_painel)?;

    let btn_sair = ElementBuilder::new("button")?
        .class("admin-nav-item sair")
        .text("⎋ Sair")
        .build();
    {
        let state = state.clone();
        on_click(&btn_sair, move |_| {
            state.auth.set_usuario(None);
            auth_service::logout();
        })?;
    }
    append_child(&rodape, &btn_sair)?;

    append_child(&sidebar, &rodape)?;
    Ok(sidebar)
}

fn render_header(state: &AppState, pagina: &PaginaAdmin) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("header")?.class("admin-header").build();

    let titulo = ElementBuilder::new("h1")?.text(titulo_pagina(pagina)).build();
    append_child(&header, &titulo)?;

    let acoes = ElementBuilder::new("div")?.class("header-actions").build();

    let btn_refresh = ElementBuilder::new("button")?
        .class("btn-icon-header")
        .attr("title", "Atualizar")?
        .text("🔄")
        .build();
    {
        let state = state.clone();
        on_click(&btn_refresh, move |_| {
            crate::app::carregar_rota(&state, &crate::router::rota_atual());
        })?;
    }
    append_child(&acoes, &btn_refresh)?;

    if let Some(usuario) = state.auth.usuario() {
        let nome = ElementBuilder::new("span")?
            .class("header-usuario")
            .text(usuario.nome_exibicao())
            .build();
        append_child(&acoes, &nome)?;
    }

    append_child(&header, &acoes)?;
    Ok(header)
}
