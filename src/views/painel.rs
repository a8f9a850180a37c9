// ============================================================================
// PAINEL DO CLIENTE - Minhas licenças + troca de senha
// ============================================================================

use chrono::Utc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    append_child, form_group, limpar_input, on_click, valor_input, ElementBuilder,
};
use crate::dom::events::on_submit;
use crate::models::{plano_por_id, Licenca};
use crate::router::{navegar, PaginaAdmin, Rota};
use crate::services::{auth_service, ApiClient};
use crate::state::AppState;
use crate::utils::{formatar_data_curta, hwid_curto};
use crate::viewmodels::licencas::percentual_restante;
use crate::viewmodels::validacao::validar_troca_senha;
use crate::views::{aviso_temporario, esconder, mostrar_em, render_carregando, render_erro, render_vazio};

pub fn render_painel(state: &AppState) -> Result<Element, JsValue> {
    let pagina = ElementBuilder::new("div")?.class("painel").build();

    append_child(&pagina, &render_header(state)?)?;

    let conteudo = ElementBuilder::new("main")?.class("painel-conteudo").build();

    // Licenças
    let secao_licencas = ElementBuilder::new("section")?.class("painel-secao").build();
    let titulo = ElementBuilder::new("h2")?.text("Minhas licenças").build();
    append_child(&secao_licencas, &titulo)?;

    if let Some(erro) = state.painel_erro.borrow().as_ref() {
        append_child(&secao_licencas, &render_erro(erro)?)?;
    }

    if *state.painel_carregando.borrow() {
        append_child(&secao_licencas, &render_carregando("Carregando licenças…")?)?;
    } else {
        let licencas = state.minhas_licencas.borrow();
        if licencas.is_empty() && state.painel_erro.borrow().is_none() {
            append_child(
                &secao_licencas,
                &render_vazio(
                    "🔑",
                    "Nenhuma licença encontrada",
                    "Assine um plano na loja para ativar o bot.",
                )?,
            )?;
        } else {
            let grid = ElementBuilder::new("div")?.class("licencas-grid").build();
            for licenca in licencas.iter() {
                append_child(&grid, &render_card_licenca(licenca)?)?;
            }
            append_child(&secao_licencas, &grid)?;
        }
    }
    append_child(&conteudo, &secao_licencas)?;

    // Troca de senha
    append_child(&conteudo, &render_troca_senha()?)?;

    append_child(&pagina, &conteudo)?;
    Ok(pagina)
}

fn render_header(state: &AppState) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("header")?.class("app-header").build();

    let titulo = ElementBuilder::new("h1")?.text("🤖 CrashBot").build();
    append_child(&header, &titulo)?;

    let acoes = ElementBuilder::new("div")?.class("header-actions").build();

    if let Some(usuario) = state.auth.usuario() {
        let saudacao = ElementBuilder::new("span")?
            .class("header-usuario")
            .text(&format!("Olá, {}", usuario.nome_exibicao()))
            .build();
        append_child(&acoes, &saudacao)?;

        if usuario.is_admin {
            let btn_admin = ElementBuilder::new("button")?
                .class("btn btn-secundario")
                .text("👔 Admin")
                .build();
            on_click(&btn_admin, move |_| {
                navegar(&Rota::Admin(PaginaAdmin::Dashboard));
            })?;
            append_child(&acoes, &btn_admin)?;
        }
    }

    let btn_sair = ElementBuilder::new("button")?
        .class("btn btn-secundario")
        .text("⎋ Sair")
        .build();
    {
        let state = state.clone();
        on_click(&btn_sair, move |_| {
            state.auth.set_usuario(None);
            auth_service::logout();
        })?;
    }
    append_child(&acoes, &btn_sair)?;

    append_child(&header, &acoes)?;
    Ok(header)
}

fn render_card_licenca(licenca: &Licenca) -> Result<Element, JsValue> {
    let agora = Utc::now();
    let card = ElementBuilder::new("div")?.class("licenca-card").build();

    // Chave + badge de status
    let topo = ElementBuilder::new("div")?.class("licenca-topo").build();
    let chave = ElementBuilder::new("code")?
        .class("licenca-chave")
        .text(&licenca.chave)
        .build();
    append_child(&topo, &chave)?;

    let (texto_status, classe_status) = if !licenca.ativa {
        ("Desativada", "badge badge-inativa")
    } else if licenca.expirada_em(agora) {
        ("Expirada", "badge badge-expirada")
    } else {
        ("Ativa", "badge badge-ativa")
    };
    let status = ElementBuilder::new("span")?
        .class(classe_status)
        .text(texto_status)
        .build();
    append_child(&topo, &status)?;
    append_child(&card, &topo)?;

    // Plano
    if let Some(tipo) = licenca.plano_tipo.as_deref() {
        let nome_plano = plano_por_id(tipo).map(|p| p.nome).unwrap_or(tipo);
        let plano = ElementBuilder::new("div")?
            .class("licenca-plano")
            .text(nome_plano)
            .build();
        append_child(&card, &plano)?;
    }

    // Contagem regressiva + barra de progresso
    if let Some(dias) = licenca.dias_restantes_em(agora) {
        let dias_plano = licenca
            .plano_tipo
            .as_deref()
            .and_then(plano_por_id)
            .map(|p| p.dias)
            .unwrap_or(30);
        let percentual = percentual_restante(dias, dias_plano);

        let classe_dias = if dias > 7 {
            "licenca-dias dias-ok"
        } else if dias >= 3 {
            "licenca-dias dias-aviso"
        } else {
            "licenca-dias dias-critico"
        };
        let texto_dias = match dias {
            0 => "Expira hoje".to_string(),
            1 => "1 dia restante".to_string(),
            n => format!("{} dias restantes", n),
        };
        let dias_el = ElementBuilder::new("div")?
            .class(classe_dias)
            .text(&texto_dias)
            .build();
        append_child(&card, &dias_el)?;

        let barra_container = ElementBuilder::new("div")?
            .class("progresso-container")
            .build();
        let barra = ElementBuilder::new("div")?
            .class("progresso-barra")
            .attr("style", &format!("width: {}%", percentual))?
            .build();
        append_child(&barra_container, &barra)?;
        append_child(&card, &barra_container)?;
    }

    // Metadados
    let meta = ElementBuilder::new("div")?.class("licenca-meta").build();
    let expira = ElementBuilder::new("span")?
        .text(&format!(
            "Expira em: {}",
            formatar_data_curta(licenca.data_expiracao.as_deref())
        ))
        .build();
    let dispositivo = ElementBuilder::new("span")?
        .text(&format!("Dispositivo: {}", hwid_curto(licenca.hwid.as_deref())))
        .build();
    append_child(&meta, &expira)?;
    append_child(&meta, &dispositivo)?;
    append_child(&card, &meta)?;

    Ok(card)
}

fn render_troca_senha() -> Result<Element, JsValue> {
    let secao = ElementBuilder::new("section")?.class("painel-secao").build();
    let titulo = ElementBuilder::new("h2")?.text("Alterar senha").build();
    append_child(&secao, &titulo)?;

    let form = ElementBuilder::new("form")?.class("senha-form").build();
    append_child(&form, &form_group("senha-atual", "Senha atual", "password", "")?)?;
    append_child(&form, &form_group("senha-nova", "Nova senha", "password", "Mínimo 6 caracteres")?)?;
    append_child(
        &form,
        &form_group("senha-confirmacao", "Confirmar nova senha", "password", "")?,
    )?;

    let erro = ElementBuilder::new("div")?
        .id("senha-erro")?
        .class("banner-erro oculto")
        .build();
    append_child(&form, &erro)?;

    let aviso = ElementBuilder::new("div")?
        .id("senha-aviso")?
        .class("banner-sucesso oculto")
        .build();
    append_child(&form, &aviso)?;

    let btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-primario")
        .text("Salvar nova senha")
        .build();
    append_child(&form, &btn)?;

    on_submit(&form, move |_| submeter_troca_senha())?;

    append_child(&secao, &form)?;
    Ok(secao)
}

/// Valida localmente; confirmação divergente nunca chega na rede
fn submeter_troca_senha() {
    esconder("senha-erro");
    esconder("senha-aviso");

    let atual = valor_input("senha-atual").unwrap_or_default();
    let nova = valor_input("senha-nova").unwrap_or_default();
    let confirmacao = valor_input("senha-confirmacao").unwrap_or_default();

    if let Err(mensagem) = validar_troca_senha(&atual, &nova, &confirmacao) {
        mostrar_em("senha-erro", &mensagem);
        return;
    }

    spawn_local(async move {
        let api = ApiClient::new();
        match api.alterar_senha(&atual, &nova).await {
            Ok(resposta) => {
                let mensagem = resposta
                    .message
                    .unwrap_or_else(|| "Senha alterada com sucesso".to_string());
                aviso_temporario("senha-aviso", &mensagem);
                limpar_input("senha-atual");
                limpar_input("senha-nova");
                limpar_input("senha-confirmacao");
            }
            Err(mensagem) => {
                mostrar_em("senha-erro", &mensagem);
            }
        }
    });
}
