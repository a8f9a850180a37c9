// ============================================================================
// ADMIN VERSÕES - Publicação e gestão das versões do bot
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlTextAreaElement};

use crate::dom::{
    append_child, checkbox_marcado, form_group, get_element_by_id, on_click, valor_input,
    ElementBuilder,
};
use crate::dom::events::on_submit;
use crate::models::{VersaoBot, VersaoCreateRequest};
use crate::services::ApiClient;
use crate::state::AppState;
use crate::utils::formatar_data;
use crate::viewmodels::validacao::validar_nova_versao;
use crate::views::{esconder, mostrar_em, render_vazio};

pub fn render_versoes(state: &AppState) -> Result<Element, JsValue> {
    let pagina = ElementBuilder::new("div")?.class("admin-versoes").build();

    append_child(&pagina, &render_form(state)?)?;

    let versoes = state.versoes.borrow();
    if versoes.is_empty() {
        append_child(
            &pagina,
            &render_vazio(
                "🚀",
                "Nenhuma versão publicada",
                "Publique a primeira versão para habilitar o auto-update dos bots.",
            )?,
        )?;
        return Ok(pagina);
    }

    let tabela = ElementBuilder::new("table")?.class("tabela").build();
    let thead = ElementBuilder::new("thead")?
        .html("<tr><th>Versão</th><th>Publicada em</th><th>Obrigatória</th><th>Changelog</th><th>Status</th><th>Ações</th></tr>")
        .build();
    append_child(&tabela, &thead)?;

    let tbody = ElementBuilder::new("tbody")?.build();
    for versao in versoes.iter() {
        append_child(&tbody, &render_linha(state, versao)?)?;
    }
    append_child(&tabela, &tbody)?;
    append_child(&pagina, &tabela)?;

    Ok(pagina)
}

fn render_form(state: &AppState) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("form-card").build();
    let titulo = ElementBuilder::new("h3")?.text("Publicar nova versão").build();
    append_child(&card, &titulo)?;

    let form = ElementBuilder::new("form")?.class("form-inline").build();
    append_child(&form, &form_group("versao-numero", "Versão", "text", "2.1.0")?)?;
    append_child(
        &form,
        &form_group("versao-url", "URL de download", "url", "https://…/crashbot.zip")?,
    )?;

    // Changelog (textarea)
    let grupo_changelog = ElementBuilder::new("div")?.class("form-group").build();
    let rotulo = ElementBuilder::new("label")?
        .attr("for", "versao-changelog")?
        .text("Changelog (opcional)")
        .build();
    let textarea = ElementBuilder::new("textarea")?
        .id("versao-changelog")?
        .attr("rows", "3")?
        .attr("placeholder", "O que mudou nesta versão")?
        .build();
    append_child(&grupo_changelog, &rotulo)?;
    append_child(&grupo_changelog, &textarea)?;
    append_child(&form, &grupo_changelog)?;

    // Checkbox de update obrigatório
    let grupo_obrigatoria = ElementBuilder::new("div")?.class("form-group-check").build();
    let check = ElementBuilder::new("input")?
        .id("versao-obrigatoria")?
        .attr("type", "checkbox")?
        .build();
    let rotulo_check = ElementBuilder::new("label")?
        .attr("for", "versao-obrigatoria")?
        .text("Update obrigatório (o bot não roda sem atualizar)")
        .build();
    append_child(&grupo_obrigatoria, &check)?;
    append_child(&grupo_obrigatoria, &rotulo_check)?;
    append_child(&form, &grupo_obrigatoria)?;

    let erro = ElementBuilder::new("div")?
        .id("versao-erro")?
        .class("banner-erro oculto")
        .build();
    append_child(&form, &erro)?;

    let btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-primario")
        .text("Publicar")
        .build();
    append_child(&form, &btn)?;

    {
        let state = state.clone();
        on_submit(&form, move |_| submeter_versao(&state))?;
    }

    append_child(&card, &form)?;
    Ok(card)
}

fn submeter_versao(state: &AppState) {
    esconder("versao-erro");

    let versao = valor_input("versao-numero").unwrap_or_default();
    let url = valor_input("versao-url").unwrap_or_default();
    let changelog = get_element_by_id("versao-changelog")
        .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
        .map(|t| t.value())
        .unwrap_or_default();
    let obrigatoria = checkbox_marcado("versao-obrigatoria");

    if let Err(mensagem) = validar_nova_versao(&versao, &url) {
        mostrar_em("versao-erro", &mensagem);
        return;
    }

    let dados = VersaoCreateRequest {
        versao: versao.trim().to_string(),
        download_url: url.trim().to_string(),
        changelog: if changelog.trim().is_empty() {
            None
        } else {
            Some(changelog.trim().to_string())
        },
        obrigatoria,
    };

    let state = state.clone();
    spawn_local(async move {
        let api = ApiClient::new();
        match api.criar_versao(&dados).await {
            Ok(nova) => {
                log::info!("🚀 Versão {} publicada", nova.versao);
                recarregar_versoes(&state, &format!("Versão {} publicada", nova.versao)).await;
            }
            Err(mensagem) => {
                mostrar_em("versao-erro", &mensagem);
            }
        }
    });
}

fn render_linha(state: &AppState, versao: &VersaoBot) -> Result<Element, JsValue> {
    let linha = ElementBuilder::new("tr")?.build();

    let celula_versao = ElementBuilder::new("td")?.build();
    let link = ElementBuilder::new("a")?
        .attr("href", &versao.download_url)?
        .attr("target", "_blank")?
        .attr("rel", "noopener noreferrer")?
        .text(&format!("v{}", versao.versao))
        .build();
    append_child(&celula_versao, &link)?;
    append_child(&linha, &celula_versao)?;

    append_child(&linha, &celula(&formatar_data(versao.created_at.as_deref()))?)?;
    append_child(&linha, &celula(if versao.obrigatoria { "Sim" } else { "Não" })?)?;
    append_child(
        &linha,
        &celula(versao.changelog.as_deref().unwrap_or("—"))?,
    )?;

    let celula_status = ElementBuilder::new("td")?.build();
    let (texto, classe) = if versao.ativa {
        ("Disponível", "badge badge-ativa")
    } else {
        ("Desativada", "badge badge-inativa")
    };
    let badge = ElementBuilder::new("span")?.class(classe).text(texto).build();
    append_child(&celula_status, &badge)?;
    append_child(&linha, &celula_status)?;

    let celula_acoes = ElementBuilder::new("td")?.class("celula-acoes").build();
    let rotulo = if versao.ativa { "🚫 Desativar" } else { "✅ Ativar" };
    let btn = ElementBuilder::new("button")?.class("btn btn-mini").text(rotulo).build();
    {
        let state = state.clone();
        let id = versao.id;
        on_click(&btn, move |_| {
            let state = state.clone();
            spawn_local(async move {
                let api = ApiClient::new();
                match api.toggle_versao(id).await {
                    Ok(resposta) => {
                        let mensagem = match resposta.ativa {
                            Some(true) => "Versão disponibilizada",
                            _ => "Versão desativada",
                        };
                        recarregar_versoes(&state, mensagem).await;
                    }
                    Err(mensagem) => {
                        state.set_erro_admin(Some(mensagem));
                        state.notificar();
                    }
                }
            });
        })?;
    }
    append_child(&celula_acoes, &btn)?;
    append_child(&linha, &celula_acoes)?;

    Ok(linha)
}

async fn recarregar_versoes(state: &AppState, aviso: &str) {
    let api = ApiClient::new();
    match api.listar_versoes().await {
        Ok(lista) => {
            *state.versoes.borrow_mut() = lista;
            state.set_erro_admin(None);
        }
        Err(mensagem) => {
            state.set_erro_admin(Some(mensagem));
        }
    }
    state.avisar(aviso);
}

fn celula(texto: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("td")?.text(texto).build())
}
