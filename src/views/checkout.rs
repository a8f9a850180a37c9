// ============================================================================
// CHECKOUT - Dados do comprador + redirecionamento para o checkout hospedado
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    append_child, form_group, get_element_by_id, on_click, set_desabilitado, valor_input,
    valor_select, ElementBuilder,
};
use crate::dom::events::on_submit;
use crate::models::{plano_por_id, CriarPagamentoRequest, PLANOS};
use crate::router::navegar_para;
use crate::services::ApiClient;
use crate::state::AppState;
use crate::utils::formatar_moeda;
use crate::viewmodels::validacao::{validar_checkout, whatsapp_normalizado};
use crate::views::{esconder, mostrar_em};

pub fn render_checkout(_state: &AppState, plano_preselecionado: Option<&str>) -> Result<Element, JsValue> {
    let pagina = ElementBuilder::new("div")?.class("checkout").build();

    let container = ElementBuilder::new("div")?.class("checkout-card").build();

    let titulo = ElementBuilder::new("h1")?.text("Finalizar compra").build();
    let subtitulo = ElementBuilder::new("p")?
        .class("checkout-subtitulo")
        .text("Você será redirecionado para o pagamento seguro. A licença chega por e-mail assim que o pagamento for aprovado.")
        .build();
    append_child(&container, &titulo)?;
    append_child(&container, &subtitulo)?;

    let form = ElementBuilder::new("form")?.class("checkout-form").build();

    append_child(&form, &form_group("checkout-nome", "Nome completo", "text", "Seu nome")?)?;
    append_child(&form, &form_group("checkout-email", "E-mail", "email", "voce@exemplo.com")?)?;
    append_child(
        &form,
        &form_group("checkout-whatsapp", "WhatsApp", "tel", "(65) 99999-9999")?,
    )?;
    append_child(&form, &render_seletor_plano(plano_preselecionado)?)?;

    // Banner de erro do formulário
    let erro = ElementBuilder::new("div")?
        .id("checkout-erro")?
        .class("banner-erro oculto")
        .build();
    append_child(&form, &erro)?;

    let btn = ElementBuilder::new("button")?
        .id("checkout-btn")?
        .attr("type", "submit")?
        .class("btn btn-primario btn-grande")
        .text("Ir para o pagamento")
        .build();
    append_child(&form, &btn)?;

    on_submit(&form, move |_| submeter_checkout())?;

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

fn render_seletor_plano(preselecionado: Option<&str>) -> Result<Element, JsValue> {
    let grupo = ElementBuilder::new("div")?.class("form-group").build();

    let rotulo = ElementBuilder::new("label")?
        .attr("for", "checkout-plano")?
        .text("Plano")
        .build();
    append_child(&grupo, &rotulo)?;

    let select = ElementBuilder::new("select")?.id("checkout-plano")?.build();
    for plano in PLANOS {
        let option = ElementBuilder::new("option")?
            .attr("value", plano.id)?
            .text(&format!(
                "{} — {} ({} dias)",
                plano.nome,
                formatar_moeda(plano.preco),
                plano.dias
            ))
            .build();
        if Some(plano.id) == preselecionado {
            option.set_attribute("selected", "selected")?;
        }
        append_child(&select, &option)?;
    }
    append_child(&grupo, &select)?;

    Ok(grupo)
}

/// Valida, cria o pagamento e redireciona o navegador para o init_point
fn submeter_checkout() {
    esconder("checkout-erro");

    let nome = valor_input("checkout-nome").unwrap_or_default();
    let email = valor_input("checkout-email").unwrap_or_default();
    let whatsapp = valor_input("checkout-whatsapp").unwrap_or_default();
    let plano = valor_select("checkout-plano").unwrap_or_default();

    if let Err(mensagem) = validar_checkout(&nome, &email, &whatsapp) {
        mostrar_em("checkout-erro", &mensagem);
        return;
    }
    if plano_por_id(&plano).is_none() {
        mostrar_em("checkout-erro", "Escolha um plano válido.");
        return;
    }

    // Trava o botão enquanto o request roda
    if let Some(btn) = get_element_by_id("checkout-btn") {
        set_desabilitado(&btn, true);
        crate::dom::set_text_content(&btn, "Gerando pagamento…");
    }

    let dados = CriarPagamentoRequest {
        plano,
        nome: nome.trim().to_string(),
        email: email.trim().to_string(),
        whatsapp: whatsapp_normalizado(&whatsapp),
    };

    spawn_local(async move {
        let api = ApiClient::new();
        match api.criar_pagamento(&dados).await {
            Ok(resposta) => {
                log::info!(
                    "✅ Pagamento {} criado ({}), redirecionando",
                    resposta.payment_id,
                    formatar_moeda(resposta.valor)
                );
                // Entrega o navegador ao checkout hospedado
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(&resposta.init_point);
                }
            }
            Err(mensagem) => {
                log::error!("❌ Erro criando pagamento: {}", mensagem);
                mostrar_em("checkout-erro", &mensagem);
                if let Some(btn) = get_element_by_id("checkout-btn") {
                    set_desabilitado(&btn, false);
                    crate::dom::set_text_content(&btn, "Ir para o pagamento");
                }
            }
        }
    });
}
