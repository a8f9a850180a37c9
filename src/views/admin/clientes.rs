// ============================================================================
// ADMIN CLIENTES - Agrupamento da lista de licenças por e-mail
// ============================================================================
// A API não tem endpoint de clientes: o agrupamento acontece no navegador,
// num único passo sobre a lista de licenças (viewmodels::licencas).
// ============================================================================

use chrono::Utc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{
    append_child, get_element_by_id, on_input, set_inner_html, ElementBuilder,
};
use crate::state::AppState;
use crate::viewmodels::licencas::{agrupar_por_cliente, filtrar_clientes};
use crate::views::render_vazio;

pub fn render_clientes(state: &AppState) -> Result<Element, JsValue> {
    let pagina = ElementBuilder::new("div")?.class("admin-clientes").build();

    // Toolbar de busca
    let toolbar = ElementBuilder::new("div")?.class("toolbar").build();
    let busca = ElementBuilder::new("input")?
        .id("busca-clientes")?
        .attr("type", "search")?
        .attr("placeholder", "Buscar por nome ou e-mail…")?
        .attr("value", &state.busca_clientes.borrow())?
        .class("input-busca")
        .build();
    {
        let state = state.clone();
        on_input(&busca, move |e| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            {
                *state.busca_clientes.borrow_mut() = input.value();
            }
            if let Some(lista) = get_element_by_id("lista-clientes") {
                set_inner_html(&lista, "");
                let _ = preencher_lista(&state, &lista);
            }
        })?;
    }
    append_child(&toolbar, &busca)?;
    append_child(&pagina, &toolbar)?;

    if state.licencas.borrow().is_empty() {
        append_child(
            &pagina,
            &render_vazio(
                "👥",
                "Nenhum cliente ainda",
                "Os clientes aparecem aqui junto com a primeira licença.",
            )?,
        )?;
        return Ok(pagina);
    }

    let lista = ElementBuilder::new("div")?
        .id("lista-clientes")?
        .class("clientes-grid")
        .build();
    preencher_lista(state, &lista)?;
    append_child(&pagina, &lista)?;

    Ok(pagina)
}

fn preencher_lista(state: &AppState, lista: &Element) -> Result<(), JsValue> {
    let licencas = state.licencas.borrow();
    let clientes = agrupar_por_cliente(&licencas, Utc::now());
    let busca = state.busca_clientes.borrow().clone();
    let filtrados = filtrar_clientes(&clientes, &busca);

    for cliente in filtrados {
        let card = ElementBuilder::new("div")?.class("cliente-card").build();

        let nome_texto = if cliente.nome.is_empty() {
            "(sem nome)"
        } else {
            &cliente.nome
        };
        let nome = ElementBuilder::new("h3")?.text(nome_texto).build();
        append_child(&card, &nome)?;

        let email = ElementBuilder::new("p")?
            .class("cliente-email")
            .text(&cliente.email)
            .build();
        append_child(&card, &email)?;

        if let Some(whatsapp) = cliente.whatsapp.as_deref() {
            let contato = ElementBuilder::new("p")?
                .class("cliente-contato")
                .text(&format!("📱 {}", whatsapp))
                .build();
            append_child(&card, &contato)?;
        }

        let contagens = ElementBuilder::new("div")?.class("cliente-contagens").build();
        let total = ElementBuilder::new("span")?
            .class("chip")
            .text(&format!("{} licença(s)", cliente.total_licencas))
            .build();
        let ativas = ElementBuilder::new("span")?
            .class("chip chip-ativa")
            .text(&format!("{} ativa(s)", cliente.licencas_ativas))
            .build();
        append_child(&contagens, &total)?;
        append_child(&contagens, &ativas)?;
        append_child(&card, &contagens)?;

        // Chaves do cliente
        let chaves = ElementBuilder::new("div")?.class("cliente-chaves").build();
        for licenca in &cliente.licencas {
            let chave = ElementBuilder::new("code")?
                .class("licenca-chave")
                .text(&licenca.chave)
                .build();
            append_child(&chaves, &chave)?;
        }
        append_child(&card, &chaves)?;

        append_child(lista, &card)?;
    }

    Ok(())
}
