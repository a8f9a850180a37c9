// ============================================================================
// ADMIN TELEMETRIA - Logs dos bots com auto-refresh opcional
// ============================================================================
// O toggle liga um Interval fixo de 10s que refaz o fetch da lista; desligar
// (ou sair da página) dropa o Interval e para o polling. Os dados já
// renderizados ficam na tela até a próxima resposta chegar.
// ============================================================================

use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::config::INTERVALO_AUTO_REFRESH_MS;
use crate::dom::{
    append_child, get_element_by_id, on_change, set_inner_html, valor_select, ElementBuilder,
};
use crate::models::LogBot;
use crate::services::ApiClient;
use crate::state::AppState;
use crate::utils::{formatar_data, formatar_moeda, hwid_curto, truncar};
use crate::viewmodels::telemetria::{dados_como_texto, filtrar_por_tipo, tipos_presentes, FILTRO_TODOS};
use crate::views::render_vazio;

pub fn render_telemetria(state: &AppState) -> Result<Element, JsValue> {
    let pagina = ElementBuilder::new("div")?.class("admin-telemetria").build();

    append_child(&pagina, &render_toolbar(state)?)?;

    let logs = state.logs.borrow();
    if logs.is_empty() {
        append_child(
            &pagina,
            &render_vazio(
                "📡",
                "Nenhum log recebido",
                "Os eventos dos bots licenciados aparecem aqui.",
            )?,
        )?;
        return Ok(pagina);
    }
    drop(logs);

    let tabela = ElementBuilder::new("table")?.class("tabela").build();
    let thead = ElementBuilder::new("thead")?
        .html("<tr><th>#</th><th>Quando</th><th>Tipo</th><th>Sessão</th><th>Dispositivo</th><th>Lucro</th><th>Dados</th></tr>")
        .build();
    append_child(&tabela, &thead)?;

    let tbody = ElementBuilder::new("tbody")?.id("tbody-logs")?.build();
    preencher_tbody(state, &tbody)?;
    append_child(&tabela, &tbody)?;
    append_child(&pagina, &tabela)?;

    Ok(pagina)
}

fn render_toolbar(state: &AppState) -> Result<Element, JsValue> {
    let toolbar = ElementBuilder::new("div")?.class("toolbar").build();

    // Filtro por tipo de evento
    let select = ElementBuilder::new("select")?.id("filtro-tipo-log")?.build();
    let selecionado = state.filtro_tipo_log.borrow().clone();

    let option_todos = ElementBuilder::new("option")?
        .attr("value", FILTRO_TODOS)?
        .text("Todos os tipos")
        .build();
    if selecionado == FILTRO_TODOS {
        option_todos.set_attribute("selected", "selected")?;
    }
    append_child(&select, &option_todos)?;

    for tipo in tipos_presentes(&state.logs.borrow()) {
        let option = ElementBuilder::new("option")?.attr("value", &tipo)?.text(&tipo).build();
        if tipo == selecionado {
            option.set_attribute("selected", "selected")?;
        }
        append_child(&select, &option)?;
    }

    {
        let state = state.clone();
        on_change(&select, move |_| {
            let tipo = valor_select("filtro-tipo-log").unwrap_or_else(|| FILTRO_TODOS.to_string());
            *state.filtro_tipo_log.borrow_mut() = tipo;
            if let Some(tbody) = get_element_by_id("tbody-logs") {
                set_inner_html(&tbody, "");
                let _ = preencher_tbody(&state, &tbody);
            }
        })?;
    }
    append_child(&toolbar, &select)?;

    // Toggle de auto-refresh
    let grupo = ElementBuilder::new("div")?.class("form-group-check").build();
    let check = ElementBuilder::new("input")?
        .id("auto-refresh")?
        .attr("type", "checkbox")?
        .build();
    if state.auto_refresh_ativo() {
        check.set_attribute("checked", "checked")?;
    }
    let rotulo = ElementBuilder::new("label")?
        .attr("for", "auto-refresh")?
        .text("Auto-refresh (10s)")
        .build();
    append_child(&grupo, &check)?;
    append_child(&grupo, &rotulo)?;

    {
        let state = state.clone();
        on_change(&check, move |_| {
            if crate::dom::checkbox_marcado("auto-refresh") {
                ligar_auto_refresh(&state);
            } else {
                state.parar_auto_refresh();
            }
        })?;
    }
    append_child(&toolbar, &grupo)?;

    Ok(toolbar)
}

/// Agenda o polling. O fetch atualiza o estado e só o corpo da tabela,
/// preservando o toggle e o filtro selecionado.
fn ligar_auto_refresh(state: &AppState) {
    log::info!("▶️ Auto-refresh da telemetria ligado");

    let state_interval = state.clone();
    let interval = Interval::new(INTERVALO_AUTO_REFRESH_MS, move || {
        let state = state_interval.clone();
        spawn_local(async move {
            let api = ApiClient::new();
            match api.listar_logs().await {
                Ok(lista) => {
                    *state.logs.borrow_mut() = lista;
                    if let Some(tbody) = get_element_by_id("tbody-logs") {
                        set_inner_html(&tbody, "");
                        let _ = preencher_tbody(&state, &tbody);
                    }
                }
                Err(mensagem) => {
                    // Mantém a tabela renderizada; só registra a falha
                    log::warn!("⚠️ Auto-refresh falhou: {}", mensagem);
                }
            }
        });
    });

    *state.auto_refresh.borrow_mut() = Some(interval);
}

fn preencher_tbody(state: &AppState, tbody: &Element) -> Result<(), JsValue> {
    let logs = state.logs.borrow();
    let tipo = state.filtro_tipo_log.borrow().clone();
    let filtrados = filtrar_por_tipo(&logs, &tipo);

    for log in filtrados {
        append_child(tbody, &render_linha(log)?)?;
    }
    Ok(())
}

fn render_linha(log: &LogBot) -> Result<Element, JsValue> {
    let linha = ElementBuilder::new("tr")?.build();

    append_child(&linha, &celula(&log.id.to_string())?)?;
    append_child(&linha, &celula(&formatar_data(log.timestamp.as_deref()))?)?;

    let celula_tipo = ElementBuilder::new("td")?.build();
    let tipo = log.tipo.as_deref().unwrap_or("—");
    let classe_tipo = if tipo == "Round" { "chip chip-ativa" } else { "chip" };
    let chip = ElementBuilder::new("span")?.class(classe_tipo).text(tipo).build();
    append_child(&celula_tipo, &chip)?;
    append_child(&linha, &celula_tipo)?;

    let sessao = log.sessao_id.as_deref().unwrap_or("—");
    append_child(&linha, &celula(&truncar(sessao, 12))?)?;
    append_child(&linha, &celula(&hwid_curto(log.hwid.as_deref()))?)?;

    // Lucro colorido pelo sinal
    let celula_lucro = ElementBuilder::new("td")?.build();
    match log.lucro {
        Some(lucro) => {
            let classe = if lucro >= 0.0 { "lucro-positivo" } else { "lucro-negativo" };
            let valor = ElementBuilder::new("span")?
                .class(classe)
                .text(&formatar_moeda(lucro))
                .build();
            append_child(&celula_lucro, &valor)?;
        }
        None => {
            crate::dom::set_text_content(&celula_lucro, "—");
        }
    }
    append_child(&linha, &celula_lucro)?;

    append_child(&linha, &celula(&truncar(&dados_como_texto(log), 60))?)?;

    Ok(linha)
}

fn celula(texto: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("td")?.text(texto).build())
}
