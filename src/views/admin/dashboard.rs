// ============================================================================
// ADMIN DASHBOARD - Métricas agregadas de licenças e telemetria
// ============================================================================

use chrono::Utc;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::AppState;
use crate::utils::{formatar_data, formatar_moeda, hwid_curto};
use crate::viewmodels::licencas::contar_licencas;
use crate::views::render_vazio;

const PERIODOS: &[(&str, &str)] = &[
    ("24h", "Últimas 24h"),
    ("7d", "7 dias"),
    ("30d", "30 dias"),
    ("all", "Tudo"),
];

pub fn render_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let pagina = ElementBuilder::new("div")?.class("admin-dashboard").build();

    append_child(&pagina, &render_seletor_periodo(state)?)?;
    append_child(&pagina, &render_cards(state)?)?;

    let dashboard = state.dashboard.borrow();
    match dashboard.as_ref() {
        Some(dados) => {
            append_child(&pagina, &render_por_tipo(dados)?)?;
            append_child(&pagina, &render_atividade(dados)?)?;
            append_child(&pagina, &render_top_licencas(dados)?)?;
        }
        None => {
            append_child(
                &pagina,
                &render_vazio(
                    "📡",
                    "Sem dados de telemetria",
                    "Os bots ainda não reportaram atividade neste período.",
                )?,
            )?;
        }
    }
    drop(dashboard);

    append_child(&pagina, &render_status_bots(state)?)?;

    Ok(pagina)
}

fn render_seletor_periodo(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("seletor-periodo").build();
    let selecionado = state.periodo_dashboard.borrow().clone();

    for (valor, rotulo) in PERIODOS {
        let classe = if *valor == selecionado {
            "btn-periodo ativo"
        } else {
            "btn-periodo"
        };
        let btn = ElementBuilder::new("button")?.class(classe).text(rotulo).build();
        {
            let state = state.clone();
            let valor = valor.to_string();
            on_click(&btn, move |_| {
                *state.periodo_dashboard.borrow_mut() = valor.clone();
                crate::app::carregar_rota(&state, &crate::router::rota_atual());
            })?;
        }
        append_child(&container, &btn)?;
    }
    Ok(container)
}

fn render_cards(state: &AppState) -> Result<Element, JsValue> {
    let grid = ElementBuilder::new("div")?.class("cards-grid").build();

    // Licenças (calculado no cliente sobre a lista completa)
    let (total, vigentes, expiradas) = {
        let licencas = state.licencas.borrow();
        contar_licencas(&licencas, Utc::now())
    };
    append_child(&grid, &card("🔑", "Licenças", &total.to_string())?)?;
    append_child(&grid, &card("✅", "Vigentes", &vigentes.to_string())?)?;
    append_child(&grid, &card("⌛", "Expiradas", &expiradas.to_string())?)?;

    // Telemetria agregada pela API
    if let Some(dados) = state.dashboard.borrow().as_ref() {
        let resumo = &dados.resumo;
        append_child(
            &grid,
            &card("🟢", "Bots online agora", &resumo.bots_ativos_agora.to_string())?,
        )?;
        append_child(&grid, &card("🤖", "Bots únicos", &resumo.bots_unicos.to_string())?)?;
        append_child(&grid, &card("🎮", "Rounds", &resumo.total_rounds.to_string())?)?;
        append_child(&grid, &card("💰", "Lucro total", &formatar_moeda(resumo.lucro_total))?)?;
        append_child(&grid, &card("📋", "Eventos", &resumo.total_logs.to_string())?)?;
    }

    Ok(grid)
}

fn card(icone: &str, rotulo: &str, valor: &str) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("card-metrica").build();
    let icone_el = ElementBuilder::new("div")?.class("card-icone").text(icone).build();
    let valor_el = ElementBuilder::new("div")?.class("card-valor").text(valor).build();
    let rotulo_el = ElementBuilder::new("div")?.class("card-rotulo").text(rotulo).build();
    append_child(&card, &icone_el)?;
    append_child(&card, &valor_el)?;
    append_child(&card, &rotulo_el)?;
    Ok(card)
}

fn render_por_tipo(dados: &crate::models::telemetria::TelemetriaDashboard) -> Result<Element, JsValue> {
    let secao = ElementBuilder::new("section")?.class("admin-secao").build();
    let titulo = ElementBuilder::new("h2")?.text("Eventos por tipo").build();
    append_child(&secao, &titulo)?;

    let chips = ElementBuilder::new("div")?.class("chips").build();
    let mut tipos: Vec<_> = dados.por_tipo.iter().collect();
    tipos.sort_by(|a, b| b.1.cmp(a.1));
    for (tipo, quantidade) in tipos {
        let chip = ElementBuilder::new("span")?
            .class("chip")
            .text(&format!("{}: {}", tipo, quantidade))
            .build();
        append_child(&chips, &chip)?;
    }
    append_child(&secao, &chips)?;
    Ok(secao)
}

/// Atividade das últimas 24h como barras horizontais simples
fn render_atividade(dados: &crate::models::telemetria::TelemetriaDashboard) -> Result<Element, JsValue> {
    let secao = ElementBuilder::new("section")?.class("admin-secao").build();
    let titulo = ElementBuilder::new("h2")?.text("Atividade por hora (24h)").build();
    append_child(&secao, &titulo)?;

    if dados.atividade_por_hora.is_empty() {
        let vazio = ElementBuilder::new("p")?
            .class("texto-suave")
            .text("Sem eventos nas últimas 24 horas.")
            .build();
        append_child(&secao, &vazio)?;
        return Ok(secao);
    }

    let maximo = dados
        .atividade_por_hora
        .iter()
        .map(|a| a.quantidade)
        .max()
        .unwrap_or(1)
        .max(1);

    let lista = ElementBuilder::new("div")?.class("atividade-lista").build();
    for atividade in &dados.atividade_por_hora {
        let linha = ElementBuilder::new("div")?.class("atividade-linha").build();

        let hora = atividade
            .hora
            .as_deref()
            .map(|h| formatar_data(Some(h)))
            .unwrap_or_else(|| "—".to_string());
        let rotulo = ElementBuilder::new("span")?
            .class("atividade-hora")
            .text(&hora)
            .build();

        let percentual = (atividade.quantidade * 100 / maximo).max(2);
        let barra = ElementBuilder::new("div")?
            .class("atividade-barra")
            .attr("style", &format!("width: {}%", percentual))?
            .build();

        let quantidade = ElementBuilder::new("span")?
            .class("atividade-quantidade")
            .text(&atividade.quantidade.to_string())
            .build();

        append_child(&linha, &rotulo)?;
        append_child(&linha, &barra)?;
        append_child(&linha, &quantidade)?;
        append_child(&lista, &linha)?;
    }
    append_child(&secao, &lista)?;
    Ok(secao)
}

fn render_top_licencas(dados: &crate::models::telemetria::TelemetriaDashboard) -> Result<Element, JsValue> {
    let secao = ElementBuilder::new("section")?.class("admin-secao").build();
    let titulo = ElementBuilder::new("h2")?.text("Top licenças por lucro").build();
    append_child(&secao, &titulo)?;

    if dados.top_licencas.is_empty() {
        let vazio = ElementBuilder::new("p")?
            .class("texto-suave")
            .text("Nenhum round registrado no período.")
            .build();
        append_child(&secao, &vazio)?;
        return Ok(secao);
    }

    let tabela = ElementBuilder::new("table")?.class("tabela").build();
    let thead = ElementBuilder::new("thead")?
        .html("<tr><th>Cliente</th><th>Dispositivo</th><th>Rounds</th><th>Lucro</th></tr>")
        .build();
    append_child(&tabela, &thead)?;

    let tbody = ElementBuilder::new("tbody")?.build();
    for top in &dados.top_licencas {
        let linha = ElementBuilder::new("tr")?.build();
        let cliente = top.cliente.as_deref().unwrap_or("Desconhecido");
        append_child(&linha, &celula(cliente)?)?;
        append_child(&linha, &celula(&hwid_curto(top.hwid.as_deref()))?)?;
        append_child(&linha, &celula(&top.total_rounds.to_string())?)?;
        append_child(&linha, &celula(&formatar_moeda(top.lucro_total))?)?;
        append_child(&tbody, &linha)?;
    }
    append_child(&tabela, &tbody)?;
    append_child(&secao, &tabela)?;
    Ok(secao)
}

/// Status de cada bot (licenças com estatísticas da API)
fn render_status_bots(state: &AppState) -> Result<Element, JsValue> {
    let secao = ElementBuilder::new("section")?.class("admin-secao").build();
    let titulo = ElementBuilder::new("h2")?.text("Status dos bots").build();
    append_child(&secao, &titulo)?;

    let stats = state.licencas_stats.borrow();
    if stats.is_empty() {
        let vazio = ElementBuilder::new("p")?
            .class("texto-suave")
            .text("Nenhuma licença ativa com telemetria.")
            .build();
        append_child(&secao, &vazio)?;
        return Ok(secao);
    }

    let tabela = ElementBuilder::new("table")?.class("tabela").build();
    let thead = ElementBuilder::new("thead")?
        .html("<tr><th>Cliente</th><th>Chave</th><th>Status</th><th>Rounds</th><th>Lucro</th><th>Última atividade</th></tr>")
        .build();
    append_child(&tabela, &thead)?;

    let tbody = ElementBuilder::new("tbody")?.build();
    for item in stats.iter() {
        let linha = ElementBuilder::new("tr")?.build();

        let cliente = item.licenca.cliente_nome.as_deref().unwrap_or("—");
        append_child(&linha, &celula(cliente)?)?;
        append_child(&linha, &celula(&item.licenca.chave)?)?;

        let (texto_status, classe) = match item.telemetria.status_bot.as_str() {
            "online" => ("🟢 Online", "badge badge-ativa"),
            "recente" => ("🟡 Recente", "badge badge-aviso"),
            "hoje" => ("🕐 Hoje", "badge badge-neutra"),
            "inativo" => ("🔴 Inativo", "badge badge-expirada"),
            _ => ("⚪ Nunca usado", "badge badge-neutra"),
        };
        let celula_status = ElementBuilder::new("td")?.build();
        let badge = ElementBuilder::new("span")?.class(classe).text(texto_status).build();
        append_child(&celula_status, &badge)?;
        append_child(&linha, &celula_status)?;

        append_child(&linha, &celula(&item.telemetria.total_rounds.to_string())?)?;
        append_child(&linha, &celula(&formatar_moeda(item.telemetria.lucro_total))?)?;
        append_child(
            &linha,
            &celula(&formatar_data(item.telemetria.ultima_atividade.as_deref()))?,
        )?;

        append_child(&tbody, &linha)?;
    }
    append_child(&tabela, &tbody)?;
    append_child(&secao, &tabela)?;
    Ok(secao)
}

fn celula(texto: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("td")?.text(texto).build())
}
