// ============================================================================
// ADMIN LICENÇAS - Tabela completa com ações
// ============================================================================

use chrono::Utc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{
    append_child, form_group, get_element_by_id, on_click, on_input, set_inner_html,
    valor_input, valor_select, ElementBuilder,
};
use crate::dom::events::on_submit;
use crate::models::{CriarLicencaRequest, Licenca, PLANOS};
use crate::services::ApiClient;
use crate::state::AppState;
use crate::utils::{formatar_data, formatar_data_curta, formatar_moeda, hwid_curto};
use crate::viewmodels::licencas::filtrar_licencas;
use crate::viewmodels::validacao::{validar_nova_licenca, whatsapp_normalizado};
use crate::views::render_vazio;

pub fn render_licencas(state: &AppState) -> Result<Element, JsValue> {
    let pagina = ElementBuilder::new("div")?.class("admin-licencas").build();

    append_child(&pagina, &render_toolbar(state)?)?;

    if *state.mostrar_form_licenca.borrow() {
        append_child(&pagina, &render_form_nova_licenca(state)?)?;
    }

    // Painel de estatísticas de uma licença (preenchido sob demanda)
    let painel_stats = ElementBuilder::new("div")?
        .id("painel-stats")?
        .class("painel-stats oculto")
        .build();
    append_child(&pagina, &painel_stats)?;

    let licencas = state.licencas.borrow();
    if licencas.is_empty() {
        append_child(
            &pagina,
            &render_vazio("🔑", "Nenhuma licença cadastrada", "As vendas aparecem aqui.")?,
        )?;
        return Ok(pagina);
    }
    drop(licencas);

    let tabela = ElementBuilder::new("table")?.class("tabela").build();
    let thead = ElementBuilder::new("thead")?
        .html("<tr><th>Chave</th><th>Cliente</th><th>Plano</th><th>Expira</th><th>Dias</th><th>Dispositivo</th><th>Status</th><th>Ações</th></tr>")
        .build();
    append_child(&tabela, &thead)?;

    let tbody = ElementBuilder::new("tbody")?.id("tbody-licencas")?.build();
    preencher_tbody(state, &tbody)?;
    append_child(&tabela, &tbody)?;
    append_child(&pagina, &tabela)?;

    Ok(pagina)
}

fn render_toolbar(state: &AppState) -> Result<Element, JsValue> {
    let toolbar = ElementBuilder::new("div")?.class("toolbar").build();

    let busca = ElementBuilder::new("input")?
        .id("busca-licencas")?
        .attr("type", "search")?
        .attr("placeholder", "Buscar por chave, nome ou e-mail…")?
        .attr("value", &state.busca_licencas.borrow())?
        .class("input-busca")
        .build();
    {
        // Busca em memória: atualiza só o corpo da tabela, sem re-render
        let state = state.clone();
        on_input(&busca, move |e| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            {
                *state.busca_licencas.borrow_mut() = input.value();
            }
            if let Some(tbody) = get_element_by_id("tbody-licencas") {
                set_inner_html(&tbody, "");
                let _ = preencher_tbody(&state, &tbody);
            }
        })?;
    }
    append_child(&toolbar, &busca)?;

    let rotulo = if *state.mostrar_form_licenca.borrow() {
        "✖ Fechar"
    } else {
        "➕ Nova licença"
    };
    let btn_nova = ElementBuilder::new("button")?
        .class("btn btn-primario")
        .text(rotulo)
        .build();
    {
        let state = state.clone();
        on_click(&btn_nova, move |_| {
            let atual = *state.mostrar_form_licenca.borrow();
            *state.mostrar_form_licenca.borrow_mut() = !atual;
            state.notificar();
        })?;
    }
    append_child(&toolbar, &btn_nova)?;

    Ok(toolbar)
}

fn render_form_nova_licenca(state: &AppState) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("form-card").build();
    let titulo = ElementBuilder::new("h3")?.text("Criar licença manual").build();
    append_child(&card, &titulo)?;

    let form = ElementBuilder::new("form")?.class("form-inline").build();
    append_child(&form, &form_group("nova-lic-nome", "Nome do cliente", "text", "")?)?;
    append_child(&form, &form_group("nova-lic-email", "E-mail", "email", "")?)?;
    append_child(&form, &form_group("nova-lic-whatsapp", "WhatsApp (opcional)", "tel", "")?)?;

    // Plano + dias
    let grupo_plano = ElementBuilder::new("div")?.class("form-group").build();
    let rotulo_plano = ElementBuilder::new("label")?
        .attr("for", "nova-lic-plano")?
        .text("Plano")
        .build();
    let select = ElementBuilder::new("select")?.id("nova-lic-plano")?.build();
    for plano in PLANOS {
        let option = ElementBuilder::new("option")?
            .attr("value", plano.id)?
            .text(plano.nome)
            .build();
        append_child(&select, &option)?;
    }
    append_child(&grupo_plano, &rotulo_plano)?;
    append_child(&grupo_plano, &select)?;
    append_child(&form, &grupo_plano)?;

    let grupo_dias = form_group("nova-lic-dias", "Dias de validade", "number", "30")?;
    append_child(&form, &grupo_dias)?;

    let erro = ElementBuilder::new("div")?
        .id("nova-lic-erro")?
        .class("banner-erro oculto")
        .build();
    append_child(&form, &erro)?;

    let btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-primario")
        .text("Criar licença")
        .build();
    append_child(&form, &btn)?;

    {
        let state = state.clone();
        on_submit(&form, move |_| submeter_nova_licenca(&state))?;
    }

    append_child(&card, &form)?;
    Ok(card)
}

fn submeter_nova_licenca(state: &AppState) {
    crate::views::esconder("nova-lic-erro");

    let nome = valor_input("nova-lic-nome").unwrap_or_default();
    let email = valor_input("nova-lic-email").unwrap_or_default();
    let whatsapp = valor_input("nova-lic-whatsapp").unwrap_or_default();
    let plano = valor_select("nova-lic-plano").unwrap_or_default();
    let dias = valor_input("nova-lic-dias").unwrap_or_default();

    let dias_validade = match validar_nova_licenca(&nome, &email, &dias) {
        Ok(d) => d,
        Err(mensagem) => {
            crate::views::mostrar_em("nova-lic-erro", &mensagem);
            return;
        }
    };

    let dados = CriarLicencaRequest {
        cliente_nome: nome.trim().to_string(),
        email_cliente: email.trim().to_string(),
        whatsapp: if whatsapp.trim().is_empty() {
            None
        } else {
            Some(whatsapp_normalizado(&whatsapp))
        },
        plano_tipo: plano,
        dias_validade,
    };

    let state = state.clone();
    spawn_local(async move {
        let api = ApiClient::new();
        match api.criar_licenca(&dados).await {
            Ok(licenca) => {
                log::info!("✅ Licença {} criada", licenca.chave);
                *state.mostrar_form_licenca.borrow_mut() = false;
                recarregar_licencas(&state, &format!("Licença {} criada", licenca.chave)).await;
            }
            Err(mensagem) => {
                crate::views::mostrar_em("nova-lic-erro", &mensagem);
            }
        }
    });
}

/// Preenche o corpo da tabela com a lista filtrada pela busca atual
fn preencher_tbody(state: &AppState, tbody: &Element) -> Result<(), JsValue> {
    let licencas = state.licencas.borrow();
    let busca = state.busca_licencas.borrow().clone();
    let filtradas = filtrar_licencas(&licencas, &busca);
    let agora = Utc::now();

    for licenca in filtradas {
        let linha = render_linha(state, licenca, agora)?;
        append_child(tbody, &linha)?;
    }
    Ok(())
}

fn render_linha(
    state: &AppState,
    licenca: &Licenca,
    agora: chrono::DateTime<Utc>,
) -> Result<Element, JsValue> {
    let linha = ElementBuilder::new("tr")?.build();

    let chave = ElementBuilder::new("td")?.build();
    let codigo = ElementBuilder::new("code")?.text(&licenca.chave).build();
    append_child(&chave, &codigo)?;
    append_child(&linha, &chave)?;

    let cliente_texto = match (&licenca.cliente_nome, &licenca.email_cliente) {
        (Some(nome), Some(email)) => format!("{} ({})", nome, email),
        (Some(nome), None) => nome.clone(),
        (None, Some(email)) => email.clone(),
        (None, None) => "—".to_string(),
    };
    append_child(&linha, &celula(&cliente_texto)?)?;
    append_child(&linha, &celula(licenca.plano_tipo.as_deref().unwrap_or("—"))?)?;
    append_child(
        &linha,
        &celula(&formatar_data_curta(licenca.data_expiracao.as_deref()))?,
    )?;

    let dias = licenca
        .dias_restantes_em(agora)
        .map(|d| d.to_string())
        .unwrap_or_else(|| "—".to_string());
    append_child(&linha, &celula(&dias)?)?;
    append_child(&linha, &celula(&hwid_curto(licenca.hwid.as_deref()))?)?;

    // Badge de status
    let celula_status = ElementBuilder::new("td")?.build();
    let (texto, classe) = if !licenca.ativa {
        ("Desativada", "badge badge-inativa")
    } else if licenca.expirada_em(agora) {
        ("Expirada", "badge badge-expirada")
    } else {
        ("Ativa", "badge badge-ativa")
    };
    let badge = ElementBuilder::new("span")?.class(classe).text(texto).build();
    append_child(&celula_status, &badge)?;
    append_child(&linha, &celula_status)?;

    // Ações
    let celula_acoes = ElementBuilder::new("td")?.class("celula-acoes").build();

    let rotulo_toggle = if licenca.ativa { "🚫 Desativar" } else { "✅ Ativar" };
    let btn_toggle = ElementBuilder::new("button")?
        .class("btn btn-mini")
        .text(rotulo_toggle)
        .build();
    {
        let state = state.clone();
        let id = licenca.id;
        on_click(&btn_toggle, move |_| acionar_toggle(&state, id))?;
    }
    append_child(&celula_acoes, &btn_toggle)?;

    let btn_hwid = ElementBuilder::new("button")?
        .class("btn btn-mini")
        .attr("title", "Desvincular o dispositivo atual")?
        .text("🔓 Reset HWID")
        .build();
    {
        let state = state.clone();
        let id = licenca.id;
        on_click(&btn_hwid, move |_| acionar_reset_hwid(&state, id))?;
    }
    append_child(&celula_acoes, &btn_hwid)?;

    let btn_stats = ElementBuilder::new("button")?
        .class("btn btn-mini")
        .attr("title", "Estatísticas de uso")?
        .text("📊")
        .build();
    {
        let id = licenca.id;
        on_click(&btn_stats, move |_| carregar_stats(id))?;
    }
    append_child(&celula_acoes, &btn_stats)?;

    append_child(&linha, &celula_acoes)?;
    Ok(linha)
}

fn acionar_toggle(state: &AppState, id: i64) {
    let state = state.clone();
    spawn_local(async move {
        let api = ApiClient::new();
        match api.toggle_licenca(id).await {
            Ok(resposta) => {
                let mensagem = match resposta.ativa {
                    Some(true) => "Licença ativada",
                    _ => "Licença desativada",
                };
                recarregar_licencas(&state, mensagem).await;
            }
            Err(mensagem) => {
                state.set_erro_admin(Some(mensagem));
                state.notificar();
            }
        }
    });
}

fn acionar_reset_hwid(state: &AppState, id: i64) {
    let state = state.clone();
    spawn_local(async move {
        let api = ApiClient::new();
        match api.reset_hwid(id).await {
            Ok(resposta) => {
                let mensagem = resposta
                    .message
                    .unwrap_or_else(|| "HWID resetado com sucesso".to_string());
                recarregar_licencas(&state, &mensagem).await;
            }
            Err(mensagem) => {
                state.set_erro_admin(Some(mensagem));
                state.notificar();
            }
        }
    });
}

/// Busca as estatísticas de uma licença e mostra no painel acima da tabela
fn carregar_stats(id: i64) {
    spawn_local(async move {
        let api = ApiClient::new();
        match api.estatisticas_licenca(id, "7d").await {
            Ok(stats) => {
                if let Some(painel) = get_element_by_id("painel-stats") {
                    set_inner_html(&painel, "");
                    let _ = crate::dom::remove_class(&painel, "oculto");

                    let titulo = format!(
                        "📊 {} — {}",
                        stats.licenca.chave,
                        stats.licenca.cliente_nome.as_deref().unwrap_or("sem nome")
                    );
                    if let Ok(titulo_el) = ElementBuilder::new("h3") {
                        let titulo_el = titulo_el.text(&titulo).build();
                        let _ = append_child(&painel, &titulo_el);
                    }

                    let corpo = match stats.estatisticas {
                        Some(est) => format!(
                            "Rounds: {} · Vitórias: {} · Derrotas: {} · Win rate: {:.1}% · Lucro: {} · Última atividade: {}",
                            est.total_rounds,
                            est.vitorias,
                            est.derrotas,
                            est.win_rate,
                            formatar_moeda(est.lucro_total),
                            formatar_data(est.ultima_atividade.as_deref()),
                        ),
                        None => stats
                            .mensagem
                            .unwrap_or_else(|| "Licença ainda não foi ativada (sem HWID)".to_string()),
                    };
                    if let Ok(corpo_el) = ElementBuilder::new("p") {
                        let corpo_el = corpo_el.text(&corpo).build();
                        let _ = append_child(&painel, &corpo_el);
                    }
                }
            }
            Err(mensagem) => {
                log::error!("❌ Erro carregando estatísticas: {}", mensagem);
            }
        }
    });
}

/// Refaz o fetch da lista após uma ação e mostra o aviso
async fn recarregar_licencas(state: &AppState, aviso: &str) {
    let api = ApiClient::new();
    match api.listar_licencas().await {
        Ok(lista) => {
            *state.licencas.borrow_mut() = lista;
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
