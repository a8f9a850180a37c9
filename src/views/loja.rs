// ============================================================================
// LOJA - Página pública de vendas
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::config::WHATSAPP_SUPORTE;
use crate::dom::{append_child, get_element_by_id, on_click, set_text_content, ElementBuilder};
use crate::models::{Plano, PLANOS};
use crate::router::{navegar_para, Rota};
use crate::services::ApiClient;
use crate::state::AppState;
use crate::utils::formatar_moeda;

pub fn render_loja(state: &AppState) -> Result<Element, JsValue> {
    let pagina = ElementBuilder::new("div")?.class("loja").build();

    append_child(&pagina, &render_header(state)?)?;
    append_child(&pagina, &render_hero()?)?;
    append_child(&pagina, &render_planos()?)?;
    append_child(&pagina, &render_rodape()?)?;

    // Badge de versão preenchido depois que a API responder
    carregar_versao_atual();

    Ok(pagina)
}

fn render_header(state: &AppState) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("header")?.class("loja-header").build();

    let logo = ElementBuilder::new("div")?
        .class("loja-logo")
        .text("🤖 CrashBot")
        .build();
    append_child(&header, &logo)?;

    let nav = ElementBuilder::new("nav")?.class("loja-nav").build();

    let link_planos = ElementBuilder::new("a")?
        .attr("href", "#planos")?
        .class("loja-nav-link")
        .text("Planos")
        .build();
    append_child(&nav, &link_planos)?;

    // Quem já tem sessão vai direto ao painel
    let texto_entrar = if state.auth.esta_logado() {
        "Meu painel"
    } else {
        "Entrar"
    };
    let btn_entrar = ElementBuilder::new("button")?
        .class("btn btn-secundario")
        .text(texto_entrar)
        .build();
    {
        let logado = state.auth.esta_logado();
        on_click(&btn_entrar, move |_| {
            if logado {
                crate::router::navegar(&Rota::Painel);
            } else {
                crate::router::navegar(&Rota::Login);
            }
        })?;
    }
    append_child(&nav, &btn_entrar)?;
    append_child(&header, &nav)?;

    Ok(header)
}

fn render_hero() -> Result<Element, JsValue> {
    let hero = ElementBuilder::new("section")?.class("hero").build();

    let titulo = ElementBuilder::new("h1")?
        .text("Automatize suas jogadas no Crash")
        .build();
    let subtitulo = ElementBuilder::new("p")?
        .class("hero-subtitulo")
        .text("Licença ativada na hora após o pagamento. Suporte em português e atualizações automáticas.")
        .build();

    let badge_versao = ElementBuilder::new("span")?
        .id("badge-versao")?
        .class("badge-versao oculto")
        .build();

    let cta = ElementBuilder::new("button")?
        .class("btn btn-primario btn-grande")
        .text("Comprar agora")
        .build();
    on_click(&cta, move |_| {
        navegar_para("#/checkout");
    })?;

    append_child(&hero, &titulo)?;
    append_child(&hero, &subtitulo)?;
    append_child(&hero, &badge_versao)?;
    append_child(&hero, &cta)?;
    Ok(hero)
}

fn render_planos() -> Result<Element, JsValue> {
    let secao = ElementBuilder::new("section")?
        .id("planos")?
        .class("planos")
        .build();

    let titulo = ElementBuilder::new("h2")?.text("Escolha seu plano").build();
    append_child(&secao, &titulo)?;

    let grid = ElementBuilder::new("div")?.class("planos-grid").build();
    for plano in PLANOS {
        append_child(&grid, &render_card_plano(plano)?)?;
    }
    append_child(&secao, &grid)?;

    Ok(secao)
}

fn render_card_plano(plano: &'static Plano) -> Result<Element, JsValue> {
    let destaque = plano.id == "mensal";
    let classe = if destaque {
        "plano-card plano-card-destaque"
    } else {
        "plano-card"
    };
    let card = ElementBuilder::new("div")?.class(classe).build();

    if destaque {
        let selo = ElementBuilder::new("div")?
            .class("plano-selo")
            .text("Mais vendido")
            .build();
        append_child(&card, &selo)?;
    }

    let nome = ElementBuilder::new("h3")?.text(plano.nome).build();
    let descricao = ElementBuilder::new("p")?
        .class("plano-descricao")
        .text(plano.descricao)
        .build();

    let preco_antigo = ElementBuilder::new("div")?
        .class("plano-preco-antigo")
        .text(&formatar_moeda(plano.preco_antigo))
        .build();
    let preco = ElementBuilder::new("div")?
        .class("plano-preco")
        .text(&formatar_moeda(plano.preco))
        .build();
    let duracao = ElementBuilder::new("div")?
        .class("plano-duracao")
        .text(&format!("por {} dias de acesso", plano.dias))
        .build();

    let lista = ElementBuilder::new("ul")?.class("plano-destaques").build();
    for destaque in plano.destaques {
        let item = ElementBuilder::new("li")?.text(destaque).build();
        append_child(&lista, &item)?;
    }

    let btn = ElementBuilder::new("button")?
        .class("btn btn-primario")
        .text("Assinar")
        .build();
    {
        let id_plano = plano.id;
        on_click(&btn, move |_| {
            navegar_para(&format!("#/checkout?plano={}", id_plano));
        })?;
    }

    append_child(&card, &nome)?;
    append_child(&card, &descricao)?;
    append_child(&card, &preco_antigo)?;
    append_child(&card, &preco)?;
    append_child(&card, &duracao)?;
    append_child(&card, &lista)?;
    append_child(&card, &btn)?;
    Ok(card)
}

fn render_rodape() -> Result<Element, JsValue> {
    let rodape = ElementBuilder::new("footer")?.class("loja-rodape").build();

    let suporte = ElementBuilder::new("a")?
        .attr(
            "href",
            &format!("https://wa.me/{}", WHATSAPP_SUPORTE),
        )?
        .attr("target", "_blank")?
        .attr("rel", "noopener noreferrer")?
        .class("link-suporte")
        .text("💬 Suporte via WhatsApp")
        .build();
    append_child(&rodape, &suporte)?;

    let aviso = ElementBuilder::new("p")?
        .class("rodape-aviso")
        .text("CrashBot © 2026 — jogue com responsabilidade.")
        .build();
    append_child(&rodape, &aviso)?;

    Ok(rodape)
}

/// Busca a versão atual publicada e preenche o badge do hero.
/// Falha silenciosa: a loja funciona igual sem a informação.
fn carregar_versao_atual() {
    spawn_local(async move {
        let api = ApiClient::new();
        match api.versao_atual().await {
            Ok(versao) => {
                if let Some(badge) = get_element_by_id("badge-versao") {
                    set_text_content(&badge, &format!("Versão atual: v{}", versao.versao));
                    let _ = crate::dom::remove_class(&badge, "oculto");
                }
            }
            Err(e) => {
                log::warn!("⚠️ Não foi possível carregar a versão atual: {}", e);
            }
        }
    });
}
