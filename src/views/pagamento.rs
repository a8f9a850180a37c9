// ============================================================================
// RETORNO DO PAGAMENTO - Páginas estáticas de sucesso/pendente/falha
// ============================================================================
// O processador de pagamento devolve o cliente para cá via back_urls. Tudo
// que a página mostra vem da rota e dos query params.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::router::{navegar, navegar_para, Rota, StatusPagamento};

pub fn render_resultado(
    status: StatusPagamento,
    collection_id: Option<&str>,
    external_reference: Option<&str>,
) -> Result<Element, JsValue> {
    let (icone, titulo, mensagem, classe) = match status {
        StatusPagamento::Sucesso => (
            "🎉",
            "Pagamento aprovado!",
            "Você receberá a licença e os dados de acesso por e-mail em instantes.",
            "resultado-sucesso",
        ),
        StatusPagamento::Pendente => (
            "⏳",
            "Pagamento pendente",
            "Estamos aguardando a confirmação. Assim que aprovar, a licença chega por e-mail.",
            "resultado-pendente",
        ),
        StatusPagamento::Falha => (
            "❌",
            "Pagamento recusado",
            "O pagamento não foi aprovado. Por favor, tente novamente.",
            "resultado-falha",
        ),
    };

    let pagina = ElementBuilder::new("div")?.class("resultado-pagamento").build();
    let card = ElementBuilder::new("div")?
        .class(&format!("resultado-card {}", classe))
        .build();

    let icone_el = ElementBuilder::new("div")?
        .class("resultado-icone")
        .text(icone)
        .build();
    let titulo_el = ElementBuilder::new("h1")?.text(titulo).build();
    let mensagem_el = ElementBuilder::new("p")?
        .class("resultado-mensagem")
        .text(mensagem)
        .build();

    append_child(&card, &icone_el)?;
    append_child(&card, &titulo_el)?;
    append_child(&card, &mensagem_el)?;

    // Referências do processador, quando vierem na URL
    if collection_id.is_some() || external_reference.is_some() {
        let detalhes = ElementBuilder::new("div")?.class("resultado-detalhes").build();
        if let Some(id) = collection_id {
            let linha = ElementBuilder::new("p")?
                .text(&format!("Pagamento: {}", id))
                .build();
            append_child(&detalhes, &linha)?;
        }
        if let Some(referencia) = external_reference {
            let linha = ElementBuilder::new("p")?
                .text(&format!("Referência: {}", referencia))
                .build();
            append_child(&detalhes, &linha)?;
        }
        append_child(&card, &detalhes)?;
    }

    let acoes = ElementBuilder::new("div")?.class("resultado-acoes").build();

    if matches!(status, StatusPagamento::Sucesso) {
        let btn_painel = ElementBuilder::new("button")?
            .class("btn btn-primario")
            .text("Acessar meu painel")
            .build();
        on_click(&btn_painel, move |_| navegar(&Rota::Login))?;
        append_child(&acoes, &btn_painel)?;
    }

    if matches!(status, StatusPagamento::Falha) {
        let btn_retry = ElementBuilder::new("button")?
            .class("btn btn-primario")
            .text("Tentar novamente")
            .build();
        on_click(&btn_retry, move |_| navegar_para("#/checkout"))?;
        append_child(&acoes, &btn_retry)?;
    }

    let btn_loja = ElementBuilder::new("button")?
        .class("btn btn-secundario")
        .text("Voltar à loja")
        .build();
    on_click(&btn_loja, move |_| navegar_para("#/"))?;
    append_child(&acoes, &btn_loja)?;

    append_child(&card, &acoes)?;
    append_child(&pagina, &card)?;
    Ok(pagina)
}
