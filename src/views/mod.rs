// ============================================================================
// VIEWS - Funções de renderização (sem lógica de negócio)
// ============================================================================

pub mod admin;
pub mod app;
pub mod checkout;
pub mod login;
pub mod loja;
pub mod pagamento;
pub mod painel;

pub use app::render_app;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{add_class, get_element_by_id, remove_class, set_text_content, ElementBuilder};

/// Spinner de carregamento padrão
pub fn render_carregando(texto: &str) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("carregando").build();
    let spinner = ElementBuilder::new("div")?.class("spinner").build();
    let rotulo = ElementBuilder::new("p")?.text(texto).build();
    crate::dom::append_child(&container, &spinner)?;
    crate::dom::append_child(&container, &rotulo)?;
    Ok(container)
}

/// Estado vazio com ícone e mensagem
pub fn render_vazio(icone: &str, titulo: &str, subtitulo: &str) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("estado-vazio").build();
    let icone_el = ElementBuilder::new("div")?
        .class("estado-vazio-icone")
        .text(icone)
        .build();
    let titulo_el = ElementBuilder::new("div")?
        .class("estado-vazio-titulo")
        .text(titulo)
        .build();
    let subtitulo_el = ElementBuilder::new("div")?
        .class("estado-vazio-subtitulo")
        .text(subtitulo)
        .build();
    crate::dom::append_child(&container, &icone_el)?;
    crate::dom::append_child(&container, &titulo_el)?;
    crate::dom::append_child(&container, &subtitulo_el)?;
    Ok(container)
}

/// Banner de erro inline
pub fn render_erro(mensagem: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("banner-erro")
        .text(mensagem)
        .build())
}

/// Mostra um texto num elemento por id (banners de erro/aviso dos forms)
pub fn mostrar_em(id: &str, texto: &str) {
    if let Some(el) = get_element_by_id(id) {
        set_text_content(&el, texto);
        let _ = remove_class(&el, "oculto");
    }
}

pub fn esconder(id: &str) {
    if let Some(el) = get_element_by_id(id) {
        let _ = add_class(&el, "oculto");
    }
}

/// Aviso que some sozinho depois de alguns segundos
pub fn aviso_temporario(id: &str, texto: &str) {
    mostrar_em(id, texto);
    let id = id.to_string();
    Timeout::new(4_000, move || esconder(&id)).forget();
}
