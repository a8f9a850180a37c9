// ============================================================================
// ELEMENT HELPERS - Funções básicas sobre web_sys
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

pub fn set_class_name(element: &Element, class: &str) {
    element.set_class_name(class);
}

pub fn add_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().add_1(class)
}

pub fn remove_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().remove_1(class)
}

pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

pub fn remove_attribute(element: &Element, name: &str) -> Result<(), JsValue> {
    element.remove_attribute(name)
}

/// Valor atual de um <input> identificado por id
pub fn valor_input(id: &str) -> Option<String> {
    get_element_by_id(id)?
        .dyn_into::<HtmlInputElement>()
        .ok()
        .map(|input| input.value())
}

/// Valor selecionado de um <select> identificado por id
pub fn valor_select(id: &str) -> Option<String> {
    get_element_by_id(id)?
        .dyn_into::<HtmlSelectElement>()
        .ok()
        .map(|select| select.value())
}

/// Limpa o valor de um <input>
pub fn limpar_input(id: &str) {
    if let Some(element) = get_element_by_id(id) {
        if let Ok(input) = element.dyn_into::<HtmlInputElement>() {
            input.set_value("");
        }
    }
}

/// Checkbox marcado?
pub fn checkbox_marcado(id: &str) -> bool {
    get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.checked())
        .unwrap_or(false)
}

/// Habilita/desabilita um botão ou campo
pub fn set_desabilitado(element: &Element, desabilitado: bool) {
    if desabilitado {
        let _ = element.set_attribute("disabled", "disabled");
    } else {
        let _ = element.remove_attribute("disabled");
    }
}

/// Foca um elemento, se for focável
pub fn focar(element: &Element) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.focus();
    }
}
