// ============================================================================
// ELEMENT BUILDER - Builder pattern para montar elementos
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, create_element, set_attribute, set_class_name, set_text_content};

pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    pub fn new(tag: &str) -> Result<Self, JsValue> {
        Ok(Self {
            element: create_element(tag)?,
        })
    }

    /// Define o class name (substitui todas as classes)
    pub fn class(self, class: &str) -> Self {
        set_class_name(&self.element, class);
        self
    }

    pub fn id(self, id: &str) -> Result<Self, JsValue> {
        set_attribute(&self.element, "id", id)?;
        Ok(self)
    }

    pub fn text(self, text: &str) -> Self {
        set_text_content(&self.element, text);
        self
    }

    pub fn html(self, html: &str) -> Self {
        self.element.set_inner_html(html);
        self
    }

    pub fn child(self, child: Element) -> Result<Self, JsValue> {
        append_child(&self.element, &child)?;
        Ok(self)
    }

    pub fn attr(self, name: &str, value: &str) -> Result<Self, JsValue> {
        set_attribute(&self.element, name, value)?;
        Ok(self)
    }

    pub fn build(self) -> Element {
        self.element
    }
}

/// Atalho para um grupo label + input de formulário
pub fn form_group(
    id: &str,
    label: &str,
    tipo: &str,
    placeholder: &str,
) -> Result<Element, JsValue> {
    let grupo = ElementBuilder::new("div")?.class("form-group").build();

    let rotulo = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label)
        .build();

    let input = ElementBuilder::new("input")?
        .id(id)?
        .attr("type", tipo)?
        .attr("placeholder", placeholder)?
        .build();

    append_child(&grupo, &rotulo)?;
    append_child(&grupo, &input)?;
    Ok(grupo)
}
