use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::ViewPort;

/// [`ViewPort`] over `document.getElementById`
#[derive(Clone, Copy, Default)]
pub struct DomViewPort;

impl DomViewPort {
    fn element(&self, target: &str) -> Option<Element> {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(target));

        if element.is_none() {
            log::warn!("Element {} not found", target);
        }
        element
    }
}

impl ViewPort for DomViewPort {
    fn set_text(&self, target: &str, text: &str) -> bool {
        self.element(target)
            .map(|el| el.set_text_content(Some(text)))
            .is_some()
    }

    fn set_class(&self, target: &str, class: &str) -> bool {
        self.element(target)
            .map(|el| el.set_class_name(class))
            .is_some()
    }

    fn set_style(&self, target: &str, property: &str, value: &str) -> bool {
        let Some(el) = self.element(target) else {
            return false;
        };
        match el.dyn_into::<HtmlElement>() {
            Ok(html) => html.style().set_property(property, value).is_ok(),
            Err(_) => false,
        }
    }

    fn set_title(&self, target: &str, title: &str) -> bool {
        self.element(target)
            .map(|el| el.set_attribute("title", title).is_ok())
            .unwrap_or(false)
    }

    fn set_html(&self, target: &str, html: &str) -> bool {
        self.element(target)
            .map(|el| el.set_inner_html(html))
            .is_some()
    }
}
