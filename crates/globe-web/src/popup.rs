use crate::constants::{COUNTRY_NAME_IDS, FLAG_ID, POPULATION_IDS, POPUP_ID};
use crate::dom;
use globe_core::PopupState;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The hover card and its text fields. Each field exists twice in the page
/// and both copies receive the same text.
pub struct PopupElements {
    root: web::HtmlElement,
    names: Vec<web::Element>,
    populations: Vec<web::Element>,
    flag: Option<web::HtmlImageElement>,
    shown: Option<PopupState>,
}

impl PopupElements {
    pub fn find(document: &web::Document) -> anyhow::Result<Self> {
        let root = dom::by_id(document, POPUP_ID)?
            .dyn_into::<web::HtmlElement>()
            .map_err(|_| anyhow::anyhow!("#{} is not an HTML element", POPUP_ID))?;
        let names = COUNTRY_NAME_IDS
            .iter()
            .map(|id| dom::by_id(document, id))
            .collect::<anyhow::Result<Vec<_>>>()?;
        let populations = POPULATION_IDS
            .iter()
            .map(|id| dom::by_id(document, id))
            .collect::<anyhow::Result<Vec<_>>>()?;
        let flag = document
            .get_element_by_id(FLAG_ID)
            .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok());
        let popup = Self {
            root,
            names,
            populations,
            flag,
            shown: None,
        };
        popup.set_display(false);
        popup.set_flag(None);
        Ok(popup)
    }

    /// Without a URL the image loses its `src` and is hidden, so no request
    /// goes out for an empty source.
    fn set_flag(&self, url: Option<&str>) {
        let Some(img) = &self.flag else {
            return;
        };
        match url {
            Some(url) => {
                img.set_src(url);
                _ = img.style().remove_property("display");
            }
            None => {
                _ = img.remove_attribute("src");
                _ = img.style().set_property("display", "none");
            }
        }
    }

    fn set_display(&self, visible: bool) {
        let value = if visible { "block" } else { "none" };
        _ = self.root.style().set_property("display", value);
    }

    /// Push `state` into the DOM, touching only what changed since last call.
    /// Text fields keep their last content while the card is hidden.
    pub fn apply(&mut self, state: &PopupState) {
        if self.shown.as_ref() == Some(state) {
            return;
        }
        let prev = self.shown.take().unwrap_or_default();
        if prev.screen_x != state.screen_x || prev.screen_y != state.screen_y {
            let transform = format!("translate({}px, {}px)", state.screen_x, state.screen_y);
            _ = self.root.style().set_property("transform", &transform);
        }
        if prev.visible != state.visible {
            self.set_display(state.visible);
        }
        if let Some(content) = state.content.as_ref() {
            if prev.content.as_ref() != Some(content) {
                for el in &self.names {
                    el.set_text_content(Some(&content.country));
                }
                for el in &self.populations {
                    el.set_text_content(Some(&content.population_display));
                }
                self.set_flag(content.flag_url.as_deref());
            }
        }
        self.shown = Some(state.clone());
    }
}
