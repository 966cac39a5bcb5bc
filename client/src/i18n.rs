//! Interface translation: string tables and the `data-i18n` rewrite pass.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page starts by loading the table for the stored language and rewriting
//! every element marked with `data-i18n="key"`. Freshly rendered fragments are
//! passed through the same rewrite so their placeholders pick up the active
//! language too.
//!
//! ERROR HANDLING
//! ==============
//! A table that fails to load falls back to English. If English fails too the
//! previous table stays active. Missing keys render as the key itself.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use std::collections::HashMap;
use std::future::Future;

use records::Language;

use crate::state::preferences::PreferenceRegistry;
use crate::storage::KeyValueStore;

pub const I18N_ATTRIBUTE: &str = "data-i18n";

/// Key→string table for one language.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Translations(HashMap<String, String>);

impl Translations {
    #[must_use]
    pub fn new(table: HashMap<String, String>) -> Self {
        Self(table)
    }

    /// Translation for `key`, or `key` itself when missing or empty.
    #[must_use]
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.0.get(key).map(String::as_str).filter(|text| !text.is_empty()).unwrap_or(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, String>> for Translations {
    fn from(table: HashMap<String, String>) -> Self {
        Self::new(table)
    }
}

/// Which property of an `<input>` a translation replaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputTarget {
    Value,
    Placeholder,
    Text,
}

/// Submit buttons take the translation as their value, inputs with a
/// placeholder take it as the placeholder, anything else as text content.
#[must_use]
pub fn input_target(input_type: &str, has_placeholder: bool) -> InputTarget {
    if input_type.eq_ignore_ascii_case("submit") {
        InputTarget::Value
    } else if has_placeholder {
        InputTarget::Placeholder
    } else {
        InputTarget::Text
    }
}

/// Active language plus its loaded table.
#[derive(Clone, Debug, Default)]
pub struct Localizer {
    language: Language,
    translations: Translations,
}

impl Localizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    #[must_use]
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.translations.t(key)
    }

    /// Load the stored language (English if none) over HTTP.
    pub async fn init<S: KeyValueStore>(registry: &PreferenceRegistry<S>) -> Self {
        let mut localizer = Self::new();
        localizer.load(registry.language(), registry).await;
        localizer
    }

    /// Fetch and activate `language`, persisting it on success. Returns the
    /// language that ended up active.
    pub async fn load<S: KeyValueStore>(&mut self, language: Language, registry: &PreferenceRegistry<S>) -> Language {
        self.load_with(language, registry, fetch_table).await
    }

    /// [`Self::load`] with an injectable table source.
    pub async fn load_with<S, F, Fut>(&mut self, language: Language, registry: &PreferenceRegistry<S>, fetch: F) -> Language
    where
        S: KeyValueStore,
        F: Fn(Language) -> Fut,
        Fut: Future<Output = Option<HashMap<String, String>>>,
    {
        let mut wanted = language;
        loop {
            if let Some(table) = fetch(wanted).await {
                self.language = wanted;
                self.translations = Translations::new(table);
                if let Err(err) = registry.set_language(wanted) {
                    log::warn!("could not persist language {wanted}: {err}");
                }
                return wanted;
            }
            log::warn!("error loading language {wanted}");
            if wanted == Language::En {
                return self.language;
            }
            wanted = Language::En;
        }
    }

    /// Rewrite every `data-i18n` element below `root`.
    #[cfg(feature = "hydrate")]
    pub fn apply_within(&self, root: &web_sys::Element) {
        use wasm_bindgen::JsCast;

        let Ok(nodes) = root.query_selector_all(&format!("[{I18N_ATTRIBUTE}]")) else {
            return;
        };
        for index in 0..nodes.length() {
            if let Some(element) = nodes.get(index).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) {
                self.apply_element(&element);
            }
        }
    }

    #[cfg(feature = "hydrate")]
    fn apply_element(&self, element: &web_sys::Element) {
        use wasm_bindgen::JsCast;

        let Some(key) = element.get_attribute(I18N_ATTRIBUTE) else {
            return;
        };
        let text = self.t(&key);
        let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() else {
            element.set_text_content(Some(text));
            return;
        };
        match input_target(&input.type_(), !input.placeholder().is_empty()) {
            InputTarget::Value => input.set_value(text),
            InputTarget::Placeholder => input.set_placeholder(text),
            InputTarget::Text => element.set_text_content(Some(text)),
        }
    }

    /// Rewrite the whole document, its title, and the meta description.
    #[cfg(feature = "hydrate")]
    pub fn apply_to_document(&self) {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(root) = document.document_element() {
            self.apply_within(&root);
        }
        document.set_title(self.t("site_title"));
        if let Some(meta) = document
            .query_selector("meta[name=\"description\"]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
        {
            meta.set_content(self.t("hero_subtitle"));
        }
    }
}

async fn fetch_table(language: Language) -> Option<HashMap<String, String>> {
    crate::net::api::fetch_json(&crate::net::api::language_file_url(language)).await
}
