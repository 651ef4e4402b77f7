//! Page configuration injected by the server.
//!
//! SYSTEM CONTEXT
//! ==============
//! The SSR host hands a `PageConfig` to `shell`, which renders it into a
//! JSON `<script>` element and renders the app with it. The browser reads
//! the element back before hydrating, so both sides render from the same
//! value. Everything has a default so a partial or missing element still
//! yields a usable page.

#[cfg(test)]
#[path = "page_config_test.rs"]
mod page_config_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::submit_timer::AUTO_SUBMIT_DELAY_MS;
use crate::state::template_selection::TemplateOption;

/// ID of the `<script type="application/json">` element holding the config.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

pub const DEFAULT_SUGGESTION_MIN_LENGTH: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("page config element #{0} not found")]
    Missing(&'static str),
    #[error("invalid page config: {0}")]
    Invalid(String),
}

/// Template choices for both checkbox groups.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateChoices {
    pub global: Vec<TemplateOption>,
    pub user: Vec<TemplateOption>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Operator edit endpoint (GET load, POST save).
    pub operators_edit_url: String,
    pub operators_delete_url: String,
    /// JSON list of all operators.
    pub operator_list_url: String,
    pub suggestions_url: String,
    /// Action of the keyword search form.
    pub search_url: String,
    pub csrf_token: String,
    pub query_id: String,
    pub user_id: String,
    pub order_by_field: String,
    /// Keywords already present when the page was rendered.
    pub keywords: String,
    pub templates: TemplateChoices,
    pub auto_submit_delay_ms: u32,
    pub suggestion_min_length: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            operators_edit_url: "/explore/keyword/admin/search-operators/edit".to_owned(),
            operators_delete_url: "/explore/keyword/admin/search-operators/delete".to_owned(),
            operator_list_url: "/explore/keyword/rest/search_operators/".to_owned(),
            suggestions_url: "/explore/keyword/suggestions".to_owned(),
            search_url: "/explore/keyword/".to_owned(),
            csrf_token: String::new(),
            query_id: String::new(),
            user_id: String::new(),
            order_by_field: String::new(),
            keywords: String::new(),
            templates: TemplateChoices::default(),
            auto_submit_delay_ms: AUTO_SUBMIT_DELAY_MS,
            suggestion_min_length: DEFAULT_SUGGESTION_MIN_LENGTH,
        }
    }
}

impl PageConfig {
    /// Parse the config element's JSON text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when the text is not a JSON object of
    /// the expected shape.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(raw).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        // Defaulted structs also deserialize from sequences; only objects count.
        if !value.is_object() {
            return Err(ConfigError::Invalid("expected a JSON object".to_owned()));
        }
        serde_json::from_value(value).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Text of the config element rendered into the page shell.
    ///
    /// `<` is escaped so the JSON cannot close the `<script>` early.
    pub fn to_script_json(&self) -> String {
        match serde_json::to_string(self) {
            Ok(json) => json.replace('<', "\\u003c"),
            Err(e) => {
                log::warn!("page config serialization failed: {e}");
                "{}".to_owned()
            }
        }
    }

    /// Hidden search-form fields rendered by the server.
    pub fn hidden_search_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("query_id", self.query_id.clone()),
            ("user_id", self.user_id.clone()),
            ("order_by_field", self.order_by_field.clone()),
        ]
    }
}

/// Read the config element from the document.
///
/// # Errors
///
/// Returns `ConfigError::Missing` when the element is absent (or outside a
/// browser) and `ConfigError::Invalid` when its JSON does not parse.
pub fn read_from_document() -> Result<PageConfig, ConfigError> {
    #[cfg(feature = "hydrate")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
            .ok_or(ConfigError::Missing(CONFIG_ELEMENT_ID))?;
        PageConfig::from_json(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ConfigError::Missing(CONFIG_ELEMENT_ID))
    }
}

/// Load the page config, falling back to defaults.
pub fn load() -> PageConfig {
    match read_from_document() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{e}; using default page config");
            PageConfig::default()
        }
    }
}
