//! Browser glue: page reload, native form submission, and form serialization.
//!
//! Hydrate-only behavior sits behind `cfg` blocks so pages and components
//! can call these helpers unconditionally.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

#[cfg(feature = "hydrate")]
use crate::net::api::FormPairs;

/// Reload the current page.
pub fn reload_page() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                log::warn!("page reload failed: {e:?}");
            }
        }
    }
}

/// Submit `form` natively, bypassing its `submit` event handlers.
#[cfg(feature = "hydrate")]
pub fn submit_form(form: &web_sys::HtmlFormElement) {
    if let Err(e) = form.submit() {
        log::warn!("form submit failed: {e:?}");
    }
}

/// Whether an `<input>` takes part in form serialization.
#[cfg(any(test, feature = "hydrate"))]
fn input_is_successful(kind: &str, name: &str, disabled: bool, checked: bool) -> bool {
    if name.is_empty() || disabled {
        return false;
    }
    match kind {
        "checkbox" | "radio" => checked,
        "submit" | "button" | "reset" | "image" | "file" => false,
        _ => true,
    }
}

/// Add or remove the error class on every `.form-group` inside `form`.
#[cfg(feature = "hydrate")]
pub fn flag_form_groups(form: &web_sys::HtmlFormElement, flagged: bool) {
    use wasm_bindgen::JsCast;

    use crate::state::operator_modal::ERROR_GROUP_CLASS;

    let groups = match form.query_selector_all(".form-group") {
        Ok(groups) => groups,
        Err(e) => {
            log::warn!("form group lookup failed: {e:?}");
            return;
        }
    };
    for i in 0..groups.length() {
        let Some(group) = groups.item(i).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) else {
            continue;
        };
        if let Err(e) = group.class_list().toggle_with_force(ERROR_GROUP_CLASS, flagged) {
            log::warn!("toggling form group class failed: {e:?}");
        }
    }
}

/// Collect `name=value` pairs from `form` the way a browser would submit it.
#[cfg(feature = "hydrate")]
pub fn serialize_form(form: &web_sys::HtmlFormElement) -> FormPairs {
    use wasm_bindgen::JsCast;

    let elements = form.elements();
    let mut pairs = Vec::new();
    for i in 0..elements.length() {
        let Some(el) = elements.item(i) else {
            continue;
        };
        if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
            let name = input.name();
            if input_is_successful(&input.type_(), &name, input.disabled(), input.checked()) {
                pairs.push((name, input.value()));
            }
        } else if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
            let name = area.name();
            if !name.is_empty() && !area.disabled() {
                pairs.push((name, area.value()));
            }
        }
    }
    pairs
}
