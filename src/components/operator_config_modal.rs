//! Create/edit dialog for a search operator.
//!
//! The dialog is driven by `OperatorModalState` from context. Its form body
//! is either inputs bound to the state or, after the server answered with a
//! form fragment, that fragment rendered as-is and serialized from the DOM.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::types::FormOutcome;
use crate::state::operator_modal::{FormBody, ModalPhase, OperatorModalState};
use crate::util::page_config::PageConfig;

/// Open the dialog for a row (edit) or for nothing (create), loading the
/// record in the background when editing.
pub fn open_operator_modal(modal: RwSignal<OperatorModalState>, edit_url: String, row_id: Option<String>) {
    let Some(id) = modal.try_update(|m| m.open_for(row_id.as_deref())).flatten() else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::load_operator(&edit_url, &id).await;
        if let FormOutcome::Failed(e) = &outcome {
            log::warn!("loading operator {id} failed: {e}");
        }
        modal.try_update(|m| m.apply_loaded(&id, outcome));
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (edit_url, id);
    }
}

#[component]
pub fn OperatorConfigModal() -> impl IntoView {
    let modal = expect_context::<RwSignal<OperatorModalState>>();
    let config = expect_context::<StoredValue<PageConfig>>();
    let form_ref = NodeRef::<leptos::html::Form>::new();

    let save = move || {
        let Some(ticket) = modal.try_update(OperatorModalState::begin_save).flatten() else {
            return;
        };
        let (edit_url, csrf) = config.with_value(|c| (c.operators_edit_url.clone(), c.csrf_token.clone()));
        let pairs = match modal.with_untracked(|m| m.body.clone()) {
            FormBody::Fields => modal.with_untracked(|m| m.form.to_pairs(&csrf)),
            FormBody::Markup(_) => {
                #[cfg(feature = "hydrate")]
                let from_dom = form_ref
                    .get_untracked()
                    .map(|form| crate::util::browser::serialize_form(&form))
                    .unwrap_or_default();
                #[cfg(not(feature = "hydrate"))]
                let from_dom = Vec::new();
                crate::net::api::with_csrf(from_dom, &csrf)
            }
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::save_operator(&edit_url, &pairs).await;
            if let FormOutcome::Failed(e) = &outcome {
                log::warn!("saving operator failed: {e}");
            }
            if modal.try_update(|m| m.apply_saved(ticket, outcome)).unwrap_or(false) {
                crate::util::browser::reload_page();
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (edit_url, pairs, ticket);
        }
    };

    // Server markup carries its own field groups; flag them in place.
    Effect::new(move || {
        let flagged = modal.with(OperatorModalState::flags_markup_groups);
        #[cfg(feature = "hydrate")]
        if let Some(form) = form_ref.get() {
            crate::util::browser::flag_form_groups(&form, flagged);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = flagged;
    });

    let on_close = move || modal.update(OperatorModalState::close);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close();
        }
    };

    let body = move || match modal.with(|m| m.body.clone()) {
        FormBody::Markup(html) => view! { <div class="operator-form__markup" inner_html=html></div> }.into_any(),
        FormBody::Fields => view! { <OperatorFields modal=modal/> }.into_any(),
    };

    view! {
        <Show when=move || modal.with(|m| m.open)>
            <div class="dialog-backdrop" on:click=move |_| on_close()>
                <div
                    id="operator-config-modal"
                    class="dialog dialog--operator"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                    tabindex="0"
                >
                    <h2>
                        <span id="operator-modal-action">{move || modal.with(|m| m.title())}</span>
                        " Search Operator"
                    </h2>
                    <Show when=move || modal.with(OperatorModalState::is_loading)>
                        <p class="dialog__loading">"Loading…"</p>
                    </Show>
                    <form
                        class="operator-form"
                        node_ref=form_ref
                        on:submit=move |ev| {
                            ev.prevent_default();
                            save();
                        }
                    >
                        {body}
                    </form>
                    <p id="operator-modal-form-error" class="dialog__error">
                        {move || modal.with(|m| m.error.clone().unwrap_or_default())}
                    </p>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| on_close()>
                            "Cancel"
                        </button>
                        <button
                            id="btn-save-operator"
                            class=move || modal.with(OperatorModalState::save_button_class)
                            disabled=move || modal.with(|m| m.save_disabled || m.phase != ModalPhase::Ready)
                            on:click=move |_| save()
                        >
                            "Save"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Inputs bound to the dialog state.
#[component]
fn OperatorFields(modal: RwSignal<OperatorModalState>) -> impl IntoView {
    let group_class = move || modal.with(OperatorModalState::form_group_class);
    let loading = move || modal.with(OperatorModalState::is_loading);

    view! {
        <input
            type="hidden"
            id="id_document_id"
            name="document_id"
            prop:value=move || modal.with(|m| m.form.document_id.clone())
        />
        <div class=group_class>
            <label for="id_name">"Name"</label>
            <input
                id="id_name"
                name="name"
                class="form-control"
                type="text"
                placeholder="Operator name"
                disabled=loading
                prop:value=move || modal.with(|m| m.form.name.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    modal.update(|m| m.form.name = value);
                }
            />
        </div>
        <div class=group_class>
            <label for="id_xpath_list">"XPath list"</label>
            <textarea
                id="id_xpath_list"
                name="xpath_list"
                class="form-control"
                placeholder="/path/to/xpath"
                disabled=loading
                prop:value=move || modal.with(|m| m.form.xpath_list.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    modal.update(|m| m.form.xpath_list = value);
                }
            ></textarea>
            <p class="help-block">"Enter one xpath per line."</p>
        </div>
    }
}
