//! Delete confirmation dialog for a search operator.

use leptos::prelude::*;

use crate::state::operator_delete::DeleteModalState;
use crate::util::page_config::PageConfig;

/// Confirmation dialog. Confirming posts the delete and reloads the page
/// whether or not it succeeded; the server reports failures through its
/// flash messages on the reloaded page.
#[component]
pub fn OperatorDeleteModal() -> impl IntoView {
    let state = expect_context::<RwSignal<DeleteModalState>>();
    let config = expect_context::<StoredValue<PageConfig>>();

    let on_close = move || state.update(DeleteModalState::close);

    let on_confirm = move |_| {
        let Some(id) = state.try_update(DeleteModalState::confirm).flatten() else {
            return;
        };
        let (delete_url, csrf) = config.with_value(|c| (c.operators_delete_url.clone(), c.csrf_token.clone()));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::delete_operator(&delete_url, &csrf, &id).await {
                log::warn!("deleting operator {id} failed: {e}");
            }
            crate::util::browser::reload_page();
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delete_url, csrf, id);
        }
    };

    view! {
        <Show when=move || state.with(|s| s.open)>
            <div class="dialog-backdrop" on:click=move |_| on_close()>
                <div id="operator-delete-modal" class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Delete Search Operator"</h2>
                    <p>
                        "Are you sure you want to delete "
                        <strong class="operator-name">{move || state.with(|s| s.target_name().to_owned())}</strong>
                        "?"
                    </p>
                    <input
                        type="hidden"
                        id="operator-id"
                        prop:value=move || state.with(|s| s.target.as_ref().map(|t| t.id.clone()).unwrap_or_default())
                    />
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| on_close()>
                            "Cancel"
                        </button>
                        <button
                            id="btn-delete-operator"
                            class="btn btn--danger"
                            disabled=move || state.with(|s| s.submitting)
                            on:click=on_confirm
                        >
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
