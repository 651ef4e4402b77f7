//! Admin page listing search operators with create, edit and delete dialogs.

use leptos::prelude::*;

use crate::components::operator_config_modal::{OperatorConfigModal, open_operator_modal};
use crate::components::operator_delete_modal::OperatorDeleteModal;
use crate::components::operator_table::OperatorTable;
use crate::state::operator_delete::DeleteModalState;
use crate::state::operator_modal::OperatorModalState;
use crate::util::page_config::PageConfig;

#[component]
pub fn SearchOperatorsPage() -> impl IntoView {
    let config = expect_context::<StoredValue<PageConfig>>();

    let modal = RwSignal::new(OperatorModalState::default());
    let delete = RwSignal::new(DeleteModalState::default());
    provide_context(modal);
    provide_context(delete);

    // Operator list, fetched on mount.
    let operators = LocalResource::new(move || {
        let url = config.with_value(|c| c.operator_list_url.clone());
        async move { crate::net::api::fetch_operators(&url).await }
    });

    let on_edit = Callback::new(move |row_id: Option<String>| {
        let edit_url = config.with_value(|c| c.operators_edit_url.clone());
        open_operator_modal(modal, edit_url, row_id);
    });
    let on_delete = Callback::new(move |(id, name): (String, String)| {
        delete.update(|d| d.open_for(&id, &name));
    });

    view! {
        <div class="operators-page">
            <header class="operators-page__header">
                <h1>"Search Operators"</h1>
                <button id="btn-create-operator" class="btn btn--primary" on:click=move |_| on_edit.run(None)>
                    "+ New Operator"
                </button>
            </header>

            <Suspense fallback=move || view! { <p>"Loading operators..."</p> }>
                {move || {
                    operators
                        .get()
                        .map(|result| match result {
                            Ok(list) => view! { <OperatorTable operators=list on_edit=on_edit on_delete=on_delete/> }.into_any(),
                            Err(e) => {
                                log::warn!("operator list fetch failed: {e}");
                                view! { <p class="operators-page__error">"Could not load search operators."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <OperatorConfigModal/>
            <OperatorDeleteModal/>
        </div>
    }
}
