//! Admin table listing search operators with edit and delete triggers.

use leptos::prelude::*;

use crate::net::types::OperatorListItem;

/// One row per operator. The row's `id` attribute carries the operator
/// identifier that the edit and delete dialogs are opened with.
#[component]
pub fn OperatorTable(
    operators: Vec<OperatorListItem>,
    on_edit: Callback<Option<String>>,
    on_delete: Callback<(String, String)>,
) -> impl IntoView {
    if operators.is_empty() {
        return view! { <p class="operator-table__empty">"No search operators yet."</p> }.into_any();
    }

    let rows = operators
        .into_iter()
        .map(|op| {
            let row_id = op.id.clone().unwrap_or_default();
            let edit_id = op.id.clone();
            let delete_id = row_id.clone();
            let name = op.name.clone();
            let xpaths = op.xpath_list.join("\n");
            view! {
                <tr id=row_id>
                    <td class="operator-table__name">{op.name}</td>
                    <td class="operator-table__xpaths">
                        <pre>{xpaths}</pre>
                    </td>
                    <td class="operator-table__actions">
                        <button
                            class="btn btn-edit-operator"
                            on:click=move |_| on_edit.run(edit_id.clone())
                        >
                            "Edit"
                        </button>
                        <button
                            class="btn btn--danger btn-delete-operator"
                            on:click=move |_| on_delete.run((delete_id.clone(), name.clone()))
                        >
                            "Delete"
                        </button>
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="operator-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"XPaths"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
    .into_any()
}
