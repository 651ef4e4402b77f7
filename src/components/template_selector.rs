//! One template checkbox group with its select-all toggle.

use leptos::prelude::*;

use crate::state::template_selection::{TemplateGroup, TemplateSelection};

#[component]
pub fn TemplateSelector(selection: RwSignal<TemplateSelection>, group: TemplateGroup) -> impl IntoView {
    let field = group.field_name();

    let boxes = move || {
        selection
            .with(|s| s.group(group).to_vec())
            .into_iter()
            .enumerate()
            .map(|(index, option)| {
                let id = group.checkbox_id(index);
                let label_for = id.clone();
                view! {
                    <li class="checkbox">
                        <label for=label_for>
                            <input
                                type="checkbox"
                                id=id
                                name=field
                                value=option.id
                                prop:checked=option.checked
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    selection.update(|s| s.set_checked(group, index, checked));
                                }
                            />
                            " "
                            {option.name}
                        </label>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <fieldset class="template-group" id=format!("template-group-{field}")>
            <legend>{group.heading()}</legend>
            <button
                type="button"
                class="btn btn--small"
                id=format!("btn-toggle-{field}")
                on:click=move |_| selection.update(|s| s.toggle_all(group))
            >
                {move || selection.with(|s| s.button_label(group))}
            </button>
            <ul class="template-group__options">{boxes}</ul>
        </fieldset>
    }
}
