//! Tag-input search bar with autocomplete and auto-submit.
//!
//! SYSTEM CONTEXT
//! ==============
//! Committed tags feed the hidden `keywords` field of the enclosing search
//! form. Every added tag restarts the shared auto-submit countdown; typing or
//! focusing the input cancels it. The operator list used for `name:` styling
//! comes from the `SearchSession` context and is fetched on first need.

use leptos::prelude::*;

use crate::net::api::FormPairs;
use crate::state::search_bar::{DraftCheck, KeyIntent, SearchBarState, key_intent};
use crate::state::search_session::SearchSession;
use crate::state::tag_syntax::committed_style;
use crate::util::debounce::SubmitDebouncer;
use crate::util::page_config::PageConfig;

#[component]
pub fn SearchBar(
    bar: RwSignal<SearchBarState>,
    debouncer: SubmitDebouncer,
    /// Submits the enclosing search form.
    on_submit: Callback<()>,
    /// Current serialized search form, sent along with suggestion requests.
    form_pairs: Callback<(), FormPairs>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SearchSession>>();
    let config = expect_context::<StoredValue<PageConfig>>();

    let schedule_submit = move || {
        let delay = config.with_value(|c| c.auto_submit_delay_ms);
        debouncer.schedule(delay, move || on_submit.run(()));
    };

    let check_operator = move |prefix: String| {
        if session.with_untracked(|s| s.operators.is_loaded()) {
            let style = session.with_untracked(|s| s.operators.style_for(&prefix));
            bar.update(|b| b.apply_operator_style(&prefix, style));
            return;
        }
        let list_url = config.with_value(|c| c.operator_list_url.clone());
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_operators(&list_url).await {
                Ok(items) => {
                    session.try_update(|s| s.operators.fill(items));
                    let style = session
                        .try_with_untracked(|s| s.operators.style_for(&prefix))
                        .unwrap_or_default();
                    bar.try_update(|b| b.apply_operator_style(&prefix, style));
                }
                Err(e) => {
                    log::warn!("operator list fetch failed: {e}");
                    session.try_update(|s| s.operators.invalidate());
                    bar.try_update(|b| b.operator_lookup_failed(&prefix));
                }
            }
        });
    };

    let request_suggestions = move || {
        let min_len = config.with_value(|c| c.suggestion_min_length);
        let Some(term) = bar.with_untracked(|b| b.suggestion_term(min_len)) else {
            bar.update(SearchBarState::close_suggestions);
            return;
        };
        let Some(seq) = bar.try_update(SearchBarState::begin_suggestions) else {
            return;
        };
        let url = config.with_value(|c| c.suggestions_url.clone());
        let form = form_pairs.run(());
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_suggestions(&url, &form, &term).await {
                Ok(items) => {
                    bar.try_update(|b| b.receive_suggestions(seq, items));
                }
                Err(e) => {
                    log::debug!("suggestions for {term:?} failed: {e}");
                    bar.try_update(|b| b.fail_suggestions(seq));
                }
            }
        });
    };

    let on_input = move |ev: leptos::ev::Event| {
        debouncer.cancel();
        let text = event_target_value(&ev);
        let check = bar.try_update(|b| b.set_draft(text)).unwrap_or(DraftCheck::Nothing);
        if let DraftCheck::CheckOperator(prefix) = check {
            check_operator(prefix);
        }
        request_suggestions();
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let intent = bar.with_untracked(|b| key_intent(&ev.key(), &b.draft, b.highlighted.is_some()));
        match intent {
            KeyIntent::Commit => {
                ev.prevent_default();
                let added = bar
                    .try_update(|b| {
                        b.close_suggestions();
                        b.commit_draft()
                    })
                    .unwrap_or(false);
                if added {
                    schedule_submit();
                }
            }
            KeyIntent::SelectHighlighted => {
                ev.prevent_default();
                if bar.try_update(SearchBarState::select_highlighted).unwrap_or(false) {
                    schedule_submit();
                }
            }
            KeyIntent::RemoveLast => {
                ev.prevent_default();
                debouncer.cancel();
                bar.update(|b| {
                    b.remove_last();
                });
            }
            KeyIntent::HighlightNext => {
                ev.prevent_default();
                bar.update(|b| b.move_highlight(1));
            }
            KeyIntent::HighlightPrev => {
                ev.prevent_default();
                bar.update(|b| b.move_highlight(-1));
            }
            KeyIntent::CloseSuggestions => bar.update(SearchBarState::close_suggestions),
            KeyIntent::Typing => debouncer.cancel(),
            KeyIntent::Ignore => {}
        }
    };

    let is_operator = move |prefix: &str| session.with(|s| s.operators.contains(prefix) == Some(true));

    let tags = move || {
        bar.with(|b| b.tags.clone())
            .into_iter()
            .enumerate()
            .map(|(index, tag)| {
                let class = format!("tagit-choice{}", committed_style(&tag, is_operator).class_suffix());
                view! {
                    <li class=class>
                        <span class="tagit-label">{tag}</span>
                        <button
                            type="button"
                            class="tagit-close"
                            aria-label="Remove tag"
                            on:click=move |_| {
                                debouncer.cancel();
                                bar.update(|b| {
                                    b.remove_tag(index);
                                });
                            }
                        >
                            "×"
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    let suggestions = move || {
        bar.with(|b| {
            b.suggestions
                .iter()
                .enumerate()
                .map(|(index, s)| (index, s.label.clone(), b.highlighted == Some(index)))
                .collect::<Vec<_>>()
        })
        .into_iter()
        .map(|(index, label, active)| {
            let class = if active { "suggestion suggestion--active" } else { "suggestion" };
            view! {
                <li
                    class=class
                    on:mousedown=move |ev| {
                        ev.prevent_default();
                        if bar.try_update(|b| b.select_suggestion(index)).unwrap_or(false) {
                            schedule_submit();
                        }
                    }
                >
                    {label}
                </li>
            }
        })
        .collect_view()
    };

    let draft_class = move || format!("tagit-new{}", bar.with(|b| b.draft_style.class_suffix()));

    view! {
        <div class="search-bar">
            <input
                type="hidden"
                id="id_keywords"
                name="keywords"
                prop:value=move || bar.with(SearchBarState::keywords_value)
            />
            <ul class="tagit">
                {tags}
                <li class=draft_class>
                    <input
                        type="text"
                        class="tagit-input"
                        autocomplete="off"
                        placeholder=move || bar.with(|b| b.placeholder().unwrap_or_default())
                        prop:value=move || bar.with(|b| b.draft.clone())
                        on:input=on_input
                        on:keydown=on_keydown
                        on:focus=move |_| debouncer.cancel()
                        on:blur=move |_| bar.update(SearchBarState::close_suggestions)
                    />
                </li>
            </ul>
            <span id="loading" class=move || if bar.with(|b| b.loading) { "isloading" } else { "" }></span>
            <Show when=move || bar.with(|b| !b.suggestions.is_empty())>
                <ul class="search-bar__suggestions" role="listbox">
                    {suggestions}
                </ul>
            </Show>
        </div>
    }
}
