//! Keyword search page: tag search bar, template groups and the search form.

#[cfg(test)]
#[path = "keyword_search_test.rs"]
mod keyword_search_test;

use leptos::prelude::*;

use crate::components::search_bar::SearchBar;
use crate::components::template_selector::TemplateSelector;
use crate::net::api::{CSRF_FIELD, FormPairs};
use crate::state::search_bar::SearchBarState;
use crate::state::search_session::SearchSession;
use crate::state::template_selection::{TemplateGroup, TemplateSelection};
use crate::util::debounce::SubmitDebouncer;
use crate::util::page_config::PageConfig;

/// Fields the search form would submit right now, in document order.
pub fn search_form_pairs(config: &PageConfig, bar: &SearchBarState, selection: &TemplateSelection) -> FormPairs {
    let mut pairs = vec![(CSRF_FIELD.to_owned(), config.csrf_token.clone())];
    pairs.extend(
        config
            .hidden_search_fields()
            .into_iter()
            .map(|(name, value)| (name.to_owned(), value)),
    );
    pairs.push(("keywords".to_owned(), bar.keywords_value()));
    pairs.extend(selection.form_pairs());
    pairs
}

#[component]
pub fn KeywordSearchPage() -> impl IntoView {
    let config = expect_context::<StoredValue<PageConfig>>();

    let session = RwSignal::new(SearchSession::default());
    provide_context(session);

    let bar = RwSignal::new(config.with_value(|c| SearchBarState::from_keywords(&c.keywords)));
    let selection = RwSignal::new(config.with_value(|c| {
        TemplateSelection::new(c.templates.global.clone(), c.templates.user.clone())
    }));
    let debouncer = SubmitDebouncer::new(session);
    let form_ref = NodeRef::<leptos::html::Form>::new();

    let on_submit = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        if let Some(form) = form_ref.get_untracked() {
            crate::util::browser::submit_form(&form);
        }
    });
    let form_pairs = Callback::new(move |()| {
        config.with_value(|c| bar.with_untracked(|b| selection.with_untracked(|s| search_form_pairs(c, b, s))))
    });

    let (search_url, csrf, hidden) = config.with_value(|c| {
        let hidden = c
            .hidden_search_fields()
            .into_iter()
            .map(|(name, value)| view! { <input type="hidden" name=name id=format!("id_{name}") value=value/> })
            .collect_view();
        (c.search_url.clone(), c.csrf_token.clone(), hidden)
    });

    view! {
        <div class="keyword-search-page">
            <form
                id="search-form"
                class="search-form"
                method="post"
                action=search_url
                node_ref=form_ref
                on:submit=move |_| debouncer.cancel()
            >
                <input type="hidden" name=CSRF_FIELD value=csrf/>
                {hidden}
                <SearchBar bar=bar debouncer=debouncer on_submit=on_submit form_pairs=form_pairs/>
                <div class="search-form__templates">
                    {TemplateGroup::ALL
                        .into_iter()
                        .map(|group| view! { <TemplateSelector selection=selection group=group/> })
                        .collect_view()}
                </div>
                <button type="submit" id="btn-search" class="btn btn--primary">
                    "Search"
                </button>
            </form>
        </div>
    }
}
