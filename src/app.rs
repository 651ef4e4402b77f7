//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{keyword_search::KeywordSearchPage, search_operators::SearchOperatorsPage};
use crate::util::page_config::{CONFIG_ELEMENT_ID, PageConfig};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` comes from the SSR host for the current request. It is embedded
/// as JSON so `hydrate` starts from the same value the server rendered with.
pub fn shell(options: LeptosOptions, config: PageConfig) -> impl IntoView {
    let config_json = config.to_script_json();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
                <script id=CONFIG_ELEMENT_ID type="application/json" inner_html=config_json></script>
            </head>
            <body>
                <App config=config/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the page config to every page.
#[component]
pub fn App(config: PageConfig) -> impl IntoView {
    provide_meta_context();

    provide_context(StoredValue::new(config));

    view! {
        <Stylesheet id="leptos" href="/pkg/explore-keyword-ui.css"/>
        <Title text="Keyword Search"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=KeywordSearchPage/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("search-operators"))
                    view=SearchOperatorsPage
                />
            </Routes>
        </Router>
    }
}
