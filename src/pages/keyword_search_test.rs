use super::*;

use crate::state::template_selection::TemplateOption;

fn config() -> PageConfig {
    PageConfig {
        csrf_token: "tok".to_owned(),
        query_id: "7".to_owned(),
        user_id: "42".to_owned(),
        order_by_field: "relevance".to_owned(),
        ..PageConfig::default()
    }
}

fn option(id: &str, checked: bool) -> TemplateOption {
    TemplateOption { id: id.to_owned(), name: id.to_uppercase(), checked }
}

fn pair(k: &str, v: &str) -> (String, String) {
    (k.to_owned(), v.to_owned())
}

#[test]
fn form_pairs_follow_document_order() {
    let bar = SearchBarState::from_keywords("gt:5,xml");
    let selection = TemplateSelection::new(vec![option("g1", true), option("g2", false)], vec![option("u1", true)]);

    let pairs = search_form_pairs(&config(), &bar, &selection);

    assert_eq!(
        pairs,
        vec![
            pair("csrfmiddlewaretoken", "tok"),
            pair("query_id", "7"),
            pair("user_id", "42"),
            pair("order_by_field", "relevance"),
            pair("keywords", "gt:5,xml"),
            pair("global_templates", "g1"),
            pair("user_templates", "u1"),
        ]
    );
}

#[test]
fn empty_search_still_sends_keywords_field() {
    let pairs = search_form_pairs(&config(), &SearchBarState::default(), &TemplateSelection::default());
    assert!(pairs.contains(&pair("keywords", "")));
    assert!(!pairs.iter().any(|(k, _)| k.ends_with("_templates")));
}

#[test]
fn draft_text_is_not_submitted() {
    let mut bar = SearchBarState::from_keywords("a");
    bar.set_draft("partial".to_owned());
    let pairs = search_form_pairs(&config(), &bar, &TemplateSelection::default());
    assert!(pairs.contains(&pair("keywords", "a")));
}
