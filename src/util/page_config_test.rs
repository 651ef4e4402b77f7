use super::*;

#[test]
fn defaults_use_three_second_delay_and_two_char_terms() {
    let config = PageConfig::default();
    assert_eq!(config.auto_submit_delay_ms, 3000);
    assert_eq!(config.suggestion_min_length, 2);
    assert!(config.templates.global.is_empty());
}

#[test]
fn partial_json_keeps_defaults_for_missing_fields() {
    let config = PageConfig::from_json(r#"{"suggestions_url":"/s","csrf_token":"tok"}"#).unwrap();
    assert_eq!(config.suggestions_url, "/s");
    assert_eq!(config.csrf_token, "tok");
    assert_eq!(config.operators_edit_url, PageConfig::default().operators_edit_url);
    assert_eq!(config.auto_submit_delay_ms, 3000);
}

#[test]
fn template_choices_parse_per_group() {
    let config = PageConfig::from_json(
        r#"{"templates":{"global":[{"id":"g1","name":"Global 1","checked":true}],"user":[{"id":"u1","name":"Mine"}]}}"#,
    )
    .unwrap();
    assert_eq!(config.templates.global.len(), 1);
    assert!(config.templates.global[0].checked);
    assert!(!config.templates.user[0].checked);
}

#[test]
fn invalid_json_is_reported() {
    assert!(matches!(PageConfig::from_json("{not json"), Err(ConfigError::Invalid(_))));
    assert!(matches!(PageConfig::from_json("[]"), Err(ConfigError::Invalid(_))));
}

#[test]
fn non_object_json_is_rejected() {
    for raw in ["[]", "[\"/edit\"]", "null", "3000", "\"page\""] {
        assert!(matches!(PageConfig::from_json(raw), Err(ConfigError::Invalid(_))), "{raw}");
    }
}

#[test]
fn script_json_reads_back_as_the_same_config() {
    let config = PageConfig {
        csrf_token: "tok".to_owned(),
        keywords: "gt:5,xml".to_owned(),
        templates: TemplateChoices {
            global: vec![TemplateOption { id: "g1".to_owned(), name: "</script><b>".to_owned(), checked: true }],
            user: Vec::new(),
        },
        ..PageConfig::default()
    };
    let json = config.to_script_json();
    assert!(!json.contains('<'));
    assert_eq!(PageConfig::from_json(&json), Ok(config));
}

#[test]
fn hidden_fields_in_form_order() {
    let config = PageConfig {
        query_id: "q".to_owned(),
        user_id: "u".to_owned(),
        order_by_field: "-last_modification_date".to_owned(),
        ..PageConfig::default()
    };
    let names: Vec<&str> = config.hidden_search_fields().into_iter().map(|(k, _)| k).collect();
    assert_eq!(names, vec!["query_id", "user_id", "order_by_field"]);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_outside_browser_falls_back_to_defaults() {
    assert_eq!(read_from_document(), Err(ConfigError::Missing(CONFIG_ELEMENT_ID)));
    assert_eq!(load(), PageConfig::default());
}
