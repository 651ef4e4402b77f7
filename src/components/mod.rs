pub mod operator_config_modal;
pub mod operator_delete_modal;
pub mod operator_table;
pub mod search_bar;
pub mod template_selector;
