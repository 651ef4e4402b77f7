//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (operator dialogs, search bar, session, template
//! groups) so each component depends on a small focused model. Models are
//! plain structs with typed update methods, tested without a document, and
//! wrapped in `RwSignal`s by the components that own them.

pub mod operator_delete;
pub mod operator_modal;
pub mod search_bar;
pub mod search_session;
pub mod submit_timer;
pub mod tag_syntax;
pub mod template_selection;
