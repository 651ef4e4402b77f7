//! `operator:value` recognition for search tags.

#[cfg(test)]
#[path = "tag_syntax_test.rs"]
mod tag_syntax_test;

/// Visual state of the tag draft or a committed tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TagStyle {
    #[default]
    Neutral,
    /// Prefix names a known operator.
    Recognized,
    /// Prefix was checked and names no operator.
    Unrecognized,
}

impl TagStyle {
    /// Modifier class appended to the base element class.
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::Neutral => "",
            Self::Recognized => " has-success",
            Self::Unrecognized => " has-error",
        }
    }
}

/// The operator prefix of `text`, i.e. everything before the first colon.
///
/// Returns `None` when there is no colon or the prefix is empty.
pub fn operator_prefix(text: &str) -> Option<&str> {
    let (prefix, _) = text.split_once(':')?;
    if prefix.is_empty() { None } else { Some(prefix) }
}

/// Whether the user just typed the colon that closes an operator prefix.
///
/// True only for drafts like `gt:`, where the single colon is the last char.
pub fn closes_operator_prefix(draft: &str) -> bool {
    draft.ends_with(':') && draft.matches(':').count() == 1 && draft.len() > 1
}

/// Style for a committed tag, given an operator lookup.
pub fn committed_style<F>(tag: &str, is_operator: F) -> TagStyle
where
    F: Fn(&str) -> bool,
{
    match operator_prefix(tag) {
        Some(prefix) if is_operator(prefix) => TagStyle::Recognized,
        _ => TagStyle::Neutral,
    }
}
