//! Template checkbox groups with select-all toggles.
//!
//! DESIGN
//! ======
//! The two groups are independent: toggling or editing one never changes the
//! other's boxes or button label. Checkbox IDs are `<prefix><index>` so the
//! rendered markup matches what the search backend's form expects.

#[cfg(test)]
#[path = "template_selection_test.rs"]
mod template_selection_test;

use serde::{Deserialize, Serialize};

pub const SELECT_ALL: &str = "Select All";
pub const UNSELECT_ALL: &str = "Unselect All";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TemplateGroup {
    Global,
    User,
}

impl TemplateGroup {
    pub const ALL: [Self; 2] = [Self::Global, Self::User];

    /// Checkbox ID prefix for this group.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Self::Global => "id_global_templates_",
            Self::User => "id_user_templates_",
        }
    }

    /// Form field name the checkboxes submit under.
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Global => "global_templates",
            Self::User => "user_templates",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Global => "Global templates",
            Self::User => "My templates",
        }
    }

    pub fn checkbox_id(self, index: usize) -> String {
        format!("{}{index}", self.id_prefix())
    }
}

/// A selectable template as provided in the page configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateOption {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub checked: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateSelection {
    global: Vec<TemplateOption>,
    user: Vec<TemplateOption>,
}

impl TemplateSelection {
    pub fn new(global: Vec<TemplateOption>, user: Vec<TemplateOption>) -> Self {
        Self { global, user }
    }

    pub fn group(&self, group: TemplateGroup) -> &[TemplateOption] {
        match group {
            TemplateGroup::Global => &self.global,
            TemplateGroup::User => &self.user,
        }
    }

    fn group_mut(&mut self, group: TemplateGroup) -> &mut Vec<TemplateOption> {
        match group {
            TemplateGroup::Global => &mut self.global,
            TemplateGroup::User => &mut self.user,
        }
    }

    pub fn set_checked(&mut self, group: TemplateGroup, index: usize, checked: bool) {
        if let Some(option) = self.group_mut(group).get_mut(index) {
            option.checked = checked;
        }
    }

    /// True when the group is non-empty and every box is checked.
    pub fn all_checked(&self, group: TemplateGroup) -> bool {
        let options = self.group(group);
        !options.is_empty() && options.iter().all(|o| o.checked)
    }

    /// Check every box, or uncheck every box if all are already checked.
    pub fn toggle_all(&mut self, group: TemplateGroup) {
        let target = !self.all_checked(group);
        for option in self.group_mut(group) {
            option.checked = target;
        }
    }

    pub fn button_label(&self, group: TemplateGroup) -> &'static str {
        if self.all_checked(group) { UNSELECT_ALL } else { SELECT_ALL }
    }

    /// `(field, template id)` pairs for every checked box, global first.
    pub fn form_pairs(&self) -> Vec<(String, String)> {
        TemplateGroup::ALL
            .into_iter()
            .flat_map(|group| {
                self.group(group)
                    .iter()
                    .filter(|o| o.checked)
                    .map(move |o| (group.field_name().to_owned(), o.id.clone()))
            })
            .collect()
    }
}
