//! Declarative admin configuration and the views built from it.

pub mod pokemon_admin;

use serde::Serialize;

/// A group of fields shown together on the change form.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fieldset {
    pub title: Option<&'static str>,
    pub fields: &'static [&'static str],
    pub classes: &'static [&'static str],
}

impl Fieldset {
    pub fn is_collapsed(&self) -> bool {
        self.classes.contains(&"collapse")
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelAdmin {
    pub model: &'static str,
    pub list_display: &'static [&'static str],
    pub list_filter: &'static [&'static str],
    pub list_display_links: &'static [&'static str],
    pub readonly_fields: &'static [&'static str],
    pub fieldsets: &'static [Fieldset],
    pub list_per_page: usize,
}

impl ModelAdmin {
    /// First fieldset carrying `title`; `None` looks up an unlabeled one.
    #[cfg(test)]
    pub fn fieldset(&self, title: Option<&str>) -> Option<&'static Fieldset> {
        self.fieldsets.iter().find(|fieldset| fieldset.title == title)
    }

    pub fn is_readonly(&self, field: &str) -> bool {
        self.readonly_fields.iter().any(|f| *f == field)
    }

    pub fn is_link(&self, field: &str) -> bool {
        self.list_display_links.iter().any(|f| *f == field)
    }
}
