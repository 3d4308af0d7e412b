use super::{Fieldset, ModelAdmin};
use crate::models::fields;
use crate::models::pokemon::Pokemon;
use serde::Serialize;
use serde_json::{Map, Value};

pub const POKEMON_ADMIN: ModelAdmin = ModelAdmin {
    model: "pokemon",
    list_display: &["id", "name", "hp", "active"],
    list_filter: &["active"],
    list_display_links: &["id", "name"],
    readonly_fields: &["created_at", "updated_at"],
    fieldsets: &[
        Fieldset {
            title: None,
            fields: &["name", "hp", "active", "type"],
            classes: &[],
        },
        Fieldset {
            title: Some("Localizations"),
            fields: &["name_ar", "name_fr", "name_jp"],
            classes: &["collapse"],
        },
        Fieldset {
            title: None,
            fields: &["created_at", "updated_at"],
            classes: &[],
        },
    ],
    list_per_page: 100,
};

/// One page of the list view.
#[derive(Serialize, Debug)]
pub struct ChangeList {
    pub columns: &'static [&'static str],
    pub links: Vec<&'static str>,
    pub filters: &'static [&'static str],
    pub page: usize,
    pub num_pages: usize,
    pub count: usize,
    pub results: Vec<Map<String, Value>>,
}

impl ChangeList {
    /// Builds page `page` (1-based) out of already filtered records.
    /// A page past the end yields an empty result list.
    pub fn build(admin: &ModelAdmin, pokemons: &[Pokemon], page: usize) -> Self {
        let per_page = admin.list_per_page.max(1);
        let results = match page.saturating_sub(1).checked_mul(per_page) {
            Some(offset) => pokemons
                .iter()
                .skip(offset)
                .take(per_page)
                .map(|pokemon| row(admin, pokemon))
                .collect(),
            None => Vec::new(),
        };
        Self {
            columns: admin.list_display,
            links: admin
                .list_display
                .iter()
                .copied()
                .filter(|column| admin.is_link(column))
                .collect(),
            filters: admin.list_filter,
            page,
            num_pages: pokemons.len().div_ceil(per_page).max(1),
            count: pokemons.len(),
            results,
        }
    }
}

fn row(admin: &ModelAdmin, pokemon: &Pokemon) -> Map<String, Value> {
    admin
        .list_display
        .iter()
        .filter_map(|column| {
            pokemon
                .field_value(column)
                .map(|value| (column.to_string(), value))
        })
        .collect()
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Serialize, Debug)]
pub struct FormField {
    pub name: &'static str,
    pub value: Value,
    pub readonly: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,
}

fn choices(field: &str) -> Vec<Choice> {
    fields::field(field)
        .map(|spec| {
            spec.choices
                .iter()
                .map(|kind| Choice {
                    value: kind.code(),
                    label: kind.label(),
                })
                .collect()
        })
        .unwrap_or_default()
}

#[derive(Serialize, Debug)]
pub struct FormFieldset {
    pub title: Option<&'static str>,
    pub classes: &'static [&'static str],
    pub collapsed: bool,
    pub fields: Vec<FormField>,
}

/// The change form of a single record, grouped by fieldset.
#[derive(Serialize, Debug)]
pub struct ChangeForm {
    pub id: String,
    pub title: String,
    pub fieldsets: Vec<FormFieldset>,
}

impl ChangeForm {
    pub fn build(admin: &ModelAdmin, pokemon: &Pokemon) -> Self {
        let fieldsets = admin
            .fieldsets
            .iter()
            .map(|fieldset| FormFieldset {
                title: fieldset.title,
                classes: fieldset.classes,
                collapsed: fieldset.is_collapsed(),
                fields: fieldset
                    .fields
                    .iter()
                    .map(|&name| FormField {
                        name,
                        value: pokemon.field_value(name).unwrap_or(Value::Null),
                        readonly: admin.is_readonly(name),
                        choices: choices(name),
                    })
                    .collect(),
            })
            .collect();
        Self {
            id: pokemon.id.clone(),
            title: pokemon.to_string(),
            fieldsets,
        }
    }
}
