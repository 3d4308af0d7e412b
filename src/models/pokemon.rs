use super::timestamps::Timestamped;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

/// The closed set of types a pokemon may have, stored by two-letter code.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PokemonType {
    #[serde(rename = "WA")]
    Water,
    #[serde(rename = "GR")]
    Grass,
    #[serde(rename = "GH")]
    Ghost,
    #[serde(rename = "ST")]
    Steel,
    #[serde(rename = "FA")]
    Fairy,
}

impl PokemonType {
    pub const ALL: [PokemonType; 5] = [
        PokemonType::Water,
        PokemonType::Grass,
        PokemonType::Ghost,
        PokemonType::Steel,
        PokemonType::Fairy,
    ];

    pub fn code(self) -> &'static str {
        match self {
            PokemonType::Water => "WA",
            PokemonType::Grass => "GR",
            PokemonType::Ghost => "GH",
            PokemonType::Steel => "ST",
            PokemonType::Fairy => "FA",
        }
    }

    /// Human readable label shown next to the code in choice lists.
    pub fn label(self) -> &'static str {
        match self {
            PokemonType::Water => "Water",
            PokemonType::Grass => "Grass",
            PokemonType::Ghost => "Ghost",
            PokemonType::Steel => "Steel",
            PokemonType::Fairy => "Fairy",
        }
    }
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Value {0:?} is not a valid choice.")]
pub struct InvalidChoice(pub String);

impl FromStr for PokemonType {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PokemonType::ALL
            .into_iter()
            .find(|kind| kind.code() == s)
            .ok_or_else(|| InvalidChoice(s.to_string()))
    }
}

/// A pokemon record as the admin sees it.
///
/// `name`, `type` and `hp` have no default: they stay `None` until the
/// caller supplies them, which is how validation tells "absent" apart from
/// an empty or zero value. `type` keeps the raw code so that an unknown code
/// can be carried to the validator and reported.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Pokemon {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub hp: Option<i32>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub name_fr: String,
    #[serde(default)]
    pub name_ar: String,
    #[serde(default)]
    pub name_jp: String,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<NaiveDateTime>,
}

fn default_active() -> bool {
    true
}

impl Default for Pokemon {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: None,
            kind: None,
            hp: None,
            active: default_active(),
            name_fr: String::new(),
            name_ar: String::new(),
            name_jp: String::new(),
            created_at: None,
            updated_at: None,
        }
    }
}

impl Pokemon {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, kind: PokemonType, hp: i32) -> Self {
        Self {
            name: Some(name.into()),
            kind: Some(kind.code().to_string()),
            hp: Some(hp),
            ..Default::default()
        }
    }

    /// The parsed type, if the stored code is one of the known choices.
    pub fn pokemon_type(&self) -> Option<PokemonType> {
        self.kind.as_deref().and_then(|code| code.parse().ok())
    }

    /// Current value of a field by its column name, as it would be rendered
    /// in the admin. Unknown names yield `None`.
    pub fn field_value(&self, field: &str) -> Option<Value> {
        let value = match field {
            "id" => json!(self.id),
            "name" => json!(self.name),
            "type" => json!(self.kind),
            "hp" => json!(self.hp),
            "active" => json!(self.active),
            "name_fr" => json!(self.name_fr),
            "name_ar" => json!(self.name_ar),
            "name_jp" => json!(self.name_jp),
            "created_at" => json!(self.created_at),
            "updated_at" => json!(self.updated_at),
            _ => return None,
        };
        Some(value)
    }

    /// Copies every editable field from `changes`, leaving the id and the
    /// read-only timestamps untouched.
    pub fn apply_changes(&mut self, changes: Pokemon) {
        self.name = changes.name;
        self.kind = changes.kind;
        self.hp = changes.hp;
        self.active = changes.active;
        self.name_fr = changes.name_fr;
        self.name_ar = changes.name_ar;
        self.name_jp = changes.name_jp;
    }
}

impl fmt::Display for Pokemon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_deref().unwrap_or_default())
    }
}

impl Timestamped for Pokemon {
    fn on_create(&mut self, now: NaiveDateTime) {
        self.created_at = Some(now);
        self.updated_at = Some(now);
    }

    fn on_update(&mut self, now: NaiveDateTime) {
        self.updated_at = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::{Pokemon, PokemonType};
    use crate::models::timestamps::Timestamped;
    use chrono::{Duration, NaiveDate};
    use serde_json::json;

    #[test]
    fn test_string_repr_is_the_name() {
        let pokemon = Pokemon {
            name: Some("foo".to_string()),
            ..Default::default()
        };
        assert_eq!(pokemon.to_string(), "foo");
    }

    #[test]
    fn test_string_repr_of_unnamed_pokemon_is_empty() {
        assert_eq!(Pokemon::default().to_string(), "");
    }

    #[test]
    fn test_type_codes_parse_back() {
        for kind in PokemonType::ALL {
            assert_eq!(kind.code().parse::<PokemonType>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.code());
        }
        assert_eq!(PokemonType::Ghost.label(), "Ghost");
    }

    #[test]
    fn test_unknown_type_code_is_rejected() {
        let err = "py".parse::<PokemonType>().unwrap_err();
        assert_eq!(err.to_string(), "Value \"py\" is not a valid choice.");
    }

    #[test]
    fn test_defaults() {
        let pokemon = Pokemon::default();
        assert!(pokemon.active);
        assert_eq!(pokemon.name, None);
        assert_eq!(pokemon.kind, None);
        assert_eq!(pokemon.hp, None);
        assert_eq!(pokemon.name_fr, "");
        assert_eq!(pokemon.name_ar, "");
        assert_eq!(pokemon.name_jp, "");
    }

    #[test]
    fn test_deserialize_applies_defaults_and_keeps_raw_type() {
        let pokemon: Pokemon = serde_json::from_value(json!({
            "name": "Squirtle",
            "type": "XX",
            "hp": 44
        }))
        .expect("Failed to deserialize JSON");
        assert!(pokemon.active);
        assert_eq!(pokemon.kind.as_deref(), Some("XX"));
        assert_eq!(pokemon.pokemon_type(), None);
        assert_eq!(pokemon.name_jp, "");
        assert_eq!(pokemon.created_at, None);
    }

    #[test]
    fn test_created_at_is_kept_on_update() {
        let created = NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .expect("valid date");
        let later = created + Duration::minutes(5);

        let mut pokemon = Pokemon::new("Gastly", PokemonType::Ghost, 130);
        pokemon.on_create(created);
        assert_eq!(pokemon.created_at, Some(created));
        assert_eq!(pokemon.updated_at, Some(created));

        pokemon.on_update(later);
        assert_eq!(pokemon.created_at, Some(created));
        assert_eq!(pokemon.updated_at, Some(later));
    }

    #[test]
    fn test_apply_changes_keeps_id_and_timestamps() {
        let created = NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("valid date");
        let mut pokemon = Pokemon::new("Marill", PokemonType::Water, 140);
        pokemon.id = "abc".to_string();
        pokemon.on_create(created);

        let mut changes = Pokemon::new("Azumarill", PokemonType::Fairy, 200);
        changes.id = "other".to_string();
        changes.active = false;
        changes.name_fr = "Azumarill".to_string();
        changes.created_at = None;

        pokemon.apply_changes(changes);
        assert_eq!(pokemon.id, "abc");
        assert_eq!(pokemon.created_at, Some(created));
        assert_eq!(pokemon.name.as_deref(), Some("Azumarill"));
        assert_eq!(pokemon.pokemon_type(), Some(PokemonType::Fairy));
        assert!(!pokemon.active);
        assert_eq!(pokemon.name_fr, "Azumarill");
    }

    #[test]
    fn test_field_value() {
        let pokemon = Pokemon::new("Klink", PokemonType::Steel, 60);
        assert_eq!(pokemon.field_value("name"), Some(json!("Klink")));
        assert_eq!(pokemon.field_value("type"), Some(json!("ST")));
        assert_eq!(pokemon.field_value("hp"), Some(json!(60)));
        assert_eq!(pokemon.field_value("active"), Some(json!(true)));
        assert_eq!(pokemon.field_value("created_at"), Some(json!(null)));
        assert_eq!(pokemon.field_value("speed"), None);
    }
}
