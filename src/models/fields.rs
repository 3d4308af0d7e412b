use super::pokemon::PokemonType;
use serde::Serialize;

pub const NAME_MAX_LENGTH: usize = 30;
pub const HP_MIN: i32 = 50;
pub const HP_MAX: i32 = 350;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Uuid,
    Char,
    Choice,
    PositiveInteger,
    Boolean,
    DateTime,
}

/// The value a field takes when the caller does not supply one.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum FieldDefault {
    NotProvided,
    Text(&'static str),
    Bool(bool),
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AutoTimestamp {
    /// Stamped once when the record is created.
    NowAdd,
    /// Stamped on every save.
    Now,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub max_length: Option<usize>,
    pub default: FieldDefault,
    pub blank: bool,
    pub choices: &'static [PokemonType],
    pub auto: Option<AutoTimestamp>,
    pub editable: bool,
}

impl FieldSpec {
    const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            max_length: None,
            default: FieldDefault::NotProvided,
            blank: false,
            choices: &[],
            auto: None,
            editable: true,
        }
    }

    const fn localized_name(name: &'static str) -> Self {
        Self {
            max_length: Some(NAME_MAX_LENGTH),
            default: FieldDefault::Text(""),
            blank: true,
            ..Self::required(name, FieldKind::Char)
        }
    }

    const fn timestamp(name: &'static str, auto: AutoTimestamp) -> Self {
        Self {
            blank: true,
            auto: Some(auto),
            editable: false,
            ..Self::required(name, FieldKind::DateTime)
        }
    }
}

pub const POKEMON_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        editable: false,
        ..FieldSpec::required("id", FieldKind::Uuid)
    },
    FieldSpec {
        max_length: Some(NAME_MAX_LENGTH),
        ..FieldSpec::required("name", FieldKind::Char)
    },
    FieldSpec {
        max_length: Some(NAME_MAX_LENGTH),
        choices: &PokemonType::ALL,
        ..FieldSpec::required("type", FieldKind::Choice)
    },
    FieldSpec::required("hp", FieldKind::PositiveInteger),
    FieldSpec {
        default: FieldDefault::Bool(true),
        blank: true,
        ..FieldSpec::required("active", FieldKind::Boolean)
    },
    FieldSpec::localized_name("name_fr"),
    FieldSpec::localized_name("name_ar"),
    FieldSpec::localized_name("name_jp"),
    FieldSpec::timestamp("created_at", AutoTimestamp::NowAdd),
    FieldSpec::timestamp("updated_at", AutoTimestamp::Now),
];

pub fn field(name: &str) -> Option<&'static FieldSpec> {
    POKEMON_FIELDS.iter().find(|spec| spec.name == name)
}
