//! Field-level validation for [`Pokemon`] records.
//!
//! Every rule is checked independently and every violation is collected, so
//! the caller gets the full list of problems per field in one pass.

use super::fields::{self, FieldSpec, HP_MAX, HP_MIN};
use super::pokemon::{Pokemon, PokemonType};
use std::borrow::Cow;
use validator::{validate_length, Validate, ValidationError, ValidationErrors};

pub const HP_BELOW_MIN: &str = "can't be below 50";
pub const HP_ABOVE_MAX: &str = "can't be above 350";

fn error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

fn required() -> ValidationError {
    error("required", "This field is required.")
}

fn blank() -> ValidationError {
    error("blank", "This field cannot be blank.")
}

/// Checks a text value against the limits declared for its field.
fn validate_text(value: &str, spec: &FieldSpec) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if value.is_empty() && !spec.blank {
        errors.push(blank());
    }
    if let Some(max) = spec.max_length {
        if !validate_length(value, None, Some(max as u64), None) {
            let mut err = error(
                "length",
                format!(
                    "Ensure this value has at most {max} characters (it has {}).",
                    value.chars().count()
                ),
            );
            err.add_param(Cow::Borrowed("max"), &max);
            errors.push(err);
        }
    }
    errors
}

/// Checks that `value` is one of the pokemon type codes.
pub fn validate_type_choice(value: &str) -> Result<(), ValidationError> {
    match value.parse::<PokemonType>() {
        Ok(_) => Ok(()),
        Err(invalid) => {
            let mut err = error("invalid_choice", invalid.to_string());
            err.add_param(Cow::Borrowed("value"), &value);
            Err(err)
        }
    }
}

pub fn validate_hp(hp: i32) -> Result<(), ValidationError> {
    let (message, param, bound) = if hp < HP_MIN {
        (HP_BELOW_MIN, "min", HP_MIN)
    } else if hp > HP_MAX {
        (HP_ABOVE_MAX, "max", HP_MAX)
    } else {
        return Ok(());
    };
    let mut err = error("range", message);
    err.add_param(Cow::Borrowed(param), &bound);
    err.add_param(Cow::Borrowed("value"), &hp);
    Err(err)
}

fn spec(name: &str) -> &'static FieldSpec {
    // POKEMON_FIELDS declares every field validated below
    match fields::field(name) {
        Some(spec) => spec,
        None => unreachable!("no field spec for {name}"),
    }
}

impl Pokemon {
    /// Validates every field except those named in `exclude`.
    pub fn full_clean(&self, exclude: &[&str]) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut report = |field: &str, found: Vec<ValidationError>| {
            if exclude.iter().any(|excluded| *excluded == field) {
                return;
            }
            let name = spec(field).name;
            for err in found {
                errors.add(name, err);
            }
        };

        report(
            "name",
            match &self.name {
                Some(name) => validate_text(name, spec("name")),
                None => vec![required()],
            },
        );

        report(
            "type",
            match self.kind.as_deref() {
                None => vec![required()],
                Some("") => vec![blank()],
                Some(code) => {
                    let mut found = validate_text(code, spec("type"));
                    found.extend(validate_type_choice(code).err());
                    found
                }
            },
        );

        report(
            "hp",
            match self.hp {
                Some(hp) => validate_hp(hp).err().into_iter().collect(),
                None => vec![required()],
            },
        );

        report("name_fr", validate_text(&self.name_fr, spec("name_fr")));
        report("name_ar", validate_text(&self.name_ar, spec("name_ar")));
        report("name_jp", validate_text(&self.name_jp, spec("name_jp")));

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Validate for Pokemon {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.full_clean(&[])
    }
}
