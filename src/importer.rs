//! Bulk load of pokemon records from CSV.
//!
//! Expected header: `name,type,hp,active,name_fr,name_ar,name_jp`. Optional
//! columns may be left out. Each row is stored or rejected on its own.
//!
//! An empty `name` or `type` cell counts as a blank value, the same as `""`
//! in a JSON payload; only a missing column makes the field absent.

use crate::models::pokemon::Pokemon;
use crate::repository::{database::Database, error::RepositoryError, pokemon_repository};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use tracing::{info, warn};
use validator::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Cannot read CSV file: {0}")]
    Io(#[from] io::Error),

    #[error("Cannot read CSV header: {0}")]
    Header(#[from] csv::Error),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[derive(Deserialize, Debug)]
struct PokemonRow {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    hp: Option<i32>,
    #[serde(default)]
    active: Option<bool>,
    #[serde(default)]
    name_fr: Option<String>,
    #[serde(default)]
    name_ar: Option<String>,
    #[serde(default)]
    name_jp: Option<String>,
}

/// Which of the required text columns the header declares.
#[derive(Debug, Clone, Copy)]
struct Columns {
    name: bool,
    kind: bool,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        Self {
            name: headers.iter().any(|header| header == "name"),
            kind: headers.iter().any(|header| header == "type"),
        }
    }
}

/// csv reads an empty cell into `None`; put it back as a blank string when
/// the column exists.
fn cell(value: Option<String>, present: bool) -> Option<String> {
    value.or_else(|| present.then(String::new))
}

impl PokemonRow {
    fn into_pokemon(self, columns: Columns) -> Pokemon {
        let defaults = Pokemon::default();
        Pokemon {
            name: cell(self.name, columns.name),
            kind: cell(self.kind, columns.kind),
            hp: self.hp,
            active: self.active.unwrap_or(defaults.active),
            name_fr: self.name_fr.unwrap_or_default(),
            name_ar: self.name_ar.unwrap_or_default(),
            name_jp: self.name_jp.unwrap_or_default(),
            ..defaults
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum RowErrors {
    Validation(ValidationErrors),
    Malformed(String),
}

#[derive(Serialize, Debug)]
pub struct RowFailure {
    /// 1-based, not counting the header line.
    pub row: usize,
    pub errors: RowErrors,
}

#[derive(Serialize, Debug, Default)]
pub struct ImportReport {
    pub created: Vec<String>,
    pub failed: Vec<RowFailure>,
}

pub fn import_csv<R: io::Read>(db: &Database, reader: R) -> Result<ImportReport, ImportError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let columns = Columns::from_headers(reader.headers()?);

    let mut report = ImportReport::default();
    for (index, record) in reader.deserialize::<PokemonRow>().enumerate() {
        let row = index + 1;
        let pokemon = match record {
            Ok(record) => record.into_pokemon(columns),
            Err(err) => {
                warn!(row, "malformed CSV row: {err}");
                report.failed.push(RowFailure {
                    row,
                    errors: RowErrors::Malformed(err.to_string()),
                });
                continue;
            }
        };
        match pokemon_repository::create_pokemon(db, pokemon) {
            Ok(created) => report.created.push(created.id),
            Err(RepositoryError::Validation(errors)) => {
                warn!(row, "invalid CSV row: {errors}");
                report.failed.push(RowFailure {
                    row,
                    errors: RowErrors::Validation(errors),
                });
            }
            Err(err) => return Err(err.into()),
        }
    }
    info!(
        created = report.created.len(),
        failed = report.failed.len(),
        "imported pokemon CSV"
    );
    Ok(report)
}

pub fn import_csv_file(
    db: &Database,
    path: impl AsRef<Path>,
) -> Result<ImportReport, ImportError> {
    let file = std::fs::File::open(path.as_ref())?;
    import_csv(db, io::BufReader::new(file))
}
