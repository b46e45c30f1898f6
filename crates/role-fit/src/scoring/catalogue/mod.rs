mod groups;
mod standard;

pub use groups::RoleGroups;

use crate::config::ScoringConfig;
use crate::scoring::domain::{FormulaTerm, RoleFormula, RoleGroup};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

pub const DEFAULT_WEIGHT_TOLERANCE: f64 = 1e-6;

/// Authoring form of a formula term, as written in catalogue files.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TermDefinition {
    pub attributes: Vec<String>,
    pub weight: f64,
    #[serde(default)]
    pub divisor: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoleDefinition {
    pub name: String,
    pub terms: Vec<TermDefinition>,
}

/// On-disk catalogue layout.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogueFile {
    #[serde(default)]
    pub version: Option<String>,
    pub roles: Vec<RoleDefinition>,
    #[serde(default)]
    pub groups: BTreeMap<String, RoleGroup>,
}

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("failed to read role catalogue {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid role catalogue document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("role at position {index} has a blank name")]
    BlankRoleName { index: usize },
    #[error("role `{0}` is defined more than once")]
    DuplicateRole(String),
    #[error("role `{0}` has no terms")]
    EmptyFormula(String),
    #[error("term {term} of role `{role}` lists no attributes")]
    EmptyTerm { role: String, term: usize },
    #[error("term {term} of role `{role}` contains a blank attribute code")]
    BlankAttribute { role: String, term: usize },
    #[error("term {term} of role `{role}` has a zero divisor")]
    ZeroDivisor { role: String, term: usize },
    #[error("term {term} of role `{role}` has non-finite weight {weight}")]
    NonFiniteWeight {
        role: String,
        term: usize,
        weight: f64,
    },
}

/// A formula whose weights do not add up to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightSumWarning {
    pub role: String,
    pub total: f64,
}

/// Immutable, validated set of role formulas in display order.
#[derive(Debug, Clone)]
pub struct RoleCatalogue {
    version: String,
    formulas: Vec<RoleFormula>,
    groups: RoleGroups,
    warnings: Vec<WeightSumWarning>,
}

impl RoleCatalogue {
    pub fn standard() -> Result<Self, CatalogueError> {
        Self::standard_with_tolerance(DEFAULT_WEIGHT_TOLERANCE)
    }

    pub fn standard_with_tolerance(tolerance: f64) -> Result<Self, CatalogueError> {
        let mut catalogue = Self::from_definitions_with_tolerance(
            standard::standard_definitions(),
            RoleGroups::standard(),
            tolerance,
        )?;
        catalogue.version = standard::STANDARD_VERSION.to_string();
        Ok(catalogue)
    }

    pub fn from_definitions(definitions: Vec<RoleDefinition>) -> Result<Self, CatalogueError> {
        Self::from_definitions_with_tolerance(
            definitions,
            RoleGroups::standard(),
            DEFAULT_WEIGHT_TOLERANCE,
        )
    }

    pub fn from_definitions_with_tolerance(
        definitions: Vec<RoleDefinition>,
        groups: RoleGroups,
        tolerance: f64,
    ) -> Result<Self, CatalogueError> {
        let mut seen = HashSet::new();
        let mut formulas = Vec::with_capacity(definitions.len());

        for (index, definition) in definitions.into_iter().enumerate() {
            let name = definition.name.trim().to_string();
            if name.is_empty() {
                return Err(CatalogueError::BlankRoleName { index });
            }
            if !seen.insert(name.clone()) {
                return Err(CatalogueError::DuplicateRole(name));
            }
            if definition.terms.is_empty() {
                return Err(CatalogueError::EmptyFormula(name));
            }

            let mut terms = Vec::with_capacity(definition.terms.len());
            for (term, raw) in definition.terms.into_iter().enumerate() {
                terms.push(validate_term(&name, term, raw)?);
            }
            formulas.push(RoleFormula { name, terms });
        }

        let warnings = audit_weights(&formulas, tolerance);
        Ok(Self {
            version: "custom".to_string(),
            formulas,
            groups,
            warnings,
        })
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogueError> {
        Self::from_json_reader_with_tolerance(reader, DEFAULT_WEIGHT_TOLERANCE)
    }

    pub fn from_json_reader_with_tolerance<R: Read>(
        reader: R,
        tolerance: f64,
    ) -> Result<Self, CatalogueError> {
        let file: CatalogueFile = serde_json::from_reader(reader)?;
        let groups = RoleGroups::standard().with_overrides(file.groups);
        let mut catalogue = Self::from_definitions_with_tolerance(file.roles, groups, tolerance)?;
        if let Some(version) = file.version {
            catalogue.version = version;
        }
        Ok(catalogue)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogueError> {
        Self::from_path_with_tolerance(path, DEFAULT_WEIGHT_TOLERANCE)
    }

    pub fn from_path_with_tolerance<P: AsRef<Path>>(
        path: P,
        tolerance: f64,
    ) -> Result<Self, CatalogueError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| CatalogueError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_reader_with_tolerance(std::io::BufReader::new(file), tolerance)
    }

    /// Loads the configured catalogue file, or the built-in set when none is set.
    pub fn load(config: &ScoringConfig) -> Result<Self, CatalogueError> {
        let catalogue = match &config.catalogue_path {
            Some(path) => Self::from_path_with_tolerance(path, config.weight_tolerance)?,
            None => Self::standard_with_tolerance(config.weight_tolerance)?,
        };
        info!(
            version = %catalogue.version,
            roles = catalogue.len(),
            "role catalogue loaded"
        );
        Ok(catalogue)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    pub fn formulas(&self) -> &[RoleFormula] {
        &self.formulas
    }

    pub fn get(&self, name: &str) -> Option<&RoleFormula> {
        self.formulas.iter().find(|formula| formula.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.formulas
            .iter()
            .map(|formula| formula.name.as_str())
            .collect()
    }

    pub fn groups(&self) -> &RoleGroups {
        &self.groups
    }

    pub fn weight_warnings(&self) -> &[WeightSumWarning] {
        &self.warnings
    }
}

fn validate_term(
    role: &str,
    term: usize,
    raw: TermDefinition,
) -> Result<FormulaTerm, CatalogueError> {
    if raw.attributes.is_empty() {
        return Err(CatalogueError::EmptyTerm {
            role: role.to_string(),
            term,
        });
    }
    if raw.attributes.iter().any(|code| code.trim().is_empty()) {
        return Err(CatalogueError::BlankAttribute {
            role: role.to_string(),
            term,
        });
    }
    if raw.divisor == Some(0) {
        return Err(CatalogueError::ZeroDivisor {
            role: role.to_string(),
            term,
        });
    }
    if !raw.weight.is_finite() {
        return Err(CatalogueError::NonFiniteWeight {
            role: role.to_string(),
            term,
            weight: raw.weight,
        });
    }

    Ok(FormulaTerm {
        attributes: raw
            .attributes
            .into_iter()
            .map(|code| code.trim().to_string())
            .collect(),
        weight: raw.weight,
        divisor: raw.divisor,
    })
}

fn audit_weights(formulas: &[RoleFormula], tolerance: f64) -> Vec<WeightSumWarning> {
    let warnings: Vec<WeightSumWarning> = formulas
        .iter()
        .filter_map(|formula| {
            let total = formula.weight_total();
            ((total - 1.0).abs() > tolerance).then(|| WeightSumWarning {
                role: formula.name.clone(),
                total,
            })
        })
        .collect();

    for warning in &warnings {
        debug!(role = %warning.role, total = warning.total, "role weights do not sum to 1.0");
    }
    if !warnings.is_empty() {
        warn!(
            roles = warnings.len(),
            tolerance, "role catalogue contains formulas whose weights do not sum to 1.0"
        );
    }
    warnings
}
