// src/data.rs

use crate::error::DataError;
use crate::model::{Catalog, SolutionIndex};
use std::collections::HashSet;

/// Catálogo y soluciones embebidos, cargados una vez al arrancar.
pub struct Datasets {
    pub catalog: Catalog,
    pub solutions: SolutionIndex,
}

pub fn parse_catalog(text: &str) -> Result<Catalog, DataError> {
    let catalog: Catalog = serde_json::from_str(text).map_err(|source| DataError::Parse {
        dataset: "catalog",
        source,
    })?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Comprueba la forma del catálogo: nombres no vacíos y pares `(tema, id)` únicos.
pub fn validate_catalog(catalog: &Catalog) -> Result<(), DataError> {
    let mut subjects = HashSet::new();
    for (position, subject) in catalog.subjects.iter().enumerate() {
        if subject.subject.trim().is_empty() {
            return Err(DataError::EmptySubjectName { position });
        }
        if !subjects.insert(subject.subject.as_str()) {
            return Err(DataError::DuplicateSubject {
                subject: subject.subject.clone(),
            });
        }
        let mut ids = HashSet::new();
        for q in &subject.questions {
            if !ids.insert(q.id) {
                return Err(DataError::DuplicateQuestion {
                    subject: subject.subject.clone(),
                    id: q.id,
                });
            }
        }
    }
    Ok(())
}

/// Las claves repetidas se aceptan (gana la primera), sólo se avisa.
pub fn parse_solutions(text: &str) -> Result<SolutionIndex, DataError> {
    let index: SolutionIndex = serde_json::from_str(text).map_err(|source| DataError::Parse {
        dataset: "solutions",
        source,
    })?;
    let mut seen = HashSet::new();
    for record in &index.records {
        if !seen.insert(record.code.as_str()) {
            log::warn!("duplicate solution key {:?}, first record wins", record.code);
        }
    }
    Ok(index)
}

/// Carga los dos JSON embebidos
pub fn read_datasets_embedded() -> Result<Datasets, DataError> {
    let catalog = parse_catalog(include_str!("data/problems.json"))?;
    let solutions = parse_solutions(include_str!("data/solutions.json"))?;
    log::info!(
        "loaded {} subjects, {} questions, {} solutions",
        catalog.subjects.len(),
        catalog.question_count(),
        solutions.records.len()
    );
    Ok(Datasets { catalog, solutions })
}
