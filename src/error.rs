//! Errores de búsqueda, carga de datos y configuración.

use thiserror::Error;

/// Fallo al resolver `(tema, id)` contra el catálogo.
///
/// Las tres variantes se muestran igual: la vista de "pregunta no encontrada".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Subject not found: {subject}")]
    SubjectNotFound { subject: String },

    #[error("Question {id} not found in {subject}")]
    QuestionNotFound { subject: String, id: i64 },

    #[error("Malformed question id: {raw:?}")]
    MalformedId { raw: String },
}

impl LookupError {
    /// Mensaje para el usuario; igual para todas las variantes.
    pub fn user_message(&self) -> &'static str {
        "❌ Question not found."
    }
}

/// Errores al cargar los datasets embebidos.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to parse {dataset}: {source}")]
    Parse {
        dataset: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Subject with empty name at position {position}")]
    EmptySubjectName { position: usize },

    #[error("Duplicate subject: {subject}")]
    DuplicateSubject { subject: String },

    #[error("Duplicate question {id} in {subject}")]
    DuplicateQuestion { subject: String, id: i64 },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {source}")]
    Parse {
        #[from]
        source: serde_yaml::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),
}
