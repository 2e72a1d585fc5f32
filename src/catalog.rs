// src/catalog.rs

use crate::error::LookupError;
use crate::model::{Catalog, Question, Subject};

/// Busca un tema por nombre exacto (distingue mayúsculas).
pub fn find_subject<'a>(catalog: &'a Catalog, name: &str) -> Option<&'a Subject> {
    subject_position(catalog, name).map(|i| &catalog.subjects[i])
}

pub fn find_question(subject: &Subject, id: i64) -> Option<&Question> {
    question_position(subject, id).map(|i| &subject.questions[i])
}

fn subject_position(catalog: &Catalog, name: &str) -> Option<usize> {
    catalog.subjects.iter().position(|s| s.subject == name)
}

fn question_position(subject: &Subject, id: i64) -> Option<usize> {
    subject.questions.iter().position(|q| q.id == id)
}

/// El id llega como texto desde la navegación.
pub fn parse_question_id(text: &str) -> Result<i64, LookupError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| LookupError::MalformedId {
            raw: text.to_string(),
        })
}

/// Posición de una pregunta dentro del catálogo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuestionRef {
    pub subject_idx: usize,
    pub question_idx: usize,
}

/// Resuelve el par `(tema, id)` de la navegación a índices del catálogo,
/// para que la sesión no mantenga el préstamo.
pub fn locate_question(
    catalog: &Catalog,
    subject: &str,
    id_text: &str,
) -> Result<QuestionRef, LookupError> {
    let subject_idx =
        subject_position(catalog, subject).ok_or_else(|| LookupError::SubjectNotFound {
            subject: subject.to_string(),
        })?;
    let id = parse_question_id(id_text)?;
    let question_idx = question_position(&catalog.subjects[subject_idx], id).ok_or_else(|| {
        LookupError::QuestionNotFound {
            subject: subject.to_string(),
            id,
        }
    })?;
    Ok(QuestionRef {
        subject_idx,
        question_idx,
    })
}

pub fn question_at(catalog: &Catalog, r: QuestionRef) -> Option<&Question> {
    catalog.subjects.get(r.subject_idx)?.questions.get(r.question_idx)
}

/// Como `locate_question`, pero devuelve la pregunta.
pub fn resolve_question<'a>(
    catalog: &'a Catalog,
    subject: &str,
    id_text: &str,
) -> Result<&'a Question, LookupError> {
    let r = locate_question(catalog, subject, id_text)?;
    Ok(&catalog.subjects[r.subject_idx].questions[r.question_idx])
}
