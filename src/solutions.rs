use crate::model::{Question, SolutionIndex, SolutionRecord};

/// Une una pregunta con su solución por `solution_key == record.code`.
///
/// Si hay claves repetidas gana la primera en el orden del índice.
/// `None` es lo normal: muchas preguntas no tienen solución guardada.
pub fn find_solution<'a>(index: &'a SolutionIndex, question: &Question) -> Option<&'a SolutionRecord> {
    let key = question.solution_key.as_deref()?;
    index.records.iter().find(|r| r.code == key)
}
