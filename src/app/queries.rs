use super::*;
use crate::catalog::question_at;
use crate::model::{Question, SolutionRecord};
use crate::solutions::find_solution;

impl QuestApp {
    pub fn current_question(&self) -> Option<&Question> {
        let session = self.session.as_ref()?;
        let r = session.lookup.as_ref().ok()?;
        question_at(&self.catalog, *r)
    }

    pub fn current_solution(&self) -> Option<&SolutionRecord> {
        find_solution(&self.solutions, self.current_question()?)
    }

    /// Error de búsqueda de la vista abierta, si lo hubo.
    pub fn lookup_error(&self) -> Option<&LookupError> {
        self.session.as_ref()?.lookup.as_ref().err()
    }

    /// Par `(tema, id)` con el que se abrió la vista, tal cual llegó.
    pub fn requested_question(&self) -> Option<(&str, &str)> {
        self.session
            .as_ref()
            .map(|s| (s.subject.as_str(), s.id_text.as_str()))
    }

    pub fn disclosure(&self) -> Option<&DisclosureState> {
        self.session.as_ref().map(|s| &s.disclosure)
    }

    pub fn zoom_scale(&self) -> f32 {
        self.session.as_ref().map_or(1.0, |s| s.zoom.displayed())
    }
}
