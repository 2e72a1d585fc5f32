use super::*;
use crate::catalog::{locate_question, question_at};

impl QuestApp {
    /// Entrada a la vista de pregunta con los dos parámetros de navegación.
    ///
    /// Siempre abre la vista; si la búsqueda falla la sesión guarda el error
    /// y se pinta "no encontrada".
    pub fn open_question(&mut self, subject: &str, id: &str) {
        let lookup = locate_question(&self.catalog, subject, id);
        let hint_count = match &lookup {
            Ok(r) => question_at(&self.catalog, *r).map_or(0, |q| q.hints.len()),
            Err(e) => {
                log::info!("question lookup failed: {e}");
                0
            }
        };

        self.session = Some(QuestionSession {
            subject: subject.to_string(),
            id_text: id.to_string(),
            lookup,
            disclosure: DisclosureState::new(hint_count),
            zoom: GestureScale::new(self.config.zoom),
            pinch: PinchRecognizer::default(),
        });
        self.state = AppState::Question;
        self.message.clear();
    }

    pub fn back_to_subjects(&mut self) {
        self.session = None;
        self.state = AppState::Subjects;
        self.message.clear();
    }

    pub fn open_speech_test(&mut self) {
        self.session = None;
        self.state = AppState::SpeechTest;
        self.message.clear();
    }
}
