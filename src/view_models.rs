// src/view_models.rs

use crate::disclosure::DisclosureState;
use crate::model::{Question, SolutionRecord};

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionCard {
    pub id: i64,
    pub title: String,
    pub difficulty: String,
}

impl QuestionCard {
    /// El id viaja como texto en la navegación.
    pub fn id_param(&self) -> String {
        self.id.to_string()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubjectInfo {
    pub name: String,
    pub cards: Vec<QuestionCard>,
}

impl SubjectInfo {
    pub fn heading(&self) -> String {
        match self.cards.len() {
            1 => format!("{} (1 question)", self.name),
            n => format!("{} ({n} questions)", self.name),
        }
    }
}

/// Todo lo que pinta la vista de una pregunta encontrada.
#[derive(Clone, Debug)]
pub struct QuestionView<'a> {
    pub question: &'a Question,
    pub solution: Option<&'a SolutionRecord>,
    pub disclosure: &'a DisclosureState,
    pub scale: f32,
}

impl QuestionView<'_> {
    pub fn hint_label(&self, index: usize) -> String {
        if self.disclosure.is_hint_visible(index) {
            format!("🔽 Hint {}", index + 1)
        } else {
            format!("▶ Hint {}", index + 1)
        }
    }

    /// Texto de la pista sólo si está desplegada.
    pub fn visible_hint(&self, index: usize) -> Option<&str> {
        if self.disclosure.is_hint_visible(index) {
            self.question.hints.get(index).map(String::as_str)
        } else {
            None
        }
    }

    pub fn code_snippet(&self) -> Option<&str> {
        self.solution?.solution.code_snippet.as_deref()
    }

    /// El snippet, sólo cuando el bloque de código está desplegado.
    pub fn visible_code(&self) -> Option<&str> {
        if self.disclosure.is_code_visible() {
            self.code_snippet()
        } else {
            None
        }
    }

    pub fn code_toggle_label(&self) -> &'static str {
        if self.disclosure.is_code_visible() {
            "🔽 Hide code"
        } else {
            "▶ Show code"
        }
    }

    pub fn difficulty_label(&self) -> String {
        format!("Difficulty: {}", self.question.difficulty)
    }
}
