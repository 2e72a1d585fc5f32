use super::*;

impl QuestApp {
    pub fn subject_infos(&self) -> Vec<SubjectInfo> {
        self.catalog
            .subjects
            .iter()
            .map(|s| SubjectInfo {
                name: s.subject.clone(),
                cards: s
                    .questions
                    .iter()
                    .map(|q| QuestionCard {
                        id: q.id,
                        title: q.title.clone(),
                        difficulty: q.difficulty.clone(),
                    })
                    .collect(),
            })
            .collect()
    }

    /// `None` si no hay vista abierta o la pregunta no se encontró.
    pub fn question_view(&self) -> Option<QuestionView<'_>> {
        let session = self.session.as_ref()?;
        let question = self.current_question()?;
        Some(QuestionView {
            question,
            solution: self.current_solution(),
            disclosure: &session.disclosure,
            scale: session.zoom.displayed(),
        })
    }
}
