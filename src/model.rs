use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Example {
    pub input: String,
    pub output: String,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub id: i64,
    // algunos datasets usan `problem` en vez de `title`
    #[serde(alias = "problem")]
    pub title: String,
    pub difficulty: String,
    pub description: String,
    /// Clave de unión con el índice de soluciones (campo `code` en el JSON).
    #[serde(rename = "code", default, skip_serializing_if = "Option::is_none")]
    pub solution_key: Option<String>,
    #[serde(default)]
    pub hints: Vec<String>,
    #[serde(default)]
    pub examples: Vec<Example>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Subject {
    pub subject: String,
    pub questions: Vec<Question>,
}

/// Catálogo completo: lista ordenada de temas.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Catalog {
    pub subjects: Vec<Subject>,
}

impl Catalog {
    pub fn subject_names(&self) -> Vec<&str> {
        self.subjects.iter().map(|s| s.subject.as_str()).collect()
    }

    pub fn question_count(&self) -> usize {
        self.subjects.iter().map(|s| s.questions.len()).sum()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Solution {
    pub approach: String,
    #[serde(rename = "codeSnippet", default, skip_serializing_if = "Option::is_none")]
    pub code_snippet: Option<String>,
    /// Lenguaje del snippet, sólo para el resaltado.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SolutionRecord {
    pub code: String,
    pub solution: Solution,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct SolutionIndex {
    pub records: Vec<SolutionRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    Subjects,
    Question,
    SpeechTest,
    LoadFailed(String),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Subjects
    }
}
