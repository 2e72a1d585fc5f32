//! Shared fixtures for the integration tests.

use quest_code::QuestApp;
use quest_code::config::AppConfig;
use quest_code::data::{Datasets, parse_catalog, parse_solutions};
use quest_code::speech::{SpeechOptions, SpeechService};
use std::cell::RefCell;
use std::rc::Rc;

pub const CATALOG: &str = r#"[
  {
    "subject": "Arrays",
    "questions": [
      {
        "id": 1,
        "title": "Two Sum",
        "difficulty": "Easy",
        "description": "Find two numbers that add up to target.",
        "code": "two-sum",
        "hints": ["Think about complements.", "Use a hash map."],
        "examples": [{"input": "[2,7,11,15], 9", "output": "[0,1]", "explanation": "2 + 7 = 9"}]
      },
      {
        "id": 2,
        "title": "Contains Duplicate",
        "difficulty": "Easy",
        "description": "Return true if any value repeats."
      }
    ]
  },
  {
    "subject": "Strings",
    "questions": [
      {"id": 1, "title": "Valid Anagram", "difficulty": "Easy", "description": "Compare letters.", "code": "missing"}
    ]
  }
]"#;

pub const SOLUTIONS: &str = r#"[
  {"code": "two-sum", "solution": {"approach": "Use a hash map", "codeSnippet": "..."}}
]"#;

/// Speech double that records every call instead of producing audio.
#[derive(Clone, Default)]
pub struct RecordingSpeech {
    pub calls: Rc<RefCell<Vec<(String, SpeechOptions)>>>,
}

impl SpeechService for RecordingSpeech {
    fn speak(&self, text: &str, options: &SpeechOptions) {
        self.calls
            .borrow_mut()
            .push((text.to_string(), options.clone()));
    }
}

pub fn datasets() -> Datasets {
    Datasets {
        catalog: parse_catalog(CATALOG).expect("fixture catalog"),
        solutions: parse_solutions(SOLUTIONS).expect("fixture solutions"),
    }
}

pub fn app() -> (QuestApp, RecordingSpeech) {
    let speech = RecordingSpeech::default();
    let app = QuestApp::new(datasets(), AppConfig::default(), Box::new(speech.clone()));
    (app, speech)
}
