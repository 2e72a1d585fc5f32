use crate::catalog::QuestionRef;
use crate::config::AppConfig;
use crate::data::{Datasets, read_datasets_embedded};
use crate::disclosure::DisclosureState;
use crate::error::LookupError;
use crate::gesture::{GestureScale, PinchRecognizer};
use crate::model::{AppState, Catalog, SolutionIndex};
use crate::speech::SpeechService;
use serde::{Deserialize, Serialize};

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{QuestionCard, QuestionView, SubjectInfo};

/// Estado de una vista de pregunta abierta. Se tira al volver a la lista.
#[derive(Clone, Debug)]
pub struct QuestionSession {
    pub subject: String,
    pub id_text: String,
    pub lookup: Result<QuestionRef, LookupError>,
    pub disclosure: DisclosureState,
    pub zoom: GestureScale,
    pub pinch: PinchRecognizer,
}

/// Lo único que se guarda entre ejecuciones.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct UiPrefs {
    pub dark_mode: bool,
}

pub struct QuestApp {
    pub catalog: Catalog,
    pub solutions: SolutionIndex,
    pub config: AppConfig,
    pub state: AppState,
    pub session: Option<QuestionSession>,
    pub speech: Box<dyn SpeechService>,
    pub message: String,
    pub prefs: UiPrefs,
}

impl QuestApp {
    pub fn new(datasets: Datasets, config: AppConfig, speech: Box<dyn SpeechService>) -> Self {
        let prefs = UiPrefs {
            dark_mode: config.ui.dark_mode,
        };
        Self {
            catalog: datasets.catalog,
            solutions: datasets.solutions,
            config,
            state: AppState::Subjects,
            session: None,
            speech,
            message: String::new(),
            prefs,
        }
    }

    /// Arranca con los datos embebidos; si no cargan, la app abre en la vista de error.
    pub fn from_embedded(config: AppConfig, speech: Box<dyn SpeechService>) -> Self {
        match read_datasets_embedded() {
            Ok(datasets) => Self::new(datasets, config, speech),
            Err(e) => {
                log::error!("failed to load bundled datasets: {e}");
                let mut app = Self::new(
                    Datasets {
                        catalog: Catalog::default(),
                        solutions: SolutionIndex::default(),
                    },
                    config,
                    speech,
                );
                app.state = AppState::LoadFailed(e.to_string());
                app
            }
        }
    }
}
