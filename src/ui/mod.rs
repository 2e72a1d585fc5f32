mod helpers;
pub mod layout;
pub mod views;

use crate::app::{QuestApp, UiPrefs};
use crate::model::AppState;
use eframe::{APP_KEY, App, CreationContext, Frame, get_value, set_value};
use egui::Context;
use layout::{apply_theme, bottom_panel, top_panel};

impl QuestApp {
    /// Recupera las preferencias guardadas por eframe y aplica el tema.
    pub fn restore(mut self, cc: &CreationContext<'_>) -> Self {
        if let Some(prefs) = cc
            .storage
            .and_then(|storage| get_value::<UiPrefs>(storage, APP_KEY))
        {
            self.prefs = prefs;
        }
        apply_theme(&cc.egui_ctx, self.prefs.dark_mode);
        self
    }
}

impl App for QuestApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // PANEL SUPERIOR: volver / prueba de voz
        top_panel(self, ctx);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(self, ctx);

        match self.state.clone() {
            AppState::Subjects => views::subjects::ui_subjects(self, ctx),
            AppState::Question => views::question::ui_question(self, ctx),
            AppState::SpeechTest => views::speech_test::ui_speech_test(self, ctx),
            AppState::LoadFailed(reason) => views::not_found::ui_load_failed(ctx, &reason),
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.prefs);
    }
}
