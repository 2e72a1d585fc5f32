use crate::QuestApp;
use crate::error::LookupError;
use crate::ui::layout::centered_panel;
use egui::{Color32, Context, RichText};

/// Vista de "no encontrada": nunca se pinta nada de la pregunta.
pub fn ui_not_found(app: &mut QuestApp, ctx: &Context, error: &LookupError) {
    let mut volver = false;
    let requested = app
        .requested_question()
        .map(|(subject, id)| format!("Subject \"{subject}\", id \"{id}\""));
    centered_panel(ctx, 160.0, 400.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(error.user_message())
                    .size(18.0)
                    .color(Color32::RED),
            );
            if let Some(requested) = &requested {
                ui.label(RichText::new(requested).weak());
            }
            ui.add_space(16.0);
            volver = ui.button("⬅ Back to subjects").clicked();
        });
    });
    if volver {
        app.back_to_subjects();
    }
}

pub fn ui_load_failed(ctx: &Context, reason: &str) {
    centered_panel(ctx, 160.0, 500.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("❌ Could not load the question bank.")
                    .heading()
                    .color(Color32::RED),
            );
            ui.add_space(10.0);
            ui.label(reason);
        });
    });
}
