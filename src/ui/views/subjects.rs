use crate::QuestApp;
use crate::ui::helpers::{question_card, section_title};
use crate::ui::layout::scroll_panel;
use egui::{Context, RichText};

pub fn ui_subjects(app: &mut QuestApp, ctx: &Context) {
    let max_width = app.config.ui.max_width;
    let infos = app.subject_infos();
    let mut selected: Option<(String, String)> = None;

    scroll_panel(ctx, max_width, |ui| {
        ui.heading("Select a Question");
        ui.add_space(8.0);

        if infos.is_empty() {
            ui.label("No questions available.");
        }

        let card_w = ui.available_width();
        for info in &infos {
            section_title(ui, &info.heading());
            for card in &info.cards {
                if question_card(ui, &card.title, &card.difficulty, card_w) {
                    selected = Some((info.name.clone(), card.id_param()));
                }
                ui.add_space(6.0);
            }
        }

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(RichText::new(&app.message).weak());
        }
    });

    // Navegación fuera del closure para no mantener el borrow
    if let Some((subject, id)) = selected {
        app.open_question(&subject, &id);
    }
}
