use crate::QuestApp;
use crate::ui::layout::centered_panel;
use egui::{Button, Context};

pub fn ui_speech_test(app: &mut QuestApp, ctx: &Context) {
    let mut speak = false;
    centered_panel(ctx, 200.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Click the button to test TTS");
            ui.add_space(20.0);
            speak = ui.add_sized([160.0, 40.0], Button::new("🔊 Speak")).clicked();
            if !app.message.is_empty() {
                ui.add_space(10.0);
                ui.label(&app.message);
            }
        });
    });
    if speak {
        app.speak_test_sentence();
    }
}
