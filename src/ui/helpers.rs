// src/ui/helpers.rs
use egui::{Button, RichText, Ui, Vec2};

/// Tarjeta de pregunta en la lista: título y dificultad. Devuelve si se pulsó.
pub fn question_card(ui: &mut Ui, title: &str, difficulty: &str, width: f32) -> bool {
    let text = RichText::new(format!("{title}\n{difficulty}")).size(16.0);
    ui.add(Button::new(text).min_size(Vec2::new(width, 48.0)))
        .clicked()
}

/// Multiplica el tamaño de todos los estilos de texto de este `Ui`.
pub fn scale_text_styles(ui: &mut Ui, scale: f32) {
    for font in ui.style_mut().text_styles.values_mut() {
        font.size *= scale;
    }
}

pub fn section_title(ui: &mut Ui, title: &str) {
    ui.add_space(16.0);
    ui.label(RichText::new(title).heading().strong());
    ui.add_space(6.0);
}
