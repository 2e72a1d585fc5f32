use crate::app::QuestApp;
use crate::model::AppState;
use egui::{CentralPanel, Context, Frame, ScrollArea, Ui, Visuals};
use egui_code_editor::{CodeEditor, ColorTheme, Syntax};

pub fn top_panel(app: &mut QuestApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        let state = app.state.clone();
        ui.horizontal_centered(|ui| {
            match state {
                AppState::Subjects => {
                    ui.strong("QuestCode");
                    if ui.button("🔊 Speech test").clicked() {
                        app.open_speech_test();
                    }
                }
                AppState::Question | AppState::SpeechTest => {
                    if ui.button("⬅ Subjects").clicked() {
                        app.back_to_subjects();
                        ctx.request_repaint();
                    }
                }
                AppState::LoadFailed(_) => {}
            }
        });
    });
}

pub fn bottom_panel(app: &mut QuestApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui.button("🌙 Dark mode").clicked() {
                    app.set_dark_mode(true);
                    apply_theme(ctx, true);
                }
                if ui.button("☀ Light mode").clicked() {
                    app.set_dark_mode(false);
                    apply_theme(ctx, false);
                }
            }
        );

    });
}

pub fn apply_theme(ctx: &Context, dark: bool) {
    ctx.set_visuals(if dark { Visuals::dark() } else { Visuals::light() });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                inner(ui);
            });
        ui.add_space(extra);
    });
}

/// Panel con scroll vertical y ancho máximo, para listas y preguntas largas.
pub fn scroll_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let w = ui.available_width().min(max_width);
        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    Frame::default()
                        .fill(ui.visuals().window_fill())
                        .inner_margin(egui::Margin::symmetric(16, 16))
                        .show(ui, |ui| {
                            ui.set_width(w);
                            ui.with_layout(egui::Layout::top_down(egui::Align::Min), inner);
                        });
                });
            });
    });
}

/// Editor de sólo lectura (solución) con ancho fijo
pub fn code_editor_solution(
    ui: &mut Ui,
    width: f32,
    fontsize: f32,
    syntax: Syntax,
    code: &str,
) {
    let mut buf = code.to_owned();
    let rows = code.lines().count().max(1);
    ui.scope(|ui| {
        ui.set_width(width);
        CodeEditor::default()
            .id_source("solution")
            .with_rows(rows)
            .with_fontsize(fontsize)
            .with_theme(ColorTheme::GITHUB_DARK)
            .with_syntax(syntax)
            .with_numlines(true)
            .vscroll(false)
            .show(ui, &mut buf);
    });
}
