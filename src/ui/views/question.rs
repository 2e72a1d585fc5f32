use crate::QuestApp;
use crate::code_utils::snippet_syntax;
use crate::ui::helpers::{scale_text_styles, section_title};
use crate::ui::layout::{code_editor_solution, scroll_panel};
use crate::ui::views::not_found::ui_not_found;
use egui::{Color32, Context, Frame, RichText};

#[derive(Default)]
struct Clicks {
    hint: Option<usize>,
    code: bool,
    read_aloud: bool,
    reset_zoom: bool,
}

pub fn ui_question(app: &mut QuestApp, ctx: &Context) {
    if let Some(error) = app.lookup_error().cloned() {
        ui_not_found(app, ctx, &error);
        return;
    }

    // Pellizco de este frame (sólo multitáctil)
    app.handle_zoom_delta(ctx.multi_touch().map(|touch| touch.zoom_delta));

    let max_width = app.config.ui.max_width;
    let mut clicks = Clicks::default();

    {
        let Some(view) = app.question_view() else {
            return;
        };
        let message = app.message.clone();

        scroll_panel(ctx, max_width, |ui| {
            ui.horizontal(|ui| {
                clicks.read_aloud = ui.button("🔊 Read aloud").clicked();
                clicks.reset_zoom = ui
                    .add_enabled(view.scale != 1.0, egui::Button::new("⟲ Reset zoom"))
                    .clicked();
                ui.label(RichText::new(format!("Zoom {:.0}%", view.scale * 100.0)).weak());
            });
            if !message.is_empty() {
                ui.label(RichText::new(&message).weak());
            }
            ui.separator();

            // La escala sólo cambia el tamaño del texto, nunca el ancho
            ui.scope(|ui| {
                scale_text_styles(ui, view.scale);
                let q = view.question;

                ui.label(RichText::new(&q.title).heading().strong());
                ui.label(RichText::new(view.difficulty_label()).color(Color32::GRAY));
                ui.add_space(8.0);
                ui.label(&q.description);

                if !q.examples.is_empty() {
                    section_title(ui, "🧪 Examples");
                    for ex in &q.examples {
                        Frame::group(ui.style()).show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.monospace(format!("👉 Input: {}", ex.input));
                            ui.monospace(format!("✅ Output: {}", ex.output));
                            if !ex.explanation.is_empty() {
                                ui.label(RichText::new(format!("📝 {}", ex.explanation)).italics());
                            }
                        });
                        ui.add_space(6.0);
                    }
                }

                if !q.hints.is_empty() {
                    section_title(ui, "💡 Hints");
                    for i in 0..q.hints.len() {
                        if ui.link(view.hint_label(i)).clicked() {
                            clicks.hint = Some(i);
                        }
                        if let Some(hint) = view.visible_hint(i) {
                            ui.label(hint);
                        }
                        ui.add_space(4.0);
                    }
                }

                if let Some(record) = view.solution {
                    section_title(ui, "🧠 Solution");
                    ui.label(&record.solution.approach);
                    if view.code_snippet().is_some() {
                        ui.add_space(6.0);
                        clicks.code = ui.button(view.code_toggle_label()).clicked();
                        if let Some(code) = view.visible_code() {
                            let width = ui.available_width();
                            code_editor_solution(
                                ui,
                                width,
                                14.0 * view.scale,
                                snippet_syntax(record.solution.language.as_deref()),
                                code,
                            );
                        }
                    }
                }
            });
        });
    }

    if let Some(i) = clicks.hint {
        app.toggle_hint(i);
    }
    if clicks.code {
        app.toggle_code();
    }
    if clicks.read_aloud {
        app.read_aloud();
    }
    if clicks.reset_zoom {
        app.reset_zoom();
    }
}
