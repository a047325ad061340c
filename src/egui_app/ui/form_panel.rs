use super::EguiApp;
use super::style;
use crate::egui_app::state::MISSING_FIELD_MESSAGE;
use crate::egui_app::view_model::{self, ResultTone, ResultView};
use crate::prediction::FormField;
use eframe::egui::{self, RichText, Stroke};

const FIELD_WIDTH: f32 = 180.0;

impl EguiApp {
    pub(super) fn render_form_panel(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.heading(RichText::new("Student Performance Predictor").strong());
            ui.add_space(16.0);
        });

        let mut submit_requested = false;
        egui::Grid::new("prediction_form")
            .num_columns(2)
            .spacing([12.0, 10.0])
            .show(ui, |ui| {
                for field in FormField::ALL {
                    ui.label(format!("{}:", field.label()));
                    submit_requested |= self.render_field_input(ui, field);
                    ui.end_row();
                }
            });

        if self.controller.ui.prediction.missing_field.is_some() {
            ui.add_space(4.0);
            ui.label(RichText::new(MISSING_FIELD_MESSAGE).color(palette.warning));
        }

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            let caption = view_model::submit_caption(&self.controller.ui.prediction.lifecycle);
            let predict = ui.add_enabled(
                self.controller.can_submit(),
                egui::Button::new(RichText::new(caption).strong())
                    .min_size(egui::vec2(120.0, 28.0)),
            );
            if predict.clicked() {
                submit_requested = true;
            }
            if ui
                .add(egui::Button::new("Clear").min_size(egui::vec2(80.0, 28.0)))
                .clicked()
            {
                self.controller.reset_form();
            }
            if self.controller.ui.prediction.lifecycle.is_submitting() {
                ui.spinner();
            }
        });

        if submit_requested {
            self.controller.submit_prediction();
        }

        if let Some(view) = view_model::result_view(&self.controller.ui.prediction.lifecycle) {
            ui.add_space(16.0);
            render_result_card(ui, &view);
        }
    }

    /// Draw one input; returns true when Enter was pressed inside it.
    fn render_field_input(&mut self, ui: &mut egui::Ui, field: FormField) -> bool {
        let missing = self.controller.ui.prediction.missing_field == Some(field);
        let mut text = self.controller.ui.prediction.form.value(field).to_string();
        let mut edit = egui::TextEdit::singleline(&mut text)
            .id_salt(field.key())
            .desired_width(FIELD_WIDTH);
        if missing {
            edit = edit.background_color(style::palette().warning.gamma_multiply(0.25));
        }
        let response = ui.add(edit);
        if response.changed() {
            self.controller.update_field(field, text);
        }
        if self.controller.ui.prediction.focus_requested == Some(field) {
            response.request_focus();
            self.controller.ui.prediction.focus_requested = None;
        }
        response.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter))
    }
}

fn render_result_card(ui: &mut egui::Ui, view: &ResultView) {
    let (accent, fill) = match view.tone {
        ResultTone::Pass => style::result_colors(true),
        ResultTone::Fail => style::result_colors(false),
        ResultTone::Error => {
            let warning = style::palette().warning;
            (warning, warning.gamma_multiply(0.18))
        }
    };
    egui::Frame::new()
        .fill(fill)
        .stroke(Stroke::new(1.5, accent))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new(view.heading()).size(20.0).strong().color(accent));
            if let Some(confidence) = &view.confidence {
                ui.label(
                    RichText::new(format!("Confidence: {confidence}"))
                        .color(style::palette().text_primary),
                );
            }
        });
}
