use super::EguiApp;
use super::style::{self, StatusTone};
use crate::prediction::ServiceHealth;
use eframe::egui::{self, Frame, RichText};

impl EguiApp {
    pub(super) fn render_status_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                if self.controller.ui.show_status_log {
                    egui::ScrollArea::vertical()
                        .max_height(120.0)
                        .stick_to_bottom(true)
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(self.controller.ui.status.log_text())
                                    .monospace()
                                    .color(palette.text_muted),
                            );
                        });
                    ui.separator();
                }
                ui.horizontal(|ui| {
                    let status = &self.controller.ui.status;
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                    ui.painter()
                        .circle_filled(rect.center(), 6.0, status.badge_color);
                    ui.label(RichText::new(status.badge_label.as_str()).strong());
                    ui.separator();
                    ui.label(status.text.as_str());

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("Log").clicked() {
                            self.controller.toggle_status_log();
                        }
                        if ui.small_button("Check").clicked() {
                            self.controller.check_service_health();
                        }
                        let service = &self.controller.ui.service;
                        let tone = health_tone(&service.health);
                        let mut badge = ui.label(
                            RichText::new(service.health.badge_label())
                                .color(style::status_badge_color(tone)),
                        );
                        if let ServiceHealth::Offline(reason) = &service.health {
                            badge = badge.on_hover_text(reason.as_str());
                        }
                        badge.on_hover_text(service.predict_url.as_str());
                    });
                });
            });
    }
}

fn health_tone(health: &ServiceHealth) -> StatusTone {
    match health {
        ServiceHealth::Unknown => StatusTone::Idle,
        ServiceHealth::Checking => StatusTone::Busy,
        ServiceHealth::Online => StatusTone::Info,
        ServiceHealth::Offline(_) => StatusTone::Error,
    }
}
