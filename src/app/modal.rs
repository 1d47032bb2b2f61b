//! Details modal for the selected platform.

use eframe::egui;

use diginex_landing::content::PLATFORMS;
use diginex_landing::details::DetailsContent;
use diginex_landing::theme::Palette;

use super::LandingApp;
use crate::ui::{self, color32, faded};

impl LandingApp {
    pub fn draw_details_modal(&mut self, ctx: &egui::Context) {
        let Some(content) = self.details.view(&PLATFORMS).render() else {
            return;
        };
        let palette = self.palette;

        // Dim the page behind the window
        let screen = ctx.screen_rect();
        egui::Area::new(egui::Id::new("details_backdrop"))
            .fixed_pos(screen.min)
            .order(egui::Order::Middle)
            .show(ctx, |ui| {
                let response = ui.allocate_rect(screen, egui::Sense::click());
                ui.painter().rect_filled(screen, 0.0, faded(palette.background, 0.8));
                if response.clicked() {
                    self.details.close();
                }
            });

        let mut open = self.details.is_open();
        let mut close_clicked = false;
        let mut explore = None;
        egui::Window::new(content.title)
            .id(egui::Id::new("details_modal"))
            .open(&mut open)
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(520.0)
            .frame(
                egui::Frame::window(&ctx.style())
                    .fill(color32(palette.card))
                    .stroke(egui::Stroke::new(1.0, color32(palette.border)))
                    .inner_margin(egui::Margin::same(24.0)),
            )
            .show(ctx, |ui| {
                draw_details(ui, &palette, &content);
                ui.add_space(16.0);
                ui.horizontal(|ui| {
                    if ui::primary_button(ui, &palette, &content.cta_label).clicked() {
                        explore = Some(content.href);
                    }
                    if ui::outline_button(ui, &palette, "Close").clicked() {
                        close_clicked = true;
                    }
                });
            });

        if !open || close_clicked || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.details.close();
        }
        if let Some(href) = explore {
            self.details.close();
            self.follow_anchor(href);
        }
    }
}

fn draw_details(ui: &mut egui::Ui, palette: &Palette, content: &DetailsContent) {
    ui.horizontal(|ui| {
        let (logo, _) = ui.allocate_exact_size(egui::vec2(56.0, 56.0), egui::Sense::hover());
        ui::monogram(ui.painter(), logo.center(), 28.0, palette.muted, palette.primary, content.monogram);
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(content.tagline)
                    .size(15.0)
                    .color(color32(palette.primary)),
            );
            ui::badge(ui, palette, palette.success, content.stats);
        });
    });
    ui.add_space(12.0);
    ui.label(
        egui::RichText::new(content.description)
            .size(15.0)
            .color(color32(palette.muted_foreground)),
    );
    ui.add_space(16.0);
    ui.label(
        egui::RichText::new("Key Features")
            .size(16.0)
            .strong()
            .color(color32(palette.foreground)),
    );
    for feature in &content.features {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("\u{2022}").color(color32(palette.primary)));
            ui.label(egui::RichText::new(*feature).color(color32(palette.foreground)));
        });
    }
}
