//! Ecosystem section rendering for `LandingApp`.
//!
//! Section header, the platform card grid (1, 2 or 3 columns by width) and
//! the closing call to action. Cards reveal with a staggered scale-in.

use eframe::egui;

use diginex_landing::content::{PlatformEntry, PLATFORMS};
use diginex_landing::render::{grid_columns, grid_rows};
use diginex_landing::reveal::RevealKind;
use diginex_landing::theme::Palette;

use super::{card_reveal_id, LandingApp, REVEAL_ECOSYSTEM_CTA, REVEAL_ECOSYSTEM_HEADER};
use crate::ui::{self, color32, faded};

const SECTION_PADDING: f32 = 96.0;
const CONTAINER_MAX_WIDTH: f32 = 1200.0;

impl LandingApp {
    pub fn draw_ecosystem(&mut self, ui: &mut egui::Ui) {
        let palette = self.palette;
        let full = ui.available_width();
        let width = full.min(CONTAINER_MAX_WIDTH) - 48.0;
        let side = (full - width) * 0.5;

        ui.add_space(SECTION_PADDING);
        ui.horizontal(|ui| {
            ui.add_space(side);
            ui.vertical(|ui| {
                ui.set_width(width);

                self.reveal_block(ui, REVEAL_ECOSYSTEM_HEADER, RevealKind::Up, |_, ui| {
                    ui.vertical_centered(|ui| {
                        draw_section_header(ui, &palette);
                    });
                });
                ui.add_space(48.0);

                let columns = grid_columns(full);
                for row in grid_rows(PLATFORMS.len(), columns) {
                    ui.columns(columns, |cols| {
                        for (col, index) in row.clone().enumerate() {
                            let entry = &PLATFORMS[index];
                            let id = card_reveal_id(index);
                            self.reveal_block(&mut cols[col], id, RevealKind::Scale, |app, ui| {
                                if draw_card(ui, &palette, entry).clicked() {
                                    app.select_platform(index);
                                }
                            });
                        }
                    });
                    ui.add_space(8.0);
                }

                ui.add_space(40.0);
                self.reveal_block(ui, REVEAL_ECOSYSTEM_CTA, RevealKind::Up, |app, ui| {
                    ui.vertical_centered(|ui| {
                        if ui::outline_button(ui, &palette, "Explore Full Ecosystem  \u{2192}").clicked() {
                            app.follow_anchor("#ecosystem");
                        }
                    });
                });
            });
        });
        ui.add_space(SECTION_PADDING);
    }
}

fn draw_section_header(ui: &mut egui::Ui, palette: &Palette) {
    egui::Frame::none()
        .fill(color32(palette.muted))
        .rounding(12.0)
        .inner_margin(egui::Margin::symmetric(16.0, 4.0))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new("The Complete Ecosystem")
                    .size(13.0)
                    .color(color32(palette.muted_foreground)),
            );
        });
    ui.add_space(16.0);
    ui.horizontal_wrapped(|ui| {
        ui.label(
            egui::RichText::new("Six Platforms. ")
                .size(44.0)
                .strong()
                .color(color32(palette.foreground)),
        );
        let (from, to) = palette.brand_gradient();
        ui.label(ui::gradient_text("One Ecosystem.", 44.0, from, to));
    });
    ui.add_space(16.0);
    ui.set_max_width(760.0);
    ui.label(
        egui::RichText::new(
            "Each platform is powerful alone. Together, they create the most comprehensive \
             digital transformation suite ever built.",
        )
        .size(18.0)
        .color(color32(palette.muted_foreground)),
    );
}

/// One platform card; the whole card is clickable.
fn draw_card(ui: &mut egui::Ui, palette: &Palette, entry: &PlatformEntry) -> egui::Response {
    let (from, to) = entry.gradient.stops();
    let inner = egui::Frame::none()
        .fill(faded(palette.card, 0.5))
        .stroke(egui::Stroke::new(1.0, color32(palette.border)))
        .rounding(16.0)
        .inner_margin(egui::Margin::same(24.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            let (logo, _) = ui.allocate_exact_size(egui::vec2(64.0, 64.0), egui::Sense::hover());
            ui.painter().rect_filled(logo, 12.0, color32(from.lerp(to, 0.5)));
            ui.painter()
                .rect_stroke(logo, 12.0, egui::Stroke::new(1.0, faded(palette.primary, 0.3)));
            ui.painter().text(
                logo.center(),
                egui::Align2::CENTER_CENTER,
                entry.logo.monogram,
                egui::FontId::proportional(24.0),
                egui::Color32::WHITE,
            );
            ui.add_space(12.0);

            ui.label(
                egui::RichText::new(entry.full_name)
                    .size(20.0)
                    .strong()
                    .color(color32(palette.foreground)),
            );
            ui.label(
                egui::RichText::new(entry.tagline)
                    .size(14.0)
                    .color(color32(palette.primary)),
            );
            ui.add_space(12.0);
            ui.label(
                egui::RichText::new(entry.description)
                    .size(14.0)
                    .color(color32(palette.muted_foreground)),
            );
            ui.add_space(12.0);
            ui::badge(ui, palette, palette.primary, entry.stats);
            ui.add_space(12.0);
            ui.label(
                egui::RichText::new("Learn more \u{2192}")
                    .size(14.0)
                    .strong()
                    .color(color32(palette.primary)),
            );
        });

    let response = inner
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    if response.hovered() {
        // Gradient wash and primary border on hover
        ui.painter()
            .rect_filled(response.rect, 16.0, faded(from.lerp(to, 0.5), 0.05));
        ui.painter()
            .rect_stroke(response.rect, 16.0, egui::Stroke::new(1.0, faded(palette.primary, 0.5)));
    }
    response
}
