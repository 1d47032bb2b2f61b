//! Footer rendering for `LandingApp`.

use chrono::Datelike;
use eframe::egui;

use diginex_landing::content::links::{CONTACT, FOOTER_COLUMNS, SOCIAL_LINKS};
use diginex_landing::render::grid_columns;
use diginex_landing::theme::Palette;

use super::LandingApp;
use crate::ui::{self, color32, faded};

const FOOTER_MAX_WIDTH: f32 = 1200.0;

impl LandingApp {
    pub fn draw_footer(&mut self, ui: &mut egui::Ui) {
        let palette = self.palette;
        let full = ui.available_width();
        let width = full.min(FOOTER_MAX_WIDTH) - 48.0;
        let side = (full - width) * 0.5;

        let top = ui.cursor().min.y;
        ui.painter().hline(
            ui.max_rect().x_range(),
            top,
            egui::Stroke::new(1.0, faded(palette.border, 0.5)),
        );

        ui.add_space(64.0);
        ui.horizontal(|ui| {
            ui.add_space(side);
            ui.vertical(|ui| {
                ui.set_width(width);

                // Brand and contact above the link columns on narrow windows,
                // beside them otherwise
                if grid_columns(full) >= 3 {
                    ui.columns(2, |cols| {
                        self.draw_footer_brand(&mut cols[0], &palette);
                        self.draw_footer_links(&mut cols[1], &palette, 4);
                    });
                } else {
                    self.draw_footer_brand(ui, &palette);
                    ui.add_space(32.0);
                    self.draw_footer_links(ui, &palette, 2);
                }

                ui.add_space(48.0);
                ui.separator();
                ui.add_space(16.0);
                draw_bottom_bar(ui, &palette);
            });
        });
        ui.add_space(32.0);
    }

    fn draw_footer_brand(&mut self, ui: &mut egui::Ui, palette: &Palette) {
        let (from, to) = palette.brand_gradient();
        ui.horizontal(|ui| {
            let (square, _) = ui.allocate_exact_size(egui::vec2(40.0, 40.0), egui::Sense::hover());
            ui.painter().rect_filled(square, 10.0, color32(from.lerp(to, 0.5)));
            ui.painter().text(
                square.center(),
                egui::Align2::CENTER_CENTER,
                "D",
                egui::FontId::proportional(20.0),
                egui::Color32::WHITE,
            );
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.add_space(12.0);
            ui.label(
                egui::RichText::new("DigiNex")
                    .size(22.0)
                    .strong()
                    .color(color32(palette.foreground)),
            );
            ui.label(ui::gradient_text("AI", 22.0, from, to));
        });
        ui.add_space(16.0);
        ui.set_max_width(360.0);
        ui.label(
            egui::RichText::new(
                "The world's first fusion-first AI ecosystem. Intelligence, orchestrated.",
            )
            .size(14.0)
            .color(color32(palette.muted_foreground)),
        );

        ui.add_space(20.0);
        if ui::nav_link(ui, palette, &format!("\u{2709}  {}", CONTACT.email), 14.0).clicked() {
            let url = format!("mailto:{}", CONTACT.email);
            ui.ctx().open_url(egui::OpenUrl::new_tab(url));
        }
        if ui::nav_link(ui, palette, &format!("\u{260E}  {}", CONTACT.phone), 14.0).clicked() {
            ui.ctx().open_url(egui::OpenUrl::new_tab(CONTACT.phone_href));
        }
        ui.label(
            egui::RichText::new(format!("\u{2316}  {}", CONTACT.location))
                .size(14.0)
                .color(color32(palette.muted_foreground)),
        );

        ui.add_space(20.0);
        ui.horizontal(|ui| {
            for link in SOCIAL_LINKS.iter() {
                let clicked = egui::Frame::none()
                    .fill(color32(palette.muted))
                    .rounding(8.0)
                    .inner_margin(egui::Margin::symmetric(10.0, 6.0))
                    .show(ui, |ui| ui::nav_link(ui, palette, link.name, 13.0).clicked())
                    .inner;
                if clicked {
                    self.follow_anchor(link.href);
                }
            }
        });
    }

    fn draw_footer_links(&mut self, ui: &mut egui::Ui, palette: &Palette, per_row: usize) {
        for chunk in FOOTER_COLUMNS.chunks(per_row) {
            ui.columns(per_row, |cols| {
                for (col, column) in chunk.iter().enumerate() {
                    let ui = &mut cols[col];
                    ui.label(
                        egui::RichText::new(column.title)
                            .size(15.0)
                            .strong()
                            .color(color32(palette.foreground)),
                    );
                    ui.add_space(12.0);
                    for link in column.links {
                        if ui::nav_link(ui, palette, link.name, 14.0).clicked() {
                            self.follow_anchor(link.href);
                        }
                    }
                }
            });
            ui.add_space(24.0);
        }
    }
}

fn draw_bottom_bar(ui: &mut egui::Ui, palette: &Palette) {
    ui.horizontal_wrapped(|ui| {
        ui.label(
            egui::RichText::new(copyright_line(chrono::Local::now().year()))
                .size(13.0)
                .color(color32(palette.muted_foreground)),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new("All systems operational")
                    .size(13.0)
                    .color(color32(palette.muted_foreground)),
            );
            let (dot, _) = ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
            ui.painter().circle_filled(dot.center(), 4.0, color32(palette.success));
        });
    });
}

fn copyright_line(year: i32) -> String {
    format!("\u{00A9} {} DigiNexAI. All rights reserved.", year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line(2026), "\u{00A9} 2026 DigiNexAI. All rights reserved.");
    }

    #[test]
    fn test_every_column_fits_a_row() {
        // Four columns on wide windows, two rows of two otherwise
        assert_eq!(FOOTER_COLUMNS.chunks(4).count(), 1);
        assert!(FOOTER_COLUMNS.chunks(2).all(|c| c.len() == 2));
    }
}
