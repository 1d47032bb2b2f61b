//! Hero section rendering for `LandingApp`.
//!
//! The animated background is painted first, then the badge, headline,
//! calls to action and the orbit visualization are laid out on top.

use eframe::egui;

use diginex_landing::content::PLATFORMS;
use diginex_landing::render::orbit::{to_percent, to_pixels};
use diginex_landing::render::Breakpoint;
use diginex_landing::reveal::RevealKind;
use diginex_landing::theme::Palette;

use super::{
    LandingApp, REVEAL_HERO_BADGE, REVEAL_HERO_CTA, REVEAL_HERO_HEADLINE, REVEAL_HERO_ORBIT,
    REVEAL_HERO_SUBHEADLINE,
};
use crate::ui::{self, color32, faded};

const HERO_MIN_HEIGHT: f32 = 960.0;
const ORBIT_MAX_SIZE: f32 = 400.0;
/// Hub disc radius, percent of the orbit size
const HUB_RADIUS_PCT: f32 = 12.0;

impl LandingApp {
    pub fn draw_hero(&mut self, ui: &mut egui::Ui) {
        let width = ui.available_width();
        let height = ui.clip_rect().height().max(HERO_MIN_HEIGHT);
        let rect = egui::Rect::from_min_size(ui.cursor().min, egui::vec2(width, height));

        self.background.paint(&ui.painter_at(rect), rect, &self.palette);

        ui.allocate_new_ui(egui::UiBuilder::new().max_rect(rect), |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(64.0);
                self.draw_hero_copy(ui, width);
                ui.add_space(48.0);
                self.reveal_block(ui, REVEAL_HERO_ORBIT, RevealKind::Up, |app, ui| {
                    app.draw_orbit(ui);
                });
            });
        });
        self.draw_scroll_indicator(ui, rect);
        ui.advance_cursor_after_rect(rect);
    }

    fn draw_hero_copy(&mut self, ui: &mut egui::Ui, width: f32) {
        let palette = self.palette;
        let headline_size = match Breakpoint::from_width(width) {
            Breakpoint::Large => 80.0,
            Breakpoint::Medium => 64.0,
            Breakpoint::Small => 44.0,
        };

        self.reveal_block(ui, REVEAL_HERO_BADGE, RevealKind::Up, |_, ui| {
            ui::badge(
                ui,
                &palette,
                palette.accent,
                "Trusted by Fortune 500 companies across 50+ countries",
            );
        });

        self.reveal_block(ui, REVEAL_HERO_HEADLINE, RevealKind::Up, |_, ui| {
            ui.label(
                egui::RichText::new("Intelligence,")
                    .size(headline_size)
                    .strong()
                    .color(color32(palette.foreground)),
            );
            let (from, to) = palette.brand_gradient();
            ui.label(ui::gradient_text("Orchestrated.", headline_size, from, to));
        });

        self.reveal_block(ui, REVEAL_HERO_SUBHEADLINE, RevealKind::Up, |_, ui| {
            ui.set_max_width(672.0_f32.min(width - 48.0));
            ui.label(
                egui::RichText::new(
                    "The world's first fusion-first AI ecosystem. Six specialized platforms \
                     working as one unified operating system for digital transformation.",
                )
                .size(18.0)
                .color(color32(palette.muted_foreground)),
            );
        });

        self.reveal_block(ui, REVEAL_HERO_CTA, RevealKind::Up, |app, ui| {
            ui.horizontal_wrapped(|ui| {
                // Center the pair of buttons
                let pair = 2.0 * 200.0 + ui.spacing().item_spacing.x;
                ui.add_space(((ui.available_width() - pair) * 0.5).max(0.0));
                if ui::primary_button(ui, &palette, "Explore Ecosystem  \u{2192}").clicked() {
                    app.follow_anchor("#ecosystem");
                }
                if ui::outline_button(ui, &palette, "\u{25B6}  Watch Demo").clicked() {
                    log::info!("Demo video is not bundled with the desktop page");
                }
            });
        });
    }

    /// Six logos circling the hub; clicking one opens its details.
    fn draw_orbit(&mut self, ui: &mut egui::Ui) {
        let size = ORBIT_MAX_SIZE.min(ui.available_width() - 48.0).max(160.0);
        let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());
        let container = ui::to_bounds(rect);
        let painter = ui.painter_at(rect.expand(24.0));
        let palette = self.palette;
        let elapsed = self.elapsed();
        let orbit = self.orbit;
        let px = |pct: (f32, f32)| {
            let (x, y) = to_pixels(pct, container);
            egui::pos2(x, y)
        };

        // Orbit rings
        let center = rect.center();
        for (inset, alpha) in [(0.0, 0.5), (16.0, 0.3), (32.0, 0.2)] {
            painter.circle_stroke(
                center,
                size * 0.5 - inset,
                egui::Stroke::new(1.0, faded(palette.border, alpha)),
            );
        }

        // Spokes to each resting position
        let (line_from, line_to) = palette.brand_gradient();
        for entry in PLATFORMS.iter() {
            let end = px(orbit.base_position(entry.angle_degrees));
            painter.extend(egui::Shape::dashed_line(
                &[center, end],
                egui::Stroke::new(1.0, faded(line_from.lerp(line_to, 0.5), 0.3)),
                size * 0.02,
                size * 0.02,
            ));
        }

        // Hub
        let hub_radius = size * HUB_RADIUS_PCT / 100.0;
        let pulse = 0.5 + 0.5 * (elapsed * 2.0).sin();
        for k in 1..=4 {
            let glow = line_from.lerp(line_to, k as f32 / 4.0);
            painter.circle_filled(
                center,
                hub_radius + k as f32 * 6.0,
                faded(glow, 0.06 + 0.04 * pulse),
            );
        }
        ui::monogram(&painter, center, hub_radius, palette.card, palette.primary, "DN");

        // Items
        let hovered = response
            .hover_pos()
            .and_then(|p| orbit.hit_test(&PLATFORMS, elapsed, to_percent((p.x, p.y), container)));
        let item_radius = size * orbit.item_radius_pct / 100.0;
        for item in orbit.layout(&PLATFORMS, elapsed) {
            let entry = &PLATFORMS[item.index];
            let pos = px(item.center_pct);
            let grow = if hovered == Some(item.index) { 1.25 } else { 1.0 };
            let (from, to) = entry.gradient.stops();
            painter.circle_filled(pos, item_radius * grow + 6.0, faded(palette.primary, 0.12));
            ui::monogram(&painter, pos, item_radius * grow, from.lerp(to, 0.5), palette.primary, entry.logo.monogram);
        }

        if let Some(index) = hovered {
            let entry = &PLATFORMS[index];
            let pos = px(orbit.item(index, entry, elapsed).center_pct);
            draw_tooltip(
                &painter,
                &palette,
                pos + egui::vec2(0.0, item_radius * 1.25 + 8.0),
                entry.full_name,
            );
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        if response.clicked() {
            if let Some(index) = hovered {
                self.select_platform(index);
            }
        }
    }

    fn draw_scroll_indicator(&self, ui: &egui::Ui, hero: egui::Rect) {
        let painter = ui.painter_at(hero);
        let palette = &self.palette;
        let base = egui::pos2(hero.center().x, hero.bottom() - 32.0);
        painter.text(
            base - egui::vec2(0.0, 60.0),
            egui::Align2::CENTER_CENTER,
            "Scroll to explore",
            egui::FontId::proportional(12.0),
            color32(palette.muted_foreground),
        );
        let capsule = egui::Rect::from_center_size(base - egui::vec2(0.0, 24.0), egui::vec2(24.0, 48.0));
        painter.rect_stroke(capsule, 12.0, egui::Stroke::new(2.0, faded(palette.muted_foreground, 0.3)));
        let bounce = (self.elapsed() * std::f32::consts::PI).sin().abs();
        let dot = egui::pos2(capsule.center().x, capsule.top() + 8.0 + bounce * 20.0);
        painter.circle_filled(dot, 4.0, color32(palette.accent));
    }
}

fn draw_tooltip(painter: &egui::Painter, palette: &Palette, top: egui::Pos2, text: &str) {
    let galley = painter.layout_no_wrap(
        text.to_string(),
        egui::FontId::proportional(12.0),
        color32(palette.foreground),
    );
    let rect = egui::Rect::from_min_size(
        top - egui::vec2(galley.size().x * 0.5 + 12.0, 0.0),
        galley.size() + egui::vec2(24.0, 12.0),
    );
    painter.rect_filled(rect, 8.0, color32(palette.muted));
    painter.galley(rect.min + egui::vec2(12.0, 6.0), galley, color32(palette.foreground));
}
