//! Small egui helpers shared by every section.
//!
//! Stateless: colour conversion, gradient text, pill badges, reveal
//! wrappers and text utilities. Nothing here knows about `LandingApp`.

use eframe::egui;
use diginex_landing::render::layout::Bounds;
use diginex_landing::reveal::{RevealKind, RevealStyle};
use diginex_landing::theme::{Palette, Rgba};

// ─── Colour ───────────────────────────────────────────────────────────────────

pub fn color32(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

pub fn faded(c: Rgba, opacity: f32) -> egui::Color32 {
    color32(c.with_opacity(opacity))
}

pub fn to_bounds(rect: egui::Rect) -> Bounds {
    Bounds::new(rect.min.x, rect.min.y, rect.width(), rect.height())
}

// ─── Text ─────────────────────────────────────────────────────────────────────

/// `text` with its colour swept from `from` to `to` across the characters.
pub fn gradient_text(text: &str, size: f32, from: Rgba, to: Rgba) -> egui::text::LayoutJob {
    let mut job = egui::text::LayoutJob::default();
    let n = text.chars().count().max(2) - 1;
    for (i, ch) in text.chars().enumerate() {
        let mut buf = [0u8; 4];
        job.append(
            ch.encode_utf8(&mut buf),
            0.0,
            egui::TextFormat {
                font_id: egui::FontId::proportional(size),
                color: color32(from.lerp(to, i as f32 / n as f32)),
                ..Default::default()
            },
        );
    }
    job
}

/// Truncate `s` to at most `max_chars` Unicode scalar values, appending `"..."` if truncated.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let t: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", t)
    }
}

// ─── Widgets ──────────────────────────────────────────────────────────────────

/// Rounded pill with a coloured dot, e.g. a stats badge.
pub fn badge(ui: &mut egui::Ui, palette: &Palette, dot: Rgba, text: &str) {
    egui::Frame::none()
        .fill(faded(palette.muted, 0.8))
        .rounding(12.0)
        .inner_margin(egui::Margin::symmetric(10.0, 4.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(6.0, 6.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 3.0, color32(dot));
                ui.label(
                    egui::RichText::new(text)
                        .size(12.0)
                        .color(color32(palette.foreground)),
                );
            });
        });
}

/// Filled call-to-action button in the brand colours.
pub fn primary_button(ui: &mut egui::Ui, palette: &Palette, text: &str) -> egui::Response {
    ui.add(
        egui::Button::new(
            egui::RichText::new(text)
                .size(15.0)
                .strong()
                .color(color32(palette.background)),
        )
        .fill(color32(palette.primary))
        .rounding(8.0)
        .min_size(egui::vec2(0.0, 40.0)),
    )
}

/// Outlined call-to-action button.
pub fn outline_button(ui: &mut egui::Ui, palette: &Palette, text: &str) -> egui::Response {
    ui.add(
        egui::Button::new(
            egui::RichText::new(text)
                .size(15.0)
                .color(color32(palette.foreground)),
        )
        .fill(egui::Color32::TRANSPARENT)
        .stroke(egui::Stroke::new(1.0, color32(palette.border)))
        .rounding(8.0)
        .min_size(egui::vec2(0.0, 40.0)),
    )
}

/// Muted text link that brightens on hover.
pub fn nav_link(ui: &mut egui::Ui, palette: &Palette, text: &str, size: f32) -> egui::Response {
    let response = ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(size)
                .color(color32(palette.muted_foreground)),
        )
        .sense(egui::Sense::click()),
    );
    if response.hovered() {
        ui.painter().hline(
            response.rect.x_range(),
            response.rect.bottom(),
            egui::Stroke::new(1.0, faded(palette.primary, 0.6)),
        );
    }
    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Two-letter logo disc filled with a gradient colour.
pub fn monogram(painter: &egui::Painter, center: egui::Pos2, radius: f32, fill: Rgba, ring: Rgba, text: &str) {
    painter.circle_filled(center, radius, color32(fill));
    painter.circle_stroke(center, radius, egui::Stroke::new(2.0, faded(ring, 0.3)));
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(radius * 0.7),
        egui::Color32::WHITE,
    );
}

// ─── Reveal ───────────────────────────────────────────────────────────────────

/// Draw `add_contents` at the reveal `style`: faded, and shifted by the
/// slide offset. The slack around the block stays constant so the layout
/// below doesn't move while the transition runs.
pub fn revealed<R>(
    ui: &mut egui::Ui,
    kind: RevealKind,
    style: RevealStyle,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let slack = 30.0;
    let (dx, dy) = style.offset;
    // Scale shrinks the block inside a fixed outer box
    let max_inset = 5.0;
    let mut outer = 0.0;
    let margin = match kind {
        RevealKind::Up => egui::Margin {
            left: 0.0,
            right: 0.0,
            top: slack * 0.5 + dy * 0.5,
            bottom: slack * 0.5 - dy * 0.5,
        },
        RevealKind::Left | RevealKind::Right => egui::Margin {
            left: slack * 0.5 + dx * 0.5,
            right: slack * 0.5 - dx * 0.5,
            top: 0.0,
            bottom: 0.0,
        },
        RevealKind::Scale => {
            let inset = ((1.0 - style.scale) * 100.0).min(max_inset);
            outer = max_inset - inset;
            egui::Margin::same(inset)
        }
    };
    ui.scope(|ui| {
        ui.multiply_opacity(style.opacity);
        egui::Frame::none()
            .inner_margin(margin)
            .outer_margin(egui::Margin::same(outer))
            .show(ui, add_contents)
            .inner
    })
    .inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("DigiNexShield", 20), "DigiNexShield");
        assert_eq!(truncate_str("DigiNexShield", 8), "DigiN...");
    }

    #[test]
    fn test_gradient_text_sections() {
        let from = Rgba::rgb(0, 0, 0);
        let to = Rgba::rgb(255, 255, 255);
        let job = gradient_text("AI", 20.0, from, to);
        assert_eq!(job.text, "AI");
        assert_eq!(job.sections.len(), 2);
        assert_eq!(job.sections[0].format.color, color32(from));
        assert_eq!(job.sections[1].format.color, color32(to));
    }
}
