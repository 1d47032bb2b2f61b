//! Hero background: owns the scene, the animator and the pointer tracker,
//! and paints one frame of the network into a rect.
//!
//! Dropping the view releases the pointer subscription.

use eframe::egui;

use diginex_landing::config::BackgroundConfig;
use diginex_landing::input::{pointer_context, PointerReader, PointerTracker};
use diginex_landing::render::animator::star_opacity;
use diginex_landing::render::{
    generate, AnimParams, Animator, Camera, Euler, FrameInput, FrameTransform, SceneParams, SceneTopology,
};
use diginex_landing::theme::{Palette, Rgba};

use crate::ui::{faded, to_bounds};

const NODE_COLOR: Rgba = Rgba::rgb(0x22, 0xd3, 0xee);
const EDGE_COLOR: Rgba = Rgba::rgb(0x06, 0xb6, 0xd4);
const RING_COLOR: Rgba = Rgba::rgb(0x8b, 0x5c, 0xf6);
const RING_SEGMENTS: usize = 96;

pub struct BackgroundView {
    topology: SceneTopology,
    animator: Animator,
    camera: Camera,
    tracker: PointerTracker,
    pointer: PointerReader,
    frame: Option<FrameTransform>,
}

impl BackgroundView {
    pub fn new(config: &BackgroundConfig) -> Self {
        let topology = generate(&SceneParams::from(config));
        let (writer, pointer) = pointer_context();
        Self {
            topology,
            animator: Animator::new(AnimParams::from(config)),
            camera: Camera::default(),
            tracker: PointerTracker::subscribe(writer),
            pointer,
            frame: None,
        }
    }

    /// Forward this frame's pointer movement to the tracker.
    pub fn track_pointer(&mut self, ctx: &egui::Context) {
        let (moving, pos, screen) = ctx.input(|i| (i.pointer.is_moving(), i.pointer.latest_pos(), i.screen_rect()));
        if let (true, Some(pos)) = (moving, pos) {
            self.tracker.on_move(pos.x, pos.y, to_bounds(screen));
        }
    }

    pub fn advance(&mut self, dt: f32, elapsed: f32) {
        let input = FrameInput {
            dt,
            elapsed,
            pointer: self.pointer.get(),
        };
        self.frame = Some(self.animator.update(&self.topology, input));
    }

    pub fn paint(&self, painter: &egui::Painter, rect: egui::Rect, palette: &Palette) {
        let Some(frame) = &self.frame else {
            return;
        };
        let viewport = to_bounds(rect);
        let project = |p: [f32; 3]| {
            self.camera
                .project(p, viewport)
                .map(|q| (egui::pos2(q.x, q.y), q))
        };

        // ── Stars ────────────────────────────────────────────────────────────
        for star in &self.topology.stars {
            if let Some((pos, _)) = project(star.position) {
                if rect.contains(pos) {
                    let alpha = star_opacity(star, frame.elapsed) * 0.6;
                    painter.circle_filled(pos, 0.8, faded(palette.foreground, alpha));
                }
            }
        }

        // ── Data rings ───────────────────────────────────────────────────────
        for ring in &self.topology.rings {
            let spin = Euler::new(0.0, 0.0, ring.base_rotation + frame.ring_rotation);
            let points: Vec<egui::Pos2> = (0..=RING_SEGMENTS)
                .filter_map(|i| {
                    let a = i as f32 / RING_SEGMENTS as f32 * std::f32::consts::TAU;
                    let p = spin.apply([ring.radius * a.cos(), ring.radius * a.sin(), 0.0]);
                    project(p).map(|(pos, _)| pos)
                })
                .collect();
            painter.extend(egui::Shape::dashed_line(
                &points,
                egui::Stroke::new(1.0, faded(RING_COLOR, 0.15)),
                14.0,
                6.0,
            ));
        }

        // ── Network ──────────────────────────────────────────────────────────
        let nodes: Vec<Option<(egui::Pos2, f32)>> = self
            .topology
            .nodes
            .iter()
            .map(|n| {
                let p = frame.group_rotation.then_apply(&frame.node_spin, n.to_array());
                project(p).map(|(pos, q)| (pos, q.scale))
            })
            .collect();

        let edge_stroke = egui::Stroke::new(1.0, faded(EDGE_COLOR, 0.2));
        for edge in &self.topology.edges {
            if let (Some((a, _)), Some((b, _))) = (nodes[edge.from], nodes[edge.to]) {
                painter.line_segment([a, b], edge_stroke);
            }
        }
        for (pos, scale) in nodes.iter().flatten() {
            painter.circle_filled(*pos, (0.075 * scale).max(1.0), faded(NODE_COLOR, 0.8));
        }

        // ── Orbs ─────────────────────────────────────────────────────────────
        for (orb, center) in self.topology.orbs.iter().zip(&frame.orb_positions) {
            let Some((pos, q)) = project(*center) else {
                continue;
            };
            let radius = orb.scale * q.scale;
            let stroke = egui::Stroke::new(1.0, faded(orb.color, 0.6));
            painter.circle_stroke(pos, radius, stroke);
            // Wireframe facets, turning with the orb
            for k in 0..3 {
                let a = frame.orb_spin + k as f32 * std::f32::consts::TAU / 3.0;
                let d = egui::vec2(a.cos(), a.sin()) * radius;
                painter.line_segment([pos - d, pos + d], egui::Stroke::new(0.6, faded(orb.color, 0.35)));
            }
        }

        // Readability overlay: darker at the top and bottom edges
        let bg = palette.background;
        let band = rect.height() * 0.25;
        let top = egui::Rect::from_min_max(rect.min, egui::pos2(rect.max.x, rect.min.y + band));
        let bottom = egui::Rect::from_min_max(egui::pos2(rect.min.x, rect.max.y - band), rect.max);
        painter.rect_filled(rect, 0.0, faded(bg, 0.45));
        painter.rect_filled(top, 0.0, faded(bg, 0.35));
        painter.rect_filled(bottom, 0.0, faded(bg, 0.5));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> BackgroundView {
        BackgroundView::new(&BackgroundConfig {
            seed: Some(7),
            ..BackgroundConfig::default()
        })
    }

    #[test]
    fn test_advance_produces_frame() {
        let mut view = view();
        assert!(view.frame.is_none());
        view.advance(1.0 / 60.0, 0.5);
        let frame = view.frame.as_ref().expect("frame after advance");
        assert_eq!(frame.orb_positions.len(), view.topology.orbs.len());
    }

    #[test]
    fn test_drop_releases_pointer() {
        let view = view();
        assert!(view.tracker.is_subscribed());
        let reader = view.pointer.clone();
        drop(view);
        // The reader outlives the view and still sees the last value
        assert_eq!(reader.get(), diginex_landing::input::PointerState::CENTER);
    }
}
