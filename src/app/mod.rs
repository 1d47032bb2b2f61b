//! `LandingApp`: the top-level egui application state.
//!
//! This module declares the `LandingApp` struct, its constructor and the
//! `eframe::App` impl. Each page section is drawn by a sibling module:
//!
//! - `background`: animated network behind the hero
//! - `header`: logo, navigation, mobile menu
//! - `hero`: headline, calls to action, orbit
//! - `ecosystem`: platform card grid
//! - `modal`: platform details window
//! - `footer`: links, contact, copyright

pub mod background;
pub mod ecosystem;
pub mod footer;
pub mod header;
pub mod hero;
pub mod modal;

use std::collections::HashMap;
use std::time::Instant;

use eframe::egui;

use diginex_landing::config::LandingConfig;
use diginex_landing::content::{Section, PLATFORM_COUNT};
use diginex_landing::details::DetailsState;
use diginex_landing::render::OrbitLayout;
use diginex_landing::reveal::{transition_delay, RevealId, RevealKind, RevealObserver, RevealTarget};
use diginex_landing::theme::Palette;

use crate::ui;
use background::BackgroundView;

// ─── Reveal targets ──────────────────────────────────────────────────────────

pub const REVEAL_HERO_BADGE: RevealId = 1;
pub const REVEAL_HERO_HEADLINE: RevealId = 2;
pub const REVEAL_HERO_SUBHEADLINE: RevealId = 3;
pub const REVEAL_HERO_CTA: RevealId = 4;
pub const REVEAL_HERO_ORBIT: RevealId = 5;
pub const REVEAL_ECOSYSTEM_HEADER: RevealId = 10;
pub const REVEAL_ECOSYSTEM_CTA: RevealId = 11;
const REVEAL_CARD_BASE: RevealId = 100;

pub fn card_reveal_id(index: usize) -> RevealId {
    REVEAL_CARD_BASE + index as RevealId
}

fn hero_targets() -> Vec<RevealTarget> {
    [
        REVEAL_HERO_BADGE,
        REVEAL_HERO_HEADLINE,
        REVEAL_HERO_SUBHEADLINE,
        REVEAL_HERO_CTA,
        REVEAL_HERO_ORBIT,
    ]
    .iter()
    .enumerate()
    .map(|(i, &id)| RevealTarget::new(id, RevealKind::Up).with_delay(transition_delay(i)))
    .collect()
}

fn ecosystem_targets(cards: usize) -> Vec<RevealTarget> {
    let mut targets = vec![
        RevealTarget::new(REVEAL_ECOSYSTEM_HEADER, RevealKind::Up),
        RevealTarget::new(REVEAL_ECOSYSTEM_CTA, RevealKind::Up),
    ];
    targets.extend(
        (0..cards).map(|i| RevealTarget::new(card_reveal_id(i), RevealKind::Scale).with_delay(transition_delay(i))),
    );
    targets
}

// ─── Application state ───────────────────────────────────────────────────────

pub struct LandingApp {
    pub palette: Palette,
    pub background: BackgroundView,
    pub orbit: OrbitLayout,
    pub details: DetailsState,
    pub reveal: RevealObserver,
    pub mobile_menu_open: bool,
    /// Section to scroll to on the next frame
    pub pending_section: Option<Section>,
    /// Where each section was laid out this frame
    pub section_rects: HashMap<Section, egui::Rect>,
    pub app_start: Instant,
    pub last_frame_time: Instant,
}

impl LandingApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: LandingConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let mut reveal = RevealObserver::new(&config.reveal);
        reveal.attach(Some(hero_targets().as_slice()));
        reveal.attach(Some(ecosystem_targets(PLATFORM_COUNT).as_slice()));

        let now = Instant::now();
        Self {
            background: BackgroundView::new(&config.background),
            orbit: OrbitLayout::from(&config.orbit),
            palette: Palette::dark(),
            details: DetailsState::default(),
            reveal,
            mobile_menu_open: false,
            pending_section: None,
            section_rects: HashMap::new(),
            app_start: now,
            last_frame_time: now,
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.app_start.elapsed().as_secs_f32()
    }

    /// Follow an in-page anchor. Unknown anchors are logged and ignored.
    pub fn follow_anchor(&mut self, href: &str) {
        match Section::from_anchor(href) {
            Some(section) => {
                log::debug!("Anchor {} -> {:?}", href, section);
                self.pending_section = Some(section);
                self.mobile_menu_open = false;
            }
            None => log::info!("No section for anchor {}", href),
        }
    }

    /// Open the details modal for platform `index`.
    pub fn select_platform(&mut self, index: usize) {
        log::debug!("Selected platform {}", index);
        self.details.open_with(index);
    }

    /// Feed the reveal observer the on-screen rect of `id`.
    pub fn observe(&mut self, id: RevealId, rect: egui::Rect, viewport: egui::Rect) {
        let now = self.app_start.elapsed().as_secs_f64();
        self.reveal.check(id, ui::to_bounds(rect), ui::to_bounds(viewport), now);
    }

    /// Draw `add_contents` with the current reveal transition of `id`, then
    /// report where it landed.
    pub fn reveal_block(
        &mut self,
        ui: &mut egui::Ui,
        id: RevealId,
        kind: RevealKind,
        add_contents: impl FnOnce(&mut Self, &mut egui::Ui),
    ) {
        let now = self.app_start.elapsed().as_secs_f64();
        let style = self.reveal.style(id, now);
        let viewport = ui.clip_rect();
        let rect = ui::revealed(ui, kind, style, |ui| {
            add_contents(self, ui);
            ui.min_rect()
        });
        self.observe(id, rect, viewport);
    }

    fn draw_page(&mut self, ui: &mut egui::Ui) {
        let hero = ui.scope(|ui| self.draw_hero(ui)).response.rect;
        let ecosystem = ui.scope(|ui| self.draw_ecosystem(ui)).response.rect;
        let footer = ui.scope(|ui| self.draw_footer(ui)).response.rect;

        self.section_rects.insert(Section::Top, hero);
        self.section_rects.insert(Section::Ecosystem, ecosystem);
        self.section_rects.insert(Section::Footer, footer);

        if let Some(section) = self.pending_section.take() {
            if let Some(rect) = self.section_rects.get(&section) {
                ui.scroll_to_rect(*rect, Some(egui::Align::TOP));
            }
        }
    }
}

impl eframe::App for LandingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;

        self.background.track_pointer(ctx);
        self.background.advance(dt, self.elapsed());

        egui::TopBottomPanel::top("header")
            .exact_height(header::HEADER_HEIGHT)
            .frame(
                egui::Frame::none()
                    .fill(ui::faded(self.palette.background, 0.92))
                    .stroke(egui::Stroke::new(1.0, ui::faded(self.palette.border, 0.5))),
            )
            .show(ctx, |ui| {
                self.draw_header(ui);
            });

        if self.mobile_menu_open {
            egui::TopBottomPanel::top("mobile_menu")
                .frame(
                    egui::Frame::none()
                        .fill(ui::color32(self.palette.background))
                        .inner_margin(egui::Margin::symmetric(24.0, 16.0)),
                )
                .show(ctx, |ui| {
                    self.draw_mobile_menu(ui);
                });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(ui::color32(self.palette.background)))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.draw_page(ui);
                    });
            });

        self.draw_details_modal(ctx);

        // The background and the orbit never stop moving
        ctx.request_repaint();
    }
}
