//! Header rendering for `LandingApp`.
//!
//! Wordmark, the "Ecosystem" dropdown, nav links and the two actions. Below
//! the `lg` breakpoint everything folds into a toggled mobile menu.

use eframe::egui;

use diginex_landing::content::links::{ECOSYSTEM_MENU, NAV_ITEMS};
use diginex_landing::content::PLATFORMS;
use diginex_landing::render::Breakpoint;

use super::LandingApp;
use crate::ui;

pub const HEADER_HEIGHT: f32 = 80.0;

impl LandingApp {
    fn draw_wordmark(&mut self, ui: &mut egui::Ui) {
        let (from, to) = self.palette.brand_gradient();
        let response = ui
            .horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                ui.label(
                    egui::RichText::new("DigiNex")
                        .size(22.0)
                        .strong()
                        .color(ui::color32(self.palette.foreground)),
                );
                ui.label(ui::gradient_text("AI", 22.0, from, to));
            })
            .response
            .interact(egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        if response.clicked() {
            self.follow_anchor("/");
        }
    }

    /// Render the top header strip.
    pub fn draw_header(&mut self, ui: &mut egui::Ui) {
        let breakpoint = Breakpoint::from_width(ui.ctx().screen_rect().width());
        if breakpoint.shows_desktop_nav() && self.mobile_menu_open {
            self.mobile_menu_open = false;
        }

        ui.horizontal_centered(|ui| {
            ui.add_space(24.0);
            self.draw_wordmark(ui);

            if breakpoint.shows_desktop_nav() {
                ui.add_space(32.0);
                self.draw_ecosystem_menu(ui);
                for item in NAV_ITEMS.iter() {
                    ui.add_space(8.0);
                    if ui::nav_link(ui, &self.palette, item.name, 14.0).clicked() {
                        self.follow_anchor(item.href);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(24.0);
                    if ui::primary_button(ui, &self.palette, "Schedule Demo").clicked() {
                        self.follow_anchor("#contact");
                    }
                    if ui::nav_link(ui, &self.palette, "Sign In", 14.0).clicked() {
                        log::info!("Sign in is not available on the landing page");
                    }
                });
            } else {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(24.0);
                    let icon = if self.mobile_menu_open { "Close" } else { "Menu" };
                    let toggle = ui
                        .add(egui::Button::new(egui::RichText::new(icon).size(15.0)).frame(false))
                        .on_hover_text("Toggle menu");
                    if toggle.clicked() {
                        self.mobile_menu_open = !self.mobile_menu_open;
                    }
                });
            }
        });
    }

    fn draw_ecosystem_menu(&mut self, ui: &mut egui::Ui) {
        let mut selected = None;
        let palette = self.palette;
        ui.menu_button(
            egui::RichText::new("Ecosystem \u{25BE}")
                .size(14.0)
                .color(ui::color32(palette.muted_foreground)),
            |ui| {
                ui.set_max_width(520.0);
                egui::Grid::new("ecosystem_menu")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        for (i, item) in ECOSYSTEM_MENU.iter().enumerate() {
                            let response = ui
                                .horizontal(|ui| {
                                    ui.set_width(240.0);
                                    ui.label(egui::RichText::new(item.icon).size(22.0));
                                    ui.vertical(|ui| {
                                        ui.label(
                                            egui::RichText::new(item.title)
                                                .size(13.0)
                                                .strong()
                                                .color(ui::color32(palette.foreground)),
                                        );
                                        ui.add(
                                            egui::Label::new(
                                                egui::RichText::new(ui::truncate_str(item.description, 72))
                                                    .size(11.0)
                                                    .color(ui::color32(palette.muted_foreground)),
                                            )
                                            .wrap(),
                                        );
                                    });
                                })
                                .response
                                .interact(egui::Sense::click())
                                .on_hover_cursor(egui::CursorIcon::PointingHand);
                            if response.clicked() {
                                selected = Some(item.title);
                                ui.close_menu();
                            }
                            if i % 2 == 1 {
                                ui.end_row();
                            }
                        }
                    });
            },
        );
        if let Some(title) = selected {
            self.open_platform_by_name(title);
        }
    }

    /// Collapsed navigation shown below the `lg` breakpoint.
    pub fn draw_mobile_menu(&mut self, ui: &mut egui::Ui) {
        let palette = self.palette;
        ui.label(
            egui::RichText::new("ECOSYSTEM")
                .size(11.0)
                .color(ui::color32(palette.muted_foreground)),
        );
        let mut selected = None;
        for item in ECOSYSTEM_MENU.iter() {
            let text = format!("{}  {}", item.icon, item.title);
            if ui::nav_link(ui, &palette, &text, 15.0).clicked() {
                selected = Some(item.title);
            }
        }
        if let Some(title) = selected {
            self.mobile_menu_open = false;
            self.open_platform_by_name(title);
        }

        ui.separator();
        for item in NAV_ITEMS.iter() {
            if ui::nav_link(ui, &palette, item.name, 15.0).clicked() {
                self.follow_anchor(item.href);
            }
        }

        ui.add_space(12.0);
        ui.columns(2, |cols| {
            if ui::outline_button(&mut cols[0], &palette, "Sign In").clicked() {
                log::info!("Sign in is not available on the landing page");
            }
            if ui::primary_button(&mut cols[1], &palette, "Schedule Demo").clicked() {
                self.follow_anchor("#contact");
            }
        });
    }

    fn open_platform_by_name(&mut self, full_name: &str) {
        match PLATFORMS.iter().position(|p| p.full_name == full_name) {
            Some(index) => self.select_platform(index),
            None => log::warn!("Unknown platform {}", full_name),
        }
    }
}
