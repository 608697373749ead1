use eframe::egui;
use egui::{Color32, RichText, Stroke};

use crate::picker::PickerState;
use crate::window::CountryWindow;

// Picker palette
const PANEL_BG: Color32 = Color32::from_rgb(18, 20, 28);
const MODAL_BG: Color32 = Color32::from_rgb(26, 29, 38);
const BORDER: Color32 = Color32::from_rgb(35, 40, 50);
const COMBO_BG: Color32 = Color32::from_rgb(30, 33, 42);
const HIGHLIGHT: Color32 = Color32::from_rgb(45, 85, 140);
const TEXT: Color32 = Color32::from_rgb(200, 205, 215);
const TEXT_MUTED: Color32 = Color32::from_rgb(100, 105, 120);
const STATUS_SELECTED: Color32 = Color32::from_rgb(60, 200, 60);
const STATUS_PENDING: Color32 = Color32::from_rgb(220, 180, 50);
const STATUS_FAILED: Color32 = Color32::from_rgb(220, 60, 60);

const COMBO_WIDTH: f32 = 260.0;

pub struct App {
    window: CountryWindow,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, preselect: Option<String>) -> Self {
        apply_theme(&cc.egui_ctx);

        Self {
            window: CountryWindow::builder().preselect(preselect).build(),
        }
    }

    fn show_picker(&mut self, ui: &mut egui::Ui) {
        let picker = self.window.picker();
        let interactive = picker.is_interactive();
        let mut selected_idx = picker.selected_index();

        ui.add_enabled_ui(interactive, |ui| {
            egui::ComboBox::from_id_salt("country_combo")
                .selected_text(picker.selected())
                .width(COMBO_WIDTH)
                .show_ui(ui, |ui| {
                    for (i, country) in picker.options().iter().enumerate() {
                        let text = if country.is_empty() {
                            RichText::new("(none)").color(TEXT_MUTED)
                        } else {
                            RichText::new(country)
                        };
                        ui.selectable_value(&mut selected_idx, i, text);
                    }
                });
        });

        if selected_idx != picker.selected_index() {
            self.window.picker_mut().select(selected_idx);
        }
    }

    fn show_status(&self, ui: &mut egui::Ui) {
        let picker = self.window.picker();

        match picker.state() {
            PickerState::Disabled => {}
            PickerState::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(RichText::new("Loading countries...").color(STATUS_PENDING).small());
                });
            }
            PickerState::Errored => {
                ui.label(RichText::new("Countries unavailable").color(STATUS_FAILED).small());
            }
            PickerState::Populated => {
                ui.label(RichText::new(picker.status_label()).color(STATUS_SELECTED));
            }
        }
    }

    fn show_error_modal(&mut self, ctx: &egui::Context) {
        let Some(message) = self.window.picker().error_message().map(str::to_string) else {
            return;
        };

        let mut acknowledged = false;
        let response = egui::Modal::new(egui::Id::new("fetch_error")).show(ctx, |ui| {
            ui.set_max_width(360.0);
            ui.label(RichText::new("Error").color(Color32::WHITE).strong());
            ui.add_space(8.0);
            ui.label(RichText::new(message).color(ui.visuals().error_fg_color));
            ui.add_space(12.0);
            if ui.button("OK").clicked() {
                acknowledged = true;
            }
        });

        if acknowledged || response.should_close() {
            self.window.picker_mut().dismiss_error();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let minimized = ctx.input(|i| i.viewport().minimized).unwrap_or(false);
        self.window.set_visible(!minimized);
        self.window.pump();

        if self.window.is_loading() {
            ctx.request_repaint();
        }

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(PANEL_BG)
                    .stroke(Stroke::new(1.0, BORDER))
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                ui.label(
                    RichText::new("Country")
                        .color(Color32::WHITE)
                        .strong()
                        .small(),
                );
                ui.add_space(4.0);
                self.show_picker(ui);
                ui.add_space(10.0);
                self.show_status(ui);
            });

        self.show_error_modal(ctx);
    }
}

fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    let visuals = &mut style.visuals;
    visuals.dark_mode = true;
    visuals.panel_fill = PANEL_BG;
    visuals.window_fill = MODAL_BG;
    visuals.window_stroke = Stroke::new(1.0, BORDER);
    visuals.selection.bg_fill = HIGHLIGHT;
    // The dropdown button is an inactive widget until hovered or opened.
    visuals.widgets.inactive.bg_fill = COMBO_BG;
    visuals.widgets.inactive.weak_bg_fill = COMBO_BG;
    visuals.widgets.hovered.weak_bg_fill = HIGHLIGHT.gamma_multiply(0.6);
    visuals.widgets.open.weak_bg_fill = HIGHLIGHT.gamma_multiply(0.8);
    visuals.override_text_color = Some(TEXT);
    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_uses_picker_palette() {
        let ctx = egui::Context::default();
        apply_theme(&ctx);

        let style = ctx.style();
        assert!(style.visuals.dark_mode);
        assert_eq!(style.visuals.panel_fill, PANEL_BG);
        assert_eq!(style.visuals.window_fill, MODAL_BG);
        assert_eq!(style.visuals.widgets.inactive.weak_bg_fill, COMBO_BG);
        assert_eq!(style.visuals.override_text_color, Some(TEXT));
    }
}
