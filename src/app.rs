// src/app.rs
use eframe::egui::{self, RichText};
use rfd::FileDialog;
use std::path::PathBuf;

use crate::settings::HostMode;
use crate::state::AppState;
use crate::ui::{navigation, widgets};
use crate::utils::format_date;

pub struct CaseStudyApp {
    state: AppState,
}

impl CaseStudyApp {
    pub fn new(mut state: AppState, host_mode: HostMode) -> Self {
        state.host_mode = host_mode;
        Self { state }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open Fixtures...").clicked() {
                    self.open_fixtures();
                    ui.close_menu();
                }
                if ui.button("Export Fixtures...").clicked() {
                    self.export_fixtures();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Restart Case Study").clicked() {
                    self.state.restart();
                    ui.close_menu();
                }
            });
        });
    }

    fn open_fixtures(&mut self) {
        let file_dialog = FileDialog::new()
            .add_filter("RON files", &["ron"])
            .set_title("Open Fixture File");

        if let Some(path) = file_dialog.pick_file() {
            self.state.load_fixtures(&path);
        }
    }

    fn export_fixtures(&mut self) {
        let file_dialog = FileDialog::new()
            .add_filter("RON files", &["ron"])
            .set_file_name("case_study.ron")
            .set_title("Export Fixtures");

        if let Some(path) = file_dialog.save_file() {
            let path: PathBuf = if path.extension().is_none() {
                path.with_extension("ron")
            } else {
                path
            };
            self.state.export_fixtures(&path);
        }
    }

    fn show_branding(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("⌂").size(28.0).color(widgets::PRIMARY));
            ui.vertical(|ui| {
                ui.label(RichText::new("Equihome Partners").size(18.0).strong());
                ui.label(RichText::new("Investment Case Study").small().color(widgets::MUTED));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new("CASE STUDY ANALYSIS").small().color(widgets::MUTED));
            });
        });
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        // text fields keep their own arrow keys
        if ctx.wants_keyboard_input() {
            return;
        }

        let deck = &mut self.state.deck;
        ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowRight) {
                deck.next();
            }
            if i.key_pressed(egui::Key::ArrowLeft) {
                deck.previous();
            }
            if i.key_pressed(egui::Key::Home) {
                deck.first();
            }
            if i.key_pressed(egui::Key::End) {
                deck.last();
            }
        });
    }
}

impl eframe::App for CaseStudyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(remaining) = self.state.analysis.poll() {
            ctx.request_repaint_after(remaining);
        }

        self.handle_keys(ctx);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            if self.state.show_standalone_chrome() {
                self.show_menu(ui);
                ui.add_space(4.0);
                self.show_branding(ui);
                ui.separator();
            }
            navigation::show_progress(ui, &mut self.state.deck);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.add_space(4.0);
            navigation::show_footer(ui, &mut self.state.deck);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let slide = self.state.deck.current().clone();
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.heading(RichText::new(&slide.title).strong());
                    ui.label(RichText::new(&slide.subtitle).color(widgets::MUTED));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(format_date(chrono::Local::now().date_naive())).color(widgets::MUTED));
                });
            });
            ui.separator();

            egui::ScrollArea::vertical()
                .id_source(slide.id.id())
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    crate::ui::show_slide(ui, &mut self.state);
                });
        });

        // Show error modal if needed
        let error_msg = self.state.error_message.clone();
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.state.error_message = None;
                    }
                });
        }
    }
}
