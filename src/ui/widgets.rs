// src/ui/widgets.rs
use eframe::egui::{self, Color32, RichText};

use crate::data::Zone;

pub const PRIMARY: Color32 = Color32::from_rgb(79, 70, 229);
pub const SECONDARY: Color32 = Color32::from_rgb(20, 184, 166);
pub const MUTED: Color32 = Color32::from_rgb(107, 114, 128);
pub const POSITIVE: Color32 = Color32::from_rgb(22, 163, 74);
pub const NEGATIVE: Color32 = Color32::from_rgb(220, 38, 38);
pub const WARNING: Color32 = Color32::from_rgb(217, 119, 6);

pub fn zone_color(zone: Zone) -> Color32 {
    match zone {
        Zone::Green => Color32::from_rgb(34, 197, 94),
        Zone::Yellow => Color32::from_rgb(234, 179, 8),
        Zone::Red => Color32::from_rgb(239, 68, 68),
    }
}

pub fn pass_color(passed: bool) -> Color32 {
    if passed { POSITIVE } else { NEGATIVE }
}

/// Titled group box filling the available width.
pub fn card<R>(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    ui.group(|ui| {
        ui.set_min_width(ui.available_width());
        ui.heading(title);
        ui.add_space(6.0);
        add_contents(ui)
    })
    .inner
}

/// Large figure with a small caption underneath.
pub fn stat(ui: &mut egui::Ui, value: impl Into<String>, caption: &str, color: Color32) {
    ui.vertical(|ui| {
        ui.label(RichText::new(value.into()).size(20.0).strong().color(color));
        ui.label(RichText::new(caption).small().color(MUTED));
    });
}

pub fn zone_badge(ui: &mut egui::Ui, zone: Zone) {
    ui.label(
        RichText::new(format!(" {} ZONE ", zone.label().to_uppercase()))
            .strong()
            .color(Color32::WHITE)
            .background_color(zone_color(zone)),
    );
}

pub fn pass_badge(ui: &mut egui::Ui, passed: bool) {
    let text = if passed { "✔ Pass" } else { "✖ Fail" };
    ui.colored_label(pass_color(passed), text);
}

/// Two-column label/value grid.
pub fn key_values(ui: &mut egui::Ui, id: &str, rows: &[(&str, String)]) {
    egui::Grid::new(id)
        .num_columns(2)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            for (key, value) in rows {
                ui.label(RichText::new(*key).color(MUTED));
                ui.strong(value);
                ui.end_row();
            }
        });
}

/// Striped table with a bold header row.
pub fn table(ui: &mut egui::Ui, id: &str, header: &[&str], rows: &[Vec<String>]) {
    egui::Grid::new(id)
        .num_columns(header.len())
        .striped(true)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            for column in header {
                ui.strong(*column);
            }
            ui.end_row();
            for row in rows {
                for cell in row {
                    ui.label(cell);
                }
                ui.end_row();
            }
        });
}

pub fn bullets(ui: &mut egui::Ui, items: &[String]) {
    for item in items {
        ui.label(format!("• {}", item));
    }
}
