// src/ui/navigation.rs
use eframe::egui::{self, RichText};

use crate::state::{SlideDeck, SlideProgress};
use crate::ui::widgets;

/// One button per slide, styled by how far the deck has progressed.
pub fn show_progress(ui: &mut egui::Ui, deck: &mut SlideDeck) {
    let mut target = None;

    ui.horizontal_wrapped(|ui| {
        for (index, slide) in deck.slides().iter().enumerate() {
            let text = RichText::new(format!("{} {}", slide.icon.glyph(), slide.title));
            let text = match deck.progress(index) {
                SlideProgress::Completed => text.color(widgets::SECONDARY),
                SlideProgress::Active => text.strong().color(widgets::PRIMARY),
                SlideProgress::Upcoming => text.color(widgets::MUTED),
            };
            if ui.selectable_label(index == deck.cursor(), text).clicked() {
                target = Some(index);
            }
        }
    });

    ui.horizontal(|ui| {
        ui.label(deck.progress_label());
        ui.add(egui::ProgressBar::new(deck.progress_fraction()).desired_width(ui.available_width()));
    });

    if let Some(index) = target {
        deck.jump_to(index);
    }
}

/// Previous / dots / Next.
pub fn show_footer(ui: &mut egui::Ui, deck: &mut SlideDeck) {
    let mut target = None;

    ui.horizontal(|ui| {
        if ui.add_enabled(!deck.is_first(), egui::Button::new("◀ Previous")).clicked() {
            deck.previous();
        }

        ui.add_space(16.0);
        for index in 0..deck.len() {
            let dot = if index == deck.cursor() {
                RichText::new("●").color(widgets::PRIMARY)
            } else {
                RichText::new("○").color(widgets::MUTED)
            };
            let title = &deck.slides()[index].title;
            if ui.add(egui::Button::new(dot).frame(false)).on_hover_text(title).clicked() {
                target = Some(index);
            }
        }
        ui.add_space(16.0);

        if ui.add_enabled(!deck.is_last(), egui::Button::new("Next ▶")).clicked() {
            deck.next();
        }
    });

    if let Some(index) = target {
        deck.jump_to(index);
    }
}
