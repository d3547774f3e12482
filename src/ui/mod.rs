// src/ui/mod.rs
use eframe::egui;

use crate::state::{AppState, SlideId};

pub mod application;
pub mod navigation;
pub mod portfolio;
pub mod projections;
pub mod property;
pub mod suburb;
pub mod traffic_light;
pub mod underwriting;
pub mod widgets;

/// Draws whichever slide the deck cursor points at.
pub fn show_slide(ui: &mut egui::Ui, state: &mut AppState) {
    match state.deck.current().id {
        SlideId::Application => application::show_application(ui, state),
        SlideId::PropertyAnalysis => property::show_property_analysis(ui, state),
        SlideId::SuburbAnalysis => suburb::show_suburb_analysis(ui, state),
        SlideId::PortfolioAnalysis => portfolio::show_portfolio_analysis(ui, state),
        SlideId::UnderwritingDecision => underwriting::show_underwriting_decision(ui, state),
        SlideId::FinancialProjections => projections::show_financial_projections(ui, state),
    }
}
