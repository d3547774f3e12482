// src/ui/underwriting.rs
use eframe::egui::{self, RichText};

use crate::data::underwriting::ScenarioKind;
use crate::state::AppState;
use crate::ui::widgets::{self, bullets, card, key_values, pass_badge, stat};

pub fn show_underwriting_decision(ui: &mut egui::Ui, state: &mut AppState) {
    let memo = &state.data.underwriting;
    let summary = &memo.summary;

    card(ui, "Investment Committee Memo", |ui| {
        key_values(ui, "memo_summary", &[
            ("Loan", summary.loan_reference.clone()),
            ("Borrowers", summary.borrowers.clone()),
            ("Purpose", summary.purpose.clone()),
            ("Structure", summary.structure.clone()),
            ("Economics", summary.economics.clone()),
        ]);
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!(" {} ", summary.decision))
                .strong()
                .color(egui::Color32::WHITE)
                .background_color(widgets::POSITIVE));
            ui.label(&summary.decision_note);
        });
    });

    ui.add_space(12.0);

    ui.columns(2, |columns| {
        card(&mut columns[0], "Borrower Snapshot", |ui| bullets(ui, &memo.borrower_snapshot));
        card(&mut columns[1], "Property Snapshot", |ui| bullets(ui, &memo.property_snapshot));
    });

    ui.add_space(12.0);

    card(ui, "Three-Stage Risk Framework", |ui| {
        ui.columns(memo.stages.len().max(1), |columns| {
            for (column, stage) in columns.iter_mut().zip(&memo.stages) {
                column.group(|ui| {
                    ui.strong(&stage.name);
                    ui.label(RichText::new(format!("{:.0}%", stage.resulting_clip)).size(22.0).color(widgets::PRIMARY));
                    ui.label(RichText::new(&stage.formula).small().color(widgets::MUTED));
                    ui.add_space(4.0);
                    for (key, value) in &stage.metrics {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(key).color(widgets::MUTED));
                            ui.strong(value);
                        });
                    }
                    ui.add_space(4.0);
                    bullets(ui, &stage.key_factors);
                });
            }
        });
        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            stat(ui, format!("{:.0}%", memo.final_clip), "Final LTV Clip", widgets::PRIMARY);
            ui.add_space(24.0);
            stat(ui, format!("{:.1}%", memo.advance_ltv), "Advance LTV", widgets::SECONDARY);
            ui.add_space(24.0);
            stat(ui, format!("{:.1}pp", memo.safety_margin()), "Safety Margin", widgets::POSITIVE);
        });
    });

    ui.add_space(12.0);

    card(ui, "Return Scenarios", |ui| {
        egui::Grid::new("memo_scenarios")
            .num_columns(5)
            .striped(true)
            .spacing([16.0, 4.0])
            .show(ui, |ui| {
                for header in ["Case", "Scenario", "IRR", "MOIC", "Comment"] {
                    ui.strong(header);
                }
                ui.end_row();
                for scenario in &memo.scenarios {
                    let color = match scenario.kind {
                        ScenarioKind::BaseCase => widgets::PRIMARY,
                        ScenarioKind::Upside => widgets::POSITIVE,
                        ScenarioKind::StressTest => widgets::WARNING,
                        ScenarioKind::Downside => widgets::NEGATIVE,
                    };
                    ui.colored_label(color, scenario.kind.label());
                    ui.label(&scenario.scenario);
                    ui.label(format!("{:.1}%", scenario.irr));
                    ui.label(format!("{:.2}x", scenario.moic));
                    ui.label(&scenario.comment);
                    ui.end_row();
                }
            });
    });

    ui.add_space(12.0);

    ui.columns(2, |columns| {
        card(&mut columns[0], "Portfolio Impact", |ui| bullets(ui, &memo.portfolio_impact));

        card(&mut columns[1], "Covenant Compliance", |ui| {
            egui::Grid::new("memo_covenants")
                .num_columns(4)
                .striped(true)
                .show(ui, |ui| {
                    for covenant in &memo.covenants {
                        ui.label(&covenant.covenant);
                        ui.label(&covenant.threshold);
                        ui.label(&covenant.status);
                        pass_badge(ui, covenant.passed);
                        ui.end_row();
                    }
                });
            ui.add_space(6.0);
            if memo.all_covenants_pass() {
                ui.colored_label(widgets::POSITIVE, "All covenants in compliance");
            } else {
                ui.colored_label(widgets::NEGATIVE, "Covenant breach requires IC review");
            }
            ui.label(RichText::new(&memo.monitoring).small().color(widgets::MUTED));
        });
    });
}
