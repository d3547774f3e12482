// src/ui/property.rs
use eframe::egui::{self, RichText};
use egui_plot::{Legend, Line, LineStyle, Plot, Points};

use crate::chart;
use crate::state::AppState;
use crate::ui::widgets::{self, card, key_values, stat, table};
use crate::utils::{format_aud, format_date, format_millions, format_percentage};

pub fn show_property_analysis(ui: &mut egui::Ui, state: &mut AppState) {
    let application = &state.data.application;
    let analysis = &state.data.property;

    card(ui, "AVM Report", |ui| {
        ui.horizontal(|ui| {
            stat(ui, format_aud(application.property.avm_value), "PropTrack AVM", widgets::PRIMARY);
            ui.add_space(24.0);
            stat(ui, application.property.locality(), "Locality", widgets::MUTED);
        });
        ui.add_space(8.0);
        ui.label(RichText::new("Transaction History").strong());
        let rows: Vec<Vec<String>> = analysis.transactions.iter()
            .map(|t| {
                let marker = if t.highlight { " ★" } else { "" };
                vec![format_date(t.date), format_aud(t.price), format!("{}{}", t.kind, marker)]
            })
            .collect();
        table(ui, "property_transactions", &["Date", "Price", "Type"], &rows);
    });

    ui.add_space(12.0);

    card(ui, "Price Regression & Forecast", |ui| {
        let forecast = analysis.forecast_path();
        let (sale_year, sale_price) = analysis.actual_sale;

        Plot::new("property_forecast")
            .height(280.0)
            .legend(Legend::default())
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .show_background(false)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(chart::points(&analysis.historical, |p| p.year as f64, |p| Some(p.property / 1e6)))
                        .name("Property (historical)")
                        .color(widgets::PRIMARY)
                        .width(2.0),
                );
                plot_ui.line(
                    Line::new(chart::points(&analysis.historical, |p| p.year as f64, |p| Some(p.suburb / 1e6)))
                        .name("Suburb median (historical)")
                        .color(widgets::SECONDARY)
                        .width(2.0),
                );
                plot_ui.line(
                    Line::new(chart::points(&forecast, |p| p.year as f64, |p| Some(p.property / 1e6)))
                        .name("Property (forecast)")
                        .color(widgets::PRIMARY)
                        .style(LineStyle::Dashed { length: 6.0 }),
                );
                plot_ui.line(
                    Line::new(chart::points(&forecast, |p| p.year as f64, |p| Some(p.suburb / 1e6)))
                        .name("Suburb median (forecast)")
                        .color(widgets::SECONDARY)
                        .style(LineStyle::Dashed { length: 6.0 }),
                );
                plot_ui.points(
                    Points::new(vec![[sale_year as f64, sale_price / 1e6]])
                        .name(format!("Actual sale {}", sale_year))
                        .color(widgets::WARNING)
                        .radius(5.0),
                );
            });
        ui.label(RichText::new("Values in A$ millions").small().color(widgets::MUTED));
    });

    ui.add_space(12.0);

    ui.columns(2, |columns| {
        card(&mut columns[0], "Growth", |ui| {
            let f = &analysis.forecast;
            key_values(ui, "property_growth", &[
                ("Mean property return (historical)", format_percentage(analysis.mean_property_return() * 100.0)),
                ("Mean suburb return (historical)", format_percentage(analysis.mean_suburb_return() * 100.0)),
                ("Property forecast", format!("{} p.a.", format_percentage(f.property_rate * 100.0))),
                ("Suburb forecast", format!("{} p.a.", format_percentage(f.suburb_rate * 100.0))),
                ("Horizon", format!("{} years", f.horizon_years)),
            ]);
        });

        let r = &analysis.regression;
        card(&mut columns[1], "Regression Results", |ui| {
            key_values(ui, "property_regression", &[
                ("Beta (β)", format!("{:.2}", r.beta)),
                ("Alpha (α)", format!("{:.1}% p.a.", r.alpha)),
                ("Covariance", format!("{:.4}", r.covariance)),
                ("Correlation (ρ)", format!("{:.2}", r.correlation)),
                ("R²", format!("{:.2}", r.r_squared)),
            ]);
        });
    });

    ui.add_space(12.0);

    card(ui, "Alpha Factors", |ui| {
        for factor in &analysis.alpha_factors {
            ui.horizontal(|ui| {
                ui.strong(&factor.factor);
                ui.label(RichText::new(format!("weight {}%", factor.weight)).color(widgets::MUTED));
            });
            ui.add(
                egui::ProgressBar::new(factor.score as f32 / 100.0)
                    .text(format!("{}/100", factor.score)),
            );
            ui.label(RichText::new(&factor.description).small().color(widgets::MUTED));
            ui.add_space(4.0);
        }
    });

    ui.add_space(12.0);

    let clip = &analysis.clip;
    card(ui, "Risk Score & LTV Clip Framework", |ui| {
        ui.horizontal_wrapped(|ui| {
            stat(ui, format!("{:.2}", clip.unit_risk_score), "Unit Risk Score", widgets::PRIMARY);
            ui.add_space(24.0);
            stat(ui, clip.risk_rating.clone(), "Risk Rating", widgets::POSITIVE);
            ui.add_space(24.0);
            stat(ui, format!("{:.0}%", clip.computed_clip), "Property-Stage Clip", widgets::SECONDARY);
        });
        ui.add_space(6.0);
        ui.label(format!(
            "Baseline {:.0}% × property risk factor {:.2} = {:.0}% maximum LTV",
            clip.baseline_clip, clip.property_risk_factor, clip.computed_clip
        ));
        key_values(ui, "property_clip", &[
            ("Max eligible advance", format_millions(clip.max_eligible_advance as f64, 2)),
            ("Proposed advance", format_millions(clip.proposed_advance as f64, 2)),
            ("Actual LTV", format_percentage(clip.actual_ltv)),
        ]);
    });
}
