// src/ui/traffic_light.rs
use eframe::egui::{self, RichText};
use egui_plot::{Bar, BarChart, Plot};

use crate::data::traffic_light::{CyclePhase, Impact};
use crate::data::SuburbData;
use crate::state::{AnalysisStatus, AnalysisTab, AppState};
use crate::ui::widgets::{self, card, key_values, pass_badge, stat, table, zone_badge};
use crate::utils::{format_aud, format_date, format_percentage};

pub fn show_traffic_light_system(ui: &mut egui::Ui, state: &mut AppState) {
    let status = state.analysis_status();

    card(ui, "Traffic Light System", |ui| match status {
        AnalysisStatus::NoApplication => {
            ui.colored_label(widgets::WARNING, RichText::new("⚠ No Application Found").strong());
            ui.label("Submit the loan application on the first slide to enable suburb analysis.");
        }
        AnalysisStatus::ReadyToAnalyze | AnalysisStatus::Analyzing => {
            draw_pending(ui, state, status == AnalysisStatus::Analyzing);
        }
        AnalysisStatus::Analyzed => {
            // status is Analyzed only with a result present
            if let Some(data) = state.analysis.suburb_data().cloned() {
                draw_result(ui, state, &data);
            }
        }
    });
}

fn draw_pending(ui: &mut egui::Ui, state: &mut AppState, analyzing: bool) {
    if let Some(application) = state.application.current() {
        let property = &application.property;
        key_values(ui, "analysis_property", &[
            ("Address", property.address.clone()),
            ("Suburb", property.locality()),
            ("Type", format!("{} · {} bed / {} bath", property.property_type, property.bedrooms, property.bathrooms)),
            ("AVM Value", format_aud(property.avm_value)),
        ]);
    }
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        if analyzing {
            ui.add_enabled(false, egui::Button::new("Analyzing..."));
            ui.spinner();
        } else if ui.button("▶ Run Analysis").clicked() {
            state.run_analysis();
        }
    });
}

fn draw_result(ui: &mut egui::Ui, state: &mut AppState, data: &SuburbData) {
    ui.horizontal(|ui| {
        zone_badge(ui, data.zone);
        ui.label(format!("{} {}", data.suburb, data.postcode));
        ui.label(RichText::new(format!("Analysed {}", data.analysis_date)).color(widgets::MUTED));
    });
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        for tab in AnalysisTab::ALL {
            if ui.selectable_label(state.analysis.selected_tab() == tab, tab.label()).clicked() {
                state.analysis.select_tab(tab);
            }
        }
    });
    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);

    match state.analysis.selected_tab() {
        AnalysisTab::Overview => draw_overview(ui, state, data),
        AnalysisTab::Metrics => draw_metrics(ui, data),
        AnalysisTab::Forecast => draw_forecast(ui, data),
        AnalysisTab::MlDecision => draw_ml_decision(ui, data),
        AnalysisTab::DecisionEngine => draw_decision_engine(ui, data),
        AnalysisTab::Pipeline => draw_pipeline(ui, data),
    }

    ui.add_space(12.0);
    if ui.button("↺ Reset Analysis").clicked() {
        state.analysis.reset_analysis();
    }
}

fn draw_overview(ui: &mut egui::Ui, state: &AppState, data: &SuburbData) {
    let avm_value = state
        .application
        .current()
        .map(|a| a.property.avm_value)
        .unwrap_or(state.data.application.property.avm_value);

    ui.columns(2, |columns| {
        let ui = &mut columns[0];
        ui.strong(format!("{} AVM Report", data.avm.provider));
        key_values(ui, "overview_avm", &[
            ("AVM Value", format_aud(avm_value)),
            ("Risk Adjustment", format!("{:.2}%", data.avm.risk_adjustment_pct)),
            ("Adjusted Value", format_aud(data.adjusted_value(avm_value).round() as u64)),
            ("Confidence", data.avm.confidence.clone()),
        ]);
        ui.add_space(8.0);
        ui.strong("Transaction History");
        let rows: Vec<Vec<String>> = data.history.iter()
            .map(|t| vec![format_date(t.date), format_aud(t.price), t.kind.clone()])
            .collect();
        table(ui, "overview_history", &["Date", "Price", "Type"], &rows);

        let ui = &mut columns[1];
        ui.strong("Zone Classification");
        key_values(ui, "overview_zone", &[
            ("Zone", data.zone.label().to_string()),
            ("Confidence", format!("{}%", data.confidence)),
            ("Risk Score", format!("{}/100", data.risk_score)),
            ("Market Cycle", format!("{:?} ({}% confidence)", data.market_cycle.position, data.market_cycle.confidence)),
        ]);
        ui.add_space(8.0);
        ui.strong("Comparable Suburbs");
        ui.horizontal_wrapped(|ui| {
            for suburb in &data.comparable_suburbs {
                ui.label(RichText::new(suburb).background_color(ui.visuals().faint_bg_color));
            }
        });
    });
}

fn draw_metrics(ui: &mut egui::Ui, data: &SuburbData) {
    Plot::new("suburb_metrics")
        .height(220.0)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .show_background(false)
        .include_y(0.0)
        .include_y(100.0)
        .show(ui, |plot_ui| {
            let bars: Vec<Bar> = data.metrics.iter()
                .enumerate()
                .map(|(i, metric)| {
                    Bar::new(i as f64, metric.score)
                        .name(&metric.name)
                        .width(0.6)
                        .fill(widgets::PRIMARY)
                })
                .collect();
            plot_ui.bar_chart(BarChart::new(bars));
        });

    let rows: Vec<Vec<String>> = data.metrics.iter()
        .map(|m| vec![m.name.clone(), format!("{:.0}", m.score), format!("{:.0}%", m.weight * 100.0)])
        .collect();
    table(ui, "suburb_metric_table", &["Metric", "Score", "Weight"], &rows);
    ui.label(format!("Weighted composite: {:.1}", data.composite_score()));
}

fn draw_forecast(ui: &mut egui::Ui, data: &SuburbData) {
    let growth = &data.growth;
    let [short, medium, long] = data.horizon_confidences();

    ui.horizontal_wrapped(|ui| {
        stat(ui, format!("+{}", format_percentage(growth.short_term)), &format!("1 year · {}% confidence", short), widgets::POSITIVE);
        ui.add_space(24.0);
        stat(ui, format!("+{}", format_percentage(growth.medium_term)), &format!("3 years · {}% confidence", medium), widgets::POSITIVE);
        ui.add_space(24.0);
        stat(ui, format!("+{}", format_percentage(growth.long_term)), &format!("10 years · {}% confidence", long), widgets::POSITIVE);
    });
    ui.add_space(8.0);
    key_values(ui, "forecast_cagr", &[
        ("Historical CAGR", format_percentage(growth.historical_cagr)),
        ("Forecast CAGR", format_percentage(growth.forecast_cagr)),
    ]);

    ui.add_space(8.0);
    ui.strong("Market Cycle");
    ui.horizontal(|ui| {
        for phase in CyclePhase::ALL {
            let text = RichText::new(format!("{:?}", phase));
            if phase == data.market_cycle.position {
                ui.label(text.strong().color(widgets::PRIMARY));
            } else {
                ui.label(text.color(widgets::MUTED));
            }
        }
    });
    ui.label(format!(
        "Position {:?}, forecast {:?} ({}% confidence)",
        data.market_cycle.position, data.market_cycle.forecast, data.market_cycle.confidence
    ));
}

fn draw_ml_decision(ui: &mut egui::Ui, data: &SuburbData) {
    let decision = &data.ml_decision;
    ui.horizontal(|ui| {
        stat(ui, decision.recommendation.clone(), "Recommendation", widgets::POSITIVE);
        ui.add_space(24.0);
        stat(ui, format!("{}%", decision.confidence), "Model Confidence", widgets::PRIMARY);
    });
    ui.add_space(8.0);

    for factor in &decision.factors {
        let color = match factor.impact {
            Impact::Positive => widgets::POSITIVE,
            Impact::Neutral => widgets::MUTED,
            Impact::Negative => widgets::NEGATIVE,
        };
        ui.horizontal(|ui| {
            ui.colored_label(color, format!("{:?}", factor.impact));
            ui.label(&factor.name);
        });
        ui.add(egui::ProgressBar::new(factor.weight as f32).text(format!("{:.0}%", factor.weight * 100.0)));
    }
}

fn draw_decision_engine(ui: &mut egui::Ui, data: &SuburbData) {
    egui::Grid::new("decision_engine")
        .num_columns(4)
        .striped(true)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            for header in ["Check", "Value", "Threshold", "Result"] {
                ui.strong(header);
            }
            ui.end_row();
            for check in &data.engine_checks {
                ui.label(&check.check);
                ui.label(&check.value);
                ui.label(&check.threshold);
                pass_badge(ui, check.passed);
                ui.end_row();
            }
        });

    let passed = data.engine_checks.iter().filter(|c| c.passed).count();
    ui.add_space(6.0);
    ui.label(format!("{} of {} checks passed", passed, data.engine_checks.len()));
}

fn draw_pipeline(ui: &mut egui::Ui, data: &SuburbData) {
    let rows: Vec<Vec<String>> = data.pipeline.iter()
        .enumerate()
        .map(|(i, stage)| vec![
            format!("{}. {}", i + 1, stage.stage),
            crate::utils::format_thousands(stage.records),
            stage.status.clone(),
        ])
        .collect();
    table(ui, "analysis_pipeline", &["Stage", "Records", "Status"], &rows);
}
