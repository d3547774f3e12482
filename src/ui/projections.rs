// src/ui/projections.rs
use eframe::egui::{self, RichText};
use egui_plot::{Bar, BarChart, Legend, Line, LineStyle, Plot, Points};

use crate::chart;
use crate::data::projections::FundSnapshot;
use crate::state::AppState;
use crate::ui::widgets::{self, card, key_values, stat, table};
use crate::utils::{format_aud, format_percentage};

pub fn show_financial_projections(ui: &mut egui::Ui, state: &mut AppState) {
    let projections = &state.data.projections;
    let terms = &projections.terms;
    let waterfall = &projections.waterfall;

    card(ui, "Deal Terms (Day 0)", |ui| {
        ui.columns(2, |columns| {
            key_values(&mut columns[0], "deal_terms_left", &[
                ("Start Date", terms.start_date.clone()),
                ("Advance (net)", format_aud(terms.advance)),
                ("Face Loan Amount", format_aud(terms.face_loan_amount)),
                ("Origination Fee", format_aud(terms.origination_fee)),
                ("Legal & Doc Fee", format_aud(terms.legal_doc_fee)),
            ]);
            key_values(&mut columns[1], "deal_terms_right", &[
                ("Simple Interest", format!("{:.1}% p.a.", terms.simple_interest_rate)),
                ("Equity Share", format_percentage(terms.equity_share_percent)),
                ("Baseline AVM", format_aud(terms.baseline_avm)),
                ("Haircut-Adjusted Value", format_aud(terms.haircut_adjusted_value)),
                ("Initial LTV", format_percentage(terms.initial_ltv)),
            ]);
        });
    });

    ui.add_space(12.0);

    card(ui, "Property Value Path", |ui| {
        let path = &projections.value_path;
        Plot::new("projection_value_path")
            .height(260.0)
            .legend(Legend::default())
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .show_background(false)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(chart::points(path, |p| p.year, |p| Some(p.projected as f64 / 1e6)))
                        .name("Projected")
                        .color(widgets::PRIMARY)
                        .style(LineStyle::Dashed { length: 6.0 }),
                );
                for segment in chart::segments(path, |p| p.year, |p| p.actual.map(|v| v as f64 / 1e6)) {
                    plot_ui.line(Line::new(segment).name("Actual").color(widgets::SECONDARY).width(2.0));
                }
                plot_ui.points(
                    Points::new(chart::points(path, |p| p.year, |p| p.actual.map(|v| v as f64 / 1e6)))
                        .name("Actual")
                        .color(widgets::SECONDARY)
                        .radius(4.0),
                );
            });
        ui.label(RichText::new("Years from settlement vs value in A$ millions").small().color(widgets::MUTED));

        let rows: Vec<Vec<String>> = path.iter()
            .map(|p| vec![
                p.label.clone(),
                p.date.clone(),
                format_aud(p.projected),
                p.actual.map(format_aud).unwrap_or_else(|| "–".to_string()),
            ])
            .collect();
        table(ui, "value_path_table", &["Point", "Date", "Projected", "Actual"], &rows);
    });

    ui.add_space(12.0);

    ui.columns(2, |columns| {
        card(&mut columns[0], "Projected vs Actual Returns", |ui| {
            Plot::new("projection_returns")
                .height(200.0)
                .legend(Legend::default())
                .allow_zoom(false)
                .allow_drag(false)
                .allow_scroll(false)
                .show_background(false)
                .include_y(0.0)
                .show(ui, |plot_ui| {
                    let width = 0.35;
                    let base = vec![Bar::new(chart::grouped_offset(0, 2, width), waterfall.base_case_irr)
                        .width(width)
                        .name("IRR")];
                    let actual = vec![Bar::new(chart::grouped_offset(1, 2, width), waterfall.actual_irr)
                        .width(width)
                        .name("IRR")];
                    plot_ui.bar_chart(BarChart::new(base).name("Base case").color(widgets::MUTED));
                    plot_ui.bar_chart(BarChart::new(actual).name("Actual").color(widgets::POSITIVE));
                });
            key_values(ui, "returns_compare", &[
                ("Base case IRR", format_percentage(waterfall.base_case_irr)),
                ("Actual IRR", format_percentage(waterfall.actual_irr)),
                ("Base case proceeds", format_aud(waterfall.base_case_proceeds)),
                ("Actual proceeds", format_aud(waterfall.proceeds_to_lender)),
                ("MOIC", format!("{:.2}x", waterfall.moic)),
            ]);
        });

        card(&mut columns[1], "Cash-Flow Waterfall", |ui| {
            let bars = chart::waterfall(&waterfall.steps());
            Plot::new("projection_waterfall")
                .height(200.0)
                .allow_zoom(false)
                .allow_drag(false)
                .allow_scroll(false)
                .show_background(false)
                .show(ui, |plot_ui| {
                    let chart_bars: Vec<Bar> = bars.iter()
                        .enumerate()
                        .map(|(i, bar)| {
                            let fill = if i + 1 == bars.len() {
                                widgets::PRIMARY
                            } else if bar.value >= 0.0 {
                                widgets::POSITIVE
                            } else {
                                widgets::NEGATIVE
                            };
                            Bar::new(i as f64, bar.value / 1e6)
                                .base_offset(bar.base / 1e6)
                                .width(0.6)
                                .name(&bar.label)
                                .fill(fill)
                        })
                        .collect();
                    plot_ui.bar_chart(BarChart::new(chart_bars));
                });

            let rows: Vec<Vec<String>> = bars.iter()
                .map(|bar| vec![bar.label.clone(), format_signed_aud(bar.value), format_aud(bar.running.max(0.0) as u64)])
                .collect();
            table(ui, "waterfall_table", &["Step", "Amount", "Running"], &rows);
            ui.label(RichText::new(format!(
                "Exit {} after {:.2} years; lender receives {} including the upfront fee of {}",
                waterfall.exit_date,
                waterfall.holding_years,
                format_aud(waterfall.proceeds_to_lender),
                format_aud(waterfall.upfront_origination_fee),
            )).small().color(widgets::MUTED));
        });
    });

    ui.add_space(12.0);

    card(ui, "Portfolio Impact", |ui| {
        ui.columns(2, |columns| {
            fund_snapshot(&mut columns[0], "Before Sale", &projections.before_sale);
            fund_snapshot(&mut columns[1], "After Sale", &projections.after_sale);
        });
        ui.add_space(8.0);
        ui.label(RichText::new(&projections.key_insight).italics());
    });
}

fn fund_snapshot(ui: &mut egui::Ui, title: &str, snapshot: &FundSnapshot) {
    ui.strong(title);
    ui.horizontal_wrapped(|ui| {
        stat(ui, format!("A${:.1}M", snapshot.gav_m), "GAV", widgets::PRIMARY);
        ui.add_space(16.0);
        stat(ui, format_percentage(snapshot.net_irr), "Net IRR", widgets::POSITIVE);
    });
    key_values(ui, &format!("fund_{}", title), &[
        ("95% VaR", format_percentage(snapshot.var_95)),
        ("Weighted Avg LTV", format_percentage(snapshot.weighted_avg_ltv)),
        ("Fund Beta", format!("{:.2}", snapshot.fund_beta)),
    ]);
}

fn format_signed_aud(value: f64) -> String {
    let amount = format_aud(value.abs().round() as u64);
    if value < 0.0 {
        format!("-{}", amount)
    } else {
        amount
    }
}
