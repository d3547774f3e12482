// src/ui/suburb.rs
use eframe::egui::{self, RichText};
use egui_plot::{Legend, Line, LineStyle, Plot, Points};

use crate::chart;
use crate::state::AppState;
use crate::ui::traffic_light::show_traffic_light_system;
use crate::ui::widgets::{self, card, key_values, stat, table, zone_badge};
use crate::utils::{format_millions, format_percentage};

pub fn show_suburb_analysis(ui: &mut egui::Ui, state: &mut AppState) {
    draw_market_overview(ui, state);
    ui.add_space(12.0);
    show_traffic_light_system(ui, state);
}

fn draw_market_overview(ui: &mut egui::Ui, state: &AppState) {
    let suburb = &state.data.suburb;
    let tfs = &suburb.tfs;

    card(ui, "Traffic Light Snapshot", |ui| {
        ui.horizontal_wrapped(|ui| {
            zone_badge(ui, tfs.colour);
            ui.add_space(16.0);
            stat(ui, format!("{:.2}", tfs.ml_composite_score), "ML Composite Score", widgets::PRIMARY);
            ui.add_space(24.0);
            stat(ui, format!("{:.2}", tfs.composite_liquidity_score), "Liquidity Score", widgets::SECONDARY);
            ui.add_space(24.0);
            stat(ui, format!("×{:.2}", tfs.zone_liquidity_multiplier), "Zone Liquidity Multiplier", widgets::PRIMARY);
        });
        ui.add_space(6.0);
        ui.label(format!("Key drivers: {}", tfs.key_drivers));
        key_values(ui, "tfs_snapshot", &[
            ("Median income", tfs.median_income.clone()),
            ("Crime rate", tfs.crime_rate.clone()),
            ("SEIFA percentile", tfs.seifa_percentile.clone()),
            ("Days on market", tfs.days_on_market.clone()),
        ]);
    });

    ui.add_space(12.0);

    card(ui, "Sydney vs Mosman House Price Index", |ui| {
        Plot::new("suburb_hpi")
            .height(260.0)
            .legend(Legend::default())
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .show_background(false)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(chart::points(&suburb.historical, |p| p.year as f64, |p| Some(p.sydney)))
                        .name("Sydney")
                        .color(widgets::MUTED)
                        .width(2.0),
                );
                plot_ui.line(
                    Line::new(chart::points(&suburb.historical, |p| p.year as f64, |p| Some(p.mosman)))
                        .name("Mosman")
                        .color(widgets::PRIMARY)
                        .width(2.0),
                );
                plot_ui.line(
                    Line::new(chart::points(&suburb.forecast, |p| p.year as f64, |p| Some(p.sydney)))
                        .name("Sydney (forecast)")
                        .color(widgets::MUTED)
                        .style(LineStyle::Dashed { length: 6.0 }),
                );
                plot_ui.line(
                    Line::new(chart::points(&suburb.forecast, |p| p.year as f64, |p| Some(p.mosman)))
                        .name("Mosman (forecast)")
                        .color(widgets::PRIMARY)
                        .style(LineStyle::Dashed { length: 6.0 }),
                );
            });

        let (sydney_vol, mosman_vol) = suburb.volatility();
        ui.horizontal_wrapped(|ui| {
            ui.label(format!("Sydney CAGR {}", format_percentage(suburb.sydney_cagr)));
            ui.separator();
            ui.label(format!("Mosman CAGR {}", format_percentage(suburb.mosman_cagr)));
            ui.separator();
            ui.label(format!("Volatility: Sydney {:.1}pp, Mosman {:.1}pp", sydney_vol, mosman_vol));
        });
    });

    ui.add_space(12.0);

    ui.columns(2, |columns| {
        let regression = suburb.regression_points();
        let r = &suburb.regression;

        card(&mut columns[0], "Return Regression", |ui| {
            let scatter: Vec<[f64; 2]> = regression.iter()
                .map(|p| [p.sydney_return, p.mosman_return])
                .collect();
            let mut fitted: Vec<[f64; 2]> = regression.iter()
                .map(|p| [p.sydney_return, p.fitted])
                .collect();
            fitted.sort_by(|a, b| a[0].total_cmp(&b[0]));

            Plot::new("suburb_regression")
                .height(220.0)
                .legend(Legend::default())
                .allow_zoom(false)
                .allow_drag(false)
                .allow_scroll(false)
                .show_background(false)
                .show(ui, |plot_ui| {
                    plot_ui.points(Points::new(scatter).name("Yearly returns").color(widgets::PRIMARY).radius(4.0));
                    plot_ui.line(Line::new(fitted).name("Fitted").color(widgets::WARNING).width(2.0));
                });
            ui.label(RichText::new(format!(
                "Mosman = {:.1} + {:.2} × Sydney   ρ {:.2}   cov {:.4}   R² {:.2}",
                r.alpha, r.beta, r.correlation, r.covariance, r.r_squared
            )).small());
        });

        let clip = &suburb.clip;
        card(&mut columns[1], "Suburb-Stage LTV Clip", |ui| {
            ui.label(format!(
                "{:.0}% × zone liquidity factor {:.2} = {:.0}%",
                clip.property_stage_clip, clip.zone_liquidity_factor, clip.suburb_stage_clip
            ));
            ui.add_space(6.0);
            key_values(ui, "suburb_clip", &[
                ("Max advance after suburb stage", format_millions(clip.max_advance_after_suburb as f64, 2)),
                ("Requested advance", format_millions(clip.requested_advance as f64, 2)),
                ("Actual LTV", format_percentage(clip.actual_ltv)),
                ("Headroom", format!("{:.1}pp", clip.headroom)),
            ]);
        });
    });

    ui.add_space(12.0);

    card(ui, "Liquidity", |ui| {
        let rows: Vec<Vec<String>> = suburb.liquidity.iter()
            .map(|m| vec![m.metric.clone(), m.mosman.clone(), m.metro_avg.clone(), m.tfs_weight.clone()])
            .collect();
        table(ui, "suburb_liquidity", &["Metric", "Mosman", "Metro Avg", "TFS Weight"], &rows);
    });
}
