// src/ui/portfolio.rs
use eframe::egui::{self, RichText};
use egui_plot::{Bar, BarChart, Legend, Plot, Points};

use crate::chart;
use crate::data::portfolio::{MandateLimits, PortfolioMetrics};
use crate::state::AppState;
use crate::ui::widgets::{self, card, key_values, stat, table, zone_color};
use crate::utils::{format_millions, format_percentage};

pub fn show_portfolio_analysis(ui: &mut egui::Ui, state: &mut AppState) {
    let portfolio = &state.data.portfolio;
    let capital = &portfolio.capital;

    card(ui, &format!("{} · {}", portfolio.fund_name, portfolio.fund_description), |ui| {
        ui.horizontal_wrapped(|ui| {
            stat(ui, format_millions(capital.committed as f64, 0), "Committed", widgets::PRIMARY);
            ui.add_space(24.0);
            stat(ui, format_millions(capital.deployed_before as f64, 1), "Deployed (before)", widgets::MUTED);
            ui.add_space(24.0);
            stat(ui, format_millions(capital.new_advance as f64, 2), "New Advance", widgets::SECONDARY);
            ui.add_space(24.0);
            stat(ui, format_millions(capital.deployed_now as f64, 1), "Deployed (now)", widgets::PRIMARY);
            ui.add_space(24.0);
            stat(ui, format_millions(capital.dry_powder as f64, 1), "Dry Powder", widgets::POSITIVE);
        });
        ui.add_space(8.0);
        ui.add(
            egui::ProgressBar::new(capital.deployed_now_fraction() as f32).text(format!(
                "{:.0}% deployed ({:.0}% before + {:.0}% this loan)",
                capital.deployed_now_fraction() * 100.0,
                capital.deployed_before_fraction() * 100.0,
                capital.advance_fraction() * 100.0,
            )),
        );
    });

    ui.add_space(12.0);

    ui.columns(2, |columns| {
        card(&mut columns[0], "Top 5 Suburb Concentrations", |ui| {
            egui::Grid::new("portfolio_concentrations")
                .num_columns(4)
                .striped(true)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    for header in ["#", "Suburb", "Exposure", "% GAV"] {
                        ui.strong(header);
                    }
                    ui.end_row();
                    for c in &portfolio.concentrations {
                        ui.label(c.rank.to_string());
                        ui.colored_label(zone_color(c.zone), &c.suburb);
                        ui.label(format!("A${:.2}M", c.exposure_m));
                        ui.label(format_percentage(c.percent_gav));
                        ui.end_row();
                    }
                });
            ui.label(RichText::new(format!("Single-suburb cap {}", format_percentage(portfolio.single_suburb_cap)))
                .small()
                .color(widgets::MUTED));
        });

        card(&mut columns[1], "Zone Exposure", |ui| {
            Plot::new("portfolio_zone_exposure")
                .height(200.0)
                .legend(Legend::default())
                .allow_zoom(false)
                .allow_drag(false)
                .allow_scroll(false)
                .show_background(false)
                .include_y(0.0)
                .show(ui, |plot_ui| {
                    let width = 0.25;
                    let series = [
                        ("Pre", widgets::MUTED),
                        ("Post", widgets::PRIMARY),
                        ("Cap", widgets::WARNING),
                    ];
                    for (s, (name, color)) in series.iter().enumerate() {
                        let bars: Vec<Bar> = portfolio.zone_exposure.iter()
                            .enumerate()
                            .map(|(i, z)| {
                                let value = match s {
                                    0 => z.pre_percent,
                                    1 => z.post_percent,
                                    _ => z.cap,
                                };
                                Bar::new(i as f64 + chart::grouped_offset(s, series.len(), width), value)
                                    .width(width)
                                    .name(z.zone.label())
                            })
                            .collect();
                        plot_ui.bar_chart(BarChart::new(bars).name(*name).color(*color));
                    }
                });

            let rows: Vec<Vec<String>> = portfolio.zone_exposure.iter()
                .map(|z| vec![
                    z.zone.label().to_string(),
                    format!("{:.0}%", z.cap),
                    format_percentage(z.pre_percent),
                    format_percentage(z.post_percent),
                    format!("{:+.1}", z.delta),
                    format!("{:+.1}", z.headroom),
                ])
                .collect();
            table(ui, "zone_exposure_table", &["Zone", "Cap", "Pre", "Post", "Δ", "Headroom"], &rows);
        });
    });

    ui.add_space(12.0);

    ui.columns(2, |columns| {
        card(&mut columns[0], "Three-Stage LTV Clip", |ui| {
            let rows: Vec<Vec<String>> = portfolio.clip_stages.iter()
                .map(|s| vec![s.layer.clone(), s.multiplier.clone(), format!("{:.0}%", s.running_max_ltv)])
                .collect();
            table(ui, "portfolio_clip", &["Layer", "Multiplier", "Running Max LTV"], &rows);
            ui.add_space(6.0);
            ui.label(format!(
                "Final clip {:.0}% vs loan LTV {} leaves {:.1}pp spare capacity",
                portfolio.final_clip(),
                format_percentage(portfolio.loan_ltv),
                portfolio.spare_capacity()
            ));
        });

        card(&mut columns[1], "Value at Risk", |ui| {
            let utilisation = portfolio.var_utilisation();
            let color = if utilisation < 0.85 { widgets::POSITIVE } else { widgets::WARNING };
            stat(ui, format_percentage(portfolio.after.var_95), "95% VaR (post-loan)", color);
            ui.add(
                egui::ProgressBar::new(utilisation as f32)
                    .fill(color)
                    .text(format!("{:.0}% of {:.0}% limit", utilisation * 100.0, portfolio.var_limit)),
            );
            ui.label(RichText::new(format!(
                "Monte Carlo over {} paths",
                crate::utils::format_thousands(portfolio.simulation_paths as u64)
            )).small().color(widgets::MUTED));
        });
    });

    ui.add_space(12.0);

    ui.columns(2, |columns| {
        card(&mut columns[0], "Efficient Frontier", |ui| {
            Plot::new("portfolio_frontier")
                .height(200.0)
                .legend(Legend::default())
                .allow_zoom(false)
                .allow_drag(false)
                .allow_scroll(false)
                .show_background(false)
                .show(ui, |plot_ui| {
                    let colors = [widgets::MUTED, widgets::PRIMARY, widgets::SECONDARY];
                    for (i, point) in portfolio.frontier.iter().enumerate() {
                        plot_ui.points(
                            Points::new(vec![[point.volatility, point.expected_return]])
                                .name(format!("{} (Sharpe {:.2})", point.name, point.sharpe))
                                .color(colors[i % colors.len()])
                                .radius(6.0),
                        );
                    }
                });
            ui.label(RichText::new("Volatility (x) vs expected return (y), %").small().color(widgets::MUTED));
        });

        card(&mut columns[1], "Key Metrics", |ui| {
            metrics_table(ui, &portfolio.before, &portfolio.after, &portfolio.mandate);
        });
    });
}

fn metrics_table(
    ui: &mut egui::Ui,
    before: &PortfolioMetrics,
    after: &PortfolioMetrics,
    mandate: &MandateLimits,
) {
    let rows = vec![
        vec!["Weighted Avg LTV".to_string(), format_percentage(before.weighted_avg_ltv), format_percentage(after.weighted_avg_ltv), mandate.weighted_avg_ltv.clone()],
        vec!["Portfolio Beta".to_string(), format!("{:.2}", before.portfolio_beta), format!("{:.2}", after.portfolio_beta), mandate.portfolio_beta.clone()],
        vec!["95% VaR".to_string(), format_percentage(before.var_95), format_percentage(after.var_95), mandate.var_95.clone()],
        vec!["95% CVaR".to_string(), format_percentage(before.cvar_95), format_percentage(after.cvar_95), mandate.cvar_95.clone()],
        vec!["Expected Net IRR".to_string(), format_percentage(before.expected_net_irr), format_percentage(after.expected_net_irr), mandate.expected_net_irr.clone()],
        vec!["Sharpe".to_string(), format!("{:.2}", before.sharpe), format!("{:.2}", after.sharpe), mandate.sharpe.clone()],
        vec!["Loans / Unique Zones".to_string(), before.loans_unique_zones.clone(), after.loans_unique_zones.clone(), mandate.loans_unique_zones.clone()],
    ];
    table(ui, "portfolio_metrics", &["Metric", "Before", "After", "Mandate"], &rows);
    key_values(ui, "portfolio_metric_delta", &[
        ("IRR change", format!("{:+.1}pp", after.expected_net_irr - before.expected_net_irr)),
        ("VaR change", format!("{:+.1}pp", after.var_95 - before.var_95)),
    ]);
}
