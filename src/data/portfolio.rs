// src/data/portfolio.rs
use serde::{Serialize, Deserialize};

use super::Zone;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CapitalSnapshot {
    pub committed: u64,
    pub deployed_before: u64,
    pub new_advance: u64,
    pub deployed_now: u64,
    pub dry_powder: u64,
}

impl CapitalSnapshot {
    /// Share of committed capital deployed before the new loan.
    pub fn deployed_before_fraction(&self) -> f64 {
        self.fraction(self.deployed_before)
    }

    pub fn advance_fraction(&self) -> f64 {
        self.fraction(self.new_advance)
    }

    pub fn deployed_now_fraction(&self) -> f64 {
        self.fraction(self.deployed_now)
    }

    fn fraction(&self, amount: u64) -> f64 {
        if self.committed == 0 {
            0.0
        } else {
            amount as f64 / self.committed as f64
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoneExposure {
    pub zone: Zone,
    pub cap: f64,
    pub pre_amount: u64,
    pub pre_percent: f64,
    pub post_amount: u64,
    pub post_percent: f64,
    pub delta: f64,
    pub headroom: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioMetrics {
    pub weighted_avg_ltv: f64,
    pub portfolio_beta: f64,
    pub var_95: f64,
    pub cvar_95: f64,
    pub expected_net_irr: f64,
    pub sharpe: f64,
    pub loans_unique_zones: String,
}

/// Mandate limits are stated as free text ranges.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MandateLimits {
    pub weighted_avg_ltv: String,
    pub portfolio_beta: String,
    pub var_95: String,
    pub cvar_95: String,
    pub expected_net_irr: String,
    pub sharpe: String,
    pub loans_unique_zones: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuburbConcentration {
    pub rank: u8,
    pub suburb: String,
    pub zone: Zone,
    pub exposure_m: f64,
    pub percent_gav: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrontierPoint {
    pub name: String,
    pub expected_return: f64,
    pub volatility: f64,
    pub sharpe: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClipStage {
    pub layer: String,
    pub multiplier: String,
    pub running_max_ltv: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioAnalysis {
    pub fund_name: String,
    pub fund_description: String,
    pub capital: CapitalSnapshot,
    pub zone_exposure: Vec<ZoneExposure>,
    pub before: PortfolioMetrics,
    pub after: PortfolioMetrics,
    pub mandate: MandateLimits,
    pub concentrations: Vec<SuburbConcentration>,
    pub single_suburb_cap: f64,
    pub frontier: Vec<FrontierPoint>,
    pub clip_stages: Vec<ClipStage>,
    pub var_limit: f64,
    pub simulation_paths: u32,
    pub loan_ltv: f64,
}

impl PortfolioAnalysis {
    /// Final clip after every stage, or zero when no stages are defined.
    pub fn final_clip(&self) -> f64 {
        self.clip_stages.last().map(|s| s.running_max_ltv).unwrap_or(0.0)
    }

    /// Spare LTV capacity between the final clip and the funded advance.
    pub fn spare_capacity(&self) -> f64 {
        self.final_clip() - self.loan_ltv
    }

    /// VaR utilisation against the limit, clamped to 0..=1 for display.
    pub fn var_utilisation(&self) -> f64 {
        if self.var_limit <= 0.0 {
            return 1.0;
        }
        (self.after.var_95 / self.var_limit).clamp(0.0, 1.0)
    }
}

impl Default for PortfolioAnalysis {
    fn default() -> Self {
        let zone = |zone, cap, pre_amount, pre_percent, post_amount, post_percent, delta, headroom| ZoneExposure {
            zone,
            cap,
            pre_amount,
            pre_percent,
            post_amount,
            post_percent,
            delta,
            headroom,
        };
        let concentration = |rank, suburb: &str, zone, exposure_m, percent_gav| SuburbConcentration {
            rank,
            suburb: suburb.to_string(),
            zone,
            exposure_m,
            percent_gav,
        };
        let frontier = |name: &str, expected_return, volatility, sharpe| FrontierPoint {
            name: name.to_string(),
            expected_return,
            volatility,
            sharpe,
        };
        let stage = |layer: &str, multiplier: &str, running_max_ltv| ClipStage {
            layer: layer.to_string(),
            multiplier: multiplier.to_string(),
            running_max_ltv,
        };

        Self {
            fund_name: "Tranche 0 Launch Fund".to_string(),
            fund_description: "A$25M Closed-End Sleeve".to_string(),
            capital: CapitalSnapshot {
                committed: 25_000_000,
                deployed_before: 10_000_000,
                new_advance: 500_000,
                deployed_now: 10_500_000,
                dry_powder: 14_500_000,
            },
            zone_exposure: vec![
                zone(Zone::Green, 70.0, 5_500_000, 55.0, 6_000_000, 57.1, 2.1, 12.9),
                zone(Zone::Yellow, 25.0, 3_500_000, 35.0, 3_500_000, 33.3, -1.7, -8.3),
                zone(Zone::Red, 10.0, 1_000_000, 10.0, 1_000_000, 9.5, -0.5, 0.5),
            ],
            before: PortfolioMetrics {
                weighted_avg_ltv: 34.0,
                portfolio_beta: 0.94,
                var_95: 11.8,
                cvar_95: 15.3,
                expected_net_irr: 13.0,
                sharpe: 1.46,
                loans_unique_zones: "10 / 7".to_string(),
            },
            after: PortfolioMetrics {
                weighted_avg_ltv: 33.0,
                portfolio_beta: 0.97,
                var_95: 12.0,
                cvar_95: 15.5,
                expected_net_irr: 13.2,
                sharpe: 1.47,
                loans_unique_zones: "11 / 8".to_string(),
            },
            mandate: MandateLimits {
                weighted_avg_ltv: "≤ 45%".to_string(),
                portfolio_beta: "0.90 – 1.10".to_string(),
                var_95: "< 15%".to_string(),
                cvar_95: "< 20%".to_string(),
                expected_net_irr: "12 – 14%".to_string(),
                sharpe: "> 1.3".to_string(),
                loans_unique_zones: "Target ≥ 50 / 20".to_string(),
            },
            concentrations: vec![
                concentration(1, "Mosman", Zone::Green, 0.50, 4.8),
                concentration(2, "Randwick", Zone::Green, 0.45, 4.3),
                concentration(3, "Cronulla", Zone::Yellow, 0.40, 3.8),
                concentration(4, "Parramatta", Zone::Yellow, 0.35, 3.3),
                concentration(5, "Campbelltown", Zone::Red, 0.30, 2.9),
            ],
            single_suburb_cap: 7.0,
            frontier: vec![
                frontier("Existing (pre)", 13.0, 9.0, 1.46),
                frontier("Post-Mosman", 13.2, 9.1, 1.47),
                frontier("Frontier (same VaR)", 13.9, 9.3, 1.50),
            ],
            clip_stages: vec![
                stage("Baseline Green cap", "–", 70.0),
                stage("Property-risk factor (unit score 0.32)", "× 0.84", 59.0),
                stage("Zone-liquidity factor (score 0.18)", "× 0.90", 53.0),
                stage("Portfolio VaR buffer (current risk head-room)", "× 0.95", 50.0),
            ],
            var_limit: 15.0,
            simulation_paths: 10_000,
            loan_ltv: 18.8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capital_fractions_follow_the_snapshot() {
        let portfolio = PortfolioAnalysis::default();
        assert!((portfolio.capital.deployed_before_fraction() - 0.40).abs() < 1e-9);
        assert!((portfolio.capital.advance_fraction() - 0.02).abs() < 1e-9);
        assert!((portfolio.capital.deployed_now_fraction() - 0.42).abs() < 1e-9);
    }

    #[test]
    fn empty_commitment_reports_zero_deployment() {
        let mut portfolio = PortfolioAnalysis::default();
        portfolio.capital.committed = 0;
        assert_eq!(portfolio.capital.deployed_now_fraction(), 0.0);
    }

    #[test]
    fn final_clip_leaves_spare_capacity() {
        let portfolio = PortfolioAnalysis::default();
        assert_eq!(portfolio.final_clip(), 50.0);
        assert!((portfolio.spare_capacity() - 31.2).abs() < 1e-9);
    }

    #[test]
    fn var_utilisation_is_clamped() {
        let mut portfolio = PortfolioAnalysis::default();
        assert!((portfolio.var_utilisation() - 0.8).abs() < 1e-9);
        portfolio.after.var_95 = 30.0;
        assert_eq!(portfolio.var_utilisation(), 1.0);
    }
}
