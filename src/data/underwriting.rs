// src/data/underwriting.rs
use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExecutiveSummary {
    pub loan_reference: String,
    pub borrowers: String,
    pub purpose: String,
    pub structure: String,
    pub economics: String,
    pub decision: String,
    pub decision_note: String,
}

/// One stage of the three-stage risk framework.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskStage {
    pub name: String,
    pub resulting_clip: f64,
    pub formula: String,
    pub metrics: Vec<(String, String)>,
    pub key_factors: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScenarioKind {
    BaseCase,
    StressTest,
    Downside,
    Upside,
}

impl ScenarioKind {
    pub fn label(&self) -> &'static str {
        match self {
            ScenarioKind::BaseCase => "Base Case",
            ScenarioKind::StressTest => "Stress Test",
            ScenarioKind::Downside => "Downside",
            ScenarioKind::Upside => "Upside",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReturnScenario {
    pub kind: ScenarioKind,
    pub scenario: String,
    pub irr: f64,
    pub moic: f64,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Covenant {
    pub covenant: String,
    pub threshold: String,
    pub status: String,
    pub passed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnderwritingMemo {
    pub summary: ExecutiveSummary,
    pub borrower_snapshot: Vec<String>,
    pub property_snapshot: Vec<String>,
    pub stages: Vec<RiskStage>,
    pub final_clip: f64,
    pub advance_ltv: f64,
    pub scenarios: Vec<ReturnScenario>,
    pub portfolio_impact: Vec<String>,
    pub covenants: Vec<Covenant>,
    pub monitoring: String,
}

impl UnderwritingMemo {
    pub fn safety_margin(&self) -> f64 {
        self.final_clip - self.advance_ltv
    }

    pub fn all_covenants_pass(&self) -> bool {
        self.covenants.iter().all(|c| c.passed)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

impl Default for UnderwritingMemo {
    fn default() -> Self {
        Self {
            summary: ExecutiveSummary {
                loan_reference: "Loan #11: 49A Central Avenue, Mosman NSW 2088".to_string(),
                borrowers: "Thomas & Sabrina, age 66 (retired professionals, A$200k passive income)".to_string(),
                purpose: "'Bank of Mum & Dad' – gift/loan to adult children".to_string(),
                structure: "A$0.50M advance (18.8% LTV), 10-year term, no monthly payments".to_string(),
                economics: "3% origination + 5% simple interest + 18.8% appreciation share".to_string(),
                decision: "RECOMMEND APPROVAL".to_string(),
                decision_note: "All risk parameters within mandate".to_string(),
            },
            borrower_snapshot: strings(&[
                "Married, children independent",
                "Zero consumer debt",
                "Credit score 802",
                "$2.0m net worth (ex-home)",
            ]),
            property_snapshot: strings(&[
                "4 BR / 3 BA house, 271 m² internal",
                "676 m² land, 1 km to Mosman Village",
                "Built 1925, major reno 2016 (structural + roof)",
                "Flood/fire overlays: nil",
            ]),
            stages: vec![
                RiskStage {
                    name: "Property Stage".to_string(),
                    resulting_clip: 59.0,
                    formula: "70% × 0.84".to_string(),
                    metrics: pairs(&[("Unit Risk Score", "0.32 (Low)")]),
                    key_factors: strings(&[
                        "Alpha: -1.5% p.a.",
                        "Beta: 1.28 vs property",
                        "Condition: 1925 build, renovated 2016",
                    ]),
                },
                RiskStage {
                    name: "Suburb Stage".to_string(),
                    resulting_clip: 53.0,
                    formula: "59% × 0.90".to_string(),
                    metrics: pairs(&[("TFS Classification", "Green"), ("ML Score", "0.18")]),
                    key_factors: strings(&[
                        "46 vs 62 days on market",
                        "A$198k vs A$110k income",
                        "97th vs 65th percentile SEIFA",
                    ]),
                },
                RiskStage {
                    name: "Portfolio Stage".to_string(),
                    resulting_clip: 50.0,
                    formula: "53% × 0.95".to_string(),
                    metrics: pairs(&[("Current VaR", "12%"), ("VaR Limit", "15%")]),
                    key_factors: strings(&[
                        "Green weight: 57.1% (within 70% cap)",
                        "Portfolio β: 0.97 (within 0.9-1.1)",
                        "VaR: 12% (3pp headroom)",
                    ]),
                },
            ],
            final_clip: 50.0,
            advance_ltv: 18.8,
            scenarios: vec![
                ReturnScenario {
                    kind: ScenarioKind::BaseCase,
                    scenario: "Base-case (CAGR: Prop 5.9%, Suburb 7.9%)".to_string(),
                    irr: 13.6,
                    moic: 1.41,
                    comment: "Prob-weighted".to_string(),
                },
                ReturnScenario {
                    kind: ScenarioKind::StressTest,
                    scenario: "–10% price path shock (1-σ)".to_string(),
                    irr: 10.4,
                    moic: 1.28,
                    comment: "Still above hurdle".to_string(),
                },
                ReturnScenario {
                    kind: ScenarioKind::Downside,
                    scenario: "GFC-style 20% drawdown yr 2".to_string(),
                    irr: 7.7,
                    moic: 1.18,
                    comment: "Inside downside guard-rail".to_string(),
                },
                ReturnScenario {
                    kind: ScenarioKind::Upside,
                    scenario: "95th percentile bull-case".to_string(),
                    irr: 18.8,
                    moic: 1.67,
                    comment: "Upside captured via equity share".to_string(),
                },
            ],
            portfolio_impact: strings(&[
                "Green weight ↑ 2.1 pp to 57.1% (12.9 pp head-room)",
                "β_fund ↑ 0.03 to 0.97 (within 0.9-1.1 band)",
                "VaR +0.2 pp to 12.0% (3 pp inside limit)",
                "Expected net IRR ↑ 20 bp to 13.2%",
            ]),
            covenants: vec![
                Covenant { covenant: "Fund VaR (95%, 1 yr)".to_string(), threshold: "15%".to_string(), status: "12.0%".to_string(), passed: true },
                Covenant { covenant: "Max Zone (Green)".to_string(), threshold: "70%".to_string(), status: "57.1%".to_string(), passed: true },
                Covenant { covenant: "Single-Suburb cap".to_string(), threshold: "7% GAV".to_string(), status: "4.8%".to_string(), passed: true },
                Covenant { covenant: "Weighted LTV".to_string(), threshold: "≤ 45%".to_string(), status: "33%".to_string(), passed: true },
            ],
            monitoring: "Monthly AVM updates + TFS classification review".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memo_recommends_with_full_covenant_compliance() {
        let memo = UnderwritingMemo::default();
        assert!(memo.all_covenants_pass());
        assert!((memo.safety_margin() - 31.2).abs() < 1e-9);
    }

    #[test]
    fn stages_tighten_the_clip_monotonically() {
        let memo = UnderwritingMemo::default();
        let clips: Vec<f64> = memo.stages.iter().map(|s| s.resulting_clip).collect();
        assert!(clips.windows(2).all(|w| w[1] < w[0]));
        assert_eq!(clips.last().copied(), Some(memo.final_clip));
    }
}
