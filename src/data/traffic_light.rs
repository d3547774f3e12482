// src/data/traffic_light.rs
use serde::{Serialize, Deserialize};

use super::property::Transaction;

/// Three-valued suburb risk label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Zone {
    Green,
    Yellow,
    Red,
}

impl Zone {
    /// Parses a zone label case-insensitively. "Orange" is treated as yellow.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "green" => Some(Zone::Green),
            "yellow" | "orange" => Some(Zone::Yellow),
            "red" => Some(Zone::Red),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Zone::Green => "Green",
            Zone::Yellow => "Yellow",
            Zone::Red => "Red",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CyclePhase {
    Recovery,
    Growth,
    Peak,
    Correction,
}

impl CyclePhase {
    pub const ALL: [CyclePhase; 4] = [
        CyclePhase::Recovery,
        CyclePhase::Growth,
        CyclePhase::Peak,
        CyclePhase::Correction,
    ];
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Impact {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketCycle {
    pub position: CyclePhase,
    pub forecast: CyclePhase,
    pub confidence: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GrowthOutlook {
    /// One-year forecast growth, percent.
    pub short_term: f64,
    pub medium_term: f64,
    pub long_term: f64,
    pub confidence: u8,
    pub historical_cagr: f64,
    pub forecast_cagr: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecisionFactor {
    pub name: String,
    pub impact: Impact,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MlDecision {
    pub recommendation: String,
    pub confidence: u8,
    pub factors: Vec<DecisionFactor>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuburbMetric {
    pub name: String,
    pub score: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineCheck {
    pub check: String,
    pub value: String,
    pub threshold: String,
    pub passed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipelineStage {
    pub stage: String,
    pub records: u64,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AvmReport {
    pub provider: String,
    pub risk_adjustment_pct: f64,
    pub confidence: String,
}

/// Result record written into the analysis panel when a run completes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuburbData {
    pub suburb: String,
    pub postcode: String,
    pub zone: Zone,
    pub confidence: u8,
    pub risk_score: u8,
    pub analysis_date: String,
    pub market_cycle: MarketCycle,
    pub growth: GrowthOutlook,
    pub comparable_suburbs: Vec<String>,
    pub metrics: Vec<SuburbMetric>,
    pub ml_decision: MlDecision,
    pub engine_checks: Vec<EngineCheck>,
    pub pipeline: Vec<PipelineStage>,
    pub avm: AvmReport,
    pub history: Vec<Transaction>,
}

impl SuburbData {
    /// Property value after the AVM risk haircut.
    pub fn adjusted_value(&self, avm_value: u64) -> f64 {
        avm_value as f64 * (1.0 + self.avm.risk_adjustment_pct / 100.0)
    }

    /// Forecast confidences for the one, three and ten year horizons.
    pub fn horizon_confidences(&self) -> [u8; 3] {
        let base = self.growth.confidence as f64;
        [
            self.growth.confidence,
            (base * 0.9).round() as u8,
            (base * 0.7).round() as u8,
        ]
    }

    /// Weighted average of the metric scores.
    pub fn composite_score(&self) -> f64 {
        let total_weight: f64 = self.metrics.iter().map(|m| m.weight).sum();
        if total_weight == 0.0 {
            return 0.0;
        }
        self.metrics.iter().map(|m| m.score * m.weight).sum::<f64>() / total_weight
    }
}

impl Default for SuburbData {
    fn default() -> Self {
        let date = |y, m, d| chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
        Self {
            suburb: "Mosman".to_string(),
            postcode: "2088".to_string(),
            zone: Zone::Green,
            confidence: 92,
            risk_score: 18,
            analysis_date: "January 15, 2020".to_string(),
            market_cycle: MarketCycle {
                position: CyclePhase::Growth,
                forecast: CyclePhase::Growth,
                confidence: 85,
            },
            growth: GrowthOutlook {
                short_term: 5.9,
                medium_term: 16.8,
                long_term: 52.5,
                confidence: 88,
                historical_cagr: 7.9,
                forecast_cagr: 5.9,
            },
            comparable_suburbs: ["Cremorne", "Neutral Bay", "Balmoral", "Clifton Gardens"]
                .into_iter()
                .map(String::from)
                .collect(),
            metrics: [
                ("Liquidity", 86.0, 0.25),
                ("Income Strength", 94.0, 0.20),
                ("Socio-economic (SEIFA)", 97.0, 0.15),
                ("Price Stability", 81.0, 0.15),
                ("Development Pipeline", 88.0, 0.15),
                ("Crime Index", 79.0, 0.10),
            ]
            .into_iter()
            .map(|(name, score, weight)| SuburbMetric { name: name.to_string(), score, weight })
            .collect(),
            ml_decision: MlDecision {
                recommendation: "invest".to_string(),
                confidence: 91,
                factors: [
                    ("Growth Momentum", Impact::Positive, 0.30),
                    ("Market Liquidity", Impact::Positive, 0.25),
                    ("Income & SEIFA", Impact::Positive, 0.20),
                    ("Supply Pipeline", Impact::Neutral, 0.15),
                    ("Price Level", Impact::Negative, 0.10),
                ]
                .into_iter()
                .map(|(name, impact, weight)| DecisionFactor { name: name.to_string(), impact, weight })
                .collect(),
            },
            engine_checks: [
                ("Zone classification", "Green", "Green or Yellow", true),
                ("Unit risk score", "0.32", "≤ 0.50", true),
                ("Requested LTV", "18.8%", "≤ final clip 50%", true),
                ("Borrower age", "66", "≥ 55", true),
                ("Existing mortgage", "$0", "≤ 20% of value", true),
            ]
            .into_iter()
            .map(|(check, value, threshold, passed)| EngineCheck {
                check: check.to_string(),
                value: value.to_string(),
                threshold: threshold.to_string(),
                passed,
            })
            .collect(),
            pipeline: [
                ("Data ingestion", 250_000, "Complete"),
                ("Feature engineering", 248_310, "Complete"),
                ("Zone classification", 4_612, "Complete"),
                ("Property scoring", 1, "Complete"),
                ("Decision routing", 1, "Queued for IC"),
            ]
            .into_iter()
            .map(|(stage, records, status)| PipelineStage {
                stage: stage.to_string(),
                records,
                status: status.to_string(),
            })
            .collect(),
            avm: AvmReport {
                provider: "PropTrack".to_string(),
                risk_adjustment_pct: -5.0,
                confidence: "High (92%)".to_string(),
            },
            history: vec![
                Transaction { date: date(2020, 3, 1), price: 2_800_000, kind: "Sale".to_string(), highlight: true },
                Transaction { date: date(1998, 10, 1), price: 825_000, kind: "Sale".to_string(), highlight: false },
                Transaction { date: date(1997, 8, 1), price: 750_000, kind: "Sale".to_string(), highlight: false },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_labels_parse_case_insensitively() {
        assert_eq!(Zone::from_label("GREEN"), Some(Zone::Green));
        assert_eq!(Zone::from_label(" red "), Some(Zone::Red));
        assert_eq!(Zone::from_label("Orange"), Some(Zone::Yellow));
        assert_eq!(Zone::from_label("purple"), None);
    }

    #[test]
    fn avm_haircut_is_five_percent() {
        let data = SuburbData::default();
        assert!((data.adjusted_value(2_800_000) - 2_660_000.0).abs() < 1e-6);
    }

    #[test]
    fn longer_horizons_carry_less_confidence() {
        let data = SuburbData::default();
        assert_eq!(data.horizon_confidences(), [88, 79, 62]);
    }

    #[test]
    fn composite_score_is_weight_normalised() {
        let mut data = SuburbData::default();
        data.metrics = vec![
            SuburbMetric { name: "a".into(), score: 80.0, weight: 1.0 },
            SuburbMetric { name: "b".into(), score: 40.0, weight: 3.0 },
        ];
        assert!((data.composite_score() - 50.0).abs() < 1e-9);

        data.metrics.clear();
        assert_eq!(data.composite_score(), 0.0);
    }
}
