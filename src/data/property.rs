// src/data/property.rs
use chrono::NaiveDate;
use serde::{Serialize, Deserialize};
use statrs::statistics::Statistics;

use super::RegressionSummary;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ValuePoint {
    pub year: i32,
    pub property: f64,
    pub suburb: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub price: u64,
    pub kind: String,
    pub highlight: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlphaFactor {
    pub factor: String,
    pub weight: u8,
    pub score: u8,
    pub description: String,
}

/// Property-only stage of the LTV clip framework.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyClip {
    pub baseline_clip: f64,
    pub unit_risk_score: f64,
    pub risk_rating: String,
    pub property_risk_factor: f64,
    pub computed_clip: f64,
    pub max_eligible_advance: u64,
    pub proposed_advance: u64,
    pub actual_ltv: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastAssumptions {
    pub base_year: i32,
    pub property_base: f64,
    pub suburb_base: f64,
    pub property_rate: f64,
    pub suburb_rate: f64,
    pub horizon_years: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyAnalysis {
    pub historical: Vec<ValuePoint>,
    pub regression: RegressionSummary,
    pub clip: PropertyClip,
    pub transactions: Vec<Transaction>,
    pub alpha_factors: Vec<AlphaFactor>,
    pub forecast: ForecastAssumptions,
    /// Year and price of the last arm's-length sale, marked on the chart.
    pub actual_sale: (i32, f64),
}

impl PropertyAnalysis {
    /// Year-over-year simple returns as (property, suburb) pairs.
    pub fn yearly_returns(&self) -> Vec<(f64, f64)> {
        self.historical
            .windows(2)
            .map(|pair| {
                (
                    pair[1].property / pair[0].property - 1.0,
                    pair[1].suburb / pair[0].suburb - 1.0,
                )
            })
            .collect()
    }

    pub fn mean_property_return(&self) -> f64 {
        self.yearly_returns().iter().map(|(p, _)| *p).mean()
    }

    pub fn mean_suburb_return(&self) -> f64 {
        self.yearly_returns().iter().map(|(_, s)| *s).mean()
    }

    /// Compounded forecast from the base year through the loan horizon,
    /// base year included.
    pub fn forecast_path(&self) -> Vec<ValuePoint> {
        let f = &self.forecast;
        (0..=f.horizon_years)
            .map(|n| ValuePoint {
                year: f.base_year + n as i32,
                property: compound(f.property_base, f.property_rate, n),
                suburb: compound(f.suburb_base, f.suburb_rate, n),
            })
            .collect()
    }
}

pub fn compound(base: f64, rate: f64, years: u32) -> f64 {
    (base * (1.0 + rate).powi(years as i32)).round()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

impl Default for PropertyAnalysis {
    fn default() -> Self {
        let historical = [
            (2005, 1_420_000.0, 1_000_000.0),
            (2006, 1_500_000.0, 1_080_000.0),
            (2007, 1_570_000.0, 1_150_000.0),
            (2008, 1_550_000.0, 1_120_000.0),
            (2009, 1_630_000.0, 1_180_000.0),
            (2010, 1_550_000.0, 1_270_000.0),
            (2011, 1_800_000.0, 1_320_000.0),
            (2012, 1_860_000.0, 1_390_000.0),
            (2013, 2_000_000.0, 1_540_000.0),
            (2014, 2_140_000.0, 1_650_000.0),
            (2015, 2_240_000.0, 1_750_000.0),
            (2016, 2_350_000.0, 1_850_000.0),
            (2017, 2_460_000.0, 1_950_000.0),
            (2018, 2_540_000.0, 2_010_000.0),
            (2019, 2_800_000.0, 2_100_000.0),
        ]
        .into_iter()
        .map(|(year, property, suburb)| ValuePoint { year, property, suburb })
        .collect();

        Self {
            historical,
            regression: RegressionSummary {
                beta: 1.28,
                alpha: -1.5,
                covariance: 0.0011,
                correlation: 0.73,
                r_squared: 0.53,
            },
            clip: PropertyClip {
                baseline_clip: 70.0,
                unit_risk_score: 0.32,
                risk_rating: "Low".to_string(),
                property_risk_factor: 0.84,
                computed_clip: 59.0,
                max_eligible_advance: 1_650_000,
                proposed_advance: 500_000,
                actual_ltv: 18.8,
            },
            transactions: vec![
                Transaction { date: date(2019, 3, 15), price: 2_800_000, kind: "PropTrack AVM".to_string(), highlight: false },
                Transaction { date: date(2010, 1, 1), price: 1_550_000, kind: "Sale".to_string(), highlight: true },
                Transaction { date: date(1998, 10, 1), price: 825_000, kind: "Sale".to_string(), highlight: false },
                Transaction { date: date(1997, 8, 1), price: 750_000, kind: "Sale".to_string(), highlight: false },
            ],
            alpha_factors: vec![
                AlphaFactor {
                    factor: "Property Condition & Age".to_string(),
                    weight: 30,
                    score: 75,
                    description: "1925 build, recent renovations, structural integrity".to_string(),
                },
                AlphaFactor {
                    factor: "Location Micro-factors".to_string(),
                    weight: 25,
                    score: 85,
                    description: "Street position, views, proximity to amenities".to_string(),
                },
                AlphaFactor {
                    factor: "Property Features & Layout".to_string(),
                    weight: 25,
                    score: 80,
                    description: "4BR/3BA, 271sqm home, 650sqm land, functional layout".to_string(),
                },
                AlphaFactor {
                    factor: "Environmental & Planning".to_string(),
                    weight: 20,
                    score: 70,
                    description: "Flood/fire overlays, easements, zoning restrictions".to_string(),
                },
            ],
            forecast: ForecastAssumptions {
                base_year: 2019,
                property_base: 2_800_000.0,
                suburb_base: 2_100_000.0,
                property_rate: 0.055,
                suburb_rate: 0.059,
                horizon_years: 10,
            },
            actual_sale: (2010, 1_550_000.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yearly_returns_cover_every_consecutive_pair() {
        let analysis = PropertyAnalysis::default();
        let returns = analysis.yearly_returns();
        assert_eq!(returns.len(), analysis.historical.len() - 1);

        // 2005 -> 2006: 1.42m -> 1.50m, 1.00m -> 1.08m
        let (property, suburb) = returns[0];
        assert!((property - (1_500_000.0 / 1_420_000.0 - 1.0)).abs() < 1e-12);
        assert!((suburb - 0.08).abs() < 1e-12);
    }

    #[test]
    fn mean_returns_sit_in_the_single_digits() {
        let analysis = PropertyAnalysis::default();
        let property = analysis.mean_property_return();
        let suburb = analysis.mean_suburb_return();
        assert!(property > 0.04 && property < 0.07, "property mean {property}");
        assert!(suburb > 0.04 && suburb < 0.07, "suburb mean {suburb}");
    }

    #[test]
    fn forecast_path_compounds_from_the_underwriting_value() {
        let analysis = PropertyAnalysis::default();
        let path = analysis.forecast_path();
        assert_eq!(path.len(), 11);
        assert_eq!(path[0].year, 2019);
        assert_eq!(path[0].property, 2_800_000.0);
        assert_eq!(path[1].property, 2_954_000.0);
        assert_eq!(path[1].suburb, 2_223_900.0);
        assert_eq!(path.last().map(|p| p.year), Some(2029));
    }
}
