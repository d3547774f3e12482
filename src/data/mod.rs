// src/data/mod.rs
use serde::{Serialize, Deserialize};

pub mod application;
pub mod property;
pub mod suburb;
pub mod traffic_light;
pub mod portfolio;
pub mod underwriting;
pub mod projections;

// Re-export commonly used types
pub use application::LoanApplication;
pub use property::PropertyAnalysis;
pub use suburb::SuburbAnalysis;
pub use traffic_light::{SuburbData, Zone};
pub use portfolio::PortfolioAnalysis;
pub use underwriting::UnderwritingMemo;
pub use projections::FinancialProjections;

/// Ordinary least squares summary of one return series on another.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegressionSummary {
    pub beta: f64,
    /// Percent per annum.
    pub alpha: f64,
    pub covariance: f64,
    pub correlation: f64,
    pub r_squared: f64,
}

impl RegressionSummary {
    pub fn fitted(&self, x: f64) -> f64 {
        self.alpha + self.beta * x
    }
}

/// Every figure the case study displays, grouped per slide.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CaseStudyData {
    pub application: LoanApplication,
    pub property: PropertyAnalysis,
    pub suburb: SuburbAnalysis,
    pub traffic_light: SuburbData,
    pub portfolio: PortfolioAnalysis,
    pub underwriting: UnderwritingMemo,
    pub projections: FinancialProjections,
}
