// src/data/application.rs
use chrono::NaiveDate;
use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoanApplication {
    pub id: String,
    pub status: String,
    pub submitted_on: NaiveDate,
    pub borrower: Borrower,
    pub property: PropertyDetails,
    pub loan: LoanTerms,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Borrower {
    pub name: String,
    pub ages: String,
    pub annual_income: u64,
    pub employment_status: String,
    pub mortgage_balance: u64,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyDetails {
    pub address: String,
    pub suburb: String,
    pub state: String,
    pub postcode: String,
    pub property_type: String,
    pub land_size_sqm: u32,
    pub home_size_sqm: u32,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub year_built: u16,
    pub avm_value: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoanTerms {
    pub amount: u64,
    pub purpose: String,
    pub ltv: f64,
    pub term_years: u32,
    pub interest_rate: f64,
    pub origination_fee: f64,
    pub monthly_payment: u64,
}

impl PropertyDetails {
    pub fn locality(&self) -> String {
        format!("{}, {} {}", self.suburb, self.state, self.postcode)
    }
}

impl Default for LoanApplication {
    fn default() -> Self {
        Self {
            id: "EQH-2020-0011".to_string(),
            status: "Under Review".to_string(),
            submitted_on: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default(),
            borrower: Borrower {
                name: "Thomas & Sabrina".to_string(),
                ages: "66 & 66".to_string(),
                annual_income: 200_000,
                employment_status: "Employed".to_string(),
                mortgage_balance: 0,
                email: "thomas.sabrina@example.com".to_string(),
                phone: "0412 345 678".to_string(),
            },
            property: PropertyDetails {
                address: "49A Central Avenue".to_string(),
                suburb: "Mosman".to_string(),
                state: "NSW".to_string(),
                postcode: "2088".to_string(),
                property_type: "House".to_string(),
                land_size_sqm: 676,
                home_size_sqm: 271,
                bedrooms: 4,
                bathrooms: 3,
                year_built: 1998,
                avm_value: 2_800_000,
            },
            loan: LoanTerms {
                amount: 500_000,
                purpose: "Family assistance (gift to adult children)".to_string(),
                ltv: 17.86,
                term_years: 10,
                interest_rate: 5.0,
                origination_fee: 3.0,
                monthly_payment: 0,
            },
        }
    }
}
