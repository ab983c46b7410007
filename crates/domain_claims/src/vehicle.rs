//! Vehicle and insurer reference data
//!
//! Users type the make and the insurance company as free text. Both are
//! normalized once into closed enumerations so the valuation tables can be
//! written as exhaustive matches; anything unrecognised lands on `Other`,
//! which carries the table defaults.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Vehicle manufacturers with their own rows in the pricing tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleMake {
    // Japanese
    Toyota,
    Honda,
    Nissan,
    Suzuki,
    Lexus,
    // Korean
    Hyundai,
    Kia,
    // Indian
    Maruti,
    Tata,
    Mahindra,
    // European
    Volkswagen,
    Skoda,
    Bmw,
    Mercedes,
    Audi,
    Renault,
    // American
    Ford,
    Chevrolet,
    Jeep,
    // Chinese
    Mg,
    /// Any make without a dedicated table row
    Other,
}

impl VehicleMake {
    /// Every make with a dedicated table row
    pub const KNOWN: [VehicleMake; 20] = [
        VehicleMake::Toyota,
        VehicleMake::Honda,
        VehicleMake::Nissan,
        VehicleMake::Suzuki,
        VehicleMake::Lexus,
        VehicleMake::Hyundai,
        VehicleMake::Kia,
        VehicleMake::Maruti,
        VehicleMake::Tata,
        VehicleMake::Mahindra,
        VehicleMake::Volkswagen,
        VehicleMake::Skoda,
        VehicleMake::Bmw,
        VehicleMake::Mercedes,
        VehicleMake::Audi,
        VehicleMake::Renault,
        VehicleMake::Ford,
        VehicleMake::Chevrolet,
        VehicleMake::Jeep,
        VehicleMake::Mg,
    ];

    /// Normalizes user input (trimmed, case-insensitive)
    pub fn parse(input: &str) -> Self {
        let key = input.trim().to_lowercase();
        Self::KNOWN
            .into_iter()
            .find(|make| make.key() == key)
            .unwrap_or(VehicleMake::Other)
    }

    /// Lowercase lookup key
    pub fn key(&self) -> &'static str {
        match self {
            VehicleMake::Toyota => "toyota",
            VehicleMake::Honda => "honda",
            VehicleMake::Nissan => "nissan",
            VehicleMake::Suzuki => "suzuki",
            VehicleMake::Lexus => "lexus",
            VehicleMake::Hyundai => "hyundai",
            VehicleMake::Kia => "kia",
            VehicleMake::Maruti => "maruti",
            VehicleMake::Tata => "tata",
            VehicleMake::Mahindra => "mahindra",
            VehicleMake::Volkswagen => "volkswagen",
            VehicleMake::Skoda => "skoda",
            VehicleMake::Bmw => "bmw",
            VehicleMake::Mercedes => "mercedes",
            VehicleMake::Audi => "audi",
            VehicleMake::Renault => "renault",
            VehicleMake::Ford => "ford",
            VehicleMake::Chevrolet => "chevrolet",
            VehicleMake::Jeep => "jeep",
            VehicleMake::Mg => "mg",
            VehicleMake::Other => "default",
        }
    }

    /// Depreciation tier of the brand
    pub fn tier(&self) -> BrandTier {
        match self {
            VehicleMake::Bmw | VehicleMake::Mercedes | VehicleMake::Audi | VehicleMake::Lexus => {
                BrandTier::Premium
            }
            VehicleMake::Maruti | VehicleMake::Tata => BrandTier::Value,
            _ => BrandTier::Standard,
        }
    }
}

impl fmt::Display for VehicleMake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Brand grouping that drives yearly depreciation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandTier {
    /// Luxury brands that lose value quickly
    Premium,
    /// Budget brands that hold value in the Indian market
    Value,
    Standard,
}

/// Insurers with a known coverage ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsuranceCompany {
    HdfcErgo,
    IciciLombard,
    BajajAllianz,
    NewIndiaAssurance,
    TataAig,
    RelianceGeneral,
    LibertyGeneral,
    OrientalInsurance,
    UnitedIndia,
    NationalInsurance,
    GoDigit,
    Acko,
    SbiGeneral,
    RoyalSundaram,
    ShriramGeneral,
    /// Any insurer without a dedicated table row
    Other,
}

impl InsuranceCompany {
    /// Every insurer with a dedicated table row
    pub const KNOWN: [InsuranceCompany; 15] = [
        InsuranceCompany::HdfcErgo,
        InsuranceCompany::IciciLombard,
        InsuranceCompany::BajajAllianz,
        InsuranceCompany::NewIndiaAssurance,
        InsuranceCompany::TataAig,
        InsuranceCompany::RelianceGeneral,
        InsuranceCompany::LibertyGeneral,
        InsuranceCompany::OrientalInsurance,
        InsuranceCompany::UnitedIndia,
        InsuranceCompany::NationalInsurance,
        InsuranceCompany::GoDigit,
        InsuranceCompany::Acko,
        InsuranceCompany::SbiGeneral,
        InsuranceCompany::RoyalSundaram,
        InsuranceCompany::ShriramGeneral,
    ];

    /// Normalizes user input (trimmed, case-insensitive)
    pub fn parse(input: &str) -> Self {
        let key = input.trim().to_lowercase();
        Self::KNOWN
            .into_iter()
            .find(|company| company.key() == key)
            .unwrap_or(InsuranceCompany::Other)
    }

    /// Lowercase lookup key, as users usually write the name
    pub fn key(&self) -> &'static str {
        match self {
            InsuranceCompany::HdfcErgo => "hdfc ergo",
            InsuranceCompany::IciciLombard => "icici lombard",
            InsuranceCompany::BajajAllianz => "bajaj allianz",
            InsuranceCompany::NewIndiaAssurance => "new india assurance",
            InsuranceCompany::TataAig => "tata aig",
            InsuranceCompany::RelianceGeneral => "reliance general",
            InsuranceCompany::LibertyGeneral => "liberty general",
            InsuranceCompany::OrientalInsurance => "oriental insurance",
            InsuranceCompany::UnitedIndia => "united india",
            InsuranceCompany::NationalInsurance => "national insurance",
            InsuranceCompany::GoDigit => "go digit",
            InsuranceCompany::Acko => "acko",
            InsuranceCompany::SbiGeneral => "sbi general",
            InsuranceCompany::RoyalSundaram => "royal sundaram",
            InsuranceCompany::ShriramGeneral => "shriram general",
            InsuranceCompany::Other => "default",
        }
    }
}

impl fmt::Display for InsuranceCompany {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Vehicle and policy details as entered by the claimant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleDetails {
    /// Brand name, free text
    pub make: String,
    /// Model name, free text (not used in valuation)
    pub model: String,
    /// Manufacturing year
    pub year: i32,
    /// Insurance company name, free text
    pub company: String,
}

impl VehicleDetails {
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        company: impl Into<String>,
    ) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
            company: company.into(),
        }
    }

    /// Canonical make used by the pricing tables
    pub fn make_key(&self) -> VehicleMake {
        VehicleMake::parse(&self.make)
    }

    /// Canonical insurer used by the coverage table
    pub fn insurer_key(&self) -> InsuranceCompany {
        InsuranceCompany::parse(&self.company)
    }

    /// Normalized view consumed by the calculator
    pub fn profile(&self) -> VehicleProfile {
        VehicleProfile {
            make: self.make_key(),
            year: self.year,
        }
    }
}

/// The part of a vehicle the calculator reads: canonical make and year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleProfile {
    pub make: VehicleMake,
    pub year: i32,
}

impl VehicleProfile {
    pub fn new(make: VehicleMake, year: i32) -> Self {
        Self { make, year }
    }

    /// Age in whole years relative to `current_year`; negative for future model years
    pub fn age(&self, current_year: i32) -> i32 {
        current_year.saturating_sub(self.year)
    }
}
