//! Damage taxonomy

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where on the vehicle the damage is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageLocation {
    Front,
    Rear,
    Side,
    Unknown,
}

impl DamageLocation {
    /// Locations a classifier can actually report
    pub const ASSESSABLE: [DamageLocation; 3] =
        [DamageLocation::Front, DamageLocation::Rear, DamageLocation::Side];

    pub fn as_str(&self) -> &'static str {
        match self {
            DamageLocation::Front => "front",
            DamageLocation::Rear => "rear",
            DamageLocation::Side => "side",
            DamageLocation::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DamageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How bad the damage is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageSeverity {
    Unknown,
    Minor,
    Moderate,
    Severe,
}

impl DamageSeverity {
    /// Severities a classifier can actually report, mildest first
    pub const ASSESSABLE: [DamageSeverity; 3] = [
        DamageSeverity::Minor,
        DamageSeverity::Moderate,
        DamageSeverity::Severe,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DamageSeverity::Minor => "minor",
            DamageSeverity::Moderate => "moderate",
            DamageSeverity::Severe => "severe",
            DamageSeverity::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DamageSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of inspecting a damage photo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageAssessment {
    pub location: DamageLocation,
    pub severity: DamageSeverity,
}

impl DamageAssessment {
    pub fn new(location: DamageLocation, severity: DamageSeverity) -> Self {
        Self { location, severity }
    }

    /// Assessment used when nothing could be determined
    pub fn unknown() -> Self {
        Self::new(DamageLocation::Unknown, DamageSeverity::Unknown)
    }

    /// True when either axis is `Unknown`
    pub fn is_partial(&self) -> bool {
        self.location == DamageLocation::Unknown || self.severity == DamageSeverity::Unknown
    }
}
