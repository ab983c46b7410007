//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for vehicles, photos, users and clocks.
//! Fixtures named after a scenario are fixed; the `random_*` ones draw from
//! `fake` for tests that only need plausible text.

use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use fake::Fake;

use core_kernel::{FixedClock, UserId};
use domain_claims::{ClaimImage, User, VehicleDetails};

/// Calendar year all fixture valuations are measured against
pub const VALUATION_YEAR: i32 = 2025;

/// Fixture for vehicle test data
pub struct VehicleFixtures;

impl VehicleFixtures {
    /// Brand-new Toyota insured with HDFC ERGO
    pub fn new_toyota() -> VehicleDetails {
        VehicleDetails::new("Toyota", "Corolla", VALUATION_YEAR, "HDFC ERGO")
    }

    /// Ten-year-old BMW with an insurer missing from the coverage table
    pub fn old_bmw() -> VehicleDetails {
        VehicleDetails::new("BMW", "3 Series", VALUATION_YEAR - 10, "Acme Mutual")
    }

    /// Budget hatchback in its mid-age band
    pub fn mid_age_maruti() -> VehicleDetails {
        VehicleDetails::new("maruti", "Swift", VALUATION_YEAR - 5, "acko")
    }

    /// Make and insurer that both fall back to the defaults
    pub fn unlisted() -> VehicleDetails {
        VehicleDetails::new("Tesla", "Model 3", VALUATION_YEAR - 2, "Nobody Insurance")
    }
}

/// Fixture for damage photos
pub struct ImageFixtures;

impl ImageFixtures {
    pub fn jpeg() -> ClaimImage {
        ClaimImage::new("data:image/jpeg;base64,/9j/4AAQSkZJRgABAQ==").with_content_type("image/jpeg")
    }

    pub fn png() -> ClaimImage {
        ClaimImage::new("data:image/png;base64,iVBORw0KGgoAAAANSUhEUg==").with_content_type("image/png")
    }

    /// An image with no data, rejected as missing
    pub fn blank() -> ClaimImage {
        ClaimImage::new("   ")
    }
}

/// Fixture for users
pub struct UserFixtures;

impl UserFixtures {
    pub fn demo() -> User {
        User::demo()
    }

    /// A freshly registered user with a fake name and email
    pub fn random() -> User {
        let username: String = Name().fake();
        let email: String = SafeEmail().fake();
        User::new(UserId::new(), username, email)
    }
}

/// Fixture for free text
pub struct TextFixtures;

impl TextFixtures {
    pub fn description() -> &'static str {
        "Dent and scraped paint on the front bumper"
    }

    /// A plausible damage description of a few words
    pub fn random_description() -> String {
        Sentence(3..10).fake()
    }
}

/// Fixture for clocks
pub struct ClockFixtures;

impl ClockFixtures {
    /// A clock fixed in [`VALUATION_YEAR`]
    pub fn valuation_clock() -> FixedClock {
        Self::in_year(VALUATION_YEAR)
    }

    /// A clock fixed in `year`
    ///
    /// # Panics
    ///
    /// Panics if `year` is outside chrono's supported range
    pub fn in_year(year: i32) -> FixedClock {
        FixedClock::in_year(year).unwrap_or_else(|| panic!("unsupported fixture year {}", year))
    }
}
