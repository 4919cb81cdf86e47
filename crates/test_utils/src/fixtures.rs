//! Pre-built Test Fixtures
//!
//! Ready-to-use test data. Values match the sample data files shipped with
//! earlier releases, so tests read like real sessions.

use chrono::NaiveDate;
use core_kernel::{BcryptHasher, PasswordHasher};
use domain_policy::{
    AutoDetails, Coverage, HomeDetails, LifeDetails, ParserRegistry, PolicyKind, Risk,
    VehicleType, parse_auto, parse_home, parse_life,
};
use domain_user::{Profile, User};
use rust_decimal_macros::dec;

/// Fixture for users
pub struct UserFixtures;

impl UserFixtures {
    /// Name of the default administrator
    pub const ADMIN_NAME: &'static str = "root";
    /// Password of the default administrator
    pub const ADMIN_PASSWORD: &'static str = "root123";

    /// The cheapest hasher bcrypt allows, to keep tests fast
    pub fn fast_hasher() -> BcryptHasher {
        BcryptHasher::new(BcryptHasher::MIN_COST).expect("minimum cost is valid")
    }

    /// The default administrator, hashed with [`fast_hasher`](Self::fast_hasher)
    pub fn admin() -> User {
        Self::user(Self::ADMIN_NAME, Self::ADMIN_PASSWORD, Profile::Admin)
    }

    /// A user with a freshly hashed password
    pub fn user(name: &str, password: &str, profile: Profile) -> User {
        User::new(name, password, profile, &Self::fast_hasher()).expect("valid fixture user")
    }

    /// A persisted user line with a hash of `password`
    pub fn user_line(name: &str, password: &str, profile: Profile) -> String {
        let hash = Self::fast_hasher().hash(password).expect("hashing succeeds");
        format!("{};{};{}", name, hash, profile.code())
    }
}

/// Fixture for policies
pub struct PolicyFixtures;

impl PolicyFixtures {
    /// A valid holder national ID
    pub const HOLDER: &'static str = "12345678A";

    /// Home details: 80 m2, 10000 contents, built 01/01/2000
    pub fn home() -> HomeDetails {
        HomeDetails {
            floor_area: 80,
            contents_value: dec!(10000.0),
            address: "Calle X".to_string(),
            construction_date: NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date"),
        }
    }

    /// Auto details: diesel car, third-party cover, no claims
    pub fn auto() -> AutoDetails {
        AutoDetails {
            description: "Seat Ibiza".to_string(),
            fuel: "Diesel".to_string(),
            vehicle_type: VehicleType::Car,
            coverage: Coverage::Thirds,
            roadside_assistance: true,
            claims: 0,
        }
    }

    /// Life details: born 10/03/1986, low risk
    pub fn life() -> LifeDetails {
        LifeDetails {
            birth_date: NaiveDate::from_ymd_opt(1986, 3, 10).expect("valid date"),
            risk: Risk::Low,
            indemnity: dec!(50000),
        }
    }

    /// Registry with the parsers of every variant
    pub fn parsers() -> ParserRegistry {
        let mut registry = ParserRegistry::new();
        registry
            .register(PolicyKind::Home, parse_home)
            .register(PolicyKind::Auto, parse_auto)
            .register(PolicyKind::Life, parse_life);
        registry
    }

    /// Sample policies file content, one line per variant
    pub fn sample_lines() -> Vec<String> {
        vec![
            "SeguroHogar;100001;12345678A;500.0;80;10000.0;Calle X;01/01/2000;".to_string(),
            "SeguroAuto;400000;12345678A;300;Seat Ibiza;Diesel;COCHE;TERCEROS;true;0".to_string(),
            "SeguroVida;800001;87654321B;200;10/03/1986;BAJO;50000".to_string(),
        ]
    }
}
