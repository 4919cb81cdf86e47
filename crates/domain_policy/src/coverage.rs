//! Closed enumerations describing what a policy covers
//!
//! Each enumeration has a code written to the policies file, a strict
//! `FromStr` and a lenient parse that falls back to a fixed default. The
//! lenient parse is what the loader and the console use, so a typo silently
//! becomes the default instead of failing.
//!
//! Codes are the historical data-file names (`TERCEROS`, `COCHE`, `MEDIO`...);
//! English names and the display descriptions are accepted as aliases.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::normalize_code;

use crate::error::PolicyError;

/// Auto policy coverage level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coverage {
    /// Third-party liability only
    Thirds,
    /// Third-party liability plus extras
    ThirdsExtended,
    /// Comprehensive with a 200 excess
    Excess200,
    /// Comprehensive with a 300 excess
    Excess300,
    /// Comprehensive with a 400 excess
    Excess400,
    /// Comprehensive with a 500 excess
    Excess500,
    /// Comprehensive, no excess
    AllRisk,
}

impl Coverage {
    /// Every coverage level
    pub const ALL: [Coverage; 7] = [
        Coverage::Thirds,
        Coverage::ThirdsExtended,
        Coverage::Excess200,
        Coverage::Excess300,
        Coverage::Excess400,
        Coverage::Excess500,
        Coverage::AllRisk,
    ];

    /// Code written to the policies file
    pub fn code(&self) -> &'static str {
        match self {
            Coverage::Thirds => "TERCEROS",
            Coverage::ThirdsExtended => "TERCEROS_AMPLIADO",
            Coverage::Excess200 => "FRANQUICIA_200",
            Coverage::Excess300 => "FRANQUICIA_300",
            Coverage::Excess400 => "FRANQUICIA_400",
            Coverage::Excess500 => "FRANQUICIA_500",
            Coverage::AllRisk => "TODO_RIESGO",
        }
    }

    /// Human description
    pub fn description(&self) -> &'static str {
        match self {
            Coverage::Thirds => "Terceros",
            Coverage::ThirdsExtended => "Terceros+",
            Coverage::Excess200 => "Franquicia200",
            Coverage::Excess300 => "Franquicia300",
            Coverage::Excess400 => "Franquicia400",
            Coverage::Excess500 => "Franquicia500",
            Coverage::AllRisk => "Todo Riesgo",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Coverage::Thirds => &["THIRDS"],
            // Older files carry the misspelled codes
            Coverage::ThirdsExtended => &["THIRDS_EXTENDED", "ERCEROS_AMPLIADO"],
            Coverage::Excess200 => &["EXCESS_200", "RANQUICIA_200"],
            Coverage::Excess300 => &["EXCESS_300"],
            Coverage::Excess400 => &["EXCESS_400"],
            Coverage::Excess500 => &["EXCESS_500"],
            Coverage::AllRisk => &["ALL_RISK"],
        }
    }

    /// Parses a coverage, falling back to `Thirds`
    pub fn parse_lenient(value: &str) -> Coverage {
        value.parse().unwrap_or(Coverage::Thirds)
    }
}

impl FromStr for Coverage {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = normalize_code(s);
        Coverage::ALL
            .into_iter()
            .find(|coverage| {
                coverage.code() == code
                    || normalize_code(coverage.description()) == code
                    || coverage.aliases().contains(&code.as_str())
            })
            .ok_or_else(|| PolicyError::unknown_code("coverage", s))
    }
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Kind of insured vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    Car,
    Motorcycle,
    Truck,
}

impl VehicleType {
    /// Every vehicle type
    pub const ALL: [VehicleType; 3] = [VehicleType::Car, VehicleType::Motorcycle, VehicleType::Truck];

    /// Code written to the policies file
    pub fn code(&self) -> &'static str {
        match self {
            VehicleType::Car => "COCHE",
            VehicleType::Motorcycle => "MOTO",
            VehicleType::Truck => "CAMION",
        }
    }

    /// Parses a vehicle type, falling back to `Car`
    pub fn parse_lenient(value: &str) -> VehicleType {
        value.parse().unwrap_or(VehicleType::Car)
    }
}

impl FromStr for VehicleType {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_code(s).as_str() {
            "COCHE" | "CAR" => Ok(VehicleType::Car),
            "MOTO" | "MOTORCYCLE" => Ok(VehicleType::Motorcycle),
            "CAMION" | "TRUCK" => Ok(VehicleType::Truck),
            _ => Err(PolicyError::unknown_code("vehicle type", s)),
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Life policy risk level, carrying the interest applied at renewal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Risk {
    Low,
    Medium,
    High,
}

impl Risk {
    /// Every risk level
    pub const ALL: [Risk; 3] = [Risk::Low, Risk::Medium, Risk::High];

    /// Code written to the policies file
    pub fn code(&self) -> &'static str {
        match self {
            Risk::Low => "BAJO",
            Risk::Medium => "MEDIO",
            Risk::High => "ALTO",
        }
    }

    /// Interest associated with the risk level
    pub fn applied_interest(&self) -> Decimal {
        match self {
            Risk::Low => dec!(2.0),
            Risk::Medium => dec!(5.0),
            Risk::High => dec!(10.0),
        }
    }

    /// Parses a risk level, falling back to `Medium`
    pub fn parse_lenient(value: &str) -> Risk {
        value.parse().unwrap_or(Risk::Medium)
    }
}

impl FromStr for Risk {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_code(s).as_str() {
            "BAJO" | "LOW" => Ok(Risk::Low),
            "MEDIO" | "MEDIUM" => Ok(Risk::Medium),
            "ALTO" | "HIGH" => Ok(Risk::High),
            _ => Err(PolicyError::unknown_code("risk level", s)),
        }
    }
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
