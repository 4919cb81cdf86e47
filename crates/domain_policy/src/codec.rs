//! Line codec for persisted policies
//!
//! Every policy is one line: `Discriminator;number;holder;premium;<fields>`.
//!
//! | Discriminator | Variant fields                                      |
//! |---------------|-----------------------------------------------------|
//! | `SeguroHogar` | `area;contents;address;dd/MM/yyyy;`                 |
//! | `SeguroAuto`  | `description;fuel;vehicle;coverage;assistance;claims` |
//! | `SeguroVida`  | `dd/MM/yyyy;risk;indemnity`                         |
//!
//! Home lines keep a trailing separator so files written by earlier releases
//! stay byte-compatible.
//!
//! Parsers are plain functions over the fields that follow the
//! discriminator. They return `None` for anything they cannot read; the
//! loader skips those lines.

use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;
use tracing::debug;

use core_kernel::{format_date, join_record, parse_date, split_record, PolicyNumber};

use crate::coverage::{Coverage, Risk, VehicleType};
use crate::policy::{AutoDetails, HomeDetails, LifeDetails, Policy, PolicyDetails, PolicyKind};

/// Builds a policy from the fields after the discriminator
pub type PolicyParser = fn(&[&str]) -> Option<Policy>;

const HOME_FIELD_COUNT: usize = 7;
const AUTO_FIELD_COUNT: usize = 9;
const LIFE_FIELD_COUNT: usize = 6;

/// Serializes a policy to its persisted line
pub fn to_record(policy: &Policy) -> String {
    let mut fields = vec![
        policy.type_name().to_string(),
        policy.number().to_string(),
        policy.holder_id().to_string(),
        policy.premium().to_string(),
    ];

    match policy.details() {
        PolicyDetails::Home(home) => {
            fields.push(home.floor_area.to_string());
            fields.push(home.contents_value.to_string());
            fields.push(home.address.clone());
            fields.push(format_date(home.construction_date));
            fields.push(String::new());
        }
        PolicyDetails::Auto(auto) => {
            fields.push(auto.description.clone());
            fields.push(auto.fuel.clone());
            fields.push(auto.vehicle_type.code().to_string());
            fields.push(auto.coverage.code().to_string());
            fields.push(auto.roadside_assistance.to_string());
            fields.push(auto.claims.to_string());
        }
        PolicyDetails::Life(life) => {
            fields.push(format_date(life.birth_date));
            fields.push(life.risk.code().to_string());
            fields.push(life.indemnity.to_string());
        }
    }

    join_record(fields)
}

/// Parses an amount in plain (`500.5`) or scientific (`5.005E2`) notation
pub fn parse_amount(value: &str) -> Option<Decimal> {
    let value = value.trim();
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
}

/// Parses a flag: `true` in any case, anything else is `false`
pub fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

fn parse_number(value: &str) -> Option<PolicyNumber> {
    value.parse().ok()
}

fn parse_count(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

/// Parses the fields of a home policy line
pub fn parse_home(fields: &[&str]) -> Option<Policy> {
    if fields.len() < HOME_FIELD_COUNT {
        return None;
    }
    let details = PolicyDetails::Home(HomeDetails {
        floor_area: parse_count(fields[3])?,
        contents_value: parse_amount(fields[4])?,
        address: fields[5].trim().to_string(),
        construction_date: parse_date(fields[6]).ok()?,
    });
    Policy::new(parse_number(fields[0])?, fields[1], parse_amount(fields[2])?, details).ok()
}

/// Parses the fields of an auto policy line
pub fn parse_auto(fields: &[&str]) -> Option<Policy> {
    if fields.len() < AUTO_FIELD_COUNT {
        return None;
    }
    let details = PolicyDetails::Auto(AutoDetails {
        description: fields[3].trim().to_string(),
        fuel: fields[4].trim().to_string(),
        vehicle_type: VehicleType::parse_lenient(fields[5]),
        coverage: Coverage::parse_lenient(fields[6]),
        roadside_assistance: parse_flag(fields[7]),
        claims: parse_count(fields[8])?,
    });
    Policy::new(parse_number(fields[0])?, fields[1], parse_amount(fields[2])?, details).ok()
}

/// Parses the fields of a life policy line
pub fn parse_life(fields: &[&str]) -> Option<Policy> {
    if fields.len() < LIFE_FIELD_COUNT {
        return None;
    }
    let details = PolicyDetails::Life(LifeDetails {
        birth_date: parse_date(fields[3]).ok()?,
        risk: Risk::parse_lenient(fields[4]),
        indemnity: parse_amount(fields[5])?,
    });
    Policy::new(parse_number(fields[0])?, fields[1], parse_amount(fields[2])?, details).ok()
}

/// Maps discriminators to policy parsers
#[derive(Debug, Clone, Default)]
pub struct ParserRegistry {
    parsers: HashMap<String, PolicyParser>,
}

impl ParserRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the parser for a variant under its type name
    pub fn register(&mut self, kind: PolicyKind, parser: PolicyParser) -> &mut Self {
        self.parsers.insert(kind.type_name().to_string(), parser);
        self
    }

    /// Returns the parser for a discriminator
    pub fn get(&self, discriminator: &str) -> Option<PolicyParser> {
        self.parsers.get(discriminator.trim()).copied()
    }

    /// Returns true if no parser is registered
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Parses a full persisted line
    ///
    /// Returns `None` for an unknown discriminator or unreadable fields.
    pub fn parse_line(&self, line: &str) -> Option<Policy> {
        let fields = split_record(line);
        let (discriminator, rest) = fields.split_first()?;
        let Some(parser) = self.get(discriminator) else {
            debug!(discriminator = %discriminator, "No parser registered");
            return None;
        };
        parser(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn registry() -> ParserRegistry {
        let mut registry = ParserRegistry::new();
        registry
            .register(PolicyKind::Home, parse_home)
            .register(PolicyKind::Auto, parse_auto)
            .register(PolicyKind::Life, parse_life);
        registry
    }

    #[test]
    fn test_home_line_keeps_trailing_separator() {
        let policy = Policy::new(
            PolicyNumber::new(100001),
            "12345678A",
            dec!(500.0),
            PolicyDetails::Home(HomeDetails {
                floor_area: 80,
                contents_value: dec!(10000.0),
                address: "Calle X".to_string(),
                construction_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            }),
        )
        .unwrap();

        let line = to_record(&policy);

        assert_eq!(line, "SeguroHogar;100001;12345678A;500.0;80;10000.0;Calle X;01/01/2000;");
        assert_eq!(registry().parse_line(&line), Some(policy));
    }

    #[test]
    fn test_auto_line() {
        let line = "SeguroAuto;400000;12345678A;300;Seat Ibiza;Diesel;COCHE;TODO_RIESGO;TRUE;2";
        let policy = registry().parse_line(line).unwrap();

        match policy.details() {
            PolicyDetails::Auto(auto) => {
                assert_eq!(auto.coverage, Coverage::AllRisk);
                assert!(auto.roadside_assistance);
                assert_eq!(auto.claims, 2);
            }
            other => panic!("expected auto details, got {:?}", other),
        }
        assert_eq!(to_record(&policy), line.replace("TRUE", "true"));
    }

    #[test]
    fn test_life_line_with_unknown_risk_defaults() {
        let policy = registry()
            .parse_line("SeguroVida;800001;12345678A;200;10/03/1986;EXTREMO;50000")
            .unwrap();

        match policy.details() {
            PolicyDetails::Life(life) => assert_eq!(life.risk, Risk::Medium),
            other => panic!("expected life details, got {:?}", other),
        }
    }

    #[test]
    fn test_scientific_amounts() {
        assert_eq!(parse_amount("5.005E2"), Some(dec!(500.5)));
        assert_eq!(parse_amount("1,5"), None);
    }

    #[test]
    fn test_flag_parsing() {
        assert!(parse_flag("True"));
        assert!(!parse_flag("yes"));
    }

    #[test]
    fn test_unreadable_lines() {
        let registry = registry();
        assert_eq!(registry.parse_line("SeguroBarco;1;2;3"), None);
        assert_eq!(registry.parse_line("SeguroVida;800001;12345678A;200"), None);
        assert_eq!(registry.parse_line("SeguroVida;x;12345678A;200;10/03/1986;BAJO;1"), None);
        assert_eq!(registry.parse_line("SeguroVida;800001;12345678A;-5;10/03/1986;BAJO;1"), None);
        assert_eq!(registry.parse_line(""), None);
    }
}
