//! Policy Service Tests
//!
//! # Test Organization
//!
//! - `contracting` - number issuance per variant and input validation
//! - `queries` - listing by variant and by logical type name
//! - `deletion` - removal by number
//! - `renewal` - next-year premiums through the service

use chrono::NaiveDate;
use core_kernel::PolicyNumber;
use domain_policy::{
    AutoDetails, Coverage, HomeDetails, InMemoryPolicyRepository, LifeDetails, PolicyError,
    PolicyKind, PolicyService, Risk, VehicleType,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn new_service() -> PolicyService {
    PolicyService::new(Box::new(InMemoryPolicyRepository::new()))
}

fn home() -> HomeDetails {
    HomeDetails {
        floor_area: 80,
        contents_value: dec!(10000.0),
        address: "Calle X".to_string(),
        construction_date: date(2000, 1, 1),
    }
}

fn auto(claims: u32) -> AutoDetails {
    AutoDetails {
        description: "Seat Ibiza".to_string(),
        fuel: "Gasolina".to_string(),
        vehicle_type: VehicleType::Car,
        coverage: Coverage::Excess300,
        roadside_assistance: false,
        claims,
    }
}

fn life() -> LifeDetails {
    LifeDetails {
        birth_date: date(1990, 5, 20),
        risk: Risk::Low,
        indemnity: dec!(60000),
    }
}

mod contracting {
    use super::*;

    #[test]
    fn test_first_numbers_per_variant() {
        let mut service = new_service();

        assert_eq!(service.contract_home("12345678A", dec!(500.0), home()).unwrap().value(), 100001);
        assert_eq!(service.contract_auto("12345678A", dec!(300), auto(0)).unwrap().value(), 400000);
        assert_eq!(service.contract_life("12345678A", dec!(200), life()).unwrap().value(), 800001);
        assert_eq!(service.contract_home("87654321B", dec!(450), home()).unwrap().value(), 100002);
    }

    #[test]
    fn test_blank_holder_rejected() {
        let mut service = new_service();

        let result = service.contract_life(" ", dec!(200), life());

        assert!(matches!(result, Err(PolicyError::Validation(_))));
        assert!(service.list_all().is_empty());
    }

    #[test]
    fn test_separator_in_description_rejected() {
        let mut service = new_service();
        let mut details = auto(0);
        details.description = "Seat;Ibiza".to_string();

        assert!(service.contract_auto("12345678A", dec!(300), details).is_err());
        assert_eq!(service.contract_auto("12345678A", dec!(300), auto(0)).unwrap().value(), 400000);
    }

    #[test]
    fn test_contracted_policy_is_findable() {
        let mut service = new_service();
        let number = service.contract_life("12345678A", dec!(200), life()).unwrap();

        let policy = service.find(number).unwrap();
        assert_eq!(policy.holder_id(), "12345678A");
        assert_eq!(policy.kind(), PolicyKind::Life);
    }
}

mod queries {
    use super::*;

    #[test]
    fn test_list_by_kind_and_type() {
        let mut service = new_service();
        service.contract_home("12345678A", dec!(500), home()).unwrap();
        service.contract_auto("12345678A", dec!(300), auto(1)).unwrap();
        service.contract_auto("12345678A", dec!(310), auto(2)).unwrap();

        assert_eq!(service.list_all().len(), 3);
        assert_eq!(service.list_by_kind(PolicyKind::Auto).len(), 2);
        assert_eq!(service.list_by_type("SeguroHogar").len(), 1);
        assert!(service.list_by_type("SeguroVida").is_empty());
        assert!(service.list_by_type("Hogar").is_empty());
    }
}

mod deletion {
    use super::*;

    #[test]
    fn test_root_home_scenario() {
        let mut service = new_service();
        let number = service.contract_home("12345678A", dec!(500.0), home()).unwrap();
        assert_eq!(number, PolicyNumber::new(100001));

        service.delete(number).unwrap();

        assert!(service.list_by_kind(PolicyKind::Home).is_empty());
        assert!(service.find(number).is_none());
    }

    #[test]
    fn test_delete_missing() {
        let mut service = new_service();
        assert!(matches!(
            service.delete(PolicyNumber::new(100001)),
            Err(PolicyError::NotFound(_))
        ));
    }
}

mod renewal {
    use super::*;

    #[test]
    fn test_auto_claims_adjustment() {
        let mut service = new_service();
        let number = service.contract_auto("12345678A", dec!(100), auto(5)).unwrap();

        // 1 + 0 + 5 * 0.02
        let quote = service.renewal_quote(number, dec!(0), date(2026, 10, 19)).unwrap();
        assert_eq!(quote, dec!(110));
    }

    #[test]
    fn test_life_adjustment_uses_risk_interest() {
        let mut service = new_service();
        let number = service.contract_life("12345678A", dec!(100), life()).unwrap();

        // 36 years * 0.05 = 1.8, low risk interest 2.0
        let quote = service
            .renewal_quote(number, Risk::Low.applied_interest(), date(2026, 10, 19))
            .unwrap();
        assert_eq!(quote, dec!(480));
    }

    #[test]
    fn test_out_of_range_quote_is_an_error() {
        let mut service = new_service();
        let number = service.contract_life("12345678A", Decimal::MAX, life()).unwrap();

        let quote = service.renewal_quote(number, dec!(0), date(2026, 1, 1));

        assert!(matches!(quote, Err(PolicyError::PremiumOverflow(n)) if n == number));
    }
}
