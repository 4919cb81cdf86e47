//! Property-Based Test Generators
//!
//! Proptest strategies producing data that satisfies the domain invariants.

use chrono::NaiveDate;
use core_kernel::PolicyNumber;
use domain_policy::{
    AutoDetails, Coverage, HomeDetails, LifeDetails, Policy, PolicyDetails, Risk, VehicleType,
};
use domain_user::Profile;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for profiles
pub fn profile_strategy() -> impl Strategy<Value = Profile> {
    prop::sample::select(Profile::ALL.to_vec())
}

/// Strategy for national IDs of the `12345678A` shape
pub fn national_id_strategy() -> impl Strategy<Value = String> {
    "[0-9]{8}[A-Z]"
}

/// Strategy for positive amounts with up to two decimals
pub fn positive_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000, 0u32..=2).prop_map(|(units, scale)| Decimal::new(units, scale))
}

/// Strategy for dates between 1930 and 2024
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1930i32..2025, 1u32..=12, 1u32..=28)
        .prop_map(|(year, month, day)| NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default())
}

/// Strategy for variant details of any kind
pub fn policy_details_strategy() -> impl Strategy<Value = PolicyDetails> {
    let home = (0u32..2_000, positive_amount_strategy(), "[A-Za-z][A-Za-z0-9 ]{0,24}", date_strategy())
        .prop_map(|(floor_area, contents_value, address, construction_date)| {
            PolicyDetails::Home(HomeDetails {
                floor_area,
                contents_value,
                address: address.trim().to_string(),
                construction_date,
            })
        });

    let auto = (
        "[A-Za-z0-9]{1,16}",
        "[A-Za-z]{1,10}",
        prop::sample::select(VehicleType::ALL.to_vec()),
        prop::sample::select(Coverage::ALL.to_vec()),
        any::<bool>(),
        0u32..20,
    )
        .prop_map(|(description, fuel, vehicle_type, coverage, roadside_assistance, claims)| {
            PolicyDetails::Auto(AutoDetails {
                description,
                fuel,
                vehicle_type,
                coverage,
                roadside_assistance,
                claims,
            })
        });

    let life = (date_strategy(), prop::sample::select(Risk::ALL.to_vec()), positive_amount_strategy())
        .prop_map(|(birth_date, risk, indemnity)| {
            PolicyDetails::Life(LifeDetails { birth_date, risk, indemnity })
        });

    prop_oneof![home, auto, life]
}

/// Strategy for whole policies numbered within their variant's range
pub fn policy_strategy() -> impl Strategy<Value = Policy> {
    (policy_details_strategy(), 0u32..50_000, national_id_strategy(), positive_amount_strategy())
        .prop_filter_map("valid policy", |(details, offset, holder, premium)| {
            let number = PolicyNumber::new(details.kind().first_number().value() + offset);
            Policy::new(number, &holder, premium, details).ok()
        })
}
