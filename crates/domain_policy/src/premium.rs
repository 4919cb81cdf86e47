//! Renewal premium calculation
//!
//! Next year's premium is `premium * (1 + interest + adjustment)`, where the
//! interest is supplied by the caller and the adjustment depends on the
//! variant:
//!
//! | Variant | Adjustment                                   |
//! |---------|----------------------------------------------|
//! | Home    | `floor(years since construction / 5) * 0.02` |
//! | Auto    | `claims filed * 2 / 100`                     |
//! | Life    | `age in years * 0.05`                        |
//!
//! Years are counted in calendar years against the caller's `today`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::years_between;

use crate::policy::{Policy, PolicyDetails};

/// Increment per completed five-year cycle of building age
pub const HOME_AGE_INCREMENT: Decimal = dec!(0.02);
/// Length of a building age cycle, in years
pub const HOME_AGE_CYCLE_YEARS: i32 = 5;
/// Percentage added per claim filed
pub const AUTO_CLAIM_PERCENT: Decimal = dec!(2);
/// Increment per year of the insured's age
pub const LIFE_AGE_INCREMENT: Decimal = dec!(0.05);

impl Policy {
    /// Variant-specific renewal adjustment as of `today`
    pub fn renewal_adjustment(&self, today: NaiveDate) -> Decimal {
        match self.details() {
            PolicyDetails::Home(home) => {
                let antiquity = years_between(home.construction_date, today);
                Decimal::from(antiquity / HOME_AGE_CYCLE_YEARS) * HOME_AGE_INCREMENT
            }
            PolicyDetails::Auto(auto) => {
                Decimal::from(auto.claims) * (AUTO_CLAIM_PERCENT / dec!(100))
            }
            PolicyDetails::Life(life) => {
                Decimal::from(years_between(life.birth_date, today)) * LIFE_AGE_INCREMENT
            }
        }
    }

    /// Premium for the next year at the given interest
    ///
    /// Returns `None` if the result does not fit in a `Decimal`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use core_kernel::PolicyNumber;
    /// use domain_policy::{AutoDetails, Coverage, Policy, PolicyDetails, VehicleType};
    /// use rust_decimal_macros::dec;
    ///
    /// let policy = Policy::new(
    ///     PolicyNumber::new(400000),
    ///     "12345678A",
    ///     dec!(100),
    ///     PolicyDetails::Auto(AutoDetails {
    ///         description: "Seat Ibiza".to_string(),
    ///         fuel: "Diesel".to_string(),
    ///         vehicle_type: VehicleType::Car,
    ///         coverage: Coverage::Thirds,
    ///         roadside_assistance: true,
    ///         claims: 3,
    ///     }),
    /// ).unwrap();
    ///
    /// let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    /// assert_eq!(policy.next_year_premium(dec!(0.1), today), Some(dec!(116)));
    /// ```
    pub fn next_year_premium(&self, interest: Decimal, today: NaiveDate) -> Option<Decimal> {
        let factor = Decimal::ONE
            .checked_add(interest)?
            .checked_add(self.renewal_adjustment(today))?;
        self.premium().checked_mul(factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::Risk;
    use crate::policy::{HomeDetails, LifeDetails};
    use core_kernel::PolicyNumber;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn home_built(construction_date: NaiveDate) -> Policy {
        Policy::new(
            PolicyNumber::new(100001),
            "12345678A",
            dec!(500),
            PolicyDetails::Home(HomeDetails {
                floor_area: 80,
                contents_value: dec!(10000),
                address: "Calle X".to_string(),
                construction_date,
            }),
        )
        .unwrap()
    }

    #[test]
    fn test_home_counts_completed_cycles() {
        let policy = home_built(date(2000, 1, 1));
        // 26 years -> 5 cycles
        assert_eq!(policy.renewal_adjustment(date(2026, 10, 19)), dec!(0.10));
        assert_eq!(policy.next_year_premium(dec!(0), date(2026, 10, 19)), Some(dec!(550)));
    }

    #[test]
    fn test_home_under_five_years_has_no_adjustment() {
        let policy = home_built(date(2022, 6, 1));
        assert_eq!(policy.renewal_adjustment(date(2026, 6, 1)), Decimal::ZERO);
    }

    #[test]
    fn test_life_uses_age() {
        let policy = Policy::new(
            PolicyNumber::new(800001),
            "12345678A",
            dec!(200),
            PolicyDetails::Life(LifeDetails {
                birth_date: date(1986, 3, 10),
                risk: Risk::Low,
                indemnity: dec!(50000),
            }),
        )
        .unwrap();

        // 40 years * 0.05 = 2.0
        assert_eq!(policy.renewal_adjustment(date(2026, 1, 1)), dec!(2.00));
        assert_eq!(policy.next_year_premium(dec!(0.5), date(2026, 1, 1)), Some(dec!(700)));
    }

    #[test]
    fn test_out_of_range_premium_yields_none() {
        let policy = Policy::new(
            PolicyNumber::new(800001),
            "12345678A",
            Decimal::MAX,
            PolicyDetails::Life(LifeDetails {
                birth_date: date(1986, 3, 10),
                risk: Risk::Low,
                indemnity: dec!(50000),
            }),
        )
        .unwrap();

        assert_eq!(policy.next_year_premium(dec!(0), date(2026, 1, 1)), None);
        assert_eq!(policy.next_year_premium(Decimal::MAX, date(1986, 3, 10)), None);
    }
}
