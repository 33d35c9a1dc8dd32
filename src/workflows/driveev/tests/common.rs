use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::workflows::driveev::{
    eligibility_router, ApplicationRecord, DealerType, EligibilityEvaluator, FixedClock,
    PolicyConstants, RebateEligibilityForm, RewardSchedule, VehicleType,
};

pub(super) const QUALIFIED_DEALER: &str = "Narragansett Bay Motors of Seekonk";

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Amount in cents, e.g. `cents(4_999_999)` is $49,999.99.
pub(super) fn cents(amount: i64) -> Decimal {
    Decimal::new(amount, 2)
}

pub(super) fn program_start() -> NaiveDate {
    date(2023, 1, 1)
}

pub(super) fn policy() -> PolicyConstants {
    PolicyConstants {
        new_price_cap: Decimal::from(50_000),
        used_price_cap: Decimal::from(25_000),
        new_rewards: RewardSchedule {
            bev_fcev: Decimal::from(2_000),
            phev: Decimal::from(1_500),
        },
        used_rewards: RewardSchedule {
            bev_fcev: Decimal::from(1_000),
            phev: Decimal::from(500),
        },
        minimum_annual_income: Decimal::from(75_000),
        minimum_lease_term_in_months: 24,
        program_start_date: program_start(),
        qualifying_oos_dealers: BTreeSet::from([QUALIFIED_DEALER.to_string()]),
    }
}

/// Passing new BEV record bought from an in-state dealer on the program start date.
pub(super) fn eligible_record() -> ApplicationRecord {
    ApplicationRecord {
        vehicle_type: VehicleType::Bev,
        price: Decimal::from(50_000),
        is_new: true,
        purchase_date: program_start(),
        is_conversion: false,
        dealer_type: DealerType::InState,
        oos_dealer_name: None,
        is_lease: false,
        lease_term_in_months: None,
        is_rhode_island_resident: true,
        is_vehicle_registered_in_ri: true,
        owner_annual_income: Decimal::from(60_000),
    }
}

pub(super) fn eligible_form() -> RebateEligibilityForm {
    RebateEligibilityForm {
        vehicle_type: "BEV".to_string(),
        vehicle_price: Decimal::from(50_000),
        is_used: false,
        purchase_or_lease_date: program_start(),
        is_conversion: false,
        dealer_type: "RI_Dealer".to_string(),
        oos_dealer_name: None,
        is_lease: false,
        lease_term_in_months: None,
        is_rhode_island_resident: true,
        is_vehicle_registered_in_ri: true,
        income: Decimal::from(60_000),
    }
}

/// Clock pinned `days` after the record's purchase date.
pub(super) fn days_after_purchase(record: &ApplicationRecord, days: i64) -> FixedClock {
    FixedClock(record.purchase_date + Duration::days(days))
}

pub(super) fn evaluator<'p>(
    record: ApplicationRecord,
    policy: &'p PolicyConstants,
) -> EligibilityEvaluator<'p, FixedClock> {
    let clock = days_after_purchase(&record, 10);
    EligibilityEvaluator::with_clock(record, policy, clock)
}

pub(super) fn router() -> axum::Router {
    eligibility_router(Arc::new(policy()))
}
