use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use super::super::domain::{ApplicationRecord, DealerType};
use super::super::policy::PolicyConstants;

/// Calendar days after purchase during which an application may be filed.
pub(crate) const APPLICATION_WINDOW_DAYS: i64 = 120;

pub(crate) fn price_eligible(record: &ApplicationRecord, policy: &PolicyConstants) -> bool {
    record.price <= policy.price_cap(record.is_new)
}

pub(crate) fn leased_vehicle_eligible(
    record: &ApplicationRecord,
    policy: &PolicyConstants,
) -> bool {
    if !record.is_lease {
        return true;
    }

    record
        .lease_term_in_months
        .map(|term| term <= policy.minimum_lease_term_in_months)
        .unwrap_or(false)
}

pub(crate) fn purchase_date_eligible(
    record: &ApplicationRecord,
    policy: &PolicyConstants,
) -> bool {
    record.purchase_date >= policy.program_start_date
}

pub(crate) fn income_within_drive_plus_ceiling(
    record: &ApplicationRecord,
    policy: &PolicyConstants,
) -> bool {
    record.owner_annual_income <= policy.minimum_annual_income
}

pub(crate) fn rhode_island_status_eligible(record: &ApplicationRecord) -> bool {
    record.is_rhode_island_resident && record.is_vehicle_registered_in_ri
}

pub(crate) fn application_deadline(record: &ApplicationRecord) -> Option<NaiveDate> {
    record
        .purchase_date
        .checked_add_signed(Duration::days(APPLICATION_WINDOW_DAYS))
}

pub(crate) fn application_deadline_eligible(record: &ApplicationRecord, today: NaiveDate) -> bool {
    // A deadline past the end of the calendar cannot have elapsed yet.
    application_deadline(record)
        .map(|deadline| today <= deadline)
        .unwrap_or(true)
}

pub(crate) fn dealer_eligible(record: &ApplicationRecord, policy: &PolicyConstants) -> bool {
    match record.dealer_type {
        DealerType::InState => true,
        DealerType::OutOfState => record
            .oos_dealer_name
            .as_deref()
            .map(|name| policy.is_qualifying_oos_dealer(name))
            .unwrap_or(false),
    }
}

pub(crate) fn rebate_amount(record: &ApplicationRecord, policy: &PolicyConstants) -> Decimal {
    record
        .vehicle_type
        .vehicle_class()
        .map(|class| policy.rewards(record.is_new).amount_for(class))
        .unwrap_or(Decimal::ZERO)
}
