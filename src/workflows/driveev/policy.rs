use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::domain::VehicleClass;

/// Reward amounts for one new/used column of the rebate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RewardSchedule {
    pub bev_fcev: Decimal,
    pub phev: Decimal,
}

impl RewardSchedule {
    pub const fn amount_for(&self, class: VehicleClass) -> Decimal {
        match class {
            VehicleClass::BevOrFcev => self.bev_fcev,
            VehicleClass::Phev => self.phev,
        }
    }
}

/// Program-year policy values. Rules read these; they never change during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyConstants {
    pub new_price_cap: Decimal,
    pub used_price_cap: Decimal,
    pub new_rewards: RewardSchedule,
    pub used_rewards: RewardSchedule,
    /// Drive+ income ceiling, inclusive.
    pub minimum_annual_income: Decimal,
    /// Longest lease term (months) that still qualifies, inclusive.
    pub minimum_lease_term_in_months: u16,
    pub program_start_date: NaiveDate,
    pub qualifying_oos_dealers: BTreeSet<String>,
}

impl PolicyConstants {
    pub fn is_qualifying_oos_dealer(&self, name: &str) -> bool {
        self.qualifying_oos_dealers.contains(name)
    }

    pub fn price_cap(&self, is_new: bool) -> Decimal {
        if is_new {
            self.new_price_cap
        } else {
            self.used_price_cap
        }
    }

    pub fn rewards(&self, is_new: bool) -> &RewardSchedule {
        if is_new {
            &self.new_rewards
        } else {
            &self.used_rewards
        }
    }
}

const QUALIFYING_OOS_DEALERS: &[&str] = &[
    "Balise Hyundai of Cape Cod",
    "Boch Toyota South",
    "Herb Chambers Kia of Burlington",
    "Mastria Kia",
    "Tesla Dedham",
    "Tesla Milford",
];

impl Default for PolicyConstants {
    fn default() -> Self {
        Self {
            new_price_cap: Decimal::from(60_000),
            used_price_cap: Decimal::from(40_000),
            new_rewards: RewardSchedule {
                bev_fcev: Decimal::from(1_500),
                phev: Decimal::from(1_000),
            },
            used_rewards: RewardSchedule {
                bev_fcev: Decimal::from(1_000),
                phev: Decimal::from(750),
            },
            minimum_annual_income: Decimal::from(80_000),
            minimum_lease_term_in_months: 36,
            program_start_date: NaiveDate::from_ymd_opt(2022, 10, 1)
                .expect("program start is a valid calendar date"),
            qualifying_oos_dealers: QUALIFYING_OOS_DEALERS
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}
