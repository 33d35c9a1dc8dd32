mod checks;
mod rules;

pub use checks::EligibilityCheck;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use super::clock::{Clock, SystemClock};
use super::domain::{ApplicationError, ApplicationRecord, RebateEligibilityForm};
use super::policy::PolicyConstants;

/// Evaluates a single application against the program policy.
///
/// Every method re-runs its rules against the wrapped record, so results never go
/// stale except for the application deadline, which reads the clock on each call.
#[derive(Debug, Clone)]
pub struct EligibilityEvaluator<'p, C = SystemClock> {
    record: ApplicationRecord,
    policy: &'p PolicyConstants,
    clock: C,
}

impl<'p> EligibilityEvaluator<'p, SystemClock> {
    pub fn new(record: ApplicationRecord, policy: &'p PolicyConstants) -> Self {
        Self::with_clock(record, policy, SystemClock)
    }

    pub fn from_form(
        form: RebateEligibilityForm,
        policy: &'p PolicyConstants,
    ) -> Result<Self, ApplicationError> {
        let record = ApplicationRecord::try_from_form(form)?;
        Ok(Self::new(record, policy))
    }
}

impl<'p, C: Clock> EligibilityEvaluator<'p, C> {
    pub fn with_clock(record: ApplicationRecord, policy: &'p PolicyConstants, clock: C) -> Self {
        Self {
            record,
            policy,
            clock,
        }
    }

    pub fn record(&self) -> &ApplicationRecord {
        &self.record
    }

    pub fn policy(&self) -> &PolicyConstants {
        self.policy
    }

    pub fn is_price_eligible(&self) -> bool {
        rules::price_eligible(&self.record, self.policy)
    }

    pub fn is_leased_vehicle_eligible(&self) -> bool {
        rules::leased_vehicle_eligible(&self.record, self.policy)
    }

    pub fn is_purchase_date_eligible(&self) -> bool {
        rules::purchase_date_eligible(&self.record, self.policy)
    }

    pub fn is_rhode_island_status_eligible(&self) -> bool {
        rules::rhode_island_status_eligible(&self.record)
    }

    /// Whether today falls within the filing window after purchase.
    ///
    /// Informational only: it is logged with the aggregate verdict but neither
    /// gates eligibility nor appears among the fail reasons.
    pub fn is_application_deadline_eligible(&self) -> bool {
        rules::application_deadline_eligible(&self.record, self.clock.today())
    }

    /// Last day an application may be filed, if representable.
    pub fn application_deadline(&self) -> Option<NaiveDate> {
        rules::application_deadline(&self.record)
    }

    pub fn is_dealer_eligible(&self) -> bool {
        rules::dealer_eligible(&self.record, self.policy)
    }

    pub fn passes(&self, check: EligibilityCheck) -> bool {
        match check {
            EligibilityCheck::PurchasePrice => self.is_price_eligible(),
            EligibilityCheck::LeaseTerm => self.is_leased_vehicle_eligible(),
            EligibilityCheck::PurchaseDate => self.is_purchase_date_eligible(),
            EligibilityCheck::RhodeIslandStatus => self.is_rhode_island_status_eligible(),
            EligibilityCheck::Conversion => !self.record.is_conversion,
            EligibilityCheck::Dealer => self.is_dealer_eligible(),
        }
    }

    pub fn is_eligible_for_drive_ev(&self) -> bool {
        debug!(
            price = self.is_price_eligible(),
            leased_vehicle = self.is_leased_vehicle_eligible(),
            purchase_date = self.is_purchase_date_eligible(),
            rhode_island_status = self.is_rhode_island_status_eligible(),
            application_deadline = self.is_application_deadline_eligible(),
            dealer = self.is_dealer_eligible(),
            conversion = self.record.is_conversion,
            "evaluating DRIVE EV eligibility"
        );

        EligibilityCheck::ordered()
            .into_iter()
            .all(|check| self.passes(check))
    }

    pub fn is_drive_plus_eligible(&self) -> bool {
        self.is_eligible_for_drive_ev()
            && rules::income_within_drive_plus_ceiling(&self.record, self.policy)
    }

    pub fn failed_checks(&self) -> Vec<EligibilityCheck> {
        EligibilityCheck::ordered()
            .into_iter()
            .filter(|check| !self.passes(*check))
            .collect()
    }

    pub fn fail_reasons(&self) -> Vec<String> {
        self.failed_checks()
            .into_iter()
            .map(|check| check.fail_reason().to_string())
            .collect()
    }

    /// Table amount for the vehicle. Does not consider eligibility.
    pub fn rebate_amount(&self) -> Decimal {
        rules::rebate_amount(&self.record, self.policy)
    }

    pub fn report(&self) -> EligibilityReport {
        let eligible = self.is_eligible_for_drive_ev();
        let rebate_amount = self.rebate_amount();

        EligibilityReport {
            eligible,
            drive_plus_eligible: eligible
                && rules::income_within_drive_plus_ceiling(&self.record, self.policy),
            application_deadline_eligible: self.is_application_deadline_eligible(),
            application_deadline: self.application_deadline(),
            fail_reasons: self.fail_reasons(),
            rebate_amount,
            payable_amount: if eligible {
                rebate_amount
            } else {
                Decimal::ZERO
            },
        }
    }
}

/// Serializable summary of an evaluation for API and CLI consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityReport {
    pub eligible: bool,
    pub drive_plus_eligible: bool,
    pub application_deadline_eligible: bool,
    pub application_deadline: Option<NaiveDate>,
    pub fail_reasons: Vec<String>,
    pub rebate_amount: Decimal,
    pub payable_amount: Decimal,
}
