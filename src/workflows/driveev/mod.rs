//! DRIVE EV rebate eligibility.
//!
//! A submitted [`RebateEligibilityForm`] is normalized into an [`ApplicationRecord`]
//! and wrapped by an [`EligibilityEvaluator`], which applies the program rules in
//! [`PolicyConstants`] to produce a verdict, ordered fail reasons, the Drive+ tier
//! check, and the rebate amount.

pub mod clock;
pub mod domain;
pub mod evaluation;
pub mod policy;
pub mod router;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use domain::{
    ApplicationError, ApplicationRecord, DealerType, RebateEligibilityForm, VehicleClass,
    VehicleType,
};
pub use evaluation::{EligibilityCheck, EligibilityEvaluator, EligibilityReport};
pub use policy::{PolicyConstants, RewardSchedule};
pub use router::eligibility_router;
