use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use driveev_rebate::workflows::driveev::{
    ApplicationError, ApplicationRecord, EligibilityEvaluator, FixedClock, PolicyConstants,
    RebateEligibilityForm,
};

fn form_json(overrides: serde_json::Value) -> RebateEligibilityForm {
    let mut payload = serde_json::json!({
        "vehicleType": "BEV",
        "vehiclePrice": 45_000,
        "isUsed": false,
        "purchaseOrLeaseDate": "2024-04-12",
        "isConversion": false,
        "dealerType": "RI_Dealer",
        "isLease": false,
        "isRhodeIslandResident": true,
        "isVehicleRegisteredInRI": true,
        "income": 68_000
    });

    if let (Some(base), Some(extra)) = (payload.as_object_mut(), overrides.as_object()) {
        for (key, value) in extra {
            base.insert(key.clone(), value.clone());
        }
    }

    serde_json::from_value(payload).expect("form payload parses")
}

fn purchase_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 4, 12).expect("valid date")
}

#[test]
fn default_policy_pays_new_bev_from_in_state_dealer() {
    let policy = PolicyConstants::default();
    let form = form_json(serde_json::json!({}));
    let record = ApplicationRecord::try_from_form(form).expect("valid form");
    let clock = FixedClock(purchase_date() + Duration::days(30));

    let evaluator = EligibilityEvaluator::with_clock(record, &policy, clock);
    let report = evaluator.report();

    assert!(report.eligible);
    assert!(report.drive_plus_eligible);
    assert!(report.application_deadline_eligible);
    assert!(report.fail_reasons.is_empty());
    assert_eq!(report.payable_amount, policy.new_rewards.bev_fcev);
}

#[test]
fn leased_used_phev_over_caps_collects_reasons_in_order() {
    let policy = PolicyConstants::default();
    let form = form_json(serde_json::json!({
        "vehicleType": "PHEV",
        "isUsed": true,
        "vehiclePrice": policy.used_price_cap + Decimal::ONE,
        "isLease": true,
        "leaseTermInMonths": policy.minimum_lease_term_in_months + 1,
        "isRhodeIslandResident": false
    }));

    let evaluator = EligibilityEvaluator::from_form(form, &policy).expect("valid form");

    assert_eq!(
        evaluator.fail_reasons(),
        vec![
            "Purchase Price is not eligible",
            "Leased vehicle is not eligible",
            "Rhode Island status is not eligible",
        ]
    );
    assert_eq!(evaluator.rebate_amount(), policy.used_rewards.phev);
    assert_eq!(evaluator.report().payable_amount, Decimal::ZERO);
}

#[test]
fn listed_out_of_state_dealer_qualifies() {
    let policy = PolicyConstants::default();
    let dealer = policy
        .qualifying_oos_dealers
        .iter()
        .next()
        .expect("default policy lists dealers")
        .clone();
    let form = form_json(serde_json::json!({
        "dealerType": "OOS_Dealer",
        "OosDealerName": dealer
    }));

    let evaluator = EligibilityEvaluator::from_form(form, &policy).expect("valid form");
    assert!(evaluator.is_dealer_eligible());
    assert!(evaluator.is_eligible_for_drive_ev());
}

#[test]
fn scooter_is_not_a_recognised_vehicle_type() {
    let policy = PolicyConstants::default();
    let form = form_json(serde_json::json!({ "vehicleType": "SCOOTER" }));

    let result = EligibilityEvaluator::from_form(form, &policy);
    assert!(matches!(
        result,
        Err(ApplicationError::InvalidEnumValue { field: "vehicleType", .. })
    ));
}
