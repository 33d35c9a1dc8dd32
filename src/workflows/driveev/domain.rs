use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Errors raised while normalizing a submitted rebate form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplicationError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnumValue { field: &'static str, value: String },
}

/// Electric vehicle categories recognised by the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleType {
    Bev,
    Phev,
    Fcev,
}

impl VehicleType {
    pub const fn label(self) -> &'static str {
        match self {
            VehicleType::Bev => "BEV",
            VehicleType::Phev => "PHEV",
            VehicleType::Fcev => "FCEV",
        }
    }

    /// Rebate table class. Battery and fuel cell vehicles share a row.
    ///
    /// `None` is reserved for vehicle types added in later program years that
    /// have no reward row yet; those earn no rebate.
    pub const fn vehicle_class(self) -> Option<VehicleClass> {
        match self {
            VehicleType::Bev | VehicleType::Fcev => Some(VehicleClass::BevOrFcev),
            VehicleType::Phev => Some(VehicleClass::Phev),
        }
    }
}

impl FromStr for VehicleType {
    type Err = ApplicationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "BEV" => Ok(VehicleType::Bev),
            "PHEV" => Ok(VehicleType::Phev),
            "FCEV" => Ok(VehicleType::Fcev),
            other => Err(ApplicationError::InvalidEnumValue {
                field: "vehicleType",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleClass {
    BevOrFcev,
    Phev,
}

/// Where the vehicle was purchased or leased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DealerType {
    InState,
    OutOfState,
}

impl DealerType {
    pub const fn label(self) -> &'static str {
        match self {
            DealerType::InState => "RI_Dealer",
            DealerType::OutOfState => "OOS_Dealer",
        }
    }
}

impl FromStr for DealerType {
    type Err = ApplicationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "RI_Dealer" => Ok(DealerType::InState),
            "OOS_Dealer" => Ok(DealerType::OutOfState),
            other => Err(ApplicationError::InvalidEnumValue {
                field: "dealerType",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for DealerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw eligibility form as collected by the intake UI.
///
/// Vehicle and dealer types arrive as free text and are only validated when the
/// form is normalized into an [`ApplicationRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebateEligibilityForm {
    pub vehicle_type: String,
    #[serde(deserialize_with = "non_negative_amount")]
    pub vehicle_price: Decimal,
    pub is_used: bool,
    pub purchase_or_lease_date: NaiveDate,
    pub is_conversion: bool,
    pub dealer_type: String,
    #[serde(rename = "OosDealerName", default)]
    pub oos_dealer_name: Option<String>,
    pub is_lease: bool,
    #[serde(default)]
    pub lease_term_in_months: Option<u16>,
    pub is_rhode_island_resident: bool,
    #[serde(rename = "isVehicleRegisteredInRI")]
    pub is_vehicle_registered_in_ri: bool,
    #[serde(deserialize_with = "non_negative_amount")]
    pub income: Decimal,
}

/// Currency amounts accept integers, decimals, or numeric strings, but never negatives.
fn non_negative_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = <Decimal as Deserialize>::deserialize(deserializer)?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(serde::de::Error::custom(format!(
            "currency amount must not be negative (found {amount})"
        )));
    }
    Ok(amount)
}

/// Normalized, immutable application used by the evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationRecord {
    pub vehicle_type: VehicleType,
    pub price: Decimal,
    pub is_new: bool,
    pub purchase_date: NaiveDate,
    pub is_conversion: bool,
    pub dealer_type: DealerType,
    pub oos_dealer_name: Option<String>,
    pub is_lease: bool,
    pub lease_term_in_months: Option<u16>,
    pub is_rhode_island_resident: bool,
    pub is_vehicle_registered_in_ri: bool,
    pub owner_annual_income: Decimal,
}

impl ApplicationRecord {
    pub fn try_from_form(form: RebateEligibilityForm) -> Result<Self, ApplicationError> {
        let vehicle_type = form.vehicle_type.parse::<VehicleType>()?;
        let dealer_type = form.dealer_type.parse::<DealerType>()?;
        let lease_term_in_months = if form.is_lease {
            form.lease_term_in_months
        } else {
            None
        };

        Ok(Self {
            vehicle_type,
            price: form.vehicle_price,
            is_new: !form.is_used,
            purchase_date: form.purchase_or_lease_date,
            is_conversion: form.is_conversion,
            dealer_type,
            oos_dealer_name: form.oos_dealer_name,
            is_lease: form.is_lease,
            lease_term_in_months,
            is_rhode_island_resident: form.is_rhode_island_resident,
            is_vehicle_registered_in_ri: form.is_vehicle_registered_in_ri,
            owner_annual_income: form.income,
        })
    }
}

impl TryFrom<RebateEligibilityForm> for ApplicationRecord {
    type Error = ApplicationError;

    fn try_from(form: RebateEligibilityForm) -> Result<Self, Self::Error> {
        Self::try_from_form(form)
    }
}
