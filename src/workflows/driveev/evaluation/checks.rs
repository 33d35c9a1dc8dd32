use serde::Serialize;

/// Checks that gate base DRIVE EV eligibility, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityCheck {
    PurchasePrice,
    LeaseTerm,
    PurchaseDate,
    RhodeIslandStatus,
    Conversion,
    Dealer,
}

impl EligibilityCheck {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::PurchasePrice,
            Self::LeaseTerm,
            Self::PurchaseDate,
            Self::RhodeIslandStatus,
            Self::Conversion,
            Self::Dealer,
        ]
    }

    pub const fn fail_reason(self) -> &'static str {
        match self {
            Self::PurchasePrice => "Purchase Price is not eligible",
            Self::LeaseTerm => "Leased vehicle is not eligible",
            Self::PurchaseDate => "Purchase Date is not eligible",
            Self::RhodeIslandStatus => "Rhode Island status is not eligible",
            Self::Conversion => "Converted vehicles are not eligible",
            Self::Dealer => "Dealer is not eligible",
        }
    }
}
