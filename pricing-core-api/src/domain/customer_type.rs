use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Markup baked into the list prices of the supplied catalog.
///
/// Only used to derive the initial base cost of a seeded product
/// (`base_cost = list_price / (1 + REFERENCE_MARGIN)`).
pub const REFERENCE_MARGIN: Decimal = Decimal::from_parts(30, 0, 0, false, 2);

/// Pricing tier assigned to a customer when it is registered.
///
/// The set is closed: every segment has exactly one margin in [`CustomerType::margin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerType {
    Chino,
    Hindu,
    Hosteleria,
    HotelCateringVolumen,
    /// Default tier when no keyword matched.
    #[default]
    Base,
}

impl CustomerType {
    pub const ALL: [CustomerType; 5] = [
        CustomerType::Chino,
        CustomerType::Hindu,
        CustomerType::Hosteleria,
        CustomerType::HotelCateringVolumen,
        CustomerType::Base,
    ];

    /// Fractional markup applied on top of the base cost for this segment.
    pub const fn margin(self) -> Decimal {
        match self {
            CustomerType::Chino => Decimal::from_parts(17, 0, 0, false, 2),
            CustomerType::Hindu => Decimal::from_parts(17, 0, 0, false, 2),
            CustomerType::Hosteleria => Decimal::from_parts(35, 0, 0, false, 2),
            CustomerType::HotelCateringVolumen => Decimal::from_parts(40, 0, 0, false, 2),
            CustomerType::Base => Decimal::from_parts(30, 0, 0, false, 2),
        }
    }

    /// `1 + margin`, the factor a base cost is multiplied by.
    pub fn markup_factor(self) -> Decimal {
        Decimal::ONE + self.margin()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerType::Chino => "CHINO",
            CustomerType::Hindu => "HINDU",
            CustomerType::Hosteleria => "HOSTELERIA",
            CustomerType::HotelCateringVolumen => "HOTEL_CATERING_VOLUMEN",
            CustomerType::Base => "BASE",
        }
    }
}

impl std::fmt::Display for CustomerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CustomerType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CHINO" => Ok(CustomerType::Chino),
            "HINDU" => Ok(CustomerType::Hindu),
            "HOSTELERIA" => Ok(CustomerType::Hosteleria),
            "HOTEL_CATERING_VOLUMEN" => Ok(CustomerType::HotelCateringVolumen),
            "BASE" => Ok(CustomerType::Base),
            _ => Err(()),
        }
    }
}
