//! Customer segment classification from a business-directory category label.
//!
//! The label is lower-cased and tested against ordered keyword sets. The first
//! set with a keyword contained in the label wins, so a label such as
//! "restaurante chino" resolves to `Chino` even though it also names a
//! restaurant. Matching is plain substring containment on the lower-cased
//! text: "barrio" matches the `bar` keyword and accented keywords only match
//! accented text.

use crate::domain::customer_type::CustomerType;

const CHINO_KEYWORDS: &[&str] = &["chino", "asiático", "asia", "oriental", "wok"];
const HINDU_KEYWORDS: &[&str] = &["indio", "hindú", "kebab", "shawarma", "tandoori", "curry"];
const HOTEL_KEYWORDS: &[&str] = &[
    "hotel",
    "hostal",
    "resort",
    "apartahotel",
    "catering",
    "banquetes",
    "eventos",
];
const HOSTELERIA_KEYWORDS: &[&str] = &["restaurante", "bar", "cafetería", "taberna", "cervecería"];

/// Keyword sets in priority order. Anything unmatched is `Base`.
const CLASSIFICATION_RULES: [(CustomerType, &[&str]); 4] = [
    (CustomerType::Chino, CHINO_KEYWORDS),
    (CustomerType::Hindu, HINDU_KEYWORDS),
    (CustomerType::HotelCateringVolumen, HOTEL_KEYWORDS),
    (CustomerType::Hosteleria, HOSTELERIA_KEYWORDS),
];

/// Outcome of classifying a label, with the keyword that decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub customer_type: CustomerType,
    /// `None` when the label fell through to `Base`.
    pub matched_keyword: Option<&'static str>,
}

/// Classify a raw category label into a customer segment.
///
/// A missing or empty label yields `CustomerType::Base`.
pub fn classify(label: Option<&str>) -> CustomerType {
    classify_with_match(label).customer_type
}

/// Same as [`classify`] but also reports the deciding keyword.
pub fn classify_with_match(label: Option<&str>) -> Classification {
    let normalized = label.unwrap_or_default().to_lowercase();

    for (customer_type, keywords) in CLASSIFICATION_RULES {
        if let Some(keyword) = keywords.iter().find(|kw| normalized.contains(*kw)) {
            return Classification {
                customer_type,
                matched_keyword: Some(*keyword),
            };
        }
    }

    Classification {
        customer_type: CustomerType::Base,
        matched_keyword: None,
    }
}
