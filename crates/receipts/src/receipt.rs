use serde::{Deserialize, Serialize};

/// A purchase receipt as submitted.
///
/// Every field is carried as text; nothing is validated until the receipt is
/// scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    /// `YYYY-MM-DD`.
    pub purchase_date: String,
    /// `HH:MM`, 24-hour clock.
    pub purchase_time: String,
    pub items: Vec<Item>,
    /// Decimal amount, e.g. `"35.35"`.
    pub total: String,
}

/// Receipt line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "shortDescription")]
    pub description: String,
    pub price: String,
}

impl Item {
    pub fn new(description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            price: price.into(),
        }
    }
}
