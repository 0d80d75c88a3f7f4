use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of an uploaded activity export.
///
/// Every field is optional: empty cells and numeric cells that fail to parse are
/// kept as `None` and skipped by the aggregations, never treated as errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub owner: Option<String>,
    pub product: Option<String>,
    /// `Sum of Amount ( Actual Value )(In INR)`.
    pub amount: Option<Decimal>,
    /// `Number of CLIENT TYPE`, i.e. new clients added.
    pub client_type: Option<Decimal>,
    /// `Number of meetings`.
    pub meetings: Option<Decimal>,
    pub activation: Option<Decimal>,
    pub specific_task: Option<Decimal>,
}

impl SalesRecord {
    /// Creates a record carrying only the fields the point and AUM/SIP metrics read.
    pub fn new(owner: &str, product: &str, amount: Decimal) -> Self {
        Self {
            owner: Some(owner.to_string()),
            product: Some(product.to_string()),
            amount: Some(amount),
            ..Self::default()
        }
    }

    /// Sets the four activity counters, leaving the sales fields untouched.
    pub fn with_activity(
        mut self,
        client_type: Decimal,
        meetings: Decimal,
        activation: Decimal,
        specific_task: Decimal,
    ) -> Self {
        self.client_type = Some(client_type);
        self.meetings = Some(meetings);
        self.activation = Some(activation);
        self.specific_task = Some(specific_task);
        self
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn product(&self) -> Option<&str> {
        self.product.as_deref()
    }
}
