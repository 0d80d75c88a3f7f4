use serde::{Deserialize, Serialize};

/// Keywords that mark a product as an Assets Under Management holding.
const AUM_KEYWORDS: [&str; 6] = [
    "EQUITY",
    "DEBT",
    "PMS",
    "PORTFOLIO MANAGEMENT SERVICES",
    "ARN TRANSFER-EQUITY",
    "ARN TRANSFER-DEBT",
];

const SIP_KEYWORD: &str = "SIP";

/// The investment class a product-or-service name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductClass {
    /// One-time holdings (equity, debt, PMS, ARN transfers).
    Aum,
    /// Systematic Investment Plan contributions.
    Sip,
}

impl ProductClass {
    /// Classifies a product name with a case-insensitive substring test.
    ///
    /// "SIP" wins over every AUM keyword, so `MUTUAL FUND SIP (EQUITY)` is `Sip`.
    /// Products matching neither class return `None`.
    pub fn classify(product: &str) -> Option<Self> {
        let upper = product.to_uppercase();
        if upper.contains(SIP_KEYWORD) {
            return Some(ProductClass::Sip);
        }
        if AUM_KEYWORDS.iter().any(|keyword| upper.contains(keyword)) {
            return Some(ProductClass::Aum);
        }
        None
    }
}
