use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Text shown in the rank banner when no selected owner has a rank.
pub const NO_RANK_AVAILABLE: &str = "No rank available";

/// Everything the dashboard displays for one upload and owner selection.
///
/// This struct is the final output of the `MetricsEngine`. The table row types
/// serialize with the column headings the dashboard shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub generated_at: DateTime<Utc>,
    /// Records left after the owner filter.
    pub filtered_records: usize,
    pub summary: Summary,
    pub amount_categories: Vec<CategoryAmount>,
    pub business_points: Vec<OwnerPoints>,
    pub aum_sip: Vec<AumSipRow>,
    pub performance: Vec<PerformanceRow>,
    pub final_matrix: Vec<MatrixRow>,
}

/// The three scalar figures of the banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub rank_positions: Vec<OwnerRank>,
    pub total_business_points: Decimal,
    pub total_net_amount: Decimal,
}

impl Summary {
    /// `"Asha: Rank 1 | Ravi: Rank 2"`, or `"No rank available"`.
    pub fn rank_display(&self) -> String {
        if self.rank_positions.is_empty() {
            return NO_RANK_AVAILABLE.to_string();
        }
        self.rank_positions
            .iter()
            .map(|position| format!("{}: Rank {}", position.owner, position.rank))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerRank {
    pub owner: String,
    pub rank: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAmount {
    #[serde(rename = "Product or Service")]
    pub product: String,
    #[serde(rename = "Sum of Amount ( Actual Value )(In INR)")]
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerPoints {
    #[serde(rename = "Owner")]
    pub owner: String,
    #[serde(rename = "Business Points")]
    pub business_points: Decimal,
    #[serde(rename = "Rank")]
    pub rank: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AumSipRow {
    #[serde(rename = "Owner")]
    pub owner: String,
    #[serde(rename = "AUM Amount")]
    pub aum_amount: Decimal,
    #[serde(rename = "SIP Amount")]
    pub sip_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRow {
    #[serde(rename = "Owner")]
    pub owner: String,
    #[serde(rename = "Sum of Amount ( Actual Value )(In INR)")]
    pub amount: Decimal,
    #[serde(rename = "Number of CLIENT TYPE")]
    pub client_type: Decimal,
    #[serde(rename = "Number of meetings")]
    pub meetings: Decimal,
    #[serde(rename = "Activation")]
    pub activation: Decimal,
    #[serde(rename = "Specific Task")]
    pub specific_task: Decimal,
    #[serde(rename = "Number of Deals")]
    pub deals: usize,
}

/// One candidate row of the final structured matrix. Missing values are zero;
/// a `rank` of 0 means the candidate has no business-points row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixRow {
    #[serde(rename = "SL NO")]
    pub sl_no: usize,
    #[serde(rename = "CANDIDATE")]
    pub candidate: String,
    #[serde(rename = "AUM")]
    pub aum: Decimal,
    #[serde(rename = "SIP")]
    pub sip: Decimal,
    #[serde(rename = "Sum of Amount ( Actual Value )(In INR)")]
    pub amount: Decimal,
    #[serde(rename = "New Client Addition")]
    pub new_client_addition: Decimal,
    #[serde(rename = "Client Meeting")]
    pub client_meeting: Decimal,
    #[serde(rename = "Activation")]
    pub activation: Decimal,
    #[serde(rename = "Specific Task")]
    pub specific_task: Decimal,
    #[serde(rename = "Number of Deals")]
    pub deals: usize,
    #[serde(rename = "Business Points")]
    pub business_points: Decimal,
    #[serde(rename = "Rank")]
    pub rank: u32,
}
