use crate::error::AnalyticsError;
use crate::ranking::dense_rank_descending;
use crate::report::{
    AumSipRow, CategoryAmount, DashboardReport, MatrixRow, OwnerPoints, OwnerRank,
    PerformanceRow, Summary,
};
use crate::selection::OwnerSelection;
use chrono::Utc;
use configuration::PointRateTable;
use core_types::{ProductClass, SalesRecord};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// A stateless calculator that turns an upload and an owner selection into the
/// full set of dashboard tables.
///
/// The only input besides the records is the point rate table, which is borrowed
/// and never modified.
#[derive(Debug, Clone, Copy)]
pub struct MetricsEngine<'a> {
    rates: &'a PointRateTable,
}

impl<'a> MetricsEngine<'a> {
    pub fn new(rates: &'a PointRateTable) -> Self {
        Self { rates }
    }

    /// The main entry point: runs the whole pipeline once.
    ///
    /// # Arguments
    ///
    /// * `records` - Every record of the upload, before filtering.
    /// * `selection` - The owners to narrow to; empty means all of them.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `DashboardReport` or an `AnalyticsError` if a
    /// decimal sum overflows.
    pub fn calculate(
        &self,
        records: &[SalesRecord],
        selection: &OwnerSelection,
    ) -> Result<DashboardReport, AnalyticsError> {
        let filtered = selection.apply(records);

        let business_points = self.business_points(&filtered)?;
        let total_business_points = checked_sum(
            business_points.iter().map(|row| row.business_points),
            "total business points",
        )?;
        let total_net_amount = checked_sum(
            filtered.iter().filter_map(|record| record.amount),
            "total net amount",
        )?;
        let rank_positions = rank_lookup(&business_points, &selection.ranked_owners(records));

        let amount_categories = amount_categorization(&filtered)?;
        let aum_sip = aum_sip_split(&filtered)?;
        let performance = performance_metrics(&filtered)?;
        let final_matrix = final_matrix(&aum_sip, &performance, &business_points);

        tracing::info!(
            records = records.len(),
            filtered = filtered.len(),
            owners = business_points.len(),
            "Calculated dashboard metrics."
        );

        Ok(DashboardReport {
            generated_at: Utc::now(),
            filtered_records: filtered.len(),
            summary: Summary {
                rank_positions,
                total_business_points,
                total_net_amount,
            },
            amount_categories,
            business_points,
            aum_sip,
            performance,
            final_matrix,
        })
    }

    /// Points earned by a single record, or `None` when its category is unmapped
    /// or its amount is missing.
    pub fn record_points(&self, record: &SalesRecord) -> Result<Option<Decimal>, AnalyticsError> {
        let (Some(rate), Some(amount)) = (
            record.product().and_then(|product| self.rates.rate_for(product)),
            record.amount,
        ) else {
            return Ok(None);
        };
        amount
            .checked_mul(rate)
            .map(Some)
            .ok_or_else(|| AnalyticsError::Overflow("business points".to_string()))
    }

    /// Sums points per owner and assigns dense descending ranks.
    ///
    /// Every owner in `records` gets a row, with 0 points if none of their rows
    /// score. Rows are ordered by rank, then owner.
    pub fn business_points(
        &self,
        records: &[&SalesRecord],
    ) -> Result<Vec<OwnerPoints>, AnalyticsError> {
        let mut per_owner: BTreeMap<&str, Decimal> = BTreeMap::new();
        for record in records {
            let Some(owner) = record.owner() else {
                continue;
            };
            let total = per_owner.entry(owner).or_default();
            if let Some(points) = self.record_points(record)? {
                accumulate(total, points, "business points")?;
            }
        }

        let totals: Vec<Decimal> = per_owner.values().copied().collect();
        let ranks = dense_rank_descending(&totals);

        let mut rows: Vec<OwnerPoints> = per_owner
            .into_iter()
            .zip(ranks)
            .map(|((owner, business_points), rank)| OwnerPoints {
                owner: owner.to_string(),
                business_points,
                rank,
            })
            .collect();
        // Stable sort keeps owners alphabetical within a rank.
        rows.sort_by_key(|row| row.rank);
        Ok(rows)
    }
}

/// Looks up the rank of each owner in `owners`, skipping owners without a row.
pub fn rank_lookup(business_points: &[OwnerPoints], owners: &[&str]) -> Vec<OwnerRank> {
    let ranks: HashMap<&str, u32> = business_points
        .iter()
        .map(|row| (row.owner.as_str(), row.rank))
        .collect();
    owners
        .iter()
        .filter_map(|owner| {
            ranks.get(owner).map(|rank| OwnerRank {
                owner: owner.to_string(),
                rank: *rank,
            })
        })
        .collect()
}

/// Total amount per product-or-service, ordered by category name.
pub fn amount_categorization(
    records: &[&SalesRecord],
) -> Result<Vec<CategoryAmount>, AnalyticsError> {
    let mut per_category: BTreeMap<&str, Decimal> = BTreeMap::new();
    for record in records {
        let Some(product) = record.product() else {
            continue;
        };
        let total = per_category.entry(product).or_default();
        if let Some(amount) = record.amount {
            accumulate(total, amount, "amount categorization")?;
        }
    }

    Ok(per_category
        .into_iter()
        .map(|(product, amount)| CategoryAmount {
            product: product.to_string(),
            amount,
        })
        .collect())
}

/// AUM and SIP amount per owner.
///
/// An owner appears if they have at least one record in either class; the other
/// class is then zero. Products matching neither class are ignored.
pub fn aum_sip_split(records: &[&SalesRecord]) -> Result<Vec<AumSipRow>, AnalyticsError> {
    let mut per_owner: BTreeMap<&str, (Decimal, Decimal)> = BTreeMap::new();
    for record in records {
        let (Some(owner), Some(class)) = (
            record.owner(),
            record.product().and_then(ProductClass::classify),
        ) else {
            continue;
        };
        let (aum, sip) = per_owner.entry(owner).or_default();
        let Some(amount) = record.amount else {
            continue;
        };
        match class {
            ProductClass::Aum => accumulate(aum, amount, "AUM amount")?,
            ProductClass::Sip => accumulate(sip, amount, "SIP amount")?,
        }
    }

    Ok(per_owner
        .into_iter()
        .map(|(owner, (aum_amount, sip_amount))| AumSipRow {
            owner: owner.to_string(),
            aum_amount,
            sip_amount,
        })
        .collect())
}

#[derive(Default)]
struct ActivityTotals {
    amount: Decimal,
    client_type: Decimal,
    meetings: Decimal,
    activation: Decimal,
    specific_task: Decimal,
    deals: usize,
}

/// Activity counters, amount and deal count per owner, ordered by owner.
pub fn performance_metrics(
    records: &[&SalesRecord],
) -> Result<Vec<PerformanceRow>, AnalyticsError> {
    let mut per_owner: BTreeMap<&str, ActivityTotals> = BTreeMap::new();
    for record in records {
        let Some(owner) = record.owner() else {
            continue;
        };
        let totals = per_owner.entry(owner).or_default();
        totals.deals += 1;
        accumulate_optional(&mut totals.amount, record.amount, "amount")?;
        accumulate_optional(&mut totals.client_type, record.client_type, "client type")?;
        accumulate_optional(&mut totals.meetings, record.meetings, "meetings")?;
        accumulate_optional(&mut totals.activation, record.activation, "activation")?;
        accumulate_optional(&mut totals.specific_task, record.specific_task, "specific task")?;
    }

    Ok(per_owner
        .into_iter()
        .map(|(owner, totals)| PerformanceRow {
            owner: owner.to_string(),
            amount: totals.amount,
            client_type: totals.client_type,
            meetings: totals.meetings,
            activation: totals.activation,
            specific_task: totals.specific_task,
            deals: totals.deals,
        })
        .collect())
}

/// Joins the AUM/SIP, performance and business-points tables on owner.
///
/// Covers every owner present in any of the three tables, ordered by owner and
/// numbered from 1. Values an owner lacks in a table are zero.
pub fn final_matrix(
    aum_sip: &[AumSipRow],
    performance: &[PerformanceRow],
    business_points: &[OwnerPoints],
) -> Vec<MatrixRow> {
    let aum_sip_by_owner: HashMap<&str, &AumSipRow> =
        aum_sip.iter().map(|row| (row.owner.as_str(), row)).collect();
    let performance_by_owner: HashMap<&str, &PerformanceRow> =
        performance.iter().map(|row| (row.owner.as_str(), row)).collect();
    let points_by_owner: HashMap<&str, &OwnerPoints> =
        business_points.iter().map(|row| (row.owner.as_str(), row)).collect();

    let candidates: BTreeSet<&str> = aum_sip_by_owner
        .keys()
        .chain(performance_by_owner.keys())
        .chain(points_by_owner.keys())
        .copied()
        .collect();

    candidates
        .into_iter()
        .enumerate()
        .map(|(index, candidate)| {
            let aum_sip = aum_sip_by_owner.get(candidate);
            let performance = performance_by_owner.get(candidate);
            let points = points_by_owner.get(candidate);
            MatrixRow {
                sl_no: index + 1,
                candidate: candidate.to_string(),
                aum: aum_sip.map_or(Decimal::ZERO, |row| row.aum_amount),
                sip: aum_sip.map_or(Decimal::ZERO, |row| row.sip_amount),
                amount: performance.map_or(Decimal::ZERO, |row| row.amount),
                new_client_addition: performance.map_or(Decimal::ZERO, |row| row.client_type),
                client_meeting: performance.map_or(Decimal::ZERO, |row| row.meetings),
                activation: performance.map_or(Decimal::ZERO, |row| row.activation),
                specific_task: performance.map_or(Decimal::ZERO, |row| row.specific_task),
                deals: performance.map_or(0, |row| row.deals),
                business_points: points.map_or(Decimal::ZERO, |row| row.business_points),
                rank: points.map_or(0, |row| row.rank),
            }
        })
        .collect()
}

fn accumulate(total: &mut Decimal, value: Decimal, metric: &str) -> Result<(), AnalyticsError> {
    *total = total
        .checked_add(value)
        .ok_or_else(|| AnalyticsError::Overflow(metric.to_string()))?;
    Ok(())
}

fn accumulate_optional(
    total: &mut Decimal,
    value: Option<Decimal>,
    metric: &str,
) -> Result<(), AnalyticsError> {
    match value {
        Some(value) => accumulate(total, value, metric),
        None => Ok(()),
    }
}

fn checked_sum<I>(values: I, metric: &str) -> Result<Decimal, AnalyticsError>
where
    I: IntoIterator<Item = Decimal>,
{
    let mut total = Decimal::ZERO;
    for value in values {
        accumulate(&mut total, value, metric)?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn unmapped_category_or_missing_amount_scores_nothing() {
        let rates = PointRateTable::standard();
        let engine = MetricsEngine::new(&rates);

        let unmapped = SalesRecord::new("Asha", "FIXED DEPOSIT", dec!(50000));
        let missing_amount = SalesRecord {
            amount: None,
            ..SalesRecord::new("Asha", "LIFE INSURANCE", dec!(0))
        };

        assert_eq!(engine.record_points(&unmapped).unwrap(), None);
        assert_eq!(engine.record_points(&missing_amount).unwrap(), None);
    }

    #[test]
    fn owner_without_scoring_rows_still_ranks_with_zero() {
        let rates = PointRateTable::standard();
        let engine = MetricsEngine::new(&rates);
        let records = [
            SalesRecord::new("Asha", "LIFE INSURANCE", dec!(10000)),
            SalesRecord::new("Ravi", "FIXED DEPOSIT", dec!(90000)),
        ];
        let refs: Vec<&SalesRecord> = records.iter().collect();

        let rows = engine.business_points(&refs).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].owner, "Asha");
        assert_eq!(rows[0].business_points, dec!(40));
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[1].owner, "Ravi");
        assert_eq!(rows[1].business_points, Decimal::ZERO);
        assert_eq!(rows[1].rank, 2);
    }

    #[test]
    fn overflow_is_reported() {
        let rates = PointRateTable::standard();
        let engine = MetricsEngine::new(&rates);
        let records = [
            SalesRecord::new("Asha", "PMS", Decimal::MAX),
            SalesRecord::new("Asha", "PMS", Decimal::MAX),
        ];

        let err = engine.calculate(&records, &OwnerSelection::all()).unwrap_err();
        assert!(matches!(err, AnalyticsError::Overflow(_)));
    }
}
