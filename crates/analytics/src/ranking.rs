use rust_decimal::Decimal;

/// Dense, descending, 1-based ranks for `values`, returned in input order.
///
/// The largest value gets rank 1, equal values share a rank and the next
/// smaller value gets the following rank, so there are never gaps.
pub fn dense_rank_descending(values: &[Decimal]) -> Vec<u32> {
    let mut distinct = values.to_vec();
    distinct.sort_by(|a, b| b.cmp(a));
    distinct.dedup();

    values
        .iter()
        .map(|value| {
            let position = match distinct.binary_search_by(|probe| value.cmp(probe)) {
                Ok(position) | Err(position) => position,
            };
            position as u32 + 1
        })
        .collect()
}
