use analytics::{
    AumSipRow, CategoryAmount, MatrixRow, MetricsEngine, NO_RANK_AVAILABLE, OwnerRank,
    OwnerSelection,
};
use configuration::PointRateTable;
use core_types::SalesRecord;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn team() -> Vec<SalesRecord> {
    vec![
        SalesRecord::new("Asha", "MUTUAL FUND SIP (EQUITY)", dec!(100000))
            .with_activity(dec!(1), dec!(3), dec!(1), dec!(0)),
        SalesRecord::new("Asha", "LIFE INSURANCE", dec!(10000))
            .with_activity(dec!(0), dec!(2), dec!(0), dec!(1)),
        SalesRecord::new("Ravi", "MUTUAL FUND ( EQUITY )", dec!(500000))
            .with_activity(dec!(2), dec!(5), dec!(1), dec!(1)),
        SalesRecord::new("Ravi", "HEALTH INSURANCE", dec!(20000))
            .with_activity(dec!(1), dec!(1), dec!(0), dec!(0)),
        SalesRecord::new("Meena", "GENERAL INSURANCE", dec!(30000))
            .with_activity(dec!(0), dec!(4), dec!(0), dec!(2)),
        SalesRecord::new("Kiran", "MUTUAL FUND SIP ( DEBT )", dec!(250000))
            .with_activity(dec!(1), dec!(0), dec!(0), dec!(0)),
    ]
}

#[test]
fn single_owner_example() {
    let rates = PointRateTable::standard();
    let engine = MetricsEngine::new(&rates);
    let records = vec![
        SalesRecord::new("A", "MUTUAL FUND SIP (EQUITY)", dec!(100000)),
        SalesRecord::new("A", "LIFE INSURANCE", dec!(10000)),
    ];

    let report = engine.calculate(&records, &OwnerSelection::all()).unwrap();

    assert_eq!(report.business_points.len(), 1);
    assert_eq!(report.business_points[0].business_points, dec!(840));
    assert_eq!(report.business_points[0].rank, 1);
    assert_eq!(
        report.aum_sip,
        vec![AumSipRow {
            owner: "A".to_string(),
            aum_amount: Decimal::ZERO,
            sip_amount: dec!(100000),
        }]
    );
    assert_eq!(report.summary.rank_display(), "A: Rank 1");
    assert_eq!(report.summary.total_net_amount, dec!(110000));
}

#[test]
fn per_owner_points_sum_to_the_total() {
    let rates = PointRateTable::standard();
    let engine = MetricsEngine::new(&rates);

    let report = engine.calculate(&team(), &OwnerSelection::all()).unwrap();

    let sum: Decimal = report.business_points.iter().map(|row| row.business_points).sum();
    assert_eq!(sum, report.summary.total_business_points);
    // Asha 840, Ravi 150 + 70, Meena 0, Kiran 300.
    assert_eq!(report.summary.total_business_points, dec!(1360));
    assert_eq!(report.summary.total_net_amount, dec!(910000));
}

#[test]
fn ranking_is_dense_and_ordered() {
    let rates = PointRateTable::standard();
    let engine = MetricsEngine::new(&rates);
    let mut records = team();
    // Give Meena exactly Kiran's 300 points.
    records.push(SalesRecord::new("Meena", "MUTUAL FUND SIP ( DEBT )", dec!(250000)));

    let report = engine.calculate(&records, &OwnerSelection::all()).unwrap();

    let ranking: Vec<(&str, Decimal, u32)> = report
        .business_points
        .iter()
        .map(|row| (row.owner.as_str(), row.business_points, row.rank))
        .collect();
    assert_eq!(
        ranking,
        vec![
            ("Asha", dec!(840), 1),
            ("Kiran", dec!(300), 2),
            ("Meena", dec!(300), 2),
            ("Ravi", dec!(220), 3),
        ]
    );
}

#[test]
fn sip_products_never_count_as_aum() {
    let rates = PointRateTable::standard();
    let engine = MetricsEngine::new(&rates);

    let report = engine.calculate(&team(), &OwnerSelection::all()).unwrap();

    assert_eq!(
        report.aum_sip,
        vec![
            AumSipRow {
                owner: "Asha".to_string(),
                aum_amount: Decimal::ZERO,
                sip_amount: dec!(100000),
            },
            AumSipRow {
                owner: "Kiran".to_string(),
                aum_amount: Decimal::ZERO,
                sip_amount: dec!(250000),
            },
            AumSipRow {
                owner: "Ravi".to_string(),
                aum_amount: dec!(500000),
                sip_amount: Decimal::ZERO,
            },
        ]
    );
}

#[test]
fn amount_is_categorized_across_owners() {
    let rates = PointRateTable::standard();
    let engine = MetricsEngine::new(&rates);
    let mut records = team();
    records.push(SalesRecord::new("Kiran", "LIFE INSURANCE", dec!(5000)));

    let report = engine.calculate(&records, &OwnerSelection::all()).unwrap();

    let life = report
        .amount_categories
        .iter()
        .find(|row| row.product == "LIFE INSURANCE");
    assert_eq!(
        life,
        Some(&CategoryAmount {
            product: "LIFE INSURANCE".to_string(),
            amount: dec!(15000),
        })
    );
    assert_eq!(report.amount_categories.len(), 6);
    let products: Vec<&str> = report
        .amount_categories
        .iter()
        .map(|row| row.product.as_str())
        .collect();
    let mut sorted = products.clone();
    sorted.sort();
    assert_eq!(products, sorted);
}

#[test]
fn performance_counts_deals_and_sums_activity() {
    let rates = PointRateTable::standard();
    let engine = MetricsEngine::new(&rates);
    let mut records = team();
    records.push(SalesRecord {
        owner: Some("Ravi".to_string()),
        product: Some("PMS".to_string()),
        amount: None,
        meetings: Some(dec!(2)),
        ..SalesRecord::default()
    });

    let report = engine.calculate(&records, &OwnerSelection::all()).unwrap();

    let ravi = report
        .performance
        .iter()
        .find(|row| row.owner == "Ravi")
        .unwrap();
    assert_eq!(ravi.deals, 3);
    assert_eq!(ravi.amount, dec!(520000));
    assert_eq!(ravi.client_type, dec!(3));
    assert_eq!(ravi.meetings, dec!(8));
    assert_eq!(ravi.activation, dec!(1));
    assert_eq!(ravi.specific_task, dec!(1));
}

#[test]
fn final_matrix_covers_every_owner_with_zero_fill() {
    let rates = PointRateTable::standard();
    let engine = MetricsEngine::new(&rates);

    let report = engine.calculate(&team(), &OwnerSelection::all()).unwrap();

    // Meena has no AUM/SIP rows but still appears, with zeroes.
    assert_eq!(report.final_matrix.len(), 4);
    let numbers: Vec<usize> = report.final_matrix.iter().map(|row| row.sl_no).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
    let meena = &report.final_matrix[2];
    assert_eq!(
        meena,
        &MatrixRow {
            sl_no: 3,
            candidate: "Meena".to_string(),
            aum: Decimal::ZERO,
            sip: Decimal::ZERO,
            amount: dec!(30000),
            new_client_addition: dec!(0),
            client_meeting: dec!(4),
            activation: dec!(0),
            specific_task: dec!(2),
            deals: 1,
            business_points: Decimal::ZERO,
            rank: 4,
        }
    );
    let asha = &report.final_matrix[0];
    assert_eq!(asha.candidate, "Asha");
    assert_eq!(asha.sip, dec!(100000));
    assert_eq!(asha.client_meeting, dec!(5));
    assert_eq!(asha.business_points, dec!(840));
    assert_eq!(asha.rank, 1);
}

#[test]
fn empty_selection_ranks_every_owner_in_upload_order() {
    let rates = PointRateTable::standard();
    let engine = MetricsEngine::new(&rates);

    let report = engine.calculate(&team(), &OwnerSelection::all()).unwrap();

    assert_eq!(
        report.summary.rank_display(),
        "Asha: Rank 1 | Ravi: Rank 3 | Meena: Rank 4 | Kiran: Rank 2"
    );
}

#[test]
fn ranks_are_relative_to_the_selection() {
    let rates = PointRateTable::standard();
    let engine = MetricsEngine::new(&rates);

    let report = engine
        .calculate(&team(), &OwnerSelection::of(["Ravi", "Meena"]))
        .unwrap();

    assert_eq!(report.filtered_records, 3);
    assert_eq!(
        report.summary.rank_positions,
        vec![
            OwnerRank {
                owner: "Ravi".to_string(),
                rank: 1,
            },
            OwnerRank {
                owner: "Meena".to_string(),
                rank: 2,
            },
        ]
    );
    assert_eq!(report.summary.total_business_points, dec!(220));
    assert_eq!(report.summary.total_net_amount, dec!(550000));
}

#[test]
fn unknown_selection_yields_empty_dashboard() {
    let rates = PointRateTable::standard();
    let engine = MetricsEngine::new(&rates);

    let report = engine
        .calculate(&team(), &OwnerSelection::of(["Nobody"]))
        .unwrap();

    assert_eq!(report.filtered_records, 0);
    assert_eq!(report.summary.rank_display(), NO_RANK_AVAILABLE);
    assert_eq!(report.summary.total_business_points, Decimal::ZERO);
    assert_eq!(report.summary.total_net_amount, Decimal::ZERO);
    assert!(report.amount_categories.is_empty());
    assert!(report.business_points.is_empty());
    assert!(report.aum_sip.is_empty());
    assert!(report.performance.is_empty());
    assert!(report.final_matrix.is_empty());
}

#[test]
fn ownerless_rows_count_toward_totals_only_without_a_filter() {
    let rates = PointRateTable::standard();
    let engine = MetricsEngine::new(&rates);
    let mut records = team();
    records.push(SalesRecord {
        product: Some("LIFE INSURANCE".to_string()),
        amount: Some(dec!(1000)),
        ..SalesRecord::default()
    });

    let all = engine.calculate(&records, &OwnerSelection::all()).unwrap();
    assert_eq!(all.summary.total_net_amount, dec!(911000));
    // The row has no owner, so it earns no owner any points.
    assert_eq!(all.summary.total_business_points, dec!(1360));
    assert_eq!(all.business_points.len(), 4);

    let asha = engine.calculate(&records, &OwnerSelection::of(["Asha"])).unwrap();
    assert_eq!(asha.summary.total_net_amount, dec!(110000));
}

#[test]
fn custom_rates_change_the_points() {
    let rates = PointRateTable::from_categories(&[configuration::CategoryRate {
        name: "GENERAL INSURANCE".to_string(),
        points_per_lakh: dec!(100),
    }])
    .unwrap();
    let engine = MetricsEngine::new(&rates);

    let report = engine.calculate(&team(), &OwnerSelection::all()).unwrap();

    assert_eq!(report.business_points[0].owner, "Meena");
    assert_eq!(report.business_points[0].business_points, dec!(30));
    assert_eq!(report.summary.total_business_points, dec!(30));
}

#[test]
fn report_serializes_with_display_headings() {
    let rates = PointRateTable::standard();
    let engine = MetricsEngine::new(&rates);

    let report = engine.calculate(&team(), &OwnerSelection::all()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    let first = &json["final_matrix"][0];
    assert_eq!(first["SL NO"], 1);
    assert_eq!(first["CANDIDATE"], "Asha");
    assert!(first.get("Client Meeting").is_some());
    assert!(first.get("New Client Addition").is_some());
    assert_eq!(json["business_points"][0]["Rank"], 1);
}
