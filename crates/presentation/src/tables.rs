use crate::format;
use analytics::{DashboardReport, Summary};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use core_types::columns;
use rust_decimal::Decimal;

fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.to_vec());
    table
}

fn amount(value: Decimal) -> Cell {
    Cell::new(format::grouped(value)).set_alignment(CellAlignment::Right)
}

fn counter(value: Decimal) -> Cell {
    Cell::new(format::count(value)).set_alignment(CellAlignment::Right)
}

fn integer(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).set_alignment(CellAlignment::Right)
}

/// The banner: rank position, total business points and net amount.
pub fn summary_banner(summary: &Summary) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .add_row(vec![
            Cell::new(format!("🏆 Rank Position: {}", summary.rank_display())),
            Cell::new(format!(
                "💼 Total Business Points: {}",
                format::grouped(summary.total_business_points)
            )),
            Cell::new(format!(
                "💰 Net Amount: {}",
                format::rupees(summary.total_net_amount)
            )),
        ]);
    table
}

pub fn amount_categories_table(report: &DashboardReport) -> Table {
    let mut table = new_table(&[columns::PRODUCT, columns::AMOUNT]);
    for row in &report.amount_categories {
        table.add_row(vec![Cell::new(&row.product), amount(row.amount)]);
    }
    table
}

pub fn business_points_table(report: &DashboardReport) -> Table {
    let mut table = new_table(&[columns::OWNER, "Business Points", "Rank"]);
    for row in &report.business_points {
        table.add_row(vec![
            Cell::new(&row.owner),
            amount(row.business_points),
            integer(row.rank),
        ]);
    }
    table
}

pub fn aum_sip_table(report: &DashboardReport) -> Table {
    let mut table = new_table(&[columns::OWNER, "AUM Amount", "SIP Amount"]);
    for row in &report.aum_sip {
        table.add_row(vec![
            Cell::new(&row.owner),
            amount(row.aum_amount),
            amount(row.sip_amount),
        ]);
    }
    table
}

pub fn performance_table(report: &DashboardReport) -> Table {
    let mut table = new_table(&[
        columns::OWNER,
        columns::AMOUNT,
        columns::CLIENT_TYPE,
        columns::MEETINGS,
        columns::ACTIVATION,
        columns::SPECIFIC_TASK,
        "Number of Deals",
    ]);
    for row in &report.performance {
        table.add_row(vec![
            Cell::new(&row.owner),
            amount(row.amount),
            counter(row.client_type),
            counter(row.meetings),
            counter(row.activation),
            counter(row.specific_task),
            integer(row.deals),
        ]);
    }
    table
}

pub fn final_matrix_table(report: &DashboardReport) -> Table {
    let mut table = new_table(&[
        "SL NO",
        "CANDIDATE",
        "AUM",
        "SIP",
        columns::AMOUNT,
        "New Client Addition",
        "Client Meeting",
        columns::ACTIVATION,
        columns::SPECIFIC_TASK,
        "Number of Deals",
        "Business Points",
        "Rank",
    ]);
    for row in &report.final_matrix {
        table.add_row(vec![
            integer(row.sl_no),
            Cell::new(&row.candidate),
            amount(row.aum),
            amount(row.sip),
            amount(row.amount),
            counter(row.new_client_addition),
            counter(row.client_meeting),
            counter(row.activation),
            counter(row.specific_task),
            integer(row.deals),
            amount(row.business_points),
            integer(row.rank),
        ]);
    }
    table
}
