//! # Perfboard Presentation
//!
//! Turns a `DashboardReport` into something a person can read: comfy-table tables,
//! text bar charts and a summary banner, or pretty-printed JSON.

pub mod charts;
pub mod format;
pub mod tables;

use analytics::DashboardReport;
use comfy_table::Table;

pub use charts::BarChart;

/// Layout knobs for the terminal rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Width, in cells, of the longest bar in each chart.
    pub chart_width: usize,
    /// Fixed table width. `None` fits tables to the terminal when there is one.
    pub table_width: Option<u16>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            chart_width: 40,
            table_width: None,
        }
    }
}

/// Renders the full dashboard in display order: banner, amount categorization,
/// the two headline charts, AUM & SIP, performance metrics and the final matrix.
pub fn render_dashboard(report: &DashboardReport, options: &RenderOptions) -> String {
    let width = options.chart_width;
    let sections = [
        fit(tables::summary_banner(&report.summary), options).to_string(),
        section("💰 Amount Categorization", tables::amount_categories_table(report), options),
        charts::amount_chart(report).render(width),
        section("🏆 Business Points Ranking", tables::business_points_table(report), options),
        charts::points_chart(report).render(width),
        section("💰 AUM & SIP Distribution", tables::aum_sip_table(report), options),
        charts::aum_sip_chart(report).render(width),
        section("📈 Performance Metrics", tables::performance_table(report), options),
        section("📊 Final Structured Matrix", tables::final_matrix_table(report), options),
    ];
    sections.join("\n")
}

fn fit(mut table: Table, options: &RenderOptions) -> Table {
    if let Some(width) = options.table_width {
        table.set_width(width);
    }
    table
}

fn section(heading: &str, table: Table, options: &RenderOptions) -> String {
    format!("{heading}\n{}\n", fit(table, options))
}

/// The report as pretty-printed JSON, keyed by the dashboard's column headings.
pub fn render_json(report: &DashboardReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
