use crate::format;
use analytics::DashboardReport;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const BAR: char = '█';

/// A horizontal text bar chart. Each group has one bar per series.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    title: String,
    series: Vec<String>,
    groups: Vec<BarGroup>,
}

#[derive(Debug, Clone, PartialEq)]
struct BarGroup {
    label: String,
    values: Vec<Decimal>,
}

impl BarChart {
    /// A chart with a single, unnamed series.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            series: vec![String::new()],
            groups: Vec::new(),
        }
    }

    /// A grouped chart with one named series per bar in each group.
    pub fn grouped<S: Into<String>>(
        title: impl Into<String>,
        series: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            title: title.into(),
            series: series.into_iter().map(Into::into).collect(),
            groups: Vec::new(),
        }
    }

    /// Adds a group; `values` are matched to the series in order.
    pub fn push(&mut self, label: impl Into<String>, values: Vec<Decimal>) {
        self.groups.push(BarGroup {
            label: label.into(),
            values,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Renders the chart with the longest bar `width` cells wide.
    /// Bars are proportional to the largest value; negative values draw no bar.
    pub fn render(&self, width: usize) -> String {
        let mut out = format!("{}\n", self.title);
        if self.groups.is_empty() {
            out.push_str("(no data)\n");
            return out;
        }

        let label_width = self
            .groups
            .iter()
            .map(|group| group.label.chars().count())
            .max()
            .unwrap_or(0);
        let series_width = self
            .series
            .iter()
            .map(|name| name.chars().count())
            .max()
            .unwrap_or(0);
        let max = self
            .groups
            .iter()
            .flat_map(|group| group.values.iter().copied())
            .max()
            .unwrap_or(Decimal::ZERO);

        for group in &self.groups {
            for (index, value) in group.values.iter().enumerate() {
                let label = if index == 0 { group.label.as_str() } else { "" };
                let series = self.series.get(index).map(String::as_str).unwrap_or("");
                let bar: String = std::iter::repeat_n(BAR, bar_length(*value, max, width)).collect();
                let name = if series_width > 0 {
                    format!(" {series:<series_width$}")
                } else {
                    String::new()
                };
                out.push_str(&format!(
                    "{label:<label_width$}{name} │{bar} {}\n",
                    format::si(*value)
                ));
            }
        }
        out
    }
}

fn bar_length(value: Decimal, max: Decimal, width: usize) -> usize {
    if max <= Decimal::ZERO || value <= Decimal::ZERO {
        return 0;
    }
    let ratio = (value / max).to_f64().unwrap_or(0.0);
    (ratio * width as f64).round() as usize
}

/// Amount per product-or-service.
pub fn amount_chart(report: &DashboardReport) -> BarChart {
    let mut chart = BarChart::new("💰 Amount Categorization");
    for row in &report.amount_categories {
        chart.push(row.product.clone(), vec![row.amount]);
    }
    chart
}

/// Business points per owner, in rank order.
pub fn points_chart(report: &DashboardReport) -> BarChart {
    let mut chart = BarChart::new("🏆 Business Points Ranking");
    for row in &report.business_points {
        chart.push(row.owner.clone(), vec![row.business_points]);
    }
    chart
}

/// AUM and SIP amounts side by side per owner.
pub fn aum_sip_chart(report: &DashboardReport) -> BarChart {
    let mut chart = BarChart::grouped("💰 AUM & SIP Distribution", ["AUM", "SIP"]);
    for row in &report.aum_sip {
        chart.push(row.owner.clone(), vec![row.aum_amount, row.sip_amount]);
    }
    chart
}
