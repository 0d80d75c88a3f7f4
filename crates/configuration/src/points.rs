use crate::error::ConfigError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::collections::HashMap;

/// 1 lakh = 100,000 INR. Rates are quoted as points earned per lakh of business.
pub const LAKH: Decimal = dec!(100000);

/// The house point schedule, in points per lakh.
/// ARN transfers earn 35% of the matching mutual fund rate.
pub const STANDARD_CATEGORIES: [(&str, Decimal); 10] = [
    ("MUTUAL FUND ( DEBT)", dec!(6)),
    ("MUTUAL FUND ( EQUITY )", dec!(30)),
    ("MUTUAL FUND SIP ( DEBT )", dec!(120)),
    ("MUTUAL FUND SIP (EQUITY)", dec!(800)),
    ("PORTFOLIO MANAGEMENT SERVICES", dec!(50)),
    ("LIFE INSURANCE", dec!(400)),
    ("GENERAL INSURANCE", dec!(0)),
    ("HEALTH INSURANCE", dec!(350)),
    ("ARN TRANSFER-EQUITY", dec!(10.5)),
    ("ARN TRANSFER-DEBT", dec!(2.1)),
];

/// One `[[points.categories]]` entry of `perfboard.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryRate {
    pub name: String,
    pub points_per_lakh: Decimal,
}

/// The `[points]` section. An empty category list means the standard schedule.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PointsConfig {
    #[serde(default)]
    pub categories: Vec<CategoryRate>,
}

impl PointsConfig {
    /// Builds the immutable rate table the metrics engine reads.
    pub fn rate_table(&self) -> Result<PointRateTable, ConfigError> {
        if self.categories.is_empty() {
            return Ok(PointRateTable::standard());
        }
        PointRateTable::from_categories(&self.categories)
    }
}

/// Product-or-service name to points-per-rupee multiplier.
///
/// Built once at startup and only ever read afterwards; lookups are exact string matches.
#[derive(Debug, Clone, PartialEq)]
pub struct PointRateTable {
    rates: HashMap<String, Decimal>,
}

impl PointRateTable {
    pub fn standard() -> Self {
        let rates = STANDARD_CATEGORIES
            .iter()
            .map(|(name, per_lakh)| (name.to_string(), *per_lakh / LAKH))
            .collect();
        Self { rates }
    }

    /// Validates and converts a list of per-lakh rates.
    pub fn from_categories(categories: &[CategoryRate]) -> Result<Self, ConfigError> {
        let mut rates = HashMap::with_capacity(categories.len());
        for category in categories {
            if category.name.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "point category names must not be empty".to_string(),
                ));
            }
            if category.points_per_lakh.is_sign_negative() {
                return Err(ConfigError::ValidationError(format!(
                    "points_per_lakh for '{}' must not be negative",
                    category.name
                )));
            }
            if rates
                .insert(category.name.clone(), category.points_per_lakh / LAKH)
                .is_some()
            {
                return Err(ConfigError::ValidationError(format!(
                    "point category '{}' is defined more than once",
                    category.name
                )));
            }
        }
        Ok(Self { rates })
    }

    /// Points earned per rupee for `product`, or `None` for an unmapped category.
    pub fn rate_for(&self, product: &str) -> Option<Decimal> {
        self.rates.get(product).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// All categories with their per-rupee rate, ordered by name.
    pub fn categories(&self) -> Vec<(&str, Decimal)> {
        let mut categories: Vec<_> = self
            .rates
            .iter()
            .map(|(name, rate)| (name.as_str(), *rate))
            .collect();
        categories.sort_by(|a, b| a.0.cmp(b.0));
        categories
    }
}

impl Default for PointRateTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_rates_are_quoted_per_rupee() {
        let table = PointRateTable::standard();
        assert_eq!(table.len(), 10);
        assert_eq!(table.rate_for("MUTUAL FUND SIP (EQUITY)"), Some(dec!(0.008)));
        assert_eq!(table.rate_for("LIFE INSURANCE"), Some(dec!(0.004)));
        assert_eq!(table.rate_for("ARN TRANSFER-EQUITY"), Some(dec!(0.000105)));
        assert_eq!(table.rate_for("ARN TRANSFER-DEBT"), Some(dec!(0.000021)));
        assert_eq!(table.rate_for("GENERAL INSURANCE"), Some(Decimal::ZERO));
    }

    #[test]
    fn lookup_is_exact() {
        let table = PointRateTable::standard();
        assert_eq!(table.rate_for("life insurance"), None);
        assert_eq!(table.rate_for("MUTUAL FUND (DEBT)"), None);
    }

    #[test]
    fn empty_points_section_falls_back_to_standard() {
        let table = PointsConfig::default().rate_table().unwrap();
        assert_eq!(table, PointRateTable::standard());
    }

    #[test]
    fn rejects_negative_and_duplicate_rates() {
        let negative = [CategoryRate {
            name: "LIFE INSURANCE".to_string(),
            points_per_lakh: dec!(-1),
        }];
        assert!(matches!(
            PointRateTable::from_categories(&negative),
            Err(ConfigError::ValidationError(_))
        ));

        let duplicate = [
            CategoryRate {
                name: "PMS".to_string(),
                points_per_lakh: dec!(50),
            },
            CategoryRate {
                name: "PMS".to_string(),
                points_per_lakh: dec!(60),
            },
        ];
        assert!(matches!(
            PointRateTable::from_categories(&duplicate),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn categories_are_sorted_by_name() {
        let table = PointRateTable::standard();
        let names: Vec<_> = table.categories().into_iter().map(|(name, _)| name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
