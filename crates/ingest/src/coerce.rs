use rust_decimal::Decimal;
use std::str::FromStr;

/// Outcome of reading one numeric cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericCell {
    Value(Decimal),
    Empty,
    /// The cell had content that is not a number. It is treated exactly like `Empty`
    /// by the metrics, but counted so the caller can report how much was dropped.
    Invalid,
}

impl NumericCell {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return NumericCell::Empty;
        }
        match Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed)) {
            Ok(value) => NumericCell::Value(value),
            Err(_) => NumericCell::Invalid,
        }
    }

    pub fn value(self) -> Option<Decimal> {
        match self {
            NumericCell::Value(value) => Some(value),
            NumericCell::Empty | NumericCell::Invalid => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_plain_and_scientific_numbers() {
        assert_eq!(NumericCell::parse("100000"), NumericCell::Value(dec!(100000)));
        assert_eq!(NumericCell::parse(" 2500.75 "), NumericCell::Value(dec!(2500.75)));
        assert_eq!(NumericCell::parse("-12"), NumericCell::Value(dec!(-12)));
        assert_eq!(NumericCell::parse("1e5"), NumericCell::Value(dec!(100000)));
    }

    #[test]
    fn blank_cells_are_empty() {
        assert_eq!(NumericCell::parse(""), NumericCell::Empty);
        assert_eq!(NumericCell::parse("   "), NumericCell::Empty);
    }

    #[test]
    fn garbage_is_invalid() {
        assert_eq!(NumericCell::parse("n/a"), NumericCell::Invalid);
        assert_eq!(NumericCell::parse("1,000"), NumericCell::Invalid);
        assert_eq!(NumericCell::parse("twelve"), NumericCell::Invalid);
        assert_eq!(NumericCell::parse("n/a").value(), None);
    }
}
