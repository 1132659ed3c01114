//! Numeric coercion for raw catalog cells.
//!
//! Survey catalogs routinely carry sparse or malformed numeric cells, so
//! coercion is total: every cell maps to `Some(f64)` or `None`, never an
//! error. `None` is the explicit not-a-number sentinel — the scoring
//! features treat it as "threshold not met" rather than crashing.

use crate::model::Cell;

/// Coerce an arbitrary cell into a number, or `None` when no finite number
/// can be read from it.
pub fn to_number(cell: &Cell) -> Option<f64> {
    match cell {
        Cell::Number(n) if n.is_finite() => Some(*n),
        Cell::Number(_) => None,
        Cell::Text(s) => parse_loose(s),
        Cell::Empty => None,
    }
}

/// Parse text as a float after normalizing comma decimal separators
/// (`"3,14"` → 3.14, common in locale-formatted exports). Every comma is
/// replaced, so thousands-grouped values like `"1,234.5"` do not parse and
/// fall through to the sentinel.
fn parse_loose(s: &str) -> Option<f64> {
    s.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numeric_text_parses() {
        assert_eq!(to_number(&Cell::Text("3.14".into())), Some(3.14));
        assert_eq!(to_number(&Cell::Text("  42 ".into())), Some(42.0));
        assert_eq!(to_number(&Cell::Text("-0.5".into())), Some(-0.5));
        assert_eq!(to_number(&Cell::Text("1e3".into())), Some(1000.0));
    }

    #[test]
    fn comma_decimal_separator_is_normalized() {
        assert_eq!(to_number(&Cell::Text("3,14".into())), Some(3.14));
        assert_eq!(to_number(&Cell::Text("12,0".into())), Some(12.0));
    }

    #[test]
    fn grouped_thousands_become_the_sentinel() {
        assert_eq!(to_number(&Cell::Text("1,234.5".into())), None);
    }

    #[test]
    fn non_numeric_values_become_the_sentinel() {
        assert_eq!(to_number(&Cell::Text("abc".into())), None);
        assert_eq!(to_number(&Cell::Text("".into())), None);
        assert_eq!(to_number(&Cell::Empty), None);
    }

    #[test]
    fn nan_and_infinite_text_become_the_sentinel() {
        assert_eq!(to_number(&Cell::Text("NaN".into())), None);
        assert_eq!(to_number(&Cell::Text("inf".into())), None);
    }

    #[test]
    fn numeric_cells_pass_through() {
        assert_eq!(to_number(&Cell::Number(7.5)), Some(7.5));
        assert_eq!(to_number(&Cell::Number(f64::NAN)), None);
    }
}
