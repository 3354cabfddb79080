use crate::error::{Error, Result};
use crate::roll::Roll;

/// Parse a roll sequence.
///
/// Every character other than whitespace and commas is one roll, so
/// `"2 6 X 3 /"`, `"2,6,X,3,/"` and `"26X3/"` are equivalent.
pub fn parse_rolls(input: &str) -> Result<Vec<Roll>> {
    input
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace() && *c != ',')
        .map(|(position, c)| {
            Roll::from_symbol(c)
                .ok_or_else(|| Error::InvalidRoll(format!("'{}' at position {}", c, position)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_separators_are_equivalent() {
        let spaced = parse_rolls("2 6 X 3 /").unwrap();
        let commas = parse_rolls("2,6,X,3,/").unwrap();
        let packed = parse_rolls("26X3/").unwrap();
        assert_eq!(spaced, commas);
        assert_eq!(spaced, packed);
        assert_eq!(
            spaced,
            vec![
                Roll::Pins(2),
                Roll::Pins(6),
                Roll::Strike,
                Roll::Pins(3),
                Roll::Spare
            ]
        );
    }

    #[test]
    fn test_parse_gutter() {
        assert_eq!(
            parse_rolls("9-").unwrap(),
            vec![Roll::Pins(9), Roll::Pins(0)]
        );
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_rolls("").unwrap().is_empty());
        assert!(parse_rolls("  , ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_reports_position() {
        let err = parse_rolls("X 7 A").unwrap_err();
        assert_eq!(err.to_string(), "Invalid roll symbol: 'A' at position 4");
    }
}
