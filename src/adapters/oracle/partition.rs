//! Parser for the grouping oracle's partition replies.

use crate::ports::OracleError;

/// Parses a partition reply of the form `((1,2),(3))` into its raw id
/// tuples. The outer parentheses are optional: `(1,2),(3)` parses the same.
///
/// Whitespace is ignored throughout. Any non-integer token is a hard format
/// error; no best-effort partial grouping is attempted.
pub fn parse_partition(text: &str) -> Result<Vec<Vec<usize>>, OracleError> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(OracleError::malformed("empty grouping response"));
    }

    let mut groups = Vec::new();
    for segment in compact.split("),(") {
        let cleaned = segment.trim_matches(|c| c == '(' || c == ')');

        let mut ids = Vec::new();
        for token in cleaned.split(',') {
            let id: usize = token.parse().map_err(|_| {
                OracleError::malformed(format!("expected an integer id, got '{token}'"))
            })?;
            ids.push(id);
        }
        groups.push(ids);
    }

    Ok(groups)
}

/// Converts the 1-indexed ids of a parsed partition into zero-based indices
/// against a condition list of length `len`. Out-of-range ids (including 0)
/// are format errors.
pub fn to_zero_based(
    groups: Vec<Vec<usize>>,
    len: usize,
) -> Result<Vec<Vec<usize>>, OracleError> {
    groups
        .into_iter()
        .map(|group| {
            group
                .into_iter()
                .map(|id| {
                    if id == 0 || id > len {
                        Err(OracleError::malformed(format!(
                            "condition id {id} outside 1..={len}"
                        )))
                    } else {
                        Ok(id - 1)
                    }
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_outer_parentheses() {
        assert_eq!(
            parse_partition("((1,2),(3))").unwrap(),
            vec![vec![1, 2], vec![3]]
        );
    }

    #[test]
    fn parses_without_outer_parentheses() {
        assert_eq!(
            parse_partition("(1,2),(3)").unwrap(),
            vec![vec![1, 2], vec![3]]
        );
    }

    #[test]
    fn parses_a_single_group() {
        assert_eq!(parse_partition("(1,2,3)").unwrap(), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn ignores_whitespace() {
        assert_eq!(
            parse_partition(" ( (1, 2) , (3) ) ").unwrap(),
            vec![vec![1, 2], vec![3]]
        );
    }

    #[test]
    fn non_integer_token_is_a_format_error() {
        let err = parse_partition("(1,x)").unwrap_err();
        assert!(matches!(err, OracleError::MalformedResponse(_)));
    }

    #[test]
    fn empty_reply_is_a_format_error() {
        assert!(parse_partition("   ").is_err());
    }

    #[test]
    fn zero_based_conversion_shifts_ids_down() {
        let converted = to_zero_based(vec![vec![1, 2], vec![3]], 3).unwrap();
        assert_eq!(converted, vec![vec![0, 1], vec![2]]);
    }

    #[test]
    fn id_zero_is_out_of_range() {
        assert!(to_zero_based(vec![vec![0]], 3).is_err());
    }

    #[test]
    fn id_beyond_the_condition_count_is_out_of_range() {
        assert!(to_zero_based(vec![vec![4]], 3).is_err());
    }
}
