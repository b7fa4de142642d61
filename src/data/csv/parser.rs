use std::io::{Error, ErrorKind};

pub(super) fn is_comment_or_empty(s: &str) -> bool {
    let t = s.trim();
    t.is_empty() || t.starts_with('#')
}

/// Splits a data row into trimmed fields. Empty trailing fields are kept so
/// ragged rows are caught by arity checks instead of being silently padded.
pub(super) fn split_row(line: &str, delimiter: char) -> Vec<&str> {
    line.trim().split(delimiter).map(str::trim).collect()
}

/// Parses one data row into numeric feature values plus the class name in
/// the last column.
pub(super) fn parse_row(
    line: &str,
    delimiter: char,
    expected_columns: Option<usize>,
) -> Result<(Vec<f64>, String), Error> {
    let fields = split_row(line, delimiter);
    if fields.len() < 2 {
        return Err(Error::new(
            ErrorKind::InvalidData,
            format!("row '{}' needs at least one feature and a class label", line.trim()),
        ));
    }
    if let Some(expected) = expected_columns
        && fields.len() != expected
    {
        return Err(Error::new(
            ErrorKind::InvalidData,
            format!(
                "row has {} columns, expected {}",
                fields.len(),
                expected
            ),
        ));
    }

    let (label, feature_fields) = fields.split_last().expect("checked above");
    if label.is_empty() {
        return Err(Error::new(
            ErrorKind::InvalidData,
            "row has an empty class label",
        ));
    }

    let mut features = Vec::with_capacity(feature_fields.len());
    for (idx, raw) in feature_fields.iter().enumerate() {
        let value: f64 = raw.parse().map_err(|_| {
            Error::new(
                ErrorKind::InvalidData,
                format!("invalid numeric value '{raw}' in column #{idx}"),
            )
        })?;
        features.push(value);
    }

    Ok((features, label.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn comment_and_blank_lines_are_recognized() {
        assert!(is_comment_or_empty(""));
        assert!(is_comment_or_empty("   \n"));
        assert!(is_comment_or_empty("# letter-recognition"));
        assert!(!is_comment_or_empty("1,2,T"));
    }

    #[test]
    fn parse_row_reads_features_and_label() {
        let (features, label) = parse_row("2,8,3,T", ',', None).unwrap();
        assert_eq!(features, vec![2.0, 8.0, 3.0]);
        assert_eq!(label, "T");
    }

    #[test]
    fn parse_row_supports_alternate_delimiter() {
        let (features, label) = parse_row("1.5;2.5;I", ';', Some(3)).unwrap();
        assert_eq!(features, vec![1.5, 2.5]);
        assert_eq!(label, "I");
    }

    #[test]
    fn parse_row_rejects_wrong_arity() {
        let err = parse_row("1,2,T", ',', Some(4)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn parse_row_rejects_non_numeric_feature() {
        let err = parse_row("1,abc,T", ',', None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn parse_row_rejects_single_column() {
        let err = parse_row("T", ',', None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn parse_row_rejects_empty_label() {
        let err = parse_row("1,2,", ',', None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }
}
