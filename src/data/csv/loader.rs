use crate::core::{Dataset, LabelVocabulary};
use crate::data::csv::parser::{is_comment_or_empty, parse_row};
use ndarray::Array2;
use std::fs::File;
use std::io::{BufRead, BufReader, Error, ErrorKind};
use std::path::Path;

/// Loads a delimited text file into a [`Dataset`]: every column but the last
/// parses as an `f64` feature, the last column is the nominal class label.
/// Class indices follow first appearance in the file.
pub fn load_dataset(
    path: &Path,
    delimiter: char,
    skip_header: bool,
) -> Result<Dataset, Error> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut vocabulary = LabelVocabulary::new();
    let mut values: Vec<f64> = Vec::new();
    let mut labels: Vec<usize> = Vec::new();
    let mut columns: Option<usize> = None;
    let mut header_pending = skip_header;

    for line in reader.lines() {
        let line = line?;
        if is_comment_or_empty(&line) {
            continue;
        }
        if header_pending {
            header_pending = false;
            continue;
        }

        let (features, label) = parse_row(&line, delimiter, columns.map(|c| c + 1))?;
        columns.get_or_insert(features.len());
        labels.push(vocabulary.intern(&label));
        values.extend(features);
    }

    let Some(columns) = columns else {
        return Err(Error::new(
            ErrorKind::UnexpectedEof,
            format!("{} contains no data rows", path.display()),
        ));
    };

    let rows = labels.len();
    let features = Array2::from_shape_vec((rows, columns), values)
        .map_err(|e| Error::new(ErrorKind::InvalidData, e.to_string()))?;

    Dataset::new(features, labels, vocabulary)
        .map_err(|e| Error::new(ErrorKind::InvalidData, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().expect("tempfile");
        f.write_all(contents.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn loads_rows_and_interns_labels_in_first_appearance_order() {
        let tf = write_csv("# sample\n2,8,T\n5,12,I\n4,11,T\n\n1,1,D\n");
        let ds = load_dataset(tf.path(), ',', false).unwrap();

        assert_eq!(ds.len(), 4);
        assert_eq!(ds.number_of_attributes(), 2);
        assert_eq!(ds.classes(), 3);
        assert_eq!(ds.labels(), &[0, 1, 0, 2]);
        assert_eq!(ds.vocabulary().name_of(0), Some("T"));
        assert_eq!(ds.vocabulary().name_of(2), Some("D"));
        assert_eq!(ds.features()[[1, 1]], 12.0);
    }

    #[test]
    fn skip_header_drops_first_data_line() {
        let tf = write_csv("x,y,letter\n2,8,T\n5,12,I\n");
        let ds = load_dataset(tf.path(), ',', true).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.labels(), &[0, 1]);
    }

    #[test]
    fn missing_file_returns_not_found() {
        let err = load_dataset(Path::new("no/such/letters.csv"), ',', false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn file_without_data_rows_errors_unexpected_eof() {
        let tf = write_csv("# only comments\n\n");
        let err = load_dataset(tf.path(), ',', false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }

    #[test]
    fn header_only_file_errors_unexpected_eof() {
        let tf = write_csv("x,y,letter\n");
        let err = load_dataset(tf.path(), ',', true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }

    #[test]
    fn ragged_row_errors_invalid_data() {
        let tf = write_csv("2,8,T\n5,12,9,I\n");
        let err = load_dataset(tf.path(), ',', false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn non_numeric_feature_errors_invalid_data() {
        let tf = write_csv("2,eight,T\n");
        let err = load_dataset(tf.path(), ',', false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }
}
