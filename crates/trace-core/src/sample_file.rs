use std::fs;
use std::num::ParseFloatError;
use std::path::Path;

use crate::error::TraceError;

/// A token that was selected for sampling but is not a number.
#[derive(Debug, Clone, PartialEq)]
pub struct BadToken {
    /// Index of the token within the space-split line.
    pub position: usize,
    pub token: String,
    pub source: ParseFloatError,
}

/// Downsample one line of a sample file into a series.
///
/// The line is split on single spaces, so consecutive spaces produce empty
/// tokens that still count towards the stride. Tokens at positions
/// `0, stride, 2*stride, ...` are kept; the ones that are blank after trimming
/// are dropped, the rest are parsed and shifted by `offset`.
pub fn parse_line(line: &str, stride: usize, offset: i64) -> Result<Vec<f64>, BadToken> {
    let offset = offset as f64;
    line.split(' ')
        .enumerate()
        .step_by(stride.max(1))
        .filter(|(_, token)| !token.trim().is_empty())
        .map(|(position, token)| {
            token
                .trim()
                .parse::<f64>()
                .map(|value| value + offset)
                .map_err(|source| BadToken {
                    position,
                    token: token.to_string(),
                    source,
                })
        })
        .collect()
}

/// Read every line of `path` into its own series. Blank lines give empty series.
pub fn read_series(path: &Path, stride: usize, offset: i64) -> Result<Vec<Vec<f64>>, TraceError> {
    let contents = fs::read_to_string(path).map_err(|source| TraceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    contents
        .lines()
        .enumerate()
        .map(|(idx, line)| {
            parse_line(line, stride, offset).map_err(|bad| TraceError::Parse {
                path: path.to_path_buf(),
                line: idx + 1,
                position: bad.position,
                token: bad.token,
                source: bad.source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tokens(n: usize) -> String {
        (0..n).map(|i| format!("{i}")).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_stride_keeps_every_tenth_token() {
        for n in [1, 5, 9, 10, 11, 20, 21, 99, 100, 101] {
            let series = parse_line(&tokens(n), 10, 0).unwrap();
            assert_eq!(series.len(), n.div_ceil(10), "{n} tokens");
            for (k, v) in series.iter().enumerate() {
                assert_relative_eq!(*v, (k * 10) as f64);
            }
        }
    }

    #[test]
    fn test_offset_is_added() {
        let series = parse_line("10 20 30 40 50", 10, -20_000).unwrap();
        assert_eq!(series, vec![-19_990.0]);

        let series = parse_line("1.5 9 9 2.5", 3, 10_000).unwrap();
        assert_relative_eq!(series[0], 10_001.5);
        assert_relative_eq!(series[1], 10_002.5);
    }

    #[test]
    fn test_trailing_space_and_newline_are_ignored() {
        // The harness writes "v v v " per line, leaving an empty last token.
        let series = parse_line("3 1 4 ", 3, 0).unwrap();
        assert_eq!(series, vec![3.0]);

        let series = parse_line("7 ", 1, 0).unwrap();
        assert_eq!(series, vec![7.0]);

        let series = parse_line("", 10, 0).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_double_spaces_shift_the_stride() {
        // "1  2 3" splits to ["1", "", "2", "3"]; stride 2 selects "1" and "2".
        let series = parse_line("1  2 3", 2, 0).unwrap();
        assert_eq!(series, vec![1.0, 2.0]);
    }

    #[test]
    fn test_bad_token_reports_position() {
        let line = format!("{} oops", tokens(10));
        let err = parse_line(&line, 10, 0).unwrap_err();
        assert_eq!(err.position, 10);
        assert_eq!(err.token, "oops");
    }

    #[test]
    fn test_unselected_garbage_is_never_parsed() {
        let series = parse_line("1 x y z", 10, 0).unwrap();
        assert_eq!(series, vec![1.0]);
    }

    #[test]
    fn test_read_series_one_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shoot_0.txt");
        fs::write(&path, "1 2 \n\n3 4 \n").unwrap();

        let series = read_series(&path, 2, 100).unwrap();
        assert_eq!(series, vec![vec![101.0], vec![], vec![103.0]]);
    }

    #[test]
    fn test_read_series_parse_error_names_file_and_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alienBomb_3.txt");
        fs::write(&path, "1 2\nnope 2\n").unwrap();

        match read_series(&path, 10, 0) {
            Err(TraceError::Parse {
                path: p,
                line,
                position,
                token,
                ..
            }) => {
                assert_eq!(p, path);
                assert_eq!(line, 2);
                assert_eq!(position, 0);
                assert_eq!(token, "nope");
            }
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_series_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_series(&dir.path().join("absent.txt"), 10, 0).unwrap_err();
        assert!(matches!(err, TraceError::Io { .. }));
    }
}
