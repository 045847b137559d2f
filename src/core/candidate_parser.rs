//! Candidate parser: pulls the triggering candidate out of a snoopy log
//!
//! A snoopy log is a header of `#` comment lines followed by whitespace
//! separated candidate rows. Exactly one row is expected.

use std::path::Path;

use log::{debug, info};

use crate::types::{Candidate, GateError, FIELD_DM, FIELD_MJD, FIELD_WIDTH};

/// Read and parse a snoopy log file
pub fn parse_candidate_file(path: &Path) -> Result<Candidate, GateError> {
    let text = std::fs::read_to_string(path).map_err(|source| GateError::CandidateRead {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Reading snoopy log {}", path.display());
    parse_candidate_str(&text)
}

/// Parse the contents of a snoopy log
pub fn parse_candidate_str(text: &str) -> Result<Candidate, GateError> {
    let rows = data_lines(text);

    let row = match rows.as_slice() {
        [] => return Err(GateError::NoCandidate),
        [row] => *row,
        many => return Err(GateError::MultipleCandidates { count: many.len() }),
    };

    let fields: Vec<&str> = row.split_whitespace().collect();
    let candidate = Candidate::new(
        field(&fields, FIELD_WIDTH, "width")?,
        field(&fields, FIELD_DM, "dm")?,
        field(&fields, FIELD_MJD, "mjd")?,
    );

    info!(
        "Snoopy candidate: width={} samples, DM={}, MJD={}",
        candidate.width_samples, candidate.dm, candidate.detection_mjd
    );
    Ok(candidate)
}

/// Non-comment lines. Length counts the line terminator, so a bare newline
/// (length 1) is skipped along with `#` lines.
fn data_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n')
        .inspect(|line| debug!("snoopy: {}", line.trim_end()))
        .filter(|line| line.len() > 1 && !line.starts_with('#'))
        .collect()
}

fn field(fields: &[&str], index: usize, name: &'static str) -> Result<f64, GateError> {
    let raw = fields
        .get(index)
        .ok_or(GateError::MissingField { index, name })?;
    raw.parse::<f64>().map_err(|_| GateError::InvalidField {
        name,
        value: raw.to_string(),
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "# S/N sampno secs boxcar idt dm beamno mjd\n";

    #[test]
    fn test_single_candidate() {
        let text = format!("{}12.5 1000 1.7 10 20 100.0 3 59000.123456\n", HEADER);
        let cand = parse_candidate_str(&text).unwrap();
        assert_eq!(cand.width_samples, 10.0);
        assert_eq!(cand.dm, 100.0);
        assert_eq!(cand.detection_mjd, 59000.123456);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let text = format!("\n{}\n9 1 2 4 5 300.5 7 58999.5\n\n", HEADER);
        let cand = parse_candidate_str(&text).unwrap();
        assert_eq!(cand.width_samples, 4.0);
        assert_eq!(cand.dm, 300.5);
    }

    #[test]
    fn test_no_candidate() {
        let err = parse_candidate_str(HEADER).unwrap_err();
        assert!(matches!(err, GateError::NoCandidate));
        assert!(matches!(parse_candidate_str("").unwrap_err(), GateError::NoCandidate));
    }

    #[test]
    fn test_multiple_candidates() {
        let text = format!(
            "{}1 2 3 4 5 6 7 8\n1 2 3 4 5 6 7 8\n",
            HEADER
        );
        let err = parse_candidate_str(&text).unwrap_err();
        assert!(matches!(err, GateError::MultipleCandidates { count: 2 }));
    }

    #[test]
    fn test_short_row() {
        let err = parse_candidate_str("1 2 3 4 5 6\n").unwrap_err();
        assert!(matches!(err, GateError::MissingField { index: 7, .. }));
    }

    #[test]
    fn test_non_numeric_field() {
        let err = parse_candidate_str("1 2 3 wide 5 6 7 8\n").unwrap_err();
        match err {
            GateError::InvalidField { name, value } => {
                assert_eq!(name, "width");
                assert_eq!(value, "wide");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = parse_candidate_file(Path::new("/nonexistent/snoopy.cand")).unwrap_err();
        assert_eq!(err.code(), "E201_CANDIDATE_READ");
    }
}
