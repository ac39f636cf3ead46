use crate::models::ObservationSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load observations from a whitespace-delimited `<date> <value>` text file.
///
/// An unopenable file is logged and yields an empty set; callers detect the
/// failure by checking `is_empty()`.
pub fn load_observations(path: &Path) -> ObservationSet {
    tracing::info!("Attempting to open file for reading: {}", path.display());

    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            tracing::error!("Failed to open the file: {}: {}", path.display(), e);
            return ObservationSet::new();
        }
    };

    read_observations(BufReader::new(file))
}

/// Parse observations line by line, stopping at the first line that is not
/// a `<date> <value>` pair. Everything read before that line is kept.
///
/// Lines are split on raw bytes, so a key with invalid UTF-8 is kept (lossily
/// decoded) rather than ending the read.
pub fn read_observations<R: BufRead>(reader: R) -> ObservationSet {
    let mut observations = ObservationSet::new();

    for (index, line) in reader.split(b'\n').enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                tracing::debug!("Stopped reading at line {}: {}", index + 1, e);
                break;
            }
        };
        let line = String::from_utf8_lossy(&line);

        match parse_line(&line) {
            Some((date, moisture)) => {
                observations.insert(date, moisture);
            }
            None => {
                tracing::debug!("Stopped reading at unparseable line {}", index + 1);
                break;
            }
        }
    }

    observations
}

fn parse_line(line: &str) -> Option<(&str, f64)> {
    let mut tokens = line.split_whitespace();
    let date = tokens.next()?;
    let moisture = parse_leading_number(tokens.next()?)?;
    Some((date, moisture))
}

/// Parse the longest decimal number at the start of `token`, ignoring
/// anything after it (`12abc` reads as 12). Only a sign, digits, one `.` and
/// an exponent are accepted, so `nan`, `inf` and `infinity` are rejected.
fn parse_leading_number(token: &str) -> Option<f64> {
    let bytes = token.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    token[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
