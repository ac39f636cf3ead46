use crate::error::{Result, SoilCheckError};
use crate::models::ObservationSet;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const CSV_HEADER: [&str; 2] = ["Date", "SoilMoisture"];

/// Write observations to a CSV file at `path`.
///
/// Returns `SoilCheckError::Export` without writing anything if the file
/// cannot be created.
pub fn export_csv(observations: &ObservationSet, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| SoilCheckError::Export {
        path: path.to_path_buf(),
        source,
    })?;

    write_csv(observations, file)?;
    tracing::debug!(
        "Wrote {} observations to {}",
        observations.len(),
        path.display()
    );
    Ok(())
}

/// Write the header and one `date,value` row per observation, in date-key order.
pub fn write_csv<W: Write>(observations: &ObservationSet, writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(CSV_HEADER)?;
    for (date, moisture) in observations.iter() {
        wtr.write_record([date, moisture.to_string().as_str()])?;
    }
    wtr.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_string(observations: &ObservationSet) -> String {
        let mut buf = Vec::new();
        write_csv(observations, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn writes_header_and_sorted_rows() {
        let obs: ObservationSet = [("2020-01-03", 50.0), ("2020-01-01", 15.0), ("2020-01-02", 85.5)]
            .into_iter()
            .collect();
        assert_eq!(
            to_string(&obs),
            "Date,SoilMoisture\n2020-01-01,15\n2020-01-02,85.5\n2020-01-03,50\n"
        );
    }

    #[test]
    fn empty_set_writes_header_only() {
        assert_eq!(to_string(&ObservationSet::new()), "Date,SoilMoisture\n");
    }

    #[test]
    fn reparsed_csv_matches_observations() {
        let obs: ObservationSet = [("2020-01-01", 12.345), ("2020-01-02", 0.1), ("2020-02-01", 99.0)]
            .into_iter()
            .collect();
        let text = to_string(&obs);

        let mut rdr = csv::Reader::from_reader(text.as_bytes());
        let parsed: ObservationSet = rdr
            .records()
            .map(|r| {
                let r = r.unwrap();
                (r[0].to_string(), r[1].parse::<f64>().unwrap())
            })
            .collect();
        assert_eq!(parsed, obs);
    }

    #[test]
    fn unwritable_path_is_export_error() {
        let path = std::env::temp_dir()
            .join("soilcheck-no-such-dir")
            .join("nested")
            .join("out.csv");
        let err = export_csv(&ObservationSet::new(), &path).unwrap_err();
        assert!(matches!(err, SoilCheckError::Export { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn exports_to_file() {
        let path = std::env::temp_dir().join(format!(
            "soilcheck-export-{}.csv",
            std::process::id()
        ));
        let obs: ObservationSet = [("2020-01-01", 5.0)].into_iter().collect();

        export_csv(&obs, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(written, "Date,SoilMoisture\n2020-01-01,5\n");
    }
}
