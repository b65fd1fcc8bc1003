use chrono::NaiveDate;
use clinic_siting::error::AppError;
use clinic_siting::workflows::site_scoring::ScoringInput;
use metrics_exporter_prometheus::PrometheusHandle;
use std::fs;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Reads a scoring form saved as JSON. Missing fields stay unspecified.
pub(crate) fn load_scoring_input(path: &Path) -> Result<ScoringInput, AppError> {
    let raw = fs::read_to_string(path)?;
    let input = serde_json::from_str(&raw)?;
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_siting::workflows::site_scoring::Floor;
    use std::io::Write;

    #[test]
    fn parse_date_accepts_iso_dates() {
        let date = parse_date(" 2025-03-01 ").expect("date parses");
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date"));
        assert!(parse_date("03/01/2025").is_err());
    }

    #[test]
    fn load_scoring_input_reads_partial_forms() {
        let path = std::env::temp_dir().join(format!(
            "clinic-siting-input-{}.json",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).expect("temp file");
        file.write_all(br#"{"floor":"third","area":35.5,"rent":"premium_tier"}"#)
            .expect("write input");

        let input = load_scoring_input(&path).expect("input loads");
        fs::remove_file(&path).ok();

        assert_eq!(input.floor, Floor::Third);
        assert_eq!(input.area, Some(35.5));
        assert_eq!(
            input,
            ScoringInput {
                floor: Floor::Third,
                area: Some(35.5),
                ..ScoringInput::default()
            }
        );
    }

    #[test]
    fn load_scoring_input_reports_missing_file() {
        let err = load_scoring_input(Path::new("/nonexistent/clinic-siting.json"))
            .expect_err("missing file");
        assert!(matches!(err, AppError::Io(_)));
    }
}
