use anyhow::Result;
use healthmate_client::config::Config;
use healthmate_client::i18n::{resolve, LanguagePreferences};
use healthmate_client::models::VitalValue;
use healthmate_client::reports::{self, SortKey, TypeFilter};
use healthmate_client::store::PreferenceStore;
use healthmate_client::vitals;
use std::str::FromStr;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("healthmate_client=info".parse()?),
        )
        .init();

    info!("Starting HealthMate overview");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Active language, persisted across runs
    let store = PreferenceStore::open(&config.preferences_path)?;
    let prefs = LanguagePreferences::load(store)?;
    let language = prefs.language();

    // List criteria: search term from argv, filter/sort from environment
    let search = std::env::args().nth(1).unwrap_or_default();
    let filter = std::env::var("HEALTHMATE_FILTER")
        .map(|s| TypeFilter::parse(&s))
        .unwrap_or(TypeFilter::All);
    let sort = match std::env::var("HEALTHMATE_SORT") {
        Ok(s) => SortKey::from_str(&s)?,
        Err(_) => SortKey::default(),
    };

    // Step 1: Fetch and shape the report list
    info!("Fetching reports");
    let all_reports = reports::fetch_reports(&config).await?;
    let view = reports::filter_and_sort(&all_reports, &search, &filter, sort);

    println!("{}", resolve(language, "medicalReports"));
    for report in &view {
        let type_label = match report.report_type.label_key() {
            Some(key) => resolve(language, key),
            // Unrecognized backend values are shown verbatim
            None => report.report_type.as_str(),
        };
        let status = if report.is_analyzed {
            "analyzed"
        } else {
            "processing"
        };
        println!(
            "  {}  {}  [{}]  {}",
            report.report_date, report.title, type_label, status
        );

        if let Some(analysis) = &report.ai_analysis {
            println!(
                "      {} {}%: {}",
                resolve(language, "confidence"),
                analysis.confidence,
                analysis.summary.for_language(language)
            );
        }
    }
    // Step 2: Fetch vitals
    info!("Fetching vitals");
    let readings = vitals::fetch_vitals(&config).await?;

    println!("{}", resolve(language, "vitalSigns"));
    for reading in &readings {
        let type_label = match reading.vital_type.label_key() {
            Some(key) => resolve(language, key),
            None => reading.vital_type.as_str(),
        };
        let value = match &reading.value {
            VitalValue::BloodPressure { systolic, diastolic } => {
                format!(
                    "{}/{} {}",
                    systolic,
                    diastolic,
                    reading.vital_type.default_unit()
                )
            }
            VitalValue::Measurement { reading: value, unit } => format!("{} {}", value, unit),
        };
        println!(
            "  {}  {}  {}  ({})",
            reading.date,
            type_label,
            value,
            resolve(language, reading.time.label_key())
        );
    }

    info!("Done");
    Ok(())
}
