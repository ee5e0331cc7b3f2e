use std::env;
use std::fs;

use zeto::analysis::AnalysisClient;
use zeto::export::export_report;
use zeto::tabular::map_payload;
use zeto::zeto_errors::ZetoError;

/// Minimal driver: map a CSV file onto a parameter set, then classify.
/// Usage:
///   csv_upload <FILE> [ENDPOINT]
/// Without an endpoint the mapped parameter set is printed instead of being
/// submitted.
#[tokio::main]
async fn main() -> Result<(), ZetoError> {
    tracing_subscriber::fmt::init();

    let mut args = env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "observations.csv".to_string());
    let endpoint = args.next().or_else(|| env::var("ZETO_ANALYSIS_URL").ok());

    let payload = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("cannot read {path}: {err}"));

    let parameters = map_payload(&payload)?;
    println!(
        "[csv_upload] mapped {} fields from {path}",
        parameters.len()
    );

    let Some(endpoint) = endpoint else {
        println!("{}", serde_json::to_string_pretty(&parameters)?);
        return Ok(());
    };

    let client = AnalysisClient::new(endpoint)?;
    let verdict = client.classify(&parameters).await?;
    println!(
        "[csv_upload] {} ({:.0}% confidence)",
        verdict.title, verdict.confidence
    );
    println!("{}", export_report(&verdict, &parameters)?);

    Ok(())
}
