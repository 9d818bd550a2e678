use golf_points::{
    scoring::LedgerSnapshot, InMemoryScoreRepository, RawRoundInput, Roster, Round,
    RunningTotals, ScoringConfig, ScoringService,
};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// A round to score, optionally on top of a previously saved ledger
#[derive(Debug, Deserialize)]
struct ScoreRequest {
    roster: Roster,
    inputs: Vec<RawRoundInput>,
    #[serde(default)]
    rate: Option<serde_json::Value>,
    #[serde(default)]
    course: Option<String>,
    #[serde(default)]
    ledger: Option<LedgerSnapshot>,
}

#[derive(Debug, Serialize)]
struct ScoreResponse {
    round: Round,
    totals: RunningTotals,
    ledger: LedgerSnapshot,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "golf_points=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut body = String::new();
    std::io::stdin().read_to_string(&mut body)?;
    let request: ScoreRequest = serde_json::from_str(&body)?;

    let repository = Arc::new(match request.ledger {
        Some(snapshot) => InMemoryScoreRepository::from_snapshot(snapshot),
        None => InMemoryScoreRepository::new(),
    });
    let service = ScoringService::new(repository.clone(), ScoringConfig::from_env());

    let rate = request.rate.map(|value| match value {
        serde_json::Value::String(text) => text,
        other => other.to_string(),
    });

    let (round, totals) = service
        .process_round(
            &request.roster,
            &request.inputs,
            rate.as_deref(),
            request.course.as_deref(),
        )
        .await?;

    info!(round_id = %round.id, "Scored round");

    let response = ScoreResponse {
        round,
        totals,
        ledger: repository.snapshot().await,
    };
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
