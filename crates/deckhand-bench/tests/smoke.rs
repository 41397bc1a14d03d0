use std::fs;

use deckhand_bench::config::ScenarioConfig;
use deckhand_bench::runner::ReplayRunner;
use tempfile::tempdir;

fn load_config(output_dir: &std::path::Path) -> ScenarioConfig {
    let yaml = format!(
        r#"
run_id: "test_smoke"
turns:
  - hand: {{ copper: 4, estate: 1 }}
    stock: {{ province: 8, gold: 30, silver: 40, smithy: 10 }}
    scores: [0, 0]
  - hand: {{ smithy: 1, copper: 4 }}
    stock: {{ province: 8, gold: 30, silver: 40, smithy: 9 }}
    scores: [0, 0]
outputs:
  jsonl: "{jsonl}"
logging:
  enable_structured: false
"#,
        jsonl = output_dir.join("decisions.jsonl").display()
    );

    let mut cfg: ScenarioConfig = serde_yaml::from_str(&yaml).expect("valid yaml");
    cfg.validate().expect("config validates");
    cfg
}

#[test]
fn replay_smoke_test_produces_expected_decisions() {
    let dir = tempdir().expect("temp dir");
    let config = load_config(dir.path());
    let outputs = config.resolved_outputs();

    let runner = ReplayRunner::new(config, outputs);
    let summary = runner.run().expect("replay completes");

    assert_eq!(summary.turns_played, 2);
    assert_eq!(summary.rows_written, 5);

    let jsonl = fs::read_to_string(&summary.jsonl_path).expect("jsonl readable");
    let decisions: Vec<String> = jsonl
        .lines()
        .map(|line| {
            let row: serde_json::Value = serde_json::from_str(line).expect("row decodes");
            assert_eq!(row["run_id"], "test_smoke");
            assert_eq!(row["strategy"], "baseline");
            row["decision"].as_str().expect("decision string").to_string()
        })
        .collect();

    // Turn 1 is an opening-book buy; turn 2 plays the smithy first and
    // then buys a second one at four coins.
    assert_eq!(
        decisions,
        vec![
            "BUY smithy",
            "END_TURN",
            "ACTION smithy",
            "BUY smithy",
            "END_TURN",
        ]
    );
}

#[test]
fn strategy_override_is_bound_at_match_start() {
    let dir = tempdir().expect("temp dir");
    let mut config = load_config(dir.path());
    config.strategy = Some("bm_smithy".to_string());
    let outputs = config.resolved_outputs();

    let runner = ReplayRunner::new(config, outputs);
    let summary = runner.run().expect("replay completes");

    let jsonl = fs::read_to_string(&summary.jsonl_path).expect("jsonl readable");
    let first: serde_json::Value =
        serde_json::from_str(jsonl.lines().next().expect("at least one row")).expect("decodes");
    assert_eq!(first["strategy"], "bm_smithy");
    // Big money ignores the opening book: four coins buys a silver.
    assert_eq!(first["decision"], "BUY silver");
}
