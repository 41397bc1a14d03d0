use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use deckhand_bot::{Agent, Decision, MatchConfig};
use deckhand_core::AgentInfo;
use deckhand_core::model::{Game, Hand, Player, Stock};
use serde::Serialize;
use thiserror::Error;
use tracing::{Level, event};

use crate::config::{ResolvedOutputs, ScenarioConfig, TurnScript};

/// Decision requests allowed per scripted turn before the runner
/// declares the engine stuck.
const MAX_DECISIONS_PER_TURN: usize = 64;

/// Replays a scripted match through the decision engine, streaming one
/// JSONL row per emitted decision.
pub struct ReplayRunner {
    config: ScenarioConfig,
    outputs: ResolvedOutputs,
}

/// Summary details returned after a run.
pub struct RunSummary {
    pub turns_played: usize,
    pub rows_written: usize,
    pub jsonl_path: PathBuf,
}

#[derive(Debug, Serialize)]
struct DecisionRow<'a> {
    run_id: &'a str,
    strategy: &'a str,
    turn: usize,
    step: usize,
    decision: String,
    coins_left: u32,
    buys_left: u32,
    gardens_plan: Option<bool>,
}

impl ReplayRunner {
    pub fn new(config: ScenarioConfig, outputs: ResolvedOutputs) -> Self {
        Self { config, outputs }
    }

    /// Execute the scenario, one scripted turn at a time.
    pub fn run(&self) -> Result<RunSummary, RunnerError> {
        ensure_parent(self.outputs.jsonl.parent())?;
        let mut writer = BufWriter::new(File::create(&self.outputs.jsonl)?);

        let agent = Agent::new();
        let match_id = self.config.run_id.as_str();
        agent.on_match_start(
            match_id,
            &MatchConfig {
                strategy: self.config.strategy.clone(),
            },
        );
        let strategy = agent
            .store()
            .snapshot(match_id)
            .map(|state| state.strategy)
            .unwrap_or_default();

        let mut rows_written = 0usize;
        for (index, script) in self.config.turns.iter().enumerate() {
            let turn = index + 1;
            agent.on_turn_start(match_id);

            let mut hand = script.hand.clone();
            let mut steps = 0usize;
            loop {
                if steps == MAX_DECISIONS_PER_TURN {
                    return Err(RunnerError::Runaway { turn });
                }
                steps += 1;

                let game = snapshot_for(script, &hand);
                let decision = agent.on_decision_request(match_id, &game);
                rows_written += 1;
                self.write_row(&mut writer, &agent, strategy.as_str(), turn, steps, &decision)?;

                match decision {
                    Decision::EndTurn => break,
                    Decision::Action(card) => {
                        // The live server reports the played card leaving
                        // the hand; the replay has to mirror that.
                        if let Some(n) = hand.get_mut(&card) {
                            *n = n.saturating_sub(1);
                            if *n == 0 {
                                hand.remove(&card);
                            }
                        }
                    }
                    Decision::Buy(_) => {}
                }
            }

            if tracing::enabled!(Level::DEBUG) {
                event!(
                    target: "deckhand_bench::runner",
                    Level::DEBUG,
                    run_id = match_id,
                    turn,
                    decisions = steps,
                    "scripted turn replayed"
                );
            }
        }

        agent.on_match_end(match_id);
        writer.flush()?;

        Ok(RunSummary {
            turns_played: self.config.turns.len(),
            rows_written,
            jsonl_path: self.outputs.jsonl.clone(),
        })
    }

    fn write_row(
        &self,
        writer: &mut BufWriter<File>,
        agent: &Agent,
        strategy: &str,
        turn: usize,
        step: usize,
        decision: &Decision,
    ) -> Result<(), RunnerError> {
        let state = agent.store().snapshot(&self.config.run_id);
        let row = DecisionRow {
            run_id: &self.config.run_id,
            strategy,
            turn,
            step,
            decision: decision.to_string(),
            coins_left: state.as_ref().map(|s| s.coins_left).unwrap_or(0),
            buys_left: state.as_ref().map(|s| s.buys_left).unwrap_or(0),
            gardens_plan: state.and_then(|s| s.gardens_plan),
        };
        serde_json::to_writer(&mut *writer, &row)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Build the snapshot the engine sees for one decision request.
fn snapshot_for(script: &TurnScript, hand: &std::collections::BTreeMap<String, u32>) -> Game {
    let my_score = script.scores.first().copied().unwrap_or(0);
    let mut players = vec![Player {
        name: AgentInfo::name().to_string(),
        score: my_score,
        hand: Some(Hand::with_counts(
            hand.iter().map(|(card, n)| (card.clone(), *n)),
        )),
    }];
    if script.scores.len() > 1 {
        players.extend(script.scores[1..].iter().enumerate().map(|(i, score)| Player {
            name: format!("opponent_{}", i + 1),
            score: *score,
            hand: None,
        }));
    } else {
        players.push(Player {
            name: "opponent_1".to_string(),
            score: 0,
            hand: None,
        });
    }

    Game {
        players,
        stock: Stock {
            quantities: script.stock.clone(),
        },
        finished: false,
    }
}

fn ensure_parent(parent: Option<&Path>) -> Result<(), RunnerError> {
    if let Some(dir) = parent {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    Ok(())
}

/// Errors surfaced while replaying a scenario.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("I/O failure during replay: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize decision row: {0}")]
    Row(#[from] serde_json::Error),
    #[error("turn {turn} did not reach END_TURN within {MAX_DECISIONS_PER_TURN} decisions")]
    Runaway { turn: usize },
}
