#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Achievement evaluation and reward granting.
//!
//! Each (player, achievement) pair moves through exactly two states: locked
//! and unlocked, with a single one-way transition taken when every condition
//! of the achievement holds against a [`GameState`] snapshot. Unlocked is
//! terminal: records that already unlocked are skipped entirely and never
//! re-evaluated. Both entry points are total functions; unrecognized enum
//! values degrade to safe defaults with a [`Diagnostic`] instead of erroring.

use slop_cultivator_core::{
    AchievementCatalogue, AchievementId, AchievementProgress, AchievementReward, ComparisonOp,
    ConditionKind, Diagnostic, GameState, PlayerProfile, PlayerProgress, RewardEffect,
    UnlockTimestamp,
};

/// Outcome of one evaluation pass over the catalogue. The caller persists
/// `updated` and grants rewards for each entry in `newly_unlocked`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Evaluation {
    /// Achievements that transitioned from locked to unlocked in this call,
    /// in catalogue order.
    pub newly_unlocked: Vec<AchievementId>,
    /// Updated progress record for every achievement that was evaluated.
    /// Skipped achievements (already unlocked, or missing a record) produce
    /// no entry.
    pub updated: Vec<AchievementProgress>,
}

/// Evaluates the whole catalogue against a session snapshot.
///
/// Achievements are evaluated independently; order across achievements
/// carries no meaning. A record missing from `progress` is skipped with a
/// [`Diagnostic::MissingProgressRecord`] — records are expected to be
/// provisioned ahead of time, the evaluator never fabricates them.
#[must_use]
pub fn evaluate(
    catalogue: &AchievementCatalogue,
    progress: &PlayerProgress,
    state: &GameState,
    now: UnlockTimestamp,
    diagnostics: &mut Vec<Diagnostic>,
) -> Evaluation {
    let mut newly_unlocked = Vec::new();
    let mut updated = Vec::new();

    for achievement in catalogue.iter() {
        let Some(existing) = progress.record(achievement.id) else {
            diagnostics.push(Diagnostic::MissingProgressRecord {
                achievement: achievement.id,
            });
            continue;
        };
        if existing.unlocked {
            continue;
        }

        let mut record = existing.clone();
        if record.progress.len() < achievement.conditions.len() {
            record.progress.resize(achievement.conditions.len(), 0.0);
        }

        // Zero conditions unlock vacuously on the first evaluation.
        let mut all_met = true;
        for (index, condition) in achievement.conditions.iter().enumerate() {
            let value = match condition_value(condition.kind, state) {
                Some(value) => value,
                None => {
                    diagnostics.push(Diagnostic::UnknownConditionKind {
                        achievement: achievement.id,
                        condition_index: index,
                    });
                    0.0
                }
            };

            if condition.trackable {
                // Last observed value, not a high-water mark: tracked
                // progress regresses whenever the underlying metric does.
                record.progress[index] = value;
            }

            let met = match comparison_holds(value, condition.target, condition.comparison) {
                Some(met) => met,
                None => {
                    diagnostics.push(Diagnostic::UnknownComparison {
                        achievement: achievement.id,
                        condition_index: index,
                    });
                    false
                }
            };
            all_met = all_met && met;
        }

        if all_met {
            record.unlocked = true;
            record.unlocked_at = Some(now);
            newly_unlocked.push(achievement.id);
        }
        updated.push(record);
    }

    Evaluation {
        newly_unlocked,
        updated,
    }
}

/// Produces an updated profile with the provided rewards applied in list
/// order. The input profile is never mutated.
///
/// Species, dao, and title unlocks append-if-absent; Qi grants and cosmetic
/// unlocks are not modeled in the profile and only raise diagnostics, as do
/// unrecognized reward kinds. The operation is total over any reward list.
#[must_use]
pub fn grant_rewards(
    rewards: &[AchievementReward],
    profile: &PlayerProfile,
    diagnostics: &mut Vec<Diagnostic>,
) -> PlayerProfile {
    let mut updated = profile.clone();
    for reward in rewards {
        match &reward.effect {
            RewardEffect::UnlockSpecies(id) => {
                let _ = updated.unlock_species(id);
            }
            RewardEffect::UnlockDao(id) => {
                let _ = updated.unlock_dao(id);
            }
            RewardEffect::UnlockTitle(id) => {
                let _ = updated.unlock_title(id);
            }
            RewardEffect::GrantQi(amount) => {
                diagnostics.push(Diagnostic::QiGrantUnmodeled { amount: *amount });
            }
            RewardEffect::UnlockCosmetic(id) => {
                diagnostics.push(Diagnostic::CosmeticUnlockUnmodeled { id: id.clone() });
            }
            RewardEffect::Unknown => diagnostics.push(Diagnostic::UnknownRewardKind),
        }
    }
    updated
}

fn condition_value(kind: ConditionKind, state: &GameState) -> Option<f64> {
    match kind {
        ConditionKind::WaveComplete => Some(f64::from(state.current_wave)),
        ConditionKind::EnemyDefeatCount => Some(f64::from(state.total_enemies_defeated)),
        ConditionKind::ScoreThreshold => Some(state.score as f64),
        ConditionKind::CastleHealthPreserved => {
            if state.max_castle_health == 0 {
                Some(0.0)
            } else {
                Some(f64::from(state.castle_health) / f64::from(state.max_castle_health))
            }
        }
        ConditionKind::CultivatorDeployCount => Some(f64::from(state.cultivators_deployed)),
        ConditionKind::WinWithoutDamage => Some(if state.damage_taken == 0 { 1.0 } else { 0.0 }),
        ConditionKind::Unknown => None,
    }
}

fn comparison_holds(current: f64, target: f64, comparison: ComparisonOp) -> Option<bool> {
    match comparison {
        ComparisonOp::Equals => Some(current == target),
        ComparisonOp::GreaterThan => Some(current > target),
        ComparisonOp::LessThan => Some(current < target),
        ComparisonOp::GreaterOrEqual => Some(current >= target),
        ComparisonOp::Unknown => None,
    }
}
