#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative session state management for Slop Cultivator.
//!
//! The world is the single owner of mutable session state. Adapters and the
//! game loop submit [`Command`] batches, the world applies them in order and
//! broadcasts [`Event`] values, and systems observe the session exclusively
//! through [`GameState`] snapshots.

use slop_cultivator_core::{Command, Event, GameState};

const DEFAULT_CASTLE_HEALTH: u32 = 100;

/// Configuration parameters required to construct a session world.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    max_castle_health: u32,
}

impl Config {
    /// Creates a new configuration using the provided castle health pool.
    #[must_use]
    pub const fn new(max_castle_health: u32) -> Self {
        Self { max_castle_health }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_CASTLE_HEALTH)
    }
}

/// Authoritative state for one game session.
#[derive(Debug)]
pub struct World {
    current_wave: u32,
    score: u64,
    castle_health: u32,
    max_castle_health: u32,
    total_enemies_defeated: u32,
    cultivators_deployed: u32,
    damage_taken: u32,
}

impl World {
    /// Creates a fresh session using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            current_wave: 0,
            score: 0,
            castle_health: config.max_castle_health,
            max_castle_health: config.max_castle_health,
            total_enemies_defeated: 0,
            cultivators_deployed: 0,
            damage_taken: 0,
        }
    }

    /// Applies a batch of commands in order, appending the resulting events.
    pub fn apply(&mut self, commands: &[Command], out_events: &mut Vec<Event>) {
        for command in commands {
            match command {
                Command::DeployCultivator => {
                    self.cultivators_deployed = self.cultivators_deployed.saturating_add(1);
                    out_events.push(Event::CultivatorDeployed {
                        total: self.cultivators_deployed,
                    });
                }
                Command::RecordEnemyDefeat { score_award } => {
                    self.total_enemies_defeated = self.total_enemies_defeated.saturating_add(1);
                    self.score = self.score.saturating_add(*score_award);
                    out_events.push(Event::EnemyDefeated {
                        total: self.total_enemies_defeated,
                        score: self.score,
                    });
                }
                Command::DamageCastle { amount } => {
                    let applied = (*amount).min(self.castle_health);
                    self.castle_health -= applied;
                    self.damage_taken = self.damage_taken.saturating_add(applied);
                    out_events.push(Event::CastleDamaged {
                        applied,
                        remaining: self.castle_health,
                    });
                    if applied > 0 && self.castle_health == 0 {
                        out_events.push(Event::CastleDestroyed);
                    }
                }
                Command::CompleteWave => {
                    self.current_wave = self.current_wave.saturating_add(1);
                    out_events.push(Event::WaveCompleted {
                        wave: self.current_wave,
                    });
                }
            }
        }
    }

    /// Captures an immutable snapshot of the session for systems to consume.
    #[must_use]
    pub fn game_state(&self) -> GameState {
        GameState {
            current_wave: self.current_wave,
            score: self.score,
            castle_health: self.castle_health,
            max_castle_health: self.max_castle_health,
            total_enemies_defeated: self.total_enemies_defeated,
            cultivators_deployed: self.cultivators_deployed,
            damage_taken: self.damage_taken,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_one(world: &mut World, command: Command) -> Vec<Event> {
        let mut events = Vec::new();
        world.apply(&[command], &mut events);
        events
    }

    #[test]
    fn fresh_session_snapshot_matches_configuration() {
        let world = World::new(Config::new(250));
        let state = world.game_state();
        assert_eq!(state.current_wave, 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.castle_health, 250);
        assert_eq!(state.max_castle_health, 250);
        assert_eq!(state.damage_taken, 0);
    }

    #[test]
    fn deployments_and_defeats_accumulate() {
        let mut world = World::new(Config::default());
        let mut events = Vec::new();
        world.apply(
            &[
                Command::DeployCultivator,
                Command::DeployCultivator,
                Command::RecordEnemyDefeat { score_award: 40 },
                Command::RecordEnemyDefeat { score_award: 60 },
            ],
            &mut events,
        );
        let state = world.game_state();
        assert_eq!(state.cultivators_deployed, 2);
        assert_eq!(state.total_enemies_defeated, 2);
        assert_eq!(state.score, 100);
        assert_eq!(
            events.last(),
            Some(&Event::EnemyDefeated {
                total: 2,
                score: 100
            })
        );
    }

    #[test]
    fn castle_damage_clamps_to_remaining_health() {
        let mut world = World::new(Config::new(50));
        let events = apply_one(&mut world, Command::DamageCastle { amount: 80 });
        assert_eq!(
            events,
            vec![
                Event::CastleDamaged {
                    applied: 50,
                    remaining: 0
                },
                Event::CastleDestroyed,
            ]
        );
        let state = world.game_state();
        assert_eq!(state.castle_health, 0);
        assert_eq!(state.damage_taken, 50);
    }

    #[test]
    fn castle_destroyed_emitted_only_on_transition() {
        let mut world = World::new(Config::new(30));
        let first = apply_one(&mut world, Command::DamageCastle { amount: 30 });
        assert!(first.contains(&Event::CastleDestroyed));
        let second = apply_one(&mut world, Command::DamageCastle { amount: 10 });
        assert_eq!(
            second,
            vec![Event::CastleDamaged {
                applied: 0,
                remaining: 0
            }]
        );
    }

    #[test]
    fn wave_completion_advances_current_wave() {
        let mut world = World::new(Config::default());
        let _ = apply_one(&mut world, Command::CompleteWave);
        let events = apply_one(&mut world, Command::CompleteWave);
        assert_eq!(events, vec![Event::WaveCompleted { wave: 2 }]);
        assert_eq!(world.game_state().current_wave, 2);
    }
}
