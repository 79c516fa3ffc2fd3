#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Wave spend-limit calculation and wave-config validation.
//!
//! The spend limit is the Qi budget attackers may be purchased against for a
//! given wave. Wave one always pays out exactly the configured base; later
//! waves scale it by the configured [`GrowthCurve`]. Both entry points are
//! pure functions of their arguments and safe to call concurrently.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use slop_cultivator_core::{GrowthCurve, Qi, WaveNumber, WaveSpendCalculation};
use thiserror::Error;

/// Number of waves rendered in progression previews by default.
pub const DEFAULT_PREVIEW_WAVES: NonZeroU32 = match NonZeroU32::new(20) {
    Some(value) => value,
    None => panic!("preview wave count must be non-zero"),
};

/// Smallest base spend limit accepted by validation.
pub const MIN_BASE_SPEND_LIMIT: u32 = 10;
/// Largest base spend limit accepted by validation.
pub const MAX_BASE_SPEND_LIMIT: u32 = 10_000;
/// Smallest per-wave enemy count accepted by validation.
pub const MIN_ENEMIES_PER_WAVE: u32 = 1;
/// Largest per-wave enemy count accepted by validation.
pub const MAX_ENEMIES_PER_WAVE: u32 = 100;

const EXPONENTIAL_GROWTH_RATE: f64 = 1.2;

/// Computes the Qi spend limit for a single wave.
///
/// Wave one returns `base` unchanged regardless of curve. Unrecognized
/// curves fall back to the linear formula rather than erroring.
#[must_use]
pub fn spend_limit(base: Qi, wave: WaveNumber, curve: GrowthCurve) -> Qi {
    let n = wave.get();
    if n == 1 {
        return base;
    }

    let base_limit = f64::from(base.get());
    let scaled = match curve {
        GrowthCurve::Exponential => base_limit * EXPONENTIAL_GROWTH_RATE.powf(f64::from(n - 1)),
        GrowthCurve::Logarithmic => base_limit * (1.0 + f64::from(n).log2()),
        GrowthCurve::Linear | GrowthCurve::Unknown => base_limit * f64::from(n),
    };

    let rounded = scaled.round();
    let clamped = rounded.max(0.0).min(f64::from(u32::MAX));
    Qi::new(clamped as u32)
}

/// Computes the full spend-limit progression for waves `1..=max_waves`.
///
/// The sequence is eager and ordered by strictly increasing wave number;
/// each entry equals the corresponding single-wave calculation.
#[must_use]
pub fn progression(base: Qi, curve: GrowthCurve, max_waves: NonZeroU32) -> Vec<WaveSpendCalculation> {
    (1..=max_waves.get())
        .map(|n| {
            let wave = WaveNumber::from_u32(n).expect("wave numbers start at one");
            WaveSpendCalculation {
                wave,
                spend_limit: spend_limit(base, wave, curve),
            }
        })
        .collect()
}

/// Wave configuration authored in the content editor and validated before
/// persisting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveConfig {
    /// Qi budget for wave one, scaled by the curve for later waves.
    pub base_spend_limit: Qi,
    /// Growth curve applied to the base spend limit.
    pub curve: GrowthCurve,
    /// Number of enemies scheduled per wave.
    pub enemies_per_wave: u32,
    /// Enemy type IDs the wave may spawn from.
    pub allowed_enemy_ids: Vec<String>,
}

/// Reasons a wave configuration is rejected by validation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The base spend limit falls outside the accepted range.
    #[error("base spend limit must be between 10 and 10000, got {actual}")]
    BaseSpendLimitOutOfRange {
        /// Value found in the configuration.
        actual: u32,
    },
    /// The per-wave enemy count falls outside the accepted range.
    #[error("enemies per wave must be between 1 and 100, got {actual}")]
    EnemiesPerWaveOutOfRange {
        /// Value found in the configuration.
        actual: u32,
    },
    /// The configuration allows no enemy types at all.
    #[error("at least one allowed enemy type is required")]
    NoAllowedEnemies,
    /// The configuration names a growth curve this build does not recognize.
    #[error("growth curve must be linear, exponential, or logarithmic")]
    UnrecognizedCurve,
}

/// Outcome of validating a [`WaveConfig`]. Validation collects every
/// violation instead of stopping at the first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<ConfigError>,
}

impl ValidationReport {
    /// Reports whether the configuration passed every check.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The violations found, in check order.
    #[must_use]
    pub fn errors(&self) -> &[ConfigError] {
        &self.errors
    }
}

/// Validates a wave configuration ahead of persistence. Never panics; the
/// report lists every violation found.
#[must_use]
pub fn validate(config: &WaveConfig) -> ValidationReport {
    let mut errors = Vec::new();

    let base = config.base_spend_limit.get();
    if !(MIN_BASE_SPEND_LIMIT..=MAX_BASE_SPEND_LIMIT).contains(&base) {
        errors.push(ConfigError::BaseSpendLimitOutOfRange { actual: base });
    }

    if !(MIN_ENEMIES_PER_WAVE..=MAX_ENEMIES_PER_WAVE).contains(&config.enemies_per_wave) {
        errors.push(ConfigError::EnemiesPerWaveOutOfRange {
            actual: config.enemies_per_wave,
        });
    }

    if config.allowed_enemy_ids.is_empty() {
        errors.push(ConfigError::NoAllowedEnemies);
    }

    if config.curve == GrowthCurve::Unknown {
        errors.push(ConfigError::UnrecognizedCurve);
    }

    ValidationReport { errors }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wave(n: u32) -> WaveNumber {
        WaveNumber::from_u32(n).expect("non-zero wave")
    }

    #[test]
    fn wave_one_returns_base_for_every_curve() {
        for curve in [
            GrowthCurve::Linear,
            GrowthCurve::Exponential,
            GrowthCurve::Logarithmic,
            GrowthCurve::Unknown,
        ] {
            for base in [10, 100, 777, 10_000] {
                assert_eq!(spend_limit(Qi::new(base), wave(1), curve), Qi::new(base));
            }
        }
    }

    #[test]
    fn linear_scales_with_wave_number() {
        assert_eq!(
            spend_limit(Qi::new(100), wave(5), GrowthCurve::Linear),
            Qi::new(500)
        );
    }

    #[test]
    fn exponential_wave_five_rounds_to_207() {
        assert_eq!(
            spend_limit(Qi::new(100), wave(5), GrowthCurve::Exponential),
            Qi::new(207)
        );
    }

    #[test]
    fn logarithmic_wave_four_is_300() {
        assert_eq!(
            spend_limit(Qi::new(100), wave(4), GrowthCurve::Logarithmic),
            Qi::new(300)
        );
    }

    #[test]
    fn logarithmic_wave_two_doubles_base() {
        assert_eq!(
            spend_limit(Qi::new(100), wave(2), GrowthCurve::Logarithmic),
            Qi::new(200)
        );
    }

    #[test]
    fn unknown_curve_falls_back_to_linear() {
        for n in 1..=10 {
            assert_eq!(
                spend_limit(Qi::new(100), wave(n), GrowthCurve::Unknown),
                spend_limit(Qi::new(100), wave(n), GrowthCurve::Linear)
            );
        }
    }

    #[test]
    fn linear_and_exponential_grow_monotonically() {
        for curve in [GrowthCurve::Linear, GrowthCurve::Exponential] {
            let mut previous = Qi::new(0);
            for n in 1..=30 {
                let current = spend_limit(Qi::new(50), wave(n), curve);
                assert!(
                    current >= previous,
                    "{curve:?} regressed at wave {n}: {current:?} < {previous:?}"
                );
                previous = current;
            }
        }
    }

    #[test]
    fn progression_matches_single_wave_calculations() {
        let entries = progression(Qi::new(100), GrowthCurve::Exponential, DEFAULT_PREVIEW_WAVES);
        assert_eq!(entries.len(), 20);
        for (index, entry) in entries.iter().enumerate() {
            let expected_wave = index as u32 + 1;
            assert_eq!(entry.wave.get(), expected_wave);
            assert_eq!(
                entry.spend_limit,
                spend_limit(Qi::new(100), wave(expected_wave), GrowthCurve::Exponential)
            );
        }
    }

    fn valid_config() -> WaveConfig {
        WaveConfig {
            base_spend_limit: Qi::new(100),
            curve: GrowthCurve::Exponential,
            enemies_per_wave: 12,
            allowed_enemy_ids: vec!["demon_rat".to_owned(), "demon_ox".to_owned()],
        }
    }

    #[test]
    fn validation_accepts_a_well_formed_config() {
        let report = validate(&valid_config());
        assert!(report.is_valid());
        assert!(report.errors().is_empty());
    }

    #[test]
    fn validation_collects_every_violation() {
        let config = WaveConfig {
            base_spend_limit: Qi::new(5),
            curve: GrowthCurve::Unknown,
            enemies_per_wave: 0,
            allowed_enemy_ids: Vec::new(),
        };
        let report = validate(&config);
        assert!(!report.is_valid());
        assert_eq!(
            report.errors(),
            &[
                ConfigError::BaseSpendLimitOutOfRange { actual: 5 },
                ConfigError::EnemiesPerWaveOutOfRange { actual: 0 },
                ConfigError::NoAllowedEnemies,
                ConfigError::UnrecognizedCurve,
            ]
        );
    }

    #[test]
    fn validation_rejects_limits_above_the_ceiling() {
        let mut config = valid_config();
        config.base_spend_limit = Qi::new(10_001);
        config.enemies_per_wave = 101;
        let report = validate(&config);
        assert_eq!(
            report.errors(),
            &[
                ConfigError::BaseSpendLimitOutOfRange { actual: 10_001 },
                ConfigError::EnemiesPerWaveOutOfRange { actual: 101 },
            ]
        );
    }

    #[test]
    fn config_errors_render_human_readable_messages() {
        let error = ConfigError::BaseSpendLimitOutOfRange { actual: 5 };
        assert_eq!(
            error.to_string(),
            "base spend limit must be between 10 and 10000, got 5"
        );
    }
}
