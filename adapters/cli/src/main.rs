#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter for the Slop Cultivator engine.

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use slop_cultivator_core::{
    Achievement, AchievementCatalogue, AchievementCondition, AchievementId, AchievementReward,
    Command, ComparisonOp, ConditionKind, Event, GrowthCurve, PlayerProfile, PlayerProgress, Qi,
    RewardEffect, UnlockTimestamp, WaveNumber, WELCOME_BANNER,
};
use slop_cultivator_system_achievements::{evaluate, grant_rewards};
use slop_cultivator_system_wave_budget::{progression, spend_limit, validate, WaveConfig};
use slop_cultivator_world::{Config, World};

/// Slop Cultivator content tooling and demo driver.
#[derive(Debug, Parser)]
#[command(name = "slop-cultivator")]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Prints the spend-limit progression for a base budget and curve.
    Progression {
        /// Qi budget for wave one.
        #[arg(long, default_value_t = 100)]
        base: u32,
        /// Growth curve: linear, exponential, or logarithmic.
        #[arg(long, default_value = "linear")]
        curve: String,
        /// Number of waves to preview.
        #[arg(long, default_value = "20")]
        waves: NonZeroU32,
    },
    /// Validates a wave configuration JSON document.
    Validate {
        /// Path to the configuration file.
        path: PathBuf,
    },
    /// Runs a scripted demo session and prints the achievements it unlocks.
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        CliCommand::Progression { base, curve, waves } => run_progression(base, &curve, waves),
        CliCommand::Validate { path } => run_validate(&path),
        CliCommand::Demo => run_demo(),
    }
}

fn parse_curve(name: &str) -> Result<GrowthCurve> {
    let curve = GrowthCurve::from(name.to_owned());
    anyhow::ensure!(
        curve != GrowthCurve::Unknown,
        "unrecognized growth curve: {name}"
    );
    Ok(curve)
}

fn run_progression(base: u32, curve_name: &str, waves: NonZeroU32) -> Result<()> {
    let curve = parse_curve(curve_name)?;
    for entry in progression(Qi::new(base), curve, waves) {
        println!(
            "wave {:>3}  spend limit {:>8}",
            entry.wave.get(),
            entry.spend_limit.get()
        );
    }
    Ok(())
}

fn run_validate(path: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config: WaveConfig = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    let report = validate(&config);
    if report.is_valid() {
        println!("configuration OK");
        return Ok(());
    }
    for error in report.errors() {
        println!("error: {error}");
    }
    anyhow::bail!("configuration invalid");
}

fn demo_catalogue() -> AchievementCatalogue {
    AchievementCatalogue::from_achievements(vec![
        Achievement {
            id: AchievementId::new(1),
            key: "first_blood".to_owned(),
            name: "First Blood".to_owned(),
            emoji: "\u{2694}".to_owned(),
            description: "Defeat your first demon".to_owned(),
            conditions: vec![AchievementCondition {
                kind: ConditionKind::EnemyDefeatCount,
                target: 1.0,
                comparison: ComparisonOp::GreaterOrEqual,
                trackable: true,
                progress_label: Some("Demons".to_owned()),
            }],
            rewards: vec![AchievementReward {
                effect: RewardEffect::UnlockTitle("demon_slayer".to_owned()),
                display_name: "Demon Slayer".to_owned(),
            }],
            sort_order: 10,
            version: 1,
        },
        Achievement {
            id: AchievementId::new(2),
            key: "wave_breaker".to_owned(),
            name: "Wave Breaker".to_owned(),
            emoji: "\u{1f30a}".to_owned(),
            description: "Survive two waves".to_owned(),
            conditions: vec![AchievementCondition {
                kind: ConditionKind::WaveComplete,
                target: 2.0,
                comparison: ComparisonOp::GreaterOrEqual,
                trackable: true,
                progress_label: Some("Waves".to_owned()),
            }],
            rewards: vec![
                AchievementReward {
                    effect: RewardEffect::UnlockSpecies("spirit_crane".to_owned()),
                    display_name: "Spirit Crane".to_owned(),
                },
                AchievementReward {
                    effect: RewardEffect::GrantQi(100),
                    display_name: "Qi Infusion".to_owned(),
                },
            ],
            sort_order: 20,
            version: 1,
        },
        Achievement {
            id: AchievementId::new(3),
            key: "untouchable".to_owned(),
            name: "Untouchable".to_owned(),
            emoji: "\u{1f6e1}".to_owned(),
            description: "Survive three waves without castle damage".to_owned(),
            conditions: vec![
                AchievementCondition {
                    kind: ConditionKind::WaveComplete,
                    target: 3.0,
                    comparison: ComparisonOp::GreaterOrEqual,
                    trackable: true,
                    progress_label: Some("Waves".to_owned()),
                },
                AchievementCondition {
                    kind: ConditionKind::WinWithoutDamage,
                    target: 1.0,
                    comparison: ComparisonOp::Equals,
                    trackable: false,
                    progress_label: None,
                },
            ],
            rewards: vec![AchievementReward {
                effect: RewardEffect::UnlockDao("iron_wall_dao".to_owned()),
                display_name: "Iron Wall Dao".to_owned(),
            }],
            sort_order: 30,
            version: 1,
        },
    ])
}

fn now() -> Result<UnlockTimestamp> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is set before the Unix epoch")?;
    Ok(UnlockTimestamp::new(elapsed.as_millis() as u64))
}

fn run_demo() -> Result<()> {
    println!("{WELCOME_BANNER}");

    let catalogue = demo_catalogue();
    let mut progress = PlayerProgress::provision(&catalogue);
    let mut profile = PlayerProfile::new("guest-demo");
    let mut world = World::new(Config::default());
    let mut diagnostics = Vec::new();

    let wave_scripts: Vec<Vec<Command>> = vec![
        vec![
            Command::DeployCultivator,
            Command::DeployCultivator,
            Command::RecordEnemyDefeat { score_award: 25 },
            Command::RecordEnemyDefeat { score_award: 25 },
            Command::CompleteWave,
        ],
        vec![
            Command::DeployCultivator,
            Command::RecordEnemyDefeat { score_award: 40 },
            Command::DamageCastle { amount: 10 },
            Command::CompleteWave,
        ],
        vec![
            Command::RecordEnemyDefeat { score_award: 60 },
            Command::CompleteWave,
        ],
    ];

    for (index, commands) in wave_scripts.iter().enumerate() {
        let wave = index as u32 + 1;
        let mut events = Vec::new();
        world.apply(commands, &mut events);
        if events.contains(&Event::CastleDestroyed) {
            println!("wave {wave}: the castle has fallen");
        }

        let state = world.game_state();
        let evaluation = evaluate(&catalogue, &progress, &state, now()?, &mut diagnostics);
        for id in &evaluation.newly_unlocked {
            let achievement = catalogue
                .get(*id)
                .context("newly unlocked achievement missing from catalogue")?;
            println!(
                "wave {wave}: unlocked {} {} - {}",
                achievement.emoji, achievement.name, achievement.description
            );
            profile = grant_rewards(&achievement.rewards, &profile, &mut diagnostics);
        }
        progress.apply(evaluation.updated);

        if let Some(next) = WaveNumber::from_u32(wave + 1) {
            let budget = spend_limit(Qi::new(100), next, GrowthCurve::Exponential);
            println!(
                "wave {wave}: score {}, next wave budget {}",
                state.score,
                budget.get()
            );
        }
    }

    println!("species unlocked: {:?}", profile.unlocked_species);
    println!("daos unlocked: {:?}", profile.unlocked_daos);
    println!("titles unlocked: {:?}", profile.unlocked_titles);
    for diagnostic in &diagnostics {
        println!("warning: {diagnostic:?}");
    }
    Ok(())
}
