#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Slop Cultivator engine.
//!
//! This crate defines the data model and message surface that connect the
//! authoritative session world, the pure systems, and the adapters. Adapters
//! submit [`Command`] values describing desired session mutations, the world
//! executes those commands via its `apply` entry point and broadcasts
//! [`Event`] values, and pure systems consume immutable snapshots such as
//! [`GameState`] to produce plain data the caller persists. Warnings raised
//! during evaluation are surfaced as [`Diagnostic`] values pushed into
//! caller-supplied buffers instead of a global logger.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Slop Cultivator.";

/// One-based wave index. Wave one is always the configured base wave.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WaveNumber(NonZeroU32);

impl WaveNumber {
    /// Creates a wave number from a non-zero index.
    #[must_use]
    pub const fn new(value: NonZeroU32) -> Self {
        Self(value)
    }

    /// Creates a wave number from a plain integer, rejecting zero.
    #[must_use]
    pub fn from_u32(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    /// The very first wave of a session.
    #[must_use]
    pub const fn first() -> Self {
        Self(NonZeroU32::MIN)
    }

    /// Retrieves the numeric wave index.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0.get()
    }
}

/// Amount of Qi, the in-game currency waves are budgeted against.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Qi(u32);

impl Qi {
    /// Creates a new Qi amount.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric Qi amount.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Formula family governing how the wave spend limit scales with wave number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GrowthCurve {
    /// Spend limit grows proportionally with the wave number.
    Linear,
    /// Spend limit grows by a fixed ratio per wave.
    Exponential,
    /// Spend limit grows with the base-two logarithm of the wave number.
    Logarithmic,
    /// Curve name not recognized by this build. Calculators fall back to
    /// [`GrowthCurve::Linear`]; validation rejects it.
    Unknown,
}

impl From<String> for GrowthCurve {
    fn from(value: String) -> Self {
        match value.as_str() {
            "linear" => Self::Linear,
            "exponential" => Self::Exponential,
            "logarithmic" => Self::Logarithmic,
            _ => Self::Unknown,
        }
    }
}

impl From<GrowthCurve> for String {
    fn from(value: GrowthCurve) -> Self {
        match value {
            GrowthCurve::Linear => "linear".to_owned(),
            GrowthCurve::Exponential => "exponential".to_owned(),
            GrowthCurve::Logarithmic => "logarithmic".to_owned(),
            GrowthCurve::Unknown => "unknown".to_owned(),
        }
    }
}

/// Derived spend budget for a single wave. Recomputed on demand, never
/// persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WaveSpendCalculation {
    /// Wave the budget applies to.
    pub wave: WaveNumber,
    /// Qi budget attackers may be purchased against for that wave.
    pub spend_limit: Qi,
}

/// Metric an achievement condition is evaluated against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConditionKind {
    /// Number of the most recently completed wave.
    WaveComplete,
    /// Total enemies defeated across the session.
    EnemyDefeatCount,
    /// Current score.
    ScoreThreshold,
    /// Fraction of castle health remaining, in `[0, 1]`.
    CastleHealthPreserved,
    /// Total cultivators deployed across the session.
    CultivatorDeployCount,
    /// One when the castle has taken no damage, zero otherwise.
    WinWithoutDamage,
    /// Kind not recognized by this build; evaluates to zero with a
    /// diagnostic.
    Unknown,
}

impl From<String> for ConditionKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "wave_complete" => Self::WaveComplete,
            "enemy_defeat_count" => Self::EnemyDefeatCount,
            "score_threshold" => Self::ScoreThreshold,
            "castle_health_preserved" => Self::CastleHealthPreserved,
            "cultivator_deploy_count" => Self::CultivatorDeployCount,
            "win_without_damage" => Self::WinWithoutDamage,
            _ => Self::Unknown,
        }
    }
}

impl From<ConditionKind> for String {
    fn from(value: ConditionKind) -> Self {
        match value {
            ConditionKind::WaveComplete => "wave_complete".to_owned(),
            ConditionKind::EnemyDefeatCount => "enemy_defeat_count".to_owned(),
            ConditionKind::ScoreThreshold => "score_threshold".to_owned(),
            ConditionKind::CastleHealthPreserved => "castle_health_preserved".to_owned(),
            ConditionKind::CultivatorDeployCount => "cultivator_deploy_count".to_owned(),
            ConditionKind::WinWithoutDamage => "win_without_damage".to_owned(),
            ConditionKind::Unknown => "unknown".to_owned(),
        }
    }
}

/// Comparison applied between the observed metric and the condition target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComparisonOp {
    /// Observed value equals the target exactly.
    Equals,
    /// Observed value is strictly greater than the target.
    GreaterThan,
    /// Observed value is strictly less than the target.
    LessThan,
    /// Observed value is greater than or equal to the target.
    GreaterOrEqual,
    /// Operator not recognized by this build; the condition is treated as
    /// not met and a diagnostic is raised.
    Unknown,
}

impl From<String> for ComparisonOp {
    fn from(value: String) -> Self {
        match value.as_str() {
            "equals" => Self::Equals,
            "greater_than" => Self::GreaterThan,
            "less_than" => Self::LessThan,
            "greater_or_equal" => Self::GreaterOrEqual,
            _ => Self::Unknown,
        }
    }
}

impl From<ComparisonOp> for String {
    fn from(value: ComparisonOp) -> Self {
        match value {
            ComparisonOp::Equals => "equals".to_owned(),
            ComparisonOp::GreaterThan => "greater_than".to_owned(),
            ComparisonOp::LessThan => "less_than".to_owned(),
            ComparisonOp::GreaterOrEqual => "greater_or_equal".to_owned(),
            ComparisonOp::Unknown => "unknown".to_owned(),
        }
    }
}

/// Single numeric condition within an achievement. All conditions of an
/// achievement must hold simultaneously for it to unlock.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AchievementCondition {
    /// Metric the condition observes.
    pub kind: ConditionKind,
    /// Target the observed value is compared against.
    pub target: f64,
    /// Comparison applied between observed value and target.
    pub comparison: ComparisonOp,
    /// Whether the observed value is recorded as per-condition progress.
    pub trackable: bool,
    /// Optional label shown next to tracked progress in the UI.
    #[serde(default)]
    pub progress_label: Option<String>,
}

/// Effect applied to a player profile when a reward is granted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum RewardEffect {
    /// Unlocks a species for deployment, identified by its string ID.
    UnlockSpecies(String),
    /// Unlocks a dao, identified by its string ID.
    UnlockDao(String),
    /// Unlocks a title, identified by its string ID.
    UnlockTitle(String),
    /// Grants a Qi amount. Qi is not modeled in [`PlayerProfile`] in this
    /// version; granting raises a diagnostic and leaves the profile
    /// untouched.
    GrantQi(u32),
    /// Unlocks a cosmetic, identified by its string ID. Cosmetics are not
    /// modeled; granting raises a diagnostic.
    UnlockCosmetic(String),
    /// Reward kind not recognized by this build; granting raises a
    /// diagnostic and has no effect.
    #[serde(other)]
    Unknown,
}

/// Reward descriptor attached to an achievement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementReward {
    /// Effect applied when the reward is granted.
    pub effect: RewardEffect,
    /// Human-readable name shown in the unlock popup.
    pub display_name: String,
}

/// Unique identifier assigned to an achievement by the content editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AchievementId(u32);

impl AchievementId {
    /// Creates a new achievement identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Achievement definition authored in the content editor. Read-only from the
/// game's perspective and immutable during a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    /// Unique identifier of the achievement.
    pub id: AchievementId,
    /// Stable string key used by external tooling.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Emoji shown alongside the name.
    pub emoji: String,
    /// Description of how to unlock.
    pub description: String,
    /// Conditions that must all hold for the achievement to unlock.
    /// Position within this list is the progress index.
    pub conditions: Vec<AchievementCondition>,
    /// Rewards granted when the achievement unlocks, in list order.
    pub rewards: Vec<AchievementReward>,
    /// Ordering hint for catalogue displays.
    pub sort_order: u32,
    /// Content revision of this definition.
    pub version: u32,
}

/// Read-only catalogue of achievement definitions in deterministic order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AchievementCatalogue {
    achievements: Vec<Achievement>,
}

impl AchievementCatalogue {
    /// Creates a catalogue from the provided definitions, ordered by sort
    /// order and then identifier.
    #[must_use]
    pub fn from_achievements(mut achievements: Vec<Achievement>) -> Self {
        achievements.sort_by_key(|achievement| (achievement.sort_order, achievement.id));
        Self { achievements }
    }

    /// Iterator over the definitions in deterministic order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &Achievement> {
        self.achievements.iter()
    }

    /// Looks up a definition by identifier.
    #[must_use]
    pub fn get(&self, id: AchievementId) -> Option<&Achievement> {
        self.achievements
            .iter()
            .find(|achievement| achievement.id == id)
    }

    /// Number of definitions in the catalogue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.achievements.len()
    }

    /// Reports whether the catalogue contains no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.achievements.is_empty()
    }
}

/// Caller-supplied wall-clock value, milliseconds since the Unix epoch.
/// Passing the clock in keeps evaluation deterministic and replayable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnlockTimestamp(u64);

impl UnlockTimestamp {
    /// Creates a timestamp from milliseconds since the Unix epoch.
    #[must_use]
    pub const fn new(millis: u64) -> Self {
        Self(millis)
    }

    /// Retrieves the millisecond value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

/// Per-player progress record for a single achievement.
///
/// `progress` holds the *last observed* value of each trackable condition,
/// indexed by the condition's position in the achievement's condition list.
/// Values are not high-water marks: they regress whenever the underlying
/// metric does.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AchievementProgress {
    /// Achievement this record tracks.
    pub achievement: AchievementId,
    /// Last observed value per condition position.
    pub progress: Vec<f64>,
    /// Whether the achievement has unlocked. Terminal once true.
    pub unlocked: bool,
    /// When the achievement unlocked, if it has.
    pub unlocked_at: Option<UnlockTimestamp>,
}

impl AchievementProgress {
    /// Creates a zeroed, locked record for the provided achievement.
    #[must_use]
    pub fn locked(achievement: AchievementId, condition_count: usize) -> Self {
        Self {
            achievement,
            progress: vec![0.0; condition_count],
            unlocked: false,
            unlocked_at: None,
        }
    }
}

/// Store of one progress record per achievement the player is eligible for,
/// kept sorted by achievement identifier for deterministic lookup.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerProgress {
    records: Vec<AchievementProgress>,
}

impl PlayerProgress {
    /// Creates a store containing a zeroed, locked record for every
    /// achievement in the catalogue.
    #[must_use]
    pub fn provision(catalogue: &AchievementCatalogue) -> Self {
        let records = catalogue
            .iter()
            .map(|achievement| {
                AchievementProgress::locked(achievement.id, achievement.conditions.len())
            })
            .collect();
        Self::from_records(records)
    }

    /// Creates a store from pre-existing records, sorting them by
    /// achievement identifier.
    #[must_use]
    pub fn from_records(mut records: Vec<AchievementProgress>) -> Self {
        records.sort_by_key(|record| record.achievement);
        Self { records }
    }

    /// Looks up the record for the provided achievement.
    #[must_use]
    pub fn record(&self, id: AchievementId) -> Option<&AchievementProgress> {
        self.records
            .binary_search_by_key(&id, |record| record.achievement)
            .ok()
            .map(|index| &self.records[index])
    }

    /// Replaces or inserts a record, keeping the store sorted.
    pub fn upsert(&mut self, record: AchievementProgress) {
        match self
            .records
            .binary_search_by_key(&record.achievement, |existing| existing.achievement)
        {
            Ok(index) => self.records[index] = record,
            Err(index) => self.records.insert(index, record),
        }
    }

    /// Applies a batch of updated records produced by evaluation.
    pub fn apply(&mut self, updated: Vec<AchievementProgress>) {
        for record in updated {
            self.upsert(record);
        }
    }

    /// Iterator over the stored records in identifier order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &AchievementProgress> {
        self.records.iter()
    }
}

/// Player profile holding the content unlocked through rewards. Species,
/// dao, and title lists are ordered and duplicate-free; inserts append at
/// the end only when the ID is not already present.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Anonymous identifier assigned to guest players.
    pub anonymous_id: String,
    /// Species unlocked for deployment, in unlock order.
    pub unlocked_species: Vec<String>,
    /// Daos unlocked, in unlock order.
    pub unlocked_daos: Vec<String>,
    /// Titles unlocked, in unlock order.
    pub unlocked_titles: Vec<String>,
}

impl PlayerProfile {
    /// Creates an empty profile for the provided anonymous identifier.
    #[must_use]
    pub fn new(anonymous_id: impl Into<String>) -> Self {
        Self {
            anonymous_id: anonymous_id.into(),
            unlocked_species: Vec::new(),
            unlocked_daos: Vec::new(),
            unlocked_titles: Vec::new(),
        }
    }

    /// Appends a species ID if not already unlocked. Returns whether the
    /// profile changed.
    pub fn unlock_species(&mut self, id: &str) -> bool {
        insert_unique(&mut self.unlocked_species, id)
    }

    /// Appends a dao ID if not already unlocked. Returns whether the
    /// profile changed.
    pub fn unlock_dao(&mut self, id: &str) -> bool {
        insert_unique(&mut self.unlocked_daos, id)
    }

    /// Appends a title ID if not already unlocked. Returns whether the
    /// profile changed.
    pub fn unlock_title(&mut self, id: &str) -> bool {
        insert_unique(&mut self.unlocked_titles, id)
    }
}

fn insert_unique(list: &mut Vec<String>, id: &str) -> bool {
    if list.iter().any(|existing| existing == id) {
        return false;
    }
    list.push(id.to_owned());
    true
}

/// Immutable snapshot of session state consumed by achievement evaluation.
/// Produced fresh by the world for each evaluation call; never mutated by
/// systems.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Number of the most recently completed wave, zero before the first.
    pub current_wave: u32,
    /// Current score.
    pub score: u64,
    /// Remaining castle health.
    pub castle_health: u32,
    /// Castle health at session start.
    pub max_castle_health: u32,
    /// Total enemies defeated across the session.
    pub total_enemies_defeated: u32,
    /// Total cultivators deployed across the session.
    pub cultivators_deployed: u32,
    /// Total castle damage absorbed across the session.
    pub damage_taken: u32,
}

/// Structured warning raised by evaluation or reward granting. Callers
/// collect these in a buffer and decide whether to surface or drop them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// A condition carried a kind this build does not recognize; its value
    /// was treated as zero.
    UnknownConditionKind {
        /// Achievement owning the condition.
        achievement: AchievementId,
        /// Position of the condition within the achievement's list.
        condition_index: usize,
    },
    /// A condition carried a comparison operator this build does not
    /// recognize; the condition was treated as not met.
    UnknownComparison {
        /// Achievement owning the condition.
        achievement: AchievementId,
        /// Position of the condition within the achievement's list.
        condition_index: usize,
    },
    /// No progress record existed for the achievement, so it was skipped.
    /// Records are expected to be provisioned ahead of evaluation.
    MissingProgressRecord {
        /// Achievement lacking a record.
        achievement: AchievementId,
    },
    /// A Qi grant was requested but Qi is not modeled in the profile; the
    /// reward had no effect.
    QiGrantUnmodeled {
        /// Amount that would have been granted.
        amount: u32,
    },
    /// A cosmetic unlock was requested but cosmetics are not modeled in the
    /// profile; the reward had no effect.
    CosmeticUnlockUnmodeled {
        /// Cosmetic that would have been unlocked.
        id: String,
    },
    /// A reward carried a kind this build does not recognize; it had no
    /// effect.
    UnknownRewardKind,
}

/// Commands that express all permissible session mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Records that the player deployed a cultivator.
    DeployCultivator,
    /// Records that an enemy was defeated, awarding the provided score.
    RecordEnemyDefeat {
        /// Score awarded for the defeat.
        score_award: u64,
    },
    /// Applies damage to the castle.
    DamageCastle {
        /// Requested damage amount; the world applies at most the
        /// remaining health.
        amount: u32,
    },
    /// Marks the current wave as completed.
    CompleteWave,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms a cultivator deployment.
    CultivatorDeployed {
        /// Total cultivators deployed after the command.
        total: u32,
    },
    /// Confirms an enemy defeat.
    EnemyDefeated {
        /// Total enemies defeated after the command.
        total: u32,
        /// Score after the award was applied.
        score: u64,
    },
    /// Confirms castle damage was applied.
    CastleDamaged {
        /// Damage actually absorbed, clamped to the remaining health.
        applied: u32,
        /// Castle health remaining after the damage.
        remaining: u32,
    },
    /// Announces that castle health reached zero. Emitted exactly once per
    /// session, on the transition.
    CastleDestroyed,
    /// Confirms a wave completion.
    WaveCompleted {
        /// Number of the wave that completed.
        wave: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::{
        Achievement, AchievementCatalogue, AchievementCondition, AchievementId,
        AchievementProgress, AchievementReward, ComparisonOp, ConditionKind, GrowthCurve,
        PlayerProfile, Qi, RewardEffect, UnlockTimestamp,
    };
    use serde::{de::DeserializeOwned, Serialize};

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn achievement_id_round_trips_through_bincode() {
        assert_round_trip(&AchievementId::new(42));
    }

    #[test]
    fn growth_curve_round_trips_through_bincode() {
        assert_round_trip(&GrowthCurve::Logarithmic);
    }

    #[test]
    fn progress_record_round_trips_through_bincode() {
        let mut record = AchievementProgress::locked(AchievementId::new(7), 2);
        record.progress[1] = 0.5;
        record.unlocked = true;
        record.unlocked_at = Some(UnlockTimestamp::new(1_700_000_000_000));
        assert_round_trip(&record);
    }

    #[test]
    fn unrecognized_curve_deserializes_to_unknown() {
        let curve: GrowthCurve = serde_json::from_str("\"quadratic\"").expect("deserialize");
        assert_eq!(curve, GrowthCurve::Unknown);
    }

    #[test]
    fn recognized_curve_names_round_trip_through_json() {
        for curve in [
            GrowthCurve::Linear,
            GrowthCurve::Exponential,
            GrowthCurve::Logarithmic,
        ] {
            let json = serde_json::to_string(&curve).expect("serialize");
            let restored: GrowthCurve = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(restored, curve);
        }
    }

    #[test]
    fn unrecognized_reward_tag_deserializes_to_unknown() {
        let json = r#"{"effect":{"type":"bogus"},"display_name":"Mystery"}"#;
        let reward: AchievementReward = serde_json::from_str(json).expect("deserialize");
        assert_eq!(reward.effect, RewardEffect::Unknown);
    }

    #[test]
    fn achievement_definition_round_trips_through_json() {
        let achievement = Achievement {
            id: AchievementId::new(3),
            key: "first_clear".to_owned(),
            name: "First Clear".to_owned(),
            emoji: "\u{1f3c6}".to_owned(),
            description: "Complete a wave".to_owned(),
            conditions: vec![AchievementCondition {
                kind: ConditionKind::WaveComplete,
                target: 1.0,
                comparison: ComparisonOp::GreaterOrEqual,
                trackable: true,
                progress_label: Some("Waves".to_owned()),
            }],
            rewards: vec![AchievementReward {
                effect: RewardEffect::UnlockSpecies("demon_ox".to_owned()),
                display_name: "Demon Ox".to_owned(),
            }],
            sort_order: 10,
            version: 1,
        };
        let json = serde_json::to_string(&achievement).expect("serialize");
        let restored: Achievement = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, achievement);
    }

    #[test]
    fn catalogue_orders_by_sort_order_then_id() {
        let make = |id: u32, sort_order: u32| Achievement {
            id: AchievementId::new(id),
            key: format!("a{id}"),
            name: String::new(),
            emoji: String::new(),
            description: String::new(),
            conditions: Vec::new(),
            rewards: Vec::new(),
            sort_order,
            version: 1,
        };
        let catalogue =
            AchievementCatalogue::from_achievements(vec![make(5, 20), make(9, 10), make(2, 20)]);
        let ids: Vec<u32> = catalogue.iter().map(|a| a.id.get()).collect();
        assert_eq!(ids, vec![9, 2, 5]);
        assert!(catalogue.get(AchievementId::new(5)).is_some());
        assert!(catalogue.get(AchievementId::new(1)).is_none());
    }

    #[test]
    fn profile_unlocks_are_append_if_absent() {
        let mut profile = PlayerProfile::new("guest-1");
        assert!(profile.unlock_species("fox"));
        assert!(profile.unlock_species("crane"));
        assert!(!profile.unlock_species("fox"));
        assert_eq!(profile.unlocked_species, vec!["fox", "crane"]);
    }

    #[test]
    fn qi_preserves_value() {
        assert_eq!(Qi::new(250).get(), 250);
    }
}
