use crate::match_stats::{Participant, StatsError, StatsResult};
use strum_macros::{Display, EnumIter};

/// Identifier of a numeric performance attribute tracked by the engine.
/// Displays as the Riot attribute name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Field {
    #[strum(serialize = "champLevel")]
    ChampLevel,
    #[strum(serialize = "visionScore")]
    VisionScore,
    #[strum(serialize = "wardsPlaced")]
    WardsPlaced,
    #[strum(serialize = "longestTimeSpentLiving")]
    LongestTimeSpentLiving,
    #[strum(serialize = "totalDamageDealtToChampions")]
    TotalDamageDealtToChampions,
    #[strum(serialize = "goldEarned")]
    GoldEarned,
    #[strum(serialize = "totalMinionsKilled")]
    TotalMinionsKilled,
    #[strum(serialize = "damagePerMinute")]
    DamagePerMinute,
    #[strum(serialize = "goldPerMinute")]
    GoldPerMinute,
    #[strum(serialize = "kda")]
    Kda,
    #[strum(serialize = "laneMinionsFirst10Minutes")]
    LaneMinionsFirst10Minutes,
    #[strum(serialize = "soloKills")]
    SoloKills,
    #[strum(serialize = "teamDamagePercentage")]
    TeamDamagePercentage,
}

type Accessor = fn(&Participant) -> Option<f64>;

/// Extraction rule for one cataloged attribute. Integer and fractional
/// attributes both read as f64; `fractional` only matters when formatting.
pub struct FieldSpec {
    pub field: Field,
    /// Value lives in the participant's challenges sub-record.
    pub nested: bool,
    pub fractional: bool,
    accessor: Accessor,
}

impl FieldSpec {
    fn base(field: Field, fractional: bool, accessor: Accessor) -> FieldSpec {
        FieldSpec {
            field,
            nested: false,
            fractional,
            accessor,
        }
    }

    fn challenge(field: Field, fractional: bool, accessor: Accessor) -> FieldSpec {
        FieldSpec {
            field,
            nested: true,
            fractional,
            accessor,
        }
    }

    pub fn value_of(&self, participant: &Participant) -> StatsResult<f64> {
        (self.accessor)(participant)
            .ok_or_else(|| StatsError::SchemaMismatch(self.field.to_string()))
    }
}

lazy_static! {
    /// Process-wide field catalog, built once. Its order is fixed and drives
    /// the order of every aggregate and report downstream.
    ///
    /// The selector treats a below-average value as underperformance, so the
    /// catalog must only contain fields where higher is better. Fields like
    /// totalTimeSpentDead need an inverted policy before they can be added.
    pub static ref CATALOG: Vec<FieldSpec> = vec![
        FieldSpec::base(Field::ChampLevel, false, |p| {
            p.champ_level.map(|v| v as f64)
        }),
        FieldSpec::base(Field::VisionScore, false, |p| {
            p.vision_score.map(|v| v as f64)
        }),
        FieldSpec::base(Field::WardsPlaced, false, |p| {
            p.wards_placed.map(|v| v as f64)
        }),
        FieldSpec::base(Field::LongestTimeSpentLiving, false, |p| {
            p.longest_time_spent_living.map(|v| v as f64)
        }),
        FieldSpec::base(Field::TotalDamageDealtToChampions, false, |p| {
            p.total_damage_dealt_to_champions.map(|v| v as f64)
        }),
        FieldSpec::base(Field::GoldEarned, false, |p| {
            p.gold_earned.map(|v| v as f64)
        }),
        FieldSpec::base(Field::TotalMinionsKilled, false, |p| {
            p.total_minions_killed.map(|v| v as f64)
        }),
        FieldSpec::challenge(Field::DamagePerMinute, true, |p| {
            p.challenges.damage_per_minute
        }),
        FieldSpec::challenge(Field::GoldPerMinute, true, |p| {
            p.challenges.gold_per_minute
        }),
        FieldSpec::challenge(Field::Kda, true, |p| p.challenges.kda),
        FieldSpec::challenge(Field::LaneMinionsFirst10Minutes, false, |p| {
            p.challenges.lane_minions_first_10_minutes.map(|v| v as f64)
        }),
        FieldSpec::challenge(Field::SoloKills, false, |p| {
            p.challenges.solo_kills.map(|v| v as f64)
        }),
        FieldSpec::challenge(Field::TeamDamagePercentage, true, |p| {
            p.challenges.team_damage_percentage
        }),
    ];
}

pub fn spec_of(field: Field) -> &'static FieldSpec {
    CATALOG
        .iter()
        .find(|spec| spec.field == field)
        .expect("every Field variant has a catalog entry")
}
