use crate::analyzers::fields::{Field, FieldSpec, CATALOG};
use crate::match_stats::{
    MatchInfo, Participant, StatsError, StatsResult, TeamSide, GAME_SIZE, TEAM_SIZE,
};
use itertools::{Itertools, MinMaxResult};
use ordered_float::OrderedFloat;

/// max/min/mean over one partition (the 5 teammates or the whole game).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndividualStats {
    pub max: f64,
    pub min: f64,
    pub avg: f64,
}

impl IndividualStats {
    /// `values` is a full partition, checked non-empty by the caller.
    fn over(values: &[f64]) -> IndividualStats {
        let (min, max) = match values.iter().copied().map(OrderedFloat).minmax() {
            MinMaxResult::MinMax(min, max) => (min.0, max.0),
            MinMaxResult::OneElement(v) => (v.0, v.0),
            MinMaxResult::NoElements => unreachable!("partition sizes are checked first"),
        };
        let avg = values.iter().sum::<f64>() / values.len() as f64;
        IndividualStats { max, min, avg }
    }
}

/// One field's computed picture for one match. Ratios are player value over
/// partition average; a zero average makes the ratio `f64::NAN`, which the
/// selector reads as "not below 1.0".
#[derive(Debug, Clone, PartialEq)]
pub struct FieldResult {
    pub field: Field,
    pub nested: bool,
    pub fractional: bool,
    pub player_value: f64,
    pub team_stats: IndividualStats,
    pub game_stats: IndividualStats,
    pub is_team_min: bool,
    pub is_game_min: bool,
    pub team_ratio: f64,
    pub game_ratio: f64,
}

/// Per-field results for one match, in catalog order. Built fresh for every
/// request, never cached or merged across matches.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchAggregate {
    results: Vec<FieldResult>,
}

impl MatchAggregate {
    pub(crate) fn new(results: Vec<FieldResult>) -> MatchAggregate {
        MatchAggregate { results }
    }

    pub fn results(&self) -> &[FieldResult] {
        &self.results
    }

    pub fn get(&self, field: Field) -> Option<&FieldResult> {
        self.results.iter().find(|r| r.field == field)
    }
}

fn ratio(player_value: f64, avg: f64) -> f64 {
    if avg == 0.0 {
        f64::NAN
    } else {
        player_value / avg
    }
}

/// Computes one field's stats over both partitions plus the player's standing.
pub fn aggregate_field(
    participants: &[Participant],
    team: TeamSide,
    spec: &FieldSpec,
    player_value: f64,
) -> StatsResult<FieldResult> {
    let mut team_values = Vec::with_capacity(TEAM_SIZE);
    let mut game_values = Vec::with_capacity(GAME_SIZE);
    for participant in participants {
        let value = spec.value_of(participant)?;
        if participant.team_id == team {
            team_values.push(value);
        }
        game_values.push(value);
    }
    if game_values.len() != GAME_SIZE || team_values.len() != TEAM_SIZE {
        return Err(StatsError::InvalidPopulation {
            game: game_values.len(),
            team: team_values.len(),
        });
    }
    let team_stats = IndividualStats::over(&team_values);
    let game_stats = IndividualStats::over(&game_values);
    Ok(FieldResult {
        field: spec.field,
        nested: spec.nested,
        fractional: spec.fractional,
        player_value,
        team_stats,
        game_stats,
        // exact equality on purpose: integer fields must not get an epsilon
        is_team_min: player_value == team_stats.min,
        is_game_min: player_value == game_stats.min,
        team_ratio: ratio(player_value, team_stats.avg),
        game_ratio: ratio(player_value, game_stats.avg),
    })
}

/// Runs the whole catalog for the given player over one match.
pub fn aggregate_match(info: &MatchInfo, puuid: &str) -> StatsResult<MatchAggregate> {
    let player = info.participant_by_puuid(puuid)?;
    let mut results = Vec::with_capacity(CATALOG.len());
    for spec in CATALOG.iter() {
        let player_value = spec.value_of(player)?;
        results.push(aggregate_field(
            &info.participants,
            player.team_id,
            spec,
            player_value,
        )?);
    }
    Ok(MatchAggregate::new(results))
}
