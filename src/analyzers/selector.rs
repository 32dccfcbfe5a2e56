use crate::analyzers::performance::{FieldResult, MatchAggregate};
use crate::CONFIG;

/// Picks the stats worth reporting for one match.
///
/// Tier 1 takes every field where the player is a team or game minimum. Only
/// when that yields fewer than the configured threshold, tier 2 appends the
/// fields where the player sits below a partition average. Both tiers keep
/// catalog order, so the output is deterministic for identical inputs.
pub fn select_reportable(aggregate: &MatchAggregate) -> Vec<&FieldResult> {
    let threshold = CONFIG
        .get_int("report_fallback_threshold")
        .expect("Field report_fallback_threshold not set in config.")
        as usize;
    select_with_threshold(aggregate, threshold)
}

pub fn select_with_threshold(
    aggregate: &MatchAggregate,
    fallback_threshold: usize,
) -> Vec<&FieldResult> {
    let mut picked: Vec<&FieldResult> = aggregate
        .results()
        .iter()
        .filter(|r| r.is_team_min || r.is_game_min)
        .collect();
    if picked.len() >= fallback_threshold {
        return picked;
    }
    // NaN ratios compare false here, keeping undefined ratios out of the report.
    picked.extend(
        aggregate
            .results()
            .iter()
            .filter(|r| !(r.is_team_min || r.is_game_min))
            .filter(|r| r.team_ratio < 1.0 || r.game_ratio < 1.0),
    );
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::fields::Field;
    use crate::analyzers::performance::IndividualStats;

    fn result(
        field: Field,
        is_team_min: bool,
        is_game_min: bool,
        team_ratio: f64,
        game_ratio: f64,
    ) -> FieldResult {
        let stats = IndividualStats {
            max: 0.0,
            min: 0.0,
            avg: 0.0,
        };
        FieldResult {
            field,
            nested: false,
            fractional: false,
            player_value: 0.0,
            team_stats: stats,
            game_stats: stats,
            is_team_min,
            is_game_min,
            team_ratio,
            game_ratio,
        }
    }

    fn fields_of(selected: &[&FieldResult]) -> Vec<Field> {
        selected.iter().map(|r| r.field).collect()
    }

    #[test]
    fn minimums_come_first_in_catalog_order() {
        let aggregate = MatchAggregate::new(vec![
            result(Field::ChampLevel, false, false, 1.2, 1.1),
            result(Field::VisionScore, true, false, 0.7, 0.9),
            result(Field::GoldEarned, false, true, 0.8, 0.6),
            result(Field::Kda, false, false, 0.5, 0.9),
        ]);
        let selected = select_with_threshold(&aggregate, 2);
        assert_eq!(fields_of(&selected), vec![Field::VisionScore, Field::GoldEarned]);
    }

    #[test]
    fn fallback_appends_below_average_fields_without_duplicates() {
        let aggregate = MatchAggregate::new(vec![
            result(Field::ChampLevel, false, false, 0.8, 1.1),
            result(Field::VisionScore, true, false, 0.7, 0.9),
            result(Field::GoldEarned, false, false, 1.3, 1.2),
            result(Field::Kda, false, false, 1.1, 0.9),
        ]);
        let selected = select_with_threshold(&aggregate, 4);
        // tier 1 entry stays first, tier 2 follows in catalog order, disjoint
        assert_eq!(
            fields_of(&selected),
            vec![Field::VisionScore, Field::ChampLevel, Field::Kda]
        );
    }

    #[test]
    fn enough_minimums_suppress_the_fallback() {
        let aggregate = MatchAggregate::new(vec![
            result(Field::ChampLevel, true, false, 0.8, 1.1),
            result(Field::VisionScore, true, false, 0.7, 0.9),
            result(Field::GoldEarned, false, true, 0.9, 0.8),
            result(Field::Kda, true, true, 0.5, 0.6),
            result(Field::SoloKills, false, false, 0.4, 0.4),
        ]);
        let selected = select_with_threshold(&aggregate, 4);
        assert_eq!(
            fields_of(&selected),
            vec![Field::ChampLevel, Field::VisionScore, Field::GoldEarned, Field::Kda]
        );
    }

    #[test]
    fn nan_ratio_never_reaches_the_fallback() {
        let aggregate = MatchAggregate::new(vec![
            result(Field::ChampLevel, true, false, 0.8, 1.1),
            result(Field::SoloKills, false, false, f64::NAN, f64::NAN),
        ]);
        let selected = select_with_threshold(&aggregate, 4);
        assert_eq!(fields_of(&selected), vec![Field::ChampLevel]);
    }

    #[test]
    fn no_notable_stats_selects_nothing() {
        let aggregate = MatchAggregate::new(vec![
            result(Field::ChampLevel, false, false, 1.2, 1.1),
            result(Field::VisionScore, false, false, 1.05, 1.3),
        ]);
        assert!(select_with_threshold(&aggregate, 4).is_empty());
    }
}
