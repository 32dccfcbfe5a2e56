use crate::analyzers::performance::{FieldResult, MatchAggregate};
use crate::data_retrieval::data_retriever::PlayerIds;
use crate::data_retrieval::riot_client::LeagueEntry;
use crate::types::MatchId;
use itertools::Itertools;

/// Integer fields print without a fractional part, fractional ones keep two.
fn format_value(value: f64, fractional: bool) -> String {
    if fractional {
        format!("{:.2}", value)
    } else {
        format!("{}", value as i64)
    }
}

pub fn season_summary(player: &PlayerIds, entry: &LeagueEntry) -> String {
    let total_games = entry.wins + entry.losses;
    let ratio = if total_games == 0 {
        0.0
    } else {
        f64::from(entry.wins) / f64::from(total_games) * 100.0
    };
    let mut summary = format!("Season stats of {}#{}:\n", player.game_name, player.tag_line);
    summary += &format!("Rank: {} {} ({} LP)\n", entry.tier, entry.rank, entry.league_points);
    summary += &format!("Games: {}\n", total_games);
    summary += &format!("Wins: {}\n", entry.wins);
    summary += &format!("Losses: {}\n", entry.losses);
    summary += &format!("Win ratio: {:.1}%\n", ratio);
    summary
}

fn report_line(result: &FieldResult) -> String {
    let mut line = format!(
        "{}: {}",
        result.field,
        format_value(result.player_value, result.fractional)
    );
    if result.is_game_min {
        line += " (lowest in the game)";
    } else if result.is_team_min {
        line += " (lowest in the team)";
    }
    line += &format!(
        " [team avg {:.1}, game avg {:.1}]",
        result.team_stats.avg, result.game_stats.avg
    );
    line
}

/// User-facing summary of the selector output for one match.
pub fn match_report(match_id: &MatchId, selected: &[&FieldResult]) -> String {
    if selected.is_empty() {
        return format!("Game {}: nothing notable, clean game.", match_id);
    }
    let mut report = format!("Game {}:\n", match_id);
    for result in selected {
        report += &report_line(result);
        report.push('\n');
    }
    report
}

/// Full per-field dump for diagnostics, in catalog order.
pub fn aggregate_dump(aggregate: &MatchAggregate) -> String {
    aggregate
        .results()
        .iter()
        .map(|result| {
            let name = if result.nested {
                format!("challenges.{}", result.field)
            } else {
                result.field.to_string()
            };
            format!(
                "{} = {} (team min {} max {} avg {:.2}, game min {} max {} avg {:.2}, \
                 team ratio {:.3}, game ratio {:.3})",
                name,
                format_value(result.player_value, result.fractional),
                result.team_stats.min,
                result.team_stats.max,
                result.team_stats.avg,
                result.game_stats.min,
                result.game_stats.max,
                result.game_stats.avg,
                result.team_ratio,
                result.game_ratio
            )
        })
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::fields::Field;
    use crate::analyzers::performance::IndividualStats;

    fn mock_result(field: Field, fractional: bool, player_value: f64) -> FieldResult {
        FieldResult {
            field,
            nested: false,
            fractional,
            player_value,
            team_stats: IndividualStats {
                max: 18.0,
                min: 10.0,
                avg: 14.0,
            },
            game_stats: IndividualStats {
                max: 18.0,
                min: 10.0,
                avg: 13.5,
            },
            is_team_min: true,
            is_game_min: false,
            team_ratio: player_value / 14.0,
            game_ratio: player_value / 13.5,
        }
    }

    #[test]
    fn integer_fields_print_without_decimals() {
        assert_eq!(format_value(10.0, false), "10");
        assert_eq!(format_value(2.5, true), "2.50");
    }

    #[test]
    fn report_line_flags_team_minimum() {
        let line = report_line(&mock_result(Field::ChampLevel, false, 10.0));
        assert_eq!(
            line,
            "champLevel: 10 (lowest in the team) [team avg 14.0, game avg 13.5]"
        );
    }

    #[test]
    fn empty_selection_reports_clean_game() {
        let report = match_report(&"EUW1_123".to_string(), &[]);
        assert!(report.contains("clean game"));
    }

    #[test]
    fn season_summary_with_no_games_avoids_nan_ratio() {
        let player = PlayerIds {
            game_name: "lucxsstbn".to_string(),
            tag_line: "EUW".to_string(),
            puuid: "p".to_string(),
            summoner_id: "s".to_string(),
            account_id: "a".to_string(),
        };
        let entry = LeagueEntry {
            league_id: "l".to_string(),
            queue_type: "RANKED_SOLO_5x5".to_string(),
            tier: "IRON".to_string(),
            rank: "IV".to_string(),
            summoner_id: "s".to_string(),
            league_points: 0,
            wins: 0,
            losses: 0,
            veteran: false,
            inactive: false,
            fresh_blood: false,
            hot_streak: false,
        };
        let summary = season_summary(&player, &entry);
        assert!(summary.contains("Games: 0"));
        assert!(summary.contains("Win ratio: 0.0%"));
        assert!(!summary.contains("NaN"));
    }

    #[test]
    fn season_summary_contains_ratio() {
        let player = PlayerIds {
            game_name: "lucxsstbn".to_string(),
            tag_line: "EUW".to_string(),
            puuid: "p".to_string(),
            summoner_id: "s".to_string(),
            account_id: "a".to_string(),
        };
        let entry = LeagueEntry {
            league_id: "l".to_string(),
            queue_type: "RANKED_SOLO_5x5".to_string(),
            tier: "GOLD".to_string(),
            rank: "II".to_string(),
            summoner_id: "s".to_string(),
            league_points: 37,
            wins: 30,
            losses: 20,
            veteran: false,
            inactive: false,
            fresh_blood: false,
            hot_streak: false,
        };
        let summary = season_summary(&player, &entry);
        assert!(summary.contains("GOLD II"));
        assert!(summary.contains("Games: 50"));
        assert!(summary.contains("Win ratio: 60.0%"));
    }
}
