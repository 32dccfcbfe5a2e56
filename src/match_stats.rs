use crate::types::Puuid;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;

pub const TEAM_SIZE: usize = 5;
pub const GAME_SIZE: usize = 10;

/// The two sides of a match, encoded by the Riot API as 100/200.
#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum TeamSide {
    Blue = 100,
    Red = 200,
}

/// Derived metrics nested under every participant record.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Challenges {
    #[serde(default)]
    pub damage_per_minute: Option<f64>,
    #[serde(default)]
    pub game_length: Option<f64>,
    #[serde(default)]
    pub gold_per_minute: Option<f64>,
    #[serde(default)]
    pub kda: Option<f64>,
    #[serde(default)]
    pub lane_minions_first_10_minutes: Option<u64>,
    #[serde(default)]
    pub solo_kills: Option<u64>,
    #[serde(default)]
    pub team_damage_percentage: Option<f64>,
}

/// One of the 10 players of a match. Numeric attributes are optional since
/// old match data versions miss some of them; a missing cataloged attribute
/// surfaces as `StatsError::SchemaMismatch` at extraction time.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    #[serde(default)]
    pub puuid: Puuid,
    #[serde(default)]
    pub summoner_name: String,
    #[serde(default)]
    pub riot_id_game_name: String,
    #[serde(default)]
    pub riot_id_tagline: String,
    #[serde(default)]
    pub champion_name: String,
    #[serde(default)]
    pub champion_id: Option<u64>,
    #[serde(default)]
    pub lane: String,
    #[serde(default)]
    pub individual_position: String,
    pub team_id: TeamSide,
    #[serde(default)]
    pub participant_id: Option<u64>,
    #[serde(default)]
    pub win: Option<bool>,
    #[serde(default)]
    pub challenges: Challenges,
    // performance attributes
    #[serde(default)]
    pub champ_level: Option<u64>,
    #[serde(default)]
    pub gold_earned: Option<u64>,
    #[serde(default)]
    pub gold_spent: Option<u64>,
    #[serde(default)]
    pub items_purchased: Option<u64>,
    #[serde(default)]
    pub total_minions_killed: Option<u64>,
    // fighting stats
    #[serde(default)]
    pub total_damage_dealt_to_champions: Option<u64>,
    #[serde(default)]
    pub double_kills: Option<u64>,
    #[serde(default)]
    pub killing_sprees: Option<u64>,
    #[serde(default)]
    pub longest_time_spent_living: Option<u64>,
    #[serde(default)]
    pub total_time_spent_dead: Option<u64>,
    // vision stats
    #[serde(default)]
    pub vision_score: Option<u64>,
    #[serde(default)]
    pub wards_placed: Option<u64>,
    #[serde(default)]
    pub sight_wards_bought_in_game: Option<u64>,
    #[serde(default)]
    pub vision_wards_bought_in_game: Option<u64>,
    // objective stats
    #[serde(default)]
    pub baron_kills: Option<u64>,
    #[serde(default)]
    pub dragon_kills: Option<u64>,
    #[serde(default)]
    pub turret_kills: Option<u64>,
    #[serde(default)]
    pub objectives_stolen: Option<u64>,
    #[serde(default)]
    pub damage_dealt_to_buildings: Option<u64>,
    #[serde(default)]
    pub damage_dealt_to_objectives: Option<u64>,
    #[serde(default)]
    pub damage_dealt_to_turrets: Option<u64>,
    // summoner spells
    #[serde(default)]
    pub summoner1_id: Option<u64>,
    #[serde(default)]
    pub summoner2_id: Option<u64>,
    #[serde(default)]
    pub summoner1_casts: Option<u64>,
    #[serde(default)]
    pub summoner2_casts: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadata {
    #[serde(default)]
    pub data_version: String,
    #[serde(default)]
    pub match_id: String,
    #[serde(default)]
    pub participants: Vec<Puuid>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    #[serde(default)]
    pub end_of_game_result: String,
    #[serde(default)]
    pub game_type: String,
    #[serde(default)]
    pub game_name: String,
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub game_id: i64,
    #[serde(default)]
    pub queue_id: i64,
    #[serde(default)]
    pub game_creation: i64,
    #[serde(default)]
    pub game_duration: i64,
    #[serde(default)]
    pub game_end_timestamp: i64,
}

/// Full match payload of the match-v5 endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Match {
    pub metadata: MatchMetadata,
    pub info: MatchInfo,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatsError {
    /// The requesting player is absent from the participant list.
    PlayerNotFound(Puuid),
    /// The team partition didn't yield exactly 5 of 10 participants.
    InvalidPopulation { game: usize, team: usize },
    /// A cataloged attribute is missing from a participant record.
    SchemaMismatch(/*field:*/ String),
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StatsError::PlayerNotFound(puuid) => {
                write!(f, "player {} not found among match participants", puuid)
            }
            StatsError::InvalidPopulation { game, team } => write!(
                f,
                "malformed participant list: {} in game, {} in team (expected {}/{})",
                game, team, GAME_SIZE, TEAM_SIZE
            ),
            StatsError::SchemaMismatch(field) => {
                write!(f, "field {} is missing from a participant record", field)
            }
        }
    }
}

impl std::error::Error for StatsError {}

pub type StatsResult<T> = std::result::Result<T, StatsError>;

impl MatchInfo {
    pub fn participant_by_puuid(&self, puuid: &str) -> StatsResult<&Participant> {
        self.participants
            .iter()
            .find(|p| p.puuid == puuid)
            .ok_or_else(|| StatsError::PlayerNotFound(puuid.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participant_decodes_riot_names() {
        let participant: Participant = serde_json::from_str(
            r#"{"puuid": "abc", "teamId": 200, "champLevel": 14, "visionScore": 31,
                "totalDamageDealtToChampions": 18345,
                "challenges": {"laneMinionsFirst10Minutes": 64, "kda": 3.5}}"#,
        )
        .unwrap();
        assert_eq!(participant.team_id, TeamSide::Red);
        assert_eq!(participant.champ_level, Some(14));
        assert_eq!(participant.vision_score, Some(31));
        assert_eq!(participant.total_damage_dealt_to_champions, Some(18345));
        assert_eq!(participant.challenges.lane_minions_first_10_minutes, Some(64));
        assert_eq!(participant.challenges.kda, Some(3.5));
        assert_eq!(participant.gold_earned, None);
    }

    #[test]
    fn participant_lookup_by_puuid() {
        let info: MatchInfo = serde_json::from_str(
            r#"{"participants": [{"puuid": "p1", "teamId": 100},
                                 {"puuid": "p2", "teamId": 200}]}"#,
        )
        .unwrap();
        assert_eq!(info.participant_by_puuid("p2").unwrap().team_id, TeamSide::Red);
        assert_eq!(
            info.participant_by_puuid("p3").unwrap_err(),
            StatsError::PlayerNotFound("p3".to_string())
        );
    }
}
