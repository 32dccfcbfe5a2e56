use crate::data_retrieval::riot_client::{LeagueEntry, RiotClient};
use crate::match_stats::Match;
use crate::types::{MatchId, Puuid, SummonerId};
use crate::BoxError;

const RANKED_SOLO_QUEUE_TYPE: &str = "RANKED_SOLO_5x5";

/// Resolved identity of the tracked player.
#[derive(Debug, Clone)]
pub struct PlayerIds {
    pub game_name: String,
    pub tag_line: String,
    pub puuid: Puuid,
    pub summoner_id: SummonerId,
    pub account_id: String,
}

pub struct DataRetriever {
    client: RiotClient,
}

impl DataRetriever {
    pub fn from_config() -> Result<DataRetriever, BoxError> {
        Ok(DataRetriever {
            client: RiotClient::from_config()?,
        })
    }

    /// One-time identity resolution: display name + tag line to the id triple.
    pub async fn resolve_player(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> Result<PlayerIds, BoxError> {
        if game_name.is_empty() || tag_line.is_empty() {
            return Err("couldn't resolve player ids without a game name and a tag line".into());
        }
        let account = self.client.fetch_account(game_name, tag_line).await?;
        let summoner = self.client.fetch_summoner(&account.puuid).await?;
        Ok(PlayerIds {
            game_name: account.game_name,
            tag_line: account.tag_line,
            puuid: account.puuid,
            summoner_id: summoner.id,
            account_id: summoner.account_id,
        })
    }

    /// The player's season entry in the solo queue.
    pub async fn get_ranked_solo_stats(&self, player: &PlayerIds) -> Result<LeagueEntry, BoxError> {
        let entries = self.client.fetch_league_entries(&player.summoner_id).await?;
        match entries
            .into_iter()
            .find(|entry| entry.queue_type == RANKED_SOLO_QUEUE_TYPE)
        {
            Some(entry) => Ok(entry),
            None => Err("player doesn't have any ranked games".into()),
        }
    }

    /// Ids of the latest ranked matches, newest first.
    pub async fn get_latest_match_ids(&self, player: &PlayerIds) -> Result<Vec<MatchId>, BoxError> {
        self.client.fetch_match_ids(&player.puuid).await
    }

    pub async fn get_match(&self, match_id: &MatchId) -> Result<Match, BoxError> {
        self.client.fetch_match(match_id).await
    }
}
