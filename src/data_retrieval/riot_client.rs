use crate::match_stats::Match;
use crate::types::{MatchId, Puuid, SummonerId};
use crate::BoxError;
use crate::CONFIG;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::time::{delay_until, Duration, Instant};

/// Solo/duo ranked queue.
const RANKED_QUEUE_ID: u32 = 420;

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AccountJson {
    pub puuid: Puuid,
    pub game_name: String,
    pub tag_line: String,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SummonerJson {
    pub id: SummonerId,
    pub account_id: String,
    pub puuid: Puuid,
    #[serde(default)]
    pub profile_icon_id: i64,
    #[serde(default)]
    pub revision_date: i64,
    #[serde(default)]
    pub summoner_level: i64,
}

/// One season entry of a player in a ranked queue.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntry {
    pub league_id: String,
    pub queue_type: String,
    pub tier: String,
    pub rank: String,
    pub summoner_id: SummonerId,
    pub league_points: u32,
    pub wins: u32,
    pub losses: u32,
    #[serde(default)]
    pub veteran: bool,
    #[serde(default)]
    pub inactive: bool,
    #[serde(default)]
    pub fresh_blood: bool,
    #[serde(default)]
    pub hot_streak: bool,
}

/// Struct which handles all communication with the Riot API.
pub struct RiotClient {
    api_token: String,
    /// Continent routing host part (account/match-v5 endpoints), e.g. "europe".
    routing: String,
    /// Platform host part (summoner/league endpoints), e.g. "euw1".
    platform: String,
    match_history_count: i64,
}

impl RiotClient {
    pub fn from_config() -> Result<RiotClient, BoxError> {
        Ok(RiotClient {
            api_token: std::env::var("API_TOKEN")?,
            routing: CONFIG.get_str("riot_routing_region")?,
            platform: CONFIG.get_str("riot_platform")?,
            match_history_count: CONFIG.get_int("match_history_count")?,
        })
    }

    /// Sends get requests with the token header. Waits 1 second to ensure rpm <= 60.
    async fn get_req_at60rpm<T: DeserializeOwned>(&self, url: &str) -> Result<T, BoxError> {
        let start_inst = Instant::now();
        let response = reqwest::Client::new()
            .get(url)
            .header("X-Riot-Token", self.api_token.as_str())
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(format!("unexpected status code {} at url: {}", response.status(), url).into());
        }
        let body = response.text().await?;
        delay_until(start_inst + Duration::from_secs(1)).await;
        match serde_json::from_str(&body) {
            Ok(parsed) => Ok(parsed),
            Err(e) => {
                warn!("Unable to parse response at url: {}", url);
                Err(Box::new(e))
            }
        }
    }

    /// Resolves a display name + tag line to the account record.
    pub async fn fetch_account(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> Result<AccountJson, BoxError> {
        info!("Fetching account of {}#{}", game_name, tag_line);
        let url = format!(
            "https://{}.api.riotgames.com/riot/account/v1/accounts/by-riot-id/{}/{}",
            self.routing, game_name, tag_line
        );
        self.get_req_at60rpm(&url).await
    }

    pub async fn fetch_summoner(&self, puuid: &Puuid) -> Result<SummonerJson, BoxError> {
        info!("Fetching summoner of puuid: {}", puuid);
        let url = format!(
            "https://{}.api.riotgames.com/lol/summoner/v4/summoners/by-puuid/{}",
            self.platform, puuid
        );
        self.get_req_at60rpm(&url).await
    }

    /// All league entries of a summoner, one per ranked queue.
    pub async fn fetch_league_entries(
        &self,
        summoner_id: &SummonerId,
    ) -> Result<Vec<LeagueEntry>, BoxError> {
        info!("Fetching league entries of summoner: {}", summoner_id);
        let url = format!(
            "https://{}.api.riotgames.com/lol/league/v4/entries/by-summoner/{}",
            self.platform, summoner_id
        );
        self.get_req_at60rpm(&url).await
    }

    /// Latest ranked match ids of a player, newest first.
    pub async fn fetch_match_ids(&self, puuid: &Puuid) -> Result<Vec<MatchId>, BoxError> {
        info!("Fetching match ids of player: {}", puuid);
        let url = format!(
            "https://{}.api.riotgames.com/lol/match/v5/matches/by-puuid/{}/ids?queue={}&start=0&count={}",
            self.routing, puuid, RANKED_QUEUE_ID, self.match_history_count
        );
        self.get_req_at60rpm(&url).await
    }

    /// Full match payload of the match-v5 endpoint.
    pub async fn fetch_match(&self, match_id: &MatchId) -> Result<Match, BoxError> {
        info!("Fetching match info: {}", match_id);
        let url = format!(
            "https://{}.api.riotgames.com/lol/match/v5/matches/{}",
            self.routing, match_id
        );
        self.get_req_at60rpm(&url).await
    }
}
