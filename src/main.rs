#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

mod analyzers;
mod bot;
mod data_retrieval;
mod match_stats;
mod types;

use crate::analyzers::{performance, selector};
use crate::bot::discord_client::DiscordClient;
use crate::bot::reporter;
use crate::data_retrieval::data_retriever::{DataRetriever, PlayerIds};
use crate::types::MatchId;
use chrono::{TimeZone, Utc};
use clap::Clap;
use simplelog::{LevelFilter, TermLogger, TerminalMode};
use tokio::time::{delay_for, Duration};

pub type BoxError = Box<dyn std::error::Error>;

lazy_static! {
    pub static ref CONFIG: config::Config = {
        let mut config = config::Config::new();
        config
            .merge(config::File::with_name("config"))
            .expect("Unable to read config file.");
        config
    };
}

macro_rules! skip_fail {
    ($res:expr) => {
        match $res {
            Ok(val) => val,
            Err(e) => {
                warn!("Skipping poll round: {}", e);
                continue;
            }
        }
    };
}

/// Tracks one player's ranked games and reports notable per-match stats.
#[derive(Clap)]
#[clap(name = "riftstats", version = "0.1.0", author = "Nvim")]
struct Opts {
    /// Riot display name of the tracked player.
    game_name: String,
    /// Riot tag line, e.g. EUW.
    tag_line: String,
    /// Keep polling for new matches and post reports to Discord.
    #[clap(long)]
    watch: bool,
}

async fn build_match_report(
    retriever: &DataRetriever,
    player: &PlayerIds,
    match_id: &MatchId,
) -> Result<String, BoxError> {
    let match_ = retriever.get_match(match_id).await?;
    let aggregate = performance::aggregate_match(&match_.info, &player.puuid)?;
    debug!("Full aggregate:\n{}", reporter::aggregate_dump(&aggregate));
    let selected = selector::select_reportable(&aggregate);
    Ok(reporter::match_report(match_id, &selected))
}

/// One-shot mode: season summary plus a report of the latest match.
async fn report_latest(retriever: &DataRetriever, player: &PlayerIds) -> Result<(), BoxError> {
    let season = retriever.get_ranked_solo_stats(player).await?;
    println!("{}", reporter::season_summary(player, &season));
    let match_ids = retriever.get_latest_match_ids(player).await?;
    let latest = match match_ids.into_iter().next() {
        Some(id) => id,
        None => return Err("player has no recent ranked matches".into()),
    };
    let report = build_match_report(retriever, player, &latest).await?;
    println!("{}", report);
    Ok(())
}

/// Watch mode: poll for a new latest match, wait out the post-game data
/// delay, then post the report to Discord.
async fn watch_player(
    retriever: &DataRetriever,
    discord: &DiscordClient,
    player: &PlayerIds,
) -> Result<(), BoxError> {
    let poll_interval = CONFIG
        .get_int("poll_interval_secs")
        .expect("Field poll_interval_secs not set in config.") as u64;
    let post_game_delay = CONFIG
        .get_int("post_game_delay_secs")
        .expect("Field post_game_delay_secs not set in config.");
    let mut latest_reported = retriever
        .get_latest_match_ids(player)
        .await?
        .into_iter()
        .next();
    info!(
        "Watching {}#{}, latest known match: {:?}",
        player.game_name, player.tag_line, latest_reported
    );
    loop {
        delay_for(Duration::from_secs(poll_interval)).await;
        info!("Fetching data...");
        let ids = skip_fail!(retriever.get_latest_match_ids(player).await);
        let latest = match ids.into_iter().next() {
            Some(id) => id,
            None => continue,
        };
        if Some(&latest) == latest_reported.as_ref() {
            info!("No new match data, latest match still is {}", latest);
            continue;
        }
        let match_ = skip_fail!(retriever.get_match(&latest).await);
        let ended_at = Utc.timestamp_millis(match_.info.game_end_timestamp);
        info!("New match {} ended at {}", latest, ended_at);
        // Match data keeps settling for a while after the game ends.
        let settled_at = ended_at + chrono::Duration::seconds(post_game_delay);
        let wait = settled_at - Utc::now();
        if wait > chrono::Duration::zero() {
            info!("Sleeping until {}", settled_at);
            delay_for(wait.to_std()?).await;
        }
        let report = skip_fail!(build_match_report(retriever, player, &latest).await);
        if let Err(e) = discord.send_message(&report).await {
            warn!("Unable to deliver report for match {}: {}", latest, e);
        }
        latest_reported = Some(latest);
    }
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    TermLogger::init(
        LevelFilter::Info,
        simplelog::Config::default(),
        TerminalMode::Mixed,
    )?;
    let opts = Opts::parse();
    let retriever = DataRetriever::from_config()?;
    let player = retriever
        .resolve_player(&opts.game_name, &opts.tag_line)
        .await?;
    info!(
        "Resolved {}#{} to puuid: {}",
        player.game_name, player.tag_line, player.puuid
    );
    if opts.watch {
        let discord = DiscordClient::from_config()?;
        watch_player(&retriever, &discord, &player).await
    } else {
        report_latest(&retriever, &player).await
    }
}
