pub mod discord_client;
pub mod reporter;
