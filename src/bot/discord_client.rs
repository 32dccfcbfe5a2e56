use crate::BoxError;
use crate::CONFIG;

/// Posts messages in a fixed Discord channel through the REST API.
pub struct DiscordClient {
    bot_token: String,
    channel_id: String,
}

impl DiscordClient {
    pub fn from_config() -> Result<DiscordClient, BoxError> {
        Ok(DiscordClient {
            bot_token: std::env::var("BOT_TOKEN")?,
            channel_id: CONFIG.get_str("discord_channel_id")?,
        })
    }

    pub async fn send_message(&self, content: &str) -> Result<(), BoxError> {
        let url = format!(
            "https://discord.com/api/v10/channels/{}/messages",
            self.channel_id
        );
        let response = reqwest::Client::new()
            .post(url.as_str())
            .header("Authorization", format!("Bot {}", self.bot_token))
            .json(&serde_json::json!({ "content": content }))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(format!("discord rejected message: {}", response.status()).into());
        }
        info!("Sent message to channel {}", self.channel_id);
        Ok(())
    }
}
