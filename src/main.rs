use std::sync::Arc;

use anyhow::Result;
use log::info;
use teloxide::prelude::*;

use channelscope::bot::{self, BotContext};
use channelscope::config::AppConfig;
use channelscope::instance_lock::InstanceLock;
use channelscope::provider::{AnalyticsProvider, SampleAnalytics};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    info!("Starting ChannelScope Telegram Bot");

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Validate configuration before connecting anywhere
    let config = AppConfig::from_env()?;

    // Refuse to start next to another copy polling the same token
    let _lock = InstanceLock::acquire()?;

    // Analytics provider shared by all handlers
    let provider: Arc<dyn AnalyticsProvider> =
        Arc::new(SampleAnalytics::new(config.analytics_token.clone()));
    let ctx = BotContext::new(Arc::clone(&provider));

    // Initialize the bot
    let bot = Bot::new(&config.telegram_token);

    info!("Bot initialized, starting dispatcher");

    // Set up the dispatcher with the shared context
    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(bot::message_handler))
        .branch(Update::filter_callback_query().endpoint({
            let ctx = ctx.clone();
            move |bot: Bot, query: CallbackQuery| {
                let ctx = ctx.clone();
                async move { bot::callback_handler(bot, query, ctx).await }
            }
        }));

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    provider.close().await;
    info!("Bot stopped");

    Ok(())
}
