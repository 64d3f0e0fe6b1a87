//! # Bot Handlers and Dispatch
//!
//! The callback handler is the dispatch boundary: it acknowledges the
//! button press, parses the payload into a [`MenuAction`], runs the
//! matching flow, and converts any error into an apology message so a
//! chat is never left staring at a loading placeholder.
//!
//! Report flow per selection: edit the menu message into a loading line,
//! fetch and format via [`build_report`], then deliver the chunks. The
//! first chunk replaces the loading line, later chunks go out as fresh
//! messages, and the navigation keyboard rides on the final chunk.
//! Niche-detail and back-to-menu selections skip the loading phase
//! because they run from cached state only.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info, warn};
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardMarkup, MaybeInaccessibleMessage, MessageId};

use crate::advice;
use crate::format;
use crate::menu::{self, MenuAction, ReportKind};
use crate::messages;
use crate::paginate::{self, MAX_MESSAGE_LEN};
use crate::provider::AnalyticsProvider;
use crate::state::SessionStore;

/// Dependencies shared by every handler invocation.
#[derive(Clone)]
pub struct BotContext {
    /// Data source for all reports.
    pub provider: Arc<dyn AnalyticsProvider>,

    /// Per-chat niche cache.
    pub sessions: Arc<SessionStore>,
}

impl BotContext {
    pub fn new(provider: Arc<dyn AnalyticsProvider>) -> Self {
        Self {
            provider,
            sessions: Arc::new(SessionStore::new()),
        }
    }
}

/// A report ready for delivery: pre-split chunks plus the keyboard
/// attached to the final chunk.
#[derive(Debug, Clone)]
pub struct ReportReply {
    pub chunks: Vec<String>,
    pub keyboard: InlineKeyboardMarkup,
}

/// Outcome of preparing a report.
#[derive(Debug, Clone)]
pub enum ReportOutcome {
    /// Data arrived and the chunks are ready to send.
    Ready(ReportReply),

    /// The provider had nothing; show the try-again-later message.
    Unavailable,
}

/// Handle plain messages: /start opens the menu, anything else gets a hint.
pub async fn message_handler(bot: Bot, msg: Message) -> Result<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    if text.trim() == "/start" {
        info!("Chat {}: opened the menu", msg.chat.id);
        bot.send_message(msg.chat.id, messages::WELCOME)
            .reply_markup(menu::main_menu_keyboard())
            .await?;
    } else {
        debug!("Chat {}: non-command text, sending hint", msg.chat.id);
        bot.send_message(msg.chat.id, messages::HINT)
            .reply_markup(menu::main_menu_keyboard())
            .await?;
    }
    Ok(())
}

/// Handle a button press end to end.
pub async fn callback_handler(bot: Bot, query: CallbackQuery, ctx: BotContext) -> Result<()> {
    bot.answer_callback_query(query.id.clone()).await?;

    let Some(message) = query.message.as_ref() else {
        debug!("Callback without a message reference, nothing to anchor a reply to");
        return Ok(());
    };
    let (chat, message_id) = callback_anchor(message);

    let Some(action) = query.data.as_deref().and_then(MenuAction::parse) else {
        warn!("Chat {}: unknown callback payload {:?}", chat, query.data);
        return Ok(());
    };

    if let Err(err) = dispatch_action(&bot, &ctx, chat, message_id, action).await {
        error!("Chat {}: handler for {:?} failed: {:#}", chat, action, err);
        send_apology(&bot, chat, message_id).await;
    }
    Ok(())
}

fn callback_anchor(message: &MaybeInaccessibleMessage) -> (ChatId, MessageId) {
    match message {
        MaybeInaccessibleMessage::Regular(msg) => (msg.chat.id, msg.id),
        MaybeInaccessibleMessage::Inaccessible(msg) => (msg.chat.id, msg.message_id),
    }
}

async fn dispatch_action(
    bot: &Bot,
    ctx: &BotContext,
    chat: ChatId,
    message_id: MessageId,
    action: MenuAction,
) -> Result<()> {
    match action {
        MenuAction::BackToMenu => show_menu(bot, chat, message_id).await,
        MenuAction::NicheDetail(index) => show_niche_detail(bot, ctx, chat, message_id, index).await,
        MenuAction::Report(kind) => run_report(bot, ctx, chat, message_id, kind).await,
    }
}

/// Edit the current message back into the main menu.
///
/// Pressing back on a message already showing the menu asks Telegram for
/// an edit that changes nothing, which it rejects; that rejection counts
/// as success here.
async fn show_menu(bot: &Bot, chat: ChatId, message_id: MessageId) -> Result<()> {
    let edit = bot
        .edit_message_text(chat, message_id, messages::WELCOME)
        .reply_markup(menu::main_menu_keyboard())
        .await;
    match edit {
        Ok(_) => Ok(()),
        Err(err) if is_not_modified(&err) => Ok(()),
        Err(err) => Err(err.into()),
    }
}

async fn show_niche_detail(
    bot: &Bot,
    ctx: &BotContext,
    chat: ChatId,
    message_id: MessageId,
    index: usize,
) -> Result<()> {
    match ctx.sessions.niche_at(chat, index).await {
        Some(niche) => {
            info!("Chat {}: niche detail {} ({})", chat, index, niche.name);
            let reply = ReportReply {
                chunks: paginate::split_by_chars(&format::niche_detail(&niche), MAX_MESSAGE_LEN),
                keyboard: menu::back_keyboard(),
            };
            deliver(bot, chat, message_id, reply).await
        }
        None => {
            warn!(
                "Chat {}: niche index {} is not in the cached list",
                chat, index
            );
            bot.edit_message_text(chat, message_id, messages::NICHE_NOT_FOUND)
                .reply_markup(menu::back_keyboard())
                .await?;
            Ok(())
        }
    }
}

async fn run_report(
    bot: &Bot,
    ctx: &BotContext,
    chat: ChatId,
    message_id: MessageId,
    kind: ReportKind,
) -> Result<()> {
    info!("Chat {}: requested {:?}", chat, kind);
    bot.edit_message_text(chat, message_id, messages::loading_text(kind))
        .await?;

    match build_report(kind, ctx.provider.as_ref(), &ctx.sessions, chat).await {
        ReportOutcome::Ready(reply) => {
            debug!(
                "Chat {}: delivering {:?} in {} chunk(s)",
                chat,
                kind,
                reply.chunks.len()
            );
            deliver(bot, chat, message_id, reply).await
        }
        ReportOutcome::Unavailable => {
            warn!("Chat {}: provider had no data for {:?}", chat, kind);
            bot.edit_message_text(chat, message_id, messages::UNAVAILABLE)
                .reply_markup(menu::back_keyboard())
                .await?;
            Ok(())
        }
    }
}

/// Fetch, format, and paginate one report.
///
/// This is the pure core of the dispatcher: no sends happen here, so the
/// whole decision tree is testable against stub providers. A successful
/// niche-analysis fetch also refreshes the chat's cached niche list;
/// failed fetches leave the cache untouched.
pub async fn build_report(
    kind: ReportKind,
    provider: &dyn AnalyticsProvider,
    sessions: &SessionStore,
    chat: ChatId,
) -> ReportOutcome {
    match kind {
        ReportKind::TopChannels => match non_empty(provider.top_channels().await) {
            Some(channels) => listing_reply(
                format::TOP_CHANNELS_TITLE,
                format::TOP_CHANNELS_CONTINUED,
                format::channel_blocks(&channels),
            ),
            None => ReportOutcome::Unavailable,
        },
        ReportKind::BestPosts => match non_empty(provider.best_posts().await) {
            Some(posts) => listing_reply(
                format::BEST_POSTS_TITLE,
                format::BEST_POSTS_CONTINUED,
                format::post_blocks(&posts),
            ),
            None => ReportOutcome::Unavailable,
        },
        ReportKind::NicheAnalysis => match non_empty(provider.niche_analysis().await) {
            Some(niches) => {
                let reply = ReportReply {
                    chunks: paginate::split_by_chars(
                        &format::niche_overview(&niches),
                        MAX_MESSAGE_LEN,
                    ),
                    keyboard: menu::niche_keyboard(&niches),
                };
                sessions.remember_niches(chat, niches).await;
                ReportOutcome::Ready(reply)
            }
            None => ReportOutcome::Unavailable,
        },
        ReportKind::NewChannels => match provider.new_channel_stats().await {
            Some(stats) => prose_reply(format::new_channels_report(&stats)),
            None => ReportOutcome::Unavailable,
        },
        ReportKind::ChannelAdvice => {
            // The advice view needs the scored channels and also confirms
            // the niche dataset is reachable before recommending any.
            let channels = non_empty(provider.top_channels().await);
            let niches = non_empty(provider.niche_analysis().await);
            match (channels, niches) {
                (Some(channels), Some(_)) => prose_reply(advice::channel_advice_report(&channels)),
                _ => ReportOutcome::Unavailable,
            }
        }
        ReportKind::Trends => match provider.current_trends().await {
            Some(trends) => prose_reply(format::trends_report(&trends)),
            None => ReportOutcome::Unavailable,
        },
        ReportKind::PostingTime => match non_empty(provider.niche_analysis().await) {
            Some(niches) => prose_reply(format::posting_time_report(&niches)),
            None => ReportOutcome::Unavailable,
        },
        ReportKind::ContentIdeas => match non_empty(provider.niche_analysis().await) {
            Some(niches) => prose_reply(format::content_ideas_report(&niches)),
            None => ReportOutcome::Unavailable,
        },
        ReportKind::CompetitorAnalysis => match non_empty(provider.top_channels().await) {
            Some(channels) => prose_reply(format::competitor_report(&channels)),
            None => ReportOutcome::Unavailable,
        },
        ReportKind::ContentStrategy => {
            let trends = provider.current_trends().await;
            let niches = non_empty(provider.niche_analysis().await);
            match (trends, niches) {
                (Some(trends), Some(niches)) => {
                    prose_reply(format::content_strategy_report(&trends, &niches))
                }
                _ => ReportOutcome::Unavailable,
            }
        }
        ReportKind::Overall24h => {
            let stats = provider.new_channel_stats().await;
            let trends = provider.current_trends().await;
            let channels = non_empty(provider.top_channels().await);
            match (stats, trends, channels) {
                (Some(stats), Some(trends), Some(channels)) => {
                    prose_reply(format::overall_24h_report(&stats, &trends, &channels))
                }
                _ => ReportOutcome::Unavailable,
            }
        }
        ReportKind::TopNews => match non_empty(provider.best_posts().await) {
            Some(posts) => prose_reply(format::top_news_report(&posts)),
            None => ReportOutcome::Unavailable,
        },
    }
}

/// An empty collection from the provider counts as unavailable.
fn non_empty<T>(value: Option<Vec<T>>) -> Option<Vec<T>> {
    value.filter(|records| !records.is_empty())
}

fn prose_reply(text: String) -> ReportOutcome {
    ReportOutcome::Ready(ReportReply {
        chunks: paginate::split_by_chars(&text, MAX_MESSAGE_LEN),
        keyboard: menu::back_keyboard(),
    })
}

fn listing_reply(title: &str, continuation: &str, blocks: Vec<String>) -> ReportOutcome {
    ReportOutcome::Ready(ReportReply {
        chunks: paginate::paginate_records(title, continuation, &blocks, MAX_MESSAGE_LEN),
        keyboard: menu::back_keyboard(),
    })
}

/// Send the chunks: the first edits the placeholder, the rest are fresh
/// messages, and the keyboard rides on the final chunk.
async fn deliver(bot: &Bot, chat: ChatId, message_id: MessageId, reply: ReportReply) -> Result<()> {
    let last = reply.chunks.len().saturating_sub(1);
    for (i, chunk) in reply.chunks.iter().enumerate() {
        match (i == 0, i == last) {
            (true, true) => {
                bot.edit_message_text(chat, message_id, chunk)
                    .reply_markup(reply.keyboard.clone())
                    .await?;
            }
            (true, false) => {
                bot.edit_message_text(chat, message_id, chunk).await?;
            }
            (false, true) => {
                bot.send_message(chat, chunk)
                    .reply_markup(reply.keyboard.clone())
                    .await?;
            }
            (false, false) => {
                bot.send_message(chat, chunk).await?;
            }
        }
    }
    Ok(())
}

/// Best-effort apology after a failed dispatch. Editing the anchored
/// message clears any loading placeholder; when the edit itself fails a
/// fresh message is attempted instead, and a failure of both is only
/// logged.
async fn send_apology(bot: &Bot, chat: ChatId, message_id: MessageId) {
    let edited = bot
        .edit_message_text(chat, message_id, messages::GENERIC_ERROR)
        .reply_markup(menu::back_keyboard())
        .await;
    if let Err(edit_err) = edited {
        if is_not_modified(&edit_err) {
            return;
        }
        let sent = bot
            .send_message(chat, messages::GENERIC_ERROR)
            .reply_markup(menu::back_keyboard())
            .await;
        if let Err(send_err) = sent {
            error!(
                "Chat {}: apology undeliverable (edit: {}, send: {})",
                chat, edit_err, send_err
            );
        }
    }
}

fn is_not_modified(err: &teloxide::RequestError) -> bool {
    err.to_string().contains("message is not modified")
}
