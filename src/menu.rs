//! # Menu Surface and Selection Parsing
//!
//! Callback identifiers form a closed set. They are parsed into
//! [`MenuAction`] up front so the dispatcher can match exhaustively
//! instead of comparing strings in every handler; unknown identifiers
//! parse to `None` and are acknowledged but ignored.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::model::NicheProfile;

/// Label of the back-to-menu button.
pub const BACK_LABEL: &str = "⬅️ Back to menu";

const BACK_CALLBACK: &str = "back_to_menu";
const NICHE_PREFIX: &str = "niche_";

/// The twelve report types reachable from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    TopChannels,
    BestPosts,
    NicheAnalysis,
    NewChannels,
    ChannelAdvice,
    Trends,
    PostingTime,
    ContentIdeas,
    CompetitorAnalysis,
    ContentStrategy,
    Overall24h,
    TopNews,
}

impl ReportKind {
    /// Every report kind, in main-menu order.
    pub const ALL: [ReportKind; 12] = [
        ReportKind::TopChannels,
        ReportKind::BestPosts,
        ReportKind::NicheAnalysis,
        ReportKind::NewChannels,
        ReportKind::ChannelAdvice,
        ReportKind::Trends,
        ReportKind::PostingTime,
        ReportKind::ContentIdeas,
        ReportKind::CompetitorAnalysis,
        ReportKind::ContentStrategy,
        ReportKind::Overall24h,
        ReportKind::TopNews,
    ];

    /// Wire identifier carried in the callback payload.
    pub fn callback_data(self) -> &'static str {
        match self {
            ReportKind::TopChannels => "top_channels",
            ReportKind::BestPosts => "best_posts",
            ReportKind::NicheAnalysis => "niche_analysis",
            ReportKind::NewChannels => "new_channels",
            ReportKind::ChannelAdvice => "channel_advice",
            ReportKind::Trends => "trends",
            ReportKind::PostingTime => "posting_time",
            ReportKind::ContentIdeas => "content_ideas",
            ReportKind::CompetitorAnalysis => "competitor_analysis",
            ReportKind::ContentStrategy => "content_strategy",
            ReportKind::Overall24h => "overall_24h",
            ReportKind::TopNews => "top_news",
        }
    }

    /// Button label shown on the main menu.
    pub fn menu_label(self) -> &'static str {
        match self {
            ReportKind::TopChannels => "📊 Top Channels",
            ReportKind::BestPosts => "🔥 Best Posts",
            ReportKind::NicheAnalysis => "📈 Niche Analysis",
            ReportKind::NewChannels => "📱 New Channels",
            ReportKind::ChannelAdvice => "🚀 Channel Advice",
            ReportKind::Trends => "🔍 Current Trends",
            ReportKind::PostingTime => "🕒 Posting Times",
            ReportKind::ContentIdeas => "💡 Content Ideas",
            ReportKind::CompetitorAnalysis => "🥊 Competitors",
            ReportKind::ContentStrategy => "🧭 Content Strategy",
            ReportKind::Overall24h => "📅 24h Overview",
            ReportKind::TopNews => "📰 Top News",
        }
    }

    fn from_callback_data(data: &str) -> Option<Self> {
        ReportKind::ALL.into_iter().find(|kind| kind.callback_data() == data)
    }
}

/// A parsed user selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Fetch and show a report
    Report(ReportKind),

    /// Show details for the niche at this position in the cached list
    NicheDetail(usize),

    /// Return to the main menu
    BackToMenu,
}

impl MenuAction {
    /// Parse a callback payload. Unknown identifiers yield `None`.
    ///
    /// The niche prefix is not claimed exclusively: "niche_analysis" is a
    /// report identifier, so a prefixed payload that fails to parse as an
    /// index still falls through to the report lookup.
    pub fn parse(data: &str) -> Option<Self> {
        if data == BACK_CALLBACK {
            return Some(MenuAction::BackToMenu);
        }
        if let Some(index) = data.strip_prefix(NICHE_PREFIX) {
            if let Ok(index) = index.parse() {
                return Some(MenuAction::NicheDetail(index));
            }
        }
        ReportKind::from_callback_data(data).map(MenuAction::Report)
    }

    /// Wire identifier for this selection.
    pub fn callback_data(self) -> String {
        match self {
            MenuAction::Report(kind) => kind.callback_data().to_string(),
            MenuAction::NicheDetail(index) => format!("{}{}", NICHE_PREFIX, index),
            MenuAction::BackToMenu => BACK_CALLBACK.to_string(),
        }
    }
}

/// The main menu: report buttons two per row.
pub fn main_menu_keyboard() -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = ReportKind::ALL
        .chunks(2)
        .map(|pair| {
            pair.iter()
                .map(|kind| InlineKeyboardButton::callback(kind.menu_label(), kind.callback_data()))
                .collect()
        })
        .collect();
    InlineKeyboardMarkup::new(rows)
}

/// A lone back-to-menu button.
pub fn back_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new([[InlineKeyboardButton::callback(BACK_LABEL, BACK_CALLBACK)]])
}

/// One button per niche (two per row) plus the back button.
pub fn niche_keyboard(niches: &[NicheProfile]) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = niches
        .iter()
        .enumerate()
        .collect::<Vec<_>>()
        .chunks(2)
        .map(|pair| {
            pair.iter()
                .map(|(index, niche)| {
                    InlineKeyboardButton::callback(
                        niche.name.clone(),
                        MenuAction::NicheDetail(*index).callback_data(),
                    )
                })
                .collect()
        })
        .collect();
    rows.push(vec![InlineKeyboardButton::callback(BACK_LABEL, BACK_CALLBACK)]);
    InlineKeyboardMarkup::new(rows)
}
