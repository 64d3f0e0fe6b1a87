//! Shared text sent by the bot, outside of the report bodies themselves
//! (those live in [`crate::format`]).

use crate::menu::ReportKind;

/// Greeting shown on /start, above the main menu.
pub const WELCOME: &str = "👋 Welcome to ChannelScope!\n\n\
    I serve analytics digests about Telegram channels, posts, and trends. \
    Upstream access is currently limited, so reports come from a curated sample dataset.\n\n\
    Pick a report:";

/// Reply to any text that is not the entry command.
pub const HINT: &str = "🤖 I work through the buttons below. Send /start any time to reopen the menu.";

/// Shown when a provider call comes back empty.
pub const UNAVAILABLE: &str = "😕 The data source is not responding right now.\n\n\
    This can happen during:\n\
    • upstream maintenance\n\
    • temporary access restrictions\n\
    • network hiccups\n\n\
    Please try again in a few minutes.";

/// Shown when a niche-detail selection no longer matches the cached list.
pub const NICHE_NOT_FOUND: &str = "😕 Details for that niche are no longer available.\n\n\
    Open the niche analysis again to refresh the list.";

/// Shown when report preparation or delivery fails unexpectedly.
pub const GENERIC_ERROR: &str = "❌ Something went wrong while preparing your report.\n\
    Please try again later.";

/// Placeholder edited into the menu message while a report is fetched.
pub fn loading_text(kind: ReportKind) -> &'static str {
    match kind {
        ReportKind::TopChannels => "⏳ Loading top channels…",
        ReportKind::BestPosts => "⏳ Collecting the best posts…",
        ReportKind::NicheAnalysis => "⏳ Analyzing niches…",
        ReportKind::NewChannels => "⏳ Counting new channels…",
        ReportKind::ChannelAdvice => "⏳ Crunching the numbers for your playbook…",
        ReportKind::Trends => "⏳ Gathering current trends…",
        ReportKind::PostingTime => "⏳ Checking posting windows…",
        ReportKind::ContentIdeas => "⏳ Collecting content ideas…",
        ReportKind::CompetitorAnalysis => "⏳ Mapping the competition…",
        ReportKind::ContentStrategy => "⏳ Assembling the strategy guide…",
        ReportKind::Overall24h => "⏳ Building the 24-hour overview…",
        ReportKind::TopNews => "⏳ Picking today's top posts…",
    }
}
