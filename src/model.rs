//! # Channel Analytics Data Model
//!
//! This module defines the data structures returned by the analytics
//! provider: channel summaries, post summaries, niche profiles, trend
//! reports, and new-channel statistics. All records are transient and
//! immutable once produced; rank numbers are assigned at render time and
//! never stored.
//!
//! ## Core Concepts
//!
//! - **ChannelSummary**: one tracked channel with audience and growth figures
//! - **PostSummary**: one high-performing post with engagement figures
//! - **NicheProfile**: aggregate metrics for a content niche, with audience
//!   descriptor and content recommendations
//! - **TrendReport**: ordered topic/format/interest rankings
//! - **NewChannelStats**: 24-hour channel-creation digest
//!
//! The structs are wire-shaped (serde on every field) so the same types can
//! be filled from the embedded dataset today and from a live analytics API
//! once upstream access opens up.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative level used for monetization potential, competition
/// pressure, and post engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    /// Low
    Low,
    /// Medium
    Medium,
    /// High
    High,
    /// Very high (saturated niches, viral posts)
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
            Level::VeryHigh => "Very High",
        };
        write!(f, "{}", label)
    }
}

/// One tracked channel with audience size, growth, and engagement figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSummary {
    /// Channel display name (e.g., "Telegram News")
    pub name: String,

    /// Public handle without the leading @ (e.g., "telegram")
    pub handle: String,

    /// Current subscriber count
    pub subscriber_count: u64,

    /// Subscriber change over the last 24 hours
    pub growth_24h: i64,

    /// Subscriber change over the last 7 days
    pub growth_7d: i64,

    /// Engagement rate (ERR) in percent
    pub engagement_rate: f64,

    /// Content category the channel is tracked under (e.g., "Technology")
    pub category: String,

    /// Typical posting cadence as advertised by the channel (e.g., "3 per day")
    pub post_frequency: String,

    /// Monetization potential of the channel's niche
    pub monetization_level: Level,

    /// Competition pressure in the channel's niche
    pub competition_level: Level,

    /// Average views per post
    pub avg_views: u64,

    /// Average forwards per post
    pub avg_forwards: u64,

    /// Dominant content mix (e.g., "Text + photo")
    pub content_type: String,
}

/// One high-performing post with engagement figures.
///
/// The engagement sub-fields and timestamps are optional; the formatter
/// renders a placeholder for absent values so every post block keeps the
/// same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    /// Name of the channel that published the post
    pub channel_name: String,

    /// Audience size bucket of the channel (e.g., "Large (1.2M+)")
    pub channel_size: String,

    /// Post topic or headline
    pub topic: String,

    /// View count
    pub views: u64,

    /// Forward count
    pub forwards: u64,

    /// Qualitative engagement level
    pub engagement_level: Level,

    /// Like count, when the source exposes it
    pub likes: Option<u64>,

    /// Comment count, when the source exposes it
    pub comments: Option<u64>,

    /// Publication date, when known
    pub post_date: Option<NaiveDate>,

    /// Publication time, when known
    pub post_time: Option<NaiveTime>,

    /// One-line content summary, when available
    pub summary: Option<String>,

    /// Public link to the post
    pub permalink: String,
}

/// Audience descriptor attached to a niche profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudienceProfile {
    /// Dominant age range (e.g., "25-45")
    pub age_range: String,

    /// Interests ranked by prevalence
    pub interests: Vec<String>,

    /// When the audience is most active (e.g., "morning and evening peaks")
    pub activity_pattern: String,
}

/// Per-subscriber engagement ratios attached to a niche profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementMetrics {
    /// Average views per subscriber
    pub views_per_subscriber: f64,

    /// Average forwards per view
    pub forwards_per_view: f64,

    /// Average comments per view
    pub comments_per_view: f64,
}

/// Aggregate metrics for one content niche.
///
/// Niche names are unique within a provider response and the response
/// order is the presentation order, so a niche can be addressed by its
/// position in the list. The `audience` and `engagement_metrics`
/// sub-records are mandatory: a source record missing either fails
/// deserialization and the provider reports the whole fetch as
/// unavailable instead of serving a partial profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NicheProfile {
    /// Niche name, unique within a response (e.g., "Technology")
    pub name: String,

    /// Average engagement rate across the niche, in percent
    pub avg_engagement_rate: f64,

    /// Average subscriber growth rate, in percent
    pub growth_rate: f64,

    /// Monetization potential of the niche
    pub monetization_level: Level,

    /// Competition pressure in the niche
    pub competition_level: Level,

    /// Who the audience is and when it is active
    pub audience: AudienceProfile,

    /// Per-subscriber engagement ratios
    pub engagement_metrics: EngagementMetrics,

    /// Content recommendations, ordered by impact
    pub content_recommendations: Vec<String>,

    /// Best posting window (e.g., "07:00-09:00")
    pub optimal_posting_time: String,
}

/// One trending topic with its growth and volume figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingTopic {
    /// Topic name
    pub name: String,

    /// Growth over the reporting window, in percent
    pub growth_pct: i32,

    /// Posts observed on the topic in the window
    pub post_count: u32,
}

/// One content format gaining traction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatTrend {
    /// Format name (e.g., "Short videos")
    pub format: String,

    /// Growth over the reporting window, in percent
    pub growth_pct: i32,
}

/// One audience interest with its share of total attention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudienceInterest {
    /// Interest name (e.g., "Educational content")
    pub interest: String,

    /// Share of audience attention, in percent
    pub share_pct: f32,
}

/// Current trend rankings.
///
/// Each section is ordered best-first. The first two topics and the first
/// two formats feed the report's closing summary sentence, so their order
/// is significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    /// Fastest-growing topics, best first
    pub top_topics: Vec<TrendingTopic>,

    /// Formats gaining traction, best first
    pub growing_formats: Vec<FormatTrend>,

    /// Audience interests by attention share, largest first
    pub audience_interests: Vec<AudienceInterest>,
}

/// Share of newly created channels attributed to one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    /// Category name
    pub category: String,

    /// Channels created in the window
    pub count: u32,

    /// Share of all new channels, in percent
    pub share_pct: f32,
}

/// 24-hour digest of channel creation activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewChannelStats {
    /// Channels created in the last 24 hours
    pub total_created_24h: u32,

    /// Change versus the previous window, in percent
    pub growth_rate_pct: f32,

    /// Creation counts per category, sorted by count descending
    pub by_category: Vec<CategoryShare>,

    /// Average posts published by a new channel in its first day
    pub avg_initial_posts: f32,

    /// Average subscribers gained in the first week
    pub avg_first_week_growth: u32,

    /// Share of new channels still publishing after their first week, in percent
    pub survival_rate_pct: f32,
}
