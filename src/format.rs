//! # Report Formatting
//!
//! This module renders provider records into the text reports the bot
//! sends. It owns section headers, 1-based positional numbering, and the
//! per-field templates; pagination happens afterwards in
//! [`crate::paginate`].
//!
//! Listing reports (channels, posts) render one fixed-template block per
//! record so the record-aligned splitter can regroup them. Optional post
//! fields render the [`PLACEHOLDER`] token instead of dropping the line,
//! keeping every block the same shape. Prose reports render a single
//! string and are split at character offsets when oversized.

use std::collections::HashMap;

use crate::model::{
    ChannelSummary, NewChannelStats, NicheProfile, PostSummary, TrendReport,
};

/// Token rendered for absent optional fields.
pub const PLACEHOLDER: &str = "—";

/// Header of the top-channels listing.
pub const TOP_CHANNELS_TITLE: &str = "📊 Top 20 channels by audience:";

/// Header of top-channels continuation chunks.
pub const TOP_CHANNELS_CONTINUED: &str = "📊 Top channels (continued):";

/// Header of the best-posts listing.
pub const BEST_POSTS_TITLE: &str = "🔥 Best posts of the day:";

/// Header of best-posts continuation chunks.
pub const BEST_POSTS_CONTINUED: &str = "🔥 Best posts (continued):";

/// Group digits in threes: `1245678` → `"1,245,678"`.
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Grouped digits with an explicit sign: `1234` → `"+1,234"`.
pub fn signed_count(n: i64) -> String {
    if n < 0 {
        format!("-{}", group_digits(n.unsigned_abs()))
    } else {
        format!("+{}", group_digits(n as u64))
    }
}

fn count_or_placeholder(value: Option<u64>) -> String {
    value.map(group_digits).unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// One numbered block per channel, in input order.
pub fn channel_blocks(channels: &[ChannelSummary]) -> Vec<String> {
    channels
        .iter()
        .enumerate()
        .map(|(i, channel)| {
            format!(
                "{}. {} (@{})\n\
                 👥 Subscribers: {}\n\
                 📈 Growth: {} (24h) | {} (7d)\n\
                 📊 ERR: {:.2}% | 👁 Views: {} | 🔄 Forwards: {}\n\
                 📚 Category: {} | 📝 Posting: {}\n\
                 💰 Monetization: {} | 🥊 Competition: {}\n\
                 📄 Content: {}",
                i + 1,
                channel.name,
                channel.handle,
                group_digits(channel.subscriber_count),
                signed_count(channel.growth_24h),
                signed_count(channel.growth_7d),
                channel.engagement_rate,
                group_digits(channel.avg_views),
                group_digits(channel.avg_forwards),
                channel.category,
                channel.post_frequency,
                channel.monetization_level,
                channel.competition_level,
                channel.content_type,
            )
        })
        .collect()
}

/// One numbered block per post, in input order.
pub fn post_blocks(posts: &[PostSummary]) -> Vec<String> {
    posts
        .iter()
        .enumerate()
        .map(|(i, post)| {
            let posted = match (post.post_date, post.post_time) {
                (Some(date), Some(time)) => {
                    format!("{} {}", date.format("%Y-%m-%d"), time.format("%H:%M"))
                }
                (Some(date), None) => date.format("%Y-%m-%d").to_string(),
                (None, Some(time)) => time.format("%H:%M").to_string(),
                (None, None) => PLACEHOLDER.to_string(),
            };
            format!(
                "{}. {} — {}\n\
                 📝 Topic: {}\n\
                 👁 Views: {} | 🔄 Forwards: {}\n\
                 👍 Likes: {} | 💬 Comments: {}\n\
                 💯 Engagement: {}\n\
                 🕒 Posted: {}\n\
                 📄 {}\n\
                 🔗 {}",
                i + 1,
                post.channel_name,
                post.channel_size,
                post.topic,
                group_digits(post.views),
                group_digits(post.forwards),
                count_or_placeholder(post.likes),
                count_or_placeholder(post.comments),
                post.engagement_level,
                posted,
                post.summary.as_deref().unwrap_or(PLACEHOLDER),
                post.permalink,
            )
        })
        .collect()
}

/// Niche overview: headline numbers per niche, closing with a prompt to
/// open the per-niche breakdown via the attached buttons.
pub fn niche_overview(niches: &[NicheProfile]) -> String {
    let mut report = String::from("📈 Niche analysis:\n");
    for niche in niches {
        report.push_str(&format!(
            "\n🔹 {}\n\
             📊 Average ERR: {:.1}% | 📈 Growth: {:.1}%\n\
             💰 Monetization: {} | 🥊 Competition: {}\n",
            niche.name,
            niche.avg_engagement_rate,
            niche.growth_rate,
            niche.monetization_level,
            niche.competition_level,
        ));
    }
    report.push_str("\n👇 Tap a niche below for the full breakdown.");
    report
}

/// Full breakdown of a single niche, rendered from cached state.
pub fn niche_detail(niche: &NicheProfile) -> String {
    let mut report = format!(
        "🔹 {} — niche breakdown\n\n\
         📊 Average ERR: {:.1}%\n\
         📈 Growth rate: {:.1}%\n\
         💰 Monetization: {}\n\
         🥊 Competition: {}\n\n\
         👥 Audience: {}\n\
         • Interests: {}\n\
         • Activity: {}\n\n\
         📊 Engagement metrics:\n\
         • Views per subscriber: {}\n\
         • Forwards per view: {}\n\
         • Comments per view: {}\n\n\
         💡 Content recommendations:\n",
        niche.name,
        niche.avg_engagement_rate,
        niche.growth_rate,
        niche.monetization_level,
        niche.competition_level,
        niche.audience.age_range,
        niche.audience.interests.join(", "),
        niche.audience.activity_pattern,
        niche.engagement_metrics.views_per_subscriber,
        niche.engagement_metrics.forwards_per_view,
        niche.engagement_metrics.comments_per_view,
    );
    for (i, recommendation) in niche.content_recommendations.iter().enumerate() {
        report.push_str(&format!("{}. {}\n", i + 1, recommendation));
    }
    report.push_str(&format!("\n🕒 Optimal posting time: {}", niche.optimal_posting_time));
    report
}

/// Trend rankings with the derived closing sentence.
pub fn trends_report(trends: &TrendReport) -> String {
    let mut report = String::from("🔍 Current Telegram trends:\n\n📈 Top topics:\n");
    for (i, topic) in trends.top_topics.iter().enumerate() {
        report.push_str(&format!(
            "{}. {} — {:+}% ({} posts)\n",
            i + 1,
            topic.name,
            topic.growth_pct,
            group_digits(topic.post_count as u64),
        ));
    }

    report.push_str("\n📱 Growing formats:\n");
    for (i, format_trend) in trends.growing_formats.iter().enumerate() {
        report.push_str(&format!(
            "{}. {} — {:+}%\n",
            i + 1,
            format_trend.format,
            format_trend.growth_pct,
        ));
    }

    report.push_str("\n👥 Audience interests:\n");
    for interest in &trends.audience_interests {
        report.push_str(&format!("• {}: {}%\n", interest.interest, interest.share_pct));
    }

    // The conclusion reads the first two entries of both rankings; skip it
    // rather than emit a half-formed sentence when either is short.
    if trends.top_topics.len() >= 2 && trends.growing_formats.len() >= 2 {
        report.push_str(&format!(
            "\n💡 Conclusion: the fastest-growing topics right now are {} and {}, \
             while {} and {} are the formats gaining the most ground.",
            trends.top_topics[0].name,
            trends.top_topics[1].name,
            trends.growing_formats[0].format,
            trends.growing_formats[1].format,
        ));
    }
    report
}

/// 24-hour channel-creation digest.
pub fn new_channels_report(stats: &NewChannelStats) -> String {
    let mut report = format!(
        "📱 New channels in the last 24 hours:\n\n\
         📊 Total created: {} ({:+}% vs the previous day)\n\n\
         🏆 Most active categories:\n",
        group_digits(stats.total_created_24h as u64),
        stats.growth_rate_pct,
    );
    for (i, share) in stats.by_category.iter().take(3).enumerate() {
        report.push_str(&format!(
            "{}. {} — {} channels ({}%)\n",
            i + 1,
            share.category,
            group_digits(share.count as u64),
            share.share_pct,
        ));
    }

    report.push_str("\n📋 Full category breakdown:\n");
    for share in &stats.by_category {
        report.push_str(&format!(
            "• {}: {} ({}%)\n",
            share.category,
            group_digits(share.count as u64),
            share.share_pct,
        ));
    }

    report.push_str(&format!(
        "\n📝 Average first-day posts: {}\n\
         📈 Average first-week growth: +{} subscribers\n\
         ✅ Still publishing after a week: {}%",
        stats.avg_initial_posts,
        group_digits(stats.avg_first_week_growth as u64),
        stats.survival_rate_pct,
    ));
    report
}

/// Best posting windows per niche.
pub fn posting_time_report(niches: &[NicheProfile]) -> String {
    let mut report = String::from("🕒 Best posting times by niche:\n");
    for niche in niches {
        report.push_str(&format!(
            "\n🔹 {}\n\
             • Window: {}\n\
             • Audience activity: {}\n",
            niche.name, niche.optimal_posting_time, niche.audience.activity_pattern,
        ));
    }
    report.push_str("\n💡 Times are given for the audience's local timezone.");
    report
}

/// Content recommendations per niche.
pub fn content_ideas_report(niches: &[NicheProfile]) -> String {
    let mut report = String::from("💡 Content ideas by niche:\n");
    for niche in niches {
        report.push_str(&format!("\n🔹 {}\n", niche.name));
        for (i, recommendation) in niche.content_recommendations.iter().enumerate() {
            report.push_str(&format!("{}. {}\n", i + 1, recommendation));
        }
    }
    report.push_str("\n👇 Open the niche analysis for audience details.");
    report
}

/// Competitive landscape: per-category leaders among the tracked channels.
///
/// Categories appear in first-encounter order; the provider sorts
/// channels by audience size, so the first channel of a category is its
/// leader.
pub fn competitor_report(channels: &[ChannelSummary]) -> String {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&ChannelSummary>> = HashMap::new();
    for channel in channels {
        let entry = groups.entry(channel.category.as_str()).or_default();
        if entry.is_empty() {
            order.push(channel.category.as_str());
        }
        entry.push(channel);
    }

    let mut report = String::from("🥊 Competitive landscape by category:\n");
    for category in order {
        let group = &groups[category];
        let leader = group[0];
        let avg_err =
            group.iter().map(|c| c.engagement_rate).sum::<f64>() / group.len() as f64;
        report.push_str(&format!(
            "\n🔹 {}\n\
             • Leader: {} (@{}) — {} subscribers\n\
             • Tracked channels: {} | Competition: {}\n\
             • Average ERR: {:.2}%\n",
            category,
            leader.name,
            leader.handle,
            group_digits(leader.subscriber_count),
            group.len(),
            leader.competition_level,
            avg_err,
        ));
    }
    report.push_str("\n💡 A single strong leader with few tracked rivals often marks an underserved category.");
    report
}

/// Strategy guide combining growing formats with per-niche focus points.
pub fn content_strategy_report(trends: &TrendReport, niches: &[NicheProfile]) -> String {
    let mut report = String::from("🧭 Content strategy guide:\n\n📱 Formats to lean into:\n");
    for (i, format_trend) in trends.growing_formats.iter().take(3).enumerate() {
        report.push_str(&format!(
            "{}. {} ({:+}%)\n",
            i + 1,
            format_trend.format,
            format_trend.growth_pct,
        ));
    }

    report.push_str("\n🔹 Per-niche focus:\n");
    for niche in niches {
        let focus = niche
            .content_recommendations
            .first()
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER);
        report.push_str(&format!(
            "• {}: {} (post at {})\n",
            niche.name, focus, niche.optimal_posting_time,
        ));
    }

    report.push_str(
        "\n💡 Lead with your niche's first focus point and repurpose it into the formats above.",
    );
    report
}

/// Cross-source digest of the last 24 hours.
pub fn overall_24h_report(
    stats: &NewChannelStats,
    trends: &TrendReport,
    channels: &[ChannelSummary],
) -> String {
    let mut report = format!(
        "📅 24-hour Telegram overview:\n\n\
         📱 New channels: {} ({:+}%)\n",
        group_digits(stats.total_created_24h as u64),
        stats.growth_rate_pct,
    );
    if let Some(top_category) = stats.by_category.first() {
        report.push_str(&format!(
            "🏆 Most active category: {} ({} new channels)\n",
            top_category.category,
            group_digits(top_category.count as u64),
        ));
    }

    let mut by_growth: Vec<&ChannelSummary> = channels.iter().collect();
    by_growth.sort_by(|a, b| b.growth_24h.cmp(&a.growth_24h));
    report.push_str("\n📈 Fastest-growing tracked channels:\n");
    for (i, channel) in by_growth.iter().take(3).enumerate() {
        report.push_str(&format!(
            "{}. {} — {} subscribers\n",
            i + 1,
            channel.name,
            signed_count(channel.growth_24h),
        ));
    }

    if let Some(topic) = trends.top_topics.first() {
        report.push_str(&format!(
            "\n🔥 Topic of the day: {} ({:+}%)\n",
            topic.name, topic.growth_pct,
        ));
    }

    report.push_str(&format!(
        "\n💡 Overall: channel creation is {} {}% day over day.",
        if stats.growth_rate_pct >= 0.0 { "up" } else { "down" },
        stats.growth_rate_pct.abs(),
    ));
    report
}

/// The day's most-read posts, ranked by views.
pub fn top_news_report(posts: &[PostSummary]) -> String {
    let mut ranked: Vec<&PostSummary> = posts.iter().collect();
    ranked.sort_by(|a, b| b.views.cmp(&a.views));

    let mut report = String::from("📰 Today's most-read posts:\n");
    for (i, post) in ranked.iter().take(5).enumerate() {
        report.push_str(&format!(
            "\n{}. {} — {}\n\
             👁 {} views | 🔄 {} forwards\n\
             📄 {}\n\
             🔗 {}\n",
            i + 1,
            post.channel_name,
            post.topic,
            group_digits(post.views),
            group_digits(post.forwards),
            post.summary.as_deref().unwrap_or(PLACEHOLDER),
            post.permalink,
        ));
    }
    report
}
