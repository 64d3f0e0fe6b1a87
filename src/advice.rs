//! # Channel Creation Advice
//!
//! This module ranks content categories by how promising they are for a
//! new channel and renders the advice report. The ranking is a two-stage
//! transform over the top-channels collection:
//!
//! 1. **Score and dedupe**: every channel gets a composite score from
//!    four threshold contributions (engagement rate, 7-day growth,
//!    monetization, competition), the collection is stable-sorted by
//!    score descending, deduplicated by category keeping the first
//!    (highest-scored) channel per category, and capped at five
//!    categories.
//! 2. **Mode frequency**: for each selected category, the posting cadence
//!    reported is the most common `post_frequency` value among that
//!    category's channels, ties broken by the first-encountered value in
//!    provider order.
//!
//! All thresholds are strict `>` comparisons. Ties in the score sort keep
//! provider order, so the scoring is deterministic end to end.

use crate::model::{ChannelSummary, Level};

/// Maximum number of categories the advice report recommends.
pub const MAX_PROSPECTS: usize = 5;

/// A recommended category with the figures of its best-scoring channel.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryProspect {
    /// Category name
    pub category: String,

    /// Composite score of the category's best channel (4..=12)
    pub score: u8,

    /// Engagement rate of that channel, in percent
    pub engagement_rate: f64,

    /// 7-day subscriber growth of that channel
    pub growth_7d: i64,

    /// Monetization potential
    pub monetization_level: Level,

    /// Competition pressure
    pub competition_level: Level,
}

/// Composite promise score for one channel (range 4..=12).
pub fn score_channel(channel: &ChannelSummary) -> u8 {
    let engagement = if channel.engagement_rate > 4.5 {
        3
    } else if channel.engagement_rate > 3.5 {
        2
    } else {
        1
    };
    let growth = if channel.growth_7d > 5_000 {
        3
    } else if channel.growth_7d > 2_000 {
        2
    } else {
        1
    };
    let monetization = match channel.monetization_level {
        Level::High => 3,
        Level::Medium => 2,
        _ => 1,
    };
    let competition = match channel.competition_level {
        Level::Low => 3,
        Level::Medium => 2,
        _ => 1,
    };
    engagement + growth + monetization + competition
}

/// Rank categories by their best channel's score.
///
/// Stable sort keeps provider order on ties, then the first occurrence of
/// each category wins and the result is capped at [`MAX_PROSPECTS`].
pub fn rank_categories(channels: &[ChannelSummary]) -> Vec<CategoryProspect> {
    let mut scored: Vec<(u8, &ChannelSummary)> =
        channels.iter().map(|c| (score_channel(c), c)).collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    let mut prospects: Vec<CategoryProspect> = Vec::new();
    for (score, channel) in scored {
        if prospects.iter().any(|p| p.category == channel.category) {
            continue;
        }
        prospects.push(CategoryProspect {
            category: channel.category.clone(),
            score,
            engagement_rate: channel.engagement_rate,
            growth_7d: channel.growth_7d,
            monetization_level: channel.monetization_level,
            competition_level: channel.competition_level,
        });
        if prospects.len() == MAX_PROSPECTS {
            break;
        }
    }
    prospects
}

/// Most common posting cadence among a category's channels.
///
/// Counts are gathered in provider order and only a strictly higher count
/// replaces the running best, so ties resolve to the first-encountered
/// value. Returns `None` when the category has no channels.
pub fn preferred_frequency<'a>(
    channels: &'a [ChannelSummary],
    category: &str,
) -> Option<&'a str> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for channel in channels.iter().filter(|c| c.category == category) {
        match counts.iter().position(|(value, _)| *value == channel.post_frequency) {
            Some(i) => counts[i].1 += 1,
            None => counts.push((channel.post_frequency.as_str(), 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (value, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((value, count)),
        }
    }
    best.map(|(value, _)| value)
}

const GENERAL_RECOMMENDATIONS: [&str; 8] = [
    "Pick a niche that balances monetization against competition",
    "Study the category leaders before settling on a format",
    "Post consistently at the cadence your niche expects",
    "Invest in content quality over volume from day one",
    "Cross-promote with channels of a similar size",
    "Track your ERR weekly and adjust the content mix",
    "Hold off on monetization until the audience is stable",
    "Keep experimenting with the formats that are gaining ground",
];

/// Render the channel-creation advice report.
pub fn channel_advice_report(channels: &[ChannelSummary]) -> String {
    let prospects = rank_categories(channels);

    let mut report = String::from("🚀 Channel creation playbook:\n\n🏆 Most promising niches:\n");
    for (i, prospect) in prospects.iter().enumerate() {
        report.push_str(&format!(
            "\n{}. {}\n\
             • ERR: {:.2}%\n\
             • Weekly growth: {}\n\
             • Monetization: {}\n\
             • Competition: {}\n",
            i + 1,
            prospect.category,
            prospect.engagement_rate,
            crate::format::signed_count(prospect.growth_7d),
            prospect.monetization_level,
            prospect.competition_level,
        ));
    }

    report.push_str("\n📝 Optimal posting cadence:\n\n");
    for prospect in &prospects {
        if let Some(frequency) = preferred_frequency(channels, &prospect.category) {
            report.push_str(&format!("• {}: {}\n", prospect.category, frequency));
        }
    }

    report.push_str("\n🎯 General recommendations:\n\n");
    for (i, recommendation) in GENERAL_RECOMMENDATIONS.iter().enumerate() {
        report.push_str(&format!("{}. {}\n", i + 1, recommendation));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(
        name: &str,
        category: &str,
        engagement_rate: f64,
        growth_7d: i64,
        monetization: Level,
        competition: Level,
    ) -> ChannelSummary {
        ChannelSummary {
            name: name.to_string(),
            handle: name.to_lowercase().replace(' ', "_"),
            subscriber_count: 100_000,
            growth_24h: 100,
            growth_7d,
            engagement_rate,
            category: category.to_string(),
            post_frequency: "2 per day".to_string(),
            monetization_level: monetization,
            competition_level: competition,
            avg_views: 40_000,
            avg_forwards: 900,
            content_type: "Text".to_string(),
        }
    }

    fn channel_with_frequency(category: &str, frequency: &str) -> ChannelSummary {
        let mut c = channel("X", category, 4.0, 1_000, Level::Medium, Level::Medium);
        c.post_frequency = frequency.to_string();
        c
    }

    /// Each contribution maxes out above its top threshold.
    #[test]
    fn test_score_maximum() {
        let c = channel("Best", "Tech", 5.0, 6_000, Level::High, Level::Low);
        assert_eq!(score_channel(&c), 12);
    }

    /// Thresholds are strict: landing exactly on a boundary takes the
    /// lower contribution.
    #[test]
    fn test_score_boundaries_are_strict() {
        let cases = vec![
            // (engagement, growth, expected score with Low monetization and High competition)
            (4.5, 5_000, 2 + 2 + 1 + 1),
            (3.5, 2_000, 1 + 1 + 1 + 1),
            (4.51, 5_001, 3 + 3 + 1 + 1),
            (3.51, 2_001, 2 + 2 + 1 + 1),
        ];
        for (engagement, growth, expected) in cases {
            let c = channel("Edge", "Tech", engagement, growth, Level::Low, Level::High);
            assert_eq!(
                score_channel(&c),
                expected,
                "engagement {} growth {}",
                engagement,
                growth
            );
        }
    }

    #[test]
    fn test_score_level_contributions() {
        let base = |m, c| channel("L", "Tech", 1.0, 0, m, c);
        assert_eq!(score_channel(&base(Level::High, Level::Low)), 1 + 1 + 3 + 3);
        assert_eq!(score_channel(&base(Level::Medium, Level::Medium)), 1 + 1 + 2 + 2);
        assert_eq!(score_channel(&base(Level::Low, Level::High)), 1 + 1 + 1 + 1);
        // "Very High" competition falls into the catch-all like "High".
        assert_eq!(score_channel(&base(Level::Low, Level::VeryHigh)), 1 + 1 + 1 + 1);
    }

    /// Ten channels over three categories collapse to at most three
    /// prospects, each the top scorer of its category.
    #[test]
    fn test_rank_deduplicates_by_category() {
        let mut channels = Vec::new();
        for i in 0..10 {
            let category = ["News", "Tech", "Food"][i % 3];
            // One standout per category, the rest mediocre.
            let engagement = if i < 3 { 6.0 } else { 2.0 };
            channels.push(channel(
                &format!("ch{}", i),
                category,
                engagement,
                500,
                Level::Medium,
                Level::Medium,
            ));
        }
        let prospects = rank_categories(&channels);
        assert_eq!(prospects.len(), 3);
        for prospect in &prospects {
            assert_eq!(prospect.score, 3 + 1 + 2 + 2);
        }
    }

    /// Equal scores keep provider order.
    #[test]
    fn test_rank_ties_keep_provider_order() {
        let channels = vec![
            channel("First", "News", 4.0, 1_000, Level::Medium, Level::Medium),
            channel("Second", "Tech", 4.0, 1_000, Level::Medium, Level::Medium),
        ];
        let prospects = rank_categories(&channels);
        assert_eq!(prospects[0].category, "News");
        assert_eq!(prospects[1].category, "Tech");
    }

    #[test]
    fn test_rank_caps_at_five_categories() {
        let channels: Vec<ChannelSummary> = (0..8)
            .map(|i| {
                channel(
                    &format!("ch{}", i),
                    &format!("cat{}", i),
                    4.0,
                    1_000,
                    Level::Medium,
                    Level::Medium,
                )
            })
            .collect();
        assert_eq!(rank_categories(&channels).len(), MAX_PROSPECTS);
    }

    /// [A, A, B] reports A.
    #[test]
    fn test_preferred_frequency_mode() {
        let channels = vec![
            channel_with_frequency("News", "3 per day"),
            channel_with_frequency("News", "3 per day"),
            channel_with_frequency("News", "1 per day"),
        ];
        assert_eq!(preferred_frequency(&channels, "News"), Some("3 per day"));
    }

    /// A tie resolves to the value encountered first.
    #[test]
    fn test_preferred_frequency_tie_keeps_first() {
        let channels = vec![
            channel_with_frequency("News", "1 per day"),
            channel_with_frequency("News", "3 per day"),
            channel_with_frequency("News", "3 per day"),
            channel_with_frequency("News", "1 per day"),
        ];
        assert_eq!(preferred_frequency(&channels, "News"), Some("1 per day"));
    }

    #[test]
    fn test_preferred_frequency_unknown_category() {
        let channels = vec![channel_with_frequency("News", "3 per day")];
        assert_eq!(preferred_frequency(&channels, "Sports"), None);
    }

    #[test]
    fn test_advice_report_orders_by_score() {
        let channels = vec![
            channel("Mediocre", "News", 2.0, 500, Level::Low, Level::High),
            channel("Star", "Tech", 6.0, 9_000, Level::High, Level::Low),
        ];
        let report = channel_advice_report(&channels);
        let tech_pos = report.find("1. Tech").unwrap();
        let news_pos = report.find("2. News").unwrap();
        assert!(tech_pos < news_pos);
        assert!(report.contains("• Tech: 2 per day"));
        assert!(report.contains("🎯 General recommendations:"));
    }
}
