#[cfg(test)]
mod tests {
    use channelscope::model::Level;
    use channelscope::provider::{AnalyticsProvider, SampleAnalytics};

    fn provider() -> SampleAnalytics {
        SampleAnalytics::new("integration-token".to_string())
    }

    /// The channel listing is pre-ranked by audience size.
    #[tokio::test]
    async fn test_channel_listing_is_ranked_by_audience() {
        let channels = provider().top_channels().await.expect("dataset loads");

        assert_eq!(channels.len(), 20);
        assert_eq!(channels[0].name, "Telegram News");
        assert_eq!(channels[0].subscriber_count, 1_245_678);
        for pair in channels.windows(2) {
            assert!(
                pair[0].subscriber_count >= pair[1].subscriber_count,
                "{} should not outrank {}",
                pair[1].name,
                pair[0].name
            );
        }

        // Handles are bare (no @, no spaces) so t.me links can be built
        for channel in &channels {
            assert!(!channel.handle.is_empty());
            assert!(!channel.handle.starts_with('@'));
            assert!(!channel.handle.contains(' '));
        }
        assert_eq!(channels[1].competition_level, Level::Low);
    }

    #[tokio::test]
    async fn test_posts_have_absolute_links() {
        let posts = provider().best_posts().await.expect("dataset loads");

        assert_eq!(posts.len(), 15);
        for post in &posts {
            assert!(
                post.permalink.starts_with("https://t.me/"),
                "{} has a relative permalink",
                post.channel_name
            );
            assert!(post.views > 0);
        }
    }

    /// Niche order is part of the contract: detail buttons index into it.
    #[tokio::test]
    async fn test_niche_catalog_order_is_stable() {
        let provider = provider();
        let first = provider.niche_analysis().await.expect("dataset loads");
        let second = provider.niche_analysis().await.expect("dataset loads");

        let names: Vec<&str> = first.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "News",
                "Entertainment",
                "Technology",
                "Education",
                "Crypto",
                "Health"
            ]
        );
        let names_again: Vec<&str> = second.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, names_again);
    }

    /// Every trend ranking is already sorted, and the interest shares
    /// cover the whole audience.
    #[tokio::test]
    async fn test_trend_rankings_are_descending() {
        let trends = provider().current_trends().await.expect("dataset loads");

        assert_eq!(trends.top_topics.len(), 5);
        for pair in trends.top_topics.windows(2) {
            assert!(pair[0].growth_pct >= pair[1].growth_pct);
        }
        for pair in trends.growing_formats.windows(2) {
            assert!(pair[0].growth_pct >= pair[1].growth_pct);
        }
        for pair in trends.audience_interests.windows(2) {
            assert!(pair[0].share_pct >= pair[1].share_pct);
        }
        let total_share: f32 = trends.audience_interests.iter().map(|i| i.share_pct).sum();
        assert!((total_share - 100.0).abs() < 0.01, "shares should cover the audience");
    }

    /// Category shares are strictly descending and account for every
    /// channel in the total.
    #[tokio::test]
    async fn test_category_shares_are_consistent() {
        let stats = provider().new_channel_stats().await.expect("dataset loads");

        for pair in stats.by_category.windows(2) {
            assert!(
                pair[0].count > pair[1].count,
                "{} should come before {}",
                pair[1].category,
                pair[0].category
            );
        }
        let counted: u32 = stats.by_category.iter().map(|share| share.count).sum();
        assert_eq!(counted, stats.total_created_24h);
        assert!((stats.survival_rate_pct - 43.0).abs() < 0.01);
    }

    #[tokio::test]
    async fn test_close_is_a_no_op_for_the_sample_provider() {
        let provider = provider();
        provider.close().await;
        assert!(provider.top_channels().await.is_some());
    }
}
