//! # Per-Conversation State
//!
//! Niche-detail selections reference the niche list a chat was last
//! shown, by position, so they resolve without another provider call.
//! The dispatcher owns one [`SessionStore`] mapping chat ids to that
//! cached list; a new niche-analysis fetch overwrites the previous entry
//! and nothing ever deletes entries explicitly.

use std::collections::HashMap;

use teloxide::types::ChatId;
use tokio::sync::Mutex;

use crate::model::NicheProfile;

/// What the bot remembers about one chat.
#[derive(Debug, Clone, Default)]
pub struct ConversationState {
    /// Niche list last shown to the chat, in presentation order.
    niches: Vec<NicheProfile>,
}

impl ConversationState {
    /// Niche at the given position in the cached list.
    pub fn niche(&self, index: usize) -> Option<&NicheProfile> {
        self.niches.get(index)
    }

    /// Number of cached niches.
    pub fn niche_count(&self) -> usize {
        self.niches.len()
    }
}

/// Conversation state for all chats, keyed by chat id.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<ChatId, ConversationState>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache the niche list just shown to a chat, replacing any previous one.
    pub async fn remember_niches(&self, chat: ChatId, niches: Vec<NicheProfile>) {
        let mut sessions = self.sessions.lock().await;
        sessions.insert(chat, ConversationState { niches });
    }

    /// Resolve a niche by its position in the list last shown to a chat.
    ///
    /// `None` covers both a chat with no cached list and an out-of-range
    /// position.
    pub async fn niche_at(&self, chat: ChatId, index: usize) -> Option<NicheProfile> {
        let sessions = self.sessions.lock().await;
        sessions.get(&chat).and_then(|state| state.niche(index)).cloned()
    }

    /// Number of niches cached for a chat, if any.
    pub async fn niche_count(&self, chat: ChatId) -> Option<usize> {
        let sessions = self.sessions.lock().await;
        sessions.get(&chat).map(ConversationState::niche_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AudienceProfile, EngagementMetrics, Level};

    fn niche(name: &str) -> NicheProfile {
        NicheProfile {
            name: name.to_string(),
            avg_engagement_rate: 4.0,
            growth_rate: 2.0,
            monetization_level: Level::Medium,
            competition_level: Level::Medium,
            audience: AudienceProfile {
                age_range: "20-40".to_string(),
                interests: vec!["Testing".to_string()],
                activity_pattern: "evenings".to_string(),
            },
            engagement_metrics: EngagementMetrics {
                views_per_subscriber: 0.2,
                forwards_per_view: 0.02,
                comments_per_view: 0.005,
            },
            content_recommendations: vec!["Write tests".to_string()],
            optimal_posting_time: "09:00-11:00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_niche_resolution() {
        let store = SessionStore::new();
        let chat = ChatId(1);
        store.remember_niches(chat, vec![niche("News"), niche("Tech")]).await;

        assert_eq!(store.niche_at(chat, 0).await.unwrap().name, "News");
        assert_eq!(store.niche_at(chat, 1).await.unwrap().name, "Tech");
        assert!(store.niche_at(chat, 2).await.is_none());
    }

    #[tokio::test]
    async fn test_missing_chat_resolves_to_none() {
        let store = SessionStore::new();
        assert!(store.niche_at(ChatId(42), 0).await.is_none());
        assert!(store.niche_count(ChatId(42)).await.is_none());
    }

    /// A fresh fetch replaces the cached list wholesale.
    #[tokio::test]
    async fn test_remember_overwrites() {
        let store = SessionStore::new();
        let chat = ChatId(1);
        store.remember_niches(chat, vec![niche("News"), niche("Tech")]).await;
        store.remember_niches(chat, vec![niche("Food")]).await;

        assert_eq!(store.niche_count(chat).await, Some(1));
        assert_eq!(store.niche_at(chat, 0).await.unwrap().name, "Food");
        assert!(store.niche_at(chat, 1).await.is_none());
    }

    /// Chats do not see each other's cached lists.
    #[tokio::test]
    async fn test_chats_are_isolated() {
        let store = SessionStore::new();
        store.remember_niches(ChatId(1), vec![niche("News")]).await;

        assert!(store.niche_at(ChatId(2), 0).await.is_none());
        assert_eq!(store.niche_at(ChatId(1), 0).await.unwrap().name, "News");
    }
}
