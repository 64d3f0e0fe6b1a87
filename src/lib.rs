//! # ChannelScope Telegram Bot
//!
//! A Telegram bot serving Telegram-channel analytics through an inline
//! button menu: top channels, best posts, niche breakdowns, trend
//! reports, and advice for starting a new channel. Reports come from a
//! [`provider::AnalyticsProvider`], fetched on demand, formatted into
//! plain-text messages, and split to fit Telegram's message limit.

pub mod advice;
pub mod bot;
pub mod config;
pub mod format;
pub mod instance_lock;
pub mod menu;
pub mod messages;
pub mod model;
pub mod paginate;
pub mod provider;
pub mod state;
