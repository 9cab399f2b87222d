//! Reminder notification domain models.

use chrono::{DateTime, Utc};

/// A user who should receive a notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipient {
    /// ID of the user.
    pub user_id: i32,
    /// Display name of the user.
    pub name: String,
    /// Push token for the user's device, if registered.
    pub push_token: Option<String>,
}

/// A reminder notice for an upcoming training.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderNotice {
    /// ID of the training the reminder is for.
    pub training_id: i32,
    /// Title of the training.
    pub title: String,
    /// When the training starts.
    pub starts_at: DateTime<Utc>,
}

/// Outcome counts for one dispatched notification batch.
///
/// Every recipient resolves into exactly one of the two counters; failures
/// are counted and logged, never dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchSummary {
    /// Recipients the notice was delivered to.
    pub delivered: u32,
    /// Recipients the dispatch failed for.
    pub failed: u32,
}
