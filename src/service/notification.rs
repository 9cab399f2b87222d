//! Notification dispatch seam.
//!
//! Reminder delivery goes through the [`NotificationDispatch`] trait so the
//! transport is an injected dependency of the scheduler rather than something
//! resolved from ambient state. The shipped implementation only logs; a push
//! or email transport plugs in behind the same trait without touching the
//! reminder pipeline.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::notification::{Recipient, ReminderNotice};

/// A single recipient could not be notified.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct DispatchError(pub String);

/// Transport boundary for outgoing notifications.
///
/// One call per recipient; the caller collects the per-recipient outcomes
/// into a batch summary. Implementations must not panic on delivery failure.
#[async_trait]
pub trait NotificationDispatch: Send + Sync {
    /// Delivers one notice to one recipient.
    ///
    /// # Arguments
    /// - `recipient` - The user to notify
    /// - `notice` - The reminder notice to deliver
    ///
    /// # Returns
    /// - `Ok(())` - The notice was handed to the transport
    /// - `Err(DispatchError)` - Delivery failed for this recipient
    async fn send(&self, recipient: &Recipient, notice: &ReminderNotice)
        -> Result<(), DispatchError>;
}

/// Dispatch implementation that logs deliveries instead of sending them.
///
/// Recipients without a registered push token fail, so batch summaries carry
/// realistic delivered/failed counts even with no real transport attached.
pub struct LoggingDispatch;

#[async_trait]
impl NotificationDispatch for LoggingDispatch {
    async fn send(
        &self,
        recipient: &Recipient,
        notice: &ReminderNotice,
    ) -> Result<(), DispatchError> {
        let Some(token) = recipient.push_token.as_deref() else {
            return Err(DispatchError(format!(
                "user {} has no push token registered",
                recipient.user_id
            )));
        };

        tracing::info!(
            "Reminder for training {} ({}) at {} -> user {} via token {}",
            notice.training_id,
            notice.title,
            notice.starts_at,
            recipient.user_id,
            token
        );

        Ok(())
    }
}
