use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    error::AppError,
    model::notification::{Recipient, ReminderNotice},
    service::{
        notification::{DispatchError, NotificationDispatch},
        reminder::{ReminderService, REMINDER_KIND},
    },
};


/// Dispatch double that records deliveries and fails on request.
struct RecordingDispatch {
    sent: Mutex<Vec<(i32, i32)>>,
    fail_user_ids: Vec<i32>,
}

impl RecordingDispatch {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail_user_ids: Vec::new(),
        })
    }

    fn failing_for(user_ids: Vec<i32>) -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail_user_ids: user_ids,
        })
    }

    /// Recorded (training_id, user_id) pairs in dispatch order.
    fn sent(&self) -> Vec<(i32, i32)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationDispatch for RecordingDispatch {
    async fn send(
        &self,
        recipient: &Recipient,
        notice: &ReminderNotice,
    ) -> Result<(), DispatchError> {
        if self.fail_user_ids.contains(&recipient.user_id) {
            return Err(DispatchError(format!(
                "simulated failure for user {}",
                recipient.user_id
            )));
        }

        self.sent
            .lock()
            .unwrap()
            .push((notice.training_id, recipient.user_id));

        Ok(())
    }
}
