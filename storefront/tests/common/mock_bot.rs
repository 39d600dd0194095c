//! Mock implementation of [`shop_core::Bot`] for integration tests.
//!
//! Records every sent message and acknowledged callback so tests can assert on them without
//! hitting Telegram. Sends can be switched to fail to exercise delivery errors.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use shop_core::{Bot, Chat, OutboundMessage, Result, ShopError};

/// One recorded call to `send_message(chat, message)`.
#[derive(Debug, Clone)]
pub struct SentRecord {
    pub chat_id: i64,
    pub message: OutboundMessage,
}

#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentRecord>>,
    acks: Mutex<Vec<String>>,
    fail_sends: AtomicBool,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_fail_sends(&self, fail: bool) {
        self.fail_sends.store(fail, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<SentRecord> {
        self.sent.lock().unwrap().clone()
    }

    /// Texts sent so far, oldest first.
    pub fn texts(&self) -> Vec<String> {
        self.sent().into_iter().map(|r| r.message.text).collect()
    }

    pub fn last(&self) -> Option<OutboundMessage> {
        self.sent().pop().map(|r| r.message)
    }

    pub fn acks(&self) -> Vec<String> {
        self.acks.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
        self.acks.lock().unwrap().clear();
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, message: &OutboundMessage) -> Result<()> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(ShopError::Outbound("mock send failure".to_string()));
        }
        self.sent.lock().unwrap().push(SentRecord {
            chat_id: chat.id,
            message: message.clone(),
        });
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<()> {
        self.acks.lock().unwrap().push(callback_id.to_string());
        Ok(())
    }
}
