//! Session store: owns every chat's [`ChatSession`] behind its own lock.
//!
//! Events of one chat are serialized by that chat's mutex; different chats never contend.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use crate::state::ChatSession;

/// Per-chat session storage, injected into [`crate::StorefrontHandler`].
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the chat's session, creating an empty one on first contact.
    async fn session(&self, chat_id: i64) -> Arc<Mutex<ChatSession>>;
    /// Drops the chat's session. Returns whether one existed.
    async fn remove(&self, chat_id: i64) -> bool;
    /// Number of chats with a session.
    async fn len(&self) -> usize;
}

/// Process-memory store; a restart loses every in-progress order.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<i64, Arc<Mutex<ChatSession>>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn session(&self, chat_id: i64) -> Arc<Mutex<ChatSession>> {
        if let Some(session) = self.sessions.read().await.get(&chat_id) {
            return session.clone();
        }
        self.sessions
            .write()
            .await
            .entry(chat_id)
            .or_insert_with(|| Arc::new(Mutex::new(ChatSession::new())))
            .clone()
    }

    async fn remove(&self, chat_id: i64) -> bool {
        self.sessions.write().await.remove(&chat_id).is_some()
    }

    async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
