//! Chat session manager use case.
//!
//! [`ChatSession`] owns the in-memory thread list, the active-thread pointer,
//! and the request lifecycle of the current turn. It composes the two ports:
//! the [`CompletionGateway`] for the remote backend and the [`HistoryStore`]
//! for durable history.
//!
//! # Turn lifecycle
//!
//! ```text
//! Idle → Sending (pending_request = true) → {Resolved | Failed} → Idle
//! ```
//!
//! Gateway failures never propagate out of
//! [`send_message()`](ChatSession::send_message): each is
//! converted into a normal assistant message so a failed turn keeps its
//! place in the conversation. The optimistically appended user message is
//! never rolled back on failure.

use crate::ports::completion_gateway::{CompletionGateway, CompletionRequest, Turn};
use crate::ports::history_store::HistoryStore;
use haichat_domain::{Draft, Message, Thread, ThreadSummary};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Fixed system instruction prepended to every completion request.
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful, friendly AI assistant. \
Respond in a conversational and helpful manner. \
Use emojis occasionally to be more engaging.";

/// Number of most-recent prior messages sent as context with each turn.
/// Older context is silently dropped, not summarized.
const DEFAULT_HISTORY_WINDOW: usize = 10;

/// Errors surfaced to the presentation layer by session commands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Blank text with no attachments. Treated as a silent no-op.
    #[error("nothing to send")]
    EmptyInput,

    /// Referenced thread id does not exist.
    #[error("no thread with id {0}")]
    NotFound(String),

    /// A turn is already in flight; a second send is rejected rather than
    /// queued or raced.
    #[error("a request is already in flight")]
    RequestPending,
}

/// Conversation session manager.
///
/// Explicitly owned and injectable: constructed at process start with its
/// two ports, it loads persisted threads once and persists after every
/// mutation that adds or removes a thread or appends a message.
pub struct ChatSession {
    gateway: Arc<dyn CompletionGateway>,
    store: Arc<dyn HistoryStore>,
    threads: Vec<Thread>,
    active_thread_id: Option<String>,
    buffer: Vec<Message>,
    pending_request: bool,
    history_window: usize,
}

impl ChatSession {
    /// Create a session manager, loading persisted threads from the store.
    pub fn new(gateway: Arc<dyn CompletionGateway>, store: Arc<dyn HistoryStore>) -> Self {
        let threads = store.load().unwrap_or_default();
        if !threads.is_empty() {
            info!("Loaded {} persisted thread(s)", threads.len());
        }
        Self {
            gateway,
            store,
            threads,
            active_thread_id: None,
            buffer: Vec::new(),
            pending_request: false,
            history_window: DEFAULT_HISTORY_WINDOW,
        }
    }

    /// Override the prior-turn context window (default 10).
    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window;
        self
    }

    // ==================== Observable state ====================

    /// The message sequence currently shown (working buffer).
    pub fn messages(&self) -> &[Message] {
        &self.buffer
    }

    /// True while a completion request is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending_request
    }

    /// Newest-first thread list for sidebar rendering.
    pub fn thread_summaries(&self) -> Vec<ThreadSummary> {
        self.threads.iter().map(Thread::summary).collect()
    }

    pub fn active_thread_id(&self) -> Option<&str> {
        self.active_thread_id.as_deref()
    }

    // ==================== Commands ====================

    /// Start a fresh session.
    ///
    /// Any unsaved buffer content is flushed into the active thread's stored
    /// record first, then the active pointer and working buffer are cleared.
    /// No backend call; idempotent when already on a fresh session.
    pub fn start_new_session(&mut self) {
        self.flush_buffer();
        self.buffer.clear();
        self.active_thread_id = None;
        debug!("Started fresh session");
    }

    /// Make an existing thread active and load its messages into the buffer.
    pub fn select_session(&mut self, thread_id: &str) -> Result<(), SessionError> {
        let thread = self
            .threads
            .iter()
            .find(|t| t.id() == thread_id)
            .ok_or_else(|| SessionError::NotFound(thread_id.to_string()))?;
        self.buffer = thread.messages().to_vec();
        self.active_thread_id = Some(thread_id.to_string());
        debug!("Selected thread {}", thread_id);
        Ok(())
    }

    /// Delete a thread. Idempotent: deleting an absent id is a no-op.
    ///
    /// If the deleted thread was active, the session resets to the fresh
    /// state. An emptied list removes the persisted record entirely instead
    /// of storing an empty list.
    pub fn delete_session(&mut self, thread_id: &str) {
        let before = self.threads.len();
        self.threads.retain(|t| t.id() != thread_id);
        if self.threads.len() == before {
            return;
        }

        if self.threads.is_empty() {
            self.store.clear();
        } else {
            self.store.save(&self.threads);
        }

        if self.active_thread_id.as_deref() == Some(thread_id) {
            self.buffer.clear();
            self.active_thread_id = None;
        }
        info!("Deleted thread {}", thread_id);
    }

    /// Send a user turn and apply the backend's reply (or its failure text).
    ///
    /// The user message is appended optimistically before the network round
    /// trip and is never removed, even when the turn fails. Exactly one user
    /// and one assistant message are appended per call that reaches the
    /// gateway, and `pending_request` returns to `false` on every path.
    pub async fn send_message(
        &mut self,
        text: &str,
        attachments: Vec<String>,
    ) -> Result<(), SessionError> {
        let draft = Draft::new(text, attachments);
        if draft.is_empty() {
            return Err(SessionError::EmptyInput);
        }
        if self.pending_request {
            return Err(SessionError::RequestPending);
        }

        // Context is captured before the optimistic append: the new turn
        // travels as `new_user_text`, not as part of the history.
        let prior_turns = self.recent_turns();

        self.buffer.push(Message::user(draft.display_content()));
        self.pending_request = true;

        // First turn of a fresh session lazily creates the thread. An
        // attachment-only turn has blank wire text, so the display content
        // (the annotation) names the thread instead.
        if self.active_thread_id.is_none() {
            let title_source = if draft.wire_text().is_empty() {
                draft.display_content()
            } else {
                draft.wire_text().to_string()
            };
            let thread = Thread::new(&title_source, self.buffer.clone());
            self.active_thread_id = Some(thread.id().to_string());
            info!("Created thread '{}' ({})", thread.title(), thread.id());
            self.threads.insert(0, thread);
        }

        let request = CompletionRequest {
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            prior_turns,
            new_user_text: draft.wire_text().to_string(),
        };

        debug!(
            "Sending turn with {} prior message(s)",
            request.prior_turns.len()
        );

        let reply = match self.gateway.complete(&request).await {
            Ok(text) => text,
            Err(err) => {
                warn!("Completion request failed: {}", err);
                err.user_facing_text()
            }
        };

        self.buffer.push(Message::assistant(reply));
        self.sync_active_thread();
        self.store.save(&self.threads);
        self.pending_request = false;
        Ok(())
    }

    // ==================== Internals ====================

    /// The most recent `history_window` buffer messages as wire turns.
    fn recent_turns(&self) -> Vec<Turn> {
        let skip = self.buffer.len().saturating_sub(self.history_window);
        self.buffer[skip..]
            .iter()
            .map(|m| Turn {
                role: m.role.into(),
                content: m.content.clone(),
            })
            .collect()
    }

    /// Copy the working buffer into the active thread's stored record.
    fn sync_active_thread(&mut self) {
        let Some(id) = self.active_thread_id.clone() else {
            return;
        };
        if let Some(thread) = self.threads.iter_mut().find(|t| t.id() == id) {
            thread.update_messages(self.buffer.clone());
        }
    }

    /// Write back (and persist) the buffer if it diverged from the active
    /// thread's stored copy. Every send already syncs, so this only fires
    /// when a mutation slipped past the normal path.
    fn flush_buffer(&mut self) {
        let Some(id) = self.active_thread_id.clone() else {
            return;
        };
        let diverged = self
            .threads
            .iter()
            .find(|t| t.id() == id)
            .is_some_and(|t| t.messages().len() != self.buffer.len());
        if diverged {
            self.sync_active_thread();
            self.store.save(&self.threads);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::completion_gateway::GatewayError;
    use crate::ports::history_store::NoHistoryStore;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct MockGateway {
        responses: Mutex<VecDeque<Result<String, GatewayError>>>,
        requests: Mutex<Vec<CompletionRequest>>,
    }

    impl MockGateway {
        fn new(responses: Vec<Result<String, GatewayError>>) -> Self {
            Self {
                responses: Mutex::new(VecDeque::from(responses)),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn replying(text: &str) -> Self {
            Self::new(vec![Ok(text.to_string())])
        }

        fn requests(&self) -> Vec<CompletionRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CompletionGateway for MockGateway {
        async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
            self.requests.lock().unwrap().push(request.clone());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Transport("no scripted response".into())))
        }
    }

    #[derive(Default)]
    struct MockStore {
        initial: Option<Vec<Thread>>,
        saves: Mutex<Vec<Vec<Thread>>>,
        clears: Mutex<usize>,
    }

    impl MockStore {
        fn seeded(threads: Vec<Thread>) -> Self {
            Self {
                initial: Some(threads),
                ..Default::default()
            }
        }

        fn save_count(&self) -> usize {
            self.saves.lock().unwrap().len()
        }

        fn clear_count(&self) -> usize {
            *self.clears.lock().unwrap()
        }

        fn last_saved(&self) -> Option<Vec<Thread>> {
            self.saves.lock().unwrap().last().cloned()
        }
    }

    impl HistoryStore for MockStore {
        fn load(&self) -> Option<Vec<Thread>> {
            self.initial.clone()
        }

        fn save(&self, threads: &[Thread]) {
            self.saves.lock().unwrap().push(threads.to_vec());
        }

        fn clear(&self) {
            *self.clears.lock().unwrap() += 1;
        }
    }

    fn session_with(
        gateway: Arc<MockGateway>,
        store: Arc<MockStore>,
    ) -> ChatSession {
        ChatSession::new(gateway, store)
    }

    fn seeded_thread(message_count: usize) -> Thread {
        let mut messages = Vec::new();
        for i in 0..message_count {
            if i % 2 == 0 {
                messages.push(Message::user(format!("question {i}")));
            } else {
                messages.push(Message::assistant(format!("answer {i}")));
            }
        }
        Thread::new("question 0", messages)
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn fresh_session_send_creates_titled_thread_at_front() {
        let gateway = Arc::new(MockGateway::replying("Recursion is..."));
        let store = Arc::new(MockStore::default());
        let mut session = session_with(gateway.clone(), store.clone());

        session
            .send_message("Explain recursion", vec![])
            .await
            .unwrap();

        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[0].content, "Explain recursion");
        assert_eq!(session.messages()[1].content, "Recursion is...");
        assert!(!session.is_pending());

        let summaries = session.thread_summaries();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].title, "Explain recursion");
        assert_eq!(session.active_thread_id(), Some(summaries[0].id.as_str()));

        // Stored copy carries both messages
        let saved = store.last_saved().unwrap();
        assert_eq!(saved[0].messages().len(), 2);
    }

    #[tokio::test]
    async fn second_thread_is_inserted_at_index_zero() {
        let gateway = Arc::new(MockGateway::new(vec![
            Ok("first reply".to_string()),
            Ok("second reply".to_string()),
        ]));
        let store = Arc::new(MockStore::default());
        let mut session = session_with(gateway, store);

        session.send_message("first topic", vec![]).await.unwrap();
        session.start_new_session();
        session.send_message("second topic", vec![]).await.unwrap();

        let summaries = session.thread_summaries();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].title, "second topic");
        assert_eq!(summaries[1].title, "first topic");
    }

    #[tokio::test]
    async fn blank_send_is_a_silent_noop() {
        let gateway = Arc::new(MockGateway::replying("unused"));
        let store = Arc::new(MockStore::default());
        let mut session = session_with(gateway.clone(), store.clone());

        let result = session.send_message("   \n", vec![]).await;

        assert_eq!(result, Err(SessionError::EmptyInput));
        assert!(session.messages().is_empty());
        assert!(session.thread_summaries().is_empty());
        assert!(!session.is_pending());
        assert!(gateway.requests().is_empty());
        assert_eq!(store.save_count(), 0);
    }

    #[tokio::test]
    async fn send_while_pending_is_rejected() {
        let gateway = Arc::new(MockGateway::replying("unused"));
        let store = Arc::new(MockStore::default());
        let mut session = session_with(gateway.clone(), store);

        session.pending_request = true;
        let result = session.send_message("hello", vec![]).await;

        assert_eq!(result, Err(SessionError::RequestPending));
        assert!(session.messages().is_empty());
        assert!(gateway.requests().is_empty());
    }

    #[tokio::test]
    async fn attachment_annotation_is_stored_but_not_sent() {
        let gateway = Arc::new(MockGateway::replying("Nice diagram!"));
        let store = Arc::new(MockStore::default());
        let mut session = session_with(gateway.clone(), store);

        session
            .send_message("Hi", vec!["diagram.png".to_string()])
            .await
            .unwrap();

        assert_eq!(
            session.messages()[0].content,
            "Hi\n\n📎 Attached: diagram.png"
        );
        let requests = gateway.requests();
        assert_eq!(requests[0].new_user_text, "Hi");
    }

    #[tokio::test]
    async fn attachment_only_send_reaches_the_gateway() {
        let gateway = Arc::new(MockGateway::replying("Got the file."));
        let store = Arc::new(MockStore::default());
        let mut session = session_with(gateway.clone(), store);

        session
            .send_message("", vec!["notes.txt".to_string()])
            .await
            .unwrap();

        assert_eq!(session.messages()[0].content, "📎 Attached: notes.txt");
        assert_eq!(session.thread_summaries()[0].title, "📎 Attached: notes.txt");
        assert_eq!(gateway.requests().len(), 1);
    }

    #[tokio::test]
    async fn backend_error_becomes_assistant_message_and_persists() {
        let gateway = Arc::new(MockGateway::new(vec![Err(GatewayError::Backend {
            status: 500,
            message: "rate limited".to_string(),
        })]));
        let store = Arc::new(MockStore::default());
        let mut session = session_with(gateway, store.clone());

        session.send_message("hello", vec![]).await.unwrap();

        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[0].content, "hello");
        assert_eq!(session.messages()[1].content, "rate limited");
        assert!(!session.is_pending());

        let saved = store.last_saved().unwrap();
        assert_eq!(saved[0].messages()[1].content, "rate limited");
    }

    #[tokio::test]
    async fn transport_error_keeps_optimistic_user_message() {
        let gateway = Arc::new(MockGateway::new(vec![Err(GatewayError::Transport(
            "connection reset".to_string(),
        ))]));
        let store = Arc::new(MockStore::default());
        let mut session = session_with(gateway, store);

        session.send_message("hello", vec![]).await.unwrap();

        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[0].content, "hello");
        assert_eq!(
            session.messages()[1].content,
            "Sorry, something went wrong. Please try again."
        );
        assert!(!session.is_pending());
    }

    #[tokio::test]
    async fn configuration_error_renders_setup_instruction() {
        let gateway = Arc::new(MockGateway::new(vec![Err(GatewayError::Configuration(
            "missing key".to_string(),
        ))]));
        let store = Arc::new(MockStore::default());
        let mut session = session_with(gateway, store);

        session.send_message("hello", vec![]).await.unwrap();

        assert!(
            session.messages()[1]
                .content
                .contains("API key not configured")
        );
    }

    #[tokio::test]
    async fn history_window_caps_prior_turns() {
        let thread = seeded_thread(12);
        let thread_id = thread.id().to_string();
        let gateway = Arc::new(MockGateway::replying("reply"));
        let store = Arc::new(MockStore::seeded(vec![thread]));
        let mut session = session_with(gateway.clone(), store);

        session.select_session(&thread_id).unwrap();
        session.send_message("one more", vec![]).await.unwrap();

        let request = &gateway.requests()[0];
        assert_eq!(request.prior_turns.len(), 10);
        // The two oldest messages fell out of the window
        assert_eq!(request.prior_turns[0].content, "question 2");
        assert_eq!(request.new_user_text, "one more");

        // ...but stay visible in the rendered thread
        assert_eq!(session.messages().len(), 14);
        assert_eq!(session.messages()[0].content, "question 0");
    }

    #[tokio::test]
    async fn short_history_sends_all_prior_turns() {
        let gateway = Arc::new(MockGateway::new(vec![
            Ok("first".to_string()),
            Ok("second".to_string()),
        ]));
        let store = Arc::new(MockStore::default());
        let mut session = session_with(gateway.clone(), store);

        session.send_message("hello", vec![]).await.unwrap();
        session.send_message("again", vec![]).await.unwrap();

        let requests = gateway.requests();
        assert!(requests[0].prior_turns.is_empty());
        assert_eq!(requests[1].prior_turns.len(), 2);
        assert_eq!(requests[1].prior_turns[0].content, "hello");
        assert_eq!(requests[1].prior_turns[1].content, "first");
    }

    #[tokio::test]
    async fn every_request_carries_the_system_instruction() {
        let gateway = Arc::new(MockGateway::replying("ok"));
        let store = Arc::new(MockStore::default());
        let mut session = session_with(gateway.clone(), store);

        session.send_message("hello", vec![]).await.unwrap();

        assert_eq!(gateway.requests()[0].system_instruction, SYSTEM_INSTRUCTION);
    }

    #[tokio::test]
    async fn select_unknown_thread_is_not_found() {
        let store = Arc::new(MockStore::default());
        let mut session = session_with(Arc::new(MockGateway::replying("unused")), store);

        let result = session.select_session("missing");
        assert_eq!(result, Err(SessionError::NotFound("missing".to_string())));
    }

    #[tokio::test]
    async fn select_loads_stored_messages_into_buffer() {
        let thread = seeded_thread(4);
        let thread_id = thread.id().to_string();
        let store = Arc::new(MockStore::seeded(vec![thread]));
        let mut session = session_with(Arc::new(MockGateway::replying("unused")), store);

        session.select_session(&thread_id).unwrap();

        assert_eq!(session.messages().len(), 4);
        assert_eq!(session.active_thread_id(), Some(thread_id.as_str()));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let thread = seeded_thread(2);
        let thread_id = thread.id().to_string();
        let store = Arc::new(MockStore::seeded(vec![thread, seeded_thread(2)]));
        let mut session = session_with(Arc::new(MockGateway::replying("unused")), store.clone());

        session.delete_session(&thread_id);
        let after_first = session.thread_summaries();
        session.delete_session(&thread_id);

        assert_eq!(session.thread_summaries(), after_first);
        assert_eq!(after_first.len(), 1);
        assert_eq!(store.save_count(), 1);
    }

    #[tokio::test]
    async fn deleting_last_thread_clears_the_record() {
        let thread = seeded_thread(2);
        let thread_id = thread.id().to_string();
        let store = Arc::new(MockStore::seeded(vec![thread]));
        let mut session = session_with(Arc::new(MockGateway::replying("unused")), store.clone());

        session.delete_session(&thread_id);

        assert_eq!(store.clear_count(), 1);
        assert_eq!(store.save_count(), 0);
    }

    #[tokio::test]
    async fn deleting_active_thread_resets_to_fresh_session() {
        let thread = seeded_thread(4);
        let thread_id = thread.id().to_string();
        let store = Arc::new(MockStore::seeded(vec![thread]));
        let mut session = session_with(Arc::new(MockGateway::replying("unused")), store);

        session.select_session(&thread_id).unwrap();
        session.delete_session(&thread_id);

        assert!(session.messages().is_empty());
        assert_eq!(session.active_thread_id(), None);
    }

    #[tokio::test]
    async fn deleting_inactive_thread_keeps_the_buffer() {
        let active = seeded_thread(4);
        let other = seeded_thread(2);
        let active_id = active.id().to_string();
        let other_id = other.id().to_string();
        let store = Arc::new(MockStore::seeded(vec![active, other]));
        let mut session = session_with(Arc::new(MockGateway::replying("unused")), store);

        session.select_session(&active_id).unwrap();
        session.delete_session(&other_id);

        assert_eq!(session.messages().len(), 4);
        assert_eq!(session.active_thread_id(), Some(active_id.as_str()));
    }

    #[tokio::test]
    async fn start_new_session_is_idempotent_when_fresh() {
        let store = Arc::new(MockStore::default());
        let mut session = session_with(Arc::new(MockGateway::replying("unused")), store.clone());

        session.start_new_session();
        session.start_new_session();

        assert!(session.messages().is_empty());
        assert_eq!(session.active_thread_id(), None);
        assert_eq!(store.save_count(), 0);
    }

    #[tokio::test]
    async fn start_new_session_clears_active_state() {
        let gateway = Arc::new(MockGateway::replying("reply"));
        let store = Arc::new(MockStore::default());
        let mut session = session_with(gateway, store);

        session.send_message("hello", vec![]).await.unwrap();
        session.start_new_session();

        assert!(session.messages().is_empty());
        assert_eq!(session.active_thread_id(), None);
        // The thread itself survives
        assert_eq!(session.thread_summaries().len(), 1);
    }

    #[tokio::test]
    async fn threads_load_once_at_construction() {
        let store = Arc::new(MockStore::seeded(vec![seeded_thread(2), seeded_thread(4)]));
        let session = session_with(Arc::new(MockGateway::replying("unused")), store);

        assert_eq!(session.thread_summaries().len(), 2);
        assert_eq!(session.active_thread_id(), None);
        assert!(session.messages().is_empty());
    }

    #[tokio::test]
    async fn exactly_one_turn_pair_per_send_across_paths() {
        let gateway = Arc::new(MockGateway::new(vec![
            Ok("fine".to_string()),
            Err(GatewayError::Backend {
                status: 429,
                message: "slow down".to_string(),
            }),
            Err(GatewayError::Transport("timeout".to_string())),
        ]));
        let store = Arc::new(MockStore::default());
        let mut session = session_with(gateway, store);

        for text in ["a", "b", "c"] {
            session.send_message(text, vec![]).await.unwrap();
            assert!(!session.is_pending());
        }

        // Three turns: user/assistant strictly alternating
        assert_eq!(session.messages().len(), 6);
        for (i, message) in session.messages().iter().enumerate() {
            let expected = if i % 2 == 0 {
                haichat_domain::Role::User
            } else {
                haichat_domain::Role::Assistant
            };
            assert_eq!(message.role, expected);
        }
    }

    #[tokio::test]
    async fn null_store_supports_ephemeral_sessions() {
        let gateway = Arc::new(MockGateway::replying("reply"));
        let mut session = ChatSession::new(gateway, Arc::new(NoHistoryStore));

        session.send_message("hello", vec![]).await.unwrap();

        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.thread_summaries().len(), 1);
    }

    #[tokio::test]
    async fn custom_history_window_is_honored() {
        let gateway = Arc::new(MockGateway::new(vec![
            Ok("r1".to_string()),
            Ok("r2".to_string()),
            Ok("r3".to_string()),
        ]));
        let store = Arc::new(MockStore::default());
        let mut session =
            ChatSession::new(gateway.clone(), store).with_history_window(2);

        session.send_message("one", vec![]).await.unwrap();
        session.send_message("two", vec![]).await.unwrap();
        session.send_message("three", vec![]).await.unwrap();

        let last = gateway.requests().pop().unwrap();
        assert_eq!(last.prior_turns.len(), 2);
        assert_eq!(last.prior_turns[0].content, "two");
        assert_eq!(last.prior_turns[1].content, "r2");
    }
}
