// SPDX-License-Identifier: GPL-3.0-only

//! The one-way event channel from the backend to the keyboard.
//!
//! At startup the client calls [`Backend::initialize`] once, handing over the
//! sending half of an unbounded channel. Completion only confirms the channel
//! was registered; every piece of state arrives later as a [`UiEvent`].
//!
//! ```rust,ignore
//! use radboard::channel::{connect, demo_script};
//!
//! let mut backend = demo_script();
//! if let Some(mut events) = connect(&mut backend).await {
//!     while let Some(event) = events.next().await {
//!         println!("{:?}", event);
//!     }
//! }
//! ```

pub mod event;
pub mod script;

use std::future::Future;

use futures::channel::mpsc;

pub use event::UiEvent;
pub use script::{ScriptBackend, ScriptStep, demo_script};

/// Sending half handed to the backend.
pub type EventSender = mpsc::UnboundedSender<UiEvent>;

/// Receiving half consumed by the dispatcher.
pub type EventReceiver = mpsc::UnboundedReceiver<UiEvent>;

/// The external process that owns layout data and input decisions.
pub trait Backend {
    /// Registers the client's event channel with the backend.
    fn initialize(
        &mut self,
        on_event: EventSender,
    ) -> impl Future<Output = BackendResult<()>>;
}

/// Calls [`Backend::initialize`] with a fresh channel.
///
/// Returns the receiving half on success. On failure the error is logged and
/// `None` is returned; the caller stays in its pre-`init` state and nothing
/// is retried.
pub async fn connect<B: Backend>(backend: &mut B) -> Option<EventReceiver> {
    let (tx, rx) = mpsc::unbounded();
    match backend.initialize(tx).await {
        Ok(()) => {
            tracing::info!("Backend channel ready");
            Some(rx)
        }
        Err(e) => {
            tracing::error!("Backend initialization failed: {}", e);
            None
        }
    }
}

/// Result type for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;

/// Errors that can occur while setting up a backend.
#[derive(Debug)]
pub enum BackendError {
    /// The backend refused to register the channel.
    Rejected(String),
    /// The channel was closed before the backend could use it.
    ChannelClosed,
    /// An event script could not be read.
    ScriptIo {
        source: std::io::Error,
        path: Option<String>,
    },
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendError::Rejected(msg) => write!(f, "backend rejected initialization: {}", msg),
            BackendError::ChannelClosed => write!(f, "event channel closed"),
            BackendError::ScriptIo { source, path: Some(path) } => {
                write!(f, "failed to read event script {}: {}", path, source)
            }
            BackendError::ScriptIo { source, path: None } => {
                write!(f, "failed to read event script: {}", source)
            }
        }
    }
}

impl std::error::Error for BackendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BackendError::ScriptIo { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    struct RejectingBackend;

    impl Backend for RejectingBackend {
        async fn initialize(&mut self, _on_event: EventSender) -> BackendResult<()> {
            Err(BackendError::Rejected("no gamepad".to_string()))
        }
    }

    struct EchoBackend(Vec<UiEvent>);

    impl Backend for EchoBackend {
        async fn initialize(&mut self, on_event: EventSender) -> BackendResult<()> {
            for event in self.0.drain(..) {
                on_event
                    .unbounded_send(event)
                    .map_err(|_| BackendError::ChannelClosed)?;
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_connect_failure_yields_no_channel() {
        assert!(connect(&mut RejectingBackend).await.is_none());
    }

    /// Events are delivered in the order the backend sent them.
    #[tokio::test]
    async fn test_connect_delivers_events_in_order() {
        let mut backend = EchoBackend(vec![UiEvent::KeyboardMode(true), UiEvent::KeyPress]);
        let events: Vec<UiEvent> = connect(&mut backend).await.unwrap().collect().await;

        assert_eq!(events, vec![UiEvent::KeyboardMode(true), UiEvent::KeyPress]);
    }

    #[test]
    fn test_backend_error_display() {
        assert!(BackendError::Rejected("x".into()).to_string().contains("rejected"));
        assert!(BackendError::ChannelClosed.to_string().contains("closed"));

        let err = BackendError::ScriptIo {
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            path: Some("events.jsonl".into()),
        };
        assert!(err.to_string().contains("events.jsonl"));
    }
}
