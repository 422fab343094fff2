//! Notifications emitted when the sort criteria change
//!
//! The engine publishes one [`CriteriaEvent`] after every successful edit so a
//! presentation layer can show a short notice ("Sort Criterion Added") without
//! the engine knowing how it is rendered.
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut rx = engine.subscribe();
//! engine.add_criterion(SortField::Status)?;
//!
//! if let Ok(envelope) = rx.try_recv() {
//!     println!("{}: {}", envelope.event.title(), envelope.event.description());
//! }
//! ```

use crate::core::criteria::{CriterionId, SortDirection};
use crate::core::field::SortField;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

/// A change to the criteria list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CriteriaEvent {
    /// A criterion was appended
    Added { id: CriterionId, field: SortField },
    /// A criterion's direction was flipped
    Toggled {
        id: CriterionId,
        field: SortField,
        direction: SortDirection,
    },
    /// A criterion was removed
    Removed { id: CriterionId, field: SortField },
    /// A criterion was moved to a new priority
    Reordered { from: usize, to: usize },
}

impl CriteriaEvent {
    /// Get the action name (added, toggled, removed, reordered)
    pub fn action(&self) -> &'static str {
        match self {
            CriteriaEvent::Added { .. } => "added",
            CriteriaEvent::Toggled { .. } => "toggled",
            CriteriaEvent::Removed { .. } => "removed",
            CriteriaEvent::Reordered { .. } => "reordered",
        }
    }

    /// Short notice heading
    pub fn title(&self) -> &'static str {
        match self {
            CriteriaEvent::Added { .. } => "Sort Criterion Added",
            CriteriaEvent::Toggled { .. } => "Sort Direction Toggled",
            CriteriaEvent::Removed { .. } => "Sort Criterion Removed",
            CriteriaEvent::Reordered { .. } => "Sort Criteria Reordered",
        }
    }

    /// Notice body
    pub fn description(&self) -> String {
        match self {
            CriteriaEvent::Added { field, .. } => format!("Sorting by {}", field),
            CriteriaEvent::Toggled { field, .. } => {
                format!("Toggled sort direction for {}", field)
            }
            CriteriaEvent::Removed { .. } => "Removed a sort criterion".to_string(),
            CriteriaEvent::Reordered { from, to } => format!("Moved {} to {}", from, to),
        }
    }

    /// Id of the criterion involved, if the event names one
    pub fn criterion_id(&self) -> Option<&CriterionId> {
        match self {
            CriteriaEvent::Added { id, .. }
            | CriteriaEvent::Toggled { id, .. }
            | CriteriaEvent::Removed { id, .. } => Some(id),
            CriteriaEvent::Reordered { .. } => None,
        }
    }
}

/// Envelope wrapping an event with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique event ID
    pub id: Uuid,
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
    /// The actual event
    pub event: CriteriaEvent,
}

impl EventEnvelope {
    pub fn new(event: CriteriaEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            event,
        }
    }
}

/// Broadcast-based event bus
///
/// `send` on a broadcast channel never blocks and needs no runtime, so the
/// engine can publish from plain synchronous code. Receivers poll with
/// `try_recv` or await `recv`.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<EventEnvelope>,
}

impl EventBus {
    /// Create a bus buffering up to `capacity` events per slow receiver
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publish an event to all subscribers
    ///
    /// Returns the number of receivers that will see it. With no
    /// subscribers the event is dropped.
    pub fn publish(&self, event: CriteriaEvent) -> usize {
        self.sender.send(EventEnvelope::new(event)).unwrap_or(0)
    }

    /// Subscribe to future events
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.sender.subscribe()
    }

    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
