//! # Shared Bus - Ledger Notification Stream
//!
//! Carries ledger notifications from the wave ledger to any number of
//! subscribers (UI layers, indexers, loggers).
//!
//! ```text
//! ┌──────────────┐                    ┌──────────────┐
//! │ Wave Ledger  │                    │  Subscriber  │
//! │              │    publish()       │   (UI etc.)  │
//! │              │ ──────┐            │              │
//! └──────────────┘       │            └──────────────┘
//!                        ▼                    ↑
//!                  ┌──────────────┐          │
//!                  │  Event Bus   │          │
//!                  │              │ ─────────┘
//!                  └──────────────┘  subscribe()
//! ```
//!
//! ## Delivery
//!
//! - Best-effort: publishing with no subscribers drops the event.
//! - A subscriber that falls more than the channel capacity behind skips the
//!   oldest events and keeps going.
//! - Dropping a `Subscription` unsubscribes.

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::{EventFilter, EventTopic, LedgerEvent};
pub use publisher::{EventPublisher, InMemoryEventBus};
pub use subscriber::{EventStream, Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before the oldest are skipped.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;
