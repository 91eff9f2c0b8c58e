//! # Event Bus Module
//!
//! Decoupled notification from the floor-map editor to the view layer.
//!
//! ## Overview
//!
//! - The editor publishes typed events without knowing who listens
//! - Subscribers filter by category and receive clones of the event
//! - Delivery is synchronous, inside the call that caused the change
//!
//! ## Usage
//!
//! ```rust,ignore
//! use deskhive_core::event_bus::{EditorEvent, EventBus, EventCategory, EventFilter};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Notification]),
//!     |event| {
//!         if let EditorEvent::Notification(toast) = event {
//!             println!("{}", toast.message);
//!         }
//!     },
//! );
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
