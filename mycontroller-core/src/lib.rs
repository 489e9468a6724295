//! Board-agnostic command engine for the My Controller front-end
//!
//! This crate contains everything between "a transport delivered a line"
//! and "a handler reacted to it":
//!
//! - Coalescing queue of pending commands (latest value per key wins)
//! - Pressed-key set and per-key toggle counters
//! - Setup handshake state machine (probe / confirm / apply)
//! - Connection state and outbound fan-out to active links
//! - Controller with a one-key-per-tick dispatch loop
//!
//! Everything is owned by a single [`Controller`]; there is no global state.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

// This mod MUST go first, so that the others see its macros.
#[macro_use]
mod fmt;

pub mod config;
pub mod controller;
pub mod handshake;
pub mod link;
pub mod registry;
pub mod session;
pub mod store;

#[cfg(test)]
mod testing;

pub use config::{ButtonSpec, ConfirmationMode};
pub use controller::Controller;
pub use handshake::{SetupAction, SetupEvent, SetupState};
pub use link::{ConnectionState, LinkError, Links, NoLink, Outbound};
pub use registry::{HandlerRegistry, RegistryError, MAX_HANDLERS};
pub use session::Session;
pub use store::{CurrentCommand, Key, PendingCommands, PressedKeys, StoreError, ToggleStore};
