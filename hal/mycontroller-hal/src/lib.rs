//! My Controller Hardware Abstraction Layer
//!
//! This crate defines the transport traits that a board crate implements
//! for each link to the remote app. The command engine only ever sees
//! complete text lines; byte buffering, delimiters and radio/USB bring-up
//! belong to the implementations.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  mycontroller-core (dispatch, handshake)│
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  mycontroller-hal (this crate - traits) │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  BLE UART     │       │  USB serial   │
//! │  service      │       │               │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`line::LineTx`], [`line::LineRx`] - Line-oriented communication
//! - [`line::LineTransport`] - A link that can be started and used both ways

#![no_std]
#![deny(unsafe_code)]

pub mod line;

pub use line::{LineRx, LineTransport, LineTx, LinkEvent, LinkKind};
