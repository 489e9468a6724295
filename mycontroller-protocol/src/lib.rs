//! My Controller line protocol
//!
//! This crate defines the text protocol spoken between the remote
//! controller app and the device, over either a BLE UART service or a
//! WebUSB serial port. Every message is one ASCII line.
//!
//! # Protocol Overview
//!
//! Inbound (app → device):
//! ```text
//! sr=42        value update for key "sr"
//! a            key "a" pressed
//! !a           key "a" released
//! none         every key released
//! ```
//!
//! Outbound (device → app) configuration lines all start with `vc;`:
//! ```text
//! vc;init;                         reset the app layout
//! vc;b;<code>;<vis>;<color>;<lbl>  define or update a button
//! vc;hasSettings;1;                device has settings to push
//! vc;loader;1;  …  vc;loader;0;    brackets a settings push
//! ```
//!
//! Framing (delimiters, buffering) belongs to the transport; this crate only
//! sees complete lines.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod inbound;
pub mod keys;
pub mod outbound;
pub mod settings;

pub use inbound::{parse, parse_number, ParsedCommand, MAX_KEY_LEN};
pub use keys::{ButtonName, JoystickAxis, OrientationAxis, ReservedKey, Side};
pub use outbound::{
    ButtonColor, ButtonLabel, ButtonVisibility, ConfigLine, EncodeError, Line, MAX_LINE_LEN,
};
pub use settings::split_settings;
