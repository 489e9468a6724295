//! Setup handshake
//!
//! Lets the device push its button layout when the app connects. Driven by
//! reserved command keys arriving through the normal dispatch path.
//!
//! ```text
//!  app                         device
//!   │ -v                          │
//!   │ ──────────────────────────▶ │  Require:   vc;hasSettings;1;
//!   │ ◀────────────────────────── │  NoRequire: apply (below)
//!   │ getSettings                 │
//!   │ ──────────────────────────▶ │
//!   │ ◀── vc;loader;1; ────────── │
//!   │ ◀── vc;b;... (setup code) ─ │
//!   │ ◀── vc;loader;0; ────────── │
//! ```

pub mod events;
pub mod machine;

pub use events::SetupEvent;
pub use machine::{SetupAction, SetupState};
