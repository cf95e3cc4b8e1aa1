//! Input Handler: window events mapped to scene actions.
//!
//! # Invariants
//! - The whole pending queue is drained once per frame, in arrival order.
//! - A quit request ends the drain; nothing after it is applied.
//! - Windowing backends translate their own key codes into [`Key`]; this crate
//!   never depends on one.

pub mod action;
pub mod handler;
pub mod key;

pub use action::{Action, binding};
pub use handler::{InputHandler, LoopControl};
pub use key::{InputEvent, Key, ParseKeyError, parse_key_script};
