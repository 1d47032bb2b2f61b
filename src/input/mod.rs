//! Input handling for the landing page.
//!
//! - `pointer`: normalized pointer tracking shared with the background animator

pub mod pointer;

pub use pointer::{normalize, pointer_context, PointerReader, PointerState, PointerTracker, PointerWriter};
