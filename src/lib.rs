// ── Safety policy ────────────────────────────────────────────────────────────
// Unsafe code is forbidden everywhere except `platform::win32` (Win32 FFI).
// Each unsafe block in that module MUST carry a `// SAFETY:` comment.
#![deny(unsafe_code)]

//! A small native desktop demo built around [`Coord`], a 2D coordinate value
//! type with a display form and a Euclidean distance.

pub mod config;
pub mod coord;
pub mod demo;
pub mod error;
pub mod platform;

pub use coord::Coord;
pub use error::{CoordsError, Result};
