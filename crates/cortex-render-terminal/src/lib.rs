//! Terminal capability detection and output surfaces for the Cortex renderer.
//!
//! This crate provides:
//!
//! - **Capability Detection**: environment-driven snapshot of color depth,
//!   graphics protocol, Unicode and input features
//! - **Quality Tiers**: the single ordered knob every renderer decision keys on
//! - **Surfaces**: an in-memory cell grid and a direct-write TTY surface
//! - **Backends**: raw ANSI and crossterm transports
//!
//! # Example
//!
//! ```
//! use cortex_render_terminal::{Capabilities, MapEnv, QualityTier};
//!
//! let env = MapEnv::new().with("TERM", "xterm-256color");
//! let caps = Capabilities::detect_with(&env);
//! assert_eq!(QualityTier::from_capabilities(&caps), QualityTier::Standard);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod backend;
pub mod capabilities;
pub mod env;
pub mod surface;
pub mod tier;

pub use backend::{AnsiBackend, CrosstermBackend, TerminalBackend};
pub use capabilities::{Capabilities, CapabilityQuery, GraphicsProtocol, NoQuery};
pub use env::{EnvReader, MapEnv, ProcessEnv};
pub use surface::{
    Cell, DirtySpan, MemorySurface, Surface, TtySurface, UNSUPPORTED_SNAPSHOT, WIDE_CONTINUATION,
};
pub use tier::{QualityTier, UnknownTier};
