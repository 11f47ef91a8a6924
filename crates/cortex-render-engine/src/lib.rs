//! Rendering engine for the Cortex renderer.
//!
//! Ties the lower crates together:
//!
//! - [`Renderer`]: owns a surface, theme and capability snapshot, routes input
//!   to widgets, paints them by z-index and renders cached markdown and code
//! - [`RenderCache`]: LRU of rendered content keyed by hash and tier
//! - [`RenderScheduler`]: frame loop with dirty-span repainting and an FPS cap
//!
//! # Example
//!
//! ```
//! use cortex_render_engine::Renderer;
//! use cortex_render_terminal::{MemorySurface, QualityTier};
//! use cortex_render_theme::Theme;
//!
//! let mut renderer = Renderer::new(MemorySurface::new(20, 4), Theme::default());
//! assert_eq!(renderer.tier(), QualityTier::Minimal);
//! assert_eq!(renderer.render_markdown("# Title"), "# Title");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod cache;
pub mod renderer;
pub mod scheduler;

pub use cache::{CacheEntry, CacheStats, DEFAULT_CACHE_CAPACITY, RenderCache, content_hash};
pub use renderer::{ContentSettings, Renderer};
pub use scheduler::{Compose, DEFAULT_MAX_FPS, FramePacer, RenderScheduler};
