//! # TexKit Core
//!
//! Core types shared across the TexKit workspace:
//! - 2D geometry primitives in image-surface space (`Vec2`, displacement
//!   projection, point-in-quadrilateral containment)
//! - The editor error taxonomy
//! - The shared-state alias for cross-thread hosts

pub mod error;
pub mod geometry;
pub mod types;

pub use error::{EditorError, Result};
pub use geometry::{point_in_quad, point_on_edge, Vec2};
pub use types::{thread_safe, ThreadSafe};
