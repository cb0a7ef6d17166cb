//! Masonry column geometry.
//!
//! Responsive column counts, column widths, margins and horizontal offsets
//! for a masonry-style layout, plus the container height write that follows
//! a placement pass.
//!
//! ## Design
//!
//! ```text
//! Viewport width + MasonryOptions
//!   ↓
//! column_count()  column_margin()      (breakpoint resolution)
//!   ↓                ↓
//! column_width()  →  column_offset()   (CSS lengths per column)
//!   ↓
//! set_container_height()               (tallest column → container)
//! ```
//!
//! Every resolver is a pure function of the injected [`Viewport`] and the
//! options. Results are [`CssLength`] values whose `Display` output is
//! directly usable as an inline style (`100%`, `calc(50% - 8px)`, ...).
//!
//! ## Not Covered Here
//!
//! - Placing items into columns or tracking per-item positions
//! - Observing viewport resizes or image loads
//! - Owning the lifecycle of the layout engine

#![forbid(unsafe_code)]

mod breakpoints;
pub use breakpoints::{column_count, column_margin};

mod columns;
pub use columns::{
    ColumnGeometry, checked_column_offset, column_geometry, column_offset, column_width,
};

mod config;
pub use config::load_options;

mod container;
pub use container::{Container, InlineStyle, set_container_height};

mod error;
pub use error::MasonryError;

mod types;
pub use types::{
    Breakpoint, BreakpointPolicy, Breakpoints, MasonryContext, MasonryOptions, Viewport,
};

mod value;
pub use value::{CalcSign, CssLength};
