//! Layout engine: kinsoku-aware line breaking and pagination.
//!
//! Text flows through two pure stages:
//!
//! ```text
//! raw text -> normalize -> LineBreaker -> lines -> Paginator -> pages
//! ```
//!
//! Both stages are deterministic and hold no state between calls, so they
//! may run concurrently on different inputs.

pub mod kinsoku;
mod line_breaker;
mod normalize;
mod options;
mod paginator;

pub use kinsoku::{KinsokuPolicy, KinsokuRules};
pub use line_breaker::{break_lines, break_segment, break_text};
pub use normalize::{normalize, normalize_line_endings};
pub use options::{
    Composition, LayoutOptions, DEFAULT_CHARS_PER_LINE, DEFAULT_CHARS_PER_PAGE,
};
pub use paginator::{paginate, paginate_lines};

pub(crate) use line_breaker::break_normalized;
pub(crate) use paginator::{paginate_grid, paginate_stream};
