//! # balloon-tip
//!
//! Placement and shape geometry for speech-balloon tooltips.
//!
//! ## Features
//! - Automatic arrow direction (up, down, left, right) from where the source
//!   sits on screen
//! - Arrow position along the edge (leading, center, trailing / top, bottom)
//! - Rounded balloon outline with a triangular notch
//! - Offsets that anchor the arrow tip to the source
//! - Triangle meshes ready for GPU upload
//!
//! Everything here is plain arithmetic over rectangles. No rendering surface
//! is needed, and degenerate input (zero-size rects, empty screens) produces a
//! deterministic result instead of an error.
//!
//! ## Example
//!
//! ```
//! use balloon_tip::{Point, Rect, TooltipAdapter, TooltipConfiguration, TooltipView, Color};
//!
//! let screen = Rect::new(0.0, 0.0, 400.0, 800.0);
//! let configuration = TooltipConfiguration::small().with_tint(Color::GREEN);
//! let mut view = TooltipView::at_point(configuration, Point::new(200.0, 600.0));
//!
//! if let Some(layout) = view.layout(&screen) {
//!     println!("{:?} at {:?}", layout.placement, layout.frame);
//! }
//! ```

mod configuration;
mod placement;
mod shape;
mod types;
mod view;

pub use configuration::{
    TooltipConfiguration, DEFAULT_ARROW_HEIGHT, DEFAULT_BORDER_WIDTH, DEFAULT_CORNER_RADIUS,
};
pub use placement::{Placement, PlacementResolver};
pub use shape::{
    card_rect, tessellate_card, BalloonMesh, BalloonPath, BalloonShape, PathCommand, ShapeVertex,
    MAX_SEGMENTS_PER_CORNER, SEGMENTS_PER_CORNER,
};
pub use types::{Color, Direction, EdgePosition, Offset, Point, Rect, Size};
pub use view::{BalloonLayout, TooltipAdapter, TooltipOverlay, TooltipView};
