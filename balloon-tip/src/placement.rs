//! Arrow direction and position selection
//!
//! The screen is split into a 4x2 grid. The two middle columns form one band
//! per row, the outer columns are corner regions:
//!
//! ```text
//! +----+----+----+----+
//! | UL |    U    | UR |
//! +----+----+----+----+
//! | DL |    D    | DR |
//! +----+----+----+----+
//! ```
//!
//! A source in the middle bands gets an `Up`/`Down` arrow. A source in a corner
//! prefers a sideways arrow when the balloon still fits horizontally.

use crate::types::{Direction, EdgePosition, Point, Rect, Size};

/// Resolved arrow placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placement {
    pub direction: Direction,
    pub position: EdgePosition,
}

/// The six grid regions used for direction selection
#[derive(Debug, Clone, Copy, PartialEq)]
struct Regions {
    up: Rect,
    down: Rect,
    up_left: Rect,
    up_right: Rect,
    down_left: Rect,
    down_right: Rect,
}

impl Regions {
    fn new(screen_bounds: &Rect) -> Self {
        let origin = screen_bounds.origin();
        let width = screen_bounds.width;
        let height = screen_bounds.height;
        let width_2 = width * 0.5;
        let height_2 = height * 0.5;
        let width_4 = width_2 * 0.5;

        // The lower corner regions start at half the height measured from
        // zero, not from the screen origin. This only differs when the screen
        // origin has a non-zero y.
        Self {
            up: Rect::new(origin.x + width_4, origin.y, width_2, height_2),
            down: Rect::new(origin.x + width_4, origin.y + height_2, width_2, height_2),
            up_left: Rect::new(origin.x, origin.y, width_4, height_2),
            up_right: Rect::new(origin.x + (width - width_4), origin.y, width_4, height_2),
            down_left: Rect::new(origin.x, height_2, width_4, height_2),
            down_right: Rect::new(origin.x + (width - width_4), height_2, width_4, height_2),
        }
    }
}

/// Stateless placement resolver shared by every tooltip adapter.
///
/// All comparisons against the screen use its width and height, not its max
/// edges, so screens are expected to start at the origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlacementResolver;

impl PlacementResolver {
    pub fn new() -> Self {
        Self
    }

    /// Pick which edge of the balloon carries the arrow
    pub fn resolve_direction(
        &self,
        source_point: Point,
        content_size: Size,
        source_rect: &Rect,
        screen_bounds: &Rect,
    ) -> Direction {
        let regions = Regions::new(screen_bounds);
        let width = screen_bounds.width;
        let fits_leftward = source_rect.max_x() + content_size.width < width;
        let fits_rightward = source_rect.max_x() < width;

        if regions.up.contains(source_point) {
            return Direction::Up;
        }
        if regions.down.contains(source_point) {
            return Direction::Down;
        }
        if regions.up_left.contains(source_point) {
            return if fits_leftward { Direction::Left } else { Direction::Up };
        }
        if regions.up_right.contains(source_point) {
            return if fits_rightward { Direction::Right } else { Direction::Up };
        }
        if regions.down_left.contains(source_point) {
            return if fits_leftward { Direction::Left } else { Direction::Down };
        }
        if regions.down_right.contains(source_point) {
            return if fits_rightward { Direction::Right } else { Direction::Down };
        }

        Direction::Up
    }

    /// Pick the arrow position along a top or bottom edge
    pub fn resolve_horizontal_position(
        &self,
        content_size: Size,
        source_rect: &Rect,
        screen_bounds: &Rect,
    ) -> EdgePosition {
        let width = screen_bounds.width;
        let width_4 = width * 0.25;

        if source_rect.min_x() > width_4 && source_rect.max_x() < width - width_4 {
            let content_width_2 = content_size.width * 0.5;
            if source_rect.mid_x() + content_width_2 > width {
                return EdgePosition::Trailing;
            }
            if source_rect.mid_x() - content_width_2 < 0.0 {
                return EdgePosition::Leading;
            }
            return EdgePosition::Center;
        }

        if source_rect.max_x() + content_size.width > width {
            EdgePosition::Trailing
        } else {
            EdgePosition::Leading
        }
    }

    /// Pick the arrow position along a left or right edge
    pub fn resolve_vertical_position(
        &self,
        content_size: Size,
        source_rect: &Rect,
        screen_bounds: &Rect,
    ) -> EdgePosition {
        let height = screen_bounds.height;
        let height_4 = height * 0.25;
        let content_bottom = source_rect.min_y() + content_size.height;

        if content_bottom > height {
            return EdgePosition::Bottom;
        }
        if source_rect.min_y() > height_4 && content_bottom < height - height_4 {
            return EdgePosition::Center;
        }
        EdgePosition::Top
    }

    /// Resolve direction first, then the position along the chosen edge
    pub fn resolve(
        &self,
        source_point: Point,
        content_size: Size,
        source_rect: &Rect,
        screen_bounds: &Rect,
    ) -> Placement {
        let direction =
            self.resolve_direction(source_point, content_size, source_rect, screen_bounds);
        let position = match direction {
            Direction::Up | Direction::Down => {
                self.resolve_horizontal_position(content_size, source_rect, screen_bounds)
            }
            Direction::Left | Direction::Right => {
                self.resolve_vertical_position(content_size, source_rect, screen_bounds)
            }
        };

        log::debug!(
            "Placement: point=({}, {}), source={:?}, content={}x{} -> {:?}/{:?}",
            source_point.x,
            source_point.y,
            source_rect,
            content_size.width,
            content_size.height,
            direction,
            position
        );

        Placement {
            direction,
            position,
        }
    }
}
