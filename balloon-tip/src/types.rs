//! Core geometry types for balloon placement

/// Edge of the balloon that carries the arrow.
///
/// Equivalently, the side of the source the arrow points back toward: an
/// `Up` arrow sits on the top edge and the balloon body hangs below the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Arrow on the top edge, pointing up
    /// ```text
    ///    /\
    /// ╭─/──\──╮
    /// │       │
    /// ╰───────╯
    /// ```
    Up,

    /// Arrow on the bottom edge, pointing down
    /// ```text
    /// ╭───────╮
    /// │       │
    /// ╰─\──/──╯
    ///    \/
    /// ```
    Down,

    /// Arrow on the left edge, pointing left
    Left,

    /// Arrow on the right edge, pointing right
    Right,
}

impl Default for Direction {
    fn default() -> Self {
        Self::Down
    }
}

impl Direction {
    /// Check if the arrow sits on a horizontal edge (top or bottom)
    pub fn is_vertical(&self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Check if the arrow sits on a vertical edge (left or right)
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Parse a direction name, case-insensitive
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Where the arrow sits along its edge.
///
/// `Top`, `Bottom` and `Center` apply to `Left`/`Right` arrows; `Leading`,
/// `Trailing` and `Center` apply to `Up`/`Down` arrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgePosition {
    Top,
    Bottom,
    Center,
    Leading,
    Trailing,
}

impl Default for EdgePosition {
    fn default() -> Self {
        Self::Center
    }
}

impl EdgePosition {
    /// Parse a position name, case-insensitive
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "center" | "centre" => Some(Self::Center),
            "leading" => Some(Self::Leading),
            "trailing" => Some(Self::Trailing),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Center => "center",
            Self::Leading => "leading",
            Self::Trailing => "trailing",
        }
    }

    /// Check whether this position is meaningful for arrows on the given edge
    pub fn applies_to(&self, direction: Direction) -> bool {
        match self {
            Self::Center => true,
            Self::Leading | Self::Trailing => direction.is_vertical(),
            Self::Top | Self::Bottom => direction.is_horizontal(),
        }
    }
}

/// A point in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Move the point by an offset
    pub fn offset_by(self, offset: Offset) -> Self {
        Self {
            x: self.x + offset.dx,
            y: self.y + offset.dy,
        }
    }
}

/// A width/height pair
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Grow both axes by the same margin
    pub fn expanded(self, margin: f32) -> Self {
        Self {
            width: self.width + margin,
            height: self.height + margin,
        }
    }
}

/// A translation in screen space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
}

impl Offset {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

impl std::ops::Add for Offset {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            dx: self.dx + rhs.dx,
            dy: self.dy + rhs.dy,
        }
    }
}

/// Axis-aligned rectangle.
///
/// `min_*`/`max_*` are taken over the origin and the far corner, so a rect
/// with a negative width or height still reports ordered extents.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// A rect of the given size centered on `center`
    pub fn centered_at(center: Point, size: Size) -> Self {
        Self::new(
            center.x - size.width * 0.5,
            center.y - size.height * 0.5,
            size.width,
            size.height,
        )
    }

    /// A 1x1 rect at `point`, used when a tooltip is anchored to a bare point
    pub fn unit_at(point: Point) -> Self {
        Self::new(point.x, point.y, 1.0, 1.0)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    pub fn min_x(&self) -> f32 {
        self.x.min(self.x + self.width)
    }

    pub fn max_x(&self) -> f32 {
        self.x.max(self.x + self.width)
    }

    pub fn mid_x(&self) -> f32 {
        self.x + self.width * 0.5
    }

    pub fn min_y(&self) -> f32 {
        self.y.min(self.y + self.height)
    }

    pub fn max_y(&self) -> f32 {
        self.y.max(self.y + self.height)
    }

    pub fn mid_y(&self) -> f32 {
        self.y + self.height * 0.5
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Point containment, closed on the min edges and open on the max edges
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }

    /// Check whether `other` lies entirely inside this rect (edges may touch)
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.min_x() >= self.min_x()
            && other.max_x() <= self.max_x()
            && other.min_y() >= self.min_y()
            && other.max_y() <= self.max_y()
    }

    /// Check whether the two rects share any area
    pub fn intersects(&self, other: &Rect) -> bool {
        self.intersection(other).is_some()
    }

    /// The overlapping region, if the rects share any area
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let min_x = self.min_x().max(other.min_x());
        let max_x = self.max_x().min(other.max_x());
        let min_y = self.min_y().max(other.min_y());
        let max_y = self.max_y().min(other.max_y());
        if min_x < max_x && min_y < max_y {
            Some(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
        } else {
            None
        }
    }

    /// Translate the rect by an offset
    pub fn offset_by(&self, offset: Offset) -> Rect {
        Rect::new(self.x + offset.dx, self.y + offset.dy, self.width, self.height)
    }
}

/// RGBA color in 0.0-1.0 range.
///
/// The geometry never looks at it; it is carried through to whoever paints
/// the balloon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const PINK: Self = Self([1.0, 0.176, 0.333, 1.0]);
    pub const GREEN: Self = Self([0.204, 0.78, 0.349, 1.0]);
    pub const BLUE: Self = Self([0.0, 0.478, 1.0, 1.0]);
    pub const INDIGO: Self = Self([0.345, 0.337, 0.839, 1.0]);
    pub const ORANGE: Self = Self([1.0, 0.584, 0.0, 1.0]);
    pub const GRAY: Self = Self([0.557, 0.557, 0.576, 1.0]);
    pub const WHITE: Self = Self([1.0, 1.0, 1.0, 1.0]);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self([r, g, b, a])
    }

    /// Look up one of the named colors, case-insensitive
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "pink" => Some(Self::PINK),
            "green" => Some(Self::GREEN),
            "blue" => Some(Self::BLUE),
            "indigo" => Some(Self::INDIGO),
            "orange" => Some(Self::ORANGE),
            "gray" | "grey" => Some(Self::GRAY),
            "white" => Some(Self::WHITE),
            _ => None,
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::PINK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert!(rect.contains(Point::new(0.0, 0.0)));
        assert!(rect.contains(Point::new(99.9, 49.9)));
        assert!(!rect.contains(Point::new(100.0, 10.0)));
        assert!(!rect.contains(Point::new(10.0, 50.0)));
    }

    #[test]
    fn test_rect_negative_extent() {
        let rect = Rect::new(10.0, 10.0, -4.0, -6.0);
        assert_eq!(rect.min_x(), 6.0);
        assert_eq!(rect.max_x(), 10.0);
        assert_eq!(rect.min_y(), 4.0);
        assert_eq!(rect.max_y(), 10.0);
    }

    #[test]
    fn test_rect_intersection() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 80.0, 100.0, 100.0);
        assert_eq!(a.intersection(&b), Some(Rect::new(50.0, 80.0, 50.0, 20.0)));
        assert!(a.intersects(&b));

        let c = Rect::new(100.0, 0.0, 10.0, 10.0);
        assert_eq!(a.intersection(&c), None);
        assert!(!a.contains_rect(&b));
        assert!(a.contains_rect(&Rect::new(0.0, 0.0, 100.0, 100.0)));
    }

    #[test]
    fn test_unit_rect_at_point() {
        let rect = Rect::unit_at(Point::new(3.0, 4.0));
        assert_eq!(rect.size(), Size::new(1.0, 1.0));
        assert_eq!(rect.origin(), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_names() {
        assert_eq!(Direction::from_name("Left"), Some(Direction::Left));
        assert_eq!(Direction::from_name("sideways"), None);
        assert_eq!(EdgePosition::from_name(" trailing "), Some(EdgePosition::Trailing));
        assert!(EdgePosition::Leading.applies_to(Direction::Down));
        assert!(!EdgePosition::Leading.applies_to(Direction::Left));
        assert!(EdgePosition::Center.applies_to(Direction::Right));
        assert_eq!(Color::from_name("GREY"), Some(Color::GRAY));
    }
}
