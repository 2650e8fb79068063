//! Tooltip configuration and derived balloon geometry

use crate::placement::Placement;
use crate::types::{Color, Direction, EdgePosition, Offset, Point, Rect, Size};

/// Default arrow length in pixels
pub const DEFAULT_ARROW_HEIGHT: f32 = 15.0;
/// Default colored border around the content card.
/// Should be less than or equal to the corner radius.
pub const DEFAULT_BORDER_WIDTH: f32 = 4.0;
/// Default corner radius of the balloon
pub const DEFAULT_CORNER_RADIUS: f32 = 10.0;

/// Size and style parameters of one tooltip plus its resolved arrow placement.
///
/// Every geometry getter is computed from the current fields on each call, so
/// the results always agree with the latest direction and position.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipConfiguration {
    base_content_size: Size,
    arrow_height: f32,
    border_width: f32,
    corner_radius: f32,
    direction: Direction,
    position: EdgePosition,
    tint: Color,
    auto_configuration: bool,
}

impl TooltipConfiguration {
    /// Create a configuration for content of the given size.
    /// The arrow starts pointing down from the center of the bottom edge.
    pub fn new(content_size: Size) -> Self {
        Self {
            base_content_size: content_size,
            arrow_height: DEFAULT_ARROW_HEIGHT,
            border_width: DEFAULT_BORDER_WIDTH,
            corner_radius: DEFAULT_CORNER_RADIUS,
            direction: Direction::default(),
            position: EdgePosition::default(),
            tint: Color::default(),
            auto_configuration: true,
        }
    }

    /// 80x50 content
    pub fn small() -> Self {
        Self::new(Size::new(80.0, 50.0))
    }

    /// 130x80 content
    pub fn standard() -> Self {
        Self::new(Size::new(130.0, 80.0))
    }

    /// 180x110 content
    pub fn large() -> Self {
        Self::new(Size::new(180.0, 110.0))
    }

    /// Look up a preset by name ("small", "default", "large")
    pub fn preset(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "small" => Some(Self::small()),
            "default" | "standard" => Some(Self::standard()),
            "large" => Some(Self::large()),
            _ => None,
        }
    }

    /// Set the balloon tint
    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }

    /// Set the initial arrow direction
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the initial arrow position
    pub fn with_position(mut self, position: EdgePosition) -> Self {
        self.position = position;
        self
    }

    /// Set the arrow length
    pub fn with_arrow_height(mut self, arrow_height: f32) -> Self {
        self.arrow_height = arrow_height;
        self
    }

    /// Set the border width
    pub fn with_border_width(mut self, border_width: f32) -> Self {
        self.border_width = border_width;
        self
    }

    /// Set the corner radius
    pub fn with_corner_radius(mut self, corner_radius: f32) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    /// Enable or disable automatic direction/position selection.
    /// When disabled the direction and position given by the caller are kept.
    pub fn with_auto_configuration(mut self, enabled: bool) -> Self {
        self.auto_configuration = enabled;
        self
    }

    pub fn set_auto_configuration(&mut self, enabled: bool) {
        self.auto_configuration = enabled;
    }

    pub fn is_auto_configuration_enabled(&self) -> bool {
        self.auto_configuration
    }

    pub fn update_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn update_position(&mut self, position: EdgePosition) {
        self.position = position;
    }

    /// Store a resolver result
    pub fn apply(&mut self, placement: Placement) {
        self.update_direction(placement.direction);
        self.update_position(placement.position);
    }

    pub fn base_content_size(&self) -> Size {
        self.base_content_size
    }

    pub fn arrow_height(&self) -> f32 {
        self.arrow_height
    }

    pub fn border_width(&self) -> f32 {
        self.border_width
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn position(&self) -> EdgePosition {
        self.position
    }

    pub fn placement(&self) -> Placement {
        Placement {
            direction: self.direction,
            position: self.position,
        }
    }

    pub fn tint(&self) -> Color {
        self.tint
    }

    /// Content area: the caller's size plus room for the rounded corners
    pub fn content_size(&self) -> Size {
        self.base_content_size.expanded(self.corner_radius * 2.0)
    }

    /// The card the arrow attaches to, at the origin of balloon space
    pub fn content_rect(&self) -> Rect {
        let size = self.content_size().expanded(self.border_width * 2.0);
        Rect::from_origin_size(Point::ZERO, size)
    }

    /// Bounding size of card plus arrow
    pub fn balloon_size(&self) -> Size {
        let mut size = self.content_size().expanded(self.border_width * 2.0);
        match self.direction {
            Direction::Up | Direction::Down => size.height += self.arrow_height,
            Direction::Left | Direction::Right => size.width += self.arrow_height,
        }
        size
    }

    /// Inset of the inner card within the colored balloon
    pub fn content_offset(&self) -> Offset {
        Offset::new(self.border_width, self.border_width)
    }

    /// Center of the inner card in balloon space
    pub fn content_position(&self) -> Point {
        let content_size = self.content_size();
        Point::new(
            self.border_width + content_size.width * 0.5,
            self.border_width + content_size.height * 0.5,
        )
    }

    /// Corner radius of the inner card.
    /// Falls back to the outer radius when the border would eat all of it.
    pub fn content_corner_radius(&self) -> f32 {
        let radius = self.corner_radius - self.border_width;
        if radius > 0.0 {
            radius
        } else {
            self.corner_radius
        }
    }

    /// Translation that pins the arrow tip to the anchor.
    ///
    /// The balloon is first pushed away from the anchor along the arrow axis,
    /// then slid along its edge so the arrow stays over the anchor.
    pub fn arrow_offset(&self) -> Offset {
        let content_rect = self.content_rect();
        let w_2 = content_rect.width * 0.5;
        let h_2 = content_rect.height * 0.5;
        let len = self.arrow_height;
        let edge_inset = len + self.border_width + self.corner_radius;

        let mut offset = Offset::ZERO;
        match self.direction {
            Direction::Up => offset.dy += len + h_2,
            Direction::Down => offset.dy -= len + h_2,
            Direction::Left => offset.dx += len + w_2,
            Direction::Right => offset.dx -= len + w_2,
        }
        match self.position {
            EdgePosition::Top => offset.dy += h_2 - edge_inset,
            EdgePosition::Bottom => offset.dy -= h_2 - edge_inset,
            EdgePosition::Leading => offset.dx += w_2 - edge_inset,
            EdgePosition::Trailing => offset.dx -= w_2 - edge_inset,
            EdgePosition::Center => {}
        }
        offset
    }
}

impl Default for TooltipConfiguration {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(TooltipConfiguration::small().base_content_size(), Size::new(80.0, 50.0));
        assert_eq!(TooltipConfiguration::standard().base_content_size(), Size::new(130.0, 80.0));
        assert_eq!(TooltipConfiguration::large().base_content_size(), Size::new(180.0, 110.0));
        assert_eq!(TooltipConfiguration::preset("Default"), Some(TooltipConfiguration::standard()));
        assert_eq!(TooltipConfiguration::preset("huge"), None);
    }

    #[test]
    fn test_defaults() {
        let config = TooltipConfiguration::default();
        assert_eq!(config.direction(), Direction::Down);
        assert_eq!(config.position(), EdgePosition::Center);
        assert_eq!(config.tint(), Color::PINK);
        assert!(config.is_auto_configuration_enabled());
        assert_eq!(config.arrow_height(), 15.0);
        assert_eq!(config.border_width(), 4.0);
        assert_eq!(config.corner_radius(), 10.0);
    }

    #[test]
    fn test_content_geometry() {
        let config = TooltipConfiguration::standard();
        assert_eq!(config.content_size(), Size::new(150.0, 100.0));
        assert_eq!(config.content_rect(), Rect::new(0.0, 0.0, 158.0, 108.0));
        assert_eq!(config.content_offset(), Offset::new(4.0, 4.0));
        assert_eq!(config.content_position(), Point::new(79.0, 54.0));
    }

    #[test]
    fn test_balloon_size_follows_direction() {
        let mut config = TooltipConfiguration::standard();
        let content = config.content_size();
        for direction in [Direction::Up, Direction::Down] {
            config.update_direction(direction);
            assert_eq!(
                config.balloon_size(),
                Size::new(content.width + 8.0, content.height + 8.0 + 15.0)
            );
        }
        for direction in [Direction::Left, Direction::Right] {
            config.update_direction(direction);
            assert_eq!(
                config.balloon_size(),
                Size::new(content.width + 8.0 + 15.0, content.height + 8.0)
            );
        }
    }

    #[test]
    fn test_content_corner_radius_clamp() {
        let config = TooltipConfiguration::standard();
        assert_eq!(config.content_corner_radius(), 6.0);

        let config = TooltipConfiguration::standard()
            .with_border_width(10.0)
            .with_corner_radius(10.0);
        assert_eq!(config.content_corner_radius(), 10.0);

        let config = TooltipConfiguration::standard().with_border_width(12.0);
        assert_eq!(config.content_corner_radius(), 10.0);
    }

    #[test]
    fn test_arrow_offset_down_center() {
        let config = TooltipConfiguration::standard();
        let rect = config.content_rect();
        assert_eq!(config.arrow_offset(), Offset::new(0.0, -(15.0 + rect.height / 2.0)));
    }

    #[test]
    fn test_arrow_offset_axes() {
        // content rect is 158x108, so w/2 = 79, h/2 = 54, inset = 29
        let config = TooltipConfiguration::standard()
            .with_direction(Direction::Up)
            .with_position(EdgePosition::Leading);
        assert_eq!(config.arrow_offset(), Offset::new(50.0, 69.0));

        let config = config.with_position(EdgePosition::Trailing);
        assert_eq!(config.arrow_offset(), Offset::new(-50.0, 69.0));

        let config = TooltipConfiguration::standard()
            .with_direction(Direction::Left)
            .with_position(EdgePosition::Top);
        assert_eq!(config.arrow_offset(), Offset::new(94.0, 25.0));

        let config = config
            .with_direction(Direction::Right)
            .with_position(EdgePosition::Bottom);
        assert_eq!(config.arrow_offset(), Offset::new(-94.0, -25.0));
    }

    #[test]
    fn test_apply_placement() {
        let mut config = TooltipConfiguration::small().with_tint(Color::GREEN);
        config.apply(Placement {
            direction: Direction::Left,
            position: EdgePosition::Top,
        });
        assert_eq!(config.direction(), Direction::Left);
        assert_eq!(config.position(), EdgePosition::Top);
        assert_eq!(config.tint(), Color::GREEN);
    }
}
