//! Adapters that turn live layout rectangles into a placed balloon
//!
//! Hosts call [`TooltipAdapter::layout`] from their own layout/resize hook.
//! Nothing is scheduled here; each call recomputes the placement from scratch.

use crate::configuration::TooltipConfiguration;
use crate::placement::{Placement, PlacementResolver};
use crate::shape::{card_rect, BalloonPath, BalloonShape};
use crate::types::{Color, Direction, Offset, Point, Rect};

/// A balloon placed on screen, ready to be painted
#[derive(Debug, Clone, PartialEq)]
pub struct BalloonLayout {
    /// Arrow direction and position used for this layout
    pub placement: Placement,
    /// Frame of `balloon_size` in screen space; balloon space starts at its origin
    pub frame: Rect,
    /// Inner card in screen space
    pub card: Rect,
    /// Corner radius of the inner card
    pub card_corner_radius: f32,
    /// Outline in balloon space
    pub outline: BalloonPath,
    /// Arrow tip in screen space
    pub arrow_tip: Point,
    /// Fill color of the outline
    pub tint: Color,
    /// Card plus border in screen space, without the arrow
    body: Rect,
}

impl BalloonLayout {
    fn new(configuration: &TooltipConfiguration, center: Point) -> Self {
        let frame = Rect::centered_at(center, configuration.balloon_size());
        let to_screen = Offset::new(frame.x, frame.y);
        let shape = BalloonShape::new(configuration);

        Self {
            placement: configuration.placement(),
            frame,
            card: card_rect(configuration).offset_by(to_screen),
            card_corner_radius: configuration.content_corner_radius(),
            outline: shape.path(),
            arrow_tip: shape.arrow_tip().offset_by(to_screen),
            tint: configuration.tint(),
            body: configuration.content_rect().offset_by(to_screen),
        }
    }

    /// Outline moved into screen space
    pub fn screen_outline(&self) -> BalloonPath {
        self.outline.translated(Offset::new(self.frame.x, self.frame.y))
    }

    /// Area actually painted: the card plus the arrow, in screen space
    pub fn bounds(&self) -> Rect {
        let body = self.body;
        let min_x = body.min_x().min(self.arrow_tip.x);
        let max_x = body.max_x().max(self.arrow_tip.x);
        let min_y = body.min_y().min(self.arrow_tip.y);
        let max_y = body.max_y().max(self.arrow_tip.y);
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Check whether the whole balloon is visible within `screen_bounds`
    pub fn fits_within(&self, screen_bounds: &Rect) -> bool {
        screen_bounds.contains_rect(&self.bounds())
    }

    /// Part of the balloon that lands on screen, if any
    pub fn visible_bounds(&self, screen_bounds: &Rect) -> Option<Rect> {
        screen_bounds.intersection(&self.bounds())
    }
}

/// Common surface of the tooltip adapters
pub trait TooltipAdapter {
    /// The configuration owned by this tooltip
    fn configuration(&self) -> &TooltipConfiguration;

    /// Whether the tooltip is currently hidden
    fn is_hidden(&self) -> bool;

    /// Recompute placement for the current source and screen.
    /// Returns `None` while hidden.
    fn layout(&mut self, screen_bounds: &Rect) -> Option<BalloonLayout>;
}

/// Run the resolver and store its result, unless the caller fixed the placement
fn auto_configure(
    resolver: &PlacementResolver,
    configuration: &mut TooltipConfiguration,
    source_point: Point,
    source_rect: &Rect,
    screen_bounds: &Rect,
) {
    if !configuration.is_auto_configuration_enabled() {
        return;
    }
    let placement = resolver.resolve(
        source_point,
        configuration.content_size(),
        source_rect,
        screen_bounds,
    );
    configuration.apply(placement);
}

/// Tooltip anchored at the origin of a source rect or at a bare point.
///
/// The balloon frame is centered on the anchor and shifted by the
/// configuration's arrow offset.
#[derive(Debug, Clone)]
pub struct TooltipView {
    configuration: TooltipConfiguration,
    resolver: PlacementResolver,
    source_rect: Rect,
    hidden: bool,
}

impl TooltipView {
    pub fn new(configuration: TooltipConfiguration, source_rect: Rect) -> Self {
        Self {
            configuration,
            resolver: PlacementResolver::new(),
            source_rect,
            hidden: false,
        }
    }

    /// Anchor at a point, treated as a 1x1 source rect
    pub fn at_point(configuration: TooltipConfiguration, point: Point) -> Self {
        Self::new(configuration, Rect::unit_at(point))
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn set_source_rect(&mut self, source_rect: Rect) {
        self.source_rect = source_rect;
    }

    pub fn source_rect(&self) -> Rect {
        self.source_rect
    }

    pub fn configuration_mut(&mut self) -> &mut TooltipConfiguration {
        &mut self.configuration
    }
}

impl TooltipAdapter for TooltipView {
    fn configuration(&self) -> &TooltipConfiguration {
        &self.configuration
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn layout(&mut self, screen_bounds: &Rect) -> Option<BalloonLayout> {
        if self.hidden {
            return None;
        }

        let anchor = self.source_rect.origin();
        auto_configure(
            &self.resolver,
            &mut self.configuration,
            anchor,
            &self.source_rect,
            screen_bounds,
        );

        let center = anchor.offset_by(self.configuration.arrow_offset());
        let layout = BalloonLayout::new(&self.configuration, center);
        log::debug!(
            "TooltipView layout: anchor=({}, {}), frame={:?}",
            anchor.x,
            anchor.y,
            layout.frame
        );
        Some(layout)
    }
}

/// Tooltip attached on top of a source element.
///
/// The balloon starts centered on the element and is pushed off the element's
/// edge by half its size, so the arrow lands on that edge rather than on the
/// element's center.
#[derive(Debug, Clone)]
pub struct TooltipOverlay {
    configuration: TooltipConfiguration,
    resolver: PlacementResolver,
    source_rect: Rect,
    hidden: bool,
}

impl TooltipOverlay {
    pub fn new(configuration: TooltipConfiguration, source_rect: Rect) -> Self {
        Self {
            configuration,
            resolver: PlacementResolver::new(),
            source_rect,
            hidden: true,
        }
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn set_source_rect(&mut self, source_rect: Rect) {
        self.source_rect = source_rect;
    }

    pub fn source_rect(&self) -> Rect {
        self.source_rect
    }

    pub fn configuration_mut(&mut self) -> &mut TooltipConfiguration {
        &mut self.configuration
    }

    /// Shift from the element's center to the edge the arrow points at
    pub fn edge_offset(&self) -> Offset {
        let arrow_height_2 = self.configuration.arrow_height() * 0.5;
        let w_2 = self.source_rect.width * 0.5;
        let h_2 = self.source_rect.height * 0.5;

        match self.configuration.direction() {
            Direction::Up => Offset::new(0.0, h_2 + arrow_height_2),
            Direction::Down => Offset::new(0.0, -(h_2 - arrow_height_2)),
            Direction::Left => Offset::new(w_2 + arrow_height_2, 0.0),
            Direction::Right => Offset::new(-(w_2 - arrow_height_2), 0.0),
        }
    }
}

impl TooltipAdapter for TooltipOverlay {
    fn configuration(&self) -> &TooltipConfiguration {
        &self.configuration
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn layout(&mut self, screen_bounds: &Rect) -> Option<BalloonLayout> {
        if self.hidden {
            return None;
        }

        let anchor = self.source_rect.center();
        auto_configure(
            &self.resolver,
            &mut self.configuration,
            anchor,
            &self.source_rect,
            screen_bounds,
        );

        let offset = self.configuration.arrow_offset() + self.edge_offset();
        let layout = BalloonLayout::new(&self.configuration, anchor.offset_by(offset));
        log::debug!(
            "TooltipOverlay layout: source={:?}, frame={:?}",
            self.source_rect,
            layout.frame
        );
        Some(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EdgePosition, Size};

    const SCREEN: Rect = Rect::new(0.0, 0.0, 400.0, 800.0);

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_view_auto_configures() {
        init_logger();
        let mut view = TooltipView::at_point(TooltipConfiguration::standard(), Point::new(10.0, 10.0));
        let layout = view.layout(&SCREEN).expect("visible tooltip");
        assert_eq!(layout.placement.direction, Direction::Left);
        assert_eq!(layout.placement.position, EdgePosition::Top);
        assert_eq!(view.configuration().direction(), Direction::Left);
    }

    #[test]
    fn test_view_respects_fixed_placement() {
        let config = TooltipConfiguration::standard()
            .with_auto_configuration(false)
            .with_direction(Direction::Right)
            .with_position(EdgePosition::Bottom);
        let mut view = TooltipView::at_point(config, Point::new(10.0, 10.0));
        let layout = view.layout(&SCREEN).expect("visible tooltip");
        assert_eq!(layout.placement.direction, Direction::Right);
        assert_eq!(layout.placement.position, EdgePosition::Bottom);
    }

    #[test]
    fn test_hidden_view_has_no_layout() {
        let mut view = TooltipView::at_point(TooltipConfiguration::small(), Point::new(200.0, 200.0))
            .with_hidden(true);
        assert!(view.layout(&SCREEN).is_none());
        // placement untouched while hidden
        assert_eq!(view.configuration().direction(), Direction::Down);
    }

    #[test]
    fn test_view_frame_down_center() {
        // fixed down/center on a 158x108 card: frame is 158x123,
        // centered 69 above the anchor
        let config = TooltipConfiguration::standard().with_auto_configuration(false);
        let mut view = TooltipView::at_point(config, Point::new(200.0, 600.0));
        let layout = view.layout(&SCREEN).expect("visible tooltip");
        assert_eq!(layout.frame.size(), Size::new(158.0, 123.0));
        assert_eq!(layout.frame.center(), Point::new(200.0, 531.0));
        assert_eq!(layout.card.size(), Size::new(150.0, 100.0));
        assert_eq!(layout.card_corner_radius, 6.0);
        assert_eq!(layout.arrow_tip.x, 200.0);
        assert!(layout.fits_within(&SCREEN));
    }

    #[test]
    fn test_layout_is_repeatable() {
        let mut view = TooltipView::new(TooltipConfiguration::large(), Rect::new(300.0, 20.0, 40.0, 40.0));
        let first = view.layout(&SCREEN);
        let second = view.layout(&SCREEN);
        assert_eq!(first, second);
    }

    #[test]
    fn test_screen_outline_matches_frame() {
        let mut view = TooltipView::at_point(TooltipConfiguration::standard(), Point::new(200.0, 200.0));
        let layout = view.layout(&SCREEN).expect("visible tooltip");
        let outline = layout.screen_outline();
        match outline.commands()[0] {
            crate::shape::PathCommand::RoundedRect { rect, .. } => {
                assert_eq!(rect.origin(), layout.frame.origin())
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_overlay_starts_hidden() {
        let mut overlay = TooltipOverlay::new(TooltipConfiguration::small(), Rect::new(0.0, 0.0, 36.0, 36.0));
        assert!(overlay.is_hidden());
        assert!(overlay.layout(&SCREEN).is_none());
    }

    #[test]
    fn test_overlay_uses_source_center() {
        // center (200, 620) falls in the lower band
        let mut overlay = TooltipOverlay::new(
            TooltipConfiguration::small(),
            Rect::new(180.0, 600.0, 40.0, 40.0),
        )
        .with_hidden(false);
        let layout = overlay.layout(&SCREEN).expect("visible tooltip");
        assert_eq!(layout.placement.direction, Direction::Down);
        assert_eq!(layout.placement.position, EdgePosition::Center);
        assert_eq!(overlay.edge_offset(), Offset::new(0.0, -12.5));
    }

    #[test]
    fn test_overlay_edge_offset_per_direction() {
        let config = TooltipConfiguration::small().with_auto_configuration(false);
        let source = Rect::new(0.0, 0.0, 40.0, 20.0);
        let mut overlay = TooltipOverlay::new(config.with_direction(Direction::Up), source);
        assert_eq!(overlay.edge_offset(), Offset::new(0.0, 17.5));
        overlay.configuration_mut().update_direction(Direction::Left);
        assert_eq!(overlay.edge_offset(), Offset::new(27.5, 0.0));
        overlay.configuration_mut().update_direction(Direction::Right);
        assert_eq!(overlay.edge_offset(), Offset::new(-12.5, 0.0));
    }

    #[test]
    fn test_visible_bounds_clip() {
        let config = TooltipConfiguration::large()
            .with_auto_configuration(false)
            .with_direction(Direction::Up);
        let mut view = TooltipView::at_point(config, Point::new(390.0, 10.0));
        let layout = view.layout(&SCREEN).expect("visible tooltip");
        assert!(!layout.fits_within(&SCREEN));
        let visible = layout.visible_bounds(&SCREEN).expect("partly visible");
        assert!(visible.width < layout.bounds().width);
    }
}
