//! Scene configuration loading from tooltip.toml

use std::path::Path;

use balloon_tip::{
    Color, Direction, EdgePosition, Point, Rect, Size, TooltipAdapter, TooltipConfiguration,
    TooltipOverlay, TooltipView,
};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Tooltip '{0}' needs either `source` or `point`")]
    MissingSource(String),
    #[error("Scene declares no tooltips")]
    NoTooltips,
}

/// Root configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SceneConfig {
    pub screen: ScreenConfig,
    #[serde(default, rename = "tooltip")]
    pub tooltips: Vec<TooltipEntry>,
}

/// Screen the balloons must stay within
#[derive(Debug, Clone, Deserialize)]
pub struct ScreenConfig {
    /// Screen size [width, height]
    pub size: [f32; 2],
    /// Screen origin [x, y]
    #[serde(default)]
    pub origin: [f32; 2],
}

impl ScreenConfig {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.origin[0], self.origin[1], self.size[0], self.size[1])
    }
}

/// Tint given either by name ("pink") or as [r, g, b, a]
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TintConfig {
    Named(String),
    Rgba([f32; 4]),
}

impl TintConfig {
    pub fn color(&self) -> Color {
        match self {
            Self::Rgba(rgba) => Color(*rgba),
            Self::Named(name) => Color::from_name(name).unwrap_or_else(|| {
                log::warn!("Unknown tint '{}', defaulting to pink", name);
                Color::default()
            }),
        }
    }
}

/// Which adapter places the tooltip
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdapterKind {
    /// Balloon anchored at the source origin or a bare point
    View,
    /// Balloon attached on top of the source element
    Overlay,
}

impl AdapterKind {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "view" | "point" => Self::View,
            "overlay" | "modifier" => Self::Overlay,
            _ => {
                log::warn!("Unknown adapter '{}', defaulting to view", s);
                Self::View
            }
        }
    }
}

/// One tooltip in the scene
#[derive(Debug, Clone, Deserialize)]
pub struct TooltipEntry {
    pub name: String,
    /// Size preset: "small", "default", "large"
    #[serde(default = "default_preset")]
    pub preset: String,
    /// Explicit content size [width, height], overrides the preset
    pub content_size: Option<[f32; 2]>,
    pub tint: Option<TintConfig>,
    /// Source element [x, y, width, height]
    pub source: Option<[f32; 4]>,
    /// Bare anchor point [x, y], used when `source` is absent
    pub point: Option<[f32; 2]>,
    /// "view" or "overlay"
    #[serde(default = "default_adapter")]
    pub adapter: String,
    /// Pick direction and position automatically
    #[serde(default = "default_auto")]
    pub auto: bool,
    /// Arrow direction when `auto` is off
    #[serde(default = "default_direction")]
    pub direction: String,
    /// Arrow position when `auto` is off
    #[serde(default = "default_position")]
    pub position: String,
    #[serde(default)]
    pub hidden: bool,
    pub arrow_height: Option<f32>,
    pub border_width: Option<f32>,
    pub corner_radius: Option<f32>,
}

fn default_preset() -> String {
    "default".to_string()
}
fn default_adapter() -> String {
    "view".to_string()
}
fn default_auto() -> bool {
    true
}
fn default_direction() -> String {
    "down".to_string()
}
fn default_position() -> String {
    "center".to_string()
}

impl TooltipEntry {
    /// Build the tooltip configuration described by this entry
    pub fn configuration(&self) -> TooltipConfiguration {
        let mut configuration = match self.content_size {
            Some([width, height]) => TooltipConfiguration::new(Size::new(width, height)),
            None => TooltipConfiguration::preset(&self.preset).unwrap_or_else(|| {
                log::warn!(
                    "Unknown preset '{}' for tooltip '{}', defaulting to 'default'",
                    self.preset,
                    self.name
                );
                TooltipConfiguration::standard()
            }),
        };

        let direction = Direction::from_name(&self.direction).unwrap_or_else(|| {
            log::warn!("Unknown direction '{}', defaulting to down", self.direction);
            Direction::Down
        });
        let position = EdgePosition::from_name(&self.position).unwrap_or_else(|| {
            log::warn!("Unknown position '{}', defaulting to center", self.position);
            EdgePosition::Center
        });
        if !self.auto && !position.applies_to(direction) {
            log::warn!(
                "Position '{}' does not apply to a '{}' arrow in tooltip '{}'",
                position.name(),
                direction.name(),
                self.name
            );
        }

        configuration = configuration
            .with_direction(direction)
            .with_position(position)
            .with_auto_configuration(self.auto);
        if let Some(tint) = &self.tint {
            configuration = configuration.with_tint(tint.color());
        }
        if let Some(arrow_height) = self.arrow_height {
            configuration = configuration.with_arrow_height(arrow_height);
        }
        if let Some(border_width) = self.border_width {
            configuration = configuration.with_border_width(border_width);
        }
        if let Some(corner_radius) = self.corner_radius {
            configuration = configuration.with_corner_radius(corner_radius);
        }
        if configuration.border_width() > configuration.corner_radius() {
            log::warn!(
                "Tooltip '{}' has a border wider than its corner radius; the notch will look off",
                self.name
            );
        }
        configuration
    }

    /// The source rect, or a 1x1 rect at the anchor point
    pub fn source_rect(&self) -> Result<Rect, ConfigError> {
        match (self.source, self.point) {
            (Some([x, y, w, h]), _) => Ok(Rect::new(x, y, w, h)),
            (None, Some([x, y])) => Ok(Rect::unit_at(Point::new(x, y))),
            (None, None) => Err(ConfigError::MissingSource(self.name.clone())),
        }
    }

    /// Build the adapter that places this tooltip
    pub fn adapter(&self) -> Result<Box<dyn TooltipAdapter>, ConfigError> {
        let source_rect = self.source_rect()?;
        let configuration = self.configuration();
        let adapter: Box<dyn TooltipAdapter> = match AdapterKind::from_str(&self.adapter) {
            AdapterKind::View => {
                Box::new(TooltipView::new(configuration, source_rect).with_hidden(self.hidden))
            }
            AdapterKind::Overlay => {
                Box::new(TooltipOverlay::new(configuration, source_rect).with_hidden(self.hidden))
            }
        };
        Ok(adapter)
    }
}

impl SceneConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Load from default path (tooltip.toml in current directory)
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load("tooltip.toml")
    }

    /// Parse and validate a TOML document
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let scene: SceneConfig = toml::from_str(content)?;
        if scene.tooltips.is_empty() {
            return Err(ConfigError::NoTooltips);
        }
        for entry in &scene.tooltips {
            entry.source_rect()?;
        }
        log::debug!(
            "Scene: screen={:?}, {} tooltip(s)",
            scene.screen.bounds(),
            scene.tooltips.len()
        );
        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = r#"
        [screen]
        size = [400.0, 800.0]

        [[tooltip]]
        name = "corner"
        point = [10.0, 10.0]

        [[tooltip]]
        name = "fixed"
        preset = "large"
        source = [150.0, 500.0, 100.0, 40.0]
        adapter = "overlay"
        auto = false
        direction = "up"
        position = "trailing"
        tint = "blue"
        hidden = false
    "#;

    #[test]
    fn test_parse_scene() {
        let scene = SceneConfig::parse(SCENE).unwrap();
        assert_eq!(scene.screen.bounds(), Rect::new(0.0, 0.0, 400.0, 800.0));
        assert_eq!(scene.tooltips.len(), 2);

        let corner = &scene.tooltips[0];
        assert_eq!(corner.source_rect().unwrap(), Rect::new(10.0, 10.0, 1.0, 1.0));
        assert_eq!(corner.configuration(), TooltipConfiguration::standard());
        assert_eq!(AdapterKind::from_str(&corner.adapter), AdapterKind::View);

        let fixed = &scene.tooltips[1];
        let configuration = fixed.configuration();
        assert!(!configuration.is_auto_configuration_enabled());
        assert_eq!(configuration.direction(), Direction::Up);
        assert_eq!(configuration.position(), EdgePosition::Trailing);
        assert_eq!(configuration.tint(), Color::BLUE);
        assert_eq!(configuration.base_content_size(), Size::new(180.0, 110.0));
        assert_eq!(AdapterKind::from_str(&fixed.adapter), AdapterKind::Overlay);
    }

    #[test]
    fn test_adapters_follow_entries() {
        let scene = SceneConfig::parse(SCENE).unwrap();
        let screen = scene.screen.bounds();

        let mut corner = scene.tooltips[0].adapter().unwrap();
        let layout = corner.layout(&screen).unwrap();
        assert_eq!(layout.placement.direction, Direction::Left);

        let mut fixed = scene.tooltips[1].adapter().unwrap();
        assert!(!fixed.is_hidden());
        let layout = fixed.layout(&screen).unwrap();
        assert_eq!(layout.placement.direction, Direction::Up);
        assert_eq!(layout.placement.position, EdgePosition::Trailing);
    }

    #[test]
    fn test_rgba_tint_and_overrides() {
        let scene = SceneConfig::parse(
            r#"
            [screen]
            size = [320.0, 480.0]
            origin = [0.0, 20.0]

            [[tooltip]]
            name = "custom"
            content_size = [200.0, 100.0]
            source = [0.0, 0.0, 10.0, 10.0]
            tint = [0.5, 0.5, 0.5, 1.0]
            arrow_height = 12.0
            border_width = 2.0
            corner_radius = 8.0
            "#,
        )
        .unwrap();
        assert_eq!(scene.screen.bounds(), Rect::new(0.0, 20.0, 320.0, 480.0));
        let configuration = scene.tooltips[0].configuration();
        assert_eq!(configuration.tint(), Color::rgba(0.5, 0.5, 0.5, 1.0));
        assert_eq!(configuration.arrow_height(), 12.0);
        assert_eq!(configuration.content_corner_radius(), 6.0);
        assert_eq!(configuration.content_size(), Size::new(216.0, 116.0));
    }

    #[test]
    fn test_unknown_names_fall_back() {
        let scene = SceneConfig::parse(
            r#"
            [screen]
            size = [400.0, 800.0]

            [[tooltip]]
            name = "odd"
            preset = "gigantic"
            point = [5.0, 5.0]
            direction = "diagonal"
            tint = "chartreuse"
            "#,
        )
        .unwrap();
        let configuration = scene.tooltips[0].configuration();
        assert_eq!(configuration.base_content_size(), Size::new(130.0, 80.0));
        assert_eq!(configuration.direction(), Direction::Down);
        assert_eq!(configuration.tint(), Color::PINK);
    }

    #[test]
    fn test_missing_source() {
        let err = SceneConfig::parse(
            r#"
            [screen]
            size = [400.0, 800.0]

            [[tooltip]]
            name = "lost"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingSource(ref name) if name == "lost"));
    }

    #[test]
    fn test_empty_scene() {
        let err = SceneConfig::parse("[screen]\nsize = [10.0, 10.0]\n").unwrap_err();
        assert!(matches!(err, ConfigError::NoTooltips));
    }

    #[test]
    fn test_bad_toml() {
        let err = SceneConfig::parse("[screen\nsize = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_bundled_scene_parses() {
        let scene = SceneConfig::parse(include_str!("../tooltip.toml")).unwrap();
        for entry in &scene.tooltips {
            assert!(entry.adapter().is_ok());
        }
    }
}
