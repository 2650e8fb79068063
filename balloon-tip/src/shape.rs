//! Balloon outline and mesh generation

use bytemuck::{Pod, Zeroable};

use crate::configuration::TooltipConfiguration;
use crate::types::{Color, Direction, EdgePosition, Offset, Point, Rect};

/// Default number of segments used to flatten each rounded corner
pub const SEGMENTS_PER_CORNER: u16 = 8;

/// Upper bound on segments per corner, so every index of a balloon mesh
/// (four corner arcs, fan center and notch) fits in a `u16`
pub const MAX_SEGMENTS_PER_CORNER: u16 = (u16::MAX - 4) / 8;

/// One drawing command of a balloon outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// A closed rounded rectangle
    RoundedRect { rect: Rect, corner_radius: f32 },
    /// Start a new sub-path
    MoveTo(Point),
    /// Straight segment from the current point
    LineTo(Point),
}

/// Outline made of drawing commands, meant to be filled as one shape
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BalloonPath {
    commands: Vec<PathCommand>,
}

impl BalloonPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_rounded_rect(&mut self, rect: Rect, corner_radius: f32) {
        self.commands.push(PathCommand::RoundedRect {
            rect,
            corner_radius,
        });
    }

    pub fn move_to(&mut self, point: Point) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    pub fn line_to(&mut self, point: Point) {
        self.commands.push(PathCommand::LineTo(point));
    }

    /// Append all commands of another path
    pub fn add_path(&mut self, other: &BalloonPath) {
        self.commands.extend_from_slice(&other.commands);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Copy of the path moved by `offset`
    pub fn translated(&self, offset: Offset) -> BalloonPath {
        let commands = self
            .commands
            .iter()
            .map(|command| match *command {
                PathCommand::RoundedRect {
                    rect,
                    corner_radius,
                } => PathCommand::RoundedRect {
                    rect: rect.offset_by(offset),
                    corner_radius,
                },
                PathCommand::MoveTo(p) => PathCommand::MoveTo(p.offset_by(offset)),
                PathCommand::LineTo(p) => PathCommand::LineTo(p.offset_by(offset)),
            })
            .collect();
        BalloonPath { commands }
    }
}

/// Vertex format for balloon meshes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ShapeVertex {
    /// Position [x, y] in pixels
    pub position: [f32; 2],
    /// Color [r, g, b, a]
    pub color: [f32; 4],
}

/// Triangle list ready for upload to a vertex/index buffer pair
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BalloonMesh {
    vertices: Vec<ShapeVertex>,
    indices: Vec<u16>,
}

impl BalloonMesh {
    pub fn vertices(&self) -> &[ShapeVertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Raw vertex bytes
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index bytes
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Fan-triangulated rounded rectangle
    fn push_rounded_rect(&mut self, rect: Rect, radius: f32, color: [f32; 4], segments: u16) {
        let radius = radius.min(rect.width.abs() * 0.5).min(rect.height.abs() * 0.5).max(0.0);
        if segments > MAX_SEGMENTS_PER_CORNER {
            log::warn!(
                "Clamping {} segments per corner to {}",
                segments,
                MAX_SEGMENTS_PER_CORNER
            );
        }
        let segments = segments.clamp(1, MAX_SEGMENTS_PER_CORNER);

        let center_idx = self.vertices.len() as u16;
        self.vertices.push(ShapeVertex {
            position: [rect.mid_x(), rect.mid_y()],
            color,
        });

        let (min_x, max_x, min_y, max_y) = (rect.min_x(), rect.max_x(), rect.min_y(), rect.max_y());
        let corners = [
            (min_x + radius, min_y + radius, std::f32::consts::PI, std::f32::consts::FRAC_PI_2 * 3.0), // top-left
            (max_x - radius, min_y + radius, std::f32::consts::FRAC_PI_2 * 3.0, std::f32::consts::TAU), // top-right
            (max_x - radius, max_y - radius, 0.0, std::f32::consts::FRAC_PI_2), // bottom-right
            (min_x + radius, max_y - radius, std::f32::consts::FRAC_PI_2, std::f32::consts::PI), // bottom-left
        ];

        let first_vertex_idx = self.vertices.len() as u16;
        for (cx, cy, start_angle, end_angle) in corners {
            for i in 0..=segments {
                let t = i as f32 / segments as f32;
                let angle = start_angle + t * (end_angle - start_angle);
                self.vertices.push(ShapeVertex {
                    position: [cx + radius * angle.cos(), cy + radius * angle.sin()],
                    color,
                });
            }
        }

        let num_edge_vertices = self.vertices.len() as u16 - first_vertex_idx;
        for i in 0..num_edge_vertices {
            let next = (i + 1) % num_edge_vertices;
            self.indices.push(center_idx);
            self.indices.push(first_vertex_idx + i);
            self.indices.push(first_vertex_idx + next);
        }
    }

    fn push_triangle(&mut self, points: [Point; 3], color: [f32; 4]) {
        let start = self.vertices.len() as u16;
        for p in points {
            self.vertices.push(ShapeVertex {
                position: [p.x, p.y],
                color,
            });
        }
        self.indices.extend_from_slice(&[start, start + 1, start + 2]);
    }
}

/// Balloon outline for one configuration snapshot.
///
/// Coordinates are in balloon space: the card starts at the origin and the
/// arrow may stick out past it on any side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalloonShape {
    content_rect: Rect,
    corner_radius: f32,
    border_width: f32,
    arrow_height: f32,
    direction: Direction,
    position: EdgePosition,
}

impl BalloonShape {
    pub fn new(configuration: &TooltipConfiguration) -> Self {
        Self {
            content_rect: configuration.content_rect(),
            corner_radius: configuration.corner_radius(),
            border_width: configuration.border_width(),
            arrow_height: configuration.arrow_height(),
            direction: configuration.direction(),
            position: configuration.position(),
        }
    }

    /// Start of the arrow base on the card edge
    fn arrow_base(&self) -> Point {
        let rect = self.content_rect;
        let len = self.arrow_height;
        let edge_inset = self.border_width + self.corner_radius;
        let base_side = len * 2.0;

        let x = match self.direction {
            Direction::Up | Direction::Down => match self.position {
                EdgePosition::Trailing => rect.max_x() - (base_side + edge_inset),
                EdgePosition::Center => rect.mid_x() - len,
                // Top/Bottom do not apply to this edge and share the leading spot.
                EdgePosition::Leading | EdgePosition::Top | EdgePosition::Bottom => {
                    rect.min_x() + edge_inset
                }
            },
            Direction::Left => rect.min_x(),
            Direction::Right => rect.max_x(),
        };

        let y = match self.direction {
            Direction::Up => rect.min_y(),
            Direction::Down => rect.max_y(),
            Direction::Left | Direction::Right => match self.position {
                EdgePosition::Bottom => rect.max_y() - (base_side + edge_inset),
                EdgePosition::Center => rect.mid_y() - len,
                // Leading/Trailing do not apply to this edge and share the top spot.
                EdgePosition::Top | EdgePosition::Leading | EdgePosition::Trailing => {
                    rect.min_y() + edge_inset
                }
            },
        };

        Point::new(x, y)
    }

    /// The notch as [base start, apex, base end]
    pub fn arrow_points(&self) -> [Point; 3] {
        let start = self.arrow_base();
        let len = self.arrow_height;
        let (apex, end) = match self.direction {
            Direction::Up => (
                Point::new(start.x + len, start.y - len),
                Point::new(start.x + len * 2.0, start.y),
            ),
            Direction::Down => (
                Point::new(start.x + len, start.y + len),
                Point::new(start.x + len * 2.0, start.y),
            ),
            Direction::Left => (
                Point::new(start.x - len, start.y + len),
                Point::new(start.x, start.y + len * 2.0),
            ),
            Direction::Right => (
                Point::new(start.x + len, start.y + len),
                Point::new(start.x, start.y + len * 2.0),
            ),
        };
        [start, apex, end]
    }

    /// Arrow tip in balloon space
    pub fn arrow_tip(&self) -> Point {
        self.arrow_points()[1]
    }

    /// Rounded card followed by the open notch polyline
    pub fn path(&self) -> BalloonPath {
        let mut path = BalloonPath::new();
        path.add_rounded_rect(self.content_rect, self.corner_radius);

        let [start, apex, end] = self.arrow_points();
        let mut arrow = BalloonPath::new();
        arrow.move_to(start);
        arrow.line_to(apex);
        arrow.line_to(end);
        path.add_path(&arrow);
        path
    }

    /// Balloon outline as triangles in the given color
    pub fn tessellate(&self, color: Color, segments_per_corner: u16) -> BalloonMesh {
        let mut mesh = BalloonMesh::default();
        let color = color.to_array();
        mesh.push_rounded_rect(self.content_rect, self.corner_radius, color, segments_per_corner);
        mesh.push_triangle(self.arrow_points(), color);
        mesh
    }
}

/// The inner card the content sits on, inset by the border width
pub fn card_rect(configuration: &TooltipConfiguration) -> Rect {
    Rect::from_origin_size(Point::ZERO, configuration.content_size())
        .offset_by(configuration.content_offset())
}

/// Mesh for the inner card
pub fn tessellate_card(
    configuration: &TooltipConfiguration,
    color: Color,
    segments_per_corner: u16,
) -> BalloonMesh {
    let mut mesh = BalloonMesh::default();
    mesh.push_rounded_rect(
        card_rect(configuration),
        configuration.content_corner_radius(),
        color.to_array(),
        segments_per_corner,
    );
    mesh
}
