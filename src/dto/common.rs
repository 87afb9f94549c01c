//! Shared wire types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::field::Point;

/// A canvas coordinate pair as it appears on the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct PointDto {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl From<Point> for PointDto {
    fn from(point: Point) -> Self {
        Self {
            x: point.x,
            y: point.y,
        }
    }
}

impl From<PointDto> for Point {
    fn from(dto: PointDto) -> Self {
        Point::new(dto.x, dto.y)
    }
}
