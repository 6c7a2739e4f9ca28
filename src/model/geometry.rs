use serde::{Deserialize, Serialize};

/// One projector entry: a label, a score and the score's maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    pub score: f64,
    pub maximum: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn polar(center: Point, radius: f64, angle_rad: f64) -> Self {
        Self {
            x: center.x + radius * angle_rad.cos(),
            y: center.y + radius * angle_rad.sin(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RingLevel {
    pub level: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Spoke {
    pub index: usize,
    pub angle_deg: f64,
    pub start: Point,
    pub end: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotPoint {
    pub index: usize,
    pub percentage: f64,
    pub radius: f64,
    pub position: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelAnchor {
    pub index: usize,
    pub name: String,
    pub score: f64,
    pub maximum: f64,
    pub position: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompassGeometry {
    pub canvas_size: f64,
    pub center: Point,
    pub max_radius: f64,
    pub label_radius: f64,
    pub rings: [RingLevel; 4],
    pub spokes: [Spoke; 3],
    pub polygon: [PlotPoint; 3],
    pub labels: [LabelAnchor; 3],
    pub overall_percentage: u32,
}

impl CompassGeometry {
    /// Every emitted coordinate, rings included as their axis-aligned extremes.
    pub fn coordinates(&self) -> Vec<Point> {
        let c = self.center;
        let mut out = vec![c];
        for ring in &self.rings {
            out.push(Point {
                x: c.x - ring.radius,
                y: c.y - ring.radius,
            });
            out.push(Point {
                x: c.x + ring.radius,
                y: c.y + ring.radius,
            });
        }
        for spoke in &self.spokes {
            out.push(spoke.start);
            out.push(spoke.end);
        }
        out.extend(self.polygon.iter().map(|p| p.position));
        out.extend(self.labels.iter().map(|l| l.position));
        out
    }

    /// Polygon vertices in spoke order; the shape closes back to the first.
    pub fn polygon_points(&self) -> [Point; 3] {
        self.polygon.map(|p| p.position)
    }
}
