//! Shape dimensions derived from the canvas edge length
//!
//! Every dimension uses truncating integer division, so small canvases can
//! collapse a shape to zero extent. Zero-extent shapes are not drawn.

/// Sizes of the three shapes drawn on a square icon canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconGeometry {
    /// Canvas edge length in pixels
    pub size: u32,
    /// Inset between the canvas edge and the background circle
    pub margin: u32,
    /// Diameter of the center dot
    pub dot_diameter: u32,
    /// Outer diameter of the ring
    pub ring_diameter: u32,
    /// Band width of the ring, measured inward from its outer edge
    pub ring_stroke: u32,
}

impl IconGeometry {
    pub fn for_size(size: u32) -> Self {
        Self {
            size,
            margin: size / 10,
            dot_diameter: size / 8,
            ring_diameter: size / 3,
            ring_stroke: size / 20,
        }
    }

    /// Canvas center, shared by all shapes
    pub fn center(&self) -> f32 {
        self.size as f32 / 2.0
    }

    /// Radius of the circle inscribed with `margin` on each side
    pub fn background_radius(&self) -> f32 {
        self.size.saturating_sub(2 * self.margin) as f32 / 2.0
    }

    pub fn dot_radius(&self) -> f32 {
        self.dot_diameter as f32 / 2.0
    }

    pub fn ring_outer_radius(&self) -> f32 {
        self.ring_diameter as f32 / 2.0
    }

    /// Radius of the path the ring stroke follows
    ///
    /// The stroke straddles its path, so it sits half a band inside the
    /// outer edge. The band is clamped to the ring radius.
    pub fn ring_path_radius(&self) -> f32 {
        let band = self.ring_band();
        self.ring_outer_radius() - band / 2.0
    }

    /// Ring band width, never wider than the ring radius
    pub fn ring_band(&self) -> f32 {
        (self.ring_stroke as f32).min(self.ring_outer_radius())
    }
}
