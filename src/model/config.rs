/// Layout constants for the three-spoke compass.
#[derive(Debug, Clone, PartialEq)]
pub struct CompassProfile {
    pub radius_fraction: f64,
    pub label_offset: f64,
    pub ring_levels: [f64; 4],
    pub spoke_step_deg: f64,
    pub rotation_deg: f64,
}

impl CompassProfile {
    pub fn default_v1() -> Self {
        Self {
            radius_fraction: 0.35,
            label_offset: 30.0,
            ring_levels: [0.25, 0.5, 0.75, 1.0],
            spoke_step_deg: 120.0,
            rotation_deg: -90.0,
        }
    }

    pub fn with_label_offset(mut self, offset: f64) -> Self {
        self.label_offset = offset;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.radius_fraction > 0.0 && self.radius_fraction < 0.5) {
            return Err(format!(
                "radius fraction must be in (0, 0.5), got {}",
                self.radius_fraction
            ));
        }
        if !(self.label_offset.is_finite() && self.label_offset >= 0.0) {
            return Err(format!(
                "label offset must be finite and non-negative, got {}",
                self.label_offset
            ));
        }
        if self
            .ring_levels
            .iter()
            .any(|l| !(*l > 0.0 && *l <= 1.0))
        {
            return Err("ring levels must be in (0, 1]".to_string());
        }
        Ok(())
    }

    pub fn max_radius(&self, canvas_size: f64) -> f64 {
        canvas_size * self.radius_fraction
    }

    /// Offset is capped by the margin left outside the outer ring.
    pub fn label_radius(&self, canvas_size: f64) -> f64 {
        let max_radius = self.max_radius(canvas_size);
        let margin = canvas_size * 0.5 - max_radius;
        max_radius + self.label_offset.min(margin)
    }

    pub fn spoke_angle_deg(&self, index: usize) -> f64 {
        index as f64 * self.spoke_step_deg + self.rotation_deg
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/config.rs"]
mod tests;
