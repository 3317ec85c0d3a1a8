use crate::error::{MeteomaticsError, Result};

/// Query location: a single point or a rectangular grid.
///
/// Grid corners are stored as given; normalization to top/bottom and
/// left/right happens when the path segment is rendered, so the segment
/// is the same regardless of corner order.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateSpec {
    Point {
        lat: f64,
        lon: f64,
    },
    Grid {
        lat_min: f64,
        lon_min: f64,
        lat_max: f64,
        lon_max: f64,
        lat_step: f64,
        lon_step: f64,
    },
}

impl CoordinateSpec {
    pub fn point(lat: f64, lon: f64) -> Self {
        CoordinateSpec::Point { lat, lon }
    }

    /// Grid over the bounding box sampled at the given steps.
    /// Step values must be strictly positive.
    pub fn grid(
        lat_min: f64,
        lon_min: f64,
        lat_max: f64,
        lon_max: f64,
        lat_step: f64,
        lon_step: f64,
    ) -> Result<Self> {
        if !(lat_step > 0.0 && lon_step > 0.0) {
            return Err(MeteomaticsError::InvalidGridStep(format!(
                "step values must be positive, got {},{}",
                lat_step, lon_step
            )));
        }
        Ok(CoordinateSpec::Grid {
            lat_min,
            lon_min,
            lat_max,
            lon_max,
            lat_step,
            lon_step,
        })
    }

    /// Parse the `--bbox lat_min,lon_min,lat_max,lon_max` and
    /// `--grid-steps dlat,dlon` command-line strings into a grid spec.
    pub fn from_grid_args(bbox: &str, grid_steps: &str) -> Result<Self> {
        let corners = parse_floats(bbox).filter(|v| v.len() == 4).ok_or_else(|| {
            MeteomaticsError::InvalidBoundingBox(format!(
                "expected lat_min,lon_min,lat_max,lon_max, got '{}'",
                bbox
            ))
        })?;
        let steps = parse_floats(grid_steps)
            .filter(|v| v.len() == 2)
            .ok_or_else(|| {
                MeteomaticsError::InvalidGridStep(format!("expected dlat,dlon, got '{}'", grid_steps))
            })?;
        Self::grid(corners[0], corners[1], corners[2], corners[3], steps[0], steps[1])
    }

    /// Render the URL path segment for this location.
    ///
    /// Point: `{lat},{lon}`. Grid: `{top},{left}_{bottom},{right}:{dlat},{dlon}`.
    /// All values carry exactly 6 decimal digits, fixed-point.
    pub fn to_path_segment(&self) -> String {
        match self {
            CoordinateSpec::Point { lat, lon } => format!("{:.6},{:.6}", lat, lon),
            CoordinateSpec::Grid {
                lat_min,
                lon_min,
                lat_max,
                lon_max,
                lat_step,
                lon_step,
            } => {
                let lat_top = lat_min.max(*lat_max);
                let lat_bottom = lat_min.min(*lat_max);
                let lon_left = lon_min.min(*lon_max);
                let lon_right = lon_min.max(*lon_max);
                format!(
                    "{:.6},{:.6}_{:.6},{:.6}:{:.6},{:.6}",
                    lat_top, lon_left, lat_bottom, lon_right, lat_step, lon_step
                )
            }
        }
    }
}

fn parse_floats(input: &str) -> Option<Vec<f64>> {
    input.split(',').map(|part| part.trim().parse().ok()).collect()
}
