use crate::chart::bounds::PlotBounds;

/// Maps data coordinates onto a pixel rectangle with the y axis pointing up.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub bounds: PlotBounds,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(bounds: PlotBounds, width: f32, height: f32) -> Self {
        Self {
            bounds,
            width,
            height,
        }
    }

    pub fn to_screen(&self, x: f64, y: f64) -> (f32, f32) {
        let nx = (x - self.bounds.x_min) / self.bounds.width();
        let ny = (y - self.bounds.y_min) / self.bounds.height();
        (
            (nx * self.width as f64) as f32,
            (self.height as f64 - ny * self.height as f64) as f32,
        )
    }

    pub fn to_data(&self, sx: f32, sy: f32) -> (f64, f64) {
        let nx = sx as f64 / self.width as f64;
        let ny = (self.height as f64 - sy as f64) / self.height as f64;
        (
            self.bounds.x_min + nx * self.bounds.width(),
            self.bounds.y_min + ny * self.bounds.height(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        let bounds = PlotBounds {
            x_min: -3.0,
            x_max: 3.0,
            y_min: 0.0,
            y_max: 60.0,
        };
        Viewport::new(bounds, 600.0, 300.0)
    }

    #[test]
    fn corners_map_to_pixel_edges() {
        let view = viewport();
        assert_eq!(view.to_screen(-3.0, 0.0), (0.0, 300.0));
        assert_eq!(view.to_screen(3.0, 60.0), (600.0, 0.0));
        assert_eq!(view.to_screen(0.0, 30.0), (300.0, 150.0));
    }

    #[test]
    fn to_data_inverts_to_screen() {
        let view = viewport();
        let (sx, sy) = view.to_screen(1.25, 42.0);
        let (x, y) = view.to_data(sx, sy);
        assert!((x - 1.25).abs() < 1e-3);
        assert!((y - 42.0).abs() < 1e-3);
    }
}
