/// Camera manages zoom and pan over the space-time diagram.
/// Columns are ring indices, rows are generations.
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    pub zoom: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
        }
    }

    pub fn zoom_in(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(0.5, 8.0);
    }

    pub fn zoom_out(&mut self, factor: f32) {
        self.zoom = (self.zoom / factor).clamp(0.5, 8.0);
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Screen position of the top-left corner of a diagram square
    pub fn cell_to_screen(&self, column: usize, generation: u32, cell_size: f32) -> (f32, f32) {
        let size = cell_size * self.zoom;
        (
            column as f32 * size + self.offset_x,
            generation as f32 * size + self.offset_y,
        )
    }

    /// Diagram square under a screen position, if it lies right of and below the origin
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32, cell_size: f32) -> Option<(usize, u32)> {
        let size = cell_size * self.zoom;
        let column = ((screen_x - self.offset_x) / size).floor();
        let generation = ((screen_y - self.offset_y) / size).floor();
        (column >= 0.0 && generation >= 0.0).then(|| (column as usize, generation as u32))
    }

    /// Reset camera to default
    pub fn reset(&mut self) {
        self.offset_x = 0.0;
        self.offset_y = 0.0;
        self.zoom = 1.0;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_clamps() {
        let mut camera = Camera::new();
        for _ in 0..100 {
            camera.zoom_in(2.0);
        }
        assert_eq!(camera.zoom, 8.0);
        for _ in 0..100 {
            camera.zoom_out(2.0);
        }
        assert_eq!(camera.zoom, 0.5);
    }

    #[test]
    fn test_screen_cell_round_trip() {
        let mut camera = Camera::new();
        camera.pan(20.0, 10.0);
        camera.zoom_in(2.0);
        let (x, y) = camera.cell_to_screen(32, 5, 10.0);
        assert_eq!((x, y), (660.0, 110.0));
        assert_eq!(camera.screen_to_cell(x + 1.0, y + 1.0, 10.0), Some((32, 5)));
        assert_eq!(camera.screen_to_cell(0.0, 0.0, 10.0), None);
    }

    #[test]
    fn test_reset() {
        let mut camera = Camera::new();
        camera.pan(5.0, 5.0);
        camera.zoom_in(1.5);
        camera.reset();
        assert_eq!((camera.offset_x, camera.offset_y, camera.zoom), (0.0, 0.0, 1.0));
    }
}
