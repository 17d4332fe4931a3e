use crate::config::{ALIVE_RGBA, DEAD_RGBA};
use crate::error::{Error, Result};
use crate::simulation::{Cell, Grid};

/// One RGBA pixel (4 bytes)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const fn from_rgba([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }

    pub const ALIVE: Pixel = Pixel::from_rgba(ALIVE_RGBA);
    pub const DEAD: Pixel = Pixel::from_rgba(DEAD_RGBA);

    fn for_cell(cell: Cell) -> Self {
        match cell {
            Cell::Alive => Self::ALIVE,
            Cell::Dead => Self::DEAD,
        }
    }
}

/// Reusable RGBA image of a grid, one pixel per cell.
///
/// Allocated once for a fixed size and redrawn in place every frame.
pub struct PixelBuffer {
    pixels: Vec<Pixel>,
    width: usize,
    height: usize,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        log::debug!("Created {}x{} pixel buffer", width, height);
        Self {
            pixels: vec![Pixel::DEAD; width * height],
            width,
            height,
        }
    }

    /// Create a buffer sized for `grid`
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.width(), grid.height())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Paint the current generation and return the RGBA bytes
    pub fn draw(&mut self, grid: &Grid) -> Result<&[u8]> {
        if grid.width() != self.width
            || grid.height() != self.height
            || grid.current_state().len() != self.pixels.len()
        {
            return Err(Error::DimensionMismatch {
                expected_width: self.width,
                expected_height: self.height,
                width: grid.width(),
                height: grid.height(),
            });
        }

        for (pixel, &cell) in self.pixels.iter_mut().zip(grid.current_state()) {
            *pixel = Pixel::for_cell(cell);
        }
        Ok(self.as_bytes())
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// RGBA bytes of the last drawn frame, row-major
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_size() {
        assert_eq!(std::mem::size_of::<Pixel>(), 4);
    }

    #[test]
    fn test_draw_layout() {
        let grid = Grid::new(3, 1).unwrap();
        let mut buffer = PixelBuffer::for_grid(&grid);
        let bytes = buffer.draw(&grid).unwrap();
        assert_eq!(
            bytes,
            &[255, 0, 0, 255, 255, 0, 0, 0, 255, 0, 0, 255]
        );
    }

    #[test]
    fn test_redraw_follows_grid() {
        let mut grid = Grid::new(8, 8).unwrap();
        let mut buffer = PixelBuffer::for_grid(&grid);
        grid.step();
        buffer.draw(&grid).unwrap();

        for (pixel, cell) in buffer.pixels().iter().zip(grid.current_state()) {
            assert_eq!(pixel.a == 255, cell.is_alive());
        }
    }

    #[test]
    fn test_draw_covers_whole_buffer() {
        let grid = Grid::new(2, 2).unwrap();
        let mut buffer = PixelBuffer::for_grid(&grid);
        assert_eq!((buffer.width(), buffer.height()), (2, 2));
        assert_eq!(buffer.draw(&grid).unwrap().len(), 16);

        // A larger buffer never paints a smaller grid into part of itself
        let mut larger = PixelBuffer::new(4, 4);
        assert!(larger.draw(&grid).is_err());
        assert_eq!(larger.as_bytes().len(), 64);
    }

    #[test]
    fn test_size_mismatch() {
        let grid = Grid::new(4, 4).unwrap();
        let mut buffer = PixelBuffer::new(4, 5);
        assert!(matches!(
            buffer.draw(&grid),
            Err(Error::DimensionMismatch { expected_height: 5, height: 4, .. })
        ));
    }
}
