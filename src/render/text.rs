use crate::simulation::Grid;

/// Text renderer that reuses its output string between frames
#[derive(Default)]
pub struct TextRenderer {
    buffer: String,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the current generation, same output as `Grid::render_as_text`
    pub fn draw(&mut self, grid: &Grid) -> &str {
        self.buffer.clear();
        for row in grid.current_state().chunks(grid.width()) {
            self.buffer.extend(row.iter().map(|cell| cell.glyph()));
            self.buffer.push('\n');
        }
        &self.buffer
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}
