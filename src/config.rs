use std::time::Duration;

/// Default grid dimensions (128x128 = 16K cells)
pub const GRID_WIDTH: usize = 128;
pub const GRID_HEIGHT: usize = 128;

/// Number of samples retained by the per-scenario moving average
pub const AVERAGE_WINDOW: usize = 1000;

/// Frames run per scenario when no count is given on the command line
pub const DEFAULT_FRAMES: usize = 500;

// ============================================
// Seeding
// ============================================

/// Fraction of cells alive in a random soup
pub const RANDOM_DENSITY: f64 = 0.35;

// ============================================
// Rendering
// ============================================

/// Glyph for a live cell in text output
pub const ALIVE_GLYPH: char = '◼';

/// Glyph for a dead cell in text output
pub const DEAD_GLYPH: char = '◻';

/// ASCII alternatives accepted when parsing text grids
pub const ALIVE_ASCII: char = '#';
pub const DEAD_ASCII: char = '.';

/// RGBA for a live cell: opaque red
pub const ALIVE_RGBA: [u8; 4] = [255, 0, 0, 255];

/// RGBA for a dead cell: the same red, fully transparent
pub const DEAD_RGBA: [u8; 4] = [255, 0, 0, 0];

// ============================================
// Harness
// ============================================

/// How often the frame counter reports
pub const FPS_REPORT_INTERVAL: Duration = Duration::from_secs(1);
