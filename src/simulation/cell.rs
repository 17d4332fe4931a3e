use crate::config::{ALIVE_ASCII, ALIVE_GLYPH, DEAD_ASCII, DEAD_GLYPH};

/// State of a single cell.
///
/// Layout: 1 byte, `Dead = 0`, `Alive = 1`. A `&[Cell]` can be viewed as
/// `&[u8]` without copying, so external renderers can read the grid directly.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, bytemuck::NoUninit)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    /// Canonical seed: flat index `i` is alive if divisible by 2 or by 7
    pub fn seeded(index: usize) -> Self {
        if index % 2 == 0 || index % 7 == 0 {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }

    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// B3/S23: survive on 2 or 3 live neighbours, birth on exactly 3
    #[inline]
    pub fn next(self, live_neighbors: u8) -> Self {
        match (self, live_neighbors) {
            (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Cell::Alive => ALIVE_GLYPH,
            Cell::Dead => DEAD_GLYPH,
        }
    }

    /// Parse a text glyph; accepts the render glyphs and their ASCII forms
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            ALIVE_GLYPH | ALIVE_ASCII => Some(Cell::Alive),
            DEAD_GLYPH | DEAD_ASCII => Some(Cell::Dead),
            _ => None,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_size() {
        assert_eq!(std::mem::size_of::<Cell>(), 1);
        assert_eq!(Cell::Dead as u8, 0);
        assert_eq!(Cell::Alive as u8, 1);
    }

    #[test]
    fn test_seed_rule() {
        let alive: Vec<usize> = (0..16).filter(|&i| Cell::seeded(i).is_alive()).collect();
        assert_eq!(alive, vec![0, 2, 4, 6, 7, 8, 10, 12, 14]);
    }

    #[test]
    fn test_transition_table() {
        for n in 0..=8u8 {
            let survives = n == 2 || n == 3;
            assert_eq!(Cell::Alive.next(n).is_alive(), survives, "alive with {n}");
            assert_eq!(Cell::Dead.next(n).is_alive(), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn test_glyph_roundtrip() {
        for cell in [Cell::Alive, Cell::Dead] {
            assert_eq!(Cell::from_glyph(cell.glyph()), Some(cell));
        }
        assert_eq!(Cell::from_glyph('#'), Some(Cell::Alive));
        assert_eq!(Cell::from_glyph('.'), Some(Cell::Dead));
        assert_eq!(Cell::from_glyph('x'), None);
    }
}
