use life_bench::{Cell, Grid, MovingAverage};
use proptest::prelude::*;

/// Straightforward stepper over a copy of the old generation
fn reference_step(cells: &[Cell], width: usize, height: usize) -> Vec<Cell> {
    let mut next = vec![Cell::Dead; cells.len()];
    for row in 0..height {
        for col in 0..width {
            let mut count = 0u8;
            for dr in -1isize..=1 {
                for dc in -1isize..=1 {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    let r = (row as isize + dr).rem_euclid(height as isize) as usize;
                    let c = (col as isize + dc).rem_euclid(width as isize) as usize;
                    if cells[r * width + c].is_alive() {
                        count += 1;
                    }
                }
            }
            next[row * width + col] = cells[row * width + col].next(count);
        }
    }
    next
}

fn arb_grid() -> impl Strategy<Value = Grid> {
    (1usize..12, 1usize..12).prop_flat_map(|(width, height)| {
        prop::collection::vec(any::<bool>(), width * height).prop_map(move |alive| {
            let cells = alive.into_iter().map(Cell::from).collect();
            Grid::from_cells(width, height, cells).unwrap()
        })
    })
}

proptest! {
    #[test]
    fn step_matches_reference(mut grid in arb_grid(), steps in 1usize..6) {
        let (width, height) = (grid.width(), grid.height());
        for _ in 0..steps {
            let saved = grid.current_state().to_vec();
            grid.step();
            let expected = reference_step(&saved, width, height);
            prop_assert_eq!(grid.current_state(), expected.as_slice());
        }
    }

    #[test]
    fn text_roundtrip(grid in arb_grid()) {
        let text = grid.render_as_text();
        prop_assert_eq!(text.lines().count(), grid.height());
        let parsed = Grid::from_text(&text).unwrap();
        prop_assert_eq!(parsed.current_state(), grid.current_state());
    }

    #[test]
    fn render_does_not_mutate(mut grid in arb_grid()) {
        grid.step();
        let before = grid.current_state().to_vec();
        let _ = grid.render_as_text();
        prop_assert_eq!(grid.current_state(), before.as_slice());
    }

    #[test]
    fn canonical_seed_for_any_size(width in 1usize..40, height in 1usize..40) {
        let grid = Grid::new(width, height).unwrap();
        for (i, byte) in grid.as_bytes().iter().enumerate() {
            prop_assert_eq!(*byte == 1, i % 2 == 0 || i % 7 == 0);
        }
    }

    #[test]
    fn average_matches_naive_window(
        capacity in 1usize..16,
        values in prop::collection::vec(-1000i32..1000, 1..64),
    ) {
        let mut avg = MovingAverage::new(capacity).unwrap();
        for (i, &v) in values.iter().enumerate() {
            let reported = avg.add(v as f64);
            let start = (i + 1).saturating_sub(capacity);
            let window = &values[start..=i];
            let expected = window.iter().map(|&x| x as f64).sum::<f64>() / window.len() as f64;
            prop_assert!((reported - expected).abs() < 1e-9);

            let seen = &values[..=i];
            prop_assert_eq!(avg.min(), *seen.iter().min().unwrap() as f64);
            prop_assert_eq!(avg.max(), *seen.iter().max().unwrap() as f64);
            prop_assert_eq!(avg.len(), window.len());
        }
    }
}
