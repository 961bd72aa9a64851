use pixel_surface::{Color, ColorGrid};

/// Ages past this all share the last color of the ramp
const MAX_AGE: u16 = 64;

/// Conway's Game of Life on a wrapping board
///
/// Each live cell remembers how many generations it has survived, which
/// drives its color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Life {
    rows: usize,
    cols: usize,
    ages: Vec<u16>,
}

impl Life {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ages: vec![0; rows * cols],
        }
    }

    /// Board with an R-pentomino in the middle and a glider in the corner
    pub fn seeded(rows: usize, cols: usize) -> Self {
        let mut life = Self::new(rows, cols);
        let (mid_r, mid_c) = (rows / 2, cols / 2);
        for (dr, dc) in [(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)] {
            life.set_alive(mid_r + dr, mid_c + dc);
        }
        for (r, c) in [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)] {
            life.set_alive(r, c);
        }
        life
    }

    pub fn set_alive(&mut self, row: usize, col: usize) {
        if row < self.rows && col < self.cols {
            let cell = &mut self.ages[row * self.cols + col];
            *cell = (*cell).max(1);
        }
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.ages[row * self.cols + col] > 0
    }

    pub fn population(&self) -> usize {
        self.ages.iter().filter(|age| **age > 0).count()
    }

    /// Advance one generation
    pub fn step(&mut self) {
        if self.rows == 0 || self.cols == 0 {
            return;
        }

        let mut next = vec![0; self.ages.len()];
        for row in 0..self.rows {
            for col in 0..self.cols {
                let index = row * self.cols + col;
                let age = self.ages[index];
                next[index] = match (age > 0, self.neighbours(row, col)) {
                    (true, 2) | (true, 3) => (age + 1).min(MAX_AGE),
                    (false, 3) => 1,
                    _ => 0,
                };
            }
        }
        self.ages = next;
    }

    /// Live cells among the distinct wrapped neighbours of `(row, col)`
    fn neighbours(&self, row: usize, col: usize) -> usize {
        let rows = wrapped(row, self.rows);
        let cols = wrapped(col, self.cols);

        rows.iter()
            .flat_map(|&r| cols.iter().map(move |&c| (r, c)))
            .filter(|&(r, c)| (r, c) != (row, col) && self.ages[r * self.cols + c] > 0)
            .count()
    }
}

/// `index` and its wrapped neighbours on an axis of `len`, without repeats
fn wrapped(index: usize, len: usize) -> Vec<usize> {
    let mut around = vec![(index + len - 1) % len, index, (index + 1) % len];
    around.sort_unstable();
    around.dedup();
    around
}

impl ColorGrid for Life {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn color_at(&self, row: usize, col: usize) -> Option<Color> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let age = self.ages[row * self.cols + col];
        if age == 0 {
            return Some(Color::BLACK);
        }
        let hue = 0.55 - 0.55 * f32::from(age) / f32::from(MAX_AGE);
        Some(Color::from_hsv(hue, 0.8, 1.0))
    }
}
