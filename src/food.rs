use rand::Rng;

use crate::geometry::{Grid, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    pos: Vec2,
}

impl Food {
    pub fn new(grid: Grid, rng: &mut impl Rng) -> Self {
        let mut food = Food { pos: Vec2::default() };
        food.relocate(grid, rng);
        food
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    /// Moves to a uniformly random cell. The snake's cells are not excluded,
    /// so food can land underneath it.
    pub fn relocate(&mut self, grid: Grid, rng: &mut impl Rng) {
        self.pos = grid.cell(
            rng.gen_range(0..grid.columns()),
            rng.gen_range(0..grid.rows()),
        );
        debug_assert!(grid.contains(self.pos));
    }

    #[cfg(test)]
    pub(crate) fn at(pos: Vec2) -> Self {
        Food { pos }
    }
}
