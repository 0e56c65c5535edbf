use std::ops::{Add, Mul, Neg};

/// A position or offset on the playfield, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const fn new(x: i32, y: i32) -> Self {
        Vec2 { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<i32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: i32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl From<Direction> for Vec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => Vec2::new(0, -1),
            Direction::Down => Vec2::new(0, 1),
            Direction::Left => Vec2::new(-1, 0),
            Direction::Right => Vec2::new(1, 0),
        }
    }
}

/// Toroidal playfield of `width` x `height` pixels split into square cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
}

impl Grid {
    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// One cell's worth of movement in `dir`.
    pub fn step(&self, dir: Direction) -> Vec2 {
        Vec2::from(dir) * self.cell_size
    }

    pub fn wrapped_add(&self, pos: Vec2, delta: Vec2) -> Vec2 {
        Vec2::new(
            (pos.x + delta.x).rem_euclid(self.width),
            (pos.y + delta.y).rem_euclid(self.height),
        )
    }

    /// Pixel origin of the cell at (`column`, `row`).
    pub fn cell(&self, column: i32, row: i32) -> Vec2 {
        Vec2::new(column * self.cell_size, row * self.cell_size)
    }

    pub fn contains(&self, pos: Vec2) -> bool {
        (0..self.width).contains(&pos.x)
            && (0..self.height).contains(&pos.y)
            && pos.x % self.cell_size == 0
            && pos.y % self.cell_size == 0
    }
}
