//! Grid coordinates and Manhattan distance

pub type Point2 = (i64, i64);
pub type Point3 = (i64, i64, i64);

pub fn manhattan2(a: Point2, b: Point2) -> i64 {
    (a.0 - b.0).abs() + (a.1 - b.1).abs()
}

pub fn manhattan3(a: Point3, b: Point3) -> i64 {
    (a.0 - b.0).abs() + (a.1 - b.1).abs() + (a.2 - b.2).abs()
}

/// Compass heading on a grid where north is `-y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    pub fn turn_left(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    pub fn turn_right(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    pub fn delta(self) -> Point2 {
        match self {
            Heading::North => (0, -1),
            Heading::East => (1, 0),
            Heading::South => (0, 1),
            Heading::West => (-1, 0),
        }
    }

    /// Heading for one of `^ > v <`.
    pub fn from_arrow(c: char) -> Option<Self> {
        match c {
            '^' => Some(Heading::North),
            '>' => Some(Heading::East),
            'v' => Some(Heading::South),
            '<' => Some(Heading::West),
            _ => None,
        }
    }
}

pub fn step(p: Point2, heading: Heading) -> Point2 {
    let (dx, dy) = heading.delta();
    (p.0 + dx, p.1 + dy)
}
