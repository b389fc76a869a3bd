// patterns.rs - Preset patterns and random seeding

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::{Cell, Grid, Viewport, ascii};

pub struct Pattern {
    pub name: &'static str,
    pub art: &'static str,
}

impl Pattern {
    /// The pattern as a grid centred on the origin.
    pub fn grid(&self) -> Grid {
        ascii::parse(self.art)
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Pillars",
        art: "
o*o
o*o
*o*
o*o
o*o
o*o
o*o
*o*
o*o
o*o
",
    },
    Pattern {
        name: "Glider",
        art: "
.*.
..*
***
",
    },
    Pattern {
        name: "Blinker",
        art: "***",
    },
    Pattern {
        name: "Toad",
        art: "
.***
***.
",
    },
    Pattern {
        name: "Beacon",
        art: "
**..
**..
..**
..**
",
    },
    Pattern {
        name: "Pulsar",
        art: "
..***...***..
.............
*....*.*....*
*....*.*....*
*....*.*....*
..***...***..
.............
..***...***..
*....*.*....*
*....*.*....*
*....*.*....*
.............
..***...***..
",
    },
    Pattern {
        name: "R-pentomino",
        art: "
.**
**.
.*.
",
    },
    Pattern {
        name: "Gosper Glider Gun",
        art: "
........................*...........
......................*.*...........
............**......**............**
...........*...*....**............**
**........*.....*...**..............
**........*...*.**....*.*...........
..........*.....*.......*...........
...........*...*....................
............**......................
",
    },
];

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}

/// Fills the viewport window with roughly one live cell in three.
/// The same seed always produces the same grid.
pub fn random_fill(viewport: &Viewport, seed: u64) -> Grid {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    let mut state = hasher.finish();

    let mut cells = Vec::new();
    for y in viewport.y_range() {
        for x in viewport.x_range() {
            state = state.wrapping_mul(1103515245).wrapping_add(12345);
            if (state >> 16) % 3 == 0 {
                cells.push(Cell::new(x, y));
            }
        }
    }
    cells.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tick;

    fn population(name: &str) -> usize {
        find(name).unwrap().grid().len()
    }

    #[test]
    fn preset_populations() {
        assert_eq!(population("Pillars"), 12);
        assert_eq!(population("Glider"), 5);
        assert_eq!(population("Blinker"), 3);
        assert_eq!(population("Toad"), 6);
        assert_eq!(population("Beacon"), 8);
        assert_eq!(population("Pulsar"), 48);
        assert_eq!(population("R-pentomino"), 5);
        assert_eq!(population("Gosper Glider Gun"), 36);
    }

    #[test]
    fn find_ignores_case() {
        assert_eq!(find("gLiDeR").map(|p| p.name), Some("Glider"));
        assert!(find("nope").is_none());
    }

    #[test]
    fn toad_and_beacon_have_period_two() {
        for name in ["Toad", "Beacon", "Blinker"] {
            let g = find(name).unwrap().grid();
            let once = tick(&g);
            assert_ne!(once, g, "{name}");
            assert_eq!(tick(&once), g, "{name}");
        }
    }

    #[test]
    fn pulsar_has_period_three() {
        let g = find("Pulsar").unwrap().grid();
        let three = tick(&tick(&tick(&g)));
        assert_ne!(tick(&g), g);
        assert_eq!(three, g);
    }

    #[test]
    fn random_fill_stays_inside_viewport() {
        let viewport = Viewport::new(30, 20, Cell::new(100, -50));
        let g = random_fill(&viewport, 42);
        assert!(!g.is_empty());
        assert!(g.cells().all(|cell| viewport.contains(cell)));
        assert!(g.len() < 30 * 20 / 2);
    }

    #[test]
    fn random_fill_is_deterministic() {
        let viewport = Viewport::new(16, 16, Cell::ORIGIN);
        assert_eq!(random_fill(&viewport, 7), random_fill(&viewport, 7));
    }
}
