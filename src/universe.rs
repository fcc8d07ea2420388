//! The three-set Venn universe.
//!
//! Regions are numbered 1 to 8, one per combination of membership in `A`,
//! `B` and `C`:
//!
//! | region | A | B | C |
//! |--------|---|---|---|
//! | 1      | x |   |   |
//! | 2      |   | x |   |
//! | 3      |   |   | x |
//! | 4      | x |   | x |
//! | 5      | x | x |   |
//! | 6      |   | x | x |
//! | 7      | x | x | x |
//! | 8      |   |   |   |

use crate::bitset::RegionSet;

/// A named set and the regions it covers.
pub type SetDefinition = (char, &'static [u32]);

/// The sets that partition the universe into regions.
pub const BASE_SETS: [char; 3] = ['A', 'B', 'C'];

static STANDARD_TABLE: [SetDefinition; 5] = [
    ('A', &[1, 4, 5, 7]),
    ('B', &[2, 5, 6, 7]),
    ('C', &[3, 4, 6, 7]),
    ('U', &[1, 2, 3, 4, 5, 6, 7, 8]),
    ('∅', &[]),
];

/// The reference Venn diagram of three sets.
pub static STANDARD: Universe = Universe::new(&STANDARD_TABLE, 'U');

/// An immutable table of set definitions, plus the name of the universal set.
#[derive(Debug, Copy, Clone)]
pub struct Universe {
    table: &'static [SetDefinition],
    universal: char,
}

impl Universe {
    pub const fn new(table: &'static [SetDefinition], universal: char) -> Self {
        Self { table, universal }
    }

    /// Regions of the named set, or `None` if no such set is defined.
    pub fn lookup(&self, name: char) -> Option<&'static [u32]> {
        self.table.iter().find(|(n, _)| *n == name).map(|(_, regions)| *regions)
    }

    /// Regions of the named set as a [`RegionSet`]; unknown names give the
    /// empty set.
    pub fn regions(&self, name: char) -> RegionSet {
        self.lookup(name).map(RegionSet::from).unwrap_or_default()
    }

    /// All regions.
    pub fn universal_set(&self) -> RegionSet {
        self.regions(self.universal)
    }

    pub fn is_region(&self, id: u32) -> bool {
        self.lookup(self.universal).is_some_and(|all| all.contains(&id))
    }

    /// The base sets that contain `region`, in `A`, `B`, `C` order.
    ///
    /// Returns `None` if `region` is not a region of this universe; the
    /// outside region yields an empty list.
    pub fn sets_containing(&self, region: u32) -> Option<Vec<char>> {
        if !self.is_region(region) {
            return None;
        }
        let sets = BASE_SETS
            .iter()
            .copied()
            .filter(|&name| self.lookup(name).is_some_and(|regions| regions.contains(&region)))
            .collect();
        Some(sets)
    }
}
