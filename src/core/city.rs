//! The fixed city map.
//!
//! Thirteen Bay Area cities joined by an undirected adjacency graph. The graph
//! is static data: built into the binary, never mutated, shared by every
//! board state.

use serde::{Deserialize, Serialize};

/// A location on the board.
///
/// Discriminants are dense (`0..City::COUNT`) so a city can index fixed-size
/// per-city arrays directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum City {
    Sonoma = 0,
    Berkeley,
    Oakland,
    Hayward,
    Pleasanton,
    Fremont,
    SanJose,
    Sunnyvale,
    LosAltos,
    SanMateo,
    SanFrancisco,
    Sausalito,
    Napa,
}

impl City {
    /// Number of cities on the board.
    pub const COUNT: usize = 13;

    /// Every city, in discriminant order.
    pub const ALL: [City; City::COUNT] = [
        City::Sonoma,
        City::Berkeley,
        City::Oakland,
        City::Hayward,
        City::Pleasanton,
        City::Fremont,
        City::SanJose,
        City::Sunnyvale,
        City::LosAltos,
        City::SanMateo,
        City::SanFrancisco,
        City::Sausalito,
        City::Napa,
    ];

    /// Where both pawns begin the game.
    pub const START: City = City::SanFrancisco;

    /// Dense index of this city.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a city by dense index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<City> {
        City::ALL.get(index).copied()
    }

    /// Cities directly reachable from this one, in board order.
    #[must_use]
    pub fn neighbors(self) -> &'static [City] {
        use City::*;

        match self {
            Sonoma => &[Berkeley, Napa],
            Berkeley => &[Sonoma, Oakland, Napa],
            Oakland => &[Berkeley, Napa, Hayward],
            Hayward => &[Oakland, SanMateo, Pleasanton],
            Pleasanton => &[Hayward, Fremont],
            Fremont => &[Hayward, Pleasanton, SanJose],
            SanJose => &[Fremont, Sunnyvale],
            Sunnyvale => &[SanJose, LosAltos, SanMateo],
            LosAltos => &[SanMateo, Sunnyvale],
            SanMateo => &[Sunnyvale, LosAltos, SanFrancisco, Hayward],
            SanFrancisco => &[SanMateo, Sausalito, Napa],
            Sausalito => &[SanFrancisco, Napa],
            Napa => &[SanFrancisco, Sausalito, Sonoma, Berkeley, Oakland],
        }
    }

    /// Check whether `other` is one hop away.
    #[must_use]
    pub fn is_adjacent(self, other: City) -> bool {
        self.neighbors().contains(&other)
    }

    /// Upper snake case name, e.g. `SAN_FRANCISCO`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            City::Sonoma => "SONOMA",
            City::Berkeley => "BERKELEY",
            City::Oakland => "OAKLAND",
            City::Hayward => "HAYWARD",
            City::Pleasanton => "PLEASANTON",
            City::Fremont => "FREMONT",
            City::SanJose => "SAN_JOSE",
            City::Sunnyvale => "SUNNYVALE",
            City::LosAltos => "LOS_ALTOS",
            City::SanMateo => "SAN_MATEO",
            City::SanFrancisco => "SAN_FRANCISCO",
            City::Sausalito => "SAUSALITO",
            City::Napa => "NAPA",
        }
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[test]
    fn test_indices_are_dense() {
        for (i, city) in City::ALL.iter().enumerate() {
            assert_eq!(city.index(), i);
            assert_eq!(City::from_index(i), Some(*city));
        }
        assert_eq!(City::from_index(City::COUNT), None);
    }

    #[test]
    fn test_graph_is_symmetric() {
        for city in City::ALL {
            for &neighbor in city.neighbors() {
                assert!(
                    neighbor.is_adjacent(city),
                    "{} lists {} but not the reverse",
                    city,
                    neighbor
                );
            }
        }
    }

    #[test]
    fn test_graph_has_no_self_loops_or_duplicates() {
        for city in City::ALL {
            let neighbors = city.neighbors();
            assert!(!neighbors.contains(&city));
            for (i, a) in neighbors.iter().enumerate() {
                assert!(!neighbors[i + 1..].contains(a));
            }
        }
    }

    #[test]
    fn test_graph_is_connected() {
        let mut seen = [false; City::COUNT];
        let mut queue = VecDeque::from([City::START]);
        seen[City::START.index()] = true;

        while let Some(city) = queue.pop_front() {
            for &n in city.neighbors() {
                if !seen[n.index()] {
                    seen[n.index()] = true;
                    queue.push_back(n);
                }
            }
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_every_city_has_a_neighbor() {
        for city in City::ALL {
            assert!(!city.neighbors().is_empty());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(City::SanFrancisco.to_string(), "SAN_FRANCISCO");
        assert_eq!(City::Napa.to_string(), "NAPA");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&City::LosAltos).unwrap();
        let deserialized: City = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, City::LosAltos);
    }
}
