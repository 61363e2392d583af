//! Outbreak chain reactions.
//!
//! A saturated city spills one infection into each neighbor. A neighbor that
//! is itself saturated outbreaks in turn. The chain carries a visited set
//! seeded with the origin, so on a cyclic graph every city outbreaks at most
//! once per chain and the recursion always terminates.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::engine::OUTBREAK_THRESHOLD;
use crate::core::{City, InfectionMap};

/// One resolved chain reaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutbreakChain {
    /// Cities that have outbroken in this chain.
    visited: FxHashSet<City>,

    /// Outbreak order, origin first.
    order: SmallVec<[City; 4]>,
}

impl OutbreakChain {
    /// Outbreak `origin` and resolve the whole chain against `infections`.
    ///
    /// Saturated cities keep their level; only their unvisited neighbors
    /// change.
    pub fn resolve(infections: &mut InfectionMap, origin: City) -> Self {
        let mut chain = Self {
            visited: FxHashSet::default(),
            order: SmallVec::new(),
        };
        chain.visited.insert(origin);
        chain.outbreak(infections, origin);
        chain
    }

    fn outbreak(&mut self, infections: &mut InfectionMap, city: City) {
        self.order.push(city);

        for &neighbor in city.neighbors() {
            if self.visited.contains(&neighbor) {
                continue;
            }
            if infections.level(neighbor) < OUTBREAK_THRESHOLD {
                infections.increment(neighbor);
            } else {
                self.visited.insert(neighbor);
                self.outbreak(infections, neighbor);
            }
        }
    }

    /// The city whose infection started the chain.
    #[must_use]
    pub fn origin(&self) -> City {
        self.order[0]
    }

    /// Number of outbreaks in the chain, one per city.
    #[must_use]
    pub fn outbreaks(&self) -> u32 {
        self.order.len() as u32
    }

    /// Outbroken cities in the order they went off.
    #[must_use]
    pub fn cities(&self) -> &[City] {
        &self.order
    }

    #[must_use]
    pub fn contains(&self, city: City) -> bool {
        self.visited.contains(&city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saturate(map: &mut InfectionMap, cities: &[City]) {
        for &c in cities {
            map.set(c, OUTBREAK_THRESHOLD);
        }
    }

    #[test]
    fn test_single_outbreak_spreads_to_neighbors() {
        let mut map = InfectionMap::new();
        saturate(&mut map, &[City::SanFrancisco]);

        let chain = OutbreakChain::resolve(&mut map, City::SanFrancisco);

        assert_eq!(chain.cities(), &[City::SanFrancisco]);
        assert_eq!(map.level(City::SanMateo), 1);
        assert_eq!(map.level(City::Sausalito), 1);
        assert_eq!(map.level(City::Napa), 1);
        assert_eq!(map.total(), u32::from(OUTBREAK_THRESHOLD) + 3);
    }

    #[test]
    fn test_chain_through_triangle_visits_each_city_once() {
        // Napa, Berkeley and Oakland are mutually adjacent.
        let mut map = InfectionMap::new();
        saturate(&mut map, &[City::Napa, City::Berkeley, City::Oakland]);

        let chain = OutbreakChain::resolve(&mut map, City::Napa);

        assert_eq!(chain.outbreaks(), 3);
        assert_eq!(chain.cities(), &[City::Napa, City::Berkeley, City::Oakland]);
        assert!(chain.contains(City::Oakland));
        assert!(!chain.contains(City::Hayward));

        // Sonoma borders both Napa and Berkeley.
        assert_eq!(map.level(City::Sonoma), 2);
        assert_eq!(map.level(City::Hayward), 1);
        assert_eq!(map.level(City::SanFrancisco), 1);
        assert_eq!(map.level(City::Sausalito), 1);
        for c in [City::Napa, City::Berkeley, City::Oakland] {
            assert_eq!(map.level(c), OUTBREAK_THRESHOLD);
        }
    }

    #[test]
    fn test_fully_saturated_board_terminates() {
        let mut map = InfectionMap::new();
        saturate(&mut map, &City::ALL);

        let chain = OutbreakChain::resolve(&mut map, City::Sonoma);

        assert_eq!(chain.outbreaks() as usize, City::COUNT);
        for city in City::ALL {
            assert_eq!(map.level(city), OUTBREAK_THRESHOLD);
        }
    }

    #[test]
    fn test_chain_never_exceeds_threshold() {
        let mut map = InfectionMap::new();
        for (i, city) in City::ALL.iter().enumerate() {
            map.set(*city, (i % 4) as u8);
        }
        map.set(City::Hayward, OUTBREAK_THRESHOLD);

        OutbreakChain::resolve(&mut map, City::Hayward);

        assert!(map.max_level() <= OUTBREAK_THRESHOLD);
    }
}
