//! Stable ordering of a snapshot by a single key. Descending order is the
//! exact reverse of the stable ascending order, so ties end up reversed as
//! a block.

use crate::models::Country;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Case-insensitive lexicographic by name.
    Name,
    Population,
    Area,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

/// Return a new vector sorted by `key`. The input is untouched.
pub fn sort_countries(countries: &[Country], key: SortKey, direction: Direction) -> Vec<Country> {
    let mut out = countries.to_vec();
    match key {
        SortKey::Name => out.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        SortKey::Population => out.sort_by_key(|c| c.population),
        SortKey::Area => out.sort_by_key(|c| c.area),
    }
    if direction == Direction::Descending {
        out.reverse();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(name: &str, population: u64, area: u64) -> Country {
        Country {
            name: name.into(),
            population,
            area,
            continent: "Test".into(),
        }
    }

    #[test]
    fn name_sort_ignores_case() {
        let got = sort_countries(
            &[c("chile", 1, 1), c("Argentina", 2, 2), c("Bolivia", 3, 3)],
            SortKey::Name,
            Direction::Ascending,
        );
        let names: Vec<_> = got.iter().map(|x| x.name.as_str()).collect();
        assert_eq!(names, ["Argentina", "Bolivia", "chile"]);
    }

    #[test]
    fn sort_is_idempotent() {
        let once = sort_countries(
            &[c("B", 2, 2), c("A", 1, 1)],
            SortKey::Name,
            Direction::Ascending,
        );
        let twice = sort_countries(&once, SortKey::Name, Direction::Ascending);
        assert_eq!(once, twice);
    }

    #[test]
    fn population_sort_is_stable_on_ties() {
        // Same population: original relative order must survive.
        let got = sort_countries(
            &[c("First", 100, 9), c("Second", 100, 1), c("Tiny", 10, 5)],
            SortKey::Population,
            Direction::Ascending,
        );
        let names: Vec<_> = got.iter().map(|x| x.name.as_str()).collect();
        assert_eq!(names, ["Tiny", "First", "Second"]);
    }

    #[test]
    fn descending_is_exact_reverse_of_ascending() {
        let input = [c("A", 1, 10), c("B", 2, 20), c("C", 3, 20)];
        let mut asc = sort_countries(&input, SortKey::Area, Direction::Ascending);
        let desc = sort_countries(&input, SortKey::Area, Direction::Descending);
        asc.reverse();
        assert_eq!(asc, desc);
    }
}
