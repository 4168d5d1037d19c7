//! Journey types.
//!
//! A `Journey` is the ordered list of stations a traveller passes through:
//! the start, any stopovers, and the goal. Each consecutive pair is a leg
//! that is priced on its own.

use super::Station;

/// One consecutive pair of stations within a journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leg<'a> {
    /// Station the leg starts from
    pub from: &'a Station,
    /// Station the leg ends at
    pub to: &'a Station,
}

/// An ordered sequence of stations: `[start, stop…, goal]`.
///
/// # Invariants
///
/// - At least two stations (so at least one leg)
///
/// Stations may repeat; a journey that returns to its start is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    stations: Vec<Station>,
}

impl Journey {
    /// Constructs a journey from start, stopovers and goal.
    ///
    /// # Examples
    ///
    /// ```
    /// use fare_server::domain::{Journey, Station};
    ///
    /// let st = |s: &str| Station::parse(s).unwrap();
    /// let journey = Journey::from_parts(st("大阪梅田"), vec![st("十三")], st("淡路"));
    ///
    /// assert_eq!(journey.len(), 3);
    /// assert_eq!(journey.legs().count(), 2);
    /// ```
    pub fn from_parts(start: Station, stops: Vec<Station>, goal: Station) -> Self {
        let mut stations = Vec::with_capacity(stops.len() + 2);
        stations.push(start);
        stations.extend(stops);
        stations.push(goal);
        Journey { stations }
    }

    /// Returns the stations in travel order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Returns the number of stations (not legs).
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Always false; a journey has at least two stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Returns the start station.
    pub fn start(&self) -> &Station {
        &self.stations[0]
    }

    /// Returns the goal station.
    pub fn goal(&self) -> &Station {
        &self.stations[self.stations.len() - 1]
    }

    /// Iterates over the legs in travel order.
    pub fn legs(&self) -> impl Iterator<Item = Leg<'_>> {
        self.stations.windows(2).map(|w| Leg {
            from: &w[0],
            to: &w[1],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn st(s: &str) -> Station {
        Station::parse(s).unwrap()
    }

    #[test]
    fn from_parts_orders_stations() {
        let journey = Journey::from_parts(st("A"), vec![st("B"), st("C")], st("D"));
        let names: Vec<_> = journey.stations().iter().map(Station::as_str).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
        assert_eq!(journey.start(), &st("A"));
        assert_eq!(journey.goal(), &st("D"));
    }

    #[test]
    fn legs_are_consecutive_pairs() {
        let journey = Journey::from_parts(st("A"), vec![st("B")], st("C"));
        let legs: Vec<_> = journey
            .legs()
            .map(|l| (l.from.as_str(), l.to.as_str()))
            .collect();
        assert_eq!(legs, vec![("A", "B"), ("B", "C")]);
    }

    #[test]
    fn no_stops_is_one_leg() {
        let journey = Journey::from_parts(st("A"), vec![], st("A"));
        assert_eq!(journey.len(), 2);
        assert_eq!(journey.legs().count(), 1);
    }
}
