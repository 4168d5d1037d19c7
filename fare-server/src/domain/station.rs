//! Station identifier type.

use std::fmt;
use std::sync::Arc;

/// Error returned when parsing an invalid station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStation {
    reason: &'static str,
}

/// A station on the network, identified by its name.
///
/// Station names are opaque: equality is exact string match, and no
/// normalisation is applied beyond rejecting blank input. The name is
/// reference-counted so that paths and adjacency lists can hold many
/// copies cheaply.
///
/// Ordering is lexicographic on the name, which is what the shortest-path
/// search uses to break ties between equally distant stations.
///
/// # Examples
///
/// ```
/// use fare_server::domain::Station;
///
/// let umeda = Station::parse("大阪梅田").unwrap();
/// assert_eq!(umeda.as_str(), "大阪梅田");
///
/// // Blank names are rejected
/// assert!(Station::parse("").is_err());
/// assert!(Station::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Station(Arc<str>);

impl Station {
    /// Parse a station name.
    ///
    /// The name is kept exactly as given; it must contain at least one
    /// non-whitespace character.
    pub fn parse(s: &str) -> Result<Self, InvalidStation> {
        if s.trim().is_empty() {
            return Err(InvalidStation {
                reason: "must not be blank",
            });
        }

        Ok(Station(Arc::from(s)))
    }

    /// Returns the station name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({})", self.as_str())
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Station {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
