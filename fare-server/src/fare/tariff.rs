//! Distance-banded fare tables.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// One tariff band: distances up to and including `up_to_km` cost `fare`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Inclusive upper bound in kilometres
    pub up_to_km: f64,
    /// Fare in yen
    pub fare: u32,
}

/// Errors from constructing or loading a [`Tariff`].
#[derive(Debug, thiserror::Error)]
pub enum TariffError {
    /// No bands were given
    #[error("tariff must have at least one band")]
    Empty,

    /// A band's bound is NaN or infinite
    #[error("band {index}: upper bound must be finite")]
    NonFinite { index: usize },

    /// Bounds are not strictly ascending
    #[error("band {index}: upper bound {km} does not exceed the previous band")]
    NotAscending { index: usize, km: f64 },

    /// Failed to read a tariff file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a tariff file
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Raw form of a tariff as written in configuration files.
#[derive(Deserialize)]
struct RawTariff {
    bands: Vec<Band>,
    beyond: u32,
}

impl TryFrom<RawTariff> for Tariff {
    type Error = TariffError;

    fn try_from(raw: RawTariff) -> Result<Self, Self::Error> {
        Tariff::new(raw.bands, raw.beyond)
    }
}

/// Maps a distance to a fare through ascending distance bands.
///
/// The fare is that of the first band whose upper bound is at least the
/// distance. Distances past the last band pay the `beyond` fare. Zero and
/// negative distances fall into the first band.
///
/// # Examples
///
/// ```
/// use fare_server::fare::Tariff;
///
/// let tariff = Tariff::hankyu();
/// assert_eq!(tariff.fare_for(4.0), 170);
/// assert_eq!(tariff.fare_for(4.01), 200);
/// assert_eq!(tariff.fare_for(120.0), 640);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTariff")]
pub struct Tariff {
    bands: Vec<Band>,
    beyond: u32,
}

impl Tariff {
    /// Create a tariff from bands in ascending order and a catch-all fare.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `bands` is empty, or if bounds are not finite and
    /// strictly ascending.
    pub fn new(bands: Vec<Band>, beyond: u32) -> Result<Self, TariffError> {
        if bands.is_empty() {
            return Err(TariffError::Empty);
        }

        for (index, band) in bands.iter().enumerate() {
            if !band.up_to_km.is_finite() {
                return Err(TariffError::NonFinite { index });
            }
            if index > 0 && band.up_to_km <= bands[index - 1].up_to_km {
                return Err(TariffError::NotAscending {
                    index,
                    km: band.up_to_km,
                });
            }
        }

        Ok(Self { bands, beyond })
    }

    /// Load a tariff from a JSON file of the form
    /// `{"bands": [{"up_to_km": 4.0, "fare": 170}, ...], "beyond": 640}`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TariffError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Fares for the shortest-path network variant.
    pub fn hankyu() -> Self {
        Self::from_table(
            &[
                (4.0, 170),
                (9.0, 200),
                (14.0, 240),
                (19.0, 280),
                (26.0, 290),
                (33.0, 330),
                (42.0, 390),
                (51.0, 410),
                (60.0, 480),
                (70.0, 540),
            ],
            640,
        )
    }

    /// Fares for the distance-matrix variant.
    ///
    /// Only the 6 km boundary is known. The bands past it are placeholders;
    /// load real ones with `FARE_TARIFF_FILE`.
    pub fn hankyu_matrix() -> Self {
        Self::from_table(
            &[
                (6.0, 170),
                (11.0, 200),
                (16.0, 240),
                (22.0, 280),
                (29.0, 320),
                (37.0, 390),
                (46.0, 410),
                (55.0, 480),
                (66.0, 540),
            ],
            640,
        )
    }

    /// Builds a preset; presets are ascending by construction.
    fn from_table(table: &[(f64, u32)], beyond: u32) -> Self {
        let bands = table
            .iter()
            .map(|&(up_to_km, fare)| Band { up_to_km, fare })
            .collect();
        Self { bands, beyond }
    }

    /// Fare in yen for a single leg of `km` kilometres.
    pub fn fare_for(&self, km: f64) -> u32 {
        self.bands
            .iter()
            .find(|band| km <= band.up_to_km)
            .map_or(self.beyond, |band| band.fare)
    }

    /// The fare of the lowest band.
    pub fn base_fare(&self) -> u32 {
        self.bands[0].fare
    }

    /// The bands in ascending order.
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// The fare for distances past the last band.
    pub fn beyond(&self) -> u32 {
        self.beyond
    }
}
