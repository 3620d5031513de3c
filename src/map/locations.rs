use crate::map::consts::TOKYO_LOCATIONS;
use crate::map::models::LngLat;
use rand::Rng;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocationsError {
    #[error("failed to read the locations file: {0}")]
    Io(#[from] io::Error),
    #[error("line {line} of the locations file is not a `{{\"lng\": .., \"lat\": ..}}` object: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("line {line} of the locations file holds an out of range coordinate {location}")]
    OutOfRange { line: usize, location: LngLat },
    #[error("entry {index} of the locations pool is an out of range coordinate {location}")]
    InvalidLocation { index: usize, location: LngLat },
    #[error("the locations pool is empty")]
    Empty,
}

/// Fixed, ordered list of candidate round targets.
#[derive(Clone, Debug)]
pub struct LocationPool {
    locations: Vec<LngLat>,
}

impl LocationPool {
    pub fn new(locations: Vec<LngLat>) -> Result<Self, LocationsError> {
        if locations.is_empty() {
            return Err(LocationsError::Empty);
        }
        if let Some((index, &location)) = locations
            .iter()
            .enumerate()
            .find(|(_, location)| !location.is_valid())
        {
            return Err(LocationsError::InvalidLocation { index, location });
        }
        Ok(Self { locations })
    }

    pub fn builtin() -> Self {
        Self {
            locations: TOKYO_LOCATIONS.to_vec(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, LocationsError> {
        let file = File::open(path)?;
        Self::from_ndjson(BufReader::new(file))
    }

    /// Reads one `{"lng": .., "lat": ..}` object per line, skipping blank lines.
    pub fn from_ndjson(reader: impl BufRead) -> Result<Self, LocationsError> {
        let mut locations = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let location: LngLat =
                serde_json::from_str(&line).map_err(|source| LocationsError::Malformed {
                    line: index + 1,
                    source,
                })?;
            if !location.is_valid() {
                return Err(LocationsError::OutOfRange {
                    line: index + 1,
                    location,
                });
            }
            locations.push(location);
        }
        Self::new(locations)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Uniform draw in `[0, len)`.
    pub fn random_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.gen_range(0..self.locations.len())
    }

    pub fn random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> LngLat {
        self.locations[self.random_index(rng)]
    }

    pub fn random(&self) -> LngLat {
        self.random_with(&mut rand::thread_rng())
    }
}
