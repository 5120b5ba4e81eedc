use rayon::prelude::*;
use tracing::debug;

use crate::error::{ProcessingError, Result};
use crate::models::{DecimalSounding, SexagesimalSounding};

/// Parsed sounding table: the decimal records and their sexagesimal twins,
/// index-aligned and in input line order.
#[derive(Debug, Default, Clone)]
pub struct SoundingTable {
    pub decimal: Vec<DecimalSounding>,
    pub sexagesimal: Vec<SexagesimalSounding>,
}

impl SoundingTable {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            decimal: Vec::with_capacity(capacity),
            sexagesimal: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.decimal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decimal.is_empty()
    }
}

/// Parses line-oriented mesh tables into typed soundings.
///
/// Expected line format: four whitespace-separated columns
/// `typeCode latitude longitude depth`. Lines that are blank, short, or fail
/// numeric parsing are skipped, never fatal.
pub struct SoundingReader {
    parallel: bool,
    max_workers: usize,
}

impl SoundingReader {
    pub fn new() -> Self {
        Self {
            parallel: false,
            max_workers: 1,
        }
    }

    /// Parse line batches on a dedicated rayon pool. Output order is still
    /// input line order.
    pub fn with_parallel(max_workers: usize) -> Self {
        Self {
            parallel: true,
            max_workers,
        }
    }

    pub fn parse(&self, text: &str) -> Result<SoundingTable> {
        let pairs: Vec<(DecimalSounding, SexagesimalSounding)> = if self.parallel {
            let lines: Vec<&str> = text.lines().collect();
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.max_workers)
                .build()
                .map_err(|e| ProcessingError::Config(e.to_string()))?;

            pool.install(|| lines.par_iter().filter_map(|line| Self::parse_line(line)).collect())
        } else {
            text.lines().filter_map(Self::parse_line).collect()
        };

        let mut table = SoundingTable::with_capacity(pairs.len());
        for (decimal, sexagesimal) in pairs {
            table.decimal.push(decimal);
            table.sexagesimal.push(sexagesimal);
        }

        Ok(table)
    }

    /// Parse one table line. The source column order is
    /// (type, latitude, longitude, depth); the decimal sounding stores
    /// (type, longitude, latitude, depth). Columns past the fourth are
    /// ignored.
    fn parse_line(line: &str) -> Option<(DecimalSounding, SexagesimalSounding)> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        let mut tokens = trimmed.split_whitespace();
        let (type_token, lat_token, lon_token, depth_token) =
            match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
                (Some(t), Some(lat), Some(lon), Some(d)) => (t, lat, lon, d),
                _ => {
                    debug!("skipping short line: '{}'", trimmed);
                    return None;
                }
            };

        let type_code = type_token.parse::<i32>().ok();
        let latitude = lat_token.parse::<f64>().ok();
        let longitude = lon_token.parse::<f64>().ok();
        let depth = depth_token.parse::<i32>().ok();

        match (type_code, latitude, longitude, depth) {
            (Some(type_code), Some(latitude), Some(longitude), Some(depth)) => {
                let decimal = DecimalSounding::new(type_code, longitude, latitude, depth);
                let sexagesimal = decimal.to_sexagesimal();
                Some((decimal, sexagesimal))
            }
            _ => {
                debug!("skipping malformed line: '{}'", trimmed);
                None
            }
        }
    }
}

impl Default for SoundingReader {
    fn default() -> Self {
        Self::new()
    }
}
