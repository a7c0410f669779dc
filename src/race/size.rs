use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use super::RaceError;

/// A validated, positive array length for one race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RaceSize(NonZeroUsize);

impl RaceSize {
    pub fn new(size: usize) -> Result<Self, RaceError> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or(RaceError::ZeroSize)
    }

    /// Like [`RaceSize::new`], additionally enforcing an upper bound.
    pub fn bounded(size: usize, max: usize) -> Result<Self, RaceError> {
        let size = Self::new(size)?;
        if size.get() > max {
            return Err(RaceError::TooLarge {
                size: size.get(),
                max,
            });
        }
        Ok(size)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl FromStr for RaceSize {
    type Err = RaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let size: usize = trimmed
            .parse()
            .map_err(|_| RaceError::InvalidSize(trimmed.to_string()))?;
        Self::new(size)
    }
}

impl fmt::Display for RaceSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
