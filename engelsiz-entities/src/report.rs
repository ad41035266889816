use std::{fmt, str::FromStr};

use itertools::Itertools;
use strum::{AsRefStr, EnumCount, EnumIter, EnumString};
use thiserror::Error;

use crate::{email::EmailAddress, geo::MapPoint, id::Id, time::Timestamp};

/// Separator of obstacle types in their string representation.
pub const OBSTACLE_TYPES_DELIMITER: char = ',';

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, EnumCount, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ObstacleType {
    EntryDenied,
    FreightElevatorOnly,
    HelmetRemoval,
    ServiceDoorOnly,
    ParkingRestriction,
    Other,
}

impl fmt::Display for ObstacleType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown obstacle type '{0}'")]
pub struct ObstacleTypeParseError(pub String);

/// Duplicate-free set of obstacle types that remembers the
/// order in which they have been added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObstacleTypes(Vec<ObstacleType>);

impl ObstacleTypes {
    pub fn insert(&mut self, obstacle_type: ObstacleType) -> bool {
        if self.contains(obstacle_type) {
            return false;
        }
        self.0.push(obstacle_type);
        true
    }

    pub fn contains(&self, obstacle_type: ObstacleType) -> bool {
        self.0.contains(&obstacle_type)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = ObstacleType> + '_ {
        self.0.iter().copied()
    }

    /// Parse a list of tags, e.g. "entry_denied, helmet_removal".
    ///
    /// Blank entries are ignored, unknown entries are rejected.
    pub fn try_from_tags<I, S>(tags: I) -> Result<Self, ObstacleTypeParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut types = Self::default();
        for tag in tags {
            let tag = tag.as_ref().trim();
            if tag.is_empty() {
                continue;
            }
            let obstacle_type = tag
                .parse()
                .map_err(|_| ObstacleTypeParseError(tag.to_owned()))?;
            types.insert(obstacle_type);
        }
        Ok(types)
    }
}

impl FromIterator<ObstacleType> for ObstacleTypes {
    fn from_iter<T: IntoIterator<Item = ObstacleType>>(iter: T) -> Self {
        let mut types = Self::default();
        for t in iter {
            types.insert(t);
        }
        types
    }
}

impl FromStr for ObstacleTypes {
    type Err = ObstacleTypeParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_tags(s.split(OBSTACLE_TYPES_DELIMITER))
    }
}

impl fmt::Display for ObstacleTypes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0.iter().join(&OBSTACLE_TYPES_DELIMITER.to_string()))
    }
}

/// The registered user who submitted a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitter {
    pub id: Id,
    pub email: EmailAddress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationStatus {
    Pending,
    Verified,
}

impl From<bool> for ModerationStatus {
    fn from(verified: bool) -> Self {
        if verified {
            Self::Verified
        } else {
            Self::Pending
        }
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct ObstacleReport {
    pub id             : Id,
    /// `None` for anonymous reports.
    pub submitter      : Option<Submitter>,
    pub site_name      : String,
    pub address        : Option<String>,
    pub city           : String,
    pub district       : String,
    pub pos            : MapPoint,
    pub obstacle_types : ObstacleTypes,
    pub description    : Option<String>,
    pub reported_at    : Timestamp,
    pub verified       : bool,
    pub report_count   : u32,
}

impl ObstacleReport {
    pub fn is_anonymous(&self) -> bool {
        self.submitter.is_none()
    }

    pub fn status(&self) -> ModerationStatus {
        self.verified.into()
    }
}

/// Number of reports by moderation status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportCounts {
    pub total: u64,
    pub verified: u64,
    pub pending: u64,
}

impl ReportCounts {
    pub const fn new(verified: u64, pending: u64) -> Self {
        Self {
            total: verified + pending,
            verified,
            pending,
        }
    }
}
