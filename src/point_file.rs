//! Reading and writing point sets and tours as [ron] documents.
//!
//! A point file looks like this:
//!
//! ```text
//! (points:[(x:1.0,y:0.0,z:0.0),(x:0.0,y:1.0,z:0.0)])
//! ```
//!
//! and a tour file like this:
//!
//! ```text
//! (indices:[1,0],path_length:1.5707963267948966)
//! ```

use crate::error::TourError;
use crate::tour::Tour;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    borrow::Cow,
    fmt,
    fs::File,
    io::{Read, Write},
    path::Path,
};

/// A set of points of type `T`, such as a
/// [CartesianPoint](crate::point::CartesianPoint).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointFile<T> {
    #[allow(missing_docs)]
    pub points: Vec<T>,
}

/// A stored [Tour] along with its length, so it can be compared against
/// other tours without the points at hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourFile {
    indices: Vec<usize>,
    path_length: f64,
}

/// Things that go wrong while reading or writing a [PointFile] or a
/// [TourFile].
#[derive(Debug)]
pub enum PointFileError {
    /// Returned when io fails when reading or writing files.
    IoError(std::io::Error),

    /// Returned when serialization fails.
    RonError(ron::Error),

    /// Returned when deserialization fails.
    RonSpannedError(ron::de::SpannedError),

    /// Returned when a stored tour is not a valid permutation.
    Tour(TourError),
}

impl fmt::Display for PointFileError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use PointFileError as PFE;
        let msg = match self {
            PFE::IoError(error) => Cow::from(format!("io error: {}", error)),
            PFE::RonError(error) => Cow::from(format!("ron error: {}", error)),
            PFE::RonSpannedError(error) => Cow::from(format!("ron spanning error: {}", error)),
            PFE::Tour(error) => Cow::from(format!("bad tour: {}", error)),
        };

        write!(f, "{}", msg)
    }
}

impl std::error::Error for PointFileError {}

impl From<TourError> for PointFileError {
    fn from(value: TourError) -> Self {
        Self::Tour(value)
    }
}

fn write_ron<T: Serialize>(value: &T, writer: &mut impl Write) -> Result<(), PointFileError> {
    let s = ron::ser::to_string(value).map_err(PointFileError::RonError)?;
    writer
        .write_all(s.as_bytes())
        .map_err(PointFileError::IoError)
}

fn read_ron<T: DeserializeOwned>(reader: &mut impl Read) -> Result<T, PointFileError> {
    let mut raw_text = Vec::new();
    reader
        .read_to_end(&mut raw_text)
        .map_err(PointFileError::IoError)?;
    ron::de::from_bytes(&raw_text).map_err(PointFileError::RonSpannedError)
}

impl<T> PointFile<T>
where
    T: Serialize + DeserializeOwned,
{
    #[allow(missing_docs)]
    pub fn new(points: Vec<T>) -> Self {
        Self { points }
    }

    /// Write out a [PointFile] to the path provided.
    pub fn to_path(&self, path: impl AsRef<Path>) -> Result<(), PointFileError> {
        let mut handle = File::create(path).map_err(PointFileError::IoError)?;
        self.to_writer(&mut handle)
    }

    /// Write out a [PointFile] to the [Write]able object provided.
    pub fn to_writer(&self, writer: &mut impl Write) -> Result<(), PointFileError> {
        write_ron(self, writer)
    }

    /// Read a [PointFile] from the path provided.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PointFileError> {
        let mut handle = File::open(path).map_err(PointFileError::IoError)?;
        Self::from_reader(&mut handle)
    }

    /// Read a [PointFile] from the [Read]able object provided.
    pub fn from_reader(reader: &mut impl Read) -> Result<Self, PointFileError> {
        read_ron(reader)
    }
}

impl TourFile {
    #[allow(missing_docs)]
    pub fn new(tour: &Tour, path_length: f64) -> Self {
        Self {
            indices: tour.indices().to_vec(),
            path_length,
        }
    }

    /// The stored tour, checked to be a permutation.
    pub fn tour(&self) -> Result<Tour, PointFileError> {
        Ok(Tour::from_indices(self.indices.clone())?)
    }

    #[allow(missing_docs)]
    pub fn path_length(&self) -> f64 {
        self.path_length
    }

    /// Write out a [TourFile] to the path provided.
    pub fn to_path(&self, path: impl AsRef<Path>) -> Result<(), PointFileError> {
        let mut handle = File::create(path).map_err(PointFileError::IoError)?;
        self.to_writer(&mut handle)
    }

    /// Write out a [TourFile] to the [Write]able object provided.
    pub fn to_writer(&self, writer: &mut impl Write) -> Result<(), PointFileError> {
        write_ron(self, writer)
    }

    /// Read a [TourFile] from the path provided.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PointFileError> {
        let mut handle = File::open(path).map_err(PointFileError::IoError)?;
        Self::from_reader(&mut handle)
    }

    /// Read a [TourFile] from the [Read]able object provided. The indices
    /// are validated, so a file that parses always holds a usable tour.
    pub fn from_reader(reader: &mut impl Read) -> Result<Self, PointFileError> {
        let file: TourFile = read_ron(reader)?;
        file.tour()?;
        Ok(file)
    }
}
