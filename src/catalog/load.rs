//! Dataset loading functionality

use super::track::{AudioFeatures, FeatureVector, Track, FEATURES_COUNT, FEATURE_COLUMNS};
use super::TrackModel;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum TrackTableError {
    #[error("Could not open dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Required column '{0}' is missing")]
    MissingColumn(String),

    #[error("Dataset has no usable rows")]
    Empty,
}

/// A row that was skipped while loading. Non-fatal.
#[derive(Debug, Clone, PartialEq)]
pub enum Problem {
    InvalidPopularity {
        line: u64,
        value: String,
    },
    InvalidFeature {
        line: u64,
        column: &'static str,
        value: String,
    },
}

#[derive(Debug)]
pub struct TrackTable {
    pub tracks: Vec<Track>,
    pub problems: Vec<Problem>,
    /// Rows dropped because their name was absent.
    pub unnamed_rows: usize,
}

struct ColumnIndices {
    name: usize,
    artists: usize,
    id: usize,
    popularity: usize,
    features: [usize; FEATURES_COUNT],
}

impl ColumnIndices {
    fn from_headers(headers: &csv::StringRecord) -> Result<ColumnIndices, TrackTableError> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| TrackTableError::MissingColumn(column.to_owned()))
        };

        let mut features = [0usize; FEATURES_COUNT];
        for (slot, column) in features.iter_mut().zip(FEATURE_COLUMNS) {
            *slot = find(column)?;
        }

        Ok(ColumnIndices {
            name: find("name")?,
            artists: find("artists")?,
            id: find("id")?,
            popularity: find("popularity")?,
            features,
        })
    }
}

fn parse_popularity(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<u32>() {
        return Some(value);
    }
    // Columns with gaps get written out as floats, "57.0".
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 && value.fract() == 0.0 => {
            Some(value as u32)
        }
        _ => None,
    }
}

fn parse_feature(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_record(
    record: &csv::StringRecord,
    columns: &ColumnIndices,
    line: u64,
) -> Result<Option<Track>, Problem> {
    let field = |index: usize| record.get(index).unwrap_or("");

    let name = field(columns.name);
    if name.is_empty() {
        return Ok(None);
    }

    let popularity_raw = field(columns.popularity);
    let popularity = parse_popularity(popularity_raw).ok_or_else(|| Problem::InvalidPopularity {
        line,
        value: popularity_raw.to_owned(),
    })?;

    let mut vector: FeatureVector = [0.0; FEATURES_COUNT];
    for (i, column) in FEATURE_COLUMNS.into_iter().enumerate() {
        let raw = field(columns.features[i]);
        vector[i] = parse_feature(raw).ok_or_else(|| Problem::InvalidFeature {
            line,
            column,
            value: raw.to_owned(),
        })?;
    }

    Ok(Some(Track {
        name: name.to_owned(),
        artists: field(columns.artists).to_owned(),
        id: field(columns.id).to_owned(),
        popularity,
        features: AudioFeatures::from_vector(vector),
    }))
}

/// Reads tracks from CSV data. Header names are trimmed before lookup and
/// columns other than the required ones are ignored.
pub fn read_track_table<R: Read>(reader: R) -> Result<TrackTable, TrackTableError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader);

    let columns = ColumnIndices::from_headers(csv_reader.headers()?)?;

    let mut tracks = vec![];
    let mut problems = vec![];
    let mut unnamed_rows = 0;

    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        match parse_record(&record, &columns, line) {
            Ok(Some(track)) => tracks.push(track),
            Ok(None) => unnamed_rows += 1,
            Err(problem) => problems.push(problem),
        }
    }

    Ok(TrackTable {
        tracks,
        problems,
        unnamed_rows,
    })
}

pub fn load_track_table<P: AsRef<Path>>(path: P) -> Result<TrackTable, TrackTableError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| TrackTableError::Io {
        path: path.to_owned(),
        source,
    })?;
    read_track_table(file)
}

/// Loads the dataset at `path` and builds the scaled model out of it.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<TrackModel, TrackTableError> {
    let table = load_track_table(path)?;

    if table.unnamed_rows > 0 {
        info!("Dropped {} rows without a name.", table.unnamed_rows);
    }
    if !table.problems.is_empty() {
        warn!("Skipped {} malformed rows:", table.problems.len());
        for problem in table.problems.iter() {
            warn!("- {:?}", problem);
        }
    }

    let problems_count = table.problems.len();
    let model = TrackModel::build(table.tracks)?.with_problems_count(problems_count);
    info!("Model has {} tracks.", model.len());
    Ok(model)
}
