mod load;
mod model;
mod scaling;
mod track;

pub use load::{load_model, load_track_table, read_track_table, Problem as LoadTableProblem};
pub use load::{TrackTable, TrackTableError};
pub use model::TrackModel;
pub use scaling::MinMaxScaler;
pub use track::{AudioFeatures, FeatureVector, ScaledTrack, Track};
pub use track::{FEATURES_COUNT, FEATURE_COLUMNS};
