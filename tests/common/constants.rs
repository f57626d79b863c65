//! Shared constants for end-to-end tests
//!
//! When the test dataset changes, update only this file and fixtures.rs.

// ============================================================================
// Test Dataset
// ============================================================================

pub const DATASET_FILE_NAME: &str = "tracks_genre.csv";

/// Named, well-formed rows in the default dataset.
pub const DATASET_TRACKS_COUNT: usize = 12;

pub const RAINY_NIGHT: &str = "Rainy Night";
pub const SUNNY_SIDE: &str = "Sunny Side";
pub const SUNNY_DAY: &str = "Sunny Day";
pub const DONT_STOP: &str = "Don't Stop";
pub const LAZY_SUNDAY: &str = "Lazy Sunday";
pub const DAY_DREAM: &str = "Day Dream";
pub const POWER_RUN: &str = "Power Run";
pub const BOUNDARY_HAPPY: &str = "Boundary Happy";
pub const BROKEN_ROW: &str = "Broken Row";

/// Expected `/recommend?song_title=Rainy Night` response, matched song first.
pub const RAINY_NIGHT_RECOMMENDATIONS: [&str; 11] = [
    "Rainy Night",
    "Lazy Sunday",
    "Sad Edge",
    "Day Dream",
    "Night Drive",
    "Chill Edge",
    "Sunny Side",
    "Don't Stop",
    "Sunny Day",
    "Power Run",
    "Chill Top",
];

/// Expected `/recommend?song_title=sunny` response, matched song first.
pub const SUNNY_RECOMMENDATIONS: [&str; 11] = [
    "Sunny Side",
    "Don't Stop",
    "Sunny Day",
    "Power Run",
    "Boundary Happy",
    "Lazy Sunday",
    "Night Drive",
    "Day Dream",
    "Chill Top",
    "Chill Edge",
    "Sad Edge",
];

// ============================================================================
// Timeouts
// ============================================================================

/// Maximum time to wait for the test server to become ready
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// HTTP request timeout for the test client
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Polling interval while waiting for the server
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;
