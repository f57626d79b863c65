//! Test dataset creation
//!
//! Writes CSV datasets into temporary directories. The default dataset has
//! padded header names, columns the loader ignores, one row without a name
//! and one row with a malformed popularity.

use super::constants::DATASET_FILE_NAME;
use anyhow::Result;
use std::path::PathBuf;
use tempfile::TempDir;

pub const TRACKS_CSV: &str = "\
genres, name ,artists,id,popularity,acousticness,danceability,duration_ms,energy,instrumentalness,liveness,loudness,speechiness,tempo,valence,mode
pop,Sunny Day,['Ray Light'],t01,70,0.1,0.8,215000,0.85,0.0,0.12,-5.0,0.05,120.0,0.9,1
dance pop,Boundary Happy,['Edge Case'],t02,40,0.2,0.7,215000,0.7,0.01,0.1,-6.0,0.04,118.0,0.9,1
ambient,Rainy Night,\"['Gray Clouds', 'Mist']\",t03,55,0.85,0.3,215000,0.2,0.4,0.11,-14.0,0.03,72.0,0.1,1
indie,Sad Edge,['Edge Case'],t04,35,0.8,0.35,215000,0.4,0.3,0.09,-12.0,0.04,80.0,0.1,1
lounge,Lazy Sunday,['Slow Motion'],t05,60,0.7,0.5,215000,0.3,0.2,0.15,-10.0,0.04,90.0,0.5,1
lounge,,['Nobody'],t00,99,0.9,0.1,215000,0.1,0.9,0.9,-30.0,0.5,60.0,0.05,0
lounge,Chill Edge,['Edge Case'],t06,30,0.65,0.45,215000,0.3,0.15,0.14,-11.0,0.05,88.0,0.4,1
lounge,Chill Top,['Edge Case'],t07,25,0.6,0.55,215000,0.3,0.1,0.13,-9.0,0.05,95.0,0.7,1
rock,Power Run,['Fast Lane'],t08,65,0.05,0.75,215000,0.95,0.0,0.3,-4.0,0.08,150.0,0.6,1
rock,Broken Row,['Glitch'],t99,n/a,0.5,0.5,215000,0.5,0.5,0.5,-8.0,0.05,100.0,0.5,1
synthwave,Night Drive,['Fast Lane'],t09,50,0.3,0.6,215000,0.6,0.5,0.2,-7.0,0.06,110.0,0.45,1
dream pop,Day Dream,['Slow Motion'],t10,45,0.55,0.5,215000,0.45,0.25,0.1,-9.5,0.04,100.0,0.65,1
pop,Sunny Side,['Ray Light'],t11,80,0.15,0.78,215000,0.75,0.02,0.18,-5.5,0.06,125.0,0.75,1
rock,Don't Stop,['Rock'n'Roll Band'],t12,80,0.02,0.65,215000,0.9,0.0,0.35,-3.5,0.1,140.0,0.8,1
";

/// Same rows as the default dataset, without the `danceability` column.
pub fn missing_column_csv() -> String {
    TRACKS_CSV
        .lines()
        .map(|line| {
            let mut fields = split_fields(line);
            fields.remove(6);
            fields.join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Splits a fixture line on commas outside double quotes.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = vec![String::new()];
    let mut quoted = false;
    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                fields.last_mut().unwrap().push(c);
            }
            ',' if !quoted => fields.push(String::new()),
            _ => fields.last_mut().unwrap().push(c),
        }
    }
    fields
}

/// Writes `csv` into a fresh temp dir, returning the dir and the file path.
pub fn create_test_dataset(csv: &str) -> Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join(DATASET_FILE_NAME);
    std::fs::write(&path, csv)?;
    Ok((temp_dir, path))
}
