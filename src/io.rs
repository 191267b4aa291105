//! CSV input for the toll datasets.
//!
//! Column names follow the published datasets: the vehicle dataset has
//! `id_1,id_2,route,moto,car,rv,bus,truck`, the distance dataset
//! `id_start,id_end,distance` and the timestamp dataset
//! `id,id_2,startDay,startTime,endDay,endTime`. Extra columns are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use log::debug;
use serde::de::DeserializeOwned;

use crate::coverage::TimeRecord;
use crate::network::DistanceRecord;
use crate::vehicles::VehicleRecord;

/// Deserializes every row of a headed CSV stream.
pub fn read_records<T, R>(reader: R) -> Result<Vec<T>, csv::Error>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let records = reader.deserialize::<T>().collect::<Result<Vec<_>, _>>()?;
    debug!("read {} csv records", records.len());
    Ok(records)
}

fn read_file<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, csv::Error> {
    read_records(File::open(path)?)
}

pub fn read_vehicle_records(path: impl AsRef<Path>) -> Result<Vec<VehicleRecord>, csv::Error> {
    read_file(path.as_ref())
}

pub fn read_distance_records(path: impl AsRef<Path>) -> Result<Vec<DistanceRecord>, csv::Error> {
    read_file(path.as_ref())
}

pub fn read_time_records(path: impl AsRef<Path>) -> Result<Vec<TimeRecord>, csv::Error> {
    read_file(path.as_ref())
}
