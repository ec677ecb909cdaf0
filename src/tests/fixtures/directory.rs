// Seeded directory and fixed instants shared by use case and end to end tests.

use crate::modules::attendance::adapters::outbound::directories_in_memory::{
    DirectorySeed, InMemoryDirectory,
};
use chrono::{NaiveDate, NaiveDateTime};

pub const SEED_PATH: &str = "./src/tests/fixtures/json/directory_seed.json";

pub fn seeded_directory() -> InMemoryDirectory {
    InMemoryDirectory::from_seed(DirectorySeed::from_json_file(SEED_PATH).unwrap())
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}
