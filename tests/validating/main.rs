use std::path::Path;

use drs::parsing::{self, Project};

mod dataset_id;
mod file_name;
mod samples;

/// The CMIP6Plus project used throughout these tests.
pub fn project() -> Project {
    let filename = Path::new("tests/samples/cmip6plus.json");
    let content = parsing::load(filename)
        .unwrap_or_else(|e| panic!("Failed to load file {:?}: {}", filename, e));
    parsing::parse(filename, &content)
        .unwrap_or_else(|e| panic!("Failed to parse file {:?}: {}", filename, e))
}
