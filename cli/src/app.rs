use degrees_core::{Dataset, LoadReport, load_dataset};
use std::{error::Error, path::PathBuf};

pub struct DegreesApp {
    pub data_dir: PathBuf,
}

impl DegreesApp {
    pub fn new(data_dir: PathBuf) -> Result<Self, Box<dyn Error>> {
        if !data_dir.is_dir() {
            return Err(format!("Data directory does not exist: {:?}", data_dir).into());
        }

        Ok(Self { data_dir })
    }

    pub fn load_data(&self) -> Result<(Dataset, LoadReport), Box<dyn Error>> {
        Ok(load_dataset(&self.data_dir)?)
    }
}
