use std::path::PathBuf;

use anyhow::{Context, Result};
use fs4::tokio::AsyncFileExt;
use tokio::{
    fs::File,
    io::{AsyncReadExt, BufReader},
};
use tracing::debug;

use super::{entities::AppUsageEntity, Dataset, DatasetSource};

/// Loads the dataset from a csv export on disk.
pub struct CsvDatasetSource {
    path: PathBuf,
}

impl CsvDatasetSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    async fn read_contents(&self) -> Result<String> {
        debug!("Reading dataset {:?}", self.path);
        let file = File::open(&self.path)
            .await
            .with_context(|| format!("failed to open dataset {}", self.path.display()))?;
        file.lock_shared()?;

        let mut reader = BufReader::new(file);
        let mut contents = String::new();
        let read = reader.read_to_string(&mut contents).await;

        reader.into_inner().unlock_async().await?;
        read?;
        Ok(contents)
    }
}

impl DatasetSource for CsvDatasetSource {
    async fn load(&self) -> Result<Dataset> {
        let contents = self.read_contents().await?;
        let rows = parse_rows(&contents)
            .with_context(|| format!("invalid dataset {}", self.path.display()))?;
        Ok(Dataset::new(rows))
    }
}

/// The export is curated data, so a malformed record fails the whole load
/// instead of being skipped.
fn parse_rows(contents: &str) -> Result<Vec<AppUsageEntity>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(contents.as_bytes());

    let mut rows = Vec::new();
    for (index, record) in reader.deserialize::<AppUsageEntity>().enumerate() {
        // line 1 is the header
        let row = record.with_context(|| format!("malformed record on line {}", index + 2))?;
        rows.push(row);
    }
    Ok(rows)
}
