use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use common::{json_files_in, Config, ConfigLoader};
use engine::FeatureExtractor;
use log::{info, warn};
use serde::Serialize;
use space_invaders::{FeatureVector, Snapshot, SpaceInvadersExtractor};

#[derive(Debug)]
pub struct BatchOptions {
    pub snapshots_dir: PathBuf,
    pub output_path: PathBuf,
    pub limit: Option<usize>,
    pub fail_fast: bool,
}

impl Config for BatchOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        Ok(Self {
            snapshots_dir: config.get_relative_path("snapshots_dir")?,
            output_path: config
                .get_relative_path("output_path")
                .unwrap_or_else(|_| PathBuf::from("features.jsonl")),
            limit: config.get("limit").and_then(|v| v.as_usize()),
            fail_fast: config
                .get("fail_fast")
                .and_then(|v| v.as_bool())
                .unwrap_or(true),
        })
    }
}

#[derive(Serialize)]
struct FeatureRecord<'a> {
    file: &'a str,
    features: &'a FeatureVector,
}

pub fn read_snapshot(path: &Path) -> Result<Snapshot> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read state dump {:?}", path))?;

    Snapshot::from_json(&json).with_context(|| format!("Failed to parse state dump {:?}", path))
}

/// Returns how many snapshots were written.
pub fn run_batch(options: &BatchOptions) -> Result<usize> {
    let files = json_files_in(&options.snapshots_dir)?;
    let files = &files[..options.limit.unwrap_or(files.len()).min(files.len())];

    info!(
        "Extracting features from {} state dumps in {:?}",
        files.len(),
        options.snapshots_dir
    );

    let output = File::create(&options.output_path)
        .with_context(|| format!("Failed to create {:?}", options.output_path))?;
    let mut writer = BufWriter::new(output);
    let extractor = SpaceInvadersExtractor::new();
    let mut written = 0;

    for path in files {
        let snapshot = match read_snapshot(path) {
            Ok(snapshot) => snapshot,
            Err(err) if !options.fail_fast => {
                warn!("Skipping {:?}: {:#}", path, err);
                continue;
            }
            Err(err) => return Err(err),
        };

        let file = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        let features = extractor.extract(&snapshot);

        serde_json::to_writer(
            &mut writer,
            &FeatureRecord {
                file,
                features: &features,
            },
        )?;
        writeln!(writer)?;
        written += 1;
    }

    writer.flush()?;

    info!("Wrote {} feature vectors to {:?}", written, options.output_path);

    Ok(written)
}
