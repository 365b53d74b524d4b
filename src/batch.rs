use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

use crate::error::IconError;
use crate::render::{render, RenderOptions};
use crate::targets::{IconTarget, Platform};

/// What a successful batch produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub written: Vec<PathBuf>,
    pub per_platform: BTreeMap<Platform, usize>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.written.len()
    }
}

/// Renders every target under `base_dir`, in order.
///
/// Stops at the first failure; files written before it stay on disk.
pub fn render_batch(
    targets: &[IconTarget],
    base_dir: &Path,
    options: &RenderOptions,
) -> Result<BatchSummary, IconError> {
    let started = Instant::now();
    let mut summary = BatchSummary::default();

    for target in targets {
        let path = target.resolve(base_dir);
        let icon_started = Instant::now();
        render(target.size, &path, options)?;
        debug!(size = target.size, elapsed = ?icon_started.elapsed(), "rendered target");

        println!("✅ Created icon: {} ({}x{})", path.display(), target.size, target.size);
        *summary.per_platform.entry(target.platform).or_insert(0) += 1;
        summary.written.push(path);
    }

    info!(count = summary.total(), elapsed = ?started.elapsed(), "batch complete");
    Ok(summary)
}
