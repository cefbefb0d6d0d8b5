//! Writes every launcher icon into the mipmap folder layout

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::density::{DensityBucket, IconVariant};
use crate::error::IconError;
use crate::icon;

/// A file produced by a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub bucket: DensityBucket,
    pub variant: IconVariant,
    pub path: PathBuf,
}

impl GeneratedIcon {
    pub fn size(&self) -> u32 {
        self.bucket.size()
    }
}

/// Output path for one icon file
pub fn icon_path(base_dir: &Path, bucket: DensityBucket, variant: IconVariant) -> PathBuf {
    base_dir.join(bucket.folder_name()).join(variant.file_name())
}

/// Generate both icon variants for every density bucket under `base_dir`.
///
/// Buckets are processed in order and the run stops at the first failure.
/// Files already on disk are overwritten. A line is printed to stdout for
/// every file written.
pub fn generate_all(base_dir: &Path) -> Result<Vec<GeneratedIcon>, IconError> {
    info!("Generating launcher icons in {}", base_dir.display());

    let mut generated = Vec::with_capacity(DensityBucket::ALL.len() * IconVariant::ALL.len());
    for bucket in DensityBucket::ALL {
        generated.extend(generate_bucket(base_dir, bucket)?);
    }

    info!("Generated {} icon files", generated.len());
    Ok(generated)
}

fn generate_bucket(
    base_dir: &Path,
    bucket: DensityBucket,
) -> Result<Vec<GeneratedIcon>, IconError> {
    let folder = base_dir.join(bucket.folder_name());
    std::fs::create_dir_all(&folder).map_err(|source| IconError::CreateDir {
        path: folder.clone(),
        source,
    })?;

    let size = bucket.size();
    let mut generated = Vec::with_capacity(IconVariant::ALL.len());
    for variant in IconVariant::ALL {
        let path = icon_path(base_dir, bucket, variant);
        icon::write_icon(size, &path)?;

        let entry = GeneratedIcon {
            bucket,
            variant,
            path,
        };
        debug!(bucket = ?entry.bucket, variant = ?entry.variant, "Wrote {}", entry.path.display());
        println!(
            "Created icon: {} ({}x{})",
            entry.path.display(),
            entry.size(),
            entry.size()
        );
        generated.push(entry);
    }

    Ok(generated)
}
