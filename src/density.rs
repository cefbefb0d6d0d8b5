//! Density buckets and icon file variants
//!
//! Android picks a launcher icon from the `mipmap-*` folder matching the
//! screen density. Each folder holds a normal and a round icon.

/// Screen density tier and the icon edge length it expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DensityBucket {
    /// ~160 dpi, baseline
    Mdpi,
    /// ~240 dpi
    Hdpi,
    /// ~320 dpi
    Xhdpi,
    /// ~480 dpi
    Xxhdpi,
    /// ~640 dpi
    Xxxhdpi,
}

impl DensityBucket {
    /// Every bucket, in generation order
    pub const ALL: [DensityBucket; 5] = [
        DensityBucket::Mdpi,
        DensityBucket::Hdpi,
        DensityBucket::Xhdpi,
        DensityBucket::Xxhdpi,
        DensityBucket::Xxxhdpi,
    ];

    /// Resource folder name
    pub fn folder_name(&self) -> &'static str {
        match self {
            DensityBucket::Mdpi => "mipmap-mdpi",
            DensityBucket::Hdpi => "mipmap-hdpi",
            DensityBucket::Xhdpi => "mipmap-xhdpi",
            DensityBucket::Xxhdpi => "mipmap-xxhdpi",
            DensityBucket::Xxxhdpi => "mipmap-xxxhdpi",
        }
    }

    /// Icon edge length in pixels
    pub fn size(&self) -> u32 {
        match self {
            DensityBucket::Mdpi => 48,
            DensityBucket::Hdpi => 72,
            DensityBucket::Xhdpi => 96,
            DensityBucket::Xxhdpi => 144,
            DensityBucket::Xxxhdpi => 192,
        }
    }
}

/// Launcher icon file written into each bucket folder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconVariant {
    Normal,
    /// Rendered exactly like `Normal`; no circular mask is applied
    Round,
}

impl IconVariant {
    pub const ALL: [IconVariant; 2] = [IconVariant::Normal, IconVariant::Round];

    pub fn file_name(&self) -> &'static str {
        match self {
            IconVariant::Normal => "ic_launcher.png",
            IconVariant::Round => "ic_launcher_round.png",
        }
    }
}
