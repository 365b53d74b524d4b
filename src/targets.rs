/// Icon slots of a Flutter-style app project
///
/// Each target pairs an edge length with a path relative to the project root.
/// The table order is the render order.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Web,
    Ios,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Android => "Android",
            Platform::Web => "Web",
            Platform::Ios => "iOS",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTarget {
    pub size: u32,
    pub path: &'static str,
    pub platform: Platform,
}

impl IconTarget {
    pub const fn new(size: u32, path: &'static str, platform: Platform) -> Self {
        IconTarget { size, path, platform }
    }

    /// Absolute or cwd-relative location under the project root `base`
    pub fn resolve(&self, base: &Path) -> PathBuf {
        base.join(self.path)
    }
}

const MIPMAP: &str = "android/app/src/main/res";
const APPICONSET: &str = "ios/Runner/Assets.xcassets/AppIcon.appiconset";

macro_rules! android {
    ($size:expr, $density:literal) => {
        IconTarget::new($size, concat!("android/app/src/main/res/mipmap-", $density, "/ic_launcher.png"), Platform::Android)
    };
}

macro_rules! ios {
    ($size:expr, $name:literal) => {
        IconTarget::new($size, concat!("ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-", $name, ".png"), Platform::Ios)
    };
}

/// Every icon the app project expects
pub const TARGETS: &[IconTarget] = &[
    android!(48, "mdpi"),
    android!(72, "hdpi"),
    android!(96, "xhdpi"),
    android!(144, "xxhdpi"),
    android!(192, "xxxhdpi"),
    IconTarget::new(16, "web/favicon.png", Platform::Web),
    IconTarget::new(192, "web/icons/Icon-192.png", Platform::Web),
    IconTarget::new(512, "web/icons/Icon-512.png", Platform::Web),
    IconTarget::new(192, "web/icons/Icon-maskable-192.png", Platform::Web),
    IconTarget::new(512, "web/icons/Icon-maskable-512.png", Platform::Web),
    ios!(180, "60x60@3x"),
    ios!(120, "60x60@2x"),
    ios!(180, "180x180@3x"),
    ios!(120, "120x120@3x"),
    ios!(76, "76x76@1x"),
    ios!(152, "76x76@2x"),
    ios!(40, "40x40@1x"),
    ios!(80, "40x40@2x"),
    ios!(120, "40x40@3x"),
    ios!(29, "29x29@1x"),
    ios!(58, "29x29@2x"),
    ios!(87, "29x29@3x"),
    ios!(20, "20x20@1x"),
    ios!(40, "20x20@2x"),
    ios!(60, "20x20@3x"),
    ios!(1024, "1024x1024@1x"),
];

/// Targets for the given platforms in table order; all of them when empty
pub fn targets_for(platforms: &[Platform]) -> Vec<IconTarget> {
    TARGETS
        .iter()
        .filter(|target| platforms.is_empty() || platforms.contains(&target.platform))
        .copied()
        .collect()
}

/// Directory each platform's icons live under, relative to the project root
pub fn platform_root(platform: Platform) -> &'static str {
    match platform {
        Platform::Android => MIPMAP,
        Platform::Web => "web",
        Platform::Ios => APPICONSET,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_shape() {
        assert_eq!(TARGETS.len(), 26);
        assert_eq!(targets_for(&[Platform::Android]).len(), 5);
        assert_eq!(targets_for(&[Platform::Web]).len(), 5);
        assert_eq!(targets_for(&[Platform::Ios]).len(), 16);
    }

    #[test]
    fn test_paths_are_unique_and_under_platform_root() {
        let mut seen = HashSet::new();
        for target in TARGETS {
            assert!(seen.insert(target.path), "duplicate path {}", target.path);
            assert!(target.path.starts_with(platform_root(target.platform)));
            assert!(target.path.ends_with(".png"));
        }
    }

    #[test]
    fn test_ios_names_match_sizes() {
        for target in targets_for(&[Platform::Ios]) {
            let name = target.path.rsplit('/').next().unwrap();
            let dims = name.trim_start_matches("Icon-App-").trim_end_matches(".png");
            let (points, scale) = dims.split_once('@').unwrap();
            let points: u32 = points.split('x').next().unwrap().parse().unwrap();
            let scale: u32 = scale.trim_end_matches('x').parse().unwrap();
            // 180x180@3x and 120x120@3x name the pixel size, not the point size
            assert!(points * scale == target.size || points == target.size, "{}", target.path);
        }
    }

    #[test]
    fn test_filter_keeps_table_order() {
        let selected = targets_for(&[Platform::Ios, Platform::Android]);
        assert_eq!(selected[0].size, 48);
        assert_eq!(selected[5].size, 180);
        assert!(targets_for(&[]).len() == TARGETS.len());
    }

    #[test]
    fn test_resolve_joins_base() {
        let target = IconTarget::new(16, "web/favicon.png", Platform::Web);
        assert_eq!(target.resolve(Path::new("app")), PathBuf::from("app/web/favicon.png"));
    }
}
