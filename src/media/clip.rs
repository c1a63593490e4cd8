// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::path::{Path, PathBuf};

/// File names of the hero clips, in playback order.
pub const SHIPPED_CLIP_FILES: [&str; 3] = ["hero.MOV", "hero2.MOV", "hero3.MOV"];

/// Reference to one playable background clip.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoClipRef(PathBuf);

impl VideoClipRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for VideoClipRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.file_name() {
            Some(name) => write!(f, "{}", name.to_string_lossy()),
            None => write!(f, "{}", self.0.display()),
        }
    }
}

/// Builds the shipped playlist against `assets_dir`.
///
/// Paths are not checked here; a missing file surfaces as a bind failure
/// when its turn comes.
pub fn shipped_clips(assets_dir: &Path) -> Vec<VideoClipRef> {
    SHIPPED_CLIP_FILES
        .iter()
        .map(|name| VideoClipRef::new(assets_dir.join(name)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_clips_keep_order_and_directory() {
        let clips = shipped_clips(Path::new("/srv/media"));
        let paths: Vec<_> = clips.iter().map(|clip| clip.path().to_path_buf()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/srv/media/hero.MOV"),
                PathBuf::from("/srv/media/hero2.MOV"),
                PathBuf::from("/srv/media/hero3.MOV"),
            ]
        );
    }

    #[test]
    fn display_shows_file_name() {
        let clip = VideoClipRef::new("/srv/media/hero2.MOV");
        assert_eq!(clip.to_string(), "hero2.MOV");
    }
}
