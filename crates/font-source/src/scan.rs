//! Native font enumeration by scanning font directories.

use std::{
    collections::BTreeSet,
    fs::{read, read_dir},
    io::ErrorKind,
    path::{Path, PathBuf},
};

use availablefonts_core::{
    FontRecord, FontSource, PermissionQuery, PermissionState, error::Result as SourceResult,
};
use glob::{MatchOptions, Pattern, glob_with};
use log::{debug, info, warn};
use rayon::prelude::*;

use crate::{
    config::{FONT_EXTENSIONS, default_font_dirs},
    error::{Result, ScanError},
    names::read_records,
};

/// Enumerates fonts installed in a set of directories.
#[derive(Debug, Clone)]
pub struct LocalFontSource {
    dirs: Vec<PathBuf>,
}

impl Default for LocalFontSource {
    fn default() -> Self {
        Self::new(default_font_dirs())
    }
}

impl LocalFontSource {
    pub fn new(dirs: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self { dirs: dirs.into_iter().map(Into::into).collect() }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Scan every directory and describe each face found.
    ///
    /// Results are deduplicated and ordered by PostScript name. Unreadable
    /// or unparsable files are skipped.
    pub fn scan(&self) -> Result<Vec<FontRecord>> {
        let existing: Vec<&Path> =
            self.dirs.iter().map(PathBuf::as_path).filter(|dir| dir.is_dir()).collect();
        if existing.is_empty() {
            return Err(ScanError::NoDirectories);
        }

        let mut readable = Vec::new();
        let mut failure = None;
        for dir in existing {
            match read_dir(dir) {
                Ok(_) => readable.push(dir),
                Err(source) => {
                    warn!("Cannot read {}: {source}", dir.display());
                    failure = Some(ScanError::ReadDir { path: dir.to_path_buf(), source });
                }
            }
        }
        if readable.is_empty() {
            return Err(failure.unwrap_or(ScanError::NoDirectories));
        }

        let files = font_files(&readable)?;
        debug!("Found {} font files", files.len());

        let mut fonts: Vec<FontRecord> =
            files.par_iter().flat_map_iter(|path| read_font_file(path)).collect();
        fonts.sort_by(|a, b| a.postscript_name.cmp(&b.postscript_name));
        fonts.dedup_by(|a, b| a.postscript_name == b.postscript_name);

        info!("Scanned {} faces from {} directories", fonts.len(), readable.len());
        Ok(fonts)
    }
}

impl FontSource for LocalFontSource {
    async fn query_local_fonts(&self) -> SourceResult<Vec<FontRecord>> {
        Ok(self.scan()?)
    }
}

/// Collect font files below `dirs`, matching extensions in any case.
fn font_files(dirs: &[&Path]) -> Result<BTreeSet<PathBuf>> {
    let options = MatchOptions { case_sensitive: false, ..MatchOptions::new() };
    let mut files = BTreeSet::new();

    for dir in dirs {
        let Some(dir_str) = dir.to_str() else {
            warn!("Skipping non UTF-8 directory: {}", dir.display());
            continue;
        };
        let escaped = Pattern::escape(dir_str);
        for ext in FONT_EXTENSIONS {
            let pattern = format!("{escaped}/**/*.{ext}");
            files.extend(glob_with(&pattern, options)?.filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    debug!("Skipping {}: {e}", e.path().display());
                    None
                }
            }));
        }
    }

    Ok(files)
}

fn read_font_file(path: &Path) -> Vec<FontRecord> {
    let data = match read(path) {
        Ok(data) => data,
        Err(e) => {
            debug!("Skipping {}: {e}", path.display());
            return Vec::new();
        }
    };
    match read_records(&data) {
        Ok(records) => records,
        Err(e) => {
            debug!("Skipping {}: {e}", path.display());
            Vec::new()
        }
    }
}

/// Reports whether the configured font directories may be listed.
#[derive(Debug, Clone)]
pub struct DirectoryPermissions {
    dirs: Vec<PathBuf>,
}

impl DirectoryPermissions {
    pub fn new(dirs: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self { dirs: dirs.into_iter().map(Into::into).collect() }
    }

    /// Denied if any existing directory refuses to be listed.
    pub fn check(&self) -> PermissionState {
        let denied = self.dirs.iter().filter(|dir| dir.exists()).any(|dir| {
            matches!(read_dir(dir), Err(e) if e.kind() == ErrorKind::PermissionDenied)
        });
        if denied { PermissionState::Denied } else { PermissionState::Granted }
    }
}

impl From<&LocalFontSource> for DirectoryPermissions {
    fn from(source: &LocalFontSource) -> Self {
        Self::new(source.dirs.iter().cloned())
    }
}

impl PermissionQuery for DirectoryPermissions {
    async fn query(&self, name: &str) -> Option<PermissionState> {
        debug!("Checking '{name}' against {} directories", self.dirs.len());
        Some(self.check())
    }
}
