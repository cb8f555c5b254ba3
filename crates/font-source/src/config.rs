//! Where native fonts are looked up.

use std::path::PathBuf;

/// Font file extensions picked up by the scan, matched case-insensitively.
pub const FONT_EXTENSIONS: [&str; 4] = ["ttf", "otf", "ttc", "otc"];

/// Font directories of the current platform, user directories last.
///
/// Directories that do not exist are kept; the scan decides what to do
/// with them.
pub fn default_font_dirs() -> Vec<PathBuf> {
    let mut dirs = system_font_dirs();
    dirs.extend(user_font_dirs());
    dirs.dedup();
    dirs
}

#[cfg(target_os = "macos")]
fn system_font_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("/System/Library/Fonts"), PathBuf::from("/Library/Fonts")]
}

#[cfg(target_os = "windows")]
fn system_font_dirs() -> Vec<PathBuf> {
    let windir =
        std::env::var_os("WINDIR").map_or_else(|| PathBuf::from(r"C:\Windows"), PathBuf::from);
    vec![windir.join("Fonts")]
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn system_font_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("/usr/share/fonts"), PathBuf::from("/usr/local/share/fonts")]
}

#[cfg(target_os = "windows")]
fn user_font_dirs() -> Vec<PathBuf> {
    dirs::data_local_dir()
        .map(|dir| dir.join("Microsoft").join("Windows").join("Fonts"))
        .into_iter()
        .collect()
}

#[cfg(not(target_os = "windows"))]
fn user_font_dirs() -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = dirs::font_dir().into_iter().collect();
    if cfg!(not(target_os = "macos"))
        && let Some(home) = dirs::home_dir()
    {
        found.push(home.join(".fonts"));
    }
    found
}
