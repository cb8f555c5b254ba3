//! Font naming from the `name` table.

use std::collections::HashMap;

use availablefonts_core::FontRecord;
use read_fonts::{FileRef, FontRef, ReadError, TableProvider};

/// Name table IDs.
const NAME_ID_FAMILY: u16 = 1;
const NAME_ID_SUBFAMILY: u16 = 2;
const NAME_ID_FULL_NAME: u16 = 4;
const NAME_ID_POSTSCRIPT_NAME: u16 = 6;
const NAME_ID_TYPOGRAPHIC_FAMILY: u16 = 16;
const NAME_ID_TYPOGRAPHIC_SUBFAMILY: u16 = 17;

const PLATFORM_MACINTOSH: u16 = 1;
const PLATFORM_WINDOWS: u16 = 3;
const LANGUAGE_WINDOWS_EN_US: u16 = 0x0409;
const LANGUAGE_MACINTOSH_ENGLISH: u16 = 0;

/// Fallback style for faces without a subfamily name.
const DEFAULT_STYLE: &str = "Regular";

/// Describe every face in a font file or collection.
///
/// Faces that fail to parse or have no family or PostScript name are
/// skipped; only an unreadable file header is an error.
pub fn read_records(data: &[u8]) -> Result<Vec<FontRecord>, ReadError> {
    let file = FileRef::new(data)?;
    Ok(file
        .fonts()
        .filter_map(|font| match font {
            Ok(font) => font_record(&font),
            Err(e) => {
                log::debug!("Skipping face: {e}");
                None
            }
        })
        .collect())
}

/// Describe one face.
pub fn font_record(font: &FontRef) -> Option<FontRecord> {
    let names = best_names(font).ok()?;
    let pick = |ids: &[u16]| ids.iter().find_map(|id| names.get(id)).cloned();

    let family = pick(&[NAME_ID_TYPOGRAPHIC_FAMILY, NAME_ID_FAMILY])?;
    let postscript_name = pick(&[NAME_ID_POSTSCRIPT_NAME])?;
    let style = pick(&[NAME_ID_TYPOGRAPHIC_SUBFAMILY, NAME_ID_SUBFAMILY])
        .unwrap_or_else(|| DEFAULT_STYLE.to_string());
    let full_name = pick(&[NAME_ID_FULL_NAME]).unwrap_or_else(|| format!("{family} {style}"));

    Some(FontRecord { family, full_name, postscript_name, style })
}

/// Rank a record's platform and language; higher wins.
fn preference(platform_id: u16, language_id: u16) -> u8 {
    match (platform_id, language_id) {
        (PLATFORM_WINDOWS, LANGUAGE_WINDOWS_EN_US) => 3,
        (PLATFORM_WINDOWS, _) => 2,
        (PLATFORM_MACINTOSH, LANGUAGE_MACINTOSH_ENGLISH) => 1,
        _ => 0,
    }
}

/// Map each relevant name ID to its most preferred non-empty string.
fn best_names(font: &FontRef) -> Result<HashMap<u16, String>, ReadError> {
    let name = font.name()?;
    let mut best: HashMap<u16, (u8, String)> = HashMap::new();

    for record in name.name_record() {
        let name_id = record.name_id().to_u16();
        if !matches!(
            name_id,
            NAME_ID_FAMILY
                | NAME_ID_SUBFAMILY
                | NAME_ID_FULL_NAME
                | NAME_ID_POSTSCRIPT_NAME
                | NAME_ID_TYPOGRAPHIC_FAMILY
                | NAME_ID_TYPOGRAPHIC_SUBFAMILY
        ) {
            continue;
        }

        let value = match record.string(name.string_data()) {
            Ok(s) => s.chars().collect::<String>(),
            Err(_) => continue,
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        let rank = preference(record.platform_id(), record.language_id());
        if best.get(&name_id).is_none_or(|(current, _)| rank > *current) {
            best.insert(name_id, (rank, value.to_string()));
        }
    }

    Ok(best.into_iter().map(|(id, (_, value))| (id, value)).collect())
}
