use crate::errors::ExtractionError;
use std::fs::{self, File};
use std::io::{self, Read, Seek};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};
use zip::ZipArchive;

/// True when `name` contains any of `cities`, ignoring case
pub fn matches_any_city(name: &str, cities: &[String]) -> bool {
    let name = name.to_lowercase();
    cities
        .iter()
        .any(|city| name.contains(&city.to_lowercase()))
}

/// Relative path for an entry name with root, `.` and `..` components dropped
pub fn sanitized_path(name: &str) -> PathBuf {
    Path::new(name)
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect()
}

/// Extract every entry whose name matches one of `cities` into `output_dir`.
///
/// Entries are visited in archive order and each one is written at most once,
/// keeping its relative path. Returns the names of the extracted entries.
pub fn extract_matching<R: Read + Seek>(
    reader: R,
    cities: &[String],
    output_dir: &Path,
) -> Result<Vec<String>, ExtractionError> {
    let mut archive = ZipArchive::new(reader)?;
    debug!("Archive holds {} entries", archive.len());

    let mut extracted = Vec::new();

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let name = entry.name().to_string();

        if !matches_any_city(&name, cities) {
            continue;
        }

        let relative = sanitized_path(&name);
        if relative.as_os_str().is_empty() && !entry.is_dir() {
            warn!("Skipping entry '{}' with no usable path", name);
            continue;
        }
        let target = output_dir.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut file = File::create(&target)?;
            io::copy(&mut entry, &mut file)?;
        }

        debug!("Extracted {} -> {}", name, target.display());
        extracted.push(name);
    }

    Ok(extracted)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::io::{Cursor, Write};
    use zip::write::FileOptions;
    use zip::ZipWriter;

    /// Build an in-memory archive. Names ending in `/` become directory entries.
    pub fn build_zip(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, body) in entries {
            if name.ends_with('/') {
                writer.add_directory(*name, FileOptions::default()).unwrap();
            } else {
                writer.start_file(*name, FileOptions::default()).unwrap();
                writer.write_all(body.as_bytes()).unwrap();
            }
        }
        writer.finish().unwrap().into_inner()
    }
}
