use crate::domain::{EntriesIndex, EntryMetadata};
use crate::io::INDEX_FILENAME;
use crate::parser::frontmatter::parse_frontmatter;
use anyhow::{bail, Context, Result};
use chrono::{SecondsFormat, Utc};
use log::{error, info, warn};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub filename: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct BuildReport {
    pub index: EntriesIndex,
    pub index_path: PathBuf,
    pub files_found: usize,
    pub skipped: Vec<SkippedFile>,
}

/// Scans `entries_dir` for markdown files and writes `index.json` next to them.
///
/// A file that cannot be read or whose front-matter is missing or invalid is logged and left out
/// of the index. Failing to read the directory itself, or to write the index, aborts the run.
pub fn build_index(entries_dir: &Path) -> Result<BuildReport> {
    let (files, mut skipped) = list_markdown_files(entries_dir)?;
    info!("Found {} markdown files", files.len());

    let mut entries = Vec::with_capacity(files.len());

    for path in &files {
        let filename = match path.file_name() {
            Some(name) => name.to_string_lossy().to_string(),
            None => continue,
        };

        match process_markdown_file(path, &filename) {
            Ok(entry) => {
                info!("Processed {}", filename);
                entries.push(entry);
            }
            Err(e) => {
                error!("Error processing {}: {:#}", filename, e);
                skipped.push(SkippedFile {
                    filename,
                    reason: format!("{:#}", e),
                });
            }
        }
    }

    warn_duplicate_slugs(&entries);
    sort_entries_by_id(&mut entries);

    let index = EntriesIndex {
        entries,
        last_updated: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    };

    let index_path = entries_dir.join(INDEX_FILENAME);
    write_index(&index, &index_path)?;

    info!("Generated {}", index_path.display());
    info!("Total entries: {}", index.entries.len());

    Ok(BuildReport {
        index,
        index_path,
        files_found: files.len(),
        skipped,
    })
}

// non-recursive, sorted by file name so equal ids keep a stable order across platforms.
// entries that cannot be stat'ed (dangling links, permissions) are skipped, not fatal
pub fn list_markdown_files(entries_dir: &Path) -> Result<(Vec<PathBuf>, Vec<SkippedFile>)> {
    let metadata = fs::metadata(entries_dir).with_context(|| {
        format!("Unable to read entries directory {}", entries_dir.display())
    })?;
    if !metadata.is_dir() {
        bail!("{} is not a directory", entries_dir.display());
    }

    let mut files = Vec::new();
    let mut skipped = Vec::new();
    let walker = WalkDir::new(entries_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for result_entry in walker {
        let entry = match result_entry {
            Ok(entry) => entry,
            Err(e) if e.depth() > 0 => {
                let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                if !is_markdown(&path) {
                    warn!("Ignoring unreadable {}: {}", path.display(), e);
                    continue;
                }
                let filename = path
                    .file_name()
                    .map(|name| name.to_string_lossy().to_string())
                    .unwrap_or_default();
                error!("Error processing {}: {}", filename, e);
                skipped.push(SkippedFile {
                    filename,
                    reason: e.to_string(),
                });
                continue;
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Unable to read entries directory {}", entries_dir.display())
                })
            }
        };

        if entry.file_type().is_file() && is_markdown(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok((files, skipped))
}

fn is_markdown(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("md")
}

pub fn process_markdown_file(path: &Path, filename: &str) -> Result<EntryMetadata> {
    let md_content = fs::read_to_string(path)
        .with_context(|| format!("Unable to read file {}", path.display()))?;

    let frontmatter = parse_frontmatter(&md_content)?;
    let entry = frontmatter.to_entry_metadata(filename)?;

    Ok(entry)
}

// parseInt order; ids without an integer prefix trail, ties keep input order
pub fn sort_entries_by_id(entries: &mut [EntryMetadata]) {
    entries.sort_by_key(|entry| match parse_leading_int(&entry.id) {
        Some(n) => (0, n),
        None => (1, 0),
    });
}

// "  42abc" -> 42, "-7" -> -7, "abc" -> None
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // only overflow can fail here; parseInt still reads those as (huge) numbers
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

fn warn_duplicate_slugs(entries: &[EntryMetadata]) {
    let mut owners: HashMap<&str, &str> = HashMap::new();
    for entry in entries {
        if let Some(first) = owners.get(entry.slug.as_str()) {
            warn!(
                "Slug '{}' of {} is already used by {}; only one of them is reachable by slug",
                entry.slug, entry.filename, first
            );
        } else {
            owners.insert(&entry.slug, &entry.filename);
        }
    }
}

pub fn write_index(index: &EntriesIndex, index_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(index).context("Failed to serialize entries index")?;
    fs::write(index_path, json)
        .with_context(|| format!("Unable to write {}", index_path.display()))?;
    Ok(())
}
