use super::classify::{is_document_name, is_year_name, month_from_dir_name};
use crate::error::{OrganizeError, OrganizeResult};
use crate::model::entry::{MonthEntry, YearEntry};
use log::debug;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Lists year directories directly under `root`, sorted by name.
///
/// Non-directories, names without four digits, excluded names and names
/// that are not valid UTF-8 are skipped.
pub fn scan_year_entries(root: &Path) -> OrganizeResult<Vec<YearEntry>> {
    let mut years = Vec::new();
    for (name, path) in sorted_children(root)? {
        if !path.is_dir() {
            continue;
        }
        let Some(name) = name.to_str() else {
            debug!(
                "event=year_skip module=scan reason=non_utf8_name path={}",
                path.display()
            );
            continue;
        };
        if !is_year_name(name) {
            debug!("event=year_skip module=scan reason=name_rule name={name}");
            continue;
        }
        years.push(YearEntry {
            name: name.to_string(),
            path,
        });
    }
    Ok(years)
}

/// Lists month directories of one year, sorted by folder name.
pub fn scan_month_entries(year: &YearEntry) -> OrganizeResult<Vec<MonthEntry>> {
    let mut months = Vec::new();
    for (name, path) in sorted_children(&year.path)? {
        if !path.is_dir() {
            continue;
        }
        let Some(month) = name.to_str().and_then(month_from_dir_name) else {
            continue;
        };
        months.push(MonthEntry {
            month,
            name: name.to_string_lossy().into_owned(),
            path,
        });
    }
    Ok(months)
}

/// Lists regular `.md` files directly inside `dir`, sorted by filename.
pub fn list_documents(dir: &Path) -> OrganizeResult<Vec<PathBuf>> {
    Ok(sorted_children(dir)?
        .into_iter()
        .filter(|(name, path)| is_document_name(name) && path.is_file())
        .map(|(_, path)| path)
        .collect())
}

fn sorted_children(dir: &Path) -> OrganizeResult<Vec<(OsString, PathBuf)>> {
    let read_dir = fs::read_dir(dir).map_err(|err| OrganizeError::io("read_dir", dir, err))?;
    let mut children = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|err| OrganizeError::io("read_dir", dir, err))?;
        children.push((entry.file_name(), entry.path()));
    }
    children.sort_by(|left, right| left.0.cmp(&right.0));
    Ok(children)
}
