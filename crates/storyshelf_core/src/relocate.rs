//! Loose document relocation into month folders.
//!
//! # Responsibility
//! - Plan moves of `.md` files sitting directly in a year directory.
//! - Apply planned moves as plain renames.
//!
//! # Invariants
//! - The target month comes from the file's modification time in the local
//!   timezone (via [`ModifiedTimeResolver`] in production).
//! - An existing month folder is reused even when its case differs.
//! - Existing files are never overwritten.
//! - The first failing move aborts; nothing is retried or rolled back.

use crate::error::{OrganizeError, OrganizeResult};
use crate::model::entry::YearEntry;
use crate::model::month::Month;
use crate::scan::{list_documents, scan_month_entries};
use log::{error, info};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Decides which month a loose document belongs to.
pub trait MonthResolver {
    fn month_for(&self, path: &Path) -> OrganizeResult<Month>;
}

/// Resolves months from the OS-reported last-modified time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifiedTimeResolver;

impl MonthResolver for ModifiedTimeResolver {
    fn month_for(&self, path: &Path) -> OrganizeResult<Month> {
        let modified = fs::metadata(path)
            .and_then(|metadata| metadata.modified())
            .map_err(|err| OrganizeError::io("stat", path, err))?;
        Ok(Month::from_system_time(modified))
    }
}

/// One planned loose-document move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relocation {
    pub from: PathBuf,
    pub to: PathBuf,
    pub month: Month,
}

/// Plans moves for every loose document of `year`, in filename order.
pub fn plan_relocations<M: MonthResolver + ?Sized>(
    year: &YearEntry,
    resolver: &M,
) -> OrganizeResult<Vec<Relocation>> {
    let loose = list_documents(&year.path)?;
    if loose.is_empty() {
        return Ok(Vec::new());
    }

    let mut existing = BTreeMap::<Month, PathBuf>::new();
    for entry in scan_month_entries(year)? {
        existing.entry(entry.month).or_insert(entry.path);
    }

    let mut plan = Vec::with_capacity(loose.len());
    for from in loose {
        let month = resolver.month_for(&from)?;
        let month_dir = existing
            .get(&month)
            .cloned()
            .unwrap_or_else(|| year.path.join(month.abbreviation()));
        let Some(file_name) = from.file_name() else {
            continue;
        };
        let to = month_dir.join(file_name);
        plan.push(Relocation { from, to, month });
    }
    Ok(plan)
}

/// Applies planned moves in order.
///
/// # Errors
/// - [`OrganizeError::DestinationExists`] when a target path is occupied.
/// - [`OrganizeError::Io`] when creating the month folder or renaming fails.
pub fn apply_relocations(plan: &[Relocation]) -> OrganizeResult<()> {
    for relocation in plan {
        if let Err(err) = apply_one(relocation) {
            error!(
                "event=relocate module=relocate status=error error_code={} from={} to={} error={}",
                err.code(),
                relocation.from.display(),
                relocation.to.display(),
                err
            );
            return Err(err);
        }
        info!(
            "event=relocate module=relocate status=ok month={} from={} to={}",
            relocation.month,
            relocation.from.display(),
            relocation.to.display()
        );
    }
    Ok(())
}

fn apply_one(relocation: &Relocation) -> OrganizeResult<()> {
    if let Some(month_dir) = relocation.to.parent() {
        fs::create_dir_all(month_dir)
            .map_err(|err| OrganizeError::io("create_dir", month_dir, err))?;
    }
    if relocation.to.symlink_metadata().is_ok() {
        return Err(OrganizeError::DestinationExists(relocation.to.clone()));
    }
    fs::rename(&relocation.from, &relocation.to)
        .map_err(|err| OrganizeError::io("rename", &relocation.from, err))
}

#[cfg(test)]
mod tests {
    use super::{apply_relocations, plan_relocations, MonthResolver};
    use crate::error::{OrganizeError, OrganizeResult};
    use crate::model::entry::YearEntry;
    use crate::model::month::Month;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    struct Fixed(Month);

    impl MonthResolver for Fixed {
        fn month_for(&self, _path: &Path) -> OrganizeResult<Month> {
            Ok(self.0)
        }
    }

    fn year_in(root: &TempDir) -> YearEntry {
        let path = root.path().join("2023");
        fs::create_dir_all(&path).unwrap();
        YearEntry {
            name: "2023".to_string(),
            path,
        }
    }

    #[test]
    fn plan_targets_canonical_folder_when_absent() {
        let root = TempDir::new().unwrap();
        let year = year_in(&root);
        fs::write(year.path.join("story.md"), "# Trip #").unwrap();
        fs::write(year.path.join("notes.txt"), "skip").unwrap();

        let plan = plan_relocations(&year, &Fixed(Month::Mar)).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].to, year.path.join("Mar").join("story.md"));
    }

    #[test]
    fn plan_reuses_existing_folder_with_other_case() {
        let root = TempDir::new().unwrap();
        let year = year_in(&root);
        fs::create_dir(year.path.join("mar")).unwrap();
        fs::write(year.path.join("story.md"), "").unwrap();

        let plan = plan_relocations(&year, &Fixed(Month::Mar)).unwrap();
        assert_eq!(plan[0].to, year.path.join("mar").join("story.md"));
    }

    #[test]
    fn apply_creates_folder_and_moves_content_unchanged() {
        let root = TempDir::new().unwrap();
        let year = year_in(&root);
        fs::write(year.path.join("story.md"), "# Trip #\nbody").unwrap();

        let plan = plan_relocations(&year, &Fixed(Month::Jul)).unwrap();
        apply_relocations(&plan).unwrap();

        assert!(!year.path.join("story.md").exists());
        let moved = fs::read_to_string(year.path.join("Jul").join("story.md")).unwrap();
        assert_eq!(moved, "# Trip #\nbody");
    }

    #[test]
    fn apply_refuses_to_overwrite() {
        let root = TempDir::new().unwrap();
        let year = year_in(&root);
        fs::create_dir(year.path.join("Jul")).unwrap();
        fs::write(year.path.join("Jul").join("story.md"), "old").unwrap();
        fs::write(year.path.join("story.md"), "new").unwrap();

        let plan = plan_relocations(&year, &Fixed(Month::Jul)).unwrap();
        let err = apply_relocations(&plan).unwrap_err();
        assert!(matches!(err, OrganizeError::DestinationExists(_)));
        assert_eq!(
            fs::read_to_string(year.path.join("Jul").join("story.md")).unwrap(),
            "old"
        );
        assert!(year.path.join("story.md").exists());
    }
}
