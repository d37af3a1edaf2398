//! Organize pipeline: scan, relocate, index, write.
//!
//! # Responsibility
//! - Relocate loose documents of every year into month folders.
//! - Regenerate `README.md` at the root from the resulting tree.
//!
//! # Invariants
//! - The root is passed in explicitly; process working directory is never
//!   consulted.
//! - The index is fully assembled before anything is written; an error in
//!   any earlier step leaves the previous index untouched.
//! - A second run over an unchanged tree moves nothing and writes identical
//!   bytes.

use crate::error::{OrganizeError, OrganizeResult};
use crate::index::{order_month_entries, IndexBuilder, IndexOptions, MonthSection, INDEX_FILE_NAME};
use crate::model::entry::{DocumentEntry, YearEntry};
use crate::relocate::{
    apply_relocations, plan_relocations, ModifiedTimeResolver, MonthResolver, Relocation,
};
use crate::scan::{list_documents, scan_month_entries, scan_year_entries};
use crate::title::read_title;
use log::{debug, error, info};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Per-section summary in a [`RunReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSummary {
    /// Header label, e.g. `2023-03`.
    pub label: String,
    pub documents: Vec<DocumentEntry>,
}

/// Outcome of one completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub root: PathBuf,
    pub index_path: PathBuf,
    /// Moves applied during this run, in application order.
    pub relocations: Vec<Relocation>,
    pub sections: Vec<SectionSummary>,
}

impl RunReport {
    pub fn document_count(&self) -> usize {
        self.sections
            .iter()
            .map(|section| section.documents.len())
            .sum()
    }
}

/// Organizer facade over one notes root.
pub struct Organizer<M: MonthResolver = ModifiedTimeResolver> {
    root: PathBuf,
    options: IndexOptions,
    resolver: M,
}

impl Organizer {
    /// Creates an organizer that buckets loose documents by modification time.
    pub fn new(root: impl Into<PathBuf>, options: IndexOptions) -> Self {
        Self::with_resolver(root, options, ModifiedTimeResolver)
    }
}

impl<M: MonthResolver> Organizer<M> {
    /// Creates an organizer with a caller-provided month resolver.
    pub fn with_resolver(root: impl Into<PathBuf>, options: IndexOptions, resolver: M) -> Self {
        Self {
            root: root.into(),
            options,
            resolver,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the generated index document.
    pub fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE_NAME)
    }

    /// Lists the moves a run would apply, without touching the filesystem.
    pub fn plan(&self) -> OrganizeResult<Vec<Relocation>> {
        self.ensure_root()?;
        let mut plan = Vec::new();
        for year in scan_year_entries(&self.root)? {
            plan.extend(plan_relocations(&year, &self.resolver)?);
        }
        Ok(plan)
    }

    /// Runs the full pipeline and overwrites the index document.
    ///
    /// # Side effects
    /// - Renames loose documents into month folders, creating folders.
    /// - Creates or truncates `<root>/README.md`.
    /// - Emits `organize` logging events with duration and status.
    pub fn run(&self) -> OrganizeResult<RunReport> {
        let started_at = Instant::now();
        info!(
            "event=organize module=service status=start root={}",
            self.root.display()
        );

        match self.run_inner() {
            Ok(report) => {
                info!(
                    "event=organize module=service status=ok duration_ms={} relocated={} sections={} documents={}",
                    started_at.elapsed().as_millis(),
                    report.relocations.len(),
                    report.sections.len(),
                    report.document_count()
                );
                Ok(report)
            }
            Err(err) => {
                error!(
                    "event=organize module=service status=error duration_ms={} error_code={} error={}",
                    started_at.elapsed().as_millis(),
                    err.code(),
                    err
                );
                Err(err)
            }
        }
    }

    fn run_inner(&self) -> OrganizeResult<RunReport> {
        self.ensure_root()?;

        let mut relocations = Vec::new();
        let mut builder = IndexBuilder::new(self.options.clone());
        for year in scan_year_entries(&self.root)? {
            let plan = plan_relocations(&year, &self.resolver)?;
            apply_relocations(&plan)?;
            relocations.extend(plan);
            self.index_year(&year, &mut builder)?;
        }

        let index_path = self.index_path();
        fs::write(&index_path, builder.render())
            .map_err(|err| OrganizeError::io("write", &index_path, err))?;
        info!(
            "event=index_write module=service status=ok path={} sections={}",
            index_path.display(),
            builder.sections().len()
        );

        let sections = builder
            .into_sections()
            .into_iter()
            .map(|section| SectionSummary {
                label: section.label(),
                documents: section.documents,
            })
            .collect();
        Ok(RunReport {
            root: self.root.clone(),
            index_path,
            relocations,
            sections,
        })
    }

    fn index_year(&self, year: &YearEntry, builder: &mut IndexBuilder) -> OrganizeResult<()> {
        let mut months = scan_month_entries(year)?;
        if months.is_empty() {
            debug!("event=year_empty module=service year={}", year.name);
            return Ok(());
        }
        order_month_entries(&mut months, builder.options().month_order);

        for month in months {
            let mut documents = Vec::new();
            for path in list_documents(&month.path)? {
                let Some(file_name) = path.file_name() else {
                    continue;
                };
                documents.push(DocumentEntry {
                    title: read_title(&path)?,
                    relative_path: Path::new(&year.name).join(&month.name).join(file_name),
                });
            }
            builder.push_section(MonthSection {
                year: year.name.clone(),
                month: month.month,
                documents,
            });
        }
        Ok(())
    }

    fn ensure_root(&self) -> OrganizeResult<()> {
        let metadata =
            fs::metadata(&self.root).map_err(|err| OrganizeError::io("stat", &self.root, err))?;
        if !metadata.is_dir() {
            return Err(OrganizeError::InvalidRoot(self.root.clone()));
        }
        Ok(())
    }
}
