use crate::converting::{ConvertSettings, convert_source};
use crate::io::{IoError, read_file, scan_source_files, write_file};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// What happened to a single candidate file
#[derive(Debug)]
pub enum FileOutcome {
    /// The file had legacy comments and was (or, in a dry run, would be) rewritten
    Updated { blocks: usize },
    /// Nothing to convert, the file was not touched
    Skipped,
    /// Reading or writing the file failed, it was left as it was
    Failed(IoError),
}

#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// Per-file outcomes of a run, in processing order
#[derive(Debug, Default)]
pub struct RunReport {
    files: Vec<FileReport>,
}

impl RunReport {
    pub fn files(&self) -> &[FileReport] {
        &self.files
    }

    pub fn updated(&self) -> usize {
        self.count(|outcome| matches!(outcome, FileOutcome::Updated { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|outcome| matches!(outcome, FileOutcome::Skipped))
    }

    pub fn failed(&self) -> usize {
        self.count(|outcome| matches!(outcome, FileOutcome::Failed(_)))
    }

    fn count(&self, predicate: impl Fn(&FileOutcome) -> bool) -> usize {
        self.files.iter().filter(|f| predicate(&f.outcome)).count()
    }
}

impl FromIterator<FileReport> for RunReport {
    fn from_iter<I: IntoIterator<Item = FileReport>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}

/// Drives discovery, conversion and writing over a directory tree.
///
/// Files are handled one at a time in sorted path order. Only a failure to
/// walk the root is returned as an error; problems with individual files are
/// recorded in the [`RunReport`] and the run carries on.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    settings: ConvertSettings,
    dry_run: bool,
}

impl Converter {
    pub fn new(settings: ConvertSettings) -> Self {
        Self {
            settings,
            dry_run: false,
        }
    }

    /// Convert in memory only, never writing files
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn run(&self, root: &Path) -> Result<RunReport, IoError> {
        let candidates = scan_source_files(root, self.settings.suffix())?;
        debug!(count = candidates.len(), root = %root.display(), "discovered files");

        let report: RunReport = candidates
            .into_iter()
            .map(|candidate| {
                let path = candidate.into_path();
                let outcome = self.convert_file(&path);
                FileReport { path, outcome }
            })
            .collect();

        info!(
            updated = report.updated(),
            skipped = report.skipped(),
            failed = report.failed(),
            dry_run = self.dry_run,
            "conversion finished"
        );
        Ok(report)
    }

    /// Convert one file, writing it back only when a comment was rewritten
    pub fn convert_file(&self, path: &Path) -> FileOutcome {
        match self.try_convert_file(path) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to convert file");
                FileOutcome::Failed(err)
            }
        }
    }

    fn try_convert_file(&self, path: &Path) -> Result<FileOutcome, IoError> {
        let content = read_file(path)?;
        let conversion = convert_source(&content, &self.settings);
        let blocks = conversion.converted();

        let Some(converted) = conversion.into_content() else {
            debug!(path = %path.display(), "no legacy comments, skipped");
            return Ok(FileOutcome::Skipped);
        };

        if !self.dry_run {
            write_file(path, &converted)?;
        }
        info!(path = %path.display(), blocks, dry_run = self.dry_run, "updated");
        Ok(FileOutcome::Updated { blocks })
    }
}
