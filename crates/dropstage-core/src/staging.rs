//! Staging set for files pending form submission.
//!
//! The set is ordered by insertion, which is both the preview display order
//! and the order the files are exposed to the form.

use crate::config::SelectionMode;
use crate::identity::{FileIdentity, FileLike};

// ============================================================================
// StagedFile
// ============================================================================

/// A user-selected file together with its derived identity.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedFile<F> {
    identity: FileIdentity,
    file: F,
}

impl<F: FileLike> StagedFile<F> {
    pub fn new(file: F) -> Self {
        Self {
            identity: file.identity(),
            file,
        }
    }
}

impl<F> StagedFile<F> {
    pub fn identity(&self) -> &FileIdentity {
        &self.identity
    }

    pub fn file(&self) -> &F {
        &self.file
    }
}

// ============================================================================
// Outcomes
// ============================================================================

/// Result of staging a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    /// The file was appended to the set.
    Added,
    /// A file with the same identity is already staged; nothing changed.
    Duplicate,
    /// Single mode only: the file replaced the previously staged one.
    Replaced(FileIdentity),
}

/// Summary of staging a batch of files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageReport {
    /// Files appended or swapped in.
    pub added: usize,
    /// Files ignored because their identity was already staged.
    pub duplicates: usize,
}

impl StageReport {
    /// Whether the batch changed the staging set.
    pub fn changed(&self) -> bool {
        self.added > 0
    }
}

// ============================================================================
// ZoneView
// ============================================================================

/// What the static page elements should show for a staging set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneView {
    /// The "no file chosen" prompt is visible.
    pub prompt_visible: bool,
    /// The "select more files" control is visible.
    pub add_more_visible: bool,
    /// Text for the file-name display, single mode only.
    pub file_name: Option<String>,
    /// Number of staged files.
    pub staged: usize,
}

// ============================================================================
// StagingSet
// ============================================================================

/// Ordered set of staged files keyed by [`FileIdentity`].
///
/// In [`SelectionMode::Multiple`] a file whose identity is already present is
/// ignored. In [`SelectionMode::Single`] at most one file is held and staging
/// a different file swaps it in.
#[derive(Debug, Clone, PartialEq)]
pub struct StagingSet<F> {
    mode: SelectionMode,
    entries: Vec<StagedFile<F>>,
}

impl<F> StagingSet<F> {
    /// Creates an empty staging set.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            entries: Vec::new(),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, identity: &FileIdentity) -> bool {
        self.position(identity).is_some()
    }

    pub fn get(&self, identity: &FileIdentity) -> Option<&StagedFile<F>> {
        self.entries.iter().find(|e| &e.identity == identity)
    }

    /// Staged entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = &StagedFile<F>> {
        self.entries.iter()
    }

    /// Staged files in the order they are exposed to the form.
    pub fn files(&self) -> impl Iterator<Item = &F> {
        self.entries.iter().map(|e| &e.file)
    }

    /// Identities in display order.
    pub fn identities(&self) -> Vec<FileIdentity> {
        self.entries.iter().map(|e| e.identity.clone()).collect()
    }

    /// Removes a staged file by identity.
    ///
    /// Returns `None` if nothing with that identity is staged.
    pub fn remove(&mut self, identity: &FileIdentity) -> Option<StagedFile<F>> {
        let index = self.position(identity)?;
        Some(self.entries.remove(index))
    }

    /// Removes every staged file.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn position(&self, identity: &FileIdentity) -> Option<usize> {
        self.entries.iter().position(|e| &e.identity == identity)
    }
}

impl<F: FileLike> StagingSet<F> {
    /// Stages a single file.
    pub fn stage(&mut self, file: F) -> StageOutcome {
        let entry = StagedFile::new(file);

        if self.contains(&entry.identity) {
            return StageOutcome::Duplicate;
        }

        match self.mode {
            SelectionMode::Multiple => {
                self.entries.push(entry);
                StageOutcome::Added
            }
            SelectionMode::Single => {
                let previous = self.entries.pop();
                self.entries.clear();
                self.entries.push(entry);
                match previous {
                    Some(prev) => StageOutcome::Replaced(prev.identity),
                    None => StageOutcome::Added,
                }
            }
        }
    }

    /// Stages a batch of files.
    ///
    /// In single mode only the first file of the batch is considered.
    pub fn stage_all(&mut self, files: impl IntoIterator<Item = F>) -> StageReport {
        let limit = match self.mode {
            SelectionMode::Multiple => usize::MAX,
            SelectionMode::Single => 1,
        };

        let mut report = StageReport::default();
        for file in files.into_iter().take(limit) {
            match self.stage(file) {
                StageOutcome::Added | StageOutcome::Replaced(_) => report.added += 1,
                StageOutcome::Duplicate => report.duplicates += 1,
            }
        }
        report
    }

    /// Snapshot of what the page elements should display.
    pub fn view(&self) -> ZoneView {
        let file_name = match self.mode {
            SelectionMode::Single => self.entries.first().map(|e| e.file.name()),
            SelectionMode::Multiple => None,
        };

        ZoneView {
            prompt_visible: self.entries.is_empty(),
            add_more_visible: !self.entries.is_empty(),
            file_name,
            staged: self.entries.len(),
        }
    }
}

impl<F> Default for StagingSet<F> {
    fn default() -> Self {
        Self::new(SelectionMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct TestFile {
        name: &'static str,
        size: u64,
        modified: i64,
        media_type: &'static str,
    }

    impl TestFile {
        fn new(name: &'static str, size: u64, modified: i64) -> Self {
            Self {
                name,
                size,
                modified,
                media_type: "text/plain",
            }
        }
    }

    impl FileLike for TestFile {
        fn name(&self) -> String {
            self.name.to_string()
        }
        fn size(&self) -> u64 {
            self.size
        }
        fn last_modified(&self) -> i64 {
            self.modified
        }
        fn media_type(&self) -> String {
            self.media_type.to_string()
        }
    }

    fn multi() -> StagingSet<TestFile> {
        StagingSet::new(SelectionMode::Multiple)
    }

    // =========================================================================
    // Multiple mode
    // =========================================================================

    #[test]
    fn test_distinct_files_are_both_staged() {
        let mut set = multi();
        let report = set.stage_all([
            TestFile::new("a.txt", 10, 1),
            TestFile::new("b.txt", 10, 1),
            TestFile::new("a.txt", 11, 1),
            TestFile::new("a.txt", 10, 2),
        ]);

        assert_eq!(report, StageReport { added: 4, duplicates: 0 });
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_same_file_twice_is_staged_once() {
        let mut set = multi();
        let file = TestFile::new("a.txt", 10, 1);

        assert_eq!(set.stage(file.clone()), StageOutcome::Added);
        assert_eq!(set.stage(file.clone()), StageOutcome::Duplicate);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_duplicates_within_one_batch() {
        let mut set = multi();
        let file = TestFile::new("a.txt", 10, 1);
        let report = set.stage_all([file.clone(), file]);

        assert_eq!(report, StageReport { added: 1, duplicates: 1 });
        assert!(report.changed());
    }

    #[test]
    fn test_batch_of_only_duplicates_does_not_change() {
        let mut set = multi();
        set.stage(TestFile::new("a.txt", 10, 1));
        let report = set.stage_all([TestFile::new("a.txt", 10, 1)]);

        assert!(!report.changed());
        assert_eq!(report.duplicates, 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut set = multi();
        set.stage_all([
            TestFile::new("c.txt", 1, 1),
            TestFile::new("a.txt", 1, 1),
            TestFile::new("b.txt", 1, 1),
        ]);

        let names: Vec<_> = set.files().map(|f| f.name).collect();
        assert_eq!(names, vec!["c.txt", "a.txt", "b.txt"]);
    }

    #[test]
    fn test_remove_and_readd() {
        let mut set = multi();
        let file = TestFile::new("a.txt", 10, 1);
        let id = file.identity();
        set.stage(file.clone());

        let removed = set.remove(&id).expect("file was staged");
        assert_eq!(removed.file(), &file);
        assert!(set.is_empty());
        assert!(set.remove(&id).is_none());

        assert_eq!(set.stage(file), StageOutcome::Added);
        assert!(set.contains(&id));
    }

    #[test]
    fn test_remove_keeps_order_of_others() {
        let mut set = multi();
        set.stage_all([
            TestFile::new("a.txt", 1, 1),
            TestFile::new("b.txt", 1, 1),
            TestFile::new("c.txt", 1, 1),
        ]);
        set.remove(&FileIdentity::derive("b.txt", 1, 1));

        assert_eq!(
            set.identities(),
            vec![
                FileIdentity::derive("a.txt", 1, 1),
                FileIdentity::derive("c.txt", 1, 1),
            ]
        );
    }

    #[test]
    fn test_removing_last_file_restores_initial_view() {
        let initial = multi().view();
        let mut set = multi();
        let file = TestFile::new("a.txt", 10, 1);
        set.stage(file.clone());
        assert!(!set.view().prompt_visible);

        set.remove(&file.identity());

        assert_eq!(set.view(), initial);
        assert!(initial.prompt_visible);
        assert!(!initial.add_more_visible);
        assert_eq!(set.files().count(), 0);
    }

    #[test]
    fn test_view_multiple_has_no_file_name() {
        let mut set = multi();
        set.stage(TestFile::new("a.txt", 10, 1));

        let view = set.view();
        assert_eq!(view.file_name, None);
        assert_eq!(view.staged, 1);
        assert!(view.add_more_visible);
    }

    #[test]
    fn test_get_and_clear() {
        let mut set = multi();
        let file = TestFile::new("a.txt", 10, 1);
        set.stage(file.clone());

        assert_eq!(set.get(&file.identity()).map(|e| e.file()), Some(&file));
        set.clear();
        assert!(set.is_empty());
        assert!(set.get(&file.identity()).is_none());
    }

    // =========================================================================
    // Single mode
    // =========================================================================

    #[test]
    fn test_single_mode_replaces() {
        let mut set = StagingSet::new(SelectionMode::Single);
        let first = TestFile::new("a.txt", 1, 1);
        let second = TestFile::new("b.txt", 1, 1);

        assert_eq!(set.stage(first.clone()), StageOutcome::Added);
        assert_eq!(
            set.stage(second.clone()),
            StageOutcome::Replaced(first.identity())
        );
        assert_eq!(set.len(), 1);
        assert_eq!(set.files().next(), Some(&second));
    }

    #[test]
    fn test_single_mode_same_file_is_duplicate() {
        let mut set = StagingSet::new(SelectionMode::Single);
        let file = TestFile::new("a.txt", 1, 1);
        set.stage(file.clone());

        assert_eq!(set.stage(file), StageOutcome::Duplicate);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_single_mode_takes_first_of_batch() {
        let mut set = StagingSet::new(SelectionMode::Single);
        let report = set.stage_all([
            TestFile::new("a.txt", 1, 1),
            TestFile::new("b.txt", 1, 1),
        ]);

        assert_eq!(report, StageReport { added: 1, duplicates: 0 });
        assert_eq!(set.files().next().map(|f| f.name), Some("a.txt"));
    }

    #[test]
    fn test_single_mode_view_shows_file_name() {
        let mut set = StagingSet::new(SelectionMode::Single);
        assert_eq!(set.view().file_name, None);

        set.stage(TestFile::new("scan.pdf", 1, 1));
        assert_eq!(set.view().file_name.as_deref(), Some("scan.pdf"));

        set.clear();
        assert_eq!(set.view(), StagingSet::<TestFile>::new(SelectionMode::Single).view());
    }

    #[test]
    fn test_default_is_multiple() {
        let set: StagingSet<TestFile> = StagingSet::default();
        assert_eq!(set.mode(), SelectionMode::Multiple);
    }
}
