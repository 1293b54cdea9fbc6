//! File filtering functionality
//!
//! This module provides the predicate evaluator: criteria parsed from
//! command line modifiers, grouped by kind and applied to file candidates.

use std::os::unix::fs::MetadataExt;
use std::path::Path;

use walkdir::{DirEntry, DirEntryExt};

use super::exec::ExecCommand;
use crate::errors::{FindError, FindResult};

/// Comparison direction for a size criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeComparator {
    /// Strictly smaller than the reference size
    Less,
    /// Exactly the reference size
    Equal,
    /// Strictly larger than the reference size
    Greater,
}

impl SizeComparator {
    /// Compare an actual file size against the reference size
    pub fn compare(self, actual: u64, reference: u64) -> bool {
        match self {
            SizeComparator::Less => actual < reference,
            SizeComparator::Equal => actual == reference,
            SizeComparator::Greater => actual > reference,
        }
    }
}

/// One concrete filter constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterCriterion {
    /// Inode number equals the given value
    Inode(u64),
    /// File name equals the given string exactly
    Name(String),
    /// File size compares against the given value
    Size(SizeComparator, u64),
    /// Hard-link count equals the given value
    HardLinks(u64),
}

impl FilterCriterion {
    /// Parse a size modifier value of the form `[-|=|+]N`
    pub fn parse_size(value: &str) -> FindResult<Self> {
        let comparator = match value.as_bytes().first() {
            Some(b'-') => SizeComparator::Less,
            Some(b'=') => SizeComparator::Equal,
            Some(b'+') => SizeComparator::Greater,
            _ => return Err(FindError::InvalidSize(value.to_string())),
        };
        let size = value[1..]
            .parse::<u64>()
            .map_err(|_| FindError::InvalidSize(value.to_string()))?;
        Ok(FilterCriterion::Size(comparator, size))
    }
}

/// Candidate file produced for every regular file during the walk
///
/// Ephemeral: built from a directory entry, evaluated once, discarded.
#[derive(Debug)]
pub struct FileCandidate {
    /// File name (final path component)
    pub name: String,
    /// Inode number
    pub inode: u64,
    /// Size in bytes
    pub size: u64,
    /// Number of hard links
    pub hard_links: u64,
}

impl FileCandidate {
    /// Build a candidate from a directory entry and its metadata
    ///
    /// A metadata failure (e.g. the file vanished mid-walk) is reported
    /// as `MetadataUnreadable` for this entry, not as a directory error.
    pub fn from_entry(entry: &DirEntry) -> FindResult<Self> {
        let metadata = entry.metadata().map_err(|err| {
            let source = err.into_io_error().unwrap_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::Other, "元数据不可用")
            });
            FindError::MetadataUnreadable {
                path: entry.path().to_path_buf(),
                source,
            }
        })?;
        Ok(Self {
            name: entry.file_name().to_string_lossy().into_owned(),
            inode: entry.ino(),
            size: metadata.len(),
            hard_links: metadata.nlink(),
        })
    }
}

/// Predicate set for one run
///
/// Holds the criteria sequences for all four kinds plus the optional exec
/// target. Immutable once built from the command line modifiers, so the
/// walker can share it across the whole traversal.
#[derive(Debug, Default)]
pub struct PredicateSet {
    inodes: Vec<u64>,
    names: Vec<String>,
    sizes: Vec<(SizeComparator, u64)>,
    hard_links: Vec<u64>,
    exec: Option<ExecCommand>,
}

impl PredicateSet {
    /// Build a predicate set from ordered (flag, value) modifier pairs
    ///
    /// Recognized flags: `-inum`, `-name`, `-size`, `-nlinks`, `-exec`.
    /// Repeated flags of one kind accumulate as alternatives; `-exec`
    /// keeps the last occurrence and requires the path to exist.
    pub fn from_modifiers(modifiers: &[(String, String)]) -> FindResult<Self> {
        let mut set = PredicateSet::default();
        for (flag, value) in modifiers {
            match flag.as_str() {
                "-inum" => {
                    let inode = value
                        .parse::<u64>()
                        .map_err(|_| FindError::InvalidInode(value.clone()))?;
                    set.push(FilterCriterion::Inode(inode));
                }
                "-name" => set.push(FilterCriterion::Name(value.clone())),
                "-size" => {
                    let criterion = FilterCriterion::parse_size(value)?;
                    set.push(criterion);
                }
                "-nlinks" => {
                    let count = value
                        .parse::<u64>()
                        .map_err(|_| FindError::InvalidLinkCount(value.clone()))?;
                    set.push(FilterCriterion::HardLinks(count));
                }
                "-exec" => {
                    set.exec = Some(ExecCommand::new(Path::new(value))?);
                }
                other => return Err(FindError::UnknownModifier(other.to_string())),
            }
        }
        Ok(set)
    }

    /// Add one criterion to the sequence of its kind
    pub fn push(&mut self, criterion: FilterCriterion) {
        match criterion {
            FilterCriterion::Inode(inode) => self.inodes.push(inode),
            FilterCriterion::Name(name) => self.names.push(name),
            FilterCriterion::Size(comparator, size) => self.sizes.push((comparator, size)),
            FilterCriterion::HardLinks(count) => self.hard_links.push(count),
        }
    }

    /// Check whether a candidate satisfies the whole predicate set
    ///
    /// Each kind with no criteria is vacuously satisfied; a kind with
    /// criteria is satisfied when at least one of them matches (OR within
    /// a kind). The overall result is the AND across the four kinds.
    pub fn matches(&self, candidate: &FileCandidate) -> bool {
        let inode_ok =
            self.inodes.is_empty() || self.inodes.iter().any(|inode| *inode == candidate.inode);
        if !inode_ok {
            return false;
        }
        let name_ok =
            self.names.is_empty() || self.names.iter().any(|name| *name == candidate.name);
        if !name_ok {
            return false;
        }
        let links_ok = self.hard_links.is_empty()
            || self
                .hard_links
                .iter()
                .any(|count| *count == candidate.hard_links);
        if !links_ok {
            return false;
        }
        self.sizes.is_empty()
            || self
                .sizes
                .iter()
                .any(|(comparator, size)| comparator.compare(candidate.size, *size))
    }

    /// Whether an exec target was set
    pub fn executable(&self) -> bool {
        self.exec.is_some()
    }

    /// The exec target, if any
    pub fn exec(&self) -> Option<&ExecCommand> {
        self.exec.as_ref()
    }
}
