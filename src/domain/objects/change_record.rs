use colored::{ColoredString, Colorize};
use std::path::Path;

const LABEL_WIDTH: usize = 11;

/// Classification of one `git status --porcelain` entry.
///
/// Derived from the first significant character of the two-character status
/// token; the derivation is total, so unexpected tokens surface as
/// `Unknown` instead of failing the whole status query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ChangeKind {
    Modified,
    Added,
    Deleted,
    Renamed,
    Copied,
    Updated,
    Untracked,
    Unknown,
}

impl ChangeKind {
    /// Map a raw `XY` status token to its kind. The token is trimmed of
    /// padding first, so both `"M "` (staged) and `" M"` (unstaged) read as
    /// a modification; an all-blank token maps to `Unknown`.
    pub fn from_status_code(code: &str) -> Self {
        match code.trim().chars().next() {
            Some('M') => ChangeKind::Modified,
            Some('A') => ChangeKind::Added,
            Some('D') => ChangeKind::Deleted,
            Some('R') => ChangeKind::Renamed,
            Some('C') => ChangeKind::Copied,
            Some('U') => ChangeKind::Updated,
            Some('?') => ChangeKind::Untracked,
            _ => ChangeKind::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChangeKind::Modified => "modified:",
            ChangeKind::Added => "new file:",
            ChangeKind::Deleted => "deleted:",
            ChangeKind::Renamed => "renamed:",
            ChangeKind::Copied => "copied:",
            ChangeKind::Updated => "updated:",
            ChangeKind::Untracked => "untracked:",
            ChangeKind::Unknown => "unknown:",
        }
    }

    fn colored_label(&self) -> ColoredString {
        match self {
            ChangeKind::Modified => self.label().yellow(),
            ChangeKind::Added => self.label().green(),
            ChangeKind::Deleted => self.label().red(),
            ChangeKind::Renamed | ChangeKind::Copied => self.label().magenta(),
            ChangeKind::Updated => self.label().cyan(),
            ChangeKind::Untracked => self.label().bright_black(),
            ChangeKind::Unknown => self.label().normal(),
        }
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Pad against the plain label length; the ANSI escapes in the
        // colored form would otherwise count toward the width.
        let padding = LABEL_WIDTH.saturating_sub(self.label().len());
        write!(f, "{}{:>padding$}", self.colored_label(), "")
    }
}

/// One parsed entry of `git status --porcelain` output.
///
/// The status token is kept verbatim, padding included, and the path is
/// kept exactly as git reported it; paths git chose to quote are not
/// un-escaped. Records are rebuilt on every status query and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    status_code: String,
    path: String,
    kind: ChangeKind,
}

impl ChangeRecord {
    pub fn new(status_code: impl Into<String>, path: impl Into<String>) -> Self {
        let status_code = status_code.into();
        let kind = ChangeKind::from_status_code(&status_code);
        ChangeRecord {
            status_code,
            path: path.into(),
            kind,
        }
    }

    pub fn status_code(&self) -> &str {
        &self.status_code
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> ChangeKind {
        self.kind
    }

    /// Parent directory of the reported path, `"."` for top-level entries.
    pub fn directory(&self) -> String {
        match Path::new(&self.path).parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.display().to_string(),
            _ => ".".to_string(),
        }
    }
}

impl std::fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.path)
    }
}

/// Parse raw `git status --porcelain` output into change records.
///
/// Porcelain lines are `XY<space>path`: the status token and the path sit
/// at fixed offsets. Blank lines (including the one a trailing newline
/// produces) are discarded, and lines too short to carry the fixed prefix
/// are skipped so a partial read never panics the parser.
pub fn parse_porcelain(raw: &str) -> Vec<ChangeRecord> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            if line.len() < 3 || !line.is_char_boundary(2) || !line.is_char_boundary(3) {
                return None;
            }
            Some(ChangeRecord::new(&line[..2], &line[3..]))
        })
        .collect()
}

/// Group records by parent directory.
///
/// Groups appear in order of first occurrence and keep the input order of
/// their members, so the grouped view is a reordering-free refinement of
/// the flat one.
pub fn group_by_directory(records: &[ChangeRecord]) -> Vec<(String, Vec<ChangeRecord>)> {
    let mut groups: Vec<(String, Vec<ChangeRecord>)> = Vec::new();

    for record in records {
        let directory = record.directory();
        match groups.iter_mut().find(|(existing, _)| *existing == directory) {
            Some((_, members)) => members.push(record.clone()),
            None => groups.push((directory, vec![record.clone()])),
        }
    }

    groups
}
