//! Ignore-list loading and pattern classification.
//!
//! An ignore file is UTF-8 text with one pattern per line. Empty lines and
//! lines starting with `#` are skipped; every other line is taken verbatim.
//! The ignore file's own path is appended as the final pattern, and its
//! resolved location is kept so the filter can drop the file even when the
//! walk spells its path differently.

use crate::Result;
use std::fs;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

/// Name of the ignore file looked up in the root directory by default.
pub const DEFAULT_IGNORE_FILE: &str = ".zipignore";

/// Shape of an ignore pattern, inferred from its text.
///
/// The kind is informational: matching always applies every rule (see
/// [`IgnorePattern::matches`]), so a pattern's kind never narrows what it
/// can exclude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Plain text matched as a substring of the entry path.
    Literal,

    /// Text with a trailing separator, e.g. `build/`.
    DirectoryName,

    /// Text starting with `*`, e.g. `*.log`.
    SuffixWildcard,
}

/// A single ignore pattern with its derived forms precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnorePattern {
    raw: String,
    dir_name: String,
    suffix: Option<String>,
}

impl IgnorePattern {
    /// Creates a pattern from one raw line of an ignore file.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipproject_core::creation::ignore::IgnorePattern;
    /// use zipproject_core::creation::ignore::PatternKind;
    ///
    /// assert_eq!(IgnorePattern::new("*.log").kind(), PatternKind::SuffixWildcard);
    /// assert_eq!(IgnorePattern::new("build/").kind(), PatternKind::DirectoryName);
    /// assert_eq!(IgnorePattern::new("notes.txt").kind(), PatternKind::Literal);
    /// ```
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let dir_name = raw.trim_end_matches(is_separator).to_string();
        let suffix = raw
            .starts_with('*')
            .then(|| raw.trim_start_matches('*').to_string());
        Self {
            raw,
            dir_name,
            suffix,
        }
    }

    /// Returns the pattern exactly as it appeared in the ignore file.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Classifies the pattern by its shape.
    #[must_use]
    pub fn kind(&self) -> PatternKind {
        if self.suffix.is_some() {
            PatternKind::SuffixWildcard
        } else if self.dir_name.len() != self.raw.len() {
            PatternKind::DirectoryName
        } else {
            PatternKind::Literal
        }
    }

    /// Tests an entry against this pattern.
    ///
    /// The entry matches when any of these holds:
    /// - its path contains the raw pattern
    /// - it is a directory and its path contains the pattern with trailing
    ///   separators stripped
    /// - the pattern starts with `*` and the path ends with the text after
    ///   the leading `*` run
    /// - its base name equals the raw pattern
    ///
    /// Matching is plain substring comparison, never glob matching, so a
    /// short pattern such as `o` matches almost every path.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipproject_core::creation::ignore::IgnorePattern;
    ///
    /// let pattern = IgnorePattern::new("*.log");
    /// assert!(pattern.matches("logs/app.log", Some("app.log"), false));
    /// assert!(!pattern.matches("logs/app.txt", Some("app.txt"), false));
    /// ```
    #[must_use]
    pub fn matches(&self, path: &str, name: Option<&str>, is_dir: bool) -> bool {
        if path.contains(self.raw.as_str()) {
            return true;
        }

        // Only reachable for directories, which the filter has already
        // dropped. Subtree exclusion is deliberately not implied here.
        if is_dir && path.contains(self.dir_name.as_str()) {
            return true;
        }

        if let Some(suffix) = &self.suffix
            && path.ends_with(suffix.as_str())
        {
            return true;
        }

        name.is_some_and(|name| name == self.raw)
    }
}

/// Ordered list of ignore patterns loaded from one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreList {
    patterns: Vec<IgnorePattern>,
    source_file: Option<PathBuf>,
}

impl IgnoreList {
    /// Builds a list from raw pattern strings, in order.
    ///
    /// No implicit self-pattern is added; use [`load_ignore_list`] for that.
    #[must_use]
    pub fn from_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(IgnorePattern::new).collect(),
            source_file: None,
        }
    }

    /// Returns the canonical path of the file the list was loaded from.
    #[must_use]
    pub fn source_file(&self) -> Option<&Path> {
        self.source_file.as_deref()
    }

    /// Checks whether `path` names the file this list was loaded from.
    ///
    /// Only paths with the same file name are resolved, so a differently
    /// named link to the ignore file is not recognized.
    #[must_use]
    pub fn is_source_file(&self, path: &Path) -> bool {
        let Some(source) = self.source_file.as_deref() else {
            return false;
        };
        if path.file_name() != source.file_name() {
            return false;
        }
        fs::canonicalize(path).is_ok_and(|resolved| resolved == source)
    }

    /// Appends a pattern at the end of the list.
    pub fn push(&mut self, raw: impl Into<String>) {
        self.patterns.push(IgnorePattern::new(raw));
    }

    /// Returns the patterns in file order.
    #[must_use]
    pub fn patterns(&self) -> &[IgnorePattern] {
        &self.patterns
    }

    /// Returns the number of patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns `true` if the list holds no patterns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns the first pattern matching the entry, if any.
    #[must_use]
    pub fn first_match(
        &self,
        path: &str,
        name: Option<&str>,
        is_dir: bool,
    ) -> Option<&IgnorePattern> {
        self.patterns
            .iter()
            .find(|pattern| pattern.matches(path, name, is_dir))
    }
}

/// Loads an ignore file and appends the file's own path as the last pattern.
///
/// A missing or unreadable file is an error; callers treat it as fatal.
///
/// # Examples
///
/// ```no_run
/// use zipproject_core::creation::ignore::load_ignore_list;
///
/// let list = load_ignore_list("project/.zipignore")?;
/// assert_eq!(
///     list.patterns().last().map(|p| p.as_str()),
///     Some("project/.zipignore")
/// );
/// # Ok::<(), zipproject_core::ZipProjectError>(())
/// ```
///
/// # Errors
///
/// Returns an error if the file cannot be opened, its location cannot be
/// resolved, or a read fails.
pub fn load_ignore_list<P: AsRef<Path>>(path: P) -> Result<IgnoreList> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut list = parse_ignore_list(BufReader::new(file), &path.to_string_lossy())?;
    list.source_file = Some(fs::canonicalize(path)?);
    log::debug!(
        "loaded {} ignore pattern(s) from {}",
        list.len(),
        path.display()
    );
    Ok(list)
}

/// Parses ignore patterns from any buffered reader.
///
/// `source` is appended as the final pattern. Lines end at `\n` with an
/// optional `\r` before it (also on a final unterminated line). Bytes that
/// are not valid UTF-8 are replaced with U+FFFD rather than rejected.
///
/// # Errors
///
/// Returns an error if reading fails.
pub fn parse_ignore_list<R: BufRead>(reader: R, source: &str) -> Result<IgnoreList> {
    let mut list = IgnoreList::default();

    for bytes in reader.split(b'\n') {
        let bytes = bytes?;
        let text = String::from_utf8_lossy(&bytes);
        let line = text.strip_suffix('\r').unwrap_or(&text);
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        log::trace!("ignore pattern: {line:?}");
        list.push(line);
    }

    list.push(source);
    Ok(list)
}

fn is_separator(c: char) -> bool {
    c == '/' || c == std::path::MAIN_SEPARATOR
}
