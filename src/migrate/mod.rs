//! Migration of ad-hoc Markdown logs into a dated collection directory
//!
//! Walks the source directories for Markdown files, infers a date and a
//! title per file, injects a front matter block when missing, renames
//! undated files to a date-prefixed slug, and writes the result into
//! the target directory. Copy is the default; move writes the
//! destination first and removes the source afterwards, so a partial
//! failure can duplicate a file but never lose one.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

use crate::core::constants::formatting;
use crate::core::error::Result;

/// Date token embedded in a filename, e.g. `2025-07-30`, `2025_07_30`
static DATE_IN_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(20[0-9]{2})[-_/.]([0-9]{2})[-_/.]([0-9]{2})")
        .expect("Failed to compile date-in-name pattern")
});

/// First top-level Markdown heading
static H1_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*#\s+(.+?)\s*$").expect("Failed to compile heading pattern")
});

/// Options of one migration run.
#[derive(Debug, Clone)]
pub struct MigrateOptions {
    /// Source directories walked recursively for Markdown files
    pub sources: Vec<PathBuf>,
    /// Target collection directory
    pub target: PathBuf,
    /// Move instead of copy
    pub move_files: bool,
    /// Report planned actions without touching the filesystem
    pub dry_run: bool,
    /// File names to skip (README.md and index.md are always skipped)
    pub excludes: FxHashSet<String>,
    /// Fallback date for filenames without an embedded date token
    pub fallback_date: NaiveDate,
}

/// One planned or executed migration of a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationAction {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub moved: bool,
    pub title: String,
    pub date: NaiveDate,
}

/// Outcome of a migration run.
#[derive(Debug, Clone, Default)]
pub struct MigrateSummary {
    pub actions: Vec<MigrationAction>,
    pub skipped: usize,
    pub dry_run: bool,
}

impl MigrateSummary {
    pub fn migrated(&self) -> usize {
        self.actions.len()
    }
}

#[derive(Default, Debug)]
pub struct Migrator {}

impl Migrator {
    /// Run one migration pass over the configured sources.
    ///
    /// A missing source directory is reported and skipped; unreadable
    /// individual files are skipped with a warning.
    pub fn run(&self, opts: &MigrateOptions) -> Result<MigrateSummary> {
        let mut summary = MigrateSummary {
            dry_run: opts.dry_run,
            ..Default::default()
        };

        if !opts.dry_run {
            fs::create_dir_all(&opts.target)?;
        }

        let target_name = opts
            .target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        for source in &opts.sources {
            if !source.is_dir() {
                warn!("Source not found: {}", source.display());
                continue;
            }

            for path in walk_markdown_files(source)? {
                if self.should_skip(&path, &target_name, &opts.excludes) {
                    summary.skipped += 1;
                    continue;
                }

                let content = match fs::read_to_string(&path) {
                    Ok(content) => content,
                    Err(e) => {
                        warn!("Read error: {} ({e})", path.display());
                        summary.skipped += 1;
                        continue;
                    }
                };

                let action = self.migrate_one(&path, &content, opts)?;
                summary.actions.push(action);
            }
        }

        Ok(summary)
    }

    fn should_skip(&self, path: &Path, target_name: &str, excludes: &FxHashSet<String>) -> bool {
        // Never re-migrate files already under the target directory
        if !target_name.is_empty()
            && path
                .components()
                .any(|c| c.as_os_str().to_string_lossy() == target_name)
        {
            return true;
        }

        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            return true;
        };
        file_name == "README.md" || file_name == "index.md" || excludes.contains(file_name)
    }

    fn migrate_one(
        &self,
        path: &Path,
        content: &str,
        opts: &MigrateOptions,
    ) -> Result<MigrationAction> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let date = infer_date_from_name(&file_name).unwrap_or(opts.fallback_date);
        let title = infer_title(content, &file_name);
        let new_content = ensure_front_matter(content, &title, date);

        // Keep the original name when it already embeds a date
        let out_name = if DATE_IN_NAME.is_match(&file_name) {
            file_name.clone()
        } else {
            format!("{}-{}.md", date.format("%Y-%m-%d"), slugify_stem(&file_name))
        };
        let dest = next_available(opts.target.join(out_name));

        if !opts.dry_run {
            safe_write(&dest, &new_content)?;
            if opts.move_files {
                if let Err(e) = fs::remove_file(path) {
                    // Destination is already written; duplication beats loss
                    warn!("Could not remove source {}: {e}", path.display());
                }
            }
            debug!("Migrated {} -> {}", path.display(), dest.display());
        }

        Ok(MigrationAction {
            source: path.to_path_buf(),
            dest,
            moved: opts.move_files,
            title,
            date,
        })
    }
}

/// Recursively collect Markdown files under a directory, sorted for
/// deterministic processing order.
fn walk_markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in ignore::WalkBuilder::new(dir).hidden(false).build() {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("md") {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

/// First embedded `20YY-MM-DD`-like token of a filename, calendar
/// validated. Impossible dates are treated as no date at all.
pub fn infer_date_from_name(name: &str) -> Option<NaiveDate> {
    let caps = DATE_IN_NAME.captures(name)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// First `# ` heading of the content, else the filename without `.md`.
pub fn infer_title(content: &str, file_name: &str) -> String {
    if let Some(caps) = H1_TITLE.captures(content) {
        return caps[1].trim().to_string();
    }
    file_name.strip_suffix(".md").unwrap_or(file_name).to_string()
}

/// Whether the text already begins with a front matter fence.
pub fn has_front_matter(text: &str) -> bool {
    text.trim_start().starts_with(formatting::FRONT_MATTER_FENCE)
}

/// Prepend a `title`/`date` front matter block unless one exists.
pub fn ensure_front_matter(text: &str, title: &str, date: NaiveDate) -> String {
    if has_front_matter(text) {
        return text.to_string();
    }
    format!(
        "{fence}\ntitle: {title}\ndate: {date}\n{fence}\n\n{text}",
        fence = formatting::FRONT_MATTER_FENCE,
        date = date.format("%Y-%m-%d"),
    )
}

/// Filename stem with whitespace runs collapsed to single hyphens.
fn slugify_stem(file_name: &str) -> String {
    let stem = file_name.strip_suffix(".md").unwrap_or(file_name);
    let mut slug = String::with_capacity(stem.len());
    let mut in_whitespace = false;
    for c in stem.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
        } else {
            slug.push(c);
            in_whitespace = false;
        }
    }
    slug
}

/// Resolve a name collision by appending `-1`, `-2`, ... before the
/// extension until no file exists at the candidate path.
fn next_available(path: PathBuf) -> PathBuf {
    if !path.exists() {
        return path;
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let mut i = 1;
    loop {
        let candidate = path.with_file_name(format!("{stem}-{i}{extension}"));
        if !candidate.exists() {
            return candidate;
        }
        i += 1;
    }
}

fn safe_write(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
