use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobMatcher};
use walkdir::WalkDir;

/// Selects agent definition files by name.
#[derive(Clone, Debug)]
pub struct DocumentFilter {
    matcher: GlobMatcher,
    reserved: Vec<String>,
}

impl DocumentFilter {
    pub fn new(glob: &str, reserved: &[String]) -> anyhow::Result<Self> {
        let matcher = Glob::new(glob)
            .with_context(|| format!("compile document glob: {glob}"))?
            .compile_matcher();
        Ok(Self {
            matcher,
            reserved: reserved.to_vec(),
        })
    }

    pub fn accepts(&self, file_name: &str) -> bool {
        self.matcher.is_match(file_name) && !self.reserved.iter().any(|r| r == file_name)
    }
}

/// List the documents directly inside `dir` (no recursion), sorted by file name.
pub fn discover_documents(
    dir: &Utf8Path,
    filter: &DocumentFilter,
) -> anyhow::Result<Vec<Utf8PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("agents directory does not exist: {}", dir);
    }

    let mut out = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(dir = %dir, error = %err, "skipping unreadable directory entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            tracing::debug!(path = ?entry.path(), "skipping non UTF-8 file name");
            continue;
        };
        if !filter.accepts(name) {
            tracing::debug!(file = name, "skipping file outside the document filter");
            continue;
        }
        out.push(dir.join(name));
    }

    tracing::debug!(dir = %dir, count = out.len(), "discovered agent documents");
    Ok(out)
}
