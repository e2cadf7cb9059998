//! Directory walking and tokenization for the CLI demo. Not part of the
//! core index/query/scorer contract; kept deliberately thin.

use std::fs;
use std::path::Path;

use ignore::Walk;

/// Walks `root` (honoring `.gitignore` the way the rest of the corpus
/// does via the `ignore` crate), reads every regular UTF-8 file it finds,
/// and tokenizes it into lowercase alphanumeric words. Non-UTF-8 files are
/// skipped rather than treated as an error.
pub fn collect_documents(root: &Path) -> Vec<(String, Vec<String>)> {
    let mut documents = Vec::new();

    for entry in Walk::new(root).filter_map(Result::ok) {
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if !is_file {
            continue;
        }
        let path = entry.path();
        let Ok(content) = fs::read_to_string(path) else {
            continue;
        };
        let tokens = tokenize(&content);
        let relative = path.strip_prefix(root).unwrap_or(path);
        let doc_path = format!("/{}", relative.to_string_lossy().replace('\\', "/"));
        documents.push((doc_path, tokens));
    }

    documents
}

fn tokenize(content: &str) -> Vec<String> {
    content
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn collects_files_and_tokenizes_their_contents() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "Cat, dog. Cat!").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/b.txt"), "fish").unwrap();

        let mut docs = collect_documents(dir.path());
        docs.sort_by(|a, b| a.0.cmp(&b.0));

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].0, "/a.txt");
        assert_eq!(docs[0].1, vec!["cat", "dog", "cat"]);
        assert_eq!(docs[1].0, "/sub/b.txt");
        assert_eq!(docs[1].1, vec!["fish"]);
    }
}
