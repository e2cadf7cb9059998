use std::fs;
use tempfile::TempDir;

use search_index::query::preprocess::preprocess;
use search_index::Index;

/// Writes a handful of files with overlapping keywords, mirroring the
/// fixture shape used for the boolean-query corpus tests elsewhere: three
/// "pairwise" files and one file containing everything.
fn create_test_files(dir: &std::path::Path) {
    fs::write(
        dir.join("file1.txt"),
        "this file contains keywordAlpha and keywordBeta",
    )
    .unwrap();
    fs::write(
        dir.join("file2.txt"),
        "this file contains keywordAlpha and keywordGamma",
    )
    .unwrap();
    fs::write(
        dir.join("file3.txt"),
        "this file contains keywordBeta and keywordGamma",
    )
    .unwrap();
    fs::write(
        dir.join("file4.txt"),
        "this file contains keywordAlpha keywordBeta and keywordGamma",
    )
    .unwrap();
}

fn paths(index: &Index, raw_query: &str) -> Vec<String> {
    let tokens = preprocess(raw_query);
    let mut results = index.query(&tokens).unwrap();
    results.sort_by(|a, b| a.path.cmp(&b.path));
    results.into_iter().map(|r| r.path).collect()
}

#[test]
fn or_query_matches_any_file_with_a_keyword() {
    let temp_dir = TempDir::new().unwrap();
    create_test_files(temp_dir.path());
    let index = Index::from_directory(temp_dir.path());

    let found = paths(&index, "keywordAlpha OR keywordBeta OR keywordGamma");
    assert_eq!(found, vec!["/file1.txt", "/file2.txt", "/file3.txt", "/file4.txt"]);
}

#[test]
fn andnot_excludes_matching_documents() {
    let temp_dir = TempDir::new().unwrap();
    create_test_files(temp_dir.path());
    let index = Index::from_directory(temp_dir.path());

    let found = paths(&index, "(keywordAlpha OR keywordBeta) ANDNOT keywordGamma");
    assert_eq!(found, vec!["/file1.txt"]);
}

#[test]
fn and_requires_both_terms_present() {
    let temp_dir = TempDir::new().unwrap();
    create_test_files(temp_dir.path());
    let index = Index::from_directory(temp_dir.path());

    let found = paths(&index, "keywordBeta AND keywordGamma");
    assert_eq!(found, vec!["/file3.txt", "/file4.txt"]);
}

#[test]
fn implicit_or_between_bare_words_matches_preprocessor_contract() {
    let temp_dir = TempDir::new().unwrap();
    create_test_files(temp_dir.path());
    let index = Index::from_directory(temp_dir.path());

    // No explicit operator: the preprocessor inserts OR between bare words.
    let found = paths(&index, "keywordAlpha keywordGamma");
    assert_eq!(found, vec!["/file1.txt", "/file2.txt", "/file3.txt", "/file4.txt"]);
}

#[test]
fn query_against_freshly_built_index_is_pure() {
    let temp_dir = TempDir::new().unwrap();
    create_test_files(temp_dir.path());
    let index = Index::from_directory(temp_dir.path());

    let tokens = preprocess("keywordAlpha AND keywordBeta");
    let first = index.query(&tokens).unwrap();
    let second = index.query(&tokens).unwrap();
    assert_eq!(first, second);
}

#[test]
fn unknown_word_returns_empty_results_without_error() {
    let temp_dir = TempDir::new().unwrap();
    create_test_files(temp_dir.path());
    let index = Index::from_directory(temp_dir.path());

    let found = paths(&index, "ghostword");
    assert!(found.is_empty());
}

#[test]
fn syntax_error_surfaces_as_an_error_not_a_panic() {
    let temp_dir = TempDir::new().unwrap();
    create_test_files(temp_dir.path());
    let index = Index::from_directory(temp_dir.path());

    let err = index.query(&["keywordAlpha".to_string(), "AND".to_string()]).unwrap_err();
    assert!(matches!(err, search_index::SearchError::Syntax { .. }));
}
