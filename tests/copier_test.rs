use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tron::copier::{CopyReport, TreeCopier};
use tron::error::Error;
use tron::policy::FailurePolicy;
use tron::rewriter::TokenRewriter;
use tron::walk::file_set;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test_log::test]
fn test_copy_rewrites_names_and_keeps_content() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    write(source.path(), "$appname/index.html.tmpl", "<html></html>");
    write(source.path(), "$appname/styles.css", "body {}");
    write(source.path(), "$appname/js/$appname.js", "run();");
    write(source.path(), "notes.tmpl", "keep me");

    let report =
        TreeCopier::default().copy_tree(source.path(), target.path(), "demo", true).unwrap();

    assert_eq!(report, CopyReport { files: 4, directories: 2 });
    assert_eq!(
        file_set(target.path()).unwrap(),
        vec![
            Path::new("demo/index.html").to_path_buf(),
            Path::new("demo/js/demo.js").to_path_buf(),
            Path::new("demo/styles.css").to_path_buf(),
            Path::new("notes.tmpl").to_path_buf(),
        ]
    );
    assert_eq!(fs::read_to_string(target.path().join("demo/index.html")).unwrap(), "<html></html>");
    assert_eq!(fs::read_to_string(target.path().join("notes.tmpl")).unwrap(), "keep me");
    assert!(!target.path().join("$appname").exists());
}

#[test]
fn test_copy_leaves_source_untouched() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    write(source.path(), "$appname/index.html.tmpl", "<html></html>");
    let before = file_set(source.path()).unwrap();

    TreeCopier::default().copy_tree(source.path(), target.path(), "demo", true).unwrap();

    assert_eq!(file_set(source.path()).unwrap(), before);
}

#[test]
fn test_self_copy_is_noop() {
    let root = TempDir::new().unwrap();
    write(root.path(), "$appname/index.html.tmpl", "<html></html>");
    let before = file_set(root.path()).unwrap();

    let report = TreeCopier::default().copy_tree(root.path(), root.path(), "demo", true).unwrap();

    assert_eq!(report, CopyReport::default());
    assert_eq!(file_set(root.path()).unwrap(), before);
}

#[test]
fn test_non_recursive_copies_top_level_files_only() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    write(source.path(), "$appname.txt.tmpl", "top");
    write(source.path(), "$appname/inner.txt", "inner");

    TreeCopier::default().copy_tree(source.path(), target.path(), "demo", false).unwrap();

    assert_eq!(file_set(target.path()).unwrap(), vec![Path::new("demo.txt").to_path_buf()]);
}

#[test]
fn test_copy_overwrites_existing_files() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    write(source.path(), "$appname/styles.css", "new");
    write(target.path(), "demo/styles.css", "old");

    TreeCopier::default().copy_tree(source.path(), target.path(), "demo", true).unwrap();

    assert_eq!(fs::read_to_string(target.path().join("demo/styles.css")).unwrap(), "new");
}

#[test]
fn test_copy_creates_missing_target() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    write(source.path(), "$appname/a.txt", "a");
    let nested = target.path().join("deep/er");

    TreeCopier::default().copy_tree(source.path(), &nested, "demo", true).unwrap();

    assert!(nested.join("demo/a.txt").is_file());
}

#[test]
fn test_missing_source_is_fatal_when_strict() {
    let temp_dir = TempDir::new().unwrap();
    let result = TreeCopier::default().copy_tree(
        temp_dir.path().join("missing"),
        temp_dir.path().join("out"),
        "demo",
        true,
    );

    assert!(matches!(result, Err(Error::SourceMissing { .. })));
}

#[test_log::test]
fn test_missing_source_is_reported_when_lenient() {
    let temp_dir = TempDir::new().unwrap();
    let copier = TreeCopier::new(TokenRewriter::default(), FailurePolicy::Lenient);
    let out = temp_dir.path().join("out");

    let report = copier.copy_tree(temp_dir.path().join("missing"), &out, "demo", true).unwrap();

    assert_eq!(report, CopyReport::default());
    assert!(out.is_dir());
    assert!(file_set(&out).unwrap().is_empty());
}
