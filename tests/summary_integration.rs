/*!
 * End-to-end test for the summary pipeline
 */

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use tempfile::tempdir;

use code2summarize::{run, Config, FilterConfig, ReadErrorPolicy, ReportFormat};

fn write_file(path: &Path, content: &str) {
    let mut file = File::create(path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
}

#[test]
fn test_full_project_summary() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();

    fs::create_dir_all(root.join("src").join("api")).unwrap();
    fs::create_dir(root.join("node_modules")).unwrap();
    fs::create_dir(root.join("docs")).unwrap();

    write_file(&root.join("src").join("main.ts"), "console.log('hi');\n");
    write_file(&root.join("src").join("api").join("client.ts"), "export {};\n");
    write_file(&root.join("src").join("Util.TS"), "// upper-cased extension\n");
    write_file(&root.join("node_modules").join("dep.ts"), "skipped\n");
    write_file(&root.join("docs").join("guide.md"), "skipped\n");
    write_file(&root.join("index.html"), "<html></html>\n");

    let config = Config {
        target_dir: root.to_path_buf(),
        filter: FilterConfig::new(
            vec!["node_modules".to_string()],
            vec![".ts".to_string(), ".html".to_string()],
        ),
        read_error_policy: ReadErrorPolicy::Abort,
        report: ReportFormat::ConsoleTable,
        clip: false,
    };

    let summary = run(config.clone()).unwrap();
    let document = fs::read_to_string(&summary.output_file).unwrap();

    // Tree section: lexicographic siblings, filtered connectors. The
    // empty "docs" directory still gets a line; its markdown file does
    // not.
    let root_name = fs::canonicalize(root)
        .unwrap()
        .file_name()
        .unwrap()
        .to_string_lossy()
        .into_owned();
    let expected_tree = format!(
        "# Project Structure\n\n\
         {root_name}\n\
         ├── docs\n\
         ├── index.html\n\
         └── src\n\
         \u{20}   ├── Util.TS\n\
         \u{20}   ├── api\n\
         \u{20}   │   └── client.ts\n\
         \u{20}   └── main.ts\n"
    );
    assert!(
        document.starts_with(&expected_tree),
        "tree section mismatch:\n{document}"
    );

    // Content section lists exactly the files shown in the tree, in
    // the same order, with lower-cased fence tags.
    let expected_paths = [
        "index.html",
        "src/Util.TS",
        "src/api/client.ts",
        "src/main.ts",
    ];
    let mut last_position = 0;
    for path in expected_paths {
        let header = format!("### Path: {path}\n");
        let position = document.find(&header).unwrap_or_else(|| {
            panic!("missing content block for {path}");
        });
        assert!(position > last_position, "blocks out of order at {path}");
        last_position = position;
    }
    assert_eq!(document.matches("## File: ").count(), expected_paths.len());
    assert!(document.contains("```ts\n// upper-cased extension\n\n```\n"));
    assert!(document.contains("### End of file: client.ts\n"));
    assert!(!document.contains("dep.ts"));
    assert!(!document.contains("guide.md"));

    assert_eq!(summary.statistics.files_processed, expected_paths.len());

    // A second run over the unchanged tree is byte-identical.
    let first_bytes = fs::read(&summary.output_file).unwrap();
    let second = run(config).unwrap();
    let second_bytes = fs::read(&second.output_file).unwrap();
    assert_eq!(first_bytes, second_bytes);
}
