use markdown_javadoc_engine::converting::find_blocks;
use markdown_javadoc_engine::{ConvertSettings, Converter, FileOutcome, convert_source};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

#[test]
fn fixture_members() {
    assert_fixture("members");
}

#[test]
fn fixture_code_blocks() {
    assert_fixture("code_blocks");
}

#[test]
fn fixture_partially_converted() {
    assert_fixture("partially_converted");
}

fn read_fixture(name: &str) -> String {
    fs::read_to_string(format!(
        "{}/tests/fixtures/{name}",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn assert_fixture(name: &str) {
    let input = read_fixture(&format!("{name}.java"));
    let expected = read_fixture(&format!("{name}.expected.java"));
    let settings = ConvertSettings::default();

    let converted = convert_source(&input, &settings)
        .into_content()
        .expect("fixture should contain legacy comments");
    assert_eq!(converted, expected);

    // Converting the output again must be a no-op
    assert!(!convert_source(&converted, &settings).is_changed());
}

/// Text outside the comment blocks survives byte for byte and in order
#[rstest]
#[case::members("members")]
#[case::code_blocks("code_blocks")]
#[case::partially_converted("partially_converted")]
fn text_outside_blocks_is_preserved(#[case] name: &str) {
    let input = read_fixture(&format!("{name}.java"));
    let converted = convert_source(&input, &ConvertSettings::default())
        .into_content()
        .unwrap();

    let mut gaps = Vec::new();
    let mut last = 0;
    for block in find_blocks(&input) {
        gaps.push(&input[last..block.start()]);
        last = block.end();
    }
    gaps.push(&input[last..]);

    assert!(converted.starts_with(gaps[0]));
    assert!(converted.ends_with(gaps[gaps.len() - 1]));
    let mut cursor = 0;
    for gap in gaps {
        let found = converted[cursor..]
            .find(gap)
            .unwrap_or_else(|| panic!("{gap:?} missing after byte {cursor}"));
        cursor += found + gap.len();
    }
}

#[test]
fn converts_a_source_tree() {
    let root = TempDir::new().unwrap();
    let pkg = root.path().join("src/demo");
    fs::create_dir_all(&pkg).unwrap();
    fs::write(pkg.join("Demo.java"), read_fixture("members.java")).unwrap();
    fs::write(pkg.join("Parser.java"), read_fixture("code_blocks.java")).unwrap();
    fs::write(pkg.join("Plain.java"), "class Plain {}\n").unwrap();
    fs::write(root.path().join("README.md"), "/** not java */\n").unwrap();

    let report = Converter::default().run(root.path()).unwrap();

    assert_eq!(report.updated(), 2);
    assert_eq!(report.skipped(), 1);
    assert_eq!(report.files().len(), 3);
    assert!(matches!(
        report.files()[0].outcome,
        FileOutcome::Updated { blocks: 3 }
    ));
    assert_eq!(
        fs::read_to_string(pkg.join("Demo.java")).unwrap(),
        read_fixture("members.expected.java")
    );
    assert_eq!(
        fs::read_to_string(pkg.join("Parser.java")).unwrap(),
        read_fixture("code_blocks.expected.java")
    );
    assert_eq!(
        fs::read_to_string(root.path().join("README.md")).unwrap(),
        "/** not java */\n"
    );

    let second = Converter::default().run(root.path()).unwrap();
    assert_eq!(second.updated(), 0);
}
