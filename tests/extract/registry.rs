use anyhow::Result;
use locext::{Language, PatternRegistry, StringExtractor, extractor_for, load_registry};
use pretty_assertions::assert_eq;

use crate::ExtractTest;

const REGISTRY: &str = r#"{
    "swift": {
        "code_patterns": [
            { "name": "text_component", "pattern": "Text\\(\"([^\"]*)\"\\)" },
            { "name": "string_literal", "pattern": "\"([^\"]*)\"" }
        ],
        "filtering_patterns": ["^Internal"],
        "keywords_to_ignore": ["Beta"]
    }
}"#;

#[test]
fn test_custom_registry_from_file() -> Result<()> {
    let test = ExtractTest::with_file("patterns.json", REGISTRY)?;
    test.write_file(
        "Banner.swift",
        r#"
        let a = "Internal build only"
        let b = "Beta"
        let c = "Release notes"
        Text("Welcome")
        "#,
    )?;

    let registry = load_registry(&test.root().join("patterns.json"))?;
    let strings = test.extract_with("Banner.swift", &registry)?;

    // The catch-all literal rule also sees the Text argument, so it appears twice.
    assert_eq!(strings, vec!["Release notes", "Welcome", "Welcome"]);

    Ok(())
}

#[test]
fn test_registry_without_swift_entry() -> Result<()> {
    let registry = PatternRegistry::from_json(r#"{ "kotlin": {} }"#)?;

    assert!(extractor_for(Language::Swift, &registry).is_err());

    Ok(())
}

#[test]
fn test_invalid_registry_file_names_path() -> Result<()> {
    let test = ExtractTest::with_file(
        "broken.json",
        r#"{ "swift": { "filtering_patterns": ["(unclosed"] } }"#,
    )?;

    let err = load_registry(&test.root().join("broken.json")).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("broken.json"));
    assert!(message.contains("filtering_patterns"));

    Ok(())
}

#[test]
fn test_missing_source_file() -> Result<()> {
    let test = ExtractTest::new()?;

    let err = test.extract("Missing.swift").unwrap_err();
    assert!(err.to_string().contains("Missing.swift"));

    Ok(())
}

#[test]
fn test_language_lookup_by_name() -> Result<()> {
    let language: Language = "swift".parse()?;
    let extractor = extractor_for(language, &PatternRegistry::builtin())?;

    assert_eq!(extractor.language().as_str(), "swift");

    Ok(())
}

#[test]
fn test_write_file_reports_blocked_directory() -> Result<()> {
    let test = ExtractTest::with_file("Sources", "not a directory")?;

    let err = test.write_file("Sources/View.swift", "").unwrap_err();
    assert!(err.to_string().starts_with("Failed to create directory: "));

    Ok(())
}
