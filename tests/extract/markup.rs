use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::ExtractTest;

const STORYBOARD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<document type="com.apple.InterfaceBuilder3.CocoaTouch.Storyboard.XIB" version="3.0">
    <scene sceneID="tne-QT-ifu">
        <label text="Hello from the storyboard" id="abc-12"/>
        <button title="Continue" id="btn-1"/>
        <textField placeholder="Your name" id="tf-1"/>
        <label text="1" id="lbl-2"/>
        <button title="cornerRadius" id="btn-2"/>
        <label text="icon.png" id="lbl-3"/>
    </scene>
</document>
"#;

#[test]
fn test_storyboard() -> Result<()> {
    let test = ExtractTest::with_file("Base.lproj/Main.storyboard", STORYBOARD)?;

    let strings = test.extract("Base.lproj/Main.storyboard")?;

    assert_snapshot!(strings.join("\n"), @r"
    Hello from the storyboard
    Continue
    Your name
    ");

    Ok(())
}

#[test]
fn test_xib_uses_markup_rules() -> Result<()> {
    let test = ExtractTest::with_file(
        "Views/Cell.xib",
        r#"<label text="Tap to retry" id="a"/> Text("Not a SwiftUI file")"#,
    )?;

    assert_eq!(test.extract("Views/Cell.xib")?, vec!["Tap to retry"]);

    Ok(())
}

#[test]
fn test_markup_rules_do_not_apply_to_swift_files() -> Result<()> {
    let test = ExtractTest::with_file("Fake.swift", STORYBOARD)?;

    assert!(test.extract("Fake.swift")?.is_empty());

    Ok(())
}
