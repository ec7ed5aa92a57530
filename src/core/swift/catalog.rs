//! Swift-specific data tables used by the filter chain.

use std::sync::LazyLock;

use regex::RegexSet;

/// Framework call shapes that mark a captured string as part of an API
/// expression rather than display text. Each entry is anchored and must match
/// the whole trimmed string.
pub const SYSTEM_STRING_PATTERNS: &[&str] = &[
    // SF Symbols and named images
    r"^Image\(systemName:.*\)$",
    r"^UIImage\(systemName:.*\)$",
    r"^SF[A-Za-z]*\(systemName:.*\)$",
    r"^systemName:.*$",
    r"^named:.*$",
    // Controls whose first literal is a control label
    r#"^TextField\(".*", text:.*\)$"#,
    r#"^SecureField\(".*", text:.*\)$"#,
    r#"^DatePicker\(".*", selection:.*\)$"#,
    r#"^Picker\(".*", selection:.*\)$"#,
    r#"^Toggle\(".*", isOn:.*\)$"#,
    r#"^Button\(".*"\).*$"#,
    r#"^NavigationLink\(".*",.*\)$"#,
    r#"^Menu\(".*"\).*$"#,
    r#"^TabItem\(".*", .*\)$"#,
    r"^ToolbarItem\(.*\)$",
    r#"^Label\(".*", .*\)$"#,
    // View modifiers
    r#"^\.navigationTitle\(".*"\)$"#,
    r#"^\.navigationBarTitle\(".*"\)$"#,
    r"^\.tabItem\(.*\)$",
    r#"^\.alert\(".*", isPresented:.*\)$"#,
    // Symbol, icon and localization wrappers
    r"^Symbol\(.*\)$",
    r"^Icon\(.*\)$",
    r"^NSLocalizedString\(.*\)$",
];

/// Layout, styling and event-handler names that are never display text.
pub const COMMON_PARAMETER_NAMES: &[&str] = &[
    "id",
    "alignment",
    "spacing",
    "padding",
    "offset",
    "opacity",
    "cornerRadius",
    "lineLimit",
    "width",
    "height",
    "leading",
    "trailing",
    "top",
    "bottom",
    "center",
    "font",
    "foregroundColor",
    "backgroundColor",
    "accentColor",
    "tint",
    "shadow",
    "border",
    "frame",
    "position",
    "scale",
    "rotation",
    "onAppear",
    "onDisappear",
    "onChange",
    "onTapGesture",
    "onLongPressGesture",
];

static SYSTEM_STRING_SET: LazyLock<RegexSet> =
    LazyLock::new(|| RegexSet::new(SYSTEM_STRING_PATTERNS).unwrap());

/// Checks whether the trimmed text is a whole framework call expression.
pub fn is_system_string(text: &str) -> bool {
    SYSTEM_STRING_SET.is_match(text.trim())
}

pub fn is_common_parameter_name(text: &str) -> bool {
    COMMON_PARAMETER_NAMES.contains(&text.trim())
}
