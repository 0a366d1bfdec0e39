use once_cell::sync::Lazy;
use regex::Regex;

/// Name used when a run carries no usable tool name.
pub const UNKNOWN_TOOL: &str = "unknown";

static UNSAFE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[<>:"/\\|?*\s]"#).expect("valid unsafe-char pattern"));
static HYPHEN_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").expect("valid hyphen pattern"));

/// Make a tool name safe to embed in a filename and an automation id.
///
/// Characters that are unsafe in filenames (path separators, `<>:"|?*`) and any
/// whitespace become `-`, consecutive hyphens collapse to one, and leading or
/// trailing hyphens are trimmed. An empty result falls back to `"unknown"`.
pub fn sanitize_tool_name(name: &str) -> String {
    let replaced = UNSAFE_CHARS.replace_all(name, "-");
    let collapsed = HYPHEN_RUNS.replace_all(&replaced, "-");
    let trimmed = collapsed.trim_matches('-');
    if trimmed.is_empty() {
        UNKNOWN_TOOL.to_string()
    } else {
        trimmed.to_string()
    }
}
