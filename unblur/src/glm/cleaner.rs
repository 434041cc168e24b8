//! Post-processing of raw model output.

const BOX_BEGIN: &str = "<|begin_of_box|>";
const BOX_END: &str = "<|end_of_box|>";

/// Strip GLM sentinel markers and blank-line padding from raw model output.
///
/// Removes the literal `<|begin_of_box|>` / `<|end_of_box|>` delimiters
/// (keeping the text between them), trims every line, drops lines that are
/// empty after trimming, and rejoins with single newlines. Idempotent.
pub fn clean_response_text(raw: &str) -> String {
    let without_markers = raw.replace(BOX_BEGIN, "").replace(BOX_END, "");

    without_markers
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
