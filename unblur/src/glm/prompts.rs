//! Prompt templates for recognition and refinement.
//!
//! Templates use `format!()` interpolation; missing variables fail at
//! compile time. The default recognition prompt instructs the model in
//! Simplified Chinese because that is the contract: output Simplified
//! Chinese, preserve embedded foreign-language text verbatim, keep the
//! original layout and reading order.

/// Default instruction for text recognition when the caller supplies none.
pub const DEFAULT_RECOGNITION_PROMPT: &str = "\
请仔细识别这张图片中的所有文字内容，特别注意以下要求：
1. 识别所有可见的文字，包括模糊、不清晰或部分遮挡的文字
2. 尽可能准确地还原文字的原始内容和含义
3. 保持原有的文本格式、段落结构和排版布局
4. 对于模糊或不确定的文字，请根据上下文进行合理推测
5. 使用简体中文输出结果
6. 如果图片中包含英文或其他语言，请保持原语言不变
7. 按照从上到下、从左到右的顺序输出文字内容

请直接输出识别到的文字内容，不需要添加额外的说明或解释。";

/// Select the recognition prompt: a non-empty caller override wins,
/// otherwise the fixed default.
pub fn recognition_prompt(custom: Option<&str>) -> &str {
    match custom {
        Some(prompt) if !prompt.trim().is_empty() => prompt,
        _ => DEFAULT_RECOGNITION_PROMPT,
    }
}

/// Build the single refinement prompt shared by every refinement path.
pub fn refinement_prompt(original_text: &str, instruction: &str) -> String {
    format!(
        "请根据以下指令对文字内容进行微调：

原始文字内容：
{original_text}

微调指令：
{instruction}

请直接输出微调后的文字内容，不要添加任何解释或说明。"
    )
}
