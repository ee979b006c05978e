//! 内容规范化
//!
//! 从 Markdown 原文派生纯文本投影（content_plain），供全文检索使用。
//! 每次内容变化都整体重新生成，不做增量修补。

use once_cell::sync::Lazy;
use regex::Regex;

static FENCED_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```[\s\S]*?```").expect("valid fenced code regex"));
static INLINE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`[^`]*`").expect("valid inline code regex"));
static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[[^\]]*\]\([^)]+\)").expect("valid image regex"));
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("valid link regex"));
static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#+\s+").expect("valid heading regex"));
static EMPHASIS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[*_]{1,2}([^*_]+)[*_]{1,2}").expect("valid emphasis regex"));

/// 提取 Markdown 纯文本
///
/// 规则按顺序执行:
/// 1. 删除围栏代码块
/// 2. 删除行内代码
/// 3. 删除图片引用，链接只保留文字
/// 4. 删除行首标题标记
/// 5. 删除粗体/斜体标记，保留文字
/// 6. 去除首尾空白
pub fn extract_plain_text(markdown: &str) -> String {
    let text = FENCED_CODE_RE.replace_all(markdown, "");
    let text = INLINE_CODE_RE.replace_all(&text, "");
    // 图片必须先于链接处理，否则 `![alt](url)` 会被当作链接留下 `!alt`
    let text = IMAGE_RE.replace_all(&text, "");
    let text = LINK_RE.replace_all(&text, "$1");
    let text = HEADING_RE.replace_all(&text, "");
    let text = EMPHASIS_RE.replace_all(&text, "$1");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_markdown() {
        let markdown = "# Title\n\nSome **bold** and `code` and [link](url)";
        assert_eq!(extract_plain_text(markdown), "Title\n\nSome bold and  and link");
    }

    #[test]
    fn test_fenced_code_block_removed() {
        let markdown = "before\n```rust\nfn main() {}\n```\nafter";
        assert_eq!(extract_plain_text(markdown), "before\n\nafter");
    }

    #[test]
    fn test_image_removed_entirely() {
        let markdown = "see ![diagram](img.png) here";
        assert_eq!(extract_plain_text(markdown), "see  here");
    }

    #[test]
    fn test_headings_on_every_line() {
        let markdown = "## One\ntext\n### Two";
        assert_eq!(extract_plain_text(markdown), "One\ntext\nTwo");
    }

    #[test]
    fn test_italic_and_underscore_emphasis() {
        assert_eq!(extract_plain_text("*a* and __b__"), "a and b");
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(extract_plain_text(""), "");
        assert_eq!(extract_plain_text("   \n  "), "");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(extract_plain_text("just words"), "just words");
    }
}
