//! Notebook Context - Value Objects

use crate::domain::identity::entity_id;

entity_id! {
    /// 笔记本唯一标识
    NotebookId
}

/// 是否为 `#RRGGBB` 形式的十六进制颜色
pub fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert!(is_hex_color("#0078D4"));
        assert!(is_hex_color("#abcdef"));
        assert!(!is_hex_color("0078D4"));
        assert!(!is_hex_color("#0078D"));
        assert!(!is_hex_color("#GGGGGG"));
        assert!(!is_hex_color("#0078D4FF"));
    }

    #[test]
    fn test_id_roundtrip_through_string() {
        let id = NotebookId::new();
        let parsed: NotebookId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }
}
