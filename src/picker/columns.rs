use crate::finder::config::{HelpCard, IndexTable};

/// 行内字段之间的分隔符
pub const FIELD_DELIMITER: char = '\t';

/// 每行固定的字段，顺序即列顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Topic,
    Description,
    Keywords,
    Path,
}

pub const ROW_FIELDS: [Field; 4] = [Field::Topic, Field::Description, Field::Keywords, Field::Path];

impl Field {
    /// 字段在行中的列号（从 0 开始）
    pub fn index(self) -> usize {
        match self {
            Field::Topic => 0,
            Field::Description => 1,
            Field::Keywords => 2,
            Field::Path => 3,
        }
    }

    fn value(self, card: &HelpCard) -> String {
        match self {
            Field::Topic => card.topic.clone(),
            Field::Description => card.description.clone(),
            Field::Keywords => card.keywords_display(),
            Field::Path => card.path.to_string_lossy().into_owned(),
        }
    }
}

/// 选择器列配置: 哪些字段显示，哪些字段参与模糊匹配，哪些只用于还原选择
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnConfig {
    /// 列表中优先显示的字段。实际渲染的字段是它的超集: fzf 只能匹配
    /// 显示出来的文本，`search` 中不在这里的字段会追加在后面，见 [`ColumnConfig::rendered`]。
    pub display: Vec<Field>,
    pub search: Vec<Field>,
    pub hidden: Vec<Field>,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        ColumnConfig {
            display: vec![Field::Topic, Field::Description],
            search: vec![Field::Topic, Field::Description, Field::Keywords],
            hidden: vec![Field::Path],
        }
    }
}

impl ColumnConfig {
    /// 选择器实际渲染的字段: 先显示字段，再追加仅用于搜索的字段
    ///
    /// 选择器只能匹配渲染出来的文本，所以搜索字段必须出现在这里。
    pub fn rendered(&self) -> Vec<Field> {
        let mut fields = self.display.clone();
        for field in &self.search {
            if !fields.contains(field) && !self.hidden.contains(field) {
                fields.push(*field);
            }
        }
        fields
    }

    /// 搜索字段在渲染结果中的位置（从 1 开始）
    pub fn search_positions(&self) -> Vec<usize> {
        let rendered = self.rendered();
        self.search
            .iter()
            .filter_map(|field| rendered.iter().position(|f| f == field))
            .map(|pos| pos + 1)
            .collect()
    }
}

/// 去掉会破坏行格式的字符
fn sanitize(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}

/// 将单个卡片编码为一行
pub fn encode_row(card: &HelpCard) -> String {
    ROW_FIELDS
        .iter()
        .map(|field| sanitize(&field.value(card)))
        .collect::<Vec<_>>()
        .join(&FIELD_DELIMITER.to_string())
}

/// 将索引表编码为选择器输入
pub fn encode_rows(table: &IndexTable) -> Vec<String> {
    table.iter().map(encode_row).collect()
}

/// 按行号还原选中的卡片
///
/// 选择器原样返回输入行，行中的路径经过 `sanitize` 后不一定是真实路径，
/// 所以用行的位置回到索引表取原始卡片。
pub fn resolve_selection<'a>(
    table: &'a IndexTable,
    rows: &[String],
    line: &str,
) -> Option<&'a HelpCard> {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.is_empty() {
        return None;
    }
    let index = rows.iter().position(|row| row == line)?;
    table.cards().get(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn wifi() -> HelpCard {
        HelpCard {
            topic: "wifi".to_string(),
            description: "Wi-Fi\ttools".to_string(),
            keywords: vec!["wifi".to_string(), "network".to_string()],
            path: PathBuf::from("/cards/h.wifi"),
            has_header: true,
        }
    }

    #[test]
    fn row_layout_is_topic_description_keywords_path() {
        assert_eq!(
            encode_row(&wifi()),
            "wifi\tWi-Fi tools\twifi ; network\t/cards/h.wifi"
        );
    }

    fn card(topic: &str, path: &str) -> HelpCard {
        HelpCard {
            topic: topic.to_string(),
            description: String::new(),
            keywords: Vec::new(),
            path: PathBuf::from(path),
            has_header: false,
        }
    }

    #[test]
    fn selection_resolves_to_original_card() {
        let table = IndexTable::new(vec![wifi(), card("git", "/cards/h.git")]);
        let rows = encode_rows(&table);

        let selected = resolve_selection(&table, &rows, &format!("{}\n", rows[1])).unwrap();
        assert_eq!(selected.path, PathBuf::from("/cards/h.git"));
    }

    #[test]
    fn tab_in_path_survives_selection() {
        let table = IndexTable::new(vec![card("a\tb", "/cards/h.a\tb")]);
        let rows = encode_rows(&table);
        assert_eq!(rows[0], "a b\t\t\t/cards/h.a b");

        let selected = resolve_selection(&table, &rows, &rows[0]).unwrap();
        assert_eq!(selected.path, PathBuf::from("/cards/h.a\tb"));
    }

    #[test]
    fn empty_or_unknown_selection_has_no_card() {
        let table = IndexTable::new(vec![wifi()]);
        let rows = encode_rows(&table);
        assert!(resolve_selection(&table, &rows, "").is_none());
        assert!(resolve_selection(&table, &rows, "wifi\tdesc").is_none());
    }

    #[test]
    fn default_policy_shows_topic_and_description_and_searches_keywords() {
        let columns = ColumnConfig::default();
        assert_eq!(
            columns.rendered(),
            vec![Field::Topic, Field::Description, Field::Keywords]
        );
        assert_eq!(columns.search_positions(), vec![1, 2, 3]);
        assert!(!columns.rendered().contains(&Field::Path));
    }

    #[test]
    fn topic_only_display_still_renders_searchable_fields() {
        let columns = ColumnConfig {
            display: vec![Field::Topic],
            search: vec![Field::Keywords, Field::Topic],
            hidden: vec![Field::Path],
        };
        assert_eq!(columns.rendered(), vec![Field::Topic, Field::Keywords]);
        assert_eq!(columns.search_positions(), vec![2, 1]);
    }
}
