use std::path::PathBuf;

/// 帮助卡片文件名前缀
pub const CARD_PREFIX: &str = "h.";

/// 缺少标题行时使用的描述
pub const DEFAULT_DESCRIPTION: &str = "No description available";

/// 帮助卡片，每个匹配的文件对应一条
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpCard {
    pub topic: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub path: PathBuf,
    /// 首行是否为有效标题行
    pub has_header: bool,
}

impl HelpCard {
    /// 关键字显示形式: `a ; b ; c`
    pub fn keywords_display(&self) -> String {
        self.keywords.join(" ; ")
    }
}

/// 一次运行内的内存索引表
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexTable {
    cards: Vec<HelpCard>,
}

impl IndexTable {
    pub fn new(cards: Vec<HelpCard>) -> Self {
        IndexTable { cards }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[HelpCard] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HelpCard> {
        self.cards.iter()
    }

    /// 按主题排序，主题相同时按路径排序，保证输出稳定
    pub fn sort(&mut self) {
        self.cards
            .sort_by(|a, b| a.topic.cmp(&b.topic).then_with(|| a.path.cmp(&b.path)));
    }
}

impl FromIterator<HelpCard> for IndexTable {
    fn from_iter<I: IntoIterator<Item = HelpCard>>(iter: I) -> Self {
        IndexTable::new(iter.into_iter().collect())
    }
}

/// 索引配置结构体，用于配置遍历行为
#[derive(Debug, Clone)]
pub struct FinderConfig {
    pub root: PathBuf,
    pub prefix: String,
    pub max_depth: Option<usize>,
    pub follow_links: bool,
    pub exclude_dirs: Vec<String>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        FinderConfig {
            root: default_root(),
            prefix: CARD_PREFIX.to_string(),
            max_depth: None,
            follow_links: true,
            exclude_dirs: Vec::new(),
        }
    }
}

impl FinderConfig {
    /// 创建新的索引配置实例
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        FinderConfig {
            root: root.into(),
            ..Self::new()
        }
    }
}

/// 默认根目录: `$HOME/.help`
pub fn default_root() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".help")
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn sort_orders_by_topic_then_path() {
        let mut table = IndexTable::new(vec![
            card("wifi", "/b/h.wifi"),
            card("git", "/z/h.git"),
            card("wifi", "/a/h.wifi"),
        ]);
        table.sort();

        let paths: Vec<_> = table.iter().map(|c| c.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/z/h.git"),
                PathBuf::from("/a/h.wifi"),
                PathBuf::from("/b/h.wifi"),
            ]
        );
    }

    #[test]
    fn keywords_display_joins_with_spaced_semicolons() {
        let mut c = card("net", "/h.net");
        c.keywords = vec!["wifi".into(), "network".into(), "radio".into()];
        assert_eq!(c.keywords_display(), "wifi ; network ; radio");
    }
}
