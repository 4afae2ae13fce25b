use crate::finder::config::{HelpCard, IndexTable};
use log::info;

/// 关键字是否与搜索词完全相等（忽略大小写和首尾空白）
fn card_has_keyword(card: &HelpCard, term: &str) -> bool {
    card.keywords
        .iter()
        .any(|keyword| keyword.trim().to_lowercase() == term)
}

/// 按关键字精确过滤索引表，保持原有顺序
pub fn filter_by_keyword(table: &IndexTable, term: &str) -> IndexTable {
    let term = term.trim().to_lowercase();
    let filtered: IndexTable = table
        .iter()
        .filter(|card| card_has_keyword(card, &term))
        .cloned()
        .collect();

    info!(
        "关键字 '{}' 匹配 {} / {} 个帮助卡片",
        term,
        filtered.len(),
        table.len()
    );
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn card(topic: &str, keywords: &[&str]) -> HelpCard {
        HelpCard {
            topic: topic.to_string(),
            description: format!("{} card", topic),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            path: PathBuf::from(format!("/cards/h.{}", topic)),
            has_header: true,
        }
    }

    #[test]
    fn keeps_only_cards_with_an_exact_keyword() {
        let table = IndexTable::new(vec![
            card("wifi", &["wifi", "network"]),
            card("bt", &["bluetooth"]),
        ]);

        let result = filter_by_keyword(&table, "wifi");
        assert_eq!(result.len(), 1);
        assert_eq!(result.cards()[0].topic, "wifi");
    }

    #[test]
    fn match_is_case_insensitive_and_trimmed() {
        let table = IndexTable::new(vec![card("wifi", &["WiFi"])]);
        assert_eq!(filter_by_keyword(&table, "  wIFI ").len(), 1);
    }

    #[test]
    fn substring_matches_are_excluded() {
        let table = IndexTable::new(vec![
            card("adapter", &["wifi-adapter"]),
            card("short", &["wi"]),
        ]);
        assert!(filter_by_keyword(&table, "wifi").is_empty());
    }

    #[test]
    fn description_and_topic_are_not_consulted() {
        let table = IndexTable::new(vec![card("wifi", &["radio"])]);
        assert!(filter_by_keyword(&table, "wifi").is_empty());
    }

    #[test]
    fn relative_order_is_preserved() {
        let table = IndexTable::new(vec![
            card("c", &["net"]),
            card("a", &["other"]),
            card("b", &["NET"]),
        ]);

        let result = filter_by_keyword(&table, "net");
        let topics: Vec<_> = result.iter().map(|c| c.topic.as_str()).collect();
        assert_eq!(topics, vec!["c", "b"]);
    }
}
