use crate::error::{FinderError, Result};
use crate::finder::config::{FinderConfig, HelpCard, IndexTable};
use crate::finder::header::parse_header;
use crate::utils::progress::ProgressManager;
use log::{debug, info, warn};
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// 判断是否应该跳过此目录（在遍历前检查），只跳过用户指定的排除目录
fn should_skip_dir(entry: &DirEntry, config: &FinderConfig) -> bool {
    // 根目录本身从不跳过
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }

    let name = entry.file_name();
    config.exclude_dirs.iter().any(|d| name == d.as_str())
}

/// 文件名匹配前缀时返回主题，非 UTF-8 文件名按有损方式转换
pub fn topic_for(path: &Path, prefix: &str) -> Option<String> {
    let file_name = path.file_name()?.to_string_lossy();
    let topic = file_name.strip_prefix(prefix)?;
    if topic.is_empty() {
        None
    } else {
        Some(topic.to_string())
    }
}

/// 遍历根目录并构建索引表，同时更新进度指示器
pub fn build_index(config: &FinderConfig, progress: &ProgressManager) -> Result<IndexTable> {
    let root = &config.root;
    if !root.is_dir() {
        return Err(FinderError::RootMissing(root.clone()));
    }

    info!("开始索引帮助卡片: {}", root.display());
    progress.start("indexing help cards");

    let walker = WalkDir::new(root)
        .follow_links(config.follow_links)
        .max_depth(config.max_depth.unwrap_or(usize::MAX))
        .into_iter()
        .filter_entry(|e| !should_skip_dir(e, config)); // 在遍历之前筛选目录

    let mut cards = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("跳过无法访问的条目: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Some(topic) = topic_for(path, &config.prefix) else {
            continue;
        };

        progress.increment();
        let header = parse_header(path);
        debug!("索引 {} -> {}", path.display(), topic);

        cards.push(HelpCard {
            topic,
            description: header.description,
            keywords: header.keywords,
            path: path.to_path_buf(),
            has_header: header.has_header,
        });
    }

    let mut table = IndexTable::new(cards);
    table.sort();
    info!(
        "索引完成，共 {} 个帮助卡片（处理 {} 个）",
        table.len(),
        progress.get_current()
    );
    Ok(table)
}
