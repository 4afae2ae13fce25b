use crate::finder::config::DEFAULT_DESCRIPTION;
use crate::finder::util::read_first_line;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

/// 标题行: `#`，可选空白，随后至少一个非空白字符
static HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#\s*(\S.*)$").expect("header pattern is valid"));

/// 描述与关键字列表之间的分隔符
const KEYWORD_SEPARATOR: char = '|';
/// 关键字之间的分隔符
const KEYWORD_DELIMITER: char = ';';

/// 解析后的标题信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub description: String,
    pub keywords: Vec<String>,
    pub has_header: bool,
}

impl Header {
    fn fallback() -> Self {
        Header {
            description: DEFAULT_DESCRIPTION.to_string(),
            keywords: Vec::new(),
            has_header: false,
        }
    }
}

/// 从首行提取标记之后的文本
pub fn extract_info(line: Option<&str>) -> Option<String> {
    let line = line?;
    HEADER_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// 将 info 拆分为描述和关键字
///
/// 以第一个 `|` 为界；没有 `|` 时整行即为描述（不做 trim）。
pub fn parse_info(info: &str) -> (String, Vec<String>) {
    match info.split_once(KEYWORD_SEPARATOR) {
        Some((description, raw_keywords)) => {
            (description.trim().to_string(), split_keywords(raw_keywords))
        }
        None => (info.to_string(), Vec::new()),
    }
}

/// 按 `;` 切分关键字并去掉空白，丢弃空项
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(KEYWORD_DELIMITER)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// 读取并解析文件首行，任何读取失败都回退到默认描述
pub fn parse_header(path: &Path) -> Header {
    let line = match read_first_line(path) {
        Ok(line) => line,
        Err(e) => {
            debug!("无法读取 {}: {}", path.display(), e);
            None
        }
    };

    match extract_info(line.as_deref()) {
        Some(info) => {
            let (description, keywords) = parse_info(&info);
            Header {
                description,
                keywords,
                has_header: true,
            }
        }
        None => {
            debug!("{} 没有标题行，使用默认描述", path.display());
            Header::fallback()
        }
    }
}
