use encoding_rs::{GB18030, GBK};
use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// 只读取文件首行（完整一行，不截断），文件为空时返回 None
pub fn read_first_line(path: &Path) -> io::Result<Option<String>> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut buffer = Vec::new();

    let bytes_read = reader.read_until(b'\n', &mut buffer)?;
    if bytes_read == 0 {
        return Ok(None);
    }

    // 去掉行尾换行符，兼容 CRLF
    while matches!(buffer.last(), Some(b'\n') | Some(b'\r')) {
        buffer.pop();
    }

    Ok(Some(decode_bytes(&buffer)))
}

/// 读取整个卡片内容
pub fn read_card_body(path: &Path) -> io::Result<String> {
    let buffer = fs::read(path)?;
    Ok(decode_bytes(&buffer))
}

/// 依次尝试 UTF-8、GBK、GB18030 解码，全部失败时按 UTF-8 有损解码
pub fn decode_bytes(buffer: &[u8]) -> String {
    if let Ok(content) = std::str::from_utf8(buffer) {
        return content.to_string();
    }

    let (cow, _, had_errors) = GBK.decode(buffer);
    if !had_errors {
        return cow.into_owned();
    }

    let (cow, _, had_errors) = GB18030.decode(buffer);
    if !had_errors {
        return cow.into_owned();
    }

    String::from_utf8_lossy(buffer).into_owned()
}
