use crate::error::Result;
use crate::finder::util::read_card_body;
use crate::utils::Palette;
use log::info;
use std::io::Write;
use std::path::Path;
use std::process::Command;

/// 显示选中的帮助卡片
///
/// 配置了查看器命令时交给它打开文件，否则直接把内容写到 `out`。
pub fn show_card(
    path: &Path,
    topic: &str,
    viewer: Option<&str>,
    palette: &Palette,
    out: &mut dyn Write,
) -> Result<()> {
    if let Some(viewer) = viewer.filter(|v| !v.trim().is_empty()) {
        return run_viewer(viewer, path);
    }

    let body = read_card_body(path)?;
    if palette.enabled {
        writeln!(out, "{}", palette.banner(&format!("== {} ==", topic)))?;
    }
    out.write_all(body.as_bytes())?;
    if !body.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}

/// 查看器命令可以带参数，如 `less -R`
fn run_viewer(viewer: &str, path: &Path) -> Result<()> {
    let mut parts = viewer.split_whitespace();
    let program = parts.next().unwrap_or(viewer);
    info!("使用 {} 打开 {}", viewer, path.display());

    let status = Command::new(program).args(parts).arg(path).status()?;
    if !status.success() {
        info!("查看器退出状态: {}", status);
    }
    Ok(())
}
