use crate::error::{FinderError, Result};
use crate::picker::columns::{ColumnConfig, Field};
use log::{debug, info};
use std::io::{self, Write};
use std::process::{Command, Stdio};

/// 交互式选择器: 输入若干行，返回用户选中的一行，取消时返回 None
pub trait Selector {
    fn select(
        &self,
        rows: &[String],
        columns: &ColumnConfig,
        query: Option<&str>,
    ) -> Result<Option<String>>;
}

/// 调用外部 fzf 进程的选择器
pub struct FzfSelector {
    program: String,
}

impl FzfSelector {
    pub fn new(program: impl Into<String>) -> Self {
        FzfSelector {
            program: program.into(),
        }
    }
}

fn join_positions(positions: &[usize]) -> String {
    positions
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// 构建 fzf 命令行参数
pub fn fzf_args(columns: &ColumnConfig, query: Option<&str>) -> Vec<String> {
    let with_nth: Vec<usize> = columns
        .rendered()
        .iter()
        .map(|field| field.index() + 1)
        .collect();
    let path_column = Field::Path.index() + 1;

    let mut args = vec![
        "--delimiter=\t".to_string(),
        format!("--with-nth={}", join_positions(&with_nth)),
        format!("--nth={}", join_positions(&columns.search_positions())),
        "--layout=reverse".to_string(),
        "--height=80%".to_string(),
        "--prompt=help> ".to_string(),
        "--header=topic | description (Enter: show, Esc: cancel)".to_string(),
        format!("--preview=cat {{{}}}", path_column),
        "--preview-window=right:60%:wrap".to_string(),
    ];

    if let Some(query) = query {
        args.push(format!("--query={}", query));
    }

    args
}

/// 解释 fzf 退出状态: 1 表示无匹配，130 表示用户取消
pub fn interpret_exit(code: Option<i32>, stdout: &[u8]) -> Result<Option<String>> {
    match code {
        Some(0) => {
            let line = String::from_utf8_lossy(stdout);
            let line = line.lines().next().unwrap_or("").to_string();
            if line.is_empty() {
                Ok(None)
            } else {
                Ok(Some(line))
            }
        }
        Some(1) | Some(130) => Ok(None),
        Some(code) => Err(FinderError::Picker(format!("exited with status {}", code))),
        None => Err(FinderError::Picker("terminated by signal".to_string())),
    }
}

impl Selector for FzfSelector {
    fn select(
        &self,
        rows: &[String],
        columns: &ColumnConfig,
        query: Option<&str>,
    ) -> Result<Option<String>> {
        let args = fzf_args(columns, query);
        info!("启动选择器 {}，共 {} 行", self.program, rows.len());
        debug!("选择器参数: {:?}", args);

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => {
                    FinderError::Picker(format!("'{}' not found in PATH", self.program))
                }
                _ => FinderError::Picker(format!("failed launching '{}': {}", self.program, e)),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            let mut payload = rows.join("\n");
            payload.push('\n');
            match stdin.write_all(payload.as_bytes()) {
                // 用户可能在读完输入前就退出
                Err(e) if e.kind() != io::ErrorKind::BrokenPipe => {
                    return Err(FinderError::Picker(format!("failed writing rows: {}", e)));
                }
                _ => {}
            }
        }

        let output = child
            .wait_with_output()
            .map_err(|e| FinderError::Picker(format!("failed waiting for picker: {}", e)))?;

        interpret_exit(output.status.code(), &output.stdout)
    }
}
