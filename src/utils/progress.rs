use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// 索引进度指示器，输出到 stderr，非终端时自动隐藏
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// 创建新的进度指示器
    pub fn new(visible: bool) -> Self {
        let bar = ProgressBar::new_spinner();
        if visible {
            bar.set_draw_target(ProgressDrawTarget::stderr());
        } else {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg} ({pos} files)") {
            bar.set_style(style.tick_strings(&["◐", "◓", "◑", "◒", "◉"]));
        }
        ProgressManager { bar }
    }

    /// 启动进度指示器
    pub fn start(&self, message: &str) {
        self.bar.set_message(message.to_string());
        self.bar.tick();
    }

    /// 增加进度
    pub fn increment(&self) {
        self.bar.inc(1);
    }

    /// 获取当前进度
    pub fn get_current(&self) -> u64 {
        self.bar.position()
    }
}

impl Drop for ProgressManager {
    fn drop(&mut self) {
        // 后续输出之前清除进度行
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_progress_still_counts() {
        let progress = ProgressManager::new(false);
        progress.start("indexing");
        progress.increment();
        progress.increment();
        assert_eq!(progress.get_current(), 2);
    }
}
