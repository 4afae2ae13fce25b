/// 终端配色，显式传给输出函数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub enabled: bool,
}

const TOPIC: &str = "\x1b[32m";
const BANNER: &str = "\x1b[1;36m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Palette { enabled }
    }

    pub fn plain() -> Self {
        Palette { enabled: false }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", code, text, RESET)
        } else {
            text.to_string()
        }
    }

    pub fn topic(&self, text: &str) -> String {
        self.paint(TOPIC, text)
    }

    pub fn banner(&self, text: &str) -> String {
        self.paint(BANNER, text)
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_palette_leaves_text_alone() {
        let palette = Palette::plain();
        assert_eq!(palette.topic("wifi"), "wifi");
        assert_eq!(palette.banner("== wifi =="), "== wifi ==");
    }

    #[test]
    fn enabled_palette_wraps_in_escape_codes() {
        let palette = Palette::new(true);
        assert_eq!(palette.topic("wifi"), "\x1b[32mwifi\x1b[0m");
        assert_eq!(palette.dim("x"), "\x1b[2mx\x1b[0m");
    }
}
