mod error;
mod finder;
mod picker;
mod utils;
mod viewer;

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command};
use error::{FinderError, Result};
use finder::config::default_root;
use finder::{build_index, filter_by_keyword, FinderConfig, IndexTable};
use log::info;
use picker::{encode_rows, resolve_selection, ColumnConfig, FzfSelector, Selector};
use std::ffi::OsString;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;
use utils::{init_logger, Palette, ProgressManager};

/// 根目录覆盖变量
const ENV_DIR: &str = "HELP_FINDER_DIR";
/// 查看器覆盖变量
const ENV_VIEWER: &str = "HELP_FINDER_VIEWER";
/// 选择器程序覆盖变量
const ENV_FZF: &str = "HELP_FINDER_FZF";

const AFTER_HELP: &str = r#"Help cards are files named h.<topic> below the help directory.
The first line describes the card:

    # <description> | <keyword> ; <keyword> ; ...

Environment:
  HELP_FINDER_DIR      help directory (default: ~/.help)
  HELP_FINDER_VIEWER   command used to open the selected card
  HELP_FINDER_FZF      picker program (default: fzf)
  NO_COLOR             disable coloured output

Examples:
  help-finder               pick a card interactively
  help-finder wifi          only cards with the keyword 'wifi'
  help-finder -l            list all topics
"#;

/// 一次运行的选项
#[derive(Debug, Clone)]
struct RunOptions {
    list_only: bool,
    filter_term: Option<String>,
    query: Option<String>,
    viewer: Option<String>,
    palette: Palette,
    show_progress: bool,
}

/// 命令行定义
fn build_cli() -> Command {
    Command::new("help-finder")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Fuzzy-find and show help cards")
        .after_help(AFTER_HELP)
        .arg(
            Arg::new("term")
                .help("Only show cards that have this keyword (exact, case-insensitive)")
                .value_name("TERM"),
        )
        .arg(
            Arg::new("dir")
                .short('d')
                .long("dir")
                .help("Help directory to index")
                .value_name("DIR")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .help("List 'topic - description' for every card and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("query")
                .short('q')
                .long("query")
                .help("Start the picker with this query")
                .value_name("QUERY"),
        )
        .arg(
            Arg::new("viewer")
                .long("viewer")
                .help("Command used to open the selected card")
                .value_name("CMD"),
        )
        .arg(
            Arg::new("depth")
                .long("depth")
                .help("Limit the directory depth to search")
                .value_name("DEPTH")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable coloured output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log progress to stderr (-vv for debug)")
                .action(ArgAction::Count),
        )
}

/// 命令行参数解析
fn parse_args<I, T>(args: I) -> std::result::Result<ArgMatches, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    build_cli().try_get_matches_from(args)
}

/// 创建索引配置: 命令行 > 环境变量 > 默认值
fn create_finder_config(
    matches: &ArgMatches,
    env: &dyn Fn(&str) -> Option<String>,
) -> FinderConfig {
    let root = match matches.get_one::<PathBuf>("dir") {
        Some(dir) => dir.clone(),
        None => env(ENV_DIR)
            .filter(|d| !d.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_root),
    };
    let mut config = FinderConfig::with_root(root);

    if let Some(depth) = matches.get_one::<usize>("depth") {
        config.max_depth = Some(*depth);
    }

    config
}

/// 创建运行选项
fn create_run_options(
    matches: &ArgMatches,
    env: &dyn Fn(&str) -> Option<String>,
    stdout_is_terminal: bool,
) -> RunOptions {
    let color =
        stdout_is_terminal && !matches.get_flag("no-color") && env("NO_COLOR").is_none();

    RunOptions {
        list_only: matches.get_flag("list"),
        filter_term: matches.get_one::<String>("term").cloned(),
        query: matches.get_one::<String>("query").cloned(),
        viewer: matches
            .get_one::<String>("viewer")
            .cloned()
            .or_else(|| env(ENV_VIEWER)),
        palette: Palette::new(color),
        show_progress: true,
    }
}

/// 打印 `topic - description` 列表，没有描述的卡片只打印主题
fn print_list(table: &IndexTable, palette: &Palette, out: &mut dyn Write) -> io::Result<()> {
    for card in table.iter() {
        if card.has_header && !card.description.is_empty() {
            writeln!(
                out,
                "{} - {}",
                palette.topic(&card.topic),
                palette.dim(&card.description)
            )?;
        } else {
            writeln!(out, "{}", palette.topic(&card.topic))?;
        }
    }
    Ok(())
}

/// 索引、过滤、选择并显示
fn run(
    config: &FinderConfig,
    options: &RunOptions,
    selector: &dyn Selector,
    out: &mut dyn Write,
) -> Result<()> {
    let table = {
        let progress = ProgressManager::new(options.show_progress);
        build_index(config, &progress)?
    };

    if table.is_empty() {
        return Err(FinderError::NoCards(config.root.clone()));
    }

    let table = match options.filter_term.as_deref() {
        Some(term) => {
            let filtered = filter_by_keyword(&table, term);
            if filtered.is_empty() {
                return Err(FinderError::NoMatches(term.to_string()));
            }
            filtered
        }
        None => table,
    };

    if options.list_only {
        print_list(&table, &options.palette, out)?;
        return Ok(());
    }

    let rows = encode_rows(&table);
    let columns = ColumnConfig::default();
    let Some(line) = selector.select(&rows, &columns, options.query.as_deref())? else {
        info!("未选择任何帮助卡片");
        return Ok(());
    };

    let Some(card) = resolve_selection(&table, &rows, &line) else {
        info!("无法解析选择结果: {:?}", line);
        return Ok(());
    };

    viewer::show_card(
        &card.path,
        &card.topic,
        options.viewer.as_deref(),
        &options.palette,
        out,
    )
}

/// clap 的帮助/版本输出视为成功，其余参数错误退出码为 1
fn clap_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn main() {
    let matches = match parse_args(std::env::args_os()) {
        Ok(matches) => matches,
        Err(e) => {
            let _ = e.print();
            process::exit(clap_exit_code(&e));
        }
    };

    if let Err(e) = init_logger(matches.get_count("verbose")) {
        eprintln!("failed to initialise logger: {}", e);
    }

    let env = |key: &str| std::env::var(key).ok();
    let config = create_finder_config(&matches, &env);
    let options = create_run_options(&matches, &env, io::stdout().is_terminal());
    let selector = FzfSelector::new(env(ENV_FZF).unwrap_or_else(|| "fzf".to_string()));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(&config, &options, &selector, &mut out) {
        eprintln!("help-finder: {}", e);
        process::exit(e.exit_code());
    }
}
