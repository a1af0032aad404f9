use std::fs;
use std::path::Path;

use clap::{value_parser, Arg, ArgAction, Command};

use post_filter::{parse_posts_body, BoardSnapshot, PostBoard};

// 主函数
fn main() {
    // 设置命令行参数
    let matches = Command::new("文章看板预览")
        .version(env!("CARGO_PKG_VERSION"))
        .about("按分类筛选并分页预览 api/posts 响应")
        .arg(Arg::new("input")
            .short('i')
            .long("input")
            .value_name("POSTS_JSON")
            .help("保存的 api/posts 响应文件")
            .required(true))
        .arg(Arg::new("page")
            .short('p')
            .long("page")
            .value_name("PAGE")
            .help("页码（从 1 开始）")
            .value_parser(value_parser!(usize))
            .default_value("1"))
        .arg(Arg::new("filter")
            .short('f')
            .long("filter")
            .value_name("CATEGORY")
            .help("切换分类筛选，可重复使用")
            .action(ArgAction::Append))
        .arg(Arg::new("json")
            .long("json")
            .help("以 JSON 输出快照")
            .action(ArgAction::SetTrue))
        .get_matches();

    // 获取参数值
    let Some(input) = matches.get_one::<String>("input") else {
        eprintln!("错误: 缺少输入文件");
        std::process::exit(1);
    };
    let page = matches.get_one::<usize>("page").copied().unwrap_or(1);
    let filters: Vec<String> = matches
        .get_many::<String>("filter")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let as_json = matches.get_flag("json");

    match preview(Path::new(input), &filters, page, as_json) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("错误: {}", e);
            std::process::exit(1);
        }
    }
}

// 加载文件、应用筛选与页码，返回要输出的文本
fn preview(input: &Path, filters: &[String], page: usize, as_json: bool) -> Result<String, String> {
    let body = fs::read_to_string(input)
        .map_err(|e| format!("无法读取文件 '{}': {}", input.display(), e))?;
    let posts = parse_posts_body(&body).map_err(|e| e.to_string())?;

    let mut board = PostBoard::default();
    board.load_posts(posts);
    for name in filters {
        board.select_filter(name);
    }
    board.set_page(page.saturating_sub(1));

    let snapshot = board.snapshot();
    if as_json {
        serde_json::to_string_pretty(&snapshot).map_err(|e| format!("序列化快照失败: {}", e))
    } else {
        Ok(render(&snapshot))
    }
}

// 以纯文本渲染看板
fn render(snapshot: &BoardSnapshot) -> String {
    let mut out = String::from("Posts\n\n");

    if !snapshot.categories.is_empty() {
        let chips: Vec<String> = snapshot
            .categories
            .iter()
            .map(|option| {
                if option.selected {
                    format!("[x] {}", option.name)
                } else {
                    format!("[ ] {}", option.name)
                }
            })
            .collect();
        out.push_str(&format!("Filters: {}\n\n", chips.join("  ")));
    }

    if snapshot.loading {
        out.push_str("Loading...\n");
    } else {
        let title_width = snapshot
            .posts
            .iter()
            .map(|row| format!("{} - {}", row.position, row.title).chars().count())
            .max()
            .unwrap_or(0)
            .max("Title".len());
        let author_width = snapshot
            .posts
            .iter()
            .map(|row| row.author.chars().count())
            .max()
            .unwrap_or(0)
            .max("Author".len());

        out.push_str(&format!(
            "{:<tw$}  {:<aw$}  {:>14}\n",
            "Title",
            "Author",
            "Date Published",
            tw = title_width,
            aw = author_width
        ));
        for row in &snapshot.posts {
            out.push_str(&format!(
                "{:<tw$}  {:<aw$}  {:>14}\n",
                format!("{} - {}", row.position, row.title),
                row.author,
                row.display_date,
                tw = title_width,
                aw = author_width
            ));
        }
    }

    let previous = if snapshot.can_go_previous { "<" } else { "-" };
    let next = if snapshot.can_go_next { ">" } else { "-" };
    out.push_str(&format!("\n{} {} {}", previous, snapshot.pagination.label(), next));

    out
}
