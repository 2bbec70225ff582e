use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Context;
use clap::Parser;
use timeline_core::markup::standalone_page;
use timeline_core::{style, MemoryHead, MemoryTarget, NoopSink, TimelineLayout, TimelineRenderer};
use timeline_payload::parse_payload_str;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "timeline-cli",
    about = "Xuất trang HTML tĩnh của timeline từ payload JSON."
)]
struct Args {
    /// Đường dẫn tới file JSON payload `{ events, options }`.
    #[arg(short, long)]
    input: PathBuf,

    /// Ghi trang HTML ra file thay vì stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Id của container bọc timeline.
    #[arg(long, default_value = "timeline")]
    container_id: String,

    /// Chỉ in thống kê bố cục.
    #[arg(long)]
    summary: bool,

    /// Tăng mức log (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let data = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Không đọc được file {:?}", args.input))?;
    let payload = parse_payload_str(&data)
        .with_context(|| format!("Payload không hợp lệ trong {:?}", args.input))?;
    let config = payload.config();

    if args.summary {
        let layout = TimelineLayout::build(&payload.events, &config);
        println!(
            "Events: {}\nLeading separators: {}\nTrailing separators: {}\nInteractive: {}",
            layout.len(),
            layout.leading_separators(),
            layout.trailing_separators(),
            layout.interactive
        );
        return Ok(());
    }

    let mut head = MemoryHead::new();
    let styles = style::register(&mut head)?;
    let renderer = TimelineRenderer::new(config, Rc::new(NoopSink), styles);
    let mut target = MemoryTarget::new(args.container_id.clone());
    renderer.render(&mut target, &payload.events)?;

    let page = standalone_page("Timeline", &args.container_id, &head, &target.to_html());
    match &args.output {
        Some(path) => {
            std::fs::write(path, page).with_context(|| format!("Không ghi được file {path:?}"))?;
            tracing::info!(path = ?path, events = payload.events.len(), "đã xuất timeline");
        }
        None => print!("{page}"),
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
