//! Discussion Forum View - route inspector entry point.
//!
//! Resolves a navigation location against the route table, derives the
//! layout for it, and prints the result as JSON. The rendering layer
//! consumes the same library API; this shell exists to exercise and inspect
//! it end to end.

use clap::Parser;
use dfv::model::AppError;
use dfv::routing::{discussions_path, RouteContext};
use dfv::state::{content_presence, derive_layout, LayoutInputs, LayoutState, ViewportClass};
use std::path::PathBuf;
use tracing::info;

/// Inspect view composition for a discussion-forum location.
#[derive(Parser, Debug)]
#[command(name = "dfv")]
#[command(version)]
#[command(about = "Resolve a forum route and derive its panel layout")]
pub struct Args {
    /// Navigation path, e.g. /course/course-v1:edX+DemoX+2025/topics/t1/posts/p1
    pub path: String,

    /// Query string of the location (embed flag lives here)
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Viewport width in pixels
    #[arg(short, long, default_value = "1280")]
    pub width: u16,

    /// Explicit sidebar toggle (applies while no content pane is shown)
    #[arg(long)]
    pub sidebar: bool,

    /// Treat the post editor as visible
    #[arg(long)]
    pub editor: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// JSON report printed for one location.
#[derive(Debug, serde::Serialize)]
struct Report {
    route: dfv::routing::RouteKey,
    course_id: String,
    post_id: Option<String>,
    topic_id: Option<String>,
    category: Option<String>,
    learner_username: Option<String>,
    page: Option<dfv::routing::PageKey>,
    embedded: bool,
    layout: LayoutState,
    back_target: Option<String>,
}

fn run(args: Args) -> Result<Report, AppError> {
    let config = dfv::config::merge_config(dfv::config::load_config_with_precedence(
        args.config.clone(),
    )?);
    dfv::logging::init(&config.log_file_path)?;
    info!(config = ?config, "configuration resolved");

    let ctx = RouteContext::from_location(&args.path, &args.query)?;
    let layout = derive_layout(&LayoutInputs {
        route: ctx.route,
        content_presence: content_presence(&ctx, args.editor),
        viewport: ViewportClass::from_width(args.width, config.desktop_breakpoint),
        embedded: ctx.enable_in_context_sidebar,
        provider: config.provider,
        discussion_enabled_in_context: config.enable_in_context,
        sidebar_toggle: args.sidebar,
    });
    // Back target only matters when a post is open; missing params on the
    // listing routes are expected there, not reportable.
    let back_target = ctx
        .post_id
        .is_some()
        .then(|| discussions_path(&ctx))
        .transpose()?;

    Ok(Report {
        route: ctx.route,
        course_id: ctx.course_id.to_string(),
        post_id: ctx.post_id.map(|id| id.to_string()),
        topic_id: ctx.topic_id.map(|id| id.to_string()),
        category: ctx.category,
        learner_username: ctx.learner_username.map(|u| u.to_string()),
        page: ctx.page,
        embedded: ctx.enable_in_context_sidebar,
        layout,
        back_target,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let report = run(args)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
