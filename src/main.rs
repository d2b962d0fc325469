use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};

use trendseed::api::{ApiClient, FeedSource, MockFeedSource, PlaceholderLookup};
use trendseed::clipboard::ClipboardHandler;
use trendseed::config::{Config, ConfigStore};
use trendseed::logging::init_tracing;
use trendseed::ui::controller::FeedController;
use trendseed::ui::detail::{DetailIntent, DetailTab, DetailView};
use trendseed::ui::feed::LoadPhase;
use trendseed::ui::layout::LayoutContext;
use trendseed::ui::render::{render_detail, render_feed, render_users};
use trendseed::ui::route::{share_link, ContentRequest};
use trendseed::ui::users::SuggestedUsersPanel;

#[derive(Parser, Debug)]
#[command(name = "trendseed", about = "Browse the trend seed feed from the terminal")]
struct Cli {
    /// Path to config.toml (default: <config dir>/trendseed/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override api.base_url
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Serve the bundled demo feed instead of calling the API
    #[arg(long, global = true)]
    demo: bool,

    /// Viewport width used for layout decisions
    #[arg(long, global = true, default_value_t = 1280)]
    width: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the feed and print its cards
    Feed(FeedArgs),
    /// Print suggested users
    Users(UsersArgs),
    /// Open the detail page of one item
    Detail(DetailArgs),
    /// Print (or copy) the share link of an item
    Share(ShareArgs),
}

#[derive(Args, Debug)]
struct FeedArgs {
    /// Manual retries after a failed load
    #[arg(long, default_value_t = 0)]
    retry: u32,
    /// Like an item (repeatable)
    #[arg(long = "like", value_name = "ID")]
    likes: Vec<u64>,
    /// Save an item to a board
    #[arg(long, value_name = "ID", requires = "board")]
    save: Option<u64>,
    /// Board name for --save
    #[arg(long)]
    board: Option<String>,
}

#[derive(Args, Debug)]
struct UsersArgs {
    /// Toggle following a user (repeatable)
    #[arg(long = "follow", value_name = "ID")]
    follows: Vec<u64>,
}

#[derive(Args, Debug)]
struct DetailArgs {
    id: u64,
    /// Tab to show: original, product, coordinate, mood, idea
    #[arg(long, default_value = "original")]
    tab: DetailTab,
    /// Turn on the object recognition overlay
    #[arg(long)]
    object_recognition: bool,
    /// Open the similar-products panel
    #[arg(long)]
    similar: bool,
    /// Open the share prompt
    #[arg(long)]
    share: bool,
}

#[derive(Args, Debug)]
struct ShareArgs {
    id: u64,
    /// Public origin to prefix the link with
    #[arg(long)]
    origin: Option<String>,
    /// Copy the link to the clipboard
    #[arg(long)]
    copy: bool,
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let store = ConfigStore::open(path).context("loading configuration")?;
    if let Some(base_url) = cli.base_url.clone() {
        store
            .update(|config| config.api.base_url = base_url)
            .context("applying --base-url")?;
    }
    let config = store.get();
    info!(path = %store.path().display(), demo = cli.demo, "Configuration loaded");

    let layout = LayoutContext::new(config.layout.clone(), cli.width);

    match cli.command {
        Command::Users(args) => {
            let mut panel = SuggestedUsersPanel::new();
            for id in args.follows {
                panel.toggle_follow(id);
            }
            print!("{}", render_users(panel.users()));
            Ok(())
        }
        Command::Share(args) => {
            let link = share_link(args.origin.as_deref(), args.id);
            if args.copy {
                ClipboardHandler::new()?.set_text(&link)?;
                println!("Copied {}", link);
            } else {
                println!("{}", link);
            }
            Ok(())
        }
        Command::Feed(args) if cli.demo => {
            run_feed(MockFeedSource::new(config.demo.repeat), args, &layout).await
        }
        Command::Feed(args) => run_feed(ApiClient::new(config.api)?, args, &layout).await,
        Command::Detail(args) if cli.demo => {
            run_detail(MockFeedSource::new(config.demo.repeat), args, &layout).await
        }
        Command::Detail(args) => run_detail(ApiClient::new(config.api)?, args, &layout).await,
    }
}

async fn run_feed<S: FeedSource>(source: S, args: FeedArgs, layout: &LayoutContext) -> Result<()> {
    let _scope = layout.enter_feed();
    let mut controller = FeedController::new(source);

    controller.load().await;
    let mut retries_left = args.retry;
    while controller.feed().phase == LoadPhase::Failed && retries_left > 0 {
        retries_left -= 1;
        controller.load().await;
    }

    if controller.feed().phase == LoadPhase::Loaded {
        for id in args.likes {
            controller.like(id);
        }
        if let (Some(id), Some(board)) = (args.save, args.board) {
            controller.request_save(id);
            controller.confirm_save(board);
        }
    }

    print!(
        "{}",
        render_feed(controller.feed(), controller.save_workflow(), layout.viewport())
    );
    controller.teardown();

    if let Some(message) = controller.feed().error_message() {
        anyhow::bail!("{}", message);
    }
    Ok(())
}

async fn run_detail<S: FeedSource>(
    source: S,
    args: DetailArgs,
    layout: &LayoutContext,
) -> Result<()> {
    // Hand over the feed's copy when it has the item, like a card click would.
    let request = match source.fetch_feed().await {
        Ok(items) => match items.iter().find(|item| item.id == args.id) {
            Some(item) => ContentRequest::from_item(item),
            None => ContentRequest::by_id(args.id),
        },
        Err(e) => {
            warn!(error = %e, "Feed unavailable, opening detail by id");
            ContentRequest::by_id(args.id)
        }
    };

    let mut view = DetailView::enter(request, &PlaceholderLookup, layout).await?;
    view.dispatch(DetailIntent::SelectTab(args.tab));
    if args.object_recognition {
        view.dispatch(DetailIntent::ToggleObjectRecognition);
    }
    if args.similar {
        view.dispatch(DetailIntent::OpenSimilarProducts);
    }
    if args.share {
        view.dispatch(DetailIntent::OpenSharePrompt);
    }

    print!("{}", render_detail(view.state(), &layout.snapshot()));
    Ok(())
}
