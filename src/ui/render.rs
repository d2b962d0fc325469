//! Plain-text views of the containers, used by the command line.

use std::fmt::Write;

use crate::model::{FeedItem, SuggestedUser};
use crate::ui::detail::{DetailState, DetailTab};
use crate::ui::feed::{FeedState, LoadPhase};
use crate::ui::layout::{LayoutState, ViewportSize};
use crate::ui::route::{share_link, ShareTarget};
use crate::ui::save::SaveWorkflowState;

pub const RETRY_HINT: &str = "Press retry to load the feed again.";

fn card(out: &mut String, item: &FeedItem) {
    let bookmark = if item.saved { "saved" } else { "-" };
    let _ = writeln!(
        out,
        "#{:<4} {:<24} likes {:>5}  comments {:>4}  [{}]",
        item.id, item.name, item.like_count, item.comment_count, bookmark
    );
    let _ = writeln!(out, "      {}", item.image_url);
}

pub fn render_feed(feed: &FeedState, save: &SaveWorkflowState, viewport: ViewportSize) -> String {
    let mut out = String::new();
    match feed.phase {
        LoadPhase::Idle | LoadPhase::Loading => out.push_str("Loading...\n"),
        LoadPhase::Failed => {
            let _ = writeln!(out, "Error: {}", feed.error_message().unwrap_or_default());
            let _ = writeln!(out, "{}", RETRY_HINT);
        }
        LoadPhase::Loaded if feed.items.is_empty() => out.push_str("No trend seeds yet.\n"),
        LoadPhase::Loaded => {
            let columns = match viewport {
                ViewportSize::Mobile => 1,
                ViewportSize::Desktop => 3,
            };
            let _ = writeln!(out, "Trend seeds ({} columns)", columns);
            for item in &feed.items {
                card(&mut out, item);
            }
        }
    }
    if let Some(notice) = save.notification() {
        let _ = writeln!(out, "Saved to board \"{}\"", notice.board_name);
    }
    out
}

pub fn render_users(users: &[SuggestedUser]) -> String {
    let mut out = String::from("Suggested Users\n");
    for user in users {
        let action = if user.is_following { "Following" } else { "Follow" };
        let _ = writeln!(
            out,
            "#{:<3} {:<18} {:>8} followers  [{}]",
            user.id,
            user.name,
            user.followers_label(),
            action
        );
    }
    out
}

pub fn render_detail(state: &DetailState, layout: &LayoutState) -> String {
    let Some(item) = &state.content else {
        return "Loading...\n".to_string();
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", item.name);
    let _ = writeln!(out, "{}", item.image_url);
    let _ = writeln!(
        out,
        "likes {}  comments {}  layout {:?}/{:?}",
        item.like_count, item.comment_count, layout.viewport, layout.header
    );

    let tabs: Vec<String> = DetailTab::ALL
        .iter()
        .map(|tab| {
            if *tab == state.active_tab {
                format!("[{}]", tab)
            } else {
                tab.to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "{}", tabs.join(" | "));

    if state.active_tab == DetailTab::Original {
        let _ = writeln!(
            out,
            "liked: {}  saved: {}",
            if state.liked { "yes" } else { "no" },
            if state.saved { "yes" } else { "no" }
        );
    }
    if state.object_recognition {
        out.push_str("Object recognition: on\n");
    }
    if state.similar_products_open {
        out.push_str("Similar products panel open\n");
    }
    if state.share_prompt_open {
        let link = share_link(None, item.id);
        let targets: Vec<&str> = ShareTarget::ALL.iter().map(|t| t.label()).collect();
        let _ = writeln!(out, "Share {} via {}", link, targets.join(", "));
    }
    out
}
