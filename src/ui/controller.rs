//! Feed controller: owns the feed and save-workflow state and performs
//! the only asynchronous operation, the feed fetch.
//!
//! Loads are ticketed. Every `begin_load` issues a new ticket, and a
//! result is applied only if its ticket is still the latest one, so an
//! older response resolving late can never overwrite a newer one. After
//! `teardown` no result is applied at all.

use tracing::{debug, info, warn};

use crate::api::{ApiError, FeedSource};
use crate::model::FeedItem;
use crate::ui::feed::{FeedIntent, FeedReducer, FeedState};
use crate::ui::mvi::dispatch_mvi;
use crate::ui::save::{SaveIntent, SaveReducer, SaveWorkflowState};

/// Identifies one issued load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
}

impl LoadTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// What happened to a completed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer load was issued after this one.
    Superseded,
    /// The controller was torn down before the result arrived.
    Discarded,
}

pub struct FeedController<S> {
    source: S,
    feed: FeedState,
    save: SaveWorkflowState,
    latest_seq: u64,
    torn_down: bool,
}

impl<S: FeedSource> FeedController<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            feed: FeedState::default(),
            save: SaveWorkflowState::default(),
            latest_seq: 0,
            torn_down: false,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn feed(&self) -> &FeedState {
        &self.feed
    }

    pub fn save_workflow(&self) -> &SaveWorkflowState {
        &self.save
    }

    /// Fetch the feed and replace the current items with the result.
    ///
    /// Also the retry action after a failed load.
    pub async fn load(&mut self) -> LoadOutcome {
        let ticket = self.begin_load();
        let result = self.source.fetch_feed().await;
        self.finish_load(ticket, result)
    }

    /// Mark the feed as loading and issue a ticket for the fetch.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_seq += 1;
        let ticket = LoadTicket {
            seq: self.latest_seq,
        };
        debug!(seq = ticket.seq, "Feed load started");
        dispatch_mvi!(self, feed, FeedReducer, FeedIntent::LoadStarted);
        ticket
    }

    /// Deliver the result of the fetch issued with `ticket`.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<FeedItem>, ApiError>,
    ) -> LoadOutcome {
        if self.torn_down {
            debug!(seq = ticket.seq, "Feed result after teardown ignored");
            return LoadOutcome::Discarded;
        }
        if ticket.seq != self.latest_seq {
            debug!(
                seq = ticket.seq,
                latest = self.latest_seq,
                "Superseded feed result ignored"
            );
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(items) => {
                info!(seq = ticket.seq, items = items.len(), "Feed loaded");
                dispatch_mvi!(self, feed, FeedReducer, FeedIntent::LoadSucceeded { items });
            }
            Err(e) => {
                warn!(seq = ticket.seq, kind = ?e.kind(), error = %e, "Feed load failed");
                let message = e.user_message();
                dispatch_mvi!(self, feed, FeedReducer, FeedIntent::LoadFailed { message });
            }
        }
        LoadOutcome::Applied
    }

    pub fn like(&mut self, id: u64) {
        if !self.feed.contains(id) {
            debug!(id, "Like for unknown item ignored");
        }
        dispatch_mvi!(self, feed, FeedReducer, FeedIntent::Like { id });
    }

    /// Remember `id` and open the board prompt.
    pub fn request_save(&mut self, id: u64) {
        dispatch_mvi!(self, save, SaveReducer, SaveIntent::Request { id });
    }

    /// Save the selected item to `board_name` and show the notification.
    ///
    /// If the item disappeared (a reload replaced the list) only the
    /// prompt and notification change.
    pub fn confirm_save(&mut self, board_name: impl Into<String>) {
        let board_name = board_name.into();
        let selected = self.save.selected_item_id;
        info!(item = ?selected, board = %board_name, "Saved to board");
        dispatch_mvi!(self, save, SaveReducer, SaveIntent::Confirm { board_name });
        if let Some(id) = selected {
            if !self.feed.contains(id) {
                debug!(id, "Saved item no longer in feed");
            }
            dispatch_mvi!(self, feed, FeedReducer, FeedIntent::MarkSaved { id });
        }
    }

    pub fn cancel_save(&mut self) {
        dispatch_mvi!(self, save, SaveReducer, SaveIntent::Cancel);
    }

    pub fn dismiss_notification(&mut self) {
        dispatch_mvi!(self, save, SaveReducer, SaveIntent::DismissNotification);
    }

    /// The owning view went away. Pending results will be dropped.
    pub fn teardown(&mut self) {
        self.torn_down = true;
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}
