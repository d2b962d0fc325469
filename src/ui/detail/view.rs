use tracing::{debug, info};

use crate::api::{ApiError, ItemLookup};
use crate::model::FeedItem;
use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::reducer::DetailReducer;
use crate::ui::detail::state::DetailState;
use crate::ui::layout::{LayoutContext, LayoutScope};
use crate::ui::mvi::dispatch_mvi;
use crate::ui::route::ContentRequest;

/// Pick the item to show: the one handed over by navigation, otherwise
/// whatever `lookup` returns for the id.
pub async fn resolve_content<L: ItemLookup>(
    id: u64,
    transfer: Option<FeedItem>,
    lookup: &L,
) -> Result<FeedItem, ApiError> {
    match transfer {
        Some(item) => {
            debug!(id, "Using item handed over by navigation");
            Ok(item)
        }
        None => lookup.fetch_item_by_id(id).await,
    }
}

/// An open detail page. Holds the chrome for as long as it lives.
pub struct DetailView {
    state: DetailState,
    _layout: LayoutScope,
}

impl DetailView {
    /// Enter the detail page for `request`, resolving its content.
    ///
    /// The layout scope is taken before the content resolves, so a failed
    /// lookup still restores the chrome when the error drops the view.
    pub async fn enter<L: ItemLookup>(
        request: ContentRequest,
        lookup: &L,
        layout: &LayoutContext,
    ) -> Result<Self, ApiError> {
        let mut view = Self {
            state: DetailState::default(),
            _layout: layout.enter_detail(),
        };
        let id = request.id;
        let item = resolve_content(id, request.transfer, lookup).await?;
        info!(id, name = %item.name, "Detail view opened");
        view.dispatch(DetailIntent::ContentLoaded { item });
        Ok(view)
    }

    pub fn dispatch(&mut self, intent: DetailIntent) {
        dispatch_mvi!(self, state, DetailReducer, intent);
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }
}
