use crate::model::FeedItem;
use crate::ui::mvi::UiState;

/// Where the feed is in its load cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedState {
    pub items: Vec<FeedItem>,
    pub phase: LoadPhase,
    /// Set only in the `Failed` phase.
    pub error: Option<String>,
}

impl UiState for FeedState {}

impl FeedState {
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn item(&self, id: u64) -> Option<&FeedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.item(id).is_some()
    }

    /// The user-facing failure text, if the last load failed.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle_and_empty() {
        let state = FeedState::default();
        assert_eq!(state.phase, LoadPhase::Idle);
        assert!(state.items.is_empty());
        assert!(!state.is_loading());
        assert_eq!(state.error_message(), None);
    }
}
