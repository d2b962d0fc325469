use std::fmt;
use std::str::FromStr;

use crate::model::FeedItem;
use crate::ui::mvi::UiState;

/// Content tabs of the detail view. Switching never loads data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Original,
    Product,
    Coordinate,
    Mood,
    Idea,
}

impl DetailTab {
    pub const ALL: [DetailTab; 5] = [
        DetailTab::Original,
        DetailTab::Product,
        DetailTab::Coordinate,
        DetailTab::Mood,
        DetailTab::Idea,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DetailTab::Original => "original",
            DetailTab::Product => "product",
            DetailTab::Coordinate => "coordinate",
            DetailTab::Mood => "mood",
            DetailTab::Idea => "idea",
        }
    }
}

impl fmt::Display for DetailTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetailTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DetailTab::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<&str> = DetailTab::ALL.iter().map(|t| t.as_str()).collect();
                format!("unknown tab '{}', expected one of: {}", s, names.join(", "))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailState {
    /// `None` until the content is resolved.
    pub content: Option<FeedItem>,
    pub active_tab: DetailTab,
    pub object_recognition: bool,
    pub similar_products_open: bool,
    pub save_prompt_open: bool,
    pub share_prompt_open: bool,
    pub liked: bool,
    pub saved: bool,
}

impl UiState for DetailState {}

impl DetailState {
    pub fn is_loading(&self) -> bool {
        self.content.is_none()
    }
}
