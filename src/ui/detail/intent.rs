use crate::model::FeedItem;
use crate::ui::detail::state::DetailTab;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    ContentLoaded { item: FeedItem },
    SelectTab(DetailTab),
    ToggleObjectRecognition,
    OpenSimilarProducts,
    CloseSimilarProducts,
    OpenSavePrompt,
    CloseSavePrompt,
    /// Board picked in the detail save prompt. Only closes the prompt.
    ConfirmSave { board_name: String },
    OpenSharePrompt,
    CloseSharePrompt,
    /// Heart button in the original-content tab.
    ToggleLike,
    /// Bookmark button in the original-content tab.
    ToggleSave,
}

impl Intent for DetailIntent {}
