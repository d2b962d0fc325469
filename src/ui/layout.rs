//! Page chrome shared by the feed and detail views.
//!
//! The header, footer and main padding are owned by a `LayoutContext`
//! that callers pass to each view. A view that changes the chrome does so
//! through a `LayoutScope`; dropping the scope restores the chrome that
//! view is expected to leave behind.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::config::LayoutConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportSize {
    Mobile,
    Desktop,
}

impl ViewportSize {
    /// Widths strictly below `breakpoint` are mobile.
    pub fn classify(width: u32, breakpoint: u32) -> Self {
        if width < breakpoint {
            ViewportSize::Mobile
        } else {
            ViewportSize::Desktop
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    Show,
    Hide,
    Fixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterStyle {
    Fixed,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainPadding {
    Default,
    NoPadding,
    ImageDetailPc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveView {
    Feed,
    Detail,
}

/// Snapshot of the page chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutState {
    pub viewport: ViewportSize,
    pub header: HeaderStyle,
    pub footer: FooterStyle,
    pub padding: MainPadding,
}

impl LayoutState {
    fn with_viewport(viewport: ViewportSize) -> Self {
        Self {
            viewport,
            header: HeaderStyle::Fixed,
            footer: FooterStyle::Fixed,
            padding: MainPadding::Default,
        }
    }

    fn apply_detail_entry(&mut self) {
        match self.viewport {
            ViewportSize::Desktop => {
                self.header = HeaderStyle::Fixed;
                self.padding = MainPadding::ImageDetailPc;
            }
            ViewportSize::Mobile => {
                self.header = HeaderStyle::Hide;
                self.padding = MainPadding::NoPadding;
            }
        }
        self.footer = FooterStyle::None;
    }

    fn apply_detail_exit(&mut self) {
        self.header = HeaderStyle::Fixed;
        self.footer = FooterStyle::Fixed;
        self.padding = MainPadding::Default;
    }
}

struct LayoutInner {
    state: LayoutState,
    active: Option<ActiveView>,
}

/// Shared handle to the page chrome. Cloning shares the same state.
#[derive(Clone)]
pub struct LayoutContext {
    inner: Arc<Mutex<LayoutInner>>,
    config: LayoutConfig,
}

impl LayoutContext {
    pub fn new(config: LayoutConfig, viewport_width: u32) -> Self {
        let viewport = ViewportSize::classify(viewport_width, config.mobile_breakpoint);
        Self {
            inner: Arc::new(Mutex::new(LayoutInner {
                state: LayoutState::with_viewport(viewport),
                active: None,
            })),
            config,
        }
    }

    pub fn snapshot(&self) -> LayoutState {
        self.inner.lock().state
    }

    pub fn viewport(&self) -> ViewportSize {
        self.snapshot().viewport
    }

    /// Re-classify the viewport. An open detail view re-applies its entry rule.
    pub fn set_viewport_width(&self, width: u32) {
        let viewport = ViewportSize::classify(width, self.config.mobile_breakpoint);
        let mut inner = self.inner.lock();
        if inner.state.viewport == viewport {
            return;
        }
        inner.state.viewport = viewport;
        if inner.active == Some(ActiveView::Detail) {
            inner.state.apply_detail_entry();
        }
        debug!(?viewport, width, "Viewport changed");
    }

    /// Enter the feed view. The header is reset to `Show` when the scope drops.
    pub fn enter_feed(&self) -> LayoutScope {
        self.inner.lock().active = Some(ActiveView::Feed);
        LayoutScope {
            context: self.clone(),
            view: ActiveView::Feed,
        }
    }

    /// Feed scroll handler: on mobile, hide the header past the offset.
    pub fn on_feed_scroll(&self, offset: u32) {
        let mut inner = self.inner.lock();
        if inner.active != Some(ActiveView::Feed) {
            return;
        }
        let header = match inner.state.viewport {
            ViewportSize::Mobile if offset > self.config.header_hide_offset => HeaderStyle::Hide,
            _ => HeaderStyle::Show,
        };
        inner.state.header = header;
    }

    /// Enter the detail view and apply its chrome for the current viewport.
    pub fn enter_detail(&self) -> LayoutScope {
        {
            let mut inner = self.inner.lock();
            inner.active = Some(ActiveView::Detail);
            inner.state.apply_detail_entry();
        }
        LayoutScope {
            context: self.clone(),
            view: ActiveView::Detail,
        }
    }

    /// Apply `view`'s exit rule, unless another view has taken over since.
    fn release(&self, view: ActiveView) {
        let mut inner = self.inner.lock();
        if inner.active != Some(view) {
            debug!(?view, "Stale layout scope released");
            return;
        }
        match view {
            ActiveView::Feed => inner.state.header = HeaderStyle::Show,
            ActiveView::Detail => inner.state.apply_detail_exit(),
        }
        inner.active = None;
    }
}

/// Held by a view for as long as it is on screen.
pub struct LayoutScope {
    context: LayoutContext,
    view: ActiveView,
}

impl Drop for LayoutScope {
    fn drop(&mut self) {
        self.context.release(self.view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(width: u32) -> LayoutContext {
        LayoutContext::new(LayoutConfig::default(), width)
    }

    #[test]
    fn breakpoint_is_exclusive() {
        assert_eq!(ViewportSize::classify(767, 768), ViewportSize::Mobile);
        assert_eq!(ViewportSize::classify(768, 768), ViewportSize::Desktop);
    }

    #[test]
    fn detail_on_desktop_then_exit() {
        let layout = context(1280);
        {
            let _scope = layout.enter_detail();
            let state = layout.snapshot();
            assert_eq!(state.header, HeaderStyle::Fixed);
            assert_eq!(state.footer, FooterStyle::None);
            assert_eq!(state.padding, MainPadding::ImageDetailPc);
        }
        let state = layout.snapshot();
        assert_eq!(state.header, HeaderStyle::Fixed);
        assert_eq!(state.footer, FooterStyle::Fixed);
        assert_eq!(state.padding, MainPadding::Default);
    }

    #[test]
    fn detail_on_mobile_hides_header() {
        let layout = context(375);
        let _scope = layout.enter_detail();
        let state = layout.snapshot();
        assert_eq!(state.header, HeaderStyle::Hide);
        assert_eq!(state.padding, MainPadding::NoPadding);
    }

    #[test]
    fn resize_while_in_detail_reapplies_rules() {
        let layout = context(1280);
        let _scope = layout.enter_detail();
        layout.set_viewport_width(400);
        assert_eq!(layout.snapshot().header, HeaderStyle::Hide);
        assert_eq!(layout.snapshot().padding, MainPadding::NoPadding);
    }

    #[test]
    fn feed_scroll_hides_header_on_mobile_only() {
        let layout = context(375);
        let scope = layout.enter_feed();
        layout.on_feed_scroll(51);
        assert_eq!(layout.snapshot().header, HeaderStyle::Hide);
        layout.on_feed_scroll(50);
        assert_eq!(layout.snapshot().header, HeaderStyle::Show);
        layout.on_feed_scroll(200);
        drop(scope);
        assert_eq!(layout.snapshot().header, HeaderStyle::Show);

        let desktop = context(1024);
        let _scope = desktop.enter_feed();
        desktop.on_feed_scroll(500);
        assert_eq!(desktop.snapshot().header, HeaderStyle::Show);
    }

    #[test]
    fn old_feed_scope_does_not_touch_detail_chrome() {
        let layout = context(1280);
        let feed = layout.enter_feed();
        let _detail = layout.enter_detail();
        drop(feed);

        let state = layout.snapshot();
        assert_eq!(state.header, HeaderStyle::Fixed);
        assert_eq!(state.footer, FooterStyle::None);
        assert_eq!(state.padding, MainPadding::ImageDetailPc);
    }

    #[test]
    fn old_detail_scope_does_not_touch_feed_chrome() {
        let layout = context(375);
        let detail = layout.enter_detail();
        let _feed = layout.enter_feed();
        layout.on_feed_scroll(120);
        drop(detail);

        assert_eq!(layout.snapshot().header, HeaderStyle::Hide);
        layout.on_feed_scroll(0);
        assert_eq!(layout.snapshot().header, HeaderStyle::Show);
    }

    #[test]
    fn scroll_outside_feed_is_ignored() {
        let layout = context(375);
        layout.on_feed_scroll(300);
        assert_eq!(layout.snapshot().header, HeaderStyle::Fixed);
    }
}
