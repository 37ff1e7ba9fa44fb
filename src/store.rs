//! Global Application State Store
//!
//! The root owns exactly two pieces of state: whether the intro splash is
//! still up, and which article (if any) is open.

use nummi_content::ArticleId;
use reactive_stores::Store;

/// Root view state with field-level reactivity
#[derive(Clone, Debug, PartialEq, Store)]
pub struct NewsState {
    /// True from mount until the intro timer fires; never set again
    pub intro_visible: bool,
    /// Article shown in the detail view
    pub selected: Option<ArticleId>,
}

/// Combined view phase over (intro visible) x (has selection)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    SplashList,
    SplashDetail,
    List,
    Detail,
}

impl Phase {
    pub fn new(intro_visible: bool, has_selection: bool) -> Self {
        match (intro_visible, has_selection) {
            (true, false) => Phase::SplashList,
            (true, true) => Phase::SplashDetail,
            (false, false) => Phase::List,
            (false, true) => Phase::Detail,
        }
    }

    pub fn shows_splash(self) -> bool {
        matches!(self, Phase::SplashList | Phase::SplashDetail)
    }

    pub fn shows_detail(self) -> bool {
        matches!(self, Phase::SplashDetail | Phase::Detail)
    }

    /// Main content stays mounted under the splash, only its visibility flips
    pub fn wrapper_class(self) -> &'static str {
        if self.shows_splash() {
            "main-app-wrapper hidden"
        } else {
            "main-app-wrapper visible"
        }
    }

    pub fn column_class(self) -> &'static str {
        if self.shows_detail() {
            "content-column viewing-article"
        } else {
            "content-column"
        }
    }
}

impl NewsState {
    pub fn new() -> Self {
        Self {
            intro_visible: true,
            selected: None,
        }
    }

    /// Replace any previous selection.
    pub fn select(&mut self, id: ArticleId) {
        self.selected = Some(id);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Hide the intro. Returns true only for the first call.
    pub fn dismiss_intro(&mut self) -> bool {
        std::mem::replace(&mut self.intro_visible, false)
    }

    pub fn phase(&self) -> Phase {
        Phase::new(self.intro_visible, self.selected.is_some())
    }
}

/// Type alias for the store
pub type NewsStore = Store<NewsState>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase_is_splash_list() {
        let state = NewsState::new();
        assert_eq!(state.phase(), Phase::SplashList);
        assert!(state.selected.is_none());
    }

    #[test]
    fn test_latest_selection_wins() {
        let mut state = NewsState::new();
        for id in ["a", "b", "c", "b"] {
            state.select(ArticleId::new(id));
        }
        assert_eq!(state.selected, Some(ArticleId::new("b")));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut state = NewsState::new();
        state.close();
        assert_eq!(state.selected, None);

        state.select(ArticleId::new("x"));
        state.select(ArticleId::new("y"));
        state.close();
        assert_eq!(state.selected, None);
        state.close();
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_intro_dismissed_once() {
        let mut state = NewsState::new();
        assert!(state.dismiss_intro());
        assert!(!state.dismiss_intro());

        state.select(ArticleId::new("a"));
        state.close();
        assert!(!state.intro_visible);
        assert!(!state.dismiss_intro());
    }

    #[test]
    fn test_reselecting_same_article_changes_nothing() {
        let mut state = NewsState::new();
        state.dismiss_intro();
        state.select(ArticleId::new("a"));
        let before = state.clone();

        state.select(ArticleId::new("a"));
        state.select(ArticleId::new("a"));
        assert_eq!(state, before);
    }

    #[test]
    fn test_phase_view_flags() {
        assert_eq!(Phase::SplashList.wrapper_class(), "main-app-wrapper hidden");
        assert_eq!(Phase::SplashDetail.wrapper_class(), "main-app-wrapper hidden");
        assert_eq!(Phase::List.wrapper_class(), "main-app-wrapper visible");
        assert_eq!(Phase::Detail.column_class(), "content-column viewing-article");
        assert_eq!(Phase::SplashList.column_class(), "content-column");
        assert!(Phase::SplashDetail.shows_detail());
        assert!(!Phase::List.shows_splash());
    }

    #[test]
    fn test_phase_transitions() {
        let mut state = NewsState::new();

        state.select(ArticleId::new("a"));
        assert_eq!(state.phase(), Phase::SplashDetail);

        state.dismiss_intro();
        assert_eq!(state.phase(), Phase::Detail);

        state.close();
        assert_eq!(state.phase(), Phase::List);

        state.select(ArticleId::new("b"));
        assert_eq!(state.phase(), Phase::Detail);
    }
}
