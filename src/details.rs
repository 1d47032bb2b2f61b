//! Platform details modal.
//!
//! `DetailsView` is a pure function of an optional entry and a visibility
//! flag. `DetailsState` is the caller-side selection that feeds it; closing
//! the modal hides it without touching the selection.

use crate::content::PlatformEntry;

/// Everything the modal shows for one platform.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsContent {
    pub title: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub stats: &'static str,
    pub features: Vec<&'static str>,
    pub monogram: &'static str,
    pub cta_label: String,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct DetailsView<'a> {
    pub brand: Option<&'a PlatformEntry>,
    pub open: bool,
}

impl<'a> DetailsView<'a> {
    pub fn new(brand: Option<&'a PlatformEntry>, open: bool) -> Self {
        Self { brand, open }
    }

    /// Content to draw, or `None` when closed or nothing is selected.
    pub fn render(&self) -> Option<DetailsContent> {
        if !self.open {
            return None;
        }
        let brand = self.brand?;
        Some(DetailsContent {
            title: brand.full_name,
            tagline: brand.tagline,
            description: brand.description,
            stats: brand.stats,
            features: brand.features.to_vec(),
            monogram: brand.logo.monogram,
            cta_label: format!("Explore {}", brand.name),
            href: brand.href,
        })
    }
}

/// Selected platform and modal visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailsState {
    selected: Option<usize>,
    open: bool,
}

impl DetailsState {
    /// Select `index` and show the modal, replacing any previous selection.
    pub fn open_with(&mut self, index: usize) {
        self.selected = Some(index);
        self.open = true;
    }

    /// Hide the modal. The selection is kept.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn view<'a>(&self, entries: &'a [PlatformEntry]) -> DetailsView<'a> {
        DetailsView::new(self.selected.and_then(|i| entries.get(i)), self.open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{find_platform, PLATFORMS};

    #[test]
    fn test_shield_details() {
        let shield = find_platform("DigiNexShield").expect("registered");
        let content = DetailsView::new(Some(shield), true).render().expect("open with entry");
        assert_eq!(content.title, "DigiNexShield");
        assert_eq!(content.tagline, "The Security Fortress");
        assert_eq!(
            content.features,
            vec![
                "Predictive AI threat detection",
                "Zero-trust network architecture",
                "Real-time incident response",
                "Compliance-ready audit trails",
            ]
        );
        assert_eq!(content.cta_label, "Explore Shield");
    }

    #[test]
    fn test_nothing_without_entry() {
        assert!(DetailsView::new(None, true).render().is_none());
        assert!(DetailsView::new(Some(&PLATFORMS[0]), false).render().is_none());
    }

    #[test]
    fn test_close_keeps_selection_and_registry() {
        let before = PLATFORMS.clone();
        let mut state = DetailsState::default();
        state.open_with(1);
        assert!(state.view(&PLATFORMS).render().is_some());

        state.close();
        assert!(!state.is_open());
        assert_eq!(state.selected(), Some(1));
        assert!(state.view(&PLATFORMS).render().is_none());
        assert_eq!(PLATFORMS, before);

        state.clear_selection();
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_new_selection_replaces_old() {
        let mut state = DetailsState::default();
        state.open_with(0);
        state.open_with(5);
        let content = state.view(&PLATFORMS).render().expect("open");
        assert_eq!(content.title, PLATFORMS[5].full_name);
    }

    #[test]
    fn test_out_of_range_selection_renders_nothing() {
        let mut state = DetailsState::default();
        state.open_with(42);
        assert!(state.view(&PLATFORMS).render().is_none());
    }
}
