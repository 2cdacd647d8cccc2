//! Current-page selection and the nav list

use lectern_document::{nav_label, Deck};

/// One entry of the side navigation list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub key: String,
    pub label: String,
    pub active: bool,
}

/// Tracks the current page
#[derive(Debug, Clone)]
pub struct NavController {
    current: String,
}

impl NavController {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            current: start.into(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn set_current(&mut self, key: impl Into<String>) {
        self.current = key.into();
    }

    /// Ordered nav entries with the active one flagged
    pub fn items(&self, deck: &Deck) -> Vec<NavItem> {
        deck.pages_ordered()
            .into_iter()
            .map(|(key, page)| NavItem {
                key: key.to_string(),
                label: nav_label(key, page),
                active: key == self.current,
            })
            .collect()
    }

    /// Toast shown when a page is selected, e.g. `第 01 頁`
    pub fn selection_toast(&self) -> String {
        let number = self.current.strip_prefix("page").unwrap_or(&self.current);
        format!("第 {} 頁", number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lectern_document::{Page, PageMap};

    fn deck() -> Deck {
        let mut pages = PageMap::new();
        for (key, title) in [("page02", "詩歌"), ("page01", "歡迎"), ("page10", "結束")] {
            pages.insert(
                key,
                Page {
                    title: title.to_string(),
                    nav_label: None,
                    background: None,
                    sections: vec![],
                },
            );
        }
        Deck { pages }
    }

    #[test]
    fn test_items_are_ordered_and_highlight_active() {
        let nav = NavController::new("page02");
        let items = nav.items(&deck());

        let keys: Vec<&str> = items.iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, vec!["page01", "page02", "page10"]);

        let active: Vec<bool> = items.iter().map(|i| i.active).collect();
        assert_eq!(active, vec![false, true, false]);

        assert_eq!(items[0].label, "歡迎");
    }

    #[test]
    fn test_selection_toast_strips_page_prefix() {
        assert_eq!(NavController::new("page01").selection_toast(), "第 01 頁");
        assert_eq!(NavController::new("encore").selection_toast(), "第 encore 頁");
    }
}
