//! # Deck Model
//!
//! A Deck is an ordered mapping from page key (`"page01"`, `"page02"`, …)
//! to [`Page`]. The key is the only ordering-stable field: navigation order
//! is derived from the numeric suffix embedded in each key, not from map
//! insertion order.
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Render → Edit → Commit → Persist
//!   ↓       ↓       ↓       ↓        ↓
//! JSON    Frame  Preview  Deck     JSON
//! ```
//!
//! Pages and sections are never destroyed while a deck is live; committed
//! edits overwrite `content`/`style` in place.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::DocumentError;

/// A full presentation deck
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub pages: PageMap,
}

/// Insertion-ordered page map, serialized as a JSON object
///
/// A plain `HashMap` would scramble the relative order of keys that carry
/// no numeric suffix, so the map keeps entries in the order they were
/// inserted (or encountered during deserialization).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageMap {
    entries: Vec<(String, Page)>,
}

/// One screen of the deck
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Required; doubles as the nav-label fallback
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nav_label: Option<String>,

    /// Background image reference (bare file name, resolved by the host)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,

    /// May be empty; a page then renders title/background only
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// A content block within a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "type")]
    pub kind: SectionKind,

    /// Inline HTML fragment (`<br>`, `<div>`, inline formatting tags).
    /// Injected verbatim into the display tree, so it must always carry
    /// HTML semantics, never raw unescaped user text.
    pub content: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleProps>,
}

/// Section discriminator. Only `text` sections are edit targets; any other
/// kind is render-only and carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionKind {
    Text,
    Other(String),
}

impl Serialize for SectionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SectionKind::Text => serializer.serialize_str("text"),
            SectionKind::Other(kind) => serializer.serialize_str(kind),
        }
    }
}

impl<'de> Deserialize<'de> for SectionKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let kind = String::deserialize(deserializer)?;
        Ok(match kind.as_str() {
            "text" => SectionKind::Text,
            _ => SectionKind::Other(kind),
        })
    }
}

/// Whole-section style overrides
///
/// Values are passed through uncorrected; a malformed CSS length or color
/// is the author's problem, not ours.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

/// Stable address of a section within a deck
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionAddress {
    pub page_key: String,
    pub index: usize,
}

impl SectionAddress {
    pub fn new(page_key: impl Into<String>, index: usize) -> Self {
        Self {
            page_key: page_key.into(),
            index,
        }
    }
}

impl PageMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a page, replacing any page under the same key in place
    pub fn insert(&mut self, key: impl Into<String>, page: Page) {
        let key = key.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = page;
        } else {
            self.entries.push((key, page));
        }
    }

    pub fn get(&self, key: &str) -> Option<&Page> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, p)| p)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Page> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, p)| p)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Page)> {
        self.entries.iter().map(|(k, p)| (k.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for PageMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, page) in &self.entries {
            map.serialize_entry(key, page)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PageMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PageMapVisitor;

        impl<'de> Visitor<'de> for PageMapVisitor {
            type Value = PageMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of page key to page")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<PageMap, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, page)) = access.next_entry::<String, Page>()? {
                    entries.push((key, page));
                }
                Ok(PageMap { entries })
            }
        }

        deserializer.deserialize_map(PageMapVisitor)
    }
}

impl Deck {
    pub fn new() -> Self {
        Self {
            pages: PageMap::new(),
        }
    }

    /// Minimal single-page deck used when no stored or bundled deck loads
    pub fn sample() -> Self {
        let mut pages = PageMap::new();
        pages.insert(
            "page01",
            Page {
                title: "歡迎".to_string(),
                nav_label: Some("家".to_string()),
                background: Some("slide1.jpg".to_string()),
                sections: vec![Section {
                    kind: SectionKind::Text,
                    content: "歡迎來到生命河".to_string(),
                    style: Some(StyleProps {
                        font_size: Some("48px".to_string()),
                        ..StyleProps::default()
                    }),
                }],
            },
        );
        Self { pages }
    }

    /// Look up a page by key
    pub fn get_page(&self, key: &str) -> Result<&Page, DocumentError> {
        self.pages
            .get(key)
            .ok_or_else(|| DocumentError::PageNotFound(key.to_string()))
    }

    /// Pages in navigation order: ascending numeric value parsed from the
    /// trailing digits of each key. Keys without a numeric suffix sort
    /// last, keeping their relative insertion order.
    pub fn pages_ordered(&self) -> Vec<(&str, &Page)> {
        let mut entries: Vec<(&str, &Page)> = self.pages.iter().collect();
        entries.sort_by_key(|(key, _)| numeric_suffix(key).unwrap_or(u64::MAX));
        entries
    }

    /// Resolve a section address
    pub fn section(&self, addr: &SectionAddress) -> Result<&Section, DocumentError> {
        let page = self.get_page(&addr.page_key)?;
        page.sections
            .get(addr.index)
            .ok_or_else(|| DocumentError::SectionOutOfRange {
                page: addr.page_key.clone(),
                index: addr.index,
            })
    }

    /// Commit an edit: overwrite the addressed section's content and style
    /// in place. The style is a whole-section override, not a patch.
    pub fn commit_section_edit(
        &mut self,
        addr: &SectionAddress,
        content: String,
        style: StyleProps,
    ) -> Result<(), DocumentError> {
        let page = self
            .pages
            .get_mut(&addr.page_key)
            .ok_or_else(|| DocumentError::PageNotFound(addr.page_key.clone()))?;
        let section =
            page.sections
                .get_mut(addr.index)
                .ok_or_else(|| DocumentError::SectionOutOfRange {
                    page: addr.page_key.clone(),
                    index: addr.index,
                })?;
        section.content = content;
        section.style = Some(style);
        Ok(())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Section {
    /// Only text sections open an edit session
    pub fn is_editable(&self) -> bool {
        self.kind == SectionKind::Text
    }
}

/// Navigation label for a page: explicit `navLabel` if present and
/// non-empty, else the first two characters of the title, else the
/// zero-padded numeric suffix of the key. Total: the empty-title case
/// always falls through to the numeric form.
pub fn nav_label(key: &str, page: &Page) -> String {
    if let Some(label) = &page.nav_label {
        if !label.is_empty() {
            return label.clone();
        }
    }

    let short: String = page.title.chars().take(2).collect();
    if !short.is_empty() {
        return short;
    }

    match numeric_suffix(key) {
        Some(n) => format!("{:02}", n),
        None => key.to_string(),
    }
}

/// Numeric value of the trailing digit run of a key, if any
pub(crate) fn numeric_suffix(key: &str) -> Option<u64> {
    let digits: String = key
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}
