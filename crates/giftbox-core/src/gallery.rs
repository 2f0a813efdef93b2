//! Gallery items and their captions.
//!
//! Every gallery item carries its [`ContentKey`] explicitly. Keys default to
//! `romantic-moment-N` for the Nth item (1-indexed) but can be set per item
//! in configuration, so reordering the markup never mismatches captions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GiftError, GiftResult};

const KEY_PREFIX: &str = "romantic-moment-";

/// Identifier tying a gallery item to its caption record
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentKey(String);

impl ContentKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Key for the item at a 1-indexed position
    pub fn from_position(position: usize) -> Self {
        Self(format!("{KEY_PREFIX}{position}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Caption shown in the modal
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub key: ContentKey,
    pub title: String,
    pub description: String,
    pub quote: String,
}

impl ContentRecord {
    fn builtin(position: usize, title: &str, description: &str, quote: &str) -> Self {
        Self {
            key: ContentKey::from_position(position),
            title: title.to_string(),
            description: description.to_string(),
            quote: quote.to_string(),
        }
    }
}

/// Read-only caption lookup table
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    records: Vec<ContentRecord>,
}

impl Catalog {
    pub fn new(records: Vec<ContentRecord>) -> Self {
        Self { records }
    }

    pub fn get(&self, key: &ContentKey) -> Option<&ContentRecord> {
        self.records.iter().find(|r| &r.key == key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ContentRecord] {
        &self.records
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(vec![
            ContentRecord::builtin(
                1,
                "Our First Date",
                "The moment our hearts first danced together.",
                "\"Every love story is beautiful.\"",
            ),
            ContentRecord::builtin(
                2,
                "Beautiful Sunset",
                "Watching the sky paint shades of love.",
                "\"The best thing to hold onto is each other.\"",
            ),
            ContentRecord::builtin(
                3,
                "Perfect Evening",
                "Under the moonlight, everything is magical.",
                "\"In your arms is where I belong.\"",
            ),
            ContentRecord::builtin(
                4,
                "Sweet Memories",
                "Building our beautiful story together.",
                "\"You are my today and all my tomorrows.\"",
            ),
            ContentRecord::builtin(
                5,
                "Together Forever",
                "Side by side, heart to heart.",
                "\"I love you more than words.\"",
            ),
            ContentRecord::builtin(
                6,
                "Crazy Fun",
                "Life is better when we laugh.",
                "\"You make my heart smile.\"",
            ),
            ContentRecord::builtin(
                7,
                "Beautiful Night",
                "Pizza and you, the perfect combo.",
                "\"Home is wherever I am with you.\"",
            ),
            ContentRecord::builtin(
                8,
                "Always Smiling",
                "I never want to let go.",
                "\"You are my sunshine.\"",
            ),
            ContentRecord::builtin(
                9,
                "Adventure",
                "Exploring the world with my favorite person.",
                "\"Let's get lost together.\"",
            ),
            ContentRecord::builtin(
                10,
                "Video Memory",
                "A special moment caught on film.",
                "\"Love in motion.\"",
            ),
            ContentRecord::builtin(
                11,
                "Cool Times",
                "Just being us.",
                "\"Forever us.\"",
            ),
        ])
    }
}

/// Image or video attached to a gallery item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "src", rename_all = "snake_case")]
pub enum Media {
    Image(String),
    Video(String),
}

impl Media {
    pub fn src(&self) -> &str {
        match self {
            Media::Image(src) | Media::Video(src) => src,
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, Media::Video(_))
    }
}

/// One tile in the gallery grid
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub key: ContentKey,
    #[serde(default)]
    pub media: Option<Media>,
}

/// What the modal displays for a clicked item
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalContent {
    pub key: ContentKey,
    pub media: Media,
    pub title: String,
    pub description: String,
    pub quote: String,
}

/// Gallery items plus the captions they resolve against
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gallery {
    pub items: Vec<GalleryItem>,
    #[serde(default)]
    pub catalog: Catalog,
}

impl Gallery {
    /// Build items from media in display order, keyed by position.
    pub fn from_media(media: Vec<Option<Media>>, catalog: Catalog) -> Self {
        let items = media
            .into_iter()
            .enumerate()
            .map(|(index, media)| GalleryItem {
                key: ContentKey::from_position(index + 1),
                media,
            })
            .collect();
        Self { items, catalog }
    }

    pub fn item(&self, key: &ContentKey) -> Option<&GalleryItem> {
        self.items.iter().find(|item| &item.key == key)
    }

    /// Resolve a clicked item into modal content.
    ///
    /// Fails when the item, its media, or its caption is missing; callers
    /// treat every failure as a silent no-op.
    pub fn resolve(&self, key: &ContentKey) -> GiftResult<ModalContent> {
        let item = self
            .item(key)
            .ok_or_else(|| GiftError::ItemNotFound(key.to_string()))?;
        let media = item
            .media
            .clone()
            .ok_or_else(|| GiftError::MediaMissing(key.to_string()))?;
        let record = self
            .catalog
            .get(key)
            .ok_or_else(|| GiftError::ContentNotFound(key.to_string()))?;

        Ok(ModalContent {
            key: key.clone(),
            media,
            title: record.title.clone(),
            description: record.description.clone(),
            quote: record.quote.clone(),
        })
    }
}

impl Default for Gallery {
    fn default() -> Self {
        let media = (1..=11)
            .map(|n| {
                Some(if n == 10 {
                    Media::Video("assets/videos/video1.mp4".to_string())
                } else {
                    Media::Image(format!("assets/images/photo{n}.jpg"))
                })
            })
            .collect();
        Self::from_media(media, Catalog::default())
    }
}
