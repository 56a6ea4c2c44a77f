// Emojipedia listing page: fixed endpoint and the markup constants the
// icon grid is keyed on.

use std::collections::{HashMap, HashSet};

/// One icon discovered on the listing page: its image URL and the file
/// name derived from the URL's last path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiIcon {
    pub url: String,
    pub file_name: String,
}

pub struct EmojipediaSite;

impl EmojipediaSite {
    pub fn get_listing_url() -> &'static str {
        "https://emojipedia.org/apple/"
    }

    /// Class of the single `<ul>` holding one `<li>` per emoji.
    pub fn get_grid_class() -> &'static str {
        "emoji-grid"
    }

    /// `src` value the site serves for images that load lazily; the real
    /// URL is in the `data-src` attribute instead.
    pub fn get_lazy_placeholder() -> &'static str {
        "/static/img/lazy.svg"
    }

    pub fn get_lazy_attr() -> &'static str {
        "data-src"
    }
}

/// Icons that still need a download. Names already on disk are skipped,
/// and a name repeated within one listing is kept only once (first
/// occurrence wins), so a file written earlier in the run is never
/// re-fetched or overwritten.
pub fn filter_new_icons(
    icons: Vec<EmojiIcon>,
    existing: &HashMap<String, bool>,
) -> Vec<EmojiIcon> {
    let mut seen = HashSet::new();
    icons
        .into_iter()
        .filter(|icon| {
            !existing.get(&icon.file_name).copied().unwrap_or(false)
                && seen.insert(icon.file_name.clone())
        })
        .collect()
}

pub mod page;

#[cfg(test)]
mod tests {
    use super::*;

    fn icon(url: &str) -> EmojiIcon {
        EmojiIcon {
            url: url.to_string(),
            file_name: url.rsplit('/').next().unwrap().to_string(),
        }
    }

    #[test]
    fn filters_out_names_already_on_disk() {
        let icons = vec![
            icon("https://cdn.example/a/grinning-face_1f600.png"),
            icon("https://cdn.example/a/rocket_1f680.png"),
            icon("https://cdn.example/a/waving-hand_1f44b.png"),
        ];
        let existing = HashMap::from([
            ("grinning-face_1f600.png".to_string(), true),
            ("rocket_1f680.png".to_string(), false),
        ]);

        let to_download = filter_new_icons(icons, &existing);

        assert_eq!(to_download.len(), 2);
        assert_eq!(to_download[0].file_name, "rocket_1f680.png");
        assert_eq!(to_download[1].file_name, "waving-hand_1f44b.png");
    }

    #[test]
    fn duplicate_names_within_one_listing_download_once() {
        let icons = vec![
            icon("https://cdn.example/a/rocket_1f680.png"),
            icon("https://cdn.example/b/rocket_1f680.png"),
        ];

        let to_download = filter_new_icons(icons, &HashMap::new());

        assert_eq!(to_download.len(), 1);
        assert_eq!(to_download[0].url, "https://cdn.example/a/rocket_1f680.png");
    }
}
