// Icon-grid extraction. Deliberately naive string scanning tailored to
// the emojipedia listing page structure; one grid `<ul>`, one `<li>` per
// emoji, one `<img>` per `<li>`.

use crate::emoji::{EmojiIcon, EmojipediaSite};
use std::io;

/// Extract every icon from the listing page markup.
///
/// Fails with `InvalidData` when the grid is missing or an entry carries
/// no usable image source; an unexpected page shape aborts the run.
pub fn extract_icons(html: &str) -> io::Result<Vec<EmojiIcon>> {
    let grid = grid_inner(html).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "No <ul class=\"{}\"> found in listing page",
                EmojipediaSite::get_grid_class()
            ),
        )
    })?;

    let mut icons = Vec::new();
    for item in list_items(grid) {
        let tag = img_tag(item).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                "Grid entry without an <img> tag",
            )
        })?;
        let url = image_source(tag).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                "Grid image without a usable source",
            )
        })?;
        let file_name = url.rsplit('/').next().unwrap_or(url).to_string();
        icons.push(EmojiIcon {
            url: url.to_string(),
            file_name,
        });
    }

    Ok(icons)
}

/// Pick the real image URL out of an `<img>` tag: the lazy-load attribute
/// when the visible `src` is the placeholder, else `src` verbatim.
fn image_source(tag: &str) -> Option<&str> {
    let src = attr_value(tag, "src")?;
    if src == EmojipediaSite::get_lazy_placeholder() {
        attr_value(tag, EmojipediaSite::get_lazy_attr())
    } else {
        Some(src)
    }
}

/// Inner markup of the grid `<ul>`, without the wrapping tags.
fn grid_inner(html: &str) -> Option<&str> {
    let class_pat = format!("class=\"{}\"", EmojipediaSite::get_grid_class());
    let class_idx = html.find(&class_pat)?;
    let ul_start = html[..class_idx].rfind("<ul")?;
    let after_open = ul_start + html[ul_start..].find('>')? + 1;
    let close_rel = html[after_open..].find("</ul>")?;
    Some(&html[after_open..after_open + close_rel])
}

/// Successive `<li>...</li>` blocks. Text between items is skipped
/// because scanning jumps from tag to tag.
fn list_items(grid: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut from = 0;
    while let Some(rel) = grid[from..].find("<li") {
        let start = from + rel;
        let end = match grid[start..].find("</li>") {
            Some(e) => start + e + "</li>".len(),
            None => grid.len(),
        };
        items.push(&grid[start..end]);
        from = end;
    }
    items
}

/// The first `<img ...>` tag inside a grid entry, including its brackets.
fn img_tag(item: &str) -> Option<&str> {
    let start = item.find("<img")?;
    let end = start + item[start..].find('>')? + 1;
    Some(&item[start..end])
}

/// Value of a double-quoted attribute. The leading space keeps `src`
/// from matching inside `data-src`.
fn attr_value<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let pat = format!(" {}=\"", name);
    let start = tag.find(&pat)? + pat.len();
    let end = start + tag[start..].find('"')?;
    Some(&tag[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(grid_body: &str) -> String {
        format!(
            "<html><body><ul class=\"emoji-grid\">{}</ul></body></html>",
            grid_body
        )
    }

    #[test]
    fn extracts_one_icon_per_grid_entry() {
        let html = page(concat!(
            "<li><a href=\"/a/\"><img src=\"https://cdn.example/img/apple/grinning-face_1f600.png\"></a></li>\n",
            "<li><a href=\"/b/\"><img src=\"https://cdn.example/img/apple/winking-face_1f609.png\"></a></li>",
        ));
        let icons = extract_icons(&html).unwrap();
        assert_eq!(icons.len(), 2);
        assert_eq!(icons[0].file_name, "grinning-face_1f600.png");
        assert_eq!(icons[1].url, "https://cdn.example/img/apple/winking-face_1f609.png");
    }

    #[test]
    fn lazy_placeholder_uses_data_src() {
        let html = page(
            "<li><img src=\"/static/img/lazy.svg\" data-src=\"https://cdn.example/img/apple/rocket_1f680.png\"></li>",
        );
        let icons = extract_icons(&html).unwrap();
        assert_eq!(icons[0].url, "https://cdn.example/img/apple/rocket_1f680.png");
        assert_eq!(icons[0].file_name, "rocket_1f680.png");
    }

    #[test]
    fn visible_src_wins_when_not_placeholder() {
        let html = page(
            "<li><img src=\"https://cdn.example/direct.png\" data-src=\"https://cdn.example/other.png\"></li>",
        );
        let icons = extract_icons(&html).unwrap();
        assert_eq!(icons[0].url, "https://cdn.example/direct.png");
    }

    #[test]
    fn text_between_items_is_ignored() {
        let html = page(
            "\n  stray text\n<li><img src=\"https://cdn.example/a_1f600.png\"></li>\n more text\n",
        );
        let icons = extract_icons(&html).unwrap();
        assert_eq!(icons.len(), 1);
    }

    #[test]
    fn missing_grid_is_an_error() {
        let err = extract_icons("<html><ul class=\"other\"></ul></html>").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn entry_without_img_is_an_error() {
        let html = page("<li><span>no image</span></li>");
        assert!(extract_icons(&html).is_err());
    }
}
