/// Static category tag catalogue backing the tag selector and the
/// per-item icons in the expense list.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    pub label: &'static str,
    pub icon: &'static str,
}

pub const TAGS: [Tag; 9] = [
    Tag { label: "식비", icon: "🍚" },
    Tag { label: "카페", icon: "☕" },
    Tag { label: "교통", icon: "🚌" },
    Tag { label: "쇼핑", icon: "🛍️" },
    Tag { label: "문화생활", icon: "🎬" },
    Tag { label: "의료", icon: "💊" },
    Tag { label: "주거", icon: "🏠" },
    Tag { label: "저축", icon: "💰" },
    Tag { label: "기타", icon: "📦" },
];

/// Looks a label up in the catalogue, falling back to 기타 for
/// categories the catalogue does not know.
pub fn tag_for(label: &str) -> &'static Tag {
    TAGS.iter()
        .find(|tag| tag.label == label)
        .unwrap_or(&TAGS[TAGS.len() - 1])
}

/// Categories arrive as a comma-joined list; the first token is the
/// one shown in lists and used for filtering.
pub fn primary_category(category: &str) -> &str {
    category.split(',').next().unwrap_or(category).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_label_resolves_to_its_tag() {
        assert_eq!(tag_for("카페").icon, "☕");
    }

    #[test]
    fn unknown_label_falls_back_to_default() {
        assert_eq!(tag_for("복권").label, "기타");
    }

    #[test]
    fn primary_category_takes_first_token() {
        assert_eq!(primary_category("식비,외식"), "식비");
        assert_eq!(primary_category("교통"), "교통");
        assert_eq!(primary_category(" 카페 , 디저트"), "카페");
    }
}
