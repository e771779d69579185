pub const DEFAULT_CARD_MARKER: &str = ".blog-card";
pub const DEFAULT_CONTENT_MARKER: &str = ".blog-all-text";
pub const DEFAULT_DISPLAY_MARKER: &str = ".card-reading-time";

// CSS selectors the page markup uses to tag cards and their sub nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers{
    pub card: String,
    pub content: String,
    pub display: String,
}

impl Default for Markers{
    fn default() -> Markers{
        Markers{
            card: DEFAULT_CARD_MARKER.to_string(),
            content: DEFAULT_CONTENT_MARKER.to_string(),
            display: DEFAULT_DISPLAY_MARKER.to_string(),
        }
    }
}
