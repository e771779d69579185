use serde::{Deserialize, Serialize};

/// One blog entry. `None` means the page has no such node for this card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card{
    pub content: Option<String>,
    pub display: Option<String>,
}
