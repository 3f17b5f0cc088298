use crate::card::DoctorCard;

/// Content area of the directory: either the card list or a single
/// placeholder node standing in for it.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryContent {
    Cards(Vec<DoctorCard>),
    Placeholder(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryView {
    pub content: DirectoryContent,
}

impl DirectoryView {
    pub fn empty() -> Self {
        Self {
            content: DirectoryContent::Cards(Vec::new()),
        }
    }

    pub fn cards(cards: Vec<DoctorCard>) -> Self {
        Self {
            content: DirectoryContent::Cards(cards),
        }
    }

    pub fn placeholder(text: &str) -> Self {
        Self {
            content: DirectoryContent::Placeholder(text.to_string()),
        }
    }

    pub fn card_count(&self) -> usize {
        match &self.content {
            DirectoryContent::Cards(cards) => cards.len(),
            DirectoryContent::Placeholder(_) => 0,
        }
    }
}
