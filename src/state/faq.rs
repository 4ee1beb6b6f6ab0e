//! FAQ accordion state

/// A question and its answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "Is this really free?",
        answer: "Yes! Your first week of content is completely free with no credit card required. We want you to experience the quality of our work before making any commitment. After your free week, you can choose to continue with one of our affordable plans.",
    },
    FaqEntry {
        question: "How are you different from my feed?",
        answer: "Unlike generic content, we create personalized content specifically for your brand, audience, and niche. Each piece is customized to match your voice, style, and goals.",
    },
    FaqEntry {
        question: "How long does it take for content to be created?",
        answer: "Your first free week of content will be delivered within 5-7 business days after you submit your brand information and preferences. For ongoing subscriptions, new content batches are delivered weekly.",
    },
    FaqEntry {
        question: "Can I get my content prioritized?",
        answer: "Yes! Priority members receive their content within 2-3 business days and get first access to new features and content types. Contact our team to learn more about upgrading to priority status.",
    },
    FaqEntry {
        question: "What happens if the free week ends?",
        answer: "You can subscribe to one of our paid plans to keep receiving content. There's no automatic billing, and you keep all the content from your free week either way.",
    },
    FaqEntry {
        question: "What if I don't like the content?",
        answer: "We offer unlimited revisions during your free week. If something isn't quite right, just let us know and we'll make it perfect.",
    },
];

/// Selection plus at most one expanded entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqState {
    pub selected: usize,
    pub open: Option<usize>,
}

impl FaqState {
    pub fn select_next(&mut self) {
        if self.selected + 1 < FAQ_ENTRIES.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Open the selected entry, or close it if it is already open
    pub fn toggle_selected(&mut self) {
        self.open = if self.open == Some(self.selected) {
            None
        } else {
            Some(self.selected)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}
