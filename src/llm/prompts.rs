//! System prompts for the email operations.

use std::fmt;

/// System prompt for email summarization.
pub const SUMMARIZE_SYSTEM_PROMPT: &str = r#"You are an AI assistant that summarizes emails.
Provide a concise, professional summary in 2-3 sentences.
Focus on the main points, action items, and key information."#;

/// System prompt for email classification.
pub const CLASSIFY_SYSTEM_PROMPT: &str = r#"You are an AI assistant that classifies emails.
Analyze the email content and return ONLY ONE of these categories:
- work
- personal
- important
- spam
- newsletter
- social
- other

Return only the category name, nothing else."#;

/// The closed set of labels the classifier is instructed to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailCategory {
    Work,
    Personal,
    Important,
    Spam,
    Newsletter,
    Social,
    Other,
}

impl EmailCategory {
    pub const ALL: [EmailCategory; 7] = [
        EmailCategory::Work,
        EmailCategory::Personal,
        EmailCategory::Important,
        EmailCategory::Spam,
        EmailCategory::Newsletter,
        EmailCategory::Social,
        EmailCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmailCategory::Work => "work",
            EmailCategory::Personal => "personal",
            EmailCategory::Important => "important",
            EmailCategory::Spam => "spam",
            EmailCategory::Newsletter => "newsletter",
            EmailCategory::Social => "social",
            EmailCategory::Other => "other",
        }
    }

    /// Match a label exactly as emitted (surrounding whitespace ignored).
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|c| c.as_str() == label)
    }
}

impl fmt::Display for EmailCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_prompt_lists_every_category() {
        for category in EmailCategory::ALL {
            assert!(
                CLASSIFY_SYSTEM_PROMPT.contains(&format!("- {}", category)),
                "missing {category}"
            );
        }
    }

    #[test]
    fn test_from_label() {
        assert_eq!(EmailCategory::from_label("spam"), Some(EmailCategory::Spam));
        assert_eq!(EmailCategory::from_label(" work\n"), Some(EmailCategory::Work));
        assert_eq!(EmailCategory::from_label("Work"), None);
        assert_eq!(EmailCategory::from_label("Category: work"), None);
    }
}
