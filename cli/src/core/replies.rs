//! # Reply Selection
//!
//! File: cli/src/core/replies.rs
//!
//! ## Overview
//!
//! Neutron does not understand language. It lowercases the user's text and looks
//! for keyword substrings, checking categories in a fixed priority order. The
//! first category with a matching keyword decides the reply; text that matches
//! nothing gets the "level-up" fallback.
//!
//! Matching is plain substring search, so "today" hits the planning keyword
//! "day" and "latest" hits the study keyword "test". A message mentioning both
//! an exam and a project is always answered with the study template because
//! study is checked first.
//!
//! Replies are fixed templates. User text is never interpolated into them.
//!
//! ## Examples
//!
//! ```rust
//! assert_eq!(classify("I have an exam tomorrow"), ReplyCategory::Study);
//! assert!(select_reply("I feel so stressed").starts_with("You are not a robot"));
//! ```
//!
use serde::Serialize;
use std::fmt;

/// Keyword categories, declared in match priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyCategory {
    Study,
    Project,
    Stress,
    Planning,
    Career,
    LevelUp,
}

/// Categories that are matched by keyword, highest priority first.
/// `LevelUp` is absent because it is the fallback.
const PRIORITY: [ReplyCategory; 5] = [
    ReplyCategory::Study,
    ReplyCategory::Project,
    ReplyCategory::Stress,
    ReplyCategory::Planning,
    ReplyCategory::Career,
];

const STUDY_REPLY: &str = "Study mode activated 📚🧠\n\
Tell me one subject and how much time you have. I will help you break it into clear, focused blocks so it feels manageable instead of overwhelming.";

const PROJECT_REPLY: &str = "Nice, you are in idea-lab mode 🚀\n\
Tell me in one or two sentences what you want to build. I will help you turn it into a simple, professional plan with concrete next steps.";

const STRESS_REPLY: &str = "You are not a robot, even if you hang out with one 🫂\n\
Let us do a quick reset: inhale for 4, hold for 4, exhale for 4.\n\
Then tell me one small win we can create together in the next 20 minutes.";

const PLANNING_REPLY: &str = "Planning time, my favorite kind of experiment 🧪\n\
Tell me your top three priorities for today or this week, and how many hours you honestly have. I will help you design a realistic, intelligent plan.";

const CAREER_REPLY: &str = "Career radar online 🎯\n\
Tell me what role you are aiming for and what you have done so far. I can help you with positioning, wording, and next actions to move closer to that role.";

const LEVEL_UP_REPLY: &str = "I like how you think ✨\n\
If you want, we can treat your life like a level-up game: habits, skills, and projects become XP.\n\
What is one area you would like to level up first: tech skills, discipline, creativity, confidence, or something else?";

impl ReplyCategory {
    /// Lowercase keywords that select this category. Empty for the fallback.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            ReplyCategory::Study => &["study", "exam", "test", "homework"],
            ReplyCategory::Project => &["project", "idea", "startup"],
            ReplyCategory::Stress => &["tired", "burnout", "stress", "stressed"],
            ReplyCategory::Planning => &["plan", "schedule", "day", "week"],
            ReplyCategory::Career => &["career", "job", "resume", "co-op"],
            ReplyCategory::LevelUp => &[],
        }
    }

    /// The fixed reply template for this category.
    pub fn template(self) -> &'static str {
        match self {
            ReplyCategory::Study => STUDY_REPLY,
            ReplyCategory::Project => PROJECT_REPLY,
            ReplyCategory::Stress => STRESS_REPLY,
            ReplyCategory::Planning => PLANNING_REPLY,
            ReplyCategory::Career => CAREER_REPLY,
            ReplyCategory::LevelUp => LEVEL_UP_REPLY,
        }
    }

    /// Stable snake_case label, as printed by `neutron ask --category`.
    pub fn label(self) -> &'static str {
        match self {
            ReplyCategory::Study => "study",
            ReplyCategory::Project => "project",
            ReplyCategory::Stress => "stress",
            ReplyCategory::Planning => "planning",
            ReplyCategory::Career => "career",
            ReplyCategory::LevelUp => "level_up",
        }
    }

    fn matches(self, normalized: &str) -> bool {
        self.keywords().iter().any(|kw| normalized.contains(kw))
    }
}

impl fmt::Display for ReplyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Picks the reply category for raw user text. First match in priority order wins.
pub fn classify(text: &str) -> ReplyCategory {
    let normalized = text.to_lowercase();
    PRIORITY
        .into_iter()
        .find(|category| category.matches(&normalized))
        .unwrap_or(ReplyCategory::LevelUp)
}

/// Maps raw user text to its reply template. Total: always returns a non-empty string.
pub fn select_reply(text: &str) -> &'static str {
    classify(text).template()
}
