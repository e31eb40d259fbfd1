//! Recommendation Tagger - short tags and an emoji for each member's pick.

use serde::{Deserialize, Serialize};

use crate::domain::group::MemberChoice;
use crate::domain::preference::Axis;

/// Most tags shown per member.
pub const MAX_TAGS: usize = 3;

/// Emoji used when no rule matches.
pub const FALLBACK_EMOJI: &str = "📍";

const DEFAULT_PURPOSE_TAGS: &[&str] = &["おでかけ"];

const PURPOSE_TAGS: &[(&str, &[&str])] = &[
    ("温泉", &["温泉", "癒し"]),
    ("グルメ", &["グルメ", "食べ歩き"]),
    ("観光", &["観光", "名所めぐり"]),
    ("自然", &["自然", "絶景"]),
    ("アウトドア", &["アウトドア", "体験"]),
    ("ショッピング", &["ショッピング", "街歩き"]),
    ("カフェ", &["カフェ", "まったり"]),
    ("アート", &["アート", "美術館"]),
];

/// Ordered: the first rule with a keyword found in any tag wins.
const EMOJI_RULES: &[(&[&str], &str)] = &[
    (&["温泉", "癒し"], "♨️"),
    (&["グルメ", "食べ歩き"], "🍜"),
    (&["カフェ"], "☕"),
    (&["自然", "絶景"], "🏞️"),
    (&["アウトドア", "体験", "アクティブ"], "🏕️"),
    (&["ショッピング", "街歩き"], "🛍️"),
    (&["アート", "美術館"], "🎨"),
    (&["観光", "名所"], "🗼"),
];

/// Tags and emoji for one member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub tags: Vec<String>,
    pub emoji: String,
}

/// Tagging functions.
pub struct RecommendationTagger;

impl RecommendationTagger {
    /// Tags for a member row.
    pub fn for_member(member: &MemberChoice) -> Recommendation {
        let condition = member.condition();
        Self::tag(
            member.selected_purpose.as_deref(),
            condition.categorical(Axis::SpendingStyle),
            member.selected_area.as_deref(),
        )
    }

    /// Builds tags from purpose, spending style, and area, in that order.
    ///
    /// Duplicates are dropped and at most [`MAX_TAGS`] are kept.
    pub fn tag(purpose: Option<&str>, spending_style: Option<&str>, area: Option<&str>) -> Recommendation {
        let mut tags: Vec<String> = Vec::new();
        let candidates = Self::purpose_tags(purpose)
            .iter()
            .copied()
            .chain(std::iter::once(Self::style_tag(spending_style)))
            .chain(area.map(str::trim).filter(|a| !a.is_empty()));

        for tag in candidates {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }
        tags.truncate(MAX_TAGS);

        let emoji = Self::emoji(&tags).to_string();
        Recommendation { tags, emoji }
    }

    /// Tags for a purpose, falling back to a generic tag.
    pub fn purpose_tags(purpose: Option<&str>) -> &'static [&'static str] {
        purpose
            .and_then(|p| PURPOSE_TAGS.iter().find(|(key, _)| *key == p.trim()))
            .map_or(DEFAULT_PURPOSE_TAGS, |(_, tags)| *tags)
    }

    /// Pace tag derived from spending style.
    pub fn style_tag(spending_style: Option<&str>) -> &'static str {
        match spending_style {
            Some("のんびり") | Some("まったり") => "ゆったり",
            Some("アクティブ") => "アクティブ",
            _ => "ほどよく",
        }
    }

    /// Emoji of the first rule matching any tag.
    pub fn emoji(tags: &[String]) -> &'static str {
        EMOJI_RULES
            .iter()
            .find(|(keywords, _)| {
                keywords
                    .iter()
                    .any(|k| tags.iter().any(|t| t.contains(k)))
            })
            .map_or(FALLBACK_EMOJI, |(_, emoji)| *emoji)
    }
}
