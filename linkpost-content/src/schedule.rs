//! Weekly posting schedule.

use chrono::{DateTime, Datelike, Days, Utc, Weekday};
use serde::Serialize;

/// A recurring weekly publishing window, in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PostingSlot {
    pub day: Weekday,
    /// Hour of day (0-23), UTC.
    pub hour: u32,
}

/// Best posting times for tech content. 09:00 UTC is 14:30 IST.
pub const OPTIMAL_TIMES: [PostingSlot; 3] = [
    PostingSlot {
        day: Weekday::Tue,
        hour: 9,
    },
    PostingSlot {
        day: Weekday::Wed,
        hour: 10,
    },
    PostingSlot {
        day: Weekday::Thu,
        hour: 8,
    },
];

/// Editorial theme for a weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentTheme {
    Motivation,
    TechnicalDeepDive,
    IndustryTrends,
    ToolsAndTips,
    CommunityDiscussion,
}

impl ContentTheme {
    /// Theme for `day`; weekends have none.
    #[must_use]
    pub const fn for_day(day: Weekday) -> Option<Self> {
        match day {
            Weekday::Mon => Some(Self::Motivation),
            Weekday::Tue => Some(Self::TechnicalDeepDive),
            Weekday::Wed => Some(Self::IndustryTrends),
            Weekday::Thu => Some(Self::ToolsAndTips),
            Weekday::Fri => Some(Self::CommunityDiscussion),
            Weekday::Sat | Weekday::Sun => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Motivation => "motivation",
            Self::TechnicalDeepDive => "technical-deep-dive",
            Self::IndustryTrends => "industry-trends",
            Self::ToolsAndTips => "tools-and-tips",
            Self::CommunityDiscussion => "community-discussion",
        }
    }
}

/// Earliest [`OPTIMAL_TIMES`] slot strictly after `after`.
///
/// Returns `None` only when the next slot falls outside chrono's
/// representable date range.
#[must_use]
pub fn next_posting_slot(after: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let today = after.date_naive();
    // Eight days covers a slot earlier today that has already passed.
    for offset in 0..=7 {
        let date = today.checked_add_days(Days::new(offset))?;
        let Some(slot) = OPTIMAL_TIMES.iter().find(|s| s.day == date.weekday()) else {
            continue;
        };
        let candidate = date.and_hms_opt(slot.hour, 0, 0)?.and_utc();
        if candidate > after {
            return Some(candidate);
        }
    }
    None
}
