use chrono::NaiveDateTime;
use serde::Serialize;

/// Semantic presentation class of a status.
///
/// The terminal layer maps tones to colors (`utils::colors::tone_color`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    Attended,
    Upcoming,
    Late,
    Absent,
    Sick,
    Flagged,
}

impl StatusTone {
    /// Palette lookup by status/category name, case-insensitive.
    pub fn for_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "attended" => StatusTone::Attended,
            "upcoming" => StatusTone::Upcoming,
            "late" => StatusTone::Late,
            "absent" | "awol" => StatusTone::Absent,
            "sick" => StatusTone::Sick,
            _ => StatusTone::Flagged,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTone::Attended => "attended",
            StatusTone::Upcoming => "upcoming",
            StatusTone::Late => "late",
            StatusTone::Absent => "absent",
            StatusTone::Sick => "sick",
            StatusTone::Flagged => "flagged",
        }
    }
}

/// Which rule classified the shift.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum StatusKind {
    Surplus,
    Flagged(String),
    DueIn(i64),
    Upcoming,
    Attended,
    Late,
    #[default]
    Absent,
}

impl StatusKind {
    pub fn label(&self) -> String {
        match self {
            StatusKind::Surplus => "Surplus".to_string(),
            StatusKind::Flagged(category) => category.clone(),
            StatusKind::DueIn(minutes) => {
                format!("Due in {}h {}m", minutes / 60, minutes % 60)
            }
            StatusKind::Upcoming => "Upcoming".to_string(),
            StatusKind::Attended => "Attended".to_string(),
            StatusKind::Late => "Late".to_string(),
            StatusKind::Absent => "Absent".to_string(),
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            StatusKind::Surplus => StatusTone::Flagged,
            StatusKind::Flagged(category) => StatusTone::for_name(category),
            StatusKind::DueIn(_) | StatusKind::Upcoming => StatusTone::Upcoming,
            StatusKind::Attended => StatusTone::Attended,
            StatusKind::Late => StatusTone::Late,
            StatusKind::Absent => StatusTone::Absent,
        }
    }

    /// True for statuses describing a shift that has not started yet.
    pub fn is_upcoming(&self) -> bool {
        matches!(self, StatusKind::DueIn(_) | StatusKind::Upcoming)
    }
}

/// Derived view model of a shift's attendance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedStatus {
    pub kind: StatusKind,
    pub label: String,
    pub tone: StatusTone,
    pub due: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DerivedStatus {
    pub fn new(kind: StatusKind, due: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            label: kind.label(),
            tone: kind.tone(),
            kind,
            due,
            end,
        }
    }

    /// Matches a filter option against the label; "Due in …" also answers
    /// to "Upcoming".
    pub fn matches_label(&self, option: &str) -> bool {
        self.label.eq_ignore_ascii_case(option)
            || (self.kind.is_upcoming() && option.eq_ignore_ascii_case("upcoming"))
    }
}
