use crate::utils::date::opt_datetime;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Directory entry from `GET /users/active-states`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserState {
    pub hr_id: i64,
    pub name: String,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default, with = "opt_datetime")]
    pub last_active: Option<NaiveDateTime>,
}

/// Lookup of user states by `hr_id`.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    by_hr_id: HashMap<i64, UserState>,
}

impl UserDirectory {
    pub fn new(states: &[UserState]) -> Self {
        Self {
            by_hr_id: states.iter().map(|s| (s.hr_id, s.clone())).collect(),
        }
    }

    pub fn get(&self, hr_id: i64) -> Option<&UserState> {
        self.by_hr_id.get(&hr_id)
    }

    pub fn name_of(&self, hr_id: i64) -> &str {
        self.get(hr_id).map(|u| u.name.as_str()).unwrap_or("Unknown")
    }

    pub fn job_title_of(&self, hr_id: i64) -> Option<&str> {
        self.get(hr_id).and_then(|u| u.job_title.as_deref())
    }

    pub fn len(&self) -> usize {
        self.by_hr_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_hr_id.is_empty()
    }
}

/// Expected utilisation for a shift category, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilisationTarget {
    pub shiftcat: String,
    pub target: u32,
}

/// Finds the target of a category (case-insensitive).
pub fn target_for<'a>(targets: &'a [UtilisationTarget], shiftcat: Option<&str>) -> Option<&'a UtilisationTarget> {
    let cat = shiftcat?;
    targets.iter().find(|t| t.shiftcat.eq_ignore_ascii_case(cat))
}
