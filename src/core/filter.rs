//! User-selectable shift filters.
//!
//! A filter owns a list of options, some of them checked, and a predicate
//! evaluated per (shift, option). A shift survives a filter set when every
//! filter with at least one checked option accepts it through at least one
//! of its checked options. Filters without checked options are no-ops.

use crate::core::calculator::status::derive_status;
use crate::core::context::RotaContext;
use crate::errors::{AppError, AppResult};
use crate::models::shift::Shift;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

pub trait ShiftPredicate {
    fn matches(&self, shift: &Shift, ctx: &RotaContext<'_>, option: &str) -> AppResult<bool>;
}

impl<F> ShiftPredicate for F
where
    F: Fn(&Shift, &RotaContext<'_>, &str) -> bool,
{
    fn matches(&self, shift: &Shift, ctx: &RotaContext<'_>, option: &str) -> AppResult<bool> {
        Ok(self(shift, ctx, option))
    }
}

/// Derived status label ("Late", "Sick", "Upcoming", …).
pub struct StatusPredicate;

impl ShiftPredicate for StatusPredicate {
    fn matches(&self, shift: &Shift, ctx: &RotaContext<'_>, option: &str) -> AppResult<bool> {
        let status = derive_status(shift, ctx.timesheets, ctx.events, ctx.now, ctx.rules)?;
        Ok(status.matches_label(option))
    }
}

/// `shiftloc`, case-insensitive.
pub struct LocationPredicate;

impl ShiftPredicate for LocationPredicate {
    fn matches(&self, shift: &Shift, _ctx: &RotaContext<'_>, option: &str) -> AppResult<bool> {
        Ok(eq_opt(shift.shiftloc.as_deref(), option))
    }
}

/// `shiftcat`, case-insensitive.
pub struct CategoryPredicate;

impl ShiftPredicate for CategoryPredicate {
    fn matches(&self, shift: &Shift, _ctx: &RotaContext<'_>, option: &str) -> AppResult<bool> {
        Ok(eq_opt(shift.shiftcat.as_deref(), option))
    }
}

/// Job title from the user directory (or the pseudo-shift's own title).
pub struct JobTitlePredicate;

impl ShiftPredicate for JobTitlePredicate {
    fn matches(&self, shift: &Shift, ctx: &RotaContext<'_>, option: &str) -> AppResult<bool> {
        let title = shift
            .job_title
            .as_deref()
            .or_else(|| ctx.users.job_title_of(shift.hr_id));
        Ok(eq_opt(title, option))
    }
}

fn eq_opt(value: Option<&str>, option: &str) -> bool {
    value.is_some_and(|v| v.trim().eq_ignore_ascii_case(option.trim()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub checked: bool,
}

pub struct Filter {
    pub name: String,
    pub options: Vec<FilterOption>,
    predicate: Box<dyn ShiftPredicate>,
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("name", &self.name)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Filter {
    pub fn new(name: &str, predicate: impl ShiftPredicate + 'static) -> Self {
        Self {
            name: name.to_string(),
            options: Vec::new(),
            predicate: Box::new(predicate),
        }
    }

    /// Built-in filter by name: `status`, `location`, `category` or `job`.
    pub fn builtin(name: &str) -> AppResult<Self> {
        let key = name.trim().to_lowercase();
        let filter = match key.as_str() {
            "status" => Filter::new(&key, StatusPredicate),
            "location" | "loc" => Filter::new("location", LocationPredicate),
            "category" | "cat" => Filter::new("category", CategoryPredicate),
            "job" | "job_title" => Filter::new("job", JobTitlePredicate),
            other => {
                return Err(AppError::InvalidFilter(format!(
                    "unknown filter '{other}' (expected status, location, category or job)"
                )));
            }
        };
        Ok(filter)
    }

    /// Parse a `NAME=V1,V2` expression into a built-in filter with the
    /// listed options checked.
    pub fn parse(expr: &str) -> AppResult<Self> {
        static EXPR: OnceLock<Regex> = OnceLock::new();
        let re = EXPR.get_or_init(|| {
            Regex::new(r"^\s*([A-Za-z_]+)\s*=\s*(.+?)\s*$").expect("valid filter regex")
        });

        let caps = re
            .captures(expr)
            .ok_or_else(|| AppError::InvalidFilter(format!("expected NAME=V1,V2, got '{expr}'")))?;

        let mut filter = Filter::builtin(&caps[1])?;
        for value in caps[2].split(',').map(str::trim).filter(|v| !v.is_empty()) {
            filter.check(value);
        }
        Ok(filter)
    }

    /// Add an unchecked option.
    pub fn with_option(mut self, value: &str) -> Self {
        self.options.push(FilterOption {
            value: value.to_string(),
            checked: false,
        });
        self
    }

    /// Check an option, adding it if missing.
    pub fn check(&mut self, value: &str) {
        match self.options.iter_mut().find(|o| o.value == value) {
            Some(opt) => opt.checked = true,
            None => self.options.push(FilterOption {
                value: value.to_string(),
                checked: true,
            }),
        }
    }

    pub fn uncheck(&mut self, value: &str) {
        if let Some(opt) = self.options.iter_mut().find(|o| o.value == value) {
            opt.checked = false;
        }
    }

    pub fn checked(&self) -> impl Iterator<Item = &str> {
        self.options
            .iter()
            .filter(|o| o.checked)
            .map(|o| o.value.as_str())
    }

    pub fn is_active(&self) -> bool {
        self.options.iter().any(|o| o.checked)
    }

    /// OR across the checked options.
    pub fn admits(&self, shift: &Shift, ctx: &RotaContext<'_>) -> AppResult<bool> {
        if !self.is_active() {
            return Ok(true);
        }

        for option in self.checked() {
            if self.predicate.matches(shift, ctx, option)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// AND across filters.
pub fn admits_all(filters: &[Filter], shift: &Shift, ctx: &RotaContext<'_>) -> AppResult<bool> {
    for filter in filters {
        if !filter.admits(shift, ctx)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Case-insensitive search over agent, location and category.
pub fn matches_search(shift: &Shift, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }

    [
        Some(shift.agent.as_str()),
        shift.shiftloc.as_deref(),
        shift.shiftcat.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(&term))
}
