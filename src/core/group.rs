//! Calendar grouping of shifts: date → group key → shifts.

use crate::core::context::RotaContext;
use crate::core::filter::{Filter, admits_all, matches_search};
use crate::errors::AppResult;
use crate::models::shift::Shift;
use crate::models::time_of_day::TimeOfDay;
use crate::models::timesheet::Timesheet;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::ValueEnum;
use log::debug;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GroupKey {
    Window { start: TimeOfDay, end: TimeOfDay },
    Label { value: String },
    Unallocated,
}

impl GroupKey {
    pub fn window(start: TimeOfDay, end: TimeOfDay) -> Self {
        GroupKey::Window { start, end }
    }

    pub fn label(value: &str) -> Self {
        GroupKey::Label {
            value: value.to_string(),
        }
    }

    /// Minutes-since-midnight span of a window key; overnight windows end
    /// past 24:00.
    fn span(&self) -> Option<(i64, i64)> {
        match self {
            GroupKey::Window { start, end } => {
                let s = start.minutes_since_midnight();
                let mut e = end.minutes_since_midnight();
                if e < s {
                    e += 24 * 60;
                }
                Some((s, e))
            }
            _ => None,
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Window { start, end } => write!(f, "{start}-{end}"),
            GroupKey::Label { value } => write!(f, "{value}"),
            GroupKey::Unallocated => write!(f, "unallocated"),
        }
    }
}

/// Built-in group-by functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum GroupBy {
    #[default]
    Time,
    Location,
    Category,
    Agent,
}

impl GroupBy {
    pub fn key(&self, shift: &Shift) -> GroupKey {
        match self {
            GroupBy::Time => GroupKey::window(shift.shiftstart, shift.shiftend),
            GroupBy::Location => GroupKey::label(shift.shiftloc.as_deref().unwrap_or("-")),
            GroupBy::Category => GroupKey::label(shift.shiftcat.as_deref().unwrap_or("-")),
            GroupBy::Agent => GroupKey::label(shift.display_agent()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftGroup {
    pub key: GroupKey,
    pub shifts: Vec<Shift>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupedShifts {
    pub days: BTreeMap<NaiveDate, Vec<ShiftGroup>>,
}

impl GroupedShifts {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn groups(&self, date: NaiveDate) -> &[ShiftGroup] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn group(&self, date: NaiveDate, key: &GroupKey) -> Option<&ShiftGroup> {
        self.groups(date).iter().find(|g| &g.key == key)
    }

    pub fn shift_count(&self) -> usize {
        self.days
            .values()
            .flat_map(|groups| groups.iter())
            .map(|g| g.shifts.len())
            .sum()
    }
}

#[derive(Debug, Default)]
pub struct GroupOptions<'a> {
    pub merge: bool,
    pub filters: &'a [Filter],
    pub search: Option<&'a str>,
}

pub fn group_shifts<F>(
    shifts: &[Shift],
    group_by: F,
    ctx: &RotaContext<'_>,
    opts: &GroupOptions<'_>,
) -> AppResult<GroupedShifts>
where
    F: Fn(&Shift) -> GroupKey,
{
    // -----------------------------
    // Sort and bucket
    // -----------------------------
    let mut sorted = shifts.to_vec();
    sorted.sort_by_key(|s| s.shiftstart);

    let mut days: BTreeMap<NaiveDate, Vec<ShiftGroup>> = BTreeMap::new();

    for shift in sorted {
        let key = group_by(&shift);
        let groups = days.entry(shift.shiftdate).or_default();

        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.shifts.push(shift),
            None => groups.push(ShiftGroup {
                key,
                shifts: vec![shift],
            }),
        }
    }

    if opts.merge {
        for groups in days.values_mut() {
            *groups = merge_nested_windows(std::mem::take(groups));
        }
    }

    // -----------------------------
    // Orphan punches
    // -----------------------------
    for (date, pseudo) in unallocated_shifts(shifts, ctx) {
        days.entry(date).or_default().push(ShiftGroup {
            key: GroupKey::Unallocated,
            shifts: pseudo,
        });
    }

    // -----------------------------
    // Filters, search, pruning
    // -----------------------------
    let search = opts.search.map(str::trim).filter(|t| !t.is_empty());

    for groups in days.values_mut() {
        for group in groups.iter_mut() {
            let mut kept = Vec::with_capacity(group.shifts.len());
            for shift in group.shifts.drain(..) {
                if search.is_some_and(|term| !matches_search(&shift, term)) {
                    continue;
                }
                if admits_all(opts.filters, &shift, ctx)? {
                    kept.push(shift);
                }
            }
            group.shifts = kept;
        }
        groups.retain(|g| !g.shifts.is_empty());
    }
    days.retain(|_, groups| !groups.is_empty());

    Ok(GroupedShifts { days })
}

/// Absorb window buckets nested inside a wider window into it.
/// Buckets are visited by start ascending, end descending; non-window
/// buckets keep their place after the merged windows.
fn merge_nested_windows(groups: Vec<ShiftGroup>) -> Vec<ShiftGroup> {
    let (mut windows, others): (Vec<ShiftGroup>, Vec<ShiftGroup>) =
        groups.into_iter().partition(|g| g.key.span().is_some());

    windows.sort_by_key(|g| {
        let (s, e) = g.key.span().unwrap_or_default();
        (s, -e)
    });

    let mut merged: Vec<ShiftGroup> = Vec::with_capacity(windows.len());

    for group in windows {
        if let Some(current) = merged.last_mut()
            && is_nested(&group.key, &current.key)
        {
            debug!("merging window {} into {}", group.key, current.key);
            current.shifts.extend(group.shifts);
            current.shifts.sort_by_key(|s| s.shiftstart);
            continue;
        }
        merged.push(group);
    }

    merged.extend(others);
    merged
}

fn is_nested(inner: &GroupKey, outer: &GroupKey) -> bool {
    match (inner.span(), outer.span()) {
        (Some((is, ie)), Some((os, oe))) => is >= os && ie <= oe,
        _ => false,
    }
}

/// One pseudo-shift per employee and day for punches of employees with no
/// shift in `shifts`, spanning the first clock-on to the last clock-off.
fn unallocated_shifts(
    shifts: &[Shift],
    ctx: &RotaContext<'_>,
) -> BTreeMap<NaiveDate, Vec<Shift>> {
    let scheduled: HashSet<i64> = shifts.iter().map(|s| s.hr_id).collect();

    let mut punches: BTreeMap<(NaiveDate, i64), Vec<&Timesheet>> = BTreeMap::new();
    for ts in ctx.timesheets.iter().filter(|t| !scheduled.contains(&t.hr_id)) {
        punches.entry((ts.work_date(), ts.hr_id)).or_default().push(ts);
    }

    let mut out: BTreeMap<NaiveDate, Vec<Shift>> = BTreeMap::new();

    for ((date, hr_id), list) in punches {
        let Some(first_on) = list.iter().map(|t| t.on_time).min() else {
            continue;
        };
        let last_off = list
            .iter()
            .map(|t| t.off_or(ctx.now))
            .max()
            .unwrap_or(first_on);
        let last_off = clamp_to_day(last_off.max(first_on), date);

        out.entry(date).or_default().push(Shift {
            unq_id: None,
            hr_id,
            shiftdate: date,
            shiftstart: TimeOfDay::from(first_on.time()),
            shiftend: TimeOfDay::from(last_off.time()),
            shiftcat: None,
            shiftloc: None,
            agent: ctx.users.name_of(hr_id).to_string(),
            job_title: ctx.users.job_title_of(hr_id).map(str::to_string),
            unallocated: true,
        });
    }

    for list in out.values_mut() {
        list.sort_by_key(|s| s.shiftstart);
    }
    out
}

fn clamp_to_day(ts: NaiveDateTime, date: NaiveDate) -> NaiveDateTime {
    if ts.date() > date {
        date.and_time(NaiveTime::from_hms_opt(23, 59, 0).unwrap_or(NaiveTime::MIN))
    } else {
        ts
    }
}
