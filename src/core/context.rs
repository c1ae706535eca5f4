use crate::core::rules::DerivationRules;
use crate::models::event::Event;
use crate::models::timesheet::Timesheet;
use crate::models::user_state::{UserDirectory, UtilisationTarget};
use chrono::NaiveDateTime;

/// Everything a derivation needs besides the shift itself: the punches,
/// events and directory of the snapshot, the evaluation time and the rules.
#[derive(Debug, Clone, Copy)]
pub struct RotaContext<'a> {
    pub timesheets: &'a [Timesheet],
    pub events: &'a [Event],
    pub users: &'a UserDirectory,
    pub targets: &'a [UtilisationTarget],
    pub now: NaiveDateTime,
    pub rules: &'a DerivationRules,
}
