use crate::config::Config;
use crate::core::context::RotaContext;
use crate::core::rules::DerivationRules;
use crate::data::{RotaQuery, RotaSnapshot, SnapshotSource};
use crate::errors::AppResult;
use crate::models::user_state::UserDirectory;
use crate::utils::{date, time};
use chrono::NaiveDateTime;
use log::debug;

/// Snapshot, rules and evaluation time of one command run.
pub struct Session {
    pub snapshot: RotaSnapshot,
    pub users: UserDirectory,
    pub rules: DerivationRules,
    pub now: NaiveDateTime,
    pub query: RotaQuery,
}

impl Session {
    /// Resolve `--now` and the period (default: the day of `now`), then
    /// fetch the matching snapshot.
    pub fn open(
        cfg: &Config,
        now_arg: Option<&str>,
        period: Option<&str>,
        hr_id: Option<i64>,
    ) -> AppResult<Self> {
        let now = time::resolve_now(now_arg)?;
        let rules = cfg.rules();

        let query = match period {
            Some(p) => {
                let (start, end) = date::parse_period(p)?;
                RotaQuery::new(start, end)
            }
            None => RotaQuery::day(now.date()),
        }
        .with_hr_id(hr_id)
        .with_slack(rules.tolerance());

        let mut source = SnapshotSource::new(&cfg.data_path(), cfg.refresh_interval());
        let snapshot = source.fetch(&query)?;
        let users = snapshot.users();
        debug!("session at {now}: {} users in directory", users.len());

        Ok(Self {
            users,
            snapshot,
            rules,
            now,
            query,
        })
    }

    pub fn ctx(&self) -> RotaContext<'_> {
        RotaContext {
            timesheets: &self.snapshot.timesheets,
            events: &self.snapshot.events,
            users: &self.users,
            targets: &self.snapshot.targets,
            now: self.now,
            rules: &self.rules,
        }
    }

    pub fn period_label(&self) -> String {
        if self.query.start_date == self.query.end_date {
            self.query.start_date.to_string()
        } else {
            format!("{} → {}", self.query.start_date, self.query.end_date)
        }
    }
}
