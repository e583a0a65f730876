use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime, Weekday};
use derive_getters::Getters;
use derive_new::new;
use tracing::debug;

use crate::models::Trigger;

pub const WEEKDAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct Job {
    weekday: Weekday,
    at: NaiveTime,
    trigger: Trigger,
}

impl Job {
    /// First occurrence of this job strictly after `after`.
    pub fn next_occurrence(&self, after: NaiveDateTime) -> NaiveDateTime {
        let days_ahead = (7 + self.weekday.num_days_from_monday()
            - after.weekday().num_days_from_monday())
            % 7;
        let candidate = (after.date() + Duration::days(days_ahead as i64)).and_time(self.at);

        if candidate <= after {
            candidate + Duration::days(7)
        } else {
            candidate
        }
    }
}

pub const MARKET_OPEN_AT: NaiveTime = match NaiveTime::from_hms_opt(17, 30, 0) {
    Some(time) => time,
    None => panic!("invalid market open time"),
};
pub const MARKET_CLOSE_AT: NaiveTime = NaiveTime::MIN;

/// Market open at 17:30 and market close at 00:00, Monday to Friday.
pub fn weekday_jobs() -> Vec<Job> {
    let opens = WEEKDAYS
        .iter()
        .map(|day| Job::new(*day, MARKET_OPEN_AT, Trigger::MarketOpen));
    let closes = WEEKDAYS
        .iter()
        .map(|day| Job::new(*day, MARKET_CLOSE_AT, Trigger::MarketClose));

    opens.chain(closes).collect()
}

#[derive(Clone, Debug)]
pub struct Scheduler {
    jobs: Vec<(Job, NaiveDateTime)>,
}

impl Scheduler {
    /// Jobs are first due at their next occurrence after `now`; earlier slots are never run.
    pub fn new(jobs: Vec<Job>, now: NaiveDateTime) -> Self {
        let jobs = jobs
            .into_iter()
            .map(|job| {
                let next_run = job.next_occurrence(now);
                (job, next_run)
            })
            .collect();
        Self { jobs }
    }

    pub fn jobs(&self) -> impl Iterator<Item = &Job> {
        self.jobs.iter().map(|(job, _)| job)
    }

    pub fn next_run(&self) -> Option<NaiveDateTime> {
        self.jobs.iter().map(|(_, next_run)| *next_run).min()
    }

    /// Returns the triggers due at `now` in job order and reschedules each of them
    /// to its next occurrence after `now`.
    pub fn due(&mut self, now: NaiveDateTime) -> Vec<Trigger> {
        let mut due = Vec::new();

        for (job, next_run) in self.jobs.iter_mut() {
            if *next_run <= now {
                debug!(trigger = %job.trigger(), scheduled = %next_run, "Job due");
                due.push(*job.trigger());
                *next_run = job.next_occurrence(now);
            }
        }

        due
    }
}
