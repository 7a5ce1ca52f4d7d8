//! Remaining-time arithmetic for event countdowns.
//!
//! Everything here takes `now` as an argument so the component can feed it the
//! wall clock while tests feed it fixed instants.

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};

const WALL_CLOCK_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStyle {
    /// `0d 01h 00m 00s`, days always shown.
    Labeled,
    /// `01:00:00`, with a `2d ` prefix only past 24 hours.
    Clock,
}

/// Whole seconds left until a target, never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Remaining {
    total_secs: i64,
}

impl Remaining {
    pub const ZERO: Remaining = Remaining { total_secs: 0 };

    pub fn from_duration(duration: Duration) -> Self {
        Self {
            total_secs: duration.num_seconds().max(0),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.total_secs == 0
    }

    pub fn days(&self) -> i64 {
        self.total_secs / SECS_PER_DAY
    }

    pub fn hours(&self) -> i64 {
        (self.total_secs % SECS_PER_DAY) / SECS_PER_HOUR
    }

    pub fn minutes(&self) -> i64 {
        (self.total_secs % SECS_PER_HOUR) / SECS_PER_MINUTE
    }

    pub fn seconds(&self) -> i64 {
        self.total_secs % SECS_PER_MINUTE
    }

    pub fn format(&self, style: CountdownStyle) -> String {
        match style {
            CountdownStyle::Labeled => format!(
                "{}d {:02}h {:02}m {:02}s",
                self.days(),
                self.hours(),
                self.minutes(),
                self.seconds()
            ),
            CountdownStyle::Clock => {
                let clock = format!(
                    "{:02}:{:02}:{:02}",
                    self.hours(),
                    self.minutes(),
                    self.seconds()
                );
                if self.total_secs > SECS_PER_DAY {
                    format!("{}d {}", self.days(), clock)
                } else {
                    clock
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    target: DateTime<Utc>,
}

impl Countdown {
    /// Anchors a wall-clock instant in `tz`. Ambiguous local times take the
    /// earlier reading; nonexistent ones fall back to reading the clock as UTC.
    pub fn in_zone<Tz: TimeZone>(wall_clock: NaiveDateTime, tz: &Tz) -> Self {
        let target = match tz.from_local_datetime(&wall_clock).earliest() {
            Some(local) => local.with_timezone(&Utc),
            None => {
                log::warn!("{} does not exist in the configured zone, using UTC", wall_clock);
                Utc.from_utc_datetime(&wall_clock)
            }
        };
        Self { target }
    }

    pub fn parse_in_zone<Tz: TimeZone>(wall_clock: &str, tz: &Tz) -> Result<Self, chrono::ParseError> {
        let naive = NaiveDateTime::parse_from_str(wall_clock, WALL_CLOCK_FORMAT)?;
        Ok(Self::in_zone(naive, tz))
    }

    pub fn remaining_at(&self, now: DateTime<Utc>) -> Remaining {
        Remaining::from_duration(self.target - now)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Running(Remaining),
    Finished,
}

/// Display state of one mounted countdown.
///
/// The shown value only ever goes down: if the wall clock steps backwards the
/// previous reading is kept. Once zero is reached every later tick reports
/// [`Tick::Finished`].
#[derive(Debug, Clone)]
pub struct CountdownTicker {
    countdown: Countdown,
    shown: Remaining,
}

impl CountdownTicker {
    pub fn start(countdown: Countdown, now: DateTime<Utc>) -> Self {
        Self {
            countdown,
            shown: countdown.remaining_at(now),
        }
    }

    pub fn shown(&self) -> Remaining {
        self.shown
    }

    pub fn is_finished(&self) -> bool {
        self.shown.is_zero()
    }

    pub fn tick(&mut self, now: DateTime<Utc>) -> Tick {
        if self.is_finished() {
            return Tick::Finished;
        }
        self.shown = self.countdown.remaining_at(now).min(self.shown);
        if self.shown.is_zero() {
            Tick::Finished
        } else {
            Tick::Running(self.shown)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(wall_clock: &str) -> DateTime<Utc> {
        let naive = NaiveDateTime::parse_from_str(wall_clock, WALL_CLOCK_FORMAT).unwrap();
        Utc.from_utc_datetime(&naive)
    }

    fn utc_target(wall_clock: &str) -> Countdown {
        Countdown::parse_in_zone(wall_clock, &Utc).unwrap()
    }

    #[test]
    fn one_hour_before_target_reads_zero_days_one_hour() {
        let countdown = Countdown::parse_in_zone("2026-02-06T00:00:00", &Utc).unwrap();
        let remaining = countdown.remaining_at(at("2026-02-05T23:00:00"));
        assert_eq!(remaining.format(CountdownStyle::Labeled), "0d 01h 00m 00s");
        assert_eq!(remaining.format(CountdownStyle::Clock), "01:00:00");
    }

    #[test]
    fn same_wall_clock_in_any_zone_gives_the_same_distance() {
        let target = Countdown::parse_in_zone("2026-02-06T00:00:00", &chrono_tz::Asia::Kolkata).unwrap();
        // 23:00 IST is 17:30 UTC
        let remaining = target.remaining_at(at("2026-02-05T17:30:00"));
        assert_eq!(
            (remaining.days(), remaining.hours(), remaining.minutes(), remaining.seconds()),
            (0, 1, 0, 0)
        );
    }

    #[test]
    fn clock_style_shows_days_only_past_a_day() {
        let exactly_a_day = Remaining::from_duration(Duration::hours(24));
        assert_eq!(exactly_a_day.format(CountdownStyle::Clock), "00:00:00");

        let longer = Remaining::from_duration(Duration::hours(50) + Duration::seconds(7));
        assert_eq!(longer.format(CountdownStyle::Clock), "2d 02:00:07");
        assert_eq!(longer.format(CountdownStyle::Labeled), "2d 02h 00m 07s");
    }

    #[test]
    fn past_target_clamps_to_zero() {
        let countdown = utc_target("2026-02-06T00:00:00");
        let remaining = countdown.remaining_at(at("2026-02-07T12:00:00"));
        assert!(remaining.is_zero());
        assert_eq!(remaining.format(CountdownStyle::Labeled), "0d 00h 00m 00s");
    }

    #[test]
    fn ticker_started_after_target_is_already_finished() {
        let countdown = utc_target("2026-02-06T00:00:00");
        let mut ticker = CountdownTicker::start(countdown, at("2026-02-06T00:00:01"));
        assert!(ticker.is_finished());
        assert_eq!(ticker.tick(at("2026-02-06T00:00:02")), Tick::Finished);
    }

    #[test]
    fn ticker_is_monotonic_and_stays_at_zero() {
        let countdown = utc_target("2026-02-06T00:00:00");
        let start = at("2026-02-05T23:59:55");
        let mut ticker = CountdownTicker::start(countdown, start);

        let mut last = ticker.shown();
        for step in 1..=10 {
            let now = start + Duration::seconds(step);
            let tick = ticker.tick(now);
            assert!(ticker.shown() <= last);
            last = ticker.shown();
            if step >= 5 {
                assert_eq!(tick, Tick::Finished);
                assert!(ticker.shown().is_zero());
            }
        }
    }

    #[test]
    fn clock_stepping_backwards_does_not_count_up() {
        let countdown = utc_target("2026-02-06T00:00:00");
        let mut ticker = CountdownTicker::start(countdown, at("2026-02-05T23:00:00"));
        ticker.tick(at("2026-02-05T23:00:10"));
        let shown = ticker.shown();

        let tick = ticker.tick(at("2026-02-05T22:00:00"));
        assert_eq!(tick, Tick::Running(shown));
    }
}
