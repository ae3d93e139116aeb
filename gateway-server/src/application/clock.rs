use chrono::{DateTime, SecondsFormat, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Millisecond-precision UTC timestamp, e.g. `2024-01-15T08:30:00.000Z`.
pub(crate) fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{DateTime, TimeZone, Utc};

    use super::Clock;

    #[derive(Debug, Clone, Copy)]
    pub(crate) struct FixedClock(pub(crate) DateTime<Utc>);

    impl FixedClock {
        pub(crate) fn at_millis(millis: i64) -> Self {
            Self(
                Utc.timestamp_millis_opt(millis)
                    .single()
                    .expect("valid timestamp"),
            )
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }
}
