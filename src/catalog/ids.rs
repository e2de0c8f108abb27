use chrono::Utc;

/// Hands out identifiers derived from the wall clock in milliseconds.
///
/// Each id is strictly greater than the previous one, even when several are
/// issued within the same millisecond or the clock steps backwards.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> String {
        self.next_from(Utc::now().timestamp_millis())
    }

    fn next_from(&mut self, now_millis: i64) -> String {
        let id = if now_millis > self.last { now_millis } else { self.last + 1 };
        self.last = id;
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn rapid_ids_never_collide() {
        let mut ids = IdGenerator::new();
        let issued: HashSet<String> = (0..1000).map(|_| ids.next_id()).collect();
        assert_eq!(issued.len(), 1000);
    }

    #[test]
    fn same_or_earlier_clock_is_bumped() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_from(500), "500");
        assert_eq!(ids.next_from(500), "501");
        assert_eq!(ids.next_from(100), "502");
        assert_eq!(ids.next_from(900), "900");
    }
}
