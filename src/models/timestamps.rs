use chrono::NaiveDateTime;

/// Hooks the store runs around writes so records carry their own
/// creation and modification times.
pub trait Timestamped {
    /// Called once, when the record is first stored.
    fn on_create(&mut self, now: NaiveDateTime);

    /// Called on every later modification. Must not touch the creation time.
    fn on_update(&mut self, now: NaiveDateTime);
}

pub fn now() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}
