/// Classification of the raw `Status` string reported by SportsDataIO.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Final,
    InProgress,
    Scheduled,
    Other,
}

impl GameStatus {
    /// Exact, case-sensitive match. Variants such as "F/OT" or "Postponed" fall into `Other`.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("Final") => GameStatus::Final,
            Some("InProgress") => GameStatus::InProgress,
            Some("Scheduled") => GameStatus::Scheduled,
            _ => GameStatus::Other,
        }
    }
}
