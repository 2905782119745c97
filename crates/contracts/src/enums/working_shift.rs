use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WorkingShift {
    #[default]
    Morning,
    Afternoon,
    Night,
    FullTime,
    Other(String),
}

impl WorkingShift {
    pub fn code(&self) -> &str {
        match self {
            WorkingShift::Morning => "Morning",
            WorkingShift::Afternoon => "Afternoon",
            WorkingShift::Night => "Night",
            WorkingShift::FullTime => "Full-time",
            WorkingShift::Other(raw) => raw,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            WorkingShift::FullTime => "Full-Time",
            other => other.code(),
        }
    }

    /// Shifts offered by the registration and profile forms.
    pub fn all() -> Vec<WorkingShift> {
        vec![
            WorkingShift::Morning,
            WorkingShift::Afternoon,
            WorkingShift::Night,
            WorkingShift::FullTime,
        ]
    }

    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "morning" => WorkingShift::Morning,
            "afternoon" => WorkingShift::Afternoon,
            "night" => WorkingShift::Night,
            "full-time" | "fulltime" | "full time" => WorkingShift::FullTime,
            _ => WorkingShift::Other(code.to_string()),
        }
    }
}

impl From<String> for WorkingShift {
    fn from(value: String) -> Self {
        WorkingShift::from_code(&value)
    }
}

impl From<WorkingShift> for String {
    fn from(value: WorkingShift) -> Self {
        value.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_time_round_trips_with_hyphen() {
        let shift: WorkingShift = serde_json::from_str("\"Full-time\"").unwrap();
        assert_eq!(shift, WorkingShift::FullTime);
        assert_eq!(serde_json::to_string(&shift).unwrap(), "\"Full-time\"");
        assert_eq!(shift.display_name(), "Full-Time");
    }

    #[test]
    fn unknown_shift_is_preserved() {
        let shift = WorkingShift::from_code("Weekend");
        assert_eq!(shift.code(), "Weekend");
    }
}
