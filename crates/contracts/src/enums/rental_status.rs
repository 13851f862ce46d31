use serde::{Deserialize, Serialize};

/// Lifecycle of a rental, transported as an integer code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum RentalStatus {
    Active,
    Returned,
    Cancelled,
    NotReturned,
    Loss,
    Unknown(i32),
}

impl RentalStatus {
    pub fn code(&self) -> i32 {
        match self {
            RentalStatus::Active => 1,
            RentalStatus::Returned => 2,
            RentalStatus::Cancelled => 3,
            RentalStatus::NotReturned => 4,
            RentalStatus::Loss => 5,
            RentalStatus::Unknown(code) => *code,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RentalStatus::Active => "Active",
            RentalStatus::Returned => "Returned",
            RentalStatus::Cancelled => "Cancelled",
            RentalStatus::NotReturned => "Not Returned",
            RentalStatus::Loss => "Loss",
            RentalStatus::Unknown(_) => "Unknown",
        }
    }
}

impl From<i32> for RentalStatus {
    fn from(code: i32) -> Self {
        match code {
            1 => RentalStatus::Active,
            2 => RentalStatus::Returned,
            3 => RentalStatus::Cancelled,
            4 => RentalStatus::NotReturned,
            5 => RentalStatus::Loss,
            other => RentalStatus::Unknown(other),
        }
    }
}

impl From<RentalStatus> for i32 {
    fn from(status: RentalStatus) -> Self {
        status.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        for code in 1..=5 {
            assert_eq!(RentalStatus::from(code).code(), code);
        }
        assert_eq!(RentalStatus::from(4).display_name(), "Not Returned");
        assert_eq!(RentalStatus::from(9).display_name(), "Unknown");
    }

    #[test]
    fn test_serde_as_integer() {
        let status: RentalStatus = serde_json::from_str("2").unwrap();
        assert_eq!(status, RentalStatus::Returned);
        assert_eq!(serde_json::to_string(&RentalStatus::Loss).unwrap(), "5");
    }
}
