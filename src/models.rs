use std::{fmt, str::FromStr};

use sqlx::FromRow;
use time::{Date, Time};

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Club {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Room {
    pub id: i64,
    pub building: Option<String>,
    pub number: Option<String>,
    pub max_capacity: Option<i64>,
}

impl Room {
    /// "A101" style label, the way rooms are named on the forms.
    pub fn label(&self) -> String {
        format!(
            "{}{}",
            self.building.as_deref().unwrap_or_default(),
            self.number.as_deref().unwrap_or_default()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Meeting {
    pub id: i64,
    pub date: Date,
    pub time: Time,
    /// Minutes.
    pub duration: Option<i64>,
    pub description: Option<String>,
    pub club_id: i64,
    pub room_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct MeetingOrganizer {
    pub meeting_id: i64,
    pub student_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
pub enum RsvpStatus {
    Yes,
    No,
    Maybe,
}

impl RsvpStatus {
    pub fn as_str(&self) -> &'static str {
        use RsvpStatus::*;
        match self {
            Yes => "yes",
            No => "no",
            Maybe => "maybe",
        }
    }
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "'{}' is not a valid RSVP status", self.0)
    }
}

impl FromStr for RsvpStatus {
    type Err = UnknownStatus;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" => Ok(RsvpStatus::Yes),
            "no" => Ok(RsvpStatus::No),
            "maybe" => Ok(RsvpStatus::Maybe),
            _ => Err(UnknownStatus(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Rsvp {
    pub rsvp_id: i64,
    pub meeting_id: i64,
    pub student_id: i64,
    pub status: RsvpStatus,
}

/// A meeting joined with the names the listing pages show.
#[derive(Debug, Clone, FromRow)]
pub struct MeetingListing {
    pub id: i64,
    pub date: Date,
    pub time: Time,
    pub duration: Option<i64>,
    pub description: Option<String>,
    pub club_name: String,
    pub building: Option<String>,
    pub number: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct RsvpListing {
    pub rsvp_id: i64,
    pub meeting_id: i64,
    pub date: Date,
    pub time: Time,
    pub student_id: i64,
    pub student_name: String,
    pub status: RsvpStatus,
}

#[derive(Debug, Clone, FromRow)]
pub struct OrganizerListing {
    pub meeting_id: i64,
    pub date: Date,
    pub student_id: i64,
    pub student_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_ignores_case() {
        assert_eq!("YES".parse::<RsvpStatus>(), Ok(RsvpStatus::Yes));
        assert_eq!(" Maybe ".parse::<RsvpStatus>(), Ok(RsvpStatus::Maybe));
        assert_eq!("no".parse::<RsvpStatus>(), Ok(RsvpStatus::No));
        assert!("perhaps".parse::<RsvpStatus>().is_err());
    }

    #[test]
    fn room_label_joins_building_and_number() {
        let room = Room {
            id: 1,
            building: Some("A".into()),
            number: Some("101".into()),
            max_capacity: Some(30),
        };
        assert_eq!(room.label(), "A101");
    }
}
