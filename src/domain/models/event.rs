use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Adjustable quantities of an event package. Unit prices are fixed per
/// parameter and apply to the delta against the baseline value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdjustableParameter {
    PhotographyTeamSize,
    DurationHours,
    ExpectedAttendance,
    StaffTeamSize,
}

impl AdjustableParameter {
    pub const ALL: [AdjustableParameter; 4] = [
        AdjustableParameter::PhotographyTeamSize,
        AdjustableParameter::DurationHours,
        AdjustableParameter::ExpectedAttendance,
        AdjustableParameter::StaffTeamSize,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AdjustableParameter::PhotographyTeamSize => "photography_team_size",
            AdjustableParameter::DurationHours => "duration_hours",
            AdjustableParameter::ExpectedAttendance => "expected_attendance",
            AdjustableParameter::StaffTeamSize => "staff_team_size",
        }
    }

    /// Price charged per unit above the baseline value.
    pub fn unit_price(&self) -> i64 {
        match self {
            AdjustableParameter::PhotographyTeamSize => 300,
            AdjustableParameter::DurationHours => 1000,
            AdjustableParameter::ExpectedAttendance => 50,
            AdjustableParameter::StaffTeamSize => 500,
        }
    }
}

impl FromStr for AdjustableParameter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "photography_team_size" => Ok(AdjustableParameter::PhotographyTeamSize),
            "duration_hours" => Ok(AdjustableParameter::DurationHours),
            "expected_attendance" => Ok(AdjustableParameter::ExpectedAttendance),
            "staff_team_size" => Ok(AdjustableParameter::StaffTeamSize),
            other => Err(AppError::InvalidParameter(other.to_string())),
        }
    }
}

/// Immutable package definition fetched once per customization session.
/// The zero-point for all pricing deltas.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BaselineEvent {
    pub id: String,
    pub package_name: String,
    pub category: String,
    pub cart_image: String,
    pub images: Vec<String>,
    pub photography_team_size: i64,
    pub duration_hours: i64,
    pub expected_attendance: i64,
    pub staff_team_size: i64,
    pub videography: bool,
    pub features: Vec<String>,
}

impl BaselineEvent {
    pub fn parameter(&self, param: AdjustableParameter) -> i64 {
        match param {
            AdjustableParameter::PhotographyTeamSize => self.photography_team_size,
            AdjustableParameter::DurationHours => self.duration_hours,
            AdjustableParameter::ExpectedAttendance => self.expected_attendance,
            AdjustableParameter::StaffTeamSize => self.staff_team_size,
        }
    }
}

/// The user's in-progress edit of a baseline. Seeded as a deep copy at
/// session start and never persisted directly.
///
/// Invariant: every adjustable parameter stays >= 1.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CustomizedEvent {
    pub id: String,
    pub package_name: String,
    pub category: String,
    pub cart_image: String,
    pub images: Vec<String>,
    pub photography_team_size: i64,
    pub duration_hours: i64,
    pub expected_attendance: i64,
    pub staff_team_size: i64,
    pub videography: bool,
    pub features: Vec<String>,
}

impl From<&BaselineEvent> for CustomizedEvent {
    fn from(baseline: &BaselineEvent) -> Self {
        Self {
            id: baseline.id.clone(),
            package_name: baseline.package_name.clone(),
            category: baseline.category.clone(),
            cart_image: baseline.cart_image.clone(),
            images: baseline.images.clone(),
            photography_team_size: baseline.photography_team_size,
            duration_hours: baseline.duration_hours,
            expected_attendance: baseline.expected_attendance,
            staff_team_size: baseline.staff_team_size,
            videography: baseline.videography,
            features: baseline.features.clone(),
        }
    }
}

impl CustomizedEvent {
    pub fn parameter(&self, param: AdjustableParameter) -> i64 {
        match param {
            AdjustableParameter::PhotographyTeamSize => self.photography_team_size,
            AdjustableParameter::DurationHours => self.duration_hours,
            AdjustableParameter::ExpectedAttendance => self.expected_attendance,
            AdjustableParameter::StaffTeamSize => self.staff_team_size,
        }
    }

    pub(crate) fn set_parameter(&mut self, param: AdjustableParameter, value: i64) {
        match param {
            AdjustableParameter::PhotographyTeamSize => self.photography_team_size = value,
            AdjustableParameter::DurationHours => self.duration_hours = value,
            AdjustableParameter::ExpectedAttendance => self.expected_attendance = value,
            AdjustableParameter::StaffTeamSize => self.staff_team_size = value,
        }
    }
}
