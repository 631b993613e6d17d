//! Facility category codes and their display labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label used for any code outside the known enumeration.
pub const GENERIC_TYPE_LABEL: &str = "長照機構";

/// Institutional category as encoded in the `機構種類` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FacilityType {
    /// `1`: home-based service provider.
    HomeBasedService,
    /// `A1`: elderly care center.
    ElderlyCareCenter,
    /// `A3`: nursing home.
    NursingHome,
    /// `B1`: home nursing agency.
    HomeNursingAgency,
    /// `B2`: hospital or clinic.
    HospitalOrClinic,
    /// `BF`: community development association.
    CommunityAssociation,
}

impl FacilityType {
    pub const ALL: [FacilityType; 6] = [
        FacilityType::HomeBasedService,
        FacilityType::ElderlyCareCenter,
        FacilityType::NursingHome,
        FacilityType::HomeNursingAgency,
        FacilityType::HospitalOrClinic,
        FacilityType::CommunityAssociation,
    ];

    /// Returns the code as it appears in the source dataset.
    pub fn code(&self) -> &'static str {
        match self {
            FacilityType::HomeBasedService => "1",
            FacilityType::ElderlyCareCenter => "A1",
            FacilityType::NursingHome => "A3",
            FacilityType::HomeNursingAgency => "B1",
            FacilityType::HospitalOrClinic => "B2",
            FacilityType::CommunityAssociation => "BF",
        }
    }

    /// Returns the human-readable label shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            FacilityType::HomeBasedService => "居家式服務類機構",
            FacilityType::ElderlyCareCenter => "老人養護中心",
            FacilityType::NursingHome => "護理之家",
            FacilityType::HomeNursingAgency => "居家護理所",
            FacilityType::HospitalOrClinic => "醫院或診所",
            FacilityType::CommunityAssociation => "社區發展協會",
        }
    }

    /// Exact, case-sensitive lookup by source code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Exact lookup by display label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }
}

/// Maps a type code to its label, falling back to [`GENERIC_TYPE_LABEL`].
pub fn label_for_code(code: &str) -> &'static str {
    FacilityType::from_code(code).map_or(GENERIC_TYPE_LABEL, |kind| kind.label())
}

impl fmt::Display for FacilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FacilityType {
    type Err = String;

    /// Accepts either the code (`A1`) or the label (`老人養護中心`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::from_code(trimmed)
            .or_else(|| Self::from_label(trimmed))
            .ok_or_else(|| format!("unknown facility type: {s}"))
    }
}
