use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The two vehicles the backend knows about.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum VehicleId {
    #[serde(rename = "splendor2018")]
    Splendor2018,
    #[serde(rename = "activa2020")]
    Activa2020,
}

impl VehicleId {
    pub const ALL: [VehicleId; 2] = [VehicleId::Splendor2018, VehicleId::Activa2020];

    /// Wire id, as sent in requests and used as the selector value.
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleId::Splendor2018 => "splendor2018",
            VehicleId::Activa2020 => "activa2020",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VehicleId::Splendor2018 => "2018 Splendor",
            VehicleId::Activa2020 => "2020 Activa",
        }
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleId {
    type Err = UnknownVehicle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "splendor2018" => Ok(VehicleId::Splendor2018),
            "activa2020" => Ok(VehicleId::Activa2020),
            _ => Err(UnknownVehicle(s.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown vehicle id: {0}")]
pub struct UnknownVehicle(pub String);

/// Display name for a raw id as reported by the server.
///
/// Any unrecognized id resolves to the Activa label instead of erroring.
/// Questionable, but it is what the shipped UI does; the server only ever
/// reports the two known ids.
pub fn display_name_for(raw: &str) -> &'static str {
    if raw == "splendor2018" {
        "2018 Splendor"
    } else {
        "2020 Activa"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_ids_round_trip() {
        for id in VehicleId::ALL {
            assert_eq!(id.as_str().parse::<VehicleId>(), Ok(id));
        }
        assert_eq!(
            serde_json::to_string(&VehicleId::Splendor2018).unwrap(),
            "\"splendor2018\""
        );
    }

    #[test]
    fn unknown_id_is_an_error() {
        assert!("scooty2019".parse::<VehicleId>().is_err());
        assert!("".parse::<VehicleId>().is_err());
    }

    #[test]
    fn display_names() {
        assert_eq!(VehicleId::Splendor2018.display_name(), "2018 Splendor");
        assert_eq!(VehicleId::Activa2020.display_name(), "2020 Activa");
    }

    #[test]
    fn raw_display_name_falls_back_to_activa() {
        assert_eq!(display_name_for("splendor2018"), "2018 Splendor");
        assert_eq!(display_name_for("activa2020"), "2020 Activa");
        // Unknown ids must not panic; they get the Activa label.
        assert_eq!(display_name_for("scooty2019"), "2020 Activa");
    }
}
