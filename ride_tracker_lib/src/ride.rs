use serde::{Deserialize, Serialize};

use crate::vehicle::VehicleId;

/// Fuel level below this percentage of tank capacity is flagged as low.
pub const LOW_FUEL_PERCENT: f64 = 25.0;

/// Response of the capacity lookup, `GET /get_vehicle_capacity`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CapacityResponse {
    /// Tank capacity in liters.
    pub capacity: f64,
}

/// Body of `POST /start_ride`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StartRideRequest {
    pub vehicle: VehicleId,
    /// Money spent on fuel, in rupees.
    pub fuel: f64,
    /// Requested distance in km. The server defaults to 50 when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl StartRideRequest {
    pub fn new(vehicle: VehicleId, fuel: f64) -> Self {
        Self {
            vehicle,
            fuel,
            distance: None,
        }
    }
}

/// Response of `POST /start_ride`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StartRideResponse {
    pub fuel_in_liters: f64,
}

/// Trip statistics returned by `GET /end_ride`.
///
/// The vehicle id stays a raw string here: it is display-only and the UI
/// must not fall over if the server reports an id it does not know.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RideSummary {
    pub vehicle: String,
    pub fuel_in_liters: f64,
    pub fuel_filled_rs: f64,
    pub distance: f64,
    pub mileage: f64,
    pub fuel_used: f64,
    pub fuel_left: f64,
    pub fuel_percent: f64,
    pub alert: String,
}

impl RideSummary {
    pub fn fuel_level(&self) -> FuelLevel {
        FuelLevel::from_percent(self.fuel_percent)
    }
}

/// Error body the server sends on failed start/end requests.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuelLevel {
    Low,
    Normal,
}

impl FuelLevel {
    /// Boundary is inclusive-high: 25% is still Normal.
    pub fn from_percent(percent: f64) -> Self {
        if percent < LOW_FUEL_PERCENT {
            FuelLevel::Low
        } else {
            FuelLevel::Normal
        }
    }

    /// Style class for the end-of-ride alert text.
    pub fn alert_class(&self) -> &'static str {
        match self {
            FuelLevel::Low => "text-red-600",
            FuelLevel::Normal => "text-green-600",
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FuelInputError {
    #[error("no fuel amount entered")]
    Empty,
    #[error("fuel amount is not a number")]
    NotANumber,
    #[error("fuel amount must be positive")]
    NotPositive,
}

/// Validates the raw fuel field (₹ spent). Must parse to a finite
/// positive number; no request is made otherwise.
pub fn validate_fuel_amount(raw: &str) -> Result<f64, FuelInputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FuelInputError::Empty);
    }
    let amount: f64 = trimmed.parse().map_err(|_| FuelInputError::NotANumber)?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(FuelInputError::NotPositive);
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_request_omits_absent_distance() {
        let body = StartRideRequest::new(VehicleId::Splendor2018, 200.0);
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"vehicle":"splendor2018","fuel":200.0}"#
        );
    }

    #[test]
    fn start_request_carries_distance_when_set() {
        let mut body = StartRideRequest::new(VehicleId::Activa2020, 150.0);
        body.distance = Some(30.0);
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains(r#""distance":30.0"#));
    }

    #[test]
    fn ride_summary_parses_end_ride_response() {
        let json = r#"{
            "vehicle": "splendor2018",
            "fuel_in_liters": 2.0,
            "fuel_filled_rs": 200,
            "distance": 50.0,
            "mileage": 60,
            "fuel_used": 0.83,
            "fuel_left": 1.17,
            "fuel_percent": 10.64,
            "alert": "Fuel low, refill soon"
        }"#;
        let summary: RideSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.vehicle, "splendor2018");
        assert_eq!(summary.fuel_level(), FuelLevel::Low);
    }

    #[test]
    fn error_body_parse_fails_on_mismatched_shape() {
        // Anything that is not {error: string} must be rejected so the
        // caller falls back to its fixed message.
        assert!(serde_json::from_str::<ApiErrorBody>(r#"{"detail":"nope"}"#).is_err());
        assert!(serde_json::from_str::<ApiErrorBody>("[]").is_err());
        let ok: ApiErrorBody = serde_json::from_str(r#"{"error":"Vehicle not found"}"#).unwrap();
        assert_eq!(ok.error, "Vehicle not found");
    }

    #[test]
    fn fuel_level_boundary_at_25() {
        assert_eq!(FuelLevel::from_percent(24.0), FuelLevel::Low);
        assert_eq!(FuelLevel::from_percent(24.99), FuelLevel::Low);
        assert_eq!(FuelLevel::from_percent(25.0), FuelLevel::Normal);
        assert_eq!(FuelLevel::from_percent(80.0), FuelLevel::Normal);
    }

    #[test]
    fn alert_classes() {
        assert_eq!(FuelLevel::Low.alert_class(), "text-red-600");
        assert_eq!(FuelLevel::Normal.alert_class(), "text-green-600");
    }

    #[test]
    fn fuel_validation_rejects_bad_input() {
        assert_eq!(validate_fuel_amount(""), Err(FuelInputError::Empty));
        assert_eq!(validate_fuel_amount("   "), Err(FuelInputError::Empty));
        assert_eq!(validate_fuel_amount("abc"), Err(FuelInputError::NotANumber));
        assert_eq!(validate_fuel_amount("0"), Err(FuelInputError::NotPositive));
        assert_eq!(validate_fuel_amount("-50"), Err(FuelInputError::NotPositive));
        assert_eq!(validate_fuel_amount("inf"), Err(FuelInputError::NotPositive));
    }

    #[test]
    fn fuel_validation_accepts_positive_amounts() {
        assert_eq!(validate_fuel_amount("200"), Ok(200.0));
        assert_eq!(validate_fuel_amount(" 99.5 "), Ok(99.5));
    }
}
