use gloo_net::http::{Request, Response};
use ride_tracker_lib::chat::{ChatRequest, ChatResponse};
use ride_tracker_lib::ride::{
    ApiErrorBody, CapacityResponse, RideSummary, StartRideRequest, StartRideResponse,
};
use ride_tracker_lib::vehicle::VehicleId;
use thiserror::Error;

const START_FALLBACK: &str = "Failed to start ride.";
const END_FALLBACK: &str = "Failed to end ride.";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Message reported by the server, fit to show the user as-is.
    #[error("{0}")]
    Server(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response from server")]
    BadPayload,
}

/// Turns a non-OK start/end response into an error. Fail closed: anything
/// that does not parse as `{error: string}` becomes the operation's fixed
/// message.
async fn server_error(response: Response, fallback: &str) -> ApiError {
    match response.json::<ApiErrorBody>().await {
        Ok(body) => ApiError::Server(body.error),
        Err(_) => ApiError::Server(fallback.to_string()),
    }
}

pub async fn get_vehicle_capacity(vehicle: VehicleId) -> Result<CapacityResponse, ApiError> {
    let response = Request::get("/get_vehicle_capacity")
        .query([("vehicle", vehicle.as_str())])
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Server(format!(
            "capacity lookup returned status {}",
            response.status()
        )));
    }

    response.json().await.map_err(|_| ApiError::BadPayload)
}

pub async fn start_ride(body: &StartRideRequest) -> Result<StartRideResponse, ApiError> {
    let response = Request::post("/start_ride")
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(server_error(response, START_FALLBACK).await);
    }

    response.json().await.map_err(|_| ApiError::BadPayload)
}

pub async fn end_ride() -> Result<RideSummary, ApiError> {
    let response = Request::get("/end_ride")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(server_error(response, END_FALLBACK).await);
    }

    response.json().await.map_err(|_| ApiError::BadPayload)
}

pub async fn chatbot(query: &str) -> Result<String, ApiError> {
    let body = ChatRequest {
        query: query.to_string(),
    };

    let response = Request::post("/chatbot")
        .json(&body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Server(format!(
            "chatbot returned status {}",
            response.status()
        )));
    }

    let answer: ChatResponse = response.json().await.map_err(|_| ApiError::BadPayload)?;
    Ok(answer.answer)
}
