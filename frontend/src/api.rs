#[cfg(not(feature = "mock"))]
use gloo_net::http::Request;
#[cfg(not(feature = "mock"))]
use js_sys::Date;
#[cfg(not(feature = "mock"))]
use serde::Deserialize;
use subdesk_shared::{Cancellation, DashboardMetrics};

#[cfg(feature = "mock")]
use crate::models;

// API base URL - read at compile time; deployments set SUBDESK_API_BASE,
// local development falls back to the dev backend.
#[cfg(not(feature = "mock"))]
pub const API_BASE: &str = match option_env!("SUBDESK_API_BASE") {
    Some(url) => url,
    None => "http://localhost:3000/api",
};

#[cfg(not(feature = "mock"))]
#[derive(Debug, Deserialize)]
struct CancellationListResponse {
    cancellations: Vec<Cancellation>,
    #[allow(dead_code)]
    total: usize,
}

/// Fetch the aggregate dashboard snapshot.
pub async fn fetch_dashboard_metrics(token: &str) -> Result<DashboardMetrics, String> {
    #[cfg(feature = "mock")]
    {
        let _ = token;
        return Ok(models::mock_dashboard_metrics());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/admin/dashboard?_ts={}", API_BASE, Date::now() as u64);

        let response = Request::get(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .header("Cache-Control", "no-cache, no-store, max-age=0")
            .header("Pragma", "no-cache")
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| format!("Parse error: {:?}", e))
    }
}

/// Fetch every cancellation record for the management table.
pub async fn fetch_cancellations(token: &str) -> Result<Vec<Cancellation>, String> {
    #[cfg(feature = "mock")]
    {
        let _ = token;
        return Ok(models::mock_cancellations());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!(
            "{}/admin/subscription-cancellations?_ts={}",
            API_BASE,
            Date::now() as u64
        );

        let response = Request::get(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .header("Cache-Control", "no-cache, no-store, max-age=0")
            .header("Pragma", "no-cache")
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        let json_response: CancellationListResponse = response
            .json()
            .await
            .map_err(|e| format!("Parse error: {:?}", e))?;

        Ok(json_response.cancellations)
    }
}

/// Ask the backend to execute one refund. Nothing is mutated locally; the
/// caller re-fetches the list once the request succeeds.
pub async fn request_refund(token: &str, cancellation: &Cancellation) -> Result<(), String> {
    #[cfg(feature = "mock")]
    {
        let _ = (token, cancellation);
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/admin/refunds", API_BASE);

        let response = Request::post(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .json(cancellation)
            .map_err(|e| format!("Serialize error: {:?}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        Ok(())
    }
}
