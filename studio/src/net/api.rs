//! REST calls to the overlay backend.
//!
//! Browser builds (`csr`): real HTTP via `gloo-net`. Native builds: stubs,
//! so the crate compiles and tests without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. The initial
//! fetch and create degrade to `None`; update/delete report a message the
//! caller logs. Nothing here throws into the interaction path.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use overlay::doc::{OverlayId, PartialOverlay};

#[cfg(feature = "csr")]
use super::types::CreateOverlayResponse;
use super::types::{CreateOverlayRequest, OverlayRecord};
#[cfg(any(test, feature = "csr"))]
use crate::consts::BACKEND_BASE;

#[cfg(any(test, feature = "csr"))]
fn overlays_endpoint() -> String {
    format!("{BACKEND_BASE}/overlays")
}

#[cfg(any(test, feature = "csr"))]
fn overlay_endpoint(id: &str) -> String {
    format!("{BACKEND_BASE}/overlays/{id}")
}

#[cfg(any(test, feature = "csr"))]
fn request_failed_message(verb: &str, status: u16) -> String {
    format!("{verb} failed: {status}")
}

/// Fetch every overlay record via `GET /overlays`.
/// Returns `None` on any failure; the studio then starts with an empty set.
pub async fn fetch_overlays() -> Option<Vec<OverlayRecord>> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&overlays_endpoint())
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<OverlayRecord>>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Create an overlay via `POST /overlays` and return the server-assigned id.
/// This is the one call the UI awaits before showing the overlay — every
/// later mutation needs the id. Returns `None` on failure.
pub async fn create_overlay(payload: &CreateOverlayRequest) -> Option<OverlayId> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&overlays_endpoint())
            .json(payload)
            .ok()?
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let body: CreateOverlayResponse = resp.json().await.ok()?;
        Some(body.id)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = payload;
        None
    }
}

/// Persist a sparse update via `PUT /overlays/{id}`. The response body is
/// ignored.
///
/// # Errors
///
/// Returns a message when the request fails or the backend rejects it; the
/// caller logs it and local state stays authoritative.
pub async fn update_overlay(id: &str, fields: &PartialOverlay) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::put(&overlay_endpoint(id))
            .json(fields)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("update", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, fields);
        Err("not available outside the browser".to_owned())
    }
}

/// Delete an overlay via `DELETE /overlays/{id}`.
///
/// # Errors
///
/// Returns a message when the request fails or the backend rejects it.
pub async fn delete_overlay(id: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::delete(&overlay_endpoint(id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("delete", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err("not available outside the browser".to_owned())
    }
}
