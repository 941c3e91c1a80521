//! REST API helpers for the clinic backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch failures
//! degrade UI behavior (empty lists, toasts) without crashing hydration.
//!
//! AUTHORIZATION
//! =============
//! Every request attaches `Authorization: Bearer <credential>` when the
//! session holds a credential, and omits the header otherwise. This module is
//! the only place the credential crosses into the network boundary.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::auth::session::Session;
use crate::net::types::{
    LoginRequest, Owner, OwnerPayload, Pet, PetPayload, RegisterRequest, Vet, VetPayload, Visit,
    VisitPayload,
};

/// Backend mount point; the dev server proxies it to the REST backend.
const API_BASE: &str = "/api";

/// Bearer-style authorization header value for a credential.
#[must_use]
pub fn bearer(credential: &str) -> String {
    format!("Bearer {credential}")
}

/// Full request URL for an API path.
#[must_use]
pub fn api_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

// =============================================================
// Generic request plumbing (browser only)
// =============================================================

#[cfg(feature = "hydrate")]
fn authorized(
    builder: gloo_net::http::RequestBuilder,
    session: &Session,
) -> gloo_net::http::RequestBuilder {
    match session.credential() {
        Some(credential) => builder.header("Authorization", &bearer(credential)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(session: &Session, path: &str) -> Option<T> {
    let resp = authorized(gloo_net::http::Request::get(&api_url(path)), session)
        .send()
        .await
        .ok()?;
    if !resp.ok() {
        return None;
    }
    resp.json::<T>().await.ok()
}

#[cfg(feature = "hydrate")]
async fn send_json<B: serde::Serialize>(
    method: &str,
    session: &Session,
    path: &str,
    body: &B,
) -> Result<gloo_net::http::Response, String> {
    let builder = match method {
        "POST" => gloo_net::http::Request::post(&api_url(path)),
        "PUT" => gloo_net::http::Request::put(&api_url(path)),
        _ => return Err(format!("unsupported method: {method}")),
    };
    let resp = authorized(builder, session)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if resp.ok() {
        Ok(resp)
    } else {
        Err(format!("{} {} failed: {}", method, path, resp.status()))
    }
}

#[cfg(feature = "hydrate")]
async fn delete(session: &Session, path: &str) -> Result<(), String> {
    let resp = authorized(gloo_net::http::Request::delete(&api_url(path)), session)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if resp.ok() {
        Ok(())
    } else {
        Err(format!("DELETE {} failed: {}", path, resp.status()))
    }
}

// =============================================================
// Auth
// =============================================================

/// Log in with email/password credentials; returns the issued token.
///
/// # Errors
///
/// Returns a display-ready message when the request fails or the backend
/// rejects the credentials.
pub async fn login(request: &LoginRequest) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send_json("POST", &Session::default(), "/auth/login", request)
            .await
            .map_err(|_| "Invalid credentials or server error.".to_owned())?;
        let body: crate::net::types::LoginResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Register a new account.
///
/// # Errors
///
/// Returns a display-ready message when registration fails.
pub async fn register(request: &RegisterRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        send_json("POST", &Session::default(), "/auth/register", request)
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

// =============================================================
// Owners
// =============================================================

/// Fetch all owners (staff only). `None` on any failure.
pub async fn fetch_owners(session: &Session) -> Option<Vec<Owner>> {
    #[cfg(feature = "hydrate")]
    {
        get_json(session, "/owners").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        None
    }
}

/// Fetch a single owner by id.
pub async fn fetch_owner(session: &Session, id: i64) -> Option<Owner> {
    #[cfg(feature = "hydrate")]
    {
        get_json(session, &format!("/owners/{id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id);
        None
    }
}

/// Fetch the owner profile linked to the logged-in account.
pub async fn fetch_my_owner_profile(session: &Session) -> Option<Owner> {
    #[cfg(feature = "hydrate")]
    {
        get_json(session, "/owners/me").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        None
    }
}

/// Create an owner.
///
/// # Errors
///
/// Returns a display-ready message on failure.
pub async fn create_owner(session: &Session, payload: &OwnerPayload) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        send_json("POST", session, "/owners", payload).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, payload);
        Err("not available on server".to_owned())
    }
}

/// Update an owner.
///
/// # Errors
///
/// Returns a display-ready message on failure.
pub async fn update_owner(session: &Session, id: i64, payload: &OwnerPayload) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        send_json("PUT", session, &format!("/owners/{id}"), payload).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id, payload);
        Err("not available on server".to_owned())
    }
}

/// Delete an owner (superadmin only, enforced by the backend).
///
/// # Errors
///
/// Returns a display-ready message on failure.
pub async fn delete_owner(session: &Session, id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        delete(session, &format!("/owners/{id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id);
        Err("not available on server".to_owned())
    }
}

// =============================================================
// Pets
// =============================================================

/// Fetch all pets (staff view).
pub async fn fetch_pets(session: &Session) -> Option<Vec<Pet>> {
    #[cfg(feature = "hydrate")]
    {
        get_json(session, "/pets").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        None
    }
}

/// Fetch the logged-in owner's pets.
pub async fn fetch_my_pets(session: &Session) -> Option<Vec<Pet>> {
    #[cfg(feature = "hydrate")]
    {
        get_json(session, "/pets/mine").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        None
    }
}

/// Fetch a single pet by id.
pub async fn fetch_pet(session: &Session, id: i64) -> Option<Pet> {
    #[cfg(feature = "hydrate")]
    {
        get_json(session, &format!("/pets/{id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id);
        None
    }
}

/// Fetch a specific owner's pets.
pub async fn fetch_pets_by_owner(session: &Session, owner_id: i64) -> Option<Vec<Pet>> {
    #[cfg(feature = "hydrate")]
    {
        get_json(session, &format!("/pets/owner/{owner_id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, owner_id);
        None
    }
}

/// Create a pet under a specific owner (staff flow).
///
/// # Errors
///
/// Returns a display-ready message on failure.
pub async fn create_pet(session: &Session, owner_id: i64, payload: &PetPayload) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        send_json("POST", session, &format!("/pets/owner/{owner_id}"), payload)
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, owner_id, payload);
        Err("not available on server".to_owned())
    }
}

/// Create a pet under the logged-in owner (user flow).
///
/// # Errors
///
/// Returns a display-ready message on failure.
pub async fn create_my_pet(session: &Session, payload: &PetPayload) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        send_json("POST", session, "/pets/mine", payload).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, payload);
        Err("not available on server".to_owned())
    }
}

/// Update a pet.
///
/// # Errors
///
/// Returns a display-ready message on failure.
pub async fn update_pet(session: &Session, id: i64, payload: &PetPayload) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        send_json("PUT", session, &format!("/pets/{id}"), payload).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id, payload);
        Err("not available on server".to_owned())
    }
}

/// Delete a pet.
///
/// # Errors
///
/// Returns a display-ready message on failure.
pub async fn delete_pet(session: &Session, id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        delete(session, &format!("/pets/{id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id);
        Err("not available on server".to_owned())
    }
}

// =============================================================
// Vets
// =============================================================

/// Fetch all vets.
pub async fn fetch_vets(session: &Session) -> Option<Vec<Vet>> {
    #[cfg(feature = "hydrate")]
    {
        get_json(session, "/vets").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        None
    }
}

/// Fetch a single vet by id.
pub async fn fetch_vet(session: &Session, id: i64) -> Option<Vet> {
    #[cfg(feature = "hydrate")]
    {
        get_json(session, &format!("/vets/{id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id);
        None
    }
}

/// Create a vet.
///
/// # Errors
///
/// Returns a display-ready message on failure.
pub async fn create_vet(session: &Session, payload: &VetPayload) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        send_json("POST", session, "/vets", payload).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, payload);
        Err("not available on server".to_owned())
    }
}

/// Update a vet.
///
/// # Errors
///
/// Returns a display-ready message on failure.
pub async fn update_vet(session: &Session, id: i64, payload: &VetPayload) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        send_json("PUT", session, &format!("/vets/{id}"), payload).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id, payload);
        Err("not available on server".to_owned())
    }
}

/// Delete a vet.
///
/// # Errors
///
/// Returns a display-ready message on failure.
pub async fn delete_vet(session: &Session, id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        delete(session, &format!("/vets/{id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id);
        Err("not available on server".to_owned())
    }
}

// =============================================================
// Visits
// =============================================================

/// Fetch all visits (staff view).
pub async fn fetch_visits(session: &Session) -> Option<Vec<Visit>> {
    #[cfg(feature = "hydrate")]
    {
        get_json(session, "/visits").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        None
    }
}

/// Fetch the logged-in owner's visits.
pub async fn fetch_my_visits(session: &Session) -> Option<Vec<Visit>> {
    #[cfg(feature = "hydrate")]
    {
        get_json(session, "/visits/mine").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        None
    }
}

/// Fetch a single visit by id.
pub async fn fetch_visit(session: &Session, id: i64) -> Option<Visit> {
    #[cfg(feature = "hydrate")]
    {
        get_json(session, &format!("/visits/{id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id);
        None
    }
}

/// Book a visit.
///
/// # Errors
///
/// Returns a display-ready message on failure.
pub async fn create_visit(session: &Session, payload: &VisitPayload) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        send_json("POST", session, "/visits", payload).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, payload);
        Err("not available on server".to_owned())
    }
}

/// Update a visit.
///
/// # Errors
///
/// Returns a display-ready message on failure.
pub async fn update_visit(session: &Session, id: i64, payload: &VisitPayload) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        send_json("PUT", session, &format!("/visits/{id}"), payload).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id, payload);
        Err("not available on server".to_owned())
    }
}

/// Update only a visit's status, resubmitting the visit as the backend expects.
///
/// # Errors
///
/// Returns a display-ready message on failure.
pub async fn update_visit_status(
    session: &Session,
    visit: &Visit,
    status: crate::net::types::VisitStatus,
) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let mut updated = visit.clone();
        updated.status = status;
        send_json("PUT", session, &format!("/visits/{}", visit.id), &updated)
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, visit, status);
        Err("not available on server".to_owned())
    }
}

/// Delete a visit.
///
/// # Errors
///
/// Returns a display-ready message on failure.
pub async fn delete_visit(session: &Session, id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        delete(session, &format!("/visits/{id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id);
        Err("not available on server".to_owned())
    }
}
