//! Wire types for the clinic REST backend.
//!
//! Field names follow the backend's camelCase JSON. Nested objects the
//! backend sometimes omits (e.g. a pet's owner on "mine" endpoints) are
//! `Option`s so a missing field never fails the whole list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A pet owner, as returned by the owners endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
    /// Login name of the linked account, when the backend includes it.
    #[serde(default)]
    pub username: Option<String>,
}

/// Create/update payload for an owner.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// A pet, with its owner when the endpoint includes one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub breed: Option<String>,
    /// ISO date (`YYYY-MM-DD`).
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub owner: Option<Owner>,
}

/// Create/update payload for a pet.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetPayload {
    pub name: String,
    pub breed: String,
    pub birth_date: String,
}

/// A veterinarian.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vet {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub specialization: Option<String>,
}

/// Create/update payload for a vet.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VetPayload {
    pub name: String,
    pub specialization: String,
}

/// Appointment lifecycle status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VisitStatus {
    #[default]
    Upcoming,
    Completed,
    Cancelled,
}

impl VisitStatus {
    /// Human-readable badge label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Wire-format code, as serialized to the backend.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Upcoming => "UPCOMING",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

/// A visit (appointment), joined with its pet and vet.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    #[serde(default)]
    pub id: i64,
    /// ISO date (`YYYY-MM-DD`).
    #[serde(default)]
    pub visit_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: VisitStatus,
    #[serde(default)]
    pub pet: Option<Pet>,
    #[serde(default)]
    pub vet: Option<Vet>,
}

/// Create/update payload for a visit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitPayload {
    pub date: String,
    pub description: String,
    pub pet_id: i64,
    pub vet_id: i64,
}

/// `POST /auth/login` request body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/login` response: the issued credential.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// `POST /auth/register` request body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub name: String,
    pub password: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}
