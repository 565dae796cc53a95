//! Wire DTOs for the backend's JSON responses.
//!
//! DESIGN
//! ======
//! The backend is an external PHP service; fields it may omit are modeled
//! as `Option` with serde defaults so partial payloads deserialize instead
//! of failing the whole view.

use serde::{Deserialize, Serialize};

/// Response body of the authentication endpoint.
///
/// A present `token` signals success; otherwise `message` carries the
/// rejection reason.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Generic success/message envelope used by mutation endpoints.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiStatus {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// A published announcement.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NewsItem {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// An internal message in the inbox.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Message {
    pub id: i64,
    #[serde(default)]
    pub sender_id: Option<i64>,
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub is_read: bool,
}

/// Body of the message-send endpoint.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewMessage {
    pub receiver_id: i64,
    pub subject: String,
    pub body: String,
}

/// An absence record.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Absence {
    pub id: i64,
    #[serde(default)]
    pub student_id: Option<i64>,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub teacher_id: Option<i64>,
    #[serde(default)]
    pub teacher_name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub justified: bool,
}

/// An academic report.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Report {
    pub id: i64,
    #[serde(default)]
    pub student_id: Option<i64>,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub teacher_id: Option<i64>,
    #[serde(default)]
    pub teacher_name: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A user row in the administration view.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub group_name: Option<String>,
}

/// A school group in the administration view.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Group {
    pub id: i64,
    pub name: String,
}
