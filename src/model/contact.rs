//! Contact request payload sent to the form-submission endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of request selected on the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestType {
    /// General enquiry.
    #[default]
    General,
    /// Product demo request.
    Demo,
    /// Partnership proposal.
    Partnership,
    /// Press and media.
    Press,
    /// Support for an existing deployment.
    Support,
}

impl RequestType {
    /// All request types in the order the form lists them.
    pub const ALL: [RequestType; 5] = [
        RequestType::General,
        RequestType::Demo,
        RequestType::Partnership,
        RequestType::Press,
        RequestType::Support,
    ];

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            RequestType::General => "General enquiry",
            RequestType::Demo => "Request a demo",
            RequestType::Partnership => "Partnership",
            RequestType::Press => "Press & media",
            RequestType::Support => "Support",
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validated contact payload. Only `company` may be empty.
///
/// Serialises with camelCase keys (`requestType`) as the endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    /// Sender's full name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Organisation (optional, may be empty).
    pub company: String,
    /// Phone number.
    pub phone: String,
    /// Free-form message.
    pub message: String,
    /// Selected request kind.
    pub request_type: RequestType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_serialises_camel_case() {
        let payload = ContactPayload {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            company: String::new(),
            phone: "+44 20 0000 0000".into(),
            message: "Hello".into(),
            request_type: RequestType::Demo,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["requestType"], "demo");
        assert_eq!(json["company"], "");
        assert!(json.get("request_type").is_none());
    }

    #[test]
    fn request_type_parses_kebab_case() {
        let parsed: RequestType = serde_json::from_str("\"partnership\"").unwrap();
        assert_eq!(parsed, RequestType::Partnership);
    }
}
