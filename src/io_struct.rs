use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

/// Inbound body of `POST /chat`. A missing `messages` field deserializes to
/// an empty list and is rejected the same way.
#[derive(Debug, Deserialize, Serialize)]
pub struct ChatReqInput {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// Contact record submitted to the CRM. Every field except the email is
/// fixed by the CRM integration contract.
#[derive(Debug, Clone, Serialize)]
pub struct LeadRecord {
    pub email: String,
    pub firstname: &'static str,
    pub lifecyclestage: &'static str,
    pub hs_lead_status: &'static str,
}

impl LeadRecord {
    pub fn from_email(email: String) -> Self {
        LeadRecord {
            email,
            firstname: "LC Site Visitor",
            lifecyclestage: "lead",
            hs_lead_status: "New",
        }
    }

    pub fn to_payload(&self) -> Value {
        json!({ "properties": self })
    }
}

/// A fixed body shaped like a provider completion, used for the refusal and
/// failure responses so the front-end renders them like any other reply.
pub fn canned_completion(content: &str) -> Value {
    json!({
        "choices": [{
            "message": {
                "content": content
            }
        }]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_req_tolerates_missing_fields() {
        let req: ChatReqInput = serde_json::from_str("{}").unwrap();
        assert!(req.messages.is_empty());

        let req: ChatReqInput =
            serde_json::from_str(r#"{"messages": [{"content": "hi"}]}"#).unwrap();
        assert_eq!(req.messages.len(), 1);
        assert_eq!(req.messages[0].role, "");
        assert_eq!(req.messages[0].content, "hi");
    }

    #[test]
    fn lead_record_payload_shape() {
        let lead = LeadRecord::from_email("jane.doe@example.com".to_string());
        let payload = lead.to_payload();
        assert_eq!(payload["properties"]["email"], "jane.doe@example.com");
        assert_eq!(payload["properties"]["firstname"], "LC Site Visitor");
        assert_eq!(payload["properties"]["lifecyclestage"], "lead");
        assert_eq!(payload["properties"]["hs_lead_status"], "New");
    }

    #[test]
    fn canned_completion_shape() {
        let body = canned_completion("nope");
        assert_eq!(body["choices"][0]["message"]["content"], "nope");
    }
}
