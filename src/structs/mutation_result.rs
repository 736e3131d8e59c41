use serde_json::Value;

/// Outcome body of a state-changing call: `{ success, error? }` plus whatever
/// else the backend sent.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationResult {
    pub success: bool,
    pub error: Option<String>,
    pub body: Value,
}

impl MutationResult {
    /// Message for a submit that came back without a success flag: the
    /// `error` field, or the whole body when there is none.
    pub fn failure_message(&self) -> String {
        self.error.clone().unwrap_or_else(|| self.body.to_string())
    }

    pub fn error_or_unknown(&self) -> String {
        self.error.clone().unwrap_or_else(|| "Unknown error".to_string())
    }
}

impl From<Value> for MutationResult {
    fn from(body: Value) -> Self {
        let success = body.get("success").and_then(Value::as_bool).unwrap_or(false);
        let error = match body.get("error") {
            None | Some(Value::Null) => None,
            Some(Value::String(message)) if message.is_empty() => None,
            Some(Value::String(message)) => Some(message.clone()),
            // validation errors arrive as `{ field: [messages] }`
            Some(other) => Some(other.to_string()),
        };

        Self { success, error, body }
    }
}
