// src/action.rs
//! Action discriminator

/// An action dispatched through a store
///
/// The chain never inspects actions; the discriminator only feeds log output.
pub trait Action {
    /// The action's type tag, e.g. `"INCREMENT"`
    fn action_type(&self) -> &str;
}

/// JSON actions carry their tag in a `"type"` field
impl Action for serde_json::Value {
    fn action_type(&self) -> &str {
        self.get("type").and_then(|t| t.as_str()).unwrap_or("")
    }
}
