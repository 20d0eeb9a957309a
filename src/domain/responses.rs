use serde::{Deserialize, Serialize};
use serde_json::Value;

// The server only promises a JSON object; every field is optional.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkReadResponse {
    pub success: Option<bool>,
    pub id: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkAllReadResponse {
    pub success: Option<bool>,
    pub marked: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteResponse {
    pub success: Option<bool>,
    pub id: Option<Value>,
}
