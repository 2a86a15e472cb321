use serde_json::Value;

/// Parse recorded wire messages into JSON values
pub fn parse_messages(messages: &[String]) -> Vec<Value> {
    messages
        .iter()
        .map(|m| serde_json::from_str(m).expect("recorded message is valid JSON"))
        .collect()
}

/// The `type` tags of recorded messages, in send order
pub fn message_types(messages: &[String]) -> Vec<String> {
    parse_messages(messages)
        .iter()
        .map(|m| m["type"].as_str().expect("message has a type").to_string())
        .collect()
}

/// The payloads of recorded messages with the given type tag
pub fn payloads_of_type(messages: &[String], message_type: &str) -> Vec<Value> {
    parse_messages(messages)
        .into_iter()
        .filter(|m| m["type"] == message_type)
        .map(|m| m["payload"].clone())
        .collect()
}
