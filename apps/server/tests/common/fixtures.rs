//! Request bodies and response helpers.

use serde_json::{json, Value};

/// Create a start session request body.
pub fn start_session_request(topic: &str) -> Value {
    json!({ "topic": topic })
}

/// Create a submit answer request body.
pub fn submit_answer_request(option: &str) -> Value {
    json!({ "option": option })
}

/// Question text of a session response, if the step is a question.
pub fn question_text(body: &Value) -> Option<String> {
    match body["step"]["status"].as_str() {
        Some("question") => body["step"]["text"].as_str().map(str::to_string),
        _ => None,
    }
}

/// Generate quiz text with one topic and `num_questions` questions whose
/// correct answer is always "right".
pub fn sample_quiz(topic: &str, num_questions: usize) -> String {
    let records: Vec<String> = (0..num_questions)
        .map(|i| format!("Q: Question {}?\n- right\n- wrong\nANS: right\n---", i + 1))
        .collect();
    format!("TOPIC: {}\n{}\n", topic, records.join("\n"))
}
