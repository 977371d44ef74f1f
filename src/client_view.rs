use serde_json::{json, Value};
use crate::quiz_engine::{
    models::{PlacementRecord, SessionQuestion},
    session::{GameSession, SessionPhase},
};

/// Per-option highlight once an answer is on display.
fn option_status(option: &str, question: &SessionQuestion, selected: Option<&str>) -> &'static str {
    match selected {
        None => "idle",
        Some(_) if question.is_correct(option) => "correct",
        Some(chosen) if chosen == option => "wrong",
        Some(_) => "muted",
    }
}

fn phase_str(phase: SessionPhase) -> &'static str {
    match phase {
        SessionPhase::Answering => "answering",
        SessionPhase::Cooldown  => "cooldown",
        SessionPhase::Finished  => "finished",
        SessionPhase::Disposed  => "disposed",
    }
}

/// One book in the stack, with layout already resolved.
fn book(record: &PlacementRecord) -> Value {
    json!({
        "id": record.question_index,
        "isCorrect": record.is_correct,
        "tower": record.tower_id.to_string(),
        "rank": record.rank,
        "bottom": record.bottom_px(),
        "offset": record.x_offset(),
        "rotation": record.rotation_jitter,
    })
}

fn question_block(session: &GameSession) -> Value {
    let Some(question) = session.current_question() else {
        return Value::Null;
    };
    let selected = session.selected_answer();
    let (number, total) = session.progress();

    let options: Vec<Value> = question
        .options
        .iter()
        .map(|o| json!({ "text": o, "status": option_status(o, question, selected) }))
        .collect();

    json!({
        "header": format!("Question {} from {}", number, total),
        "text": question.question_text,
        "options": options,
        "locked": session.awaiting_advance(),
    })
}

/// Snapshot of a session for a UI client.
///
/// The correct answer is only revealed through option statuses after the
/// player has answered.
pub fn to_client_view(session: &GameSession) -> Value {
    let books: Vec<Value> = session.placements().iter().map(book).collect();

    json!({
        "session_id": session.session_id(),
        "topic": session.config().topic_key,
        "phase": phase_str(session.phase()),
        "score": session.score(),
        "final_score": session.final_score(),
        "question": question_block(session),
        "stack": {
            "center": session.center_height(),
            "lateral": session.tower_counts().as_array(),
            "books": books,
        },
        "notice": session.diagnostic().map(|d| d.to_string()),
    })
}
