//! End-to-end walk through a quiz session.
//!
//! Run with: `cargo run --example demo`
//! Set `RUST_LOG=brain_stack=debug` to see every placement logged.
//!
//! This example shows how `brain_stack` works end to end:
//!
//! 1. **Synchronous session** — a seeded history quiz answered by a scripted
//!    player, printing each book as it lands and the final tower layout.
//!
//! 2. **Fallback** — an unknown topic still produces a playable session and a
//!    diagnostic notice.
//!
//! 3. **Runner** — the same flow driven by the async cooldown timer, with
//!    events read off the channel, then the leaderboard.

use std::time::Duration;

use brain_stack::{
    leaderboard, start_session, to_client_view, QuestionBank, SessionEvent, SessionRequest,
    SessionRunner, SubmitOutcome,
};
use tracing_subscriber::EnvFilter;

const BANK: &str = r#"{
    "HISTORIA_UNIVERSAL": [
        { "id": "h1", "questionText": "In which year did the Berlin Wall fall?", "options": ["1987", "1989", "1991", "1993"], "correctIndex": 1 },
        { "id": "h2", "questionText": "Who was the first emperor of Rome?", "options": ["Julius Caesar", "Nero", "Augustus", "Trajan"], "correctIndex": 2 },
        { "id": "h3", "questionText": "Which civilization built Machu Picchu?", "options": ["Aztec", "Maya", "Olmec", "Inca"], "correctIndex": 3 },
        { "id": "h4", "questionText": "The French Revolution began in", "options": ["1789", "1776", "1815", "1848"], "correctIndex": 0 },
        { "id": "h5", "questionText": "Which empire was ruled by Suleiman the Magnificent?", "options": ["Persian", "Ottoman", "Mughal", "Byzantine"], "correctIndex": 1 },
        { "id": "h6", "questionText": "Where was the Magna Carta sealed?", "options": ["Runnymede", "Hastings", "York", "Canterbury"], "correctIndex": 0 }
    ]
}"#;

fn print_stack(session: &brain_stack::GameSession) {
    println!("  Center tower: {} books", session.center_height());
    println!("  Lateral towers: {:?}", session.tower_counts().as_array());
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let bank = match QuestionBank::from_json_str(BANK) {
        Ok(bank) => bank,
        Err(e) => {
            eprintln!("bad bank: {e}");
            return;
        }
    };

    // ── Synchronous session ────────────────────────────────────────────────
    println!();
    println!("══ History quiz, seed 42 ══");
    println!();
    let mut session = start_session(&bank, SessionRequest::new("HISTORIA_UNIVERSAL").with_seed(42));
    let mut turn = 0;
    while let Some(q) = session.current_question().cloned() {
        let (n, total) = session.progress();
        println!("  Q{n}/{total}: {}", q.question_text);
        // Scripted player: every third answer is wrong.
        let answer = if turn % 3 == 2 {
            q.options.iter().find(|o| **o != q.correct_answer_text).cloned().unwrap_or_default()
        } else {
            q.correct_answer_text.clone()
        };
        if let SubmitOutcome::Placed(book) = session.submit_answer(&answer) {
            let mark = if book.is_correct { "✓" } else { "✗" };
            println!("    {mark} \"{answer}\" → {} rank {}", book.tower_id, book.rank);
        }
        session.advance();
        turn += 1;
    }
    println!();
    println!("  Final score: {}", session.score());
    print_stack(&session);

    // ── Fallback ───────────────────────────────────────────────────────────
    println!();
    println!("══ Unknown topic ══");
    println!();
    let fallback = start_session(&bank, SessionRequest::new("PDF_NOTES").with_count(12).with_seed(1));
    if let Some(notice) = fallback.diagnostic() {
        println!("  Notice: {notice}");
    }
    println!("  First question: {}", fallback.questions()[0].question_text);
    println!("  Client view: {}", to_client_view(&fallback)["question"]["header"]);

    // ── Runner ─────────────────────────────────────────────────────────────
    println!();
    println!("══ Runner with a 50 ms cooldown ══");
    println!();
    let mut request = SessionRequest::new("HISTORIA_UNIVERSAL").with_seed(7);
    request.cooldown = Duration::from_millis(50);
    let (mut runner, mut events) = SessionRunner::new(start_session(&bank, request));

    while let Some(answer) =
        runner.with_session(|s| s.current_question().map(|q| q.correct_answer_text.clone()))
    {
        runner.submit_answer(&answer);
        // A double-click during the cooldown is ignored.
        runner.submit_answer(&answer);
        if let Some(SessionEvent::AnswerPlaced(book)) = events.recv().await {
            println!("  placed Q{} on {}", book.question_index + 1, book.tower_id);
        }
        tokio::time::sleep(Duration::from_millis(60)).await;
    }

    let mut score = 0;
    while let Some(event) = events.recv().await {
        if let SessionEvent::Finished { score: s } = event {
            score = s;
            break;
        }
    }
    runner.dispose();

    println!("  Finished with {score}");
    println!();
    println!("══ Leaderboard ══");
    println!();
    for (i, entry) in leaderboard::merge(&leaderboard::default_roster(), leaderboard::LOCAL_PLAYER_NAME, score)
        .iter()
        .enumerate()
    {
        println!("  {}. {} {} pts", i + 1, entry.name, entry.score);
    }
}
