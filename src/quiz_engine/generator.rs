use rand::{rngs::StdRng, RngCore, SeedableRng};
use tracing::info;

use crate::quiz_engine::{
    bank::QuestionBank,
    catalog,
    models::SessionRequest,
    sampler,
    session::GameSession,
};

/// Session ID from the topic's subject prefix plus a random tag.
fn make_session_id(topic_key: &str, rng: &mut impl RngCore) -> String {
    let prefix = match catalog::subject_by_key(topic_key) {
        Some(subject) => subject.id.chars().take(2).collect::<String>().to_uppercase(),
        None => "QZ".to_string(),
    };
    format!("{}-{:08X}", prefix, rng.next_u32())
}

/// Single entry point: sample questions for the request and start a session.
///
/// Never fails. An unknown or empty topic yields placeholder questions and the
/// session carries the sampler's diagnostic.
pub fn start_session(bank: &QuestionBank, request: SessionRequest) -> GameSession {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let config = request.config;
    let session_id = make_session_id(&config.topic_key, &mut rng);
    let sampled = sampler::sample(&mut rng, bank, &config.topic_key, config.count);

    info!(
        session = %session_id,
        topic = %config.topic_key,
        questions = sampled.questions.len(),
        fallback = sampled.used_fallback(),
        "session started"
    );

    GameSession::new(session_id, config, sampled.questions, rng, request.cooldown)
        .with_diagnostic(sampled.diagnostic)
}
