use super::LyricsProvider;
use crate::error::ProviderError;
use crate::messages::LyricsQuery;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum Outcome {
    Lyrics(String),
    Nothing,
    Unavailable,
    Unexpected,
    Panic,
}

/// Scripted provider that counts how often it is asked
pub struct FakeProvider {
    name: &'static str,
    outcome: Outcome,
    calls: Arc<AtomicUsize>,
}

impl FakeProvider {
    pub fn new(name: &'static str, outcome: Outcome) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = Self {
            name,
            outcome,
            calls: calls.clone(),
        };
        (provider, calls)
    }
}

#[async_trait]
impl LyricsProvider for FakeProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn attempt(&self, _query: &LyricsQuery) -> Result<Option<String>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.outcome {
            Outcome::Lyrics(text) => Ok(Some(text.clone())),
            Outcome::Nothing => Ok(None),
            Outcome::Unavailable => Err(ProviderError::Unavailable("connection reset".into())),
            Outcome::Unexpected => Err(ProviderError::Unexpected(anyhow::anyhow!(
                "parser crashed"
            ))),
            Outcome::Panic => panic!("provider blew up"),
        }
    }
}

pub fn calls(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}
