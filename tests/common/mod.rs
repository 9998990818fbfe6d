use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use scenario_deck::config::Config;
use scenario_deck::provider::{Provider, ProviderRequest};
use scenario_deck::{Engine, ProviderFailure};

/// What the stub does when called.
pub enum Reply {
    Text(String),
    Fail(fn() -> ProviderFailure),
    Hang,
    Panic,
}

#[derive(Clone, Default)]
pub struct Calls {
    count: Arc<AtomicUsize>,
    seen: Arc<Mutex<Vec<ProviderRequest>>>,
}

impl Calls {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    pub fn last(&self) -> ProviderRequest {
        self.seen.lock().last().cloned().expect("provider was called")
    }
}

pub struct StubProvider {
    reply: Reply,
    calls: Calls,
}

#[async_trait]
impl Provider for StubProvider {
    async fn complete(&self, req: &ProviderRequest) -> Result<String, ProviderFailure> {
        self.calls.count.fetch_add(1, Ordering::SeqCst);
        self.calls.seen.lock().push(req.clone());
        match &self.reply {
            Reply::Text(t) => Ok(t.clone()),
            Reply::Fail(f) => Err(f()),
            Reply::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(String::new())
            }
            Reply::Panic => panic!("provider must not be called"),
        }
    }
}

pub fn test_config() -> Config {
    Config { timeout_secs: 5, ..Config::default() }
}

pub fn engine(reply: Reply) -> (Engine, Calls) {
    engine_with_config(reply, &test_config())
}

pub fn engine_with_config(reply: Reply, cfg: &Config) -> (Engine, Calls) {
    let calls = Calls::default();
    let provider = StubProvider { reply, calls: calls.clone() };
    (Engine::new(Box::new(provider), cfg), calls)
}

pub fn simple_payload(n: usize) -> String {
    let items: Vec<String> = (0..n).map(|i| format!(r#"{{"scenario":"card {i}"}}"#)).collect();
    format!(r#"{{"scenarios":[{}]}}"#, items.join(","))
}
