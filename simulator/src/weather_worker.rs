//! Background weather "provider".
//!
//! Runs fetch requests on a worker thread and posts outcomes back over a
//! channel, so the render loop never blocks. Responses are synthetic:
//! latency, failures and the occasional hung request are derived from the
//! request sequence number so runs are reproducible.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use envdash_common::{FetchError, FetchOutcome, FetchRequest, WeatherReport};
use log::debug;

const CONDITIONS: [(&str, f32); 8] = [
    ("clear sky", 24.0),
    ("few clouds", 19.5),
    ("broken clouds", 16.0),
    ("light rain", 12.5),
    ("light rain and thunderstorms", 15.0),
    ("heavy snow", -3.0),
    ("mist", 9.0),
    ("drizzle", 11.0),
];

/// Handle to the worker thread.
pub struct WeatherWorker {
    requests: Sender<FetchRequest>,
    outcomes: Receiver<FetchOutcome>,
}

impl WeatherWorker {
    pub fn spawn() -> Self {
        let (request_tx, request_rx) = mpsc::channel::<FetchRequest>();
        let (outcome_tx, outcome_rx) = mpsc::channel();

        thread::spawn(move || {
            for request in request_rx {
                let outcome_tx = outcome_tx.clone();
                // One thread per request so a hung fetch doesn't stall the rest.
                thread::spawn(move || {
                    let outcome = fetch(request);
                    outcome_tx.send(outcome).ok();
                });
            }
        });

        Self {
            requests: request_tx,
            outcomes: outcome_rx,
        }
    }

    pub fn submit(
        &self,
        request: FetchRequest,
    ) {
        self.requests.send(request).ok();
    }

    /// Completed fetches, without blocking.
    pub fn completed(&self) -> impl Iterator<Item = FetchOutcome> + '_ { self.outcomes.try_iter() }
}

fn fetch(request: FetchRequest) -> FetchOutcome {
    let seq = request.ticket.seq;
    let hash = request.provider_id.bytes().fold(seq, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)));

    // Every 11th request hangs past the fetch timeout.
    let latency = if seq % 11 == 0 { 20_000 } else { 300 + u64::from(hash % 1_200) };
    debug!("fetching {} (#{seq}), {latency} ms", request.provider_id);
    thread::sleep(Duration::from_millis(latency));

    let result = match seq % 7 {
        0 => Err(FetchError::Network),
        5 if seq % 2 == 0 => Err(FetchError::Parse),
        _ => {
            let (description, temperature) = CONDITIONS[hash as usize % CONDITIONS.len()];
            let jitter = (hash % 10) as f32 * 0.05;
            Ok(WeatherReport::new(description, temperature + jitter))
        }
    };

    FetchOutcome {
        ticket: request.ticket,
        result,
    }
}
