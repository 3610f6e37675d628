//! Tests for tracing events emitted by the async engine.

use std::fmt;
use std::sync::{Arc, Mutex};

use or_rail::prelude_async::*;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Metadata, Subscriber};

/// Records the message of every event it sees.
#[derive(Clone, Default)]
struct Recorder {
    messages: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

struct MessageVisitor<'a>(&'a mut Option<String>);

impl Visit for MessageVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            *self.0 = Some(format!("{:?}", value));
        }
    }
}

impl Subscriber for Recorder {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut message = None;
        event.record(&mut MessageVisitor(&mut message));
        if let Some(message) = message {
            self.messages.lock().unwrap().push(message);
        }
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

fn with_recorder<F: FnOnce()>(f: F) -> Vec<String> {
    let recorder = Recorder::default();
    tracing::subscriber::with_default(recorder.clone(), f);
    recorder.messages()
}

fn current_thread() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap()
}

#[test]
fn panic_conversion_emits_an_event() {
    let runtime = current_thread();
    let messages = with_recorder(|| {
        runtime.block_on(async {
            let factory = FutureFactory::of_fault_message();
            let crash = factory.future(|| async {
                if true {
                    panic!("lookup failed");
                }
                Or::<u32, String>::good(1)
            });
            let _ = crash.await;
        })
    });

    assert!(messages.iter().any(|m| m.contains("input panicked")));
}

#[test]
fn resolution_and_cancellation_emit_events() {
    let runtime = current_thread();
    let messages = with_recorder(|| {
        runtime.block_on(async {
            let factory = FutureFactory::of_fault_message();

            let resolved = combined([factory.future(|| async { Or::<u32, String>::good(1) })]);
            let _ = resolved.await;

            let pending = combined([factory.future(|| async {
                tokio::time::sleep(std::time::Duration::from_secs(3600)).await;
                Or::<u32, String>::good(1)
            })]);
            assert!(pending.cancel());
        })
    });

    assert!(messages.iter().any(|m| m.contains("combination resolved")));
    assert!(messages.iter().any(|m| m.contains("combination cancelled")));
}

#[test]
fn try_future_errors_emit_an_event() {
    let runtime = current_thread();
    let messages = with_recorder(|| {
        runtime.block_on(async {
            let factory = FutureFactory::of_fault_message();
            let failing = factory.try_future(|| async {
                Err::<Or<u32, String>, _>(std::io::Error::other("deadline exceeded"))
            });
            let _ = failing.await;
        })
    });

    assert!(messages.iter().any(|m| m.contains("input errored")));
}
