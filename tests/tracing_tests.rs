#![cfg(feature = "tracing")]

//! Integration tests for the trace events emitted while building
//! compositions.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use closure_algebra::prelude::*;
use rstest::rstest;

#[derive(Clone, Default)]
struct CapturedOutput {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedOutput {
    fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl io::Write for CapturedOutput {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture(build: impl FnOnce()) -> String {
    let output = CapturedOutput::default();
    let writer = output.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, build);
    output.contents()
}

// =============================================================================
// Build events
// =============================================================================

#[rstest]
fn test_pipe_build_is_traced() {
    let logs = capture(|| {
        let step = transform(|value: i32| value + 1);
        let _ = (step | step) | step;
    });

    assert!(logs.contains("built composition"));
    assert!(logs.contains("operator=pipe"));
    assert!(logs.contains("lhs_len=2"));
    assert!(logs.contains("rhs_len=1"));
    assert!(logs.contains("len=3"));
}

#[rstest]
fn test_nested_operators_are_traced() {
    let logs = capture(|| {
        let positive = predicate(|value: i32| value > 0);
        let _ = !positive.not_equal(positive);
    });

    assert!(logs.contains("operator=not_equal"));
    assert!(logs.contains("operator=negation"));
}

#[rstest]
fn test_invocation_is_not_traced() {
    let step = transform(|value: i32| value + 1);
    let pipeline = step | step;

    let logs = capture(|| {
        assert_eq!(pipeline.invoke((0,)), 2);
    });

    assert!(logs.is_empty());
}
