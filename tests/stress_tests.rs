//! Stress tests for concurrent rendering
//!
//! These tests verify:
//! - Record blocks from handlers sharing a sink are never interleaved
//! - Independently derived handlers still serialize on one lock
//! - Every dispatched record eventually reaches the sink

use rust_log_handlers::prelude::*;
use std::collections::HashSet;
use std::thread;
use std::time::{Duration, Instant};

const ATTRS_PER_RECORD: usize = 6;

fn wait_for_blocks(buffer: &SharedBuffer, expected: usize) -> String {
    let deadline = Instant::now() + Duration::from_secs(20);
    loop {
        let text = buffer.to_string_lossy();
        let headers = text.lines().filter(|l| l.contains(" [")).count();
        if headers >= expected {
            return text;
        }
        assert!(
            Instant::now() < deadline,
            "only {} of {} blocks written",
            headers,
            expected
        );
        thread::sleep(Duration::from_millis(10));
    }
}

fn record(writer: usize, seq: usize) -> Record {
    let mut record = Record::new(LogLevel::Info, format!("writer-{} seq-{}", writer, seq));
    for i in 0..ATTRS_PER_RECORD {
        record = record.with_attr(format!("w{}s{}a{}", writer, seq, i), i);
    }
    record
}

/// Split output into blocks, each starting at a header line, and check that
/// every attribute line belongs to the block's own record.
fn assert_contiguous(text: &str, expected_blocks: usize) {
    let mut blocks: Vec<(String, Vec<&str>)> = Vec::new();
    for line in text.lines() {
        if line.contains(" [INFO] ") {
            let message = line
                .split(" [INFO] ")
                .nth(1)
                .and_then(|rest| rest.strip_suffix("\x1b[0m"))
                .expect("header has a message");
            blocks.push((message.to_string(), Vec::new()));
        } else {
            let (_, lines) = blocks.last_mut().expect("attribute line before any header");
            lines.push(line);
        }
    }

    assert_eq!(blocks.len(), expected_blocks);

    let mut seen = HashSet::new();
    for (message, lines) in &blocks {
        assert!(seen.insert(message.clone()), "block {} written twice", message);

        let tag = message.replace("writer-", "w").replace(" seq-", "s");
        assert_eq!(lines.len(), ATTRS_PER_RECORD, "block {} is torn", message);
        for (i, line) in lines.iter().enumerate() {
            let expected = format!("    \x1b[30m{}a{}: {}\x1b[0m", tag, i, i);
            assert_eq!(*line, expected, "foreign line inside block {}", message);
        }
    }
}

#[test]
fn test_concurrent_blocks_are_contiguous() {
    let buffer = SharedBuffer::new();
    let handler: Handler = PrettyHandler::new(buffer.clone(), None).into();

    const WRITERS: usize = 8;
    const PER_WRITER: usize = 50;

    let mut threads = Vec::new();
    for writer in 0..WRITERS {
        let handler = handler.clone();
        threads.push(thread::spawn(move || {
            for seq in 0..PER_WRITER {
                handler.handle(&record(writer, seq)).unwrap();
            }
        }));
    }
    for t in threads {
        t.join().unwrap();
    }

    let text = wait_for_blocks(&buffer, WRITERS * PER_WRITER);
    assert_contiguous(&text, WRITERS * PER_WRITER);
}

#[test]
fn test_derived_handlers_share_one_lock() {
    let buffer = SharedBuffer::new();
    let root: Handler = PrettyHandler::new(buffer.clone(), None).into();

    // Each thread logs through its own derivation; none of them add fixed
    // attributes so block shapes stay predictable.
    const WRITERS: usize = 6;
    const PER_WRITER: usize = 40;

    let mut threads = Vec::new();
    for writer in 0..WRITERS {
        let derived = root.with_attrs(&[]);
        threads.push(thread::spawn(move || {
            for seq in 0..PER_WRITER {
                derived.handle(&record(writer, seq)).unwrap();
            }
        }));
    }
    for t in threads {
        t.join().unwrap();
    }

    let text = wait_for_blocks(&buffer, WRITERS * PER_WRITER);
    assert_contiguous(&text, WRITERS * PER_WRITER);
}

#[test]
fn test_async_over_parallel_delivers_everything() {
    let first = SharedBuffer::new();
    let second = SharedBuffer::new();

    let handler = AsyncHandler::new(ParallelHandler::new(vec![
        PrettyHandler::new(first.clone(), None).into(),
        PrettyHandler::new(second.clone(), None).into(),
    ]));

    const RECORDS: usize = 200;
    for seq in 0..RECORDS {
        handler.handle(&record(0, seq)).unwrap();
    }

    let first_text = wait_for_blocks(&first, RECORDS);
    let second_text = wait_for_blocks(&second, RECORDS);
    assert_contiguous(&first_text, RECORDS);
    assert_contiguous(&second_text, RECORDS);

    let deadline = Instant::now() + Duration::from_secs(5);
    while handler.metrics().pending() > 0 {
        assert!(Instant::now() < deadline, "dispatches never settled");
        thread::sleep(Duration::from_millis(5));
    }
    assert_eq!(handler.metrics().completed(), RECORDS as u64);
}
