//! Integration tests for sharing one parser across threads

use std::sync::{Arc, Barrier};
use std::thread;
use trollsift_core::template::{Parser, Value};
use trollsift_testkit::HRPT;

/// Many threads parse and compose with clones of the same parser
///
/// Every thread must see the same compiled template and produce the same
/// results as a single-threaded run.
#[test]
fn test_concurrent_parse_and_compose() {
    const NUM_WORKERS: usize = 8;
    let parser = Parser::new(HRPT.template).unwrap();
    let barrier = Arc::new(Barrier::new(NUM_WORKERS));

    let handles: Vec<_> = (0..NUM_WORKERS)
        .map(|i| {
            let parser = parser.clone();
            let barrier = Arc::clone(&barrier);

            thread::spawn(move || {
                // Wait for all threads to be ready
                barrier.wait();

                for orbit in 0..50 {
                    let filename = format!(
                        "/somedir/worker{}/hrpt_noaa19_20140212_1412_{:05}.l1b",
                        i,
                        i * 1000 + orbit
                    );
                    let fields = parser
                        .parse(&filename)
                        .unwrap_or_else(|e| panic!("Worker {} failed on {}: {}", i, filename, e));
                    assert_eq!(fields["orbit"], Value::Int((i * 1000 + orbit) as i64));
                    assert_eq!(parser.compose(&fields).unwrap(), filename);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_parser_shared_by_reference_in_scoped_threads() {
    let parser = Parser::new(HRPT.template).unwrap();
    let inputs = [
        (HRPT.filename, true),
        ("/somedir/bla/bla/hrpt_noaa19_20140212__1412_00000.l1b", false),
        ("not a filename", false),
    ];

    thread::scope(|scope| {
        for (input, expected) in inputs {
            let parser = &parser;
            scope.spawn(move || assert_eq!(parser.validate(input), expected));
        }
    });
}
