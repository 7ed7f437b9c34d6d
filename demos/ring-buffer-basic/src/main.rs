use clap::{value_parser, Arg, Command};
use rand::Rng;
use ringbuffer::{RingBuffer, RingBufferError, TracingObserver};
use std::error::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn generate_readings(count: usize) -> Vec<u32> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| rng.gen_range(0..1000)).collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let matches = Command::new("ring-buffer-basic")
        .about("Producer/consumer simulation over a bounded ring buffer")
        .arg(
            Arg::new("capacity")
                .long("capacity")
                .default_value("8")
                .value_parser(value_parser!(usize))
                .help("Ring buffer capacity"),
        )
        .arg(
            Arg::new("items")
                .long("items")
                .default_value("1000")
                .value_parser(value_parser!(usize))
                .help("Number of values the producer emits"),
        )
        .get_matches();

    let capacity = *matches.get_one::<usize>("capacity").ok_or("missing capacity")?;
    let items = *matches.get_one::<usize>("items").ok_or("missing items")?;

    let mut buffer = RingBuffer::with_observer(capacity, TracingObserver)?;
    let mut pending = generate_readings(items).into_iter().peekable();
    let mut rng = rand::thread_rng();

    let mut produced = 0usize;
    let mut consumed = 0usize;
    let mut full_hits = 0usize;
    let mut empty_hits = 0usize;
    let mut checksum = 0u64;
    let mut reported = 0usize;

    while pending.peek().is_some() || !buffer.is_empty() {
        // Producer: a burst of up to three values.
        for _ in 0..rng.gen_range(0..=3) {
            let Some(&value) = pending.peek() else {
                break;
            };
            match buffer.enqueue(value) {
                Ok(()) => {
                    pending.next();
                    produced += 1;
                }
                Err(RingBufferError::BufferFull) => {
                    full_hits += 1;
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        // Consumer: drains up to two values.
        for _ in 0..rng.gen_range(0..=2) {
            match buffer.dequeue() {
                Ok(value) => {
                    checksum += u64::from(value);
                    consumed += 1;
                }
                Err(RingBufferError::BufferEmpty) => {
                    empty_hits += 1;
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        if consumed / 100 > reported {
            reported = consumed / 100;
            info!(
                consumed,
                available = buffer.available_capacity(),
                "progress"
            );
        }
    }

    println!("produced : {produced}");
    println!("consumed : {consumed}");
    println!("full     : {full_hits}");
    println!("empty    : {empty_hits}");
    println!("checksum : {checksum}");

    Ok(())
}
