//! # Wave Ledger Benchmarks
//!
//! | Component | Operation |
//! |-----------|-----------|
//! | RewardRandomizer | `decide` (one domain-separated SHA-256) |
//! | LedgerService | beacon round + `submit_wave` against the in-memory store |
//! | FileLedgerStore | `commit` with fsync |

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::time::Duration;
use wave_ledger::adapters::FileLedgerStore;
use wave_ledger::domain::{LedgerConfig, RewardRandomizer, WaveRecord, DEFAULT_AWARD_THRESHOLD};
use wave_ledger::ports::{LedgerCommit, LedgerStore};
use wave_tests::fixtures::Portal;

fn bench_randomizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("reward-randomizer");
    let randomizer = RewardRandomizer::new(DEFAULT_AWARD_THRESHOLD);
    let sender = [0xAB; 20];
    let entropy = [0x17; 32];

    group.bench_function("decide", |b| {
        let mut now = 0u64;
        b.iter(|| {
            now += 1;
            black_box(randomizer.decide(&sender, now, &entropy))
        })
    });
    group.finish();
}

fn bench_submit_wave(c: &mut Criterion) {
    let mut group = c.benchmark_group("ledger-service");
    group.throughput(Throughput::Elements(1));

    group.bench_function("submit_wave_distinct_senders", |b| {
        let portal = Portal::in_memory(LedgerConfig::default());
        let mut n = 0u64;
        b.iter(|| {
            n += 1;
            let mut sender = [0u8; 20];
            sender[..8].copy_from_slice(&n.to_be_bytes());
            black_box(portal.wave(sender, "bench", 1_700_000_000))
        })
    });
    group.finish();
}

fn bench_file_commit(c: &mut Criterion) {
    let mut group = c.benchmark_group("file-ledger-store");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(20);

    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = FileLedgerStore::open(dir.path()).expect("open log");
    let commit = LedgerCommit::Wave {
        record: WaveRecord {
            sender: [0xCD; 20],
            timestamp: 1_700_000_000,
            message: "a typical wave message".into(),
            seed: 42,
        },
        balance_after: 1_000,
    };

    group.bench_function("commit_fsync", |b| {
        b.iter(|| store.commit(black_box(&commit)).expect("commit"))
    });
    group.finish();
}

criterion_group!(benches, bench_randomizer, bench_submit_wave, bench_file_commit);
criterion_main!(benches);
