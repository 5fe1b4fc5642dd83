// Copyright 2025 Cowboy AI, LLC.

//! Fold replay benchmarks: how fast a campaign rebuilds from its journal.

use campaign_domain::{
    AggregateFolder, AggregateState, Clock, CommandEnvelope, EventEnvelope, FixedClock,
    SystemModuleRegistry,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn synthetic_journal(sessions: usize) -> Vec<EventEnvelope> {
    let clock = FixedClock::at("2025-06-01T12:00:00Z");
    let command = CommandEnvelope::new("bench", "camp-bench")
        .with_request("req-bench", "inv-bench")
        .with_correlation("corr-bench", "cause-bench");
    let event = |event_type: &str, payload: serde_json::Value| {
        EventEnvelope::from_command(&command, event_type, clock.now())
            .encode_payload(&payload)
            .unwrap()
    };

    let mut journal = vec![event(
        "campaign.created",
        serde_json::json!({"name": "Benchfall", "gm_mode": "human", "status": "active"}),
    )];
    journal.push(
        event(
            "participant.joined",
            serde_json::json!({
                "participant_id": "gm-1", "name": "GM", "role": "gm",
                "access": "owner", "controller": "human"
            }),
        )
        .with_entity("participant", "gm-1"),
    );

    for session in 0..sessions {
        let gate = format!("gate-{session}");
        journal.push(event(
            "session.gate_opened",
            serde_json::json!({"gate_id": &gate, "gate_type": "gm_consequence"}),
        ));
        for roll in 0..8u64 {
            let seq = session as u64 * 16 + roll * 2 + 1;
            journal.push(event(
                "action.roll_resolved",
                serde_json::json!({"seq": seq, "outcome": {"total": 7 + roll}}),
            ));
            journal.push(event(
                "action.outcome_applied",
                serde_json::json!({"seq": seq + 1, "roll_seq": seq, "effect": {"hp": -1}}),
            ));
        }
        journal.push(event(
            "session.gate_resolved",
            serde_json::json!({"gate_id": &gate, "decision": "approve"}),
        ));
    }
    journal
}

fn bench_fold_replay(c: &mut Criterion) {
    let (_, registry) = campaign_domain::core_registries().unwrap();
    let modules = SystemModuleRegistry::new();
    let folder = AggregateFolder::new(&registry, &modules);

    let mut group = c.benchmark_group("fold_replay");
    for sessions in [10usize, 100] {
        let journal = synthetic_journal(sessions);
        group.bench_with_input(
            BenchmarkId::from_parameter(journal.len()),
            &journal,
            |b, journal| {
                b.iter(|| {
                    let mut state = AggregateState::new();
                    folder
                        .fold_all(&mut state, black_box(journal.iter()))
                        .unwrap();
                    state
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_fold_replay);
criterion_main!(benches);
