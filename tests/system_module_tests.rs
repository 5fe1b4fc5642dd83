// Copyright 2025 Cowboy AI, LLC.

//! A complete game-system module wired through registries, folder, and
//! pipeline: the Daggerheart fear track.

use campaign_domain::{
    downcast_state, AggregateFolder, AggregateState, ActorType, Clock, CommandEnvelope,
    CommandRegistryBuilder, Decision, DecisionContext, EventAddressing, EventDefinition,
    EventEnvelope, EventIntent, EventRegistryBuilder, FixedClock, Owner, RegistryError,
    SystemDecider, SystemFolder, SystemKey, SystemModule, SystemModuleRegistry, SystemState,
    SystemStateFactory, decode_as,
};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Default)]
struct FearTrack {
    fear: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FearDelta {
    amount: i64,
}

struct FearDecider;
impl SystemDecider for FearDecider {
    fn decide(
        &self,
        state: Option<&dyn SystemState>,
        command: &CommandEnvelope,
        ctx: &DecisionContext,
    ) -> Decision {
        let payload: FearDelta = match command.payload_json.decode() {
            Ok(p) => p,
            Err(e) => return Decision::reject("PAYLOAD_INVALID", e.to_string()),
        };
        if payload.amount <= 0 {
            return Decision::reject("INVALID_GM_FEAR", "amount must be positive");
        }
        let current = state
            .and_then(downcast_state::<FearTrack>)
            .map(|t| t.fear)
            .unwrap_or(0);
        if current + payload.amount > 12 {
            return Decision::reject("GM_FEAR_EXCEEDS_CAP", "fear cap exceeded");
        }
        match EventEnvelope::from_command(command, "daggerheart.fear_gained", ctx.now())
            .with_system("daggerheart", "v1")
            .encode_payload(&payload)
        {
            Ok(event) => Decision::accept(event),
            Err(e) => Decision::reject("PAYLOAD_INVALID", e.to_string()),
        }
    }
}

struct FearFolder;
impl SystemFolder for FearFolder {
    fn apply(
        &self,
        state: Option<Box<dyn SystemState>>,
        event: &EventEnvelope,
    ) -> Result<Box<dyn SystemState>, String> {
        let mut track = state
            .as_deref()
            .and_then(downcast_state::<FearTrack>)
            .cloned()
            .unwrap_or_default();
        let payload: FearDelta = event.payload_json.decode().map_err(|e| e.to_string())?;
        track.fear += payload.amount;
        Ok(Box::new(track))
    }
}

struct FearFactory;
impl SystemStateFactory for FearFactory {
    fn new_snapshot_state(&self, _campaign_id: &str) -> Box<dyn SystemState> {
        Box::new(FearTrack::default())
    }
}

struct DaggerheartModule;
impl SystemModule for DaggerheartModule {
    fn id(&self) -> &str {
        "daggerheart"
    }
    fn version(&self) -> &str {
        "v1"
    }
    fn register_commands(&self, builder: &mut CommandRegistryBuilder) -> Result<(), RegistryError> {
        builder.register(campaign_domain::CommandDefinition::new(
            "daggerheart.gain_fear",
            Owner::System,
            decode_as::<FearDelta>(),
        ))
    }
    fn register_events(&self, builder: &mut EventRegistryBuilder) -> Result<(), RegistryError> {
        builder.register(EventDefinition::new(
            "daggerheart.fear_gained",
            Owner::System,
            EventIntent::ProjectionAndReplay,
            EventAddressing::CampaignTarget,
            decode_as::<FearDelta>(),
        ))
    }
    fn emittable_event_types(&self) -> Vec<String> {
        vec!["daggerheart.fear_gained".to_string()]
    }
    fn decider(&self) -> &dyn SystemDecider {
        &FearDecider
    }
    fn folder(&self) -> &dyn SystemFolder {
        &FearFolder
    }
    fn state_factory(&self) -> Option<&dyn SystemStateFactory> {
        Some(&FearFactory)
    }
}

fn registries_with_module() -> (
    campaign_domain::CommandRegistry,
    campaign_domain::EventRegistry,
    SystemModuleRegistry,
) {
    let mut modules = SystemModuleRegistry::new();
    modules.register(Arc::new(DaggerheartModule)).unwrap();

    let mut commands = CommandRegistryBuilder::new();
    campaign_domain::register_core_commands(&mut commands).unwrap();
    let mut events = EventRegistryBuilder::new();
    campaign_domain::register_core_events(&mut events).unwrap();
    modules.register_all_types(&mut commands, &mut events).unwrap();

    (commands.build(), events.build(), modules)
}

fn fear_event(amount: i64) -> EventEnvelope {
    let command = CommandEnvelope::new("daggerheart.gain_fear", "camp-1")
        .with_actor(ActorType::System, "engine");
    EventEnvelope::from_command(
        &command,
        "daggerheart.fear_gained",
        FixedClock::at("2025-06-01T12:00:00Z").now(),
    )
    .with_system("daggerheart", "v1")
    .encode_payload(&FearDelta { amount })
    .unwrap()
}

#[test]
fn registries_with_module_pass_startup_validation() {
    let (commands, events, modules) = registries_with_module();
    campaign_domain::validate_registries(&commands, &events, &modules).unwrap();
}

#[test]
fn module_events_seed_and_thread_state() {
    let (_, events, modules) = registries_with_module();
    let folder = AggregateFolder::new(&events, &modules);

    let mut state = AggregateState::new();
    folder.fold(&mut state, &fear_event(3)).unwrap();
    folder.fold(&mut state, &fear_event(2)).unwrap();

    let key = SystemKey::new("daggerheart", "v1");
    let track = downcast_state::<FearTrack>(state.systems.get(&key).unwrap()).unwrap();
    assert_eq!(track.fear, 5);
}

#[test]
fn module_state_participates_in_state_equality() {
    let (_, events, modules) = registries_with_module();
    let folder = AggregateFolder::new(&events, &modules);

    let mut a = AggregateState::new();
    let mut b = AggregateState::new();
    folder.fold(&mut a, &fear_event(4)).unwrap();
    folder.fold(&mut b, &fear_event(4)).unwrap();
    assert_eq!(a, b);

    folder.fold(&mut b, &fear_event(1)).unwrap();
    assert_ne!(a, b);
}

#[test]
fn module_decider_reads_its_slice_through_routing() {
    let (_, events, modules) = registries_with_module();
    let folder = AggregateFolder::new(&events, &modules);
    let clock = FixedClock::at("2025-06-01T12:00:00Z");
    let catalog = campaign_domain::PassthroughAssetCatalog;
    let ctx = DecisionContext::new(&clock, &catalog);

    // Bind the campaign to the module, then bank fear close to the cap
    let mut state = AggregateState::new();
    state.campaign.created = true;
    state.campaign.system_id = "daggerheart".into();
    state.campaign.system_version = "v1".into();
    folder.fold(&mut state, &fear_event(11)).unwrap();

    let command = CommandEnvelope::new("daggerheart.gain_fear", "camp-1")
        .encode_payload(&FearDelta { amount: 2 })
        .unwrap();
    let decision = campaign_domain::route_command(&state, &command, &ctx, &modules);
    assert_eq!(decision.rejections()[0].code, "GM_FEAR_EXCEEDS_CAP");

    let command = CommandEnvelope::new("daggerheart.gain_fear", "camp-1")
        .encode_payload(&FearDelta { amount: 1 })
        .unwrap();
    let decision = campaign_domain::route_command(&state, &command, &ctx, &modules);
    assert!(decision.is_accepted());
    assert_eq!(decision.events()[0].event_type, "daggerheart.fear_gained");
    assert!(decision.events()[0].has_system_routing());
}

#[test]
fn unbound_campaign_rejects_module_commands() {
    let (_, _, modules) = registries_with_module();
    let clock = FixedClock::at("2025-06-01T12:00:00Z");
    let catalog = campaign_domain::PassthroughAssetCatalog;
    let ctx = DecisionContext::new(&clock, &catalog);

    let state = AggregateState::new();
    let command = CommandEnvelope::new("daggerheart.gain_fear", "camp-1")
        .encode_payload(&FearDelta { amount: 1 })
        .unwrap();
    let decision = campaign_domain::route_command(&state, &command, &ctx, &modules);
    assert_eq!(decision.rejections()[0].code, "SYSTEM_NOT_BOUND");
}
