use std::sync::Arc;

use async_trait::async_trait;
use bot_forge::bot::{BotProfile, GenerationParameters, Side};
use bot_forge::generation::{PlayerLevels, ProfileGenerator};
use bot_forge::{
    BotCondition, CacheKey, GenerateBotsRequest, GenerationCache, GenerationManager, SnapshotCache,
    SpawnConfig,
};
use criterion::{Criterion, criterion_group, criterion_main};

struct CheapGenerator;

#[async_trait]
impl ProfileGenerator for CheapGenerator {
    async fn generate_batch(
        &self,
        _session_id: &str,
        details: &GenerationParameters,
    ) -> anyhow::Result<Vec<BotProfile>> {
        Ok((0..details.count_to_generate)
            .map(|i| BotProfile::new(&format!("bench_{}", i), details))
            .collect())
    }
}

struct NoLevels;

impl PlayerLevels for NoLevels {
    fn level(&self, _session_id: &str) -> Option<u16> {
        None
    }
}

fn bench_params(count: u32) -> GenerationParameters {
    GenerationParameters {
        is_pmc: false,
        side: Side::Scav,
        role: "assault".to_string(),
        event_role: None,
        player_level: 20,
        level_delta_max: 10,
        count_to_generate: count,
        difficulty: "normal".to_string(),
        is_player_scav: false,
    }
}

/// Benchmark a full store-then-draw cycle against one key
fn bench_cache_store_draw(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let cache = GenerationCache::new();
    let key = CacheKey::new("assault", "normal");
    let details = bench_params(30);
    let profiles: Vec<BotProfile> = (0..30)
        .map(|i| BotProfile::new(&format!("bench_{}", i), &details))
        .collect();

    c.bench_function("cache_store_and_draw_30", |b| {
        b.iter(|| {
            rt.block_on(async {
                cache.store(key.clone(), profiles.clone()).await;
                cache.draw(&key).await.unwrap()
            })
        });
    });
}

/// Benchmark the orchestrator hot path with a cheap generator; the cache
/// refills whenever the pool runs dry
fn bench_generate_single_condition(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut config = SpawnConfig::default();
    config.pmc.convert_into_pmc_chance.clear();

    let manager = GenerationManager::new(
        Arc::new(config),
        Arc::new(CheapGenerator),
        Arc::new(NoLevels),
        Arc::new(GenerationCache::new()),
        Arc::new(SnapshotCache::new()),
    );
    let request = GenerateBotsRequest {
        conditions: vec![BotCondition::new("assault", "normal")],
    };

    c.bench_function("generate_single_condition", |b| {
        b.iter(|| rt.block_on(manager.generate("bench", &request)).unwrap());
    });
}

criterion_group!(
    generation,
    bench_cache_store_draw,
    bench_generate_single_condition
);
criterion_main!(generation);
