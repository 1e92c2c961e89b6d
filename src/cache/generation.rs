//! Shared batch cache for pre-generated bot profiles.

use std::collections::{HashMap, VecDeque};

use tokio::sync::RwLock;

use crate::bot::BotProfile;

use super::errors::{CacheError, CacheResult};
use super::models::CacheKey;

/// Process-lifetime cache of pre-generated profile batches.
///
/// A batch is created on a miss, sized to the role's configured batch count,
/// and drained one profile at a time; once exhausted the key reads as a miss
/// again and the next request triggers a fresh full-size generation.
///
/// Each operation takes the store lock once, so check, store, and draw are
/// individually atomic. Generation itself runs outside the lock; two
/// sessions racing on the same cold key can both generate, and the second
/// store replaces the first.
#[derive(Debug, Default)]
pub struct GenerationCache {
    batches: RwLock<HashMap<CacheKey, VecDeque<BotProfile>>>,
}

impl GenerationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a non-empty batch exists for the key
    pub async fn has_batch(&self, key: &CacheKey) -> bool {
        self.batches
            .read()
            .await
            .get(key)
            .is_some_and(|batch| !batch.is_empty())
    }

    /// Replace the batch stored for the key
    pub async fn store(&self, key: CacheKey, profiles: Vec<BotProfile>) {
        log::debug!("Caching {} bots for {}", profiles.len(), key);
        self.batches.write().await.insert(key, profiles.into());
    }

    /// Remove and return one profile from the batch for the key.
    ///
    /// Callers must check `has_batch` and fill on a miss within the same
    /// logical step; drawing from an empty batch is an invariant violation.
    pub async fn draw(&self, key: &CacheKey) -> CacheResult<BotProfile> {
        self.batches
            .write()
            .await
            .get_mut(key)
            .and_then(|batch| batch.pop_front())
            .ok_or_else(|| CacheError::EmptyBatch(key.clone()))
    }

    /// Number of profiles currently cached for the key
    pub async fn batch_len(&self, key: &CacheKey) -> usize {
        self.batches
            .read()
            .await
            .get(key)
            .map_or(0, |batch| batch.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::{GenerationParameters, Side};

    fn profiles(count: u32) -> Vec<BotProfile> {
        let details = GenerationParameters {
            is_pmc: false,
            side: Side::Scav,
            role: "assault".to_string(),
            event_role: None,
            player_level: 10,
            level_delta_max: 5,
            count_to_generate: count,
            difficulty: "normal".to_string(),
            is_player_scav: false,
        };
        (0..count)
            .map(|i| BotProfile::new(&format!("bot_{}", i), &details))
            .collect()
    }

    #[tokio::test]
    async fn store_then_drain_until_empty() {
        let cache = GenerationCache::new();
        let key = CacheKey::new("assault", "normal");

        assert!(!cache.has_batch(&key).await);
        cache.store(key.clone(), profiles(2)).await;
        assert!(cache.has_batch(&key).await);

        cache.draw(&key).await.unwrap();
        cache.draw(&key).await.unwrap();

        // Exhausted batch reads as a miss again
        assert!(!cache.has_batch(&key).await);
        assert!(matches!(
            cache.draw(&key).await,
            Err(CacheError::EmptyBatch(_))
        ));
    }

    #[tokio::test]
    async fn draw_removes_profiles_in_order() {
        let cache = GenerationCache::new();
        let key = CacheKey::new("assault", "normal");
        let stored = profiles(3);
        let first_id = stored[0].id;

        cache.store(key.clone(), stored).await;
        let drawn = cache.draw(&key).await.unwrap();
        assert_eq!(drawn.id, first_id);
        assert_eq!(cache.batch_len(&key).await, 2);
    }

    #[tokio::test]
    async fn store_replaces_existing_batch() {
        let cache = GenerationCache::new();
        let key = CacheKey::new("assault", "normal");

        cache.store(key.clone(), profiles(5)).await;
        cache.store(key.clone(), profiles(2)).await;

        assert_eq!(cache.batch_len(&key).await, 2);
    }

    #[tokio::test]
    async fn keys_do_not_interfere() {
        let cache = GenerationCache::new();
        let a = CacheKey::new("A", "BC");
        let b = CacheKey::new("AB", "C");

        cache.store(a.clone(), profiles(3)).await;
        assert!(!cache.has_batch(&b).await);
        assert_eq!(cache.batch_len(&a).await, 3);
    }
}
