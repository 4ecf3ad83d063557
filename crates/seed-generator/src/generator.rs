//! Generation of seed users and message batches.

use crate::config::{ConfigError, MessageStrategy, SeedConfig};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use uuid::Uuid;

/// A user to be inserted, with a client-generated identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Unique identifier, generated before insertion.
    pub id: Uuid,
    /// Sequential username of the form `user_NNNN` (1-based, zero-padded).
    pub username: String,
}

/// A message to be inserted, referencing a seeded user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRecord {
    /// Identifier of the owning user.
    pub user_id: Uuid,
    /// Templated message body.
    pub body: String,
}

/// A group of messages inserted together.
///
/// A batch is the unit of transactional insertion: the per-user strategy
/// produces one batch per user, the flat-pool strategy a single batch for
/// the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBatch {
    /// Messages in insertion order.
    pub messages: Vec<MessageRecord>,
}

impl MessageBatch {
    /// Number of messages in this batch.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the batch contains no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Format the body for a message owned by `user_id`.
///
/// `seq` is the 1-based sequence index of the message within its
/// generation loop.
pub fn message_body(user_id: &Uuid, seq: u64) -> String {
    let id = user_id.to_string();
    format!("Hello from user {}! This is message number {seq}.", &id[..8])
}

/// Generator that produces seed users and message batches.
///
/// The generator owns a random number generator seeded either from the
/// configured seed (reproducible) or from OS entropy.
pub struct SeedGenerator {
    /// Validated run configuration.
    config: SeedConfig,
    /// Random number generator for identifiers, counts, and owner picks.
    rng: StdRng,
}

impl SeedGenerator {
    /// Create a new generator, validating the configuration.
    pub fn new(config: SeedConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self { config, rng })
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &SeedConfig {
        &self.config
    }

    /// Generate the configured number of users in creation order.
    ///
    /// Usernames are `user_0001 ..= user_{N}`; identifiers are fresh random
    /// UUIDs. The returned order is the insertion order, and the list is the
    /// sole input to [`SeedGenerator::message_batches`].
    pub fn users(&mut self) -> Vec<UserRecord> {
        (1..=self.config.num_users)
            .map(|i| UserRecord {
                id: generate_uuid_v4(&mut self.rng),
                username: format!("user_{i:04}"),
            })
            .collect()
    }

    /// Generate message batches for the given users per the configured
    /// strategy.
    ///
    /// Every message references a user from `users`, so inserting the
    /// batches after the users preserves foreign-key integrity. An empty
    /// user list produces no batches for either strategy.
    pub fn message_batches(&mut self, users: &[UserRecord]) -> Vec<MessageBatch> {
        match self.config.strategy {
            MessageStrategy::FlatPool => self.flat_pool_batches(users),
            MessageStrategy::PerUser => self.per_user_batches(users),
        }
    }

    /// Draw a message count uniformly from the configured closed interval.
    fn draw_message_count(&mut self) -> u64 {
        self.rng
            .random_range(self.config.min_messages_per_seed..=self.config.max_messages_per_seed)
    }

    /// One global count draw; each message picks a random owner.
    /// Sequence numbers are 1-based across the whole run.
    fn flat_pool_batches(&mut self, users: &[UserRecord]) -> Vec<MessageBatch> {
        if users.is_empty() {
            return Vec::new();
        }

        let count = self.draw_message_count();
        let messages = (1..=count)
            .map(|seq| {
                let owner = &users[self.rng.random_range(0..users.len())];
                MessageRecord {
                    user_id: owner.id,
                    body: message_body(&owner.id, seq),
                }
            })
            .collect();

        vec![MessageBatch { messages }]
    }

    /// One independent count draw per user, in seed order. Sequence numbers
    /// are 1-based and reset for each user.
    fn per_user_batches(&mut self, users: &[UserRecord]) -> Vec<MessageBatch> {
        users
            .iter()
            .map(|user| {
                let count = self.draw_message_count();
                let messages = (1..=count)
                    .map(|seq| MessageRecord {
                        user_id: user.id,
                        body: message_body(&user.id, seq),
                    })
                    .collect();
                MessageBatch { messages }
            })
            .collect()
    }
}

/// Generate a random UUID v4 using the provided RNG.
fn generate_uuid_v4<R: RngCore>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    Uuid::from_bytes(bytes)
}
