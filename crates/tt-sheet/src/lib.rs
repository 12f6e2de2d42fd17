//! Adventure sheet for "O Templo do Terror".
//!
//! Tracks a hero's attributes, gold, equipment, provisions, spells, the
//! monsters met along the way and free-text notes, and keeps them saved
//! between sessions. [`RecordStore`] owns the live sheet; every change goes
//! through [`RecordStore::apply`] with a [`Mutation`] and is saved before the
//! next one is accepted. Rendering and sound are left to the caller, which
//! observes snapshots and [`Cue`]s.

pub mod config;
pub mod cue;
pub mod error;
pub mod logging;
pub mod migrate;
pub mod model;
pub mod mutation;
pub mod storage;
pub mod store;

pub use config::SheetConfig;
pub use cue::{Cue, CueSink};
pub use error::{SheetError, SheetResult};
pub use model::{
    Attribute, AttributeField, AttributeKind, GameState, Monster, MonsterUpdate, Spell, TextField,
};
pub use mutation::{LuckTest, Mutation};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{LoadOrigin, RecordStore, load_record};
pub use tt_mechanics::{AttackStrength, DiceCount, RollResult};
