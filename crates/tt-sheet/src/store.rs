//! The record store: owner of the live sheet.
//!
//! # Responsibility
//! - Load the sheet from storage once, migrating old saves.
//! - Apply mutations through a single entry point and save each change
//!   before accepting the next one.
//! - Notify observers with the new snapshot and cue sinks with a tag.
//!
//! # Invariants
//! - The in-memory sheet is replaced only after it has been saved, so
//!   storage always holds the latest committed sheet.
//! - A corrupt save never prevents opening; the default sheet is used.
//! - Mutations that change nothing are neither saved nor cued.

use std::io;

use log::{debug, error, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tt_mechanics::{AttackStrength, DiceCount, RollResult};

use crate::config::SheetConfig;
use crate::cue::{Cue, CueSink};
use crate::error::{SheetError, SheetResult};
use crate::migrate::{decode, encode};
use crate::model::GameState;
use crate::mutation::{self, LuckTest, Mutation};
use crate::storage::{FileStorage, Storage};

/// Where the sheet came from when the store was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    /// Nothing was stored; a new sheet was started.
    Fresh,
    /// A stored sheet was loaded.
    Loaded,
    /// The stored sheet was unreadable; a new sheet was started.
    Recovered,
}

/// Read the sheet stored under `key`.
///
/// Returns the default sheet when nothing is stored.
///
/// # Errors
/// - [`SheetError::CorruptSave`] when the stored payload is not a sheet.
/// - [`SheetError::UnreadableSave`] when the stored payload is not text.
/// - [`SheetError::Storage`] when the backend fails.
pub fn load_record<S: Storage + ?Sized>(storage: &S, key: &str) -> SheetResult<GameState> {
    Ok(read_record(storage, key)?.unwrap_or_default())
}

fn read_record<S: Storage + ?Sized>(storage: &S, key: &str) -> SheetResult<Option<GameState>> {
    match storage.get(key) {
        Ok(Some(payload)) => decode(&payload).map(Some),
        Ok(None) => Ok(None),
        Err(err) if err.kind() == io::ErrorKind::InvalidData => {
            Err(SheetError::UnreadableSave(err))
        }
        Err(err) => Err(err.into()),
    }
}

type Observer = Box<dyn Fn(&GameState)>;

/// Owns the live sheet and its storage.
pub struct RecordStore<S: Storage> {
    storage: S,
    key: String,
    state: GameState,
    origin: LoadOrigin,
    rng: StdRng,
    observers: Vec<Observer>,
    sinks: Vec<Box<dyn CueSink>>,
}

impl<S: Storage> RecordStore<S> {
    /// Open the sheet stored under the configured key.
    ///
    /// # Errors
    /// Returns [`SheetError::Storage`] if the backend cannot be read. A
    /// corrupt or unreadable payload is not an error: the default sheet is
    /// used instead.
    pub fn open(storage: S, config: &SheetConfig) -> SheetResult<Self> {
        let key = config.storage_key.clone();
        let (state, origin) = match read_record(&storage, &key) {
            Ok(Some(state)) => (state, LoadOrigin::Loaded),
            Ok(None) => (GameState::default(), LoadOrigin::Fresh),
            Err(err @ (SheetError::CorruptSave(_) | SheetError::UnreadableSave(_))) => {
                warn!(
                    "event=store_open module=store status=recovered key={} error={}",
                    key, err
                );
                (GameState::default(), LoadOrigin::Recovered)
            }
            Err(err) => {
                error!(
                    "event=store_open module=store status=error key={} error={}",
                    key, err
                );
                return Err(err);
            }
        };
        info!(
            "event=store_open module=store status=ok key={} origin={:?} monsters={} spells={}",
            key,
            origin,
            state.monsters.len(),
            state.spells.len()
        );

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            storage,
            key,
            state,
            origin,
            rng,
            observers: Vec::new(),
            sinks: Vec::new(),
        })
    }

    /// The current sheet.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// How the sheet was obtained at open.
    pub fn origin(&self) -> LoadOrigin {
        self.origin
    }

    /// The key the sheet is stored under.
    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// The storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Register an observer called with every committed sheet.
    pub fn subscribe(&mut self, observer: impl Fn(&GameState) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Register a sink for cues.
    pub fn on_cue(&mut self, sink: impl CueSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    /// Apply a mutation. Returns whether the sheet changed.
    ///
    /// # Errors
    /// Returns an error if saving fails; the sheet is then left as it was.
    pub fn apply(&mut self, mutation: Mutation) -> SheetResult<bool> {
        if matches!(mutation, Mutation::Reset) {
            self.reset()?;
            return Ok(true);
        }
        let next = mutation.apply(&self.state);
        let changed = self.commit(next)?;
        if changed {
            self.emit(mutation.cue());
        }
        Ok(changed)
    }

    /// Discard the sheet and delete the stored entry.
    ///
    /// Asking the player for confirmation is the caller's job.
    ///
    /// # Errors
    /// Returns [`SheetError::Storage`] if the entry cannot be deleted.
    pub fn reset(&mut self) -> SheetResult<&GameState> {
        if let Err(err) = self.storage.remove(&self.key) {
            error!(
                "event=store_reset module=store status=error key={} error={}",
                self.key, err
            );
            return Err(err.into());
        }
        self.state = GameState::default();
        info!("event=store_reset module=store status=ok key={}", self.key);
        self.notify();
        self.emit(Cue::Delete);
        Ok(&self.state)
    }

    /// Roll attack strength with the current skill. Nothing is saved.
    pub fn roll_attack(&mut self) -> AttackStrength {
        let attack = mutation::resolve_attack(&mut self.rng, self.state.skill.current);
        debug!(
            "event=roll_attack module=store roll={} total={}",
            attack.roll, attack.total
        );
        self.emit(Cue::Dice);
        attack
    }

    /// Test luck and spend one luck point.
    ///
    /// # Errors
    /// Returns an error if saving the reduced luck fails.
    pub fn test_luck(&mut self) -> SheetResult<LuckTest> {
        let (next, test) = mutation::resolve_luck_test(&self.state, &mut self.rng);
        self.commit(next)?;
        debug!(
            "event=test_luck module=store roll={} success={}",
            test.roll, test.success
        );
        self.emit(Cue::Luck);
        Ok(test)
    }

    /// Throw one or two dice. Nothing is saved.
    pub fn roll_dice(&mut self, count: DiceCount) -> RollResult {
        let result = mutation::roll_dice(count, &mut self.rng);
        debug!("event=roll_dice module=store dice={} result={}", count, result);
        self.emit(Cue::Dice);
        result
    }

    /// Write the current sheet to storage again.
    ///
    /// # Errors
    /// Returns [`SheetError::Encode`] or [`SheetError::Storage`].
    pub fn save(&mut self) -> SheetResult<()> {
        let state = self.state.clone();
        self.write(&state)
    }

    fn write(&mut self, state: &GameState) -> SheetResult<()> {
        let payload = encode(state)?;
        match self.storage.set(&self.key, &payload) {
            Ok(()) => {
                debug!(
                    "event=store_save module=store status=ok key={} bytes={}",
                    self.key,
                    payload.len()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_save module=store status=error key={} error={}",
                    self.key, err
                );
                Err(err.into())
            }
        }
    }

    fn commit(&mut self, next: GameState) -> SheetResult<bool> {
        if next == self.state {
            return Ok(false);
        }
        self.write(&next)?;
        self.state = next;
        self.notify();
        Ok(true)
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer(&self.state);
        }
    }

    fn emit(&self, cue: Cue) {
        for sink in &self.sinks {
            sink.cue(cue);
        }
    }
}

impl RecordStore<FileStorage> {
    /// Open the sheet from files in the configured save directory.
    ///
    /// # Errors
    /// As for [`RecordStore::open`].
    pub fn open_default(config: &SheetConfig) -> SheetResult<Self> {
        Self::open(FileStorage::new(config.resolved_save_dir()), config)
    }
}
