//! AssetStore - dependency-ordered asset resolution
//!
//! Holds the registered assets and evaluates each one exactly once per
//! run, in topological order: `load` first, `generate` only when load
//! did not claim success. A hard error from either operation aborts the
//! run before any further asset is evaluated.
//!
//! State machine per asset:
//! `Unresolved -> {Loaded | Generated | Failed}`. `Loaded` and
//! `Generated` are the only states in which `files()` is meaningful;
//! `Failed` is terminal and propagates as a run-aborting error.

use std::collections::HashMap;

use crate::domain::ports::asset::{Asset, AssetKey, Parents};
use crate::domain::ports::file_fetcher::FileFetcher;
use crate::error::{BootsmithError, BootsmithResult};

/// Terminal-state tracking for a registered asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetState {
    /// Not yet evaluated
    Unresolved,
    /// Reconstructed from persisted state; generation skipped
    Loaded,
    /// Produced from scratch (possibly empty for load-or-nothing assets)
    Generated,
    /// Evaluation hit a hard error; the run was aborted
    Failed,
}

/// Per-asset summary for reporting
#[derive(Debug, Clone)]
pub struct AssetStatus {
    pub key: AssetKey,
    pub name: String,
    pub state: AssetState,
    pub file_count: usize,
}

/// Registry plus orchestrator for bootstrap assets
#[derive(Default)]
pub struct AssetStore {
    assets: Vec<Box<dyn Asset>>,
    index: HashMap<AssetKey, usize>,
    states: Vec<AssetState>,
}

impl AssetStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an asset under its own key.
    ///
    /// Registration order is preserved and used as the tie-break for
    /// evaluation order among independent assets.
    pub fn register(&mut self, asset: Box<dyn Asset>) -> BootsmithResult<()> {
        let key = asset.key();
        if self.index.contains_key(&key) {
            return Err(BootsmithError::DuplicateAsset {
                key: key.to_string(),
            });
        }
        self.index.insert(key, self.assets.len());
        self.assets.push(asset);
        self.states.push(AssetState::Unresolved);
        Ok(())
    }

    /// Evaluate every registered asset, in dependency order.
    ///
    /// Each asset is evaluated at most once: `load(fetcher)` first,
    /// then `generate(parents)` only if load returned `Ok(false)`.
    /// The first hard error marks the asset `Failed` and aborts the
    /// whole run, wrapped with the asset's name.
    pub fn resolve_all(&mut self, fetcher: &dyn FileFetcher) -> BootsmithResult<()> {
        let order = self.evaluation_order()?;

        for idx in order {
            if self.states[idx] != AssetState::Unresolved {
                continue;
            }

            // Snapshot dependency outputs before touching the asset;
            // everything in `order` before idx is already terminal.
            let mut parents = Parents::new();
            for dep in self.assets[idx].dependencies() {
                let dep_idx = self.index[&dep];
                parents.insert(dep, self.assets[dep_idx].files().to_vec());
            }

            let asset = &mut self.assets[idx];
            let claimed = match asset.load(fetcher) {
                Ok(claimed) => claimed,
                Err(err) => {
                    let name = asset.name().to_string();
                    self.states[idx] = AssetState::Failed;
                    return Err(err.for_asset(name));
                }
            };

            if claimed {
                self.states[idx] = AssetState::Loaded;
                continue;
            }

            match asset.generate(&parents) {
                Ok(()) => self.states[idx] = AssetState::Generated,
                Err(err) => {
                    let name = asset.name().to_string();
                    self.states[idx] = AssetState::Failed;
                    return Err(err.for_asset(name));
                }
            }
        }

        Ok(())
    }

    /// Topological evaluation order (DFS), registration order as the
    /// tie-break. Rejects cycles and undeclared dependencies before
    /// any asset is evaluated.
    fn evaluation_order(&self) -> BootsmithResult<Vec<usize>> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Unvisited,
            InProgress,
            Done,
        }

        fn visit(
            store: &AssetStore,
            idx: usize,
            marks: &mut [Mark],
            order: &mut Vec<usize>,
        ) -> BootsmithResult<()> {
            match marks[idx] {
                Mark::Done => return Ok(()),
                Mark::InProgress => {
                    return Err(BootsmithError::DependencyCycle {
                        name: store.assets[idx].name().to_string(),
                    })
                }
                Mark::Unvisited => {}
            }
            marks[idx] = Mark::InProgress;
            for dep in store.assets[idx].dependencies() {
                let dep_idx = *store.index.get(&dep).ok_or_else(|| {
                    BootsmithError::UnknownDependency {
                        name: store.assets[idx].name().to_string(),
                        dependency: dep.to_string(),
                    }
                })?;
                visit(store, dep_idx, marks, order)?;
            }
            marks[idx] = Mark::Done;
            order.push(idx);
            Ok(())
        }

        let mut marks = vec![Mark::Unvisited; self.assets.len()];
        let mut order = Vec::with_capacity(self.assets.len());
        for idx in 0..self.assets.len() {
            visit(self, idx, &mut marks, &mut order)?;
        }
        Ok(order)
    }

    /// Terminal state of a registered asset
    pub fn state(&self, key: AssetKey) -> Option<AssetState> {
        self.index.get(&key).map(|&idx| self.states[idx])
    }

    /// Files produced by a registered asset
    pub fn files_of(&self, key: AssetKey) -> Option<&[crate::domain::entities::AssetFile]> {
        self.index.get(&key).map(|&idx| self.assets[idx].files())
    }

    /// All produced files, in registration order
    pub fn all_files(&self) -> impl Iterator<Item = &crate::domain::entities::AssetFile> {
        self.assets.iter().flat_map(|asset| asset.files().iter())
    }

    /// Per-asset summary, in registration order
    pub fn report(&self) -> Vec<AssetStatus> {
        self.assets
            .iter()
            .zip(&self.states)
            .map(|(asset, &state)| AssetStatus {
                key: asset.key(),
                name: asset.name().to_string(),
                state,
                file_count: asset.files().len(),
            })
            .collect()
    }
}
