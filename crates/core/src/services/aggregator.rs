use parking_lot::Mutex;
use tracing::{debug, info};

use crate::index::{IndexFile, UnitFacts};
use crate::merge::{merge_symbol, ProjectRoot};
use crate::slab::{
    RefSlab, RefSlabBuilder, RelationSlab, RelationSlabBuilder, SymbolSlab, SymbolSlabBuilder,
};

/// Collects fact batches from concurrently running unit analyses into one index.
///
/// Every entry point takes `&self` and may be called from any thread. Each
/// builder sits behind its own lock, held for the whole batch, so the three
/// fact kinds never contend with each other. `finalize` consumes the
/// aggregator, so no batch can arrive after (or during) finalization.
#[derive(Debug)]
pub struct Aggregator {
    project_root: ProjectRoot,
    symbols: Mutex<SymbolSlabBuilder>,
    refs: Mutex<RefSlabBuilder>,
    relations: Mutex<RelationSlabBuilder>,
}

impl Aggregator {
    pub fn new(project_root: ProjectRoot) -> Self {
        Self {
            project_root,
            symbols: Mutex::new(SymbolSlabBuilder::new()),
            refs: Mutex::new(RefSlabBuilder::new()),
            relations: Mutex::new(RelationSlabBuilder::new()),
        }
    }

    pub fn project_root(&self) -> &ProjectRoot {
        &self.project_root
    }

    /// Insert each symbol, merging with any record already held for its id.
    pub fn on_symbol_batch(&self, batch: SymbolSlab) {
        let incoming = batch.len();
        let mut merged = 0usize;
        {
            let mut symbols = self.symbols.lock();
            for symbol in batch {
                let collided = symbols.insert_or_merge(symbol, |existing, incoming| {
                    merge_symbol(existing, incoming, &self.project_root)
                });
                if collided {
                    merged += 1;
                }
            }
        }
        debug!(incoming, merged, "applied symbol batch");
    }

    pub fn on_ref_batch(&self, batch: RefSlab) {
        let incoming = batch.num_refs();
        {
            let mut refs = self.refs.lock();
            for (id, reference) in batch {
                refs.insert(id, reference);
            }
        }
        debug!(incoming, "applied ref batch");
    }

    pub fn on_relation_batch(&self, batch: RelationSlab) {
        let incoming = batch.len();
        {
            let mut relations = self.relations.lock();
            for relation in batch {
                relations.insert(relation);
            }
        }
        debug!(incoming, "applied relation batch");
    }

    /// Deliver all three batches of one unit.
    pub fn on_unit(&self, facts: UnitFacts) {
        self.on_symbol_batch(facts.symbols);
        self.on_ref_batch(facts.refs);
        self.on_relation_batch(facts.relations);
    }

    /// Freeze every builder into its slab.
    pub fn finalize(self) -> IndexFile {
        let index = IndexFile {
            symbols: self.symbols.into_inner().build(),
            refs: self.refs.into_inner().build(),
            relations: self.relations.into_inner().build(),
        };
        info!(
            symbols = index.symbols.len(),
            refs = index.refs.num_refs(),
            relations = index.relations.len(),
            "finalized index"
        );
        index
    }
}
