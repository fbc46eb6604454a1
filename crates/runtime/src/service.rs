//! Save/load facade over registered grids.
//!
//! [`SnapshotService`] owns the grid registry, the tile identity table, and
//! the repository. Saving captures every registered grid; loading replays
//! the stored snapshot into the grids it names.
use tilemap_content::ContentFactory;
use tilemap_core::{
    DecodeReport, EncodeReport, GridRegistry, SnapshotDocument, SparseGrid, TileCatalogEntry,
    TileGrid, TileIdentityTable, decode, encode,
};

use crate::config::SaveConfig;
use crate::diagnostics;
use crate::error::{Result, RuntimeError};
use crate::repository::{FileSnapshotRepository, SnapshotRepository};

pub struct SnapshotService<G = SparseGrid> {
    config: SaveConfig,
    table: TileIdentityTable,
    grids: GridRegistry<G>,
    repository: Box<dyn SnapshotRepository>,
}

impl<G> SnapshotService<G>
where
    G: TileGrid,
{
    pub fn builder() -> SnapshotServiceBuilder<G> {
        SnapshotServiceBuilder::new()
    }

    /// Capture every registered grid and persist the snapshot.
    ///
    /// Overwrites any previously stored snapshot.
    pub fn save(&self) -> Result<EncodeReport> {
        let (document, report) = self.encode();
        self.repository.save(&document)?;
        Ok(report)
    }

    /// Replay the stored snapshot into the registered grids.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet; the grids are left
    /// untouched in that case.
    pub fn load(&mut self) -> Result<Option<DecodeReport>> {
        let Some(document) = self.repository.load()? else {
            tracing::info!("No saved tile snapshot found");
            return Ok(None);
        };

        Ok(Some(self.apply(&document)))
    }

    /// Capture every registered grid without persisting.
    pub fn encode(&self) -> (SnapshotDocument, EncodeReport) {
        let (document, report) = encode(&self.grids, &self.table, self.config.bounds);
        diagnostics::log_encode_report(&report);
        (document, report)
    }

    /// Replay `document` into the registered grids.
    pub fn apply(&mut self, document: &SnapshotDocument) -> DecodeReport {
        let report = decode(document, &mut self.grids, &self.table);
        diagnostics::log_decode_report(&report);
        report
    }

    pub fn has_snapshot(&self) -> bool {
        self.repository.exists()
    }

    pub fn delete_snapshot(&self) -> Result<()> {
        self.repository.delete()?;
        Ok(())
    }

    pub fn grid(&self, name: &str) -> Option<&G> {
        self.grids.get(name)
    }

    pub fn grid_mut(&mut self, name: &str) -> Option<&mut G> {
        self.grids.get_mut(name)
    }

    pub fn grids(&self) -> &GridRegistry<G> {
        &self.grids
    }

    pub fn grids_mut(&mut self) -> &mut GridRegistry<G> {
        &mut self.grids
    }

    pub fn table(&self) -> &TileIdentityTable {
        &self.table
    }

    pub fn config(&self) -> &SaveConfig {
        &self.config
    }
}

/// Builder for [`SnapshotService`].
pub struct SnapshotServiceBuilder<G = SparseGrid> {
    config: SaveConfig,
    table: TileIdentityTable,
    grids: Vec<(String, G)>,
    repository: Option<Box<dyn SnapshotRepository>>,
}

impl<G> Default for SnapshotServiceBuilder<G> {
    fn default() -> Self {
        Self {
            config: SaveConfig::default(),
            table: TileIdentityTable::default(),
            grids: Vec::new(),
            repository: None,
        }
    }
}

impl<G> SnapshotServiceBuilder<G>
where
    G: TileGrid,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: SaveConfig) -> Self {
        self.config = config;
        self
    }

    /// Bind catalog entries into the identity table, in order.
    ///
    /// Rejected entries are logged and the earlier binding is kept.
    pub fn catalog(mut self, entries: impl IntoIterator<Item = TileCatalogEntry>) -> Self {
        for entry in entries {
            if let Err(issue) = self.table.bind(entry) {
                diagnostics::log_issue(&issue);
            }
        }
        self
    }

    /// Use a prebuilt identity table, replacing any bound entries.
    pub fn table(mut self, table: TileIdentityTable) -> Self {
        self.table = table;
        self
    }

    /// Register a grid. Names must be unique; duplicates fail at build time.
    pub fn grid(mut self, name: impl Into<String>, grid: G) -> Self {
        self.grids.push((name.into(), grid));
        self
    }

    /// Store snapshots in `repository` instead of the configured file.
    pub fn repository(mut self, repository: impl SnapshotRepository + 'static) -> Self {
        self.repository = Some(Box::new(repository));
        self
    }

    pub fn build(self) -> Result<SnapshotService<G>> {
        let mut grids = GridRegistry::new();
        for (name, grid) in self.grids {
            grids.register(name, grid)?;
        }

        let repository = match self.repository {
            Some(repository) => repository,
            None => Box::new(FileSnapshotRepository::from_config(&self.config)?),
        };

        tracing::debug!(
            grids = grids.len(),
            tiles = self.table.len(),
            bounds = %self.config.bounds,
            "Built snapshot service"
        );

        Ok(SnapshotService {
            config: self.config,
            table: self.table,
            grids,
            repository,
        })
    }
}

impl SnapshotServiceBuilder<SparseGrid> {
    /// Load catalog, layouts, and save settings from a content directory.
    ///
    /// Settings found in the directory are applied on top of the current
    /// configuration.
    pub fn content(mut self, factory: &ContentFactory) -> Result<Self> {
        let catalog = factory
            .load_catalog()
            .map_err(|e| RuntimeError::Content(format!("{:#}", e)))?;
        self = self.catalog(catalog);

        let layouts = factory
            .load_layouts(&self.table)
            .map_err(|e| RuntimeError::Content(format!("{:#}", e)))?;
        for (name, grid) in layouts {
            self = self.grid(name, grid);
        }

        if let Some(settings) = factory
            .load_settings()
            .map_err(|e| RuntimeError::Content(format!("{:#}", e)))?
        {
            self.config = self.config.with_settings(&settings)?;
        }

        tracing::info!(
            "Loaded tile content from {}",
            factory.data_dir().display()
        );

        Ok(self)
    }
}
