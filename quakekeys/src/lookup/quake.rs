//! Earthquake keys lookup.
//!
//! Resolves each location against an area-peril grid and a vulnerability
//! dictionary keyed on building class and occupancy.

use std::fmt;
use std::sync::Arc;

use super::model::{ModelInfo, PerilId};
use super::record::OutputRecord;
use super::settings::LookupSettings;
use super::{KeysLookup, LookupError};
use crate::area_peril::{AreaPerilIndex, GridSpacing};
use crate::location::{LocationRecord, LocationSchema};
use crate::log::{Logger, NoOpLogger};
use crate::vulnerability::VulnerabilityIndex;
use crate::{log_debug, log_info};

/// Reference data and options for [`QuakeKeysLookup`].
///
/// Indexes are held in `Arc`s so several engines can share one frozen copy.
pub struct QuakeReference {
    area_perils: Arc<AreaPerilIndex>,
    vulnerabilities: Arc<VulnerabilityIndex>,
    model: ModelInfo,
    peril: PerilId,
    schema: LocationSchema,
    logger: Arc<dyn Logger>,
}

impl QuakeReference {
    /// Reference data from pre-built indexes, with default model options.
    pub fn new(
        area_perils: Arc<AreaPerilIndex>,
        vulnerabilities: Arc<VulnerabilityIndex>,
    ) -> Self {
        Self {
            area_perils,
            vulnerabilities,
            model: ModelInfo::default(),
            peril: PerilId::Quake,
            schema: LocationSchema::default(),
            logger: Arc::new(NoOpLogger),
        }
    }

    /// Load reference tables as described by `settings`.
    ///
    /// With no keys-data directory both indexes start empty.
    pub fn load(settings: &LookupSettings) -> Result<Self, LookupError> {
        let spacing = GridSpacing::new(settings.grid_spacing)?;

        let area_perils = match settings.areaperil_path() {
            Some(path) => AreaPerilIndex::from_csv_path(path, spacing, settings.bucket_size)?,
            None => AreaPerilIndex::build_with_bucket_size(
                spacing,
                settings.bucket_size,
                Vec::new(),
            )?,
        };

        let vulnerabilities = match settings.vulnerability_path() {
            Some(path) => VulnerabilityIndex::from_csv_path(path, settings.key_fields.clone())?,
            None => VulnerabilityIndex::empty(settings.key_fields.clone())?,
        };

        Ok(Self::new(Arc::new(area_perils), Arc::new(vulnerabilities))
            .model(settings.model.clone())
            .peril(settings.peril)
            .schema(settings.schema.clone()))
    }

    /// Set the model identity.
    pub fn model(mut self, model: ModelInfo) -> Self {
        self.model = model;
        self
    }

    /// Set the peril tagged on output records.
    pub fn peril(mut self, peril: PerilId) -> Self {
        self.peril = peril;
        self
    }

    /// Set the location column names.
    pub fn schema(mut self, schema: LocationSchema) -> Self {
        self.schema = schema;
        self
    }

    /// Set the logger used by the engine.
    pub fn logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }
}

/// Keys lookup engine for earthquake models.
pub struct QuakeKeysLookup {
    area_perils: Arc<AreaPerilIndex>,
    vulnerabilities: Arc<VulnerabilityIndex>,
    model: ModelInfo,
    peril: PerilId,
    schema: LocationSchema,
    logger: Arc<dyn Logger>,
}

impl QuakeKeysLookup {
    /// Load reference tables and build the engine in one step.
    pub fn from_settings(
        settings: &LookupSettings,
        logger: Arc<dyn Logger>,
    ) -> Result<Self, LookupError> {
        Self::build(QuakeReference::load(settings)?.logger(logger))
    }

    /// Model identity.
    pub fn model(&self) -> &ModelInfo {
        &self.model
    }

    /// The spatial index.
    pub fn area_perils(&self) -> &Arc<AreaPerilIndex> {
        &self.area_perils
    }

    /// The vulnerability dictionary.
    pub fn vulnerabilities(&self) -> &Arc<VulnerabilityIndex> {
        &self.vulnerabilities
    }
}

impl KeysLookup for QuakeKeysLookup {
    type Reference = QuakeReference;

    fn build(reference: QuakeReference) -> Result<Self, LookupError> {
        let QuakeReference {
            area_perils,
            vulnerabilities,
            model,
            peril,
            schema,
            logger,
        } = reference;

        log_info!(
            logger,
            "Keys lookup ready: model {}, peril {}, {} area cells, {} vulnerability keys",
            model,
            peril,
            area_perils.len(),
            vulnerabilities.len()
        );

        Ok(Self {
            area_perils,
            vulnerabilities,
            model,
            peril,
            schema,
            logger,
        })
    }

    fn peril_id(&self) -> PerilId {
        self.peril
    }

    fn schema(&self) -> &LocationSchema {
        &self.schema
    }

    fn lookup_location(&self, location: &LocationRecord) -> OutputRecord {
        let area_peril = self.area_perils.lookup(location.lon, location.lat);
        let vulnerability = self.vulnerabilities.query(location);
        let record = OutputRecord::from_outcomes(location, self.peril, &area_peril, &vulnerability);

        log_debug!(
            self.logger,
            "Location {}: {} (area peril {:?}, vulnerability {:?})",
            record.id,
            record.status,
            record.area_peril_id,
            record.vulnerability_id
        );

        record
    }
}

impl fmt::Debug for QuakeKeysLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuakeKeysLookup")
            .field("model", &self.model)
            .field("peril", &self.peril)
            .field("area_cells", &self.area_perils.len())
            .field("vulnerability_keys", &self.vulnerabilities.len())
            .finish_non_exhaustive()
    }
}
