//! Extraction followed by validation.

use crate::config::Config;
use crate::error::Result;
use freightmail_domain::ShipmentRecord;
use freightmail_extractor::Extractor;
use freightmail_gatekeeper::Gatekeeper;

/// Extractor and gatekeeper configured from one [`Config`].
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    extractor: Extractor,
    gatekeeper: Gatekeeper,
}

impl Pipeline {
    /// Create a pipeline from already configured stages.
    pub fn new(extractor: Extractor, gatekeeper: Gatekeeper) -> Self {
        Self {
            extractor,
            gatekeeper,
        }
    }

    /// Build both stages from the configuration file sections.
    pub fn from_config(config: &Config) -> Result<Self> {
        let extractor = Extractor::new(config.extractor.clone())?;
        let gatekeeper = Gatekeeper::new(config.validation.clone());
        Ok(Self::new(extractor, gatekeeper))
    }

    /// Assemble a record from raw text and attach its validation.
    pub fn process_text(&self, raw_text: &str, filename: &str) -> ShipmentRecord {
        let mut record = self.extractor.assemble(raw_text, filename);
        self.gatekeeper.apply(&mut record);
        record
    }
}
