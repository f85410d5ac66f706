//! Gadget collaborator Trait

/// Fire-and-forget widgets embedded in the detail view.
pub trait Gadgets: Send + Sync {
    /// Load version history of a security into the versions region
    fn load_versions(&self, id: &str);

    /// Attach a time-series gadget to a named slot of the detail panel
    fn attach_timeseries(&self, slot: &str, hts_id: &str);
}
