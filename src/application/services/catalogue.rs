use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::dtos::CatalogueView;
use crate::domain::{filter_stages, BusinessType, DomainError, Notification, Stage};

use super::gateways::{Notifier, SiteApi};

pub const STAGES_FAILED: &str = "Failed to load services. Please try again.";

/// Home page state: the stage list from the backend and the selected
/// business type narrowing it.
pub struct CataloguePage {
    api: Arc<dyn SiteApi>,
    notifier: Arc<dyn Notifier>,
    stages: Vec<Stage>,
    business_type: BusinessType,
    loading: bool,
}

impl CataloguePage {
    pub fn new(api: Arc<dyn SiteApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            stages: Vec::new(),
            business_type: BusinessType::default(),
            loading: true,
        }
    }

    /// Fetch the stage list. On failure an error notification is raised and
    /// the previous list stays.
    pub fn load(&mut self) -> Result<(), DomainError> {
        self.loading = true;
        let fetched = self.api.stages();
        self.loading = false;

        match fetched {
            Ok(stages) => {
                debug!(target: "hdmonks::catalogue", count = stages.len(), "stages loaded");
                self.stages = stages;
                Ok(())
            }
            Err(err) => {
                warn!(target: "hdmonks::catalogue", error = %err, "fetching stages failed");
                self.notifier.notify(Notification::error(STAGES_FAILED));
                Err(err)
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn business_type(&self) -> BusinessType {
        self.business_type
    }

    pub fn select_business_type(&mut self, business_type: BusinessType) {
        self.business_type = business_type;
    }

    pub fn progress_percentage(&self) -> u8 {
        self.business_type.progress_percentage()
    }

    pub fn visible_stages(&self) -> Vec<Stage> {
        filter_stages(&self.stages, self.business_type.tag())
    }

    pub fn view(&self) -> CatalogueView {
        CatalogueView::new(self.business_type, self.visible_stages())
    }
}
