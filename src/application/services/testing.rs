//! In-memory fakes of the backend gateways for service tests.

use parking_lot::Mutex;

use crate::domain::{
    ContactInquiry, DomainError, Settings, SettingsPatch, SiteSettingsPatch, Stage,
};

use super::gateways::{AdminGateway, SiteApi};

pub(crate) struct FakeSiteApi {
    settings: Mutex<Result<SiteSettingsPatch, DomainError>>,
    stages: Mutex<Result<Vec<Stage>, DomainError>>,
    contact: Mutex<Result<(), DomainError>>,
    submitted: Mutex<Vec<ContactInquiry>>,
}

impl Default for FakeSiteApi {
    fn default() -> Self {
        Self {
            settings: Mutex::new(Ok(SiteSettingsPatch::default())),
            stages: Mutex::new(Ok(Vec::new())),
            contact: Mutex::new(Ok(())),
            submitted: Mutex::new(Vec::new()),
        }
    }
}

impl FakeSiteApi {
    pub fn with_settings(self, result: Result<SiteSettingsPatch, DomainError>) -> Self {
        self.set_settings(result);
        self
    }

    pub fn with_stages(self, result: Result<Vec<Stage>, DomainError>) -> Self {
        *self.stages.lock() = result;
        self
    }

    pub fn set_settings(&self, result: Result<SiteSettingsPatch, DomainError>) {
        *self.settings.lock() = result;
    }

    pub fn set_contact(&self, result: Result<(), DomainError>) {
        *self.contact.lock() = result;
    }

    pub fn submissions(&self) -> Vec<ContactInquiry> {
        self.submitted.lock().clone()
    }
}

impl SiteApi for FakeSiteApi {
    fn public_settings(&self) -> Result<SiteSettingsPatch, DomainError> {
        self.settings.lock().clone()
    }

    fn stages(&self) -> Result<Vec<Stage>, DomainError> {
        self.stages.lock().clone()
    }

    fn submit_contact(&self, inquiry: &ContactInquiry) -> Result<(), DomainError> {
        self.submitted.lock().push(inquiry.clone());
        self.contact.lock().clone()
    }
}

pub(crate) struct FakeAdminGateway {
    load: Mutex<Result<SettingsPatch, DomainError>>,
    save: Mutex<Result<(), DomainError>>,
    saved: Mutex<Vec<Settings>>,
}

impl Default for FakeAdminGateway {
    fn default() -> Self {
        Self {
            load: Mutex::new(Ok(SettingsPatch::default())),
            save: Mutex::new(Ok(())),
            saved: Mutex::new(Vec::new()),
        }
    }
}

impl FakeAdminGateway {
    pub fn with_load(self, result: Result<SettingsPatch, DomainError>) -> Self {
        self.set_load(result);
        self
    }

    pub fn set_load(&self, result: Result<SettingsPatch, DomainError>) {
        *self.load.lock() = result;
    }

    pub fn set_save(&self, result: Result<(), DomainError>) {
        *self.save.lock() = result;
    }

    pub fn saved(&self) -> Vec<Settings> {
        self.saved.lock().clone()
    }
}

impl AdminGateway for FakeAdminGateway {
    fn load_settings(&self) -> Result<SettingsPatch, DomainError> {
        self.load.lock().clone()
    }

    fn save_settings(&self, settings: &Settings) -> Result<(), DomainError> {
        self.saved.lock().push(settings.clone());
        self.save.lock().clone()
    }
}
