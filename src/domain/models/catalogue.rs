use std::fmt;

use serde::{Deserialize, Serialize};

use super::Icon;

/// Backend record id. Integer keys and string keys (UUIDs, ObjectIds) both
/// decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Int(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{id}"),
            RecordId::Text(id) => f.write_str(id),
        }
    }
}

/// A phase of the business lifecycle grouping related services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub services: Vec<Service>,
}

impl Stage {
    /// Copy of this stage holding only the services relevant for `business_type`.
    pub fn filtered(&self, business_type: &str) -> Stage {
        Stage {
            id: self.id.clone(),
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            services: self
                .services
                .iter()
                .filter(|service| service.is_relevant_for(business_type))
                .cloned()
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: RecordId,
    /// Routing key used for the service detail page.
    pub service_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub relevant_for: Vec<String>,
}

impl Service {
    pub fn is_relevant_for(&self, business_type: &str) -> bool {
        self.relevant_for.iter().any(|tag| tag == business_type)
    }

    pub fn resolved_icon(&self) -> Option<Icon> {
        Icon::from_name(&self.icon)
    }

    pub fn detail_path(&self) -> String {
        format!("/service/{}", urlencoding::encode(&self.service_id))
    }
}

/// Keep, per stage, only the services tagged with `business_type`.
///
/// Stages themselves are never dropped, so the output always has the same
/// length and order as the input.
pub fn filter_stages(stages: &[Stage], business_type: &str) -> Vec<Stage> {
    stages
        .iter()
        .map(|stage| stage.filtered(business_type))
        .collect()
}

/// Client-selected business type driving the catalogue filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BusinessType {
    #[default]
    Startup,
    ExistingBusiness,
}

impl BusinessType {
    pub fn tag(&self) -> &'static str {
        match self {
            BusinessType::Startup => "startup",
            BusinessType::ExistingBusiness => "existing-business",
        }
    }

    /// Anything other than `startup` selects the existing-business view.
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim() == "startup" {
            BusinessType::Startup
        } else {
            BusinessType::ExistingBusiness
        }
    }

    pub fn progress_percentage(&self) -> u8 {
        match self {
            BusinessType::Startup => 20,
            BusinessType::ExistingBusiness => 75,
        }
    }
}

impl fmt::Display for BusinessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
