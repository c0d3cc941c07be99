//! Static content of the page.
//!
//! Everything here is literal configuration built once at startup and never
//! mutated. The renderer decides how each piece looks.

mod data;

pub use data::site_content;

use crate::domain::model::Section;
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{
    validate_asset_reference, validate_non_empty_string, validate_url, Validate,
};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillIcon {
    Laptop,
    Server,
    Binary,
    Globe,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub icon: SkillIcon,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub section: Section,
}

impl NavItem {
    pub fn new(label: impl Into<String>, section: Section) -> Self {
        Self {
            label: label.into(),
            section,
        }
    }

    pub fn href(&self) -> String {
        self.section.anchor()
    }

    pub fn is_active(&self, active: Section) -> bool {
        self.section == active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialNetwork {
    Github,
    Linkedin,
    Twitter,
    Instagram,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub network: SocialNetwork,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutSection {
    pub education: String,
    pub passion: String,
    pub what_i_do: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub navigation: Vec<NavItem>,
    pub about: AboutSection,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<ProjectEntry>,
}

impl SiteContent {
    pub fn copyright_line(&self, year: i32) -> String {
        format!("© {} {}. All rights reserved.", year, self.profile.name)
    }

    pub fn current_copyright_line(&self) -> String {
        self.copyright_line(chrono::Utc::now().year())
    }

    /// JSON document handed to the renderer.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn nav_item(&self, section: Section) -> Option<&NavItem> {
        self.navigation.iter().find(|item| item.section == section)
    }
}

impl Validate for SiteContent {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("profile.name", &self.profile.name)?;
        validate_non_empty_string("profile.headline", &self.profile.headline)?;
        for social in &self.profile.socials {
            validate_url("profile.socials.url", &social.url)?;
        }

        for section in Section::ALL {
            if self.nav_item(section).is_none() {
                return Err(PortfolioError::ContentError {
                    message: format!("navigation has no entry for '{}'", section.id()),
                });
            }
        }

        for skill in &self.skills {
            validate_non_empty_string("skills.category", &skill.category)?;
            if skill.items.is_empty() {
                return Err(PortfolioError::ContentError {
                    message: format!("skill category '{}' has no items", skill.category),
                });
            }
            for item in &skill.items {
                validate_non_empty_string("skills.items", item)?;
            }
        }

        for project in &self.projects {
            validate_non_empty_string("projects.title", &project.title)?;
            validate_non_empty_string("projects.description", &project.description)?;
            validate_asset_reference("projects.image_url", &project.image_url)?;
            validate_url("projects.link", &project.link)?;
        }

        Ok(())
    }
}
