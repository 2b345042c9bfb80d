//! Educational resource record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateUrl, ValidationError};

use canopy_core::types::id::ResourceId;

/// Kind of educational resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    /// Long-form rich text.
    Article,
    /// Hosted video.
    Video,
    /// Downloadable guide.
    Guide,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Video => "video",
            Self::Guide => "guide",
        }
    }
}

/// Body of a resource together with the metadata its type carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResourceContent {
    /// Rich-text article.
    Article {
        /// Rich-text body.
        body: String,
        /// Estimated reading time in minutes.
        read_time_minutes: u32,
    },
    /// Video resource.
    Video {
        /// Video URL.
        video_url: String,
    },
    /// Downloadable guide.
    Guide {
        /// Number of pages.
        page_count: u32,
        /// File URL.
        file_url: String,
    },
}

impl ResourceContent {
    /// The resource type implied by the content.
    pub fn resource_type(&self) -> ResourceType {
        match self {
            Self::Article { .. } => ResourceType::Article,
            Self::Video { .. } => ResourceType::Video,
            Self::Guide { .. } => ResourceType::Guide,
        }
    }

    /// Link to the hosted media, if the type has one.
    pub fn media_url(&self) -> Option<&str> {
        match self {
            Self::Article { .. } => None,
            Self::Video { video_url } => Some(video_url.as_str()),
            Self::Guide { file_url, .. } => Some(file_url.as_str()),
        }
    }
}

fn validate_content(content: &ResourceContent) -> Result<(), ValidationError> {
    match content.media_url() {
        Some(url) if !url.validate_url() => Err(ValidationError::new("url")),
        _ => Ok(()),
    }
}

/// An article, video or guide in the learning section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct EducationalResource {
    /// Resource identifier.
    pub id: ResourceId,
    /// Title.
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Short description.
    pub description: String,
    /// Topic category, e.g. "planting" or "climate".
    pub category: String,
    /// Content and type-specific metadata.
    #[validate(custom(function = "validate_content"))]
    pub content: ResourceContent,
    /// When the resource was published.
    pub created_at: DateTime<Utc>,
}

impl EducationalResource {
    /// Resource type.
    pub fn resource_type(&self) -> ResourceType {
        self.content.resource_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(content: ResourceContent) -> EducationalResource {
        EducationalResource {
            id: ResourceId::new(),
            title: "Planting Guide".to_string(),
            description: "Seasonal planting tips".to_string(),
            category: "planting".to_string(),
            content,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_article_needs_no_url() {
        let article = resource(ResourceContent::Article {
            body: "<p>Dig a hole</p>".to_string(),
            read_time_minutes: 4,
        });
        assert!(article.validate().is_ok());
    }

    #[test]
    fn test_media_urls_validated() {
        let video = resource(ResourceContent::Video {
            video_url: "https://videos.example.org/oak.mp4".to_string(),
        });
        assert!(video.validate().is_ok());

        let bad_video = resource(ResourceContent::Video {
            video_url: "not a url".to_string(),
        });
        assert!(bad_video.validate().is_err());

        let bad_guide = resource(ResourceContent::Guide {
            page_count: 12,
            file_url: "guide.pdf".to_string(),
        });
        assert!(bad_guide.validate().is_err());
    }
}
