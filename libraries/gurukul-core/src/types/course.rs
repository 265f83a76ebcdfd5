//! Course types

use super::ids::CourseId;
use serde::{Deserialize, Serialize};

/// A course owned by the partner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Unique course identifier
    #[serde(rename = "_id")]
    pub id: CourseId,

    /// Course title
    pub title: String,

    /// Long-form description
    pub description: Option<String>,

    /// Category label
    pub category: Option<String>,

    /// Price in the platform currency
    pub price: Option<f64>,

    /// Thumbnail image URL
    pub thumbnail_url: Option<String>,

    /// Intro/teaser video URL
    pub intro_video_url: Option<String>,

    /// Whether the course is visible to learners
    pub published: Option<bool>,

    /// Whether completion grants a certificate
    pub is_certificate_course: Option<bool>,

    /// Total view count
    pub views_total: Option<u64>,

    /// Views by paying learners only
    pub views_paid_only: Option<u64>,

    /// Earnings attributed to this course
    pub partner_earnings: Option<f64>,
}
