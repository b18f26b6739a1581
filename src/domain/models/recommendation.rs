use serde::{Deserialize, Serialize};

/// Kind of recommendation card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationType {
    Service,
    Professional,
    Deal,
    Trending,
}

impl RecommendationType {
    pub fn badge(&self) -> &'static str {
        match self {
            RecommendationType::Service => "Service",
            RecommendationType::Professional => "Pro recommandé",
            RecommendationType::Deal => "Offre",
            RecommendationType::Trending => "Tendance",
        }
    }
}

/// Three-level priority used as a ranking tiebreaker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    pub fn rank(&self) -> u8 {
        match self {
            Urgency::High => 3,
            Urgency::Medium => 2,
            Urgency::Low => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::High => "Urgent",
            Urgency::Medium => "Bientôt",
            Urgency::Low => "Flexible",
        }
    }
}

/// Recommendation candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationItem {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: RecommendationType,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub price: Option<u32>,
    #[serde(default)]
    pub original_price: Option<u32>,
    /// Discount percentage
    #[serde(default)]
    pub discount: Option<u8>,
    #[serde(default)]
    pub distance: Option<f32>,
    #[serde(default)]
    pub availability: Option<String>,
    /// Why the item is shown ("Basé sur vos recherches", ...)
    pub reason: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub urgency: Option<Urgency>,
    #[serde(default)]
    pub popularity: Option<f32>,
    #[serde(default)]
    pub match_score: Option<f32>,
}

impl RecommendationItem {
    /// match_score, else popularity, else 0
    pub fn primary_score(&self) -> f32 {
        self.match_score.or(self.popularity).unwrap_or(0.0)
    }

    /// Absent urgency ranks as low
    pub fn urgency_rank(&self) -> u8 {
        self.urgency.map(|u| u.rank()).unwrap_or(1)
    }
}
