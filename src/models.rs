use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    pub score: f64,
}

/// What the mood panel shows. Live labels come from the backend's emotion
/// model and are not limited to the three demo labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodAnalysis {
    pub sentiment: String,
    pub score: f64,
    pub message: Option<String>,
}

impl From<SentimentResult> for MoodAnalysis {
    fn from(result: SentimentResult) -> Self {
        Self {
            sentiment: result.sentiment.as_str().to_string(),
            score: result.score,
            message: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedFlashcards {
    pub flashcards: Vec<Flashcard>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedRecipes {
    pub recipes: String,
    pub message: Option<String>,
}

/// History rows mirror nullable backend columns, so every field may be `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntry {
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub entry_text: Option<String>,
    #[serde(default)]
    pub emotion_label: Option<String>,
    #[serde(default)]
    pub sentiment_score: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedRecipe {
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub recipe_text: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendStatus {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub database_connected: bool,
    #[serde(default)]
    pub openai_available: bool,
    #[serde(default)]
    pub hf_available: bool,
}

// Backend reply bodies.

#[derive(Debug, Deserialize)]
pub struct FlashcardsReply {
    pub flashcards: Option<Vec<Flashcard>>,
    pub message: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MoodReply {
    #[serde(default)]
    pub success: bool,
    pub sentiment: Option<String>,
    pub score: Option<f64>,
    pub message: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecipesReply {
    #[serde(default)]
    pub success: bool,
    pub recipes: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MoodEntriesReply {
    pub entries: Option<Vec<MoodEntry>>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SavedRecipesReply {
    pub recipes: Option<Vec<SavedRecipe>>,
    pub error: Option<String>,
}

// Requests from the page.

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct IngredientsRequest {
    #[serde(default)]
    pub ingredients: String,
}

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    pub tab: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelStatus {
    Live,
    Demo,
    Notice,
    Error,
}

/// Body of every action endpoint: a status tag plus the markup to swap in.
#[derive(Debug, Serialize, Deserialize)]
pub struct Panel {
    pub status: PanelStatus,
    pub html: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub mode: String,
    pub api_base: String,
    pub backend: Option<BackendStatus>,
}
