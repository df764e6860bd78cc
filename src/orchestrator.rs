use crate::config::Mode;
use crate::errors::ClientError;
use crate::models::{
    BackendStatus, FlashcardsReply, GeneratedFlashcards, GeneratedRecipes, MoodAnalysis,
    MoodEntriesReply, MoodEntry, MoodReply, RecipesReply, SavedRecipe, SavedRecipesReply,
};
use crate::synth;
use crate::transport::Transport;
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Live,
    Demo,
}

/// A settled user action. `absorbed` holds the failure a demo result stands in for.
#[derive(Debug, Clone)]
pub struct Outcome<T> {
    pub origin: Origin,
    pub value: T,
    pub absorbed: Option<String>,
}

#[derive(Debug, Clone)]
pub enum History<T> {
    Items(Vec<T>),
    RequiresBackend(&'static str),
}

struct Action {
    name: &'static str,
    path: &'static str,
    empty_input: &'static str,
    unreachable: &'static str,
    rejected: &'static str,
}

const FLASHCARDS: Action = Action {
    name: "flashcards",
    path: "/generate",
    empty_input: "Please enter some study text",
    unreachable: "Failed to generate flashcards. Make sure the backend server is running.",
    rejected: "Flashcard generation failed",
};

const MOOD: Action = Action {
    name: "mood entry",
    path: "/mood/entry",
    empty_input: "Please enter your feelings",
    unreachable: "Failed to analyze mood. Make sure the backend server is running.",
    rejected: "Analysis failed",
};

const RECIPES: Action = Action {
    name: "recipes",
    path: "/recipes/generate",
    empty_input: "Please enter some ingredients",
    unreachable: "Failed to generate recipes. Make sure the backend server is running.",
    rejected: "Recipe generation failed",
};

struct Listing {
    name: &'static str,
    path: &'static str,
    requires_backend: &'static str,
    failed: &'static str,
}

const MOOD_HISTORY: Listing = Listing {
    name: "mood entries",
    path: "/mood/entries",
    requires_backend: "Mood history requires backend deployment.",
    failed: "Failed to load mood entries",
};

const RECIPE_HISTORY: Listing = Listing {
    name: "saved recipes",
    path: "/recipes",
    requires_backend: "Saved recipes require backend deployment.",
    failed: "Failed to load recipes",
};

/// Turns a decoded backend body into the live value, or the backend's own
/// error message (`None` when it gave none).
trait Verdict: DeserializeOwned {
    type Output;

    fn verdict(self) -> Result<Self::Output, Option<String>>;
}

impl Verdict for FlashcardsReply {
    type Output = GeneratedFlashcards;

    fn verdict(self) -> Result<GeneratedFlashcards, Option<String>> {
        if let Some(error) = self.error {
            return Err(Some(error));
        }
        let flashcards = self.flashcards.ok_or(None::<String>)?;
        Ok(GeneratedFlashcards {
            flashcards,
            message: self.message,
        })
    }
}

impl Verdict for MoodReply {
    type Output = MoodAnalysis;

    fn verdict(self) -> Result<MoodAnalysis, Option<String>> {
        if !self.success {
            return Err(self.error);
        }
        Ok(MoodAnalysis {
            sentiment: self.sentiment.unwrap_or_else(|| "neutral".to_string()),
            score: self.score.unwrap_or_default(),
            message: self.message,
        })
    }
}

impl Verdict for RecipesReply {
    type Output = GeneratedRecipes;

    fn verdict(self) -> Result<GeneratedRecipes, Option<String>> {
        if !self.success {
            return Err(self.error);
        }
        let recipes = self.recipes.ok_or(None::<String>)?;
        Ok(GeneratedRecipes {
            recipes,
            message: self.message,
        })
    }
}

enum Settled<T> {
    Succeeded(T),
    Absorbed(ClientError),
}

impl<T> Settled<T> {
    fn or_demo(self, synthesize: impl FnOnce() -> T) -> Outcome<T> {
        match self {
            Settled::Succeeded(value) => Outcome {
                origin: Origin::Live,
                value,
                absorbed: None,
            },
            Settled::Absorbed(err) => Outcome {
                origin: Origin::Demo,
                value: synthesize(),
                absorbed: Some(err.to_string()),
            },
        }
    }
}

/// Runs each user action against the backend and decides, on failure,
/// between surfacing the error (local mode) and a demo result (demo mode).
pub struct Orchestrator<T> {
    transport: T,
    mode: Mode,
    rng: Mutex<StdRng>,
}

impl<T: Transport> Orchestrator<T> {
    pub fn new(transport: T, mode: Mode, rng: StdRng) -> Self {
        Self {
            transport,
            mode,
            rng: Mutex::new(rng),
        }
    }

    pub fn with_seed(transport: T, mode: Mode, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(transport, mode, rng)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn generate_flashcards(
        &self,
        text: &str,
    ) -> Result<Outcome<GeneratedFlashcards>, ClientError> {
        let text = require(text, &FLASHCARDS)?;
        let attempt = self
            .attempt::<FlashcardsReply>(&FLASHCARDS, json!({ "text": text }))
            .await;
        let settled = self.settle(&FLASHCARDS, attempt)?;
        Ok(settled.or_demo(|| GeneratedFlashcards {
            flashcards: synth::generate_demo_flashcards(text),
            message: None,
        }))
    }

    pub async fn analyze_mood(&self, text: &str) -> Result<Outcome<MoodAnalysis>, ClientError> {
        let text = require(text, &MOOD)?;
        let attempt = self
            .attempt::<MoodReply>(&MOOD, json!({ "text": text }))
            .await;
        let settled = self.settle(&MOOD, attempt)?;
        let mut rng = self.rng.lock().await;
        Ok(settled.or_demo(|| synth::analyze_demo_sentiment(text, &mut *rng).into()))
    }

    pub async fn generate_recipes(
        &self,
        ingredients: &str,
    ) -> Result<Outcome<GeneratedRecipes>, ClientError> {
        let ingredients = require(ingredients, &RECIPES)?;
        let attempt = self
            .attempt::<RecipesReply>(&RECIPES, json!({ "ingredients": ingredients }))
            .await;
        let settled = self.settle(&RECIPES, attempt)?;
        Ok(settled.or_demo(|| GeneratedRecipes {
            recipes: synth::generate_demo_recipes(ingredients),
            message: None,
        }))
    }

    pub async fn mood_entries(&self) -> Result<History<MoodEntry>, ClientError> {
        let Some(body) = self.list(&MOOD_HISTORY).await? else {
            return Ok(History::RequiresBackend(MOOD_HISTORY.requires_backend));
        };
        let reply: MoodEntriesReply = decode(body, MOOD_HISTORY.failed)?;
        match (reply.error, reply.entries) {
            (Some(error), _) => Err(ClientError::Remote(error)),
            (None, entries) => Ok(History::Items(entries.unwrap_or_default())),
        }
    }

    pub async fn saved_recipes(&self) -> Result<History<SavedRecipe>, ClientError> {
        let Some(body) = self.list(&RECIPE_HISTORY).await? else {
            return Ok(History::RequiresBackend(RECIPE_HISTORY.requires_backend));
        };
        let reply: SavedRecipesReply = decode(body, RECIPE_HISTORY.failed)?;
        match (reply.error, reply.recipes) {
            (Some(error), _) => Err(ClientError::Remote(error)),
            (None, recipes) => Ok(History::Items(recipes.unwrap_or_default())),
        }
    }

    /// Asks the backend's diagnostic route what it has available.
    pub async fn backend_status(&self) -> Option<BackendStatus> {
        match self.transport.get_json("/test").await {
            Ok(reply) if reply.is_success() => {
                reply.body.and_then(|body| serde_json::from_value(body).ok())
            }
            Ok(reply) => {
                debug!("backend probe answered {}", reply.status);
                None
            }
            Err(err) => {
                debug!("backend probe failed: {err}");
                None
            }
        }
    }

    async fn attempt<R: Verdict>(
        &self,
        action: &Action,
        body: Value,
    ) -> Result<R::Output, ClientError> {
        let reply = self
            .transport
            .post_json(action.path, body)
            .await
            .map_err(|err| {
                debug!("{} request failed: {err}", action.name);
                ClientError::Transport(action.unreachable.to_string())
            })?;

        let accepted = reply.is_success();
        let Some(body) = reply.body else {
            debug!("{} reply ({}) was not JSON", action.name, reply.status);
            return Err(ClientError::Transport(action.unreachable.to_string()));
        };

        let rejected = |message: Option<String>| {
            ClientError::Remote(message.unwrap_or_else(|| action.rejected.to_string()))
        };

        let decoded: R = serde_json::from_value(body).map_err(|err| {
            debug!("{} reply had an unexpected shape: {err}", action.name);
            rejected(None)
        })?;

        if !accepted {
            let message = match decoded.verdict() {
                Err(message) => message,
                Ok(_) => None,
            };
            return Err(rejected(message));
        }

        decoded.verdict().map_err(rejected)
    }

    fn settle<V>(
        &self,
        action: &Action,
        attempt: Result<V, ClientError>,
    ) -> Result<Settled<V>, ClientError> {
        match attempt {
            Ok(value) => {
                info!("{} served live", action.name);
                Ok(Settled::Succeeded(value))
            }
            Err(err) => match self.mode {
                Mode::Local => {
                    error!("{} failed: {err}", action.name);
                    Err(err)
                }
                Mode::Demo => {
                    warn!("{} failed, serving demo result: {err}", action.name);
                    Ok(Settled::Absorbed(err))
                }
            },
        }
    }

    /// `None` means demo mode, where history is never fetched.
    async fn list(&self, listing: &Listing) -> Result<Option<Value>, ClientError> {
        if self.mode == Mode::Demo {
            return Ok(None);
        }

        let reply = self.transport.get_json(listing.path).await.map_err(|err| {
            error!("loading {} failed: {err}", listing.name);
            ClientError::Transport(listing.failed.to_string())
        })?;

        match reply.body {
            Some(body) => Ok(Some(body)),
            None => {
                error!("{} reply ({}) was not JSON", listing.name, reply.status);
                Err(ClientError::Transport(listing.failed.to_string()))
            }
        }
    }
}

fn require<'a>(input: &'a str, action: &Action) -> Result<&'a str, ClientError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ClientError::Input(action.empty_input));
    }
    Ok(trimmed)
}

fn decode<R: DeserializeOwned>(body: Value, failed: &str) -> Result<R, ClientError> {
    serde_json::from_value(body).map_err(|err| {
        error!("unexpected history reply: {err}");
        ClientError::Remote(failed.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Flashcard;
    use crate::transport::{Reply, TransportError};
    use async_trait::async_trait;
    use std::io;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum Script {
        Answer(u16, Option<Value>),
        Unreachable,
    }

    struct ScriptedTransport {
        script: Script,
        calls: AtomicUsize,
    }

    impl ScriptedTransport {
        fn answering(status: u16, body: Value) -> Self {
            Self::new(Script::Answer(status, Some(body)))
        }

        fn unreachable() -> Self {
            Self::new(Script::Unreachable)
        }

        fn new(script: Script) -> Self {
            Self {
                script,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn respond(&self, path: &str) -> Result<Reply, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.script {
                Script::Answer(status, body) => Ok(Reply {
                    status: *status,
                    body: body.clone(),
                }),
                Script::Unreachable => Err(TransportError::new(
                    path,
                    io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"),
                )),
            }
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn post_json(&self, path: &str, _body: Value) -> Result<Reply, TransportError> {
            self.respond(path)
        }

        async fn get_json(&self, path: &str) -> Result<Reply, TransportError> {
            self.respond(path)
        }
    }

    fn build(transport: ScriptedTransport, mode: Mode) -> Orchestrator<ScriptedTransport> {
        Orchestrator::with_seed(transport, mode, Some(5))
    }

    const STUDY_TEXT: &str = "Mitochondria produce most of the energy in a cell. They have their own DNA.";

    #[tokio::test]
    async fn empty_input_never_reaches_transport() {
        for mode in [Mode::Local, Mode::Demo] {
            let orchestrator = build(ScriptedTransport::unreachable(), mode);

            let err = orchestrator.generate_flashcards("   ").await.unwrap_err();
            assert_eq!(err, ClientError::Input("Please enter some study text"));
            let err = orchestrator.analyze_mood("").await.unwrap_err();
            assert_eq!(err, ClientError::Input("Please enter your feelings"));
            let err = orchestrator.generate_recipes("\n").await.unwrap_err();
            assert_eq!(err, ClientError::Input("Please enter some ingredients"));

            assert_eq!(orchestrator.transport().calls(), 0);
        }
    }

    #[tokio::test]
    async fn live_flashcards_are_passed_through() {
        let transport = ScriptedTransport::answering(
            200,
            json!({
                "flashcards": [{ "question": "What is ATP?", "answer": "Energy currency" }],
                "message": "Generated 1 flashcards!"
            }),
        );
        let orchestrator = build(transport, Mode::Demo);

        let outcome = orchestrator.generate_flashcards(STUDY_TEXT).await.unwrap();
        assert_eq!(outcome.origin, Origin::Live);
        assert_eq!(outcome.absorbed, None);
        assert_eq!(
            outcome.value.flashcards,
            vec![Flashcard {
                question: "What is ATP?".to_string(),
                answer: "Energy currency".to_string(),
            }]
        );
        assert_eq!(outcome.value.message.as_deref(), Some("Generated 1 flashcards!"));
    }

    #[tokio::test]
    async fn demo_mode_synthesizes_flashcards_when_unreachable() {
        let orchestrator = build(ScriptedTransport::unreachable(), Mode::Demo);

        let outcome = orchestrator.generate_flashcards(STUDY_TEXT).await.unwrap();
        assert_eq!(outcome.origin, Origin::Demo);
        assert_eq!(outcome.value.flashcards, synth::generate_demo_flashcards(STUDY_TEXT));
        assert_eq!(
            outcome.absorbed.as_deref(),
            Some("Failed to generate flashcards. Make sure the backend server is running.")
        );
        assert_eq!(orchestrator.transport().calls(), 1);
    }

    #[tokio::test]
    async fn local_mode_surfaces_unreachable_backend() {
        let orchestrator = build(ScriptedTransport::unreachable(), Mode::Local);

        let err = orchestrator.generate_flashcards(STUDY_TEXT).await.unwrap_err();
        assert_eq!(
            err,
            ClientError::Transport(
                "Failed to generate flashcards. Make sure the backend server is running.".to_string()
            )
        );
    }

    #[tokio::test]
    async fn flashcard_error_field_is_a_rejection() {
        let transport = ScriptedTransport::answering(200, json!({ "error": "No text provided" }));
        let orchestrator = build(transport, Mode::Local);

        let err = orchestrator.generate_flashcards(STUDY_TEXT).await.unwrap_err();
        assert_eq!(err, ClientError::Remote("No text provided".to_string()));
    }

    #[tokio::test]
    async fn flashcards_reply_without_cards_is_rejected() {
        let transport = ScriptedTransport::answering(200, json!({ "message": "hi" }));
        let orchestrator = build(transport, Mode::Local);

        let err = orchestrator.generate_flashcards(STUDY_TEXT).await.unwrap_err();
        assert_eq!(err, ClientError::Remote("Flashcard generation failed".to_string()));
    }

    #[tokio::test]
    async fn non_2xx_reply_fails_even_when_body_looks_successful() {
        let transport =
            ScriptedTransport::answering(500, json!({ "success": true, "recipes": "x" }));
        let orchestrator = build(transport, Mode::Local);
        let err = orchestrator.generate_recipes("egg, rice").await.unwrap_err();
        assert_eq!(err, ClientError::Remote("Recipe generation failed".to_string()));

        let transport = ScriptedTransport::answering(
            503,
            json!({ "flashcards": [{ "question": "Q?", "answer": "A" }] }),
        );
        let orchestrator = build(transport, Mode::Local);
        let err = orchestrator.generate_flashcards(STUDY_TEXT).await.unwrap_err();
        assert_eq!(err, ClientError::Remote("Flashcard generation failed".to_string()));

        let transport = ScriptedTransport::answering(
            404,
            json!({ "success": true, "sentiment": "joy", "score": 0.9 }),
        );
        let orchestrator = build(transport, Mode::Local);
        let err = orchestrator.analyze_mood("I feel great").await.unwrap_err();
        assert_eq!(err, ClientError::Remote("Analysis failed".to_string()));
    }

    #[tokio::test]
    async fn local_mode_surfaces_mood_error_verbatim() {
        let transport =
            ScriptedTransport::answering(500, json!({ "error": "Failed to save mood entry" }));
        let orchestrator = build(transport, Mode::Local);

        let err = orchestrator.analyze_mood("I feel great").await.unwrap_err();
        assert_eq!(err, ClientError::Remote("Failed to save mood entry".to_string()));
    }

    #[tokio::test]
    async fn mood_without_success_flag_uses_default_message() {
        let transport = ScriptedTransport::answering(200, json!({ "sentiment": "joy" }));
        let orchestrator = build(transport, Mode::Local);

        let err = orchestrator.analyze_mood("I feel great").await.unwrap_err();
        assert_eq!(err, ClientError::Remote("Analysis failed".to_string()));
    }

    #[tokio::test]
    async fn demo_mode_synthesizes_sentiment_on_rejection() {
        let transport = ScriptedTransport::answering(500, json!({ "error": "boom" }));
        let orchestrator = build(transport, Mode::Demo);

        let outcome = orchestrator.analyze_mood("I am happy and excited").await.unwrap();
        assert_eq!(outcome.origin, Origin::Demo);
        assert_eq!(outcome.value.sentiment, "positive");
        assert!((70.0..=95.0).contains(&outcome.value.score));
        assert_eq!(outcome.absorbed.as_deref(), Some("boom"));
    }

    #[tokio::test]
    async fn live_mood_keeps_backend_label() {
        let transport = ScriptedTransport::answering(
            200,
            json!({ "success": true, "sentiment": "joy", "score": 91.2, "message": "Mood entry saved successfully" }),
        );
        let orchestrator = build(transport, Mode::Local);

        let outcome = orchestrator.analyze_mood("I feel great").await.unwrap();
        assert_eq!(outcome.origin, Origin::Live);
        assert_eq!(outcome.value.sentiment, "joy");
        assert_eq!(outcome.value.score, 91.2);
    }

    #[tokio::test]
    async fn non_json_reply_counts_as_unreachable() {
        let transport = ScriptedTransport::new(Script::Answer(502, None));
        let orchestrator = build(transport, Mode::Local);

        let err = orchestrator.generate_recipes("egg, rice").await.unwrap_err();
        assert_eq!(
            err,
            ClientError::Transport(
                "Failed to generate recipes. Make sure the backend server is running.".to_string()
            )
        );
    }

    #[tokio::test]
    async fn demo_mode_synthesizes_recipes_on_failure() {
        let transport = ScriptedTransport::answering(503, json!({ "error": "maintenance" }));
        let orchestrator = build(transport, Mode::Demo);

        let outcome = orchestrator.generate_recipes("  egg, rice ").await.unwrap();
        assert_eq!(outcome.origin, Origin::Demo);
        assert_eq!(outcome.value.recipes, synth::generate_demo_recipes("egg, rice"));
        assert!(outcome.value.recipes.contains("egg Dish"));
        assert!(outcome.value.recipes.contains("rice Salad"));
    }

    #[tokio::test]
    async fn live_recipes_require_success_flag() {
        let transport = ScriptedTransport::answering(
            200,
            json!({ "success": true, "recipes": "Recipe 1: Egg Fried Rice", "message": "ok" }),
        );
        let orchestrator = build(transport, Mode::Demo);

        let outcome = orchestrator.generate_recipes("egg, rice").await.unwrap();
        assert_eq!(outcome.origin, Origin::Live);
        assert_eq!(outcome.value.recipes, "Recipe 1: Egg Fried Rice");
    }

    #[tokio::test]
    async fn demo_history_never_calls_transport() {
        let orchestrator = build(ScriptedTransport::answering(200, json!({})), Mode::Demo);

        match orchestrator.mood_entries().await.unwrap() {
            History::RequiresBackend(notice) => {
                assert_eq!(notice, "Mood history requires backend deployment.")
            }
            History::Items(_) => panic!("demo mode must not list entries"),
        }
        match orchestrator.saved_recipes().await.unwrap() {
            History::RequiresBackend(notice) => {
                assert_eq!(notice, "Saved recipes require backend deployment.")
            }
            History::Items(_) => panic!("demo mode must not list recipes"),
        }
        assert_eq!(orchestrator.transport().calls(), 0);
    }

    #[tokio::test]
    async fn local_history_lists_entries() {
        let transport = ScriptedTransport::answering(
            200,
            json!({ "entries": [{
                "id": 3,
                "created_at": "2025-03-01T09:30:00",
                "entry_text": "Slept well",
                "emotion_label": "positive",
                "sentiment_score": 0.75
            }] }),
        );
        let orchestrator = build(transport, Mode::Local);

        let History::Items(entries) = orchestrator.mood_entries().await.unwrap() else {
            panic!("expected entries");
        };
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entry_text.as_deref(), Some("Slept well"));
        assert_eq!(entries[0].sentiment_score, Some(0.75));
    }

    #[tokio::test]
    async fn local_history_keeps_rows_with_null_columns() {
        let transport = ScriptedTransport::answering(
            200,
            json!({ "entries": [
                {
                    "created_at": "2025-03-01T09:30:00",
                    "entry_text": "Slept well",
                    "emotion_label": "positive",
                    "sentiment_score": 0.75
                },
                {
                    "created_at": null,
                    "entry_text": null,
                    "emotion_label": null,
                    "sentiment_score": null
                }
            ] }),
        );
        let orchestrator = build(transport, Mode::Local);
        let History::Items(entries) = orchestrator.mood_entries().await.unwrap() else {
            panic!("expected entries");
        };
        assert_eq!(entries.len(), 2);
        assert!(entries[1].entry_text.is_none());

        let transport = ScriptedTransport::answering(
            200,
            json!({ "recipes": [
                { "ingredients": null, "recipe_text": "Recipe 1: Soup", "created_at": null },
                { "ingredients": "egg", "recipe_text": null }
            ] }),
        );
        let orchestrator = build(transport, Mode::Local);
        let History::Items(recipes) = orchestrator.saved_recipes().await.unwrap() else {
            panic!("expected recipes");
        };
        assert_eq!(recipes.len(), 2);
        assert!(recipes[0].ingredients.is_none());
        assert_eq!(recipes[1].ingredients.as_deref(), Some("egg"));
        assert!(recipes[1].recipe_text.is_none());
    }

    #[tokio::test]
    async fn local_history_surfaces_failures() {
        let orchestrator = build(ScriptedTransport::unreachable(), Mode::Local);
        let err = orchestrator.saved_recipes().await.unwrap_err();
        assert_eq!(err, ClientError::Transport("Failed to load recipes".to_string()));

        let transport = ScriptedTransport::answering(200, json!({ "error": "db down" }));
        let orchestrator = build(transport, Mode::Local);
        let err = orchestrator.mood_entries().await.unwrap_err();
        assert_eq!(err, ClientError::Remote("db down".to_string()));
    }

    #[tokio::test]
    async fn backend_status_is_optional() {
        let orchestrator = build(ScriptedTransport::unreachable(), Mode::Demo);
        assert!(orchestrator.backend_status().await.is_none());

        let transport = ScriptedTransport::answering(
            200,
            json!({ "message": "Flask server is working!", "database_connected": true }),
        );
        let orchestrator = build(transport, Mode::Local);
        let status = orchestrator.backend_status().await.unwrap();
        assert!(status.database_connected);
        assert!(!status.openai_available);
    }
}
