use crate::config::Mode;
use crate::models::{Flashcard, MoodAnalysis, MoodEntry, SavedRecipe};
use crate::orchestrator::Origin;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Study,
    Mood,
    Recipes,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Study, Tab::Mood, Tab::Recipes];

    /// Unknown or missing names open the study tab.
    pub fn from_query(name: Option<&str>) -> Self {
        match name.map(str::trim) {
            Some("mood") => Tab::Mood,
            Some("recipes") => Tab::Recipes,
            _ => Tab::Study,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Study => "study",
            Tab::Mood => "mood",
            Tab::Recipes => "recipes",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Tab::Study => "{{STUDY_ACTIVE}}",
            Tab::Mood => "{{MOOD_ACTIVE}}",
            Tab::Recipes => "{{RECIPES_ACTIVE}}",
        }
    }
}

pub fn render_index(active: Tab, mode: Mode) -> String {
    let mode_hint = match mode {
        Mode::Local => "Local mode: backend errors are shown as they happen.",
        Mode::Demo => "Demo mode: if the backend is unavailable you will see sample results.",
    };

    let mut page = INDEX_HTML
        .replace("{{ACTIVE_TAB}}", active.as_str())
        .replace("{{MODE}}", mode.as_str())
        .replace("{{MODE_HINT}}", mode_hint);
    for tab in Tab::ALL {
        let marker = if tab == active { " active" } else { "" };
        page = page.replace(tab.placeholder(), marker);
    }
    page
}

pub fn render_flashcards(cards: &[Flashcard], origin: Origin, message: Option<&str>) -> String {
    let mut html = String::new();
    if origin == Origin::Demo {
        html.push_str(&demo_banner(
            "Demo flashcards generated locally. Real flashcards require backend deployment.",
        ));
    } else if let Some(message) = message {
        html.push_str(&format!(r#"<p class="success">{}</p>"#, html_escape(message)));
    }
    for (index, card) in cards.iter().enumerate() {
        html.push_str(&format!(
            r#"<div class="flashcard"><span class="card-number">Card {}</span><p class="question">Q: {}</p><p class="answer">A: {}</p></div>"#,
            index + 1,
            html_escape(&card.question),
            html_escape(&card.answer),
        ));
    }
    html
}

pub fn render_mood(analysis: &MoodAnalysis, origin: Origin) -> String {
    let (title, footer) = match origin {
        Origin::Demo => (
            "Demo Mood Analysis 🎭",
            Some("This is a demonstration. Actual AI analysis requires backend deployment."),
        ),
        Origin::Live => ("Mood Analysis", analysis.message.as_deref()),
    };

    let mut html = format!(
        r#"<div class="mood-result"><h3>{title}</h3><p>Sentiment: <strong>{}</strong></p><p>Score: <span class="sentiment-score">{:.1}%</span></p>"#,
        html_escape(&analysis.sentiment),
        analysis.score,
    );
    if let Some(footer) = footer {
        html.push_str(&format!(r#"<p class="success">{}</p>"#, html_escape(footer)));
    }
    html.push_str("</div>");
    html
}

pub fn render_recipes(recipes: &str, origin: Origin, message: Option<&str>) -> String {
    let mut html = String::new();
    match origin {
        Origin::Demo => html.push_str(&demo_banner(
            "Demo recipes generated locally. Real recipes require backend deployment.",
        )),
        Origin::Live => {
            if let Some(message) = message {
                html.push_str(&format!(r#"<p class="success">{}</p>"#, html_escape(message)));
            }
        }
    }
    html.push_str(&format!(r#"<div class="recipe">{}</div>"#, recipe_lines(recipes)));
    html
}

pub fn render_mood_entries(entries: &[MoodEntry]) -> String {
    if entries.is_empty() {
        return r#"<p class="empty">No mood entries yet.</p>"#.to_string();
    }
    let mut html = String::new();
    for entry in entries {
        let label = entry.emotion_label.as_deref().unwrap_or("neutral");
        let score = entry.sentiment_score.unwrap_or_default() * 100.0;
        html.push_str(&format!(
            r#"<div class="history-item"><span class="timestamp">{}</span><p>{}</p><p>Sentiment: <strong>{}</strong> ({score:.1}%)</p></div>"#,
            html_escape(&display_timestamp(entry.created_at.as_deref())),
            html_escape(entry.entry_text.as_deref().unwrap_or_default()),
            html_escape(label),
        ));
    }
    html
}

pub fn render_saved_recipes(recipes: &[SavedRecipe]) -> String {
    if recipes.is_empty() {
        return r#"<p class="empty">No saved recipes yet.</p>"#.to_string();
    }
    let mut html = String::new();
    for recipe in recipes {
        html.push_str(&format!(
            r#"<div class="history-item"><span class="timestamp">{}</span><p><strong>Ingredients:</strong> {}</p><div class="recipe">{}</div></div>"#,
            html_escape(&display_timestamp(recipe.created_at.as_deref())),
            html_escape(recipe.ingredients.as_deref().unwrap_or_default()),
            recipe_lines(recipe.recipe_text.as_deref().unwrap_or_default()),
        ));
    }
    html
}

pub fn render_notice(message: &str) -> String {
    format!(
        r#"<div class="demo-message"><h3>Demo Mode 🎭</h3><p>{}</p><p class="success">This is a demonstration. Actual functionality requires backend deployment.</p></div>"#,
        html_escape(message)
    )
}

pub fn render_error(message: &str) -> String {
    format!(r#"<div class="error">{}</div>"#, html_escape(message))
}

fn demo_banner(text: &str) -> String {
    format!(
        r#"<div class="demo-message"><h3>Demo Mode 🎭</h3><p>{}</p></div>"#,
        html_escape(text)
    )
}

// Backend recipes separate sections with `|` as well as newlines.
fn recipe_lines(text: &str) -> String {
    text.split(['\n', '|'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("<p>{}</p>", html_escape(line)))
        .collect()
}

fn display_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S", "%a, %d %b %Y %H:%M:%S GMT"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|parsed| parsed.format("%b %-d, %Y %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Study Buddy</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef3f8;
      --bg-2: #b9d4ee;
      --ink: #23303b;
      --accent: #4a7dff;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e3ecf7 60%, #f4f7fb 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .mode-badge {
      align-self: flex-start;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      padding: 4px 12px;
      border-radius: 999px;
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
    }

    .tab {
      flex: 1;
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 10px 14px;
      font: inherit;
      font-weight: 600;
      color: #6b645d;
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .tab-content {
      display: none;
      gap: 16px;
    }

    .tab-content.active {
      display: grid;
    }

    textarea,
    input[type="text"] {
      width: 100%;
      border-radius: 18px;
      border: 1px solid rgba(47, 72, 88, 0.15);
      padding: 14px 16px;
      font: inherit;
      background: white;
    }

    textarea {
      min-height: 140px;
      resize: vertical;
    }

    .actions {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
    }

    button.primary,
    button.secondary {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button.primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(74, 125, 255, 0.3);
    }

    button.secondary {
      background: var(--accent-2);
      color: white;
      box-shadow: 0 10px 24px rgba(47, 72, 88, 0.3);
    }

    button:active {
      transform: scale(0.98);
    }

    .results {
      display: grid;
      gap: 12px;
    }

    .flashcard,
    .mood-result,
    .history-item,
    .recipe,
    .demo-message {
      background: white;
      border-radius: 18px;
      padding: 16px 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .flashcard .question {
      font-weight: 600;
    }

    .card-number,
    .timestamp {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .sentiment-score {
      font-weight: 600;
      color: var(--accent);
    }

    .demo-message h3,
    .mood-result h3 {
      margin-top: 0;
    }

    .success {
      color: #2d7a4b;
    }

    .error {
      color: #c63b2b;
      font-weight: 600;
    }

    .empty,
    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      .tabs {
        flex-direction: column;
        border-radius: 18px;
      }
    }
  </style>
</head>
<body>
  <main class="app" data-active-tab="{{ACTIVE_TAB}}">
    <header>
      <h1>Study Buddy</h1>
      <p class="subtitle">Flashcards, a mood journal and recipe ideas in one place.</p>
      <span class="mode-badge">{{MODE}} mode</span>
    </header>

    <nav class="tabs" role="tablist">
      <button class="tab{{STUDY_ACTIVE}}" type="button" data-tab="study" role="tab">Study Buddy</button>
      <button class="tab{{MOOD_ACTIVE}}" type="button" data-tab="mood" role="tab">Mood Journal</button>
      <button class="tab{{RECIPES_ACTIVE}}" type="button" data-tab="recipes" role="tab">Recipe Finder</button>
    </nav>

    <section id="study" class="tab-content{{STUDY_ACTIVE}}">
      <textarea id="studyText" placeholder="Paste your study notes here..."></textarea>
      <div class="actions">
        <button class="primary" type="button" id="generate-flashcards">Generate flashcards</button>
      </div>
      <div id="studyResults" class="results"></div>
    </section>

    <section id="mood" class="tab-content{{MOOD_ACTIVE}}">
      <textarea id="moodText" placeholder="How are you feeling today?"></textarea>
      <div class="actions">
        <button class="primary" type="button" id="add-mood">Analyze mood</button>
        <button class="secondary" type="button" id="load-moods">Show history</button>
      </div>
      <div id="moodResults" class="results"></div>
      <div id="allMoodEntries" class="results"></div>
    </section>

    <section id="recipes" class="tab-content{{RECIPES_ACTIVE}}">
      <input type="text" id="ingredients" placeholder="e.g. egg, rice, spinach" />
      <div class="actions">
        <button class="primary" type="button" id="generate-recipes">Find recipes</button>
        <button class="secondary" type="button" id="load-recipes">Saved recipes</button>
      </div>
      <div id="recipeResults" class="results"></div>
      <div id="allRecipes" class="results"></div>
    </section>

    <p class="hint">{{MODE_HINT}}</p>
  </main>

  <script>
    const tabs = Array.from(document.querySelectorAll('.tab'));
    const sections = Array.from(document.querySelectorAll('.tab-content'));

    const switchTab = (tabName, button) => {
      tabs.forEach((tab) => tab.classList.toggle('active', tab === button));
      sections.forEach((section) => section.classList.toggle('active', section.id === tabName));
      const url = new URL(window.location.href);
      url.searchParams.set('tab', tabName);
      window.history.replaceState(null, '', url);
    };

    const showPanel = (targetId, panel) => {
      document.getElementById(targetId).innerHTML = panel.html;
    };

    const showFailure = (targetId, message) => {
      const box = document.createElement('div');
      box.className = 'error';
      box.textContent = message;
      const target = document.getElementById(targetId);
      target.replaceChildren(box);
    };

    const request = async (targetId, path, payload) => {
      const options = payload === undefined
        ? {}
        : {
            method: 'POST',
            headers: { 'content-type': 'application/json' },
            body: JSON.stringify(payload)
          };
      try {
        const res = await fetch(path, options);
        showPanel(targetId, await res.json());
      } catch (err) {
        showFailure(targetId, err.message || 'Request failed');
      }
    };

    const valueOf = (id) => document.getElementById(id).value;

    tabs.forEach((button) => {
      button.addEventListener('click', () => switchTab(button.dataset.tab, button));
    });

    document.getElementById('generate-flashcards').addEventListener('click', () =>
      request('studyResults', '/api/flashcards', { text: valueOf('studyText') }));
    document.getElementById('add-mood').addEventListener('click', () =>
      request('moodResults', '/api/mood', { text: valueOf('moodText') }));
    document.getElementById('load-moods').addEventListener('click', () =>
      request('allMoodEntries', '/api/mood/entries'));
    document.getElementById('generate-recipes').addEventListener('click', () =>
      request('recipeResults', '/api/recipes', { ingredients: valueOf('ingredients') }));
    document.getElementById('load-recipes').addEventListener('click', () =>
      request('allRecipes', '/api/recipes'));
  </script>
</body>
</html>
"#;
