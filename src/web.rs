//! HTTP layer: shared state, handlers, and route registration.

use crate::drafts::{DraftId, DraftStore, FormSession};
use crate::logic::{
    fetch_tournament, RevalidationCache, SubmitOutcome, TeamError, TeamRegistry,
    TournamentView, TEAM_CREATED_MESSAGE,
};
use crate::models::{NewTeam, TeamDraft, TournamentDetail, TournamentId};
use crate::render::{self, Toast};
use crate::store::TournamentStore;
use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::{
    cookie::Key,
    error::InternalError,
    get,
    http::header,
    post,
    web::{self, Data, Form, Json, Path},
    HttpResponse, Responder,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// Session key holding the id of the visitor's team form draft.
const DRAFT_KEY: &str = "draft_id";

const INVALID_ID_MESSAGE: &str = "Invalid tournament ID";
const NOT_FOUND_MESSAGE: &str = "Tournament not found";

/// Shared state: tournament store, the revalidation cache in front of it,
/// registered teams, and team form drafts.
pub struct AppState {
    store: Arc<dyn TournamentStore>,
    cache: RwLock<RevalidationCache<TournamentId, TournamentDetail>>,
    pub teams: TeamRegistry,
    pub drafts: DraftStore,
}

impl AppState {
    pub fn new(store: Arc<dyn TournamentStore>, revalidate: Duration) -> Self {
        Self {
            store,
            cache: RwLock::new(RevalidationCache::new(revalidate)),
            teams: TeamRegistry::new(),
            drafts: DraftStore::new(),
        }
    }

    /// Replace the team registry (e.g. one with a different capacity).
    pub fn with_teams(mut self, teams: TeamRegistry) -> Self {
        self.teams = teams;
        self
    }

    pub fn revalidate(&self) -> Duration {
        self.cache
            .read()
            .map(|c| c.window())
            .unwrap_or(crate::logic::DEFAULT_REVALIDATE)
    }

    /// Tournament by id (surrounding whitespace ignored), served from the cache while it is fresh.
    pub async fn load_tournament(&self, id: &str) -> Option<TournamentDetail> {
        let id = id.trim();
        if id.is_empty() {
            return None;
        }
        let key = id.to_string();
        let cached = self
            .cache
            .read()
            .ok()
            .and_then(|c| c.get(&key, Instant::now()));
        if cached.is_some() {
            return cached;
        }
        let detail = fetch_tournament(self.store.as_ref(), Some(id)).await?;
        if let Ok(mut c) = self.cache.write() {
            c.insert(key, detail.clone(), Instant::now());
        }
        Some(detail)
    }

    /// Drop stale cache entries; returns how many were removed.
    pub fn purge_cache(&self) -> usize {
        self.cache
            .write()
            .map(|mut c| c.purge_expired(Instant::now()))
            .unwrap_or(0)
    }
}

/// Shared app state as seen by handlers.
type State = Data<AppState>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Path segment: tournament id (e.g. /tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: String,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum FormAction {
    /// Save the fields only.
    #[default]
    Update,
    Preview,
    Submit,
}

/// Posted team form (urlencoded).
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TeamFormBody {
    #[serde(default)]
    teamname: String,
    #[serde(default)]
    game: String,
    #[serde(default)]
    role: String,
    #[serde(default)]
    rank: String,
    #[serde(default)]
    server: String,
    #[serde(default)]
    language: String,
    #[serde(default)]
    players: String,
    #[serde(default)]
    requests: String,
    #[serde(default)]
    participant_count: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    action: FormAction,
}

impl TeamFormBody {
    fn draft(&self) -> TeamDraft {
        TeamDraft {
            teamname: self.teamname.clone(),
            game: self.game.clone(),
            role: self.role.clone(),
            rank: self.rank.clone(),
            server: self.server.clone(),
            language: self.language.clone(),
            players: self.players.clone(),
            requests: self.requests.clone(),
            participant_count: self.participant_count.clone(),
            image: self.image.clone().filter(|i| !i.is_empty()),
        }
    }
}

fn draft_id(session: &Session) -> Option<DraftId> {
    session.get::<DraftId>(DRAFT_KEY).unwrap_or_else(|e| {
        log::warn!("Discarding unreadable draft id in session: {}", e);
        None
    })
}

/// The visitor's draft id (if any) and the draft stored under it.
fn load_draft(state: &AppState, session: &Session) -> (Option<DraftId>, FormSession) {
    let id = draft_id(session);
    (id, state.drafts.load(id))
}

fn save_draft(state: &AppState, session: &Session, id: Option<DraftId>, draft: FormSession) {
    let id = state.drafts.save(id, draft, Instant::now());
    if let Err(e) = session.insert(DRAFT_KEY, id) {
        log::error!("Failed to store draft id in session: {}", e);
    }
}

fn see_other(location: &'static str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn html(mut builder: actix_web::HttpResponseBuilder, body: String) -> HttpResponse {
    builder.content_type("text/html; charset=utf-8").body(body)
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "esports-arena-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

#[get("/")]
async fn index() -> HttpResponse {
    html(
        HttpResponse::Ok(),
        include_str!("../templates/index.html").to_string(),
    )
}

/// `/tournaments` with no id.
async fn tournament_missing_id() -> HttpResponse {
    html(
        HttpResponse::BadRequest(),
        render::message_page(INVALID_ID_MESSAGE),
    )
}

/// Tournament detail page. Not found and fetch errors render the same message.
#[get("/tournaments/{id}")]
async fn tournament_page(state: State, path: Path<TournamentPath>) -> HttpResponse {
    if path.id.trim().is_empty() {
        return tournament_missing_id().await;
    }
    match state.load_tournament(&path.id).await {
        Some(detail) => {
            let view = TournamentView::derive(&detail, Utc::now());
            let cache_control = format!(
                "public, s-maxage={}, stale-while-revalidate",
                state.revalidate().as_secs()
            );
            let mut builder = HttpResponse::Ok();
            builder.insert_header((header::CACHE_CONTROL, cache_control));
            html(builder, render::tournament_page(&view))
        }
        None => html(
            HttpResponse::NotFound(),
            render::message_page(NOT_FOUND_MESSAGE),
        ),
    }
}

/// Tournament display values as JSON (404 if not found).
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: State, path: Path<TournamentPath>) -> HttpResponse {
    if path.id.trim().is_empty() {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({ "error": INVALID_ID_MESSAGE }));
    }
    match state.load_tournament(&path.id).await {
        Some(detail) => HttpResponse::Ok().json(TournamentView::derive(&detail, Utc::now())),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": NOT_FOUND_MESSAGE })),
    }
}

/// Create a team. Responds with `{message}` on success and on failure.
#[post("/api/teams/create-team")]
async fn api_create_team(state: State, body: Json<NewTeam>) -> HttpResponse {
    match state.teams.create(body.into_inner()) {
        Ok(team) => HttpResponse::Created().json(serde_json::json!({
            "message": TEAM_CREATED_MESSAGE,
            "team": team,
        })),
        Err(e @ TeamError::DuplicateTeamName) => {
            HttpResponse::Conflict().json(serde_json::json!({ "message": e.to_string() }))
        }
        Err(e @ TeamError::RegistryFull) => {
            log::warn!("Team creation refused: {}", e);
            HttpResponse::ServiceUnavailable()
                .json(serde_json::json!({ "message": e.to_string() }))
        }
        Err(e) if e.is_client_error() => {
            HttpResponse::BadRequest().json(serde_json::json!({ "message": e.to_string() }))
        }
        Err(e) => {
            log::error!("Error during create-team: {}", e);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "message": e.to_string() }))
        }
    }
}

/// Team form, in editing or preview mode. Shows a pending toast once.
#[get("/create/team")]
async fn team_form_page(state: State, session: Session) -> HttpResponse {
    let (id, mut draft) = load_draft(&state, &session);
    let toast = draft.toast.take();
    if id.is_some() {
        save_draft(&state, &session, id, draft.clone());
    }
    html(
        HttpResponse::Ok(),
        render::team_form_page(&draft.form, toast.as_ref()),
    )
}

/// Save the posted fields, then preview or submit them.
#[post("/create/team")]
async fn team_form_action(
    state: State,
    session: Session,
    body: Form<TeamFormBody>,
) -> HttpResponse {
    let (id, mut draft) = load_draft(&state, &session);
    draft.form.update(body.draft());
    match body.action {
        FormAction::Update => {}
        FormAction::Preview => draft.form.open_preview(),
        FormAction::Submit => match draft.form.submit(&state.teams).await {
            SubmitOutcome::Skipped => {}
            SubmitOutcome::Created(message) => draft.toast = Some(Toast::success(message)),
            SubmitOutcome::Invalid(message) | SubmitOutcome::Failed(message) => {
                draft.toast = Some(Toast::failure(message))
            }
        },
    }
    save_draft(&state, &session, id, draft);
    see_other("/create/team")
}

#[post("/create/team/close-preview")]
async fn team_form_close_preview(state: State, session: Session) -> HttpResponse {
    let (id, mut draft) = load_draft(&state, &session);
    draft.form.close_preview();
    save_draft(&state, &session, id, draft);
    see_other("/create/team")
}

/// Cookie session carrying the draft id between requests.
pub fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("arena_session".to_string())
        .cookie_secure(false)
        .build()
}

/// Register every route (static files excepted).
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(serde_json::json!({ "message": message })),
        )
        .into()
    });
    cfg.app_data(json_config)
        .service(index)
        .service(api_health)
        .service(favicon)
        .route("/tournaments", web::get().to(tournament_missing_id))
        .route("/tournaments/", web::get().to(tournament_missing_id))
        .service(tournament_page)
        .service(api_get_tournament)
        .service(api_create_team)
        .service(team_form_page)
        .service(team_form_action)
        .service(team_form_close_preview);
}
