//! Single binary web server: games, users and tournaments via a JSON REST API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST, PORT. Set TOURNAMENT_SEED for reproducible team draws.

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::{DateTime, Utc};
use padel_tournament_web::{
    advance_winners, compute_standings, convert_game_to_tournament, record_match_result,
    revert_tournament, standings_csv, view_tournament, ConvertRequest, DocumentStore, Game,
    GameId, MatchId, MatchResult, PlayerId, PlayerProfile, ServerConfig, TournamentError,
};
use serde::Deserialize;
use tokio::sync::RwLock;

struct AppState {
    store: DocumentStore,
    config: ServerConfig,
}

type SharedState = Data<RwLock<AppState>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateGameBody {
    title: String,
    #[serde(default = "default_max_players")]
    max_players: usize,
    created_by: PlayerId,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    scheduled_at: Option<DateTime<Utc>>,
}

fn default_max_players() -> usize {
    16
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerBody {
    user_id: PlayerId,
}

/// Path segment: game id (e.g. /api/games/{id})
#[derive(Deserialize)]
struct GamePath {
    id: GameId,
}

/// Path segments: game id and match id
#[derive(Deserialize)]
struct GameMatchPath {
    id: GameId,
    match_id: MatchId,
}

#[derive(Deserialize)]
struct UserPath {
    id: PlayerId,
}

/// 404 for missing documents, 400 for everything else.
fn error_response(e: TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TournamentError::GameNotFound(_)
        | TournamentError::UserNotFound(_)
        | TournamentError::MatchNotFound(_) => HttpResponse::NotFound().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "padel-tournament-web",
    })
}

#[get("/api/users")]
async fn api_list_users(state: SharedState) -> HttpResponse {
    let g = state.read().await;
    HttpResponse::Ok().json(g.store.list_users())
}

/// Create or replace a user profile.
#[post("/api/users")]
async fn api_upsert_user(state: SharedState, body: Json<PlayerProfile>) -> HttpResponse {
    let mut g = state.write().await;
    let profile = body.into_inner();
    log::info!("Saved profile for user {}", profile.id);
    g.store.upsert_user(profile.clone());
    HttpResponse::Ok().json(profile)
}

#[delete("/api/users/{id}")]
async fn api_remove_user(state: SharedState, path: Path<UserPath>) -> HttpResponse {
    let mut g = state.write().await;
    match g.store.remove_user(&path.id) {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => error_response(e),
    }
}

#[get("/api/games")]
async fn api_list_games(state: SharedState) -> HttpResponse {
    let g = state.read().await;
    HttpResponse::Ok().json(g.store.list_games())
}

#[post("/api/games")]
async fn api_create_game(state: SharedState, body: Json<CreateGameBody>) -> HttpResponse {
    let body = body.into_inner();
    let mut game = Game::new(body.title.trim(), body.max_players, body.created_by);
    game.location = body.location;
    game.scheduled_at = body.scheduled_at;
    let mut g = state.write().await;
    let id = g.store.insert_game(game);
    log::info!("Created game {}", id);
    match g.store.game(id) {
        Ok(game) => HttpResponse::Ok().json(game),
        Err(e) => error_response(e),
    }
}

#[get("/api/games/{id}")]
async fn api_get_game(state: SharedState, path: Path<GamePath>) -> HttpResponse {
    let g = state.read().await;
    match g.store.game(path.id) {
        Ok(game) => HttpResponse::Ok().json(game),
        Err(e) => error_response(e),
    }
}

#[delete("/api/games/{id}")]
async fn api_delete_game(state: SharedState, path: Path<GamePath>) -> HttpResponse {
    let mut g = state.write().await;
    match g.store.remove_game(path.id) {
        Ok(game) => {
            log::info!("Deleted game {}", game.id);
            HttpResponse::Ok().json(game)
        }
        Err(e) => error_response(e),
    }
}

#[post("/api/games/{id}/join")]
async fn api_join_game(state: SharedState, path: Path<GamePath>, body: Json<PlayerBody>) -> HttpResponse {
    let mut g = state.write().await;
    let game = match g.store.game_mut(path.id) {
        Ok(game) => game,
        Err(e) => return error_response(e),
    };
    match game.join(body.user_id.clone()) {
        Ok(()) => HttpResponse::Ok().json(&*game),
        Err(e) => error_response(e),
    }
}

#[post("/api/games/{id}/leave")]
async fn api_leave_game(state: SharedState, path: Path<GamePath>, body: Json<PlayerBody>) -> HttpResponse {
    let mut g = state.write().await;
    let game = match g.store.game_mut(path.id) {
        Ok(game) => game,
        Err(e) => return error_response(e),
    };
    match game.leave(&body.user_id) {
        Ok(()) => HttpResponse::Ok().json(&*game),
        Err(e) => error_response(e),
    }
}

#[post("/api/games/{id}/close")]
async fn api_close_game(state: SharedState, path: Path<GamePath>) -> HttpResponse {
    let mut g = state.write().await;
    match g.store.game_mut(path.id) {
        Ok(game) => {
            game.close();
            HttpResponse::Ok().json(&*game)
        }
        Err(e) => error_response(e),
    }
}

/// Convert a game into a knockout or league tournament.
#[post("/api/games/{id}/tournament")]
async fn api_convert_game(state: SharedState, path: Path<GamePath>, body: Json<ConvertRequest>) -> HttpResponse {
    let mut g = state.write().await;
    let mut rng = g.config.rng();
    let (game, users, cache) = match g.store.game_with_profiles(path.id) {
        Ok(parts) => parts,
        Err(e) => return error_response(e),
    };
    match convert_game_to_tournament(game, &body, users, cache, &mut rng, Utc::now()) {
        Ok(()) => HttpResponse::Ok().json(&*game),
        Err(e) => {
            log::warn!("Could not convert game {}: {}", path.id, e);
            error_response(e)
        }
    }
}

/// Revert a tournament back to a plain (closed) game.
#[delete("/api/games/{id}/tournament")]
async fn api_revert_tournament(state: SharedState, path: Path<GamePath>) -> HttpResponse {
    let mut g = state.write().await;
    let game = match g.store.game_mut(path.id) {
        Ok(game) => game,
        Err(e) => return error_response(e),
    };
    match revert_tournament(game) {
        Ok(_) => HttpResponse::Ok().json(&*game),
        Err(e) => error_response(e),
    }
}

/// Tournament with standings, progress, status and champion, computed on this read.
#[get("/api/games/{id}/tournament")]
async fn api_get_tournament(state: SharedState, path: Path<GamePath>) -> HttpResponse {
    let g = state.read().await;
    let result = g
        .store
        .game(path.id)
        .and_then(|game| game.tournament_data.as_ref().ok_or(TournamentError::NotATournament));
    match result {
        Ok(tournament) => HttpResponse::Ok().json(view_tournament(tournament)),
        Err(e) => error_response(e),
    }
}

#[put("/api/games/{id}/tournament/matches/{match_id}")]
async fn api_record_match(
    state: SharedState,
    path: Path<GameMatchPath>,
    body: Json<MatchResult>,
) -> HttpResponse {
    let mut g = state.write().await;
    let result = g.store.game_mut(path.id).and_then(|game| {
        let tournament = game
            .tournament_data
            .as_mut()
            .ok_or(TournamentError::NotATournament)?;
        record_match_result(tournament, path.match_id, body.into_inner())?;
        Ok(view_tournament(tournament))
    });
    match result {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(e) => error_response(e),
    }
}

/// Fill later knockout rounds from the winners decided so far.
#[post("/api/games/{id}/tournament/advance")]
async fn api_advance_winners(state: SharedState, path: Path<GamePath>) -> HttpResponse {
    let mut g = state.write().await;
    let result = g.store.game_mut(path.id).and_then(|game| {
        let tournament = game
            .tournament_data
            .as_mut()
            .ok_or(TournamentError::NotATournament)?;
        advance_winners(tournament);
        Ok(view_tournament(tournament))
    });
    match result {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(e) => error_response(e),
    }
}

#[get("/api/games/{id}/tournament/standings.csv")]
async fn api_standings_csv(state: SharedState, path: Path<GamePath>) -> HttpResponse {
    let g = state.read().await;
    let result = g.store.game(path.id).and_then(|game| {
        let tournament = game
            .tournament_data
            .as_ref()
            .ok_or(TournamentError::NotATournament)?;
        standings_csv(&compute_standings(&tournament.teams, &tournament.rounds))
    });
    match result {
        Ok(csv) => HttpResponse::Ok().content_type("text/csv; charset=utf-8").body(csv),
        Err(e) => error_response(e),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let bind = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);
    if let Some(seed) = config.seed {
        log::info!("Team draws use fixed seed {}", seed);
    }

    let state = Data::new(RwLock::new(AppState {
        store: DocumentStore::new(),
        config,
    }));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_list_users)
            .service(api_upsert_user)
            .service(api_remove_user)
            .service(api_list_games)
            .service(api_create_game)
            .service(api_get_game)
            .service(api_delete_game)
            .service(api_join_game)
            .service(api_leave_game)
            .service(api_close_game)
            .service(api_convert_game)
            .service(api_revert_tournament)
            .service(api_get_tournament)
            .service(api_record_match)
            .service(api_advance_winners)
            .service(api_standings_csv)
    })
    .bind(bind)?
    .run()
    .await
}
