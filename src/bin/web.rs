//! Single binary web server: tournament pages, team form, and the team API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT,
//! TOURNAMENT_DATA, SESSION_KEY.

use actix_files::Files;
use actix_web::{cookie::Key, middleware::Logger, web::Data, App, HttpServer};
use esports_arena_web::logic::DEFAULT_REVALIDATE;
use esports_arena_web::{web, MemoryStore, ServerConfig, TournamentStore};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How often expired cache entries and inactive drafts are purged.
const CACHE_PURGE_INTERVAL: Duration = Duration::from_secs(5 * 60);

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();

    let store: Arc<dyn TournamentStore> = match MemoryStore::load(&config.tournament_data) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            // Pages still render; every lookup is "not found".
            log::error!("{}; starting with an empty tournament store", e);
            Arc::new(MemoryStore::default())
        }
    };
    let state = Data::new(web::AppState::new(store, DEFAULT_REVALIDATE));

    let key = match &config.session_key {
        Some(k) => Key::derive_from(k.as_bytes()),
        None => {
            log::warn!("SESSION_KEY not set, sessions will not survive a restart");
            Key::generate()
        }
    };

    // Background task: drop stale tournament cache entries and inactive form drafts
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(CACHE_PURGE_INTERVAL);
        loop {
            interval.tick().await;
            let removed = state_cleanup.purge_cache();
            if removed > 0 {
                log::info!("Purged {} expired tournament cache entr(ies)", removed);
            }
            let removed = state_cleanup.drafts.purge_inactive(Instant::now());
            if removed > 0 {
                log::info!("Purged {} inactive team form draft(s)", removed);
            }
        }
    });

    let bind = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .wrap(web::session_middleware(key.clone()))
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(web::configure)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}
