// directory-server/tests/server_lifecycle.rs
// Server startup against a database file, with an immediate shutdown

use directory_server::{Config, DbService, Server, ServerError, ServerState};
use directory_server::db::repository::employee;

#[tokio::test]
async fn test_server_creates_database_and_shuts_down() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employees.db");
    let path = path.to_str().unwrap();

    let server = Server::new(Config::with_overrides(path, 0));
    server.run_until(async {}).await.unwrap();

    // Migrations ran on the new file; seeding is off for overrides
    let db = DbService::open(path).await.unwrap();
    assert_eq!(employee::count(&db.pool).await.unwrap(), 0);
    db.close().await;
}

#[tokio::test]
async fn test_initialize_seeds_empty_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seeded.db");

    let mut config = Config::with_overrides(path.to_str().unwrap(), 0);
    config.seed_sample_data = true;

    let state = ServerState::initialize(&config).await.unwrap();
    assert_eq!(employee::count(&state.db.pool).await.unwrap(), 3);
    state.db.close().await;

    // Re-opening does not seed twice
    let state = ServerState::initialize(&config).await.unwrap();
    assert_eq!(employee::count(&state.db.pool).await.unwrap(), 3);
    state.db.close().await;
}

#[tokio::test]
async fn test_bind_conflict_is_reported() {
    let listener = std::net::TcpListener::bind("0.0.0.0:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let state = ServerState::new(
        Config::with_overrides(":memory:", port),
        DbService::open_in_memory().await.unwrap(),
    );
    let err = Server::with_state(state.config.clone(), state)
        .run_until(async {})
        .await
        .unwrap_err();
    assert!(matches!(err, ServerError::Bind { .. }));
}
