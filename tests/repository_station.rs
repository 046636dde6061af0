use opencdms_gateway::domain::repositories::StationRepository;
use opencdms_gateway::infrastructure::persistence::PgStationRepository;
use sqlx::PgPool;
use std::sync::Arc;

async fn insert_station(pool: &PgPool, station_id: &str, name: &str) {
    sqlx::query(
        "INSERT INTO station (station_id, station_name, latitude, longitude, station_operational) \
         VALUES ($1, $2, -17.8, 31.0, TRUE)",
    )
    .bind(station_id)
    .bind(name)
    .execute(pool)
    .await
    .unwrap();
}

#[sqlx::test(migrations = "./migrations/climsoft")]
#[ignore = "requires a PostgreSQL instance (DATABASE_URL)"]
async fn test_list_all_ordered(pool: PgPool) {
    insert_station(&pool, "67775000", "Harare Belvedere").await;
    insert_station(&pool, "67774010", "Harare Kutsaga").await;
    let repo = PgStationRepository::new(Arc::new(pool));

    let stations = repo.list_all().await.unwrap();

    assert_eq!(stations.len(), 2);
    assert_eq!(stations[0].station_id, "67774010");
    assert_eq!(stations[0].latitude, Some(-17.8));
    assert!(stations[0].station_operational);
    assert!(!stations[0].waca_selection);
}

#[sqlx::test(migrations = "./migrations/climsoft")]
#[ignore = "requires a PostgreSQL instance (DATABASE_URL)"]
async fn test_list_all_empty(pool: PgPool) {
    let repo = PgStationRepository::new(Arc::new(pool));

    assert!(repo.list_all().await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations/climsoft")]
#[ignore = "requires a PostgreSQL instance (DATABASE_URL)"]
async fn test_list_page(pool: PgPool) {
    for i in 0..5 {
        insert_station(&pool, &format!("ST{i}"), "Station").await;
    }
    let repo = PgStationRepository::new(Arc::new(pool));

    let page = repo.list(2, 3).await.unwrap();

    assert_eq!(
        page.iter().map(|s| s.station_id.as_str()).collect::<Vec<_>>(),
        vec!["ST3", "ST4"]
    );
}

#[sqlx::test(migrations = "./migrations/climsoft")]
#[ignore = "requires a PostgreSQL instance (DATABASE_URL)"]
async fn test_find_by_id(pool: PgPool) {
    insert_station(&pool, "67774010", "Harare Kutsaga").await;
    let repo = PgStationRepository::new(Arc::new(pool));

    let found = repo.find_by_id("67774010").await.unwrap().unwrap();
    assert_eq!(found.station_name.as_deref(), Some("Harare Kutsaga"));

    assert!(repo.find_by_id("missing").await.unwrap().is_none());
    repo.ping().await.unwrap();
}
