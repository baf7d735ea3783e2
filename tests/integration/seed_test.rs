//! Integration tests for startup seeding.

mod helpers;

use http::StatusCode;
use tempfile::TempDir;

use paralympics_core::config::SeedConfig;
use paralympics_database::Seeder;
use paralympics_database::repositories::{EventRepository, RegionRepository};

const REGION_HEADER: &str = "NOC,region,notes\n";
const EVENT_HEADER: &str = "type,year,country,host,NOC,start,end,duration,disabilities_included,countries,events,sports,participants_m,participants_f,participants,highlights\n";

fn seed_config(dir: &TempDir, regions: &str, events: &str) -> SeedConfig {
    SeedConfig {
        regions_csv: helpers::write_csv(dir, "regions.csv", regions),
        events_csv: helpers::write_csv(dir, "events.csv", events),
    }
}

#[tokio::test]
async fn test_single_region_row() {
    let app = helpers::TestApp::new().await;
    let dir = tempfile::tempdir().unwrap();
    let config = seed_config(
        &dir,
        &format!("{REGION_HEADER}USA,United States,note\n"),
        EVENT_HEADER,
    );

    Seeder::new(app.db_pool.clone(), config).seed().await.unwrap();

    let regions = RegionRepository::new(app.db_pool.clone());
    assert_eq!(regions.count().await.unwrap(), 1);
    let usa = regions.find_by_noc("USA").await.unwrap().unwrap();
    assert_eq!(usa.region, "United States");
    assert_eq!(usa.notes, "note");
}

#[tokio::test]
async fn test_seeding_twice_does_not_duplicate() {
    let app = helpers::TestApp::new().await;
    let dir = tempfile::tempdir().unwrap();
    let config = seed_config(
        &dir,
        &format!("{REGION_HEADER}ITA,Italy,\nJPN,Japan,\n"),
        &format!(
            "{EVENT_HEADER}summer,1960,Italy,Rome,ITA,18/09/1960,25/09/1960,7,Spinal injury,23,57,8,,,209,\n\
             summer,1964,Japan,Tokyo,JPN,08/11/1964,12/11/1964,5,Spinal injury,21,144,9,,,375,\n"
        ),
    );
    let seeder = Seeder::new(app.db_pool.clone(), config);

    seeder.seed().await.unwrap();
    seeder.seed().await.unwrap();

    assert_eq!(RegionRepository::new(app.db_pool.clone()).count().await.unwrap(), 2);
    assert_eq!(EventRepository::new(app.db_pool.clone()).count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_seeded_data_is_served() {
    let app = helpers::TestApp::new().await;
    let dir = tempfile::tempdir().unwrap();
    let config = seed_config(
        &dir,
        &format!("{REGION_HEADER}KOR,South Korea,\n"),
        &format!(
            "{EVENT_HEADER}summer,1988,South Korea,Seoul,KOR,15/10/1988,24/10/1988,10,\"Spinal injury, amputee\",60,732,18,2503,827,3057,Shared venues\n"
        ),
    );
    Seeder::new(app.db_pool.clone(), config).seed().await.unwrap();

    let response = app.request("GET", "/events", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let events = response.body.as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["type"], "summer");
    assert_eq!(events[0]["NOC"], "KOR");
    assert_eq!(events[0]["disabilities_included"], "Spinal injury, amputee");
    assert_eq!(events[0]["participants_f"], 827);
}

#[tokio::test]
async fn test_bundled_data_files_load() {
    let app = helpers::TestApp::new().await;

    Seeder::new(app.db_pool.clone(), SeedConfig::default())
        .seed()
        .await
        .unwrap();

    assert!(RegionRepository::new(app.db_pool.clone()).count().await.unwrap() > 0);
    assert!(EventRepository::new(app.db_pool.clone()).count().await.unwrap() > 0);
}
