//! Integration tests for the seeded admin activity log.

mod helpers;

use canopy_entity::activity::ActivityCategory;
use canopy_realtime::FeedSession;
use canopy_service::ExportFormat;

#[tokio::test]
async fn test_seeded_log_stats() {
    let session = FeedSession::start(&helpers::quiet_config());
    let stats = session.activity().stats();

    assert_eq!(stats.total, 5);
    assert_eq!(stats.today, 2);
    assert_eq!(stats.by_category.values().sum::<usize>(), 5);
    for category in [
        ActivityCategory::Tree,
        ActivityCategory::Donation,
        ActivityCategory::User,
        ActivityCategory::Contact,
        ActivityCategory::Admin,
    ] {
        assert_eq!(stats.count_for(category), 1);
    }

    session.shutdown().await.expect("shutdown");
}

#[tokio::test]
async fn test_export_then_clear() {
    let session = FeedSession::start(&helpers::quiet_config());
    let log = session.activity();

    let path = std::env::temp_dir().join(format!("canopy-activity-{}.json", std::process::id()));
    let written = log.export_to(&path, ExportFormat::Json).await.expect("export");
    assert_eq!(written, 5);

    let body = tokio::fs::read_to_string(&path).await.expect("read back");
    assert!(body.contains("\"action\": \"Tree Planted\""));
    let _ = tokio::fs::remove_file(&path).await;

    assert_eq!(log.clear_activities(), 5);
    assert!(log.is_empty());
    assert_eq!(log.stats().today, 0);
    assert_eq!(
        log.export(ExportFormat::Csv).expect("export"),
        "Action,User,Details,Timestamp,Category\n"
    );

    session.shutdown().await.expect("shutdown");
}
