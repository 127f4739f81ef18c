
use std::collections::HashSet;

use futures::future::join_all;
use reqwest::StatusCode;
use student_records::client::{ClientError, StudentClient};
use test_utils::*;

#[actix_rt::test]
async fn client_round_trips_a_record() {
    let app = TestApp::spawn().await;

    let created = app.client.create(&ana()).await.expect("create failed");
    assert!(created.id >= 1);
    assert_eq!(created, ana().into_student(created.id));

    let fetched = app.client.get(created.id).await.expect("get failed");
    assert_eq!(fetched, created);

    let all = app.client.get_all().await.expect("get_all failed");
    assert_eq!(all, vec![created.clone()]);
}

#[actix_rt::test]
async fn client_update_overwrites_record() {
    let app = TestApp::spawn().await;
    let created = app.client.create(&ana()).await.unwrap();

    let replacement = numbered_student(3);
    app.client.update(created.id, &replacement).await.expect("update failed");

    let fetched = app.client.get(created.id).await.unwrap();
    assert_eq!(fetched, replacement.into_student(created.id));
}

#[actix_rt::test]
async fn client_surfaces_404_after_delete() {
    let app = TestApp::spawn().await;
    let created = app.client.create(&ana()).await.unwrap();

    app.client.delete(created.id).await.expect("delete failed");

    let err = app.client.get(created.id).await.unwrap_err();
    assert!(err.is_not_found());

    let err = app.client.delete(created.id).await.unwrap_err();
    assert!(matches!(err, ClientError::Status(StatusCode::NOT_FOUND)));

    let err = app.client.update(created.id, &ana()).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(app.repo.count(), 0);
}

#[actix_rt::test]
async fn client_reports_transport_failures() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = StudentClient::new(&address).unwrap();

    let err = client.get_all().await.unwrap_err();
    assert!(matches!(err, ClientError::Request(_)));
    assert!(err.status().is_none());
}

#[actix_rt::test]
async fn concurrent_creates_get_unique_ids() {
    let app = TestApp::spawn().await;

    let students: Vec<_> = (0..20).map(numbered_student).collect();
    let results = join_all(students.iter().map(|s| app.client.create(s))).await;

    let ids: HashSet<i32> = results
        .into_iter()
        .map(|r| r.expect("create failed").id)
        .collect();
    assert_eq!(ids.len(), 20);

    let victims: Vec<i32> = ids.iter().copied().take(5).collect();
    let deletions = join_all(victims.iter().map(|id| app.client.delete(*id))).await;
    assert!(deletions.iter().all(|r| r.is_ok()));

    let remaining = app.client.get_all().await.unwrap();
    assert_eq!(remaining.len(), 15);
    assert!(remaining.iter().all(|s| !victims.contains(&s.id)));
}
