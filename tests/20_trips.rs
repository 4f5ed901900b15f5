mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn create_trip_applies_defaults() -> Result<()> {
    let Some(server) = common::spawn_server(false).await? else {
        return Ok(());
    };
    let user = server.seed_user().await?;

    let res = server
        .client
        .post(server.url("/trips"))
        .json(&json!({
            "userId": user,
            "destination": "Paris",
            "startDate": "2025-06-01",
            "endDate": "2025-06-05",
            "budget": 1000
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body: Value = res.json().await?;
    assert_eq!(body["message"], "Trip created successfully");
    assert_eq!(body["trip"]["budget"].as_f64(), Some(1000.0));
    assert_eq!(body["trip"]["description"], "");
    assert_eq!(body["trip"]["userId"], user.as_str());
    Ok(())
}

#[tokio::test]
async fn created_trip_reads_back_identically() -> Result<()> {
    let Some(server) = common::spawn_server(false).await? else {
        return Ok(());
    };
    let user = server.seed_user().await?;

    let created: Value = server
        .client
        .post(server.url("/trips"))
        .json(&json!({
            "userId": user,
            "destination": "Kyoto",
            "startDate": "2025-10-01",
            "endDate": "2025-10-09",
            "budget": "2500.75",
            "description": "Autumn leaves"
        }))
        .send()
        .await?
        .json()
        .await?;
    let trip_id = created["trip"]["tripId"].as_i64().unwrap();

    let res = server
        .client
        .get(server.url(&format!("/trips/{}?userId={}", trip_id, user)))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let fetched: Value = res.json().await?;
    let trip = &fetched["trip"];
    for field in ["destination", "startDate", "endDate", "budget", "description"] {
        assert_eq!(trip[field], created["trip"][field], "{} differs", field);
    }
    assert_eq!(trip["startDate"], "2025-10-01");
    assert_eq!(trip["totalSpent"].as_f64(), Some(0.0));
    assert_eq!(trip["itineraryCount"], 0);
    Ok(())
}

#[tokio::test]
async fn list_orders_by_start_date_with_aggregates() -> Result<()> {
    let Some(server) = common::spawn_server(false).await? else {
        return Ok(());
    };
    let user = server.seed_user().await?;

    let later = server.create_trip(&user, "2025-09-01", "2025-09-03").await?;
    let earlier = server.create_trip(&user, "2025-03-01", "2025-03-04").await?;

    server
        .client
        .post(server.url(&format!("/trips/{}/itinerary", earlier)))
        .json(&json!({ "userId": user, "dayDate": "2025-03-02", "placeName": "Market" }))
        .send()
        .await?;

    let body: Value = server
        .client
        .get(server.url("/trips"))
        .query(&[("userId", user.as_str())])
        .send()
        .await?
        .json()
        .await?;
    let trips = body["trips"].as_array().unwrap();
    assert_eq!(trips.len(), 2);
    assert_eq!(trips[0]["tripId"].as_i64(), Some(earlier));
    assert_eq!(trips[0]["itineraryCount"], 1);
    assert_eq!(trips[1]["tripId"].as_i64(), Some(later));
    assert_eq!(trips[1]["totalSpent"].as_f64(), Some(0.0));
    Ok(())
}

#[tokio::test]
async fn update_replaces_fields_and_rejects_reversed_dates() -> Result<()> {
    let Some(server) = common::spawn_server(false).await? else {
        return Ok(());
    };
    let user = server.seed_user().await?;
    let trip_id = server.create_trip(&user, "2025-06-01", "2025-06-05").await?;

    let res = server
        .client
        .put(server.url(&format!("/trips/{}", trip_id)))
        .json(&json!({
            "userId": user,
            "destination": "Porto",
            "startDate": "2025-06-02",
            "endDate": "2025-06-06",
            "budget": 640.5,
            "description": "moved"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "Trip updated successfully");
    assert_eq!(body["trip"]["destination"], "Porto");
    assert_eq!(body["trip"]["budget"].as_f64(), Some(640.5));

    let res = server
        .client
        .put(server.url(&format!("/trips/{}", trip_id)))
        .json(&json!({
            "userId": user,
            "destination": "Porto",
            "startDate": "2025-06-09",
            "endDate": "2025-06-06"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn unknown_user_cannot_create_trips() -> Result<()> {
    let Some(server) = common::spawn_server(false).await? else {
        return Ok(());
    };

    let res = server
        .client
        .post(server.url("/trips"))
        .json(&json!({
            "userId": "no-such-user",
            "destination": "Nowhere",
            "startDate": "2025-06-01",
            "endDate": "2025-06-02"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "User not found");
    Ok(())
}

#[tokio::test]
async fn missing_trip_is_not_found() -> Result<()> {
    let Some(server) = common::spawn_server(false).await? else {
        return Ok(());
    };
    let user = server.seed_user().await?;

    let res = server
        .client
        .get(server.url(&format!("/trips/{}?userId={}", i64::MAX, user)))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Trip not found");
    Ok(())
}
