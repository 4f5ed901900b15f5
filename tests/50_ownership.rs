mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use trip_planner_api::auth::{generate_jwt, Claims};

#[tokio::test]
async fn other_users_never_see_a_trip() -> Result<()> {
    let Some(server) = common::spawn_server(false).await? else {
        return Ok(());
    };
    let owner = server.seed_user().await?;
    let intruder = server.seed_user().await?;
    let trip_id = server.create_trip(&owner, "2025-06-01", "2025-06-05").await?;

    for path in [
        format!("/trips/{}", trip_id),
        format!("/trips/{}/itinerary", trip_id),
        format!("/trips/{}/expenses", trip_id),
    ] {
        let res = server
            .client
            .get(server.url(&path))
            .query(&[("userId", intruder.as_str())])
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{} leaked", path);
    }

    let res = server
        .client
        .post(server.url(&format!("/trips/{}/expenses", trip_id)))
        .json(&json!({ "userId": intruder, "category": "Food", "amount": 5, "expenseDate": "2025-06-02" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let list: Value = server
        .client
        .get(server.url("/trips"))
        .query(&[("userId", intruder.as_str())])
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(list["trips"], json!([]));
    Ok(())
}

#[tokio::test]
async fn only_the_owner_can_delete_and_children_go_with_it() -> Result<()> {
    let Some(server) = common::spawn_server(false).await? else {
        return Ok(());
    };
    let owner = server.seed_user().await?;
    let intruder = server.seed_user().await?;
    let trip_id = server.create_trip(&owner, "2025-06-01", "2025-06-05").await?;

    server
        .client
        .post(server.url(&format!("/trips/{}/itinerary", trip_id)))
        .json(&json!({ "userId": owner, "dayDate": "2025-06-02", "placeName": "Louvre" }))
        .send()
        .await?;
    server
        .client
        .post(server.url(&format!("/trips/{}/expenses", trip_id)))
        .json(&json!({ "userId": owner, "category": "Food", "amount": 9.5, "expenseDate": "2025-06-02" }))
        .send()
        .await?;

    let trip_url = server.url(&format!("/trips/{}", trip_id));

    let res = server
        .client
        .delete(&trip_url)
        .query(&[("userId", intruder.as_str())])
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = server
        .client
        .delete(&trip_url)
        .query(&[("userId", owner.as_str())])
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "Trip deleted successfully");

    let res = server
        .client
        .get(server.url(&format!("/trips/{}/itinerary", trip_id)))
        .query(&[("userId", owner.as_str())])
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let (items, expenses): (i64, i64) = sqlx::query_as(
        "SELECT (SELECT COUNT(*) FROM itinerary_items WHERE trip_id = $1),
                (SELECT COUNT(*) FROM expenses WHERE trip_id = $1)",
    )
    .bind(trip_id)
    .fetch_one(&server.pool)
    .await?;
    assert_eq!((items, expenses), (0, 0));
    Ok(())
}

#[tokio::test]
async fn bearer_token_user_overrides_claimed_user() -> Result<()> {
    let Some(server) = common::spawn_server(true).await? else {
        return Ok(());
    };
    let owner = server.seed_user().await?;
    let intruder = server.seed_user().await?;

    let owner_token = generate_jwt(&Claims::new(owner.clone(), None, 1), common::TEST_SECRET)?;
    let intruder_token = generate_jwt(&Claims::new(intruder.clone(), None, 1), common::TEST_SECRET)?;

    let res = server
        .client
        .post(server.url("/trips"))
        .bearer_auth(&owner_token)
        .json(&json!({ "destination": "Oslo", "startDate": "2025-12-01", "endDate": "2025-12-04" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await?;
    let trip_id = body["trip"]["tripId"].as_i64().unwrap();
    assert_eq!(body["trip"]["userId"], owner.as_str());

    // naming the owner in the query does not help a different token holder
    let res = server
        .client
        .get(server.url(&format!("/trips/{}", trip_id)))
        .query(&[("userId", owner.as_str())])
        .bearer_auth(&intruder_token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = server
        .client
        .get(server.url(&format!("/trips/{}", trip_id)))
        .bearer_auth(&owner_token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = server.client.get(server.url("/trips")).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}
