mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn add_expense(
    server: &common::TestServer,
    trip_id: i64,
    user: &str,
    category: &str,
    amount: Value,
    date: &str,
) -> Result<Value> {
    let res = server
        .client
        .post(server.url(&format!("/trips/{}/expenses", trip_id)))
        .json(&json!({
            "userId": user,
            "category": category,
            "amount": amount,
            "expenseDate": date
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    Ok(res.json().await?)
}

#[tokio::test]
async fn expense_counts_toward_total_spent() -> Result<()> {
    let Some(server) = common::spawn_server(false).await? else {
        return Ok(());
    };
    let user = server.seed_user().await?;
    let trip_id = server.create_trip(&user, "2025-06-01", "2025-06-05").await?;

    let body = add_expense(&server, trip_id, &user, "Food & Dining", json!(45.50), "2025-06-02").await?;
    assert_eq!(body["message"], "Expense added successfully");
    assert_eq!(body["expense"]["amount"].as_f64(), Some(45.5));
    assert_eq!(body["expense"]["description"], "");

    let trip: Value = server
        .client
        .get(server.url(&format!("/trips/{}?userId={}", trip_id, user)))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(trip["trip"]["totalSpent"].as_f64(), Some(45.5));
    Ok(())
}

#[tokio::test]
async fn category_totals_match_expenses() -> Result<()> {
    let Some(server) = common::spawn_server(false).await? else {
        return Ok(());
    };
    let user = server.seed_user().await?;
    let trip_id = server.create_trip(&user, "2025-06-01", "2025-06-05").await?;

    add_expense(&server, trip_id, &user, "Food", json!(12.25), "2025-06-01").await?;
    add_expense(&server, trip_id, &user, "Transport", json!("30"), "2025-06-03").await?;
    add_expense(&server, trip_id, &user, "Food", json!(7.75), "2025-06-02").await?;

    let body: Value = server
        .client
        .get(server.url(&format!("/trips/{}/expenses", trip_id)))
        .query(&[("userId", user.as_str())])
        .send()
        .await?
        .json()
        .await?;

    let dates: Vec<&str> = body["expenses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["expenseDate"].as_str().unwrap())
        .collect();
    assert_eq!(dates, ["2025-06-03", "2025-06-02", "2025-06-01"]);

    let totals = body["categoryTotals"].as_array().unwrap();
    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0], json!({ "category": "Food", "total": 20.0 }));
    assert_eq!(totals[1], json!({ "category": "Transport", "total": 30.0 }));
    Ok(())
}

#[tokio::test]
async fn deleted_expense_leaves_the_totals() -> Result<()> {
    let Some(server) = common::spawn_server(false).await? else {
        return Ok(());
    };
    let user = server.seed_user().await?;
    let trip_id = server.create_trip(&user, "2025-06-01", "2025-06-05").await?;

    let body = add_expense(&server, trip_id, &user, "Lodging", json!(210), "2025-06-01").await?;
    let expense_id = body["expense"]["expenseId"].as_i64().unwrap();
    let expense_url = server.url(&format!("/trips/{}/expenses/{}", trip_id, expense_id));

    let res = server
        .client
        .delete(&expense_url)
        .query(&[("userId", user.as_str())])
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "Expense deleted successfully");

    let trip: Value = server
        .client
        .get(server.url(&format!("/trips/{}?userId={}", trip_id, user)))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(trip["trip"]["totalSpent"].as_f64(), Some(0.0));

    let res = server
        .client
        .delete(&expense_url)
        .query(&[("userId", user.as_str())])
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}
