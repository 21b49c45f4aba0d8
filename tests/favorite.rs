mod common;

use serde_json::{json, Value};

#[tokio::test]
async fn favorites_need_a_user() {
    let app = common::spawn_app().await;

    let response = app.client.get(app.url("/favorites")).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn bookmark_lifecycle() {
    let app = common::spawn_app().await;
    let user = app.seed_user("traveller", false).await;
    let token = app.token_for(&user);
    let a = app.seed_hotelsite("A").await;
    let b = app.seed_hotelsite("B").await;

    let response = app
        .client
        .get(app.url("/favorites"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "You do not have any favorites");

    let body: Value = app
        .client
        .post(app.url("/favorites"))
        .bearer_auth(&token)
        .json(&json!([{ "_id": a.id.to_hex() }, { "_id": a.id.to_hex() }]))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["item"]["hotelsites"].as_array().unwrap().len(), 1);
    assert_eq!(body["item"]["user"]["username"], "traveller");

    let body: Value = app
        .client
        .post(app.url(&format!("/favorites/{}", a.id)))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        body["message"],
        "That hotelsite is already in the list of favorites!"
    );

    let body: Value = app
        .client
        .post(app.url(&format!("/favorites/{}", b.id)))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let hotelsites = body["item"]["hotelsites"].as_array().unwrap();
    assert_eq!(hotelsites.len(), 2);
    assert_eq!(hotelsites[1]["name"], "B");

    let body: Value = app
        .client
        .delete(app.url(&format!("/favorites/{}", a.id)))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["item"]["hotelsites"].as_array().unwrap().len(), 1);

    let response = app
        .client
        .delete(app.url("/favorites"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let response = app
        .client
        .delete(app.url("/favorites"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn bookmarking_a_missing_hotelsite_fails() {
    let app = common::spawn_app().await;
    let user = app.seed_user("traveller", false).await;

    let response = app
        .client
        .post(app.url("/favorites/missingHotel"))
        .bearer_auth(app.token_for(&user))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn cookie_token_is_accepted() {
    let app = common::spawn_app().await;
    let user = app.seed_user("traveller", false).await;
    let a = app.seed_hotelsite("A").await;

    let response = app
        .client
        .post(app.url(&format!("/favorites/{}", a.id)))
        .header("Cookie", format!("access_token={}", app.token_for(&user)))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn unsupported_favorite_verbs_are_forbidden() {
    let app = common::spawn_app().await;

    let response = app.client.put(app.url("/favorites")).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 403);

    let response = app
        .client
        .get(app.url("/favorites/abc"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 403);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "GET operation not supported on /favorites/abc");
}
