//! Integration tests for Community Match Server

use std::fs;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use community_match::api::{create_router, AppState};
use community_match::nlp::{answer_question, ANSWER_HEADER, NO_ANSWER_TEXT};
use community_match::search::{rank, score_text, SynonymClass, SynonymRegistry};
use community_match::store::{demo_records, MemoryStore, Record};
use community_match::types::{Community, Document, Post};

const HOUSING_BODY: &str = "推荐在 BTS 线附近找公寓，注意提前准备押金";

fn post(id: &str, community_id: &str, title: &str, body: &str, created_at: u64) -> Post {
    let mut post = Post::new(
        id.to_string(),
        community_id.to_string(),
        "u1".to_string(),
        title.to_string(),
        body.to_string(),
    );
    post.created_at = created_at;
    post
}

fn setup_app(records: Vec<Record>) -> Router {
    let state = AppState::new(
        Arc::new(MemoryStore::from_records(records)),
        Arc::new(SynonymRegistry::builtin()),
    );
    create_router(Arc::new(state))
}

fn housing_records() -> Vec<Record> {
    vec![
        Record::Community(Community::new(
            "c1".to_string(),
            "Bangkok students".to_string(),
            "Everyday life".to_string(),
        )),
        Record::Post(post("p-housing", "c1", "Tips", HOUSING_BODY, 2)),
        Record::Post(post("p-food", "c1", "Noodles", "Best pad thai near campus", 1)),
    ]
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_json(app: Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[test]
fn test_housing_synonym_scores_positive() {
    let registry = SynonymRegistry::builtin();
    assert!(score_text(&registry, "租房", HOUSING_BODY) > 0.0);
}

#[test]
fn test_synonym_bridging_with_injected_registry() {
    let registry = SynonymRegistry::new(vec![SynonymClass::new("dining", ["吃饭", "餐馆"])]);
    assert!(score_text(&registry, "吃饭", "推荐一家餐馆") > 0.0);
    assert_eq!(score_text(&registry, "吃饭", "推荐一家公寓"), 0.0);
}

#[test]
fn test_rank_stability_scenario() {
    // "alpha beta" vs A/B (one token each, 0.5) and C (both, 1.0)
    let registry = SynonymRegistry::new(Vec::new());
    let docs = vec![
        post("A", "c", "alpha", "", 0),
        post("B", "c", "beta", "", 0),
        post("C", "c", "alpha beta", "", 0),
    ];

    let results = rank(&registry, "alpha beta", &docs, |d| d.searchable_text(), None);
    let ids: Vec<&str> = results.iter().map(|r| r.document.id()).collect();
    assert_eq!(ids, vec!["C", "A", "B"]);
}

#[test]
fn test_qa_fallback_and_empty_window() {
    let registry = SynonymRegistry::builtin();
    let window: Vec<Post> = (0..5)
        .map(|i| post(&format!("p{}", i), "c", &format!("T{}", i), "zzz", 0))
        .collect();

    let answer = answer_question(&registry, "签证", &window, 3);
    assert!(!answer.answer.is_empty());
    assert!(answer.references.len() <= 3);
    assert!(answer.references.is_empty());
    assert!(answer.answer.contains("\n1. T0: zzz\n2. T1: zzz\n3. T2: zzz"));

    let answer = answer_question::<Post>(&registry, "签证", &[], 3);
    assert_eq!(answer.answer, NO_ANSWER_TEXT);
}

#[tokio::test]
async fn test_list_posts_without_query_is_unranked() {
    let (status, json) = get_json(setup_app(housing_records()), "/api/posts").await;
    assert_eq!(status, StatusCode::OK);

    let posts = json.as_array().unwrap();
    assert_eq!(posts.len(), 2);
    // Newest first, no score field
    assert_eq!(posts[0]["id"], "p-housing");
    assert!(posts[0].get("score").is_none());
}

#[tokio::test]
async fn test_list_posts_with_query_is_ranked() {
    let uri = format!("/api/posts?q={}", urlencoding::encode("租房"));
    let (status, json) = get_json(setup_app(housing_records()), &uri).await;
    assert_eq!(status, StatusCode::OK);

    let posts = json.as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["id"], "p-housing");
    assert!(posts[0]["score"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn test_get_post() {
    let (status, json) = get_json(setup_app(housing_records()), "/api/posts/p-food").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "Noodles");

    let (status, json) = get_json(setup_app(housing_records()), "/api/posts/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_search_finds_housing_post() {
    let uri = format!("/api/search?q={}", urlencoding::encode("租房"));
    let (status, json) = get_json(setup_app(housing_records()), &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["query"], "租房");

    let posts = json["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["id"], "p-housing");
    assert!(posts[0]["score"].as_f64().unwrap() > 0.0);
    assert!(json["communities"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_requires_query() {
    for uri in ["/api/search", "/api/search?q="] {
        let (status, json) = get_json(setup_app(housing_records()), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert!(json["error"].is_string());
    }
}

#[tokio::test]
async fn test_whitespace_query_matches_nothing() {
    let (status, json) = get_json(setup_app(housing_records()), "/api/search?q=%20%20").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["query"], "  ");
    assert_eq!(json["posts"], json!([]));
    assert_eq!(json["communities"], json!([]));

    let (status, json) = get_json(setup_app(housing_records()), "/api/posts?q=%20").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));

    // An empty q is the same as no q
    let (_, json) = get_json(setup_app(housing_records()), "/api/posts?q=").await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_search_caps_results_per_kind() {
    let mut records = vec![Record::Community(Community::new(
        "c1".to_string(),
        "visa".to_string(),
        String::new(),
    ))];
    for i in 0..15 {
        records.push(Record::Post(post(&format!("p{}", i), "c1", "visa", "visa", i)));
        records.push(Record::Community(Community::new(
            format!("c-visa-{}", i),
            "visa help".to_string(),
            String::new(),
        )));
    }

    let (status, json) = get_json(setup_app(records), "/api/search?q=visa").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["posts"].as_array().unwrap().len(), 10);
    assert_eq!(json["communities"].as_array().unwrap().len(), 10);
    // Equal scores keep recency order
    assert_eq!(json["posts"][0]["id"], "p14");
}

#[tokio::test]
async fn test_search_demo_data_matches_community_description() {
    // "二手" occurs in the description of community-cn, not only in its tags
    let uri = format!("/api/search?q={}", urlencoding::encode("二手"));
    let (status, json) = get_json(setup_app(demo_records()), &uri).await;
    assert_eq!(status, StatusCode::OK);

    let communities = json["communities"].as_array().unwrap();
    assert_eq!(communities.len(), 1);
    assert_eq!(communities[0]["id"], "community-cn");
}

#[tokio::test]
async fn test_search_ignores_community_tags() {
    let mut club = Community::new("club".to_string(), "Club".to_string(), "weekly meetup".to_string());
    club.tags = vec!["visa".to_string()];

    let (status, json) = get_json(setup_app(vec![Record::Community(club)]), "/api/search?q=visa").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["communities"], json!([]));
}

#[tokio::test]
async fn test_qa_endpoint() {
    let (status, json) = post_json(
        setup_app(housing_records()),
        "/api/nlp/qa",
        json!({ "question": "租房" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["references"][0]["id"], "p-housing");
    assert_eq!(json["references"].as_array().unwrap().len(), 1);
    let answer = json["answer"].as_str().unwrap();
    assert!(answer.starts_with(&format!("{}\n1. Tips: ", ANSWER_HEADER)));
}

#[tokio::test]
async fn test_qa_endpoint_empty_store() {
    let (status, json) = post_json(setup_app(Vec::new()), "/api/nlp/qa", json!({ "question": "hi" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["answer"], NO_ANSWER_TEXT);
    assert_eq!(json["references"], json!([]));
}

#[tokio::test]
async fn test_qa_requires_question() {
    let (status, json) = post_json(setup_app(housing_records()), "/api/nlp/qa", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());

    let (status, _) = post_json(
        setup_app(housing_records()),
        "/api/nlp/qa",
        json!({ "question": "   " }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_post_then_search() {
    let app = setup_app(housing_records());

    let (status, created) = post_json(
        app.clone(),
        "/api/posts",
        json!({
            "communityId": "c1",
            "authorId": "u2",
            "title": "Dorm swap",
            "body": "Looking for a dorm near campus",
            "tags": ["housing"]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();
    assert!(created["createdAt"].as_u64().unwrap() > 0);

    let (status, json) = get_json(app, "/api/posts?q=apartment").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    // Both match through the housing class; the new post is newer
    assert_eq!(ids, vec![id.as_str(), "p-housing"]);
}

#[tokio::test]
async fn test_create_post_validation() {
    let (status, json) = post_json(
        setup_app(housing_records()),
        "/api/posts",
        json!({ "title": "only a title" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("communityId"));

    let (status, _) = post_json(
        setup_app(housing_records()),
        "/api/posts",
        json!({ "communityId": "nope", "authorId": "u", "title": "t", "body": "b" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_and_list_communities() {
    let app = setup_app(housing_records());

    let (status, _) = post_json(
        app.clone(),
        "/api/communities",
        json!({
            "title": "Seoul exchange",
            "description": "课程 and dorm tips",
            "country": "South Korea"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, json) = post_json(app.clone(), "/api/communities", json!({ "title": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");

    let (status, _) = post_json(
        app.clone(),
        "/api/communities",
        json!({ "title": "No country" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, json) = get_json(app, "/api/communities").await;
    assert_eq!(status, StatusCode::OK);
    let communities = json.as_array().unwrap();
    assert_eq!(communities.len(), 2);
    assert_eq!(communities[0]["title"], "Seoul exchange");
}

#[tokio::test]
async fn test_list_communities_filters() {
    let app = setup_app(demo_records());

    let (status, json) = get_json(app.clone(), "/api/communities?country=Thailand").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["community-th"]);

    let (_, json) = get_json(app.clone(), "/api/communities?language=en").await;
    assert_eq!(json, json!([]));

    let (_, json) = get_json(app, "/api/communities?country=China&language=zh").await;
    assert_eq!(json[0]["id"], "community-cn");
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_community_posts() {
    let app = setup_app(housing_records());

    let (status, json) = get_json(app.clone(), "/api/communities/c1/posts").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["p-housing", "p-food"]);

    let (status, created) = post_json(
        app.clone(),
        "/api/communities/c1/posts",
        json!({ "authorId": "u3", "title": "Visa run", "body": "Border trip tips" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["communityId"], "c1");

    let (status, json) = post_json(
        app.clone(),
        "/api/communities/c1/posts",
        json!({ "title": "No author", "body": "text" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("authorId"));

    let (_, json) = get_json(app.clone(), "/api/communities/c1/posts").await;
    assert_eq!(json[0]["id"], created["id"]);
    assert_eq!(json.as_array().unwrap().len(), 3);

    let (_, json) = get_json(app, "/api/communities/unknown/posts").await;
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn test_app_from_data_file_and_synonym_file() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data.jsonl");
    let synonyms = dir.path().join("synonyms.json");

    let lines: Vec<String> = housing_records()
        .iter()
        .map(|r| serde_json::to_string(r).unwrap())
        .collect();
    fs::write(&data, lines.join("\n")).unwrap();
    fs::write(&synonyms, r#"[{"name": "food", "members": ["noodles", "面条"]}]"#).unwrap();

    let state = AppState::new(
        Arc::new(MemoryStore::load_from_file(&data).unwrap()),
        Arc::new(SynonymRegistry::from_file(&synonyms).unwrap()),
    );
    let app = create_router(Arc::new(state));

    let uri = format!("/api/posts?q={}", urlencoding::encode("面条"));
    let (status, json) = get_json(app.clone(), &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["id"], "p-food");

    // The built-in housing class is not loaded
    let uri = format!("/api/posts?q={}", urlencoding::encode("租房"));
    let (_, json) = get_json(app, &uri).await;
    assert_eq!(json, json!([]));
}
