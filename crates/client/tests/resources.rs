//! Wire-level tests for the resource wrappers: paths, methods, query
//! strings, and payload shapes.

use chrono::Utc;
use meridian_client::{ClientConfig, MeridianClient};
use meridian_domain::{NewCoupon, NewOrder, NewSubsegment, OrderLine, OrderStatus};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> MeridianClient {
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "tok_test",
            "created_at": Utc::now().timestamp(),
            "expires_in": 7200,
            "token_type": "bearer",
        })))
        .mount(server)
        .await;

    let config = ClientConfig::builder()
        .api_base_url(server.uri())
        .auth_base_url(server.uri())
        .client_id("client_id_1")
        .client_secret("client_secret_1")
        .build()
        .unwrap();
    MeridianClient::new(&config).unwrap()
}

fn program_json(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": "Summer Points",
        "description": "Seasonal program",
        "active": true,
        "created_at": "2025-03-01T00:00:00Z",
        "updated_at": null,
    })
}

#[tokio::test]
async fn programs_list_passes_page_and_parses_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/programs"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [program_json("prg_1")],
            "page": 2,
            "per_page": 25,
            "total": 26,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let page = client.programs().list(Some(2)).await.unwrap();

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].name, "Summer Points");
    assert!(!page.has_more());
}

#[tokio::test]
async fn items_create_posts_payload_and_parses_item() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/items"))
        .and(body_partial_json(serde_json::json!({
            "program_id": "prg_1",
            "name": "Tote bag",
            "points_price": 450,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "itm_1",
            "program_id": "prg_1",
            "name": "Tote bag",
            "description": null,
            "points_price": 450,
            "quantity_available": 10,
            "attributes": {},
            "created_at": "2025-06-01T12:00:00Z",
            "updated_at": null,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let item = client
        .items()
        .create(&meridian_domain::NewItem {
            program_id: "prg_1".to_string(),
            name: "Tote bag".to_string(),
            description: None,
            points_price: 450,
            quantity_available: Some(10),
            attributes: Default::default(),
        })
        .await
        .unwrap();

    assert_eq!(item.id, "itm_1");
    assert_eq!(item.quantity_available, Some(10));
}

#[tokio::test]
async fn items_list_scopes_by_program() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/items"))
        .and(query_param("program_id", "prg_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [],
            "page": 1,
            "per_page": 25,
            "total": 0,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let page = client.items().list("prg_1", None).await.unwrap();

    assert!(page.data.is_empty());
}

#[tokio::test]
async fn members_update_patches_only_set_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/v2/members/mem_1"))
        .and(body_partial_json(serde_json::json!({"tier": "gold"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "mem_1",
            "program_id": "prg_1",
            "external_id": "crm-77",
            "email": "ada@example.com",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "points_balance": 1200,
            "tier": "gold",
            "joined_at": "2024-11-05T09:00:00Z",
            "updated_at": "2025-07-01T10:00:00Z",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let member = client
        .members()
        .update(
            "mem_1",
            &meridian_domain::MemberPatch { tier: Some("gold".to_string()), ..Default::default() },
        )
        .await
        .unwrap();

    assert_eq!(member.tier.as_deref(), Some("gold"));
    assert_eq!(member.points_balance, 1200);
}

#[tokio::test]
async fn orders_create_round_trips_lines_and_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/orders"))
        .and(body_partial_json(serde_json::json!({
            "member_id": "mem_1",
            "lines": [{"item_id": "itm_1", "quantity": 2, "points_each": 100}],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "ord_1",
            "program_id": "prg_1",
            "member_id": "mem_1",
            "lines": [{"item_id": "itm_1", "quantity": 2, "points_each": 100}],
            "status": "pending",
            "total_points": 200,
            "created_at": "2025-07-04T16:20:00Z",
            "updated_at": null,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let order = client
        .orders()
        .create(&NewOrder {
            program_id: "prg_1".to_string(),
            member_id: "mem_1".to_string(),
            lines: vec![OrderLine { item_id: "itm_1".to_string(), quantity: 2, points_each: 100 }],
            coupon_code: None,
        })
        .await
        .unwrap();

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total_points, 200);
}

#[tokio::test]
async fn coupons_create_and_delete() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/coupons"))
        .and(body_partial_json(serde_json::json!({"code": "WELCOME10"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "cpn_1",
            "program_id": "prg_1",
            "code": "WELCOME10",
            "points_value": 10,
            "redeemed": false,
            "expires_at": null,
            "created_at": "2025-07-01T00:00:00Z",
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v2/coupons/cpn_1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let coupon = client
        .coupons()
        .create(&NewCoupon {
            program_id: "prg_1".to_string(),
            code: "WELCOME10".to_string(),
            points_value: 10,
            expires_at: None,
        })
        .await
        .unwrap();
    assert!(!coupon.redeemed);

    client.coupons().delete("cpn_1").await.unwrap();
}

#[tokio::test]
async fn subsegments_crud_paths() {
    let server = MockServer::start().await;
    let subsegment = serde_json::json!({
        "id": "seg_1",
        "program_id": "prg_1",
        "name": "Lapsed big spenders",
        "criteria": {"min_spend": 500, "inactive_days": 90},
        "member_count": 42,
        "created_at": "2025-05-01T00:00:00Z",
        "updated_at": null,
    });

    Mock::given(method("POST"))
        .and(path("/v2/subsegments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(subsegment.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/subsegments"))
        .and(query_param("program_id", "prg_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [subsegment],
            "page": 1,
            "per_page": 25,
            "total": 1,
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v2/subsegments/seg_1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let created = client
        .subsegments()
        .create(&NewSubsegment {
            program_id: "prg_1".to_string(),
            name: "Lapsed big spenders".to_string(),
            criteria: serde_json::json!({"min_spend": 500, "inactive_days": 90}),
        })
        .await
        .unwrap();
    assert_eq!(created.member_count, Some(42));

    let listed = client.subsegments().list("prg_1").await.unwrap();
    assert_eq!(listed.data.len(), 1);

    client.subsegments().delete("seg_1").await.unwrap();
}

#[tokio::test]
async fn personalization_path_nests_under_member() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/members/mem_1/personalization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "member_id": "mem_1",
            "recommended_items": ["itm_9", "itm_2"],
            "affinities": {"outdoor": 0.83},
            "generated_at": "2025-07-30T06:00:00Z",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let profile = client.personalization().get("mem_1").await.unwrap();

    assert_eq!(profile.recommended_items, vec!["itm_9", "itm_2"]);
    assert!((profile.affinities["outdoor"] - 0.83).abs() < f64::EPSILON);
}

#[tokio::test]
async fn rewards_list_and_get() {
    let server = MockServer::start().await;
    let reward = serde_json::json!({
        "id": "rwd_1",
        "program_id": "prg_1",
        "name": "Free coffee",
        "description": null,
        "points_required": 150,
        "quantity_available": null,
        "expires_at": "2025-12-31T23:59:59Z",
    });

    Mock::given(method("GET"))
        .and(path("/v2/rewards"))
        .and(query_param("program_id", "prg_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [reward.clone()],
            "page": 1,
            "per_page": 25,
            "total": 1,
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/rewards/rwd_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reward))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let listed = client.rewards().list("prg_1").await.unwrap();
    assert_eq!(listed.data[0].points_required, 150);

    let fetched = client.rewards().get("rwd_1").await.unwrap();
    assert_eq!(fetched.name, "Free coffee");
}
