mod common;

use anyhow::Result;
use axum::http::StatusCode;
use farmer_schemes_api::database::models::Eligibility;
use uuid::Uuid;

#[tokio::test]
async fn listing_schemes_is_public_and_stable() -> Result<()> {
    let app = common::build_app();
    app.store.seed_scheme("Drip Irrigation Subsidy", Eligibility::default());
    app.store.seed_scheme(
        "Wheat Procurement Bonus",
        Eligibility {
            crops: vec!["Wheat".to_string()],
            ..Eligibility::default()
        },
    );

    let first = common::get(&app, "/api/schemes", None).await;
    assert_eq!(first.status(), StatusCode::OK);
    let first_body = common::body_json(first).await;
    assert_eq!(first_body.as_array().unwrap().len(), 2);

    // Reads don't mutate: a second call sees the identical set.
    let second = common::get(&app, "/api/schemes", None).await;
    assert_eq!(common::body_json(second).await, first_body);
    Ok(())
}

#[tokio::test]
async fn eligible_view_requires_a_token() -> Result<()> {
    let app = common::build_app();

    let response = common::get(&app, "/api/schemes/eligible", None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = common::body_json(response).await;
    assert_eq!(body["message"], "Authorization token missing");
    Ok(())
}

#[tokio::test]
async fn eligible_view_filters_by_the_farmer_profile() -> Result<()> {
    let app = common::build_app();
    common::register_farmer(&app, common::sample_farmer_payload()).await;
    let token = common::login_token(&app, "harpreet@example.com", "monsoon-harvest").await;

    let matching = app.store.seed_scheme(
        "Punjab Smallholder Support",
        Eligibility {
            states: vec!["Punjab".to_string()],
            min_land_size: Some(1.0),
            max_income: Some(100_000.0),
            ..Eligibility::default()
        },
    );
    app.store.seed_scheme(
        "Kerala Spice Growers Fund",
        Eligibility {
            states: vec!["Kerala".to_string()],
            ..Eligibility::default()
        },
    );

    let response = common::get(&app, "/api/schemes/eligible", Some(&token)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    let schemes = body.as_array().unwrap();
    assert_eq!(schemes.len(), 1);
    assert_eq!(schemes[0]["id"], matching.id.to_string());
    Ok(())
}

#[tokio::test]
async fn eligible_view_for_a_deleted_farmer_is_404() -> Result<()> {
    let app = common::build_app();

    // Valid token, but no farmer record behind it.
    let token = common::token_for(Uuid::new_v4());
    let response = common::get(&app, "/api/schemes/eligible", Some(&token)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = common::body_json(response).await;
    assert_eq!(body["message"], "Farmer not found");
    Ok(())
}
