//! Web handler integration tests.
//!
//! Tests cover:
//! - Trade submission (valid, invalid quantity/price/side)
//! - Formatted decimal bodies per endpoint (2 vs 4 fractional digits)
//! - Error statuses and the exact PE-ratio error message
//! - Unknown routes and query parameters

mod common;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use common::*;
use gbce::adapters::web::{AppState, build_router};
use gbce::domain::market::MarketFacade;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

fn app_with(market: MarketFacade) -> Router {
    build_router(AppState {
        market: Arc::new(market),
    })
}

fn app() -> Router {
    app_with(market())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_trade(json: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/trade")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&bytes).into_owned()
}

mod trade_submission {
    use super::*;

    #[tokio::test]
    async fn valid_trade_returns_ok() {
        let app = app();
        let response = app
            .oneshot(post_trade(
                r#"{"stockName":"TEA","quantity":12,"side":"BUY","price":5.0}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn client_timestamp_is_honoured() {
        let market = market();
        let app = app_with(market);
        let stamped = format!(
            r#"{{"stockName":"TEA","timestamp":"{}","quantity":10,"side":"SELL","price":3.5}}"#,
            fixed_now().to_rfc3339()
        );
        let response = app.clone().oneshot(post_trade(&stamped)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get("/stockPrice?stockName=TEA")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "3.50");
    }

    #[tokio::test]
    async fn zero_quantity_is_rejected() {
        let app = app();
        let response = app
            .oneshot(post_trade(
                r#"{"stockName":"TEA","quantity":0,"side":"BUY","price":5.0}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_string(response).await;
        assert!(body.contains("VALIDATION"), "body: {body}");
    }

    #[tokio::test]
    async fn negative_quantity_is_rejected() {
        let app = app();
        let response = app
            .oneshot(post_trade(
                r#"{"stockName":"TEA","quantity":-5,"side":"BUY","price":5.0}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn non_positive_price_is_rejected() {
        let app = app();
        let response = app
            .oneshot(post_trade(
                r#"{"stockName":"TEA","quantity":5,"side":"BUY","price":0.0}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn invalid_side_is_rejected() {
        let app = app();
        let response = app
            .oneshot(post_trade(
                r#"{"stockName":"TEA","quantity":5,"side":"HOLD","price":5.0}"#,
            ))
            .await
            .unwrap();
        assert!(
            response.status().is_client_error(),
            "got {}",
            response.status()
        );
    }
}

mod stock_price_endpoint {
    use super::*;

    #[tokio::test]
    async fn vwap_is_rendered_with_two_decimals() {
        let market = market();
        for price in [4.0, 5.0, 6.0] {
            market.submit_trade(sell("POP", 60, 102, price)).unwrap();
        }
        let app = app_with(market);

        let response = app.oneshot(get("/stockPrice?stockName=POP")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "5.00");
    }

    #[tokio::test]
    async fn no_trades_is_unprocessable() {
        let app = app();
        let response = app.oneshot(get("/stockPrice?stockName=POP")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_string(response).await;
        assert!(body.contains("NO_TRADE_DATA"), "body: {body}");
    }

    #[tokio::test]
    async fn missing_query_parameter_is_a_client_error() {
        let app = app();
        let response = app.oneshot(get("/stockPrice")).await.unwrap();
        assert!(response.status().is_client_error());
    }
}

mod pe_ratio_endpoint {
    use super::*;

    #[tokio::test]
    async fn pe_ratio_is_rendered_with_four_decimals() {
        let app = app();
        let response = app
            .oneshot(get("/peRatio?stockName=POP&price=12.5"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "19.5313");
    }

    #[tokio::test]
    async fn zero_yield_reports_the_contract_message() {
        let app = app();
        let response = app
            .oneshot(get("/peRatio?stockName=TEA&price=102.7"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_string(response).await;
        assert!(
            body.contains("Could not calculate PE Ratio since dividendYield is zero"),
            "body: {body}"
        );
    }

    #[tokio::test]
    async fn unknown_stock_is_not_found() {
        let app = app();
        let response = app
            .oneshot(get("/peRatio?stockName=RUM&price=10"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_string(response).await;
        assert!(body.contains("UNKNOWN_STOCK"), "body: {body}");
    }
}

mod dividend_yield_endpoint {
    use super::*;

    #[tokio::test]
    async fn common_stock_yield() {
        let app = app();
        let response = app
            .oneshot(get("/dividendYield?stockName=POP&price=12.5"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "0.6400");
    }

    #[tokio::test]
    async fn preferred_stock_yield() {
        let app = app();
        let response = app
            .oneshot(get("/dividendYield?stockName=GIN&price=80"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "0.0250");
    }

    #[tokio::test]
    async fn unknown_stock_is_not_found() {
        let app = app();
        let response = app
            .oneshot(get("/dividendYield?stockName=RUM&price=10"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn non_positive_price_is_bad_request() {
        let app = app();
        let response = app
            .oneshot(get("/dividendYield?stockName=POP&price=0"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

mod all_share_index_endpoint {
    use super::*;

    #[tokio::test]
    async fn index_is_rendered_with_four_decimals() {
        let market = market();
        market.submit_trade(sell("TEA", 60, 1, 2.0)).unwrap();
        market.submit_trade(sell("POP", 60, 1, 8.0)).unwrap();
        let app = app_with(market);

        let response = app.oneshot(get("/marketAllShareIndex")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "4.0000");
    }

    #[tokio::test]
    async fn empty_market_is_unprocessable() {
        let app = app();
        let response = app.oneshot(get("/marketAllShareIndex")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_string(response).await;
        assert!(body.contains("INSUFFICIENT_DATA"), "body: {body}");
    }
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = app();
    let response = app.oneshot(get("/nonexistent")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
