//! HTTP request handlers for the web adapter.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::trade::{Trade, TradeSide};

use super::{ApiError, AppState};

#[derive(Debug, serde::Deserialize)]
pub struct TradeRequest {
    #[serde(rename = "stockName")]
    pub stock_name: String,
    /// Execution instant; omitted means "stamped on arrival".
    pub timestamp: Option<DateTime<Utc>>,
    pub quantity: i64,
    pub side: TradeSide,
    pub price: f64,
}

#[derive(Debug, serde::Deserialize)]
pub struct StockQuery {
    #[serde(rename = "stockName")]
    pub stock_name: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct PricedStockQuery {
    #[serde(rename = "stockName")]
    pub stock_name: String,
    pub price: f64,
}

pub async fn submit_trade(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TradeRequest>,
) -> Result<StatusCode, ApiError> {
    let quantity = u64::try_from(req.quantity)
        .map_err(|_| ApiError::bad_request("invalid trade: quantity must be positive"))?;

    let trade = Trade {
        symbol: req.stock_name,
        timestamp: req.timestamp.unwrap_or_else(Utc::now),
        quantity,
        side: req.side,
        price: req.price,
    };
    state.market.submit_trade(trade)?;
    Ok(StatusCode::OK)
}

pub async fn dividend_yield(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PricedStockQuery>,
) -> Result<String, ApiError> {
    let yield_ = state.market.dividend_yield(&query.stock_name, query.price)?;
    Ok(fixed(yield_, 4))
}

pub async fn pe_ratio(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PricedStockQuery>,
) -> Result<String, ApiError> {
    let ratio = state.market.pe_ratio(&query.stock_name, query.price)?;
    Ok(fixed(ratio, 4))
}

pub async fn stock_price(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StockQuery>,
) -> Result<String, ApiError> {
    let price = state.market.stock_price(&query.stock_name)?;
    Ok(fixed(price, 2))
}

pub async fn all_share_index(
    State(state): State<Arc<AppState>>,
) -> Result<String, ApiError> {
    let index = state.market.all_share_index()?;
    Ok(fixed(index, 4))
}

/// Fixed-point display rounding, ties away from zero. The format machinery
/// alone rounds ties to even, which would render 19.53125 as "19.5312"
/// instead of the documented "19.5313".
fn fixed(value: f64, digits: u32) -> String {
    let scale = 10f64.powi(digits as i32);
    format!("{:.*}", digits as usize, (value * scale).round() / scale)
}
