//! Web server adapter.
//!
//! Axum HTTP transport over the market facade: one write route for trade
//! submission and four read routes for the derived metrics. Display
//! rounding happens here; the domain hands back unrounded values.

mod error;
mod handlers;

pub use error::ApiError;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::domain::market::MarketFacade;

pub struct AppState {
    pub market: Arc<MarketFacade>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/trade", post(handlers::submit_trade))
        .route("/dividendYield", get(handlers::dividend_yield))
        .route("/peRatio", get(handlers::pe_ratio))
        .route("/stockPrice", get(handlers::stock_price))
        .route("/marketAllShareIndex", get(handlers::all_share_index))
        .with_state(Arc::new(state))
}
