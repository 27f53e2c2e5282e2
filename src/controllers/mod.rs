pub mod boarding;
pub mod test;

use axum::Router;
use std::sync::Arc;

use crate::AppState;

pub fn routes(state: &AppState) -> Router<Arc<AppState>> {
    Router::new()
        .merge(boarding::routes(&state.config))
        .merge(test::routes())
}
