//! Navigation sidebar handler for GET /api/nav.
//!
//! Public route: an anonymous caller gets the sidebar without account card
//! or logout action.

use axum::{extract::State, Json};

use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::{BackendError, LogError};
use crate::backend::middleware::OptionalAuthUser;
use crate::backend::server::state::AppState;
use crate::shared::Sidebar;

pub async fn get_nav(
    State(state): State<AppState>,
    OptionalAuthUser(auth): OptionalAuthUser,
) -> Result<Json<Sidebar>, BackendError> {
    let user = match auth {
        Some(auth) => get_user_by_id(&state.pool, auth.user_id)
            .await
            .log_err("get_nav")?,
        None => None,
    };

    let summary = user.as_ref().map(|u| u.summary());
    Ok(Json(Sidebar::for_user(summary.as_ref())))
}
