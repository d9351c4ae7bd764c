/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Public
 * - `POST /api/auth/signup` - User registration
 * - `POST /api/auth/login` - User login
 * - `GET /api/nav` - Navigation sidebar (account card only when a valid token is sent)
 *
 * ## Authenticated
 * - `POST /api/auth/logout`, `GET /api/auth/me`
 * - `GET|POST /api/posts`, `DELETE /api/posts/{id}`
 * - `POST /api/posts/{id}/comment`, `POST /api/posts/{id}/like`
 * - `GET /api/posts/liked/{id}`, `GET /api/posts/following`, `GET /api/posts/user/{username}`
 * - `GET /api/users/profile/{username}`, `POST /api/users/follow/{id}`
 * - `GET|DELETE /api/notifications`
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};

use crate::backend::auth::{get_me, login, logout, signup};
use crate::backend::middleware::auth_middleware;
use crate::backend::nav::get_nav;
use crate::backend::notifications::{delete_notifications, get_notifications};
use crate::backend::posts::{
    comment_on_post, create_post, delete_post, get_all_posts, get_following_posts,
    get_liked_posts, get_user_posts, like_unlike_post,
};
use crate::backend::profiles::{follow_unfollow_user, get_user_profile};
use crate::backend::server::state::AppState;

/// Routes reachable without a token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/nav", get(get_nav))
}

/// Routes behind the auth middleware
///
/// The middleware is attached with `route_layer`, so unmatched paths still
/// reach the fallback instead of answering 401.
pub fn protected_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        // Authentication
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/me", get(get_me))
        // Posts
        .route("/api/posts", get(get_all_posts).post(create_post))
        .route("/api/posts/following", get(get_following_posts))
        .route("/api/posts/liked/{id}", get(get_liked_posts))
        .route("/api/posts/user/{username}", get(get_user_posts))
        .route("/api/posts/{id}", delete(delete_post))
        .route("/api/posts/{id}/comment", post(comment_on_post))
        .route("/api/posts/{id}/like", post(like_unlike_post))
        // Users
        .route("/api/users/profile/{username}", get(get_user_profile))
        .route("/api/users/follow/{id}", post(follow_unfollow_user))
        // Notifications
        .route(
            "/api/notifications",
            get(get_notifications).delete(delete_notifications),
        )
        .route_layer(from_fn_with_state(state.clone(), auth_middleware))
}

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    router
        .merge(public_routes())
        .merge(protected_routes(state))
}
