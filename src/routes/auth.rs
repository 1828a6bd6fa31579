use crate::{
    auth::{generate_token, hash_password, verify_password, AuthResponse, LoginRequest, RegisterRequest},
    config::AppConfig,
    error::AppError,
};
use actix_web::{post, web, HttpResponse, Responder};
use sqlx::{Row, SqlitePool};
use validator::Validate;

/// Register a new user
///
/// Creates a new user account and returns an authentication token.
#[post("/register")]
pub async fn register(
    pool: web::Data<SqlitePool>,
    config: web::Data<AppConfig>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    register_data.validate()?;

    // Check if username is taken
    let existing_user = sqlx::query("SELECT id FROM user WHERE username = ?1")
        .bind(&register_data.username)
        .fetch_optional(pool.get_ref())
        .await?;

    if existing_user.is_some() {
        return Err(AppError::BadRequest(format!(
            "User {} is already registered",
            register_data.username
        )));
    }

    // Hash password
    let password_hash = hash_password(&register_data.password)?;

    // Insert new user
    let row = sqlx::query("INSERT INTO user (username, password_hash) VALUES (?1, ?2) RETURNING id")
        .bind(&register_data.username)
        .bind(&password_hash)
        .fetch_one(pool.get_ref())
        .await?;
    let user_id: i64 = row.get("id");

    // Generate token
    let token = generate_token(user_id, &config.secret_key)?;

    Ok(HttpResponse::Created().json(AuthResponse { token, user_id }))
}

/// Login user
///
/// Authenticates a user and returns an authentication token.
#[post("/login")]
pub async fn login(
    pool: web::Data<SqlitePool>,
    config: web::Data<AppConfig>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    login_data.validate()?;

    // Get user from database
    let user = sqlx::query("SELECT id, password_hash FROM user WHERE username = ?1")
        .bind(&login_data.username)
        .fetch_optional(pool.get_ref())
        .await?;

    match user {
        Some(user) => {
            let user_id: i64 = user.get("id");
            let password_hash: String = user.get("password_hash");

            // Verify password
            if verify_password(&login_data.password, &password_hash)? {
                let token = generate_token(user_id, &config.secret_key)?;
                Ok(HttpResponse::Ok().json(AuthResponse { token, user_id }))
            } else {
                Err(AppError::Unauthorized("Invalid credentials".into()))
            }
        }
        None => Err(AppError::Unauthorized("Invalid credentials".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{app, auth::verify_token};
    use actix_web::test;
    use serde_json::json;

    async fn test_app_state() -> (tempfile::TempDir, app::AppState) {
        let dir = tempfile::tempdir().unwrap();
        let state = app::bootstrap_at(&dir.path().join("instance"), None)
            .await
            .unwrap();
        (dir, state)
    }

    #[actix_rt::test]
    async fn test_register_validation() {
        let (_dir, state) = test_app_state().await;

        let app = test::init_service(
            actix_web::App::new()
                .app_data(web::Data::new(state.pool.clone()))
                .app_data(web::Data::new(state.config.clone()))
                .service(register),
        )
        .await;

        // Test invalid username
        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(json!({
                "username": "bad name!",
                "password": "password123"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());

        // Test short password
        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(json!({
                "username": "test",
                "password": "short"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());
    }

    #[actix_rt::test]
    async fn test_register_then_login() {
        let (_dir, state) = test_app_state().await;
        let secret = state.config.secret_key.clone();

        let app = test::init_service(
            actix_web::App::new()
                .app_data(web::Data::new(state.pool.clone()))
                .app_data(web::Data::new(state.config.clone()))
                .service(register)
                .service(login),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(json!({
                "username": "alice",
                "password": "password123"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let body: AuthResponse = test::read_body_json(resp).await;
        let claims = verify_token(&body.token, &secret).unwrap();
        assert_eq!(claims.sub, body.user_id);

        // Registering the same username again is rejected
        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(json!({
                "username": "alice",
                "password": "password123"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        // Correct credentials log in
        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({
                "username": "alice",
                "password": "password123"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        // Wrong password is rejected
        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({
                "username": "alice",
                "password": "wrong_password"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}
