//! Registration, login, and logout.

use actix_web::{HttpRequest, HttpResponse, web};

use quill_core::domain::NewUser;
use quill_core::error::RepoError;
use quill_core::ports::{PasswordService, SessionService, UserRepository};
use quill_shared::dto::{FormPage, LoginForm, RegisterForm};

use crate::flash::{self, Flash};
use crate::handlers::see_other;
use crate::middleware::auth::{session_cookie, session_removal_cookie};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Render a form page, surfacing (and expiring) any pending flash.
fn form_page(req: &HttpRequest, page: &'static str) -> HttpResponse {
    let pending = flash::get_flash(req);

    let mut resp = HttpResponse::Ok();
    if pending.is_some() {
        resp.cookie(flash::removal_cookie());
    }
    resp.json(FormPage {
        page,
        flash: pending.map(|f| f.message().to_string()),
    })
}

/// GET /register
pub async fn register_page(req: HttpRequest) -> HttpResponse {
    form_page(&req, "register")
}

/// GET /login
pub async fn login_page(req: HttpRequest) -> HttpResponse {
    form_page(&req, "login")
}

/// POST /register
pub async fn register(
    state: web::Data<AppState>,
    form: web::Form<RegisterForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    if form.name.trim().is_empty() {
        return Err(AppError::BadRequest("Name is required".to_string()));
    }
    if form.email.is_empty() || !form.email.contains('@') {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }
    if form.password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    // An already-registered email is funnelled to the login page.
    if state.users.find_by_email(&form.email).await?.is_some() {
        return Ok(see_other("/login")
            .cookie(flash::flash_cookie(Flash::EmailTaken))
            .finish());
    }

    let password_hash = state.passwords.hash(&form.password)?;

    // The first account registered while no admin exists becomes the
    // admin.
    let is_admin = !state.users.admin_exists().await?;

    let user = match state
        .users
        .insert(NewUser {
            name: form.name,
            email: form.email,
            password_hash,
            is_admin,
        })
        .await
    {
        Ok(user) => user,
        // Lost a race on the unique email; same outcome as the
        // pre-check.
        Err(RepoError::Constraint(_)) => {
            return Ok(see_other("/login")
                .cookie(flash::flash_cookie(Flash::EmailTaken))
                .finish());
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(user_id = user.id, admin = user.is_admin, "User registered");

    let token = state.sessions.issue(&user)?;
    Ok(see_other("/")
        .cookie(session_cookie(token, state.sessions.expiration_seconds()))
        .finish())
}

/// POST /login
pub async fn login(
    state: web::Data<AppState>,
    form: web::Form<LoginForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    let Some(user) = state.users.find_by_email(&form.email).await? else {
        return Ok(see_other("/login")
            .cookie(flash::flash_cookie(Flash::NoSuchAccount))
            .finish());
    };

    if !state.passwords.verify(&form.password, &user.password_hash)? {
        return Ok(see_other("/login")
            .cookie(flash::flash_cookie(Flash::BadPassword))
            .finish());
    }

    tracing::debug!(user_id = user.id, "Login succeeded");

    let token = state.sessions.issue(&user)?;
    Ok(see_other("/")
        .cookie(session_cookie(token, state.sessions.expiration_seconds()))
        .finish())
}

/// GET /logout
pub async fn logout() -> HttpResponse {
    see_other("/").cookie(session_removal_cookie()).finish()
}
