//! One-shot flash messages.
//!
//! A redirect response plants a short-lived cookie; the next form
//! page reads it, surfaces the message, and expires the cookie.
//! Values are compact tokens so they stay within cookie-safe
//! characters; pages expand them to display text.

use actix_web::HttpRequest;
use actix_web::cookie::Cookie;

const FLASH_COOKIE_NAME: &str = "_flash";

/// The flash messages this application can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    LoginRequired,
    EmailTaken,
    NoSuchAccount,
    BadPassword,
}

impl Flash {
    fn token(self) -> &'static str {
        match self {
            Flash::LoginRequired => "login-required",
            Flash::EmailTaken => "email-taken",
            Flash::NoSuchAccount => "no-such-account",
            Flash::BadPassword => "bad-password",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "login-required" => Some(Flash::LoginRequired),
            "email-taken" => Some(Flash::EmailTaken),
            "no-such-account" => Some(Flash::NoSuchAccount),
            "bad-password" => Some(Flash::BadPassword),
            _ => None,
        }
    }

    /// The text a page shows for this flash.
    pub fn message(self) -> &'static str {
        match self {
            Flash::LoginRequired => "You need to login or register to comment",
            Flash::EmailTaken => "Email already exists, try logging in instead",
            Flash::NoSuchAccount => "Email does not exist, please try again",
            Flash::BadPassword => "Check your password and try again",
        }
    }
}

/// Read a pending flash from the request, if any.
pub fn get_flash(req: &HttpRequest) -> Option<Flash> {
    req.cookie(FLASH_COOKIE_NAME)
        .and_then(|c| Flash::from_token(c.value()))
}

/// Cookie that plants a flash for the next page.
pub fn flash_cookie(flash: Flash) -> Cookie<'static> {
    let mut cookie = Cookie::new(FLASH_COOKIE_NAME, flash.token());
    cookie.set_path("/");
    cookie
}

/// Cookie that expires a consumed flash.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(FLASH_COOKIE_NAME, "");
    cookie.set_path("/");
    cookie.make_removal();
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip() {
        for flash in [
            Flash::LoginRequired,
            Flash::EmailTaken,
            Flash::NoSuchAccount,
            Flash::BadPassword,
        ] {
            assert_eq!(Flash::from_token(flash.token()), Some(flash));
        }
    }

    #[test]
    fn unknown_token_is_ignored() {
        assert_eq!(Flash::from_token("definitely-not-a-flash"), None);
    }

    #[test]
    fn tokens_are_cookie_safe() {
        for flash in [
            Flash::LoginRequired,
            Flash::EmailTaken,
            Flash::NoSuchAccount,
            Flash::BadPassword,
        ] {
            assert!(
                flash
                    .token()
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-')
            );
        }
    }
}
