// SPDX-License-Identifier: MPL-2.0
use gobarber::config::{self, Config, GeneralConfig};
use gobarber::i18n::fluent::I18n;
use gobarber::routes::{self, Route, RouteDecision};
use gobarber::session::{
    AuthState, FileStore, KeyValueStore, SessionResponse, User, TOKEN_KEY, USER_KEY,
};
use tempfile::tempdir;

fn session_response() -> SessionResponse {
    SessionResponse {
        token: "123token".to_string(),
        user: User {
            id: "123user".to_string(),
            name: "John Doe".to_string(),
            email: "johndoe@example.com".to_string(),
            avatar_url: None,
        },
    }
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&english, &temp_config_file_path)
        .expect("Failed to write initial config file");
    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("signin-title"), "Sign in");

    let portuguese = Config {
        general: GeneralConfig {
            language: Some("pt-BR".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&portuguese, &temp_config_file_path)
        .expect("Failed to write portuguese config file");
    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load portuguese config from path");
    let i18n_pt = I18n::new(None, &loaded);
    assert_eq!(i18n_pt.current_locale().to_string(), "pt-BR");
}

#[test]
fn test_session_survives_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let (store, warning) = FileStore::open_in(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    let mut auth = AuthState::restore(store);
    assert!(!auth.is_signed_in());
    auth.establish(session_response()).expect("persist session");

    let (store, warning) = FileStore::open_in(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    let restored = AuthState::restore(store);
    assert_eq!(restored.token(), Some("123token"));
    assert_eq!(restored.user().map(|u| u.name.as_str()), Some("John Doe"));
    assert_eq!(
        routes::guard(Route::SignIn, restored.is_signed_in()).target(),
        Route::Dashboard
    );
}

#[test]
fn test_sign_out_clears_persisted_session() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let (store, _) = FileStore::open_in(Some(dir.path().to_path_buf()));
    let mut auth = AuthState::restore(store);
    auth.establish(session_response()).expect("persist session");
    auth.sign_out().expect("clear session");

    let (store, _) = FileStore::open_in(Some(dir.path().to_path_buf()));
    assert!(store.get(TOKEN_KEY).is_none());
    assert!(store.get(USER_KEY).is_none());
    assert!(!AuthState::restore(store).is_signed_in());
}

#[test]
fn test_private_routes_require_session() {
    for route in Route::ALL {
        let signed_out = routes::guard(route, false);
        if route.is_private() {
            assert_eq!(
                signed_out,
                RouteDecision::Redirect {
                    to: Route::SignIn,
                    from: route
                }
            );
        } else {
            assert_eq!(signed_out, RouteDecision::Render(route));
        }
    }
}

#[test]
fn test_reset_link_round_trips_through_routes() {
    let location = "/reset-password?token=abc123";
    assert_eq!(Route::from_path(location), Some(Route::ResetPassword));
    assert_eq!(
        routes::reset_token_from_query(location).as_deref(),
        Some("abc123")
    );
}
