use quill_core::application::commands::users::{
    LoginUserCommand, RegisterUserCommand, UpdateUserCommand,
};
use quill_core::application::error::ApplicationError;

mod support;

use support::{DummyTokenManager, TestApp, ctx, password_for, register_command};

fn login(email: &str, password: &str) -> LoginUserCommand {
    LoginUserCommand {
        email: email.into(),
        password: password.into(),
    }
}

#[tokio::test]
async fn registration_returns_the_account_with_a_token() {
    let app = TestApp::new();
    let (user, actor) = app.register("jake").await;

    assert_eq!(user.username, "jake");
    assert_eq!(user.email, "jake@example.com");
    assert_eq!(user.bio, None);
    assert_eq!(user.image, None);
    assert_eq!(user.token, DummyTokenManager::token_for(actor.id.0, "jake"));
    assert_eq!(
        app.store.password_hash_of("jake").as_deref(),
        Some("hashed:jake-secret")
    );
}

#[tokio::test]
async fn duplicate_email_or_username_conflicts() {
    let app = TestApp::new();
    app.register("jake").await;
    let users = &app.services.user_commands;

    let err = users
        .register(
            &ctx(),
            RegisterUserCommand {
                username: "other".into(),
                email: "jake@example.com".into(),
                password: "long-enough".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(msg) if msg == "email already exists"));

    let err = users
        .register(
            &ctx(),
            RegisterUserCommand {
                username: "jake".into(),
                email: "fresh@example.com".into(),
                password: "long-enough".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(msg) if msg == "username already exists"));
}

#[tokio::test]
async fn registration_validates_input() {
    let app = TestApp::new();
    let users = &app.services.user_commands;

    let mut short = register_command("jake");
    short.password = "12345".into();
    let mut bad_email = register_command("jake");
    bad_email.email = "not-an-email".into();
    let mut spaced = register_command("jake");
    spaced.username = "jake doe".into();

    for command in [short, bad_email, spaced] {
        let err = users.register(&ctx(), command).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(_)), "{err:?}");
    }
}

#[tokio::test]
async fn login_checks_credentials_without_revealing_which_failed() {
    let app = TestApp::new();
    app.register("jake").await;
    let users = &app.services.user_commands;

    let ok = users
        .login(&ctx(), login("jake@example.com", &password_for("jake")))
        .await
        .unwrap();
    assert_eq!(ok.username, "jake");

    for (email, password) in [
        ("jake@example.com", "wrong-password"),
        ("nobody@example.com", "whatever1"),
        ("garbage", "whatever1"),
    ] {
        let err = users.login(&ctx(), login(email, password)).await.unwrap_err();
        assert!(
            matches!(&err, ApplicationError::Unauthorized(msg) if msg == "invalid email or password"),
            "{err:?}"
        );
    }
}

#[tokio::test]
async fn update_changes_only_supplied_fields() {
    let app = TestApp::new();
    let (_, jake) = app.register("jake").await;
    let users = &app.services.user_commands;

    let updated = users
        .update_user(
            &ctx(),
            &jake,
            UpdateUserCommand {
                bio: Some("I work at statefarm".into()),
                image: Some("https://example.com/jake.png".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.bio.as_deref(), Some("I work at statefarm"));
    assert_eq!(updated.email, "jake@example.com");
    assert_eq!(updated.username, "jake");

    let renamed = users
        .update_user(
            &ctx(),
            &jake,
            UpdateUserCommand {
                username: Some("jacob".into()),
                password: Some("new-password".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.username, "jacob");
    assert_eq!(renamed.bio.as_deref(), Some("I work at statefarm"));
    assert_eq!(renamed.token, DummyTokenManager::token_for(jake.id.0, "jacob"));

    users
        .login(&ctx(), login("jake@example.com", "new-password"))
        .await
        .unwrap();
}

#[tokio::test]
async fn update_rejects_taken_identifiers_but_allows_own() {
    let app = TestApp::new();
    let (_, jake) = app.register("jake").await;
    app.register("celeb").await;
    let users = &app.services.user_commands;

    let err = users
        .update_user(
            &ctx(),
            &jake,
            UpdateUserCommand {
                email: Some("celeb@example.com".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)));

    let same = users
        .update_user(
            &ctx(),
            &jake,
            UpdateUserCommand {
                email: Some("jake@example.com".into()),
                username: Some("jake".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(same.username, "jake");

    let err = users
        .update_user(
            &ctx(),
            &jake,
            UpdateUserCommand {
                password: Some("short".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn current_user_reissues_a_token() {
    let app = TestApp::new();
    let (_, jake) = app.register("jake").await;

    let current = app
        .services
        .user_queries
        .current_user(&ctx(), &jake)
        .await
        .unwrap();
    assert_eq!(current.username, "jake");
    assert!(!current.token.is_empty());
}
