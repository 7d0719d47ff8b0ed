// tests/support/builders.rs
use quill_core::application::commands::articles::CreateArticleCommand;
use quill_core::application::commands::users::RegisterUserCommand;

/// Registration input derived from the username: `<name>@example.com` and a
/// password that passes the length rule.
pub fn register_command(username: &str) -> RegisterUserCommand {
    RegisterUserCommand {
        username: username.into(),
        email: format!("{username}@example.com"),
        password: password_for(username),
    }
}

pub fn password_for(username: &str) -> String {
    format!("{username}-secret")
}

pub struct ArticleInput {
    title: String,
    description: String,
    body: String,
    tags: Vec<String>,
}

impl ArticleInput {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: "Ever wonder how?".into(),
            body: "It takes a Jacobian".into(),
            tags: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn command(self) -> CreateArticleCommand {
        CreateArticleCommand::builder()
            .title(self.title)
            .description(self.description)
            .body(self.body)
            .tags(self.tags)
            .build()
            .expect("all article fields are set")
    }

    /// The `{"article": ...}` request body.
    pub fn json(self) -> serde_json::Value {
        serde_json::json!({
            "article": {
                "title": self.title,
                "description": self.description,
                "body": self.body,
                "tagList": self.tags,
            }
        })
    }
}
