use crate::domain::errors::DomainError;

const CNT_ARTICLE_SLUG: &str = "articles_slug_key";
const CNT_ARTICLE_AUTHOR: &str = "articles_author_id_fkey";
const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_TAG_NAME: &str = "tags_name_key";
const CNT_FAVORITES_COUNT: &str = "articles_favorites_count_chk";

/// Translates driver errors into domain errors by constraint name, falling
/// back to the SQLSTATE class.
///
/// A slug collision comes back as `DuplicateSlug` with an empty slug; writers
/// that know which slug they tried use [`map_slug_write`] instead.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_SLUG => DomainError::DuplicateSlug(String::new()),
                    CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
                    CNT_USER_EMAIL => DomainError::Conflict("email already exists".into()),
                    CNT_TAG_NAME => DomainError::Conflict("tag already exists".into()),
                    CNT_ARTICLE_AUTHOR => DomainError::NotFound("author not found".into()),
                    CNT_FAVORITES_COUNT => {
                        DomainError::Validation("favorites count cannot be negative".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// [`map_sqlx`] for statements that write `slug`.
pub fn map_slug_write(err: sqlx::Error, slug: &str) -> DomainError {
    match map_sqlx(err) {
        DomainError::DuplicateSlug(_) => DomainError::DuplicateSlug(slug.to_string()),
        other => other,
    }
}
