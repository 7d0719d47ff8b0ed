// tests/support/mocks/store.rs
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use quill_core::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleSlug, ArticleUpdate,
    ArticleWriteRepository, NewArticle, PageWindow,
};
use quill_core::domain::comment::{Comment, CommentId, CommentRepository, NewComment};
use quill_core::domain::errors::{DomainError, DomainResult};
use quill_core::domain::favorite::FavoriteRepository;
use quill_core::domain::follow::FollowRepository;
use quill_core::domain::tag::{Tag, TagId, TagName, TagRepository};
use quill_core::domain::user::{Email, NewUser, User, UserId, UserRepository, UserUpdate, Username};

#[derive(Default)]
struct State {
    next_id: i64,
    users: BTreeMap<i64, User>,
    articles: BTreeMap<i64, Article>,
    comments: BTreeMap<i64, Comment>,
    tags: BTreeMap<i64, Tag>,
    article_tags: BTreeSet<(i64, i64)>,
    favorites: HashSet<(i64, i64)>,
    follows: HashSet<(i64, i64)>,
    /// Slugs claimed by simulated concurrent writers.
    claimed_slugs: HashSet<String>,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn slug_taken(&self, slug: &str, except: Option<i64>) -> bool {
        self.claimed_slugs.contains(slug)
            || self
                .articles
                .values()
                .any(|article| article.slug.as_str() == slug && Some(article.id.0) != except)
    }

    fn user_id_by_name(&self, username: &str) -> Option<i64> {
        self.users
            .values()
            .find(|user| user.username.as_str() == username)
            .map(|user| user.id.0)
    }

    fn check_user_unique(
        &self,
        username: Option<&Username>,
        email: Option<&Email>,
        except: Option<i64>,
    ) -> DomainResult<()> {
        let others = || self.users.values().filter(move |user| Some(user.id.0) != except);
        if let Some(username) = username {
            if others().any(|user| &user.username == username) {
                return Err(DomainError::Conflict("username already exists".into()));
            }
        }
        if let Some(email) = email {
            if others().any(|user| &user.email == email) {
                return Err(DomainError::Conflict("email already exists".into()));
            }
        }
        Ok(())
    }

    fn matches(&self, article: &Article, filter: &ArticleFilter) -> bool {
        if let Some(tag) = &filter.tag {
            let tagged = self.tags.values().any(|stored| {
                stored.name.as_str() == tag
                    && self.article_tags.contains(&(article.id.0, stored.id.0))
            });
            if !tagged {
                return false;
            }
        }
        if let Some(author) = &filter.author {
            if self.user_id_by_name(author) != Some(article.author_id.0) {
                return false;
            }
        }
        if let Some(favoriter) = &filter.favorited_by {
            match self.user_id_by_name(favoriter) {
                Some(user_id) if self.favorites.contains(&(user_id, article.id.0)) => {}
                _ => return false,
            }
        }
        true
    }

    /// Newest first, ties broken by id.
    fn window(mut articles: Vec<Article>, window: PageWindow) -> Vec<Article> {
        articles.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.0.cmp(&a.id.0))
        });
        articles
            .into_iter()
            .skip(window.offset as usize)
            .take(window.limit as usize)
            .collect()
    }

    fn feed_articles(&self, follower: UserId) -> Vec<Article> {
        self.articles
            .values()
            .filter(|article| self.follows.contains(&(follower.0, article.author_id.0)))
            .cloned()
            .collect()
    }
}

/// One mutex-guarded store implementing every repository port, with the same
/// uniqueness, cascade and idempotence rules as the Postgres schema.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
    steal_slugs: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The next `count` article writes lose their slug to a concurrent writer:
    /// the slug gets claimed and the write fails with `DuplicateSlug`.
    pub fn steal_next_slugs(&self, count: usize) {
        self.steal_slugs.store(count, Ordering::SeqCst);
    }

    pub fn article_count(&self) -> usize {
        self.state.lock().unwrap().articles.len()
    }

    pub fn comment_count(&self) -> usize {
        self.state.lock().unwrap().comments.len()
    }

    pub fn favorite_count(&self) -> usize {
        self.state.lock().unwrap().favorites.len()
    }

    pub fn password_hash_of(&self, username: &str) -> Option<String> {
        let state = self.state.lock().unwrap();
        state
            .users
            .values()
            .find(|user| user.username.as_str() == username)
            .map(|user| user.password_hash.as_str().to_string())
    }

    /// Claims `slug` (or the already taken slug) for a simulated racer.
    fn lose_slug_race(&self, state: &mut State, slug: &str) -> Option<DomainError> {
        let stolen = self
            .steal_slugs
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok();
        if stolen {
            state.claimed_slugs.insert(slug.to_string());
            return Some(DomainError::DuplicateSlug(slug.to_string()));
        }
        None
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut state = self.state.lock().unwrap();
        state.check_user_unique(Some(&new_user.username), Some(&new_user.email), None)?;
        let id = state.next_id();
        let user = User {
            id: UserId::new(id)?,
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            bio: None,
            image: None,
            created_at: new_user.created_at,
            updated_at: new_user.created_at,
        };
        state.users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.state.lock().unwrap().users.get(&id.0).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .values()
            .find(|user| &user.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.values().find(|user| &user.email == email).cloned())
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut state = self.state.lock().unwrap();
        state.check_user_unique(update.username.as_ref(), update.email.as_ref(), Some(update.id.0))?;
        let user = state
            .users
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        if let Some(username) = update.username {
            user.username = username;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(password_hash) = update.password_hash {
            user.password_hash = password_hash;
        }
        if let Some(bio) = update.bio {
            user.bio = Some(bio);
        }
        if let Some(image) = update.image {
            user.image = Some(image);
        }
        user.updated_at = update.updated_at;
        Ok(user.clone())
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        if let Some(err) = self.lose_slug_race(&mut state, article.slug.as_str()) {
            return Err(err);
        }
        if state.slug_taken(article.slug.as_str(), None) {
            return Err(DomainError::DuplicateSlug(article.slug.into_inner()));
        }
        if !state.users.contains_key(&article.author_id.0) {
            return Err(DomainError::NotFound("author not found".into()));
        }
        let id = state.next_id();
        let stored = Article {
            id: ArticleId::new(id)?,
            slug: article.slug,
            title: article.title,
            description: article.description,
            body: article.body,
            author_id: article.author_id,
            favorites_count: 0,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        state.articles.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        if let Some(slug) = &update.slug {
            if let Some(err) = self.lose_slug_race(&mut state, slug.as_str()) {
                return Err(err);
            }
            if state.slug_taken(slug.as_str(), Some(update.id.0)) {
                return Err(DomainError::DuplicateSlug(slug.as_str().to_string()));
            }
        }
        let article = state
            .articles
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        if let Some(slug) = update.slug {
            article.slug = slug;
        }
        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some(description) = update.description {
            article.description = description;
        }
        if let Some(body) = update.body {
            article.body = body;
        }
        article.updated_at = update.updated_at;
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.articles.remove(&id.0).is_none() {
            return Err(DomainError::NotFound("article not found".into()));
        }
        state.comments.retain(|_, comment| comment.article_id != id);
        state.favorites.retain(|(_, article_id)| *article_id != id.0);
        state.article_tags.retain(|(article_id, _)| *article_id != id.0);
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.state.lock().unwrap().articles.get(&id.0).cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .articles
            .values()
            .find(|article| &article.slug == slug)
            .cloned())
    }

    async fn slug_exists(&self, slug: &ArticleSlug) -> DomainResult<bool> {
        Ok(self.state.lock().unwrap().slug_taken(slug.as_str(), None))
    }

    async fn list(&self, filter: &ArticleFilter, window: PageWindow) -> DomainResult<Vec<Article>> {
        let state = self.state.lock().unwrap();
        let matching = state
            .articles
            .values()
            .filter(|article| state.matches(article, filter))
            .cloned()
            .collect();
        Ok(State::window(matching, window))
    }

    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64> {
        let state = self.state.lock().unwrap();
        Ok(state
            .articles
            .values()
            .filter(|article| state.matches(article, filter))
            .count() as u64)
    }

    async fn feed(&self, follower: UserId, window: PageWindow) -> DomainResult<Vec<Article>> {
        let state = self.state.lock().unwrap();
        Ok(State::window(state.feed_articles(follower), window))
    }

    async fn feed_count(&self, follower: UserId) -> DomainResult<u64> {
        let state = self.state.lock().unwrap();
        Ok(state.feed_articles(follower).len() as u64)
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut state = self.state.lock().unwrap();
        if !state.articles.contains_key(&comment.article_id.0) {
            return Err(DomainError::NotFound("article not found".into()));
        }
        let id = state.next_id();
        let stored = Comment {
            id: CommentId::new(id)?,
            article_id: comment.article_id,
            author_id: comment.author_id,
            body: comment.body,
            created_at: comment.created_at,
            updated_at: comment.created_at,
        };
        state.comments.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self.state.lock().unwrap().comments.get(&id.0).cloned())
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let state = self.state.lock().unwrap();
        let mut comments: Vec<Comment> = state
            .comments
            .values()
            .filter(|comment| comment.article_id == article_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.0.cmp(&a.id.0))
        });
        Ok(comments)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state
            .comments
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))
    }
}

#[async_trait]
impl TagRepository for InMemoryStore {
    async fn get_or_create(&self, name: &TagName) -> DomainResult<Tag> {
        let mut state = self.state.lock().unwrap();
        if let Some(tag) = state.tags.values().find(|tag| &tag.name == name) {
            return Ok(tag.clone());
        }
        let id = state.next_id();
        let tag = Tag {
            id: TagId(id),
            name: name.clone(),
        };
        state.tags.insert(id, tag.clone());
        Ok(tag)
    }

    async fn list_names(&self) -> DomainResult<Vec<String>> {
        let state = self.state.lock().unwrap();
        let mut names: Vec<String> = state
            .tags
            .values()
            .map(|tag| tag.name.as_str().to_string())
            .collect();
        names.sort();
        Ok(names)
    }

    async fn names_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<String>> {
        let state = self.state.lock().unwrap();
        let mut names: Vec<String> = state
            .article_tags
            .iter()
            .filter(|(article, _)| *article == article_id.0)
            .filter_map(|(_, tag)| state.tags.get(tag))
            .map(|tag| tag.name.as_str().to_string())
            .collect();
        names.sort();
        Ok(names)
    }

    async fn replace_for_article(&self, article_id: ArticleId, tags: &[TagId]) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state.article_tags.retain(|(article, _)| *article != article_id.0);
        for tag in tags {
            state.article_tags.insert((article_id.0, tag.0));
        }
        Ok(())
    }
}

#[async_trait]
impl FavoriteRepository for InMemoryStore {
    async fn favorite(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<bool> {
        let mut state = self.state.lock().unwrap();
        if !state.articles.contains_key(&article_id.0) {
            return Err(DomainError::NotFound("article not found".into()));
        }
        let inserted = state.favorites.insert((user_id.0, article_id.0));
        if inserted {
            if let Some(article) = state.articles.get_mut(&article_id.0) {
                article.favorites_count += 1;
            }
        }
        Ok(inserted)
    }

    async fn unfavorite(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<bool> {
        let mut state = self.state.lock().unwrap();
        let removed = state.favorites.remove(&(user_id.0, article_id.0));
        if removed {
            if let Some(article) = state.articles.get_mut(&article_id.0) {
                article.favorites_count = (article.favorites_count - 1).max(0);
            }
        }
        Ok(removed)
    }

    async fn is_favorited(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.favorites.contains(&(user_id.0, article_id.0)))
    }
}

#[async_trait]
impl FollowRepository for InMemoryStore {
    async fn follow(&self, follower: UserId, followee: UserId) -> DomainResult<()> {
        self.state
            .lock()
            .unwrap()
            .follows
            .insert((follower.0, followee.0));
        Ok(())
    }

    async fn unfollow(&self, follower: UserId, followee: UserId) -> DomainResult<()> {
        self.state
            .lock()
            .unwrap()
            .follows
            .remove(&(follower.0, followee.0));
        Ok(())
    }

    async fn is_following(&self, follower: UserId, followee: UserId) -> DomainResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.follows.contains(&(follower.0, followee.0)))
    }
}
