use serde::Serialize;

use crate::models::{ArticleSummary, Comment, Topic, User};

#[derive(Debug, Serialize)]
pub struct TopicsWrapper {
    pub topics: Vec<Topic>,
}

#[derive(Debug, Serialize)]
pub struct UsersWrapper {
    pub users: Vec<User>,
}

#[derive(Debug, Serialize)]
pub struct ArticlesWrapper {
    pub articles: Vec<ArticleSummary>,
}

#[derive(Debug, Serialize)]
pub struct ArticleWrapper<T> {
    pub article: T,
}

#[derive(Debug, Serialize)]
pub struct CommentsWrapper {
    pub comments: Vec<Comment>,
}

#[derive(Debug, Serialize)]
pub struct CommentWrapper<T> {
    pub comment: T,
}
