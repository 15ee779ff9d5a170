use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{BlogError, BlogId, BlogPost, BlogRepository, Comment, slugify};

/// A post as submitted by the create form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub author_name: String,
    pub tags: Vec<String>,
    pub category: String,
    pub thumbnail: String,
}

/// Changes to an existing post. Empty strings count as "leave unchanged";
/// `author_id`, when set, must match the post's author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub author_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewComment {
    pub author_id: String,
    pub author_name: String,
    pub content: String,
}

/// Listing filter. Empty fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogFilter {
    /// Case-insensitive substring of the title or content.
    pub search: Option<String>,
    /// Matches posts carrying any of these tags.
    pub tags: Vec<String>,
    pub author_id: Option<String>,
}

impl BlogFilter {
    fn matches(&self, post: &BlogPost) -> bool {
        let search = self
            .search
            .as_deref()
            .map(str::to_lowercase)
            .filter(|s| !s.is_empty());
        if let Some(needle) = search
            && !post.title.to_lowercase().contains(&needle)
            && !post.content.to_lowercase().contains(&needle)
        {
            return false;
        }
        if !self.tags.is_empty() && !post.tags.iter().any(|t| self.tags.contains(t)) {
            return false;
        }
        match self.author_id.as_deref().filter(|a| !a.is_empty()) {
            Some(author) => post.author_id == author,
            None => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LikeAction {
    Like,
    Unlike,
}

impl FromStr for LikeAction {
    type Err = BlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(LikeAction::Like),
            "unlike" => Ok(LikeAction::Unlike),
            other => Err(BlogError::InvalidAction(other.to_string())),
        }
    }
}

fn required(value: &str, field: &'static str) -> Result<(), BlogError> {
    if value.trim().is_empty() {
        return Err(BlogError::MissingField(field));
    }
    Ok(())
}

/// Blog operations over a [`BlogRepository`].
pub struct BlogService<R> {
    repo: R,
}

impl<R: BlogRepository> BlogService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn create(&mut self, new: NewBlogPost) -> Result<BlogPost, BlogError> {
        required(&new.title, "title")?;
        required(&new.content, "content")?;
        required(&new.author_id, "authorId")?;
        required(&new.author_name, "authorName")?;

        let slug = slugify(&new.title);
        if slug.is_empty() {
            return Err(BlogError::InvalidTitle(new.title));
        }
        if self.repo.find_by_slug(&slug).is_some() {
            return Err(BlogError::DuplicateSlug(slug));
        }

        let now = Utc::now();
        let post = BlogPost {
            id: BlogId::new(),
            slug,
            title: new.title,
            content: new.content,
            author_id: new.author_id,
            author_name: new.author_name,
            created_at: now,
            updated_at: now,
            comments: vec![],
            likes: 0,
            saves: 0,
            tags: new.tags,
            category: new.category,
            thumbnail: new.thumbnail,
        };
        log::info!("Created blog '{}' ({})", post.slug, post.id);
        self.repo.insert(post.clone());
        Ok(post)
    }

    pub fn get(&self, id: &BlogId) -> Result<BlogPost, BlogError> {
        self.repo
            .find_by_id(id)
            .ok_or_else(|| BlogError::NotFound(id.to_string()))
    }

    pub fn get_by_slug(&self, slug: &str) -> Result<BlogPost, BlogError> {
        self.repo
            .find_by_slug(slug)
            .ok_or_else(|| BlogError::NotFound(slug.to_string()))
    }

    /// Matching posts, newest first.
    pub fn list(&self, filter: &BlogFilter) -> Vec<BlogPost> {
        let mut posts: Vec<BlogPost> = self
            .repo
            .list()
            .into_iter()
            .filter(|p| filter.matches(p))
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }

    pub fn update(&mut self, id: &BlogId, patch: BlogPatch) -> Result<BlogPost, BlogError> {
        let mut post = self.get(id)?;
        Self::check_author(&post, patch.author_id.as_deref())?;

        if let Some(title) = patch.title.filter(|t| !t.is_empty()) {
            post.title = title;
        }
        if let Some(content) = patch.content.filter(|c| !c.is_empty()) {
            post.content = content;
        }
        if let Some(tags) = patch.tags {
            post.tags = tags;
        }
        post.updated_at = Utc::now();

        self.repo.replace(post.clone());
        Ok(post)
    }

    pub fn delete(&mut self, id: &BlogId, author_id: Option<&str>) -> Result<BlogPost, BlogError> {
        let post = self.get(id)?;
        Self::check_author(&post, author_id)?;
        log::info!("Deleting blog '{}' ({})", post.slug, post.id);
        self.repo
            .remove(id)
            .ok_or_else(|| BlogError::NotFound(id.to_string()))
    }

    /// Apply a like or unlike and return the new count.
    pub fn like(&mut self, id: &BlogId, action: LikeAction) -> Result<u64, BlogError> {
        let mut post = self.get(id)?;
        post.likes = match action {
            LikeAction::Like => post.likes + 1,
            LikeAction::Unlike => post.likes.saturating_sub(1),
        };
        let likes = post.likes;
        self.repo.replace(post);
        Ok(likes)
    }

    pub fn comment(&mut self, id: &BlogId, new: NewComment) -> Result<Comment, BlogError> {
        required(&new.author_id, "authorId")?;
        required(&new.author_name, "authorName")?;
        required(&new.content, "content")?;

        let mut post = self.get(id)?;
        let comment = Comment {
            author_id: new.author_id,
            author_name: new.author_name,
            content: new.content,
            created_at: Utc::now(),
        };
        post.comments.push(comment.clone());
        self.repo.replace(post);
        Ok(comment)
    }

    fn check_author(post: &BlogPost, author_id: Option<&str>) -> Result<(), BlogError> {
        match author_id.filter(|a| !a.is_empty()) {
            Some(author) if author != post.author_id => Err(BlogError::Forbidden {
                blog: post.id,
                author_id: author.to_string(),
            }),
            _ => Ok(()),
        }
    }
}
