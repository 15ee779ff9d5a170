use super::{BlogId, BlogPost};

/// Storage for published posts.
pub trait BlogRepository {
    fn insert(&mut self, post: BlogPost);

    fn find_by_id(&self, id: &BlogId) -> Option<BlogPost>;

    fn find_by_slug(&self, slug: &str) -> Option<BlogPost>;

    /// Every stored post, in no particular order.
    fn list(&self) -> Vec<BlogPost>;

    /// Overwrite the stored post with the same id. Returns `false` if there
    /// was none.
    fn replace(&mut self, post: BlogPost) -> bool;

    fn remove(&mut self, id: &BlogId) -> Option<BlogPost>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryBlogRepository {
    posts: Vec<BlogPost>,
}

impl MemoryBlogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(posts: Vec<BlogPost>) -> Self {
        Self { posts }
    }
}

impl BlogRepository for MemoryBlogRepository {
    fn insert(&mut self, post: BlogPost) {
        self.posts.push(post);
    }

    fn find_by_id(&self, id: &BlogId) -> Option<BlogPost> {
        self.posts.iter().find(|p| &p.id == id).cloned()
    }

    fn find_by_slug(&self, slug: &str) -> Option<BlogPost> {
        self.posts.iter().find(|p| p.slug == slug).cloned()
    }

    fn list(&self) -> Vec<BlogPost> {
        self.posts.clone()
    }

    fn replace(&mut self, post: BlogPost) -> bool {
        match self.posts.iter_mut().find(|p| p.id == post.id) {
            Some(existing) => {
                *existing = post;
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, id: &BlogId) -> Option<BlogPost> {
        let index = self.posts.iter().position(|p| &p.id == id)?;
        Some(self.posts.remove(index))
    }
}
