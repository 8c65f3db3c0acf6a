//! In-memory content store.
//!
//! The store is the single source of truth for all five collections. News, programs and
//! events are mutable; team and gallery are fixed at construction. Every effective mutation
//! bumps a revision counter that subscribers can watch to know when to re-read.

mod collection;
mod ids;
mod seed;
mod slug;

pub use collection::*;
pub use ids::*;
pub use seed::*;
pub use slug::*;

use tokio::sync::watch;

use crate::models::{
    CreateEventRequest, CreateNewsRequest, CreateProgramRequest, Datastore, Event, GalleryImage,
    NewsPost, Program, Seed, TeamMember, UpdateEventRequest, UpdateNewsRequest,
    UpdateProgramRequest,
};

impl Record for NewsPost {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Program {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Event {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for TeamMember {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for GalleryImage {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Patch<NewsPost> for UpdateNewsRequest {
    fn apply(&self, post: &mut NewsPost) {
        if let Some(title) = &self.title {
            post.title = title.clone();
        }
        if let Some(content) = &self.content {
            post.content = content.clone();
        }
        if let Some(excerpt) = &self.excerpt {
            post.excerpt = excerpt.clone();
        }
        if let Some(featured_image) = &self.featured_image {
            post.featured_image = featured_image.clone();
        }
        if let Some(author) = &self.author {
            post.author = author.clone();
        }
        if let Some(publish_date) = self.publish_date {
            post.publish_date = publish_date;
        }
        if let Some(published) = self.published {
            post.published = published;
        }
    }
}

impl Patch<Program> for UpdateProgramRequest {
    fn apply(&self, program: &mut Program) {
        if let Some(title) = &self.title {
            program.title = title.clone();
        }
        if let Some(description) = &self.description {
            program.description = description.clone();
        }
        if let Some(image) = &self.image {
            program.image = image.clone();
        }
        if let Some(category) = &self.category {
            program.category = category.clone();
        }
        if let Some(date) = self.date {
            program.date = date;
        }
        if let Some(status) = self.status {
            program.status = status;
        }
    }
}

impl Patch<Event> for UpdateEventRequest {
    fn apply(&self, event: &mut Event) {
        if let Some(title) = &self.title {
            event.title = title.clone();
        }
        if let Some(description) = &self.description {
            event.description = description.clone();
        }
        if let Some(date) = self.date {
            event.date = date;
        }
        if let Some(time) = &self.time {
            event.time = time.clone();
        }
        if let Some(location) = &self.location {
            event.location = location.clone();
        }
        if let Some(registration_url) = &self.registration_url {
            event.registration_url = registration_url.clone();
        }
        if let Some(image) = &self.image {
            event.image = image.clone();
        }
        if let Some(kind) = self.kind {
            event.kind = kind;
        }
    }
}

/// Owner of every content collection for one site session.
pub struct ContentStore {
    news: Collection<NewsPost>,
    programs: Collection<Program>,
    events: Collection<Event>,
    team: Collection<TeamMember>,
    gallery: Collection<GalleryImage>,
    ids: Box<dyn IdGenerator>,
    revision: watch::Sender<u64>,
}

impl ContentStore {
    /// Build a store from a seed using random identifiers.
    pub fn new(seed: Seed) -> Self {
        Self::with_id_generator(seed, Box::new(RandomIds))
    }

    /// Build a store from the built-in example content.
    pub fn seeded() -> Self {
        Self::new(default_seed())
    }

    pub fn with_id_generator(seed: Seed, ids: Box<dyn IdGenerator>) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            news: Collection::new(seed.news),
            programs: Collection::new(seed.programs),
            events: Collection::new(seed.events),
            team: Collection::new(seed.team),
            gallery: Collection::new(seed.gallery),
            ids,
            revision,
        }
    }

    /// Current revision; starts at 0 and increases by one per effective mutation.
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    /// Receive a notification after every effective mutation.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn bump(&self) -> u64 {
        self.revision.send_modify(|rev| *rev += 1);
        self.revision()
    }

    pub fn news(&self) -> &[NewsPost] {
        self.news.as_slice()
    }

    pub fn programs(&self) -> &[Program] {
        self.programs.as_slice()
    }

    pub fn events(&self) -> &[Event] {
        self.events.as_slice()
    }

    pub fn team(&self) -> &[TeamMember] {
        self.team.as_slice()
    }

    pub fn gallery(&self) -> &[GalleryImage] {
        self.gallery.as_slice()
    }

    pub fn get_news(&self, id: &str) -> Option<&NewsPost> {
        self.news.get(id)
    }

    pub fn get_program(&self, id: &str) -> Option<&Program> {
        self.programs.get(id)
    }

    pub fn get_event(&self, id: &str) -> Option<&Event> {
        self.events.get(id)
    }

    /// Copy of every collection at the current revision.
    pub fn datastore(&self) -> Datastore {
        Datastore {
            revision_id: self.revision(),
            news: self.news().to_vec(),
            programs: self.programs().to_vec(),
            events: self.events().to_vec(),
            team: self.team().to_vec(),
            gallery: self.gallery().to_vec(),
        }
    }

    // ==================== NEWS OPERATIONS ====================

    /// Create a post. The slug is always derived from the title; any submitted slug is dropped.
    pub fn add_news(&mut self, request: CreateNewsRequest) -> &NewsPost {
        let post = NewsPost {
            id: self.ids.generate(),
            slug: slugify(&request.title),
            title: request.title,
            content: request.content,
            excerpt: request.excerpt,
            featured_image: request.featured_image,
            author: request.author,
            publish_date: request.publish_date,
            published: request.published,
        };
        let revision = self.bump();
        tracing::info!(id = %post.id, slug = %post.slug, revision, "Added news post");
        self.news.add(post)
    }

    pub fn update_news(&mut self, id: &str, patch: &UpdateNewsRequest) -> Option<&NewsPost> {
        let Some(before) = self.news.get(id).cloned() else {
            tracing::debug!(id, "Ignoring update for unknown news post");
            return None;
        };
        let changed = self
            .news
            .update(id, patch)
            .is_some_and(|after| *after != before);
        if changed {
            let revision = self.bump();
            tracing::info!(id, revision, "Updated news post");
        } else {
            tracing::debug!(id, "Update left news post unchanged");
        }
        self.news.get(id)
    }

    pub fn remove_news(&mut self, id: &str) -> bool {
        if !self.news.remove(id) {
            tracing::debug!(id, "Ignoring removal of unknown news post");
            return false;
        }
        let revision = self.bump();
        tracing::info!(id, revision, "Removed news post");
        true
    }

    // ==================== PROGRAM OPERATIONS ====================

    pub fn add_program(&mut self, request: CreateProgramRequest) -> &Program {
        let program = Program {
            id: self.ids.generate(),
            title: request.title,
            description: request.description,
            image: request.image,
            category: request.category,
            date: request.date,
            status: request.status,
        };
        let revision = self.bump();
        tracing::info!(id = %program.id, revision, "Added program");
        self.programs.add(program)
    }

    pub fn update_program(&mut self, id: &str, patch: &UpdateProgramRequest) -> Option<&Program> {
        let Some(before) = self.programs.get(id).cloned() else {
            tracing::debug!(id, "Ignoring update for unknown program");
            return None;
        };
        let changed = self
            .programs
            .update(id, patch)
            .is_some_and(|after| *after != before);
        if changed {
            let revision = self.bump();
            tracing::info!(id, revision, "Updated program");
        } else {
            tracing::debug!(id, "Update left program unchanged");
        }
        self.programs.get(id)
    }

    pub fn remove_program(&mut self, id: &str) -> bool {
        if !self.programs.remove(id) {
            tracing::debug!(id, "Ignoring removal of unknown program");
            return false;
        }
        let revision = self.bump();
        tracing::info!(id, revision, "Removed program");
        true
    }

    // ==================== EVENT OPERATIONS ====================

    pub fn add_event(&mut self, request: CreateEventRequest) -> &Event {
        let event = Event {
            id: self.ids.generate(),
            title: request.title,
            description: request.description,
            date: request.date,
            time: request.time,
            location: request.location,
            registration_url: request.registration_url,
            image: request.image,
            kind: request.kind,
        };
        let revision = self.bump();
        tracing::info!(id = %event.id, revision, "Added event");
        self.events.add(event)
    }

    pub fn update_event(&mut self, id: &str, patch: &UpdateEventRequest) -> Option<&Event> {
        let Some(before) = self.events.get(id).cloned() else {
            tracing::debug!(id, "Ignoring update for unknown event");
            return None;
        };
        let changed = self
            .events
            .update(id, patch)
            .is_some_and(|after| *after != before);
        if changed {
            let revision = self.bump();
            tracing::info!(id, revision, "Updated event");
        } else {
            tracing::debug!(id, "Update left event unchanged");
        }
        self.events.get(id)
    }

    pub fn remove_event(&mut self, id: &str) -> bool {
        if !self.events.remove(id) {
            tracing::debug!(id, "Ignoring removal of unknown event");
            return false;
        }
        let revision = self.bump();
        tracing::info!(id, revision, "Removed event");
        true
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::seeded()
    }
}
