//! Built-in example content and optional seed files.

use std::path::Path;

use chrono::NaiveDate;

use crate::errors::AppError;
use crate::models::{
    Event, EventKind, GalleryImage, NewsPost, Program, ProgramStatus, Seed, TeamMember,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Load a seed from a JSON file. Missing collections default to empty.
pub fn load_seed(path: &Path) -> Result<Seed, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let seed: Seed = serde_json::from_str(&raw)
        .map_err(|e| AppError::Config(format!("Invalid seed file {}: {}", path.display(), e)))?;
    tracing::info!(
        news = seed.news.len(),
        programs = seed.programs.len(),
        events = seed.events.len(),
        "Loaded seed from {}",
        path.display()
    );
    Ok(seed)
}

/// The example records every store starts with unless a seed file is configured.
pub fn default_seed() -> Seed {
    Seed {
        news: vec![
            NewsPost {
                id: "1".to_string(),
                title: "STEM Bootcamp 2024 Success Story".to_string(),
                slug: "stem-bootcamp-2024-success-story".to_string(),
                content: "Our recent STEM bootcamp was a tremendous success, with over 200 students \
                          participating in hands-on robotics and programming workshops. Students \
                          learned fundamental programming concepts using Scratch and Python, while \
                          also building their own robots using Arduino microcontrollers. The \
                          enthusiasm and creativity displayed by our young participants was truly \
                          inspiring."
                    .to_string(),
                excerpt: "Our recent STEM bootcamp was a tremendous success, with over 200 students \
                          participating in hands-on robotics and programming workshops."
                    .to_string(),
                featured_image: "https://images.pexels.com/photos/8197455/pexels-photo-8197455.jpeg"
                    .to_string(),
                author: "Dr. Kwame Asante".to_string(),
                publish_date: date(2024, 1, 15),
                published: true,
            },
            NewsPost {
                id: "2".to_string(),
                title: "New Partnership with Tech Giants".to_string(),
                slug: "new-partnership-with-tech-giants".to_string(),
                content: "We are excited to announce our new partnership with leading technology \
                          companies to bring more resources and opportunities to KEEA district \
                          students. This collaboration will provide access to cutting-edge \
                          technology, mentorship programs, and internship opportunities for our \
                          brightest minds."
                    .to_string(),
                excerpt: "We are excited to announce our new partnership with leading technology \
                          companies to bring more resources and opportunities to KEEA district \
                          students."
                    .to_string(),
                featured_image: "https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg"
                    .to_string(),
                author: "Sarah Mensah".to_string(),
                publish_date: date(2024, 1, 10),
                published: true,
            },
        ],
        programs: vec![
            Program {
                id: "1".to_string(),
                title: "Robotics Bootcamp".to_string(),
                description: "Intensive 2-week program teaching students Arduino programming and \
                              robot building"
                    .to_string(),
                image: "https://images.pexels.com/photos/8197455/pexels-photo-8197455.jpeg"
                    .to_string(),
                category: "Robotics".to_string(),
                date: date(2024, 1, 15),
                status: ProgramStatus::Completed,
            },
            Program {
                id: "2".to_string(),
                title: "Coding for Kids".to_string(),
                description: "Introduction to programming using Scratch and basic Python concepts"
                    .to_string(),
                image: "https://images.pexels.com/photos/574071/pexels-photo-574071.jpeg"
                    .to_string(),
                category: "Programming".to_string(),
                date: date(2024, 2, 1),
                status: ProgramStatus::Ongoing,
            },
            Program {
                id: "3".to_string(),
                title: "Tech Fair 2024".to_string(),
                description: "Annual technology fair showcasing student projects and innovations"
                    .to_string(),
                image: "https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg"
                    .to_string(),
                category: "Exhibition".to_string(),
                date: date(2024, 3, 15),
                status: ProgramStatus::Upcoming,
            },
        ],
        events: vec![
            Event {
                id: "1".to_string(),
                title: "STEM Workshop for Educators".to_string(),
                description: "Training workshop for teachers on integrating STEM education in \
                              their curriculum"
                    .to_string(),
                date: date(2024, 2, 20),
                time: "09:00 AM".to_string(),
                location: "KEEA Education Office".to_string(),
                registration_url: "https://forms.google.com/stem-educator-workshop".to_string(),
                image: "https://images.pexels.com/photos/8197455/pexels-photo-8197455.jpeg"
                    .to_string(),
                kind: EventKind::Upcoming,
            },
            Event {
                id: "2".to_string(),
                title: "Science Fair Competition".to_string(),
                description: "Annual science fair where students showcase their innovative projects"
                    .to_string(),
                date: date(2024, 3, 10),
                time: "10:00 AM".to_string(),
                location: "KEEA Community Center".to_string(),
                registration_url: "https://forms.google.com/science-fair-2024".to_string(),
                image: "https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg"
                    .to_string(),
                kind: EventKind::Upcoming,
            },
        ],
        team: vec![
            TeamMember {
                id: "1".to_string(),
                name: "Dr. Kwame Asante".to_string(),
                position: "Executive Director".to_string(),
                bio: "PhD in Computer Science with 15 years of experience in STEM education and \
                      community development."
                    .to_string(),
                image: "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg"
                    .to_string(),
                email: "kwame@stemkeea.org".to_string(),
            },
            TeamMember {
                id: "2".to_string(),
                name: "Sarah Mensah".to_string(),
                position: "Program Coordinator".to_string(),
                bio: "Masters in Educational Technology, passionate about bringing innovative \
                      learning methods to rural communities."
                    .to_string(),
                image: "https://images.pexels.com/photos/1181686/pexels-photo-1181686.jpeg"
                    .to_string(),
                email: "sarah@stemkeea.org".to_string(),
            },
            TeamMember {
                id: "3".to_string(),
                name: "Michael Osei".to_string(),
                position: "Technical Lead".to_string(),
                bio: "Software engineer and robotics enthusiast, dedicated to making technology \
                      accessible to all students."
                    .to_string(),
                image: "https://images.pexels.com/photos/1222271/pexels-photo-1222271.jpeg"
                    .to_string(),
                email: "michael@stemkeea.org".to_string(),
            },
        ],
        gallery: vec![
            GalleryImage {
                id: "1".to_string(),
                url: "https://images.pexels.com/photos/8197455/pexels-photo-8197455.jpeg"
                    .to_string(),
                title: "Students building robots".to_string(),
                program: "Robotics Bootcamp".to_string(),
                date: date(2024, 1, 15),
            },
            GalleryImage {
                id: "2".to_string(),
                url: "https://images.pexels.com/photos/574071/pexels-photo-574071.jpeg"
                    .to_string(),
                title: "Coding session".to_string(),
                program: "Coding for Kids".to_string(),
                date: date(2024, 2, 1),
            },
            GalleryImage {
                id: "3".to_string(),
                url: "https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg"
                    .to_string(),
                title: "Tech Fair presentation".to_string(),
                program: "Tech Fair 2024".to_string(),
                date: date(2024, 3, 15),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_seed_sizes() {
        let seed = default_seed();
        assert_eq!(seed.news.len(), 2);
        assert_eq!(seed.programs.len(), 3);
        assert_eq!(seed.events.len(), 2);
        assert_eq!(seed.team.len(), 3);
        assert_eq!(seed.gallery.len(), 3);
    }

    #[test]
    fn test_default_seed_slugs_match_titles() {
        for post in default_seed().news {
            assert_eq!(post.slug, crate::store::slugify(&post.title));
        }
    }

    #[test]
    fn test_load_seed_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"programs": [{{"id": "p1", "title": "Solar Kits", "description": "",
                "image": "", "category": "Energy", "date": "2024-05-01", "status": "upcoming"}}]}}"#
        )
        .unwrap();

        let seed = load_seed(file.path()).unwrap();
        assert_eq!(seed.programs.len(), 1);
        assert_eq!(seed.programs[0].status, ProgramStatus::Upcoming);
        assert!(seed.news.is_empty());
        assert!(seed.gallery.is_empty());
    }

    #[test]
    fn test_load_seed_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_seed(file.path()).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_load_seed_missing_file() {
        let err = load_seed(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
