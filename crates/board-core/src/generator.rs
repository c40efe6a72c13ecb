//! Synthetic users and comments
//!
//! The generator owns the RNG and one id sequence per entity type. Ids are
//! never reused for the lifetime of a generator, including across
//! refreshes.

use std::rc::Rc;

use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{CountRange, GeneratorConfig};
use crate::fake_data;
use crate::models::{Comment, User};
use crate::sequence::IdSequence;

pub struct DataGenerator {
    config: GeneratorConfig,
    rng: StdRng,
    user_ids: IdSequence,
    comment_ids: IdSequence,
}

impl DataGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Deterministic generator for reproducible boards
    pub fn seeded(config: GeneratorConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GeneratorConfig, rng: StdRng) -> Self {
        Self {
            config,
            rng,
            user_ids: IdSequence::new(),
            comment_ids: IdSequence::new(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn generate_users(&mut self) -> Vec<Rc<User>> {
        let count = self.sample(self.config.users);

        (0..count)
            .map(|_| {
                let name = fake_data::fake_full_name(&mut self.rng);
                Rc::new(User::new(self.user_ids.next(), name))
            })
            .collect()
    }

    /// Comments authored by `users`, dated up to yesterday
    pub fn generate_comments(&mut self, users: &[Rc<User>]) -> Vec<Comment> {
        self.generate_comments_until(users, Local::now().date_naive())
    }

    /// Comments dated in `[start_date, today)`
    pub fn generate_comments_until(&mut self, users: &[Rc<User>], today: NaiveDate) -> Vec<Comment> {
        if users.is_empty() {
            tracing::warn!(target: "board::generator", "No users to author comments");
            return Vec::new();
        }

        let count = self.sample(self.config.comments);
        let mut comments = Vec::with_capacity(count as usize);

        for _ in 0..count {
            let word_count = self.sample(self.config.words) as usize;
            let body = fake_data::fake_sentence(&mut self.rng, word_count);
            let author = Rc::clone(&users[self.rng.gen_range(0..users.len())]);
            let created_at = fake_data::fake_date_between(&mut self.rng, self.config.start_date, today);
            let likes = self.sample(self.config.likes);
            let dislikes = self.sample(self.config.dislikes);

            comments.push(Comment::new(
                self.comment_ids.next(),
                body,
                author,
                created_at,
                likes,
                dislikes,
            ));
        }

        comments
    }

    fn sample(&mut self, range: CountRange) -> u32 {
        if range.min >= range.max {
            return range.min;
        }
        self.rng.gen_range(range.min..=range.max)
    }
}

impl Default for DataGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_user_count_in_range() {
        let mut generator = DataGenerator::seeded(GeneratorConfig::default(), 1);
        let range = generator.config().users;

        for _ in 0..50 {
            let users = generator.generate_users();
            assert!(range.contains(users.len() as u32));
        }
    }

    #[test]
    fn test_comment_fields_in_range() {
        let mut generator = DataGenerator::seeded(GeneratorConfig::default(), 2);
        let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let config = generator.config().clone();

        for _ in 0..20 {
            let users = generator.generate_users();
            let user_ids: HashSet<u64> = users.iter().map(|u| u.id).collect();
            let comments = generator.generate_comments_until(&users, today);

            assert!(config.comments.contains(comments.len() as u32));
            for comment in &comments {
                assert!(user_ids.contains(&comment.author_id()));
                assert!(config.likes.contains(comment.likes));
                assert!(config.dislikes.contains(comment.dislikes));
                assert!(comment.created_at >= start && comment.created_at < today);
                assert!(config.words.contains(comment.body.split_whitespace().count() as u32));
            }
        }
    }

    #[test]
    fn test_ids_increase_across_refreshes() {
        let mut generator = DataGenerator::seeded(GeneratorConfig::default(), 3);

        let first_users = generator.generate_users();
        let first_comments = generator.generate_comments(&first_users);
        let second_users = generator.generate_users();
        let second_comments = generator.generate_comments(&second_users);

        let user_ids: Vec<u64> = first_users.iter().chain(&second_users).map(|u| u.id).collect();
        assert!(user_ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(user_ids[0], 1);

        let comment_ids: Vec<u64> = first_comments
            .iter()
            .chain(&second_comments)
            .map(|c| c.id)
            .collect();
        assert!(comment_ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(comment_ids[0], 1);
    }

    #[test]
    fn test_seeded_generators_agree() {
        let mut a = DataGenerator::seeded(GeneratorConfig::default(), 77);
        let mut b = DataGenerator::seeded(GeneratorConfig::default(), 77);
        let today = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();

        let users_a = a.generate_users();
        let users_b = b.generate_users();
        assert_eq!(users_a, users_b);
        assert_eq!(
            a.generate_comments_until(&users_a, today),
            b.generate_comments_until(&users_b, today)
        );
    }

    #[test]
    fn test_no_users_no_comments() {
        let mut generator = DataGenerator::seeded(GeneratorConfig::default(), 5);
        assert!(generator.generate_comments(&[]).is_empty());
    }

    #[test]
    fn test_fixed_ranges() {
        let config = GeneratorConfig {
            users: CountRange::new(1, 1),
            comments: CountRange::new(3, 3),
            ..GeneratorConfig::default()
        };
        let mut generator = DataGenerator::seeded(config, 6);

        let users = generator.generate_users();
        assert_eq!(users.len(), 1);
        let comments = generator.generate_comments(&users);
        assert_eq!(comments.len(), 3);
        assert!(comments.iter().all(|c| c.author_id() == users[0].id));
    }
}
