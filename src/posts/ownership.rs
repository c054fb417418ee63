use crate::users::repo::User;

use super::repo::Post;

/// Why a mutation was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    NotOwner,
}

/// Outcome of the ownership check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

/// Ownership gate for update/delete. Pure: no side effects, same inputs give
/// the same decision. The caller resolves the post first; a missing post is a
/// not-found condition handled before this point, so the gate only ever sees
/// an existing resource.
pub fn authorize_mutation(actor: &User, post: &Post) -> Decision {
    if post.author_id == actor.id {
        Decision::Allow
    } else {
        Decision::Deny(DenyReason::NotOwner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;
    use uuid::Uuid;

    fn user(id: Uuid) -> User {
        User {
            id,
            email: format!("{id}@example.com"),
            username: id.to_string(),
            password_hash: "$argon2id$v=19$x".into(),
            is_active: true,
            created_at: OffsetDateTime::now_utc(),
            updated_at: None,
        }
    }

    fn post(author_id: Uuid) -> Post {
        Post {
            id: Uuid::new_v4(),
            title: "title".into(),
            content: "content".into(),
            is_published: false,
            author_id,
            created_at: OffsetDateTime::now_utc(),
            updated_at: None,
        }
    }

    #[test]
    fn owner_is_allowed() {
        let author = user(Uuid::new_v4());
        let post = post(author.id);
        assert_eq!(authorize_mutation(&author, &post), Decision::Allow);
    }

    #[test]
    fn non_owner_is_denied() {
        let author = user(Uuid::new_v4());
        let stranger = user(Uuid::new_v4());
        let post = post(author.id);
        assert_eq!(
            authorize_mutation(&stranger, &post),
            Decision::Deny(DenyReason::NotOwner)
        );
    }

    #[test]
    fn decision_is_deterministic() {
        let author = user(Uuid::new_v4());
        let stranger = user(Uuid::new_v4());
        let post = post(author.id);
        for _ in 0..3 {
            assert_eq!(authorize_mutation(&author, &post), Decision::Allow);
            assert_eq!(
                authorize_mutation(&stranger, &post),
                Decision::Deny(DenyReason::NotOwner)
            );
        }
    }
}
