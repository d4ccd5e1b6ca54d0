#[cfg(test)]
mod tests {
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use quill_core::domain::{Permission, Post};
    use quill_core::error::RepoError;
    use quill_core::ports::{BaseRepository, CommentRepository, PostRepository, UserRepository};

    use crate::database::entity::{comment, post, user};
    use crate::database::postgres_repo::{
        PostgresCommentRepository, PostgresPostRepository, PostgresUserRepository,
    };

    fn post_model(id: i64, title: &str) -> post::Model {
        let now = Utc::now();
        post::Model {
            id,
            author_id: 1,
            title: title.to_owned(),
            text: "Content".to_owned(),
            created_date: now.into(),
            published_date: None,
        }
    }

    #[tokio::test]
    async fn finds_post_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_model(3, "Test Post")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(3).await.unwrap();

        let post = result.unwrap();
        assert_eq!(post.id, 3);
        assert_eq!(post.title, "Test Post");
        assert!(post.published_date.is_none());
    }

    #[tokio::test]
    async fn insert_returns_the_assigned_id() {
        // A fresh post carries id 0, so save() takes the insert path and the
        // row comes back via RETURNING.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_model(7, "Fresh")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let saved = repo
            .save(Post::new(1, "Fresh".into(), "Content".into()))
            .await
            .unwrap();

        assert_eq!(saved.id, 7);
    }

    #[tokio::test]
    async fn updating_a_missing_post_maps_to_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let mut post = Post::new(1, "Gone".into(), "Content".into());
        post.id = 42;

        assert!(matches!(repo.save(post).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn deleting_a_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo: Box<dyn PostRepository> = Box::new(PostgresPostRepository::new(db));

        assert!(matches!(repo.delete(42).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn published_listing_maps_models_to_domain() {
        let now = Utc::now();
        let mut newer = post_model(2, "Newer");
        newer.published_date = Some(now.into());
        let mut older = post_model(1, "Older");
        older.published_date = Some((now - chrono::TimeDelta::days(1)).into());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![newer, older]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let posts = repo.list_published().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "Newer");
        assert!(posts[0].published_date.is_some());
    }

    #[tokio::test]
    async fn finds_comments_for_a_post() {
        let now = Utc::now();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                comment::Model {
                    id: 1,
                    post_id: 5,
                    author: "bob".to_owned(),
                    text: "First".to_owned(),
                    created_date: now.into(),
                    approved_comment: true,
                },
                comment::Model {
                    id: 2,
                    post_id: 5,
                    author: "eve".to_owned(),
                    text: "Second".to_owned(),
                    created_date: now.into(),
                    approved_comment: false,
                },
            ]])
            .into_connection();

        let repo = PostgresCommentRepository::new(db);

        let comments = repo.find_by_post(5).await.unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].author, "bob");
        assert!(!comments[1].approved_comment);
    }

    #[tokio::test]
    async fn user_permissions_column_parses_to_domain() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user::Model {
                id: 1,
                username: "alice".to_owned(),
                password_hash: "hash".to_owned(),
                permissions: "add_post,change_post".to_owned(),
                created_date: Utc::now().into(),
            }]])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        let user = repo.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(
            user.permissions,
            vec![Permission::AddPost, Permission::ChangePost]
        );
    }
}
