//! Blog handlers.

use actix_web::{HttpResponse, web};

use bloglist_core::domain::{Blog, BlogDraft};
use bloglist_shared::dto::{BlogResponse, CreateBlogRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(blog: Blog) -> BlogResponse {
    BlogResponse {
        id: blog.id,
        title: blog.title,
        author: blog.author,
        url: blog.url,
        likes: blog.likes,
    }
}

/// GET /api/blogs
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let blogs = state.blogs.list_all().await?;
    let body: Vec<BlogResponse> = blogs.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/blogs
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateBlogRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validation runs before any persistence attempt
    let draft = BlogDraft {
        title: req.title,
        author: req.author,
        url: req.url,
        likes: req.likes,
    };
    let new_blog = draft.validate()?;

    let created = state.blogs.create(new_blog).await?;

    Ok(HttpResponse::Created().json(to_response(created)))
}

/// DELETE /api/blogs/{id}
pub async fn remove(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.blogs.delete_by_id(&id).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test, web};
    use async_trait::async_trait;
    use serde_json::{Value, json};

    use bloglist_core::domain::{Blog, NewBlog};
    use bloglist_core::error::RepoError;
    use bloglist_core::ports::BlogRepository;
    use bloglist_infra::database::InMemoryBlogRepository;

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    fn initial_blogs() -> Vec<NewBlog> {
        vec![
            NewBlog {
                title: "React patterns".to_string(),
                author: Some("Michael Chan".to_string()),
                url: "https://reactpatterns.com/".to_string(),
                likes: 7,
            },
            NewBlog {
                title: "Go To Statement Considered Harmful".to_string(),
                author: Some("Edsger W. Dijkstra".to_string()),
                url: "https://homepages.cwi.nl/~storm/teaching/reader/Dijkstra68.pdf".to_string(),
                likes: 5,
            },
        ]
    }

    /// Application state seeded with the fixture blogs.
    async fn seeded_state() -> AppState {
        let repo = Arc::new(InMemoryBlogRepository::new());
        for blog in initial_blogs() {
            repo.create(blog).await.unwrap();
        }
        AppState {
            blogs: repo,
            db: None,
        }
    }

    /// Current persisted records, straight from the repository.
    async fn blogs_in_db(state: &AppState) -> Vec<Blog> {
        state.blogs.list_all().await.unwrap()
    }

    macro_rules! test_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state.clone()))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_blogs_are_returned_as_json() {
        let state = seeded_state().await;
        let app = test_app!(state);

        let req = test::TestRequest::get().uri("/api/blogs").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let content_type = res
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(content_type.starts_with("application/json"));
    }

    #[actix_web::test]
    async fn test_all_blogs_are_returned() {
        let state = seeded_state().await;
        let app = test_app!(state);

        let req = test::TestRequest::get().uri("/api/blogs").to_request();
        let res = test::call_service(&app, req).await;
        let body: Vec<Value> = test::read_body_json(res).await;

        assert_eq!(body.len(), initial_blogs().len());
    }

    #[actix_web::test]
    async fn test_id_is_defined_for_each_blog() {
        let state = seeded_state().await;
        let app = test_app!(state);

        let req = test::TestRequest::get().uri("/api/blogs").to_request();
        let res = test::call_service(&app, req).await;
        let body: Vec<Value> = test::read_body_json(res).await;

        for blog in &body {
            let id = blog.get("id").and_then(Value::as_str).unwrap();
            assert!(!id.is_empty());
        }
    }

    #[actix_web::test]
    async fn test_a_blog_can_be_added() {
        let state = seeded_state().await;
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/blogs")
            .set_json(json!({
                "title": "React is cool",
                "author": "Lee",
                "url": "https://reactiscool.com/",
                "likes": 10,
            }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(res).await;
        assert!(created.get("id").and_then(Value::as_str).is_some());

        let blogs = blogs_in_db(&state).await;
        assert_eq!(blogs.len(), initial_blogs().len() + 1);

        let titles: Vec<&str> = blogs.iter().map(|b| b.title.as_str()).collect();
        assert!(titles.contains(&"React is cool"));
    }

    #[actix_web::test]
    async fn test_missing_likes_defaults_to_zero() {
        let state = seeded_state().await;
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/blogs")
            .set_json(json!({
                "title": "React is cool",
                "author": "Lee",
                "url": "https://reactiscool.com/",
            }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(res).await;
        assert_eq!(created.get("likes").and_then(Value::as_i64), Some(0));
    }

    #[actix_web::test]
    async fn test_blog_missing_title_and_url_is_not_added() {
        let state = seeded_state().await;
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/blogs")
            .set_json(json!({
                "author": "Lee",
                "likes": 10,
            }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(blogs_in_db(&state).await.len(), initial_blogs().len());
    }

    #[actix_web::test]
    async fn test_a_blog_can_be_deleted() {
        let state = seeded_state().await;
        let app = test_app!(state);

        let target = blogs_in_db(&state).await[0].clone();

        let req = test::TestRequest::delete()
            .uri(&format!("/api/blogs/{}", target.id))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let blogs = blogs_in_db(&state).await;
        assert_eq!(blogs.len(), initial_blogs().len() - 1);
        assert!(blogs.iter().all(|b| b.title != target.title));
    }

    #[actix_web::test]
    async fn test_deleting_unknown_id_still_succeeds() {
        let state = seeded_state().await;
        let app = test_app!(state);

        let req = test::TestRequest::delete()
            .uri("/api/blogs/000000000000000000000000")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        assert_eq!(blogs_in_db(&state).await.len(), initial_blogs().len());
    }

    /// Repository stub whose every operation reports a connection fault.
    struct FailingBlogRepository;

    #[async_trait]
    impl BlogRepository for FailingBlogRepository {
        async fn list_all(&self) -> Result<Vec<Blog>, RepoError> {
            Err(RepoError::Connection("connection reset".to_string()))
        }

        async fn create(&self, _new_blog: NewBlog) -> Result<Blog, RepoError> {
            Err(RepoError::Connection("connection reset".to_string()))
        }

        async fn delete_by_id(&self, _id: &str) -> Result<(), RepoError> {
            Err(RepoError::Connection("connection reset".to_string()))
        }
    }

    #[actix_web::test]
    async fn test_storage_fault_maps_to_server_error() {
        let state = AppState {
            blogs: Arc::new(FailingBlogRepository),
            db: None,
        };
        let app = test_app!(state);

        let req = test::TestRequest::get().uri("/api/blogs").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
