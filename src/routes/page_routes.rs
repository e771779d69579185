use actix_web::{web, HttpResponse};
use log::error;
use serde_json::json;

use crate::annotator::initialize;
use crate::config::Config;
use crate::error::PageError;
use crate::page::{annotate_html, read_page, CardSelectors};
use crate::types::Card;

fn error_response(error: PageError) -> HttpResponse{
    let body = json!({"error": error.to_string()});
    match error{
        PageError::InvalidName(_) => HttpResponse::BadRequest().json(body),
        PageError::NotFound(_) => HttpResponse::NotFound().json(body),
        PageError::InvalidSelector{ .. } | PageError::Io(_) => {
            error!("{}", error);
            HttpResponse::InternalServerError().json(body)
        }
    }
}

fn html_response(html: String) -> HttpResponse{
    HttpResponse::Ok().content_type(mime::TEXT_HTML_UTF_8).body(html)
}

async fn serve_page(
    name: web::Path<String>,
    config: web::Data<Config>,
    selectors: web::Data<CardSelectors>,
) -> HttpResponse{
    let name = name.into_inner();
    let pages_dir = config.pages_dir.clone();

    let source = match web::block(move || read_page(&pages_dir, &name)).await{
        Ok(Ok(source)) => source,
        Ok(Err(e)) => return error_response(e),
        Err(e) => {
            error!("page read was cancelled: {}", e);
            return HttpResponse::InternalServerError().json(json!({"error": "page read failed"}));
        }
    };

    html_response(annotate_html(&source, &selectors))
}

async fn annotate_document(body: String, selectors: web::Data<CardSelectors>) -> HttpResponse{
    html_response(annotate_html(&body, &selectors))
}

async fn reading_time(cards: web::Json<Vec<Card>>) -> HttpResponse{
    let mut cards = cards.into_inner();
    initialize(&mut cards);
    HttpResponse::Ok().json(cards)
}

pub fn page_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/pages/{name}")
            .route(web::get().to(serve_page))
    )
    .service(
        web::resource("/annotate")
            .route(web::post().to(annotate_document))
    )
    .service(
        web::resource("/reading-time")
            .route(web::post().to(reading_time))
    );
}

#[cfg(test)]
mod tests{
    use std::fs;
    use std::path::Path;

    use actix_web::{http::StatusCode, test, App};

    use super::*;
    use crate::types::Markers;

    fn config(pages_dir: &Path) -> Config{
        Config{
            bind_addr: "127.0.0.1:0".to_string(),
            pages_dir: pages_dir.to_path_buf(),
            markers: Markers::default(),
        }
    }

    fn test_app(pages_dir: &Path) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    >{
        let selectors = CardSelectors::compile(&Markers::default()).unwrap();
        App::new()
            .app_data(web::Data::new(config(pages_dir)))
            .app_data(web::Data::new(selectors))
            .configure(page_routes)
    }

    fn blog_page(words: usize) -> String{
        format!(
            r#"<html><body><div class="blog-card"><p class="blog-all-text">{}</p><span class="card-reading-time"></span></div></body></html>"#,
            vec!["word"; words].join(" ")
        )
    }

    #[actix_web::test]
    async fn serves_annotated_page(){
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), blog_page(700)).unwrap();
        let app = test::init_service(
            test_app(dir.path())
        ).await;

        let req = test::TestRequest::get().uri("/pages/index.html").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert!(std::str::from_utf8(&body).unwrap().contains("4 min read"));
    }

    #[actix_web::test]
    async fn page_errors_map_to_status(){
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            test_app(dir.path())
        ).await;

        let req = test::TestRequest::get().uri("/pages/missing.html").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get().uri("/pages/.env").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn annotates_posted_html(){
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            test_app(dir.path())
        ).await;

        let req = test::TestRequest::post().uri("/annotate").set_payload(blog_page(201)).to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert!(std::str::from_utf8(&body).unwrap().contains("2 min read"));
    }

    #[actix_web::test]
    async fn annotates_card_records(){
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            test_app(dir.path())
        ).await;

        let cards = vec![
            Card{ content: Some(vec!["w"; 1000].join(" ")), display: Some(String::new()) },
            Card{ content: Some("no display".to_string()), display: None },
            Card{ content: None, display: Some("untouched".to_string()) },
        ];
        let req = test::TestRequest::post().uri("/reading-time").set_json(&cards).to_request();
        let annotated: Vec<Card> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(annotated[0].display.as_deref(), Some("5 min read"));
        assert_eq!(annotated[1].display, None);
        assert_eq!(annotated[2].display.as_deref(), Some("untouched"));
    }
}
