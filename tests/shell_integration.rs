use axum_test::TestServer;
use coding_assistant::server;
use coding_assistant::ui::app::render_index;

/// Extract the inner text of the first `<h1>` element.
fn heading_text(html: &str) -> &str {
    let start = html.find("<h1").expect("document has a heading");
    let open_end = start + html[start..].find('>').expect("heading tag closes") + 1;
    let close = open_end + html[open_end..].find("</h1>").expect("heading has a closing tag");
    &html[open_end..close]
}

#[test]
fn heading_text_is_exact() {
    let html = render_index();
    assert_eq!(heading_text(&html), "Personal Coding Assistant");
}

#[test]
fn shell_has_one_heading_and_two_regions() {
    let html = render_index();
    assert_eq!(html.matches("<h1").count(), 1);
    assert_eq!(html.matches("<section").count(), 2);
}

#[test]
fn regions_render_in_order() {
    let html = render_index();

    let heading = html.find("<h1").expect("heading present");
    let explorer = html.find("id=\"file-explorer\"").expect("explorer region present");
    let chat = html.find("id=\"chat\"").expect("chat region present");

    assert!(heading < explorer, "heading must precede the explorer region");
    assert!(explorer < chat, "explorer region must precede the chat region");
}

#[test]
fn container_is_width_bounded() {
    let html = render_index();
    assert!(html.contains("max-w-5xl"));
    assert!(html.contains("mx-auto"));
}

#[test]
fn render_is_deterministic() {
    // The shell reads no external state, so every render is identical.
    assert_eq!(render_index(), render_index());
}

#[tokio::test]
async fn index_serves_rendered_shell() {
    let server = TestServer::new(server::router("static")).expect("test server");

    let res = server.get("/").await;
    res.assert_status_ok();

    let content_type = res
        .headers()
        .get("content-type")
        .expect("content-type header")
        .to_str()
        .expect("ascii header");
    assert!(content_type.starts_with("text/html"));

    let html = res.text();
    assert_eq!(heading_text(&html), "Personal Coding Assistant");
    assert!(html.contains("id=\"file-explorer\""));
    assert!(html.contains("id=\"chat\""));
}

#[tokio::test]
async fn static_assets_are_served() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("app.css"), "body { margin: 0; }").expect("write asset");

    let static_dir = dir.path().to_str().expect("utf-8 path");
    let server = TestServer::new(server::router(static_dir)).expect("test server");

    let res = server.get("/static/app.css").await;
    res.assert_status_ok();
    assert!(res.text().contains("margin"));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let server = TestServer::new(server::router("static")).expect("test server");

    let res = server.get("/sessions").await;
    res.assert_status_not_found();
}
