use crate::helpers::spawn_app;
use hello_api::routes::RouteListing;

#[tokio::test]
async fn help_lists_the_named_routes() {
    let app = spawn_app().await;

    let response = app.get("/").await;
    assert_eq!(200, response.status().as_u16());

    let listing: Vec<RouteListing> = response.json().await.unwrap();
    let names: Vec<_> = listing.iter().map(|route| route.name.as_str()).collect();

    // the health check and the catch-all have no symbolic name
    assert_eq!(names, vec!["greeting", "math", "help"]);
}

#[tokio::test]
async fn help_describes_each_route() {
    let app = spawn_app().await;

    let listing: Vec<RouteListing> = app.get("/").await.json().await.unwrap();

    let greeting = &listing[0];
    assert_eq!(greeting.display_name, "Hello");
    assert_eq!(greeting.description, "Say a greeting for a name.");
    assert_eq!(greeting.method, "GET, POST, PUT");
    assert_eq!(greeting.pattern, "/hello, /hello/{name:.*}");

    let math = &listing[1];
    assert_eq!(math.display_name, "Calculator");
    assert_eq!(math.method, "GET");

    let help = &listing[2];
    assert_eq!(help.display_name, "The Help: this");
    assert_eq!(help.pattern, "/");
}
