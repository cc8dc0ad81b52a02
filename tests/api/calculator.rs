use crate::helpers::spawn_app;

const INVALID_OPERATION: &str =
    "Invalid operation! available operations are: add(+), multiply(*), mod(%), div(/)";

#[tokio::test]
async fn valid_operations_return_200_and_the_equation() {
    let app = spawn_app().await;

    let test_cases = vec![
        ("/add/3/4", "3 + 4 = 7"),
        ("/multiply/3", "3 * 1 = 3"),
        ("/mod/10/3", "10 % 3 = 1"),
        ("/div/7/2", "7 / 2 = 3"),
        ("/add/5", "5 + 0 = 5"),
        ("/ADD/-3/4", "-3 + 4 = 1"),
        ("/Div/-7/2", "-7 / 2 = -3"),
    ];

    for (path, expected) in test_cases {
        let response = app.get(path).await;

        assert_eq!(200, response.status().as_u16(), "GET {}", path);
        assert_eq!(expected, response.text().await.unwrap(), "GET {}", path);
    }
}

#[tokio::test]
async fn unknown_operation_returns_200_and_the_available_operations() {
    let app = spawn_app().await;

    for path in ["/foo/1/2", "/subtract/5"] {
        let response = app.get(path).await;

        assert_eq!(200, response.status().as_u16(), "GET {}", path);
        assert_eq!(INVALID_OPERATION, response.text().await.unwrap());
    }
}

#[tokio::test]
async fn division_by_zero_returns_400() {
    let app = spawn_app().await;

    for path in ["/div/1/0", "/mod/1/0"] {
        let response = app.get(path).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request for {}.",
            path
        );
    }
}

#[tokio::test]
async fn overflow_returns_400() {
    let app = spawn_app().await;

    let response = app.get("/multiply/2147483647/2").await;

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn operands_that_are_not_32_bit_integers_never_reach_the_calculator() {
    let app = spawn_app().await;

    let test_cases = vec![
        ("/add/x/1", "not a number"),
        ("/add/1.5/1", "not an integer"),
        ("/add/1/2/3", "too many operands"),
        ("/add1/1", "operator is not alphabetic"),
        ("/add/99999999999/1", "too large for an i32"),
    ];

    for (path, description) in test_cases {
        let response = app.get(path).await;

        assert_eq!(
            404,
            response.status().as_u16(),
            "The API did not return 404 when the url was {}.",
            description
        );
        assert_eq!("Invalid url", response.text().await.unwrap());
    }
}
