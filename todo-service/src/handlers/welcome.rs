use axum::response::Html;
use chrono::{DateTime, Local, TimeZone};

pub async fn welcome_page() -> Html<String> {
    Html(render_welcome(Local::now()))
}

fn render_welcome<Tz: TimeZone>(now: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        r#"
    <h1>Todo List API</h1>
    <h2>Available Endpoints:</h2>
    <ul>
      <li><code>GET /todos</code> - Get all todos</li>
      <li><code>POST /todos</code> - Create a new todo</li>
      <li><code>PUT /todos/:id</code> - Update a todo</li>
      <li><code>DELETE /todos/:id</code> - Delete a todo</li>
    </ul>
    <p>Current time: {}</p>
  "#,
        now.format("%-m/%-d/%Y, %-I:%M:%S %p")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn lists_every_endpoint() {
        let page = render_welcome(Utc::now());

        for endpoint in [
            "GET /todos",
            "POST /todos",
            "PUT /todos/:id",
            "DELETE /todos/:id",
        ] {
            assert!(page.contains(endpoint), "missing {endpoint}");
        }
    }

    #[test]
    fn shows_the_given_time() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert!(render_welcome(at).contains("Current time: 3/9/2024, 2:05:07 PM"));
    }
}
